#[macro_use]
mod common;

#[cfg(test)]
mod constructor {
    tests! {
        arguments in constructor is OK
        "init"
        "1"
        "2"
    }

    tests! {
        call_init_explicitly in constructor is OK
        "Foo.init(one)"
        "Foo.init(two)"
        "<instance Foo>"
        "init"
    }

    tests! {
        default in constructor is OK
        "<instance Foo>"
    }

    tests! {
        early_return in constructor is OK
        "init"
        "<instance Foo>"
    }

    tests! {
        return_in_nested_function in constructor is OK
        "bar"
        "<instance Foo>"
    }

    tests! {
        return_value in constructor is ERR(65)
        "[line 3] Error at 'return': Can't return a value from an initializer."
    }

    tests! {
        default_arguments in constructor is ERR(70)
        "Expected 0 arguments but got 3."
        "[line 2]"
    }

    tests! {
        missing_arguments in constructor is ERR(70)
        "Expected 2 arguments but got 1."
        "[line 4]"
    }
}
