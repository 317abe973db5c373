#[macro_use]
mod common;

#[cfg(test)]
mod field {
    tests! {
        many in field is OK
        "one"
        "two"
    }

    tests! {
        method_shadowed_by_field in field is OK
        "method"
        "field"
    }

    tests! {
        set_returns_value in field is OK
        "set"
    }

    tests! {
        get_on_bool in field is ERR(70)
        "Only instances have properties."
        "[line 1]"
    }

    tests! {
        get_on_function in field is ERR(70)
        "Only instances have properties."
        "[line 2]"
    }

    tests! {
        set_on_bool in field is ERR(70)
        "Only instances have fields."
        "[line 1]"
    }

    tests! {
        undefined in field is ERR(70)
        "Undefined property 'bar'."
        "[line 3]"
    }
}
