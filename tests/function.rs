#[macro_use]
mod common;

#[cfg(test)]
mod function {
    tests! {
        print in function is OK
        "<fn foo>"
        "<native fn clock>"
    }

    tests! {
        parameters in function is OK
        "0"
        "1"
        "3"
        "6"
    }

    tests! {
        recursion in function is OK
        "21"
    }

    tests! {
        local_recursion in function is OK
        "21"
    }

    tests! {
        empty_body in function is OK
        "nil"
    }

    tests! {
        missing_arguments in function is ERR(70)
        "Expected 2 arguments but got 1."
        "[line 2]"
    }

    tests! {
        extra_arguments in function is ERR(70)
        "Expected 2 arguments but got 4."
        "[line 5]"
    }
}
