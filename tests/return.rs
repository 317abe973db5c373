#[macro_use]
mod common;

#[cfg(test)]
mod _return {
    tests! {
        after_if in return is OK
        "ok"
    }

    tests! {
        after_while in return is OK
        "ok"
    }

    tests! {
        return_nil_if_no_value in return is OK
        "nil"
    }

    tests! {
        in_method in return is OK
        "ok"
    }

    tests! {
        from_loop in return is OK
        "3"
    }

    tests! {
        at_top_level in return is ERR(65)
        "[line 1] Error at 'return': Can't return from top-level code."
    }
}
