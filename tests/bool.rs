#[macro_use]
mod common;

#[cfg(test)]
mod bool {
    tests! {
        equality in bool is OK
        "true"
        "false"
        "false"
        "false"
        "false"
        "false"
        "true"
    }

    tests! {
        not in bool is OK
        "false"
        "true"
        "true"
    }
}
