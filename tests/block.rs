#[macro_use]
mod common;

#[cfg(test)]
mod block {
    tests! {
        empty in block is OK
    }

    tests! {
        scope in block is OK
        "inner"
        "outer"
    }
}
