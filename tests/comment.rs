#[macro_use]
mod common;

#[cfg(test)]
mod comment {
    tests! {
        line_at_eof in comment is OK
        "ok"
    }

    tests! {
        only_line_comment in comment is OK
    }

    tests! {
        surrounded_by_comments in comment is OK
        "ok"
    }
}
