#[macro_use]
mod common;

#[cfg(test)]
mod variable {
    tests! {
        early_bound in variable is OK
        "outer"
        "outer"
    }

    tests! {
        in_middle_of_block in variable is OK
        "a"
        "a b"
        "a c"
        "a b d"
    }

    tests! {
        local_from_method in variable is OK
        "variable"
    }

    tests! {
        redeclare_global in variable is OK
        "nil"
    }

    tests! {
        redefine_global in variable is OK
        "2"
    }

    tests! {
        shadow_global in variable is OK
        "shadow"
        "global"
    }

    tests! {
        shadow_local in variable is OK
        "shadow"
        "local"
    }

    tests! {
        uninitialized in variable is OK
        "nil"
    }

    tests! {
        unreached_undefined in variable is OK
        "ok"
    }

    tests! {
        use_global_in_initializer in variable is OK
        "value"
    }

    tests! {
        collide_with_parameter in variable is ERR(65)
        "[line 2] Error at 'a': Already a variable with this name in this scope."
    }

    tests! {
        duplicate_local in variable is ERR(65)
        "[line 3] Error at 'a': Already a variable with this name in this scope."
    }

    tests! {
        duplicate_parameter in variable is ERR(65)
        "[line 1] Error at 'arg': Already a variable with this name in this scope."
    }

    tests! {
        undefined_global in variable is ERR(70)
        "Undefined variable 'notDefined'."
        "[line 1]"
    }

    tests! {
        undefined_local in variable is ERR(70)
        "Undefined variable 'notDefined'."
        "[line 2]"
    }

    tests! {
        use_local_in_initializer in variable is ERR(65)
        "[line 3] Error at 'a': Cannot read local variable in its own initializer."
    }

    tests! {
        use_nil_as_var in variable is ERR(65)
        "[line 1] Error at 'nil': Expect variable name."
    }

    tests! {
        use_this_as_var in variable is ERR(65)
        "[line 1] Error at 'this': Expect variable name."
    }
}
