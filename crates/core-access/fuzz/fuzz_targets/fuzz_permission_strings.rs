//! Fuzz target for the string-keyed permission queries
//!
//! Splits the input into role, module and action and checks that the
//! checker never panics and denies anything it cannot parse.

#![no_main]

use core_access::{default_table, Action, Module, Permission, Role};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let mut parts = data.splitn(3, '\n');
    let role = parts.next().unwrap_or_default();
    let module = parts.next().unwrap_or_default();
    let action = parts.next().unwrap_or_default();

    let checker = default_table().checker();
    let allowed = checker.has_permission_str(role, module, action);

    let recognized = Role::parse(role).is_some()
        && Module::parse(module).is_some()
        && Action::parse(action).is_some();
    if !recognized {
        assert!(!allowed, "Unrecognized input was granted");
    }

    let _ = checker.accessible_modules_str(role);
    let _ = Permission::parse(data);
    let _ = data.parse::<Permission>();
});
