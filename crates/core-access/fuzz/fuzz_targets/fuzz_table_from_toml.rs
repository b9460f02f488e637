//! Fuzz target for PolicyTable::from_toml
//!
//! Arbitrary TOML must never panic the loader, and any table it accepts
//! must already satisfy the table invariants.

#![no_main]

use core_access::{Action, PolicyTable, Role};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(table) = PolicyTable::from_toml(data) {
        assert!(table.validate().is_ok(), "Loaded table failed validation");

        for role in Role::ALL {
            let policy = table.policy(role);
            for entry in policy.entries() {
                if entry.action_count() > 0 {
                    assert!(entry.allows(Action::View), "Grant without view accepted");
                }
            }
        }

        // Whatever was accepted must export and load back unchanged
        let exported = table.to_toml().expect("export of a loaded table");
        let reloaded = PolicyTable::from_toml(&exported).expect("reload of exported table");
        assert_eq!(reloaded, table);
    }
});
