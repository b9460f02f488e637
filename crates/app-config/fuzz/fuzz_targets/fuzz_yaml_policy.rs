//! Fuzz target for YamlParser::parse
//!
//! Arbitrary YAML must never panic the parser, and any table it accepts
//! must satisfy the table invariants.

#![no_main]

use app_config::{PolicyParser, YamlParser};
use core_access::PolicyError;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    match YamlParser.parse(data) {
        Ok(table) => {
            assert!(table.validate().is_ok(), "Parsed table failed validation");
            let _ = table.entry_count();
        }
        Err(PolicyError::Serialization(_)) => {}
        Err(other) => panic!("YAML errors are reported as Serialization, got {other:?}"),
    }
});
