//! Fuzz target for ClinicConfig::from_toml_str

#![no_main]

use access_engine::MAX_NAVIGATION_ENTRIES;
use app_config::ClinicConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(config) = ClinicConfig::from_toml_str(data) {
        assert!(config.policy.validate().is_ok());
        assert!(config.navigation.len() <= MAX_NAVIGATION_ENTRIES);
        assert!(config.login_path.starts_with('/'));
        assert!(config.landing_path.starts_with('/'));
    }
});
