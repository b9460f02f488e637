use wasm_bindgen::prelude::*;

/// Validates a policy table TOML string
///
/// Returns Ok(()) if the table loads, or the error message if it does not.
#[wasm_bindgen]
pub fn validate_policy(policy_toml: &str) -> Result<(), JsValue> {
    core_access::PolicyTable::from_toml(policy_toml)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&format!("Invalid policy table: {}", e)))
}

/// Validates a policy table TOML string with precise error reporting
///
/// Resolves to `{ valid, message, line, column }` so editors can highlight
/// the offending location.
#[wasm_bindgen]
pub fn validate_policy_table(policy_toml: &str) -> Result<JsValue, JsValue> {
    let diagnostic = access_engine::validate_policy_table(policy_toml);
    Ok(serde_wasm_bindgen::to_value(&diagnostic)?)
}
