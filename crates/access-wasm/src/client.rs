use access_engine::{evaluate_request, AccessDecision, NavigationFilter, NavigationMenu};
use core_access::{PolicyTable, Role};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// WASM-facing permission checker for the clinic dashboard
///
/// Owns its policy table and navigation menu. Both are fixed once the client
/// is constructed; build a new client to load different configuration.
#[wasm_bindgen]
pub struct WasmAccessClient {
    table: PolicyTable,
    menu: NavigationMenu,
}

#[wasm_bindgen]
impl WasmAccessClient {
    /// Client over the built-in clinic policy table and menu
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmAccessClient {
        WasmAccessClient {
            table: core_access::clinic_policy_table(),
            menu: NavigationMenu::clinic_default(),
        }
    }

    /// Client over a policy table given as TOML, with the default menu
    #[wasm_bindgen]
    pub fn from_policy_toml(policy_toml: &str) -> Result<WasmAccessClient, JsValue> {
        let table = PolicyTable::from_toml(policy_toml)
            .map_err(|e| JsValue::from_str(&format!("Invalid policy table: {}", e)))?;

        Ok(WasmAccessClient {
            table,
            menu: NavigationMenu::clinic_default(),
        })
    }

    /// Replace the master navigation list with a JSON array of entries
    #[wasm_bindgen(js_name = withNavigationJson)]
    pub fn with_navigation_json(self, navigation_json: &str) -> Result<WasmAccessClient, JsValue> {
        let menu: NavigationMenu = serde_json::from_str(navigation_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid navigation JSON: {}", e)))?;

        Ok(WasmAccessClient { menu, ..self })
    }

    // ========================================
    // PERMISSION QUERIES
    // ========================================

    /// Whether `role` may perform `action` on `module`; unknown names are denied
    #[wasm_bindgen(js_name = hasPermission)]
    pub fn has_permission(&self, role: &str, module: &str, action: &str) -> bool {
        self.table.checker().has_permission_str(role, module, action)
    }

    /// Whether `role` may view `module`
    #[wasm_bindgen(js_name = canAccessModule)]
    pub fn can_access_module(&self, role: &str, module: &str) -> bool {
        self.table.checker().can_access_module_str(role, module)
    }

    /// Module names the role has any entry for, in policy order
    #[wasm_bindgen(js_name = accessibleModules)]
    pub fn accessible_modules(&self, role: &str) -> Result<JsValue, JsValue> {
        let modules: Vec<&str> = self
            .table
            .checker()
            .accessible_modules_str(role)
            .into_iter()
            .map(|module| module.as_str())
            .collect();

        serde_wasm_bindgen::to_value(&modules)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Navigation entries visible to `role`, in menu order
    #[wasm_bindgen(js_name = menuItems)]
    pub fn menu_items(&self, role: &str) -> Result<JsValue, JsValue> {
        let filter = NavigationFilter::new(&self.menu, self.table.checker());
        let items = filter.menu_items_for_role_str(role);

        serde_wasm_bindgen::to_value(&items)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Role names the dashboard may assign
    #[wasm_bindgen]
    pub fn roles() -> Result<JsValue, JsValue> {
        let names: Vec<&str> = Role::ALL.iter().map(|role| role.as_str()).collect();
        serde_wasm_bindgen::to_value(&names)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    // ========================================
    // DECISIONS
    // ========================================

    /// Evaluates a request and returns `{ allowed, reasons, evaluation_time_us }`
    #[wasm_bindgen(js_name = evaluateRequest)]
    pub fn evaluate_request(
        &self,
        role: &str,
        module: &str,
        action: &str,
    ) -> Result<JsValue, JsValue> {
        let start = now_ms();
        let mut decision = evaluate_request(&self.table.checker(), role, module, action);
        decision.evaluation_time_us = elapsed_us(start);

        serde_wasm_bindgen::to_value(&decision)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Batch evaluation of `[{ role, module, action }, ...]`
    ///
    /// Total time is reported on the last decision.
    #[wasm_bindgen(js_name = evaluateBatch)]
    pub fn evaluate_batch(&self, requests_json: &str) -> Result<JsValue, JsValue> {
        #[derive(Deserialize)]
        struct BatchRequest {
            role: String,
            module: String,
            action: String,
        }

        let start = now_ms();

        let requests: Vec<BatchRequest> = serde_json::from_str(requests_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid requests JSON: {}", e)))?;

        let checker = self.table.checker();
        let mut decisions: Vec<AccessDecision> = requests
            .iter()
            .map(|req| evaluate_request(&checker, &req.role, &req.module, &req.action))
            .collect();

        if let Some(last) = decisions.last_mut() {
            last.evaluation_time_us = elapsed_us(start);
        }
        tracing::debug!(count = decisions.len(), "evaluated request batch");

        serde_wasm_bindgen::to_value(&decisions)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl Default for WasmAccessClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmAccessClient {
    /// Policy table backing this client
    pub fn table(&self) -> &PolicyTable {
        &self.table
    }

    /// Master navigation list backing this client
    pub fn menu(&self) -> &NavigationMenu {
        &self.menu
    }
}

// performance.now() in milliseconds, 0.0 outside a browser
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn elapsed_us(start_ms: f64) -> u64 {
    // performance.now() returns milliseconds; the cast saturates on negatives
    ((now_ms() - start_ms) * 1000.0) as u64
}
