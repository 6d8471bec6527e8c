//! WASM bridge for Mobile Builder: exposes the editing session to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host page owns the DOM
//! and persistence; it pushes source text in, pulls HTML projections out,
//! and forwards clicks as box paths or outline ids.

use mb_core::{DEVICES, DeviceConfig, WidgetId, device_by_id, lint_document, parse_document};
use mb_editor::{ScreenSet, SelectionEvent};
use mb_render::OutlineEvent;
use wasm_bindgen::prelude::*;

/// The WASM-facing editor controller.
///
/// Holds the screen set and, through it, the active editing session. All
/// interaction from the page goes through this struct.
#[wasm_bindgen]
pub struct MbCanvas {
    screens: ScreenSet,
}

#[wasm_bindgen]
impl MbCanvas {
    /// Create a controller previewing on `device_id`. Unknown ids fall back
    /// to the default device.
    #[wasm_bindgen(constructor)]
    pub fn new(device_id: &str) -> Self {
        console_error_panic_hook_setup();
        Self {
            screens: ScreenSet::new(device_or_default(device_id)),
        }
    }

    /// Restore screens from their JSON envelope. Returns `false` and keeps
    /// the current screens if the JSON is malformed.
    pub fn load_screens(&mut self, json: &str) -> bool {
        let device = *self.screens.session().device();
        match ScreenSet::from_json(json, device) {
            Ok(set) => {
                self.screens = set;
                true
            }
            Err(e) => {
                log::warn!("screens not loaded: {e}");
                false
            }
        }
    }

    // ─── Source text ─────────────────────────────────────────────────────

    /// Set the JSON source of the active screen. Returns `true` on success,
    /// `false` on parse error (the previous tree stays on the canvas).
    pub fn set_text(&mut self, text: &str) -> bool {
        self.screens.session_mut().set_text(text).is_ok()
    }

    pub fn get_text(&self) -> String {
        self.screens.session().text().to_string()
    }

    /// Message of the last failed parse, or empty.
    pub fn last_error(&self) -> String {
        self.screens
            .session()
            .last_error()
            .unwrap_or_default()
            .to_string()
    }

    // ─── Projections ─────────────────────────────────────────────────────

    pub fn render_html(&self) -> String {
        self.screens.session().render_html()
    }

    pub fn outline_html(&self) -> String {
        self.screens.session().outline_html()
    }

    pub fn outline_json(&self) -> String {
        serde_json::to_string(&self.screens.session().outline()).unwrap_or_else(|_| "[]".into())
    }

    // ─── Selection ───────────────────────────────────────────────────────

    /// Select by widget id. Returns `false` if no such node exists.
    pub fn select(&mut self, id: &str) -> bool {
        self.screens.session_mut().select_str(id)
    }

    pub fn clear_selection(&mut self) {
        self.screens.session_mut().handle(SelectionEvent::Clear);
    }

    /// Currently selected widget id, or empty.
    pub fn selected_id(&self) -> String {
        self.screens
            .session()
            .selected()
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    /// Forward a canvas click addressed by child indices from the surface
    /// root. Returns the selected id afterwards, or empty.
    pub fn click_path(&mut self, path: &[u32]) -> String {
        let path = path.iter().map(|&i| i as usize).collect();
        self.screens
            .session_mut()
            .handle(SelectionEvent::Canvas { path })
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    /// Flip an outline node's expanded state. Unknown ids are ignored.
    pub fn toggle_outline(&mut self, id: &str) -> bool {
        let Some(id) = WidgetId::lookup(id) else {
            return false;
        };
        self.screens
            .session_mut()
            .handle(SelectionEvent::Outline(OutlineEvent::Toggle(id)));
        true
    }

    // ─── Devices ─────────────────────────────────────────────────────────

    pub fn set_device(&mut self, id: &str) -> bool {
        self.screens.session_mut().set_device(id)
    }

    pub fn device_id(&self) -> String {
        self.screens.session().device().id.to_string()
    }

    pub fn devices_json(&self) -> String {
        devices_json()
    }

    // ─── Screens ─────────────────────────────────────────────────────────

    pub fn has_unsaved_changes(&self) -> bool {
        self.screens.session().has_unsaved_changes()
    }

    /// Write the active session back to its screen. Returns `false` if the
    /// source does not parse.
    pub fn save(&mut self) -> bool {
        match self.screens.save_active() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("save failed: {e}");
                false
            }
        }
    }

    /// Add a screen and activate it. Returns its id.
    pub fn add_screen(&mut self, name: Option<String>) -> String {
        self.screens.add_screen(name.as_deref())
    }

    pub fn activate_screen(&mut self, id: &str) -> bool {
        self.screens.activate(id)
    }

    pub fn delete_screen(&mut self, id: &str) -> bool {
        self.screens.delete_screen(id)
    }

    pub fn rename_screen(&mut self, id: &str, name: &str) -> bool {
        self.screens.rename(id, name)
    }

    pub fn active_screen_id(&self) -> String {
        self.screens.active().id.clone()
    }

    /// All screens as their JSON envelope. Throws if serialization fails,
    /// so the host never persists a truncated list.
    pub fn screens_json(&self) -> Result<String, JsValue> {
        self.screens.to_json().map_err(|e| {
            log::warn!("screens not serialized: {e}");
            JsValue::from_str(&e.to_string())
        })
    }
}

fn device_or_default(id: &str) -> DeviceConfig {
    device_by_id(id).copied().unwrap_or_default()
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Mobile Builder WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone functions (no canvas needed) ─────────────────────────────

/// Validate widget JSON. Returns JSON: `{"ok":true}` or `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn validate(source: &str) -> String {
    let result = match parse_document(source) {
        Ok(_) => serde_json::json!({ "ok": true }),
        Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }),
    };
    result.to_string()
}

/// Lint widget JSON. Returns `{"ok":true,"diagnostics":[...]}` or
/// `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn lint(source: &str) -> String {
    let result = match parse_document(source) {
        Ok(root) => serde_json::json!({ "ok": true, "diagnostics": lint_document(&root) }),
        Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }),
    };
    result.to_string()
}

/// Preview devices as JSON objects with id, name, width, height, pixelRatio.
#[wasm_bindgen]
pub fn devices_json() -> String {
    serde_json::to_string(&DEVICES).unwrap_or_else(|_| "[]".into())
}

/// Preview device ids, in menu order.
#[wasm_bindgen]
pub fn device_ids() -> js_sys::Array {
    DEVICES.iter().map(|d| JsValue::from_str(d.id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validate_reports_errors_as_json() {
        assert_eq!(validate(r#"{"id": "w_ok", "type": "Text"}"#), r#"{"ok":true}"#);
        let bad: serde_json::Value = serde_json::from_str(&validate("[1, 2]")).unwrap();
        assert_eq!(bad["ok"], false);
        assert!(bad["error"].as_str().unwrap().contains("an array"));
    }

    #[test]
    fn lint_lists_diagnostics() {
        let out: serde_json::Value =
            serde_json::from_str(&lint(r#"{"id": "w_frob", "type": "Frobnicator"}"#)).unwrap();
        assert_eq!(out["diagnostics"][0]["rule"], "unknown-type");
        assert_eq!(out["diagnostics"][0]["nodeId"], "w_frob");
    }

    #[test]
    fn devices_listing() {
        let list: serde_json::Value = serde_json::from_str(&devices_json()).unwrap();
        assert_eq!(list.as_array().map(Vec::len), Some(DEVICES.len()));
        assert_eq!(list[0]["pixelRatio"], 3.0);
    }

    #[test]
    fn canvas_session_flow() {
        let mut canvas = MbCanvas::new("pixel-7");
        assert_eq!(canvas.device_id(), "pixel-7");
        assert!(canvas.select("t1"));
        assert_eq!(canvas.selected_id(), "t1");

        assert!(!canvas.set_text("{"));
        assert!(!canvas.last_error().is_empty());
        assert!(canvas.set_text(r#"{"id": "w_root", "type": "Center"}"#));
        assert_eq!(canvas.selected_id(), "");
        assert!(canvas.has_unsaved_changes());
        assert!(canvas.save());

        let second = canvas.add_screen(None);
        assert_eq!(canvas.active_screen_id(), second);
        let screens: serde_json::Value = serde_json::from_str(&canvas.screens_json().unwrap()).unwrap();
        assert_eq!(screens[0]["layout"]["id"], "w_root");
        assert!(canvas.delete_screen(&second));
    }

    #[test]
    fn unknown_device_falls_back() {
        let canvas = MbCanvas::new("toaster");
        assert_eq!(canvas.device_id(), DeviceConfig::default().id);
    }
}
