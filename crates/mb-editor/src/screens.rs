//! In-memory screen set.
//!
//! Each screen is a named widget tree. Exactly one screen is active at a
//! time; its layout lives in the [`SyncEngine`] while it is being edited
//! and is written back on [`ScreenSet::save_active`]. Persistence is the
//! host's job: the set serializes to and from the JSON screen envelope.

use crate::sync::SyncEngine;
use mb_core::*;
use serde::{Deserialize, Serialize};

/// One screen in the JSON envelope the host persists. Field names match
/// the stored rows (`updated_at` stays snake case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub layout: WidgetNode,
    /// Revision of the last write, from the set's logical clock.
    #[serde(default)]
    pub updated_at: u64,
}

/// Layout of a freshly created screen: a white, centered container with a
/// grey hint text.
pub fn default_layout() -> WidgetNode {
    let hint = WidgetNode::new(
        WidgetId::intern("t1"),
        WidgetKind::Text(TextParams {
            text: "Start Building...".into(),
            font_size: Some(20.0),
            color: Some(Color::rgb(0x9C, 0xA3, 0xAF)),
            ..Default::default()
        }),
    );
    WidgetNode::new(
        WidgetId::intern("root"),
        WidgetKind::Container {
            params: ContainerParams {
                color: Some(Color::WHITE),
                alignment: Some(Alignment::Center),
                ..Default::default()
            },
            child: Some(Box::new(hint)),
        },
    )
}

pub struct ScreenSet {
    screens: Vec<Screen>,
    active: usize,
    session: SyncEngine,
    clock: u64,
    next_id: u64,
}

impl ScreenSet {
    /// A set with one default screen, active.
    pub fn new(device: DeviceConfig) -> Self {
        Self::from_screens(Vec::new(), device)
    }

    /// Adopt existing screens; the first becomes active. An empty list gets
    /// one default screen.
    pub fn from_screens(screens: Vec<Screen>, device: DeviceConfig) -> Self {
        let clock = screens.iter().map(|s| s.updated_at).max().unwrap_or(0);
        let layout = screens
            .first()
            .map(|s| s.layout.clone())
            .unwrap_or_else(default_layout);
        let mut set = Self {
            next_id: screens.len() as u64 + 1,
            screens,
            active: 0,
            session: SyncEngine::new(layout, device),
            clock,
        };
        if set.screens.is_empty() {
            set.add_screen(None);
        }
        set
    }

    /// Parse a JSON array of screens. Each layout is held to the same rules
    /// as [`parse_document`], so duplicate ids reject the whole envelope.
    pub fn from_json(text: &str, device: DeviceConfig) -> DocumentResult<Self> {
        let screens: Vec<Screen> = serde_json::from_str(text)?;
        Ok(Self::from_screens(screens, device))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.screens)
    }

    // ─── Screen CRUD ─────────────────────────────────────────────────────

    /// Create a screen with the default layout and make it active. Returns
    /// the new screen's id.
    pub fn add_screen(&mut self, name: Option<&str>) -> String {
        let id = self.fresh_id();
        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| format!("Screen {}", self.screens.len() + 1));
        let updated_at = self.tick();
        log::debug!("add screen {id} ({name})");
        self.screens.push(Screen {
            id: id.clone(),
            name,
            description: None,
            layout: default_layout(),
            updated_at,
        });
        self.activate_index(self.screens.len() - 1);
        id
    }

    /// Delete a screen. The last remaining screen cannot be deleted. If the
    /// active screen goes, the first remaining one is activated.
    pub fn delete_screen(&mut self, id: &str) -> bool {
        if self.screens.len() <= 1 {
            log::debug!("refusing to delete the last screen");
            return false;
        }
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.screens.remove(index);
        if index == self.active {
            self.activate_index(0);
        } else if index < self.active {
            self.active -= 1;
        }
        true
    }

    /// Make `id` the active screen, loading its saved layout into the
    /// session. Unsaved edits of the previous screen are discarded.
    pub fn activate(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.activate_index(index);
                true
            }
            None => false,
        }
    }

    /// Write the session's source back to the active screen.
    ///
    /// # Errors
    /// The current source text does not parse; nothing is written.
    pub fn save_active(&mut self) -> DocumentResult<()> {
        let layout = parse_document(self.session.text())?;
        let updated_at = self.tick();
        let screen = &mut self.screens[self.active];
        screen.layout = layout;
        screen.updated_at = updated_at;
        self.session.mark_saved();
        Ok(())
    }

    pub fn rename(&mut self, id: &str, name: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let updated_at = self.tick();
        let screen = &mut self.screens[index];
        screen.name = name.to_string();
        screen.updated_at = updated_at;
        true
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn active(&self) -> &Screen {
        &self.screens[self.active]
    }

    pub fn session(&self) -> &SyncEngine {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SyncEngine {
        &mut self.session
    }

    // ─── Internals ───────────────────────────────────────────────────────

    fn activate_index(&mut self, index: usize) {
        self.active = index;
        self.session.load(self.screens[index].layout.clone());
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.screens.iter().position(|s| s.id == id)
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = format!("screen_{}", self.next_id);
            self.next_id += 1;
            if self.index_of(&id).is_none() {
                return id;
            }
        }
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_with_default_screen() {
        let set = ScreenSet::new(DeviceConfig::default());
        assert_eq!(set.screens().len(), 1);
        assert_eq!(set.active().name, "Screen 1");
        assert_eq!(set.session().tree(), &default_layout());
        assert!(!set.session().has_unsaved_changes());
    }

    #[test]
    fn default_layout_shape() {
        let root = default_layout();
        let WidgetKind::Container { params, child } = &root.kind else {
            panic!("default layout should be a Container");
        };
        assert_eq!(params.alignment, Some(Alignment::Center));
        assert_eq!(child.as_ref().and_then(|c| c.text_content()), Some("Start Building..."));
    }

    #[test]
    fn cannot_delete_last_screen() {
        let mut set = ScreenSet::new(DeviceConfig::default());
        let only = set.active().id.clone();
        assert!(!set.delete_screen(&only));
        assert_eq!(set.screens().len(), 1);
    }

    #[test]
    fn deleting_active_reactivates_first() {
        let mut set = ScreenSet::new(DeviceConfig::default());
        let first = set.active().id.clone();
        let second = set.add_screen(Some("Details"));
        assert_eq!(set.active().id, second);
        assert!(set.delete_screen(&second));
        assert_eq!(set.active().id, first);
        assert!(!set.delete_screen("screen_404"));
    }

    #[test]
    fn activation_clears_selection_and_discards_edits() {
        let mut set = ScreenSet::new(DeviceConfig::default());
        let first = set.active().id.clone();
        set.add_screen(None);
        set.session_mut().select_str("t1");
        set.session_mut()
            .set_text(r#"{"id": "sc_changed", "type": "Text"}"#)
            .unwrap();
        assert!(set.session().has_unsaved_changes());

        assert!(set.activate(&first));
        assert_eq!(set.session().selected(), None);
        assert!(!set.session().has_unsaved_changes());
        assert_eq!(set.session().tree(), &default_layout());
    }

    #[test]
    fn save_writes_layout_back() {
        let mut set = ScreenSet::new(DeviceConfig::default());
        let before = set.active().updated_at;
        set.session_mut()
            .set_text(r#"{"id": "sc_saved", "type": "Center"}"#)
            .unwrap();
        set.save_active().unwrap();
        assert!(!set.session().has_unsaved_changes());
        assert_eq!(set.active().layout.id, WidgetId::intern("sc_saved"));
        assert!(set.active().updated_at > before);

        let _ = set.session_mut().set_text("not json");
        assert!(set.save_active().is_err());
        assert_eq!(set.active().layout.id, WidgetId::intern("sc_saved"));
    }

    #[test]
    fn json_envelope_roundtrip() {
        let mut set = ScreenSet::new(DeviceConfig::default());
        set.add_screen(Some("Second"));
        let json = set.to_json().unwrap();
        let restored = ScreenSet::from_json(&json, DeviceConfig::default()).unwrap();
        assert_eq!(restored.screens(), set.screens());
        assert_eq!(restored.active().name, "Screen 1");
        assert!(json.contains("\"updated_at\""));
        assert!(!json.contains("updatedAt"));
    }

    #[test]
    fn loading_rejects_duplicate_layout_ids() {
        let json = r#"[{"id": "scr_dup", "name": "Dup", "updated_at": 3, "layout":
            {"id": "scr_col", "type": "Column", "children": [
                {"id": "scr_twice", "type": "Text"},
                {"id": "scr_twice", "type": "Text"}]}}]"#;
        let Err(err) = ScreenSet::from_json(json, DeviceConfig::default()) else {
            panic!("duplicate ids in a stored layout must not load");
        };
        assert!(err.to_string().contains("scr_twice"));

        let fixed = json.replacen("scr_twice", "scr_once", 1);
        let mut set = ScreenSet::from_json(&fixed, DeviceConfig::default()).unwrap();
        assert!(set.session_mut().select_str("scr_twice"));
        assert_eq!(mb_render::selected_count(&set.session().render()), 1);
    }

    #[test]
    fn rename_unknown_screen_keeps_clock() {
        let mut set = ScreenSet::new(DeviceConfig::default());
        let id = set.active().id.clone();
        let stamp = set.active().updated_at;
        assert!(!set.rename("screen_404", "Ghost"));
        assert!(set.rename(&id, "Home"));
        assert_eq!(set.active().name, "Home");
        assert_eq!(set.active().updated_at, stamp + 1);
    }
}
