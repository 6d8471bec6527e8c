//! Editing session: JSON source ↔ canvas ↔ outline.
//!
//! - **Text → tree**: every edit re-parses the whole document. A successful
//!   parse swaps the tree atomically; a failed one keeps the last good tree
//!   on screen and records the error, so typing through an invalid state
//!   never blanks the canvas.
//! - **Canvas/outline → selection**: clicks only ever change `selected`,
//!   never the tree. Selection is always an id present in the current tree.

use mb_core::{
    DeviceConfig, DocumentResult, WidgetId, WidgetNode, device_by_id, emit_document, navigator,
    parse_document,
};
use mb_render::{
    BuiltinIcons, OutlineConfig, OutlineEvent, OutlineLine, OutlineState, RenderBox, RenderConfig,
    RenderContext, dispatch_click, outline_to_html, render_outline, render_surface_with, to_html,
};

/// A user interaction that may change the selection or outline state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Click on the canvas at an index path from the surface root.
    Canvas { path: Vec<usize> },
    /// Click on an outline line or its chevron.
    Outline(OutlineEvent),
    /// Click on empty space outside the device frame.
    Clear,
}

pub struct SyncEngine {
    /// JSON source text (authoritative, may currently be invalid).
    text: String,
    /// Last successfully parsed tree.
    tree: WidgetNode,
    selected: Option<WidgetId>,
    outline_state: OutlineState,
    device: DeviceConfig,
    render_config: RenderConfig,
    outline_config: OutlineConfig,
    /// Set when the tree changed since the last save.
    unsaved: bool,
    last_error: Option<String>,
}

impl SyncEngine {
    /// Create a session from JSON source text.
    pub fn from_text(text: &str, device: DeviceConfig) -> DocumentResult<Self> {
        let tree = parse_document(text)?;
        Ok(Self {
            text: text.to_string(),
            ..Self::new(tree, device)
        })
    }

    /// Create a session around an existing tree; the text is its canonical
    /// emission.
    pub fn new(tree: WidgetNode, device: DeviceConfig) -> Self {
        Self {
            text: emit_document(&tree),
            tree,
            selected: None,
            outline_state: OutlineState::default(),
            device,
            render_config: RenderConfig::default(),
            outline_config: OutlineConfig::default(),
            unsaved: false,
            last_error: None,
        }
    }

    // ─── Text → tree ─────────────────────────────────────────────────────

    /// Replace the source text and re-parse.
    ///
    /// The text is kept either way. On error the previous tree stays active
    /// and the message is available from [`Self::last_error`].
    pub fn set_text(&mut self, text: &str) -> DocumentResult<()> {
        self.text = text.to_string();
        match parse_document(text) {
            Ok(tree) => {
                self.swap_tree(tree);
                self.unsaved = true;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                log::debug!("keeping previous tree: {err}");
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Load a tree as a fresh, saved document: selection and outline state
    /// are cleared.
    pub fn load(&mut self, tree: WidgetNode) {
        self.text = emit_document(&tree);
        self.tree = tree;
        self.selected = None;
        self.outline_state = OutlineState::default();
        self.unsaved = false;
        self.last_error = None;
    }

    fn swap_tree(&mut self, tree: WidgetNode) {
        self.tree = tree;
        self.outline_state.retain(&self.tree);
        if let Some(id) = self.selected
            && !navigator::contains(&self.tree, id)
        {
            log::debug!("selection {id:?} no longer in tree");
            self.selected = None;
        }
    }

    // ─── Selection ───────────────────────────────────────────────────────

    /// Select `id` if it names a node in the current tree.
    pub fn select(&mut self, id: WidgetId) -> bool {
        if navigator::contains(&self.tree, id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Select by string id without interning unknown strings.
    pub fn select_str(&mut self, id: &str) -> bool {
        WidgetId::lookup(id).is_some_and(|id| self.select(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Apply a canvas or outline interaction. Returns the selection after
    /// the event.
    pub fn handle(&mut self, event: SelectionEvent) -> Option<WidgetId> {
        match event {
            SelectionEvent::Canvas { path } => {
                if let Some(id) = dispatch_click(&self.render(), &path) {
                    self.select(id);
                }
            }
            SelectionEvent::Outline(OutlineEvent::Select(id)) => {
                self.select(id);
            }
            SelectionEvent::Outline(OutlineEvent::Toggle(id)) => {
                self.outline_state.toggle(id);
            }
            SelectionEvent::Clear => self.clear_selection(),
        }
        self.selected
    }

    // ─── Projections ─────────────────────────────────────────────────────

    /// Canvas for the active device: the rendered tree inside a device-sized
    /// frame.
    pub fn render(&self) -> RenderBox {
        let ctx = RenderContext {
            selected: self.selected,
            config: &self.render_config,
            icons: &BuiltinIcons,
        };
        render_surface_with(&self.tree, &ctx, &self.device)
    }

    pub fn render_html(&self) -> String {
        to_html(&self.render())
    }

    pub fn outline(&self) -> Vec<OutlineLine> {
        render_outline(
            &self.tree,
            0,
            self.selected,
            &self.outline_state,
            &self.outline_config,
        )
    }

    pub fn outline_html(&self) -> String {
        outline_to_html(&self.outline())
    }

    // ─── Settings ────────────────────────────────────────────────────────

    /// Switch the preview device. Unknown ids are ignored.
    pub fn set_device(&mut self, id: &str) -> bool {
        match device_by_id(id) {
            Some(device) => {
                self.device = *device;
                true
            }
            None => false,
        }
    }

    pub fn set_outline_config(&mut self, config: OutlineConfig) {
        self.outline_config = config;
    }

    pub fn set_render_config(&mut self, config: RenderConfig) {
        self.render_config = config;
    }

    pub fn mark_saved(&mut self) {
        self.unsaved = false;
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tree(&self) -> &WidgetNode {
        &self.tree
    }

    pub fn selected(&self) -> Option<WidgetId> {
        self.selected
    }

    pub fn device(&self) -> &DeviceConfig {
        &self.device
    }

    pub fn outline_state(&self) -> &OutlineState {
        &self.outline_state
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
