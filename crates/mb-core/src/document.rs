//! JSON document → widget tree.
//!
//! Decoding is total below the root: a node that is an object always
//! becomes a [`WidgetNode`], whatever its params look like. Bad fields
//! decode as absent, unrecognised types become [`WidgetKind::Unknown`],
//! and non-object entries in child positions are dropped. Only three
//! things reject a whole document: invalid JSON, a non-object root, and
//! duplicate ids.
//!
//! A node without an `id` gets one derived from its position: the type
//! token plus the child-index path from the root, e.g. `_text_0.2.1`.
//! Re-parsing unchanged text yields the same ids, so selection and
//! outline state survive edits elsewhere in the document.

use crate::error::{DocumentError, DocumentResult};
use crate::id::WidgetId;
use crate::model::*;
use crate::navigator;
use crate::tokens;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Parse a JSON document into a widget tree.
///
/// # Errors
/// - the text is not valid JSON
/// - the root value is not an object
/// - two nodes share an id
pub fn parse_document(text: &str) -> DocumentResult<WidgetNode> {
    let value: Value = serde_json::from_str(text)?;
    decode_document(&value)
}

/// Decode an already-parsed JSON value as a whole document: the root must
/// be an object and ids must be unique.
pub fn decode_document(value: &Value) -> DocumentResult<WidgetNode> {
    let root = WidgetNode::from_value(value).ok_or(DocumentError::RootNotObject {
        found: json_kind(value),
    })?;

    if let Some(dup) = navigator::duplicate_ids(&root).first() {
        log::warn!("rejecting document: duplicate id {dup:?}");
        return Err(DocumentError::DuplicateId {
            id: dup.as_str().to_string(),
        });
    }

    Ok(root)
}

impl WidgetNode {
    /// Decode one node as the root of a tree. Returns `None` only when
    /// `value` is not an object. Ids are not checked for uniqueness; use
    /// [`decode_document`] for that.
    pub fn from_value(value: &Value) -> Option<WidgetNode> {
        let mut taken = HashSet::new();
        explicit_ids(value, &mut taken);
        Decoder { taken: &taken }.node(value, &mut vec![0])
    }
}

// ─── Node decoding ───────────────────────────────────────────────────────

/// Slot keys with their fixed position index among a node's children.
const SLOT_KEYS: [(&str, usize); 4] = [
    ("child", 0),
    ("appBar", 0),
    ("body", 1),
    ("floatingActionButton", 2),
];

struct Decoder<'a> {
    /// Ids spelled out in the document; generated ids steer around them.
    taken: &'a HashSet<&'a str>,
}

impl Decoder<'_> {
    fn anonymous_id(&self, prefix: &str, path: &[usize]) -> WidgetId {
        let position = path
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(".");
        let base = format!("_{prefix}_{position}");
        let mut candidate = base.clone();
        let mut k = 1;
        while self.taken.contains(candidate.as_str()) {
            k += 1;
            candidate = format!("{base}-{k}");
        }
        WidgetId::intern(&candidate)
    }

    fn node(&self, value: &Value, path: &mut Vec<usize>) -> Option<WidgetNode> {
        let obj = value.as_object()?;
        let type_name = obj.get("type").and_then(Value::as_str);
        let widget_type = type_name.and_then(WidgetType::from_token);

        let id = match obj.get("id").and_then(Value::as_str) {
            Some(id) => WidgetId::intern(id),
            None => {
                let prefix = widget_type.map_or("widget", |t| t.as_token());
                self.anonymous_id(&prefix.to_ascii_lowercase(), path)
            }
        };

        let Some(widget_type) = widget_type else {
            log::debug!("node {id:?}: unrecognised type {type_name:?}");
            return Some(WidgetNode::new(
                id,
                WidgetKind::Unknown {
                    type_name: type_name.unwrap_or_default().to_string(),
                    raw: value.clone(),
                },
            ));
        };

        let p = Params::new(id, obj.get("params"));
        let kind = match widget_type {
            WidgetType::Text => WidgetKind::Text(TextParams {
                text: p.string("text").unwrap_or_default(),
                font_size: p.number("fontSize"),
                font_weight: p.token("fontWeight", FontWeight::from_token),
                color: p.color("color"),
                text_align: p.token("textAlign", TextAlign::from_token),
                max_lines: p.number("maxLines").filter(|n| *n >= 1.0).map(|n| n as u32),
            }),
            WidgetType::Image => WidgetKind::Image(ImageParams {
                src: p.string("src").unwrap_or_default(),
                alt: p.string("alt"),
                width: p.dimension("width"),
                height: p.dimension("height"),
                fit: p.token("fit", BoxFit::from_token),
                border_radius: p.number("borderRadius"),
            }),
            WidgetType::Icon => WidgetKind::Icon(IconParams {
                icon: p.string("icon").or_else(|| p.string("iconName")),
                size: p.number("size"),
                color: p.color("color"),
            }),
            WidgetType::Button => WidgetKind::Button {
                params: ButtonParams {
                    label: p.string("label"),
                    icon: p.string("icon"),
                    color: p.color("color"),
                    text_color: p.color("textColor"),
                    padding: p.insets("padding"),
                    border_radius: p.number("borderRadius"),
                    font_size: p.number("fontSize"),
                },
                actions: obj
                    .get("actions")
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default(),
            },
            WidgetType::Spacer => WidgetKind::Spacer(p.flex_factor()),
            WidgetType::AppBar => WidgetKind::AppBar(AppBarParams {
                title: p.string("title").unwrap_or_default(),
                background_color: p.color("backgroundColor"),
                foreground_color: p.color("foregroundColor"),
                elevation: p.number("elevation"),
            }),
            WidgetType::Container => WidgetKind::Container {
                params: ContainerParams {
                    width: p.dimension("width"),
                    height: p.dimension("height"),
                    color: p.color("color"),
                    padding: p.insets("padding"),
                    margin: p.insets("margin"),
                    border_radius: p.number("borderRadius"),
                    alignment: p.token("alignment", Alignment::from_token),
                    border: p.string("border"),
                    shadow: p.string("shadow"),
                },
                child: self.slot(obj, "child", path),
            },
            WidgetType::Padding => WidgetKind::Padding {
                params: PaddingParams {
                    padding: p.insets("padding"),
                },
                child: self.slot(obj, "child", path),
            },
            WidgetType::Center => WidgetKind::Center {
                child: self.slot(obj, "child", path),
            },
            WidgetType::SizedBox => WidgetKind::SizedBox {
                params: SizedBoxParams {
                    width: p.dimension("width"),
                    height: p.dimension("height"),
                },
                child: self.slot(obj, "child", path),
            },
            WidgetType::Expanded => WidgetKind::Expanded {
                params: p.flex_factor(),
                child: self.slot(obj, "child", path),
            },
            WidgetType::Row => WidgetKind::Row {
                params: p.flex_params(),
                children: self.list(id, obj, path),
            },
            WidgetType::Column => WidgetKind::Column {
                params: p.flex_params(),
                children: self.list(id, obj, path),
            },
            WidgetType::Stack => WidgetKind::Stack {
                params: StackParams {
                    alignment: p.token("alignment", Alignment::from_token),
                    z_indices: p.int_list("zIndices"),
                },
                children: self.list(id, obj, path),
            },
            WidgetType::Scaffold => WidgetKind::Scaffold {
                params: ScaffoldParams {
                    background_color: p.color("backgroundColor"),
                },
                app_bar: self.slot(obj, "appBar", path),
                body: self.slot(obj, "body", path),
                floating_action_button: self.slot(obj, "floatingActionButton", path),
            },
        };

        Some(WidgetNode::new(id, kind))
    }

    // ─── Children ────────────────────────────────────────────────────────

    fn slot(&self, obj: &Map<String, Value>, key: &str, path: &mut Vec<usize>) -> Child {
        let value = obj.get(key).filter(|v| !v.is_null())?;
        let index = SLOT_KEYS
            .iter()
            .find_map(|(k, i)| (*k == key).then_some(*i))
            .unwrap_or_default();
        path.push(index);
        let node = self.node(value, path);
        path.pop();
        node.map(Box::new)
    }

    /// Entries keep their index in the raw array, so dropping a malformed
    /// sibling does not shift the generated ids of the others.
    fn list(&self, parent: WidgetId, obj: &Map<String, Value>, path: &mut Vec<usize>) -> Vec<WidgetNode> {
        match obj.get("children") {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| {
                    path.push(i);
                    let node = self.node(item, path);
                    path.pop();
                    if node.is_none() {
                        log::debug!("node {parent:?}: dropping non-object child {item}");
                    }
                    node
                })
                .collect(),
            Some(other) => {
                log::debug!("node {parent:?}: `children` is {}, not an array", json_kind(other));
                Vec::new()
            }
            None => Vec::new(),
        }
    }
}

/// Collect every explicit `id` string in structural positions.
fn explicit_ids<'v>(value: &'v Value, out: &mut HashSet<&'v str>) {
    let Some(obj) = value.as_object() else {
        return;
    };
    if let Some(id) = obj.get("id").and_then(Value::as_str) {
        out.insert(id);
    }
    for (key, _) in SLOT_KEYS {
        if let Some(child) = obj.get(key) {
            explicit_ids(child, out);
        }
    }
    if let Some(Value::Array(items)) = obj.get("children") {
        for item in items {
            explicit_ids(item, out);
        }
    }
}

/// Deserializing a node applies the same document rules as
/// [`parse_document`], duplicate ids included.
impl<'de> Deserialize<'de> for WidgetNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_document(&value).map_err(serde::de::Error::custom)
    }
}

// ─── Params access ───────────────────────────────────────────────────────

/// Lenient view over a node's `params` object. Every accessor returns
/// `None` when the key is absent or holds the wrong shape.
struct Params<'a> {
    owner: WidgetId,
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Params<'a> {
    fn new(owner: WidgetId, params: Option<&'a Value>) -> Self {
        Self {
            owner,
            map: params.and_then(Value::as_object),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map?.get(key).filter(|v| !v.is_null())
    }

    fn rejected(&self, key: &str, value: &Value) {
        log::debug!("node {:?}: ignoring params.{key} = {value}", self.owner);
    }

    fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            other => {
                self.rejected(key, other);
                None
            }
        }
    }

    /// JSON number, or a numeric string such as `"16"` / `"16px"`.
    fn number(&self, key: &str) -> Option<f32> {
        let value = self.get(key)?;
        let n = match value {
            Value::Number(n) => n.as_f64().map(|f| f as f32),
            Value::String(s) => tokens::parse_length(s),
            _ => None,
        };
        let n = n.filter(|f| f.is_finite());
        if n.is_none() {
            self.rejected(key, value);
        }
        n
    }

    fn color(&self, key: &str) -> Option<Color> {
        let value = self.get(key)?;
        let color = value.as_str().and_then(Color::from_hex);
        if color.is_none() {
            self.rejected(key, value);
        }
        color
    }

    fn token<T>(&self, key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        let value = self.get(key)?;
        let token = value.as_str().and_then(parse);
        if token.is_none() {
            self.rejected(key, value);
        }
        token
    }

    fn dimension(&self, key: &str) -> Option<Dimension> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64().map(|f| Dimension::Px(f as f32)),
            Value::String(s) if tokens::is_fill_sentinel(s) => Some(Dimension::Fill),
            Value::String(_) => Some(Dimension::Auto),
            other => {
                self.rejected(key, other);
                None
            }
        }
    }

    fn insets(&self, key: &str) -> Option<EdgeInsets> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64().map(|f| EdgeInsets::Uniform(f as f32)),
            Value::Array(items) => Some(EdgeInsets::Each(
                items
                    .iter()
                    .map(|v| v.as_f64().map_or(0.0, |f| f as f32))
                    .collect(),
            )),
            Value::String(s) => Some(EdgeInsets::Text(s.clone())),
            other => {
                self.rejected(key, other);
                None
            }
        }
    }

    fn int_list(&self, key: &str) -> Vec<i32> {
        match self.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| v.as_i64().map_or(0, |i| i.clamp(i32::MIN.into(), i32::MAX.into()) as i32))
                .collect(),
            Some(other) => {
                self.rejected(key, other);
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    fn flex_factor(&self) -> FlexFactor {
        FlexFactor {
            flex: self.number("flex").filter(|f| *f > 0.0),
        }
    }

    fn flex_params(&self) -> FlexParams {
        FlexParams {
            main_axis_alignment: self.token("mainAxisAlignment", MainAxisAlignment::from_token),
            cross_axis_alignment: self.token("crossAxisAlignment", CrossAxisAlignment::from_token),
            main_axis_size: self.token("mainAxisSize", MainAxisSize::from_token),
            spacing: self.number("spacing").or_else(|| self.number("gap")),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_container_with_text() {
        let doc = r##"{
            "id": "doc_root",
            "type": "Container",
            "params": { "padding": 16, "color": "#FFFFFF" },
            "child": { "id": "doc_title", "type": "Text", "params": { "text": "Hello" } }
        }"##;
        let root = parse_document(doc).unwrap();
        assert_eq!(root.id.as_str(), "doc_root");
        let WidgetKind::Container { params, child } = &root.kind else {
            panic!("expected container, got {:?}", root.kind);
        };
        assert_eq!(params.padding, Some(EdgeInsets::Uniform(16.0)));
        assert_eq!(params.color, Some(Color::WHITE));
        assert_eq!(child.as_ref().map(|c| c.text_content()), Some(Some("Hello")));
    }

    #[test]
    fn bad_params_decode_as_absent() {
        let doc = r#"{
            "id": "doc_bad",
            "type": "Row",
            "params": {
                "mainAxisAlignment": "sideways",
                "spacing": "wide",
                "crossAxisAlignment": 7
            },
            "children": "not a list"
        }"#;
        let root = parse_document(doc).unwrap();
        assert_eq!(
            root.kind,
            WidgetKind::Row {
                params: FlexParams::default(),
                children: vec![],
            }
        );
    }

    #[test]
    fn gap_alias_and_numeric_strings() {
        let doc = r#"{"id": "doc_col", "type": "Column", "params": {"gap": "12px"}, "children": []}"#;
        let root = parse_document(doc).unwrap();
        let WidgetKind::Column { params, .. } = &root.kind else {
            panic!("expected column");
        };
        assert_eq!(params.spacing, Some(12.0));
    }

    #[test]
    fn unknown_type_is_kept() {
        let doc = r#"{"id": "doc_frob", "type": "Frobnicator", "params": {"x": 1}}"#;
        let root = parse_document(doc).unwrap();
        assert_eq!(root.type_name(), "Frobnicator");
        assert!(matches!(root.kind, WidgetKind::Unknown { .. }));
    }

    #[test]
    fn missing_id_is_synthesised() {
        let doc = r#"{"type": "Spacer"}"#;
        let root = parse_document(doc).unwrap();
        assert_eq!(root.id.as_str(), "_spacer_0");
    }

    #[test]
    fn generated_ids_follow_position() {
        let doc = r#"{"id": "doc_sc", "type": "Scaffold",
            "body": {"type": "Column", "children": [7, {"type": "Text"}, {"type": "Image"}]}}"#;
        let first = parse_document(doc).unwrap();
        let ids: Vec<&str> = navigator::depth_first(&first).map(|(_, n)| n.id.as_str()).collect();
        assert_eq!(ids, vec!["doc_sc", "_column_0.1", "_text_0.1.1", "_image_0.1.2"]);

        let again = parse_document(doc).unwrap();
        assert_eq!(again, first);
    }

    #[test]
    fn generated_ids_avoid_explicit_ones() {
        let doc = r#"{"id": "doc_row", "type": "Row", "children": [
            {"type": "Text"},
            {"id": "_text_0.0", "type": "Text"}]}"#;
        let root = parse_document(doc).unwrap();
        let ids: Vec<&str> = navigator::children_of(&root).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["_text_0.0-2", "_text_0.0"]);
    }

    #[test]
    fn deserialize_rejects_duplicate_ids() {
        let doc = r#"{"id": "doc_dup2", "type": "Row", "children": [
            {"id": "doc_twice", "type": "Spacer"},
            {"id": "doc_twice", "type": "Spacer"}]}"#;
        let err = serde_json::from_str::<WidgetNode>(doc).unwrap_err();
        assert!(err.to_string().contains("doc_twice"));
    }

    #[test]
    fn non_object_children_are_dropped() {
        let doc = r#"{"id": "doc_stack", "type": "Stack", "children": [1, {"id": "doc_s1", "type": "Text"}, null]}"#;
        let root = parse_document(doc).unwrap();
        assert_eq!(navigator::children_of(&root).len(), 1);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let doc = r#"{"id": "doc_dup", "type": "Column", "children": [
            {"id": "doc_same", "type": "Text"},
            {"id": "doc_same", "type": "Text"}
        ]}"#;
        let err = parse_document(doc).unwrap_err();
        assert!(matches!(err, DocumentError::DuplicateId { ref id } if id == "doc_same"));
    }

    #[test]
    fn rejects_non_object_root_and_bad_json() {
        assert!(matches!(
            parse_document("[1, 2]"),
            Err(DocumentError::RootNotObject { found: "an array" })
        ));
        let err = parse_document("{\"id\": ").unwrap_err();
        assert!(matches!(err, DocumentError::Json { line: 1, .. }));
    }
}
