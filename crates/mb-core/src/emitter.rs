//! Emitter: widget tree → JSON document.
//!
//! Only params that are present are written, in the camelCase spelling the
//! decoder reads. Output re-parses into a structurally equal tree.

use crate::document::parse_document;
use crate::error::DocumentResult;
use crate::model::*;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// Emit a tree as pretty-printed JSON.
#[must_use]
pub fn emit_document(root: &WidgetNode) -> String {
    let value = root.to_value();
    // Serializing a `Value` cannot fail.
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

/// Parse and re-emit a document in canonical form. Idempotent.
pub fn format_document(text: &str) -> DocumentResult<String> {
    parse_document(text).map(|root| emit_document(&root))
}

impl WidgetNode {
    pub fn to_value(&self) -> Value {
        if let WidgetKind::Unknown { raw, .. } = &self.kind {
            let mut raw = raw.clone();
            if let Some(obj) = raw.as_object_mut() {
                obj.insert("id".into(), json!(self.id.as_str()));
            }
            return raw;
        }

        let mut obj = Map::new();
        obj.insert("id".into(), json!(self.id.as_str()));
        obj.insert("type".into(), json!(self.type_name()));

        let mut p = ParamsOut::default();
        match &self.kind {
            WidgetKind::Text(t) => {
                p.string("text", Some(&t.text));
                p.number("fontSize", t.font_size);
                p.token("fontWeight", t.font_weight.map(|w| w.as_token()));
                p.color("color", t.color);
                p.token("textAlign", t.text_align.map(|a| a.as_token()));
                p.number("maxLines", t.max_lines.map(|n| n as f32));
            }
            WidgetKind::Image(i) => {
                p.string("src", Some(&i.src));
                p.string("alt", i.alt.as_deref());
                p.dimension("width", i.width);
                p.dimension("height", i.height);
                p.token("fit", i.fit.map(|f| f.as_token()));
                p.number("borderRadius", i.border_radius);
            }
            WidgetKind::Icon(i) => {
                p.string("icon", i.icon.as_deref());
                p.number("size", i.size);
                p.color("color", i.color);
            }
            WidgetKind::Button { params, actions } => {
                p.string("label", params.label.as_deref());
                p.string("icon", params.icon.as_deref());
                p.color("color", params.color);
                p.color("textColor", params.text_color);
                p.insets("padding", params.padding.as_ref());
                p.number("borderRadius", params.border_radius);
                p.number("fontSize", params.font_size);
                if !actions.is_empty() {
                    obj.insert("actions".into(), Value::Array(actions.clone()));
                }
            }
            WidgetKind::Spacer(f) => p.number("flex", f.flex),
            WidgetKind::AppBar(a) => {
                p.string("title", Some(&a.title));
                p.color("backgroundColor", a.background_color);
                p.color("foregroundColor", a.foreground_color);
                p.number("elevation", a.elevation);
            }
            WidgetKind::Container { params, child } => {
                p.dimension("width", params.width);
                p.dimension("height", params.height);
                p.color("color", params.color);
                p.insets("padding", params.padding.as_ref());
                p.insets("margin", params.margin.as_ref());
                p.number("borderRadius", params.border_radius);
                p.token("alignment", params.alignment.map(|a| a.as_token()));
                p.string("border", params.border.as_deref());
                p.string("shadow", params.shadow.as_deref());
                emit_child(&mut obj, "child", child);
            }
            WidgetKind::Padding { params, child } => {
                p.insets("padding", params.padding.as_ref());
                emit_child(&mut obj, "child", child);
            }
            WidgetKind::Center { child } => emit_child(&mut obj, "child", child),
            WidgetKind::SizedBox { params, child } => {
                p.dimension("width", params.width);
                p.dimension("height", params.height);
                emit_child(&mut obj, "child", child);
            }
            WidgetKind::Expanded { params, child } => {
                p.number("flex", params.flex);
                emit_child(&mut obj, "child", child);
            }
            WidgetKind::Row { params, children } | WidgetKind::Column { params, children } => {
                p.token("mainAxisAlignment", params.main_axis_alignment.map(|a| a.as_token()));
                p.token("crossAxisAlignment", params.cross_axis_alignment.map(|a| a.as_token()));
                p.token("mainAxisSize", params.main_axis_size.map(|s| s.as_token()));
                p.number("spacing", params.spacing);
                emit_children(&mut obj, children);
            }
            WidgetKind::Stack { params, children } => {
                p.token("alignment", params.alignment.map(|a| a.as_token()));
                if !params.z_indices.is_empty() {
                    p.0.insert("zIndices".into(), json!(params.z_indices));
                }
                emit_children(&mut obj, children);
            }
            WidgetKind::Scaffold {
                params,
                app_bar,
                body,
                floating_action_button,
            } => {
                p.color("backgroundColor", params.background_color);
                emit_child(&mut obj, "appBar", app_bar);
                emit_child(&mut obj, "body", body);
                emit_child(&mut obj, "floatingActionButton", floating_action_button);
            }
            WidgetKind::Unknown { .. } => {}
        }

        obj.insert("params".into(), Value::Object(p.0));
        Value::Object(obj)
    }
}

impl Serialize for WidgetNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

fn emit_child(obj: &mut Map<String, Value>, key: &str, child: &Child) {
    if let Some(child) = child {
        obj.insert(key.into(), child.to_value());
    }
}

fn emit_children(obj: &mut Map<String, Value>, children: &[WidgetNode]) {
    obj.insert(
        "children".into(),
        Value::Array(children.iter().map(WidgetNode::to_value).collect()),
    );
}

#[derive(Default)]
struct ParamsOut(Map<String, Value>);

impl ParamsOut {
    fn string(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.0.insert(key.into(), json!(v));
        }
    }

    fn token(&mut self, key: &str, value: Option<impl Into<String>>) {
        if let Some(v) = value {
            self.0.insert(key.into(), Value::String(v.into()));
        }
    }

    fn number(&mut self, key: &str, value: Option<f32>) {
        if let Some(v) = value {
            self.0.insert(key.into(), format_num(v));
        }
    }

    fn color(&mut self, key: &str, value: Option<Color>) {
        if let Some(c) = value {
            self.0.insert(key.into(), json!(c.to_hex()));
        }
    }

    fn dimension(&mut self, key: &str, value: Option<Dimension>) {
        let v = match value {
            Some(Dimension::Px(px)) => format_num(px),
            Some(Dimension::Fill) => json!("double.infinity"),
            Some(Dimension::Auto) => json!("auto"),
            None => return,
        };
        self.0.insert(key.into(), v);
    }

    fn insets(&mut self, key: &str, value: Option<&EdgeInsets>) {
        let v = match value {
            Some(EdgeInsets::Uniform(n)) => format_num(*n),
            Some(EdgeInsets::Each(list)) => {
                Value::Array(list.iter().copied().map(format_num).collect())
            }
            Some(EdgeInsets::Text(s)) => json!(s),
            None => return,
        };
        self.0.insert(key.into(), v);
    }
}

/// Integral values are written as integers (`16`, not `16.0`).
fn format_num(n: f32) -> Value {
    if n.fract() == 0.0 && n.abs() < 1e9 {
        json!(n as i64)
    } else {
        json!(f64::from(n))
    }
}
