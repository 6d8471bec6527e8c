//! Lint diagnostics for widget documents.
//!
//! Reports structural issues without modifying the tree. The decoder
//! tolerates all of these; lint is where they become visible.

use crate::id::WidgetId;
use crate::model::{WidgetKind, WidgetNode, WidgetType};
use crate::navigator::{self, children_of};
use serde::Serialize;

// ─── Diagnostic types ────────────────────────────────────────────────────

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    /// Likely a mistake.
    Warning,
    /// Style suggestion.
    Info,
}

/// A single lint diagnostic for a widget node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintDiagnostic {
    /// The node this diagnostic refers to.
    pub node_id: WidgetId,
    /// Human-readable message.
    pub message: String,
    pub severity: LintSeverity,
    /// Short rule identifier (e.g. "anonymous-id", "duplicate-id").
    pub rule: &'static str,
}

// ─── Public API ──────────────────────────────────────────────────────────

/// Run all lint rules over the tree and return diagnostics.
#[must_use]
pub fn lint_document(root: &WidgetNode) -> Vec<LintDiagnostic> {
    let mut diags = Vec::new();
    lint_duplicate_ids(root, &mut diags);
    lint_per_node(root, None, &mut diags);
    diags
}

// ─── Rules ───────────────────────────────────────────────────────────────

fn lint_duplicate_ids(root: &WidgetNode, diags: &mut Vec<LintDiagnostic>) {
    for id in navigator::duplicate_ids(root) {
        diags.push(LintDiagnostic {
            node_id: id,
            message: format!("Id `{id}` is used by more than one widget; selection will be ambiguous."),
            severity: LintSeverity::Warning,
            rule: "duplicate-id",
        });
    }
}

fn lint_per_node(node: &WidgetNode, parent: Option<&WidgetNode>, diags: &mut Vec<LintDiagnostic>) {
    let id = node.id;

    if is_anonymous_id(id.as_str()) {
        diags.push(LintDiagnostic {
            node_id: id,
            message: format!(
                "`{}` has no id; `{id}` was derived from its position and changes when it moves.",
                node.type_name()
            ),
            severity: LintSeverity::Info,
            rule: "anonymous-id",
        });
    }

    match &node.kind {
        WidgetKind::Unknown { type_name, .. } => {
            let message = if type_name.is_empty() {
                "Widget has no `type`; it renders as a placeholder.".to_string()
            } else {
                format!("Unknown widget type `{type_name}`; it renders as a placeholder.")
            };
            diags.push(LintDiagnostic {
                node_id: id,
                message,
                severity: LintSeverity::Warning,
                rule: "unknown-type",
            });
        }
        WidgetKind::Expanded { child, .. } => {
            if child.is_none() {
                diags.push(LintDiagnostic {
                    node_id: id,
                    message: format!("Expanded `{id}` has no child and renders empty."),
                    severity: LintSeverity::Warning,
                    rule: "expanded-without-child",
                });
            }
            let in_flex = parent.is_some_and(|p| {
                matches!(p.kind, WidgetKind::Row { .. } | WidgetKind::Column { .. })
            });
            if !in_flex {
                diags.push(LintDiagnostic {
                    node_id: id,
                    message: format!("Expanded `{id}` only takes effect directly inside a Row or Column."),
                    severity: LintSeverity::Info,
                    rule: "expanded-outside-flex",
                });
            }
        }
        WidgetKind::Scaffold {
            app_bar: Some(app_bar),
            ..
        } if app_bar.kind.widget_type() != Some(WidgetType::AppBar) => {
            diags.push(LintDiagnostic {
                node_id: app_bar.id,
                message: format!(
                    "Scaffold `{id}` has a `{}` in its appBar slot; expected AppBar.",
                    app_bar.type_name()
                ),
                severity: LintSeverity::Info,
                rule: "appbar-slot-type",
            });
        }
        _ => {}
    }

    for child in children_of(node) {
        lint_per_node(child, Some(node), diags);
    }
}

/// Matches ids synthesised by the decoder: `_<type>_<path>`, where the
/// path is dot-separated child indices with an optional `-<k>` suffix.
fn is_anonymous_id(id: &str) -> bool {
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    let Some((kind, position)) = id.strip_prefix('_').and_then(|rest| rest.rsplit_once('_')) else {
        return false;
    };
    let (path, suffix) = match position.split_once('-') {
        Some((path, k)) => (path, Some(k)),
        None => (position, None),
    };
    !kind.is_empty()
        && kind.chars().all(|c| c.is_ascii_lowercase())
        && path.split('.').all(digits)
        && suffix.is_none_or(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;
    use crate::model::*;

    fn rules(diags: &[LintDiagnostic]) -> Vec<&'static str> {
        diags.iter().map(|d| d.rule).collect()
    }

    #[test]
    fn clean_document_has_no_findings() {
        let root = parse_document(
            r#"{"id": "lint_col", "type": "Column", "children": [
                {"id": "lint_exp", "type": "Expanded", "child": {"id": "lint_t", "type": "Text"}}
            ]}"#,
        )
        .unwrap();
        assert!(lint_document(&root).is_empty());
    }

    #[test]
    fn anonymous_and_unknown() {
        let root = parse_document(
            r#"{"id": "lint_root", "type": "Row", "children": [
                {"type": "Text"},
                {"id": "lint_frob", "type": "Frobnicator"}
            ]}"#,
        )
        .unwrap();
        let diags = lint_document(&root);
        assert_eq!(rules(&diags), vec!["anonymous-id", "unknown-type"]);
        assert_eq!(diags[0].severity, LintSeverity::Info);
    }

    #[test]
    fn expanded_rules() {
        let root = parse_document(r#"{"id": "lint_lonely", "type": "Expanded"}"#).unwrap();
        assert_eq!(
            rules(&lint_document(&root)),
            vec!["expanded-without-child", "expanded-outside-flex"]
        );
    }

    #[test]
    fn appbar_slot_type() {
        let root = parse_document(
            r#"{"id": "lint_sc", "type": "Scaffold", "appBar": {"id": "lint_bar", "type": "Text"}}"#,
        )
        .unwrap();
        let diags = lint_document(&root);
        assert_eq!(rules(&diags), vec!["appbar-slot-type"]);
        assert_eq!(diags[0].node_id.as_str(), "lint_bar");
    }

    #[test]
    fn duplicates_in_programmatic_trees() {
        let text = |id: &str| WidgetNode::new(WidgetId::intern(id), WidgetKind::Text(TextParams::default()));
        let root = WidgetNode::new(
            WidgetId::intern("lint_stack"),
            WidgetKind::Stack {
                params: StackParams::default(),
                children: vec![text("lint_twin"), text("lint_twin")],
            },
        );
        assert_eq!(rules(&lint_document(&root)), vec!["duplicate-id"]);
    }

    #[test]
    fn anonymous_id_pattern() {
        assert!(is_anonymous_id("_text_12"));
        assert!(is_anonymous_id("_sizedbox_0"));
        assert!(is_anonymous_id("_text_0.2.1"));
        assert!(is_anonymous_id("_text_0.1-2"));
        assert!(!is_anonymous_id("_text_"));
        assert!(!is_anonymous_id("_text_0..1"));
        assert!(!is_anonymous_id("_text_0.1-"));
        assert!(!is_anonymous_id("hero_text_1"));
        assert!(!is_anonymous_id("_Hero_1"));
    }
}
