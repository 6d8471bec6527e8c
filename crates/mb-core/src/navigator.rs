//! Read-only tree traversal.
//!
//! [`children_of`] is the single definition of "structural children" shared
//! by the outline and the lint pass. It never mutates and never caches; the
//! tree is small enough to re-walk on every projection.

use crate::id::WidgetId;
use crate::model::{WidgetKind, WidgetNode};
use smallvec::SmallVec;
use std::collections::HashSet;

/// Children of one node, in display order. Inline for up to three entries,
/// which covers every single-child and slotted variant.
pub type ChildList<'a> = SmallVec<[&'a WidgetNode; 3]>;

/// Structural children of `node`, total over all variants.
///
/// - Scaffold: `appBar`, `body`, `floatingActionButton`, each only if present.
/// - Row / Column / Stack: `children` verbatim.
/// - Single-child variants: the child if present.
/// - Leaves and unknown types: empty.
pub fn children_of(node: &WidgetNode) -> ChildList<'_> {
    let mut out = ChildList::new();
    match &node.kind {
        WidgetKind::Scaffold {
            app_bar,
            body,
            floating_action_button,
            ..
        } => {
            out.extend(
                [app_bar, body, floating_action_button]
                    .into_iter()
                    .filter_map(|slot| slot.as_deref()),
            );
        }
        WidgetKind::Row { children, .. }
        | WidgetKind::Column { children, .. }
        | WidgetKind::Stack { children, .. } => out.extend(children.iter()),
        WidgetKind::Container { child, .. }
        | WidgetKind::Padding { child, .. }
        | WidgetKind::Center { child }
        | WidgetKind::SizedBox { child, .. }
        | WidgetKind::Expanded { child, .. } => out.extend(child.as_deref()),
        WidgetKind::Text(_)
        | WidgetKind::Image(_)
        | WidgetKind::Icon(_)
        | WidgetKind::Button { .. }
        | WidgetKind::Spacer(_)
        | WidgetKind::AppBar(_)
        | WidgetKind::Unknown { .. } => {}
    }
    out
}

pub fn has_children(node: &WidgetNode) -> bool {
    !children_of(node).is_empty()
}

/// Depth-first pre-order iterator over a subtree, yielding `(depth, node)`.
pub struct DepthFirst<'a> {
    stack: Vec<(usize, &'a WidgetNode)>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (usize, &'a WidgetNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Push in reverse so the first child is visited next.
        for child in children_of(node).into_iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

/// Walk `root` and all of its descendants in outline order.
pub fn depth_first(root: &WidgetNode) -> DepthFirst<'_> {
    DepthFirst {
        stack: vec![(0, root)],
    }
}

/// Find the node with `id`. With duplicate ids the first in pre-order wins.
pub fn find(root: &WidgetNode, id: WidgetId) -> Option<&WidgetNode> {
    depth_first(root).map(|(_, n)| n).find(|n| n.id == id)
}

pub fn contains(root: &WidgetNode, id: WidgetId) -> bool {
    find(root, id).is_some()
}

pub fn node_count(root: &WidgetNode) -> usize {
    depth_first(root).count()
}

/// Chain of ids from the root down to `id`, inclusive. `None` if absent.
pub fn path_to(root: &WidgetNode, id: WidgetId) -> Option<Vec<WidgetId>> {
    fn walk(node: &WidgetNode, id: WidgetId, path: &mut Vec<WidgetId>) -> bool {
        path.push(node.id);
        if node.id == id {
            return true;
        }
        for child in children_of(node) {
            if walk(child, id, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    walk(root, id, &mut path).then_some(path)
}

/// Ids appearing more than once, each reported once, in pre-order of their
/// second occurrence.
pub fn duplicate_ids(root: &WidgetNode) -> Vec<WidgetId> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut out = Vec::new();
    for (_, node) in depth_first(root) {
        if !seen.insert(node.id) && reported.insert(node.id) {
            out.push(node.id);
        }
    }
    out
}
