//! Click dispatch over a rendered box tree.
//!
//! A click lands on the box addressed by an index path from the root. It
//! then bubbles outward the way DOM events do: each handler on the way up
//! reports its id, and a handler that stops propagation ends the walk. The
//! last reported id is the new selection.

use crate::boxes::RenderBox;
use mb_core::WidgetId;

/// Dispatch a click at `path` (child indices from `root`).
///
/// Returns `None` if the path does not address a box or no handler lies on
/// the way up.
pub fn dispatch_click(root: &RenderBox, path: &[usize]) -> Option<WidgetId> {
    let mut chain = Vec::with_capacity(path.len() + 1);
    let mut current = root;
    chain.push(current);
    for &index in path {
        current = current.children.get(index)?;
        chain.push(current);
    }

    let mut selected = None;
    // Innermost first
    for b in chain.iter().rev() {
        if let Some(handler) = b.on_click {
            selected = Some(handler.select);
            if handler.stop_propagation {
                break;
            }
        }
    }
    log::debug!("click at {path:?} -> {selected:?}");
    selected
}

/// Find the box rendered for widget `id`.
pub fn find_box(root: &RenderBox, id: WidgetId) -> Option<&RenderBox> {
    if root.key == Some(id) {
        return Some(root);
    }
    root.children.iter().find_map(|c| find_box(c, id))
}

/// Index path from `root` to the box rendered for `id`.
pub fn path_to_box(root: &RenderBox, id: WidgetId) -> Option<Vec<usize>> {
    fn walk(b: &RenderBox, id: WidgetId, path: &mut Vec<usize>) -> bool {
        if b.key == Some(id) {
            return true;
        }
        for (i, child) in b.children.iter().enumerate() {
            path.push(i);
            if walk(child, id, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    let mut path = Vec::new();
    walk(root, id, &mut path).then_some(path)
}

/// Number of boxes carrying the selection treatment.
pub fn selected_count(root: &RenderBox) -> usize {
    usize::from(root.selected) + root.children.iter().map(selected_count).sum::<usize>()
}
