//! Tab bar reordering shared by both stores.

/// Moves the item at `from` so it ends up at index `to`.
///
/// Returns false, leaving `items` untouched, when either index is out of
/// bounds or both are equal.
pub(crate) fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }

    let item = items.remove(from);
    items.insert(to, item);
    true
}
