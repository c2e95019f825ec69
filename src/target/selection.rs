use super::TargetId;

/// The set of target ids currently marked for a bulk action.
///
/// Holds ids only, never target records, so a concurrent status change
/// cannot leave a stale copy behind. The set is explicit state owned by
/// the caller; nothing here touches the collection itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<TargetId>,
}

impl SelectionSet {
    pub fn new() -> SelectionSet {
        SelectionSet::default()
    }

    pub fn from_ids(ids: Vec<TargetId>) -> SelectionSet {
        SelectionSet { ids }
    }

    /// Adds the id if absent, removes it if present. Two calls in a row
    /// are a net no-op.
    pub fn toggle(&mut self, target_id: TargetId) {
        match self.ids.iter().position(|id| *id == target_id) {
            Some(index) => {
                self.ids.remove(index);
            }
            None => self.ids.push(target_id),
        }
    }

    /// Select-all over the visible view: when the selection already equals
    /// the visible set, clears it; otherwise replaces the selection with
    /// the visible ids. Ids hidden by a filter change are dropped rather
    /// than remembered.
    pub fn select_all_visible(&mut self, visible: &[TargetId]) {
        if self.equals(visible) {
            self.ids.clear();
        } else {
            self.ids = visible.to_vec();
        }
    }

    pub fn contains(&self, target_id: TargetId) -> bool {
        self.ids.contains(&target_id)
    }

    pub fn ids(&self) -> &[TargetId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    fn equals(&self, other: &[TargetId]) -> bool {
        self.ids.len() == other.len()
            && self.ids.iter().all(|id| other.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_a_net_noop() {
        let a = TargetId::new();
        let b = TargetId::new();
        let mut selection = SelectionSet::from_ids(vec![a, b]);

        selection.toggle(a);
        assert!(!selection.contains(a));
        assert!(selection.contains(b));

        selection.toggle(a);
        assert_eq!(selection, SelectionSet::from_ids(vec![b, a]));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn toggle_adds_unknown_id() {
        let a = TargetId::new();
        let mut selection = SelectionSet::new();

        selection.toggle(a);

        assert!(selection.contains(a));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn select_all_replaces_partial_selection() {
        let a = TargetId::new();
        let b = TargetId::new();
        let c = TargetId::new();
        let mut selection = SelectionSet::from_ids(vec![a]);

        selection.select_all_visible(&[a, b, c]);

        assert_eq!(selection.ids(), [a, b, c]);
    }

    #[test]
    fn select_all_clears_when_selection_equals_visible() {
        let a = TargetId::new();
        let b = TargetId::new();
        // order must not matter for the equality check
        let mut selection = SelectionSet::from_ids(vec![b, a]);

        selection.select_all_visible(&[a, b]);

        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_is_self_inverse_from_full_selection() {
        let a = TargetId::new();
        let b = TargetId::new();
        let mut selection = SelectionSet::from_ids(vec![a, b]);
        let original = selection.clone();

        selection.select_all_visible(&[a, b]);
        selection.select_all_visible(&[a, b]);

        assert_eq!(selection, original);
    }

    #[test]
    fn narrowing_the_view_drops_hidden_ids_on_select_all() {
        let visible = TargetId::new();
        let hidden = TargetId::new();
        let mut selection = SelectionSet::from_ids(vec![visible, hidden]);

        selection.select_all_visible(&[visible]);

        assert_eq!(selection.ids(), [visible]);
        assert!(!selection.contains(hidden));
    }
}
