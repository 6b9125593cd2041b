//! Session controller for picking one item field's label.

use log::debug;
use uuid::Uuid;

use crate::db::models::{Label, LabelKind};
use crate::db::Database;
use crate::labels::error::LabelError;
use crate::labels::set::LabelSet;

/// Mediates between one item field and its label catalog for the duration
/// of a selection session.
///
/// Every change to the effective label is pushed to the caller through the
/// `on_change` callback as a plain name string; the editor writes it into
/// its in-memory item. The callback runs synchronously on the caller's
/// thread, so by the time an operation returns the editor has already seen
/// the new name.
pub struct LabelSelector {
    set: LabelSet,
    selected: Uuid,
    on_change: Box<dyn FnMut(&str)>,
}

impl LabelSelector {
    /// Load the catalog for `kind` and resolve the field's current name.
    ///
    /// The name comes from an item field that is kept resolvable at all
    /// times, so a `NameNotFound` here means the store was corrupted outside
    /// this session.
    pub fn open(
        db: &Database,
        kind: LabelKind,
        initial_name: &str,
        on_change: impl FnMut(&str) + 'static,
    ) -> Result<Self, LabelError> {
        let set = LabelSet::load(db, kind)?;
        let selected = set.resolve_id_by_name(initial_name)?;

        Ok(Self {
            set,
            selected,
            on_change: Box::new(on_change),
        })
    }

    pub fn label_set(&self) -> &LabelSet {
        &self.set
    }

    pub fn selected_id(&self) -> Uuid {
        self.selected
    }

    /// Pick a label. Re-picking the current selection is a no-op and does
    /// not fire the callback; anything else fires it exactly once with the
    /// picked label's name.
    pub fn select(&mut self, id: Uuid) -> Result<(), LabelError> {
        if id == self.selected {
            return Ok(());
        }

        let name = self.set.resolve_by_id(id)?.name.clone();
        self.selected = id;
        (self.on_change)(&name);

        Ok(())
    }

    /// Create a custom label without selecting it; the callback stays
    /// silent. An invalid name is swallowed here (`None`): the editor sees
    /// the list unchanged and leaves the input for correction.
    pub fn add_custom(&mut self, name: &str) -> Result<Option<Label>, LabelError> {
        match self.set.add_custom(name) {
            Ok(label) => Ok(Some(label)),
            Err(LabelError::InvalidName { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Delete a custom label. Deleting the current selection falls back to
    /// the kind's designated default and fires the callback once with its
    /// name; deleting anything else is silent.
    pub fn remove_custom(&mut self, id: Uuid) -> Result<(), LabelError> {
        self.set.remove_custom(id)?;

        if id == self.selected {
            let fallback = self.set.fallback();
            let name = fallback.name.clone();
            debug!(
                "Selected {} label was deleted; falling back to '{name}'",
                self.set.kind()
            );
            self.selected = fallback.id;
            (self.on_change)(&name);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn capture() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&str) + 'static) {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&emitted);
        let callback = move |name: &str| sink.borrow_mut().push(name.to_string());
        (emitted, callback)
    }

    #[test]
    fn select_is_idempotent_and_emits_on_change() {
        let db = Database::open_in_memory().unwrap();
        let (emitted, callback) = capture();
        let mut selector =
            LabelSelector::open(&db, LabelKind::Fit, "Regular", callback).unwrap();

        let current = selector.selected_id();
        selector.select(current).unwrap();
        assert!(emitted.borrow().is_empty());

        let slim = selector.label_set().resolve_id_by_name("Slim").unwrap();
        selector.select(slim).unwrap();
        assert_eq!(*emitted.borrow(), ["Slim"]);
        assert_eq!(selector.selected_id(), slim);
    }

    #[test]
    fn select_with_stale_id_fails_and_keeps_state() {
        let db = Database::open_in_memory().unwrap();
        let (emitted, callback) = capture();
        let mut selector =
            LabelSelector::open(&db, LabelKind::Fit, "Regular", callback).unwrap();

        let before = selector.selected_id();
        let err = selector.select(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, LabelError::IdNotFound { .. }));
        assert_eq!(selector.selected_id(), before);
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn add_custom_never_reselects_or_emits() {
        let db = Database::open_in_memory().unwrap();
        let (emitted, callback) = capture();
        let mut selector =
            LabelSelector::open(&db, LabelKind::Brand, "None", callback).unwrap();

        let before = selector.selected_id();
        let added = selector.add_custom("Uniqlo").unwrap();
        assert!(added.is_some());
        assert_eq!(selector.selected_id(), before);
        assert!(emitted.borrow().is_empty());
        assert_eq!(selector.label_set().customs()[0].name, "Uniqlo");
    }

    #[test]
    fn add_custom_swallows_invalid_names() {
        let db = Database::open_in_memory().unwrap();
        let (emitted, callback) = capture();
        let mut selector =
            LabelSelector::open(&db, LabelKind::Brand, "None", callback).unwrap();

        assert!(selector.add_custom("   ").unwrap().is_none());
        assert!(selector.add_custom("none").unwrap().is_none());
        assert!(selector.label_set().customs().is_empty());
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn deleting_the_selection_falls_back_and_emits_once() {
        let db = Database::open_in_memory().unwrap();
        let (emitted, callback) = capture();
        let mut selector =
            LabelSelector::open(&db, LabelKind::Color, "None", callback).unwrap();

        let teal = selector.add_custom("Teal").unwrap().unwrap();
        selector.select(teal.id).unwrap();
        assert_eq!(*emitted.borrow(), ["Teal"]);

        selector.remove_custom(teal.id).unwrap();
        assert_eq!(*emitted.borrow(), ["Teal", "None"]);
        assert_eq!(
            selector.selected_id(),
            selector.label_set().fallback().id
        );
    }

    #[test]
    fn deleting_a_non_selected_label_is_silent() {
        let db = Database::open_in_memory().unwrap();
        let (emitted, callback) = capture();
        let mut selector =
            LabelSelector::open(&db, LabelKind::Color, "None", callback).unwrap();

        let teal = selector.add_custom("Teal").unwrap().unwrap();
        let rust = selector.add_custom("Rust").unwrap().unwrap();
        selector.select(teal.id).unwrap();
        emitted.borrow_mut().clear();

        selector.remove_custom(rust.id).unwrap();
        assert_eq!(selector.selected_id(), teal.id);
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn removing_an_unknown_id_leaves_the_session_intact() {
        let db = Database::open_in_memory().unwrap();
        let (emitted, callback) = capture();
        let mut selector =
            LabelSelector::open(&db, LabelKind::Color, "None", callback).unwrap();

        let before = selector.selected_id();
        let err = selector.remove_custom(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, LabelError::IdNotFound { .. }));
        assert_eq!(selector.selected_id(), before);
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn every_catalog_name_opens_a_selector() {
        let db = Database::open_in_memory().unwrap();
        let mut set = LabelSet::load(&db, LabelKind::Satisfaction).unwrap();
        set.add_custom("Runs long").unwrap();

        let names: Vec<String> = set
            .defaults()
            .iter()
            .chain(set.customs().iter())
            .map(|label| label.name.clone())
            .collect();
        for name in names {
            let opened =
                LabelSelector::open(&db, LabelKind::Satisfaction, &name, |_| {});
            assert!(opened.is_ok(), "'{name}' failed to resolve");
        }
    }

    #[test]
    fn opening_with_an_unresolvable_name_fails() {
        let db = Database::open_in_memory().unwrap();
        let opened = LabelSelector::open(&db, LabelKind::Size, "Tall", |_| {});
        assert!(matches!(opened, Err(LabelError::NameNotFound { .. })));
    }
}
