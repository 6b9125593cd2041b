//! The combined label catalog for one kind.

use log::{debug, error};
use uuid::Uuid;

use crate::db::models::{Label, LabelKind};
use crate::db::Database;
use crate::labels::error::LabelError;

/// Name comparison key: all whitespace stripped, lowercased. "Red", "red "
/// and " RED" all collide.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// The catalog of labels for one kind: built-in defaults first, then the
/// user's custom labels, newest first.
///
/// Defaults are constructed fresh on every `load` and never touch the
/// database; customs are persisted through the handle given at load time.
pub struct LabelSet {
    db: Database,
    kind: LabelKind,
    defaults: Vec<Label>,
    customs: Vec<Label>,
    fallback_idx: usize,
}

impl LabelSet {
    pub fn load(db: &Database, kind: LabelKind) -> Result<Self, LabelError> {
        let defaults: Vec<Label> = kind
            .default_names()
            .iter()
            .map(|name| Label::new_default(kind, *name))
            .collect();

        let fallback_idx = defaults
            .iter()
            .position(|label| label.name == kind.fallback_name())
            .unwrap_or_else(|| panic!("{kind} fallback is missing from its defaults"));

        let customs = db.get_custom_labels(kind)?;

        Ok(Self {
            db: db.clone(),
            kind,
            defaults,
            customs,
            fallback_idx,
        })
    }

    pub fn kind(&self) -> LabelKind {
        self.kind
    }

    pub fn defaults(&self) -> &[Label] {
        &self.defaults
    }

    pub fn customs(&self) -> &[Label] {
        &self.customs
    }

    /// The default label a field reverts to when its selection is deleted.
    pub fn fallback(&self) -> &Label {
        &self.defaults[self.fallback_idx]
    }

    /// Resolve a stored item-field name to a label id, customs first.
    ///
    /// The name is expected to come from a previously valid item field, so a
    /// miss means the reference is already broken upstream.
    pub fn resolve_id_by_name(&self, name: &str) -> Result<Uuid, LabelError> {
        match self
            .customs
            .iter()
            .chain(self.defaults.iter())
            .find(|label| label.name == name)
        {
            Some(label) => Ok(label.id),
            None => {
                error!("No {} label named '{name}'", self.kind);
                Err(LabelError::NameNotFound {
                    kind: self.kind,
                    name: name.to_string(),
                })
            }
        }
    }

    /// Resolve a held id back to its label, customs first. A miss means the
    /// id went stale (the label was deleted through another path).
    pub fn resolve_by_id(&self, id: Uuid) -> Result<&Label, LabelError> {
        match self
            .customs
            .iter()
            .chain(self.defaults.iter())
            .find(|label| label.id == id)
        {
            Some(label) => Ok(label),
            None => {
                error!("No {} label with id {id}", self.kind);
                Err(LabelError::IdNotFound {
                    kind: self.kind,
                    id,
                })
            }
        }
    }

    /// A candidate is acceptable iff it is non-empty after stripping all
    /// whitespace and collides with no existing default or custom name.
    pub fn validate_new_name(&self, candidate: &str) -> bool {
        let normalized = normalize(candidate);
        if normalized.is_empty() {
            return false;
        }

        self.customs
            .iter()
            .chain(self.defaults.iter())
            .all(|label| normalize(&label.name) != normalized)
    }

    /// Create, persist, and prepend a custom label. The stored name keeps
    /// interior spacing but loses leading/trailing whitespace.
    pub fn add_custom(&mut self, name: &str) -> Result<Label, LabelError> {
        if !self.validate_new_name(name) {
            return Err(LabelError::InvalidName {
                kind: self.kind,
                name: name.to_string(),
            });
        }

        let label = Label::new_custom(self.kind, name.trim());
        self.db.insert_custom_label(&label)?;
        self.customs.insert(0, label.clone());
        debug!("Added {} label '{}'", self.kind, label.name);

        Ok(label)
    }

    /// Delete a custom label from the store and the catalog.
    ///
    /// Panics when given a default label's id: the selection surface never
    /// offers defaults for deletion, so reaching that is a caller bug. An id
    /// matching nothing at all is reported as `IdNotFound`.
    pub fn remove_custom(&mut self, id: Uuid) -> Result<(), LabelError> {
        if let Some(default) = self.defaults.iter().find(|label| label.id == id) {
            panic!(
                "attempted to remove built-in {} label '{}'",
                self.kind, default.name
            );
        }

        let idx = match self.customs.iter().position(|label| label.id == id) {
            Some(idx) => idx,
            None => {
                error!("No {} label with id {id}", self.kind);
                return Err(LabelError::IdNotFound {
                    kind: self.kind,
                    id,
                });
            }
        };

        self.db.delete_custom_label(id)?;
        let removed = self.customs.remove(idx);
        debug!("Removed {} label '{}'", self.kind, removed.name);

        Ok(())
    }
}
