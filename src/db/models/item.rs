//! Wardrobe item data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::label::LabelKind;

/// One tracked piece of clothing. The six label fields store label names,
/// not ids, so deleting a custom label repairs items by rewriting names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub size: String,
    pub fit: String,
    pub satisfaction: String,
    pub color: String,
    pub price: String,
    pub order_date: DateTime<Utc>,
    pub url: String,
    pub note: String,
}

impl Item {
    /// A fresh item with every label field on its kind's starting default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: "Outer".to_string(),
            brand: "None".to_string(),
            size: "Free".to_string(),
            fit: "Regular".to_string(),
            satisfaction: "Fit".to_string(),
            color: "None".to_string(),
            price: String::new(),
            order_date: Utc::now(),
            url: String::new(),
            note: String::new(),
        }
    }

    pub fn label_name(&self, kind: LabelKind) -> &str {
        match kind {
            LabelKind::Category => &self.category,
            LabelKind::Brand => &self.brand,
            LabelKind::Color => &self.color,
            LabelKind::Fit => &self.fit,
            LabelKind::Satisfaction => &self.satisfaction,
            LabelKind::Size => &self.size,
        }
    }

    pub fn set_label_name(&mut self, kind: LabelKind, name: impl Into<String>) {
        let name = name.into();
        match kind {
            LabelKind::Category => self.category = name,
            LabelKind::Brand => self.brand = name,
            LabelKind::Color => self.color = name,
            LabelKind::Fit => self.fit = name,
            LabelKind::Satisfaction => self.satisfaction = name,
            LabelKind::Size => self.size = name,
        }
    }

    /// True when any field other than the id differs. Used by editors to
    /// decide whether there is anything to save.
    pub fn differs_from(&self, other: &Item) -> bool {
        self.name != other.name
            || self.category != other.category
            || self.brand != other.brand
            || self.size != other.size
            || self.fit != other.fit
            || self.satisfaction != other.satisfaction
            || self.color != other.color
            || self.price != other.price
            || self.order_date != other.order_date
            || self.url != other.url
            || self.note != other.note
    }
}
