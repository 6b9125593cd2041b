//! Label-related data models.
//!
//! A label is one named entry in a per-kind catalog (brand names, colors,
//! fits, ...). Built-in defaults are constructed fresh at catalog load and
//! never persisted; user-created customs live in the `labels` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The six item fields that are picked from a label catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum LabelKind {
    Category,
    Brand,
    Color,
    Fit,
    Satisfaction,
    Size,
}

impl LabelKind {
    pub const ALL: [LabelKind; 6] = [
        LabelKind::Category,
        LabelKind::Brand,
        LabelKind::Color,
        LabelKind::Fit,
        LabelKind::Satisfaction,
        LabelKind::Size,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelKind::Category => "Category",
            LabelKind::Brand => "Brand",
            LabelKind::Color => "Color",
            LabelKind::Fit => "Fit",
            LabelKind::Satisfaction => "Satisfaction",
            LabelKind::Size => "Size",
        }
    }

    /// Built-in label names for this kind, in display order.
    pub fn default_names(&self) -> &'static [&'static str] {
        match self {
            LabelKind::Category => &["Outer", "Top", "Bottom", "Shoes", "Acc"],
            LabelKind::Brand => &["None"],
            LabelKind::Color => &["None"],
            LabelKind::Fit => &["Slim", "Regular", "SemiOver", "Over"],
            LabelKind::Satisfaction => &["Small", "Fit", "Big"],
            LabelKind::Size => &["Free", "S", "M", "L", "XL", "None"],
        }
    }

    /// The default an item field reverts to when its selected label is
    /// deleted. Always one of `default_names`.
    pub fn fallback_name(&self) -> &'static str {
        match self {
            LabelKind::Category => "Outer",
            LabelKind::Brand => "None",
            LabelKind::Color => "None",
            LabelKind::Fit => "Regular",
            LabelKind::Satisfaction => "Fit",
            LabelKind::Size => "None",
        }
    }
}

impl std::fmt::Display for LabelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LabelOrigin {
    Default,
    Custom,
}

/// One entry in a label catalog. Identity is the id, never the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: Uuid,
    pub kind: LabelKind,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub origin: LabelOrigin,
}

impl Label {
    pub fn new_default(kind: LabelKind, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: name.into(),
            created_at: Utc::now(),
            origin: LabelOrigin::Default,
        }
    }

    pub fn new_custom(kind: LabelKind, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: name.into(),
            created_at: Utc::now(),
            origin: LabelOrigin::Custom,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.origin == LabelOrigin::Custom
    }
}
