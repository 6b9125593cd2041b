//! Wardrobe tracking core: item records plus the taxonomy subsystem that
//! keeps their label fields (category, brand, size, fit, satisfaction,
//! color) consistent with per-kind label catalogs.
//!
//! The presentation layer owns a [`Database`] handle and opens a
//! [`LabelSelector`] per edited field; everything here is synchronous and
//! single-threaded.

pub mod db;
pub mod labels;

pub use db::models::{Item, Label, LabelKind, LabelOrigin};
pub use db::Database;
pub use labels::{LabelError, LabelSelector, LabelSet};
