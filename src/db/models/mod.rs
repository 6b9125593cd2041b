pub mod item;
pub mod label;

pub use item::Item;
pub use label::{Label, LabelKind, LabelOrigin};
