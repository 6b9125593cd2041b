pub mod error;
pub mod selector;
pub mod set;

pub use error::LabelError;
pub use selector::LabelSelector;
pub use set::LabelSet;
