mod connection;
pub(crate) mod helpers;
pub mod models;
mod repositories;

pub use connection::Database;
