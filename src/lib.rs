pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod records;
pub mod render;
pub mod roster;
pub mod store;

pub use error::{Result, RosterError};
pub use roster::Roster;
pub use store::Store;
