pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod prompt;
pub mod repo;
pub mod store;
pub mod ui;

pub use error::{DocSyncError, Result};
