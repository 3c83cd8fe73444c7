//! Scrapes the faculty overview page for names and office rooms
//! and saves them as a JSON list.

mod config;
mod error;
mod macros;
pub mod parse;
pub mod process;
mod request;
pub mod write;

pub use config::{
    Config, DEFAULT_BASE_URL, DEFAULT_OUTPUT_PATH, DEFAULT_OVERVIEW_PATH, DEFAULT_USER_AGENT,
};
pub use error::{Error, Result, Skip};
pub use parse::PersonRecord;
