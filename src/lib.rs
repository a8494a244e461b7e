pub mod artifacts;
pub mod cli;
pub mod clients;
pub mod comment;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod tags;
pub mod types;

pub use error::{AppError, Result};
