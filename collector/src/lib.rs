//! Regulatory Watch Collector
//!
//! Layered architecture:
//! - domain: snapshot entities and label classification
//! - source: feed access abstractions and the Google News implementation
//! - pipeline: dedupe, classify, normalize and order entries
//! - output: snapshot files consumed by the frontend

pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod source;
pub mod text;

pub use config::Config;
pub use error::{CollectError, CollectResult};
