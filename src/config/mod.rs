//! Configuration module for reelrank
//!
//! Every setting has a built-in default matching the tool's original
//! behavior; a TOML file only needs to mention the keys it overrides.
//!
//! # Example
//!
//! ```no_run
//! use reelrank::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("reelrank.toml")).unwrap();
//! println!("Mining from: {}", config.source.url);
//! ```

mod parser;
mod types;

pub use parser::{load_config, validate};
pub use types::{Config, OutputConfig, SourceConfig, ViewerConfig};
