//! replace: literal string substitution for text streams
//!
//! Mappings come from `--map`/`--to` flag pairs and an optional JSON mapping
//! file; file entries override flag entries. The merged mapping is applied in
//! a fixed order to the input text.
//!
//! # Architecture
//!
//! - `domain`: `Mapping` construction, merge and apply (no I/O)
//! - `application`: `ReplaceService`, JSON mapping file decoding, input reconstruction
//! - `infrastructure`: filesystem boundary and service wiring
//! - `config`: layered settings (defaults, config file, `REPLACE_*` env vars)
//! - `cli`: clap arguments, dispatch and error reporting

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod util;
