//! Configuration resolution.
//!
//! Flags win over environment variables, which win over defaults. The
//! owner/repository pair falls back to the `origin` remote of the working
//! directory's git repository.

mod resolve_config;

pub use resolve_config::{ConfigInputs, process_env, resolve_config};
