//! Core utilities for Beanlink tools
//!
//! This crate provides shared functionality used by the Beanlink binaries:
//!
//! - **Error handling**: Structured errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use beanlink_core::config::Config;
//!
//! let config = Config::load(None).expect("valid configuration");
//! println!("Links resolve under {}", config.schema.digital_link.base);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};
