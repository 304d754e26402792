//! CLI utilities for Beanlink tools
//!
//! Provides shared CLI functionality:
//! - Status messages and aligned report fields
//! - JSON output

#![warn(missing_docs)]

pub mod output;
