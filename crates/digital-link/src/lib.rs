//! GS1 Digital Link codec for Beanlink.
//!
//! This crate provides:
//! - Digital Link URL construction (full and QR-compact forms)
//! - Path parsing back into GTIN / lot / serial keys
//! - GTIN and link validation
//! - WASM bindings for the storefront and mobile shell
//!
//! # Example
//!
//! ```
//! use beanlink_digital_link::{
//!     build_digital_link, extract_digital_link_from_url, DigitalLinkKeys, DEFAULT_BASE,
//! };
//!
//! let keys = DigitalLinkKeys::new("09506000134352").with_lot("L2305");
//! let link = build_digital_link(&keys, DEFAULT_BASE);
//!
//! let back = extract_digital_link_from_url(&link).unwrap();
//! assert_eq!(back, keys);
//! ```

#![warn(missing_docs)]

mod ai;
mod decode;
mod encode;
mod error;
mod keys;
mod validate;

#[cfg(feature = "wasm")]
mod wasm;

pub use ai::ApplicationIdentifier;
pub use decode::{extract_digital_link_from_url, parse_digital_link, try_parse_digital_link};
pub use encode::{build_digital_link, build_qr_friendly_digital_link, DEFAULT_BASE};
pub use error::{DigitalLinkError, DigitalLinkErrorCode, Result};
pub use keys::DigitalLinkKeys;
pub use validate::{gtin_check_digit_is_valid, is_valid_digital_link, is_valid_gtin};
