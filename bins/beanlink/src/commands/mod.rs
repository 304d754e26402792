//! CLI command implementations

pub mod hmac;
pub mod link;
