//! Configuration loading and schema definitions
//!
//! Shared by every Beanlink binary; see [`Config::load`] for lookup order.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
