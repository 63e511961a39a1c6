//! Collision-free symbolic names.
//!
//! A [`NameRegistry`] hands out names derived from caller-supplied candidates,
//! appending a separator and a number whenever a candidate is empty or has
//! already been issued.
mod config;
mod error;
pub mod probe;
mod registry;
pub mod stem;
pub use config::RegistryConfig;
pub use error::{Error, Result};
pub use registry::NameRegistry;
