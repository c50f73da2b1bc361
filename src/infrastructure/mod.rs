//! Infrastructure layer: boundary implementations and DI container
//!
//! This layer implements boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod lookup;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use lookup::InMemoryCategoryLookup;
