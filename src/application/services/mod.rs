//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on boundary traits (FileSystem, CategoryLookup)
//! but are themselves concrete structs, not traits.

mod category;

pub use category::{CategoryFile, CategoryService};
