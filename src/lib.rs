//! SBML Flattening Library
//!
//! This library converts SBML models into flat, self-contained data
//! structures suitable for transfer across a language or runtime boundary.
//! It provides functionality for:
//! - Loading SBML documents into an in-memory tree with error collection
//! - Flattening the model tree into independent, order-preserving lists
//! - Recovering flux bounds and objective coefficients from kinetic laws
//! - Introspecting the version of the parsing stack

#![warn(unused_imports)]

/// SBML document loading and the serde schema it deserializes into
pub mod document {
    /// Document handle with load-time error collection
    pub mod loader;
    /// Serde data model of the consumed SBML subset
    pub mod schema;
}

/// The core flattening pass and its output data model
pub mod flatten {
    /// Flattening algorithm and schema-to-flat conversions
    pub mod extract;
    /// Flat output value types
    pub mod model;
}

/// Load-time error types
pub mod error;

/// Table display for flattened models
pub mod info;

/// Version and capability introspection of the parsing stack
pub mod version;

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::document::loader::SbmlDocument;
    pub use crate::error::LoadError;
    pub use crate::flatten::extract::flatten;
    pub use crate::flatten::model::{
        Bound, ModelResult, Reaction, Species, StoichiometryEntry, UnitPart,
    };
    pub use crate::version::*;
}
