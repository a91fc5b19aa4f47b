//! SBML document handle with load-time error collection
//!
//! [`SbmlDocument`] is the loader side of the flattening pipeline: it opens
//! and parses a model file and accumulates structural errors instead of
//! failing, so callers can query the outcome through a uniform interface:
//! `error_count`/`error_message` for the failure report, `model` for the
//! parsed tree when loading succeeded. A document never exposes a model and
//! errors at the same time.

use std::{fs, path::Path};

use crate::{document::schema, error::LoadError};

/// Handle to a loaded SBML document
///
/// Holds either the parsed model subtree or the ordered list of error
/// messages produced while loading, never both.
#[derive(Debug, Default)]
pub struct SbmlDocument {
    errors: Vec<String>,
    model: Option<schema::Model>,
}

impl SbmlDocument {
    /// Opens and parses an SBML file.
    ///
    /// This never fails: I/O and deserialization problems are recorded as
    /// error messages on the returned handle, in the order they occurred.
    ///
    /// # Arguments
    /// * `path` - Path to the SBML file to load
    pub fn load(path: impl AsRef<Path>) -> Self {
        let xml = match fs::read_to_string(path.as_ref()) {
            Ok(xml) => xml,
            Err(error) => return Self::from_error(LoadError::Read(error)),
        };

        match quick_xml::de::from_str::<schema::SbmlFile>(&xml) {
            Ok(file) => Self {
                errors: Vec::new(),
                model: file.model,
            },
            Err(error) => Self::from_error(LoadError::Parse(error)),
        }
    }

    /// Creates a handle that only carries a single load error.
    fn from_error(error: LoadError) -> Self {
        Self {
            errors: vec![error.to_string()],
            model: None,
        }
    }

    /// Number of structural errors accumulated while loading.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Error message at `index`, in load order.
    pub fn error_message(&self, index: usize) -> Option<&str> {
        self.errors.get(index).map(String::as_str)
    }

    /// All error messages, in load order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// The parsed model subtree, present only when loading succeeded.
    pub fn model(&self) -> Option<&schema::Model> {
        self.model.as_ref()
    }

    /// Consumes the handle and takes ownership of the model subtree.
    ///
    /// Moving the model out releases the rest of the document before the
    /// caller traverses it, so nothing produced downstream can reference
    /// the handle's storage.
    pub fn into_model(self) -> Option<schema::Model> {
        self.model
    }

    /// Consumes the handle and takes ownership of the error messages.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}
