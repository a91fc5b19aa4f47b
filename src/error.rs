use thiserror::Error;

/// Errors that can occur while loading an SBML document
///
/// These never cross the flattening boundary as `Err` values: the loader
/// renders them into the ordered error-message list of the document handle,
/// and `flatten` copies that list into [`ModelResult::errors`].
///
/// [`ModelResult::errors`]: crate::flatten::model::ModelResult
#[derive(Debug, Error)]
pub enum LoadError {
    /// Error when reading the SBML file fails
    #[error("failed to read SBML file: {0}")]
    Read(#[from] std::io::Error),

    /// Error when the document is not well-formed SBML
    #[error("failed to parse SBML document: {0}")]
    Parse(#[from] quick_xml::DeError),

    /// Error when the document carries no model element
    #[error("SBML document contains no model element")]
    MissingModel,
}
