//! Version and capability introspection of the parsing stack
//!
//! Thin, stateless passthrough queries mirroring the version interface of
//! the original libsbml bindings: a dotted version, a single version
//! integer, and lookups over the libraries the parsing stack is built with.
//! None of these retain state between calls.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Libraries the parsing stack is compiled with, and their versions
    static ref DEPENDENCY_VERSIONS: HashMap<&'static str, &'static str> = {
        let mut versions = HashMap::new();
        versions.insert("quick-xml", "0.38");
        versions.insert("serde", "1.0");
        versions
    };
}

/// Crate version in dotted "major.minor.patch" form.
pub fn dotted_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Crate version as a single integer: major * 10000 + minor * 100 + patch.
pub fn version_number() -> u32 {
    let major: u32 = env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0);
    let minor: u32 = env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0);
    let patch: u32 = env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or(0);
    major * 10_000 + minor * 100 + patch
}

/// Decimal rendering of [`version_number`].
pub fn version_string() -> String {
    version_number().to_string()
}

/// Whether the named library is part of the parsing stack.
pub fn is_compiled_with(feature: &str) -> bool {
    DEPENDENCY_VERSIONS.contains_key(feature)
}

/// Version of a named stack dependency.
///
/// Returns the empty string for unknown names so callers never observe an
/// absent value.
pub fn dependency_version_of(name: &str) -> String {
    DEPENDENCY_VERSIONS
        .get(name)
        .map(|version| (*version).to_string())
        .unwrap_or_default()
}
