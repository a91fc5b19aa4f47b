//! Flat output value types
//!
//! Every type here is plain owned data: strings, integers, reals, and
//! vectors thereof. Nothing references the parsed document, so a
//! [`ModelResult`] can outlive the loader and cross a language or runtime
//! boundary as-is. All types serialize with serde for marshalling.

use serde::{Deserialize, Serialize};

/// One base-unit term of a named unit definition
///
/// Multiple parts sharing the same `unit` name are ordered as declared and
/// collectively define that unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitPart {
    /// Name of the owning unit definition
    pub unit: String,
    /// Base-unit kind token, e.g. "mole", "litre", "second"
    pub kind: String,
    pub exponent: i32,
    /// Power-of-ten multiplier
    pub scale: i32,
    pub multiplier: f64,
}

/// A species with its display name and the identifier of its owning
/// compartment
///
/// The compartment identifier is a soft reference; this layer does not
/// check that it names a declared compartment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: String,
    /// Display name, may be empty
    pub name: String,
    pub compartment: String,
}

/// Signed participation of one species in a reaction
///
/// Reactant coefficients are negative, product coefficients positive; the
/// magnitude is the declared stoichiometric coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoichiometryEntry {
    pub species: String,
    pub coefficient: f64,
}

/// A flux bound: a numeric value paired with a unit-definition identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub value: f64,
    /// Unit-definition identifier, empty when the bound is a default
    pub unit: String,
}

impl Bound {
    /// Default lower bound: negative infinity with no unit.
    pub const fn unbounded_below() -> Self {
        Self {
            value: f64::NEG_INFINITY,
            unit: String::new(),
        }
    }

    /// Default upper bound: positive infinity with no unit.
    pub const fn unbounded_above() -> Self {
        Self {
            value: f64::INFINITY,
            unit: String::new(),
        }
    }
}

/// A flattened reaction with embedded stoichiometry, flux bounds, and
/// objective coefficient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: String,
    /// All reactants in declared order, then all products in declared
    /// order; entries are never merged or deduplicated by species
    pub stoichiometry: Vec<StoichiometryEntry>,
    pub lower_bound: Bound,
    pub upper_bound: Bound,
    pub objective_coefficient: f64,
}

impl Default for Reaction {
    fn default() -> Self {
        Self {
            id: String::new(),
            stoichiometry: Vec::new(),
            lower_bound: Bound::unbounded_below(),
            upper_bound: Bound::unbounded_above(),
            objective_coefficient: 0.0,
        }
    }
}

/// The root aggregate produced by one flattening pass
///
/// Either an error report or a data report, never both: when `errors` is
/// non-empty all other lists are empty. Every list preserves the
/// declaration order of the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    /// Structural load errors, in the order the loader reported them
    pub errors: Vec<String>,
    pub units: Vec<UnitPart>,
    /// Compartment identifiers, no deduplication
    pub compartments: Vec<String>,
    pub species: Vec<Species>,
    pub reactions: Vec<Reaction>,
}

impl ModelResult {
    /// Creates an error report with all data lists empty.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            errors,
            ..Default::default()
        }
    }

    /// Whether this aggregate is an error report.
    pub fn is_err(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_reaction_defaults() {
        let reaction = Reaction::default();

        assert_eq!(reaction.lower_bound.value, f64::NEG_INFINITY);
        assert_eq!(reaction.lower_bound.unit, "");
        assert_eq!(reaction.upper_bound.value, f64::INFINITY);
        assert_eq!(reaction.upper_bound.unit, "");
        assert_eq!(reaction.objective_coefficient, 0.0);
        assert!(reaction.stoichiometry.is_empty());
    }

    #[test]
    fn test_error_report_has_empty_data_lists() {
        let result = ModelResult::from_errors(vec!["boom".to_string()]);

        assert!(result.is_err());
        assert!(result.units.is_empty());
        assert!(result.compartments.is_empty());
        assert!(result.species.is_empty());
        assert!(result.reactions.is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let species = Species {
            id: "M_glc_c".to_string(),
            name: "glucose".to_string(),
            compartment: "cytosol".to_string(),
        };

        let json = serde_json::to_string(&species).unwrap();
        let back: Species = serde_json::from_str(&json).unwrap();
        assert_eq!(species, back);
    }
}
