//! The flattening pass
//!
//! This module walks a loaded SBML model tree and produces a [`ModelResult`]:
//! independent, ordered lists of unit parts, compartment identifiers,
//! species, and reactions with embedded stoichiometry and flux bounds.
//! No references into the parsed document survive; every string is copied.
//!
//! ## Pipeline
//!
//! 1. **Load**: the document is parsed through [`SbmlDocument`]. If any
//!    structural error was reported, the error messages are copied into the
//!    result in order and flattening stops. This is the sole early-exit
//!    path.
//! 2. **Detach**: the model subtree is moved out of the document handle so
//!    the handle's storage is released before traversal.
//! 3. **Traverse**: unit definitions, compartments, species, and reactions
//!    are visited in declaration order, emitting one flat value per source
//!    entity. Output order is a pure function of input declaration order;
//!    no sorting or map-based iteration happens on this path, so two runs
//!    over the same file produce identical results.
//!
//! ## Flux bounds and objective coefficient
//!
//! COBRA-style SBML carries per-reaction flux metadata as kinetic-law
//! parameters under fixed identifier tokens. Reactions without a kinetic
//! law, or without some of these parameters, keep the documented defaults
//! (unbounded flux, zero objective coefficient); that is not an error.

use std::path::Path;

use crate::{
    document::{loader::SbmlDocument, schema},
    error::LoadError,
    flatten::model::{Bound, ModelResult, Reaction, Species, StoichiometryEntry, UnitPart},
};

/// Kinetic-law parameter identifier carrying the lower flux bound
const LOWER_BOUND: &str = "LOWER_BOUND";
/// Kinetic-law parameter identifier carrying the upper flux bound
const UPPER_BOUND: &str = "UPPER_BOUND";
/// Kinetic-law parameter identifier carrying the objective coefficient
const OBJECTIVE_COEFFICIENT: &str = "OBJECTIVE_COEFFICIENT";

/// Loads an SBML file and flattens its model into a [`ModelResult`].
///
/// This function always returns a well-formed aggregate and never panics on
/// malformed input: load failures are reported through the result's error
/// list with all data lists empty, and missing optional data inside a valid
/// document falls back to documented defaults.
///
/// # Arguments
/// * `path` - Path to the SBML file to flatten
pub fn flatten(path: impl AsRef<Path>) -> ModelResult {
    let document = SbmlDocument::load(path.as_ref());
    if document.error_count() > 0 {
        return ModelResult::from_errors(document.into_errors());
    }

    // Take the model subtree by value so the document handle is gone
    // before any output is produced.
    let Some(model) = document.into_model() else {
        return ModelResult::from_errors(vec![LoadError::MissingModel.to_string()]);
    };

    let mut result = ModelResult::default();

    for definition in &model.unit_definitions.unit_definitions {
        for unit in &definition.units.units {
            result.units.push(UnitPart {
                unit: definition.name.clone(),
                kind: unit.kind.clone(),
                exponent: unit.exponent,
                scale: unit.scale,
                multiplier: unit.multiplier,
            });
        }
    }

    for compartment in &model.compartments.compartments {
        result.compartments.push(compartment.id.clone());
    }

    for species in &model.species.species {
        result.species.push(Species {
            id: species.id.clone(),
            name: species.name.clone(),
            compartment: species.compartment.clone(),
        });
    }

    for reaction in &model.reactions.reactions {
        result.reactions.push(Reaction::from(reaction));
    }

    result
}

/// Flattens one reaction: recovers flux bounds and objective coefficient
/// from the kinetic-law parameters and applies the sign convention to the
/// reactant and product references.
impl From<&schema::Reaction> for Reaction {
    fn from(reaction: &schema::Reaction) -> Self {
        let mut flat = Reaction {
            id: reaction.id.clone(),
            ..Default::default()
        };

        if let Some(kinetic_law) = &reaction.kinetic_law {
            // Exact token match, in declared order; the last match wins
            // when a token occurs more than once.
            for parameter in &kinetic_law.parameters.parameters {
                match parameter.id.as_str() {
                    LOWER_BOUND => {
                        flat.lower_bound = Bound {
                            value: parameter.value,
                            unit: parameter.units.clone(),
                        }
                    }
                    UPPER_BOUND => {
                        flat.upper_bound = Bound {
                            value: parameter.value,
                            unit: parameter.units.clone(),
                        }
                    }
                    OBJECTIVE_COEFFICIENT => flat.objective_coefficient = parameter.value,
                    _ => {}
                }
            }
        }

        // Reactants first, negated; then products as declared. A species
        // appearing on both sides keeps both entries.
        for reference in &reaction.reactants.species_references {
            flat.stoichiometry.push(StoichiometryEntry {
                species: reference.species.clone(),
                coefficient: -reference.stoichiometry,
            });
        }
        for reference in &reaction.products.species_references {
            flat.stoichiometry.push(StoichiometryEntry {
                species: reference.species.clone(),
                coefficient: reference.stoichiometry,
            });
        }

        flat
    }
}
