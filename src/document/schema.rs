//! Serde data model for the consumed SBML subset
//!
//! This module mirrors the part of the SBML document structure the flattening
//! pass traverses: unit definitions with their units, compartments, species,
//! and reactions with their kinetic-law parameters and ordered reactant and
//! product references. Everything else an SBML file may carry (`notes`,
//! `annotation`, MathML content, rules, events) is ignored during
//! deserialization.
//!
//! # Representation
//!
//! SBML wraps repeated elements in `listOf*` containers, so every collection
//! is a dedicated wrapper struct with a defaulted `Vec` field. Attributes
//! that SBML defines as optional with a numeric default (`exponent`, `scale`,
//! `multiplier`, `stoichiometry`) default here to the values the SBML
//! specification prescribes, so a bare `<unit kind="mole"/>` round-trips to
//! the same numbers libsbml would report.
//!
//! # XML Structure
//!
//! ```xml
//! <sbml xmlns="http://www.sbml.org/sbml/level2" level="2" version="1">
//!   <model id="toy">
//!     <listOfUnitDefinitions>
//!       <unitDefinition id="mmol_per_gDW_per_hr" name="mmol_per_gDW_per_hr">
//!         <listOfUnits>
//!           <unit kind="mole" scale="-3"/>
//!         </listOfUnits>
//!       </unitDefinition>
//!     </listOfUnitDefinitions>
//!     ...
//!   </model>
//! </sbml>
//! ```

use serde::Deserialize;

/// SBML attribute default for `exponent`
fn default_exponent() -> i32 {
    1
}

/// SBML attribute default for `multiplier` and `stoichiometry`
fn default_multiplier() -> f64 {
    1.0
}

/// Root element of an SBML file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "sbml")]
pub struct SbmlFile {
    /// The single model the document describes, absent in degenerate files
    #[serde(default)]
    pub model: Option<Model>,
}

/// The SBML model subtree consumed by the flattener
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Model {
    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "listOfUnitDefinitions", default)]
    pub unit_definitions: ListOfUnitDefinitions,

    #[serde(rename = "listOfCompartments", default)]
    pub compartments: ListOfCompartments,

    #[serde(rename = "listOfSpecies", default)]
    pub species: ListOfSpecies,

    #[serde(rename = "listOfReactions", default)]
    pub reactions: ListOfReactions,
}

/// Container for unit definitions, preserving declaration order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOfUnitDefinitions {
    #[serde(rename = "unitDefinition", default)]
    pub unit_definitions: Vec<UnitDefinition>,
}

/// A named composite unit built from an ordered product of base units
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnitDefinition {
    #[serde(rename = "@id", default)]
    pub id: String,

    /// Display name of the definition; the flattened output is keyed by it
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "listOfUnits", default)]
    pub units: ListOfUnits,
}

/// Container for the base units of one definition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOfUnits {
    #[serde(rename = "unit", default)]
    pub units: Vec<Unit>,
}

/// One base-unit term of a unit definition
///
/// `kind` is a token from the fixed SBML unit-kind vocabulary ("mole",
/// "litre", "second", ...). It is kept as a plain string so the loader stays
/// lenient towards kinds it has never seen.
#[derive(Debug, Clone, Deserialize)]
pub struct Unit {
    #[serde(rename = "@kind", default)]
    pub kind: String,

    #[serde(rename = "@exponent", default = "default_exponent")]
    pub exponent: i32,

    /// Power-of-ten multiplier
    #[serde(rename = "@scale", default)]
    pub scale: i32,

    #[serde(rename = "@multiplier", default = "default_multiplier")]
    pub multiplier: f64,
}

/// Container for compartments, preserving declaration order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOfCompartments {
    #[serde(rename = "compartment", default)]
    pub compartments: Vec<Compartment>,
}

/// A physical or logical container species reside in
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Compartment {
    #[serde(rename = "@id", default)]
    pub id: String,
}

/// Container for species, preserving declaration order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOfSpecies {
    #[serde(rename = "species", default)]
    pub species: Vec<Species>,
}

/// A biochemical entity located in a compartment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Species {
    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(rename = "@name", default)]
    pub name: String,

    /// Identifier of the owning compartment, a soft reference
    #[serde(rename = "@compartment", default)]
    pub compartment: String,
}

/// Container for reactions, preserving declaration order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOfReactions {
    #[serde(rename = "reaction", default)]
    pub reactions: Vec<Reaction>,
}

/// A reaction with ordered reactant/product references and an optional
/// kinetic law carrying flux-bound metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Reaction {
    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(rename = "listOfReactants", default)]
    pub reactants: ListOfSpeciesReferences,

    #[serde(rename = "listOfProducts", default)]
    pub products: ListOfSpeciesReferences,

    #[serde(rename = "kineticLaw", default)]
    pub kinetic_law: Option<KineticLaw>,
}

/// Container for the reactant or product references of a reaction
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOfSpeciesReferences {
    #[serde(rename = "speciesReference", default)]
    pub species_references: Vec<SpeciesReference>,
}

/// Quantitative participation of one species in a reaction
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesReference {
    #[serde(rename = "@species", default)]
    pub species: String,

    /// Unsigned magnitude as declared; the flattener applies the sign
    #[serde(rename = "@stoichiometry", default = "default_multiplier")]
    pub stoichiometry: f64,
}

/// Rate law of a reaction; only its parameter list is consumed
///
/// COBRA-style models repurpose these parameters to carry flux bounds and
/// the objective coefficient under fixed identifier tokens. The MathML
/// `math` child is skipped during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KineticLaw {
    #[serde(rename = "listOfParameters", default)]
    pub parameters: ListOfParameters,
}

/// Container for the local parameters of a kinetic law
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOfParameters {
    #[serde(rename = "parameter", default)]
    pub parameters: Vec<Parameter>,
}

/// A named numeric attribute attached to a kinetic law
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(rename = "@value", default)]
    pub value: f64,

    #[serde(rename = "@units", default)]
    pub units: String,
}
