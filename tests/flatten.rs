//! End-to-end tests of the flattening pipeline over SBML fixture files.

use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use sbmlflat::prelude::*;

fn fixture(name: &str) -> String {
    format!("tests/data/{}", name)
}

#[test]
fn test_flatten_toy_model() {
    let result = flatten(fixture("toy_fba.xml"));

    assert!(!result.is_err());
    assert!(result.errors.is_empty());

    // Unit expansion: three parts, all tagged with the owning definition
    // name, in declared order. The empty "placeholder" definition
    // contributes nothing.
    assert_eq!(result.units.len(), 3);
    for part in &result.units {
        assert_eq!(part.unit, "mmol_per_gDW_per_hr");
    }
    assert_eq!(result.units[0].kind, "mole");
    assert_eq!(result.units[0].exponent, 1);
    assert_eq!(result.units[0].scale, -3);
    assert_eq!(result.units[0].multiplier, 1.0);
    assert_eq!(result.units[1].kind, "gram");
    assert_eq!(result.units[1].exponent, -1);
    assert_eq!(result.units[1].scale, 0);
    assert_eq!(result.units[2].kind, "second");
    assert_relative_eq!(result.units[2].multiplier, 0.000277778);

    assert_eq!(result.compartments, vec!["cytosol", "extracellular"]);

    assert_eq!(result.species.len(), 3);
    assert_eq!(result.species[0].id, "M_glc_e");
    assert_eq!(result.species[0].name, "glucose");
    assert_eq!(result.species[0].compartment, "extracellular");
    assert_eq!(result.species[2].id, "M_atp_c");
    assert_eq!(result.species[2].compartment, "cytosol");

    assert_eq!(result.reactions.len(), 2);
}

#[test]
fn test_flatten_bounds_and_stoichiometry() {
    let result = flatten(fixture("toy_fba.xml"));

    let transport = &result.reactions[0];
    assert_eq!(transport.id, "R_GLCpts");
    assert_eq!(transport.lower_bound.value, -10.0);
    assert_eq!(transport.lower_bound.unit, "mmol_per_gDW_per_hr");
    assert_eq!(transport.upper_bound.value, 1000.0);
    assert_eq!(transport.upper_bound.unit, "");
    assert_eq!(transport.objective_coefficient, 1.0);

    // Reactants negated in declared order, then products as declared.
    assert_eq!(
        transport.stoichiometry,
        vec![
            StoichiometryEntry {
                species: "M_glc_e".to_string(),
                coefficient: -2.0,
            },
            StoichiometryEntry {
                species: "M_glc_c".to_string(),
                coefficient: 1.0,
            },
        ]
    );

    // No kinetic law at all keeps the defaults without faulting.
    let leak = &result.reactions[1];
    assert_eq!(leak.id, "R_ATPleak");
    assert_eq!(leak.lower_bound.value, f64::NEG_INFINITY);
    assert_eq!(leak.lower_bound.unit, "");
    assert_eq!(leak.upper_bound.value, f64::INFINITY);
    assert_eq!(leak.objective_coefficient, 0.0);
    assert_eq!(leak.stoichiometry.len(), 1);
    assert_eq!(leak.stoichiometry[0].species, "M_atp_c");
    assert_eq!(leak.stoichiometry[0].coefficient, -1.0);
}

#[test]
fn test_repeated_compartment_ids_kept_in_order() {
    let result = flatten(fixture("repeated_compartments.xml"));

    assert!(!result.is_err());
    assert_eq!(result.compartments, vec!["c1", "c2", "c1"]);
}

#[test]
fn test_flatten_is_deterministic() {
    let first = flatten(fixture("toy_fba.xml"));
    let second = flatten(fixture("toy_fba.xml"));

    assert_eq!(first, second);
}

#[test]
fn test_flatten_truncated_document() {
    let result = flatten(fixture("truncated.xml"));

    assert!(result.is_err());
    assert!(result.errors[0].starts_with("failed to parse SBML document"));
    assert!(result.units.is_empty());
    assert!(result.compartments.is_empty());
    assert!(result.species.is_empty());
    assert!(result.reactions.is_empty());
}

#[test]
fn test_flatten_document_without_model() {
    let result = flatten(fixture("no_model.xml"));

    assert!(result.is_err());
    assert_eq!(result.errors, vec!["SBML document contains no model element"]);
    assert!(result.units.is_empty());
    assert!(result.compartments.is_empty());
    assert!(result.species.is_empty());
    assert!(result.reactions.is_empty());
}

#[test]
fn test_loader_queries_match_flatten_errors() {
    let document = SbmlDocument::load(fixture("truncated.xml"));
    let result = flatten(fixture("truncated.xml"));

    assert_eq!(document.error_count(), result.errors.len());
    for (index, message) in result.errors.iter().enumerate() {
        assert_eq!(document.error_message(index), Some(message.as_str()));
    }
}

#[test]
fn test_result_serializes_to_json() {
    let result = flatten(fixture("toy_fba.xml"));

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("R_GLCpts"));
    assert!(json.contains("mmol_per_gDW_per_hr"));
}
