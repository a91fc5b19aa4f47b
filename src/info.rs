//! Information display module for flattened models
//!
//! Implements the `Display` trait for `ModelResult` and provides helpers to
//! format each of its lists as a table. An error report renders its messages
//! instead of the data tables.

use std::fmt::{self, Display};

use itertools::Itertools;
use tabled::{builder::Builder, settings::Style};

use crate::flatten::model::{ModelResult, Reaction, Species, UnitPart};

/// Trait for converting flattened entities to table records
trait TableRecord {
    /// Get the column headers for the table
    fn columns() -> Vec<String>;

    /// Convert the instance to a record for display in a table
    fn to_record(&self) -> Vec<String>;
}

impl Display for ModelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_err() {
            let mut builder = Builder::default();
            builder.push_record(vec!["Load Errors"]);
            for error in &self.errors {
                builder.push_record(vec![error.as_str()]);
            }
            let mut table = builder.build();
            table.with(Style::sharp());
            return write!(f, "{}", table);
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Flattened Model"]);

        if !self.units.is_empty() {
            builder.push_record(vec!["Units"]);
            builder.push_record(vec![to_table(&self.units)]);
        }

        if !self.compartments.is_empty() {
            builder.push_record(vec!["Compartments"]);
            builder.push_record(vec![compartment_table(&self.compartments)]);
        }

        if !self.species.is_empty() {
            builder.push_record(vec!["Species"]);
            builder.push_record(vec![to_table(&self.species)]);
        }

        if !self.reactions.is_empty() {
            builder.push_record(vec!["Reactions"]);
            builder.push_record(vec![to_table(&self.reactions)]);
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        write!(f, "{}", table)
    }
}

/// Converts a collection of TableRecord implementors to a formatted table
/// string
fn to_table<T: TableRecord>(records: &[T]) -> String {
    let mut builder = Builder::default();
    builder.push_record(T::columns());

    for record in records {
        builder.push_record(record.to_record());
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Renders the compartment identifier list as a one-column table
fn compartment_table(compartments: &[String]) -> String {
    let mut builder = Builder::default();
    builder.push_record(vec!["ID".to_string()]);
    for compartment in compartments {
        builder.push_record(vec![compartment.clone()]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

impl TableRecord for UnitPart {
    fn columns() -> Vec<String> {
        vec![
            "Unit".to_string(),
            "Kind".to_string(),
            "Exponent".to_string(),
            "Scale".to_string(),
            "Multiplier".to_string(),
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.unit.to_string(),
            self.kind.to_string(),
            self.exponent.to_string(),
            self.scale.to_string(),
            self.multiplier.to_string(),
        ]
    }
}

impl TableRecord for Species {
    fn columns() -> Vec<String> {
        vec![
            "ID".to_string(),
            "Name".to_string(),
            "Compartment".to_string(),
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.to_string(),
            self.compartment.to_string(),
        ]
    }
}

impl TableRecord for Reaction {
    fn columns() -> Vec<String> {
        vec![
            "ID".to_string(),
            "Lower Bound".to_string(),
            "Upper Bound".to_string(),
            "Objective".to_string(),
            "Scheme".to_string(),
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            format_bound(self.lower_bound.value, &self.lower_bound.unit),
            format_bound(self.upper_bound.value, &self.upper_bound.unit),
            self.objective_coefficient.to_string(),
            self.reaction_scheme(),
        ]
    }
}

fn format_bound(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        value.to_string()
    } else {
        format!("{} {}", value, unit)
    }
}

impl Reaction {
    /// Converts a reaction to a human-readable scheme string
    ///
    /// Creates a representation of the form
    /// "2 A + 1 B → 1 C" from the signed stoichiometry entries.
    fn reaction_scheme(&self) -> String {
        let reactants = self
            .stoichiometry
            .iter()
            .filter(|entry| entry.coefficient < 0.0)
            .map(|entry| format!("{} {}", entry.coefficient.abs(), entry.species))
            .join(" + ");

        let products = self
            .stoichiometry
            .iter()
            .filter(|entry| entry.coefficient > 0.0)
            .map(|entry| format!("{} {}", entry.coefficient, entry.species))
            .join(" + ");

        format!("{} → {}", reactants, products)
    }
}
