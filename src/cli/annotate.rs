use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::annotate::{self, composition};
use crate::cli::OutputFormat;
use crate::core::assembly;
use crate::core::types::AssemblyType;
use crate::tables::{loader, ReferenceTables, ReferenceTablesBuilder};

#[derive(Args)]
pub struct AnnotateArgs {
    /// Assembly strings to annotate (comma-separated component identifiers)
    #[arg(required = true)]
    pub assemblies: Vec<String>,

    /// CSV file mapping component identifiers to symmetry operators
    #[arg(long)]
    pub symmetry: Option<PathBuf>,

    /// CSV file mapping PDB identifiers to experimental-method codes
    #[arg(long)]
    pub methods: Option<PathBuf>,

    /// CSV file mapping accessions to species names
    #[arg(long)]
    pub species: Option<PathBuf>,
}

/// Full annotation record for one assembly string
#[derive(Debug, Serialize)]
pub struct AnnotationRecord {
    pub assembly: String,
    pub composition: String,
    pub assembly_type: AssemblyType,
    pub component_count: usize,
    pub unique_pdb_count: usize,
    pub ribosome: Option<String>,
    pub symmetry_operators: String,
    pub consistent_symmetry: bool,
    pub most_frequent_symmetry: Option<String>,
    pub species: Option<String>,
    pub experimental_methods: String,
}

impl AnnotationRecord {
    #[must_use]
    pub fn build(assembly_str: &str, tables: &ReferenceTables) -> Self {
        let composition = composition::assembly_composition(
            composition::contains_protein(assembly_str),
            composition::contains_rna(assembly_str),
            composition::contains_dna(assembly_str),
        );
        let operators = annotate::symmetry_operators(assembly_str, tables);

        Self {
            assembly: assembly_str.to_string(),
            composition,
            assembly_type: assembly::assembly_type(assembly_str),
            component_count: assembly::component_count(assembly_str),
            unique_pdb_count: assembly::count_unique_pdb(assembly_str),
            ribosome: annotate::check_complete_ribosome(assembly_str).map(|c| c.to_string()),
            consistent_symmetry: annotate::consistent_symmetry(&operators),
            most_frequent_symmetry: annotate::most_frequent_symmetry(&operators)
                .map(ToString::to_string),
            species: annotate::species_name(assembly_str, tables).map(ToString::to_string),
            experimental_methods: annotate::experimental_methods(assembly_str, tables),
            symmetry_operators: operators,
        }
    }
}

/// Execute annotate subcommand
///
/// # Errors
///
/// Returns an error if a reference table cannot be loaded.
pub fn run(args: &AnnotateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let tables = load_tables(args)?;

    if verbose {
        eprintln!("Loaded reference tables with {} entries", tables.len());
    }

    let records: Vec<AnnotationRecord> = args
        .assemblies
        .iter()
        .map(|assembly_str| AnnotationRecord::build(assembly_str, &tables))
        .collect();

    match format {
        OutputFormat::Text => print_text_results(&records),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }

    Ok(())
}

fn load_tables(args: &AnnotateArgs) -> anyhow::Result<ReferenceTables> {
    let mut builder = ReferenceTablesBuilder::new();

    if let Some(path) = &args.symmetry {
        builder = builder.with_symmetry(loader::load_csv_file(path)?);
    }
    if let Some(path) = &args.methods {
        builder = builder.with_methods(loader::load_methods_file(path)?);
    }
    if let Some(path) = &args.species {
        builder = builder.with_species(loader::load_csv_file(path)?);
    }

    Ok(builder.build())
}

fn print_text_results(records: &[AnnotationRecord]) {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!("\n{}", record.assembly);
        println!("   Composition: {}", display_or_dash(&record.composition));
        println!("   Type: {}", record.assembly_type);
        println!(
            "   Components: {} ({} unique PDB entries)",
            record.component_count, record.unique_pdb_count
        );
        println!(
            "   Ribosome: {}",
            record.ribosome.as_deref().unwrap_or("none found")
        );
        println!(
            "   Symmetry: {} (consistent: {})",
            record.symmetry_operators, record.consistent_symmetry
        );
        if let Some(most_frequent) = &record.most_frequent_symmetry {
            println!("   Dominant symmetry: {most_frequent}");
        }
        println!(
            "   Species: {}",
            record.species.as_deref().unwrap_or("unknown")
        );
        println!(
            "   Methods: {}",
            display_or_dash(&record.experimental_methods)
        );
    }

    println!();
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::core::types::ExperimentalMethod;

    #[test]
    fn test_annotation_record_build() {
        let tables = ReferenceTablesBuilder::new()
            .with_symmetry(HashMap::from([(
                "P12345_2".to_string(),
                "C2".to_string(),
            )]))
            .with_species(HashMap::from([(
                "P12345".to_string(),
                "Homo sapiens".to_string(),
            )]))
            .with_methods(HashMap::from([(
                "P12345".to_string(),
                ExperimentalMethod::Xray,
            )]))
            .build();

        let record = AnnotationRecord::build("P12345_2,RF00177_1", &tables);

        assert_eq!(record.assembly_type, AssemblyType::Heteromeric);
        assert_eq!(record.component_count, 2);
        assert_eq!(record.symmetry_operators, "C2,no-sym");
        assert!(!record.consistent_symmetry);
        assert_eq!(record.species.as_deref(), Some("Homo sapiens"));
        assert_eq!(record.experimental_methods, "X-ray");
        assert!(record.ribosome.is_none());

        let labels: std::collections::HashSet<&str> =
            record.composition.split(',').collect();
        assert_eq!(labels, ["protein", "RNA"].into_iter().collect());
    }
}
