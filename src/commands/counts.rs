use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::export::formats::{compact, prism};
use crate::export::{self, OutputOptions};
use crate::flowjo::{self, TubeSample};
use crate::gating::{self, PathCatalog, RootClassification, StartLevelChooser};
use crate::prompt::{self, ConcentrationSource};

/// Convert one FlowJo export into a cell count table.
///
/// The two strategies are injected so the hierarchy questions and the
/// per-tube concentrations can come from a console or from a test script.
/// Returns the path the table was written to.
pub fn run(
    input: &Path,
    output: Option<PathBuf>,
    options: OutputOptions,
    chooser: &mut dyn StartLevelChooser,
    concentrations: &mut dyn ConcentrationSource,
) -> Result<PathBuf> {
    let parsed = flowjo::read_export(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let catalog = PathCatalog::build(&parsed.gate_paths)?;
    println!(
        "Found {} gates and {} tubes.",
        catalog.len(),
        parsed.tubes.len()
    );

    let classification = gating::resolve_roots(&catalog, chooser)?;
    match &classification {
        RootClassification::SingleRoot { start, ignored } => {
            println!("Starting gate: {}", start);
            if !ignored.is_empty() {
                println!("Ignoring {} ancestor gate(s) above it.", ignored.len());
            }
        }
        RootClassification::MultiRoot { starts } => {
            let mut names: Vec<String> = starts.iter().map(|p| p.to_string()).collect();
            names.sort();
            println!("Starting gates: {}", names.join(", "));
        }
    }
    let references = gating::resolve_parents(&catalog, &classification)?;

    let mut tubes = Vec::with_capacity(parsed.tubes.len());
    for row in parsed.tubes {
        let concentration = concentrations.cell_concentration(&row.name);
        let counts =
            gating::propagate_counts(&catalog, &references, &row.percents, &concentration)?;
        tubes.push(TubeSample::new(row.name, concentration, row.percents, counts));
    }

    if options.grouping {
        prompt::assign_groups(&mut tubes);
    }

    let gate_names: Vec<String> = catalog.iter().map(|r| r.path.to_string()).collect();
    let content = if options.compact {
        compact::content(&gate_names, &tubes, options.grouping)
    } else {
        prism::content(&gate_names, &tubes, options.grouping)
    };

    let out_path = output.unwrap_or_else(|| default_output(input));
    export::write_csv(&out_path, &content)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    println!("Done! Wrote {}.", out_path.display());
    Ok(out_path)
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{}_counts.csv", stem))
}
