use std::collections::HashSet;

use crate::error::FlowCountError;
use crate::gating::catalog::PathCatalog;
use crate::gating::types::{GatePath, RootClassification};

/// Picks the hierarchy level the count cascade anchors to when the export
/// holds a single gating strategy. Usually backed by a console prompt; any
/// implementation returning out-of-range levels is simply asked again.
pub trait StartLevelChooser {
    /// A 1-based level into `candidate`, at most `candidate.depth()`.
    fn choose_start_level(&mut self, candidate: &GatePath) -> usize;
}

/// Classify the export's topology from its depth distribution.
///
/// A correctly exported hierarchy lists every ancestor of every leaf, so a
/// second first-level gate can only mean the user built disjoint gating
/// strategies: each one anchors directly to the measured concentration.
/// A single first-level gate says nothing about the intended analytical
/// starting point (shared scaffolding like `Singlets/Live` is common), so
/// that case defers to the injected chooser.
///
/// The single-root candidate shown to the chooser is the first catalog
/// gate whose depth equals the deepest non-repeated depth. Depths repeated
/// below the first level are excluded from candidate selection but do not
/// reclassify the export as multi-rooted.
pub fn resolve_roots(
    catalog: &PathCatalog,
    chooser: &mut dyn StartLevelChooser,
) -> Result<RootClassification, FlowCountError> {
    let mut seen: HashSet<usize> = HashSet::new();
    let mut redundant: HashSet<usize> = HashSet::new();
    let mut multi_root = false;

    // Original column order matters here: the short-circuit fires on the
    // second first-level gate encountered.
    for record in catalog.iter() {
        if seen.contains(&record.depth) {
            if record.depth == 1 {
                multi_root = true;
                break;
            }
            redundant.insert(record.depth);
        }
        seen.insert(record.depth);
    }

    if multi_root {
        let starts: HashSet<GatePath> = catalog
            .iter()
            .filter(|r| r.depth == 1)
            .map(|r| r.path.clone())
            .collect();
        return Ok(RootClassification::MultiRoot { starts });
    }

    let candidate_depth = seen
        .difference(&redundant)
        .copied()
        .max()
        .ok_or_else(|| {
            FlowCountError::InternalInconsistency(
                "no candidate depth in an empty catalog".to_string(),
            )
        })?;
    let candidate = catalog
        .iter()
        .find(|r| r.depth == candidate_depth)
        .ok_or_else(|| {
            FlowCountError::InternalInconsistency(format!(
                "no gate of depth {} in the catalog",
                candidate_depth
            ))
        })?;

    let mut level = chooser.choose_start_level(&candidate.path);
    while level < 1 || level > candidate.depth {
        level = chooser.choose_start_level(&candidate.path);
    }

    let start = candidate.path.prefix(level);
    let ignored: HashSet<GatePath> = catalog
        .iter()
        .filter(|r| r.depth < level)
        .map(|r| r.path.clone())
        .collect();

    Ok(RootClassification::SingleRoot { start, ignored })
}
