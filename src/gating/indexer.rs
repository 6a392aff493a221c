use crate::error::FlowCountError;
use crate::gating::catalog::PathCatalog;
use crate::gating::types::{ParentReference, RootClassification};

/// Resolve every catalog entry to its parent reference.
///
/// Pure function of catalog + classification; computed once per export and
/// reused for every tube.
pub fn resolve_parents(
    catalog: &PathCatalog,
    classification: &RootClassification,
) -> Result<Vec<ParentReference>, FlowCountError> {
    let mut references = Vec::with_capacity(catalog.len());
    for record in catalog.iter() {
        let reference = if classification.is_start(&record.path) {
            ParentReference::Start
        } else if classification.is_ignored(&record.path) {
            ParentReference::Ignore
        } else {
            let parent = record
                .path
                .parent()
                .ok_or_else(|| FlowCountError::OrphanGate(record.path.to_string()))?;
            let index = catalog
                .position_of(&parent)
                .ok_or_else(|| FlowCountError::OrphanGate(record.path.to_string()))?;
            ParentReference::ParentIndex(index)
        };
        references.push(reference);
    }
    Ok(references)
}
