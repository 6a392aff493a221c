use bigdecimal::BigDecimal;

use crate::error::FlowCountError;
use crate::gating::catalog::PathCatalog;
use crate::gating::types::ParentReference;

/// Cascade one tube's percents into absolute counts.
///
/// Processes catalog positions in ascending order, which is exactly why
/// the export's column order must list parents before children: a
/// `ParentIndex` always points at an already-computed count. Ignored
/// gates get no count. All arithmetic is exact decimal; a multi-level
/// cascade never accumulates binary rounding drift.
pub fn propagate_counts(
    catalog: &PathCatalog,
    references: &[ParentReference],
    percents: &[BigDecimal],
    cell_concentration: &BigDecimal,
) -> Result<Vec<Option<BigDecimal>>, FlowCountError> {
    let mut counts: Vec<Option<BigDecimal>> = Vec::with_capacity(references.len());
    for (i, reference) in references.iter().enumerate() {
        let count = match reference {
            ParentReference::Start => Some(cell_concentration * &percents[i]),
            ParentReference::Ignore => None,
            ParentReference::ParentIndex(j) => {
                let parent = counts.get(*j).and_then(|c| c.as_ref()).ok_or_else(|| {
                    let name = catalog
                        .get(i)
                        .map(|r| r.path.to_string())
                        .unwrap_or_else(|| format!("column {}", i));
                    FlowCountError::UnresolvedDependency(name)
                })?;
                Some(parent * &percents[i])
            }
        };
        counts.push(count);
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn catalog(raw: &[&str]) -> PathCatalog {
        let paths: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
        PathCatalog::build(&paths).unwrap()
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn start_gate_at_full_percent_equals_concentration_exactly() {
        let catalog = catalog(&["Live"]);
        let refs = vec![ParentReference::Start];
        let percents = vec![dec("1.00")];

        let counts = propagate_counts(&catalog, &refs, &percents, &dec("12.5")).unwrap();
        assert_eq!(counts[0].as_ref().unwrap(), &dec("12.5"));
    }

    #[test]
    fn two_level_cascade_is_exact() {
        let catalog = catalog(&["Singlets", "Singlets/Live", "Singlets/Live/CD3+"]);
        let refs = vec![
            ParentReference::Ignore,
            ParentReference::Start,
            ParentReference::ParentIndex(1),
        ];
        let percents = vec![dec("0.90"), dec("0.80"), dec("0.50")];

        let counts = propagate_counts(&catalog, &refs, &percents, &dec("10")).unwrap();
        assert_eq!(counts[0], None);
        assert_eq!(counts[1].as_ref().unwrap(), &dec("8.00"));
        assert_eq!(counts[2].as_ref().unwrap(), &dec("4.00"));
    }

    #[test]
    fn propagation_is_idempotent() {
        let catalog = catalog(&["A", "A/B"]);
        let refs = vec![ParentReference::Start, ParentReference::ParentIndex(0)];
        let percents = vec![dec("0.75"), dec("0.4")];
        let concentration = dec("20");

        let first = propagate_counts(&catalog, &refs, &percents, &concentration).unwrap();
        let second = propagate_counts(&catalog, &refs, &percents, &concentration).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn child_before_parent_is_an_unresolved_dependency() {
        // Forward reference: column 0 multiplies a count that has not been
        // computed yet. Never silently zero.
        let catalog = catalog(&["A/B", "A"]);
        let refs = vec![ParentReference::ParentIndex(1), ParentReference::Start];
        let percents = vec![dec("0.5"), dec("0.5")];

        let err = propagate_counts(&catalog, &refs, &percents, &dec("10")).unwrap_err();
        match err {
            FlowCountError::UnresolvedDependency(name) => assert_eq!(name, "A/B"),
            other => panic!("expected UnresolvedDependency, got {:?}", other),
        }
    }

    #[test]
    fn child_of_ignored_gate_is_an_unresolved_dependency() {
        // An ignored parent has no count to multiply; treating it as zero
        // would silently wipe the subtree.
        let catalog = catalog(&["A", "A/B"]);
        let refs = vec![ParentReference::Ignore, ParentReference::ParentIndex(0)];
        let percents = vec![dec("0.5"), dec("0.5")];

        let err = propagate_counts(&catalog, &refs, &percents, &dec("10")).unwrap_err();
        assert!(matches!(err, FlowCountError::UnresolvedDependency(_)));
    }
}
