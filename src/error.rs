use std::fmt;

/// Fatal failures while turning a FlowJo export into cell counts.
///
/// Every variant that stems from bad input names the offending gate or tube
/// so the user can find it in the export. There is no partial-result mode:
/// the first fatal error aborts the run before anything is written.
#[derive(Debug)]
pub enum FlowCountError {
    /// The export does not look like a hierarchical percent-of-parent
    /// export (empty path, empty segment, missing column separator, ...).
    MalformedPath(String),
    /// A data row does not have one percent cell per gate column.
    TubeShape {
        tube: String,
        expected: usize,
        found: usize,
    },
    /// A percent cell did not parse as a decimal number.
    PercentParse { tube: String, value: String },
    /// A gate's derived parent path is absent from the catalog, which
    /// signals a corrupted or hand-edited export.
    OrphanGate(String),
    /// The catalog ordering invariant (parents before children) was
    /// violated at propagation time.
    UnresolvedDependency(String),
    /// A derived candidate could not be found again; unreachable under
    /// correct inputs.
    InternalInconsistency(String),
    Csv(csv::Error),
    Io(std::io::Error),
}

impl fmt::Display for FlowCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowCountError::MalformedPath(msg) => {
                write!(f, "malformed export: {}", msg)
            }
            FlowCountError::TubeShape {
                tube,
                expected,
                found,
            } => write!(
                f,
                "tube '{}' has {} percent cells but the export has {} gate columns",
                tube, found, expected
            ),
            FlowCountError::PercentParse { tube, value } => {
                write!(f, "tube '{}' has an invalid percent value '{}'", tube, value)
            }
            FlowCountError::OrphanGate(path) => {
                write!(f, "gate '{}' has no parent gate in the export", path)
            }
            FlowCountError::UnresolvedDependency(path) => write!(
                f,
                "gate '{}' appears before its parent in the export column order",
                path
            ),
            FlowCountError::InternalInconsistency(msg) => {
                write!(f, "internal inconsistency: {}", msg)
            }
            FlowCountError::Csv(e) => write!(f, "csv error: {}", e),
            FlowCountError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for FlowCountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlowCountError::Csv(e) => Some(e),
            FlowCountError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for FlowCountError {
    fn from(e: csv::Error) -> Self {
        FlowCountError::Csv(e)
    }
}

impl From<std::io::Error> for FlowCountError {
    fn from(e: std::io::Error) -> Self {
        FlowCountError::Io(e)
    }
}
