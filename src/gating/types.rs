use std::collections::HashSet;
use std::fmt;

use crate::error::FlowCountError;

/// A population's full ancestor path in the gating hierarchy, e.g.
/// `Singlets/Live/CD3+`. Segments are never empty; the canonical form
/// joins them with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GatePath {
    segments: Vec<String>,
}

impl GatePath {
    pub fn parse(raw: &str) -> Result<Self, FlowCountError> {
        if raw.is_empty() {
            return Err(FlowCountError::MalformedPath(
                "empty gate path in export header".to_string(),
            ));
        }
        let segments: Vec<String> = raw.split('/').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(FlowCountError::MalformedPath(format!(
                "gate path '{}' contains an empty segment",
                raw
            )));
        }
        Ok(GatePath { segments })
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The path truncated to its first `levels` segments.
    pub fn prefix(&self, levels: usize) -> GatePath {
        GatePath {
            segments: self.segments[..levels].to_vec(),
        }
    }

    /// The immediate parent path, or `None` for a first-level gate.
    pub fn parent(&self) -> Option<GatePath> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(GatePath {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }
}

impl fmt::Display for GatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// One gate column of the export, in original column order.
#[derive(Debug, Clone)]
pub struct GateRecord {
    pub path: GatePath,
    pub depth: usize,
}

/// How the hierarchy anchors to the measured cell concentration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootClassification {
    /// One gating strategy; the user picked the level the cascade starts
    /// at, and everything shallower is scaffolding excluded from counts.
    SingleRoot {
        start: GatePath,
        ignored: HashSet<GatePath>,
    },
    /// Several disjoint first-level gates; each anchors its own lineage
    /// directly to the concentration.
    MultiRoot { starts: HashSet<GatePath> },
}

impl RootClassification {
    pub fn is_start(&self, path: &GatePath) -> bool {
        match self {
            RootClassification::SingleRoot { start, .. } => path == start,
            RootClassification::MultiRoot { starts } => starts.contains(path),
        }
    }

    pub fn is_ignored(&self, path: &GatePath) -> bool {
        match self {
            RootClassification::SingleRoot { ignored, .. } => ignored.contains(path),
            RootClassification::MultiRoot { .. } => false,
        }
    }
}

/// Where a gate takes its parent count from during propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentReference {
    /// Anchored to the tube's cell concentration.
    Start,
    /// Ancestor scaffolding above the start gate; no count is computed.
    Ignore,
    /// Multiplies the count at this catalog index.
    ParentIndex(usize),
}
