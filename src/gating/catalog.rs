use std::collections::HashMap;

use crate::error::FlowCountError;
use crate::gating::types::{GatePath, GateRecord};

/// The export's gate columns in their original order.
///
/// Column order is load-bearing: root classification scans depths in this
/// order, and count propagation relies on every parent appearing before
/// its children.
#[derive(Debug)]
pub struct PathCatalog {
    records: Vec<GateRecord>,
    index: HashMap<GatePath, usize>,
}

impl PathCatalog {
    pub fn build(raw_paths: &[String]) -> Result<Self, FlowCountError> {
        let mut records = Vec::with_capacity(raw_paths.len());
        let mut index = HashMap::with_capacity(raw_paths.len());
        for raw in raw_paths {
            let path = GatePath::parse(raw)?;
            if index.contains_key(&path) {
                return Err(FlowCountError::MalformedPath(format!(
                    "duplicate gate column '{}'",
                    path
                )));
            }
            index.insert(path.clone(), records.len());
            let depth = path.depth();
            records.push(GateRecord { path, depth });
        }
        Ok(PathCatalog { records, index })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&GateRecord> {
        self.records.get(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GateRecord> {
        self.records.iter()
    }

    pub fn position_of(&self, path: &GatePath) -> Option<usize> {
        self.index.get(path).copied()
    }
}
