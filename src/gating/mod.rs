//! Hierarchy inference and count propagation.
//!
//! A FlowJo percent-of-parent export flattens the gating tree into a list
//! of slash-delimited column names. This module rebuilds the tree from
//! that list: [`catalog`] records the columns in order, [`resolver`]
//! decides whether the export holds one rooted strategy or several,
//! [`indexer`] maps every gate to its parent column, and [`propagate`]
//! cascades exact-decimal multiplication from the roots down.

pub mod catalog;
pub mod indexer;
pub mod propagate;
pub mod resolver;
pub mod types;

pub use catalog::PathCatalog;
pub use indexer::resolve_parents;
pub use propagate::propagate_counts;
pub use resolver::{resolve_roots, StartLevelChooser};
pub use types::{GatePath, GateRecord, ParentReference, RootClassification};
