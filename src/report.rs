//! Mutation metadata for reporting layers.

use crate::error::Result;
use crate::operators::OperatorCategory;
use serde::{Deserialize, Serialize};

/// One performed substitution. The engine appends a record per authorized
/// mutation; a reporting layer can serialize them alongside the mutant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationRecord {
    /// Index of the mutated candidate in traversal order (1-based; every
    /// visited candidate consumes one index).
    pub candidate_index: usize,
    pub category: OperatorCategory,
    /// Symbol of the operator that was replaced, where the category has one.
    pub original: Option<String>,
    /// Symbol of the chosen replacement.
    pub replacement: String,
}

/// Render a record slice as pretty JSON.
pub fn to_json(records: &[MutationRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
