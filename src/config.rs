//! Engine configuration: per-category mutation rates and the per-tree cap.

use crate::error::{MutationError, Result};
use crate::operators::OperatorCategory;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Immutable per-run configuration. Rates are probabilities in `[0, 1]` that
/// a visited candidate of the matching category gets mutated; `max_mutations`
/// caps the total substitutions applied to one tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub arithmetic_rate: f64,
    pub logical_rate: f64,
    pub relational_rate: f64,
    pub binary_operand_rate: f64,
    pub boolean_operand_rate: f64,
    pub numeric_literal_rate: f64,
    /// Rate for the boolean-literal category. Only consulted when
    /// `mutate_bool_literals` is set.
    pub bool_literal_rate: f64,
    /// Boolean-literal mutation is a separate, explicitly toggled category.
    /// Off by default.
    pub mutate_bool_literals: bool,
    pub max_mutations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            arithmetic_rate: 0.2,
            logical_rate: 0.2,
            relational_rate: 0.2,
            binary_operand_rate: 0.1,
            boolean_operand_rate: 0.1,
            numeric_literal_rate: 0.1,
            bool_literal_rate: 0.1,
            mutate_bool_literals: false,
            max_mutations: 1,
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a JSON file. Missing fields fall back to
    /// the defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        // A config that fails to deserialize (e.g. a negative max_mutations)
        // is a configuration error, not a generic JSON one
        let config: EngineConfig = serde_json::from_str(content)
            .map_err(|e| MutationError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The configured rate for one category.
    pub fn rate(&self, category: OperatorCategory) -> f64 {
        match category {
            OperatorCategory::Arithmetic => self.arithmetic_rate,
            OperatorCategory::LogicalConnector => self.logical_rate,
            OperatorCategory::Relational => self.relational_rate,
            OperatorCategory::BinaryOperand => self.binary_operand_rate,
            OperatorCategory::BooleanOperand => self.boolean_operand_rate,
            OperatorCategory::NumericLiteral => self.numeric_literal_rate,
            OperatorCategory::BooleanLiteral => self.bool_literal_rate,
        }
    }

    /// Reject rates outside `[0, 1]`. Called at engine construction so a bad
    /// configuration fails before any candidate is evaluated.
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("arithmetic_rate", self.arithmetic_rate),
            ("logical_rate", self.logical_rate),
            ("relational_rate", self.relational_rate),
            ("binary_operand_rate", self.binary_operand_rate),
            ("boolean_operand_rate", self.boolean_operand_rate),
            ("numeric_literal_rate", self.numeric_literal_rate),
            ("bool_literal_rate", self.bool_literal_rate),
        ];

        for (name, rate) in rates {
            if !(0.0..=1.0).contains(&rate) || rate.is_nan() {
                return Err(MutationError::Config(format!(
                    "{} must be in [0, 1], got {}",
                    name, rate
                )));
            }
        }

        Ok(())
    }
}
