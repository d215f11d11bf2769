//! Operator catalog: the fixed member tables for every mutation category.
//!
//! Tables are ordered; the order is part of the determinism contract because
//! the engine picks by index into these slices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The mutation categories the engine knows about. The traversal tags each
/// candidate with one of these; each category has its own configured rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorCategory {
    Arithmetic,
    LogicalConnector,
    Relational,
    BinaryOperand,
    BooleanOperand,
    NumericLiteral,
    BooleanLiteral,
}

impl fmt::Display for OperatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperatorCategory::Arithmetic => "arithmetic",
            OperatorCategory::LogicalConnector => "logical-connector",
            OperatorCategory::Relational => "relational",
            OperatorCategory::BinaryOperand => "binary-operand",
            OperatorCategory::BooleanOperand => "boolean-operand",
            OperatorCategory::NumericLiteral => "numeric-literal",
            OperatorCategory::BooleanLiteral => "boolean-literal",
        };
        write!(f, "{}", name)
    }
}

/// Arithmetic operator replacement: `a + b` -> `a - b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithmeticOp {
    pub const ALL: [ArithmeticOp; 4] = [
        ArithmeticOp::Add,
        ArithmeticOp::Sub,
        ArithmeticOp::Mul,
        ArithmeticOp::Div,
    ];

    /// Every member except `self`. A replacement is never the current operator.
    pub fn replacements(self) -> Vec<ArithmeticOp> {
        Self::ALL.iter().copied().filter(|op| *op != self).collect()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Sub => "-",
            ArithmeticOp::Mul => "*",
            ArithmeticOp::Div => "/",
        }
    }
}

/// Logical connector replacement: `a and b` -> `a or b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub const ALL: [LogicalOp; 2] = [LogicalOp::And, LogicalOp::Or];

    pub fn replacements(self) -> Vec<LogicalOp> {
        Self::ALL.iter().copied().filter(|op| *op != self).collect()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }
}

/// Relational operator replacement: `a > b` -> `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationalOp {
    Gt,
    Lt,
    Ge,
    Le,
    Eq,
    Ne,
}

impl RelationalOp {
    pub const ALL: [RelationalOp; 6] = [
        RelationalOp::Gt,
        RelationalOp::Lt,
        RelationalOp::Ge,
        RelationalOp::Le,
        RelationalOp::Eq,
        RelationalOp::Ne,
    ];

    pub fn replacements(self) -> Vec<RelationalOp> {
        Self::ALL.iter().copied().filter(|op| *op != self).collect()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            RelationalOp::Gt => ">",
            RelationalOp::Lt => "<",
            RelationalOp::Ge => ">=",
            RelationalOp::Le => "<=",
            RelationalOp::Eq => "==",
            RelationalOp::Ne => "!=",
        }
    }
}

/// Replace a binary expression with one of its operands: `a + b` -> `a`.
/// No exclusion rule, there is no "current operator" to avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperand {
    Left,
    Right,
}

impl BinaryOperand {
    pub const ALL: [BinaryOperand; 2] = [BinaryOperand::Left, BinaryOperand::Right];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperand::Left => "select-left-operand",
            BinaryOperand::Right => "select-right-operand",
        }
    }
}

/// Replace a boolean expression with an operand, a constant, or its negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanChoice {
    Left,
    Right,
    ForceTrue,
    ForceFalse,
    Negate,
}

impl BooleanChoice {
    pub const ALL: [BooleanChoice; 5] = [
        BooleanChoice::Left,
        BooleanChoice::Right,
        BooleanChoice::ForceTrue,
        BooleanChoice::ForceFalse,
        BooleanChoice::Negate,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BooleanChoice::Left => "select-left-operand",
            BooleanChoice::Right => "select-right-operand",
            BooleanChoice::ForceTrue => "force-true",
            BooleanChoice::ForceFalse => "force-false",
            BooleanChoice::Negate => "negate",
        }
    }
}

/// Nudge a numeric literal by one in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiteralDelta {
    Increment,
    Decrement,
}

impl LiteralDelta {
    pub const ALL: [LiteralDelta; 2] = [LiteralDelta::Increment, LiteralDelta::Decrement];

    pub fn symbol(self) -> &'static str {
        match self {
            LiteralDelta::Increment => "increment",
            LiteralDelta::Decrement => "decrement",
        }
    }
}
