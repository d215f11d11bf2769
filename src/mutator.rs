//! One entry point per operator category. Each method builds the candidate
//! set for its category, asks the engine to pick a replacement, resolves the
//! pick to a converter call, and lets the engine gate the substitution at the
//! category's configured rate.
//!
//! The pick happens for every visited candidate, before the rate gate; that
//! draw order is part of the determinism contract.

use crate::convert::Converter;
use crate::engine::{Engine, Mutated, MutationDetails};
use crate::error::{MutationError, Result};
use crate::operators::{
    ArithmeticOp, BinaryOperand, BooleanChoice, LiteralDelta, LogicalOp, OperatorCategory,
    RelationalOp,
};

pub struct Mutator<'a, C: Converter> {
    engine: &'a mut Engine,
    converter: &'a mut C,
}

impl<'a, C: Converter> Mutator<'a, C> {
    pub fn new(engine: &'a mut Engine, converter: &'a mut C) -> Self {
        Self { engine, converter }
    }

    /// `a + b` -> `a - b` (never the current operator).
    pub fn mutate_arithmetic(
        &mut self,
        node: C::Node,
        current: ArithmeticOp,
    ) -> Result<Mutated<C::Node>> {
        let candidates = current.replacements();
        if candidates.is_empty() {
            return Err(MutationError::Arity(format!(
                "no arithmetic replacements for {}",
                current.symbol()
            )));
        }

        let picked = self.engine.pick(&candidates)?;
        let rate = self.engine.config().arithmetic_rate;
        let details = MutationDetails {
            category: OperatorCategory::Arithmetic,
            original: Some(current.symbol()),
            replacement: picked.symbol(),
        };

        let converter = &mut *self.converter;
        self.engine
            .mutate_node(node, details, rate, |node| match picked {
                ArithmeticOp::Add => converter.to_add(node),
                ArithmeticOp::Sub => converter.to_sub(node),
                ArithmeticOp::Mul => converter.to_mul(node),
                ArithmeticOp::Div => converter.to_div(node),
            })
    }

    /// `a and b` -> `a or b`.
    pub fn mutate_logical(
        &mut self,
        node: C::Node,
        current: LogicalOp,
    ) -> Result<Mutated<C::Node>> {
        let candidates = current.replacements();
        if candidates.is_empty() {
            return Err(MutationError::Arity(format!(
                "no logical replacements for {}",
                current.symbol()
            )));
        }

        let picked = self.engine.pick(&candidates)?;
        let rate = self.engine.config().logical_rate;
        let details = MutationDetails {
            category: OperatorCategory::LogicalConnector,
            original: Some(current.symbol()),
            replacement: picked.symbol(),
        };

        let converter = &mut *self.converter;
        self.engine
            .mutate_node(node, details, rate, |node| match picked {
                LogicalOp::And => converter.to_and(node),
                LogicalOp::Or => converter.to_or(node),
            })
    }

    /// `a > b` -> `a < b`.
    pub fn mutate_relational(
        &mut self,
        node: C::Node,
        current: RelationalOp,
    ) -> Result<Mutated<C::Node>> {
        let candidates = current.replacements();
        if candidates.is_empty() {
            return Err(MutationError::Arity(format!(
                "no relational replacements for {}",
                current.symbol()
            )));
        }

        let picked = self.engine.pick(&candidates)?;
        let rate = self.engine.config().relational_rate;
        let details = MutationDetails {
            category: OperatorCategory::Relational,
            original: Some(current.symbol()),
            replacement: picked.symbol(),
        };

        let converter = &mut *self.converter;
        self.engine
            .mutate_node(node, details, rate, |node| match picked {
                RelationalOp::Gt => converter.to_gt(node),
                RelationalOp::Lt => converter.to_lt(node),
                RelationalOp::Ge => converter.to_ge(node),
                RelationalOp::Le => converter.to_le(node),
                RelationalOp::Eq => converter.to_eq(node),
                RelationalOp::Ne => converter.to_ne(node),
            })
    }

    /// Collapse a binary expression to one of its operands.
    pub fn mutate_binary_operand(&mut self, node: C::Node) -> Result<Mutated<C::Node>> {
        let picked = self.engine.pick(&BinaryOperand::ALL)?;
        let rate = self.engine.config().binary_operand_rate;
        let details = MutationDetails {
            category: OperatorCategory::BinaryOperand,
            original: None,
            replacement: picked.symbol(),
        };

        let converter = &mut *self.converter;
        self.engine
            .mutate_node(node, details, rate, |node| match picked {
                BinaryOperand::Left => converter.binary_left(node),
                BinaryOperand::Right => converter.binary_right(node),
            })
    }

    /// Replace a boolean expression with an operand, a constant, or its
    /// negation.
    pub fn mutate_boolean_operand(&mut self, node: C::Node) -> Result<Mutated<C::Node>> {
        let picked = self.engine.pick(&BooleanChoice::ALL)?;
        let rate = self.engine.config().boolean_operand_rate;
        let details = MutationDetails {
            category: OperatorCategory::BooleanOperand,
            original: None,
            replacement: picked.symbol(),
        };

        let converter = &mut *self.converter;
        self.engine
            .mutate_node(node, details, rate, |node| match picked {
                BooleanChoice::Left => converter.boolean_left(node),
                BooleanChoice::Right => converter.boolean_right(node),
                BooleanChoice::ForceTrue => converter.to_true(node),
                BooleanChoice::ForceFalse => converter.to_false(node),
                BooleanChoice::Negate => converter.negate(node),
            })
    }

    /// Nudge a numeric literal by one.
    pub fn mutate_numeric_literal(&mut self, node: C::Node) -> Result<Mutated<C::Node>> {
        let picked = self.engine.pick(&LiteralDelta::ALL)?;
        let rate = self.engine.config().numeric_literal_rate;
        let details = MutationDetails {
            category: OperatorCategory::NumericLiteral,
            original: None,
            replacement: picked.symbol(),
        };

        let converter = &mut *self.converter;
        self.engine
            .mutate_node(node, details, rate, |node| match picked {
                LiteralDelta::Increment => converter.increment(node),
                LiteralDelta::Decrement => converter.decrement(node),
            })
    }

    /// Flip a boolean literal. A separate, explicitly toggled category: when
    /// the toggle is off the node is not a candidate at all, so neither the
    /// candidate counter nor the random stream advances.
    pub fn mutate_bool_literal(&mut self, node: C::Node) -> Result<Mutated<C::Node>> {
        if !self.engine.config().mutate_bool_literals {
            return Ok(Mutated::Unchanged(node));
        }

        let rate = self.engine.config().bool_literal_rate;
        let details = MutationDetails {
            category: OperatorCategory::BooleanLiteral,
            original: None,
            replacement: "flip",
        };

        let converter = &mut *self.converter;
        self.engine
            .mutate_node(node, details, rate, |node| converter.flip_bool(node))
    }
}
