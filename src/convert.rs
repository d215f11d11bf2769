//! The converter capability: the interface a language front end implements to
//! materialize concrete replacement nodes for abstract operator choices.

use crate::error::{MutationError, Result};

/// One method per concrete substitution the mutator can request. Each takes
/// the original node (for context, e.g. to read its current value or pull out
/// an operand) and returns the node to substitute.
///
/// Implementations must be pure: the traversal, not the converter, performs
/// the actual substitution in the tree. Every method defaults to an
/// `Unsupported` error so a binding only implements the substitutions its
/// syntax representation can express; the engine never catches that error.
pub trait Converter {
    /// Opaque handle to one position in the front end's syntax tree. The
    /// engine never inspects it.
    type Node;

    fn to_add(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("to_add"))
    }

    fn to_sub(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("to_sub"))
    }

    fn to_mul(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("to_mul"))
    }

    fn to_div(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("to_div"))
    }

    fn to_and(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("to_and"))
    }

    fn to_or(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("to_or"))
    }

    fn to_gt(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("to_gt"))
    }

    fn to_lt(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("to_lt"))
    }

    fn to_ge(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("to_ge"))
    }

    fn to_le(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("to_le"))
    }

    fn to_eq(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("to_eq"))
    }

    fn to_ne(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("to_ne"))
    }

    /// Replace a binary expression with its left operand.
    fn binary_left(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("binary_left"))
    }

    /// Replace a binary expression with its right operand.
    fn binary_right(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("binary_right"))
    }

    fn boolean_left(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("boolean_left"))
    }

    fn boolean_right(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("boolean_right"))
    }

    fn to_true(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("to_true"))
    }

    fn to_false(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("to_false"))
    }

    /// Wrap a boolean expression in a negation.
    fn negate(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("negate"))
    }

    /// Produce a literal whose value is the original plus one.
    fn increment(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("increment"))
    }

    /// Produce a literal whose value is the original minus one.
    fn decrement(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("decrement"))
    }

    /// Flip a boolean literal. Only reached when the boolean-literal
    /// category is enabled in the configuration.
    fn flip_bool(&mut self, _node: Self::Node) -> Result<Self::Node> {
        Err(MutationError::Unsupported("flip_bool"))
    }
}
