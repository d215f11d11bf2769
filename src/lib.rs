//! # mutcore
//!
//! A language-agnostic decision engine for mutation testing.
//!
//! This library provides the policy and bookkeeping layer of a mutation
//! testing tool:
//! - Decide which candidate nodes get mutated, and how often, per category
//! - Pick replacement operators that never repeat the current one
//! - Cap substitutions per tree and never mutate the same position twice
//!   across a family of forked runs
//! - Record per-substitution metadata for reporting layers
//!
//! Parsing, tree traversal, and pretty-printing belong to a language front
//! end: the front end visits nodes in a stable order, calls the matching
//! [`mutator::Mutator`] method for each candidate, and substitutes the
//! returned node in the tree it is building. Concrete replacements are
//! materialized through the front end's [`convert::Converter`]
//! implementation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mutcore::prelude::*;
//!
//! # struct MyConverter;
//! # impl Converter for MyConverter { type Node = (); }
//! fn main() -> Result<()> {
//!     let config = EngineConfig {
//!         relational_rate: 1.0,
//!         max_mutations: 1,
//!         ..EngineConfig::default()
//!     };
//!     let mut engine = Engine::new(config, 1337)?;
//!     let mut converter = MyConverter;
//!
//!     // One fork per desired mutant; forks share the consumed-position
//!     // set, so no two mutants flip the same candidate.
//!     for _ in 0..10 {
//!         let mut fork = engine.fork();
//!         let mut mutator = Mutator::new(&mut fork, &mut converter);
//!         // ... traverse the tree, calling mutator methods per node ...
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod mutator;
pub mod operators;
pub mod report;

pub use error::{MutationError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::convert::Converter;
    pub use crate::engine::{Engine, Mutated, MutationDetails};
    pub use crate::error::{MutationError, Result};
    pub use crate::mutator::Mutator;
    pub use crate::operators::{
        ArithmeticOp, BinaryOperand, BooleanChoice, LiteralDelta, LogicalOp, OperatorCategory,
        RelationalOp,
    };
    pub use crate::report::MutationRecord;
}
