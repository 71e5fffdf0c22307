//! Deterministic idea evaluation for the DreamCraft marketplace.
//!
//! The [`evaluation`] module turns a free-text idea description into a six-dimension
//! score, a valuation range, suggestions and risk factors using keyword heuristics only.
//! The remaining modules carry configuration, logging and error plumbing for binaries
//! built on top of the engine.

pub mod config;
pub mod error;
pub mod evaluation;
pub mod telemetry;

pub use evaluation::{evaluate, evaluate_batch, explain, EvaluationResult, IdeaInput};
