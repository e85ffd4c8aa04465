//! medassist - Symptom-to-Disease Terminal Assistant
//!
//! Predicts a likely disease from a selected set of symptoms using a
//! pre-trained model bundle, and recommends the matching specialist.
//!
//! # Architecture
//!
//! - **bundle**: one-time loader for the serialized model artifact
//! - **model**: pre-fitted classifier, scaler, and label encoder
//! - **pipeline**: symptom selection -> one-hot vector -> scale ->
//!   classify -> decode -> referral lookup
//! - **referral**: static disease -> specialist table
//! - **report**: feature-importance ranking and held-out metrics
//! - **repl / cli**: interactive session and one-shot subcommands

pub mod bundle;
pub mod errors;
pub mod model;
pub mod pipeline;
pub mod referral;
pub mod report;

// Re-export commonly used types
pub use errors::{AssistantError, Result};
pub use pipeline::{Prediction, Predictor};

// Interface layer
pub mod cli;
pub mod repl;
