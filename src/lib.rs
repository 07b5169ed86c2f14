//! Nutrient Advisor Library
//!
//! DGE-based daily recommendations for vitamins and minerals, and evaluation
//! of recorded supplement intake against them.

pub mod config;
pub mod error;
pub mod models;
pub mod nutrition;
pub mod reference;
pub mod store;
pub mod tools;

pub use error::{EngineError, EngineResult};
