//! # calc_core - Calcora Calculation Engine
//!
//! `calc_core` is the computational heart of Calcora, a multilingual calculator
//! site. Calculators are pure functions with JSON-serializable inputs and
//! results, so the same engine serves the web API, the CLI and PDF export.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types with stable codes, not just strings
//! - **Resolved once**: Translations are merged at startup and shared read-only
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::health::bmi::{calculate, BmiInput};
//! use calc_core::units::UnitSystem;
//!
//! let input = BmiInput { weight: 70.0, height: 175.0, unit_system: UnitSystem::Metric };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.bmi, 22.9);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Every calculator, plus slug-based dispatch
//! - [`catalog`] - Calculator registry: categories, names, formulas, inputs
//! - [`i18n`] - Locales, dictionary merging and the message store
//! - [`search`] - Localised catalogue search
//! - [`pdf`] - PDF reports via Typst
//! - [`contact`] - Contact form validation
//! - [`units`] - Type-safe unit wrappers
//! - [`validation`] - Input checks and rounding helpers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod contact;
pub mod errors;
pub mod i18n;
pub mod pdf;
pub mod search;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{run_calculator, CalculationRequest};
pub use catalog::{CalculatorId, Category};
pub use errors::{CalcError, CalcResult};
pub use i18n::{Locale, MessageStore};
pub use search::SearchIndex;
