//! Core library for numclass
//!
//! This crate implements the **Functional Core** of the numclass service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The numclass project uses a two-crate architecture:
//!
//! - **`numclass_core`** (this crate): Pure classification functions and response models
//! - **`numclass`**: HTTP server, fun fact lookups and process startup (the Imperative Shell)
//!
//! Every function in this crate is deterministic and free of I/O. Classifying a
//! number never fails; only turning raw user input into a number can.
//!
//! # Module Organization
//!
//! - [`classify`]: Primality, perfection, Armstrong and digit sum checks
//! - [`response`]: Success and error bodies returned by the classify endpoint
//!
//! # Example Usage
//!
//! ```rust
//! use numclass_core::response::{parse_number, ClassificationResult};
//!
//! let number = parse_number(Some("153")).unwrap();
//! let result = ClassificationResult::new(number, "153 is a narcissistic number.".to_string());
//!
//! assert_eq!(result.properties, vec!["armstrong", "odd"]);
//! assert_eq!(result.digit_sum, 9);
//! ```

pub mod classify;
pub mod response;
