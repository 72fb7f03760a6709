//! Parameter sweeps over JSON documents.
//!
//! Given a base document and up to three dotted-path parameters with
//! candidate value lists, `paramsweep` materializes every combination (the
//! full Cartesian product) of those values applied to the base document,
//! plus grid-layout metadata for presenting the results. A companion
//! operation extracts a single combination by index from the generated set.
//!
//! # Core Concepts
//!
//! - [`KeyPath`]: a dotted sequence of mapping keys (`camera.fov`)
//! - [`set_value`]: nested-path mutation, creating intermediate objects
//! - [`parse_values`]: comma lists and range/distribution notations
//! - [`generate_sweep`] / [`SweepRequest`]: the string-in, string-out
//!   generation boundary
//! - [`extract_variant`]: pull one [`Variant`] out of a serialized sweep
//!
//! Both operations are synchronous pure functions of their inputs: each call
//! deep-copies what it needs, nothing is shared across invocations, and the
//! same inputs always produce the same output.
//!
//! # Quick Start
//!
//! ```
//! use paramsweep::{extract_variant, generate_sweep, SweepRequest};
//!
//! let request = SweepRequest::new(
//!     r#"{"camera": {"fov": 35}, "lights": {"key": {"temperature": 5000}}}"#,
//! )
//! .with_parameter("camera.fov", "25,35,45")
//! .with_parameter("lights.key.temperature", "3000,6000");
//!
//! let output = generate_sweep(&request).unwrap();
//! assert_eq!(output.total_count, 6);
//!
//! // Later, typically one call per combination:
//! let variant = extract_variant(&output.variants_json, 4).unwrap();
//! assert!(variant.document_json.contains("camera"));
//! ```
//!
//! Value texts may also use generator notation instead of literal lists:
//! `"0-10:5"` (linear range), `"log:1-100:5"` or `"exp:1-8:4"` — see
//! [`distribution`].

mod error;
mod extract;
mod mutate;
mod path;
mod sweep;
mod values;

pub mod distribution;

pub use error::{SweepError, SweepResult};
pub use extract::{extract_variant, ExtractedVariant};
pub use mutate::{get_value, set_value};
pub use path::KeyPath;
pub use sweep::{
    expand_variants, filter_variants, generate_sweep, grid_layout, parameter_values, GridLayout,
    ParameterSlot, ParameterSpec, SweepMetadata, SweepOutput, SweepRequest, Variant,
    DEFAULT_GRID_COLUMNS, MAX_GRID_COLUMNS, MIN_GRID_COLUMNS,
};
pub use values::parse_values;

// Re-export serde_json::Value for convenience
pub use serde_json::Value;
