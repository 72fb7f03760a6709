//! Sweep generation: Cartesian expansion of parameter value lists over a
//! base document.
//!
//! The request boundary mirrors the hosting contract: a base document as
//! JSON text, up to three (path, values-text) slots, and a grid column
//! count for layout metadata. The typed layer underneath
//! ([`expand_variants`]) is N-dimensional.

use crate::mutate::set_value;
use crate::values::parse_values;
use crate::{KeyPath, SweepError, SweepResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default grid column count.
pub const DEFAULT_GRID_COLUMNS: u32 = 5;
/// Smallest accepted grid column count.
pub const MIN_GRID_COLUMNS: u32 = 1;
/// Largest accepted grid column count.
pub const MAX_GRID_COLUMNS: u32 = 20;

/// One (path, values-text) parameter input at the request boundary.
///
/// A slot is active only when both fields are non-blank.
#[derive(Clone, Debug, Default)]
pub struct ParameterSlot {
    /// Dotted path into the base document.
    pub path: String,
    /// Raw values text (comma list or generator notation).
    pub values: String,
}

impl ParameterSlot {
    /// Create a slot.
    #[inline]
    pub fn new(path: impl Into<String>, values: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            values: values.into(),
        }
    }

    /// A slot takes part in the sweep only when both fields are non-blank.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.path.trim().is_empty() && !self.values.trim().is_empty()
    }
}

/// A sweep generation request.
///
/// # Examples
///
/// ```
/// use paramsweep::{generate_sweep, SweepRequest};
///
/// let request = SweepRequest::new(r#"{"camera": {"fov": 35}}"#)
///     .with_parameter("camera.fov", "25,35,45")
///     .with_grid_columns(3);
/// let output = generate_sweep(&request).unwrap();
/// assert_eq!(output.total_count, 3);
/// ```
#[derive(Clone, Debug)]
pub struct SweepRequest {
    /// Base document as JSON text.
    pub base_json: String,
    /// Up to three parameter slots, applied in order.
    pub slots: [ParameterSlot; 3],
    /// Grid columns for layout metadata (1–20).
    pub grid_columns: u32,
}

impl SweepRequest {
    /// Create a request with empty slots and the default grid columns.
    pub fn new(base_json: impl Into<String>) -> Self {
        Self {
            base_json: base_json.into(),
            slots: Default::default(),
            grid_columns: DEFAULT_GRID_COLUMNS,
        }
    }

    /// Fill the next free slot (builder pattern).
    ///
    /// At most three parameters are supported; further calls replace the
    /// last slot.
    pub fn with_parameter(mut self, path: impl Into<String>, values: impl Into<String>) -> Self {
        let slot = ParameterSlot::new(path, values);
        match self
            .slots
            .iter_mut()
            .find(|s| s.path.is_empty() && s.values.is_empty())
        {
            Some(free) => *free = slot,
            None => self.slots[2] = slot,
        }
        self
    }

    /// Set the grid column count (builder pattern).
    #[inline]
    pub fn with_grid_columns(mut self, columns: u32) -> Self {
        self.grid_columns = columns;
        self
    }

    /// Iterate over the active slots in order.
    pub fn active_slots(&self) -> impl Iterator<Item = &ParameterSlot> {
        self.slots.iter().filter(|slot| slot.is_active())
    }
}

/// A resolved parameter: a key path and its candidate values.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSpec {
    /// Target path in the base document.
    pub path: KeyPath,
    /// Candidate values, all finite, at least one.
    pub values: Vec<f64>,
}

impl ParameterSpec {
    /// Create a spec from a dotted path string.
    pub fn new(path: &str, values: Vec<f64>) -> Self {
        Self {
            path: KeyPath::parse(path),
            values,
        }
    }
}

/// One combination: the mutated document and the values applied to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// The base document with this combination's values applied.
    pub document: Value,
    /// Dotted path → applied value, one entry per spec, in slot order.
    pub deltas: Map<String, Value>,
}

/// Grid layout metadata for presenting variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Number of columns.
    pub columns: u32,
    /// `ceil(count / columns)`.
    pub rows: u32,
}

/// Sweep metadata returned alongside the variant list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepMetadata {
    /// Total number of variants generated.
    pub total_variants: usize,
    /// Dotted paths of the active parameters, in slot order.
    pub parameters: Vec<String>,
    /// Grid layout for the variant count.
    pub grid_layout: GridLayout,
}

/// Serialized sweep generation output.
#[derive(Clone, Debug)]
pub struct SweepOutput {
    /// JSON list of [`Variant`]s, 2-space indented.
    pub variants_json: String,
    /// Number of variants generated.
    pub total_count: usize,
    /// JSON [`SweepMetadata`], 2-space indented.
    pub metadata_json: String,
}

/// Compute the grid layout for `count` items in `columns` columns.
///
/// `columns` must be at least 1.
pub fn grid_layout(count: usize, columns: u32) -> GridLayout {
    assert!(columns > 0, "grid columns must be positive");
    let columns_wide = u64::from(columns);
    let rows = ((count as u64 + columns_wide - 1) / columns_wide) as u32;
    GridLayout { columns, rows }
}

/// Materialize every combination of the specs' values over `base`.
///
/// Product order is the conventional nested-loop order: the first spec
/// varies slowest, the last varies fastest. Each variant gets its own deep
/// copy of `base`; no substructure is shared. With no specs the base is
/// returned as a single delta-free variant.
pub fn expand_variants(base: &Value, specs: &[ParameterSpec]) -> Vec<Variant> {
    if specs.is_empty() {
        return vec![Variant {
            document: base.clone(),
            deltas: Map::new(),
        }];
    }

    let total: usize = specs.iter().map(|spec| spec.values.len()).product();
    let mut variants = Vec::with_capacity(total);
    let mut indices = vec![0usize; specs.len()];

    for _ in 0..total {
        let mut document = base.clone();
        let mut deltas = Map::new();
        for (spec, &i) in specs.iter().zip(&indices) {
            let value = Value::from(spec.values[i]);
            set_value(&mut document, &spec.path, value.clone());
            deltas.insert(spec.path.to_string(), value);
        }
        variants.push(Variant { document, deltas });

        // Odometer increment, rightmost digit fastest.
        for slot in (0..indices.len()).rev() {
            indices[slot] += 1;
            if indices[slot] < specs[slot].values.len() {
                break;
            }
            indices[slot] = 0;
        }
    }

    variants
}

/// Generate the full sweep for a request.
///
/// Fails with [`SweepError::InvalidGridColumns`] for a column count outside
/// 1–20, [`SweepError::InvalidDocument`] when the base text is not valid
/// JSON, [`SweepError::InvalidValues`] when a slot's values text does not
/// parse, and [`SweepError::NoParameters`] when no slot is active.
pub fn generate_sweep(request: &SweepRequest) -> SweepResult<SweepOutput> {
    if !(MIN_GRID_COLUMNS..=MAX_GRID_COLUMNS).contains(&request.grid_columns) {
        return Err(SweepError::invalid_grid_columns(request.grid_columns));
    }

    let base: Value = serde_json::from_str(&request.base_json)
        .map_err(|e| SweepError::invalid_document(e.to_string()))?;

    let mut specs = Vec::new();
    for slot in request.active_slots() {
        let values = parse_values(&slot.values)?;
        if values.is_empty() {
            continue;
        }
        specs.push(ParameterSpec::new(&slot.path, values));
    }
    if specs.is_empty() {
        return Err(SweepError::NoParameters);
    }

    let variants = expand_variants(&base, &specs);
    let metadata = SweepMetadata {
        total_variants: variants.len(),
        parameters: specs.iter().map(|spec| spec.path.to_string()).collect(),
        grid_layout: grid_layout(variants.len(), request.grid_columns),
    };

    let output = SweepOutput {
        variants_json: serde_json::to_string_pretty(&variants)?,
        total_count: variants.len(),
        metadata_json: serde_json::to_string_pretty(&metadata)?,
    };
    tracing::debug!(
        total = output.total_count,
        parameters = specs.len(),
        "generated parameter sweep"
    );
    Ok(output)
}

/// Keep only the variants whose deltas match every fixed (path, value) pair.
pub fn filter_variants<'a>(variants: &'a [Variant], fixed: &[(&str, f64)]) -> Vec<&'a Variant> {
    variants
        .iter()
        .filter(|variant| {
            fixed.iter().all(|(path, value)| {
                variant.deltas.get(*path).and_then(Value::as_f64) == Some(*value)
            })
        })
        .collect()
}

/// The sorted, deduplicated values a parameter path takes across a sweep.
pub fn parameter_values(variants: &[Variant], path: &str) -> Vec<f64> {
    let mut values: Vec<f64> = variants
        .iter()
        .filter_map(|variant| variant.deltas.get(path).and_then(Value::as_f64))
        .collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}
