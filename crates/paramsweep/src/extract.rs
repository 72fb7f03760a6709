//! Indexed extraction of a single variant from a serialized sweep.

use crate::sweep::Variant;
use crate::{SweepError, SweepResult};

/// A variant pulled out of a sweep, document and deltas serialized
/// independently.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractedVariant {
    /// The variant's document as JSON text, 2-space indented.
    pub document_json: String,
    /// The variant's deltas as JSON text, 2-space indented.
    pub deltas_json: String,
}

/// Extract the variant at `index` from a serialized variant list.
///
/// Fails with [`SweepError::InvalidVariants`] when the text does not
/// deserialize into a list of variants, and with
/// [`SweepError::IndexOutOfRange`] when `index` is past the end; the error
/// reports both the requested index and the largest valid one. The input
/// list is never modified.
///
/// # Examples
///
/// ```
/// use paramsweep::{extract_variant, generate_sweep, SweepRequest};
///
/// let request = SweepRequest::new(r#"{"a": {"b": 1}}"#)
///     .with_parameter("a.b", "10,20");
/// let output = generate_sweep(&request).unwrap();
///
/// let variant = extract_variant(&output.variants_json, 1).unwrap();
/// assert!(variant.deltas_json.contains("a.b"));
/// ```
pub fn extract_variant(variants_json: &str, index: usize) -> SweepResult<ExtractedVariant> {
    let variants: Vec<Variant> = serde_json::from_str(variants_json)
        .map_err(|e| SweepError::invalid_variants(e.to_string()))?;

    let Some(variant) = variants.get(index) else {
        return Err(SweepError::index_out_of_range(index, variants.len()));
    };

    let extracted = ExtractedVariant {
        document_json: serde_json::to_string_pretty(&variant.document)?,
        deltas_json: serde_json::to_string_pretty(&variant.deltas)?,
    };
    tracing::debug!(index, total = variants.len(), "extracted sweep variant");
    Ok(extracted)
}
