//! End-to-end tests of the string-level contract: generation output feeding
//! the extractor, round-trips through recorded deltas, and the documented
//! edge cases.

use paramsweep::{
    extract_variant, generate_sweep, set_value, KeyPath, SweepError, SweepMetadata, SweepRequest,
    Variant,
};
use serde_json::{json, Value};

const BASE: &str = r#"{
  "seed": 1337,
  "camera": {"fov": 35, "angle": "eye_level"},
  "lights": {"key": {"temperature": 5000, "intensity": 0.9}},
  "subject": {"description": "ceramic bottle"}
}"#;

#[test]
fn single_parameter_sweep_end_to_end() {
    let request = SweepRequest::new(r#"{"a": {"b": 1}}"#).with_parameter("a.b", "10,20");
    let output = generate_sweep(&request).unwrap();
    assert_eq!(output.total_count, 2);

    let first = extract_variant(&output.variants_json, 0).unwrap();
    let doc: Value = serde_json::from_str(&first.document_json).unwrap();
    assert_eq!(doc, json!({"a": {"b": 10.0}}));
    let deltas: Value = serde_json::from_str(&first.deltas_json).unwrap();
    assert_eq!(deltas, json!({"a.b": 10.0}));

    let second = extract_variant(&output.variants_json, 1).unwrap();
    let doc: Value = serde_json::from_str(&second.document_json).unwrap();
    assert_eq!(doc, json!({"a": {"b": 20.0}}));
}

#[test]
fn two_parameter_sweep_covers_full_product() {
    let request = SweepRequest::new(BASE)
        .with_parameter("camera.fov", "25,35,45")
        .with_parameter("lights.key.temperature", "3000,6000");
    let output = generate_sweep(&request).unwrap();
    assert_eq!(output.total_count, 6);

    let variants: Vec<Variant> = serde_json::from_str(&output.variants_json).unwrap();
    let mut pairs: Vec<(f64, f64)> = variants
        .iter()
        .map(|v| {
            (
                v.deltas["camera.fov"].as_f64().unwrap(),
                v.deltas["lights.key.temperature"].as_f64().unwrap(),
            )
        })
        .collect();
    pairs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    pairs.dedup();
    assert_eq!(pairs.len(), 6, "no duplicates, no omissions");
    for fov in [25.0, 35.0, 45.0] {
        for temp in [3000.0, 6000.0] {
            assert!(pairs.contains(&(fov, temp)));
        }
    }

    // Untouched parts of the base survive in every variant.
    for variant in &variants {
        assert_eq!(variant.document["subject"]["description"], "ceramic bottle");
        assert_eq!(variant.document["seed"], 1337);
    }
}

#[test]
fn extracted_variant_equals_base_plus_deltas() {
    let request = SweepRequest::new(BASE)
        .with_parameter("camera.fov", "25,45")
        .with_parameter("lights.key.intensity", "0.5,1.0")
        .with_parameter("color_palette.warmth", "0-1:3");
    let output = generate_sweep(&request).unwrap();
    assert_eq!(output.total_count, 12);

    let base: Value = serde_json::from_str(BASE).unwrap();
    for index in 0..output.total_count {
        let extracted = extract_variant(&output.variants_json, index).unwrap();
        let document: Value = serde_json::from_str(&extracted.document_json).unwrap();
        let deltas: Value = serde_json::from_str(&extracted.deltas_json).unwrap();

        let mut rebuilt = base.clone();
        for (path, value) in deltas.as_object().unwrap() {
            set_value(&mut rebuilt, &KeyPath::parse(path), value.clone());
        }
        assert_eq!(document, rebuilt, "variant {index} round-trips");
    }
}

#[test]
fn grid_layout_rows_are_ceil_of_count_over_columns() {
    let values: Vec<String> = (1..=23).map(|i| i.to_string()).collect();
    let request = SweepRequest::new("{}").with_parameter("x", values.join(","));
    let output = generate_sweep(&request).unwrap();
    assert_eq!(output.total_count, 23);

    let metadata: SweepMetadata = serde_json::from_str(&output.metadata_json).unwrap();
    assert_eq!(metadata.grid_layout.columns, 5);
    assert_eq!(metadata.grid_layout.rows, 5);
    assert_eq!(metadata.parameters, vec!["x"]);
}

#[test]
fn extractor_index_boundaries() {
    let request = SweepRequest::new("{}").with_parameter("n", "1,2,3");
    let output = generate_sweep(&request).unwrap();
    let count = output.total_count;

    assert!(extract_variant(&output.variants_json, count - 1).is_ok());
    let err = extract_variant(&output.variants_json, count).unwrap_err();
    assert!(matches!(err, SweepError::IndexOutOfRange { index: 3, max: 2 }));
}

#[test]
fn generation_is_deterministic() {
    let request = SweepRequest::new(BASE)
        .with_parameter("camera.fov", "log:10-100:4")
        .with_parameter("lights.key.intensity", "0.5,0.9");
    let first = generate_sweep(&request).unwrap();
    let second = generate_sweep(&request).unwrap();

    assert_eq!(first.total_count, second.total_count);
    assert_eq!(first.variants_json, second.variants_json);
    assert_eq!(first.metadata_json, second.metadata_json);
}

#[test]
fn payloads_are_two_space_indented() {
    let request = SweepRequest::new(r#"{"a": 1}"#).with_parameter("a", "2");
    let output = generate_sweep(&request).unwrap();
    assert!(output.variants_json.contains("\n  "));
    assert!(output.metadata_json.contains("\n  "));
}

#[test]
fn parameter_path_absent_from_base_is_created() {
    let request = SweepRequest::new(r#"{"seed": 1}"#).with_parameter("render.steps", "10,20");
    let output = generate_sweep(&request).unwrap();

    let variant = extract_variant(&output.variants_json, 1).unwrap();
    let doc: Value = serde_json::from_str(&variant.document_json).unwrap();
    assert_eq!(doc, json!({"seed": 1, "render": {"steps": 20.0}}));
}
