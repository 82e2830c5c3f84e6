//! Persistence: JSON shape, round trips, bad input handling.

use underlay::{Rect, SupportImageLayer};

use crate::helpers::TestLayerBuilder;

fn sample_layer() -> SupportImageLayer {
    let mut layer = TestLayerBuilder::new()
        .with_image("maps/floor1.png", Rect::new(10.0, 20.0, 100.0, 50.0))
        .with_locked_image("maps/floor2.png", Rect::new(200.0, 0.0, 80.0, 80.0))
        .build();
    let top = layer.images()[0].id;
    layer.select_image(top);
    layer
}

#[test]
fn json_round_trip_preserves_everything() {
    let layer = sample_layer();
    let json = layer.to_json().unwrap();

    let mut restored = SupportImageLayer::new();
    restored.load_json(&json).unwrap();

    assert_eq!(restored.images().len(), 2);
    for (a, b) in layer.images().iter().zip(restored.images()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.url, b.url);
        assert_eq!(a.name, b.name);
        assert_eq!(a.bounds, b.bounds);
        assert_eq!(a.locked, b.locked);
        assert_eq!(a.visible, b.visible);
    }
    assert_eq!(
        restored.selected_image().map(|img| img.id),
        layer.selected_image().map(|img| img.id)
    );
}

#[test]
fn wire_format_uses_flat_bounds_fields() {
    let layer = sample_layer();
    let value: serde_json::Value = serde_json::from_str(&layer.to_json().unwrap()).unwrap();

    let selected = value["selected"].as_str().unwrap();
    assert_eq!(selected, layer.images()[0].id.to_string());

    let bounds = &value["images"][0]["bounds"];
    assert_eq!(bounds["x"], 10.0);
    assert_eq!(bounds["y"], 20.0);
    assert_eq!(bounds["width"], 100.0);
    assert_eq!(bounds["height"], 50.0);
    assert_eq!(value["images"][1]["locked"], true);
}

#[test]
fn no_selection_omits_the_selected_field() {
    let layer = TestLayerBuilder::new()
        .with_image("a.png", Rect::new(0.0, 0.0, 1.0, 1.0))
        .build();
    let value: serde_json::Value = serde_json::from_str(&layer.to_json().unwrap()).unwrap();
    assert!(value.get("selected").is_none());
}

#[test]
fn unknown_selected_id_is_ignored_on_load() {
    let json = format!(
        r#"{{"selected":"{}","images":[{{"id":"{}","url":"a.png","name":"a.png","bounds":{{"x":0.0,"y":0.0,"width":10.0,"height":10.0}},"locked":false,"visible":true}}]}}"#,
        uuid::Uuid::new_v4(),
        uuid::Uuid::new_v4(),
    );
    let mut layer = SupportImageLayer::new();
    layer.load_json(&json).unwrap();
    assert_eq!(layer.images().len(), 1);
    assert!(layer.selected_image().is_none());
}

#[test]
fn malformed_json_is_an_error_and_leaves_the_layer_alone() {
    let mut layer = sample_layer();
    assert!(layer.load_json("{not json").is_err());
    assert_eq!(layer.images().len(), 2);
}

#[test]
fn load_replaces_previous_contents() {
    let mut layer = sample_layer();
    let json = TestLayerBuilder::new()
        .with_image("other.png", Rect::new(0.0, 0.0, 5.0, 5.0))
        .build()
        .to_json()
        .unwrap();

    layer.load_json(&json).unwrap();
    assert_eq!(layer.images().len(), 1);
    assert_eq!(layer.images()[0].url, "other.png");
    assert!(layer.selected_image().is_none());
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layer.json");

    let layer = sample_layer();
    layer.save_to_file(&path).unwrap();

    let mut restored = SupportImageLayer::new();
    restored.load_from_file(&path).unwrap();
    assert_eq!(restored.images().len(), 2);
    assert_eq!(
        restored.selected_image().map(|img| img.id),
        Some(layer.images()[0].id)
    );
}

#[test]
fn loading_a_missing_file_is_an_error() {
    let mut layer = SupportImageLayer::new();
    let err = layer
        .load_from_file(std::path::Path::new("/nonexistent/layer.json"))
        .unwrap_err();
    assert!(err.to_string().contains("reading layer state"));
}
