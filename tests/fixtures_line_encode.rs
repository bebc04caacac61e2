#![allow(missing_docs)]

use influxline::line::{EncodeOptions, GraphNode, LineFormat, Object, SerdeJsonEncoder, from_object, from_value};
use influxline_testkit::fixture_json;

fn load_object(name: &str) -> Object {
	serde_json::from_value(fixture_json(name)).expect("fixture deserializes as object")
}

#[test]
fn reading_fixture_encodes_fields_and_highest_priority_timestamp() {
	let object = load_object("reading.json");
	let line = from_object(&object).expect("encode succeeds");
	assert_eq!(line, r#"temp=21.5,status="OK",samples="[1,2]" 2000000250"#);
}

#[test]
fn reading_fixture_with_measurement_writes_tag_set() {
	let object = load_object("reading.json");
	let json = SerdeJsonEncoder::default();
	let format = LineFormat::new(&json, EncodeOptions::for_measurement("climate"));
	let line = format.from_object(&object).expect("encode succeeds");
	assert_eq!(line, r#"climate,host=edge\ 01 temp=21.5,status="OK",samples="[1,2]" 2000000250"#);
}

#[test]
fn collection_object_emits_one_field_per_element() {
	let object = load_object("levels.json");
	assert_eq!(from_object(&object).expect("encode succeeds"), "levels=3i,levels=4i");
}

#[test]
fn fixture_round_trips_through_serde() {
	let object = load_object("reading.json");
	let text = serde_json::to_string(&object).expect("object serializes");
	let again: Object = serde_json::from_str(&text).expect("object deserializes");
	assert_eq!(again, object);

	let node = GraphNode::value("reading", &again.ty, &again.value);
	assert_eq!(from_value(&node).expect("encode succeeds"), r#"temp=21.5,status="OK",samples="[1,2]""#);
}
