#![allow(missing_docs)]

use influxline::line::{EncodeOptions, LineError, LineFormat, SerdeJsonEncoder, Value};

#[test]
fn every_decode_entry_point_fails_without_side_effects() {
	let json = SerdeJsonEncoder::default();
	let format = LineFormat::new(&json, EncodeOptions::default());

	let mut target = Value::I64(7);
	let err = format.to_value(&mut target, "a=1i").expect_err("decode is unsupported");
	assert!(matches!(err, LineError::Unsupported { operation: "to_value" }));
	assert_eq!(target, Value::I64(7));

	assert!(matches!(format.to_object("a=1i"), Err(LineError::Unsupported { operation: "to_object" })));
	assert!(matches!(format.to_result(""), Err(LineError::Unsupported { operation: "to_result" })));
}
