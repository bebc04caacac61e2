use crate::line::{LineError, PrimitiveKind, Result, Value};

/// Render one primitive value as a standalone string.
///
/// Returns `Ok(None)` for kinds line protocol cannot carry.
pub fn encode_scalar(kind: PrimitiveKind, value: &Value) -> Result<Option<String>> {
	let mut out = String::new();
	if write_scalar(&mut out, kind, value)? { Ok(Some(out)) } else { Ok(None) }
}

/// Append the field rendering of `value` to `out`.
///
/// Writes nothing and returns `false` when the kind (or a non-finite float)
/// has no line-protocol form.
pub fn write_scalar(out: &mut String, kind: PrimitiveKind, value: &Value) -> Result<bool> {
	if !kind.is_line_supported() {
		return Ok(false);
	}

	match (kind, value) {
		(PrimitiveKind::Boolean, Value::Bool(flag)) => out.push_str(if *flag { "true" } else { "false" }),
		(PrimitiveKind::Integer, Value::I64(number)) => {
			out.push_str(&number.to_string());
			out.push('i');
		}
		(PrimitiveKind::Uinteger, Value::U64(number)) => {
			out.push_str(&number.to_string());
			out.push('i');
		}
		(PrimitiveKind::Float, Value::F64(number)) => {
			if !number.is_finite() {
				return Ok(false);
			}
			out.push_str(&number.to_string());
		}
		(PrimitiveKind::Text, Value::Text(text)) => {
			out.push('"');
			out.push_str(text);
			out.push('"');
		}
		(PrimitiveKind::Text, Value::Null) => out.push_str("\"\""),
		(PrimitiveKind::Enum, Value::Enum(symbol)) => {
			out.push('"');
			out.push_str(symbol);
			out.push('"');
		}
		(kind, other) => {
			return Err(LineError::ValueMismatch {
				name: String::new(),
				expected: expected_label(kind),
				got: other.kind_label(),
			});
		}
	}
	Ok(true)
}

/// Value shape a primitive kind is stored as.
pub(crate) fn expected_label(kind: PrimitiveKind) -> &'static str {
	match kind {
		PrimitiveKind::Boolean => "bool",
		PrimitiveKind::Integer => "i64",
		PrimitiveKind::Uinteger => "u64",
		PrimitiveKind::Float => "f64",
		PrimitiveKind::Text => "text",
		PrimitiveKind::Enum => "enum",
		PrimitiveKind::Binary => "bytes",
		PrimitiveKind::Character => "u64",
		PrimitiveKind::Bitmask => "u64",
	}
}
