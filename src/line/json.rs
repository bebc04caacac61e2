use serde_json::{Map, Number};

use crate::line::node::struct_fields;
use crate::line::scalar::expected_label;
use crate::line::{GraphNode, LineError, PrimitiveKind, Result, TypeDescriptor, Value};

/// JSON collaborator used to flatten nested composites and collections.
pub trait JsonEncoder {
	/// Serialize the node's value losslessly as compact JSON text.
	fn encode(&self, node: &GraphNode<'_>) -> Result<String>;
}

/// Default [`JsonEncoder`] backed by `serde_json`.
///
/// Composite members keep their declared order. Enums render as their
/// constant name, absent text as `null`, and non-finite floats as `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonEncoder {
	/// Optional nesting ceiling; `None` converts any depth.
	pub max_depth: Option<u32>,
}

impl JsonEncoder for SerdeJsonEncoder {
	fn encode(&self, node: &GraphNode<'_>) -> Result<String> {
		let json = self.to_json(node.name, node.ty, node.value, 0)?;
		Ok(serde_json::to_string(&json)?)
	}
}

impl SerdeJsonEncoder {
	fn to_json(&self, name: &str, ty: &TypeDescriptor, value: &Value, depth: u32) -> Result<serde_json::Value> {
		if let Some(max_depth) = self.max_depth.filter(|max| depth >= *max) {
			return Err(LineError::DepthExceeded { max_depth });
		}

		match ty {
			TypeDescriptor::Primitive(kind) => primitive_to_json(name, *kind, value),
			TypeDescriptor::Composite(composite) => {
				let fields = struct_fields(name, composite, value)?;
				let mut map = Map::with_capacity(fields.len());
				for (member, field) in composite.members.iter().zip(fields) {
					map.insert(member.name.to_string(), self.to_json(&member.name, &member.ty, field, depth + 1)?);
				}
				Ok(serde_json::Value::Object(map))
			}
			TypeDescriptor::Collection(collection) => {
				let items: &[Value] = match value {
					Value::Array(items) => items.as_slice(),
					Value::Null => &[],
					other => {
						return Err(LineError::ValueMismatch {
							name: name.to_owned(),
							expected: "array",
							got: other.kind_label(),
						});
					}
				};
				let mut out = Vec::with_capacity(items.len());
				for item in items {
					out.push(self.to_json(name, &collection.element, item, depth + 1)?);
				}
				Ok(serde_json::Value::Array(out))
			}
			TypeDescriptor::Void => Err(LineError::UnexpectedType {
				name: name.to_owned(),
				kind: ty.kind_label(),
			}),
		}
	}
}

fn primitive_to_json(name: &str, kind: PrimitiveKind, value: &Value) -> Result<serde_json::Value> {
	let json = match (kind, value) {
		(PrimitiveKind::Boolean, Value::Bool(flag)) => serde_json::Value::Bool(*flag),
		(PrimitiveKind::Integer, Value::I64(number)) => serde_json::Value::from(*number),
		(PrimitiveKind::Uinteger | PrimitiveKind::Character | PrimitiveKind::Bitmask, Value::U64(number)) => serde_json::Value::from(*number),
		(PrimitiveKind::Float, Value::F64(number)) => Number::from_f64(*number).map_or(serde_json::Value::Null, serde_json::Value::Number),
		(PrimitiveKind::Text, Value::Text(text)) | (PrimitiveKind::Enum, Value::Enum(text)) => serde_json::Value::String(text.to_string()),
		(PrimitiveKind::Text, Value::Null) => serde_json::Value::Null,
		(PrimitiveKind::Binary, Value::Bytes(bytes)) => serde_json::Value::Array(bytes.iter().map(|byte| serde_json::Value::from(*byte)).collect()),
		(kind, other) => {
			return Err(LineError::ValueMismatch {
				name: name.to_owned(),
				expected: expected_label(kind),
				got: other.kind_label(),
			});
		}
	};
	Ok(json)
}
