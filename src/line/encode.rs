use tracing::trace;

use crate::line::tags::write_tag_set;
use crate::line::walk::{EncodingState, Walker};
use crate::line::{GraphNode, JsonEncoder, LineError, NodeKind, Object, Result, ResultRecord, SerdeJsonEncoder, Value, write_escaped};

/// Behavior switches for line encoding.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
	/// Measurement written ahead of the tag and field sets; `None` writes the bare field set.
	pub measurement: Option<String>,
	/// Caller-chosen nesting ceiling; `None` walks any depth.
	pub max_depth: Option<u32>,
	/// Append the resolved timestamp suffix to object lines.
	pub include_timestamp: bool,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self {
			measurement: None,
			max_depth: None,
			include_timestamp: true,
		}
	}
}

impl EncodeOptions {
	/// Preset producing complete `measurement,tags fields timestamp` lines.
	pub fn for_measurement(measurement: &str) -> Self {
		Self {
			measurement: Some(measurement.to_owned()),
			..Self::default()
		}
	}
}

/// Line-protocol format: encode entry points plus the unsupported decode side.
pub struct LineFormat<'j> {
	json: &'j dyn JsonEncoder,
	options: EncodeOptions,
}

impl<'j> LineFormat<'j> {
	/// Create a format using `json` to flatten nested values.
	pub fn new(json: &'j dyn JsonEncoder, options: EncodeOptions) -> Self {
		Self { json, options }
	}

	/// Active options.
	pub fn options(&self) -> &EncodeOptions {
		&self.options
	}

	/// Encode any node. Object nodes get tag and timestamp handling; other
	/// nodes are walked as plain values.
	///
	/// A measurement line that ends up with no field keeps only its prefix
	/// and optional timestamp, with no dangling separator.
	pub fn from_value(&self, node: &GraphNode<'_>) -> Result<String> {
		let mut state = EncodingState::default();

		let mut prefix_separator = None;
		if let Some(measurement) = &self.options.measurement {
			write_escaped(&mut state.out, measurement);
			if node.kind == NodeKind::Object {
				write_tag_set(&mut state.out, node)?;
			}
			prefix_separator = Some(state.out.len());
			state.out.push(' ');
		}

		let walker = Walker {
			json: self.json,
			max_depth: self.options.max_depth,
			include_timestamp: self.options.include_timestamp,
		};
		walker.walk(node, &mut state, 0)?;

		if let Some(at) = prefix_separator.filter(|_| state.field_count == 0) {
			state.out.remove(at);
		}

		trace!(node = node.name, fields = state.field_count, "encoded line");
		Ok(state.into_string())
	}

	/// Encode an object with tag, field, and timestamp handling.
	pub fn from_object(&self, object: &Object) -> Result<String> {
		self.from_value(&GraphNode::object(object))
	}

	/// Query results carry no field set; nothing is produced.
	pub fn from_result(&self, record: &ResultRecord) -> Option<String> {
		trace!(id = %record.id, "result records have no line protocol form");
		None
	}

	/// Always fails: line protocol is write-only.
	pub fn to_value(&self, _target: &mut Value, _text: &str) -> Result<()> {
		Err(LineError::Unsupported { operation: "to_value" })
	}

	/// Always fails: line protocol is write-only.
	pub fn to_object(&self, _text: &str) -> Result<Object> {
		Err(LineError::Unsupported { operation: "to_object" })
	}

	/// Always fails: line protocol is write-only.
	pub fn to_result(&self, _text: &str) -> Result<ResultRecord> {
		Err(LineError::Unsupported { operation: "to_result" })
	}
}

/// Encode a node with the `serde_json` collaborator and default options.
pub fn from_value(node: &GraphNode<'_>) -> Result<String> {
	let options = EncodeOptions::default();
	let json = SerdeJsonEncoder { max_depth: options.max_depth };
	LineFormat::new(&json, options).from_value(node)
}

/// Encode an object with the `serde_json` collaborator and default options.
pub fn from_object(object: &Object) -> Result<String> {
	from_value(&GraphNode::object(object))
}

/// Dispose of text returned by an encode call.
pub fn release(text: String) {
	drop(text);
}

/// Duplicate encoded text for a caller that needs an independent copy.
pub fn copy(text: &str) -> String {
	text.to_owned()
}
