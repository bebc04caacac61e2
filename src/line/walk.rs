use tracing::trace;

use crate::line::{
	Classification, GraphNode, JsonEncoder, LineError, NodeKind, PrimitiveKind, Result, TypeDescriptor, classify, resolve_timestamp, write_escaped,
	write_scalar,
};

/// Output buffer and emitted-field counter for one encode call.
#[derive(Debug, Default)]
pub(crate) struct EncodingState {
	pub(crate) out: String,
	pub(crate) field_count: u32,
}

impl EncodingState {
	/// Comma before every field except the first one emitted.
	fn separate(&mut self) {
		if self.field_count > 0 {
			self.out.push(',');
		}
	}

	pub(crate) fn into_string(self) -> String {
		self.out
	}
}

/// Recursive graph walker with a fixed handler per node and type kind.
pub(crate) struct Walker<'e> {
	pub(crate) json: &'e dyn JsonEncoder,
	pub(crate) max_depth: Option<u32>,
	pub(crate) include_timestamp: bool,
}

impl Walker<'_> {
	pub(crate) fn walk(&self, node: &GraphNode<'_>, state: &mut EncodingState, depth: u32) -> Result<()> {
		if let Some(max_depth) = self.max_depth.filter(|max| depth >= *max) {
			return Err(LineError::DepthExceeded { max_depth });
		}

		match node.kind {
			NodeKind::Object => self.visit_object(node, state, depth),
			NodeKind::Member | NodeKind::Element => self.visit_item(node, state, depth),
			NodeKind::Value => self.visit_value(node, state, depth),
		}
	}

	fn visit_object(&self, node: &GraphNode<'_>, state: &mut EncodingState, depth: u32) -> Result<()> {
		self.visit_value(node, state, depth)?;

		if self.include_timestamp {
			if let Some(timestamp) = resolve_timestamp(node)? {
				state.out.push(' ');
				state.out.push_str(&timestamp.nanos.to_string());
			}
		}
		Ok(())
	}

	fn visit_item(&self, node: &GraphNode<'_>, state: &mut EncodingState, depth: u32) -> Result<()> {
		match classify(node) {
			Classification::Timestamp(role) => {
				trace!(node = node.name, ?role, "timestamp member excluded from fields");
				Ok(())
			}
			Classification::Tag => {
				trace!(node = node.name, "tag member excluded from fields");
				Ok(())
			}
			Classification::Nested => self.emit_nested(node, state),
			Classification::Scalar(kind) => self.emit_scalar(node, kind, state),
			Classification::Invalid => self.visit_value(node, state, depth),
		}
	}

	fn visit_value(&self, node: &GraphNode<'_>, state: &mut EncodingState, depth: u32) -> Result<()> {
		match node.ty {
			TypeDescriptor::Primitive(kind) => self.emit_scalar(node, *kind, state),
			TypeDescriptor::Composite(composite) => {
				for member in node.members(composite)? {
					self.walk(&member, state, depth + 1)?;
				}
				Ok(())
			}
			TypeDescriptor::Collection(collection) => {
				for element in node.elements(collection)? {
					self.walk(&element, state, depth + 1)?;
				}
				Ok(())
			}
			TypeDescriptor::Void => Err(LineError::UnexpectedType {
				name: node.name.to_owned(),
				kind: node.ty.kind_label(),
			}),
		}
	}

	fn emit_scalar(&self, node: &GraphNode<'_>, kind: PrimitiveKind, state: &mut EncodingState) -> Result<()> {
		let mark = state.out.len();
		state.separate();
		write_escaped(&mut state.out, node.name);
		state.out.push('=');

		if write_scalar(&mut state.out, kind, node.value).map_err(|err| named(err, node.name))? {
			state.field_count += 1;
		} else {
			state.out.truncate(mark);
			trace!(node = node.name, ?kind, "skipping field with no line protocol form");
		}
		Ok(())
	}

	fn emit_nested(&self, node: &GraphNode<'_>, state: &mut EncodingState) -> Result<()> {
		let json = self.json.encode(node)?;

		state.separate();
		write_escaped(&mut state.out, node.name);
		state.out.push_str("=\"");
		write_escaped(&mut state.out, &json);
		state.out.push('"');
		state.field_count += 1;
		Ok(())
	}
}

/// Attach the node name to errors raised by name-agnostic helpers.
fn named(err: LineError, node_name: &str) -> LineError {
	match err {
		LineError::ValueMismatch { name, expected, got } if name.is_empty() => LineError::ValueMismatch {
			name: node_name.to_owned(),
			expected,
			got,
		},
		other => other,
	}
}
