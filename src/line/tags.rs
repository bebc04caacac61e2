use tracing::trace;

use crate::line::{Classification, GraphNode, LineError, NodeKind, PrimitiveKind, Result, TypeDescriptor, Value, classify, write_escaped};

/// Append `,<tag>=<value>` for every tag-role member of a composite object.
///
/// Tags are unquoted and carry no type suffix. Members whose value has no
/// tag form (absent or empty text, blobs, aggregates, non-finite floats)
/// are left out. A void-typed member is a structural violation.
pub(crate) fn write_tag_set(out: &mut String, node: &GraphNode<'_>) -> Result<()> {
	let (NodeKind::Object, TypeDescriptor::Composite(composite)) = (node.kind, node.ty) else {
		return Ok(());
	};

	for member in node.members(composite)? {
		match classify(&member) {
			Classification::Tag => {}
			Classification::Invalid => {
				return Err(LineError::UnexpectedType {
					name: member.name.to_owned(),
					kind: member.ty.kind_label(),
				});
			}
			_ => continue,
		}
		let TypeDescriptor::Primitive(kind) = member.ty else {
			trace!(node = member.name, "aggregate tag member skipped");
			continue;
		};
		let Some(text) = tag_value(*kind, member.value) else {
			trace!(node = member.name, ?kind, "tag member without tag form skipped");
			continue;
		};

		out.push(',');
		write_escaped(out, member.name);
		out.push('=');
		write_escaped(out, &text);
	}
	Ok(())
}

/// Render a primitive as tag-value text, or `None` when it has no tag form.
pub fn tag_value(kind: PrimitiveKind, value: &Value) -> Option<String> {
	let text = match (kind, value) {
		(PrimitiveKind::Boolean, Value::Bool(flag)) => flag.to_string(),
		(PrimitiveKind::Integer, Value::I64(number)) => number.to_string(),
		(PrimitiveKind::Uinteger, Value::U64(number)) => number.to_string(),
		(PrimitiveKind::Float, Value::F64(number)) if number.is_finite() => number.to_string(),
		(PrimitiveKind::Text, Value::Text(text)) | (PrimitiveKind::Enum, Value::Enum(text)) => text.to_string(),
		_ => return None,
	};
	if text.is_empty() { None } else { Some(text) }
}
