use tracing::debug;

use crate::line::node::struct_fields;
use crate::line::{GraphNode, LineError, Result, TimestampRole, TypeDescriptor, Value};

const SEC_TO_NANOSEC: u64 = 1_000_000_000;

/// Timestamp chosen to close an object's line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTimestamp<'a> {
	/// Role that selected the member.
	pub role: TimestampRole,
	/// Member supplying the time.
	pub member: &'a str,
	/// Nanoseconds since the epoch.
	pub nanos: u64,
}

/// Locate the timestamp member of a composite object and convert it to nanoseconds.
///
/// Members are searched by role priority (last-modified, created, received);
/// only the first match is considered. A match whose type is not the `time`
/// composite yields no timestamp. Non-composite nodes never have one.
pub fn resolve_timestamp<'a>(node: &GraphNode<'a>) -> Result<Option<ResolvedTimestamp<'a>>> {
	let TypeDescriptor::Composite(composite) = node.ty else {
		return Ok(None);
	};

	let Some((role, index, member)) = TimestampRole::PRIORITY
		.iter()
		.find_map(|role| composite.member_by_timestamp_role(*role).map(|(index, member)| (*role, index, member)))
	else {
		return Ok(None);
	};

	let TypeDescriptor::Composite(time) = &member.ty else {
		return Ok(None);
	};
	if !time.is_time() {
		return Ok(None);
	}

	let fields = struct_fields(node.name, composite, node.value)?;
	let (sec, nanosec) = match fields.get(index) {
		Some(Value::Struct(parts)) => match parts.as_slice() {
			[Value::I64(sec), Value::U64(nanosec)] => (*sec, *nanosec),
			_ => {
				return Err(LineError::ValueMismatch {
					name: member.name.to_string(),
					expected: "time",
					got: "struct",
				});
			}
		},
		other => {
			return Err(LineError::ValueMismatch {
				name: member.name.to_string(),
				expected: "time",
				got: other.map_or("missing", Value::kind_label),
			});
		}
	};

	let nanos = time_to_nanos(sec, nanosec).ok_or_else(|| LineError::TimestampOutOfRange {
		member: member.name.to_string(),
		sec,
		nanosec,
	})?;
	debug!(object = node.name, member = %member.name, ?role, nanos, "resolved line timestamp");

	Ok(Some(ResolvedTimestamp {
		role,
		member: &member.name,
		nanos,
	}))
}

/// Convert a seconds/nanoseconds pair to nanoseconds, `None` when it does not fit `u64`.
pub fn time_to_nanos(sec: i64, nanosec: u64) -> Option<u64> {
	let sec = u64::try_from(sec).ok()?;
	sec.checked_mul(SEC_TO_NANOSEC)?.checked_add(nanosec)
}
