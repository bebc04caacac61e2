use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, LineError>;

/// Errors produced while walking an object graph and encoding line protocol.
#[derive(Debug, Error)]
pub enum LineError {
	/// Decode entry point invoked; line protocol is write-only.
	#[error("{operation}: conversion from influx line protocol not supported")]
	Unsupported {
		/// Name of the rejected entry point.
		operation: &'static str,
	},
	/// Walked a node whose type is neither primitive, composite, nor collection.
	#[error("unexpected type for {name}: {kind} is not primitive, composite or collection")]
	UnexpectedType {
		/// Name of the offending node.
		name: String,
		/// Descriptor kind label.
		kind: &'static str,
	},
	/// Value variant does not match the type descriptor.
	#[error("value mismatch for {name}: expected {expected}, got {got}")]
	ValueMismatch {
		/// Name of the offending node.
		name: String,
		/// Value shape the descriptor requires.
		expected: &'static str,
		/// Value shape actually present.
		got: &'static str,
	},
	/// Struct value member count differs from its composite descriptor.
	#[error("arity mismatch for {type_name}: descriptor has {expected} members, value has {got}")]
	ArityMismatch {
		/// Composite type name.
		type_name: String,
		/// Declared member count.
		expected: usize,
		/// Member values present.
		got: usize,
	},
	/// Walk recursion exceeded a depth ceiling the caller configured.
	#[error("encode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Timestamp member does not fit an unsigned 64-bit nanosecond count.
	#[error("timestamp {member} out of range: sec={sec}, nanosec={nanosec}")]
	TimestampOutOfRange {
		/// Member supplying the timestamp.
		member: String,
		/// Seconds component.
		sec: i64,
		/// Nanoseconds component.
		nanosec: u64,
	},
	/// JSON collaborator failed to serialize a nested value.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
