mod classify;
mod encode;
mod error;
mod escape;
mod json;
mod node;
mod scalar;
mod schema;
mod tags;
mod timestamp;
mod value;
mod walk;

/// Member/element classification.
pub use classify::{Classification, classify};
/// Line assembly entry points, options, and ownership helpers.
pub use encode::{EncodeOptions, LineFormat, copy, from_object, from_value, release};
/// Error and result aliases.
pub use error::{LineError, Result};
/// Identifier escaping.
pub use escape::{escape, write_escaped};
/// JSON collaborator trait and default implementation.
pub use json::{JsonEncoder, SerdeJsonEncoder};
/// Borrowed graph node views.
pub use node::{GraphNode, NodeKind};
/// Scalar field rendering.
pub use scalar::{encode_scalar, write_scalar};
/// Reflection type descriptors and member roles.
pub use schema::{CollectionKind, CollectionType, CompositeType, Member, PrimitiveKind, Role, TIME_TYPE_NAME, TimestampRole, TypeDescriptor};
/// Tag value rendering.
pub use tags::tag_value;
/// Timestamp member resolution.
pub use timestamp::{ResolvedTimestamp, resolve_timestamp, time_to_nanos};
/// Runtime values and root instances.
pub use value::{Object, ResultRecord, Value};
