use serde::{Deserialize, Serialize};

/// Type name of the well-known seconds/nanoseconds composite.
pub const TIME_TYPE_NAME: &str = "time";

/// Primitive value kinds known to the reflection layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
	/// `true` / `false`.
	Boolean,
	/// Signed integer of any width.
	Integer,
	/// Unsigned integer of any width.
	Uinteger,
	/// Floating point of any width.
	Float,
	/// Owned, possibly absent, string.
	Text,
	/// Enumeration rendered by constant name.
	Enum,
	/// Raw byte blob.
	Binary,
	/// Single character.
	Character,
	/// Bit flag set.
	Bitmask,
}

impl PrimitiveKind {
	/// Whether line protocol has a field representation for this kind.
	pub fn is_line_supported(self) -> bool {
		matches!(self, Self::Boolean | Self::Integer | Self::Uinteger | Self::Float | Self::Text | Self::Enum)
	}
}

/// Timestamp roles a member can carry, used to pick the line timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampRole {
	/// Time the object was created.
	Created,
	/// Time the object was last modified.
	LastModified,
	/// Time the object was received.
	Received,
}

impl TimestampRole {
	/// Lookup order used when an object carries several timestamp members.
	pub const PRIORITY: [TimestampRole; 3] = [TimestampRole::LastModified, TimestampRole::Created, TimestampRole::Received];
}

/// Semantic tag attached to a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
	/// Member belongs to the line's tag set rather than its fields.
	Tag,
	/// Member supplies a timestamp.
	Timestamp(TimestampRole),
}

/// One named member of a composite type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
	/// Member identifier.
	pub name: Box<str>,
	/// Member type.
	pub ty: TypeDescriptor,
	/// Semantic roles, in declaration order.
	#[serde(default)]
	pub roles: Vec<Role>,
}

impl Member {
	/// Member without roles.
	pub fn new(name: &str, ty: TypeDescriptor) -> Self {
		Self {
			name: name.into(),
			ty,
			roles: Vec::new(),
		}
	}

	/// Builder-style role attachment.
	pub fn with_role(mut self, role: Role) -> Self {
		self.roles.push(role);
		self
	}

	/// Whether the member carries `role`.
	pub fn has_role(&self, role: Role) -> bool {
		self.roles.contains(&role)
	}
}

/// Struct-like type with ordered named members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeType {
	/// Type name.
	pub name: Box<str>,
	/// Members in declared order.
	pub members: Vec<Member>,
}

impl CompositeType {
	/// The `time { sec, nanosec }` composite.
	pub fn time() -> Self {
		Self {
			name: TIME_TYPE_NAME.into(),
			members: vec![
				Member::new("sec", TypeDescriptor::Primitive(PrimitiveKind::Integer)),
				Member::new("nanosec", TypeDescriptor::Primitive(PrimitiveKind::Uinteger)),
			],
		}
	}

	/// Whether this is the seconds/nanoseconds time composite.
	pub fn is_time(&self) -> bool {
		self.name.as_ref() == TIME_TYPE_NAME
			&& matches!(
				self.members.as_slice(),
				[sec, nanosec] if sec.name.as_ref() == "sec"
					&& nanosec.name.as_ref() == "nanosec"
					&& sec.ty == TypeDescriptor::Primitive(PrimitiveKind::Integer)
					&& nanosec.ty == TypeDescriptor::Primitive(PrimitiveKind::Uinteger)
			)
	}

	/// First member carrying `role`, with its declared index.
	pub fn member_by_timestamp_role(&self, role: TimestampRole) -> Option<(usize, &Member)> {
		self.members.iter().enumerate().find(|(_, member)| member.has_role(Role::Timestamp(role)))
	}
}

/// Ordering guarantee of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
	/// Fixed-length array.
	Array,
	/// Growable ordered sequence.
	Sequence,
	/// Ordered linked list.
	List,
	/// Unordered set; iteration order is whatever the host supplied.
	Set,
}

/// Collection of uniformly typed elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionType {
	/// Collection flavour.
	pub kind: CollectionKind,
	/// Element type.
	pub element: Box<TypeDescriptor>,
}

/// Shape of a value as described by the reflection layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDescriptor {
	/// Scalar value.
	Primitive(PrimitiveKind),
	/// Struct-like value.
	Composite(CompositeType),
	/// Sequence or set of values.
	Collection(CollectionType),
	/// Type without a value shape (void, any, iterator, ...).
	Void,
}

impl TypeDescriptor {
	/// Shorthand for a collection descriptor.
	pub fn collection(kind: CollectionKind, element: TypeDescriptor) -> Self {
		Self::Collection(CollectionType {
			kind,
			element: Box::new(element),
		})
	}

	/// Whether the value must be flattened rather than rendered as a scalar.
	pub fn is_aggregate(&self) -> bool {
		matches!(self, Self::Composite(_) | Self::Collection(_))
	}

	/// Descriptor kind label for diagnostics.
	pub fn kind_label(&self) -> &'static str {
		match self {
			Self::Primitive(_) => "primitive",
			Self::Composite(_) => "composite",
			Self::Collection(_) => "collection",
			Self::Void => "void",
		}
	}
}
