use crate::line::{GraphNode, NodeKind, PrimitiveKind, Role, TimestampRole, TypeDescriptor};

/// How a walked member or element contributes to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
	/// Timestamp source; never emitted as a field.
	Timestamp(TimestampRole),
	/// Tag-set member; never emitted as a field.
	Tag,
	/// Composite or collection flattened to a quoted JSON field.
	Nested,
	/// Primitive field of the given kind.
	Scalar(PrimitiveKind),
	/// Shape with no line representation; a structural violation when walked.
	Invalid,
}

/// Classify a member or element node.
pub fn classify(node: &GraphNode<'_>) -> Classification {
	if node.kind == NodeKind::Member {
		if let Some(role) = node.roles.iter().find_map(|role| match role {
			Role::Timestamp(item) => Some(*item),
			Role::Tag => None,
		}) {
			return Classification::Timestamp(role);
		}
	}

	if node.ty == &TypeDescriptor::Void {
		return Classification::Invalid;
	}
	if node.kind == NodeKind::Member && node.roles.contains(&Role::Tag) {
		return Classification::Tag;
	}
	if node.ty.is_aggregate() {
		return Classification::Nested;
	}
	match node.ty {
		TypeDescriptor::Primitive(kind) => Classification::Scalar(*kind),
		_ => Classification::Invalid,
	}
}

#[cfg(test)]
mod tests {
	use crate::line::{
		Classification, CollectionKind, CompositeType, GraphNode, Member, NodeKind, PrimitiveKind, Role, TimestampRole, TypeDescriptor, Value,
		classify,
	};

	fn member_node<'a>(member: &'a Member, value: &'a Value) -> GraphNode<'a> {
		GraphNode {
			kind: NodeKind::Member,
			name: &member.name,
			ty: &member.ty,
			value,
			roles: &member.roles,
		}
	}

	#[test]
	fn timestamp_role_wins_over_type() {
		let member = Member::new("count", TypeDescriptor::Primitive(PrimitiveKind::Integer)).with_role(Role::Timestamp(TimestampRole::Received));
		let value = Value::I64(3);
		assert_eq!(classify(&member_node(&member, &value)), Classification::Timestamp(TimestampRole::Received));

		let member = Member::new("stamp", TypeDescriptor::Composite(CompositeType::time()))
			.with_role(Role::Tag)
			.with_role(Role::Timestamp(TimestampRole::Created));
		let value = Value::time(1, 0);
		assert_eq!(classify(&member_node(&member, &value)), Classification::Timestamp(TimestampRole::Created));
	}

	#[test]
	fn tag_role_is_not_a_field() {
		let member = Member::new("host", TypeDescriptor::Primitive(PrimitiveKind::Text)).with_role(Role::Tag);
		let value = Value::text("a");
		assert_eq!(classify(&member_node(&member, &value)), Classification::Tag);
	}

	#[test]
	fn aggregates_are_nested_and_primitives_scalar() {
		let nested = Member::new("meta", TypeDescriptor::Composite(CompositeType::time()));
		let value = Value::time(0, 0);
		assert_eq!(classify(&member_node(&nested, &value)), Classification::Nested);

		let list = Member::new(
			"samples",
			TypeDescriptor::collection(CollectionKind::Sequence, TypeDescriptor::Primitive(PrimitiveKind::Float)),
		);
		let value = Value::Array(Vec::new());
		assert_eq!(classify(&member_node(&list, &value)), Classification::Nested);

		let blob = Member::new("blob", TypeDescriptor::Primitive(PrimitiveKind::Binary));
		let value = Value::Bytes(vec![0]);
		assert_eq!(classify(&member_node(&blob, &value)), Classification::Scalar(PrimitiveKind::Binary));

		let void = Member::new("any", TypeDescriptor::Void);
		let value = Value::Null;
		assert_eq!(classify(&member_node(&void, &value)), Classification::Invalid);
	}

	#[test]
	fn void_tag_member_is_invalid() {
		let member = Member::new("bad", TypeDescriptor::Void).with_role(Role::Tag);
		let value = Value::Null;
		assert_eq!(classify(&member_node(&member, &value)), Classification::Invalid);
	}

	#[test]
	fn elements_ignore_roles() {
		let ty = TypeDescriptor::Primitive(PrimitiveKind::Integer);
		let value = Value::I64(1);
		let roles = [Role::Timestamp(TimestampRole::LastModified)];
		let node = GraphNode {
			kind: NodeKind::Element,
			name: "values",
			ty: &ty,
			value: &value,
			roles: &roles,
		};
		assert_eq!(classify(&node), Classification::Scalar(PrimitiveKind::Integer));
	}
}
