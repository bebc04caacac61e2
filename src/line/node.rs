use crate::line::{CollectionType, CompositeType, LineError, Member, Object, Result, Role, TypeDescriptor, Value};

/// Position of a node in the walked graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
	/// Root instance from the object store.
	Object,
	/// Member of a composite.
	Member,
	/// Element of a collection.
	Element,
	/// Free-standing value not anchored to an object.
	Value,
}

/// Borrowed view of one node: its type, its value, and how it was reached.
#[derive(Debug, Clone, Copy)]
pub struct GraphNode<'a> {
	/// How the node was reached.
	pub kind: NodeKind,
	/// Object id, member name, or name inherited from the owning collection.
	pub name: &'a str,
	/// Type descriptor.
	pub ty: &'a TypeDescriptor,
	/// Value described by `ty`.
	pub value: &'a Value,
	/// Member roles; empty for every other kind.
	pub roles: &'a [Role],
}

impl<'a> GraphNode<'a> {
	/// View an object as the root of a walk.
	pub fn object(object: &'a Object) -> Self {
		Self {
			kind: NodeKind::Object,
			name: &object.id,
			ty: &object.ty,
			value: &object.value,
			roles: &[],
		}
	}

	/// View a free-standing value.
	pub fn value(name: &'a str, ty: &'a TypeDescriptor, value: &'a Value) -> Self {
		Self {
			kind: NodeKind::Value,
			name,
			ty,
			value,
			roles: &[],
		}
	}

	fn member(member: &'a Member, value: &'a Value) -> Self {
		Self {
			kind: NodeKind::Member,
			name: &member.name,
			ty: &member.ty,
			value,
			roles: &member.roles,
		}
	}

	fn element(name: &'a str, ty: &'a TypeDescriptor, value: &'a Value) -> Self {
		Self {
			kind: NodeKind::Element,
			name,
			ty,
			value,
			roles: &[],
		}
	}

	/// Pair composite members with their values, in declared order.
	pub fn members(self, composite: &'a CompositeType) -> Result<impl Iterator<Item = GraphNode<'a>> + 'a> {
		let fields = struct_fields(self.name, composite, self.value)?;
		Ok(composite.members.iter().zip(fields).map(|(member, value)| GraphNode::member(member, value)))
	}

	/// Collection elements in iteration order; elements inherit this node's name.
	pub fn elements(self, collection: &'a CollectionType) -> Result<impl Iterator<Item = GraphNode<'a>> + 'a> {
		let items: &'a [Value] = match self.value {
			Value::Array(items) => items,
			Value::Null => &[],
			other => {
				return Err(LineError::ValueMismatch {
					name: self.name.to_owned(),
					expected: "array",
					got: other.kind_label(),
				});
			}
		};
		let name = self.name;
		let element_ty = collection.element.as_ref();
		Ok(items.iter().map(move |value| GraphNode::element(name, element_ty, value)))
	}
}

/// Borrow the member values of a struct, checking them against the composite.
pub(crate) fn struct_fields<'a>(name: &str, composite: &CompositeType, value: &'a Value) -> Result<&'a [Value]> {
	let Value::Struct(fields) = value else {
		return Err(LineError::ValueMismatch {
			name: name.to_owned(),
			expected: "struct",
			got: value.kind_label(),
		});
	};
	if fields.len() != composite.members.len() {
		return Err(LineError::ArityMismatch {
			type_name: composite.name.to_string(),
			expected: composite.members.len(),
			got: fields.len(),
		});
	}
	Ok(fields.as_slice())
}
