//! Typed bindings for the standardized OPC UA node types.
//!
//! One struct per standardized type, mirroring the type hierarchy through
//! `Deref` to the supertype binding. Each well-known member of a type is
//! described by a [`QualifiedProperty`] and exposed as a fan of operations:
//! local get/set of the cached value, remote read/write of the `Value`
//! attribute, and the typed member-node accessor. All of them funnel through
//! the primitives on [`UaNode`](crate::client::UaNode).

use std::{fmt, marker::PhantomData};

use crate::{
	client::{ReferenceKind, UaNode},
	ua::UA_NAMESPACE_URI,
};

pub mod events;
pub mod machines;
pub mod objects;
pub mod variables;

/// The value rank of a scalar member.
pub const SCALAR: i32 = -1;
/// The value rank of a one-dimensional array member.
pub const ONE_DIMENSION: i32 = 1;

/// Schema descriptor for a well-known member node: browse name and
/// namespace, data type and value rank, and the reference kind the member is
/// reachable through.
pub struct QualifiedProperty<T> {
	/// The namespace URI qualifying the browse name.
	pub namespace_uri: &'static str,
	/// The member's browse name.
	pub browse_name: &'static str,
	/// The ns=0 id of the member's data type.
	pub data_type: u32,
	/// The member's value rank.
	pub value_rank: i32,
	/// The reference kind the member is reachable through.
	pub reference: ReferenceKind,
	/// The rust-side payload type.
	marker: PhantomData<fn() -> T>,
}

impl<T> QualifiedProperty<T> {
	/// Describe a member in an arbitrary namespace.
	#[must_use]
	pub const fn new(
		namespace_uri: &'static str,
		browse_name: &'static str,
		data_type: u32,
		value_rank: i32,
		reference: ReferenceKind,
	) -> Self {
		Self { namespace_uri, browse_name, data_type, value_rank, reference, marker: PhantomData }
	}

	/// Describe a scalar property in the standard namespace.
	#[must_use]
	pub const fn property(browse_name: &'static str, data_type: u32) -> Self {
		Self::new(UA_NAMESPACE_URI, browse_name, data_type, SCALAR, ReferenceKind::HasProperty)
	}

	/// Describe a scalar component variable in the standard namespace.
	#[must_use]
	pub const fn component(browse_name: &'static str, data_type: u32) -> Self {
		Self::new(UA_NAMESPACE_URI, browse_name, data_type, SCALAR, ReferenceKind::HasComponent)
	}

	/// Describe a one-dimensional array component variable in the standard
	/// namespace.
	#[must_use]
	pub const fn array_component(browse_name: &'static str, data_type: u32) -> Self {
		Self::new(
			UA_NAMESPACE_URI,
			browse_name,
			data_type,
			ONE_DIMENSION,
			ReferenceKind::HasComponent,
		)
	}
}

impl<T> Clone for QualifiedProperty<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for QualifiedProperty<T> {}

impl<T> fmt::Debug for QualifiedProperty<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("QualifiedProperty")
			.field("namespace_uri", &self.namespace_uri)
			.field("browse_name", &self.browse_name)
			.field("data_type", &self.data_type)
			.field("value_rank", &self.value_rank)
			.field("reference", &self.reference)
			.finish()
	}
}

/// A binding with a standardized type definition, constructible from a plain
/// node handle.
pub trait TypedNode: Sized {
	/// The ns=0 numeric id of the type definition.
	const TYPE_DEFINITION: u32;

	/// Wrap a node handle in the binding.
	fn from_node(node: UaNode) -> Self;

	/// The underlying node handle.
	fn node(&self) -> &UaNode;
}
