//! Attribute access types: attribute ids, node classes and `DataValue`.

use time::OffsetDateTime;

use crate::ua::{StatusCode, Variant, VariantError};

/// The attributes addressable through the attribute service set.
///
/// Discriminants are the attribute ids from IEC 62541-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum AttributeId {
	/// The node's canonical identifier.
	NodeId = 1,
	/// The node's class.
	NodeClass = 2,
	/// The node's browse name.
	BrowseName = 3,
	/// The node's display name.
	DisplayName = 4,
	/// The node's description.
	Description = 5,
	/// Whether the node notifies on events.
	EventNotifier = 12,
	/// The current value of a variable node.
	Value = 13,
	/// The data type of a variable node's value.
	DataType = 14,
	/// The value rank of a variable node's value.
	ValueRank = 15,
	/// The access level of a variable node's value.
	AccessLevel = 17,
}

/// The class of a node in the address space.
///
/// Discriminants are the node class mask bits from IEC 62541-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum NodeClass {
	/// An object node.
	Object = 1,
	/// A variable node.
	Variable = 2,
	/// A method node.
	Method = 4,
	/// An object type node.
	ObjectType = 8,
	/// A variable type node.
	VariableType = 16,
	/// A reference type node.
	ReferenceType = 32,
	/// A data type node.
	DataType = 64,
	/// A view node.
	View = 128,
}

impl TryFrom<i32> for NodeClass {
	type Error = VariantError;

	fn try_from(value: i32) -> Result<Self, Self::Error> {
		match value {
			1 => Ok(NodeClass::Object),
			2 => Ok(NodeClass::Variable),
			4 => Ok(NodeClass::Method),
			8 => Ok(NodeClass::ObjectType),
			16 => Ok(NodeClass::VariableType),
			32 => Ok(NodeClass::ReferenceType),
			64 => Ok(NodeClass::DataType),
			128 => Ok(NodeClass::View),
			_ => Err(VariantError::InvalidConversion),
		}
	}
}

/// A value read from or written to an attribute, with its quality and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataValue {
	/// The value itself. Absent when the status conveys a failure.
	pub value: Option<Variant>,
	/// The quality of the value.
	pub status: StatusCode,
	/// When the source produced the value.
	pub source_timestamp: Option<OffsetDateTime>,
	/// When the server obtained the value.
	pub server_timestamp: Option<OffsetDateTime>,
}

impl DataValue {
	/// A good-quality value without timestamps, the form used for writes.
	#[must_use]
	pub const fn value_only(value: Variant) -> Self {
		Self {
			value: Some(value),
			status: StatusCode::GOOD,
			source_timestamp: None,
			server_timestamp: None,
		}
	}

	/// A value-less `DataValue` carrying a failure status.
	#[must_use]
	pub const fn status_only(status: StatusCode) -> Self {
		Self { value: None, status, source_timestamp: None, server_timestamp: None }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_node_class_round_trip() {
		assert_eq!(NodeClass::try_from(2).unwrap(), NodeClass::Variable);
		assert!(NodeClass::try_from(3).is_err());
	}

	#[test]
	fn test_value_only_is_good() {
		let value = DataValue::value_only(Variant::Boolean(true));
		assert!(value.status.is_good());
		assert!(value.source_timestamp.is_none());
	}
}
