//! The `Variant` value union and its conversions.

use num_traits::NumCast;
use snafu::{OptionExt as _, Snafu};
use time::OffsetDateTime;

use crate::ua::{
	ExtensionObject, LocalizedText, NodeId, QualifiedName, StatusCode, ids,
};

/// The union of built-in types a `Value` attribute can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
	Boolean(bool),
	Byte(u8),
	Int16(i16),
	UInt16(u16),
	Int32(i32),
	UInt32(u32),
	Int64(i64),
	UInt64(u64),
	Float(f32),
	Double(f64),
	String(String),
	DateTime(OffsetDateTime),
	ByteString(Vec<u8>),
	NodeId(NodeId),
	QualifiedName(QualifiedName),
	LocalizedText(LocalizedText),
	StatusCode(StatusCode),
	ExtensionObject(ExtensionObject),
	Array(Vec<Variant>),
}

impl Variant {
	/// The ns=0 data type id of the held value.
	///
	/// Structured values report `Structure`; arrays report `BaseDataType`.
	#[must_use]
	pub const fn type_id(&self) -> u32 {
		match self {
			Variant::Boolean(_) => ids::BOOLEAN,
			Variant::Byte(_) => ids::BYTE,
			Variant::Int16(_) => ids::INT16,
			Variant::UInt16(_) => ids::UINT16,
			Variant::Int32(_) => ids::INT32,
			Variant::UInt32(_) => ids::UINT32,
			Variant::Int64(_) => ids::INT64,
			Variant::UInt64(_) => ids::UINT64,
			Variant::Float(_) => ids::FLOAT,
			Variant::Double(_) => ids::DOUBLE,
			Variant::String(_) => ids::STRING,
			Variant::DateTime(_) => ids::DATE_TIME,
			Variant::ByteString(_) => ids::BYTE_STRING,
			Variant::NodeId(_) => ids::NODE_ID,
			Variant::QualifiedName(_) => ids::QUALIFIED_NAME,
			Variant::LocalizedText(_) => ids::LOCALIZED_TEXT,
			Variant::StatusCode(_) => ids::STATUS_CODE,
			Variant::ExtensionObject(_) => ids::STRUCTURE,
			Variant::Array(_) => ids::BASE_DATA_TYPE,
		}
	}

	/// Check the held value against a property's data type and value rank.
	///
	/// `value_rank` follows the IEC 62541-3 convention: -1 is scalar, 1 is
	/// a one-dimensional array. Derived data types are compared through
	/// their built-in base.
	#[must_use]
	pub fn type_matches(&self, data_type: u32, value_rank: i32) -> bool {
		let base = ids::builtin_base(data_type);
		match (self, value_rank) {
			(Variant::Array(items), 1) => items.iter().all(|item| item.matches_scalar(base)),
			(Variant::Array(_), _) | (_, 1) => false,
			(value, _) => value.matches_scalar(base),
		}
	}

	/// Whether a scalar value is encodable as the given built-in base type.
	fn matches_scalar(&self, base: u32) -> bool {
		if base == ids::BASE_DATA_TYPE {
			return !matches!(self, Variant::Array(_));
		}
		self.type_id() == base
	}
}

/// The error type for conversions out of a [`Variant`].
#[derive(Debug, Snafu)]
#[snafu(visibility(pub), context(suffix(false)))]
pub enum VariantError {
	/// The variant does not hold the requested type.
	InvalidType,
	/// The held value does not fit the requested type.
	InvalidConversion,
	#[snafu(display("Invalid array element at index {}", index))]
	InvalidElement {
		/// The offending element index.
		index: usize,
	},
}

/// Range-checked extraction of an integer target from any integer variant.
///
/// Servers routinely widen integer properties, so the integer targets accept
/// every integer variant as long as the value is representable.
fn integer_to<T: NumCast>(value: &Variant) -> Result<T, VariantError> {
	let cast = match value {
		Variant::Byte(v) => num_traits::cast(*v),
		Variant::Int16(v) => num_traits::cast(*v),
		Variant::UInt16(v) => num_traits::cast(*v),
		Variant::Int32(v) => num_traits::cast(*v),
		Variant::UInt32(v) => num_traits::cast(*v),
		Variant::Int64(v) => num_traits::cast(*v),
		Variant::UInt64(v) => num_traits::cast(*v),
		_ => return InvalidType.fail(),
	};
	cast.context(InvalidConversion)
}

impl TryFrom<Variant> for bool {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		match value {
			Variant::Boolean(v) => Ok(v),
			_ => InvalidType.fail(),
		}
	}
}

impl TryFrom<Variant> for u8 {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		integer_to(&value)
	}
}

impl TryFrom<Variant> for i16 {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		integer_to(&value)
	}
}

impl TryFrom<Variant> for u16 {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		integer_to(&value)
	}
}

impl TryFrom<Variant> for i32 {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		integer_to(&value)
	}
}

impl TryFrom<Variant> for u32 {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		integer_to(&value)
	}
}

impl TryFrom<Variant> for i64 {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		integer_to(&value)
	}
}

impl TryFrom<Variant> for u64 {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		integer_to(&value)
	}
}

impl TryFrom<Variant> for f32 {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		match value {
			Variant::Float(v) => Ok(v),
			_ => integer_to(&value),
		}
	}
}

impl TryFrom<Variant> for f64 {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		match value {
			Variant::Double(v) => Ok(v),
			Variant::Float(v) => Ok(<f64 as From<f32>>::from(v)),
			_ => integer_to(&value),
		}
	}
}

impl TryFrom<Variant> for String {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		match value {
			Variant::String(v) => Ok(v),
			_ => InvalidType.fail(),
		}
	}
}

impl TryFrom<Variant> for OffsetDateTime {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		match value {
			Variant::DateTime(v) => Ok(v),
			_ => InvalidType.fail(),
		}
	}
}

impl TryFrom<Variant> for Vec<u8> {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		match value {
			Variant::ByteString(v) => Ok(v),
			_ => InvalidType.fail(),
		}
	}
}

impl TryFrom<Variant> for NodeId {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		match value {
			Variant::NodeId(v) => Ok(v),
			_ => InvalidType.fail(),
		}
	}
}

impl TryFrom<Variant> for QualifiedName {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		match value {
			Variant::QualifiedName(v) => Ok(v),
			_ => InvalidType.fail(),
		}
	}
}

impl TryFrom<Variant> for LocalizedText {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		match value {
			Variant::LocalizedText(v) => Ok(v),
			_ => InvalidType.fail(),
		}
	}
}

impl TryFrom<Variant> for StatusCode {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		match value {
			Variant::StatusCode(v) => Ok(v),
			_ => InvalidType.fail(),
		}
	}
}

impl TryFrom<Variant> for ExtensionObject {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		match value {
			Variant::ExtensionObject(v) => Ok(v),
			_ => InvalidType.fail(),
		}
	}
}

impl TryFrom<Variant> for Vec<NodeId> {
	type Error = VariantError;
	fn try_from(value: Variant) -> Result<Self, Self::Error> {
		match value {
			Variant::Array(items) => items
				.into_iter()
				.enumerate()
				.map(|(index, item)| match item {
					Variant::NodeId(v) => Ok(v),
					_ => InvalidElement { index }.fail(),
				})
				.collect(),
			_ => InvalidType.fail(),
		}
	}
}

impl From<bool> for Variant {
	fn from(value: bool) -> Self {
		Variant::Boolean(value)
	}
}

impl From<u8> for Variant {
	fn from(value: u8) -> Self {
		Variant::Byte(value)
	}
}

impl From<i16> for Variant {
	fn from(value: i16) -> Self {
		Variant::Int16(value)
	}
}

impl From<u16> for Variant {
	fn from(value: u16) -> Self {
		Variant::UInt16(value)
	}
}

impl From<i32> for Variant {
	fn from(value: i32) -> Self {
		Variant::Int32(value)
	}
}

impl From<u32> for Variant {
	fn from(value: u32) -> Self {
		Variant::UInt32(value)
	}
}

impl From<i64> for Variant {
	fn from(value: i64) -> Self {
		Variant::Int64(value)
	}
}

impl From<u64> for Variant {
	fn from(value: u64) -> Self {
		Variant::UInt64(value)
	}
}

impl From<f32> for Variant {
	fn from(value: f32) -> Self {
		Variant::Float(value)
	}
}

impl From<f64> for Variant {
	fn from(value: f64) -> Self {
		Variant::Double(value)
	}
}

impl From<String> for Variant {
	fn from(value: String) -> Self {
		Variant::String(value)
	}
}

impl From<&str> for Variant {
	fn from(value: &str) -> Self {
		Variant::String(value.to_owned())
	}
}

impl From<OffsetDateTime> for Variant {
	fn from(value: OffsetDateTime) -> Self {
		Variant::DateTime(value)
	}
}

impl From<Vec<u8>> for Variant {
	fn from(value: Vec<u8>) -> Self {
		Variant::ByteString(value)
	}
}

impl From<NodeId> for Variant {
	fn from(value: NodeId) -> Self {
		Variant::NodeId(value)
	}
}

impl From<QualifiedName> for Variant {
	fn from(value: QualifiedName) -> Self {
		Variant::QualifiedName(value)
	}
}

impl From<LocalizedText> for Variant {
	fn from(value: LocalizedText) -> Self {
		Variant::LocalizedText(value)
	}
}

impl From<StatusCode> for Variant {
	fn from(value: StatusCode) -> Self {
		Variant::StatusCode(value)
	}
}

impl From<ExtensionObject> for Variant {
	fn from(value: ExtensionObject) -> Self {
		Variant::ExtensionObject(value)
	}
}

impl From<Vec<NodeId>> for Variant {
	fn from(value: Vec<NodeId>) -> Self {
		Variant::Array(value.into_iter().map(Variant::NodeId).collect())
	}
}

impl From<Vec<Variant>> for Variant {
	fn from(value: Vec<Variant>) -> Self {
		Variant::Array(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_integer_widening() {
		// A server reporting a UInt16 property as Int32 still converts.
		let severity: u16 = Variant::Int32(500).try_into().unwrap();
		assert_eq!(severity, 500);
	}

	#[test]
	fn test_integer_overflow_rejected() {
		let result: Result<u16, _> = Variant::Int32(70_000).try_into();
		assert!(matches!(result, Err(VariantError::InvalidConversion)));
		let result: Result<u16, _> = Variant::Int32(-1).try_into();
		assert!(matches!(result, Err(VariantError::InvalidConversion)));
	}

	#[test]
	fn test_type_mismatch_rejected() {
		let result: Result<bool, _> = Variant::String("true".to_owned()).try_into();
		assert!(matches!(result, Err(VariantError::InvalidType)));
	}

	#[test]
	fn test_node_id_array() {
		let ids = vec![NodeId::numeric(0, 2253), NodeId::string(2, "Motor")];
		let variant = Variant::from(ids.clone());
		let back: Vec<NodeId> = variant.try_into().unwrap();
		assert_eq!(back, ids);
	}

	#[test]
	fn test_node_id_array_bad_element() {
		let variant = Variant::Array(vec![Variant::NodeId(NodeId::numeric(0, 1)), Variant::Boolean(true)]);
		let result: Result<Vec<NodeId>, _> = variant.try_into();
		assert!(matches!(result, Err(VariantError::InvalidElement { index: 1 })));
	}

	#[test]
	fn test_type_matches_scalar() {
		assert!(Variant::LocalizedText(LocalizedText::new("Running")).type_matches(ids::LOCALIZED_TEXT, -1));
		assert!(!Variant::Boolean(true).type_matches(ids::LOCALIZED_TEXT, -1));
		// Derived data types match through their built-in base.
		assert!(Variant::DateTime(OffsetDateTime::UNIX_EPOCH).type_matches(ids::UTC_TIME, -1));
		assert!(Variant::Double(0.5).type_matches(ids::DURATION, -1));
	}

	#[test]
	fn test_type_matches_array() {
		let states = Variant::from(vec![NodeId::numeric(0, 2253)]);
		assert!(states.type_matches(ids::NODE_ID, 1));
		assert!(!states.type_matches(ids::NODE_ID, -1));
		assert!(!Variant::NodeId(NodeId::numeric(0, 1)).type_matches(ids::NODE_ID, 1));
	}
}
