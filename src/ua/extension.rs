//! The extension-object envelope for structured values.
//!
//! Structured values travel as a data type id plus an encoded body. The
//! bodies here use the JSON encoding; the binary encoding belongs to the
//! transport stack, which this crate does not implement.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use snafu::{ResultExt as _, Snafu};

use crate::ua::{LocalizedText, NodeId, ids};

/// The encoding envelope for a structured value: the ns=0 data type id plus
/// a JSON-encoded body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionObject {
	/// The data type of the encoded structure.
	pub type_id: NodeId,
	/// The JSON-encoded structure body.
	pub body: serde_json::Value,
}

impl ExtensionObject {
	/// Encode a structure into an envelope.
	pub fn encode<T: UaStruct>(value: &T) -> Result<Self, ExtensionObjectError> {
		Ok(Self {
			type_id: NodeId::numeric(0, T::DATA_TYPE_ID),
			body: serde_json::to_value(value).context(Encode)?,
		})
	}

	/// Decode the envelope into a structure, checking the data type id.
	pub fn decode<T: UaStruct>(&self) -> Result<T, ExtensionObjectError> {
		let expected = NodeId::numeric(0, T::DATA_TYPE_ID);
		if self.type_id != expected {
			return TypeIdMismatch { expected, actual: self.type_id.clone() }.fail();
		}
		serde_json::from_value(self.body.clone()).context(Decode)
	}
}

/// A structured data type with a registered ns=0 identifier.
pub trait UaStruct: Serialize + DeserializeOwned {
	/// The ns=0 numeric id of the data type.
	const DATA_TYPE_ID: u32;
}

/// The error type for extension-object encoding and decoding.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub), context(suffix(false)))]
pub enum ExtensionObjectError {
	#[snafu(display("Error encoding structure body"))]
	Encode {
		/// The underlying serde error.
		source: serde_json::Error,
	},
	#[snafu(display("Error decoding structure body"))]
	Decode {
		/// The underlying serde error.
		source: serde_json::Error,
	},
	#[snafu(display("Expected structure {} but envelope carries {}", expected, actual))]
	TypeIdMismatch {
		/// The data type the caller asked for.
		expected: NodeId,
		/// The data type the envelope carries.
		actual: NodeId,
	},
}

/// A low/high range, e.g. the engineering-unit range of an analog item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Range {
	/// The lower bound.
	pub low: f64,
	/// The upper bound.
	pub high: f64,
}

impl UaStruct for Range {
	const DATA_TYPE_ID: u32 = ids::RANGE;
}

/// Engineering unit information per UNECE Recommendation 20.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EUInformation {
	/// The organization defining the unit, typically the UNECE URI.
	pub namespace_uri: String,
	/// The unit identifier within the namespace.
	pub unit_id: i32,
	/// The display name of the unit, e.g. `°C`.
	pub display_name: LocalizedText,
	/// The full name of the unit, e.g. `degree Celsius`.
	pub description: LocalizedText,
}

impl UaStruct for EUInformation {
	const DATA_TYPE_ID: u32 = ids::EU_INFORMATION;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_range_round_trip() {
		let range = Range { low: -40.0, high: 125.0 };
		let envelope = ExtensionObject::encode(&range).unwrap();
		assert_eq!(envelope.type_id, NodeId::numeric(0, ids::RANGE));
		assert_eq!(envelope.decode::<Range>().unwrap(), range);
	}

	#[test]
	fn test_eu_information_round_trip() {
		let unit = EUInformation {
			namespace_uri: "http://www.opcfoundation.org/UA/units/un/cefact".to_owned(),
			unit_id: 4408652,
			display_name: LocalizedText::new("°C"),
			description: LocalizedText::new("degree Celsius"),
		};
		let envelope = ExtensionObject::encode(&unit).unwrap();
		assert_eq!(envelope.decode::<EUInformation>().unwrap(), unit);
	}

	#[test]
	fn test_type_id_mismatch() {
		let range = Range { low: 0.0, high: 1.0 };
		let envelope = ExtensionObject::encode(&range).unwrap();
		let result = envelope.decode::<EUInformation>();
		assert!(matches!(result, Err(ExtensionObjectError::TypeIdMismatch { .. })));
	}

	#[test]
	fn test_body_uses_pascal_case_fields() {
		let envelope = ExtensionObject::encode(&Range { low: 1.0, high: 2.0 }).unwrap();
		assert_eq!(envelope.body["Low"], 1.0);
		assert_eq!(envelope.body["High"], 2.0);
	}
}
