//! Node identifiers and the name types built on top of them.

use std::{fmt, str::FromStr};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use snafu::{OptionExt as _, Snafu};

/// The namespace URI of the standard OPC UA namespace, always index 0.
pub const UA_NAMESPACE_URI: &str = "http://opcfoundation.org/UA/";

/// A node identifier: namespace index plus identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId {
	/// The namespace index. 0 is the standard OPC UA namespace.
	pub namespace: u16,
	/// The identifier within the namespace.
	pub identifier: Identifier,
}

/// The identifier part of a [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identifier {
	/// A numeric identifier.
	Numeric(u32),
	/// A string identifier.
	String(String),
	/// An opaque (byte string) identifier.
	Opaque(Vec<u8>),
}

impl NodeId {
	/// Create a numeric node id.
	#[must_use]
	pub const fn numeric(namespace: u16, value: u32) -> Self {
		Self { namespace, identifier: Identifier::Numeric(value) }
	}

	/// Create a string node id.
	pub fn string(namespace: u16, value: impl Into<String>) -> Self {
		Self { namespace, identifier: Identifier::String(value.into()) }
	}

	/// Create an opaque node id.
	pub fn opaque(namespace: u16, value: impl Into<Vec<u8>>) -> Self {
		Self { namespace, identifier: Identifier::Opaque(value.into()) }
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.namespace != 0 {
			write!(f, "ns={};", self.namespace)?;
		}
		match &self.identifier {
			Identifier::Numeric(value) => write!(f, "i={value}"),
			Identifier::String(value) => write!(f, "s={value}"),
			Identifier::Opaque(value) => write!(f, "b={}", BASE64.encode(value)),
		}
	}
}

impl FromStr for NodeId {
	type Err = NodeIdParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (namespace, rest) = match s.strip_prefix("ns=") {
			Some(rest) => {
				let (index, rest) =
					rest.split_once(';').context(MissingIdentifier { input: s })?;
				let namespace =
					index.parse::<u16>().ok().context(InvalidNamespace { input: s })?;
				(namespace, rest)
			}
			None => (0, s),
		};

		let (kind, value) = rest.split_once('=').context(MissingIdentifier { input: s })?;
		let identifier = match kind {
			"i" => Identifier::Numeric(
				value.parse::<u32>().ok().context(InvalidIdentifier { input: s })?,
			),
			"s" => Identifier::String(value.to_owned()),
			"b" => Identifier::Opaque(
				BASE64.decode(value).ok().context(InvalidIdentifier { input: s })?,
			),
			_ => return UnknownIdentifierKind { input: s }.fail(),
		};
		Ok(Self { namespace, identifier })
	}
}

/// The error type for parsing a [`NodeId`] from its string form.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub), context(suffix(false)))]
pub enum NodeIdParseError {
	#[snafu(display("Invalid namespace index in: {}", input))]
	InvalidNamespace {
		/// The rejected input.
		input: String,
	},
	#[snafu(display("Missing identifier in: {}", input))]
	MissingIdentifier {
		/// The rejected input.
		input: String,
	},
	#[snafu(display("Invalid identifier value in: {}", input))]
	InvalidIdentifier {
		/// The rejected input.
		input: String,
	},
	#[snafu(display("Unknown identifier kind in: {}", input))]
	UnknownIdentifierKind {
		/// The rejected input.
		input: String,
	},
}

/// A name qualified by a namespace index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
	/// The namespace index of the name.
	pub namespace: u16,
	/// The unqualified name.
	pub name: String,
}

impl QualifiedName {
	/// Create a qualified name.
	pub fn new(namespace: u16, name: impl Into<String>) -> Self {
		Self { namespace, name: name.into() }
	}
}

impl fmt::Display for QualifiedName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.namespace == 0 {
			write!(f, "{}", self.name)
		} else {
			write!(f, "{}:{}", self.namespace, self.name)
		}
	}
}

/// Human readable text with an optional locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct LocalizedText {
	/// The locale of the text, e.g. `en-US`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub locale: Option<String>,
	/// The text itself.
	pub text: String,
}

impl LocalizedText {
	/// Create a localized text without a locale.
	pub fn new(text: impl Into<String>) -> Self {
		Self { locale: None, text: text.into() }
	}

	/// Create a localized text with a locale.
	pub fn with_locale(locale: impl Into<String>, text: impl Into<String>) -> Self {
		Self { locale: Some(locale.into()), text: text.into() }
	}
}

impl fmt::Display for LocalizedText {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.text)
	}
}

impl From<&str> for LocalizedText {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for LocalizedText {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_numeric() {
		let id: NodeId = "i=2771".parse().unwrap();
		assert_eq!(id, NodeId::numeric(0, 2771));
		assert_eq!(id.to_string(), "i=2771");
	}

	#[test]
	fn test_parse_string_with_namespace() {
		let id: NodeId = "ns=2;s=Device.Temperature".parse().unwrap();
		assert_eq!(id, NodeId::string(2, "Device.Temperature"));
		assert_eq!(id.to_string(), "ns=2;s=Device.Temperature");
	}

	#[test]
	fn test_parse_opaque_round_trip() {
		let id = NodeId::opaque(3, vec![0xde, 0xad, 0xbe, 0xef]);
		let parsed: NodeId = id.to_string().parse().unwrap();
		assert_eq!(parsed, id);
	}

	#[test]
	fn test_parse_rejects_malformed() {
		assert!("ns=2;x=1".parse::<NodeId>().is_err());
		assert!("ns=notanumber;i=1".parse::<NodeId>().is_err());
		assert!("2771".parse::<NodeId>().is_err());
		assert!("i=notanumber".parse::<NodeId>().is_err());
	}

	#[test]
	fn test_qualified_name_display() {
		assert_eq!(QualifiedName::new(0, "CurrentState").to_string(), "CurrentState");
		assert_eq!(QualifiedName::new(2, "Motor").to_string(), "2:Motor");
	}
}
