//! Status codes as defined in IEC 62541-4.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An OPC UA status code.
///
/// The top two bits carry the severity; the named constants cover the codes
/// this crate produces or branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct StatusCode(pub u32);

impl StatusCode {
	/// The operation succeeded.
	pub const GOOD: StatusCode = StatusCode(0x0000_0000);
	/// An unexpected error occurred.
	pub const BAD_UNEXPECTED_ERROR: StatusCode = StatusCode(0x8001_0000);
	/// The operation timed out.
	pub const BAD_TIMEOUT: StatusCode = StatusCode(0x800A_0000);
	/// The node id refers to a node that does not exist.
	pub const BAD_NODE_ID_UNKNOWN: StatusCode = StatusCode(0x8034_0000);
	/// The attribute is not supported for the specified node.
	pub const BAD_ATTRIBUTE_ID_INVALID: StatusCode = StatusCode(0x8035_0000);
	/// The access level does not allow reading the value.
	pub const BAD_NOT_READABLE: StatusCode = StatusCode(0x803A_0000);
	/// The access level does not allow writing the value.
	pub const BAD_NOT_WRITABLE: StatusCode = StatusCode(0x803B_0000);
	/// The value supplied for the attribute is not of the same type as the
	/// attribute's value.
	pub const BAD_TYPE_MISMATCH: StatusCode = StatusCode(0x8074_0000);

	/// Whether the severity is good.
	#[must_use]
	pub const fn is_good(self) -> bool {
		self.0 >> 30 == 0b00
	}

	/// Whether the severity is uncertain.
	#[must_use]
	pub const fn is_uncertain(self) -> bool {
		self.0 >> 30 == 0b01
	}

	/// Whether the severity is bad.
	#[must_use]
	pub const fn is_bad(self) -> bool {
		self.0 >> 30 == 0b10
	}
}

impl fmt::Display for StatusCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{:08X}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_severity() {
		assert!(StatusCode::GOOD.is_good());
		assert!(!StatusCode::GOOD.is_bad());
		assert!(StatusCode::BAD_TYPE_MISMATCH.is_bad());
		assert!(StatusCode(0x406C_0000).is_uncertain());
	}

	#[test]
	fn test_display() {
		assert_eq!(StatusCode::BAD_TIMEOUT.to_string(), "0x800A0000");
	}
}
