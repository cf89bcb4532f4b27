//! Numeric identifiers from the standard namespace (ns=0).
//!
//! Only the identifiers referenced by the bindings are listed; the full
//! nodeset is several thousand entries.

/// `Boolean` data type.
pub const BOOLEAN: u32 = 1;
/// `SByte` data type.
pub const SBYTE: u32 = 2;
/// `Byte` data type.
pub const BYTE: u32 = 3;
/// `Int16` data type.
pub const INT16: u32 = 4;
/// `UInt16` data type.
pub const UINT16: u32 = 5;
/// `Int32` data type.
pub const INT32: u32 = 6;
/// `UInt32` data type.
pub const UINT32: u32 = 7;
/// `Int64` data type.
pub const INT64: u32 = 8;
/// `UInt64` data type.
pub const UINT64: u32 = 9;
/// `Float` data type.
pub const FLOAT: u32 = 10;
/// `Double` data type.
pub const DOUBLE: u32 = 11;
/// `String` data type.
pub const STRING: u32 = 12;
/// `DateTime` data type.
pub const DATE_TIME: u32 = 13;
/// `ByteString` data type.
pub const BYTE_STRING: u32 = 15;
/// `NodeId` data type.
pub const NODE_ID: u32 = 17;
/// `StatusCode` data type.
pub const STATUS_CODE: u32 = 19;
/// `QualifiedName` data type.
pub const QUALIFIED_NAME: u32 = 20;
/// `LocalizedText` data type.
pub const LOCALIZED_TEXT: u32 = 21;
/// `Structure` data type, the base of all structured types.
pub const STRUCTURE: u32 = 22;
/// `BaseDataType`, the base of the whole data type hierarchy.
pub const BASE_DATA_TYPE: u32 = 24;
/// `Duration` data type, an interval in milliseconds encoded as `Double`.
pub const DURATION: u32 = 290;
/// `UtcTime` data type, encoded as `DateTime`.
pub const UTC_TIME: u32 = 294;
/// `Range` structured data type.
pub const RANGE: u32 = 884;
/// `EUInformation` structured data type.
pub const EU_INFORMATION: u32 = 887;

/// `HasProperty` reference type.
pub const HAS_PROPERTY: u32 = 46;
/// `HasComponent` reference type.
pub const HAS_COMPONENT: u32 = 47;

/// `BaseObjectType` object type.
pub const BASE_OBJECT_TYPE: u32 = 58;
/// `FolderType` object type.
pub const FOLDER_TYPE: u32 = 61;
/// `BaseDataVariableType` variable type.
pub const BASE_DATA_VARIABLE_TYPE: u32 = 63;
/// `PropertyType` variable type.
pub const PROPERTY_TYPE: u32 = 68;
/// `BaseEventType` object type.
pub const BASE_EVENT_TYPE: u32 = 2041;
/// `StateMachineType` object type.
pub const STATE_MACHINE_TYPE: u32 = 2299;
/// `DataItemType` variable type.
pub const DATA_ITEM_TYPE: u32 = 2365;
/// `AnalogItemType` variable type.
pub const ANALOG_ITEM_TYPE: u32 = 2368;
/// `StateVariableType` variable type.
pub const STATE_VARIABLE_TYPE: u32 = 2755;
/// `FiniteStateVariableType` variable type.
pub const FINITE_STATE_VARIABLE_TYPE: u32 = 2760;
/// `TransitionVariableType` variable type.
pub const TRANSITION_VARIABLE_TYPE: u32 = 2762;
/// `FiniteTransitionVariableType` variable type.
pub const FINITE_TRANSITION_VARIABLE_TYPE: u32 = 2767;
/// `FiniteStateMachineType` object type.
pub const FINITE_STATE_MACHINE_TYPE: u32 = 2771;
/// `ConditionType` object type.
pub const CONDITION_TYPE: u32 = 2782;
/// `AcknowledgeableConditionType` object type.
pub const ACKNOWLEDGEABLE_CONDITION_TYPE: u32 = 2881;
/// `TwoStateVariableType` variable type.
pub const TWO_STATE_VARIABLE_TYPE: u32 = 8995;
/// `ConditionVariableType` variable type.
pub const CONDITION_VARIABLE_TYPE: u32 = 9002;
/// `FileType` object type.
pub const FILE_TYPE: u32 = 11575;
/// `TrustListType` object type.
pub const TRUST_LIST_TYPE: u32 = 12522;

/// Map a data type id to the built-in type it is encoded as.
///
/// Derived types such as `UtcTime` and `Duration` are carried on the wire as
/// their built-in base; anything not listed maps to itself.
#[must_use]
pub const fn builtin_base(data_type: u32) -> u32 {
	match data_type {
		UTC_TIME => DATE_TIME,
		DURATION => DOUBLE,
		RANGE | EU_INFORMATION => STRUCTURE,
		_ => data_type,
	}
}
