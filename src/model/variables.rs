//! Bindings for the standardized variable types.

use std::ops::Deref;

use time::OffsetDateTime;

use crate::{
	client::{UaError, UaNode},
	model::{QualifiedProperty, TypedNode},
	ua::{
		EUInformation, LocalizedText, NodeId, QualifiedName, Range, StatusCode, Variant, ids,
	},
};

/// The `BaseDataVariableType` variable type, the base of all component
/// variables.
#[derive(Debug, Clone)]
pub struct BaseDataVariableTypeNode {
	/// The underlying node handle.
	node: UaNode,
}

impl TypedNode for BaseDataVariableTypeNode {
	const TYPE_DEFINITION: u32 = ids::BASE_DATA_VARIABLE_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { node }
	}

	fn node(&self) -> &UaNode {
		&self.node
	}
}

impl Deref for BaseDataVariableTypeNode {
	type Target = UaNode;

	fn deref(&self) -> &Self::Target {
		&self.node
	}
}

/// The `PropertyType` variable type. Property nodes carry the metadata
/// members of their parent and have no members of their own.
#[derive(Debug, Clone)]
pub struct PropertyTypeNode {
	/// The underlying node handle.
	node: UaNode,
}

impl TypedNode for PropertyTypeNode {
	const TYPE_DEFINITION: u32 = ids::PROPERTY_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { node }
	}

	fn node(&self) -> &UaNode {
		&self.node
	}
}

impl Deref for PropertyTypeNode {
	type Target = UaNode;

	fn deref(&self) -> &Self::Target {
		&self.node
	}
}

/// The `DataItemType` variable type.
#[derive(Debug, Clone)]
pub struct DataItemTypeNode {
	/// The supertype binding.
	base: BaseDataVariableTypeNode,
}

impl TypedNode for DataItemTypeNode {
	const TYPE_DEFINITION: u32 = ids::DATA_ITEM_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: BaseDataVariableTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for DataItemTypeNode {
	type Target = BaseDataVariableTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl DataItemTypeNode {
	/// The `Definition` property, a vendor-specific description of the item.
	pub const DEFINITION: QualifiedProperty<String> =
		QualifiedProperty::property("Definition", ids::STRING);
	/// The `ValuePrecision` property, the maximum precision of the value.
	pub const VALUE_PRECISION: QualifiedProperty<f64> =
		QualifiedProperty::property("ValuePrecision", ids::DOUBLE);

	/// Get the local value of the `Definition` property.
	pub async fn definition(&self) -> Result<String, UaError> {
		self.node().get_member(&Self::DEFINITION).await
	}

	/// Locally set the value of the `Definition` property.
	pub async fn set_definition(&self, value: String) -> Result<(), UaError> {
		self.node().set_member(&Self::DEFINITION, value).await
	}

	/// Read the value of the `Definition` property from the server.
	pub async fn read_definition(&self) -> Result<String, UaError> {
		self.node().read_member(&Self::DEFINITION).await
	}

	/// Write a value for the `Definition` property to the server.
	pub async fn write_definition(&self, value: String) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::DEFINITION, value).await
	}

	/// Get the `Definition` property node.
	pub async fn definition_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::DEFINITION).await
	}

	/// Get the local value of the `ValuePrecision` property.
	pub async fn value_precision(&self) -> Result<f64, UaError> {
		self.node().get_member(&Self::VALUE_PRECISION).await
	}

	/// Locally set the value of the `ValuePrecision` property.
	pub async fn set_value_precision(&self, value: f64) -> Result<(), UaError> {
		self.node().set_member(&Self::VALUE_PRECISION, value).await
	}

	/// Read the value of the `ValuePrecision` property from the server.
	pub async fn read_value_precision(&self) -> Result<f64, UaError> {
		self.node().read_member(&Self::VALUE_PRECISION).await
	}

	/// Write a value for the `ValuePrecision` property to the server.
	pub async fn write_value_precision(&self, value: f64) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::VALUE_PRECISION, value).await
	}

	/// Get the `ValuePrecision` property node.
	pub async fn value_precision_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::VALUE_PRECISION).await
	}
}

/// The `AnalogItemType` variable type.
#[derive(Debug, Clone)]
pub struct AnalogItemTypeNode {
	/// The supertype binding.
	base: DataItemTypeNode,
}

impl TypedNode for AnalogItemTypeNode {
	const TYPE_DEFINITION: u32 = ids::ANALOG_ITEM_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: DataItemTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for AnalogItemTypeNode {
	type Target = DataItemTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl AnalogItemTypeNode {
	/// The `InstrumentRange` property, the range the instrument can report.
	pub const INSTRUMENT_RANGE: QualifiedProperty<Range> =
		QualifiedProperty::property("InstrumentRange", ids::RANGE);
	/// The `EURange` property, the normal operating range.
	pub const EU_RANGE: QualifiedProperty<Range> =
		QualifiedProperty::property("EURange", ids::RANGE);
	/// The `EngineeringUnits` property.
	pub const ENGINEERING_UNITS: QualifiedProperty<EUInformation> =
		QualifiedProperty::property("EngineeringUnits", ids::EU_INFORMATION);

	/// Get the local value of the `InstrumentRange` property.
	pub async fn instrument_range(&self) -> Result<Range, UaError> {
		self.node().get_member_struct(&Self::INSTRUMENT_RANGE).await
	}

	/// Locally set the value of the `InstrumentRange` property.
	pub async fn set_instrument_range(&self, value: &Range) -> Result<(), UaError> {
		self.node().set_member_struct(&Self::INSTRUMENT_RANGE, value).await
	}

	/// Read the value of the `InstrumentRange` property from the server.
	pub async fn read_instrument_range(&self) -> Result<Range, UaError> {
		self.node().read_member_struct(&Self::INSTRUMENT_RANGE).await
	}

	/// Write a value for the `InstrumentRange` property to the server.
	pub async fn write_instrument_range(&self, value: &Range) -> Result<StatusCode, UaError> {
		self.node().write_member_struct(&Self::INSTRUMENT_RANGE, value).await
	}

	/// Get the `InstrumentRange` property node.
	pub async fn instrument_range_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::INSTRUMENT_RANGE).await
	}

	/// Get the local value of the `EURange` property.
	pub async fn eu_range(&self) -> Result<Range, UaError> {
		self.node().get_member_struct(&Self::EU_RANGE).await
	}

	/// Locally set the value of the `EURange` property.
	pub async fn set_eu_range(&self, value: &Range) -> Result<(), UaError> {
		self.node().set_member_struct(&Self::EU_RANGE, value).await
	}

	/// Read the value of the `EURange` property from the server.
	pub async fn read_eu_range(&self) -> Result<Range, UaError> {
		self.node().read_member_struct(&Self::EU_RANGE).await
	}

	/// Write a value for the `EURange` property to the server.
	pub async fn write_eu_range(&self, value: &Range) -> Result<StatusCode, UaError> {
		self.node().write_member_struct(&Self::EU_RANGE, value).await
	}

	/// Get the `EURange` property node.
	pub async fn eu_range_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::EU_RANGE).await
	}

	/// Get the local value of the `EngineeringUnits` property.
	pub async fn engineering_units(&self) -> Result<EUInformation, UaError> {
		self.node().get_member_struct(&Self::ENGINEERING_UNITS).await
	}

	/// Locally set the value of the `EngineeringUnits` property.
	pub async fn set_engineering_units(&self, value: &EUInformation) -> Result<(), UaError> {
		self.node().set_member_struct(&Self::ENGINEERING_UNITS, value).await
	}

	/// Read the value of the `EngineeringUnits` property from the server.
	pub async fn read_engineering_units(&self) -> Result<EUInformation, UaError> {
		self.node().read_member_struct(&Self::ENGINEERING_UNITS).await
	}

	/// Write a value for the `EngineeringUnits` property to the server.
	pub async fn write_engineering_units(
		&self,
		value: &EUInformation,
	) -> Result<StatusCode, UaError> {
		self.node().write_member_struct(&Self::ENGINEERING_UNITS, value).await
	}

	/// Get the `EngineeringUnits` property node.
	pub async fn engineering_units_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::ENGINEERING_UNITS).await
	}
}

/// The `StateVariableType` variable type. Its value is the display name of
/// the current state.
#[derive(Debug, Clone)]
pub struct StateVariableTypeNode {
	/// The supertype binding.
	base: BaseDataVariableTypeNode,
}

impl TypedNode for StateVariableTypeNode {
	const TYPE_DEFINITION: u32 = ids::STATE_VARIABLE_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: BaseDataVariableTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for StateVariableTypeNode {
	type Target = BaseDataVariableTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl StateVariableTypeNode {
	/// The `Id` property. Its data type is type-specific, so the base
	/// binding leaves it untyped.
	pub const ID: QualifiedProperty<Variant> =
		QualifiedProperty::property("Id", ids::BASE_DATA_TYPE);
	/// The `Name` property.
	pub const NAME: QualifiedProperty<QualifiedName> =
		QualifiedProperty::property("Name", ids::QUALIFIED_NAME);
	/// The `Number` property.
	pub const NUMBER: QualifiedProperty<u32> = QualifiedProperty::property("Number", ids::UINT32);
	/// The `EffectiveDisplayName` property.
	pub const EFFECTIVE_DISPLAY_NAME: QualifiedProperty<LocalizedText> =
		QualifiedProperty::property("EffectiveDisplayName", ids::LOCALIZED_TEXT);

	/// Get the local value of the `Id` property.
	pub async fn id(&self) -> Result<Variant, UaError> {
		self.node().get_member_variant(&Self::ID).await
	}

	/// Locally set the value of the `Id` property.
	pub async fn set_id(&self, value: Variant) -> Result<(), UaError> {
		self.node().set_member_variant(&Self::ID, value).await
	}

	/// Read the value of the `Id` property from the server.
	pub async fn read_id(&self) -> Result<Variant, UaError> {
		self.node().read_member_variant(&Self::ID).await
	}

	/// Write a value for the `Id` property to the server.
	pub async fn write_id(&self, value: Variant) -> Result<StatusCode, UaError> {
		self.node().write_member_variant(&Self::ID, value).await
	}

	/// Get the `Id` property node.
	pub async fn id_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::ID).await
	}

	/// Get the local value of the `Name` property.
	pub async fn name(&self) -> Result<QualifiedName, UaError> {
		self.node().get_member(&Self::NAME).await
	}

	/// Locally set the value of the `Name` property.
	pub async fn set_name(&self, value: QualifiedName) -> Result<(), UaError> {
		self.node().set_member(&Self::NAME, value).await
	}

	/// Read the value of the `Name` property from the server.
	pub async fn read_name(&self) -> Result<QualifiedName, UaError> {
		self.node().read_member(&Self::NAME).await
	}

	/// Write a value for the `Name` property to the server.
	pub async fn write_name(&self, value: QualifiedName) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::NAME, value).await
	}

	/// Get the `Name` property node.
	pub async fn name_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::NAME).await
	}

	/// Get the local value of the `Number` property.
	pub async fn number(&self) -> Result<u32, UaError> {
		self.node().get_member(&Self::NUMBER).await
	}

	/// Locally set the value of the `Number` property.
	pub async fn set_number(&self, value: u32) -> Result<(), UaError> {
		self.node().set_member(&Self::NUMBER, value).await
	}

	/// Read the value of the `Number` property from the server.
	pub async fn read_number(&self) -> Result<u32, UaError> {
		self.node().read_member(&Self::NUMBER).await
	}

	/// Write a value for the `Number` property to the server.
	pub async fn write_number(&self, value: u32) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::NUMBER, value).await
	}

	/// Get the `Number` property node.
	pub async fn number_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::NUMBER).await
	}

	/// Get the local value of the `EffectiveDisplayName` property.
	pub async fn effective_display_name(&self) -> Result<LocalizedText, UaError> {
		self.node().get_member(&Self::EFFECTIVE_DISPLAY_NAME).await
	}

	/// Locally set the value of the `EffectiveDisplayName` property.
	pub async fn set_effective_display_name(&self, value: LocalizedText) -> Result<(), UaError> {
		self.node().set_member(&Self::EFFECTIVE_DISPLAY_NAME, value).await
	}

	/// Read the value of the `EffectiveDisplayName` property from the
	/// server.
	pub async fn read_effective_display_name(&self) -> Result<LocalizedText, UaError> {
		self.node().read_member(&Self::EFFECTIVE_DISPLAY_NAME).await
	}

	/// Write a value for the `EffectiveDisplayName` property to the server.
	pub async fn write_effective_display_name(
		&self,
		value: LocalizedText,
	) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::EFFECTIVE_DISPLAY_NAME, value).await
	}

	/// Get the `EffectiveDisplayName` property node.
	pub async fn effective_display_name_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::EFFECTIVE_DISPLAY_NAME).await
	}
}

/// The `FiniteStateVariableType` variable type. Narrows the `Id` property
/// to a node id naming the current state.
#[derive(Debug, Clone)]
pub struct FiniteStateVariableTypeNode {
	/// The supertype binding.
	base: StateVariableTypeNode,
}

impl TypedNode for FiniteStateVariableTypeNode {
	const TYPE_DEFINITION: u32 = ids::FINITE_STATE_VARIABLE_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: StateVariableTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for FiniteStateVariableTypeNode {
	type Target = StateVariableTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl FiniteStateVariableTypeNode {
	/// The `Id` property, the node id of the current state.
	pub const ID: QualifiedProperty<NodeId> = QualifiedProperty::property("Id", ids::NODE_ID);

	/// Get the local value of the `Id` property.
	pub async fn id(&self) -> Result<NodeId, UaError> {
		self.node().get_member(&Self::ID).await
	}

	/// Locally set the value of the `Id` property.
	pub async fn set_id(&self, value: NodeId) -> Result<(), UaError> {
		self.node().set_member(&Self::ID, value).await
	}

	/// Read the value of the `Id` property from the server.
	pub async fn read_id(&self) -> Result<NodeId, UaError> {
		self.node().read_member(&Self::ID).await
	}

	/// Write a value for the `Id` property to the server.
	pub async fn write_id(&self, value: NodeId) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::ID, value).await
	}

	/// Get the `Id` property node.
	pub async fn id_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::ID).await
	}
}

/// The `TransitionVariableType` variable type. Its value is the display
/// name of the last transition.
#[derive(Debug, Clone)]
pub struct TransitionVariableTypeNode {
	/// The supertype binding.
	base: BaseDataVariableTypeNode,
}

impl TypedNode for TransitionVariableTypeNode {
	const TYPE_DEFINITION: u32 = ids::TRANSITION_VARIABLE_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: BaseDataVariableTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for TransitionVariableTypeNode {
	type Target = BaseDataVariableTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl TransitionVariableTypeNode {
	/// The `Id` property. Its data type is type-specific, so the base
	/// binding leaves it untyped.
	pub const ID: QualifiedProperty<Variant> =
		QualifiedProperty::property("Id", ids::BASE_DATA_TYPE);
	/// The `Name` property.
	pub const NAME: QualifiedProperty<QualifiedName> =
		QualifiedProperty::property("Name", ids::QUALIFIED_NAME);
	/// The `Number` property.
	pub const NUMBER: QualifiedProperty<u32> = QualifiedProperty::property("Number", ids::UINT32);
	/// The `TransitionTime` property, when the transition occurred.
	pub const TRANSITION_TIME: QualifiedProperty<OffsetDateTime> =
		QualifiedProperty::property("TransitionTime", ids::UTC_TIME);
	/// The `EffectiveTransitionTime` property, when the effective state last
	/// changed, including substate changes.
	pub const EFFECTIVE_TRANSITION_TIME: QualifiedProperty<OffsetDateTime> =
		QualifiedProperty::property("EffectiveTransitionTime", ids::UTC_TIME);

	/// Get the local value of the `Id` property.
	pub async fn id(&self) -> Result<Variant, UaError> {
		self.node().get_member_variant(&Self::ID).await
	}

	/// Locally set the value of the `Id` property.
	pub async fn set_id(&self, value: Variant) -> Result<(), UaError> {
		self.node().set_member_variant(&Self::ID, value).await
	}

	/// Read the value of the `Id` property from the server.
	pub async fn read_id(&self) -> Result<Variant, UaError> {
		self.node().read_member_variant(&Self::ID).await
	}

	/// Write a value for the `Id` property to the server.
	pub async fn write_id(&self, value: Variant) -> Result<StatusCode, UaError> {
		self.node().write_member_variant(&Self::ID, value).await
	}

	/// Get the `Id` property node.
	pub async fn id_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::ID).await
	}

	/// Get the local value of the `Name` property.
	pub async fn name(&self) -> Result<QualifiedName, UaError> {
		self.node().get_member(&Self::NAME).await
	}

	/// Locally set the value of the `Name` property.
	pub async fn set_name(&self, value: QualifiedName) -> Result<(), UaError> {
		self.node().set_member(&Self::NAME, value).await
	}

	/// Read the value of the `Name` property from the server.
	pub async fn read_name(&self) -> Result<QualifiedName, UaError> {
		self.node().read_member(&Self::NAME).await
	}

	/// Write a value for the `Name` property to the server.
	pub async fn write_name(&self, value: QualifiedName) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::NAME, value).await
	}

	/// Get the `Name` property node.
	pub async fn name_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::NAME).await
	}

	/// Get the local value of the `Number` property.
	pub async fn number(&self) -> Result<u32, UaError> {
		self.node().get_member(&Self::NUMBER).await
	}

	/// Locally set the value of the `Number` property.
	pub async fn set_number(&self, value: u32) -> Result<(), UaError> {
		self.node().set_member(&Self::NUMBER, value).await
	}

	/// Read the value of the `Number` property from the server.
	pub async fn read_number(&self) -> Result<u32, UaError> {
		self.node().read_member(&Self::NUMBER).await
	}

	/// Write a value for the `Number` property to the server.
	pub async fn write_number(&self, value: u32) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::NUMBER, value).await
	}

	/// Get the `Number` property node.
	pub async fn number_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::NUMBER).await
	}

	/// Get the local value of the `TransitionTime` property.
	pub async fn transition_time(&self) -> Result<OffsetDateTime, UaError> {
		self.node().get_member(&Self::TRANSITION_TIME).await
	}

	/// Locally set the value of the `TransitionTime` property.
	pub async fn set_transition_time(&self, value: OffsetDateTime) -> Result<(), UaError> {
		self.node().set_member(&Self::TRANSITION_TIME, value).await
	}

	/// Read the value of the `TransitionTime` property from the server.
	pub async fn read_transition_time(&self) -> Result<OffsetDateTime, UaError> {
		self.node().read_member(&Self::TRANSITION_TIME).await
	}

	/// Write a value for the `TransitionTime` property to the server.
	pub async fn write_transition_time(
		&self,
		value: OffsetDateTime,
	) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::TRANSITION_TIME, value).await
	}

	/// Get the `TransitionTime` property node.
	pub async fn transition_time_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::TRANSITION_TIME).await
	}

	/// Get the local value of the `EffectiveTransitionTime` property.
	pub async fn effective_transition_time(&self) -> Result<OffsetDateTime, UaError> {
		self.node().get_member(&Self::EFFECTIVE_TRANSITION_TIME).await
	}

	/// Locally set the value of the `EffectiveTransitionTime` property.
	pub async fn set_effective_transition_time(
		&self,
		value: OffsetDateTime,
	) -> Result<(), UaError> {
		self.node().set_member(&Self::EFFECTIVE_TRANSITION_TIME, value).await
	}

	/// Read the value of the `EffectiveTransitionTime` property from the
	/// server.
	pub async fn read_effective_transition_time(&self) -> Result<OffsetDateTime, UaError> {
		self.node().read_member(&Self::EFFECTIVE_TRANSITION_TIME).await
	}

	/// Write a value for the `EffectiveTransitionTime` property to the
	/// server.
	pub async fn write_effective_transition_time(
		&self,
		value: OffsetDateTime,
	) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::EFFECTIVE_TRANSITION_TIME, value).await
	}

	/// Get the `EffectiveTransitionTime` property node.
	pub async fn effective_transition_time_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::EFFECTIVE_TRANSITION_TIME).await
	}
}

/// The `FiniteTransitionVariableType` variable type. Narrows the `Id`
/// property to a node id naming the last transition.
#[derive(Debug, Clone)]
pub struct FiniteTransitionVariableTypeNode {
	/// The supertype binding.
	base: TransitionVariableTypeNode,
}

impl TypedNode for FiniteTransitionVariableTypeNode {
	const TYPE_DEFINITION: u32 = ids::FINITE_TRANSITION_VARIABLE_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: TransitionVariableTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for FiniteTransitionVariableTypeNode {
	type Target = TransitionVariableTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl FiniteTransitionVariableTypeNode {
	/// The `Id` property, the node id of the last transition.
	pub const ID: QualifiedProperty<NodeId> = QualifiedProperty::property("Id", ids::NODE_ID);

	/// Get the local value of the `Id` property.
	pub async fn id(&self) -> Result<NodeId, UaError> {
		self.node().get_member(&Self::ID).await
	}

	/// Locally set the value of the `Id` property.
	pub async fn set_id(&self, value: NodeId) -> Result<(), UaError> {
		self.node().set_member(&Self::ID, value).await
	}

	/// Read the value of the `Id` property from the server.
	pub async fn read_id(&self) -> Result<NodeId, UaError> {
		self.node().read_member(&Self::ID).await
	}

	/// Write a value for the `Id` property to the server.
	pub async fn write_id(&self, value: NodeId) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::ID, value).await
	}

	/// Get the `Id` property node.
	pub async fn id_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::ID).await
	}
}

/// The `TwoStateVariableType` variable type. Narrows the `Id` property to a
/// boolean and adds the state display names.
#[derive(Debug, Clone)]
pub struct TwoStateVariableTypeNode {
	/// The supertype binding.
	base: StateVariableTypeNode,
}

impl TypedNode for TwoStateVariableTypeNode {
	const TYPE_DEFINITION: u32 = ids::TWO_STATE_VARIABLE_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: StateVariableTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for TwoStateVariableTypeNode {
	type Target = StateVariableTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl TwoStateVariableTypeNode {
	/// The `Id` property, whether the state is active.
	pub const ID: QualifiedProperty<bool> = QualifiedProperty::property("Id", ids::BOOLEAN);
	/// The `TransitionTime` property, when the state last changed.
	pub const TRANSITION_TIME: QualifiedProperty<OffsetDateTime> =
		QualifiedProperty::property("TransitionTime", ids::UTC_TIME);
	/// The `EffectiveTransitionTime` property, when the effective state last
	/// changed, including substate changes.
	pub const EFFECTIVE_TRANSITION_TIME: QualifiedProperty<OffsetDateTime> =
		QualifiedProperty::property("EffectiveTransitionTime", ids::UTC_TIME);
	/// The `TrueState` property, the display name of the active state.
	pub const TRUE_STATE: QualifiedProperty<LocalizedText> =
		QualifiedProperty::property("TrueState", ids::LOCALIZED_TEXT);
	/// The `FalseState` property, the display name of the inactive state.
	pub const FALSE_STATE: QualifiedProperty<LocalizedText> =
		QualifiedProperty::property("FalseState", ids::LOCALIZED_TEXT);

	/// Get the local value of the `Id` property.
	pub async fn id(&self) -> Result<bool, UaError> {
		self.node().get_member(&Self::ID).await
	}

	/// Locally set the value of the `Id` property.
	pub async fn set_id(&self, value: bool) -> Result<(), UaError> {
		self.node().set_member(&Self::ID, value).await
	}

	/// Read the value of the `Id` property from the server.
	pub async fn read_id(&self) -> Result<bool, UaError> {
		self.node().read_member(&Self::ID).await
	}

	/// Write a value for the `Id` property to the server.
	pub async fn write_id(&self, value: bool) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::ID, value).await
	}

	/// Get the `Id` property node.
	pub async fn id_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::ID).await
	}

	/// Get the local value of the `TransitionTime` property.
	pub async fn transition_time(&self) -> Result<OffsetDateTime, UaError> {
		self.node().get_member(&Self::TRANSITION_TIME).await
	}

	/// Locally set the value of the `TransitionTime` property.
	pub async fn set_transition_time(&self, value: OffsetDateTime) -> Result<(), UaError> {
		self.node().set_member(&Self::TRANSITION_TIME, value).await
	}

	/// Read the value of the `TransitionTime` property from the server.
	pub async fn read_transition_time(&self) -> Result<OffsetDateTime, UaError> {
		self.node().read_member(&Self::TRANSITION_TIME).await
	}

	/// Write a value for the `TransitionTime` property to the server.
	pub async fn write_transition_time(
		&self,
		value: OffsetDateTime,
	) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::TRANSITION_TIME, value).await
	}

	/// Get the `TransitionTime` property node.
	pub async fn transition_time_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::TRANSITION_TIME).await
	}

	/// Get the local value of the `EffectiveTransitionTime` property.
	pub async fn effective_transition_time(&self) -> Result<OffsetDateTime, UaError> {
		self.node().get_member(&Self::EFFECTIVE_TRANSITION_TIME).await
	}

	/// Locally set the value of the `EffectiveTransitionTime` property.
	pub async fn set_effective_transition_time(
		&self,
		value: OffsetDateTime,
	) -> Result<(), UaError> {
		self.node().set_member(&Self::EFFECTIVE_TRANSITION_TIME, value).await
	}

	/// Read the value of the `EffectiveTransitionTime` property from the
	/// server.
	pub async fn read_effective_transition_time(&self) -> Result<OffsetDateTime, UaError> {
		self.node().read_member(&Self::EFFECTIVE_TRANSITION_TIME).await
	}

	/// Write a value for the `EffectiveTransitionTime` property to the
	/// server.
	pub async fn write_effective_transition_time(
		&self,
		value: OffsetDateTime,
	) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::EFFECTIVE_TRANSITION_TIME, value).await
	}

	/// Get the `EffectiveTransitionTime` property node.
	pub async fn effective_transition_time_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::EFFECTIVE_TRANSITION_TIME).await
	}

	/// Get the local value of the `TrueState` property.
	pub async fn true_state(&self) -> Result<LocalizedText, UaError> {
		self.node().get_member(&Self::TRUE_STATE).await
	}

	/// Locally set the value of the `TrueState` property.
	pub async fn set_true_state(&self, value: LocalizedText) -> Result<(), UaError> {
		self.node().set_member(&Self::TRUE_STATE, value).await
	}

	/// Read the value of the `TrueState` property from the server.
	pub async fn read_true_state(&self) -> Result<LocalizedText, UaError> {
		self.node().read_member(&Self::TRUE_STATE).await
	}

	/// Write a value for the `TrueState` property to the server.
	pub async fn write_true_state(&self, value: LocalizedText) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::TRUE_STATE, value).await
	}

	/// Get the `TrueState` property node.
	pub async fn true_state_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::TRUE_STATE).await
	}

	/// Get the local value of the `FalseState` property.
	pub async fn false_state(&self) -> Result<LocalizedText, UaError> {
		self.node().get_member(&Self::FALSE_STATE).await
	}

	/// Locally set the value of the `FalseState` property.
	pub async fn set_false_state(&self, value: LocalizedText) -> Result<(), UaError> {
		self.node().set_member(&Self::FALSE_STATE, value).await
	}

	/// Read the value of the `FalseState` property from the server.
	pub async fn read_false_state(&self) -> Result<LocalizedText, UaError> {
		self.node().read_member(&Self::FALSE_STATE).await
	}

	/// Write a value for the `FalseState` property to the server.
	pub async fn write_false_state(&self, value: LocalizedText) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::FALSE_STATE, value).await
	}

	/// Get the `FalseState` property node.
	pub async fn false_state_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::FALSE_STATE).await
	}
}

/// The `ConditionVariableType` variable type. Its value is condition state
/// that does not by itself trigger event reports.
#[derive(Debug, Clone)]
pub struct ConditionVariableTypeNode {
	/// The supertype binding.
	base: BaseDataVariableTypeNode,
}

impl TypedNode for ConditionVariableTypeNode {
	const TYPE_DEFINITION: u32 = ids::CONDITION_VARIABLE_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: BaseDataVariableTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for ConditionVariableTypeNode {
	type Target = BaseDataVariableTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl ConditionVariableTypeNode {
	/// The `SourceTimestamp` property, when the value last changed.
	pub const SOURCE_TIMESTAMP: QualifiedProperty<OffsetDateTime> =
		QualifiedProperty::property("SourceTimestamp", ids::UTC_TIME);

	/// Get the local value of the `SourceTimestamp` property.
	pub async fn source_timestamp(&self) -> Result<OffsetDateTime, UaError> {
		self.node().get_member(&Self::SOURCE_TIMESTAMP).await
	}

	/// Locally set the value of the `SourceTimestamp` property.
	pub async fn set_source_timestamp(&self, value: OffsetDateTime) -> Result<(), UaError> {
		self.node().set_member(&Self::SOURCE_TIMESTAMP, value).await
	}

	/// Read the value of the `SourceTimestamp` property from the server.
	pub async fn read_source_timestamp(&self) -> Result<OffsetDateTime, UaError> {
		self.node().read_member(&Self::SOURCE_TIMESTAMP).await
	}

	/// Write a value for the `SourceTimestamp` property to the server.
	pub async fn write_source_timestamp(
		&self,
		value: OffsetDateTime,
	) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::SOURCE_TIMESTAMP, value).await
	}

	/// Get the `SourceTimestamp` property node.
	pub async fn source_timestamp_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::SOURCE_TIMESTAMP).await
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::{
		client::{AddressSpace, ClientConfig, ReferenceKind, memory::MemorySpace},
		ua::{ExtensionObject, UaStruct as _},
	};

	async fn analog_item_space() -> (Arc<MemorySpace>, NodeId) {
		let space = Arc::new(MemorySpace::new());
		let item = NodeId::string(2, "Temperature");
		space
			.add_variable(
				item.clone(),
				QualifiedName::new(2, "Temperature"),
				Some(NodeId::numeric(0, ids::ANALOG_ITEM_TYPE)),
				Variant::Double(21.5),
			)
			.await;

		let eu_range = NodeId::string(2, "Temperature.EURange");
		let envelope =
			ExtensionObject::encode(&Range { low: -40.0, high: 125.0 }).expect("encodable");
		space
			.add_variable(
				eu_range.clone(),
				QualifiedName::new(0, "EURange"),
				Some(NodeId::numeric(0, ids::PROPERTY_TYPE)),
				envelope.into(),
			)
			.await;
		space.add_member(&item, ReferenceKind::HasProperty, &eu_range).await;
		(space, item)
	}

	#[tokio::test]
	async fn test_analog_item_eu_range_round_trip() {
		let (space, item) = analog_item_space().await;
		let client = AddressSpace::new(space.clone(), ClientConfig::default());
		let analog: AnalogItemTypeNode = client.typed_node(&item).await.expect("resolves");

		let range = analog.read_eu_range().await.expect("readable");
		assert_eq!(range, Range { low: -40.0, high: 125.0 });

		let wider = Range { low: -55.0, high: 150.0 };
		analog.write_eu_range(&wider).await.expect("writable");
		// The server now holds the new envelope and the cache serves it.
		assert_eq!(analog.eu_range().await.expect("cached"), wider);

		let eu_range = NodeId::string(2, "Temperature.EURange");
		let stored = space.value(&eu_range).await.expect("stored");
		let envelope: ExtensionObject = stored.try_into().expect("an extension object");
		assert_eq!(envelope.decode::<Range>().expect("decodable"), wider);
	}

	#[tokio::test]
	async fn test_engineering_units_missing_member() {
		let (space, item) = analog_item_space().await;
		let client = AddressSpace::new(space, ClientConfig::default());
		let analog: AnalogItemTypeNode = client.typed_node(&item).await.expect("resolves");

		let result = analog.read_engineering_units().await;
		assert!(matches!(result, Err(UaError::MemberNotFound { .. })));
	}

	#[tokio::test]
	async fn test_struct_decode_checks_type_id() {
		let (space, item) = analog_item_space().await;
		let client = AddressSpace::new(space, ClientConfig::default());
		let analog: AnalogItemTypeNode = client.typed_node(&item).await.expect("resolves");

		// EURange is a Range envelope; asking for EUInformation must fail.
		let node = analog.eu_range_node().await.expect("resolves");
		let stored = node.read_value().await.expect("readable").value.expect("present");
		let envelope: ExtensionObject = stored.try_into().expect("an extension object");
		assert!(envelope.decode::<EUInformation>().is_err());
		assert_eq!(EUInformation::DATA_TYPE_ID, ids::EU_INFORMATION);
	}

	#[tokio::test]
	async fn test_two_state_variable_properties() {
		let space = Arc::new(MemorySpace::new());
		let state = NodeId::string(2, "Enabled");
		space
			.add_variable(
				state.clone(),
				QualifiedName::new(0, "EnabledState"),
				Some(NodeId::numeric(0, ids::TWO_STATE_VARIABLE_TYPE)),
				Variant::LocalizedText(LocalizedText::new("Enabled")),
			)
			.await;
		let id = NodeId::string(2, "Enabled.Id");
		space
			.add_variable(
				id.clone(),
				QualifiedName::new(0, "Id"),
				Some(NodeId::numeric(0, ids::PROPERTY_TYPE)),
				Variant::Boolean(true),
			)
			.await;
		space.add_member(&state, ReferenceKind::HasProperty, &id).await;

		let client = AddressSpace::new(space, ClientConfig::default());
		let two_state: TwoStateVariableTypeNode =
			client.typed_node(&state).await.expect("resolves");
		assert!(two_state.read_id().await.expect("readable"));

		// Local set does not propagate to the server until written.
		two_state.set_id(false).await.expect("local set");
		assert!(!two_state.id().await.expect("cached"));
	}
}
