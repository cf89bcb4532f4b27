//! Bindings for the event and condition object types.

use std::ops::Deref;

use time::OffsetDateTime;

use crate::{
	client::{UaError, UaNode},
	model::{
		QualifiedProperty, TypedNode,
		objects::BaseObjectTypeNode,
		variables::{ConditionVariableTypeNode, PropertyTypeNode, TwoStateVariableTypeNode},
	},
	ua::{LocalizedText, NodeId, StatusCode, ids},
};

/// The `BaseEventType` object type, the base of all event types.
///
/// See <https://reference.opcfoundation.org/v105/Core/docs/Part5/6.4.2>.
#[derive(Debug, Clone)]
pub struct BaseEventTypeNode {
	/// The supertype binding.
	base: BaseObjectTypeNode,
}

impl TypedNode for BaseEventTypeNode {
	const TYPE_DEFINITION: u32 = ids::BASE_EVENT_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: BaseObjectTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for BaseEventTypeNode {
	type Target = BaseObjectTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl BaseEventTypeNode {
	/// The `EventId` property, an opaque id unique to the event.
	pub const EVENT_ID: QualifiedProperty<Vec<u8>> =
		QualifiedProperty::property("EventId", ids::BYTE_STRING);
	/// The `EventType` property, the node id of the event's type.
	pub const EVENT_TYPE: QualifiedProperty<NodeId> =
		QualifiedProperty::property("EventType", ids::NODE_ID);
	/// The `SourceNode` property, the node the event originates from.
	pub const SOURCE_NODE: QualifiedProperty<NodeId> =
		QualifiedProperty::property("SourceNode", ids::NODE_ID);
	/// The `SourceName` property, the description of the event source.
	pub const SOURCE_NAME: QualifiedProperty<String> =
		QualifiedProperty::property("SourceName", ids::STRING);
	/// The `Time` property, when the event occurred.
	pub const TIME: QualifiedProperty<OffsetDateTime> =
		QualifiedProperty::property("Time", ids::UTC_TIME);
	/// The `ReceiveTime` property, when the server received the event.
	pub const RECEIVE_TIME: QualifiedProperty<OffsetDateTime> =
		QualifiedProperty::property("ReceiveTime", ids::UTC_TIME);
	/// The `Message` property, the human readable event description.
	pub const MESSAGE: QualifiedProperty<LocalizedText> =
		QualifiedProperty::property("Message", ids::LOCALIZED_TEXT);
	/// The `Severity` property, the urgency of the event from 1 to 1000.
	pub const SEVERITY: QualifiedProperty<u16> =
		QualifiedProperty::property("Severity", ids::UINT16);

	/// Get the local value of the `EventId` property.
	pub async fn event_id(&self) -> Result<Vec<u8>, UaError> {
		self.node().get_member(&Self::EVENT_ID).await
	}

	/// Locally set the value of the `EventId` property.
	pub async fn set_event_id(&self, value: Vec<u8>) -> Result<(), UaError> {
		self.node().set_member(&Self::EVENT_ID, value).await
	}

	/// Read the value of the `EventId` property from the server.
	pub async fn read_event_id(&self) -> Result<Vec<u8>, UaError> {
		self.node().read_member(&Self::EVENT_ID).await
	}

	/// Write a value for the `EventId` property to the server.
	pub async fn write_event_id(&self, value: Vec<u8>) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::EVENT_ID, value).await
	}

	/// Get the `EventId` property node.
	pub async fn event_id_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::EVENT_ID).await
	}

	/// Get the local value of the `EventType` property.
	pub async fn event_type(&self) -> Result<NodeId, UaError> {
		self.node().get_member(&Self::EVENT_TYPE).await
	}

	/// Locally set the value of the `EventType` property.
	pub async fn set_event_type(&self, value: NodeId) -> Result<(), UaError> {
		self.node().set_member(&Self::EVENT_TYPE, value).await
	}

	/// Read the value of the `EventType` property from the server.
	pub async fn read_event_type(&self) -> Result<NodeId, UaError> {
		self.node().read_member(&Self::EVENT_TYPE).await
	}

	/// Write a value for the `EventType` property to the server.
	pub async fn write_event_type(&self, value: NodeId) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::EVENT_TYPE, value).await
	}

	/// Get the `EventType` property node.
	pub async fn event_type_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::EVENT_TYPE).await
	}

	/// Get the local value of the `SourceNode` property.
	pub async fn source_node(&self) -> Result<NodeId, UaError> {
		self.node().get_member(&Self::SOURCE_NODE).await
	}

	/// Locally set the value of the `SourceNode` property.
	pub async fn set_source_node(&self, value: NodeId) -> Result<(), UaError> {
		self.node().set_member(&Self::SOURCE_NODE, value).await
	}

	/// Read the value of the `SourceNode` property from the server.
	pub async fn read_source_node(&self) -> Result<NodeId, UaError> {
		self.node().read_member(&Self::SOURCE_NODE).await
	}

	/// Write a value for the `SourceNode` property to the server.
	pub async fn write_source_node(&self, value: NodeId) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::SOURCE_NODE, value).await
	}

	/// Get the `SourceNode` property node.
	pub async fn source_node_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::SOURCE_NODE).await
	}

	/// Get the local value of the `SourceName` property.
	pub async fn source_name(&self) -> Result<String, UaError> {
		self.node().get_member(&Self::SOURCE_NAME).await
	}

	/// Locally set the value of the `SourceName` property.
	pub async fn set_source_name(&self, value: String) -> Result<(), UaError> {
		self.node().set_member(&Self::SOURCE_NAME, value).await
	}

	/// Read the value of the `SourceName` property from the server.
	pub async fn read_source_name(&self) -> Result<String, UaError> {
		self.node().read_member(&Self::SOURCE_NAME).await
	}

	/// Write a value for the `SourceName` property to the server.
	pub async fn write_source_name(&self, value: String) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::SOURCE_NAME, value).await
	}

	/// Get the `SourceName` property node.
	pub async fn source_name_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::SOURCE_NAME).await
	}

	/// Get the local value of the `Time` property.
	pub async fn time(&self) -> Result<OffsetDateTime, UaError> {
		self.node().get_member(&Self::TIME).await
	}

	/// Locally set the value of the `Time` property.
	pub async fn set_time(&self, value: OffsetDateTime) -> Result<(), UaError> {
		self.node().set_member(&Self::TIME, value).await
	}

	/// Read the value of the `Time` property from the server.
	pub async fn read_time(&self) -> Result<OffsetDateTime, UaError> {
		self.node().read_member(&Self::TIME).await
	}

	/// Write a value for the `Time` property to the server.
	pub async fn write_time(&self, value: OffsetDateTime) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::TIME, value).await
	}

	/// Get the `Time` property node.
	pub async fn time_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::TIME).await
	}

	/// Get the local value of the `ReceiveTime` property.
	pub async fn receive_time(&self) -> Result<OffsetDateTime, UaError> {
		self.node().get_member(&Self::RECEIVE_TIME).await
	}

	/// Locally set the value of the `ReceiveTime` property.
	pub async fn set_receive_time(&self, value: OffsetDateTime) -> Result<(), UaError> {
		self.node().set_member(&Self::RECEIVE_TIME, value).await
	}

	/// Read the value of the `ReceiveTime` property from the server.
	pub async fn read_receive_time(&self) -> Result<OffsetDateTime, UaError> {
		self.node().read_member(&Self::RECEIVE_TIME).await
	}

	/// Write a value for the `ReceiveTime` property to the server.
	pub async fn write_receive_time(&self, value: OffsetDateTime) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::RECEIVE_TIME, value).await
	}

	/// Get the `ReceiveTime` property node.
	pub async fn receive_time_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::RECEIVE_TIME).await
	}

	/// Get the local value of the `Message` property.
	pub async fn message(&self) -> Result<LocalizedText, UaError> {
		self.node().get_member(&Self::MESSAGE).await
	}

	/// Locally set the value of the `Message` property.
	pub async fn set_message(&self, value: LocalizedText) -> Result<(), UaError> {
		self.node().set_member(&Self::MESSAGE, value).await
	}

	/// Read the value of the `Message` property from the server.
	pub async fn read_message(&self) -> Result<LocalizedText, UaError> {
		self.node().read_member(&Self::MESSAGE).await
	}

	/// Write a value for the `Message` property to the server.
	pub async fn write_message(&self, value: LocalizedText) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::MESSAGE, value).await
	}

	/// Get the `Message` property node.
	pub async fn message_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::MESSAGE).await
	}

	/// Get the local value of the `Severity` property.
	pub async fn severity(&self) -> Result<u16, UaError> {
		self.node().get_member(&Self::SEVERITY).await
	}

	/// Locally set the value of the `Severity` property.
	pub async fn set_severity(&self, value: u16) -> Result<(), UaError> {
		self.node().set_member(&Self::SEVERITY, value).await
	}

	/// Read the value of the `Severity` property from the server.
	pub async fn read_severity(&self) -> Result<u16, UaError> {
		self.node().read_member(&Self::SEVERITY).await
	}

	/// Write a value for the `Severity` property to the server.
	pub async fn write_severity(&self, value: u16) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::SEVERITY, value).await
	}

	/// Get the `Severity` property node.
	pub async fn severity_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::SEVERITY).await
	}
}

/// The `ConditionType` object type, the base of all condition types.
///
/// See <https://reference.opcfoundation.org/v105/Core/docs/Part9/5.5.2>.
#[derive(Debug, Clone)]
pub struct ConditionTypeNode {
	/// The supertype binding.
	base: BaseEventTypeNode,
}

impl TypedNode for ConditionTypeNode {
	const TYPE_DEFINITION: u32 = ids::CONDITION_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: BaseEventTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for ConditionTypeNode {
	type Target = BaseEventTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl ConditionTypeNode {
	/// The `ConditionClassId` property, the node id of the condition class.
	pub const CONDITION_CLASS_ID: QualifiedProperty<NodeId> =
		QualifiedProperty::property("ConditionClassId", ids::NODE_ID);
	/// The `ConditionClassName` property, the display name of the condition
	/// class.
	pub const CONDITION_CLASS_NAME: QualifiedProperty<LocalizedText> =
		QualifiedProperty::property("ConditionClassName", ids::LOCALIZED_TEXT);
	/// The `ConditionName` property, the name of the condition instance.
	pub const CONDITION_NAME: QualifiedProperty<String> =
		QualifiedProperty::property("ConditionName", ids::STRING);
	/// The `BranchId` property, the node id of the condition branch. Null
	/// for the trunk.
	pub const BRANCH_ID: QualifiedProperty<NodeId> =
		QualifiedProperty::property("BranchId", ids::NODE_ID);
	/// The `Retain` property, whether the condition is still of interest.
	pub const RETAIN: QualifiedProperty<bool> =
		QualifiedProperty::property("Retain", ids::BOOLEAN);
	/// The `ClientUserId` property, the user that last commented, acked or
	/// confirmed.
	pub const CLIENT_USER_ID: QualifiedProperty<String> =
		QualifiedProperty::property("ClientUserId", ids::STRING);
	/// The `EnabledState` variable, the display name of the enabled state.
	pub const ENABLED_STATE: QualifiedProperty<LocalizedText> =
		QualifiedProperty::component("EnabledState", ids::LOCALIZED_TEXT);
	/// The `Quality` variable, the quality of the condition's input.
	pub const QUALITY: QualifiedProperty<StatusCode> =
		QualifiedProperty::component("Quality", ids::STATUS_CODE);
	/// The `LastSeverity` variable, the severity before the current one.
	pub const LAST_SEVERITY: QualifiedProperty<u16> =
		QualifiedProperty::component("LastSeverity", ids::UINT16);
	/// The `Comment` variable, the last comment applied to the condition.
	pub const COMMENT: QualifiedProperty<LocalizedText> =
		QualifiedProperty::component("Comment", ids::LOCALIZED_TEXT);

	/// Get the local value of the `ConditionClassId` property.
	pub async fn condition_class_id(&self) -> Result<NodeId, UaError> {
		self.node().get_member(&Self::CONDITION_CLASS_ID).await
	}

	/// Locally set the value of the `ConditionClassId` property.
	pub async fn set_condition_class_id(&self, value: NodeId) -> Result<(), UaError> {
		self.node().set_member(&Self::CONDITION_CLASS_ID, value).await
	}

	/// Read the value of the `ConditionClassId` property from the server.
	pub async fn read_condition_class_id(&self) -> Result<NodeId, UaError> {
		self.node().read_member(&Self::CONDITION_CLASS_ID).await
	}

	/// Write a value for the `ConditionClassId` property to the server.
	pub async fn write_condition_class_id(&self, value: NodeId) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::CONDITION_CLASS_ID, value).await
	}

	/// Get the `ConditionClassId` property node.
	pub async fn condition_class_id_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::CONDITION_CLASS_ID).await
	}

	/// Get the local value of the `ConditionClassName` property.
	pub async fn condition_class_name(&self) -> Result<LocalizedText, UaError> {
		self.node().get_member(&Self::CONDITION_CLASS_NAME).await
	}

	/// Locally set the value of the `ConditionClassName` property.
	pub async fn set_condition_class_name(&self, value: LocalizedText) -> Result<(), UaError> {
		self.node().set_member(&Self::CONDITION_CLASS_NAME, value).await
	}

	/// Read the value of the `ConditionClassName` property from the server.
	pub async fn read_condition_class_name(&self) -> Result<LocalizedText, UaError> {
		self.node().read_member(&Self::CONDITION_CLASS_NAME).await
	}

	/// Write a value for the `ConditionClassName` property to the server.
	pub async fn write_condition_class_name(
		&self,
		value: LocalizedText,
	) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::CONDITION_CLASS_NAME, value).await
	}

	/// Get the `ConditionClassName` property node.
	pub async fn condition_class_name_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::CONDITION_CLASS_NAME).await
	}

	/// Get the local value of the `ConditionName` property.
	pub async fn condition_name(&self) -> Result<String, UaError> {
		self.node().get_member(&Self::CONDITION_NAME).await
	}

	/// Locally set the value of the `ConditionName` property.
	pub async fn set_condition_name(&self, value: String) -> Result<(), UaError> {
		self.node().set_member(&Self::CONDITION_NAME, value).await
	}

	/// Read the value of the `ConditionName` property from the server.
	pub async fn read_condition_name(&self) -> Result<String, UaError> {
		self.node().read_member(&Self::CONDITION_NAME).await
	}

	/// Write a value for the `ConditionName` property to the server.
	pub async fn write_condition_name(&self, value: String) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::CONDITION_NAME, value).await
	}

	/// Get the `ConditionName` property node.
	pub async fn condition_name_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::CONDITION_NAME).await
	}

	/// Get the local value of the `BranchId` property.
	pub async fn branch_id(&self) -> Result<NodeId, UaError> {
		self.node().get_member(&Self::BRANCH_ID).await
	}

	/// Locally set the value of the `BranchId` property.
	pub async fn set_branch_id(&self, value: NodeId) -> Result<(), UaError> {
		self.node().set_member(&Self::BRANCH_ID, value).await
	}

	/// Read the value of the `BranchId` property from the server.
	pub async fn read_branch_id(&self) -> Result<NodeId, UaError> {
		self.node().read_member(&Self::BRANCH_ID).await
	}

	/// Write a value for the `BranchId` property to the server.
	pub async fn write_branch_id(&self, value: NodeId) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::BRANCH_ID, value).await
	}

	/// Get the `BranchId` property node.
	pub async fn branch_id_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::BRANCH_ID).await
	}

	/// Get the local value of the `Retain` property.
	pub async fn retain(&self) -> Result<bool, UaError> {
		self.node().get_member(&Self::RETAIN).await
	}

	/// Locally set the value of the `Retain` property.
	pub async fn set_retain(&self, value: bool) -> Result<(), UaError> {
		self.node().set_member(&Self::RETAIN, value).await
	}

	/// Read the value of the `Retain` property from the server.
	pub async fn read_retain(&self) -> Result<bool, UaError> {
		self.node().read_member(&Self::RETAIN).await
	}

	/// Write a value for the `Retain` property to the server.
	pub async fn write_retain(&self, value: bool) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::RETAIN, value).await
	}

	/// Get the `Retain` property node.
	pub async fn retain_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::RETAIN).await
	}

	/// Get the local value of the `ClientUserId` property.
	pub async fn client_user_id(&self) -> Result<String, UaError> {
		self.node().get_member(&Self::CLIENT_USER_ID).await
	}

	/// Locally set the value of the `ClientUserId` property.
	pub async fn set_client_user_id(&self, value: String) -> Result<(), UaError> {
		self.node().set_member(&Self::CLIENT_USER_ID, value).await
	}

	/// Read the value of the `ClientUserId` property from the server.
	pub async fn read_client_user_id(&self) -> Result<String, UaError> {
		self.node().read_member(&Self::CLIENT_USER_ID).await
	}

	/// Write a value for the `ClientUserId` property to the server.
	pub async fn write_client_user_id(&self, value: String) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::CLIENT_USER_ID, value).await
	}

	/// Get the `ClientUserId` property node.
	pub async fn client_user_id_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::CLIENT_USER_ID).await
	}

	/// Get the local value of the `EnabledState` variable.
	pub async fn enabled_state(&self) -> Result<LocalizedText, UaError> {
		self.node().get_member(&Self::ENABLED_STATE).await
	}

	/// Locally set the value of the `EnabledState` variable.
	pub async fn set_enabled_state(&self, value: LocalizedText) -> Result<(), UaError> {
		self.node().set_member(&Self::ENABLED_STATE, value).await
	}

	/// Read the value of the `EnabledState` variable from the server.
	pub async fn read_enabled_state(&self) -> Result<LocalizedText, UaError> {
		self.node().read_member(&Self::ENABLED_STATE).await
	}

	/// Write a value for the `EnabledState` variable to the server.
	pub async fn write_enabled_state(&self, value: LocalizedText) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::ENABLED_STATE, value).await
	}

	/// Get the `EnabledState` variable node.
	pub async fn enabled_state_node(&self) -> Result<TwoStateVariableTypeNode, UaError> {
		self.node().member_of(&Self::ENABLED_STATE).await
	}

	/// Get the local value of the `Quality` variable.
	pub async fn quality(&self) -> Result<StatusCode, UaError> {
		self.node().get_member(&Self::QUALITY).await
	}

	/// Locally set the value of the `Quality` variable.
	pub async fn set_quality(&self, value: StatusCode) -> Result<(), UaError> {
		self.node().set_member(&Self::QUALITY, value).await
	}

	/// Read the value of the `Quality` variable from the server.
	pub async fn read_quality(&self) -> Result<StatusCode, UaError> {
		self.node().read_member(&Self::QUALITY).await
	}

	/// Write a value for the `Quality` variable to the server.
	pub async fn write_quality(&self, value: StatusCode) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::QUALITY, value).await
	}

	/// Get the `Quality` variable node.
	pub async fn quality_node(&self) -> Result<ConditionVariableTypeNode, UaError> {
		self.node().member_of(&Self::QUALITY).await
	}

	/// Get the local value of the `LastSeverity` variable.
	pub async fn last_severity(&self) -> Result<u16, UaError> {
		self.node().get_member(&Self::LAST_SEVERITY).await
	}

	/// Locally set the value of the `LastSeverity` variable.
	pub async fn set_last_severity(&self, value: u16) -> Result<(), UaError> {
		self.node().set_member(&Self::LAST_SEVERITY, value).await
	}

	/// Read the value of the `LastSeverity` variable from the server.
	pub async fn read_last_severity(&self) -> Result<u16, UaError> {
		self.node().read_member(&Self::LAST_SEVERITY).await
	}

	/// Write a value for the `LastSeverity` variable to the server.
	pub async fn write_last_severity(&self, value: u16) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::LAST_SEVERITY, value).await
	}

	/// Get the `LastSeverity` variable node.
	pub async fn last_severity_node(&self) -> Result<ConditionVariableTypeNode, UaError> {
		self.node().member_of(&Self::LAST_SEVERITY).await
	}

	/// Get the local value of the `Comment` variable.
	pub async fn comment(&self) -> Result<LocalizedText, UaError> {
		self.node().get_member(&Self::COMMENT).await
	}

	/// Locally set the value of the `Comment` variable.
	pub async fn set_comment(&self, value: LocalizedText) -> Result<(), UaError> {
		self.node().set_member(&Self::COMMENT, value).await
	}

	/// Read the value of the `Comment` variable from the server.
	pub async fn read_comment(&self) -> Result<LocalizedText, UaError> {
		self.node().read_member(&Self::COMMENT).await
	}

	/// Write a value for the `Comment` variable to the server.
	pub async fn write_comment(&self, value: LocalizedText) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::COMMENT, value).await
	}

	/// Get the `Comment` variable node.
	pub async fn comment_node(&self) -> Result<ConditionVariableTypeNode, UaError> {
		self.node().member_of(&Self::COMMENT).await
	}
}

/// The `AcknowledgeableConditionType` object type, a condition that can be
/// acknowledged and confirmed.
///
/// See <https://reference.opcfoundation.org/v105/Core/docs/Part9/5.7.2>.
#[derive(Debug, Clone)]
pub struct AcknowledgeableConditionTypeNode {
	/// The supertype binding.
	base: ConditionTypeNode,
}

impl TypedNode for AcknowledgeableConditionTypeNode {
	const TYPE_DEFINITION: u32 = ids::ACKNOWLEDGEABLE_CONDITION_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: ConditionTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for AcknowledgeableConditionTypeNode {
	type Target = ConditionTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl AcknowledgeableConditionTypeNode {
	/// The `AckedState` variable, the display name of the acknowledged
	/// state.
	pub const ACKED_STATE: QualifiedProperty<LocalizedText> =
		QualifiedProperty::component("AckedState", ids::LOCALIZED_TEXT);
	/// The `ConfirmedState` variable, the display name of the confirmed
	/// state.
	pub const CONFIRMED_STATE: QualifiedProperty<LocalizedText> =
		QualifiedProperty::component("ConfirmedState", ids::LOCALIZED_TEXT);

	/// Get the local value of the `AckedState` variable.
	pub async fn acked_state(&self) -> Result<LocalizedText, UaError> {
		self.node().get_member(&Self::ACKED_STATE).await
	}

	/// Locally set the value of the `AckedState` variable.
	pub async fn set_acked_state(&self, value: LocalizedText) -> Result<(), UaError> {
		self.node().set_member(&Self::ACKED_STATE, value).await
	}

	/// Read the value of the `AckedState` variable from the server.
	pub async fn read_acked_state(&self) -> Result<LocalizedText, UaError> {
		self.node().read_member(&Self::ACKED_STATE).await
	}

	/// Write a value for the `AckedState` variable to the server.
	pub async fn write_acked_state(&self, value: LocalizedText) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::ACKED_STATE, value).await
	}

	/// Get the `AckedState` variable node.
	pub async fn acked_state_node(&self) -> Result<TwoStateVariableTypeNode, UaError> {
		self.node().member_of(&Self::ACKED_STATE).await
	}

	/// Get the local value of the `ConfirmedState` variable.
	pub async fn confirmed_state(&self) -> Result<LocalizedText, UaError> {
		self.node().get_member(&Self::CONFIRMED_STATE).await
	}

	/// Locally set the value of the `ConfirmedState` variable.
	pub async fn set_confirmed_state(&self, value: LocalizedText) -> Result<(), UaError> {
		self.node().set_member(&Self::CONFIRMED_STATE, value).await
	}

	/// Read the value of the `ConfirmedState` variable from the server.
	pub async fn read_confirmed_state(&self) -> Result<LocalizedText, UaError> {
		self.node().read_member(&Self::CONFIRMED_STATE).await
	}

	/// Write a value for the `ConfirmedState` variable to the server.
	pub async fn write_confirmed_state(
		&self,
		value: LocalizedText,
	) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::CONFIRMED_STATE, value).await
	}

	/// Get the `ConfirmedState` variable node.
	pub async fn confirmed_state_node(&self) -> Result<TwoStateVariableTypeNode, UaError> {
		self.node().member_of(&Self::CONFIRMED_STATE).await
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::{
		client::{AddressSpace, ClientConfig, ReferenceKind, memory::MemorySpace},
		ua::{QualifiedName, Variant},
	};

	/// An acknowledgeable condition with the members the tests touch.
	async fn condition_space() -> (Arc<MemorySpace>, NodeId) {
		let space = Arc::new(MemorySpace::new());
		let condition = NodeId::string(2, "Tank.LevelAlarm");
		space
			.add_object(
				condition.clone(),
				QualifiedName::new(2, "LevelAlarm"),
				Some(NodeId::numeric(0, ids::ACKNOWLEDGEABLE_CONDITION_TYPE)),
			)
			.await;

		let properties: [(&str, Variant); 3] = [
			("Severity", Variant::Int32(700)),
			("Retain", Variant::Boolean(true)),
			(
				"Message",
				Variant::LocalizedText(LocalizedText::with_locale("en", "Level high")),
			),
		];
		for (name, value) in properties {
			let id = NodeId::string(2, format!("Tank.LevelAlarm.{name}"));
			space
				.add_variable(
					id.clone(),
					QualifiedName::new(0, name),
					Some(NodeId::numeric(0, ids::PROPERTY_TYPE)),
					value,
				)
				.await;
			space.add_member(&condition, ReferenceKind::HasProperty, &id).await;
		}

		let acked = NodeId::string(2, "Tank.LevelAlarm.AckedState");
		space
			.add_variable(
				acked.clone(),
				QualifiedName::new(0, "AckedState"),
				Some(NodeId::numeric(0, ids::TWO_STATE_VARIABLE_TYPE)),
				Variant::LocalizedText(LocalizedText::new("Unacknowledged")),
			)
			.await;
		space.add_member(&condition, ReferenceKind::HasComponent, &acked).await;

		let acked_id = NodeId::string(2, "Tank.LevelAlarm.AckedState.Id");
		space
			.add_variable(
				acked_id.clone(),
				QualifiedName::new(0, "Id"),
				Some(NodeId::numeric(0, ids::PROPERTY_TYPE)),
				Variant::Boolean(false),
			)
			.await;
		space.add_member(&acked, ReferenceKind::HasProperty, &acked_id).await;
		(space, condition)
	}

	#[tokio::test]
	async fn test_event_properties_through_inheritance() {
		let (space, condition) = condition_space().await;
		let client = AddressSpace::new(space, ClientConfig::default());
		let alarm: AcknowledgeableConditionTypeNode =
			client.typed_node(&condition).await.expect("resolves");

		// Severity is stored as Int32 by the server; the binding still
		// yields the UInt16 the schema promises.
		assert_eq!(alarm.read_severity().await.expect("readable"), 700);
		assert!(alarm.read_retain().await.expect("readable"));
		assert_eq!(
			alarm.read_message().await.expect("readable"),
			LocalizedText::with_locale("en", "Level high")
		);
	}

	#[tokio::test]
	async fn test_acknowledge_round_trip() {
		let (space, condition) = condition_space().await;
		let client = AddressSpace::new(space.clone(), ClientConfig::default());
		let alarm: AcknowledgeableConditionTypeNode =
			client.typed_node(&condition).await.expect("resolves");

		let acked = alarm.acked_state_node().await.expect("resolves");
		assert!(!acked.read_id().await.expect("readable"));

		acked.write_id(true).await.expect("writable");
		assert!(acked.id().await.expect("cached"));
		assert_eq!(
			space.value(&NodeId::string(2, "Tank.LevelAlarm.AckedState.Id")).await,
			Some(Variant::Boolean(true))
		);

		alarm
			.write_acked_state(LocalizedText::new("Acknowledged"))
			.await
			.expect("writable");
		assert_eq!(
			alarm.read_acked_state().await.expect("readable"),
			LocalizedText::new("Acknowledged")
		);
	}

	#[tokio::test]
	async fn test_get_before_read_is_no_value() {
		let (space, condition) = condition_space().await;
		let client = AddressSpace::new(space, ClientConfig::default());
		let alarm: AcknowledgeableConditionTypeNode =
			client.typed_node(&condition).await.expect("resolves");

		// The member resolves but nothing has been read yet... the local
		// cache of a freshly materialized node is empty.
		let result = alarm.retain().await;
		assert!(matches!(result, Err(UaError::NoValue)));

		alarm.read_retain().await.expect("readable");
		assert!(alarm.retain().await.expect("cached"));
	}
}
