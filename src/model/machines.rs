//! Bindings for the state machine object types.

use std::ops::Deref;

use crate::{
	client::{UaError, UaNode},
	model::{
		QualifiedProperty, TypedNode,
		objects::BaseObjectTypeNode,
		variables::{
			BaseDataVariableTypeNode, FiniteStateVariableTypeNode,
			FiniteTransitionVariableTypeNode, StateVariableTypeNode, TransitionVariableTypeNode,
		},
	},
	ua::{LocalizedText, NodeId, StatusCode, ids},
};

/// The `StateMachineType` object type.
///
/// See <https://reference.opcfoundation.org/v105/Core/docs/Part16/4.4.2>.
#[derive(Debug, Clone)]
pub struct StateMachineTypeNode {
	/// The supertype binding.
	base: BaseObjectTypeNode,
}

impl TypedNode for StateMachineTypeNode {
	const TYPE_DEFINITION: u32 = ids::STATE_MACHINE_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: BaseObjectTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for StateMachineTypeNode {
	type Target = BaseObjectTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl StateMachineTypeNode {
	/// The `CurrentState` variable, the display name of the current state.
	pub const CURRENT_STATE: QualifiedProperty<LocalizedText> =
		QualifiedProperty::component("CurrentState", ids::LOCALIZED_TEXT);
	/// The `LastTransition` variable, the display name of the last
	/// transition.
	pub const LAST_TRANSITION: QualifiedProperty<LocalizedText> =
		QualifiedProperty::component("LastTransition", ids::LOCALIZED_TEXT);

	/// Get the local value of the `CurrentState` variable.
	pub async fn current_state(&self) -> Result<LocalizedText, UaError> {
		self.node().get_member(&Self::CURRENT_STATE).await
	}

	/// Locally set the value of the `CurrentState` variable.
	pub async fn set_current_state(&self, value: LocalizedText) -> Result<(), UaError> {
		self.node().set_member(&Self::CURRENT_STATE, value).await
	}

	/// Read the value of the `CurrentState` variable from the server.
	pub async fn read_current_state(&self) -> Result<LocalizedText, UaError> {
		self.node().read_member(&Self::CURRENT_STATE).await
	}

	/// Write a value for the `CurrentState` variable to the server.
	pub async fn write_current_state(&self, value: LocalizedText) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::CURRENT_STATE, value).await
	}

	/// Get the `CurrentState` variable node.
	pub async fn current_state_node(&self) -> Result<StateVariableTypeNode, UaError> {
		self.node().member_of(&Self::CURRENT_STATE).await
	}

	/// Get the local value of the `LastTransition` variable.
	pub async fn last_transition(&self) -> Result<LocalizedText, UaError> {
		self.node().get_member(&Self::LAST_TRANSITION).await
	}

	/// Locally set the value of the `LastTransition` variable.
	pub async fn set_last_transition(&self, value: LocalizedText) -> Result<(), UaError> {
		self.node().set_member(&Self::LAST_TRANSITION, value).await
	}

	/// Read the value of the `LastTransition` variable from the server.
	pub async fn read_last_transition(&self) -> Result<LocalizedText, UaError> {
		self.node().read_member(&Self::LAST_TRANSITION).await
	}

	/// Write a value for the `LastTransition` variable to the server.
	pub async fn write_last_transition(
		&self,
		value: LocalizedText,
	) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::LAST_TRANSITION, value).await
	}

	/// Get the `LastTransition` variable node.
	pub async fn last_transition_node(&self) -> Result<TransitionVariableTypeNode, UaError> {
		self.node().member_of(&Self::LAST_TRANSITION).await
	}
}

/// The `FiniteStateMachineType` object type, a state machine over a known
/// set of states and transitions.
///
/// See <https://reference.opcfoundation.org/v105/Core/docs/Part16/4.4.5>.
#[derive(Debug, Clone)]
pub struct FiniteStateMachineTypeNode {
	/// The supertype binding.
	base: StateMachineTypeNode,
}

impl TypedNode for FiniteStateMachineTypeNode {
	const TYPE_DEFINITION: u32 = ids::FINITE_STATE_MACHINE_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: StateMachineTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for FiniteStateMachineTypeNode {
	type Target = StateMachineTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl FiniteStateMachineTypeNode {
	/// The `AvailableStates` variable, the node ids of the reachable
	/// states.
	pub const AVAILABLE_STATES: QualifiedProperty<Vec<NodeId>> =
		QualifiedProperty::array_component("AvailableStates", ids::NODE_ID);
	/// The `AvailableTransitions` variable, the node ids of the reachable
	/// transitions.
	pub const AVAILABLE_TRANSITIONS: QualifiedProperty<Vec<NodeId>> =
		QualifiedProperty::array_component("AvailableTransitions", ids::NODE_ID);

	/// Get the `CurrentState` variable node. In a finite state machine the
	/// variable carries the state's node id as its `Id` property.
	pub async fn current_state_node(&self) -> Result<FiniteStateVariableTypeNode, UaError> {
		self.node().member_of(&StateMachineTypeNode::CURRENT_STATE).await
	}

	/// Get the `LastTransition` variable node. In a finite state machine
	/// the variable carries the transition's node id as its `Id` property.
	pub async fn last_transition_node(&self) -> Result<FiniteTransitionVariableTypeNode, UaError> {
		self.node().member_of(&StateMachineTypeNode::LAST_TRANSITION).await
	}

	/// Get the local value of the `AvailableStates` variable.
	pub async fn available_states(&self) -> Result<Vec<NodeId>, UaError> {
		self.node().get_member(&Self::AVAILABLE_STATES).await
	}

	/// Locally set the value of the `AvailableStates` variable.
	pub async fn set_available_states(&self, value: Vec<NodeId>) -> Result<(), UaError> {
		self.node().set_member(&Self::AVAILABLE_STATES, value).await
	}

	/// Read the value of the `AvailableStates` variable from the server.
	pub async fn read_available_states(&self) -> Result<Vec<NodeId>, UaError> {
		self.node().read_member(&Self::AVAILABLE_STATES).await
	}

	/// Write a value for the `AvailableStates` variable to the server.
	pub async fn write_available_states(
		&self,
		value: Vec<NodeId>,
	) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::AVAILABLE_STATES, value).await
	}

	/// Get the `AvailableStates` variable node.
	pub async fn available_states_node(&self) -> Result<BaseDataVariableTypeNode, UaError> {
		self.node().member_of(&Self::AVAILABLE_STATES).await
	}

	/// Get the local value of the `AvailableTransitions` variable.
	pub async fn available_transitions(&self) -> Result<Vec<NodeId>, UaError> {
		self.node().get_member(&Self::AVAILABLE_TRANSITIONS).await
	}

	/// Locally set the value of the `AvailableTransitions` variable.
	pub async fn set_available_transitions(&self, value: Vec<NodeId>) -> Result<(), UaError> {
		self.node().set_member(&Self::AVAILABLE_TRANSITIONS, value).await
	}

	/// Read the value of the `AvailableTransitions` variable from the
	/// server.
	pub async fn read_available_transitions(&self) -> Result<Vec<NodeId>, UaError> {
		self.node().read_member(&Self::AVAILABLE_TRANSITIONS).await
	}

	/// Write a value for the `AvailableTransitions` variable to the server.
	pub async fn write_available_transitions(
		&self,
		value: Vec<NodeId>,
	) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::AVAILABLE_TRANSITIONS, value).await
	}

	/// Get the `AvailableTransitions` variable node.
	pub async fn available_transitions_node(&self) -> Result<BaseDataVariableTypeNode, UaError> {
		self.node().member_of(&Self::AVAILABLE_TRANSITIONS).await
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

	fn init_tracing() {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.try_init();
	}

	/// A program state machine with two states and its current state
	/// variable, the way a server would lay it out.
	async fn machine_space() -> (Arc<MemorySpace>, NodeId) {
		let space = Arc::new(MemorySpace::new());
		let machine = NodeId::string(2, "Program");
		space
			.add_object(
				machine.clone(),
				QualifiedName::new(2, "Program"),
				Some(NodeId::numeric(0, ids::FINITE_STATE_MACHINE_TYPE)),
			)
			.await;

		let current_state = NodeId::string(2, "Program.CurrentState");
		space
			.add_variable(
				current_state.clone(),
				QualifiedName::new(0, "CurrentState"),
				Some(NodeId::numeric(0, ids::FINITE_STATE_VARIABLE_TYPE)),
				Variant::LocalizedText(LocalizedText::new("Running")),
			)
			.await;
		space.add_member(&machine, ReferenceKind::HasComponent, &current_state).await;

		let state_id = NodeId::string(2, "Program.CurrentState.Id");
		space
			.add_variable(
				state_id.clone(),
				QualifiedName::new(0, "Id"),
				Some(NodeId::numeric(0, ids::PROPERTY_TYPE)),
				Variant::NodeId(NodeId::string(2, "Program.Running")),
			)
			.await;
		space.add_member(&current_state, ReferenceKind::HasProperty, &state_id).await;

		let available = NodeId::string(2, "Program.AvailableStates");
		space
			.add_variable(
				available.clone(),
				QualifiedName::new(0, "AvailableStates"),
				Some(NodeId::numeric(0, ids::BASE_DATA_VARIABLE_TYPE)),
				Variant::from(vec![
					NodeId::string(2, "Program.Running"),
					NodeId::string(2, "Program.Halted"),
				]),
			)
			.await;
		space.add_member(&machine, ReferenceKind::HasComponent, &available).await;
		(space, machine)
	}

	#[tokio::test]
	async fn test_read_current_state() {
		init_tracing();
		let (space, machine) = machine_space().await;
		let client = AddressSpace::new(space, ClientConfig::default());
		let machine: FiniteStateMachineTypeNode =
			client.typed_node(&machine).await.expect("resolves");

		let state = machine.read_current_state().await.expect("readable");
		assert_eq!(state, LocalizedText::new("Running"));

		// The narrowed member binding exposes the state's node id.
		let state_node = machine.current_state_node().await.expect("resolves");
		let id = state_node.read_id().await.expect("readable");
		assert_eq!(id, NodeId::string(2, "Program.Running"));
	}

	#[tokio::test]
	async fn test_available_states_array() {
		let (space, machine) = machine_space().await;
		let client = AddressSpace::new(space, ClientConfig::default());
		let machine: FiniteStateMachineTypeNode =
			client.typed_node(&machine).await.expect("resolves");

		let states = machine.read_available_states().await.expect("readable");
		assert_eq!(
			states,
			vec![NodeId::string(2, "Program.Running"), NodeId::string(2, "Program.Halted")]
		);
	}

	#[tokio::test]
	async fn test_member_resolution_is_cached() {
		let (space, machine) = machine_space().await;
		let client = AddressSpace::new(space.clone(), ClientConfig::default());
		let machine: FiniteStateMachineTypeNode =
			client.typed_node(&machine).await.expect("resolves");

		machine.read_current_state().await.expect("readable");
		machine.read_current_state().await.expect("readable");
		machine.current_state_node().await.expect("resolves");
		// CurrentState resolved once; the handle is shared afterwards.
		assert_eq!(space.find_member_calls(), 1);
	}

	#[tokio::test]
	async fn test_write_current_state_updates_server() {
		let (space, machine) = machine_space().await;
		let client = AddressSpace::new(space.clone(), ClientConfig::default());
		let machine: FiniteStateMachineTypeNode =
			client.typed_node(&machine).await.expect("resolves");

		machine
			.write_current_state(LocalizedText::new("Halted"))
			.await
			.expect("writable");
		let stored = space.value(&NodeId::string(2, "Program.CurrentState")).await;
		assert_eq!(stored, Some(Variant::LocalizedText(LocalizedText::new("Halted"))));
		// The cache was updated along with the server.
		assert_eq!(
			machine.current_state().await.expect("cached"),
			LocalizedText::new("Halted")
		);
	}

	#[tokio::test]
	async fn test_missing_member() {
		let (space, machine) = machine_space().await;
		let client = AddressSpace::new(space, ClientConfig::default());
		let machine: FiniteStateMachineTypeNode =
			client.typed_node(&machine).await.expect("resolves");

		// The fixture has no LastTransition member.
		let result = machine.read_last_transition().await;
		assert!(matches!(result, Err(UaError::MemberNotFound { .. })));
	}
}
