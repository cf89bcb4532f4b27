//! Bindings for the base object types and the file-transfer family.

use std::ops::Deref;

use time::OffsetDateTime;

use crate::{
	client::{UaError, UaNode},
	model::{QualifiedProperty, TypedNode, variables::PropertyTypeNode},
	ua::{StatusCode, ids},
};

/// The `BaseObjectType` object type, the base of all object types.
#[derive(Debug, Clone)]
pub struct BaseObjectTypeNode {
	/// The underlying node handle.
	node: UaNode,
}

impl TypedNode for BaseObjectTypeNode {
	const TYPE_DEFINITION: u32 = ids::BASE_OBJECT_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { node }
	}

	fn node(&self) -> &UaNode {
		&self.node
	}
}

impl Deref for BaseObjectTypeNode {
	type Target = UaNode;

	fn deref(&self) -> &Self::Target {
		&self.node
	}
}

/// The `FolderType` object type. Folders only organize the address space;
/// they define no members.
#[derive(Debug, Clone)]
pub struct FolderTypeNode {
	/// The supertype binding.
	base: BaseObjectTypeNode,
}

impl TypedNode for FolderTypeNode {
	const TYPE_DEFINITION: u32 = ids::FOLDER_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: BaseObjectTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for FolderTypeNode {
	type Target = BaseObjectTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

/// The `FileType` object type.
///
/// See <https://reference.opcfoundation.org/v105/Core/docs/Part20/4.2.1>.
#[derive(Debug, Clone)]
pub struct FileTypeNode {
	/// The supertype binding.
	base: BaseObjectTypeNode,
}

impl TypedNode for FileTypeNode {
	const TYPE_DEFINITION: u32 = ids::FILE_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: BaseObjectTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for FileTypeNode {
	type Target = BaseObjectTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl FileTypeNode {
	/// The `Size` property, the size of the file in bytes.
	pub const SIZE: QualifiedProperty<u64> = QualifiedProperty::property("Size", ids::UINT64);
	/// The `Writable` property, whether the file can be written.
	pub const WRITABLE: QualifiedProperty<bool> =
		QualifiedProperty::property("Writable", ids::BOOLEAN);
	/// The `UserWritable` property, whether the current user can write the
	/// file.
	pub const USER_WRITABLE: QualifiedProperty<bool> =
		QualifiedProperty::property("UserWritable", ids::BOOLEAN);
	/// The `OpenCount` property, the number of currently open file handles.
	pub const OPEN_COUNT: QualifiedProperty<u16> =
		QualifiedProperty::property("OpenCount", ids::UINT16);
	/// The `MimeType` property, the media type of the file content.
	pub const MIME_TYPE: QualifiedProperty<String> =
		QualifiedProperty::property("MimeType", ids::STRING);

	/// Get the local value of the `Size` property.
	pub async fn size(&self) -> Result<u64, UaError> {
		self.node().get_member(&Self::SIZE).await
	}

	/// Locally set the value of the `Size` property.
	pub async fn set_size(&self, value: u64) -> Result<(), UaError> {
		self.node().set_member(&Self::SIZE, value).await
	}

	/// Read the value of the `Size` property from the server.
	pub async fn read_size(&self) -> Result<u64, UaError> {
		self.node().read_member(&Self::SIZE).await
	}

	/// Write a value for the `Size` property to the server.
	pub async fn write_size(&self, value: u64) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::SIZE, value).await
	}

	/// Get the `Size` property node.
	pub async fn size_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::SIZE).await
	}

	/// Get the local value of the `Writable` property.
	pub async fn writable(&self) -> Result<bool, UaError> {
		self.node().get_member(&Self::WRITABLE).await
	}

	/// Locally set the value of the `Writable` property.
	pub async fn set_writable(&self, value: bool) -> Result<(), UaError> {
		self.node().set_member(&Self::WRITABLE, value).await
	}

	/// Read the value of the `Writable` property from the server.
	pub async fn read_writable(&self) -> Result<bool, UaError> {
		self.node().read_member(&Self::WRITABLE).await
	}

	/// Write a value for the `Writable` property to the server.
	pub async fn write_writable(&self, value: bool) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::WRITABLE, value).await
	}

	/// Get the `Writable` property node.
	pub async fn writable_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::WRITABLE).await
	}

	/// Get the local value of the `UserWritable` property.
	pub async fn user_writable(&self) -> Result<bool, UaError> {
		self.node().get_member(&Self::USER_WRITABLE).await
	}

	/// Locally set the value of the `UserWritable` property.
	pub async fn set_user_writable(&self, value: bool) -> Result<(), UaError> {
		self.node().set_member(&Self::USER_WRITABLE, value).await
	}

	/// Read the value of the `UserWritable` property from the server.
	pub async fn read_user_writable(&self) -> Result<bool, UaError> {
		self.node().read_member(&Self::USER_WRITABLE).await
	}

	/// Write a value for the `UserWritable` property to the server.
	pub async fn write_user_writable(&self, value: bool) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::USER_WRITABLE, value).await
	}

	/// Get the `UserWritable` property node.
	pub async fn user_writable_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::USER_WRITABLE).await
	}

	/// Get the local value of the `OpenCount` property.
	pub async fn open_count(&self) -> Result<u16, UaError> {
		self.node().get_member(&Self::OPEN_COUNT).await
	}

	/// Locally set the value of the `OpenCount` property.
	pub async fn set_open_count(&self, value: u16) -> Result<(), UaError> {
		self.node().set_member(&Self::OPEN_COUNT, value).await
	}

	/// Read the value of the `OpenCount` property from the server.
	pub async fn read_open_count(&self) -> Result<u16, UaError> {
		self.node().read_member(&Self::OPEN_COUNT).await
	}

	/// Write a value for the `OpenCount` property to the server.
	pub async fn write_open_count(&self, value: u16) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::OPEN_COUNT, value).await
	}

	/// Get the `OpenCount` property node.
	pub async fn open_count_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::OPEN_COUNT).await
	}

	/// Get the local value of the `MimeType` property.
	pub async fn mime_type(&self) -> Result<String, UaError> {
		self.node().get_member(&Self::MIME_TYPE).await
	}

	/// Locally set the value of the `MimeType` property.
	pub async fn set_mime_type(&self, value: String) -> Result<(), UaError> {
		self.node().set_member(&Self::MIME_TYPE, value).await
	}

	/// Read the value of the `MimeType` property from the server.
	pub async fn read_mime_type(&self) -> Result<String, UaError> {
		self.node().read_member(&Self::MIME_TYPE).await
	}

	/// Write a value for the `MimeType` property to the server.
	pub async fn write_mime_type(&self, value: String) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::MIME_TYPE, value).await
	}

	/// Get the `MimeType` property node.
	pub async fn mime_type_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::MIME_TYPE).await
	}
}

/// The `TrustListType` object type, a file holding a certificate trust
/// list.
///
/// See <https://reference.opcfoundation.org/v105/Core/docs/Part12/7.8.2>.
#[derive(Debug, Clone)]
pub struct TrustListTypeNode {
	/// The supertype binding.
	base: FileTypeNode,
}

impl TypedNode for TrustListTypeNode {
	const TYPE_DEFINITION: u32 = ids::TRUST_LIST_TYPE;

	fn from_node(node: UaNode) -> Self {
		Self { base: FileTypeNode::from_node(node) }
	}

	fn node(&self) -> &UaNode {
		self.base.node()
	}
}

impl Deref for TrustListTypeNode {
	type Target = FileTypeNode;

	fn deref(&self) -> &Self::Target {
		&self.base
	}
}

impl TrustListTypeNode {
	/// The `LastUpdateTime` property, when the trust list last changed.
	pub const LAST_UPDATE_TIME: QualifiedProperty<OffsetDateTime> =
		QualifiedProperty::property("LastUpdateTime", ids::UTC_TIME);
	/// The `UpdateFrequency` property, how often the trust list should be
	/// checked for changes, in milliseconds.
	pub const UPDATE_FREQUENCY: QualifiedProperty<f64> =
		QualifiedProperty::property("UpdateFrequency", ids::DURATION);

	/// Get the local value of the `LastUpdateTime` property.
	pub async fn last_update_time(&self) -> Result<OffsetDateTime, UaError> {
		self.node().get_member(&Self::LAST_UPDATE_TIME).await
	}

	/// Locally set the value of the `LastUpdateTime` property.
	pub async fn set_last_update_time(&self, value: OffsetDateTime) -> Result<(), UaError> {
		self.node().set_member(&Self::LAST_UPDATE_TIME, value).await
	}

	/// Read the value of the `LastUpdateTime` property from the server.
	pub async fn read_last_update_time(&self) -> Result<OffsetDateTime, UaError> {
		self.node().read_member(&Self::LAST_UPDATE_TIME).await
	}

	/// Write a value for the `LastUpdateTime` property to the server.
	pub async fn write_last_update_time(
		&self,
		value: OffsetDateTime,
	) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::LAST_UPDATE_TIME, value).await
	}

	/// Get the `LastUpdateTime` property node.
	pub async fn last_update_time_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::LAST_UPDATE_TIME).await
	}

	/// Get the local value of the `UpdateFrequency` property.
	pub async fn update_frequency(&self) -> Result<f64, UaError> {
		self.node().get_member(&Self::UPDATE_FREQUENCY).await
	}

	/// Locally set the value of the `UpdateFrequency` property.
	pub async fn set_update_frequency(&self, value: f64) -> Result<(), UaError> {
		self.node().set_member(&Self::UPDATE_FREQUENCY, value).await
	}

	/// Read the value of the `UpdateFrequency` property from the server.
	pub async fn read_update_frequency(&self) -> Result<f64, UaError> {
		self.node().read_member(&Self::UPDATE_FREQUENCY).await
	}

	/// Write a value for the `UpdateFrequency` property to the server.
	pub async fn write_update_frequency(&self, value: f64) -> Result<StatusCode, UaError> {
		self.node().write_member(&Self::UPDATE_FREQUENCY, value).await
	}

	/// Get the `UpdateFrequency` property node.
	pub async fn update_frequency_node(&self) -> Result<PropertyTypeNode, UaError> {
		self.node().member_of(&Self::UPDATE_FREQUENCY).await
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use time::macros::datetime;

	use super::*;
	use crate::{
		client::{AddressSpace, ClientConfig, ReferenceKind, memory::MemorySpace},
		ua::{NodeId, QualifiedName, Variant},
	};

	async fn trust_list_space() -> (Arc<MemorySpace>, NodeId) {
		let space = Arc::new(MemorySpace::new());
		let list = NodeId::string(2, "DefaultApplicationGroup.TrustList");
		space
			.add_object(
				list.clone(),
				QualifiedName::new(0, "TrustList"),
				Some(NodeId::numeric(0, ids::TRUST_LIST_TYPE)),
			)
			.await;

		let properties: [(&str, Variant); 4] = [
			("Size", Variant::UInt64(4096)),
			("Writable", Variant::Boolean(false)),
			("OpenCount", Variant::UInt16(0)),
			(
				"LastUpdateTime",
				Variant::DateTime(datetime!(2024-03-01 12:00:00 UTC)),
			),
		];
		for (name, value) in properties {
			let id = NodeId::string(2, format!("TrustList.{name}"));
			space
				.add_variable(
					id.clone(),
					QualifiedName::new(0, name),
					Some(NodeId::numeric(0, ids::PROPERTY_TYPE)),
					value,
				)
				.await;
			space.add_member(&list, ReferenceKind::HasProperty, &id).await;
		}
		(space, list)
	}

	#[tokio::test]
	async fn test_trust_list_reads_through_file_type() {
		let (space, list) = trust_list_space().await;
		let client = AddressSpace::new(space, ClientConfig::default());
		let trust_list: TrustListTypeNode = client.typed_node(&list).await.expect("resolves");

		// Inherited FileType accessors resolve against the same node.
		assert_eq!(trust_list.read_size().await.expect("readable"), 4096);
		assert!(!trust_list.read_writable().await.expect("readable"));
		assert_eq!(
			trust_list.read_last_update_time().await.expect("readable"),
			datetime!(2024-03-01 12:00:00 UTC)
		);
	}

	#[tokio::test]
	async fn test_local_set_does_not_touch_server() {
		let (space, list) = trust_list_space().await;
		let client = AddressSpace::new(space.clone(), ClientConfig::default());
		let trust_list: TrustListTypeNode = client.typed_node(&list).await.expect("resolves");

		trust_list.set_open_count(3).await.expect("local set");
		assert_eq!(trust_list.open_count().await.expect("cached"), 3);
		// The server still holds the original value.
		let stored = space.value(&NodeId::string(2, "TrustList.OpenCount")).await;
		assert_eq!(stored, Some(Variant::UInt16(0)));
	}

	#[tokio::test]
	async fn test_write_validates_data_type() {
		let (space, list) = trust_list_space().await;
		let client = AddressSpace::new(space, ClientConfig::default());
		let trust_list: TrustListTypeNode = client.typed_node(&list).await.expect("resolves");

		// UpdateFrequency is a Duration; an array is rejected before the
		// service sees it.
		let result = trust_list
			.node()
			.write_member_variant(
				&TrustListTypeNode::UPDATE_FREQUENCY,
				Variant::Array(vec![Variant::Double(1.0)]),
			)
			.await;
		assert!(matches!(result, Err(UaError::TypeMismatch { .. })));
	}
}
