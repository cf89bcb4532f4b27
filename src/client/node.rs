//! Client-side node handles and the access primitives every typed binding
//! funnels through.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock as StdRwLock},
};

use snafu::{OptionExt as _, ResultExt as _};
use tokio::sync::RwLock;
use tracing::instrument;

use crate::{
    client::{
        Codec, Convert, MemberNotFound, MissingValue, NoValue, ReferenceKind, Session, Status,
        TypeMismatch, UaError,
    },
    model::{QualifiedProperty, TypedNode},
    ua::{
        AttributeId, DataValue, ExtensionObject, NodeClass, NodeId, QualifiedName, StatusCode,
        UaStruct, Variant, VariantError,
    },
};

/// A shared handle to a node in the server address space.
///
/// Handles are cheap to clone. Each handle caches the last seen `Value` and
/// the member nodes resolved through it; member resolution happens at most
/// once per browse name for the life of the handle.
#[derive(Debug, Clone)]
pub struct UaNode {
    /// Shared state of the handle.
    inner: Arc<NodeInner>,
}

/// State shared between clones of a [`UaNode`].
#[derive(Debug)]
struct NodeInner {
    /// The session the node was resolved through.
    session: Session,
    /// The node's identifier.
    node_id: NodeId,
    /// The node's class.
    node_class: NodeClass,
    /// The node's browse name.
    browse_name: QualifiedName,
    /// The node's type definition, when known.
    type_definition: Option<NodeId>,
    /// The last seen `Value` attribute.
    value: StdRwLock<Option<DataValue>>,
    /// Member nodes resolved through this node, by namespace URI and name.
    members: RwLock<HashMap<(String, String), UaNode>>,
}

impl UaNode {
    /// Create a handle over a session.
    pub(crate) fn new(
        session: Session,
        node_id: NodeId,
        node_class: NodeClass,
        browse_name: QualifiedName,
        type_definition: Option<NodeId>,
    ) -> Self {
        Self {
            inner: Arc::new(NodeInner {
                session,
                node_id,
                node_class,
                browse_name,
                type_definition,
                value: StdRwLock::new(None),
                members: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// The node's identifier.
    #[must_use]
    pub fn node_id(&self) -> &NodeId {
        &self.inner.node_id
    }

    /// The node's class.
    #[must_use]
    pub fn node_class(&self) -> NodeClass {
        self.inner.node_class
    }

    /// The node's browse name.
    #[must_use]
    pub fn browse_name(&self) -> &QualifiedName {
        &self.inner.browse_name
    }

    /// The node's type definition, when the server exposed one.
    #[must_use]
    pub fn type_definition(&self) -> Option<&NodeId> {
        self.inner.type_definition.as_ref()
    }

    /// The last seen `Value` attribute, if any.
    #[must_use]
    pub fn cached_value(&self) -> Option<DataValue> {
        self.inner.value.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Replace the locally cached `Value` attribute. No wire traffic.
    pub fn set_cached_value(&self, value: DataValue) {
        *self.inner.value.write().unwrap_or_else(PoisonError::into_inner) = Some(value);
    }

    /// Read the `Value` attribute from the server, updating the local cache
    /// on success.
    #[instrument(skip(self), fields(node = %self.inner.node_id))]
    pub async fn read_value(&self) -> Result<DataValue, UaError> {
        let value =
            self.inner.session.read_attribute(&self.inner.node_id, AttributeId::Value).await?;
        if value.status.is_bad() {
            return Status { status: value.status }.fail();
        }
        self.set_cached_value(value.clone());
        Ok(value)
    }

    /// Write the `Value` attribute to the server, updating the local cache
    /// when the server accepts the value.
    #[instrument(skip(self, value), fields(node = %self.inner.node_id))]
    pub async fn write_value(&self, value: DataValue) -> Result<StatusCode, UaError> {
        let status = self
            .inner
            .session
            .write_attribute(&self.inner.node_id, AttributeId::Value, value.clone())
            .await?;
        if status.is_bad() {
            return Status { status }.fail();
        }
        self.set_cached_value(value);
        Ok(status)
    }

    /// Read an arbitrary attribute from the server. Does not touch the
    /// value cache.
    pub async fn read_attribute(&self, attribute: AttributeId) -> Result<DataValue, UaError> {
        self.inner.session.read_attribute(&self.inner.node_id, attribute).await
    }

    /// Write an arbitrary attribute to the server. Does not touch the value
    /// cache.
    pub async fn write_attribute(
        &self,
        attribute: AttributeId,
        value: DataValue,
    ) -> Result<StatusCode, UaError> {
        self.inner.session.write_attribute(&self.inner.node_id, attribute, value).await
    }

    /// Resolve a child node by browse name, creating the handle on first
    /// access and caching it for subsequent calls.
    #[instrument(skip(self), fields(node = %self.inner.node_id))]
    pub async fn member_node(
        &self,
        namespace_uri: &str,
        browse_name: &str,
        reference: ReferenceKind,
    ) -> Result<UaNode, UaError> {
        let key = (namespace_uri.to_owned(), browse_name.to_owned());
        if let Some(member) = self.inner.members.read().await.get(&key) {
            return Ok(member.clone());
        }

        let resolved = self
            .inner
            .session
            .find_member(&self.inner.node_id, namespace_uri, browse_name, reference)
            .await?
            .context(MemberNotFound { browse_name })?;
        let member = UaNode::new(
            self.inner.session.clone(),
            resolved.node_id,
            resolved.node_class,
            resolved.browse_name,
            resolved.type_definition,
        );
        // Keep the first resolution if another task won the race.
        Ok(self.inner.members.write().await.entry(key).or_insert(member).clone())
    }

    /// Resolve the member node a property descriptor points at.
    async fn property_node<T>(&self, property: &QualifiedProperty<T>) -> Result<UaNode, UaError> {
        self.member_node(property.namespace_uri, property.browse_name, property.reference).await
    }

    /// Resolve a member node and hand it back as a typed binding.
    pub async fn member_of<N, T>(&self, property: &QualifiedProperty<T>) -> Result<N, UaError>
    where
        N: TypedNode,
    {
        let node = self.property_node(property).await?;
        if let Some(definition) = node.type_definition() {
            if definition != &NodeId::numeric(0, N::TYPE_DEFINITION) {
                tracing::debug!(
                    node = %node.node_id(),
                    expected = N::TYPE_DEFINITION,
                    "member type definition differs from the binding"
                );
            }
        }
        Ok(N::from_node(node))
    }

    /// Get the locally cached value of a member.
    pub async fn get_member<T>(&self, property: &QualifiedProperty<T>) -> Result<T, UaError>
    where
        T: TryFrom<Variant, Error = VariantError>,
    {
        self.get_member_variant(property)
            .await?
            .try_into()
            .context(Convert { name: property.browse_name })
    }

    /// Locally set the value of a member. No wire traffic beyond member
    /// resolution.
    pub async fn set_member<T>(
        &self,
        property: &QualifiedProperty<T>,
        value: T,
    ) -> Result<(), UaError>
    where
        T: Into<Variant> + Send,
    {
        self.set_member_variant(property, value.into()).await
    }

    /// Read the value of a member from the server.
    pub async fn read_member<T>(&self, property: &QualifiedProperty<T>) -> Result<T, UaError>
    where
        T: TryFrom<Variant, Error = VariantError>,
    {
        self.read_member_variant(property)
            .await?
            .try_into()
            .context(Convert { name: property.browse_name })
    }

    /// Write the value of a member to the server, validating it against the
    /// descriptor first.
    pub async fn write_member<T>(
        &self,
        property: &QualifiedProperty<T>,
        value: T,
    ) -> Result<StatusCode, UaError>
    where
        T: Into<Variant> + Send,
    {
        self.write_member_variant(property, value.into()).await
    }

    /// Get the locally cached value of a member, untyped.
    pub async fn get_member_variant<T>(
        &self,
        property: &QualifiedProperty<T>,
    ) -> Result<Variant, UaError> {
        let node = self.property_node(property).await?;
        node.cached_value().context(NoValue)?.value.context(NoValue)
    }

    /// Locally set the value of a member, untyped.
    pub async fn set_member_variant<T>(
        &self,
        property: &QualifiedProperty<T>,
        value: Variant,
    ) -> Result<(), UaError> {
        let node = self.property_node(property).await?;
        node.set_cached_value(DataValue::value_only(value));
        Ok(())
    }

    /// Read the value of a member from the server, untyped.
    pub async fn read_member_variant<T>(
        &self,
        property: &QualifiedProperty<T>,
    ) -> Result<Variant, UaError> {
        let node = self.property_node(property).await?;
        node.read_value().await?.value.context(MissingValue)
    }

    /// Write the value of a member to the server, untyped but still
    /// validated against the descriptor.
    pub async fn write_member_variant<T>(
        &self,
        property: &QualifiedProperty<T>,
        value: Variant,
    ) -> Result<StatusCode, UaError> {
        if !value.type_matches(property.data_type, property.value_rank) {
            return TypeMismatch { name: property.browse_name }.fail();
        }
        let node = self.property_node(property).await?;
        node.write_value(DataValue::value_only(value)).await
    }

    /// Get the locally cached value of a structure-valued member.
    pub async fn get_member_struct<T>(&self, property: &QualifiedProperty<T>) -> Result<T, UaError>
    where
        T: UaStruct,
    {
        decode_struct(self.get_member_variant(property).await?, property.browse_name)
    }

    /// Locally set the value of a structure-valued member.
    pub async fn set_member_struct<T>(
        &self,
        property: &QualifiedProperty<T>,
        value: &T,
    ) -> Result<(), UaError>
    where
        T: UaStruct + Sync,
    {
        let envelope =
            ExtensionObject::encode(value).context(Codec { name: property.browse_name })?;
        self.set_member_variant(property, envelope.into()).await
    }

    /// Read the value of a structure-valued member from the server.
    pub async fn read_member_struct<T>(
        &self,
        property: &QualifiedProperty<T>,
    ) -> Result<T, UaError>
    where
        T: UaStruct,
    {
        decode_struct(self.read_member_variant(property).await?, property.browse_name)
    }

    /// Write the value of a structure-valued member to the server.
    pub async fn write_member_struct<T>(
        &self,
        property: &QualifiedProperty<T>,
        value: &T,
    ) -> Result<StatusCode, UaError>
    where
        T: UaStruct + Sync,
    {
        let envelope =
            ExtensionObject::encode(value).context(Codec { name: property.browse_name })?;
        self.write_member_variant(property, envelope.into()).await
    }
}

/// Decode a structure out of an extension-object variant.
fn decode_struct<T: UaStruct>(variant: Variant, name: &str) -> Result<T, UaError> {
    let envelope: ExtensionObject = variant.try_into().context(Convert { name })?;
    envelope.decode().context(Codec { name })
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use super::*;
    use crate::{
        client::{AddressSpace, AttributeService, ClientConfig, NodeRef, ServiceError, memory::MemorySpace},
        ua::ids,
    };

    /// A service that never answers, for timeout tests.
    #[derive(Debug)]
    struct StalledService;

    #[async_trait::async_trait]
    impl AttributeService for StalledService {
        async fn read_attribute(
            &self,
            _node_id: &NodeId,
            _attribute: AttributeId,
        ) -> Result<DataValue, ServiceError> {
            std::future::pending().await
        }

        async fn write_attribute(
            &self,
            _node_id: &NodeId,
            _attribute: AttributeId,
            _value: DataValue,
        ) -> Result<StatusCode, ServiceError> {
            std::future::pending().await
        }

        async fn find_member(
            &self,
            _parent: &NodeId,
            _namespace_uri: &str,
            _browse_name: &str,
            _reference: ReferenceKind,
        ) -> Result<Option<NodeRef>, ServiceError> {
            std::future::pending().await
        }
    }

    async fn mode_space() -> (Arc<MemorySpace>, NodeId) {
        let space = Arc::new(MemorySpace::new());
        let id = NodeId::numeric(2, 7);
        space
            .add_variable(
                id.clone(),
                QualifiedName::new(0, "Mode"),
                None,
                Variant::from("auto"),
            )
            .await;
        (space, id)
    }

    #[tokio::test(start_paused = true)]
    async fn test_request_timeout() {
        let config = ClientConfig { request_timeout: Duration::from_millis(100) };
        let client = AddressSpace::new(Arc::new(StalledService), config);
        let result = client.node(&NodeId::numeric(2, 1)).await;
        assert!(matches!(result, Err(UaError::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_unknown_node_surfaces_status() {
        let space = Arc::new(MemorySpace::new());
        let client = AddressSpace::new(space, ClientConfig::default());
        let result = client.node(&NodeId::numeric(2, 99)).await;
        assert!(
            matches!(result, Err(UaError::Status { status }) if status == StatusCode::BAD_NODE_ID_UNKNOWN)
        );
    }

    #[tokio::test]
    async fn test_address_space_shares_handles() {
        let (space, id) = mode_space().await;
        let client = AddressSpace::new(space, ClientConfig::default());
        let first = client.node(&id).await.expect("resolves");
        let second = client.node(&id).await.expect("resolves");

        first.set_cached_value(DataValue::value_only(Variant::Boolean(true)));
        // Both handles share the same cache.
        assert!(second.cached_value().is_some());
    }

    #[tokio::test]
    async fn test_failed_write_leaves_cache_untouched() {
        let (space, id) = mode_space().await;
        space.set_access(&id, true, false).await;
        let client = AddressSpace::new(space.clone(), ClientConfig::default());
        let node = client.node(&id).await.expect("resolves");
        node.read_value().await.expect("readable");

        let result = node.write_value(DataValue::value_only(Variant::from("manual"))).await;
        assert!(
            matches!(result, Err(UaError::Status { status }) if status == StatusCode::BAD_NOT_WRITABLE)
        );
        assert_eq!(node.cached_value().expect("cached").value, Some(Variant::from("auto")));
        assert_eq!(space.value(&id).await, Some(Variant::from("auto")));
    }

    const MODE: QualifiedProperty<String> = QualifiedProperty::property("Mode", ids::STRING);

    #[tokio::test]
    async fn test_write_member_checks_descriptor() {
        let (space, id) = mode_space().await;
        let client = AddressSpace::new(space.clone(), ClientConfig::default());
        let node = client.node(&id).await.expect("resolves");

        // The descriptor says String; a boolean is rejected locally.
        let result = node.write_member_variant(&MODE, Variant::Boolean(true)).await;
        assert!(matches!(result, Err(UaError::TypeMismatch { .. })));
        // Nothing reached the service, so no member lookup happened either
        // before the mismatch was detected.
        assert_eq!(space.value(&id).await, Some(Variant::from("auto")));
    }
}
