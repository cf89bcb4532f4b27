//! A programmable in-memory [`AttributeService`].
//!
//! Useful for writing tests where it is not appropriate to be running a real
//! server, and for embedding small static address spaces.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::{
    client::{AttributeService, NodeRef, ReferenceKind, ServiceError},
    ua::{
        AttributeId, DataValue, NodeClass, NodeId, QualifiedName, StatusCode, UA_NAMESPACE_URI,
        Variant,
    },
};

/// An in-memory address space implementing [`AttributeService`].
#[derive(Debug)]
pub struct MemorySpace {
    /// The namespace table; index 0 is the standard namespace.
    namespaces: RwLock<Vec<String>>,
    /// The stored nodes by node id.
    nodes: RwLock<HashMap<NodeId, MemoryNode>>,
    /// How many member lookups have been served, for cache assertions.
    find_member_calls: AtomicUsize,
}

/// A stored node.
#[derive(Debug)]
struct MemoryNode {
    /// The node's class.
    node_class: NodeClass,
    /// The node's browse name.
    browse_name: QualifiedName,
    /// The node's type definition.
    type_definition: Option<NodeId>,
    /// The node's `Value` attribute, for variable nodes.
    value: Option<DataValue>,
    /// Whether the value may be read.
    readable: bool,
    /// Whether the value may be written.
    writable: bool,
    /// Children reachable from this node.
    members: Vec<(ReferenceKind, NodeId)>,
}

impl MemorySpace {
    /// Create an empty space containing only the standard namespace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespaces: RwLock::new(vec![UA_NAMESPACE_URI.to_owned()]),
            nodes: RwLock::new(HashMap::new()),
            find_member_calls: AtomicUsize::new(0),
        }
    }

    /// Register a namespace URI, returning its index. Registering the same
    /// URI twice returns the existing index.
    pub async fn register_namespace(&self, uri: &str) -> u16 {
        let mut namespaces = self.namespaces.write().await;
        if let Some(index) = namespaces.iter().position(|ns| ns == uri) {
            return index as u16;
        }
        namespaces.push(uri.to_owned());
        (namespaces.len() - 1) as u16
    }

    /// Add an object node.
    pub async fn add_object(
        &self,
        node_id: NodeId,
        browse_name: QualifiedName,
        type_definition: Option<NodeId>,
    ) {
        self.nodes.write().await.insert(
            node_id,
            MemoryNode {
                node_class: NodeClass::Object,
                browse_name,
                type_definition,
                value: None,
                readable: true,
                writable: false,
                members: Vec::new(),
            },
        );
    }

    /// Add a variable node with an initial value.
    pub async fn add_variable(
        &self,
        node_id: NodeId,
        browse_name: QualifiedName,
        type_definition: Option<NodeId>,
        value: Variant,
    ) {
        self.nodes.write().await.insert(
            node_id,
            MemoryNode {
                node_class: NodeClass::Variable,
                browse_name,
                type_definition,
                value: Some(DataValue {
                    source_timestamp: Some(OffsetDateTime::now_utc()),
                    ..DataValue::value_only(value)
                }),
                readable: true,
                writable: true,
                members: Vec::new(),
            },
        );
    }

    /// Link an existing child under an existing parent.
    pub async fn add_member(&self, parent: &NodeId, reference: ReferenceKind, child: &NodeId) {
        let mut nodes = self.nodes.write().await;
        if let Some(parent) = nodes.get_mut(parent) {
            parent.members.push((reference, child.clone()));
        } else {
            tracing::warn!(parent = %parent, "member added under an unknown parent");
        }
    }

    /// Change the access level of a stored node's value.
    pub async fn set_access(&self, node_id: &NodeId, readable: bool, writable: bool) {
        if let Some(node) = self.nodes.write().await.get_mut(node_id) {
            node.readable = readable;
            node.writable = writable;
        }
    }

    /// The server-side value of a stored node, for test assertions.
    pub async fn value(&self, node_id: &NodeId) -> Option<Variant> {
        self.nodes.read().await.get(node_id).and_then(|node| node.value.clone())?.value
    }

    /// How many member lookups have been served.
    #[must_use]
    pub fn find_member_calls(&self) -> usize {
        self.find_member_calls.load(Ordering::Relaxed)
    }
}

impl Default for MemorySpace {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AttributeService for MemorySpace {
    async fn read_attribute(
        &self,
        node_id: &NodeId,
        attribute: AttributeId,
    ) -> Result<DataValue, ServiceError> {
        let nodes = self.nodes.read().await;
        let Some(node) = nodes.get(node_id) else {
            return Ok(DataValue::status_only(StatusCode::BAD_NODE_ID_UNKNOWN));
        };
        let mut value = match attribute {
            AttributeId::NodeId => DataValue::value_only(Variant::NodeId(node_id.clone())),
            AttributeId::NodeClass => {
                DataValue::value_only(Variant::Int32(node.node_class as i32))
            }
            AttributeId::BrowseName => {
                DataValue::value_only(Variant::QualifiedName(node.browse_name.clone()))
            }
            AttributeId::Value if !node.readable => {
                DataValue::status_only(StatusCode::BAD_NOT_READABLE)
            }
            AttributeId::Value => node.value.clone().unwrap_or_default(),
            _ => DataValue::status_only(StatusCode::BAD_ATTRIBUTE_ID_INVALID),
        };
        value.server_timestamp = Some(OffsetDateTime::now_utc());
        Ok(value)
    }

    async fn write_attribute(
        &self,
        node_id: &NodeId,
        attribute: AttributeId,
        value: DataValue,
    ) -> Result<StatusCode, ServiceError> {
        let mut nodes = self.nodes.write().await;
        let Some(node) = nodes.get_mut(node_id) else {
            return Ok(StatusCode::BAD_NODE_ID_UNKNOWN);
        };
        if attribute != AttributeId::Value {
            return Ok(StatusCode::BAD_ATTRIBUTE_ID_INVALID);
        }
        if !node.writable {
            return Ok(StatusCode::BAD_NOT_WRITABLE);
        }
        node.value =
            Some(DataValue { source_timestamp: Some(OffsetDateTime::now_utc()), ..value });
        Ok(StatusCode::GOOD)
    }

    async fn find_member(
        &self,
        parent: &NodeId,
        namespace_uri: &str,
        browse_name: &str,
        reference: ReferenceKind,
    ) -> Result<Option<NodeRef>, ServiceError> {
        self.find_member_calls.fetch_add(1, Ordering::Relaxed);
        let namespaces = self.namespaces.read().await;
        let Some(index) = namespaces.iter().position(|ns| ns == namespace_uri) else {
            return Ok(None);
        };
        let index = index as u16;

        let nodes = self.nodes.read().await;
        let Some(parent) = nodes.get(parent) else {
            return Ok(None);
        };
        for (kind, child_id) in &parent.members {
            if *kind != reference {
                continue;
            }
            let Some(child) = nodes.get(child_id) else {
                continue;
            };
            if child.browse_name.namespace == index && child.browse_name.name == browse_name {
                return Ok(Some(NodeRef {
                    node_id: child_id.clone(),
                    node_class: child.node_class,
                    browse_name: child.browse_name.clone(),
                    type_definition: child.type_definition.clone(),
                }));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_metadata_attributes() {
        let space = MemorySpace::new();
        space
            .add_variable(
                NodeId::numeric(2, 1),
                QualifiedName::new(0, "Size"),
                None,
                Variant::UInt64(42),
            )
            .await;

        let browse_name = space
            .read_attribute(&NodeId::numeric(2, 1), AttributeId::BrowseName)
            .await
            .unwrap();
        assert_eq!(
            browse_name.value,
            Some(Variant::QualifiedName(QualifiedName::new(0, "Size")))
        );
        let class =
            space.read_attribute(&NodeId::numeric(2, 1), AttributeId::NodeClass).await.unwrap();
        assert_eq!(class.value, Some(Variant::Int32(2)));
    }

    #[tokio::test]
    async fn test_unknown_node_status() {
        let space = MemorySpace::new();
        let value =
            space.read_attribute(&NodeId::numeric(2, 99), AttributeId::Value).await.unwrap();
        assert_eq!(value.status, StatusCode::BAD_NODE_ID_UNKNOWN);
        let status = space
            .write_attribute(
                &NodeId::numeric(2, 99),
                AttributeId::Value,
                DataValue::value_only(Variant::Boolean(true)),
            )
            .await
            .unwrap();
        assert_eq!(status, StatusCode::BAD_NODE_ID_UNKNOWN);
    }

    #[tokio::test]
    async fn test_access_levels_enforced() {
        let space = MemorySpace::new();
        let id = NodeId::string(2, "locked");
        space
            .add_variable(id.clone(), QualifiedName::new(0, "Locked"), None, Variant::Boolean(true))
            .await;
        space.set_access(&id, false, false).await;

        let value = space.read_attribute(&id, AttributeId::Value).await.unwrap();
        assert_eq!(value.status, StatusCode::BAD_NOT_READABLE);
        let status = space
            .write_attribute(&id, AttributeId::Value, DataValue::value_only(Variant::Boolean(false)))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::BAD_NOT_WRITABLE);
    }

    #[tokio::test]
    async fn test_register_namespace_dedupes() {
        let space = MemorySpace::new();
        let first = space.register_namespace("urn:test").await;
        let second = space.register_namespace("urn:test").await;
        assert_eq!(first, 1);
        assert_eq!(second, 1);
    }
}
