//! Generic client substrate the typed bindings are built on.
//!
//! The actual transport, secure channel and session machinery live in the
//! stack implementation behind the [`AttributeService`] trait; this module
//! provides the node handles, caching and error plumbing the information
//! model needs on top of it.

use std::{collections::HashMap, fmt, sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use snafu::{OptionExt as _, ResultExt as _, Snafu};
use tokio::sync::RwLock;
use tracing_error::SpanTrace;

use crate::{
    model::TypedNode,
    ua::{
        AttributeId, DataValue, ExtensionObjectError, NodeClass, NodeId, QualifiedName,
        StatusCode, Variant, VariantError, ids,
    },
};

pub mod node;

#[cfg(any(feature = "memory-space", test))]
pub mod memory;

pub use node::UaNode;

/// The reference kinds the model layer browses along when resolving member
/// nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// A `HasProperty` reference to a property node.
    HasProperty,
    /// A `HasComponent` reference to a component variable or object.
    HasComponent,
}

impl ReferenceKind {
    /// The ns=0 id of the reference type.
    #[must_use]
    pub const fn type_id(self) -> u32 {
        match self {
            ReferenceKind::HasProperty => ids::HAS_PROPERTY,
            ReferenceKind::HasComponent => ids::HAS_COMPONENT,
        }
    }
}

/// A child node reference returned by [`AttributeService::find_member`].
#[derive(Debug, Clone)]
pub struct NodeRef {
    /// The child's node id.
    pub node_id: NodeId,
    /// The child's node class.
    pub node_class: NodeClass,
    /// The child's browse name.
    pub browse_name: QualifiedName,
    /// The child's type definition, when the server exposes one.
    pub type_definition: Option<NodeId>,
}

/// The attribute and browse services the information model depends on.
///
/// Implemented by the stack's session layer; an in-memory implementation is
/// available behind the `memory-space` feature for tests.
#[async_trait]
pub trait AttributeService: fmt::Debug + Send + Sync {
    /// Read one attribute of a node.
    ///
    /// Operation-level failures are carried in the returned value's status,
    /// service-level failures in the error.
    async fn read_attribute(
        &self,
        node_id: &NodeId,
        attribute: AttributeId,
    ) -> Result<DataValue, ServiceError>;

    /// Write one attribute of a node.
    ///
    /// Operation-level failures are carried in the returned status code,
    /// service-level failures in the error.
    async fn write_attribute(
        &self,
        node_id: &NodeId,
        attribute: AttributeId,
        value: DataValue,
    ) -> Result<StatusCode, ServiceError>;

    /// Find a child of `parent` by browse name along the given reference
    /// kind. Returns `None` when no such child exists.
    async fn find_member(
        &self,
        parent: &NodeId,
        namespace_uri: &str,
        browse_name: &str,
        reference: ReferenceKind,
    ) -> Result<Option<NodeRef>, ServiceError>;
}

/// A captured span trace attached to service errors.
#[derive(Debug, Clone)]
pub struct SpanTraceWrapper(SpanTrace);

impl snafu::GenerateImplicitData for Box<SpanTraceWrapper> {
    fn generate() -> Self {
        Box::new(SpanTraceWrapper(SpanTrace::capture()))
    }
}

impl fmt::Display for SpanTraceWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.status() == tracing_error::SpanTraceStatus::CAPTURED {
            write!(f, "\nAt:\n")?;
            self.0.fmt(f)?;
        }
        Ok(())
    }
}

/// Service-level errors raised by an [`AttributeService`] implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub), context(suffix(false)))]
pub enum ServiceError {
    #[snafu(display("Service fault: {status}{context}"))]
    Fault {
        /// The service-level status code.
        status: StatusCode,
        #[snafu(implicit)]
        context: Box<SpanTraceWrapper>,
    },
    #[snafu(whatever, display("{message}{context}\n{source:?}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error + Send + Sync>, Some)))]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        #[snafu(implicit)]
        context: Box<SpanTraceWrapper>,
    },
}

/// The error type for operations on the information model.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub), context(suffix(false)))]
pub enum UaError {
    #[snafu(display("Bad status: {}", status))]
    Status {
        /// The status code the operation failed with.
        status: StatusCode,
    },
    #[snafu(display("Service call timed out after {:?}", timeout))]
    Timeout {
        /// The configured request timeout.
        timeout: Duration,
    },
    #[snafu(display("No such member: {}", browse_name))]
    MemberNotFound {
        /// The browse name that did not resolve.
        browse_name: String,
    },
    /// The node has no locally cached value yet.
    NoValue,
    /// The attribute carried no value.
    MissingValue,
    #[snafu(display("Value conversion failed for {}", name))]
    Convert {
        /// The member or attribute whose value did not convert.
        name: String,
        /// The underlying conversion error.
        source: VariantError,
    },
    #[snafu(display("Structure codec failed for {}", name))]
    Codec {
        /// The member whose structure did not encode or decode.
        name: String,
        /// The underlying codec error.
        source: ExtensionObjectError,
    },
    #[snafu(display("Type mismatch writing {}", name))]
    TypeMismatch {
        /// The member the rejected value was destined for.
        name: String,
    },
    /// Error in the attribute service.
    #[snafu(context(false))]
    Service {
        /// The underlying service error.
        source: ServiceError,
    },
}

/// Client-side configuration for the model layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// The timeout applied to every service call made by the node layer.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Duration,
}

/// The default [`ClientConfig::request_timeout`].
fn default_request_timeout() -> Duration {
    Duration::from_secs(5)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { request_timeout: default_request_timeout() }
    }
}

/// The shared handle every node hangs off: the service plus the
/// configuration governing calls to it.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

/// Shared state behind a [`Session`].
#[derive(Debug)]
struct SessionInner {
    /// The attribute service implementation.
    service: Arc<dyn AttributeService>,
    /// The client configuration.
    config: ClientConfig,
}

impl Session {
    /// Create a session over a service implementation.
    #[must_use]
    pub fn new(service: Arc<dyn AttributeService>, config: ClientConfig) -> Self {
        Self { inner: Arc::new(SessionInner { service, config }) }
    }

    /// Run a service call under the configured request timeout.
    async fn call<T>(
        &self,
        call: impl Future<Output = Result<T, ServiceError>> + Send,
    ) -> Result<T, UaError> {
        let timeout = self.inner.config.request_timeout;
        match tokio::time::timeout(timeout, call).await {
            Ok(result) => result.map_err(Into::into),
            Err(_) => Timeout { timeout }.fail(),
        }
    }

    pub(crate) async fn read_attribute(
        &self,
        node_id: &NodeId,
        attribute: AttributeId,
    ) -> Result<DataValue, UaError> {
        self.call(self.inner.service.read_attribute(node_id, attribute)).await
    }

    pub(crate) async fn write_attribute(
        &self,
        node_id: &NodeId,
        attribute: AttributeId,
        value: DataValue,
    ) -> Result<StatusCode, UaError> {
        self.call(self.inner.service.write_attribute(node_id, attribute, value)).await
    }

    pub(crate) async fn find_member(
        &self,
        parent: &NodeId,
        namespace_uri: &str,
        browse_name: &str,
        reference: ReferenceKind,
    ) -> Result<Option<NodeRef>, UaError> {
        self.call(self.inner.service.find_member(parent, namespace_uri, browse_name, reference))
            .await
    }
}

/// Extract the variant out of a [`DataValue`], surfacing a bad status as an
/// error.
pub(crate) fn good_value(value: DataValue) -> Result<Variant, UaError> {
    if value.status.is_bad() {
        return Status { status: value.status }.fail();
    }
    value.value.context(MissingValue)
}

/// The client-side view of a server address space.
///
/// Resolves node ids into shared [`UaNode`] handles; handles are created on
/// first access and cached for the life of the address space.
#[derive(Debug)]
pub struct AddressSpace {
    /// The session node handles are created over.
    session: Session,
    /// Materialized node handles by node id.
    nodes: RwLock<HashMap<NodeId, UaNode>>,
}

impl AddressSpace {
    /// Create an address space over a service implementation.
    #[must_use]
    pub fn new(service: Arc<dyn AttributeService>, config: ClientConfig) -> Self {
        Self { session: Session::new(service, config), nodes: RwLock::new(HashMap::new()) }
    }

    /// Get the node handle for a node id, materializing it on first access.
    ///
    /// Materialization reads the node's browse name and node class from the
    /// server.
    pub async fn node(&self, node_id: &NodeId) -> Result<UaNode, UaError> {
        if let Some(node) = self.nodes.read().await.get(node_id) {
            return Ok(node.clone());
        }

        let browse_name: QualifiedName =
            good_value(self.session.read_attribute(node_id, AttributeId::BrowseName).await?)?
                .try_into()
                .context(Convert { name: "BrowseName" })?;
        let node_class: i32 =
            good_value(self.session.read_attribute(node_id, AttributeId::NodeClass).await?)?
                .try_into()
                .context(Convert { name: "NodeClass" })?;
        let node_class =
            NodeClass::try_from(node_class).context(Convert { name: "NodeClass" })?;

        let node =
            UaNode::new(self.session.clone(), node_id.clone(), node_class, browse_name, None);
        Ok(self.nodes.write().await.entry(node_id.clone()).or_insert(node).clone())
    }

    /// Get the node handle for a node id as a typed binding.
    pub async fn typed_node<T: TypedNode>(&self, node_id: &NodeId) -> Result<T, UaError> {
        Ok(T::from_node(self.node(node_id).await?))
    }
}
