//! OPC UA built-in types.
//!
//! The subset of the IEC 62541-6 built-in types needed by the client
//! information model: node identifiers, qualified names, localized text,
//! status codes, the `Variant` value union, `DataValue`, and the
//! extension-object envelope for structured values.

pub mod data_value;
pub mod extension;
pub mod ids;
pub mod node_id;
pub mod status;
pub mod variant;

pub use data_value::{AttributeId, DataValue, NodeClass};
pub use extension::{EUInformation, ExtensionObject, ExtensionObjectError, Range, UaStruct};
pub use node_id::{Identifier, LocalizedText, NodeId, NodeIdParseError, QualifiedName, UA_NAMESPACE_URI};
pub use status::StatusCode;
pub use variant::{Variant, VariantError};
