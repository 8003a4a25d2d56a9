/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Generic model base: set/get, request building, execution, decoding
pub mod base;
/// Field descriptors, directions and types
pub mod field;
/// Per-model field registries
pub mod registry;
/// Endpoint and built request
pub mod request;
/// Tagged field values and coercion
pub mod value;

pub use base::{ModelBase, ModelDefinition, ModelState};
pub use field::{Direction, FieldDescriptor, FieldType};
pub use registry::FieldRegistry;
pub use request::{Endpoint, ModelRequest};
pub use value::{DecimalString, FieldValue};
