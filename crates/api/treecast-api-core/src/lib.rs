//! treecast-api-core: socket value model and coercion rules (core, host-agnostic)

pub mod coercion;
pub mod value;

pub use coercion::{coerce, CoercionError, TypeTag};
pub use value::{Value, ValueKind};
