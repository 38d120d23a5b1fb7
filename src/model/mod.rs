pub mod record;
pub mod schema;
pub mod value;

pub use record::Record;
pub use schema::{Field, FieldKind, Schema, SchemaPolicy};
pub use value::Value;
