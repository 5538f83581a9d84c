//! Schema inference module
//!
//! Infers a typed schema for a collection of heterogeneous JSON records.
//!
//! # Features
//!
//! - **Example Extraction**: One representative value per field across a record set
//! - **Type Inference**: Scalars, dates, lists and nested object types
//! - **Cross-References**: Mapped fields, `___NODE` links and file paths resolve to other records
//! - **Dependency Tracking**: Reference resolvers record which page read which record
//! - **Schema Output**: SDL and JSON renderings

mod builder;
mod date_field;
mod extract;
mod inference;
mod links;
mod naming;
mod printer;
mod types;

pub use builder::{build_schema, Schema, SchemaBuilder};
pub use date_field::date_field;
pub use extract::ExampleExtractor;
pub use inference::{infer_fields, SchemaInferrer};
pub use naming::{field_key, TypeNames};
pub use printer::{describe, print_object, print_schema};
pub use types::{
    ArgumentDef, FieldDescriptor, FieldMap, FieldType, KnownType, ObjectType, ResolveArgs,
    ResolveContext, Resolver, ScalarType,
};

#[cfg(test)]
mod tests;
