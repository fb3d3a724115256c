//! # lwm2mgen Schema
//!
//! LwM2M object definition parser and data model.
//!
//! This crate provides:
//! - DDF XML parsing of OMA LwM2M object definitions
//! - Typed object and resource definitions
//! - Definition validation

pub mod error;
pub mod object;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use object::{ObjectDef, ResourceDef, sanitize_macro_name};
pub use parser::parse_object;
pub use types::{Cardinality, Operations, Presence, ValueType};
pub use validation::validate_object;
