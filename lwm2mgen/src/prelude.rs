//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use lwm2mgen::prelude::*;
//! ```

// Schema types
pub use lwm2mgen_schema::{
    Cardinality, ObjectDef, Operations, ParseError, Presence, ResourceDef, SchemaError, ValueType,
    parse_object, validate_object,
};

// Generation types
pub use lwm2mgen_codegen::{
    CodegenError, Dialect, GenerateOptions, Generator, generate_from_file, generate_from_xml,
};
