//! # lwm2mgen
//!
//! LwM2M object definition parser and Anjay skeleton generator.
//!
//! lwm2mgen reads OMA LwM2M object definitions (DDF XML) and generates
//! skeleton implementations of the Anjay data-model API, ready to be
//! filled in with device-specific state.
//!
//! ## Quick Start
//!
//! ```no_run
//! use lwm2mgen::prelude::*;
//!
//! # fn main() -> Result<(), lwm2mgen::codegen::CodegenError> {
//! let xml = std::fs::read_to_string("switch.xml")?;
//! let skeleton = generate_from_xml(&xml, &GenerateOptions::default())?;
//! print!("{skeleton}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - DDF XML parsing, object model and validation
//! - [`codegen`] - Handler planning, access patterns, C/C++ rendering

pub mod prelude;

/// DDF XML parsing and the object model.
pub mod schema {
    pub use lwm2mgen_schema::*;
}

/// Skeleton generation.
pub mod codegen {
    pub use lwm2mgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use lwm2mgen_schema::{
    Cardinality, ObjectDef, Operations, ParseError, Presence, ResourceDef, SchemaError, ValueType,
    parse_object, validate_object,
};

pub use lwm2mgen_codegen::{
    CodegenError, Dialect, GenerateOptions, Generator, generate_from_file, generate_from_xml,
};
