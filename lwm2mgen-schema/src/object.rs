//! LwM2M object and resource definitions.
//!
//! The structures in this module are the parsed, immutable form of an
//! OMA DDF object definition.  All code generation decisions are driven
//! by the predicates defined here.

use crate::types::{Cardinality, Operations, Presence, ValueType};

/// A single resource definition within an LwM2M object.
#[derive(Debug, Clone)]
pub struct ResourceDef {
    /// Resource ID.
    pub rid: u16,
    /// Human-readable resource name.
    pub name: String,
    /// Allowed operations.
    pub operations: Operations,
    /// Single- or multiple-instance resource.
    pub cardinality: Cardinality,
    /// Mandatory or optional resource.
    pub presence: Presence,
    /// Value type; `None` when the DDF `Type` element is absent or
    /// empty (legal for execute-only resources).
    pub kind: Option<ValueType>,
    /// Raw range/enumeration text, `"N/A"` when not given.
    pub range_enumeration: String,
    /// Units text, `"N/A"` when not given.
    pub units: String,
    /// Raw description text.
    pub description: String,
}

impl ResourceDef {
    /// Creates a resource definition with default optional fields.
    #[must_use]
    pub fn new(
        rid: u16,
        name: String,
        operations: Operations,
        cardinality: Cardinality,
        presence: Presence,
    ) -> Self {
        Self {
            rid,
            name,
            operations,
            cardinality,
            presence,
            kind: None,
            range_enumeration: "N/A".to_string(),
            units: "N/A".to_string(),
            description: String::new(),
        }
    }

    /// Returns true if the resource supports Read.
    #[must_use]
    pub const fn is_readable(&self) -> bool {
        self.operations.read
    }

    /// Returns true if the resource supports Write.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        self.operations.write
    }

    /// Returns true if the resource supports Execute.
    #[must_use]
    pub const fn is_executable(&self) -> bool {
        self.operations.execute
    }

    /// Returns true for a multiple-instance resource.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        self.cardinality.is_multiple()
    }

    /// Returns the C macro name for this resource ID, derived from the
    /// resource name: `RID_` + upper-cased name with every run of
    /// non-alphanumeric characters collapsed to a single underscore.
    #[must_use]
    pub fn macro_name(&self) -> String {
        sanitize_macro_name(&format!("RID_{}", self.name.to_uppercase()))
    }

    /// Returns the value type label used in generated comments,
    /// `"N/A"` when the resource has no declared type.
    #[must_use]
    pub fn type_label(&self) -> &str {
        self.kind.map_or("N/A", |kind| kind.ddf_name())
    }
}

/// A complete LwM2M object definition.
#[derive(Debug, Clone)]
pub struct ObjectDef {
    /// Object ID.
    pub oid: u16,
    /// Human-readable object name.
    pub name: String,
    /// Object URN, empty when not given.
    pub urn: String,
    /// Single- or multiple-instance object.
    pub cardinality: Cardinality,
    /// Mandatory or optional object.
    pub presence: Presence,
    /// Raw description text (DDF `Description1`).
    pub description: String,
    /// Resource definitions, sorted ascending by resource ID.
    pub resources: Vec<ResourceDef>,
}

impl ObjectDef {
    /// Creates an object definition with no resources.
    #[must_use]
    pub fn new(oid: u16, name: String, cardinality: Cardinality, presence: Presence) -> Self {
        Self {
            oid,
            name,
            urn: String::new(),
            cardinality,
            presence,
            description: String::new(),
            resources: Vec::new(),
        }
    }

    /// Returns true for a multiple-instance object.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        self.cardinality.is_multiple()
    }

    /// Returns the object name in snake case, as used for generated C
    /// identifiers (lowercase, spaces turned into underscores).
    #[must_use]
    pub fn name_snake(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }

    /// Returns true if any resource supports Read.
    #[must_use]
    pub fn has_any_readable_resources(&self) -> bool {
        self.resources.iter().any(|res| res.is_readable())
    }

    /// Returns true if any resource supports Write.
    #[must_use]
    pub fn has_any_writable_resources(&self) -> bool {
        self.resources.iter().any(|res| res.is_writable())
    }

    /// Returns true if any resource supports Execute.
    #[must_use]
    pub fn has_any_executable_resources(&self) -> bool {
        self.resources.iter().any(|res| res.is_executable())
    }

    /// Returns true if any resource is multiple-instance.
    #[must_use]
    pub fn has_any_multiple_resources(&self) -> bool {
        self.resources.iter().any(|res| res.is_multiple())
    }

    /// Returns true if the generated object needs an instance reset
    /// handler: every multiple-instance object has one, and so does any
    /// object with at least one writable resource.
    #[must_use]
    pub fn needs_instance_reset_handler(&self) -> bool {
        self.is_multiple() || self.has_any_writable_resources()
    }
}

/// Collapses a string into a valid C macro name: every run of
/// non-alphanumeric characters becomes a single underscore, and leading
/// and trailing underscores are stripped.
#[must_use]
pub fn sanitize_macro_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sep = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    out.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(rid: u16, name: &str, ops: &str) -> ResourceDef {
        ResourceDef::new(
            rid,
            name.to_string(),
            Operations::parse(ops).unwrap(),
            Cardinality::Single,
            Presence::Optional,
        )
    }

    #[test]
    fn test_sanitize_macro_name() {
        assert_eq!(sanitize_macro_name("RID_SENSOR VALUE"), "RID_SENSOR_VALUE");
        assert_eq!(sanitize_macro_name("RID_ON/OFF"), "RID_ON_OFF");
        assert_eq!(sanitize_macro_name("RID_RESET!"), "RID_RESET");
        assert_eq!(sanitize_macro_name("__X__"), "X");
        assert_eq!(sanitize_macro_name("A - B"), "A_B");
    }

    #[test]
    fn test_resource_macro_name() {
        assert_eq!(resource(5700, "Sensor Value", "R").macro_name(), "RID_SENSOR_VALUE");
        assert_eq!(resource(5850, "On/Off", "RW").macro_name(), "RID_ON_OFF");
        assert_eq!(
            resource(5605, "Reset Min and Max Measured Values", "E").macro_name(),
            "RID_RESET_MIN_AND_MAX_MEASURED_VALUES"
        );
    }

    #[test]
    fn test_resource_type_label() {
        let mut res = resource(1, "Counter", "R");
        assert_eq!(res.type_label(), "N/A");
        res.kind = Some(ValueType::Integer);
        assert_eq!(res.type_label(), "integer");
    }

    #[test]
    fn test_object_name_snake() {
        let obj = ObjectDef::new(
            3303,
            "Temperature Sensor".to_string(),
            Cardinality::Single,
            Presence::Optional,
        );
        assert_eq!(obj.name_snake(), "temperature_sensor");
    }

    #[test]
    fn test_operation_predicates() {
        let mut obj = ObjectDef::new(
            1,
            "Test".to_string(),
            Cardinality::Single,
            Presence::Optional,
        );
        obj.resources.push(resource(0, "State", "R"));
        obj.resources.push(resource(1, "Trigger", "E"));

        assert!(obj.has_any_readable_resources());
        assert!(obj.has_any_executable_resources());
        assert!(!obj.has_any_writable_resources());
        assert!(!obj.has_any_multiple_resources());
    }

    #[test]
    fn test_needs_instance_reset_handler() {
        // Single-instance object, read-only resources: no reset handler.
        let mut obj = ObjectDef::new(
            1,
            "Test".to_string(),
            Cardinality::Single,
            Presence::Optional,
        );
        obj.resources.push(resource(0, "State", "R"));
        assert!(!obj.needs_instance_reset_handler());

        // A writable resource forces the handler.
        obj.resources.push(resource(1, "Level", "RW"));
        assert!(obj.needs_instance_reset_handler());

        // So does object-level multiplicity, even without writes.
        let mut multi = ObjectDef::new(
            2,
            "Multi".to_string(),
            Cardinality::Multiple,
            Presence::Optional,
        );
        multi.resources.push(resource(0, "State", "R"));
        assert!(multi.needs_instance_reset_handler());
    }
}
