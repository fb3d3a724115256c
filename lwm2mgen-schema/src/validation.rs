//! Object definition validation.
//!
//! Shape checks beyond what the types enforce on their own: the closed
//! enumerations are already guaranteed by parsing, so what remains is
//! cross-resource consistency.

use std::collections::HashSet;

use crate::error::SchemaError;
use crate::object::ObjectDef;

/// Validates a parsed object definition.
///
/// # Arguments
/// * `object` - The object definition to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError` if two resources share an ID or a resource
/// declares no operations.
pub fn validate_object(object: &ObjectDef) -> Result<(), SchemaError> {
    let mut seen_rids = HashSet::new();

    for res in &object.resources {
        if !seen_rids.insert(res.rid) {
            return Err(SchemaError::DuplicateResource { rid: res.rid });
        }

        if res.operations.is_empty() {
            return Err(SchemaError::NoOperations {
                rid: res.rid,
                name: res.name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_object;

    #[test]
    fn test_validate_valid_object() {
        let xml = r#"<LWM2M><Object ObjectType="MODefinition">
    <Name>Test</Name>
    <ObjectID>7</ObjectID>
    <MultipleInstances>Single</MultipleInstances>
    <Mandatory>Optional</Mandatory>
    <Resources>
      <Item ID="0">
        <Name>Value</Name>
        <Operations>R</Operations>
        <MultipleInstances>Single</MultipleInstances>
        <Mandatory>Optional</Mandatory>
        <Type>Integer</Type>
      </Item>
      <Item ID="1">
        <Name>Trigger</Name>
        <Operations>E</Operations>
        <MultipleInstances>Single</MultipleInstances>
        <Mandatory>Optional</Mandatory>
      </Item>
    </Resources>
</Object></LWM2M>"#;

        let obj = parse_object(xml).expect("Failed to parse");
        assert!(validate_object(&obj).is_ok());
    }

    #[test]
    fn test_validate_duplicate_resource_id() {
        let xml = r#"<LWM2M><Object ObjectType="MODefinition">
    <Name>Test</Name>
    <ObjectID>7</ObjectID>
    <MultipleInstances>Single</MultipleInstances>
    <Mandatory>Optional</Mandatory>
    <Resources>
      <Item ID="3">
        <Name>First</Name>
        <Operations>R</Operations>
        <MultipleInstances>Single</MultipleInstances>
        <Mandatory>Optional</Mandatory>
        <Type>Integer</Type>
      </Item>
      <Item ID="3">
        <Name>Second</Name>
        <Operations>R</Operations>
        <MultipleInstances>Single</MultipleInstances>
        <Mandatory>Optional</Mandatory>
        <Type>Integer</Type>
      </Item>
    </Resources>
</Object></LWM2M>"#;

        let obj = parse_object(xml).expect("Failed to parse");
        let result = validate_object(&obj);
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateResource { rid: 3 })
        ));
    }

    #[test]
    fn test_validate_empty_operations() {
        let xml = r#"<LWM2M><Object ObjectType="MODefinition">
    <Name>Test</Name>
    <ObjectID>7</ObjectID>
    <MultipleInstances>Single</MultipleInstances>
    <Mandatory>Optional</Mandatory>
    <Resources>
      <Item ID="0">
        <Name>Value</Name>
        <Operations></Operations>
        <MultipleInstances>Single</MultipleInstances>
        <Mandatory>Optional</Mandatory>
        <Type>Integer</Type>
      </Item>
    </Resources>
</Object></LWM2M>"#;

        let obj = parse_object(xml).expect("Failed to parse");
        let result = validate_object(&obj);
        assert!(matches!(result, Err(SchemaError::NoOperations { rid: 0, .. })));
    }
}
