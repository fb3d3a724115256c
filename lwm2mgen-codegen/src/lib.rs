//! # lwm2mgen Codegen
//!
//! Anjay object skeleton generation from LwM2M object definitions.
//!
//! This crate provides:
//! - Handler table planning from an object's resource set
//! - Value type to Anjay accessor mapping
//! - C and C++ skeleton rendering
//! - One-call generation from DDF XML

pub mod access;
pub mod c;
pub mod error;
pub mod generator;
pub mod plan;
pub mod text;

pub use error::CodegenError;
pub use generator::{Dialect, GenerateOptions, Generator};

/// Generates an Anjay object skeleton from DDF XML content.
///
/// # Arguments
/// * `xml` - DDF object definition XML content
/// * `options` - Output dialect and timestamp selection
///
/// # Returns
/// Generated skeleton source as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or generation fails.
pub fn generate_from_xml(xml: &str, options: &GenerateOptions) -> Result<String, CodegenError> {
    let object = lwm2mgen_schema::parse_object(xml)?;
    lwm2mgen_schema::validate_object(&object)?;
    let generator = Generator::new(&object, options);
    generator.generate()
}

/// Generates an Anjay object skeleton from a DDF XML file.
///
/// # Arguments
/// * `path` - Path to the DDF object definition file
/// * `options` - Output dialect and timestamp selection
///
/// # Returns
/// Generated skeleton source as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation or generation
/// fails.
pub fn generate_from_file(
    path: &std::path::Path,
    options: &GenerateOptions,
) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    const SWITCH_DDF: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<LWM2M>
  <Object ObjectType="MODefinition">
    <Name>Smart Plug</Name>
    <Description1>A remotely switchable power socket.</Description1>
    <ObjectID>3312</ObjectID>
    <ObjectURN>urn:oma:lwm2m:ext:3312</ObjectURN>
    <MultipleInstances>Multiple</MultipleInstances>
    <Mandatory>Optional</Mandatory>
    <Resources>
      <Item ID="5850">
        <Name>On/Off</Name>
        <Operations>RW</Operations>
        <MultipleInstances>Single</MultipleInstances>
        <Mandatory>Mandatory</Mandatory>
        <Type>Boolean</Type>
        <RangeEnumeration></RangeEnumeration>
        <Units></Units>
        <Description>Switch state.</Description>
      </Item>
      <Item ID="5851">
        <Name>Dimmer</Name>
        <Operations>RW</Operations>
        <MultipleInstances>Single</MultipleInstances>
        <Mandatory>Optional</Mandatory>
        <Type>Integer</Type>
        <RangeEnumeration>0-100</RangeEnumeration>
        <Units>/100</Units>
        <Description>Dimmer level.</Description>
      </Item>
    </Resources>
  </Object>
</LWM2M>
"#;

    fn options() -> GenerateOptions {
        GenerateOptions {
            dialect: Dialect::C,
            timestamp: Some(
                NaiveDate::from_ymd_opt(2024, 3, 2)
                    .unwrap()
                    .and_hms_opt(8, 0, 0)
                    .unwrap(),
            ),
        }
    }

    #[test]
    fn test_generate_from_xml_end_to_end() {
        let output = generate_from_xml(SWITCH_DDF, &options()).unwrap();

        assert!(output.starts_with("/**\n * Generated by lwm2mgen on 2024-03-02 08:00:00\n"));
        assert!(output.contains("LwM2M Object: Smart Plug"));
        assert!(output.contains("#define RID_ON_OFF 5850"));
        assert!(output.contains("#define RID_DIMMER 5851"));
        assert!(output.contains("range: 0-100, unit: /100"));
        assert!(output.contains("static int instance_create("));
        assert!(output.contains(".oid = 3312,"));
        assert!(output.contains("smart_plug_object_create(void)"));
    }

    #[test]
    fn test_generate_from_xml_rejects_duplicate_rids() {
        let xml = SWITCH_DDF.replace("5851", "5850");
        let err = generate_from_xml(&xml, &options()).unwrap_err();
        assert!(matches!(err, CodegenError::Schema(_)));
    }

    #[test]
    fn test_generate_from_xml_rejects_bad_xml() {
        let err = generate_from_xml("<LWM2M></LWM2M>", &options()).unwrap_err();
        assert!(matches!(err, CodegenError::Parse(_)));
    }

    #[test]
    fn test_generate_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SWITCH_DDF.as_bytes()).unwrap();

        let output = generate_from_file(file.path(), &options()).unwrap();
        assert!(output.contains("LwM2M Object: Smart Plug"));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let result = generate_from_file(
            std::path::Path::new("/nonexistent/definition.xml"),
            &options(),
        );
        assert!(matches!(result, Err(CodegenError::Io(_))));
    }
}
