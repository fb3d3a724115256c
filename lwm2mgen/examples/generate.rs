//! Example generating an Anjay skeleton for a simple switch object.
//!
//! Run with: `cargo run --example generate`

use lwm2mgen::prelude::*;

const SWITCH_DDF: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<LWM2M>
  <Object ObjectType="MODefinition">
    <Name>Light Switch</Name>
    <Description1>A two-state light switch.</Description1>
    <ObjectID>3342</ObjectID>
    <ObjectURN>urn:oma:lwm2m:ext:3342</ObjectURN>
    <MultipleInstances>Single</MultipleInstances>
    <Mandatory>Optional</Mandatory>
    <Resources>
      <Item ID="5500">
        <Name>Digital Input State</Name>
        <Operations>R</Operations>
        <MultipleInstances>Single</MultipleInstances>
        <Mandatory>Mandatory</Mandatory>
        <Type>Boolean</Type>
        <RangeEnumeration></RangeEnumeration>
        <Units></Units>
        <Description>Current state of the switch.</Description>
      </Item>
      <Item ID="5501">
        <Name>Digital Input Counter</Name>
        <Operations>R</Operations>
        <MultipleInstances>Single</MultipleInstances>
        <Mandatory>Optional</Mandatory>
        <Type>Integer</Type>
        <RangeEnumeration></RangeEnumeration>
        <Units></Units>
        <Description>Number of state transitions.</Description>
      </Item>
    </Resources>
  </Object>
</LWM2M>
"#;

fn main() -> Result<(), CodegenError> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let object = parse_object(SWITCH_DDF)?;
    validate_object(&object)?;
    println!(
        "// Parsed object {} ({}) with {} resources",
        object.oid,
        object.name,
        object.resources.len()
    );

    let skeleton = Generator::new(&object, &GenerateOptions::default()).generate()?;
    print!("{skeleton}");
    Ok(())
}
