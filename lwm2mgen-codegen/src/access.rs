//! Value type to Anjay accessor mapping.
//!
//! Every readable or writable resource is implemented through exactly
//! one `anjay_ret_*` / `anjay_get_*` accessor pair chosen by its value
//! type.  The mapping is total over [`ValueType`], so an unknown type
//! cannot reach code generation at all.

use lwm2mgen_schema::{ResourceDef, ValueType};

use crate::error::CodegenError;

/// Data-model access direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// LwM2M Read, served by `anjay_ret_*`.
    Read,
    /// LwM2M Write, served by `anjay_get_*`.
    Write,
}

impl Direction {
    /// Returns the operation label for error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Write => "Write",
        }
    }
}

/// Accessor invocations for one value type and direction, with the
/// payload context already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Call against the handler's `ctx` (single-instance form).
    pub single: String,
    /// Call against the `array` context (array element form).
    pub array: String,
}

/// Returns the accessor pattern for a value type and direction.
#[must_use]
pub fn access_pattern(kind: ValueType, direction: Direction) -> Pattern {
    match direction {
        Direction::Read => Pattern {
            single: read_call(kind, "ctx"),
            array: read_call(kind, "array"),
        },
        Direction::Write => Pattern {
            single: write_call(kind, "ctx"),
            array: write_call(kind, "array"),
        },
    }
}

/// Builds the switch-case body implementing `direction` for a
/// resource, selecting the single-instance or array skeleton by the
/// resource's cardinality.
///
/// The returned fragment has no trailing newline; the renderer indents
/// and embeds it.
///
/// # Errors
/// Returns the invariant error class when the resource supports the
/// operation but declares no value type.
pub fn resource_body(res: &ResourceDef, direction: Direction) -> Result<String, CodegenError> {
    let Some(kind) = res.kind else {
        return Err(CodegenError::invariant(format!(
            "resource {} ('{}') supports {} but declares no value type",
            res.rid,
            res.name,
            direction.label()
        )));
    };

    Ok(match direction {
        Direction::Read if !res.is_multiple() => read_single(kind),
        Direction::Read => read_array(kind),
        Direction::Write if !res.is_multiple() => write_single(kind),
        Direction::Write => write_array(kind),
    })
}

fn read_call(kind: ValueType, payload: &str) -> String {
    match kind {
        ValueType::Boolean => format!("anjay_ret_bool({payload}, 0)"),
        ValueType::Integer => format!("anjay_ret_i32({payload}, 0)"),
        ValueType::Float => format!("anjay_ret_float({payload}, 0)"),
        ValueType::String => format!("anjay_ret_string({payload}, \"\")"),
        ValueType::Opaque => format!("anjay_ret_bytes({payload}, \"\", 0)"),
        ValueType::Time => format!("anjay_ret_i64({payload}, 0)"),
        ValueType::Objlnk => format!("anjay_ret_objlnk({payload}, 0, 0)"),
    }
}

fn write_call(kind: ValueType, payload: &str) -> String {
    match kind {
        ValueType::Boolean => format!("anjay_get_bool({payload}, &value)"),
        ValueType::Integer => format!("anjay_get_i32({payload}, &value)"),
        ValueType::Float => format!("anjay_get_float({payload}, &value)"),
        ValueType::String => format!("anjay_get_string({payload}, value, sizeof(value))"),
        ValueType::Opaque => {
            format!("anjay_get_bytes({payload}, &bytes_read, &finished, value, sizeof(value))")
        }
        ValueType::Time => format!("anjay_get_i64({payload}, &value)"),
        ValueType::Objlnk => format!("anjay_get_objlnk({payload}, &oid, &iid)"),
    }
}

/// Local variable declarations the write call stores into, relative to
/// the surrounding brace block's indentation.
const fn write_locals(kind: ValueType) -> &'static str {
    match kind {
        ValueType::Boolean => "bool value",
        ValueType::Integer => "int32_t value",
        ValueType::Float => "float value",
        ValueType::String => "char value[256]",
        ValueType::Opaque => "uint8_t value[256];\n    bool finished;\n    size_t bytes_read",
        ValueType::Time => "int64_t value",
        ValueType::Objlnk => "anjay_oid_t oid;\n    anjay_iid_t iid",
    }
}

fn read_single(kind: ValueType) -> String {
    let call = access_pattern(kind, Direction::Read).single;
    format!("return {call}; // TODO")
}

fn read_array(kind: ValueType) -> String {
    let call = access_pattern(kind, Direction::Read).array;
    format!(
        "{{
    anjay_output_ctx_t *array = anjay_ret_array_start(ctx);
    int result = 0;
    if (!array
            || (result = anjay_ret_array_index(array, 0))
            || (result = {call})) {{
        return result ? result : ANJAY_ERR_INTERNAL;
    }}
    return anjay_ret_array_finish(array);
}}"
    )
}

fn write_single(kind: ValueType) -> String {
    let locals = write_locals(kind);
    let call = access_pattern(kind, Direction::Write).single;
    format!(
        "{{
    {locals}; // TODO
    return {call}; // TODO
}}"
    )
}

fn write_array(kind: ValueType) -> String {
    let locals = write_locals(kind);
    let call = access_pattern(kind, Direction::Write).array;
    format!(
        "{{
    anjay_input_ctx_t *array = anjay_get_array(ctx);
    if (!array) {{
        return ANJAY_ERR_INTERNAL;
    }}

    anjay_riid_t riid;
    int result = 0;
    {locals}; // TODO
    while (result == 0 && (result = anjay_get_array_index(array, &riid)) == 0) {{
        result = {call}; // TODO
    }}

    return result;
}}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lwm2mgen_schema::{Cardinality, Operations, Presence};

    fn resource(ops: &str, cardinality: Cardinality, kind: Option<ValueType>) -> ResourceDef {
        let mut res = ResourceDef::new(
            1,
            "Value".to_string(),
            Operations::parse(ops).unwrap(),
            cardinality,
            Presence::Optional,
        );
        res.kind = kind;
        res
    }

    #[test]
    fn test_read_patterns_per_type() {
        let cases = [
            (ValueType::Boolean, "anjay_ret_bool(ctx, 0)"),
            (ValueType::Integer, "anjay_ret_i32(ctx, 0)"),
            (ValueType::Float, "anjay_ret_float(ctx, 0)"),
            (ValueType::String, "anjay_ret_string(ctx, \"\")"),
            (ValueType::Opaque, "anjay_ret_bytes(ctx, \"\", 0)"),
            (ValueType::Time, "anjay_ret_i64(ctx, 0)"),
            (ValueType::Objlnk, "anjay_ret_objlnk(ctx, 0, 0)"),
        ];

        for (kind, expected) in cases {
            let pattern = access_pattern(kind, Direction::Read);
            assert_eq!(pattern.single, expected);
            assert!(pattern.array.contains("(array,"));
        }
    }

    #[test]
    fn test_write_patterns_per_type() {
        let cases = [
            (ValueType::Boolean, "anjay_get_bool(ctx, &value)"),
            (ValueType::Integer, "anjay_get_i32(ctx, &value)"),
            (ValueType::Float, "anjay_get_float(ctx, &value)"),
            (ValueType::String, "anjay_get_string(ctx, value, sizeof(value))"),
            (
                ValueType::Opaque,
                "anjay_get_bytes(ctx, &bytes_read, &finished, value, sizeof(value))",
            ),
            (ValueType::Time, "anjay_get_i64(ctx, &value)"),
            (ValueType::Objlnk, "anjay_get_objlnk(ctx, &oid, &iid)"),
        ];

        for (kind, expected) in cases {
            let pattern = access_pattern(kind, Direction::Write);
            assert_eq!(pattern.single, expected);
        }
    }

    #[test]
    fn test_read_single_body() {
        let res = resource("R", Cardinality::Single, Some(ValueType::Integer));
        let body = resource_body(&res, Direction::Read).unwrap();
        assert_eq!(body, "return anjay_ret_i32(ctx, 0); // TODO");
    }

    #[test]
    fn test_read_array_body() {
        let res = resource("R", Cardinality::Multiple, Some(ValueType::Float));
        let body = resource_body(&res, Direction::Read).unwrap();

        assert!(body.starts_with("{\n"));
        assert!(body.contains("anjay_ret_array_start(ctx)"));
        assert!(body.contains("anjay_ret_array_index(array, 0)"));
        assert!(body.contains("anjay_ret_float(array, 0)"));
        assert!(body.contains("return anjay_ret_array_finish(array);"));
        assert!(body.ends_with('}'));
    }

    #[test]
    fn test_write_single_body_locals() {
        let res = resource("W", Cardinality::Single, Some(ValueType::Opaque));
        let body = resource_body(&res, Direction::Write).unwrap();

        assert!(body.contains("uint8_t value[256];\n    bool finished;\n    size_t bytes_read; // TODO"));
        assert!(body.contains(
            "return anjay_get_bytes(ctx, &bytes_read, &finished, value, sizeof(value)); // TODO"
        ));
    }

    #[test]
    fn test_write_array_body_bounded_loop() {
        let res = resource("W", Cardinality::Multiple, Some(ValueType::String));
        let body = resource_body(&res, Direction::Write).unwrap();

        assert!(body.contains("anjay_get_array(ctx)"));
        assert!(body.contains("anjay_riid_t riid;"));
        assert!(body.contains(
            "while (result == 0 && (result = anjay_get_array_index(array, &riid)) == 0)"
        ));
        assert!(body.contains("result = anjay_get_string(array, value, sizeof(value)); // TODO"));
        assert!(body.contains("return result;"));
    }

    #[test]
    fn test_typeless_readable_resource_is_invariant_error() {
        let res = resource("R", Cardinality::Single, None);
        let result = resource_body(&res, Direction::Read);
        assert!(matches!(result, Err(CodegenError::Invariant { .. })));
    }

    #[test]
    fn test_typeless_writable_resource_is_invariant_error() {
        let res = resource("W", Cardinality::Single, None);
        let result = resource_body(&res, Direction::Write);
        assert!(matches!(result, Err(CodegenError::Invariant { .. })));
    }
}
