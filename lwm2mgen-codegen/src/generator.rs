//! Skeleton file assembly.
//!
//! [`Generator`] stitches the full output file together: header
//! comment, includes, RID macros, state structs, the handler functions
//! the plan calls for, the dialect-specific object definition record
//! and the create/release entry points.

use chrono::NaiveDateTime;

use lwm2mgen_schema::ObjectDef;

use crate::c::{handlers, objdef};
use crate::error::CodegenError;
use crate::plan::{self, PlanEntry};
use crate::text;

/// Output dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Designated-initializer C record.
    #[default]
    C,
    /// C++ record assigned in a constructor.
    Cxx,
}

/// Options controlling skeleton generation.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Output dialect.
    pub dialect: Dialect,
    /// Timestamp for the header comment; the current local time when
    /// `None`.
    pub timestamp: Option<NaiveDateTime>,
}

/// Skeleton generator for one object definition.
pub struct Generator<'a> {
    object: &'a ObjectDef,
    dialect: Dialect,
    timestamp: NaiveDateTime,
    plan: Vec<PlanEntry>,
}

impl<'a> Generator<'a> {
    /// Creates a generator, planning the handler table up front.
    #[must_use]
    pub fn new(object: &'a ObjectDef, options: &GenerateOptions) -> Self {
        Self {
            object,
            dialect: options.dialect,
            timestamp: options
                .timestamp
                .unwrap_or_else(|| chrono::Local::now().naive_local()),
            plan: plan::plan_handlers(object),
        }
    }

    /// Returns the planned handler table.
    #[must_use]
    pub fn plan(&self) -> &[PlanEntry] {
        &self.plan
    }

    /// Renders the complete skeleton source file.
    ///
    /// The output always ends with exactly one newline.
    ///
    /// # Errors
    /// Fails without emitting anything when the handler plan does not
    /// match the object definition, or when a readable or writable
    /// resource carries no value type.
    pub fn generate(&self) -> Result<String, CodegenError> {
        plan::verify_plan(self.object, &self.plan)?;

        let mut out = String::new();
        self.generate_header(&mut out);
        self.generate_includes(&mut out);
        self.generate_rid_macros(&mut out);
        self.generate_structs(&mut out);

        if self.object.is_multiple() {
            handlers::generate_instance_handlers(self.object, &mut out);
        }
        if self.object.needs_instance_reset_handler() {
            handlers::generate_instance_reset(self.object, &mut out);
        }
        if self.object.has_any_readable_resources() {
            handlers::generate_resource_read(self.object, &mut out)?;
        }
        if self.object.has_any_writable_resources() {
            handlers::generate_resource_write(self.object, &mut out)?;
        }
        if self.object.has_any_executable_resources() {
            handlers::generate_resource_execute(self.object, &mut out);
        }
        if self.object.has_any_multiple_resources() {
            handlers::generate_resource_dim(self.object, &mut out);
        }

        match self.dialect {
            Dialect::C => objdef::generate_c_objdef(self.object, &self.plan, &mut out),
            Dialect::Cxx => objdef::generate_cxx_objdef(self.object, &self.plan, &mut out),
        }

        out.push('\n');
        self.generate_lifecycle(&mut out);

        let trimmed = out.trim_end_matches('\n').len();
        out.truncate(trimmed);
        out.push('\n');
        Ok(out)
    }

    fn generate_header(&self, out: &mut String) {
        out.push_str(&format!(
            r#"/**
 * Generated by lwm2mgen on {}
 *
 * LwM2M Object: {}
 * ID: {}, URN: {}, {}, {}
 *
 * {}
 */
"#,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.object.name,
            self.object.oid,
            self.object.urn,
            self.object.presence.label(),
            self.object.cardinality.label(),
            text::comment_block(&self.object.description)
        ));
    }

    fn generate_includes(&self, out: &mut String) {
        out.push_str(
            r#"#include <assert.h>
#include <stdbool.h>

#include <anjay/anjay.h>
#include <avsystem/commons/defs.h>
#include <avsystem/commons/memory.h>
"#,
        );
        if self.object.is_multiple() {
            out.push_str("#include <avsystem/commons/list.h>\n");
        }
        out.push('\n');
    }

    fn generate_rid_macros(&self, out: &mut String) {
        for res in &self.object.resources {
            out.push_str(&format!(
                r#"/**
 * {}: {}, {}, {}
 * type: {}, range: {}, unit: {}
 * {}
 */
#define {} {}

"#,
                res.name,
                res.operations,
                res.cardinality.label(),
                res.presence.label(),
                res.type_label(),
                res.range_enumeration,
                res.units,
                text::comment_block(&res.description),
                res.macro_name(),
                res.rid
            ));
        }
    }

    fn generate_structs(&self, out: &mut String) {
        let snake = self.object.name_snake();

        if self.object.is_multiple() {
            out.push_str(&format!(
                r#"typedef struct {snake}_instance_struct {{
    anjay_iid_t iid;

    // TODO: instance state
}} {snake}_instance_t;

"#
            ));
        }

        out.push_str(&format!(
            "typedef struct {snake}_struct {{\n    const anjay_dm_object_def_t *def;\n"
        ));
        if self.object.is_multiple() {
            out.push_str(&format!("    AVS_LIST({snake}_instance_t) instances;\n"));
        }
        out.push_str(&format!(
            r#"
    // TODO: object state
}} {snake}_t;

static inline {snake}_t *
get_obj(const anjay_dm_object_def_t *const *obj_ptr) {{
    assert(obj_ptr);
    return AVS_CONTAINER_OF(obj_ptr, {snake}_t, def);
}}

"#
        ));
    }

    fn generate_lifecycle(&self, out: &mut String) {
        let snake = self.object.name_snake();
        let repr = format!("{snake}_t");

        out.push_str(&format!(
            r#"const anjay_dm_object_def_t **{snake}_object_create(void) {{
    {repr} *obj = ({repr} *)
            avs_calloc(1, sizeof({repr}));
    if (!obj) {{
        return NULL;
    }}
    obj->def = &OBJ_DEF;

    // TODO: object init

    return &obj->def;
}}

void {snake}_object_release(const anjay_dm_object_def_t **def) {{
    if (def) {{
        {repr} *obj = get_obj(def);
"#
        ));
        if self.object.is_multiple() {
            out.push_str(
                r#"        AVS_LIST_CLEAR(&obj->instances) {
            release_instance(obj->instances);
        }
"#,
            );
        }
        out.push_str(
            r#"
        // TODO: object cleanup

        avs_free(obj);
    }
}
"#,
        );
    }
}
