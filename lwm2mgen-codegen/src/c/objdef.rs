//! Object definition record emitters.
//!
//! The two dialects render the same handler plan: C fills a designated
//! initializer of `anjay_dm_object_def_t`, C++ assigns the fields in a
//! constructor of a derived struct.

use lwm2mgen_schema::ObjectDef;

use crate::plan::PlanEntry;

/// Emits the C object definition record.
pub fn generate_c_objdef(object: &ObjectDef, plan: &[PlanEntry], out: &mut String) {
    out.push_str(&format!(
        "static const anjay_dm_object_def_t OBJ_DEF = {{\n    .oid = {},\n    .supported_rids = ANJAY_DM_SUPPORTED_RIDS(\n",
        object.oid
    ));

    for (i, res) in object.resources.iter().enumerate() {
        let comma = if i + 1 == object.resources.len() { "" } else { "," };
        out.push_str(&format!("                {}{comma}\n", res.macro_name()));
    }
    out.push_str("            ),\n    .handlers = {\n");

    for (i, entry) in plan.iter().enumerate() {
        match entry {
            PlanEntry::Slot(slot) => {
                let comma = if i + 1 == plan.len() { "" } else { "," };
                out.push_str(&format!(
                    "        .{} = {}{comma}\n",
                    slot.kind.field_name(),
                    slot.symbol()
                ));
            }
            PlanEntry::Separator => out.push('\n'),
            PlanEntry::Comment(text) => out.push_str(&format!("        {text}\n")),
        }
    }

    out.push_str("    }\n};\n");
}

/// Emits the C++ object definition record.
pub fn generate_cxx_objdef(object: &ObjectDef, plan: &[PlanEntry], out: &mut String) {
    out.push_str("namespace {\n\nconst uint16_t OBJ_SUPPORTED_RIDS[] = {\n");

    for (i, res) in object.resources.iter().enumerate() {
        let comma = if i + 1 == object.resources.len() { "" } else { "," };
        out.push_str(&format!("    {}{comma}\n", res.macro_name()));
    }

    out.push_str(&format!(
        r#"}};

struct ObjDef : public anjay_dm_object_def_t {{
    ObjDef() :
            anjay_dm_object_def_t() {{
        oid = {};
        supported_rids.count = AVS_ARRAY_SIZE(OBJ_SUPPORTED_RIDS);
        supported_rids.rids = OBJ_SUPPORTED_RIDS;

"#,
        object.oid
    ));

    for entry in plan {
        match entry {
            PlanEntry::Slot(slot) => {
                out.push_str(&format!(
                    "        handlers.{} = {};\n",
                    slot.kind.field_name(),
                    slot.symbol()
                ));
            }
            PlanEntry::Separator => out.push('\n'),
            PlanEntry::Comment(text) => out.push_str(&format!("        {text}\n")),
        }
    }

    out.push_str("    }\n} const OBJ_DEF;\n\n}\n");
}
