//! Handler function emitters.
//!
//! Each function appends complete C handler definitions to the output
//! buffer, every definition followed by one blank separator line.  The
//! emitted text is identical for both output dialects; only the object
//! definition record differs between them.

use lwm2mgen_schema::ObjectDef;

use crate::access::{self, Direction};
use crate::error::CodegenError;
use crate::text;

/// Emits the instance bookkeeping of a multiple-instance object: list
/// lookup and iteration, IID allocation, instance init/cleanup and the
/// create and remove handlers.
pub fn generate_instance_handlers(object: &ObjectDef, out: &mut String) {
    let snake = object.name_snake();
    let inst = format!("{snake}_instance_t");
    let repr = format!("{snake}_t");

    out.push_str(&format!(
        r#"static {inst} *
find_instance(const {repr} *obj,
              anjay_iid_t iid) {{
    AVS_LIST({inst}) it;
    AVS_LIST_FOREACH(it, obj->instances) {{
        if (it->iid == iid) {{
            return it;
        }} else if (it->iid > iid) {{
            break;
        }}
    }}

    return NULL;
}}

"#
    ));

    out.push_str(
        r#"static int instance_present(anjay_t *anjay,
                            const anjay_dm_object_def_t *const *obj_ptr,
                            anjay_iid_t iid) {
    (void)anjay;
    return find_instance(get_obj(obj_ptr), iid) != NULL;
}

"#,
    );

    out.push_str(&format!(
        r#"static int instance_it(anjay_t *anjay,
                       const anjay_dm_object_def_t *const *obj_ptr,
                       anjay_iid_t *out,
                       void **cookie) {{
    (void)anjay;

    AVS_LIST({inst}) curr = (AVS_LIST({inst}))*cookie;
    if (!curr) {{
        curr = get_obj(obj_ptr)->instances;
    }} else {{
        curr = AVS_LIST_NEXT(curr);
    }}

    *out = curr ? curr->iid : ANJAY_IID_INVALID;
    *cookie = curr;
    return 0;
}}

"#
    ));

    out.push_str(&format!(
        r#"static anjay_iid_t get_new_iid(AVS_LIST({inst}) instances) {{
    anjay_iid_t iid = 1;
    AVS_LIST({inst}) it;
    AVS_LIST_FOREACH(it, instances) {{
        if (it->iid == iid) {{
            ++iid;
        }} else if (it->iid > iid) {{
            break;
        }}
    }}
    return iid;
}}

"#
    ));

    out.push_str(&format!(
        r#"static int init_instance({inst} *inst,
                         anjay_iid_t iid) {{
    assert(iid != ANJAY_IID_INVALID);

    inst->iid = iid;
    // TODO: instance init

    // TODO: return 0 on success, negative value on failure
    return 0;
}}

"#
    ));

    out.push_str(&format!(
        r#"static void release_instance({inst} *inst) {{
    // TODO: instance cleanup
    (void) inst;
}}

"#
    ));

    out.push_str(&format!(
        r#"static int instance_create(anjay_t *anjay,
                           const anjay_dm_object_def_t *const *obj_ptr,
                           anjay_iid_t *inout_iid,
                           anjay_ssid_t ssid) {{
    (void) anjay; (void) ssid;
    {repr} *obj = get_obj(obj_ptr);
    assert(obj);

    AVS_LIST({inst}) created = AVS_LIST_NEW_ELEMENT({inst});
    if (!created) {{
        return ANJAY_ERR_INTERNAL;
    }}

    if (*inout_iid == ANJAY_IID_INVALID) {{
        *inout_iid = get_new_iid(obj->instances);
    }}

    int result = ANJAY_ERR_INTERNAL;
    if (*inout_iid == ANJAY_IID_INVALID
            || (result == init_instance(created, *inout_iid))) {{
        AVS_LIST_CLEAR(&created);
        return result;
    }}

    AVS_LIST({inst}) *ptr;
    AVS_LIST_FOREACH_PTR(ptr, &obj->instances) {{
        if ((*ptr)->iid > created->iid) {{
            break;
        }}
    }}

    AVS_LIST_INSERT(ptr, created);
    return 0;
}}

"#
    ));

    out.push_str(&format!(
        r#"static int instance_remove(anjay_t *anjay,
                           const anjay_dm_object_def_t *const *obj_ptr,
                           anjay_iid_t iid) {{
    (void)anjay;
    {repr} *obj = get_obj(obj_ptr);
    assert(obj);

    AVS_LIST({inst}) *it;
    AVS_LIST_FOREACH_PTR(it, &obj->instances) {{
        if ((*it)->iid == iid) {{
            release_instance(*it);
            AVS_LIST_DELETE(it);
            return 0;
        }} else if ((*it)->iid > iid) {{
            break;
        }}
    }}

    assert(0);
    return ANJAY_ERR_NOT_FOUND;
}}

"#
    ));
}

pub fn generate_instance_reset(object: &ObjectDef, out: &mut String) {
    let repr = format!("{}_t", object.name_snake());
    let lookup = instance_lookup(object);

    out.push_str(&format!(
        r#"static int instance_reset(anjay_t *anjay,
                          const anjay_dm_object_def_t *const *obj_ptr,
                          anjay_iid_t iid) {{
    (void) anjay;

    {repr} *obj = get_obj(obj_ptr);
    assert(obj);
{lookup}
    // TODO: instance reset
    return 0;
}}

"#
    ));
}

/// Emits the Read handler: a switch over every readable resource with
/// its type-specific accessor body.
///
/// # Errors
/// Fails when a readable resource carries no value type.
pub fn generate_resource_read(object: &ObjectDef, out: &mut String) -> Result<(), CodegenError> {
    let repr = format!("{}_t", object.name_snake());
    let lookup = instance_lookup(object);

    out.push_str(&format!(
        r#"static int resource_read(anjay_t *anjay,
                         const anjay_dm_object_def_t *const *obj_ptr,
                         anjay_iid_t iid,
                         anjay_rid_t rid,
                         anjay_output_ctx_t *ctx) {{
    (void)anjay;

    {repr} *obj = get_obj(obj_ptr);
    assert(obj);
{lookup}
    switch (rid) {{
"#
    ));

    for res in &object.resources {
        if !res.is_readable() {
            continue;
        }
        let body = access::resource_body(res, Direction::Read)?;
        out.push_str(&format!("    case {}:\n", res.macro_name()));
        out.push_str(&format!("        {}\n", text::indent_tail(&body, 8)));
        out.push('\n');
    }

    out.push_str(
        r#"    default:
        return ANJAY_ERR_METHOD_NOT_ALLOWED;
    }
}

"#,
    );

    Ok(())
}

/// Emits the Write handler: a switch over every writable resource with
/// its type-specific declare-and-get body.
///
/// # Errors
/// Fails when a writable resource carries no value type.
pub fn generate_resource_write(object: &ObjectDef, out: &mut String) -> Result<(), CodegenError> {
    let repr = format!("{}_t", object.name_snake());
    let lookup = instance_lookup(object);

    out.push_str(&format!(
        r#"static int resource_write(anjay_t *anjay,
                          const anjay_dm_object_def_t *const *obj_ptr,
                          anjay_iid_t iid,
                          anjay_rid_t rid,
                          anjay_input_ctx_t *ctx) {{
    (void)anjay;

    {repr} *obj = get_obj(obj_ptr);
    assert(obj);
{lookup}
    switch (rid) {{
"#
    ));

    for res in &object.resources {
        if !res.is_writable() {
            continue;
        }
        let body = access::resource_body(res, Direction::Write)?;
        out.push_str(&format!("    case {}:\n", res.macro_name()));
        out.push_str(&format!("        {}\n", text::indent_tail(&body, 8)));
        out.push('\n');
    }

    out.push_str(
        r#"    default:
        return ANJAY_ERR_METHOD_NOT_ALLOWED;
    }
}

"#,
    );

    Ok(())
}

pub fn generate_resource_execute(object: &ObjectDef, out: &mut String) {
    let repr = format!("{}_t", object.name_snake());
    let lookup = instance_lookup(object);

    out.push_str(&format!(
        r#"static int resource_execute(anjay_t *anjay,
                            const anjay_dm_object_def_t *const *obj_ptr,
                            anjay_iid_t iid,
                            anjay_rid_t rid,
                            anjay_execute_ctx_t *arg_ctx) {{
    (void)arg_ctx;

    {repr} *obj = get_obj(obj_ptr);
    assert(obj);
{lookup}
    switch (rid) {{
"#
    ));

    for res in &object.resources {
        if !res.is_executable() {
            continue;
        }
        out.push_str(&format!("    case {}:\n", res.macro_name()));
        out.push_str("        return ANJAY_ERR_NOT_IMPLEMENTED; // TODO\n");
        out.push('\n');
    }

    out.push_str(
        r#"    default:
        return ANJAY_ERR_METHOD_NOT_ALLOWED;
    }
}

"#,
    );
}

pub fn generate_resource_dim(object: &ObjectDef, out: &mut String) {
    let repr = format!("{}_t", object.name_snake());
    let lookup = instance_lookup(object);

    out.push_str(&format!(
        r#"static int resource_dim(anjay_t *anjay,
                        const anjay_dm_object_def_t *const *obj_ptr,
                        anjay_iid_t iid,
                        anjay_rid_t rid) {{
    (void) anjay;

    {repr} *obj = get_obj(obj_ptr);
    assert(obj);
{lookup}
    switch (rid) {{
"#
    ));

    for res in &object.resources {
        if !res.is_multiple() {
            continue;
        }
        out.push_str(&format!("    case {}:\n", res.macro_name()));
        out.push_str("        return 1; // TODO\n");
        out.push('\n');
    }

    out.push_str(
        r#"    default:
        return ANJAY_DM_DIM_INVALID;
    }
}

"#,
    );
}

/// Instance lookup prologue shared by the per-resource handlers: find
/// the addressed instance in the list, or assert the fixed IID 0 for
/// single-instance objects.
fn instance_lookup(object: &ObjectDef) -> String {
    if object.is_multiple() {
        format!(
            "    {}_instance_t *inst = find_instance(obj, iid);\n    assert(inst);\n",
            object.name_snake()
        )
    } else {
        "    assert(iid == 0);\n".to_string()
    }
}
