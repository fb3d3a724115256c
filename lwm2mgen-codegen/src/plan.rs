//! Handler table planning.
//!
//! Decides, from the object definition alone, which slots of
//! `anjay_dm_handlers_t` get a generated function and which are filled
//! with one of Anjay's stock implementations.  The plan also carries
//! the grouping blank lines and the transaction comment so both output
//! dialects render the same table layout.

use std::collections::HashSet;

use lwm2mgen_schema::ObjectDef;

use crate::error::CodegenError;

/// Stock iteration handler for single-instance objects.
pub const INSTANCE_IT_SINGLE: &str = "anjay_dm_instance_it_SINGLE";
/// Stock presence handler for single-instance objects.
pub const INSTANCE_PRESENT_SINGLE: &str = "anjay_dm_instance_present_SINGLE";
/// Stock resource presence handler reporting every resource present.
pub const RESOURCE_PRESENT_TRUE: &str = "anjay_dm_resource_present_TRUE";
/// Stock no-op transaction handler.
pub const TRANSACTION_NOOP: &str = "anjay_dm_transaction_NOOP";

/// Comment emitted above the transaction block of the handler table.
pub const TRANSACTION_COMMENT: &str =
    "// TODO: implement these if transactional write/create is required";

/// A slot of `anjay_dm_handlers_t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    /// Instance iteration.
    InstanceIt,
    /// Instance presence check.
    InstancePresent,
    /// Instance creation.
    InstanceCreate,
    /// Instance removal.
    InstanceRemove,
    /// Instance reset (Write with replace semantics).
    InstanceReset,
    /// Resource presence check.
    ResourcePresent,
    /// Resource read.
    ResourceRead,
    /// Resource write.
    ResourceWrite,
    /// Resource execute.
    ResourceExecute,
    /// Resource instance count.
    ResourceDim,
    /// Transaction begin.
    TransactionBegin,
    /// Transaction validate.
    TransactionValidate,
    /// Transaction commit.
    TransactionCommit,
    /// Transaction rollback.
    TransactionRollback,
}

impl HandlerKind {
    /// Returns the field name within `anjay_dm_handlers_t`.  Generated
    /// handler functions carry the same name.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::InstanceIt => "instance_it",
            Self::InstancePresent => "instance_present",
            Self::InstanceCreate => "instance_create",
            Self::InstanceRemove => "instance_remove",
            Self::InstanceReset => "instance_reset",
            Self::ResourcePresent => "resource_present",
            Self::ResourceRead => "resource_read",
            Self::ResourceWrite => "resource_write",
            Self::ResourceExecute => "resource_execute",
            Self::ResourceDim => "resource_dim",
            Self::TransactionBegin => "transaction_begin",
            Self::TransactionValidate => "transaction_validate",
            Self::TransactionCommit => "transaction_commit",
            Self::TransactionRollback => "transaction_rollback",
        }
    }
}

/// How a handler slot is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// A function generated into the output file, named after the slot.
    Generated,
    /// One of Anjay's stock handler implementations.
    Default(&'static str),
}

/// A filled handler slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerSlot {
    /// Which slot this is.
    pub kind: HandlerKind,
    /// How the slot is filled.
    pub binding: Binding,
}

impl HandlerSlot {
    /// Creates a slot backed by a generated function.
    #[must_use]
    pub const fn generated(kind: HandlerKind) -> Self {
        Self {
            kind,
            binding: Binding::Generated,
        }
    }

    /// Creates a slot filled with a stock implementation.
    #[must_use]
    pub const fn stock(kind: HandlerKind, symbol: &'static str) -> Self {
        Self {
            kind,
            binding: Binding::Default(symbol),
        }
    }

    /// Returns the symbol assigned to the slot.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self.binding {
            Binding::Generated => self.kind.field_name(),
            Binding::Default(symbol) => symbol,
        }
    }

    /// Returns true if the slot is backed by a generated function.
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self.binding, Binding::Generated)
    }
}

/// One line of the rendered handler table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanEntry {
    /// A filled handler slot.
    Slot(HandlerSlot),
    /// Blank grouping line.
    Separator,
    /// Verbatim comment line.
    Comment(&'static str),
}

/// Plans the handler table for an object definition.
///
/// The slot order is fixed: instance handlers (generated for multiple-
/// instance objects, stock `*_SINGLE` otherwise, plus create/remove and
/// reset where applicable), then resource handlers gated on what the
/// resources actually support, then the four no-op transaction slots.
#[must_use]
pub fn plan_handlers(object: &ObjectDef) -> Vec<PlanEntry> {
    let mut plan = Vec::new();

    if object.is_multiple() {
        plan.push(PlanEntry::Slot(HandlerSlot::generated(
            HandlerKind::InstanceIt,
        )));
        plan.push(PlanEntry::Slot(HandlerSlot::generated(
            HandlerKind::InstancePresent,
        )));
        plan.push(PlanEntry::Slot(HandlerSlot::generated(
            HandlerKind::InstanceCreate,
        )));
        plan.push(PlanEntry::Slot(HandlerSlot::generated(
            HandlerKind::InstanceRemove,
        )));
    } else {
        plan.push(PlanEntry::Slot(HandlerSlot::stock(
            HandlerKind::InstanceIt,
            INSTANCE_IT_SINGLE,
        )));
        plan.push(PlanEntry::Slot(HandlerSlot::stock(
            HandlerKind::InstancePresent,
            INSTANCE_PRESENT_SINGLE,
        )));
    }

    if object.needs_instance_reset_handler() {
        plan.push(PlanEntry::Slot(HandlerSlot::generated(
            HandlerKind::InstanceReset,
        )));
    }

    plan.push(PlanEntry::Separator);
    plan.push(PlanEntry::Slot(HandlerSlot::stock(
        HandlerKind::ResourcePresent,
        RESOURCE_PRESENT_TRUE,
    )));
    if object.has_any_readable_resources() {
        plan.push(PlanEntry::Slot(HandlerSlot::generated(
            HandlerKind::ResourceRead,
        )));
    }
    if object.has_any_writable_resources() {
        plan.push(PlanEntry::Slot(HandlerSlot::generated(
            HandlerKind::ResourceWrite,
        )));
    }
    if object.has_any_executable_resources() {
        plan.push(PlanEntry::Slot(HandlerSlot::generated(
            HandlerKind::ResourceExecute,
        )));
    }
    if object.has_any_multiple_resources() {
        plan.push(PlanEntry::Slot(HandlerSlot::generated(
            HandlerKind::ResourceDim,
        )));
    }

    plan.push(PlanEntry::Separator);
    plan.push(PlanEntry::Comment(TRANSACTION_COMMENT));
    for kind in [
        HandlerKind::TransactionBegin,
        HandlerKind::TransactionValidate,
        HandlerKind::TransactionCommit,
        HandlerKind::TransactionRollback,
    ] {
        plan.push(PlanEntry::Slot(HandlerSlot::stock(kind, TRANSACTION_NOOP)));
    }

    plan
}

/// Cross-checks a handler plan against the object definition before
/// rendering.
///
/// # Errors
/// Returns the invariant error class when a generated slot has no
/// backing data, data exists with no generated slot, a slot is planned
/// twice, or an always-stock slot was planned as generated.
pub fn verify_plan(object: &ObjectDef, plan: &[PlanEntry]) -> Result<(), CodegenError> {
    let mut generated = HashSet::new();

    for entry in plan {
        if let PlanEntry::Slot(slot) = entry {
            if slot.is_generated() && !generated.insert(slot.kind) {
                return Err(CodegenError::invariant(format!(
                    "handler '{}' planned twice",
                    slot.kind.field_name()
                )));
            }
        }
    }

    for kind in [
        HandlerKind::ResourcePresent,
        HandlerKind::TransactionBegin,
        HandlerKind::TransactionValidate,
        HandlerKind::TransactionCommit,
        HandlerKind::TransactionRollback,
    ] {
        if generated.contains(&kind) {
            return Err(CodegenError::invariant(format!(
                "handler '{}' must use a stock implementation",
                kind.field_name()
            )));
        }
    }

    let expectations = [
        (HandlerKind::InstanceIt, object.is_multiple()),
        (HandlerKind::InstancePresent, object.is_multiple()),
        (HandlerKind::InstanceCreate, object.is_multiple()),
        (HandlerKind::InstanceRemove, object.is_multiple()),
        (
            HandlerKind::InstanceReset,
            object.needs_instance_reset_handler(),
        ),
        (
            HandlerKind::ResourceRead,
            object.has_any_readable_resources(),
        ),
        (
            HandlerKind::ResourceWrite,
            object.has_any_writable_resources(),
        ),
        (
            HandlerKind::ResourceExecute,
            object.has_any_executable_resources(),
        ),
        (
            HandlerKind::ResourceDim,
            object.has_any_multiple_resources(),
        ),
    ];

    for (kind, expected) in expectations {
        let planned = generated.contains(&kind);
        if planned && !expected {
            return Err(CodegenError::invariant(format!(
                "handler '{}' planned but the object defines no matching data",
                kind.field_name()
            )));
        }
        if !planned && expected {
            return Err(CodegenError::invariant(format!(
                "handler '{}' required but missing from the plan",
                kind.field_name()
            )));
        }
    }

    Ok(())
}
