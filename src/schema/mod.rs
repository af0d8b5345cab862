//! Declarative, recursive schema trees for each SPARTN message family,
//! interpreted by `crate::interpreter` against a decoded payload
//! bitstream. Grounded on `spartntypes_get.py`'s per-message field tables
//! in the pyspartn original source, reshaped into a tagged tree instead
//! of procedural branches.
pub mod aux;
pub mod fields;
pub mod gad;
pub mod hpac;
pub mod ocb;

use crate::core::FieldAttr;

/// A condition evaluated against a field already decoded earlier in the
/// current scope, used to pick one of several sub-schemas.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// True when the named field equals `value`.
    Equals { field: &'static str, value: i64 },
    /// True when bit `bit` (0 = least significant) of the named mask
    /// field is set.
    MaskBitSet { field: &'static str, bit: u8 },
}

/// How many times a `Group` repeats.
#[derive(Debug, Clone, Copy)]
pub enum CountSource {
    /// A compile-time-known repeat count.
    Fixed(u32),
    /// The repeat count equals the value of a previously decoded field
    /// (e.g. `NSat`).
    FromField(&'static str),
    /// The repeat count equals the number of set bits in a previously
    /// decoded bitmask field (e.g. a satellite or signal mask).
    PopCountOfField(&'static str),
}

/// One node of a message's payload schema. Schemas are trees: a `Group`
/// contains child entries that repeat together, and a `Conditional`
/// chooses among alternative subtrees based on a field already in scope.
///
/// Every variant is built only from `'static` references and small Copy
/// types, so the whole tree is `Copy` — schema tables are plain `static`
/// data, never constructed or mutated at runtime.
#[derive(Debug, Clone, Copy)]
pub enum SchemaEntry {
    /// A single fixed-width field.
    Field { name: &'static str, attr: FieldAttr },
    /// A repeated block of entries, run `count` times, each iteration
    /// pushing its own nested scope (spec.md §9 scoped-environment note).
    Group {
        name: &'static str,
        count: CountSource,
        items: &'static [SchemaEntry],
    },
    /// Alternative subtrees selected by the first matching predicate; if
    /// none match, `default` (if present) is used.
    Conditional {
        arms: &'static [(Predicate, &'static [SchemaEntry])],
        default: Option<&'static [SchemaEntry]>,
    },
}

/// Looks up the schema for a message by its `(msgType, msgSubtype)` pair.
/// `msgSubtype` selects the constellation for OCB/HPAC messages and is
/// ignored for families that don't vary by constellation.
pub fn lookup(msg_type: u8, msg_subtype: u8) -> Option<&'static [SchemaEntry]> {
    match msg_type {
        0 => ocb::lookup(msg_subtype),
        1 => hpac::lookup(msg_subtype),
        2 => Some(gad::SCHEMA),
        3 => Some(aux::BPAC_SCHEMA),
        4 => Some(aux::EAS_DYN_SCHEMA),
        5 => Some(aux::EAS_GRP_SCHEMA),
        _ => None,
    }
}
