//! Recursive-descent interpreter that walks a `schema::SchemaEntry` tree
//! against a payload bitstream, producing a flat `Record`. Conditional
//! and repeating-group entries need "the field as decoded so far," which
//! is resolved against a stack of scopes (innermost group first) rather
//! than a single global map, so two sibling groups don't see each
//! other's fields (spec.md §9 design note).
use crate::core::{FieldAttr, Record, Value};
use crate::error::SpartnError;
use crate::infra::codec::bits::BitCursor;
use crate::schema::{CountSource, Predicate, SchemaEntry};

/// Fields decoded so far within one repeating-group iteration (or the
/// message root), consulted innermost-first by conditionals and counts.
#[derive(Default)]
struct Scope {
    values: Vec<(&'static str, Value)>,
}

impl Scope {
    fn get(&self, name: &str) -> Option<&Value> {
        self.values.iter().rev().find(|(k, _)| *k == name).map(|(_, v)| v)
    }
}

fn resolve<'a>(scopes: &'a [Scope], name: &str) -> Option<&'a Value> {
    scopes.iter().rev().find_map(|scope| scope.get(name))
}

fn decode_field_value(cursor: &mut BitCursor<'_>, attr: FieldAttr) -> Result<Value, SpartnError> {
    if attr.signed {
        let raw = cursor.read_i64(attr.width)?;
        Ok(match attr.resolution {
            Some(scale) => Value::Rational { raw, scale },
            None => Value::Signed(raw),
        })
    } else {
        let raw = cursor.read_u32(attr.width)? as i64;
        Ok(match attr.resolution {
            Some(scale) => Value::Rational { raw, scale },
            None => Value::Unsigned(raw as u64),
        })
    }
}

fn resolve_count(scopes: &[Scope], count: CountSource) -> Result<u32, SpartnError> {
    match count {
        CountSource::Fixed(n) => Ok(n),
        CountSource::FromField(name) => resolve(scopes, name)
            .and_then(Value::as_u64)
            .map(|v| v as u32)
            .ok_or_else(|| SpartnError::SchemaMismatch(format!("count field '{name}' not in scope"))),
        CountSource::PopCountOfField(name) => resolve(scopes, name)
            .and_then(Value::as_u64)
            .map(|mask| mask.count_ones())
            .ok_or_else(|| SpartnError::SchemaMismatch(format!("mask field '{name}' not in scope"))),
    }
}

fn evaluate(scopes: &[Scope], predicate: &Predicate) -> bool {
    match *predicate {
        Predicate::Equals { field, value } => {
            resolve(scopes, field).and_then(Value::as_i64) == Some(value)
        }
        Predicate::MaskBitSet { field, bit } => resolve(scopes, field)
            .and_then(Value::as_u64)
            .is_some_and(|mask| mask & (1 << bit) != 0),
    }
}

/// Decodes `schema` out of `cursor` into a flat `Record`.
pub fn decode(cursor: &mut BitCursor<'_>, schema: &'static [SchemaEntry]) -> Result<Record, SpartnError> {
    let mut scopes = vec![Scope::default()];
    let mut record = Record::new();
    decode_entries(cursor, schema, &mut scopes, &mut record, "")?;
    if cursor.remaining() > 7 {
        return Err(SpartnError::SchemaMismatch(format!(
            "{} residual bits after decoding schema (expected <= 7 bits of trailing padding)",
            cursor.remaining()
        )));
    }
    Ok(record)
}

fn decode_entries(
    cursor: &mut BitCursor<'_>,
    entries: &'static [SchemaEntry],
    scopes: &mut Vec<Scope>,
    record: &mut Record,
    prefix: &str,
) -> Result<(), SpartnError> {
    for entry in entries {
        match *entry {
            SchemaEntry::Field { name, attr } => {
                let value = decode_field_value(cursor, attr)?;
                scopes.last_mut().expect("root scope always present").values.push((name, value.clone()));
                record.push(format!("{prefix}{name}"), value);
            }
            SchemaEntry::Group { name, count, items } => {
                let n = resolve_count(scopes, count)?;
                // Group repeats are numbered 1-based (spec.md §3.3's
                // SF020R_03 for the third satellite; §8 scenario 6).
                for i in 1..=n {
                    scopes.push(Scope::default());
                    let child_prefix = format!("{prefix}{name}_{i:02}_");
                    decode_entries(cursor, items, scopes, record, &child_prefix)?;
                    scopes.pop();
                }
            }
            SchemaEntry::Conditional { arms, default } => {
                let chosen = arms
                    .iter()
                    .find(|(predicate, _)| evaluate(scopes, predicate))
                    .map(|(_, subtree)| *subtree)
                    .or(default);
                if let Some(subtree) = chosen {
                    decode_entries(cursor, subtree, scopes, record, prefix)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaEntry;

    const SIGNAL: &[SchemaEntry] = &[SchemaEntry::Field {
        name: "Bias",
        attr: FieldAttr::plain(4),
    }];

    const ROOT: &[SchemaEntry] = &[
        SchemaEntry::Field { name: "Mask", attr: FieldAttr::plain(4) },
        SchemaEntry::Group {
            name: "Sig",
            count: CountSource::PopCountOfField("Mask"),
            items: SIGNAL,
        },
    ];

    #[test]
    fn decodes_group_repeated_by_popcount() {
        // Mask = 0b1010 (2 bits set) -> two signal iterations.
        let data = [0b1010_0001, 0b0010_0000];
        let mut cursor = BitCursor::new(&data);
        let record = decode(&mut cursor, ROOT).unwrap();

        assert_eq!(record.get("Mask"), Some(&Value::Unsigned(0b1010)));
        assert_eq!(record.get("Sig_01_Bias"), Some(&Value::Unsigned(1)));
        assert_eq!(record.get("Sig_02_Bias"), Some(&Value::Unsigned(2)));
    }

    const COND_HIGH: &[SchemaEntry] = &[SchemaEntry::Field { name: "Extra", attr: FieldAttr::plain(4) }];
    const COND_ROOT: &[SchemaEntry] = &[
        SchemaEntry::Field { name: "Flag", attr: FieldAttr::plain(1) },
        SchemaEntry::Conditional {
            arms: &[(Predicate::Equals { field: "Flag", value: 0 }, &[] as &[SchemaEntry])],
            default: Some(COND_HIGH),
        },
    ];

    #[test]
    fn conditional_falls_back_to_default_when_no_arm_matches() {
        let data = [0b1000_0000]; // Flag = 1
        let mut cursor = BitCursor::new(&data);
        let record = decode(&mut cursor, COND_ROOT).unwrap();
        assert!(record.get("Extra").is_some());
    }

    #[test]
    fn conditional_matching_arm_skips_default() {
        let data = [0b0000_0000]; // Flag = 0
        let mut cursor = BitCursor::new(&data);
        let record = decode(&mut cursor, COND_ROOT).unwrap();
        assert!(record.get("Extra").is_none());
    }

    #[test]
    fn missing_count_field_is_a_schema_mismatch() {
        const BAD_ROOT: &[SchemaEntry] = &[SchemaEntry::Group {
            name: "X",
            count: CountSource::FromField("Nonexistent"),
            items: SIGNAL,
        }];
        let data = [0u8; 4];
        let mut cursor = BitCursor::new(&data);
        assert!(matches!(decode(&mut cursor, BAD_ROOT), Err(SpartnError::SchemaMismatch(_))));
    }
}
