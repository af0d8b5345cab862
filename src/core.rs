//! Shared value types that flow between the payload interpreter and its
//! callers: the decoded `Value` a field resolves to, the flat ordered
//! `Record` a message decodes into, and the field-attribute contract the
//! schema tables are checked against.

/// A single decoded field value.
///
/// SPARTN fields resolve to one of three shapes (spec.md §3.3): a plain
/// integer, a signed fixed-point rational (`raw * scale`), or a raw
/// byte-string (grid residuals, reserved blocks).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Unsigned integer, no scale applied.
    Unsigned(u64),
    /// Signed integer, no scale applied.
    Signed(i64),
    /// Fixed-point rational: `raw` times `scale`, already sign-extended.
    Rational { raw: i64, scale: f64 },
    /// Raw byte string (grid residuals, binary blocks).
    Bytes(Vec<u8>),
}

impl Value {
    /// Best-effort conversion to `i64`, used by conditional predicates and
    /// repetition counters. Rationals compare on their raw integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Unsigned(v) => i64::try_from(*v).ok(),
            Value::Signed(v) => Some(*v),
            Value::Rational { raw, .. } => Some(*raw),
            Value::Bytes(_) => None,
        }
    }

    /// Best-effort conversion to `u64`, used to compute population counts
    /// for `NSAT`/`NB` repetition sources.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Unsigned(v) => Some(*v),
            Value::Signed(v) => u64::try_from(*v).ok(),
            Value::Rational { raw, .. } => u64::try_from(*raw).ok(),
            Value::Bytes(_) => None,
        }
    }

    /// Applies the resolved scale, if a non-trivial resolution is known for
    /// the field's decoded width; returns `self` unscaled when not
    /// applicable or when scaling was disabled by the caller.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Rational { raw, scale } => Some(*raw as f64 * scale),
            Value::Unsigned(v) => Some(*v as f64),
            Value::Signed(v) => Some(*v as f64),
            Value::Bytes(_) => None,
        }
    }
}

/// A flat, insertion-ordered mapping of qualified field names to decoded
/// values (spec.md §3.3). Group and conditional branches disambiguate
/// repeated names with a zero-padded index suffix, e.g. `SF020R_03`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends a field, preserving declaration order even across repeated keys.
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.entries.push((name.into(), value));
    }

    /// Looks up the most recently decoded value for `name`, if any.
    ///
    /// Conditional and repeating-group decoding both rely on "the field as
    /// decoded so far in the current scope"; the interpreter keeps a
    /// separate scope stack for that (see `interpreter::Scope`) and only
    /// consults the final `Record` for read-after-the-fact inspection by
    /// callers.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().rev().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Width/signedness/scale contract for a field identifier, keyed by its
/// base form (trailing disambiguator letters such as `a`, `b`, `T`, `I`
/// stripped — spec.md §3.2).
#[derive(Debug, Clone, Copy)]
pub struct FieldAttr {
    /// Wire width in bits, 1..=32 (the bit cursor's contract, spec.md §4.1).
    pub width: u8,
    /// Whether the raw value should be sign-extended before scaling.
    pub signed: bool,
    /// Resolution applied to produce a `Value::Rational`; `None` means the
    /// raw integer is the value (`Value::Unsigned`/`Value::Signed`).
    pub resolution: Option<f64>,
    /// Constant offset added after scaling (most SPARTN fields have none).
    pub offset: f64,
}

impl FieldAttr {
    pub const fn plain(width: u8) -> Self {
        Self { width, signed: false, resolution: None, offset: 0.0 }
    }

    pub const fn signed(width: u8) -> Self {
        Self { width, signed: true, resolution: None, offset: 0.0 }
    }

    pub const fn scaled(width: u8, signed: bool, resolution: f64) -> Self {
        Self { width, signed, resolution: Some(resolution), offset: 0.0 }
    }
}
