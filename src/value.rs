use std::cmp::Ordering;
use std::fmt;

use crate::compare::value_cmp;
use crate::reflect::{List, Map, Message};

/// The kind of payload a [`Value`] carries.
///
/// Declaration order is the cross-kind precedence: two values of different
/// kinds order by kind alone, so the derived `Ord` is the precedence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Invalid,
    Bool,
    Int,
    Uint,
    Float,
    Text,
    Bytes,
    Enum,
    List,
    Map,
    Message,
}

impl Kind {
    /// Returns true for kinds usable as map keys.
    pub fn is_scalar(self) -> bool {
        !matches!(self, Kind::Invalid | Kind::List | Kind::Map | Kind::Message)
    }
}

/// One field's or element's payload, borrowed from the reflection layer.
///
/// This type can represent any value a schema-driven message model produces
/// without requiring type information at compile time. 32-bit integer and
/// float fields widen to their 64-bit counterparts, so two numeric fields of
/// equal magnitude compare by value rather than by bit width.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// Absent or unset value.
    Invalid,

    /// Boolean value.
    Bool(bool),

    /// Signed integer, widened to 64 bits.
    Int(i64),

    /// Unsigned integer, widened to 64 bits.
    Uint(u64),

    /// Floating point, widened to 64 bits.
    Float(f64),

    /// UTF-8 text.
    Text(&'a str),

    /// Raw byte sequence.
    Bytes(&'a [u8]),

    /// Enumerated number.
    Enum(i32),

    /// Ordered list of values of one kind.
    List(&'a dyn List),

    /// Unordered key/value collection.
    Map(&'a dyn Map),

    /// Nested message.
    Message(&'a dyn Message),
}

impl Value<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Invalid => Kind::Invalid,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Text(_) => Kind::Text,
            Value::Bytes(_) => Kind::Bytes,
            Value::Enum(_) => Kind::Enum,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
            Value::Message(_) => Kind::Message,
        }
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        value_cmp(*self, *other) == Ordering::Equal
    }
}

impl Eq for Value<'_> {}

impl PartialOrd for Value<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The total order over values: kind precedence first, then the per-kind
/// payload rule. Float ordering treats NaN as equal to NaN and less than
/// every other value, so the relation stays total.
impl Ord for Value<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        value_cmp(*self, *other)
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Invalid => f.write_str("Invalid"),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Uint(v) => f.debug_tuple("Uint").field(v).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Value::Bytes(v) => f.debug_tuple("Bytes").field(v).finish(),
            Value::Enum(v) => f.debug_tuple("Enum").field(v).finish(),
            Value::List(v) => f.debug_struct("List").field("len", &v.len()).finish(),
            Value::Map(v) => f.debug_struct("Map").field("len", &v.len()).finish(),
            Value::Message(v) => f.debug_tuple("Message").field(&v.full_name()).finish(),
        }
    }
}
