use bytes::Bytes;

use crate::value::Value;

/// Field number within a message. Known fields, extension fields, and
/// undecoded fields all share one number space.
pub type FieldNumber = u32;

/// Wire category of an undecoded field entry.
///
/// Declaration order is the comparison rank used when two entries share a
/// field number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WireType {
    Varint,
    Fixed32,
    Fixed64,
    LengthDelimited,
    Group,
}

/// Raw field data the active schema does not interpret: unknown fields and
/// unrecognized extension data.
///
/// The derived ordering is the comparison rule: ascending field number, then
/// wire category rank, then byte-wise payload comparison with a shorter
/// prefix ordering first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnknownField {
    pub number: FieldNumber,
    pub wire_type: WireType,
    pub payload: Bytes,
}

impl UnknownField {
    pub fn new(number: FieldNumber, wire_type: WireType, payload: impl Into<Bytes>) -> Self {
        UnknownField {
            number,
            wire_type,
            payload: payload.into(),
        }
    }
}

/// A schema-described structured record, as exposed by a reflection or
/// storage layer.
///
/// The comparator only reads through this interface; implementations must
/// present a finite, acyclic tree. Presence is meaningful: a field either
/// appears in [`Message::fields`] (possibly with the type's zero value) or it
/// is absent, and the two order differently.
pub trait Message {
    /// False for a present-but-invalid handle, such as a typed nil surfaced
    /// by a reflection layer. Invalid messages order below valid ones.
    fn is_valid(&self) -> bool;

    /// Stable full type identifier, e.g. `"example.Record"`.
    fn full_name(&self) -> &str;

    /// Present fields, strictly ascending by field number.
    fn fields(&self) -> Box<dyn Iterator<Item = (FieldNumber, Value<'_>)> + '_>;

    /// Residual undecoded field entries, in no particular order.
    fn unknown_fields(&self) -> Box<dyn Iterator<Item = UnknownField> + '_>;
}

/// An ordered, finite sequence of values of one kind.
pub trait List {
    fn len(&self) -> usize;

    /// The value at `index`. Callers stay within `0..len()`.
    fn get(&self, index: usize) -> Value<'_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A finite key/value collection with unique keys of one scalar kind.
///
/// Iteration order carries no meaning; the comparator canonicalizes entries
/// by sorting on the key before comparing.
pub trait Map {
    fn len(&self) -> usize;

    fn entries(&self) -> Box<dyn Iterator<Item = (Value<'_>, Value<'_>)> + '_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
