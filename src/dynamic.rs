use std::collections::BTreeMap;

use bytes::Bytes;

use crate::error::{BuildError, BuildErrorKind, BuildResult};
use crate::reflect::{FieldNumber, List, Map, Message, UnknownField};
use crate::value::{Kind, Value};

/// An owned message value, for building message trees without generated
/// code. Reborrow it as the comparator's [`Value`] form via
/// [`DynamicValue::as_value`].
#[derive(Debug, Clone)]
pub enum DynamicValue {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    Bytes(Bytes),
    Enum(i32),
    List(DynamicList),
    Map(DynamicMap),
    Message(DynamicMessage),
}

impl DynamicValue {
    pub fn kind(&self) -> Kind {
        match self {
            DynamicValue::Bool(_) => Kind::Bool,
            DynamicValue::Int(_) => Kind::Int,
            DynamicValue::Uint(_) => Kind::Uint,
            DynamicValue::Float(_) => Kind::Float,
            DynamicValue::Text(_) => Kind::Text,
            DynamicValue::Bytes(_) => Kind::Bytes,
            DynamicValue::Enum(_) => Kind::Enum,
            DynamicValue::List(_) => Kind::List,
            DynamicValue::Map(_) => Kind::Map,
            DynamicValue::Message(_) => Kind::Message,
        }
    }

    pub fn as_value(&self) -> Value<'_> {
        match self {
            DynamicValue::Bool(v) => Value::Bool(*v),
            DynamicValue::Int(v) => Value::Int(*v),
            DynamicValue::Uint(v) => Value::Uint(*v),
            DynamicValue::Float(v) => Value::Float(*v),
            DynamicValue::Text(v) => Value::Text(v),
            DynamicValue::Bytes(v) => Value::Bytes(v),
            DynamicValue::Enum(v) => Value::Enum(*v),
            DynamicValue::List(v) => Value::List(v),
            DynamicValue::Map(v) => Value::Map(v),
            DynamicValue::Message(v) => Value::Message(v),
        }
    }
}

impl From<bool> for DynamicValue {
    fn from(v: bool) -> Self {
        DynamicValue::Bool(v)
    }
}

impl From<i64> for DynamicValue {
    fn from(v: i64) -> Self {
        DynamicValue::Int(v)
    }
}

impl From<i32> for DynamicValue {
    fn from(v: i32) -> Self {
        DynamicValue::Int(v.into())
    }
}

impl From<u64> for DynamicValue {
    fn from(v: u64) -> Self {
        DynamicValue::Uint(v)
    }
}

impl From<u32> for DynamicValue {
    fn from(v: u32) -> Self {
        DynamicValue::Uint(v.into())
    }
}

impl From<f64> for DynamicValue {
    fn from(v: f64) -> Self {
        DynamicValue::Float(v)
    }
}

impl From<f32> for DynamicValue {
    fn from(v: f32) -> Self {
        DynamicValue::Float(v.into())
    }
}

impl From<&str> for DynamicValue {
    fn from(v: &str) -> Self {
        DynamicValue::Text(v.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(v: String) -> Self {
        DynamicValue::Text(v)
    }
}

impl From<Bytes> for DynamicValue {
    fn from(v: Bytes) -> Self {
        DynamicValue::Bytes(v)
    }
}

impl From<DynamicList> for DynamicValue {
    fn from(v: DynamicList) -> Self {
        DynamicValue::List(v)
    }
}

impl From<DynamicMap> for DynamicValue {
    fn from(v: DynamicMap) -> Self {
        DynamicValue::Map(v)
    }
}

impl From<DynamicMessage> for DynamicValue {
    fn from(v: DynamicMessage) -> Self {
        DynamicValue::Message(v)
    }
}

/// An owned ordered sequence of values of one kind.
#[derive(Debug, Clone, Default)]
pub struct DynamicList {
    elements: Vec<DynamicValue>,
}

impl DynamicList {
    /// Builds a list, rejecting mixed element kinds.
    pub fn new(elements: Vec<DynamicValue>) -> BuildResult<Self> {
        if let Some(first) = elements.first() {
            let expected = first.kind();
            for element in &elements[1..] {
                if element.kind() != expected {
                    return Err(BuildError::new(BuildErrorKind::MixedElementKinds {
                        expected,
                        actual: element.kind(),
                    }));
                }
            }
        }
        Ok(DynamicList { elements })
    }
}

impl List for DynamicList {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn get(&self, index: usize) -> Value<'_> {
        self.elements[index].as_value()
    }
}

/// An owned key/value collection with unique keys of one scalar kind.
/// Entries keep insertion order; comparison canonicalizes regardless.
#[derive(Debug, Clone, Default)]
pub struct DynamicMap {
    entries: Vec<(DynamicValue, DynamicValue)>,
}

impl DynamicMap {
    /// Builds a map, rejecting non-scalar or mixed key kinds and duplicate
    /// keys.
    pub fn new(entries: Vec<(DynamicValue, DynamicValue)>) -> BuildResult<Self> {
        if let Some((first, _)) = entries.first() {
            let expected = first.kind();
            if !expected.is_scalar() {
                return Err(BuildError::new(BuildErrorKind::NonScalarKey(expected)));
            }
            for (index, (key, _)) in entries.iter().enumerate() {
                if key.kind() != expected {
                    return Err(BuildError::new(BuildErrorKind::MixedKeyKinds {
                        expected,
                        actual: key.kind(),
                    }));
                }
                for (earlier, _) in &entries[..index] {
                    if earlier.as_value() == key.as_value() {
                        return Err(BuildError::new(BuildErrorKind::DuplicateMapKey));
                    }
                }
            }
        }
        Ok(DynamicMap { entries })
    }
}

impl Map for DynamicMap {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (Value<'_>, Value<'_>)> + '_> {
        Box::new(
            self.entries
                .iter()
                .map(|(key, value)| (key.as_value(), value.as_value())),
        )
    }
}

/// An owned, schema-less message: a full type name, present fields keyed by
/// number, and residual undecoded data.
#[derive(Debug, Clone)]
pub struct DynamicMessage {
    full_name: String,
    valid: bool,
    fields: BTreeMap<FieldNumber, DynamicValue>,
    unknown: Vec<UnknownField>,
}

impl DynamicMessage {
    /// Creates an empty, valid message of the given type.
    pub fn new(full_name: impl Into<String>) -> Self {
        DynamicMessage {
            full_name: full_name.into(),
            valid: true,
            fields: BTreeMap::new(),
            unknown: Vec::new(),
        }
    }

    /// Creates a present-but-invalid handle of the given type, like the
    /// typed nil a reflection layer surfaces. It orders above the absent
    /// handle and below every valid message of its type.
    pub fn invalid(full_name: impl Into<String>) -> Self {
        DynamicMessage {
            full_name: full_name.into(),
            valid: false,
            fields: BTreeMap::new(),
            unknown: Vec::new(),
        }
    }

    /// Sets a field, replacing any existing value for that number. Setting a
    /// field to the kind's zero value still marks it present.
    pub fn set(&mut self, number: FieldNumber, value: impl Into<DynamicValue>) -> &mut Self {
        self.fields.insert(number, value.into());
        self
    }

    /// Removes a field, making it absent rather than zero-valued.
    pub fn clear(&mut self, number: FieldNumber) -> &mut Self {
        self.fields.remove(&number);
        self
    }

    pub fn get(&self, number: FieldNumber) -> Option<Value<'_>> {
        self.fields.get(&number).map(DynamicValue::as_value)
    }

    /// Appends a residual undecoded field entry.
    pub fn push_unknown(&mut self, field: UnknownField) -> &mut Self {
        self.unknown.push(field);
        self
    }
}

impl Message for DynamicMessage {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn fields(&self) -> Box<dyn Iterator<Item = (FieldNumber, Value<'_>)> + '_> {
        // BTreeMap iteration is ascending by key, which is exactly the
        // ordering the Message contract requires.
        Box::new(
            self.fields
                .iter()
                .map(|(number, value)| (*number, value.as_value())),
        )
    }

    fn unknown_fields(&self) -> Box<dyn Iterator<Item = UnknownField> + '_> {
        Box::new(self.unknown.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::{DynamicList, DynamicMap, DynamicMessage, DynamicValue};
    use crate::error::BuildErrorKind;
    use crate::reflect::{List, Message};
    use crate::value::{Kind, Value};

    #[test]
    fn test_list_rejects_mixed_kinds() {
        let err = DynamicList::new(vec![DynamicValue::Int(1), DynamicValue::Uint(2)]).unwrap_err();
        assert_eq!(
            err.kind(),
            &BuildErrorKind::MixedElementKinds {
                expected: Kind::Int,
                actual: Kind::Uint,
            }
        );
    }

    #[test]
    fn test_list_indexing() {
        let list =
            DynamicList::new(vec![DynamicValue::Text("a".to_string()), "b".into()]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1), Value::Text("b"));
    }

    #[test]
    fn test_map_rejects_bad_keys() {
        let err = DynamicMap::new(vec![(
            DynamicValue::Message(DynamicMessage::new("example.Key")),
            DynamicValue::Int(1),
        )])
        .unwrap_err();
        assert_eq!(err.kind(), &BuildErrorKind::NonScalarKey(Kind::Message));

        let err = DynamicMap::new(vec![
            (DynamicValue::Int(1), DynamicValue::Int(1)),
            (DynamicValue::Text("x".to_string()), DynamicValue::Int(2)),
        ])
        .unwrap_err();
        assert_eq!(
            err.kind(),
            &BuildErrorKind::MixedKeyKinds {
                expected: Kind::Int,
                actual: Kind::Text,
            }
        );

        let err = DynamicMap::new(vec![
            (DynamicValue::Int(1), DynamicValue::Int(10)),
            (DynamicValue::Int(1), DynamicValue::Int(20)),
        ])
        .unwrap_err();
        assert_eq!(err.kind(), &BuildErrorKind::DuplicateMapKey);
    }

    #[test]
    fn test_message_presence() {
        let mut message = DynamicMessage::new("example.Record");
        assert_eq!(message.get(1), None);

        message.set(1, 0i64);
        assert_eq!(message.get(1), Some(Value::Int(0)));

        message.clear(1);
        assert_eq!(message.get(1), None);
    }

    #[test]
    fn test_fields_iterate_ascending() {
        let mut message = DynamicMessage::new("example.Record");
        message.set(7, 0i64).set(2, 0i64).set(113, 0i64);
        let numbers: Vec<_> = message.fields().map(|(number, _)| number).collect();
        assert_eq!(numbers, vec![2, 7, 113]);
    }

    #[test]
    fn test_invalid_handle() {
        assert!(DynamicMessage::new("example.Record").is_valid());
        assert!(!DynamicMessage::invalid("example.Record").is_valid());
    }
}
