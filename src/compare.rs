use std::cmp::Ordering;

use crate::reflect::{List, Map, Message, UnknownField};
use crate::value::Value;

/// Recursively compares two messages, treating the absent handle as the
/// least value. Returns `Ordering::Equal` if and only if [`equal`] returns
/// true for the same pair.
///
/// This function is meant for sorting arbitrary messages. For example, it
/// lets two collections be checked for the same elements when element order
/// does not matter.
pub fn compare(x: Option<&dyn Message>, y: Option<&dyn Message>) -> Ordering {
    match (x, y) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => compare_messages(x, y),
    }
}

/// Returns true if `x` orders strictly before `y`.
///
/// Usable directly as a sort predicate: the relation is deterministic,
/// irreflexive, and transitive.
pub fn less_than(x: Option<&dyn Message>, y: Option<&dyn Message>) -> bool {
    compare(x, y) == Ordering::Less
}

/// Structural equality over messages: presence-aware, recursive, and in
/// agreement with [`compare`] by construction.
pub fn equal(x: Option<&dyn Message>, y: Option<&dyn Message>) -> bool {
    compare(x, y) == Ordering::Equal
}

/// The value ordering primitive behind [`Ord`] on [`Value`]. Values of
/// different kinds order by kind precedence alone; values of the same kind
/// order by the per-kind payload rule.
pub(crate) fn value_cmp(x: Value<'_>, y: Value<'_>) -> Ordering {
    match (x, y) {
        (Value::Invalid, Value::Invalid) => Ordering::Equal,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(&b),
        (Value::Int(a), Value::Int(b)) => a.cmp(&b),
        (Value::Uint(a), Value::Uint(b)) => a.cmp(&b),
        (Value::Float(a), Value::Float(b)) => float_cmp(a, b),
        (Value::Text(a), Value::Text(b)) => a.as_bytes().cmp(b.as_bytes()),
        (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
        (Value::Enum(a), Value::Enum(b)) => a.cmp(&b),
        (Value::List(a), Value::List(b)) => compare_lists(a, b),
        (Value::Map(a), Value::Map(b)) => compare_maps(a, b),
        (Value::Message(a), Value::Message(b)) => compare_messages(a, b),
        (x, y) => x.kind().cmp(&y.kind()),
    }
}

/// Total order over floats: NaN equals NaN and orders below every other
/// value, including negative infinity. Otherwise IEEE ordering, so -0.0 and
/// +0.0 stay equal.
fn float_cmp(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

fn compare_messages(x: &dyn Message, y: &dyn Message) -> Ordering {
    // Identical data pointers mean identical trees. Vtable metadata is
    // ignored: the same object can surface distinct vtable pointers.
    if std::ptr::addr_eq(x as *const dyn Message, y as *const dyn Message) {
        return Ordering::Equal;
    }

    let validity = x.is_valid().cmp(&y.is_valid());
    if validity != Ordering::Equal {
        return validity;
    }

    // Messages of different declared types order by their full type
    // identifier; the ranking is stable within one build, nothing more.
    let name = x.full_name().as_bytes().cmp(y.full_name().as_bytes());
    if name != Ordering::Equal {
        return name;
    }

    // Walk the union of present field numbers in ascending order. Both
    // iterators are sorted by contract, so this is a two-way merge.
    let mut xs = x.fields().peekable();
    let mut ys = y.fields().peekable();
    loop {
        match (xs.peek(), ys.peek()) {
            (None, None) => break,
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (Some(&(nx, vx)), Some(&(ny, vy))) => match nx.cmp(&ny) {
                // The side without the field is less, whatever the other
                // side's value is, including the type's zero value.
                Ordering::Less => return Ordering::Greater,
                Ordering::Greater => return Ordering::Less,
                Ordering::Equal => {
                    let field = value_cmp(vx, vy);
                    if field != Ordering::Equal {
                        return field;
                    }
                    xs.next();
                    ys.next();
                }
            },
        }
    }

    compare_unknown(x, y)
}

/// Lexicographic element-wise comparison; a strict prefix orders first.
fn compare_lists(x: &dyn List, y: &dyn List) -> Ordering {
    let common = x.len().min(y.len());
    for index in 0..common {
        let element = value_cmp(x.get(index), y.get(index));
        if element != Ordering::Equal {
            return element;
        }
    }
    x.len().cmp(&y.len())
}

/// Maps carry no canonical iteration order, so both sides are canonicalized
/// into entry sequences sorted by key before the lexicographic walk. Keys
/// decide first, values break key ties, and the shorter map orders first
/// once the shared prefix is equal.
fn compare_maps(x: &dyn Map, y: &dyn Map) -> Ordering {
    let xs = sorted_entries(x);
    let ys = sorted_entries(y);
    for ((kx, vx), (ky, vy)) in xs.iter().zip(&ys) {
        let key = value_cmp(*kx, *ky);
        if key != Ordering::Equal {
            return key;
        }
        let value = value_cmp(*vx, *vy);
        if value != Ordering::Equal {
            return value;
        }
    }
    xs.len().cmp(&ys.len())
}

fn sorted_entries(map: &dyn Map) -> Vec<(Value<'_>, Value<'_>)> {
    let mut entries: Vec<_> = map.entries().collect();
    // Keys are unique within a map, so the sort has no equal elements.
    entries.sort_unstable_by(|(a, _), (b, _)| value_cmp(*a, *b));
    entries
}

/// Compares the residual undecoded data of two messages: entries order by
/// field number, then wire category, then payload bytes, and the sequence
/// with fewer entries orders first once the shared prefix is equal. Entries
/// may be surfaced in arrival order, so both sides sort before comparing.
fn compare_unknown(x: &dyn Message, y: &dyn Message) -> Ordering {
    let mut xs: Vec<UnknownField> = x.unknown_fields().collect();
    let mut ys: Vec<UnknownField> = y.unknown_fields().collect();
    xs.sort_unstable();
    ys.sort_unstable();
    xs.cmp(&ys)
}
