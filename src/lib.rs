//! Msgord provides a deterministic total ordering over schema-driven
//! structured messages: the kind of value a protocol-buffer-style reflection
//! layer produces. Given two message handles it returns an
//! [`Ordering`](std::cmp::Ordering) such that the relation is a strict weak
//! ordering and two messages compare equal exactly when they are
//! structurally equal.
//!
//! The ordering is presence-aware (an absent field orders below a field set
//! to its zero value), recursive through nested messages, lists, and maps,
//! and total over floats (NaN equals NaN and orders below everything else).
//! Heterogeneous records can therefore be sorted, deduplicated, or placed
//! into ordered containers without per-schema comparison code.
//!
//! Messages reach the comparator through the [`Message`], [`List`], and
//! [`Map`] traits; the [`DynamicMessage`] family implements them for callers
//! without generated message types.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use msgord::{DynamicMessage, compare, less_than};
//!
//! let mut x = DynamicMessage::new("example.Record");
//! x.set(1, 5i64);
//! let mut y = DynamicMessage::new("example.Record");
//! y.set(1, 7i64);
//!
//! assert_eq!(compare(Some(&x), Some(&y)), Ordering::Less);
//! assert!(less_than(Some(&x), Some(&y)));
//! ```

mod compare;
mod dynamic;
mod error;
mod reflect;
mod value;

pub use crate::compare::{compare, equal, less_than};
pub use crate::dynamic::{DynamicList, DynamicMap, DynamicMessage, DynamicValue};
pub use crate::error::{BuildError, BuildErrorKind, BuildResult};
pub use crate::reflect::{FieldNumber, List, Map, Message, UnknownField, WireType};
pub use crate::value::{Kind, Value};
