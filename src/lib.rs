//! Internal key layout and ordering for an LSM-tree storage engine.
//!
//! An internal key is a user key followed by an 8-byte little-endian trailer
//! holding `(sequence << 8) | kind`. Internal keys sort by user key ascending
//! (through a pluggable [`Comparator`]), then by trailer descending so the
//! newest write of a user key comes first.

pub mod db;
pub mod obj;
pub mod util;

pub use db::internal_key::{
    parse_internal_key, InternalKey, InternalKeyKind, MAX_SEQUENCE_NUMBER,
};
pub use db::internal_key_comparator::{internal_compare, InternalKeyComparator};
pub use obj::options::Options;
pub use obj::status::{Status, StatusCode};
pub use util::bytewise_comparator_impl::{bytewise_comparator, BytewiseComparatorImpl};
pub use util::comparator::Comparator;
