use crate::db::internal_key::{is_valid_trailer, split_internal_key, InternalKey};
use crate::util::comparator::Comparator;
use bytes::BytesMut;
use std::cmp::Ordering;

/// Orders internal keys by user key ascending, then by trailer descending:
/// among versions of one user key the highest sequence number comes first,
/// and for equal sequence numbers the larger kind does.
///
/// Malformed keys sort below every well-formed key and among themselves by
/// their raw bytes. The empty string sorts lowest.
#[inline]
pub fn internal_compare<C: Comparator + ?Sized>(
    cmp: &C,
    a: &InternalKey,
    b: &InternalKey,
) -> Ordering {
    compare_parts(cmp, (a.user_key(), a.trailer()), (b.user_key(), b.trailer()))
}

#[inline(always)]
fn compare_parts<C: Comparator + ?Sized>(cmp: &C, a: (&[u8], u64), b: (&[u8], u64)) -> Ordering {
    match (is_valid_trailer(a.1), is_valid_trailer(b.1)) {
        (true, true) => cmp.compare(a.0, b.0).then_with(|| b.1.cmp(&a.1)),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        // Decoding left the raw input in the user key.
        (false, false) => a.0.cmp(b.0),
    }
}

/// [`Comparator`] over encoded internal keys, built on a user-key comparator.
/// This is the ordering installed into the memtable, the block builder and the
/// merging iterator.
#[derive(Debug, Clone, Default)]
pub struct InternalKeyComparator<C: Comparator> {
    user_comparator_: C,
}

impl<C: Comparator> InternalKeyComparator<C> {
    pub fn new(user_comparator: C) -> InternalKeyComparator<C> {
        InternalKeyComparator {
            user_comparator_: user_comparator,
        }
    }

    pub fn user_comparator(&self) -> &C {
        &self.user_comparator_
    }

    pub fn compare_keys(&self, a: &InternalKey, b: &InternalKey) -> Ordering {
        internal_compare(&self.user_comparator_, a, b)
    }
}

impl<C: Comparator> Comparator for InternalKeyComparator<C> {
    fn compare(&self, akey: &[u8], bkey: &[u8]) -> Ordering {
        compare_parts(
            &self.user_comparator_,
            split_internal_key(akey),
            split_internal_key(bkey),
        )
    }

    fn name(&self) -> &'static str {
        "leveldb.InternalKeyComparator"
    }

    fn find_shortest_separator(&self, start: &mut BytesMut, limit: &[u8]) {
        let a = InternalKey::decode(start);
        let b = InternalKey::decode(limit);
        let sep = a.separator(&self.user_comparator_, BytesMut::new(), &b);
        if sep != a {
            start.clear();
            sep.encode(start);
        }
    }

    fn find_short_successor(&self, key: &mut BytesMut) {
        let k = InternalKey::decode(key);
        let succ = k.successor(&self.user_comparator_, BytesMut::new());
        if succ != k {
            key.clear();
            succ.encode(key);
        }
    }
}
