use bytes::BytesMut;
use std::cmp::Ordering;
use std::sync::Arc;

pub trait Comparator: Send + Sync {
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering;
    fn name(&self) -> &'static str;
    /// Leaves `start` unchanged when nothing shorter fits in `[start, limit)`.
    fn find_shortest_separator(&self, start: &mut BytesMut, limit: &[u8]);
    fn find_short_successor(&self, key: &mut BytesMut);
}

impl<T: Comparator + ?Sized> Comparator for Arc<T> {
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        (**self).compare(a, b)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn find_shortest_separator(&self, start: &mut BytesMut, limit: &[u8]) {
        (**self).find_shortest_separator(start, limit)
    }

    fn find_short_successor(&self, key: &mut BytesMut) {
        (**self).find_short_successor(key)
    }
}
