use crate::util::comparator::Comparator;
use bytes::BytesMut;
use std::cmp::Ordering;
use std::sync::{Arc, OnceLock};

static BYTEWISE: OnceLock<Arc<dyn Comparator>> = OnceLock::new();

/// Unsigned lexicographic order; a proper prefix sorts before its extensions.
#[derive(Debug, Default, Clone, Copy)]
pub struct BytewiseComparatorImpl {}

impl Comparator for BytewiseComparatorImpl {
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        a.cmp(b)
    }

    fn name(&self) -> &'static str {
        "leveldb.BytewiseComparator"
    }

    fn find_shortest_separator(&self, start: &mut BytesMut, limit: &[u8]) {
        let min_length = std::cmp::min(start.len(), limit.len());
        let mut diff_index = 0usize;
        while diff_index < min_length && start[diff_index] == limit[diff_index] {
            diff_index += 1;
        }
        if diff_index >= min_length {
            // One key is a prefix of the other.
            return;
        }
        let diff_byte = start[diff_index];
        if diff_byte >= limit[diff_index] {
            return;
        }
        // diff_byte < limit[diff_index] <= 0xff, so the increment cannot wrap.
        let cut = if diff_byte + 1 < limit[diff_index] || diff_index + 1 < limit.len() {
            Some(diff_index)
        } else {
            // start[diff_index] + 1 == limit[diff_index] and limit ends there:
            // any key of the form start[..diff_index + 1] ++ [x] with a larger
            // tail still sorts below limit.
            (diff_index + 1..start.len()).find(|&i| start[i] != 0xff)
        };
        if let Some(i) = cut {
            if i + 1 < start.len() {
                start[i] += 1;
                start.truncate(i + 1);
                debug_assert!(self.compare(&start[..], limit) == Ordering::Less);
            }
        }
    }

    fn find_short_successor(&self, key: &mut BytesMut) {
        if let Some(i) = key.iter().position(|&byte| byte != 0xff) {
            key[i] += 1;
            key.truncate(i + 1);
        }
        // key is a run of 0xff: leave it alone.
    }
}

/// The process-wide bytewise comparator.
pub fn bytewise_comparator() -> Arc<dyn Comparator> {
    BYTEWISE
        .get_or_init(|| Arc::new(BytewiseComparatorImpl {}))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_util::random_key;
    use rand::Rng;

    fn separator(a: &str, b: &str) -> BytesMut {
        let mut start = BytesMut::from(a);
        BytewiseComparatorImpl {}.find_shortest_separator(&mut start, b.as_bytes());
        start
    }

    fn successor(a: &[u8]) -> BytesMut {
        let mut key = BytesMut::from(a);
        BytewiseComparatorImpl {}.find_short_successor(&mut key);
        key
    }

    #[test]
    fn test_compare_is_unsigned_lexicographic() {
        let c = BytewiseComparatorImpl {};
        assert_eq!(c.compare(b"", b""), Ordering::Equal);
        assert_eq!(c.compare(b"", b"\x00"), Ordering::Less);
        assert_eq!(c.compare(b"foo", b"foobar"), Ordering::Less);
        assert_eq!(c.compare(b"\x7f", b"\x80"), Ordering::Less);
        assert_eq!(c.compare(b"\xff", b"\x01\x02"), Ordering::Greater);
        assert_eq!(c.compare(b"abc", b"abc"), Ordering::Equal);
    }

    #[test]
    fn test_find_shortest_separator() {
        let cases = [
            ("foo", "hello", "g"),
            ("foo", "foobar", "foo"),
            ("foobar", "foo", "foobar"),
            ("foo", "bar", "foo"),
            ("foo", "foo", "foo"),
            ("ABC1AAAAA", "ABC2ABB", "ABC2"),
            ("AAA1AAA", "AAA2AA", "AAA2"),
            ("AAA1AAA", "AAA4", "AAA2"),
            ("AAA1AAA", "AAA2", "AAA1B"),
            ("AAA1AAA", "AAA2A", "AAA2"),
            ("AAA1", "AAA2", "AAA1"),
            ("AAA1", "AAA3", "AAA1"),
            ("", "a", ""),
        ];
        for (a, b, want) in cases {
            assert_eq!(&separator(a, b)[..], want.as_bytes(), "separator({a:?}, {b:?})");
        }
    }

    #[test]
    fn test_find_shortest_separator_skips_0xff_tail() {
        let mut start = BytesMut::from(&b"a\xff\xffcd"[..]);
        BytewiseComparatorImpl {}.find_shortest_separator(&mut start, b"b");
        assert_eq!(&start[..], b"a\xff\xffd");

        let mut start = BytesMut::from(&b"a\xff\xff"[..]);
        BytewiseComparatorImpl {}.find_shortest_separator(&mut start, b"b");
        assert_eq!(&start[..], b"a\xff\xff");
    }

    #[test]
    fn test_find_shortest_separator_is_idempotent() {
        for (a, b) in [
            ("foo", "hello"),
            ("ABC1AAAAA", "ABC2ABB"),
            ("AAA1AAA", "AAA2"),
            ("AAA1", "AAA2"),
            ("a", "z"),
        ] {
            let once = separator(a, b);
            let mut twice = once.clone();
            BytewiseComparatorImpl {}.find_shortest_separator(&mut twice, b.as_bytes());
            assert_eq!(once, twice, "separator({a:?}, {b:?})");
        }
    }

    #[test]
    fn test_find_shortest_separator_random_bounds() {
        let c = BytewiseComparatorImpl {};
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let (x_len, y_len) = (rng.random_range(0..8), rng.random_range(0..8));
            let x = random_key(&mut rng, x_len);
            let y = random_key(&mut rng, y_len);
            let (a, b) = match x.cmp(&y) {
                Ordering::Less => (x, y),
                Ordering::Greater => (y, x),
                Ordering::Equal => continue,
            };
            let mut sep = a.clone();
            c.find_shortest_separator(&mut sep, &b);
            assert!(sep.len() <= a.len());
            assert_ne!(c.compare(&sep, &a), Ordering::Less, "{a:?} {b:?} -> {sep:?}");
            assert_eq!(c.compare(&sep, &b), Ordering::Less, "{a:?} {b:?} -> {sep:?}");

            let mut again = sep.clone();
            c.find_shortest_separator(&mut again, &b);
            assert_eq!(again, sep);
        }
    }

    #[test]
    fn test_find_short_successor() {
        assert_eq!(&successor(b"foo")[..], b"g");
        assert_eq!(&successor(b"\xff\xffab")[..], b"\xff\xffb");
        assert_eq!(&successor(b"\xff\xff")[..], b"\xff\xff");
        assert_eq!(&successor(b"")[..], b"");
    }

    #[test]
    fn test_shared_instance() {
        let a = bytewise_comparator();
        let b = bytewise_comparator();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.name(), "leveldb.BytewiseComparator");
    }
}
