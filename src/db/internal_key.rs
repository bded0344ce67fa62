//! Internal key encoding.
//!
//! ```text
//! +-------------------+-------------------------------------+
//! | user key (N)      | trailer: (seq << 8) | kind, u64 LE  |
//! +-------------------+-------------------------------------+
//! ```
//!
//! The sequence number occupies the high 56 bits of the trailer and the kind
//! the low 8 bits. Decoding is total: any byte string yields some key, and
//! [`InternalKey::is_valid`] tells whether it was well formed. A malformed
//! key keeps its raw bytes as the user key.

use crate::db::internal_key_comparator::internal_compare;
use crate::obj::status::Status;
use crate::util::coding::{decode_fixed64, put_fixed64};
use crate::util::comparator::Comparator;
use bytes::{Bytes, BytesMut};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::cmp::Ordering;
use std::fmt;
use tracing::{trace, warn};

/// Largest sequence number; reserved for synthetic boundary keys.
pub const MAX_SEQUENCE_NUMBER: u64 = (1u64 << 56) - 1;

pub(crate) const TRAILER_LEN: usize = size_of::<u64>();

/// Trailer of a malformed key: kind `Invalid`.
const INVALID_TRAILER: u64 = u64::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive)]
#[repr(u8)]
pub enum InternalKeyKind {
    Delete = 0,
    Set = 1,
    Merge = 2,
    LogData = 3,
    SingleDelete = 7,
    RangeDelete = 15,
    /// Not a real kind. Larger than every kind above; only synthetic
    /// boundary keys carry it.
    Max = 17,
    /// Reported for malformed keys. Never encoded on purpose.
    Invalid = 255,
}

impl From<u8> for InternalKeyKind {
    fn from(value: u8) -> Self {
        InternalKeyKind::from_u8(value).unwrap_or(InternalKeyKind::Invalid)
    }
}

impl fmt::Display for InternalKeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InternalKeyKind::Delete => "DEL",
            InternalKeyKind::Set => "SET",
            InternalKeyKind::Merge => "MERGE",
            InternalKeyKind::LogData => "LOGDATA",
            InternalKeyKind::SingleDelete => "SINGLEDEL",
            InternalKeyKind::RangeDelete => "RANGEDEL",
            InternalKeyKind::Max => "MAX",
            InternalKeyKind::Invalid => "INVALID",
        };
        f.write_str(s)
    }
}

#[inline(always)]
pub fn pack_sequence_and_kind(seq: u64, kind: InternalKeyKind) -> u64 {
    assert!(seq <= MAX_SEQUENCE_NUMBER, "sequence number {seq} exceeds 56 bits");
    (seq << 8) | (kind as u64)
}

#[inline(always)]
pub(crate) fn is_valid_trailer(trailer: u64) -> bool {
    trailer as u8 <= InternalKeyKind::Max as u8
}

/// Splits an encoded key into user key and trailer. Input that is shorter
/// than a trailer or carries a kind above `Max` is all user key, paired with
/// [`INVALID_TRAILER`].
#[inline]
pub(crate) fn split_internal_key(encoded: &[u8]) -> (&[u8], u64) {
    if let Some(n) = encoded.len().checked_sub(TRAILER_LEN) {
        let trailer = decode_fixed64(&encoded[n..]);
        if is_valid_trailer(trailer) {
            return (&encoded[..n], trailer);
        }
    }
    (encoded, INVALID_TRAILER)
}

#[inline]
pub fn extract_user_key(encoded: &[u8]) -> &[u8] {
    split_internal_key(encoded).0
}

#[inline]
pub fn extract_trailer(encoded: &[u8]) -> u64 {
    split_internal_key(encoded).1
}

/// A decoded internal key: user key plus packed trailer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InternalKey {
    user_key: Bytes,
    trailer: u64,
}

impl InternalKey {
    /// Panics if `seq` does not fit in 56 bits or `kind` is `Invalid`; use
    /// [`InternalKey::try_new`] for values that come from outside.
    pub fn new(user_key: &[u8], seq: u64, kind: InternalKeyKind) -> InternalKey {
        assert_ne!(kind, InternalKeyKind::Invalid);
        InternalKey {
            user_key: Bytes::copy_from_slice(user_key),
            trailer: pack_sequence_and_kind(seq, kind),
        }
    }

    pub fn try_new(user_key: &[u8], seq: u64, kind: InternalKeyKind) -> Result<InternalKey, Status> {
        if seq > MAX_SEQUENCE_NUMBER {
            return Err(Status::invalid_argument(
                "sequence number out of range",
                Some(&seq.to_string()),
            ));
        }
        if kind == InternalKeyKind::Invalid {
            return Err(Status::invalid_argument("invalid key kind", None));
        }
        Ok(InternalKey::new(user_key, seq, kind))
    }

    /// The key used to stand in for a whole range of user keys in an index:
    /// it sorts before every real version of `user_key`.
    fn boundary(user_key: Bytes) -> InternalKey {
        InternalKey {
            user_key,
            trailer: pack_sequence_and_kind(MAX_SEQUENCE_NUMBER, InternalKeyKind::Max),
        }
    }

    pub fn decode(encoded: &[u8]) -> InternalKey {
        let (user_key, trailer) = split_internal_key(encoded);
        InternalKey {
            user_key: Bytes::copy_from_slice(user_key),
            trailer,
        }
    }

    /// Same as [`InternalKey::decode`], sharing `encoded`'s storage.
    pub fn decode_from(encoded: Bytes) -> InternalKey {
        let (user_key, trailer) = split_internal_key(&encoded);
        let n = user_key.len();
        InternalKey {
            user_key: encoded.slice(..n),
            trailer,
        }
    }

    pub fn encode(&self, dst: &mut BytesMut) {
        dst.reserve(self.encoded_len());
        dst.extend_from_slice(&self.user_key);
        put_fixed64(dst, self.trailer);
    }

    pub fn encode_to_bytes(&self) -> Bytes {
        let mut dst = BytesMut::with_capacity(self.encoded_len());
        self.encode(&mut dst);
        dst.freeze()
    }

    pub fn encoded_len(&self) -> usize {
        self.user_key.len() + TRAILER_LEN
    }

    /// Whether the key was well formed: it carried a full trailer and its
    /// kind is at most [`InternalKeyKind::Max`].
    pub fn is_valid(&self) -> bool {
        is_valid_trailer(self.trailer)
    }

    pub fn user_key(&self) -> &[u8] {
        &self.user_key
    }

    pub fn seq_num(&self) -> u64 {
        self.trailer >> 8
    }

    /// The typed kind. Bytes with no named kind read as `Invalid`; use
    /// [`InternalKey::kind_byte`] for the raw value.
    pub fn kind(&self) -> InternalKeyKind {
        InternalKeyKind::from(self.kind_byte())
    }

    pub fn kind_byte(&self) -> u8 {
        self.trailer as u8
    }

    pub fn trailer(&self) -> u64 {
        self.trailer
    }

    /// Returns a key `k` with `self <= k < other` whose user key is as short
    /// as `cmp` can make it, for use as an index entry between two blocks.
    ///
    /// `buf` is scratch space for the shortened user key; its contents are
    /// discarded. `self` must sort before `other`; otherwise the result is
    /// unspecified (though always a well-formed key).
    pub fn separator<C: Comparator + ?Sized>(
        &self,
        cmp: &C,
        mut buf: BytesMut,
        other: &InternalKey,
    ) -> InternalKey {
        if cmp.compare(&self.user_key, &other.user_key) == Ordering::Equal {
            // Every version of a user key has to stay reachable from one
            // index entry.
            return self.clone();
        }
        buf.clear();
        buf.extend_from_slice(&self.user_key);
        cmp.find_shortest_separator(&mut buf, &other.user_key);
        if cmp.compare(&self.user_key, &buf) != Ordering::Less {
            return self.clone();
        }
        let sep = InternalKey::boundary(buf.freeze());
        trace!(from = self.user_key.len(), to = sep.user_key.len(), "shortened index key");
        debug_assert!(internal_compare(cmp, self, &sep) == Ordering::Less);
        debug_assert!(internal_compare(cmp, &sep, other) == Ordering::Less);
        sep
    }

    /// Returns a key `k >= self` with a user key as short as `cmp` can make
    /// it. Used for the last index entry of a table, which has no upper
    /// neighbour.
    pub fn successor<C: Comparator + ?Sized>(&self, cmp: &C, mut buf: BytesMut) -> InternalKey {
        buf.clear();
        buf.extend_from_slice(&self.user_key);
        cmp.find_short_successor(&mut buf);
        if cmp.compare(&self.user_key, &buf) != Ordering::Less {
            return self.clone();
        }
        let succ = InternalKey::boundary(buf.freeze());
        debug_assert!(internal_compare(cmp, self, &succ) == Ordering::Less);
        succ
    }
}

impl fmt::Display for InternalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{},{}",
            self.user_key.escape_ascii(),
            self.seq_num(),
            self.kind()
        )
    }
}

/// Decodes `encoded`, rejecting keys that fail [`InternalKey::is_valid`].
/// For callers that must not store or act on a malformed key.
pub fn parse_internal_key(encoded: &[u8]) -> Result<InternalKey, Status> {
    if encoded.len() < TRAILER_LEN {
        warn!(len = encoded.len(), "internal key shorter than its trailer");
        return Err(Status::corruption(
            "invalid internal key",
            Some("shorter than trailer"),
        ));
    }
    let kind = encoded[encoded.len() - TRAILER_LEN];
    if kind > InternalKeyKind::Max as u8 {
        warn!(len = encoded.len(), kind, "internal key has unknown kind");
        return Err(Status::corruption(
            "invalid internal key",
            Some(&format!("kind {} exceeds max", kind)),
        ));
    }
    Ok(InternalKey::decode(encoded))
}
