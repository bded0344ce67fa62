use bytes::{BufMut, BytesMut};
use rand::Rng;

/// Bytes that exercise the interesting corners of the separator and
/// successor rules: zero, one, letters, and the top of the byte range.
static K_TEST_CHARS: [u8; 10] = [0, 1, b'a', b'b', b'c', b'd', b'e', 0xfd, 0xfe, 0xff];

pub fn random_key<R: Rng>(rng: &mut R, len: usize) -> BytesMut {
    let mut res = BytesMut::with_capacity(len);
    for _ in 0..len {
        res.put_u8(K_TEST_CHARS[rng.random_range(0..K_TEST_CHARS.len())])
    }
    res
}

/// An arbitrary byte string, including ones too short to be internal keys.
pub fn random_encoded_key<R: Rng>(rng: &mut R, max_len: usize) -> BytesMut {
    let len = rng.random_range(0..=max_len);
    random_key(rng, len)
}
