use bytes::{BufMut, BytesMut};

pub fn encode_fixed64(dst: &mut [u8], value: u64) {
    dst[0] = value as u8;
    dst[1] = (value >> 8) as u8;
    dst[2] = (value >> 16) as u8;
    dst[3] = (value >> 24) as u8;
    dst[4] = (value >> 32) as u8;
    dst[5] = (value >> 40) as u8;
    dst[6] = (value >> 48) as u8;
    dst[7] = (value >> 56) as u8;
}

pub fn put_fixed64(dst: &mut BytesMut, value: u64) {
    let mut buf: [u8; size_of::<u64>()] = [0; size_of::<u64>()];
    encode_fixed64(&mut buf, value);
    dst.put_slice(&buf);
}

/// Reads a little-endian u64 from the first 8 bytes of `src`.
#[inline]
pub fn decode_fixed64(src: &[u8]) -> u64 {
    debug_assert!(src.len() >= size_of::<u64>());
    (src[0] as u64)
        | ((src[1] as u64) << 8)
        | ((src[2] as u64) << 16)
        | ((src[3] as u64) << 24)
        | ((src[4] as u64) << 32)
        | ((src[5] as u64) << 40)
        | ((src[6] as u64) << 48)
        | ((src[7] as u64) << 56)
}
