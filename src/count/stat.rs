/// Bytes the kernel returns for a counter without extra `read_format` fields.
pub const COUNT_SIZE: usize = size_of::<u64>();

// https://github.com/torvalds/linux/blob/v6.13/include/uapi/linux/perf_event.h#L344
// struct read_format {
//     u64 value;
// };
//
// The kernel writes the value in host byte order.
pub(super) fn decode(buf: &[u8]) -> Option<u64> {
    let bytes = buf.get(..COUNT_SIZE)?.try_into().ok()?;
    Some(u64::from_ne_bytes(bytes))
}

#[cfg(test)]
mod test {
    use super::decode;

    #[test]
    fn test_decode() {
        let value = 0x0123_4567_89ab_cdef_u64;
        assert_eq!(decode(&value.to_ne_bytes()), Some(value));
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn test_decode_le() {
        assert_eq!(decode(&[0x0a, 0, 0, 0, 0, 0, 0, 0]), Some(10));
    }

    #[test]
    fn test_decode_short() {
        assert_eq!(decode(&[]), None);
        assert_eq!(decode(&[0x0a, 0, 0, 0]), None);
        assert_eq!(decode(&[0; 7]), None);
    }
}
