use bytespan::scalar::{
    bytes_from_u16_view, bytes_from_u32_view, bytes_from_u64_view, u16_view_from_bytes,
    u32_view_from_bytes, u64_view_from_bytes,
};
use bytespan::text::{bytes_from_str, str_from_bytes};
use proptest::prelude::*;

proptest! {
    #[test]
    fn u16_roundtrip(values in proptest::collection::vec(any::<u16>(), 0..64)) {
        let bytes = bytes_from_u16_view(&values);
        prop_assert_eq!(bytes.len(), values.len() * 2);
        prop_assert_eq!(u16_view_from_bytes(bytes).unwrap(), values.as_slice());
    }

    #[test]
    fn u32_roundtrip(values in proptest::collection::vec(any::<u32>(), 0..64)) {
        let bytes = bytes_from_u32_view(&values);
        prop_assert_eq!(bytes.len(), values.len() * 4);
        prop_assert_eq!(u32_view_from_bytes(bytes).unwrap(), values.as_slice());
    }

    #[test]
    fn u64_roundtrip(values in proptest::collection::vec(any::<u64>(), 0..64)) {
        let bytes = bytes_from_u64_view(&values);
        prop_assert_eq!(bytes.len(), values.len() * 8);
        prop_assert_eq!(u64_view_from_bytes(bytes).unwrap(), values.as_slice());
    }

    #[test]
    fn non_multiple_lengths_always_fail(len in 1usize..256, width in prop_oneof![Just(2usize), Just(4), Just(8)]) {
        prop_assume!(len % width != 0);
        let buf = vec![0u8; len];
        let failed = match width {
            2 => u16_view_from_bytes(&buf).is_err(),
            4 => u32_view_from_bytes(&buf).is_err(),
            _ => u64_view_from_bytes(&buf).is_err(),
        };
        prop_assert!(failed);
    }

    #[test]
    fn text_identity(s in "\\PC*") {
        let bytes = bytes_from_str(&s);
        prop_assert_eq!(str_from_bytes(bytes).unwrap(), s.as_str());
    }
}
