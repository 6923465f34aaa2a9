// Name buffer suite: NUL-terminated names, lenient tail handling, count checks.

#[cfg(test)]
mod tests {
    use bfast_core::{
        names::{decode_names, encode_names, split_names},
        types::{BfastError, ErrorKind},
    };

// ## 1️⃣ Splitting

    #[test]
    fn split_terminated_names() {
        assert_eq!(split_names(b"xs\0ys\0").unwrap(), vec!["xs", "ys"]);
    }

    #[test]
    fn split_empty_buffer_has_no_names() {
        assert!(split_names(b"").unwrap().is_empty());
    }

    #[test]
    fn split_single_empty_name() {
        assert_eq!(split_names(b"\0").unwrap(), vec![""]);
        assert_eq!(split_names(b"a\0\0").unwrap(), vec!["a", ""]);
    }

    #[test]
    fn split_accepts_unterminated_last_name() {
        assert_eq!(split_names(b"xs\0ys").unwrap(), vec!["xs", "ys"]);
    }

    #[test]
    fn split_is_zero_copy() {
        let buf = b"alpha\0beta\0".to_vec();
        let names = split_names(&buf).unwrap();
        assert_eq!(names[1].as_ptr(), buf[6..].as_ptr());
    }

    #[test]
    fn split_rejects_invalid_utf8() {
        let err = split_names(b"ok\0b\xFFd\0").unwrap_err();
        assert_eq!(err, BfastError::InvalidName { index: 1, valid_up_to: 1 });
        assert_eq!(err.kind(), ErrorKind::Format);
    }

// ## 2️⃣ Encoding

    #[test]
    fn encode_then_split_preserves_order_and_unicode() {
        let names = ["positions", "", "ñandú", "a.b_c"];
        let buf = encode_names(names);
        assert_eq!(buf.iter().filter(|&&b| b == 0).count(), names.len());
        assert_eq!(split_names(&buf).unwrap(), names);
    }

// ## 3️⃣ Count check

    #[test]
    fn decode_requires_one_name_per_buffer() {
        assert_eq!(decode_names(b"xs\0ys\0", 2).unwrap(), vec!["xs", "ys"]);

        let err = decode_names(b"xs\0ys\0", 3).unwrap_err();
        assert_eq!(err, BfastError::NameCountMismatch { names: 2, buffers: 3 });
        assert_eq!(err.kind(), ErrorKind::NameCount);
    }

    #[test]
    fn decode_empty_buffer_for_no_data() {
        assert!(decode_names(b"", 0).unwrap().is_empty());
        assert!(matches!(
            decode_names(b"", 1),
            Err(BfastError::NameCountMismatch { names: 0, buffers: 1 })
        ));
    }
}
