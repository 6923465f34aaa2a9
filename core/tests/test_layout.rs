// Layout planner suite: offsets, data start, needed size, alignment checks.

#[cfg(test)]
mod tests {
    use bfast_core::{
        constants::ALIGNMENT,
        layout::{compute_data_start, compute_needed_size, compute_offsets, verify_alignment, ByteRange, LayoutPlan},
        types::{BfastError, ErrorKind},
    };

// ## 1️⃣ Data start

    #[test]
    fn data_start_rounds_header_plus_table_up_to_64() {
        assert_eq!(compute_data_start(0), 64);
        assert_eq!(compute_data_start(1), 64);  // 48
        assert_eq!(compute_data_start(2), 64);  // 64
        assert_eq!(compute_data_start(3), 128); // 80
        assert_eq!(compute_data_start(6), 128); // 128
        assert_eq!(compute_data_start(7), 192); // 144
    }

// ## 2️⃣ Offsets

    #[test]
    fn two_named_buffers_scenario() {
        // names "xs\0ys\0", xs = 12 bytes, ys = 24 bytes
        let ranges = compute_offsets(&[6, 12, 24]).unwrap();
        assert_eq!(
            ranges,
            vec![
                ByteRange::new(128, 134),
                ByteRange::new(192, 204),
                ByteRange::new(256, 280),
            ]
        );
        assert_eq!(compute_needed_size(&[6, 12, 24]).unwrap(), 280);
    }

    #[test]
    fn empty_buffers_take_no_space() {
        let ranges = compute_offsets(&[0, 0, 10]).unwrap();
        assert_eq!(
            ranges,
            vec![
                ByteRange::new(128, 128),
                ByteRange::new(128, 128),
                ByteRange::new(128, 138),
            ]
        );
        assert_eq!(compute_needed_size(&[0, 0, 10]).unwrap(), 138);
    }

    #[test]
    fn buffer_ending_on_boundary_needs_no_padding() {
        let ranges = compute_offsets(&[64, 1]).unwrap();
        assert_eq!(ranges, vec![ByteRange::new(64, 128), ByteRange::new(128, 129)]);
    }

    #[test]
    fn no_buffers_needs_only_the_preamble() {
        assert!(compute_offsets(&[]).unwrap().is_empty());
        assert_eq!(compute_needed_size(&[]).unwrap(), 64);
    }

    #[test]
    fn every_occupied_start_is_aligned() {
        let sizes = [5, 0, 63, 64, 65, 1, 0, 200];
        let ranges = compute_offsets(&sizes).unwrap();
        assert_eq!(ranges.len(), sizes.len());
        for (r, &size) in ranges.iter().zip(&sizes) {
            assert_eq!(r.len(), size);
            assert_eq!(r.begin % ALIGNMENT, 0);
        }
        verify_alignment(&ranges).unwrap();
    }

// ## 3️⃣ Plan

    #[test]
    fn plan_matches_free_functions() {
        let sizes = [6, 12, 24];
        let plan = LayoutPlan::new(&sizes).unwrap();
        assert_eq!(plan.data_start(), 128);
        assert_eq!(plan.ranges(), compute_offsets(&sizes).unwrap().as_slice());
        assert_eq!(plan.needed_size(), compute_needed_size(&sizes).unwrap());
    }

// ## 4️⃣ Alignment verification

    #[test]
    fn unaligned_occupied_range_is_rejected() {
        let ranges = [ByteRange::new(64, 70), ByteRange::new(70, 80)];
        let err = verify_alignment(&ranges).unwrap_err();
        assert_eq!(err, BfastError::UnalignedBuffer { index: 1, begin: 70, alignment: 64 });
        assert_eq!(err.kind(), ErrorKind::Alignment);
    }

    #[test]
    fn unaligned_empty_range_is_allowed() {
        let ranges = [ByteRange::new(64, 70), ByteRange::new(70, 70)];
        verify_alignment(&ranges).unwrap();
    }

    #[test]
    fn byte_range_helpers() {
        let r = ByteRange::new(128, 134);
        assert_eq!(r.len(), 6);
        assert!(!r.is_empty());
        assert_eq!(r.as_index_range(), 128..134);
        assert!(ByteRange::new(5, 5).is_empty());
        assert_eq!(ByteRange::new(9, 5).len(), 0);
        assert_eq!(ByteRange::LEN, 16);
    }

// ## 5️⃣ Oversized inputs

    #[test]
    fn sizes_past_u64_are_rejected() {
        let err = compute_offsets(&[u64::MAX - 10, 5]).unwrap_err();
        assert_eq!(err, BfastError::LayoutOverflow { index: 0, size: u64::MAX - 10 });
        assert_eq!(err.kind(), ErrorKind::Size);

        // end fits, rounding it up to the next boundary does not
        assert!(matches!(
            compute_offsets(&[u64::MAX - 100, 5]),
            Err(BfastError::LayoutOverflow { index: 0, .. })
        ));

        assert!(matches!(
            compute_needed_size(&[1, u64::MAX - 100]),
            Err(BfastError::LayoutOverflow { index: 1, size }) if size == u64::MAX - 100
        ));
        assert!(LayoutPlan::new(&[u64::MAX]).is_err());
    }
}
