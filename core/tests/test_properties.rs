#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use bfast_core::{
        constants::ALIGNMENT,
        container::{pack, pack_with, unpack, BfastContainer, PackConfig},
        headers::Endianness,
        layout::compute_needed_size,
        parallelism::ParallelismProfile,
    };

    fn named_buffers() -> impl Strategy<Value = Vec<(String, Vec<u8>)>> {
        prop::collection::vec(
            ("[a-z0-9_.]{0,12}", prop::collection::vec(any::<u8>(), 0..300)),
            0..12,
        )
    }

    proptest! {
        #[test]
        fn prop_round_trip(buffers in named_buffers()) {
            let wire = pack(&buffers);
            let views = unpack(&wire).unwrap();
            prop_assert_eq!(views.len(), buffers.len());
            for (view, (name, data)) in views.iter().zip(&buffers) {
                prop_assert_eq!(view.name, name.as_str());
                prop_assert_eq!(view.data, data.as_slice());
            }
        }

        #[test]
        fn prop_layout_invariants(buffers in named_buffers()) {
            let wire = pack(&buffers);
            let c = BfastContainer::parse(&wire).unwrap();
            let h = *c.header();

            prop_assert_eq!(h.num_arrays as usize, buffers.len() + 1);
            prop_assert_eq!(h.data_start % ALIGNMENT, 0);
            prop_assert!(h.data_start >= 32 + 16 * h.num_arrays);
            prop_assert_eq!(h.data_start, c.ranges()[0].begin);
            prop_assert_eq!(h.data_end, c.ranges().last().unwrap().end);
            prop_assert_eq!(h.data_end as usize, wire.len());

            let names_len: u64 = buffers.iter().map(|(n, _)| n.len() as u64 + 1).sum();
            let sizes: Vec<u64> = std::iter::once(names_len)
                .chain(buffers.iter().map(|(_, d)| d.len() as u64))
                .collect();
            prop_assert_eq!(compute_needed_size(&sizes).unwrap() as usize, wire.len());

            for r in c.ranges() {
                prop_assert_eq!(r.begin % ALIGNMENT, 0);
            }
        }

        #[test]
        fn prop_padding_is_zero(buffers in named_buffers()) {
            let wire = pack(&buffers);
            let c = BfastContainer::parse(&wire).unwrap();
            let mut covered = vec![false; wire.len()];
            covered[..32 + 16 * c.ranges().len()].iter_mut().for_each(|b| *b = true);
            for r in c.ranges() {
                covered[r.as_index_range()].iter_mut().for_each(|b| *b = true);
            }
            for (i, byte) in wire.iter().enumerate() {
                if !covered[i] {
                    prop_assert_eq!(*byte, 0, "padding byte {} is not zero", i);
                }
            }
        }

        #[test]
        fn prop_unpack_is_idempotent(buffers in named_buffers()) {
            let wire = pack(&buffers);
            let first = unpack(&wire).unwrap();
            let repacked = pack(&first);
            prop_assert_eq!(&repacked, &wire);
            prop_assert_eq!(unpack(&repacked).unwrap(), first);
        }

        #[test]
        fn prop_endianness_symmetry(buffers in named_buffers(), workers in 1usize..4) {
            let profile = ParallelismProfile::with_workers(workers).min_parallel_bytes(0);
            let same = pack_with(&buffers, &PackConfig::new(Endianness::Same, profile.clone()));
            let swapped = pack_with(&buffers, &PackConfig::new(Endianness::Swapped, profile));

            prop_assert_eq!(same.len(), swapped.len());
            prop_assert_eq!(unpack(&same).unwrap(), unpack(&swapped).unwrap());

            let table_end = 32 + 16 * (buffers.len() + 1);
            prop_assert_eq!(&same[table_end..], &swapped[table_end..]);
        }
    }
}
