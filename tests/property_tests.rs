use dnarank::{max_data_bits, HomopolymerCodec};
use proptest::prelude::*;

fn max_run(code: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;
    for symbol in code.chars() {
        current = if previous == Some(symbol) { current + 1 } else { 1 };
        previous = Some(symbol);
        longest = longest.max(current);
    }
    longest
}

proptest! {
    #[test]
    fn test_roundtrip_and_run_bound(
        limit in 1usize..=5,
        len in 1usize..=24,
        raw in prop::collection::vec(any::<bool>(), 2..64),
    ) {
        let capacity = max_data_bits(limit, len).unwrap();
        let min = if limit == 1 { 2 } else { 1 };
        prop_assume!(capacity >= min);
        let width = raw.len().min(capacity);
        prop_assume!(width >= min);

        let bits: String = raw[..width]
            .iter()
            .map(|&bit| if bit { '1' } else { '0' })
            .collect();

        let codec = HomopolymerCodec::new(limit, len, width).unwrap();
        let code = codec.encode(&bits).unwrap();

        prop_assert_eq!(code.chars().count(), len);
        prop_assert!(code.chars().all(|symbol| ('0'..='3').contains(&symbol)));
        prop_assert!(max_run(&code) <= limit);
        prop_assert_eq!(codec.decode(&code).unwrap(), bits);
    }

    #[test]
    fn test_distinct_payloads_get_distinct_codewords(
        limit in 1usize..=5,
        len in 2usize..=10,
        a in 0u64..1 << 12,
        b in 0u64..1 << 12,
    ) {
        prop_assume!(a != b);
        let capacity = max_data_bits(limit, len).unwrap();
        let width = capacity.min(12);
        let min = if limit == 1 { 2 } else { 1 };
        prop_assume!(width >= min);
        prop_assume!(a < 1 << width && b < 1 << width);

        let render = |value: u64| -> String {
            (0..width)
                .rev()
                .map(|shift| if (value >> shift) & 1 == 1 { '1' } else { '0' })
                .collect()
        };

        let codec = HomopolymerCodec::new(limit, len, width).unwrap();
        prop_assert_ne!(
            codec.encode(&render(a)).unwrap(),
            codec.encode(&render(b)).unwrap()
        );
    }
}
