#![no_main]
use dnarank::{max_data_bits, HomopolymerCodec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, u8, Vec<u8>)| {
    let (limit, len, raw) = data;
    let limit = (limit % 5) as usize + 1; // 1 to 5
    let len = (len % 48) as usize + 1; // 1 to 48

    let capacity = max_data_bits(limit, len).unwrap();
    let min = if limit == 1 { 2 } else { 1 };
    if raw.len() < min {
        return;
    }
    let width = raw.len().min(capacity);
    if width < min {
        return;
    }

    let bits: String = raw[..width]
        .iter()
        .map(|byte| if byte % 2 == 1 { '1' } else { '0' })
        .collect();

    let codec = HomopolymerCodec::new(limit, len, width).unwrap();
    let code = codec.encode(&bits).unwrap();

    assert_eq!(code.len(), len);
    let symbols: Vec<u8> = code.bytes().map(|b| b - b'0').collect();
    assert!(symbols.iter().all(|&s| s < 4));
    let mut run = 0;
    let mut previous = None;
    for &symbol in &symbols {
        run = if previous == Some(symbol) { run + 1 } else { 1 };
        previous = Some(symbol);
        assert!(run <= limit);
    }

    assert_eq!(codec.decode(&code).unwrap(), bits);
});
