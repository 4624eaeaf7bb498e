#![no_main]
use libfuzzer_sys::fuzz_target;
use undiag::rail::{BouncePath, Key};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let rows = u16::from_le_bytes([data[0], data[1]]) as usize;
    let Ok(key) = Key::new(rows) else {
        return;
    };
    let plaintext = &data[2..];

    let mut buckets = vec![Vec::new(); key.rows()];
    for (&unit, row) in plaintext.iter().zip(BouncePath::new(key)) {
        buckets[row].push(unit);
    }
    let ciphertext = buckets.concat();

    let decoded = undiag::decode_with_key(&ciphertext, key).expect("decode failed");
    assert_eq!(decoded, plaintext);
});
