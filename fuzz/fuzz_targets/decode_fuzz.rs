#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First 8 bytes pick the key (0 and huge values included), the rest is
    // ciphertext. Decoding must never panic and never report an internal
    // error.
    let Some((head, ciphertext)) = data.split_first_chunk::<8>() else {
        return;
    };
    let key = u64::from_le_bytes(*head) as usize;

    let bytes = undiag::decode(ciphertext, key);
    match &bytes {
        Ok(out) => assert_eq!(out.len(), ciphertext.len()),
        Err(e) => assert!(key == 0 && !e.is_internal(), "unexpected error: {e}"),
    }

    if let Ok(text) = std::str::from_utf8(ciphertext) {
        match undiag::decode_str(text, key) {
            Ok(out) => {
                assert_eq!(out.chars().count(), text.chars().count());
                if text.is_ascii() {
                    assert_eq!(Ok(out.as_bytes()), bytes.as_deref());
                }
            }
            Err(e) => assert!(key == 0 && !e.is_internal(), "unexpected error: {e}"),
        }
    }
});
