use undiag::rail::{Key, reconstruct, row_lengths, split_rows};
use undiag::{ConsistencyError, DecodeError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn stages_compose_like_decode() {
    init_logging();
    let ciphertext: Vec<char> = "WECRLTEERDSOEEFEAOCAIVDEN".chars().collect();
    let key = Key::new(3).unwrap();

    let lengths = row_lengths(ciphertext.len(), key).unwrap();
    assert_eq!(lengths, vec![7, 12, 6]);

    let rows = split_rows(&ciphertext, &lengths).unwrap();
    let plaintext: String = reconstruct(rows, ciphertext.len(), key)
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(plaintext, "WEAREDISCOVEREDFLEEATONCE");
    assert_eq!(
        undiag::decode_str("WECRLTEERDSOEEFEAOCAIVDEN", 3).unwrap(),
        plaintext
    );
}

#[test]
fn multibyte_chars_are_single_units() {
    init_logging();
    assert_eq!(
        undiag::decode_str("hw✓é ö lordll", 4).unwrap(),
        "héllo wörld ✓"
    );
}

#[test]
fn arbitrary_token_units() {
    init_logging();
    // "one two three four" written across 2 rows.
    let ciphertext = ["one", "three", "two", "four"];
    assert_eq!(
        undiag::decode(&ciphertext, 2).unwrap(),
        ["one", "two", "three", "four"]
    );
}

#[test]
fn invalid_key_is_user_error() {
    init_logging();
    let err = undiag::decode_str("HOREL,OL!LWD", 0).unwrap_err();
    assert_eq!(err, DecodeError::InvalidKey { key: 0 });
    assert!(!err.is_internal());
}

#[test]
fn mismatched_layout_is_internal_error() {
    init_logging();
    let key = Key::new(2).unwrap();
    let err = split_rows(b"abc", &[1, 1]).unwrap_err();
    assert!(err.is_internal());

    let rows = split_rows(b"abc", &[1, 2]).unwrap();
    let err = reconstruct(rows, 3, key).unwrap_err();
    assert_eq!(
        err,
        DecodeError::Consistency(ConsistencyError::RowExhausted { row: 0, step: 2 })
    );
}

#[test]
fn batch_decode_matches_single_decode() {
    init_logging();
    let jobs = [
        ("HOREL,OL!LWD", 3),
        ("WAEICVRDERDSOEE", 2),
        ("", 5),
        ("bad key", 0),
        ("ABCED", 4),
    ];
    let results = undiag::decode_batch(&jobs);
    assert_eq!(results.len(), jobs.len());
    for (&(ciphertext, key), result) in jobs.iter().zip(&results) {
        assert_eq!(result, &undiag::decode_str(ciphertext, key));
    }
    assert_eq!(results[4].as_deref(), Ok("ABCDE"));
}

#[test]
fn decode_with_validated_key() {
    init_logging();
    let key = Key::try_from(10i64).unwrap();
    assert_eq!(undiag::decode_with_key(b"abc", key).unwrap(), b"abc");
}

#[test]
fn huge_key_decodes_instead_of_panicking() {
    init_logging();
    assert_eq!(undiag::decode(b"abc", usize::MAX).unwrap(), b"abc");
    assert_eq!(undiag::decode(b"abc", 1usize << 61).unwrap(), b"abc");
    assert_eq!(
        undiag::decode_str("HOREL,OL!LWD", 1usize << 40).unwrap(),
        "HOREL,OL!LWD"
    );
}

#[test]
fn huge_key_layout_is_a_typed_error() {
    init_logging();
    let key = Key::new(usize::MAX).unwrap();
    let err = row_lengths(3, key).unwrap_err();
    assert_eq!(err, DecodeError::KeyTooLarge { rows: usize::MAX });
    assert!(!err.is_internal());
}
