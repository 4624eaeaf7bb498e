use undiag::rail::{Key, row_lengths};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ciphertext = "HOREL,OL!LWD";
    let key = 3;

    let lengths = row_lengths(ciphertext.chars().count(), Key::new(key)?)?;
    let plaintext = undiag::decode_str(ciphertext, key)?;
    assert_eq!(plaintext, "HELLO,WORLD!");

    println!("rows {lengths:?}: {ciphertext} -> {plaintext}");

    Ok(())
}
