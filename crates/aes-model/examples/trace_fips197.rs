//! Prints the round keys and the per-step trace for the FIPS-197 Appendix B
//! vector, in the line format a simulator log is diffed against.

use aes_model::{Aes, Block, Key, Trace};

fn main() -> Result<(), aes_model::Error> {
    let key = Key::from_words(&[0x2b7e1516, 0x28aed2a6, 0xabf71588, 0x09cf4f3c])?;
    let plaintext: Block = [
        0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07,
        0x34,
    ];

    let aes = Aes::new(&key);
    println!("key: {} bits", key.size().bits());
    print!("{}", aes.schedule());

    let mut trace = Trace::new();
    let ciphertext = aes.encrypt_block_traced(&plaintext, &mut trace);
    print!("{trace}");

    assert_eq!(aes.decrypt_block(&ciphertext), plaintext);
    println!("example succeeded; ciphertext decrypts back to the input");
    Ok(())
}
