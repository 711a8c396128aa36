use aes_model::{decrypt_block, encrypt_block, expand_key, Aes, Key};
use proptest::collection::vec;
use proptest::prelude::*;

fn any_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![vec(any::<u8>(), 16), vec(any::<u8>(), 24), vec(any::<u8>(), 32)]
}

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(key in any_key(), block: [u8; 16]) {
        let ct = encrypt_block(&key, &block).unwrap();
        prop_assert_eq!(decrypt_block(&key, &ct).unwrap(), block);
    }

    #[test]
    fn cached_and_one_shot_agree(key in any_key(), block: [u8; 16]) {
        let aes = Aes::new(&Key::try_from(&key[..]).unwrap());
        prop_assert_eq!(aes.encrypt_block(&block), encrypt_block(&key, &block).unwrap());
        prop_assert_eq!(aes.decrypt_block(&block), decrypt_block(&key, &block).unwrap());
    }

    #[test]
    fn other_key_lengths_fail(len in 0usize..64) {
        prop_assume!(![16, 24, 32].contains(&len));
        prop_assert!(expand_key(&vec![0u8; len]).is_err());
    }
}
