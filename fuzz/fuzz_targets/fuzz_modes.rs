#![no_main]
use libfuzzer_sys::fuzz_target;

use cipherkit_crypto::modes::{BlockCipher, Cbc, Ctr, Ecb};
use cipherkit_crypto::xor::XorCipher;

fuzz_target!(|data: &[u8]| {
    let Some((&width, rest)) = data.split_first() else {
        return;
    };
    let block_size = (width as usize % 32) + 1;
    let key = b"fuzz key";

    let ecb = BlockCipher::new(XorCipher::new(block_size), Ecb::new(block_size).unwrap()).unwrap();
    let cbc = BlockCipher::new(XorCipher::new(block_size), Cbc::new(block_size).unwrap()).unwrap();
    let ctr = BlockCipher::new(XorCipher::new(block_size), Ctr::new(block_size).unwrap()).unwrap();

    assert_eq!(ecb.decrypt(key, &ecb.encrypt(key, rest).unwrap()).unwrap(), rest);
    assert_eq!(cbc.decrypt(key, &cbc.encrypt(key, rest).unwrap()).unwrap(), rest);
    assert_eq!(ctr.decrypt(key, &ctr.encrypt(key, rest).unwrap()).unwrap(), rest);
});
