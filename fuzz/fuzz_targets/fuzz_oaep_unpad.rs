#![no_main]
use libfuzzer_sys::fuzz_target;

use cipherkit_crypto::hash::Md5Hash;
use cipherkit_crypto::oaep::{Oaep, OaepConfig};
use cipherkit_crypto::rand::OsRandom;

fuzz_target!(|data: &[u8]| {
    let Some((&rounds, padded)) = data.split_first() else {
        return;
    };
    let config = OaepConfig::builder()
        .rounds(u32::from(rounds % 8) + 1)
        .build()
        .unwrap();
    let oaep = Oaep::with_config(Md5Hash::new(), OsRandom, config);
    let _ = oaep.unpad(padded);
});
