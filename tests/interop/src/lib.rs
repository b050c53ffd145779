//! Integration tests for cipherkit.
//! Cross-crate scenarios: modes over concrete primitives, OAEP over concrete
//! hashes, and the two composed.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use cipherkit_crypto::aes::AesPrimitive;
    use cipherkit_crypto::hash::{hash_for, Md5Hash, Sha256Hash};
    use cipherkit_crypto::modes::{BlockCipher, Cbc, CipherMode, Ctr, Ecb, Mode};
    use cipherkit_crypto::oaep::{Oaep, OaepConfig};
    use cipherkit_crypto::rand::OsRandom;
    use cipherkit_crypto::sealed::SealedCipher;
    use cipherkit_crypto::xor::XorCipher;
    use cipherkit_types::{CryptoError, HashAlgId, ModeId};
    use cipherkit_utils::encoding::{FixedBytes, Utf16Le};

    const KEY: &[u8] = b"-=secure password=-";
    const IV: [u8; 4] = [0x14, 0xab, 0x88, 0xf7];

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn hex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    // -------------------------------------------------------
    // 1. XOR demo cipher under every mode, message "0123"
    // -------------------------------------------------------
    #[test]
    fn test_xor_modes_ascii_message() {
        init_tracing();
        let msg = b"0123";

        let ecb4 = BlockCipher::new(XorCipher::new(4), Ecb::new(4).unwrap()).unwrap();
        let ecb128 = BlockCipher::new(XorCipher::new(128), Ecb::new(128).unwrap()).unwrap();
        let cbc = BlockCipher::new(XorCipher::new(4), Cbc::with_iv(4, &IV).unwrap()).unwrap();
        let ctr = BlockCipher::new(XorCipher::new(4), Ctr::with_iv(4, &IV).unwrap()).unwrap();

        let c_ecb4 = ecb4.encrypt(KEY, msg).unwrap();
        let c_ecb128 = ecb128.encrypt(KEY, msg).unwrap();
        let c_cbc = cbc.encrypt(KEY, msg).unwrap();
        let c_ctr = ctr.encrypt(KEY, msg).unwrap();

        // A four-byte message is a single block for both ECB widths.
        assert_eq!(c_ecb4, c_ecb128);
        assert_eq!(c_ecb4, vec![0x30 ^ b'-', 0x31 ^ b'=', 0x32 ^ b's', 0x33 ^ b'e']);
        for c in [&c_cbc, &c_ctr] {
            assert_ne!(c, &c_ecb4);
            assert_ne!(c, &c_ecb128);
        }

        assert_eq!(ecb4.decrypt(KEY, &c_ecb4).unwrap(), msg);
        assert_eq!(ecb128.decrypt(KEY, &c_ecb128).unwrap(), msg);
        assert_eq!(cbc.decrypt(KEY, &c_cbc).unwrap(), msg);
        assert_eq!(ctr.decrypt(KEY, &c_ctr).unwrap(), msg);
    }

    // -------------------------------------------------------
    // 2. Same scenario with the string sent through UTF-16LE
    // -------------------------------------------------------
    #[test]
    fn test_xor_modes_utf16_message() {
        let ecb4 = BlockCipher::new(XorCipher::new(4), Ecb::new(4).unwrap()).unwrap();
        let ecb128 = BlockCipher::new(XorCipher::new(128), Ecb::new(128).unwrap()).unwrap();
        let cbc = BlockCipher::new(XorCipher::new(4), Cbc::with_iv(4, &IV).unwrap()).unwrap();
        let ctr = BlockCipher::new(XorCipher::new(4), Ctr::with_iv(4, &IV).unwrap()).unwrap();

        let outputs: Vec<Vec<u8>> = [
            ecb4.encrypt_str_with(&Utf16Le, KEY, "0123").unwrap(),
            ecb128.encrypt_str_with(&Utf16Le, KEY, "0123").unwrap(),
            cbc.encrypt_str_with(&Utf16Le, KEY, "0123").unwrap(),
            ctr.encrypt_str_with(&Utf16Le, KEY, "0123").unwrap(),
        ]
        .to_vec();

        let distinct: HashSet<&Vec<u8>> = outputs.iter().collect();
        assert_eq!(distinct.len(), 4);

        assert_eq!(ecb4.decrypt_str_with(&Utf16Le, KEY, &outputs[0]).unwrap(), "0123");
        assert_eq!(ecb128.decrypt_str_with(&Utf16Le, KEY, &outputs[1]).unwrap(), "0123");
        assert_eq!(cbc.decrypt_str_with(&Utf16Le, KEY, &outputs[2]).unwrap(), "0123");
        assert_eq!(ctr.decrypt_str_with(&Utf16Le, KEY, &outputs[3]).unwrap(), "0123");
    }

    // -------------------------------------------------------
    // 3. OAEP over MD5: ten pads of the same bytes all differ
    // -------------------------------------------------------
    #[test]
    fn test_oaep_md5_probabilistic() {
        init_tracing();
        let data = (b'0', b'1', b'2', b'3').to_bytes();
        let oaep = Oaep::new(Md5Hash::new(), OsRandom::new());

        let mut encoded = HashSet::new();
        for _ in 0..10 {
            let padded = oaep.pad(&data).unwrap();
            assert_eq!(padded.len(), 32);
            assert_eq!(oaep.unpad(&padded).unwrap(), data);
            encoded.insert(base64::encode(&padded));
        }
        assert_eq!(encoded.len(), 10);

        for text in &encoded {
            let padded = base64::decode(text).unwrap();
            assert_eq!(oaep.unpad(&padded).unwrap(), b"0123");
        }
    }

    // -------------------------------------------------------
    // 4. OAEP round-trip across hashes and round counts
    // -------------------------------------------------------
    #[test]
    fn test_oaep_all_hashes_and_rounds() {
        for id in [HashAlgId::Md5, HashAlgId::Sha256, HashAlgId::Sha512] {
            for rounds in [1u32, 2, 3, 8] {
                let config = OaepConfig::builder().rounds(rounds).build().unwrap();
                let oaep = Oaep::with_config(hash_for(id).unwrap(), OsRandom, config);
                for len in [0usize, 1, 11, 12, 13, 60, 61, 200] {
                    let data: Vec<u8> = (0..len).map(|i| (i ^ 0x5a) as u8).collect();
                    let padded = oaep.pad(&data).unwrap();
                    assert_eq!(padded.len(), oaep.padded_len(len).unwrap());
                    assert_eq!(oaep.unpad(&padded).unwrap(), data, "{id:?} r={rounds} n={len}");
                }
            }
        }
    }

    // -------------------------------------------------------
    // 5. AES under the generic modes matches NIST SP 800-38A
    // -------------------------------------------------------
    #[test]
    fn test_aes_modes_nist() {
        let key = hex("2b7e151628aed2a6abf7158809cf4f3c");
        let pt = hex(
            "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e5130c81c46a35ce411e5fbc1191a0a52eff69f2445df4f9b17ad2b417be66c3710",
        );

        let ecb = BlockCipher::new(AesPrimitive, Ecb::new(16).unwrap()).unwrap();
        let ct = ecb.encrypt(&key, &pt).unwrap();
        assert_eq!(ct[..16], hex("3ad77bb40d7a3660a89ecaf32466ef97")[..]);
        assert_eq!(ecb.decrypt(&key, &ct).unwrap(), pt);

        let iv = hex("000102030405060708090a0b0c0d0e0f");
        let cbc = BlockCipher::new(AesPrimitive, Cbc::with_iv(16, &iv).unwrap()).unwrap();
        let ct = cbc.encrypt(&key, &pt).unwrap();
        assert_eq!(ct[..16], hex("7649abac8119b246cee98e9b12e9197d")[..]);
        assert_eq!(cbc.decrypt(&key, &ct).unwrap(), pt);
    }

    // -------------------------------------------------------
    // 6. AES-CTR: only the first four counter bytes move
    // -------------------------------------------------------
    #[test]
    fn test_aes_ctr_counter_blocks() {
        let key = hex("000102030405060708090a0b0c0d0e0f");
        let iv = hex("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff");
        let mode = Ctr::with_iv(16, &iv).unwrap();
        let ctr = BlockCipher::new(AesPrimitive, mode.clone()).unwrap();

        let zeros = vec![0u8; 48];
        let keystream = ctr.encrypt(&key, &zeros).unwrap();
        for i in 0..3u64 {
            let block = AesPrimitive::new();
            let expected = cipherkit_crypto::provider::BlockPrimitive::encrypt_block(
                &block,
                &key,
                &mode.counter_block(i),
            )
            .unwrap();
            let start = i as usize * 16;
            assert_eq!(keystream[start..start + 16], expected[..]);
        }

        // Partial final block, and the same call decrypts.
        let msg = b"counter mode handles a ragged tail";
        let ct = ctr.encrypt(&key, msg).unwrap();
        assert_eq!(ct.len(), msg.len());
        assert_eq!(ctr.decrypt(&key, &ct).unwrap(), msg);
    }

    // -------------------------------------------------------
    // 7. Run-time mode selection over AES
    // -------------------------------------------------------
    #[test]
    fn test_cipher_mode_round_trip() {
        let key = [0x42u8; 32];
        let iv = [0x24u8; 16];
        let msg = vec![0xa5u8; 64];
        let mut seen = HashSet::new();
        for id in [ModeId::Ecb, ModeId::Cbc, ModeId::Ctr] {
            let iv = id.uses_iv().then_some(&iv[..]);
            let mode = CipherMode::from_id(id, 16, iv).unwrap();
            assert_eq!(mode.id(), id);
            let cipher = BlockCipher::new(AesPrimitive, mode).unwrap();
            let ct = cipher.encrypt(&key, &msg).unwrap();
            assert_eq!(cipher.decrypt(&key, &ct).unwrap(), msg);
            seen.insert(ct);
        }
        assert_eq!(seen.len(), 3);
    }

    // -------------------------------------------------------
    // 8. AES refuses ragged tails; sealing fixes that
    // -------------------------------------------------------
    #[test]
    fn test_sealed_aes_md5() {
        let key = hex("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");
        let cbc = BlockCipher::new(AesPrimitive, Cbc::new(16).unwrap()).unwrap();
        assert!(matches!(
            cbc.encrypt(&key, b"not a whole block"),
            Err(CryptoError::InvalidArg)
        ));

        let sealed = SealedCipher::new(cbc, Oaep::new(Md5Hash::new(), OsRandom)).unwrap();
        let a = sealed.seal(&key, b"not a whole block").unwrap();
        let b = sealed.seal(&key, b"not a whole block").unwrap();
        assert_ne!(a, b);
        assert_eq!(sealed.open(&key, &a).unwrap(), b"not a whole block");
        assert_eq!(sealed.open(&key, &b).unwrap(), b"not a whole block");
    }

    #[test]
    fn test_sealed_sha256_ctr_tamper() {
        let key = [7u8; 16];
        let ctr = BlockCipher::new(AesPrimitive, Ctr::new(16).unwrap()).unwrap();
        let sealed = SealedCipher::new(ctr, Oaep::new(Sha256Hash::new(), OsRandom)).unwrap();
        let mut ct = sealed.seal(&key, b"payload").unwrap();
        ct[2] ^= 0x01;
        match sealed.open(&key, &ct) {
            Ok(data) => assert_ne!(data, b"payload"),
            Err(e) => assert!(matches!(e, CryptoError::CorruptPadding)),
        }
    }
}
