use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::rsa::error::RsaError;
use crate::rsa::keys::{Key, KeyPair};
use crate::RSA;

/// Anything that can serve as one encryption stage: text in, text out,
/// with `decrypt` undoing `encrypt`. A pipeline can sequence any mix of
/// implementors without knowing which cipher sits behind each stage.
pub trait Encryptor {
    fn encrypt(&self, text: &str) -> Result<String, RsaError>;
    fn decrypt(&self, cipher_text: &str) -> Result<String, RsaError>;
}

impl RSA {
    /// Encrypts `text` under `public_key`, one character at a time.
    ///
    /// The input is trimmed, then each character's code point is raised to
    /// the public exponent mod n and printed in decimal; tokens are joined
    /// by single spaces. Every character is an independent RSA operation,
    /// so the ciphertext grows linearly with the plaintext.
    pub fn encrypt(&self, public_key: &Key, text: &str) -> Result<String, RsaError> {
        let text = text.trim();
        let tokens = text
            .chars()
            .map(|c| {
                RSA::fast_modular_exponent(
                    BigUint::from(c as u32),
                    public_key.exponent.clone(),
                    &public_key.modulus,
                )
                .to_string()
            })
            .collect::<Vec<_>>();
        Ok(tokens.join(" "))
    }

    /// Decrypts a string of space-separated decimal tokens produced by
    /// [`RSA::encrypt`].
    ///
    /// A token that is not a decimal integer (including the empty token
    /// left by doubled spacing) or a recovered value that maps to no
    /// character fails with [`RsaError::InvalidArgument`].
    pub fn decrypt(&self, private_key: &Key, cipher_text: &str) -> Result<String, RsaError> {
        let cipher_text = cipher_text.trim();
        if cipher_text.is_empty() {
            return Ok(String::new());
        }
        cipher_text
            .split(' ')
            .map(|token| {
                let c = token.parse::<BigUint>().map_err(|_| {
                    RsaError::InvalidArgument(format!(
                        "cipher token `{}` is not a decimal integer",
                        token
                    ))
                })?;
                let m = RSA::fast_modular_exponent(
                    c,
                    private_key.exponent.clone(),
                    &private_key.modulus,
                );
                m.to_u32()
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        RsaError::InvalidArgument(format!(
                            "recovered value {} is not a character code point",
                            m
                        ))
                    })
            })
            .collect()
    }
}

/// An [`RSA`] engine bound to one keypair, usable as a pipeline stage.
pub struct RsaEncryptor {
    engine: RSA,
    keys: KeyPair,
}

impl RsaEncryptor {
    /// Generates a fresh keypair for `engine` and binds to it.
    pub fn new(engine: RSA) -> Self {
        let keys = engine.generate_keypair();
        Self { engine, keys }
    }

    pub fn with_keys(engine: RSA, keys: KeyPair) -> Self {
        Self { engine, keys }
    }

    pub fn keys(&self) -> &KeyPair {
        &self.keys
    }
}

impl Encryptor for RsaEncryptor {
    fn encrypt(&self, text: &str) -> Result<String, RsaError> {
        self.engine.encrypt(&self.keys.public, text)
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String, RsaError> {
        self.engine.decrypt(&self.keys.private, cipher_text)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::{Encryptor, RsaEncryptor};
    use crate::rsa::error::RsaError;
    use crate::rsa::keys::{Key, KeyPair};
    use crate::RSA;

    // The classic textbook key: p = 61, q = 53, n = 3233, e = 17,
    // d = 2753. Small enough that every test runs instantly; every ASCII
    // code point is below n.
    fn textbook_keys() -> KeyPair {
        let n = BigUint::from(3233u32);
        KeyPair {
            public: Key {
                exponent: BigUint::from(17u32),
                modulus: n.clone(),
            },
            private: Key {
                exponent: BigUint::from(2753u32),
                modulus: n,
            },
        }
    }

    #[test]
    fn round_trip_with_fixed_key() {
        let rsa = RSA::default();
        let keys = textbook_keys();
        let entry = "Hello World!";
        let cipher = rsa.encrypt(&keys.public, entry).unwrap();
        assert_eq!(rsa.decrypt(&keys.private, &cipher).unwrap(), entry);
    }

    #[test]
    fn cipher_text_is_space_joined_decimal_tokens() {
        let rsa = RSA::default();
        let keys = textbook_keys();
        let cipher = rsa.encrypt(&keys.public, "abc").unwrap();
        let tokens = cipher.split(' ').collect::<Vec<_>>();
        assert_eq!(tokens.len(), 3);
        for token in tokens {
            assert!(token.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn input_is_trimmed_before_encryption() {
        let rsa = RSA::default();
        let keys = textbook_keys();
        let padded = rsa.encrypt(&keys.public, "  hi  ").unwrap();
        let plain = rsa.encrypt(&keys.public, "hi").unwrap();
        assert_eq!(padded, plain);
    }

    #[test]
    fn empty_input_round_trips_to_empty() {
        let rsa = RSA::default();
        let keys = textbook_keys();
        assert_eq!(rsa.encrypt(&keys.public, "").unwrap(), "");
        assert_eq!(rsa.decrypt(&keys.private, "").unwrap(), "");
        assert_eq!(rsa.decrypt(&keys.private, "   ").unwrap(), "");
    }

    #[test]
    fn non_numeric_token_is_rejected() {
        let rsa = RSA::default();
        let keys = textbook_keys();
        assert!(matches!(
            rsa.decrypt(&keys.private, "12 abc 9"),
            Err(RsaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn doubled_spacing_is_rejected() {
        let rsa = RSA::default();
        let keys = textbook_keys();
        assert!(matches!(
            rsa.decrypt(&keys.private, "12  9"),
            Err(RsaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn encryptor_stage_round_trips() {
        let stage = RsaEncryptor::with_keys(RSA::default(), textbook_keys());
        let cipher = stage.encrypt("John Frusciante").unwrap();
        assert_eq!(stage.decrypt(&cipher).unwrap(), "John Frusciante");
    }
}
