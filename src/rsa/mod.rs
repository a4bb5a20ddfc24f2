use num::Integer;
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use tracing::debug;

pub mod codec;
pub mod config;
pub mod error;
pub mod keys;
pub mod prime_gen;

use config::*;
use error::RsaError;
use keys::*;

/// Textbook RSA engine: generates keypairs of a configured bit length and
/// encrypts/decrypts text one character at a time.
#[derive(Debug, Clone)]
pub struct RSA {
    key_length: u32,
    rounds: u32,
}

impl Default for RSA {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_LENGTH,
            rounds: FERMAT_ROUNDS,
        }
    }
}

impl RSA {
    /// `key_length` is the bit length of each prime factor, 1024 at
    /// minimum.
    pub fn new(key_length: u32) -> Result<Self, RsaError> {
        if key_length < MIN_KEY_LENGTH {
            return Err(RsaError::InvalidArgument(format!(
                "the key_length must be at least {} bits, got {}",
                MIN_KEY_LENGTH, key_length
            )));
        }
        Ok(Self {
            key_length,
            rounds: FERMAT_ROUNDS,
        })
    }

    pub fn key_length(&self) -> u32 {
        self.key_length
    }

    pub(crate) fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Euler's totient for a modulus with known factors: (p-1)(q-1).
    pub fn euler(p: &BigUint, q: &BigUint) -> BigUint {
        (p - BigUint::one()) * (q - BigUint::one())
    }

    fn extended_euclid(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
        if b.is_zero() {
            return (a.clone(), BigInt::one(), BigInt::zero());
        }
        let (d, x, y) = RSA::extended_euclid(b, &(a % b));
        (d, y.clone(), x - a / b * &y)
    }

    /// Modular multiplicative inverse of `a` mod `b`, or zero when
    /// gcd(a, b) != 1.
    pub fn mod_reverse(a: &BigUint, b: &BigUint) -> BigUint {
        let (a, b) = (BigInt::from(a.clone()), BigInt::from(b.clone()));
        let (d, x, _) = RSA::extended_euclid(&a, &b);
        if d.is_one() {
            ((x % &b + &b) % &b).magnitude().clone()
        } else {
            BigUint::zero()
        }
    }

    /// Generates a fresh keypair: two probable primes p and q of
    /// `key_length` bits each, n = p * q, a public exponent e drawn
    /// uniformly from [1, phi - 1] until coprime with phi = (p-1)(q-1),
    /// and d = e^-1 mod phi.
    ///
    /// Consumes entropy on every call; two calls yield distinct keypairs
    /// with overwhelming probability. p and q are not checked for
    /// distinctness, matching the textbook construction.
    pub fn generate_keypair(&self) -> KeyPair {
        let (p, q) = (self.generate_prime(), self.generate_prime());
        let n = &p * &q;
        let phi = RSA::euler(&p, &q);
        let mut rng = rand::thread_rng();
        let mut e;
        loop {
            e = rng.gen_biguint_range(&One::one(), &phi);
            if phi.gcd(&e).is_one() {
                break;
            }
        }
        let d = RSA::mod_reverse(&e, &phi);
        RSA::check_exponents(&e, &d, &phi);
        debug!("generated keypair with {} bit modulus", n.bits());
        KeyPair {
            public: Key {
                exponent: e,
                modulus: n.clone(),
            },
            private: Key {
                exponent: d,
                modulus: n,
            },
        }
    }

    fn check_exponents(e: &BigUint, d: &BigUint, phi: &BigUint) {
        let res = (e * d) % phi;
        assert!(res.is_one(), "(e * d) % phi = {}, expected 1", res);
    }
}
