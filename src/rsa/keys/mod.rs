use num_bigint::BigUint;

/// One half of an RSA keypair: an (exponent, modulus) pair.
///
/// A public key carries the encryption exponent `e`, a private key the
/// decryption exponent `d`; both share the modulus `n = p * q`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub exponent: BigUint,
    pub modulus: BigUint,
}

/// A freshly generated public/private key pair sharing one modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public: Key,
    pub private: Key,
}
