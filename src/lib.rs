//! Textbook RSA: keypair generation from probable primes and
//! character-wise encryption via modular exponentiation. No padding, no
//! block mode, no key serialization; each character is one raw RSA
//! operation, serialized as space-separated decimal integers.

pub mod rsa;

pub use crate::rsa::codec::{Encryptor, RsaEncryptor};
pub use crate::rsa::error::RsaError;
pub use crate::rsa::keys::{Key, KeyPair};
pub use crate::rsa::RSA;
