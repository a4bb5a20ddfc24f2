use chrono::Local;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use tracing::debug;

use crate::RSA;

impl RSA {
    /// Square-and-multiply: `a ^ q mod n`.
    pub fn fast_modular_exponent(mut a: BigUint, mut q: BigUint, n: &BigUint) -> BigUint {
        let mut r: BigUint = One::one();
        a %= n;
        while !q.is_zero() {
            if q.bit(0) {
                r = (&r * &a) % n;
            }
            q >>= 1;
            a = (&a * &a) % n;
        }
        r
    }

    /// Fermat primality test with `rounds` independent trials.
    ///
    /// Each trial picks a random base `a` in `[1, n - 1]` and rejects `n`
    /// as soon as `a^(n-1) mod n != 1`. This is the plain Fermat test, not
    /// Miller-Rabin: Carmichael numbers can pass every trial despite being
    /// composite. With 128 rounds that is acceptable for demonstration
    /// use, not for production-grade security.
    pub fn is_probable_prime(n: &BigUint, rounds: u32) -> bool {
        if *n <= BigUint::one() {
            return false;
        }
        if *n <= BigUint::from(3u8) {
            return true;
        }
        let mut rng = rand::thread_rng();
        let exponent = n - BigUint::one();
        for _ in 0..rounds {
            let a = rng.gen_biguint_range(&One::one(), n);
            if !RSA::fast_modular_exponent(a, exponent.clone(), n).is_one() {
                return false;
            }
        }
        true
    }

    /// A uniformly random integer of exactly `key_length` bits, with the
    /// top and bottom bits forced to 1 so the candidate has full magnitude
    /// and is odd.
    pub fn generate_candidate(&self) -> BigUint {
        let mut rng = rand::thread_rng();
        let mut candidate = rng.gen_biguint(self.key_length() as u64);
        candidate.set_bit(self.key_length() as u64 - 1, true);
        candidate.set_bit(0, true);
        candidate
    }

    /// Draws candidates until one passes the Fermat test. Termination is
    /// probabilistic; there is no retry ceiling.
    pub fn generate_prime(&self) -> BigUint {
        let start = Local::now().timestamp_millis();
        let mut tries: u64 = 0;
        loop {
            tries += 1;
            let candidate = self.generate_candidate();
            if RSA::is_probable_prime(&candidate, self.rounds()) {
                let time = Local::now().timestamp_millis() - start;
                debug!("done generation in {} tries after {} ms", tries, time);
                return candidate;
            }
        }
    }
}
