/// Default bit length of each generated prime factor.
pub const DEFAULT_KEY_LENGTH: u32 = 1024;

/// Smallest key length accepted at construction.
pub const MIN_KEY_LENGTH: u32 = 1024;

/// Fermat trials per primality check.
pub const FERMAT_ROUNDS: u32 = 128;
