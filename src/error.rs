use num_bigint::BigInt;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while deriving keys or decoding ciphertext.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// `value` shares a factor with `modulus`, so it has no inverse.
    #[error("{value} is not invertible modulo {modulus}")]
    NotInvertible { value: BigInt, modulus: BigInt },

    /// The hex ciphertext could not be turned back into text
    #[error("malformed ciphertext: {0}")]
    Decode(DecodeError),

    /// A character whose code point does not fit below the modulus.
    /// Only reported by [`crate::codec::encrypt_checked`].
    #[error("character {character:?} does not fit below modulus {modulus}")]
    PlaintextOutOfRange { character: char, modulus: BigInt },

    #[error("{0} is not prime")]
    NotPrime(BigInt),

    #[error("p and q must differ, both are {0}")]
    IdenticalPrimes(BigInt),

    /// A rejection-sampling loop gave up after `draws` attempts
    #[error("no suitable {what} found after {draws} draws")]
    SamplingExhausted { what: &'static str, draws: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Length is not a multiple of the chunk width
    #[error("length {0} is not a multiple of 5")]
    InvalidLength(usize),

    /// Chunk number `chunk` holds a byte outside `[0-9a-fA-F]`
    #[error("chunk {chunk} contains a non-hex digit")]
    InvalidDigit { chunk: usize },

    /// The decrypted unit is not a Unicode scalar value
    #[error("{0} is not a valid code point")]
    InvalidCodePoint(BigInt),
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}
