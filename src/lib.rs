//! Textbook RSA over tiny primes with a five-digit hex wire format.
//!
//! Not secure: keys come from primes below 1000 and every character is
//! encrypted on its own. Took from here how to work with no_std and std
//! https://github.com/KodrAus/rust-no-std

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

pub mod codec;
pub mod error;
#[allow(clippy::many_single_char_names)]
pub mod math;
pub mod prime;
#[allow(clippy::many_single_char_names)]
pub mod rsa;

pub use codec::{decrypt, encrypt, encrypt_checked};
pub use error::{DecodeError, Error, Result};
pub use rsa::{RSAPrivateKey, RSAPublicKey, RSA};
