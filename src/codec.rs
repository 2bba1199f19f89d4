//! Character-by-character encryption with a fixed-width hex wire format.
//!
//! Every character is one ciphertext unit `c^e mod n`, written as exactly
//! [`HEX_DIGITS_PER_CHAR`] lower-case hex digits, zero-padded, with no
//! separators.
//!
//! A character is only recovered if its code point is below the modulus.
//! [`encrypt`] does not check this and silently corrupts such characters;
//! use [`encrypt_checked`] to have them rejected instead.

use alloc::format;
use alloc::string::String;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::{DecodeError, Error, Result};
use crate::rsa::{RSAPrivateKey, RSAPublicKey, RSA};

/// Width of one ciphertext unit on the wire.
pub const HEX_DIGITS_PER_CHAR: usize = 5;

/// Encrypts `message` one character at a time with the public key.
pub fn encrypt(public_key: &RSAPublicKey, message: &str) -> String {
    message
        .chars()
        .map(|character| encrypt_char(public_key, character))
        .collect()
}

/// Like [`encrypt`], but fails with [`Error::PlaintextOutOfRange`] for any
/// character that would not survive the round trip.
pub fn encrypt_checked(public_key: &RSAPublicKey, message: &str) -> Result<String> {
    let mut hex = String::with_capacity(message.len() * HEX_DIGITS_PER_CHAR);
    for character in message.chars() {
        if BigInt::from(u32::from(character)) >= public_key.n {
            return Err(Error::PlaintextOutOfRange {
                character,
                modulus: public_key.n.clone(),
            });
        }

        let unit = encrypt_char(public_key, character);
        // a modulus above 16^5 yields units that overflow the fixed width
        if unit.len() != HEX_DIGITS_PER_CHAR {
            return Err(Error::PlaintextOutOfRange {
                character,
                modulus: public_key.n.clone(),
            });
        }
        hex.push_str(&unit);
    }
    Ok(hex)
}

/// Decrypts a hex string produced by [`encrypt`] with the private key.
pub fn decrypt(private_key: &RSAPrivateKey, cipher_hex: &str) -> Result<String> {
    let bytes = cipher_hex.as_bytes();
    if bytes.len() % HEX_DIGITS_PER_CHAR != 0 {
        return Err(DecodeError::InvalidLength(bytes.len()).into());
    }

    bytes
        .chunks(HEX_DIGITS_PER_CHAR)
        .enumerate()
        .map(|(chunk, digits)| -> Result<char> {
            let cipher_text = parse_unit(chunk, digits)?;
            let ordinal = RSA::decrypt(&cipher_text, private_key);
            ordinal
                .to_u32()
                .and_then(core::char::from_u32)
                .ok_or_else(|| DecodeError::InvalidCodePoint(ordinal).into())
        })
        .collect()
}

fn encrypt_char(public_key: &RSAPublicKey, character: char) -> String {
    let message = BigInt::from(u32::from(character));
    let cipher_text = RSA::encrypt(&message, public_key);
    format!("{:0width$x}", cipher_text, width = HEX_DIGITS_PER_CHAR)
}

/// `BigInt::parse_bytes` tolerates signs and `_`, so digits are vetted first.
fn parse_unit(chunk: usize, digits: &[u8]) -> Result<BigInt> {
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return Err(DecodeError::InvalidDigit { chunk }.into());
    }
    BigInt::parse_bytes(digits, 16).ok_or_else(|| DecodeError::InvalidDigit { chunk }.into())
}
