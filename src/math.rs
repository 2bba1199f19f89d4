use core::mem;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};

/// Greatest common divisor of two non-negative integers (Euclid).
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = mem::replace(&mut b, r);
    }
    a
}

///
/// # Modular Inverse
///
/// Calculates `d` such that `e * d ≡ 1 (mod phi)` with the iterative
/// extended Euclidean algorithm. Only the Bézout coefficient of `e` is
/// tracked. The result is normalized into `[0, phi)`.
///
/// Fails with [`Error::NotInvertible`] unless `gcd(e, phi) = 1`.
///
pub fn mod_inverse(e: &BigInt, phi: &BigInt) -> Result<BigInt> {
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());
    let (mut old_r, mut r) = (phi.clone(), e.clone());

    while r.is_positive() {
        let quotient = &old_r / &r;

        let next_t = &old_t - &quotient * &t;
        old_t = mem::replace(&mut t, next_t);

        let next_r = &old_r - &quotient * &r;
        old_r = mem::replace(&mut r, next_r);
    }

    if !old_r.is_one() {
        return Err(Error::NotInvertible {
            value: e.clone(),
            modulus: phi.clone(),
        });
    }

    if old_t.is_negative() {
        old_t += phi;
    }
    Ok(old_t)
}
