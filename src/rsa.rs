use core::fmt;
use core::ops::{Mul, RangeInclusive};

use num_bigint::{BigInt, RandBigInt};
use num_traits::One;
use rand::Rng;

use crate::error::{Error, Result};
use crate::math::{gcd, mod_inverse};
use crate::prime::is_prime;

/// Range the secret primes `p` and `q` are drawn from.
pub const PRIME_RANGE: RangeInclusive<u32> = 2..=1000;

/// Upper bound on draws for every rejection-sampling loop of key generation.
pub const MAX_DRAWS: usize = 100_000;

/// Public half of a keypair, printed as `(e, n)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RSAPublicKey {
    pub n: BigInt,
    pub e: BigInt,
}

/// Private half of a keypair, printed as `(d, n)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RSAPrivateKey {
    pub n: BigInt,
    pub d: BigInt,
}

impl fmt::Display for RSAPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.e, self.n)
    }
}

impl fmt::Display for RSAPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.d, self.n)
    }
}

pub struct RSA;

impl RSA {
    /// Draws two distinct primes from [`PRIME_RANGE`] and a public exponent
    /// coprime to the totient, then derives the matching private exponent.
    ///
    /// All draws are rejection-sampled from `rng`; none is clamped.
    pub fn new_key_pair<R: Rng + ?Sized>(rng: &mut R) -> Result<(RSAPublicKey, RSAPrivateKey)> {
        let low = BigInt::from(*PRIME_RANGE.start());
        let high = BigInt::from(*PRIME_RANGE.end()) + 1u32;

        let p = Self::sample(rng, &low, &high, "prime p", is_prime)?;
        let q = Self::sample(rng, &low, &high, "prime q", |q| is_prime(q) && *q != p)?;

        let phi = Self::totient(&p, &q);
        let one = BigInt::one();
        let e = Self::sample(rng, &one, &(&phi + 1u32), "public exponent", |e| {
            gcd(&phi, e).is_one()
        })?;

        Self::key_pair_from_primes(&p, &q, &e)
    }

    /// Derives the keypair for explicit primes `p`, `q` and public exponent `e`.
    pub fn key_pair_from_primes(
        p: &BigInt,
        q: &BigInt,
        e: &BigInt,
    ) -> Result<(RSAPublicKey, RSAPrivateKey)> {
        for prime in [p, q].iter() {
            if !is_prime(prime) {
                return Err(Error::NotPrime((*prime).clone()));
            }
        }
        if p == q {
            return Err(Error::IdenticalPrimes(p.clone()));
        }

        let n = p.clone().mul(q);
        let phi = Self::totient(p, q);

        let d = mod_inverse(e, &phi)?;

        let public_key = RSAPublicKey {
            n: n.clone(),
            e: e.clone(),
        };

        let private_key = RSAPrivateKey { n, d };

        Ok((public_key, private_key))
    }

    /// `c = m^e mod n`
    pub fn encrypt(message: &BigInt, public_key: &RSAPublicKey) -> BigInt {
        message.modpow(&public_key.e, &public_key.n)
    }

    /// `m = c^d mod n`
    pub fn decrypt(cipher_text: &BigInt, private_key: &RSAPrivateKey) -> BigInt {
        BigInt::modpow(cipher_text, &private_key.d, &private_key.n)
    }

    fn totient(p: &BigInt, q: &BigInt) -> BigInt {
        let p_minus_one: BigInt = p - 1u32;
        let q_minus_one: BigInt = q - 1u32;
        p_minus_one * q_minus_one
    }

    /// Uniform draws from `[low, high)` until `accept` holds.
    fn sample<R, F>(
        rng: &mut R,
        low: &BigInt,
        high: &BigInt,
        what: &'static str,
        accept: F,
    ) -> Result<BigInt>
    where
        R: Rng + ?Sized,
        F: Fn(&BigInt) -> bool,
    {
        for _ in 0..MAX_DRAWS {
            let candidate = rng.gen_bigint_range(low, high);
            if accept(&candidate) {
                return Ok(candidate);
            }
        }

        Err(Error::SamplingExhausted {
            what,
            draws: MAX_DRAWS,
        })
    }
}
