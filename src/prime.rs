use num_bigint::BigInt;
use num_integer::Integer;
use num_iter::range_step_inclusive;
use num_traits::Zero;

/// Trial-division primality test.
///
/// Checks every odd divisor from 3 up to and including `floor(sqrt(num)) + 1`.
pub fn is_prime(num: &BigInt) -> bool {
    let two = BigInt::from(2);
    if *num == two {
        return true;
    }
    if *num < two || num.is_even() {
        return false;
    }

    let bound: BigInt = num.sqrt() + 1u32;
    !range_step_inclusive(BigInt::from(3), bound, two).any(|divisor| (num % divisor).is_zero())
}
