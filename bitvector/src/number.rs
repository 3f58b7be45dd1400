//! Integer number theory on the unsigned values that vectors represent.

use std::cmp::Ordering;

use log::trace;

use crate::config::PrimalityConfig;
use crate::error::{BitVectorError, Result};
use crate::{BitVector, Bitwise, BitwiseMut};

/// Unsigned integer of any size, stored as little-endian 64-bit limbs without
/// trailing zero limbs. Only the operations the routines below need are provided.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Natural {
    limbs: Vec<u64>,
}

impl Natural {
    pub(crate) fn zero() -> Natural {
        Natural { limbs: Vec::new() }
    }

    pub(crate) fn from_u64(value: u64) -> Natural {
        let mut natural = Natural { limbs: vec![value] };
        natural.normalize();
        natural
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    fn is_one(&self) -> bool {
        self.limbs == [1]
    }

    fn is_even(&self) -> bool {
        self.limbs.first().is_none_or(|limb| limb % 2 == 0)
    }

    pub(crate) fn bit_len(&self) -> usize {
        self.limbs
            .last()
            .map_or(0, |top| 64 * self.limbs.len() - top.leading_zeros() as usize)
    }

    pub(crate) fn bit(&self, index: usize) -> bool {
        self.limbs
            .get(index / 64)
            .is_some_and(|limb| (limb >> (index % 64)) & 1 == 1)
    }

    fn trailing_zeros(&self) -> usize {
        let mut count = 0;
        for limb in &self.limbs {
            if *limb == 0 {
                count += 64;
            } else {
                return count + limb.trailing_zeros() as usize;
            }
        }
        count
    }

    /// `self = 2 * self + bit`.
    fn push_bit(&mut self, bit: bool) {
        let mut carry = u64::from(bit);
        for limb in &mut self.limbs {
            let next_carry = *limb >> 63;
            *limb = (*limb << 1) | carry;
            carry = next_carry;
        }
        if carry != 0 {
            self.limbs.push(carry);
        }
    }

    fn shr(&self, count: usize) -> Natural {
        let limb_shift = count / 64;
        let bit_shift = count % 64;
        if limb_shift >= self.limbs.len() {
            return Natural::zero();
        }
        let source = &self.limbs[limb_shift..];
        let mut limbs: Vec<u64> = source
            .iter()
            .enumerate()
            .map(|(index, limb)| {
                if bit_shift == 0 {
                    *limb
                } else {
                    let high = source.get(index + 1).map_or(0, |next| next << (64 - bit_shift));
                    (limb >> bit_shift) | high
                }
            })
            .collect();
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
        Natural { limbs }
    }

    pub(crate) fn add(&self, other: &Natural) -> Natural {
        let (long, short) = if self.limbs.len() >= other.limbs.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut limbs = Vec::with_capacity(long.limbs.len() + 1);
        let mut carry = false;
        for (index, limb) in long.limbs.iter().enumerate() {
            let (sum, first_carry) = limb.overflowing_add(short.limbs.get(index).copied().unwrap_or(0));
            let (sum, second_carry) = sum.overflowing_add(u64::from(carry));
            limbs.push(sum);
            carry = first_carry || second_carry;
        }
        if carry {
            limbs.push(1);
        }
        Natural { limbs }
    }

    /// `self - other`; `other` must not exceed `self`.
    pub(crate) fn sub(&self, other: &Natural) -> Natural {
        debug_assert!(*self >= *other);
        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow = false;
        for (index, limb) in self.limbs.iter().enumerate() {
            let (difference, first_borrow) = limb.overflowing_sub(other.limbs.get(index).copied().unwrap_or(0));
            let (difference, second_borrow) = difference.overflowing_sub(u64::from(borrow));
            limbs.push(difference);
            borrow = first_borrow || second_borrow;
        }
        let mut difference = Natural { limbs };
        difference.normalize();
        difference
    }

    pub(crate) fn mul(&self, other: &Natural) -> Natural {
        if self.is_zero() || other.is_zero() {
            return Natural::zero();
        }
        let mut limbs = vec![0u64; self.limbs.len() + other.limbs.len()];
        for (i, left) in self.limbs.iter().enumerate() {
            let mut carry: u128 = 0;
            for (j, right) in other.limbs.iter().enumerate() {
                let accumulated = u128::from(limbs[i + j]) + u128::from(*left) * u128::from(*right) + carry;
                limbs[i + j] = accumulated as u64;
                carry = accumulated >> 64;
            }
            limbs[i + other.limbs.len()] = carry as u64;
        }
        let mut product = Natural { limbs };
        product.normalize();
        product
    }

    /// Quotient and remainder; `divisor` must be nonzero.
    pub(crate) fn div_rem(&self, divisor: &Natural) -> (Natural, Natural) {
        debug_assert!(!divisor.is_zero());
        if self < divisor {
            return (Natural::zero(), self.clone());
        }
        if let [single] = divisor.limbs[..] {
            return self.div_rem_limb(single);
        }
        let mut quotient = Natural::zero();
        let mut remainder = Natural::zero();
        for index in (0..self.bit_len()).rev() {
            remainder.push_bit(self.bit(index));
            let fits = remainder >= *divisor;
            if fits {
                remainder = remainder.sub(divisor);
            }
            quotient.push_bit(fits);
        }
        (quotient, remainder)
    }

    fn div_rem_limb(&self, divisor: u64) -> (Natural, Natural) {
        let mut limbs = vec![0u64; self.limbs.len()];
        let mut remainder: u128 = 0;
        for (index, limb) in self.limbs.iter().enumerate().rev() {
            let current = (remainder << 64) | u128::from(*limb);
            limbs[index] = (current / u128::from(divisor)) as u64;
            remainder = current % u128::from(divisor);
        }
        let mut quotient = Natural { limbs };
        quotient.normalize();
        (quotient, Natural::from_u64(remainder as u64))
    }

    pub(crate) fn rem(&self, modulus: &Natural) -> Natural {
        self.div_rem(modulus).1
    }

    fn mul_mod(&self, other: &Natural, modulus: &Natural) -> Natural {
        self.mul(other).rem(modulus)
    }

    fn pow_mod(&self, exponent: &Natural, modulus: &Natural) -> Natural {
        let mut result = Natural::from_u64(1).rem(modulus);
        let base = self.rem(modulus);
        for index in (0..exponent.bit_len()).rev() {
            result = result.mul_mod(&result, modulus);
            if exponent.bit(index) {
                result = result.mul_mod(&base, modulus);
            }
        }
        result
    }

    /// Random value in `[0, bound)`, drawn with 64 spare bits and reduced modulo `bound`.
    /// `bound` must be nonzero.
    fn random_below(bound: &Natural, random_number_generator: &mut impl rand::Rng) -> Natural {
        let mut random = Natural {
            limbs: (0..=bound.limbs.len()).map(|_| random_number_generator.r#gen::<u64>()).collect(),
        };
        random.normalize();
        random.rem(bound)
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

/// Decomposition `candidate - 1 = 2^rounds * odd_part` of an odd candidate above 3.
struct StrongProbablePrimeTest {
    candidate: Natural,
    candidate_minus_one: Natural,
    odd_part: Natural,
    rounds: usize,
}

impl StrongProbablePrimeTest {
    fn new(candidate: Natural) -> Self {
        let candidate_minus_one = candidate.sub(&Natural::from_u64(1));
        let rounds = candidate_minus_one.trailing_zeros();
        let odd_part = candidate_minus_one.shr(rounds);
        StrongProbablePrimeTest {
            candidate,
            candidate_minus_one,
            odd_part,
            rounds,
        }
    }

    /// `true` when `base` shows the candidate is composite. Bases congruent to
    /// 0 or ±1 prove nothing.
    fn proves_composite(&self, base: &Natural) -> bool {
        let base = base.rem(&self.candidate);
        if base.is_zero() || base.is_one() || base == self.candidate_minus_one {
            return false;
        }
        let mut value = base.pow_mod(&self.odd_part, &self.candidate);
        if value.is_one() || value == self.candidate_minus_one {
            return false;
        }
        for _ in 1..self.rounds {
            value = value.mul_mod(&value, &self.candidate);
            if value == self.candidate_minus_one {
                return false;
            }
        }
        true
    }
}

impl From<&BitVector> for Natural {
    fn from(vector: &BitVector) -> Self {
        let mut natural = Natural::zero();
        let start = vector.min_support().unwrap_or(vector.len());
        for bit in vector.iter().skip(start) {
            natural.push_bit(bit);
        }
        natural
    }
}

impl From<&Natural> for BitVector {
    /// Minimal representation, `0` for zero.
    fn from(natural: &Natural) -> Self {
        let width = natural.bit_len().max(1);
        let mut vector = BitVector::zeros(width);
        for power in 0..natural.bit_len() {
            if natural.bit(power) {
                vector.assign_index(width - 1 - power, true);
            }
        }
        vector
    }
}

impl BitVector {
    /// Greatest common divisor of the integer values, in minimal form.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let a = BitVector::from_int(2406);
    /// let b = BitVector::from_int(654);
    /// assert_eq!(a.gcd(&b).int_value()?, 6);
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn gcd(&self, other: &BitVector) -> BitVector {
        let mut a = Natural::from(self);
        let mut b = Natural::from(other);
        while !b.is_zero() {
            let remainder = a.rem(&b);
            a = std::mem::replace(&mut b, remainder);
        }
        BitVector::from(&a)
    }

    /// The integer `x` with `self * x ≡ 1 (mod modulus)`, or `None` when the value and the
    /// modulus are not coprime.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidModulus`] for a zero modulus.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let inverse = BitVector::from_int(17).multiplicative_inverse(&BitVector::from_int(3120))?;
    /// assert_eq!(inverse.map(|v| v.int_value()).transpose()?, Some(2753));
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn multiplicative_inverse(&self, modulus: &BitVector) -> Result<Option<BitVector>> {
        let modulus = Natural::from(modulus);
        if modulus.is_zero() {
            return Err(BitVectorError::InvalidModulus {
                reason: "an integer modulus must be nonzero",
            });
        }
        // Bezout coefficients are kept reduced modulo `modulus`, so they never go negative.
        let mut previous_remainder = Natural::from(self).rem(&modulus);
        let mut remainder = modulus.clone();
        let mut previous_coefficient = Natural::from_u64(1).rem(&modulus);
        let mut coefficient = Natural::zero();
        while !remainder.is_zero() {
            let (quotient, next_remainder) = previous_remainder.div_rem(&remainder);
            let subtracted = quotient.mul_mod(&coefficient, &modulus);
            let next_coefficient = previous_coefficient.add(&modulus).sub(&subtracted).rem(&modulus);
            previous_remainder = std::mem::replace(&mut remainder, next_remainder);
            previous_coefficient = std::mem::replace(&mut coefficient, next_coefficient);
        }
        if previous_remainder.is_one() {
            Ok(Some(BitVector::from(&previous_coefficient)))
        } else {
            Ok(None)
        }
    }

    /// Miller-Rabin test with the default [`PrimalityConfig`], drawing its random
    /// witnesses from the thread-local generator.
    ///
    /// The answer is exact below [`DETERMINISTIC_BOUND`](crate::config::DETERMINISTIC_BOUND).
    /// Above it the test is probabilistic: `false` is always correct, while a composite
    /// is reported prime with probability at most `4^-20`. Use
    /// [`test_for_primality_with`](BitVector::test_for_primality_with) to choose the
    /// number of random rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// assert!(BitVector::from_int((1 << 61) - 1).test_for_primality());
    /// assert!(!BitVector::from_int(561).test_for_primality());
    /// ```
    #[must_use]
    pub fn test_for_primality(&self) -> bool {
        self.test_for_primality_with(&PrimalityConfig::default(), &mut rand::thread_rng())
    }

    /// Miller-Rabin test with the fixed witnesses of `config`, followed by
    /// `config.random_rounds` rounds with witnesses drawn from `random_number_generator`.
    #[must_use]
    pub fn test_for_primality_with(&self, config: &PrimalityConfig, random_number_generator: &mut impl rand::Rng) -> bool {
        let candidate = Natural::from(self);
        let two = Natural::from_u64(2);
        if candidate < two {
            return false;
        }
        if candidate <= Natural::from_u64(3) {
            return true;
        }
        if candidate.is_even() {
            return false;
        }
        let test = StrongProbablePrimeTest::new(candidate);

        for witness in &config.witnesses {
            if test.proves_composite(&Natural::from_u64(*witness)) {
                trace!("witness {witness} proves {self} composite");
                return false;
            }
        }
        // Random bases are drawn from [2, candidate - 2].
        let span = test.candidate.sub(&Natural::from_u64(3));
        for round in 0..config.random_rounds {
            let base = Natural::random_below(&span, random_number_generator).add(&two);
            if test.proves_composite(&base) {
                trace!("random witness in round {round} proves {self} composite");
                return false;
            }
        }
        true
    }

    /// A random odd integer of exactly `width` bits with its top bit set, suitable as a
    /// prime candidate.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidWidth`] for a width of zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let candidate = BitVector::gen_rand_bits_for_prime(32, &mut rng)?;
    /// assert_eq!(candidate.len(), 32);
    /// assert_eq!(candidate.get(0)?, 1);
    /// assert_eq!(candidate.get(-1)?, 1);
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn gen_rand_bits_for_prime(width: usize, random_number_generator: &mut impl rand::Rng) -> Result<BitVector> {
        if width == 0 {
            return Err(BitVectorError::InvalidWidth {
                width,
                reason: "a prime candidate needs at least one bit",
            });
        }
        let mut candidate = BitVector::zeros(width);
        candidate.assign_random(width, random_number_generator);
        candidate.assign_index(0, true);
        candidate.assign_index(width - 1, true);
        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natural(value: u128) -> Natural {
        Natural::from(&BitVector::from_int(value))
    }

    #[test]
    fn natural_round_trips_through_vector() {
        let value = (1u128 << 100) + 12345;
        assert_eq!(BitVector::from(&natural(value)).int_value().ok(), Some(value));
        assert!(natural(0).is_zero());
    }

    #[test]
    fn multi_limb_division() {
        let dividend = natural(u128::MAX - 5);
        let divisor = natural((1u128 << 70) + 3);
        let (quotient, remainder) = dividend.div_rem(&divisor);
        let expected_quotient = (u128::MAX - 5) / ((1u128 << 70) + 3);
        let expected_remainder = (u128::MAX - 5) % ((1u128 << 70) + 3);
        assert_eq!(quotient, natural(expected_quotient));
        assert_eq!(remainder, natural(expected_remainder));
    }

    #[test]
    fn single_limb_division() {
        let (quotient, remainder) = natural(1u128 << 90).div_rem(&natural(1000));
        assert_eq!(quotient, natural((1u128 << 90) / 1000));
        assert_eq!(remainder, natural((1u128 << 90) % 1000));
    }

    #[test]
    fn arithmetic_matches_u128() {
        let a = natural(0xFFFF_FFFF_FFFF_FFFF_FFFF);
        let b = natural(0x1_0000_0001);
        assert_eq!(a.add(&b), natural(0xFFFF_FFFF_FFFF_FFFF_FFFF + 0x1_0000_0001));
        assert_eq!(a.sub(&b), natural(0xFFFF_FFFF_FFFF_FFFF_FFFF - 0x1_0000_0001));
        assert_eq!(a.mul(&b), natural(0xFFFF_FFFF_FFFF_FFFF_FFFF * 0x1_0000_0001));
        assert_eq!(natural(1 << 80).shr(75), natural(32));
        assert_eq!(natural(1 << 80).trailing_zeros(), 80);
    }

    #[test]
    fn pow_mod_small() {
        let result = natural(4).pow_mod(&natural(13), &natural(497));
        assert_eq!(result, natural(445));
    }
}
