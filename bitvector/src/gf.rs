//! Polynomial arithmetic over GF(2) and in the finite fields GF(2^n).
//!
//! A vector is read as a polynomial whose coefficient of `x^k` is the bit at
//! position `len() - 1 - k`, so the rightmost bit is the constant term and the
//! polynomial orientation matches the integer value: `100011011` is
//! `x^8 + x^4 + x^3 + x + 1`, the AES modulus.

use log::trace;

use crate::error::{BitVectorError, Result};
use crate::{BitVector, Bitwise, BitwiseMut};

/// Degree of the polynomial, `None` for the zero polynomial.
fn degree(polynomial: &BitVector) -> Option<usize> {
    polynomial.significant_len().checked_sub(1)
}

/// Sum (XOR) of two polynomials of any sizes, as wide as the wider operand.
fn add_polynomials(left: &BitVector, right: &BitVector) -> BitVector {
    let width = left.len().max(right.len());
    let mut sum = left.widened(width);
    sum ^= &right.widened(width);
    sum
}

/// Long division of polynomials; both results have the width of `dividend`.
fn divide_polynomials(dividend: &BitVector, divisor: &BitVector, divisor_degree: usize) -> (BitVector, BitVector) {
    let width = dividend.len();
    let mut quotient = BitVector::zeros(width);
    let mut remainder = dividend.clone();
    let Some(remainder_degree) = degree(&remainder) else {
        return (quotient, remainder);
    };
    if remainder_degree < divisor_degree {
        return (quotient, remainder);
    }
    let aligned_divisor = divisor.trimmed().widened(width);
    while let Some(remainder_degree) = degree(&remainder) {
        if remainder_degree < divisor_degree {
            break;
        }
        let shift = remainder_degree - divisor_degree;
        quotient.assign_index(width - 1 - shift, true);
        let mut subtrahend = aligned_divisor.clone();
        subtrahend.shift_left(shift);
        remainder ^= &subtrahend;
    }
    (quotient, remainder)
}

impl BitVector {
    /// Degree of the modulus after checking it can define GF(2^n).
    fn field_modulus_degree(modulus: &BitVector, n: usize) -> Result<usize> {
        let modulus_degree = degree(modulus).ok_or(BitVectorError::InvalidModulus {
            reason: "the zero polynomial cannot be a modulus",
        })?;
        if modulus_degree > n {
            return Err(BitVectorError::InvalidModulus {
                reason: "modulus degree exceeds the field width",
            });
        }
        Ok(modulus_degree)
    }

    /// Carry-less product of two polynomials over GF(2), without reduction.
    ///
    /// The result has `self.len() + other.len() - 1` bits, or none when either operand is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let a: BitVector = "0110001".parse()?;
    /// let b: BitVector = "0110".parse()?;
    /// assert_eq!(a.gf_multiply(&b).to_string(), "0010100110");
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn gf_multiply(&self, other: &BitVector) -> BitVector {
        if self.is_empty() || other.is_empty() {
            return BitVector::zeros(0);
        }
        let width = self.len() + other.len() - 1;
        let mut product = BitVector::zeros(width);
        let base = self.widened(width);
        for position in other.support() {
            let power = other.len() - 1 - position;
            let mut term = base.clone();
            term.shift_left(power);
            product ^= &term;
        }
        product
    }

    /// Divides by an `n + 1`-bit modulus, returning the quotient (as wide as `self`)
    /// and the `n`-bit remainder.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidModulus`] for a zero modulus or one of degree above `n`.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let modulus: BitVector = "100011011".parse()?;
    /// let a: BitVector = "11100010110001".parse()?;
    /// let (quotient, remainder) = a.gf_divide(&modulus, 8)?;
    /// assert_eq!(quotient.to_string(), "00000000111010");
    /// assert_eq!(remainder.to_string(), "10001111");
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn gf_divide(&self, modulus: &BitVector, n: usize) -> Result<(BitVector, BitVector)> {
        let modulus_degree = BitVector::field_modulus_degree(modulus, n)?;
        let (quotient, remainder) = divide_polynomials(self, modulus, modulus_degree);
        Ok((quotient, remainder.to_width(n)?))
    }

    /// Product in GF(2^n): [`gf_multiply`](BitVector::gf_multiply) reduced by `modulus`, `n` bits wide.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidModulus`] for a zero modulus or one of degree above `n`.
    pub fn gf_multiply_modular(&self, other: &BitVector, modulus: &BitVector, n: usize) -> Result<BitVector> {
        let product = self.gf_multiply(other);
        let (_, remainder) = product.gf_divide(modulus, n)?;
        Ok(remainder)
    }

    /// Multiplicative inverse in GF(2^n), `None` when `self` shares a factor with `modulus`
    /// (in particular when `self` is zero).
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidModulus`] for a zero modulus or one of degree above `n`.
    ///
    /// # Example
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let modulus: BitVector = "100011011".parse()?;
    /// let a: BitVector = "00110011".parse()?;
    /// let inverse = a.gf_mi(&modulus, 8)?;
    /// assert_eq!(inverse.map(|v| v.to_string()), Some("01101100".to_string()));
    /// assert!(BitVector::zeros(8).gf_mi(&modulus, 8)?.is_none());
    /// # Ok::<(), bitvector::BitVectorError>(())
    /// ```
    pub fn gf_mi(&self, modulus: &BitVector, n: usize) -> Result<Option<BitVector>> {
        let modulus_degree = BitVector::field_modulus_degree(modulus, n)?;
        let (_, reduced) = divide_polynomials(self, modulus, modulus_degree);
        if reduced.is_zero() {
            return Ok(None);
        }

        let mut previous_remainder = modulus.trimmed();
        let mut remainder = reduced.trimmed();
        let mut previous_coefficient = BitVector::from_int(0);
        let mut coefficient = BitVector::from_int(1);
        while let Some(remainder_degree) = degree(&remainder) {
            let (quotient, next_remainder) = divide_polynomials(&previous_remainder, &remainder, remainder_degree);
            let next_coefficient = add_polynomials(&previous_coefficient, &quotient.gf_multiply(&coefficient)).trimmed();
            trace!("gf_mi step: remainder {remainder}, quotient {}", quotient.trimmed());
            previous_remainder = std::mem::replace(&mut remainder, next_remainder.trimmed());
            previous_coefficient = std::mem::replace(&mut coefficient, next_coefficient);
        }

        if degree(&previous_remainder) != Some(0) {
            return Ok(None);
        }
        let (_, inverse) = divide_polynomials(&previous_coefficient, modulus, modulus_degree);
        Ok(Some(inverse.to_width(n)?))
    }
}
