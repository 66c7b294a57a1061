use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};

/// Exact fraction over arbitrary-precision integers.
///
/// Always stored in lowest terms with a strictly positive denominator, so the
/// sign lives on the numerator and derived equality is value equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self> {
        if denom.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (mut numer, mut denom) = (numer, denom);
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }

        // gcd(0, d) = d, which turns any zero into 0/1
        let gcd = numer.abs().gcd(&denom);
        if !gcd.is_one() {
            numer /= &gcd;
            denom /= &gcd;
        }

        Ok(Rational { numer, denom })
    }

    pub fn from_integer(value: BigInt) -> Self {
        Rational {
            numer: value,
            denom: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// The integer value, if the denominator is 1.
    pub fn to_integer(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.numer.clone())
    }

    // Denominators of both operands are positive, so every product below is
    // non-zero and `reduced` cannot fail.
    fn reduced(numer: BigInt, denom: BigInt) -> Self {
        let gcd = numer.abs().gcd(&denom);
        if gcd.is_one() {
            Rational { numer, denom }
        } else {
            Rational {
                numer: numer / &gcd,
                denom: denom / &gcd,
            }
        }
    }

    pub fn add(&self, other: &Rational) -> Rational {
        let numer = &self.numer * &other.denom + &other.numer * &self.denom;
        Self::reduced(numer, &self.denom * &other.denom)
    }

    pub fn subtract(&self, other: &Rational) -> Rational {
        let numer = &self.numer * &other.denom - &other.numer * &self.denom;
        Self::reduced(numer, &self.denom * &other.denom)
    }

    pub fn multiply(&self, other: &Rational) -> Rational {
        Self::reduced(&self.numer * &other.numer, &self.denom * &other.denom)
    }

    pub fn divide(&self, other: &Rational) -> Result<Rational> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Rational::new(&self.numer * &other.denom, &self.denom * &other.numer)
    }

    pub fn negate(&self) -> Rational {
        Rational {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Rational::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::from_integer(BigInt::from(value))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl<'a> Add<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, other: &'a Rational) -> Rational {
        Rational::add(self, other)
    }
}

impl<'a> Sub<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, other: &'a Rational) -> Rational {
        self.subtract(other)
    }
}

impl<'a> Mul<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, other: &'a Rational) -> Rational {
        self.multiply(other)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Rational {
        Rational::new(BigInt::from(n), BigInt::from(d)).unwrap()
    }

    #[test]
    fn test_new_reduces_to_lowest_terms() {
        let r = frac(2, 4);
        assert_eq!(r.numer(), &BigInt::from(1));
        assert_eq!(r.denom(), &BigInt::from(2));
    }

    #[test]
    fn test_new_moves_sign_to_numerator() {
        let r = frac(3, -6);
        assert_eq!(r.numer(), &BigInt::from(-1));
        assert_eq!(r.denom(), &BigInt::from(2));

        assert_eq!(frac(-3, -6), frac(1, 2));
    }

    #[test]
    fn test_new_zero_numerator_is_canonical() {
        let r = frac(0, -7);
        assert_eq!(r, Rational::zero());
        assert_eq!(r.denom(), &BigInt::from(1));
    }

    #[test]
    fn test_new_rejects_zero_denominator() {
        assert!(matches!(
            Rational::new(BigInt::from(1), BigInt::from(0)),
            Err(Error::DivisionByZero)
        ));
    }

    #[test]
    fn test_add() {
        let sum = frac(1, 2).add(&frac(1, 3));
        assert_eq!(sum.numer(), &BigInt::from(5));
        assert_eq!(sum.denom(), &BigInt::from(6));

        assert_eq!(frac(1, 2).add(&frac(-1, 2)), Rational::zero());
    }

    #[test]
    fn test_subtract_and_negate() {
        assert_eq!(frac(1, 2).subtract(&frac(1, 3)), frac(1, 6));
        assert_eq!(frac(1, 3).subtract(&frac(1, 2)), frac(-1, 6));
        assert_eq!(frac(2, 5).negate(), frac(-2, 5));
        assert_eq!(-&frac(-2, 5), frac(2, 5));
    }

    #[test]
    fn test_multiply_reduces() {
        assert_eq!(frac(2, 3).multiply(&frac(3, 4)), frac(1, 2));
        assert_eq!(&frac(-2, 3) * &frac(3, -2), Rational::one());
    }

    #[test]
    fn test_divide() {
        assert_eq!(frac(1, 2).divide(&frac(1, 4)).unwrap(), Rational::from(2));
        assert_eq!(frac(1, 2).divide(&frac(-3, 1)).unwrap(), frac(-1, 6));
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(matches!(
            frac(1, 2).divide(&Rational::zero()),
            Err(Error::DivisionByZero)
        ));
    }

    #[test]
    fn test_is_integer_and_display() {
        assert!(Rational::from(5).is_integer());
        assert!(frac(10, 5).is_integer());
        assert!(!frac(1, 2).is_integer());

        assert_eq!(frac(10, 5).to_string(), "2");
        assert_eq!(frac(-1, 2).to_string(), "-1/2");
        assert_eq!(frac(7, 3).to_integer(), None);
        assert_eq!(frac(-9, 3).to_integer(), Some(BigInt::from(-3)));
    }

    #[test]
    fn test_exact_with_large_operands() {
        let big: BigInt = BigInt::from(1u32) << 300usize;
        let a = Rational::new(big.clone(), BigInt::from(3)).unwrap();
        let b = Rational::new(BigInt::from(3), big).unwrap();
        assert_eq!(&a * &b, Rational::one());
        assert_eq!((&a + &a).subtract(&a), a);
    }
}
