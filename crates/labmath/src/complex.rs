//! Immutable complex numbers.
//!
//! The named methods (`add`, `divide`, `is_nonzero`, `to_magnitude`, ...) are
//! the primary API. The `+`, `-`, `*` and unary `-` operators are thin
//! wrappers over them. Division is fallible and therefore only available as
//! [`Complex::divide`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::error::MathError;
use crate::float::{exact_eq, hash_f64};

/// A complex number `re + im·i`.
#[derive(Debug, Clone, Copy)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Complex number with a zero imaginary part.
    #[inline]
    pub fn from_real(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    #[inline]
    pub fn re(&self) -> f64 {
        self.re
    }

    #[inline]
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Modulus `sqrt(re² + im²)`.
    pub fn magnitude(&self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Narrow to a real number.
    ///
    /// This is the modulus, not the real part: sign and phase are discarded.
    pub fn to_magnitude(self) -> f64 {
        self.magnitude()
    }

    /// Truthiness: true unless both parts are exactly zero.
    pub fn is_nonzero(&self) -> bool {
        self.re != 0.0 || self.im != 0.0
    }

    pub fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }

    pub fn subtract(self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }

    pub fn multiply(self, other: Complex) -> Complex {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    /// Divide by `other`.
    ///
    /// Fails with [`MathError::DivisionByZero`] when `other.re² + other.im²` is zero.
    ///
    /// # Example
    /// ```
    /// use labmath::{Complex, MathError};
    /// let q = Complex::new(11.0, -2.0).divide(Complex::new(1.0, -2.0)).unwrap();
    /// assert_eq!(q, Complex::new(3.0, 4.0));
    /// assert_eq!(
    ///     Complex::new(1.0, 0.0).divide(Complex::new(0.0, 0.0)),
    ///     Err(MathError::DivisionByZero)
    /// );
    /// ```
    pub fn divide(self, other: Complex) -> Result<Complex, MathError> {
        let denom = other.re * other.re + other.im * other.im;
        if denom == 0.0 {
            log::debug!("rejected division of {} by {}", self, other);
            return Err(MathError::DivisionByZero);
        }
        Ok(Complex::new(
            (self.re * other.re + self.im * other.im) / denom,
            (self.im * other.re - self.re * other.im) / denom,
        ))
    }

    pub fn negate(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }

    /// `(re + 1, im)`. The imaginary part is left untouched.
    pub fn increment(self) -> Complex {
        Complex::new(self.re + 1.0, self.im)
    }

    /// `(re - 1, im)`. The imaginary part is left untouched.
    pub fn decrement(self) -> Complex {
        Complex::new(self.re - 1.0, self.im)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Self) -> Self::Output {
        Complex::add(self, rhs)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        !self.is_nonzero()
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::new(1.0, 0.0)
    }
}

impl From<f64> for Complex {
    fn from(value: f64) -> Self {
        Complex::from_real(value)
    }
}

/// Lossy: yields the modulus, see [`Complex::to_magnitude`].
impl From<Complex> for f64 {
    fn from(value: Complex) -> Self {
        value.to_magnitude()
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        exact_eq(self.re, other.re) && exact_eq(self.im, other.im)
    }
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.re, state);
        hash_f64(self.im, state);
    }
}

/// Renders `re + |im|i` or `re - |im|i`. Parts use Rust's shortest
/// round-trip `f64` formatting, which never switches to exponent notation
/// (`1e20` prints as `100000000000000000000`).
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im >= 0.0 { '+' } else { '-' };
        write!(f, "{} {} {}i", self.re, sign, self.im.abs())
    }
}
