use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut, Mul};
use std::slice::Iter;

use crate::error::MathError;
use crate::float::{exact_eq, hash_f64};

/// A real vector whose dimension is fixed at construction.
///
/// Coordinates can be read and written in place, but the dimension never
/// changes. Arithmetic always returns a new vector.
#[derive(Clone, Debug)]
pub struct VectorN {
    coords: Vec<f64>,
}

impl VectorN {
    /// Create the zero vector of dimension `dimension`.
    ///
    /// # Example
    /// ```
    /// use labmath::VectorN;
    /// let v = VectorN::from_dimension(3).unwrap();
    /// assert_eq!(v.coords(), &[0.0, 0.0, 0.0]);
    /// ```
    pub fn from_dimension(dimension: usize) -> Result<Self, MathError> {
        if dimension == 0 {
            log::debug!("rejected zero-dimensional vector");
            return Err(MathError::InvalidArgument {
                reason: "dimension must be positive",
            });
        }
        Ok(Self {
            coords: vec![0.0; dimension],
        })
    }

    /// Signed variant of [`VectorN::from_dimension`] for callers holding an
    /// integer that may be negative.
    pub fn from_signed_dimension(dimension: i64) -> Result<Self, MathError> {
        if dimension <= 0 {
            log::debug!("rejected non-positive dimension {}", dimension);
            return Err(MathError::InvalidArgument {
                reason: "dimension must be positive",
            });
        }
        let dimension = usize::try_from(dimension).map_err(|_| MathError::InvalidArgument {
            reason: "dimension does not fit in memory",
        })?;
        Self::from_dimension(dimension)
    }

    /// Create a vector holding a copy of `values`.
    ///
    /// The vector owns its own buffer; later changes to `values` are not seen.
    pub fn from_values(values: &[f64]) -> Result<Self, MathError> {
        if values.is_empty() {
            log::debug!("rejected empty coordinate sequence");
            return Err(MathError::InvalidArgument {
                reason: "vector must have at least one coordinate",
            });
        }
        Ok(Self {
            coords: values.to_vec(),
        })
    }

    /// Like [`VectorN::from_values`], for a sequence that may be absent.
    pub fn from_optional(values: Option<&[f64]>) -> Result<Self, MathError> {
        match values {
            Some(values) => Self::from_values(values),
            None => {
                log::debug!("rejected absent coordinate sequence");
                Err(MathError::NullInput { argument: "coords" })
            }
        }
    }

    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.coords.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.coords.clone()
    }

    /// Read the coordinate at `index`, reporting out-of-range access as an error.
    pub fn get(&self, index: usize) -> Result<f64, MathError> {
        self.coords
            .get(index)
            .copied()
            .ok_or(MathError::IndexOutOfRange {
                index,
                dimension: self.dimension(),
            })
    }

    /// Overwrite the coordinate at `index`, reporting out-of-range access as an error.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), MathError> {
        let dimension = self.dimension();
        match self.coords.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MathError::IndexOutOfRange { index, dimension }),
        }
    }

    /// Element-wise sum.
    ///
    /// Accepts `&VectorN` or an `Option<&VectorN>`; `None` is a `NullInput` error.
    pub fn add<'a>(&self, other: impl Into<Option<&'a VectorN>>) -> Result<VectorN, MathError> {
        let other = self.ensure_same_dim(other.into())?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Element-wise difference, with the same argument rules as [`VectorN::add`].
    pub fn subtract<'a>(
        &self,
        other: impl Into<Option<&'a VectorN>>,
    ) -> Result<VectorN, MathError> {
        let other = self.ensure_same_dim(other.into())?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    pub fn multiply(&self, scalar: f64) -> VectorN {
        VectorN {
            coords: self.coords.iter().map(|c| c * scalar).collect(),
        }
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.coords.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Sum of element-wise products, with the same argument rules as [`VectorN::add`].
    pub fn dot<'a>(&self, other: impl Into<Option<&'a VectorN>>) -> Result<f64, MathError> {
        let other = self.ensure_same_dim(other.into())?;
        Ok(dot_scalar_f64(&self.coords, &other.coords))
    }

    fn zip_with<F>(&self, other: &VectorN, mut f: F) -> VectorN
    where
        F: FnMut(f64, f64) -> f64,
    {
        VectorN {
            coords: self
                .coords
                .iter()
                .zip(other.coords.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    fn ensure_same_dim<'a>(&self, other: Option<&'a VectorN>) -> Result<&'a VectorN, MathError> {
        let other = other.ok_or_else(|| {
            log::debug!("rejected absent vector operand");
            MathError::NullInput { argument: "other" }
        })?;
        if self.dimension() != other.dimension() {
            log::debug!(
                "rejected operand of dimension {} for vector of dimension {}",
                other.dimension(),
                self.dimension()
            );
            return Err(MathError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(other)
    }
}

fn dot_scalar_f64(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl TryFrom<Vec<f64>> for VectorN {
    type Error = MathError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(MathError::InvalidArgument {
                reason: "vector must have at least one coordinate",
            });
        }
        Ok(Self { coords: value })
    }
}

impl TryFrom<&[f64]> for VectorN {
    type Error = MathError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        VectorN::from_values(value)
    }
}

impl From<VectorN> for Vec<f64> {
    fn from(value: VectorN) -> Self {
        value.coords
    }
}

impl Index<usize> for VectorN {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

impl IndexMut<usize> for VectorN {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.coords[index]
    }
}

impl<'a> Mul<f64> for &'a VectorN {
    type Output = VectorN;

    fn mul(self, rhs: f64) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<f64> for VectorN {
    type Output = VectorN;

    fn mul(self, rhs: f64) -> Self::Output {
        self.multiply(rhs)
    }
}

impl PartialEq for VectorN {
    fn eq(&self, other: &Self) -> bool {
        self.dimension() == other.dimension()
            && self
                .coords
                .iter()
                .zip(other.coords.iter())
                .all(|(&a, &b)| exact_eq(a, b))
    }
}

impl Eq for VectorN {}

impl Hash for VectorN {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimension().hash(state);
        for &c in &self.coords {
            hash_f64(c, state);
        }
    }
}

/// Renders `(1, 2, 3)`. Coordinates use Rust's shortest round-trip `f64`
/// formatting, which never switches to exponent notation (`1e20` prints as
/// `100000000000000000000`).
impl fmt::Display for VectorN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, value) in self.coords.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.coords.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, ")")
    }
}
