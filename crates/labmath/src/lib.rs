//! labmath: small numeric value types for arithmetic-heavy client code.
//!
//! The crate provides two independent types: [`VectorN`], a fixed-dimension
//! real vector with dimension-checked arithmetic, and [`Complex`], an
//! immutable real/imaginary pair with a full operator set.
//!
//! Both types compare with exact floating-point equality and hash
//! consistently with it. Fallible operations return [`MathError`].
pub mod complex;
pub mod error;
pub mod float;
pub mod vector;

pub use complex::Complex;
pub use error::MathError;
pub use vector::VectorN;
