//! Demo reports for the vector and complex types.
//!
//! Each report is returned as lines so the binary can print them and tests
//! can inspect them.
use anyhow::{Context, Result};

use labmath::{Complex, VectorN};

use crate::config::{ComplexDemoConfig, VectorDemoConfig};

pub fn vector_report(config: &VectorDemoConfig) -> Result<Vec<String>> {
    let a = VectorN::from_optional(config.a.as_deref()).context("Invalid vector `a`")?;
    let b = VectorN::from_optional(config.b.as_deref()).context("Invalid vector `b`")?;
    log::debug!(
        "vector demo: dimension {} and {}, scalar {}",
        a.dimension(),
        b.dimension(),
        config.scalar
    );

    Ok(vec![
        format!("a = {}", a),
        format!("b = {}", b),
        format!("a + b = {}", a.add(&b)?),
        format!("a - b = {}", a.subtract(&b)?),
        format!("a * {} = {}", config.scalar, a.multiply(config.scalar)),
        format!("|a| = {}", a.magnitude()),
        format!("a · b = {}", a.dot(&b)?),
    ])
}

pub fn complex_report(config: &ComplexDemoConfig) -> Result<Vec<String>> {
    let a = Complex::new(config.a[0], config.a[1]);
    let b = Complex::new(config.b[0], config.b[1]);

    let mut lines = vec![
        a.to_string(),
        b.to_string(),
        (a + b).to_string(),
        (a - b).to_string(),
        (a * b).to_string(),
        a.divide(b).context("Cannot divide `a` by `b`")?.to_string(),
    ];
    if a.is_nonzero() {
        lines.push("a is true".to_string());
    }
    lines.push(a.to_magnitude().to_string());
    Ok(lines)
}
