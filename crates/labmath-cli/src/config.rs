use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Inputs for the vector demo.
///
/// The operands are optional so a config that omits one reports the missing
/// argument instead of silently substituting a default. Only `scalar` falls
/// back to its default. Omitting the whole `vector` section uses the default
/// operands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorDemoConfig {
    pub a: Option<Vec<f64>>,
    pub b: Option<Vec<f64>>,
    #[serde(default = "default_scalar")]
    pub scalar: f64,
}

fn default_scalar() -> f64 {
    2.0
}

impl Default for VectorDemoConfig {
    fn default() -> Self {
        Self {
            a: Some(vec![1.0, 2.0, 3.0]),
            b: Some(vec![4.0, 5.0, 6.0]),
            scalar: default_scalar(),
        }
    }
}

/// Inputs for the complex demo, each given as `[re, im]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexDemoConfig {
    pub a: [f64; 2],
    pub b: [f64; 2],
}

impl Default for ComplexDemoConfig {
    fn default() -> Self {
        Self {
            a: [3.0, 4.0],
            b: [1.0, -2.0],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub vector: VectorDemoConfig,
    pub complex: ComplexDemoConfig,
}

/// Load a demo configuration from a JSON file.
pub fn load_demo_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DemoConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
