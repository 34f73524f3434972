use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use congen::{Family, RawInputs};
use num_bigint::BigInt;
use serde::Deserialize;

/// Everything one generator run needs.
#[derive(Debug, Clone)]
pub struct RunSpec {
    pub family: Family,
    pub raw: RawInputs,
    pub steps: u32,
    pub decimals: u32,
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

/// TOML form of a run. Unbounded quantities (seed, k, increment) are
/// decimal strings because TOML integers are 64-bit.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RunFile {
    family: FamilyTag,
    seed: String,
    k: String,
    increment: Option<String>,
    precision: u32,
    #[serde(default = "default_steps")]
    steps: u32,
    #[serde(default = "default_decimals")]
    decimals: u32,
    csv: Option<PathBuf>,
    json: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum FamilyTag {
    Lcg,
    Mcg,
}

fn default_steps() -> u32 {
    10
}

fn default_decimals() -> u32 {
    4
}

impl RunSpec {
    /// Load a run description from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read run config {}", path.display()))?;
        let file: RunFile = toml::from_str(&content)
            .with_context(|| format!("invalid run config {}", path.display()))?;
        file.into_spec()
    }
}

impl RunFile {
    fn into_spec(self) -> Result<RunSpec> {
        let family = match self.family {
            FamilyTag::Lcg => Family::Lcg,
            FamilyTag::Mcg => Family::Mcg,
        };
        let increment = match (family, &self.increment) {
            (Family::Lcg, Some(c)) => Some(parse_big(c, "increment")?),
            (Family::Lcg, None) => None,
            (Family::Mcg, Some(_)) => anyhow::bail!("mcg runs take no increment"),
            (Family::Mcg, None) => None,
        };
        Ok(RunSpec {
            family,
            raw: RawInputs {
                seed: parse_big(&self.seed, "seed")?,
                k: parse_big(&self.k, "k")?,
                increment,
                precision: self.precision,
            },
            steps: self.steps,
            decimals: self.decimals,
            csv: self.csv,
            json: self.json,
        })
    }
}

fn parse_big(text: &str, field: &str) -> Result<BigInt> {
    text.trim()
        .parse::<BigInt>()
        .with_context(|| format!("field {} is not a decimal integer: {}", field, text))
}
