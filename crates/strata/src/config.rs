//! Layout options.
//!
//! Options deserialize from camelCase JSON (`{"ranker": "tight-tree", "nodeSpacing": 40}`);
//! missing keys fall back to [`LayoutConfig::default`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const NODE_SPACING: f64 = 100.0;
pub const RANK_SPACING: f64 = 100.0;
/// Ordering stops after this many sweeps in a row fail to beat the best crossing count.
pub const ORDER_STALE_ROUNDS: usize = 8;
pub const MAX_SIMPLEX_ITERATIONS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Ranker {
    LongestPath,
    TightTree,
    #[default]
    NetworkSimplex,
}

impl Ranker {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LongestPath => "longest-path",
            Self::TightTree => "tight-tree",
            Self::NetworkSimplex => "network-simplex",
        }
    }
}

impl FromStr for Ranker {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "longest-path" => Ok(Self::LongestPath),
            "tight-tree" => Ok(Self::TightTree),
            "network-simplex" => Ok(Self::NetworkSimplex),
            other => Err(Error::UnknownRanker {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Ranker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Ranker {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Acyclicer {
    #[default]
    Dfs,
    Greedy,
}

impl Acyclicer {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Greedy => "greedy",
        }
    }
}

impl FromStr for Acyclicer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "dfs" => Ok(Self::Dfs),
            "greedy" => Ok(Self::Greedy),
            other => Err(Error::UnknownAcyclicer {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Acyclicer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Acyclicer {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Direction in which ranks advance.
///
/// `LR` measures rank thickness with node widths and stacks nodes of one rank vertically.
/// Parsing is case-insensitive and accepts `TD` for `TB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum RankDir {
    #[default]
    LR,
    RL,
    TB,
    BT,
}

impl RankDir {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LR => "LR",
            Self::RL => "RL",
            Self::TB => "TB",
            Self::BT => "BT",
        }
    }

    /// Whether ranks advance along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::LR | Self::RL)
    }

    /// Whether the depth axis points toward negative coordinates.
    pub fn is_reversed(self) -> bool {
        matches!(self, Self::RL | Self::BT)
    }
}

impl FromStr for RankDir {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LR" => Ok(Self::LR),
            "RL" => Ok(Self::RL),
            "TB" | "TD" => Ok(Self::TB),
            "BT" => Ok(Self::BT),
            _ => Err(Error::UnknownRankDir {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for RankDir {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub ranker: Ranker,
    pub acyclicer: Acyclicer,
    pub rankdir: RankDir,
    /// Gap between neighbouring nodes of one rank.
    pub node_spacing: f64,
    /// Gap between consecutive ranks.
    pub rank_spacing: f64,
    pub order_stale_rounds: usize,
    pub max_simplex_iterations: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            ranker: Ranker::default(),
            acyclicer: Acyclicer::default(),
            rankdir: RankDir::default(),
            node_spacing: NODE_SPACING,
            rank_spacing: RANK_SPACING,
            order_stale_rounds: ORDER_STALE_ROUNDS,
            max_simplex_iterations: MAX_SIMPLEX_ITERATIONS,
        }
    }
}

impl LayoutConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(|e| Error::InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("nodeSpacing", self.node_spacing),
            ("rankSpacing", self.rank_spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig {
                    message: format!("{name} must be a finite, non-negative number (got {value})"),
                });
            }
        }
        if self.order_stale_rounds == 0 {
            return Err(Error::InvalidConfig {
                message: "orderStaleRounds must be at least 1".to_string(),
            });
        }
        if self.max_simplex_iterations == 0 {
            return Err(Error::InvalidConfig {
                message: "maxSimplexIterations must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
