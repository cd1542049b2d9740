//! # Configuration
//!
//! Configuration is managed by [`confique`], layering:
//! 1. **Environment variables**: `ZAM_BASE_URL`, `ZAM_RESUBMIT_DELAY_SECS`, `ZAM_LOG`.
//! 2. **Config file**: a `zam.toml` given explicitly (missing files are skipped).
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `base_url` | `http://localhost/amendements` | Page URL used when none is given |
//! | `resubmit_delay_secs` | `10` | How long a submit button stays disabled |
//! | `log` | `warn` | Default log filter (`RUST_LOG` wins) |

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost/amendements";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ZamConfig {
    /// Page URL used when none is given on the command line.
    #[config(env = "ZAM_BASE_URL", default = "http://localhost/amendements")]
    pub base_url: String,

    /// Seconds a submit button stays disabled after being pressed.
    #[config(env = "ZAM_RESUBMIT_DELAY_SECS", default = 10)]
    pub resubmit_delay_secs: u64,

    /// Default log filter directive.
    #[config(env = "ZAM_LOG", default = "warn")]
    pub log: String,
}

impl Default for ZamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resubmit_delay_secs: 10,
            log: "warn".to_string(),
        }
    }
}

impl ZamConfig {
    /// Load from environment, then `path` if given, then defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn resubmit_delay(&self) -> Duration {
        Duration::from_secs(self.resubmit_delay_secs)
    }
}
