use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use config_file::FromConfigFile;
use ipcnv_common::Mode;
use serde::{Deserialize, Serialize};

/// Defaults read from `--config`; flags given on the command line win.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct RunConfig {
    pub mode: Option<i64>,
    pub output: Option<PathBuf>,
}

impl RunConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        Self::from_config_file(path)
            .with_context(|| format!("failed to load config file {}", path.display()))
    }

    /// A `-m` flag wins over the configured mode.
    pub fn mode(&self, flag: Option<&str>) -> anyhow::Result<Mode> {
        match (flag, self.mode) {
            (Some(flag), _) => flag.parse(),
            (None, Some(mode)) => Mode::try_from(mode),
            (None, None) => bail!("mode must be >= 0 and <= 3"),
        }
    }

    pub fn output(self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or(self.output)
    }
}
