use anyhow::{bail, Result};
use image::imageops::FilterType;
use std::path::{Component, Path, PathBuf};

use crate::constants::{icons, paths};

#[derive(Debug, Clone)]
pub struct ResizeConfig {
    pub resources_dir: PathBuf,
    pub icons: Vec<String>,
    pub target_size: u32,
    pub filter: FilterType,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        ResizeConfig {
            resources_dir: PathBuf::from(paths::RESOURCES_DIR),
            icons: icons::FILES.iter().map(|name| name.to_string()).collect(),
            target_size: icons::TARGET_SIZE,
            filter: icons::FILTER,
        }
    }
}

impl ResizeConfig {
    /// Default icon set and size, looked up under `dir` instead of `resources`
    pub fn with_resources_dir(dir: impl Into<PathBuf>) -> Self {
        ResizeConfig {
            resources_dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn icon_path(&self, name: &str) -> PathBuf {
        self.resources_dir.join(name)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.target_size == 0 {
            bail!("target_size must be greater than 0");
        }

        if self.icons.is_empty() {
            bail!("icon list cannot be empty");
        }

        for name in &self.icons {
            if name.is_empty() {
                bail!("icon name cannot be empty");
            }
            // Icons live directly in the resources directory
            let mut components = Path::new(name).components();
            let plain = matches!(components.next(), Some(Component::Normal(_)))
                && components.next().is_none();
            if !plain {
                bail!("icon name must be a plain file name: {}", name);
            }
        }

        Ok(())
    }
}
