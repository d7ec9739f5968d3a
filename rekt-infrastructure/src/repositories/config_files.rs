use std::path::Path;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::fs;

use rekt_domain::{ConfigRepository, Taxonomy};

/// Reads and writes the category taxonomy as a YAML list.
pub struct ConfigFileRepository;

impl ConfigFileRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfigFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigRepository for ConfigFileRepository {
    async fn load_taxonomy(&self, path: &str) -> anyhow::Result<Taxonomy> {
        let content = fs::read_to_string(path).await?;
        let entries: Vec<String> = serde_yaml::from_str(&content)?;
        Taxonomy::new(entries).ok_or_else(|| anyhow!("taxonomy file {} has no entries", path))
    }

    async fn save_taxonomy(&self, path: &str, taxonomy: &Taxonomy) -> anyhow::Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_yaml::to_string(taxonomy)?;
        fs::write(path, content).await?;
        Ok(())
    }
}
