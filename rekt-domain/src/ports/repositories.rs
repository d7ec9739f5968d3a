use async_trait::async_trait;

use crate::entities::{Chain, RawIncident};
use crate::errors::RektResult;
use crate::value_objects::Taxonomy;

/// Remote collaborator serving rekt records, ordered by descending funds lost.
#[async_trait]
pub trait IncidentSource: Send + Sync {
    /// Pages are numbered from 1.
    async fn fetch_page(&self, page_number: usize, page_size: usize) -> RektResult<Vec<RawIncident>>;
    async fn search(&self, text: &str, page_number: usize, page_size: usize) -> RektResult<Vec<RawIncident>>;
    async fn list_chains(&self) -> RektResult<Vec<Chain>>;
    async fn ping(&self) -> RektResult<()>;
}

#[async_trait]
pub trait ConfigRepository: Send + Sync {
    async fn load_taxonomy(&self, path: &str) -> anyhow::Result<Taxonomy>;
    async fn save_taxonomy(&self, path: &str, taxonomy: &Taxonomy) -> anyhow::Result<()>;
}
