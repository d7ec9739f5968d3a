use async_trait::async_trait;

#[async_trait]
pub trait HealthCheckService: Send + Sync {
    async fn check_source(&self) -> anyhow::Result<bool>;
}
