use tracing::error;

use crate::AppError;
use crate::AppState;
use rekt_domain::Chain;

pub async fn list_chains(state: &AppState) -> Result<Vec<Chain>, AppError> {
    let chains = state.source.list_chains().await.map_err(|err| {
        error!("failed to list chains: {}", err);
        AppError::from(err)
    })?;
    Ok(chains)
}
