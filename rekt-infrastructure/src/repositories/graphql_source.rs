use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use rekt_domain::ports::IncidentSource;
use rekt_domain::{Chain, RawIncident, RektError, RektResult, SourceConfig};

const API_KEY_HEADER: &str = "X-Api-Key";

const REKTS_QUERY: &str = r#"
query Rekts($pageNumber: Int!, $pageSize: Int!) {
  rekts(pageNumber: $pageNumber, pageSize: $pageSize, orderBy: { fundsLost: desc }) {
    id
    projectName
    description
    date
    fundsLost
    fundsReturned
    category
    issueType
    chainIds
    token { name }
  }
}
"#;

const SEARCH_QUERY: &str = r#"
query SearchRekts($pageNumber: Int!, $pageSize: Int!, $searchText: String!) {
  rekts(pageNumber: $pageNumber, pageSize: $pageSize, searchText: $searchText, orderBy: { fundsLost: desc }) {
    id
    projectName
    description
    date
    fundsLost
    fundsReturned
    category
    issueType
    chainIds
    token { name }
  }
}
"#;

const CHAINS_QUERY: &str = r#"
query Chains {
  chains {
    id
    absoluteChainId
    abbr
    name
    type
  }
}
"#;

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct RektsData {
    rekts: Vec<RawIncident>,
}

#[derive(Debug, Deserialize)]
struct ChainsData {
    chains: Vec<Chain>,
}

/// `IncidentSource` backed by the public GraphQL API.
pub struct GraphqlIncidentSource {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GraphqlIncidentSource {
    pub fn new(config: &SourceConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds.max(3)))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.graphql_endpoint.clone(),
            api_key: config.graphql_api_key.clone(),
        })
    }

    async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> RektResult<T> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|err| RektError::Transport(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(status = %status, "graphql endpoint rejected the api key");
            return Err(RektError::Unauthorized);
        }
        if !status.is_success() {
            return Err(RektError::Transport(format!("graphql endpoint responded {}", status)));
        }
        let body: Value = response
            .json()
            .await
            .map_err(|err| RektError::Transport(format!("invalid response body: {}", err)))?;
        decode_response(body)
    }
}

/// Unwraps a GraphQL envelope. Any entry in `errors` fails the call.
fn decode_response<T: DeserializeOwned>(body: Value) -> RektResult<T> {
    let envelope: GraphqlResponse<T> = serde_json::from_value(body)
        .map_err(|err| RektError::Api(format!("unexpected response shape: {}", err)))?;
    if !envelope.errors.is_empty() {
        let messages: Vec<String> = envelope.errors.into_iter().map(|err| err.message).collect();
        return Err(RektError::Api(messages.join("; ")));
    }
    envelope
        .data
        .ok_or_else(|| RektError::Api("response carried no data".to_string()))
}

#[async_trait]
impl IncidentSource for GraphqlIncidentSource {
    async fn fetch_page(&self, page_number: usize, page_size: usize) -> RektResult<Vec<RawIncident>> {
        let data: RektsData = self
            .execute(
                REKTS_QUERY,
                json!({ "pageNumber": page_number, "pageSize": page_size }),
            )
            .await?;
        debug!(page = page_number, records = data.rekts.len(), "graphql rekts page");
        Ok(data.rekts)
    }

    async fn search(&self, text: &str, page_number: usize, page_size: usize) -> RektResult<Vec<RawIncident>> {
        let data: RektsData = self
            .execute(
                SEARCH_QUERY,
                json!({ "pageNumber": page_number, "pageSize": page_size, "searchText": text }),
            )
            .await?;
        debug!(page = page_number, records = data.rekts.len(), "graphql search page");
        Ok(data.rekts)
    }

    async fn list_chains(&self) -> RektResult<Vec<Chain>> {
        let data: ChainsData = self.execute(CHAINS_QUERY, json!({})).await?;
        Ok(data.chains)
    }

    async fn ping(&self) -> RektResult<()> {
        self.fetch_page(1, 1).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rekts_page() {
        let body = json!({
            "data": {
                "rekts": [{
                    "id": 7,
                    "projectName": "Ronin",
                    "date": "2022-03-23T00:00:00.000Z",
                    "fundsLost": "624000000",
                    "fundsReturned": null,
                    "category": "Bridge",
                    "token": { "name": "ETH" }
                }]
            }
        });
        let data: RektsData = decode_response(body).expect("decode");
        assert_eq!(data.rekts.len(), 1);
        assert_eq!(data.rekts[0].project_name.as_deref(), Some("Ronin"));
        assert!(data.rekts[0].funds_returned.is_none());
    }

    #[test]
    fn decodes_chains() {
        let body = json!({
            "data": {
                "chains": [
                    { "id": 1, "absoluteChainId": "1", "abbr": "ETH", "name": "Ethereum", "type": "evm" },
                    { "id": 2, "abbr": "BSC", "name": "BNB Chain" }
                ]
            }
        });
        let data: ChainsData = decode_response(body).expect("decode");
        assert_eq!(data.chains.len(), 2);
        assert_eq!(data.chains[0].chain_type.as_deref(), Some("evm"));
        assert!(data.chains[1].absolute_chain_id.is_none());
    }

    #[test]
    fn graphql_errors_become_api_errors() {
        let body = json!({
            "data": null,
            "errors": [{ "message": "pageSize too large" }, { "message": "bad order" }]
        });
        let err = decode_response::<RektsData>(body).expect_err("errors");
        assert_eq!(err, RektError::Api("pageSize too large; bad order".to_string()));
    }

    #[test]
    fn missing_data_is_an_api_error() {
        let err = decode_response::<RektsData>(json!({})).expect_err("no data");
        assert!(matches!(err, RektError::Api(_)));
        assert!(err.is_upstream());
    }

    #[test]
    fn source_builds_from_config() {
        let source = GraphqlIncidentSource::new(&SourceConfig {
            graphql_endpoint: "http://127.0.0.1:9/graphql".to_string(),
            graphql_api_key: "key".to_string(),
            request_timeout_seconds: 1,
        })
        .expect("client");
        assert_eq!(source.endpoint, "http://127.0.0.1:9/graphql");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let source = GraphqlIncidentSource::new(&SourceConfig {
            graphql_endpoint: "http://127.0.0.1:9/graphql".to_string(),
            graphql_api_key: "key".to_string(),
            request_timeout_seconds: 1,
        })
        .expect("client");
        let err = source.fetch_page(1, 50).await.expect_err("unreachable");
        assert!(matches!(err, RektError::Transport(_)));
    }
}
