use anyhow::{anyhow, Result};

pub const MAX_PAGE_SIZE: usize = 100;

pub fn validate_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(anyhow!("page_size must be within 1..={}", MAX_PAGE_SIZE));
    }
    Ok(())
}

pub fn validate_limits(default_limit: usize, max_limit: usize) -> Result<()> {
    if max_limit == 0 {
        return Err(anyhow!("max_limit must be greater than 0"));
    }
    if default_limit == 0 || default_limit > max_limit {
        return Err(anyhow!(
            "default_limit must be within 1..=max_limit ({})",
            max_limit
        ));
    }
    Ok(())
}

pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let trimmed = endpoint.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("graphql_endpoint must not be empty"));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(anyhow!("graphql_endpoint must be an http(s) url"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_bounds() {
        assert!(validate_page_size(1).is_ok());
        assert!(validate_page_size(100).is_ok());
        assert!(validate_page_size(0).is_err());
        assert!(validate_page_size(101).is_err());
    }

    #[test]
    fn default_limit_must_fit_max() {
        assert!(validate_limits(100, 1000).is_ok());
        assert!(validate_limits(2000, 1000).is_err());
        assert!(validate_limits(0, 1000).is_err());
    }

    #[test]
    fn endpoint_must_be_http() {
        assert!(validate_endpoint("https://public-api.defiyield.app/graphql/").is_ok());
        assert!(validate_endpoint("  ").is_err());
        assert!(validate_endpoint("ftp://example.org").is_err());
    }
}
