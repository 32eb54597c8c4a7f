use shopfront_catalog::{Catalog, Product};

/// Where the product catalog lives when no other base URL is given.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Client for the read-only product endpoint.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the whole catalog in one request.
    ///
    /// This is the session's only suspension point: awaited once before the
    /// page becomes interactive. Any failure is returned as-is; the caller
    /// decides what an unrenderable page looks like.
    pub async fn fetch_catalog(&self) -> Result<Catalog, SourceError> {
        let url = format!("{}/products", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "catalog fetch rejected");
            return Err(SourceError::Api(status.as_u16(), body));
        }

        let products: Vec<Product> = resp
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        tracing::info!(count = products.len(), "catalog loaded");
        Ok(Catalog::from_products(products))
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Why the initial load failed. Every variant is fatal for the render cycle
/// (spec'd behavior: no retries, no degraded mode).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}
