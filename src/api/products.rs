//! Product Endpoint

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;

use super::get_text;
use crate::error::FetchError;
use crate::models::Product;

/// Decode the endpoint's JSON array
pub fn parse_products(body: &str) -> Result<Vec<Product>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

pub async fn fetch_products(endpoint: &str) -> Result<Vec<Product>, FetchError> {
    let body = get_text(endpoint).await?;
    parse_products(&body)
}

/// Same as [`fetch_products`], failing with `Timeout` once `timeout_ms` elapses
pub async fn fetch_products_with_timeout(
    endpoint: &str,
    timeout_ms: u32,
) -> Result<Vec<Product>, FetchError> {
    let fetch = Box::pin(fetch_products(endpoint));
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms));
    match select(fetch, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FetchError::Timeout(timeout_ms)),
    }
}
