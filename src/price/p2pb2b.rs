//! P2PB2B ticker source.
//!
//! Pair-specific endpoint, instantiated once per market. The upstream
//! reports the last price as a string, which is passed through to the
//! report verbatim.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::SourceError;

use super::{PriceSource, Quote};

const NAME: &str = "P2PB2B";
const TICKER_URL: &str = "http://api.p2pb2b.io/api/v2/public/ticker";

#[derive(Debug, Deserialize)]
struct TickerResponse {
    result: TickerResult,
}

#[derive(Debug, Deserialize)]
struct TickerResult {
    last: String,
}

pub struct P2pb2bSource {
    client: Client,
    url: String,
    currency: &'static str,
}

impl P2pb2bSource {
    /// A source for one market, e.g. `("THT_ETH", "ETH")`.
    #[must_use]
    pub fn new(market: &str, currency: &'static str) -> Self {
        Self {
            client: Client::new(),
            url: format!("{TICKER_URL}?market={market}"),
            currency,
        }
    }
}

#[async_trait]
impl PriceSource for P2pb2bSource {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn fetch(&self) -> Result<Vec<Quote>, SourceError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status { status });
        }

        let body = response.text().await?;
        decode_quote(&body, self.currency).map(|quote| vec![quote])
    }
}

fn decode_quote(body: &str, currency: &'static str) -> Result<Quote, SourceError> {
    let response: TickerResponse =
        serde_json::from_str(body).map_err(|err| SourceError::Malformed {
            reason: err.to_string(),
        })?;

    Ok(Quote {
        source: NAME,
        price: response.result.last,
        currency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_price_passes_through_verbatim() {
        let body = r#"{
            "success": true,
            "result": {
                "bid": "0.00000205",
                "ask": "0.00000219",
                "last": "0.00000210"
            }
        }"#;

        let quote = decode_quote(body, "ETH").unwrap();
        assert_eq!(quote.source, "P2PB2B");
        assert_eq!(quote.price, "0.00000210");
        assert_eq!(quote.currency, "ETH");
    }

    #[test]
    fn missing_last_field_is_malformed() {
        let body = r#"{ "success": true, "result": { "bid": "0.1" } }"#;
        assert!(matches!(
            decode_quote(body, "USD"),
            Err(SourceError::Malformed { .. })
        ));
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert!(matches!(
            decode_quote("upstream maintenance", "USD"),
            Err(SourceError::Malformed { .. })
        ));
    }
}
