//! CoinMetro ticker source.
//!
//! One endpoint reports the latest price for every listed pair; the
//! THT/EUR and THT/USD entries are extracted from it, so a single
//! fetch yields up to two quotes.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::SourceError;

use super::{PriceSource, Quote};

const NAME: &str = "CoinMetro";
const PRICES_URL: &str = "https://api.coinmetro.com/exchange/prices";

/// Wanted pairs in report order, with the currency each renders as.
const WANTED_PAIRS: [(&str, &str); 2] = [("THTEUR", "EUR"), ("THTUSD", "USD")];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PricesResponse {
    latest_prices: Vec<PairPrice>,
}

#[derive(Debug, Deserialize)]
struct PairPrice {
    pair: String,
    price: Decimal,
}

pub struct CoinMetroSource {
    client: Client,
    url: String,
}

impl CoinMetroSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            url: PRICES_URL.to_string(),
        }
    }
}

impl Default for CoinMetroSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceSource for CoinMetroSource {
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
        decode_quotes(&body)
    }
}

/// Decode the prices payload and extract the wanted pairs.
///
/// High precision numbers are rendered with exactly 6 decimal places.
/// An answer containing none of the wanted pairs is malformed for our
/// purposes, not an empty success.
fn decode_quotes(body: &str) -> Result<Vec<Quote>, SourceError> {
    let response: PricesResponse =
        serde_json::from_str(body).map_err(|err| SourceError::Malformed {
            reason: err.to_string(),
        })?;

    let mut quotes = Vec::new();
    for (pair, currency) in WANTED_PAIRS {
        if let Some(entry) = response.latest_prices.iter().find(|p| p.pair == pair) {
            quotes.push(Quote {
                source: NAME,
                price: format!("{:.6}", entry.price),
                currency,
            });
        }
    }

    if quotes.is_empty() {
        return Err(SourceError::Malformed {
            reason: "no THT pairs in response".into(),
        });
    }

    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_both_pairs_in_fixed_order() {
        // Response order differs from report order on purpose.
        let body = r#"{
            "latestPrices": [
                { "pair": "BTCEUR", "price": 57000.5 },
                { "pair": "THTUSD", "price": 0.0051 },
                { "pair": "THTEUR", "price": 0.00423 }
            ]
        }"#;

        let quotes = decode_quotes(body).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].price, "0.004230");
        assert_eq!(quotes[0].currency, "EUR");
        assert_eq!(quotes[1].price, "0.005100");
        assert_eq!(quotes[1].currency, "USD");
    }

    #[test]
    fn renders_six_decimal_places() {
        let body = r#"{ "latestPrices": [ { "pair": "THTEUR", "price": 0.5 } ] }"#;
        let quotes = decode_quotes(body).unwrap();
        assert_eq!(quotes[0].price, "0.500000");
    }

    #[test]
    fn single_pair_yields_single_quote() {
        let body = r#"{ "latestPrices": [ { "pair": "THTUSD", "price": 0.005 } ] }"#;
        let quotes = decode_quotes(body).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].currency, "USD");
    }

    #[test]
    fn missing_tht_pairs_is_malformed() {
        let body = r#"{ "latestPrices": [ { "pair": "BTCEUR", "price": 57000.5 } ] }"#;
        assert!(matches!(
            decode_quotes(body),
            Err(SourceError::Malformed { .. })
        ));
    }

    #[test]
    fn garbage_body_is_malformed() {
        assert!(matches!(
            decode_quotes("<html>gateway timeout</html>"),
            Err(SourceError::Malformed { .. })
        ));
    }
}
