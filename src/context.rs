//! Application context.
//!
//! All handler dependencies live here, constructed once at startup and
//! passed explicitly; there is no global bot or client state.

use std::sync::Arc;

use crate::config::Config;
use crate::node::{CliNodeClient, NodeClient};
use crate::price::{CoinMetroSource, P2pb2bSource, PriceSource};

pub struct AppContext {
    pub node: Arc<dyn NodeClient>,
    /// Price sources in report order.
    pub price_sources: Vec<Arc<dyn PriceSource>>,
}

impl AppContext {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            node: Arc::new(CliNodeClient::new(config.node.cli_path.clone())),
            price_sources: default_sources(),
        }
    }
}

/// The production source list: CoinMetro (EUR + USD in one call), then
/// P2PB2B for the ETH and USD markets.
fn default_sources() -> Vec<Arc<dyn PriceSource>> {
    vec![
        Arc::new(CoinMetroSource::new()),
        Arc::new(P2pb2bSource::new("THT_ETH", "ETH")),
        Arc::new(P2pb2bSource::new("THT_USD", "USD")),
    ]
}
