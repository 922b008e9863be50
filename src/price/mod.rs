//! Price aggregation across independent ticker sources.
//!
//! Each source is attempted once per request; a failing source is
//! logged and omitted from the report without affecting the others.
//! Partial failure is a first-class outcome, not an exception path.

mod coinmetro;
mod p2pb2b;
mod report;

pub use coinmetro::CoinMetroSource;
pub use p2pb2b::P2pb2bSource;
pub use report::PriceReport;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::SourceError;

/// The asset every quote is denominated in.
pub const BASE_ASSET: &str = "THT";

/// One exchange price for the base asset, ephemeral per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Display name of the originating source.
    pub source: &'static str,
    /// Rendered price value. Formatting is decided by the source:
    /// fixed 6 decimal places where the upstream reports high-precision
    /// numbers, verbatim pass-through where it reports strings.
    pub price: String,
    /// Quote currency or asset unit.
    pub currency: &'static str,
}

/// One upstream ticker endpoint.
///
/// A single fetch may legitimately yield several quotes (one endpoint
/// can report multiple currency pairs).
#[async_trait]
pub trait PriceSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch(&self) -> Result<Vec<Quote>, SourceError>;
}

/// Query every source in order and fold the outcomes into a report.
///
/// Sources are independent: a failure drops that source's lines and
/// moves on. Line order in the report follows source order, and quote
/// order within a source is preserved.
pub async fn aggregate(sources: &[Arc<dyn PriceSource>]) -> PriceReport {
    let mut quotes = Vec::new();

    for source in sources {
        match source.fetch().await {
            Ok(mut fetched) => {
                debug!(source = source.name(), quotes = fetched.len(), "source ok");
                quotes.append(&mut fetched);
            }
            Err(err) => {
                warn!(source = source.name(), error = %err, "price source unavailable");
            }
        }
    }

    PriceReport::new(quotes)
}
