//! Price report assembly.

use super::{Quote, BASE_ASSET};

/// Line shown when every source failed. The report body is never empty.
const NO_DATA_LINE: &str = "    No price data available";

/// Ordered collection of quotes rendered as one text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceReport {
    quotes: Vec<Quote>,
}

impl PriceReport {
    #[must_use]
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Render the report as plain text.
    ///
    /// Source names are right-aligned so the `1 THT =` columns line up;
    /// front ends that support it wrap the result in a monospace block.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("Current Price:\n");

        if self.quotes.is_empty() {
            out.push_str(NO_DATA_LINE);
            out.push('\n');
            return out;
        }

        for quote in &self.quotes {
            out.push_str(&format!(
                "{:>10}: 1 {} = {} {}\n",
                quote.source, BASE_ASSET, quote.price, quote.currency
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(source: &'static str, price: &str, currency: &'static str) -> Quote {
        Quote {
            source,
            price: price.to_string(),
            currency,
        }
    }

    #[test]
    fn renders_one_line_per_quote_in_order() {
        let report = PriceReport::new(vec![
            quote("CoinMetro", "0.004200", "EUR"),
            quote("CoinMetro", "0.005100", "USD"),
            quote("P2PB2B", "0.0000021", "ETH"),
        ]);

        assert_eq!(
            report.render(),
            "Current Price:\n\
             \u{20}CoinMetro: 1 THT = 0.004200 EUR\n\
             \u{20}CoinMetro: 1 THT = 0.005100 USD\n\
             \u{20}\u{20}\u{20}\u{20}P2PB2B: 1 THT = 0.0000021 ETH\n"
        );
    }

    #[test]
    fn empty_report_shows_no_data_marker() {
        let report = PriceReport::new(Vec::new());
        assert_eq!(
            report.render(),
            "Current Price:\n    No price data available\n"
        );
    }

    #[test]
    fn source_names_right_aligned_to_same_column() {
        let report = PriceReport::new(vec![
            quote("CoinMetro", "1", "EUR"),
            quote("P2PB2B", "2", "USD"),
        ]);
        let rendered = report.render();
        let lines: Vec<&str> = rendered.lines().skip(1).collect();
        let colon_columns: Vec<usize> = lines
            .iter()
            .map(|line| line.find(':').unwrap())
            .collect();
        assert_eq!(colon_columns, vec![10, 10]);
    }
}
