//! Node query adapter.
//!
//! Queries the blockchain node through its command-line client and
//! returns the captured standard output. Failures (spawn errors,
//! non-zero exit, non-UTF-8 output) surface as typed [`NodeError`]s
//! rather than empty replies.

mod cli;

pub use cli::CliNodeClient;

use async_trait::async_trait;

use crate::error::NodeError;

/// Marker identifying address lines in `masternodelist` output.
const ADDRESS_MARKER: &str = "\"address\"";

/// The node queries exposed to chat users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeQuery {
    Difficulty,
    Height,
    MasternodeCount,
}

impl NodeQuery {
    /// Node CLI subcommand implementing this query.
    #[must_use]
    pub const fn subcommand(self) -> &'static str {
        match self {
            Self::Difficulty => "getdifficulty",
            Self::Height => "getblockcount",
            Self::MasternodeCount => "masternodelist",
        }
    }
}

/// Abstraction over the node CLI, so handlers can be exercised without
/// a running node.
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Run one subcommand and return its standard output.
    async fn run(&self, subcommand: &str) -> Result<String, NodeError>;
}

/// Count masternodes by scanning the `masternodelist` output for
/// address lines, in-process.
pub async fn masternode_count(node: &dyn NodeClient) -> Result<usize, NodeError> {
    let listing = node.run(NodeQuery::MasternodeCount.subcommand()).await?;
    Ok(count_address_lines(&listing))
}

/// One masternode entry carries exactly one `"address"` line, so the
/// count of matching lines is the masternode count.
fn count_address_lines(listing: &str) -> usize {
    listing
        .lines()
        .filter(|line| line.contains(ADDRESS_MARKER))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_address_lines() {
        let listing = r#"{
  "mn1": {
    "address": "1.2.3.4:10618",
    "status": "ENABLED"
  },
  "mn2": {
    "address": "5.6.7.8:10618",
    "status": "ENABLED"
  },
  "mn3": {
    "address": "9.9.9.9:10618",
    "status": "EXPIRED"
  }
}"#;
        assert_eq!(count_address_lines(listing), 3);
    }

    #[test]
    fn ignores_bare_address_text() {
        // Marker requires the quoted JSON key, not the word itself.
        let listing = "address\nstatus\n\"address\": \"1.2.3.4\"\n";
        assert_eq!(count_address_lines(listing), 1);
    }

    #[test]
    fn empty_listing_counts_zero() {
        assert_eq!(count_address_lines(""), 0);
        assert_eq!(count_address_lines("{}\n"), 0);
    }

    #[test]
    fn query_subcommands() {
        assert_eq!(NodeQuery::Difficulty.subcommand(), "getdifficulty");
        assert_eq!(NodeQuery::Height.subcommand(), "getblockcount");
        assert_eq!(NodeQuery::MasternodeCount.subcommand(), "masternodelist");
    }
}
