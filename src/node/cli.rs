//! Node CLI invocation via `tokio::process`.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::NodeError;

use super::NodeClient;

/// Runs queries against the node by spawning its command-line client.
pub struct CliNodeClient {
    cli_path: String,
}

impl CliNodeClient {
    #[must_use]
    pub fn new(cli_path: String) -> Self {
        Self { cli_path }
    }
}

#[async_trait]
impl NodeClient for CliNodeClient {
    async fn run(&self, subcommand: &str) -> Result<String, NodeError> {
        debug!(command = %self.cli_path, subcommand, "running node CLI");

        let output = Command::new(&self.cli_path)
            .arg(subcommand)
            .output()
            .await
            .map_err(|source| NodeError::Spawn {
                command: self.cli_path.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(NodeError::CommandFailed {
                command: self.cli_path.clone(),
                subcommand: subcommand.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| NodeError::InvalidOutput {
            command: self.cli_path.clone(),
            subcommand: subcommand.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let client = CliNodeClient::new("/nonexistent/thought-cli".into());
        let err = client.run("getblockcount").await.unwrap_err();
        assert!(matches!(err, NodeError::Spawn { .. }));
    }

    #[tokio::test]
    async fn nonzero_exit_carries_stderr() {
        // `false` stands in for a node CLI that exits non-zero.
        let client = CliNodeClient::new("false".into());
        let err = client.run("getblockcount").await.unwrap_err();
        match err {
            NodeError::CommandFailed {
                subcommand, status, ..
            } => {
                assert_eq!(subcommand, "getblockcount");
                assert!(!status.success());
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn captures_stdout() {
        let client = CliNodeClient::new("echo".into());
        let output = client.run("12345").await.unwrap();
        assert_eq!(output, "12345\n");
    }
}
