use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Node CLI invocation errors.
///
/// Every failure mode of a node query is a distinct variant; a failed
/// query never masquerades as an empty reply.
#[derive(Error, Debug)]
pub enum NodeError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command} {subcommand}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        subcommand: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("`{command} {subcommand}` produced non-UTF-8 output")]
    InvalidOutput { command: String, subcommand: String },
}

/// Per-source failures of a price ticker query.
///
/// A source failing with any of these is dropped from the price report;
/// it never aborts the remaining sources.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned {status}")]
    Status { status: reqwest::StatusCode },

    #[error("malformed upstream response: {reason}")]
    Malformed { reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Node(#[from] NodeError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[cfg(feature = "discord")]
    #[error("Discord gateway error: {0}")]
    Discord(#[from] serenity::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
