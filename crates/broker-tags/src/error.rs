// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use reqwest::StatusCode;

/// Errors surfaced by configuration loading, the Cloud Foundry client, and
/// tag generation.
///
/// Lookup errors are propagated verbatim: the first failing directory call
/// aborts `generate_tags` and no partial tag set is returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required environment variable was not set.
    #[error("{0} environment variable is required")]
    MissingEnvVar(&'static str),

    /// A connection parameter was supplied but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Transport-level failure talking to the Cloud Foundry API.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The Cloud Foundry API answered with a non-success status.
    #[error("Cloud Foundry API returned {status} for {url}: {body}")]
    Api {
        status: StatusCode,
        url: String,
        body: String,
    },
}
