// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::env;

use crate::error::Error;

pub const CF_API_URL_VAR: &str = "CF_API_URL";
pub const CF_API_CLIENT_ID_VAR: &str = "CF_API_CLIENT_ID";
pub const CF_API_CLIENT_SECRET_VAR: &str = "CF_API_CLIENT_SECRET";

/// Connection parameters for the Cloud Foundry API.
///
/// Constructed explicitly or from the `CF_API_URL` / `CF_API_CLIENT_ID` /
/// `CF_API_CLIENT_SECRET` environment variables. Validation happens here,
/// before any tag generation is attempted.
#[derive(Debug, Clone)]
pub struct CfConfig {
    pub api_url: String,
    pub client_id: String,
    pub client_secret: String,
}

impl CfConfig {
    pub fn new(
        api_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<CfConfig, Error> {
        let config = CfConfig {
            // Lookup paths are joined onto the base URL, so normalize away
            // any trailing slash.
            api_url: api_url.into().trim_end_matches('/').to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        };
        for (name, value) in [
            ("api_url", &config.api_url),
            ("client_id", &config.client_id),
            ("client_secret", &config.client_secret),
        ] {
            if value.is_empty() {
                return Err(Error::InvalidConfig(format!("{name} must not be empty")));
            }
        }
        Ok(config)
    }

    pub fn from_env() -> Result<CfConfig, Error> {
        CfConfig::new(
            require_env(CF_API_URL_VAR)?,
            require_env(CF_API_CLIENT_ID_VAR)?,
            require_env(CF_API_CLIENT_SECRET_VAR)?,
        )
    }
}

fn require_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnvVar(name))
}
