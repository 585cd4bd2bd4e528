// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Cloud Foundry v3 API client.
//!
//! Implements [`NameResolver`] against the v3 REST endpoints. Authentication
//! uses the OAuth client-credentials grant: the login endpoint is discovered
//! from the API root document once, and the bearer token is cached until
//! shortly before it expires.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::{Mutex, OnceCell};
use tracing::debug;

use crate::config::CfConfig;
use crate::error::Error;
use crate::resolver::{
    NameResolver, Organization, ServiceInstance, ServiceOffering, ServicePlan, Space,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Refresh the token this long before the advertised expiry so in-flight
// lookups never race an expiring token.
const TOKEN_EXPIRY_LEEWAY: Duration = Duration::from_secs(60);

/// [`NameResolver`] backed by the Cloud Foundry v3 API.
///
/// Stateless apart from cached authentication; a single client may be shared
/// across many concurrent tag generations.
pub struct CloudFoundryClient {
    http: reqwest::Client,
    config: CfConfig,
    login_url: OnceCell<String>,
    token: Mutex<Option<CachedToken>>,
}

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

#[derive(Deserialize)]
struct RootDocument {
    links: RootLinks,
}

#[derive(Deserialize)]
struct RootLinks {
    login: Link,
}

#[derive(Deserialize)]
struct Link {
    href: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Deserialize)]
struct NamedResource {
    guid: String,
    name: String,
}

#[derive(Deserialize)]
struct SpaceResource {
    guid: String,
    name: String,
    #[serde(default)]
    relationships: SpaceRelationships,
}

#[derive(Deserialize, Default)]
struct SpaceRelationships {
    #[serde(default)]
    organization: Relationship,
}

#[derive(Deserialize)]
struct ServiceInstanceResource {
    guid: String,
    name: String,
    #[serde(default)]
    relationships: ServiceInstanceRelationships,
}

#[derive(Deserialize, Default)]
struct ServiceInstanceRelationships {
    #[serde(default)]
    space: Relationship,
}

#[derive(Deserialize, Default)]
struct Relationship {
    data: Option<RelationshipData>,
}

#[derive(Deserialize)]
struct RelationshipData {
    guid: String,
}

impl CloudFoundryClient {
    pub fn new(config: CfConfig) -> Result<CloudFoundryClient, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(CloudFoundryClient {
            http,
            config,
            login_url: OnceCell::new(),
            token: Mutex::new(None),
        })
    }

    pub fn from_env() -> Result<CloudFoundryClient, Error> {
        CloudFoundryClient::new(CfConfig::from_env()?)
    }

    /// Login endpoint advertised by the API root document, discovered once.
    async fn login_url(&self) -> Result<&str, Error> {
        self.login_url
            .get_or_try_init(|| async {
                let url = format!("{}/", self.config.api_url);
                debug!(%url, "discovering login endpoint");
                let response = self.http.get(&url).send().await?;
                let root: RootDocument = decode(response, url).await?;
                Ok(root.links.login.href.trim_end_matches('/').to_string())
            })
            .await
            .map(String::as_str)
    }

    async fn token(&self) -> Result<String, Error> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.access_token.clone());
            }
        }

        let login_url = self.login_url().await?;
        let url = format!("{login_url}/oauth/token");
        debug!(%url, "requesting access token");
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;
        let token: TokenResponse = decode(response, url).await?;

        let expires_at =
            Instant::now() + Duration::from_secs(token.expires_in).saturating_sub(TOKEN_EXPIRY_LEEWAY);
        *cached = Some(CachedToken {
            access_token: token.access_token.clone(),
            expires_at,
        });
        Ok(token.access_token)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let token = self.token().await?;
        let url = format!("{}{path}", self.config.api_url);
        debug!(%url, "fetching resource");
        let response = self.http.get(&url).bearer_auth(token).send().await?;
        decode(response, url).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response, url: String) -> Result<T, Error> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Api { status, url, body });
    }
    Ok(response.json().await?)
}

#[async_trait]
impl NameResolver for CloudFoundryClient {
    async fn get_organization(&self, guid: &str) -> Result<Organization, Error> {
        let organization: NamedResource = self.get(&format!("/v3/organizations/{guid}")).await?;
        Ok(Organization {
            guid: organization.guid,
            name: organization.name,
        })
    }

    async fn get_space(&self, guid: &str) -> Result<Space, Error> {
        let space: SpaceResource = self.get(&format!("/v3/spaces/{guid}")).await?;
        Ok(Space {
            guid: space.guid,
            name: space.name,
            organization_guid: space.relationships.organization.data.map(|data| data.guid),
        })
    }

    async fn get_service_instance(&self, guid: &str) -> Result<ServiceInstance, Error> {
        let instance: ServiceInstanceResource =
            self.get(&format!("/v3/service_instances/{guid}")).await?;
        Ok(ServiceInstance {
            guid: instance.guid,
            name: instance.name,
            space_guid: instance.relationships.space.data.map(|data| data.guid),
        })
    }

    async fn get_service_offering(&self, guid: &str) -> Result<ServiceOffering, Error> {
        let offering: NamedResource = self.get(&format!("/v3/service_offerings/{guid}")).await?;
        Ok(ServiceOffering {
            guid: offering.guid,
            name: offering.name,
        })
    }

    async fn get_service_plan(&self, guid: &str) -> Result<ServicePlan, Error> {
        let plan: NamedResource = self.get(&format!("/v3/service_plans/{guid}")).await?;
        Ok(ServicePlan {
            guid: plan.guid,
            name: plan.name,
        })
    }
}
