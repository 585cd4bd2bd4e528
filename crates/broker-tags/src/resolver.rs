// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Directory lookups against the platform, keyed by resource GUID.

use async_trait::async_trait;

use crate::error::Error;

/// A Cloud Foundry organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub guid: String,
    pub name: String,
}

/// A Cloud Foundry space, with a back-reference to the organization that
/// contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space {
    pub guid: String,
    pub name: String,
    pub organization_guid: Option<String>,
}

/// A provisioned service instance, with a back-reference to the space it
/// lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInstance {
    pub guid: String,
    pub name: String,
    pub space_guid: Option<String>,
}

/// A catalog service offering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOffering {
    pub guid: String,
    pub name: String,
}

/// A catalog service plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePlan {
    pub guid: String,
    pub name: String,
}

/// Read-only resource lookups by GUID.
///
/// Implementations are direct passthroughs to the remote directory: no
/// validation, no retries, and remote errors surface unchanged. Callers
/// guarantee the GUID is non-empty. Implementations hold no per-call state
/// and may be shared across concurrent tag generations.
#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn get_organization(&self, guid: &str) -> Result<Organization, Error>;
    async fn get_space(&self, guid: &str) -> Result<Space, Error>;
    async fn get_service_instance(&self, guid: &str) -> Result<ServiceInstance, Error>;
    async fn get_service_offering(&self, guid: &str) -> Result<ServiceOffering, Error>;
    async fn get_service_plan(&self, guid: &str) -> Result<ServicePlan, Error>;
}
