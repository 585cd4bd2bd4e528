// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Tag assembly for broker create/update events.
//!
//! One `generate_tags` call makes at most three sequential directory lookups
//! (service instance, space, organization) and returns a fresh owned map;
//! nothing is cached between calls.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use crate::action::Action;
use crate::cf::CloudFoundryClient;
use crate::config::CfConfig;
use crate::constants::{
    BROKER_TAG_KEY, CLIENT_NAME, CLIENT_TAG_KEY, ENVIRONMENT_TAG_KEY, ORGANIZATION_GUID_TAG_KEY,
    ORGANIZATION_NAME_TAG_KEY, SERVICE_INSTANCE_GUID_TAG_KEY, SERVICE_OFFERING_NAME_TAG_KEY,
    SERVICE_PLAN_NAME_TAG_KEY, SPACE_GUID_TAG_KEY, SPACE_NAME_TAG_KEY,
};
use crate::error::Error;
use crate::resolver::NameResolver;

/// Optional resource identifiers for one create/update event.
///
/// `None` and an empty string both mean "absent": the field is omitted from
/// the output and never looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceGuids {
    pub instance_guid: Option<String>,
    pub space_guid: Option<String>,
    pub organization_guid: Option<String>,
}

/// Static fields stamped into every generated tag set.
#[derive(Debug, Clone, Default)]
pub struct TagManagerConfig {
    /// Display name of the broker itself; omitted from the output when
    /// unset.
    pub broker: Option<String>,
    /// Deployment environment name; lower-cased in the output, omitted when
    /// unset.
    pub environment: Option<String>,
}

/// Generates the descriptive tag set for resources the broker provisions.
pub struct TagManager {
    broker: Option<String>,
    environment: Option<String>,
    resolver: Arc<dyn NameResolver>,
}

impl TagManager {
    pub fn new(resolver: Arc<dyn NameResolver>, config: TagManagerConfig) -> TagManager {
        TagManager {
            broker: config.broker,
            environment: config.environment,
            resolver,
        }
    }

    /// Builds a manager backed by the Cloud Foundry API, with connection
    /// parameters taken from the environment.
    pub fn from_env(config: TagManagerConfig) -> Result<TagManager, Error> {
        Ok(TagManager::new(Arc::new(CloudFoundryClient::from_env()?), config))
    }

    pub fn from_config(cf_config: CfConfig, config: TagManagerConfig) -> Result<TagManager, Error> {
        Ok(TagManager::new(Arc::new(CloudFoundryClient::new(cf_config)?), config))
    }

    /// Assembles the tag set for one create/update event.
    ///
    /// Service offering and plan are accepted as pre-resolved display names
    /// from the caller and recorded as-is; they are never looked up by GUID.
    /// With `infer_missing` set, a missing space GUID is derived from the
    /// instance's space relationship and a missing organization GUID from
    /// the space's organization relationship, each via a single lookup.
    ///
    /// The first failing lookup aborts the call with that error; no partial
    /// tag set is returned.
    pub async fn generate_tags(
        &self,
        action: Action,
        service_offering_name: Option<&str>,
        service_plan_name: Option<&str>,
        guids: &ResourceGuids,
        infer_missing: bool,
    ) -> Result<HashMap<String, String>, Error> {
        let mut tags = HashMap::new();

        tags.insert(CLIENT_TAG_KEY.to_string(), CLIENT_NAME.to_string());
        if let Some(broker) = non_empty(self.broker.as_deref()) {
            tags.insert(BROKER_TAG_KEY.to_string(), broker.to_string());
        }
        if let Some(environment) = non_empty(self.environment.as_deref()) {
            tags.insert(ENVIRONMENT_TAG_KEY.to_string(), environment.to_lowercase());
        }
        tags.insert(
            action.tag_key().to_string(),
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        );

        if let Some(name) = non_empty(service_offering_name) {
            tags.insert(SERVICE_OFFERING_NAME_TAG_KEY.to_string(), name.to_string());
        }
        if let Some(name) = non_empty(service_plan_name) {
            tags.insert(SERVICE_PLAN_NAME_TAG_KEY.to_string(), name.to_string());
        }

        let instance_guid = non_empty(guids.instance_guid.as_deref());
        if let Some(guid) = instance_guid {
            tags.insert(SERVICE_INSTANCE_GUID_TAG_KEY.to_string(), guid.to_string());
        }

        let mut space_guid = non_empty(guids.space_guid.as_deref()).map(str::to_string);
        if space_guid.is_none() && infer_missing {
            if let Some(guid) = instance_guid {
                let instance = self.resolver.get_service_instance(guid).await?;
                space_guid = instance.space_guid.filter(|guid| !guid.is_empty());
            }
        }

        // Fetched at most once; the record is kept around so organization
        // inference below never repeats the space lookup.
        let mut space = None;
        if let Some(guid) = &space_guid {
            tags.insert(SPACE_GUID_TAG_KEY.to_string(), guid.clone());
            let resolved = self.resolver.get_space(guid).await?;
            tags.insert(SPACE_NAME_TAG_KEY.to_string(), resolved.name.clone());
            space = Some(resolved);
        }

        let mut organization_guid = non_empty(guids.organization_guid.as_deref()).map(str::to_string);
        if organization_guid.is_none() && infer_missing {
            organization_guid = space
                .as_ref()
                .and_then(|space| space.organization_guid.clone())
                .filter(|guid| !guid.is_empty());
        }
        if let Some(guid) = &organization_guid {
            tags.insert(ORGANIZATION_GUID_TAG_KEY.to_string(), guid.clone());
            let organization = self.resolver.get_organization(guid).await?;
            tags.insert(ORGANIZATION_NAME_TAG_KEY.to_string(), organization.name);
        }

        Ok(tags)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
