// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Metadata tag generation for Cloud Foundry service brokers.
//!
//! Service brokers annotate the backing resources they provision (object
//! storage buckets, databases, queues) with tags describing who asked for
//! them, when, and where they live on the platform. Given the GUIDs seen in
//! a provision or update request, this crate resolves the human-readable
//! names behind them through the Cloud Foundry v3 API and assembles a flat
//! `HashMap<String, String>` of tags.
//!
//! When a provision request carries only the service instance GUID, the
//! space and organization can be inferred by walking the instance's
//! relationships (opt-in via `infer_missing`).
//!
//! # Example
//!
//! ```rust,ignore
//! use broker_tags::{Action, ResourceGuids, TagManager, TagManagerConfig};
//!
//! let manager = TagManager::from_env(TagManagerConfig {
//!     broker: Some("AWS S3 Service Broker".to_string()),
//!     environment: Some("Production".to_string()),
//! })?;
//!
//! let tags = manager
//!     .generate_tags(
//!         Action::Create,
//!         Some("aws-s3"),
//!         Some("basic"),
//!         &ResourceGuids {
//!             instance_guid: Some(instance_guid),
//!             ..ResourceGuids::default()
//!         },
//!         true,
//!     )
//!     .await?;
//! ```

pub mod action;
pub mod cf;
pub mod config;
pub mod constants;
pub mod error;
pub mod resolver;
pub mod tags;

pub use action::Action;
pub use cf::CloudFoundryClient;
pub use config::CfConfig;
pub use error::Error;
pub use resolver::{
    NameResolver, Organization, ServiceInstance, ServiceOffering, ServicePlan, Space,
};
pub use tags::{ResourceGuids, TagManager, TagManagerConfig};
