// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Well-known tag keys written by the broker.
//!
//! Consumers that read broker-written tags back (for cost reporting,
//! auditing, cleanup jobs) should match on these constants rather than
//! re-typing the literal strings.

/// Value of the [`CLIENT_TAG_KEY`] tag on every generated tag set.
pub const CLIENT_NAME: &str = "Cloud Foundry";

pub const BROKER_TAG_KEY: &str = "broker";
pub const CLIENT_TAG_KEY: &str = "client";
pub const CREATED_AT_TAG_KEY: &str = "Created at";
pub const ENVIRONMENT_TAG_KEY: &str = "environment";
pub const ORGANIZATION_GUID_TAG_KEY: &str = "Organization GUID";
pub const ORGANIZATION_NAME_TAG_KEY: &str = "Organization name";
pub const SERVICE_INSTANCE_GUID_TAG_KEY: &str = "Instance GUID";
pub const SERVICE_INSTANCE_NAME_TAG_KEY: &str = "Instance name";
pub const SERVICE_OFFERING_GUID_TAG_KEY: &str = "Service GUID";
pub const SERVICE_OFFERING_NAME_TAG_KEY: &str = "Service offering name";
pub const SERVICE_PLAN_GUID_TAG_KEY: &str = "Plan GUID";
pub const SERVICE_PLAN_NAME_TAG_KEY: &str = "Service plan name";
pub const SPACE_GUID_TAG_KEY: &str = "Space GUID";
pub const SPACE_NAME_TAG_KEY: &str = "Space name";
pub const UPDATED_AT_TAG_KEY: &str = "Updated at";
