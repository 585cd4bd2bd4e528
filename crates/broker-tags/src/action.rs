// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::constants::{CREATED_AT_TAG_KEY, UPDATED_AT_TAG_KEY};

/// Broker action being tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Update,
}

impl Action {
    /// Tag key under which the action timestamp is recorded.
    #[must_use]
    pub fn tag_key(self) -> &'static str {
        match self {
            Action::Create => CREATED_AT_TAG_KEY,
            Action::Update => UPDATED_AT_TAG_KEY,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Create => write!(f, "Created"),
            Action::Update => write!(f, "Updated"),
        }
    }
}
