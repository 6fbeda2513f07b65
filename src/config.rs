// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::env as vars;
use anyhow::{Context, Result};
use std::env;

/// Client configuration loaded from environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// API server URL, falls back to the default master host when unset
    pub master: Option<String>,
    /// Use the in-cluster service account settings instead of `master`
    pub guess_kube_api_settings: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Apply command line overrides on top of the environment settings
    pub fn with_overrides(
        mut self,
        master: Option<String>,
        guess_kube_api_settings: Option<bool>,
    ) -> Self {
        if let Some(master) = master.filter(|m| !m.is_empty()) {
            self.master = Some(master);
        }
        if let Some(guess) = guess_kube_api_settings {
            self.guess_kube_api_settings = guess;
        }
        self
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let master = lookup(vars::MASTER).filter(|m| !m.is_empty());
        let guess_kube_api_settings = match lookup(vars::GUESS_KUBE_API_SETTINGS) {
            Some(v) if !v.is_empty() => v.parse().with_context(|| {
                format!(
                    "{} must be true or false, got {:?}",
                    vars::GUESS_KUBE_API_SETTINGS,
                    v
                )
            })?,
            _ => false,
        };

        Ok(Config {
            master,
            guess_kube_api_settings,
        })
    }
}
