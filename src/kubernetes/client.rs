// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API server client creation

use crate::config::Config;
use crate::constants::DEFAULT_MASTER_HOST;
use crate::error::{ListerError, Result};
use http::Uri;
use kube::{Client, Config as KConfig};
use tracing::{debug, info, instrument};

/// Create a Kubernetes client from the lister configuration
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let client_config = if config.guess_kube_api_settings {
        debug!("Using in-cluster API settings");
        KConfig::incluster().map_err(|e| {
            ListerError::ConfigError(format!("Failed to load in-cluster config: {}", e))
        })?
    } else {
        KConfig::new(master_url(config)?)
    };

    info!("Connecting to API server at {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| ListerError::ConfigError(format!("Failed to create client: {}", e)))
}

/// Resolve the configured master URL, falling back to the default master host.
/// A bare `host:port` is reached over plain http.
pub fn master_url(config: &Config) -> Result<Uri> {
    let host = config.master.as_deref().unwrap_or(DEFAULT_MASTER_HOST);
    let uri = parse_uri(host)?;

    if uri.scheme().is_some() {
        return Ok(uri);
    }
    if uri.authority().is_none() {
        return Err(ListerError::ConfigError(format!(
            "Invalid master URL {:?}: missing host",
            host
        )));
    }
    parse_uri(&format!("http://{}", host))
}

fn parse_uri(host: &str) -> Result<Uri> {
    host.parse::<Uri>()
        .map_err(|e| ListerError::ConfigError(format!("Invalid master URL {:?}: {}", host, e)))
}
