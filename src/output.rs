// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of listed resources for the command line.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    /// One object name per line
    Name,
}

/// Render a list of resources in the requested format
pub fn render<K>(items: &[K], format: OutputFormat) -> Result<String>
where
    K: Serialize + kube::Resource,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(items)?),
        OutputFormat::Name => Ok(items
            .iter()
            .map(|i| match i.meta().namespace.as_deref() {
                Some(ns) => format!("{}/{}", ns, i.meta().name.clone().unwrap_or_default()),
                None => i.meta().name.clone().unwrap_or_default(),
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
