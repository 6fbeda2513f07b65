// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListerError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Invalid client configuration: {0}")]
    ConfigError(String),

    #[error("Invalid label selector: {0}")]
    InvalidSelector(String),
}

pub type Result<T> = std::result::Result<T, ListerError>;
