// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API server used when neither a master URL nor in-cluster settings are configured
pub const DEFAULT_MASTER_HOST: &str = "http://127.0.0.1:8080/";

/// Environment variables read by `Config::from_env`
pub mod env {
    /// Master URL of the API server (optional)
    pub const MASTER: &str = "KUBE_MASTER";
    /// When "true", use the in-cluster service account settings
    pub const GUESS_KUBE_API_SETTINGS: &str = "GUESS_KUBE_API_SETTINGS";
}

/// Label selector limits
pub mod selector {
    pub const MAX_NAME_LEN: usize = 63;
    pub const MAX_PREFIX_LEN: usize = 253;
}
