// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Filtered list queries against core cluster resources.

use crate::error::Result;
use crate::selector::LabelSelector;
use k8s_openapi::api::core::v1::{
    Endpoints, Event, Namespace, Node, Pod, ReplicationController, Service,
};
use k8s_openapi::NamespaceResourceScope;
use kube::{api::ListParams, Api, Client, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{debug, instrument};

/// Issues label-filtered list requests. Holds nothing but the client handle.
#[derive(Clone)]
pub struct ResourceLister {
    client: Client,
}

impl ResourceLister {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// List pods in `namespace` (all namespaces when empty) matching `selector`
    #[instrument(skip(self))]
    pub async fn pods(&self, namespace: &str, selector: &str) -> Result<Vec<Pod>> {
        debug!("fetching pods, namespace: {:?}, selector: {:?}", namespace, selector);
        self.list(self.namespaced(namespace), selector).await
    }

    #[instrument(skip(self))]
    pub async fn services(&self, namespace: &str, selector: &str) -> Result<Vec<Service>> {
        debug!("fetching services, namespace: {:?}, selector: {:?}", namespace, selector);
        self.list(self.namespaced(namespace), selector).await
    }

    #[instrument(skip(self))]
    pub async fn replication_controllers(
        &self,
        namespace: &str,
        selector: &str,
    ) -> Result<Vec<ReplicationController>> {
        debug!(
            "fetching replication controllers, namespace: {:?}, selector: {:?}",
            namespace, selector
        );
        self.list(self.namespaced(namespace), selector).await
    }

    #[instrument(skip(self))]
    pub async fn events(&self, namespace: &str, selector: &str) -> Result<Vec<Event>> {
        debug!("fetching events, namespace: {:?}, selector: {:?}", namespace, selector);
        self.list(self.namespaced(namespace), selector).await
    }

    #[instrument(skip(self))]
    pub async fn endpoints(&self, namespace: &str, selector: &str) -> Result<Vec<Endpoints>> {
        debug!("fetching endpoints, namespace: {:?}, selector: {:?}", namespace, selector);
        self.list(self.namespaced(namespace), selector).await
    }

    #[instrument(skip(self))]
    pub async fn nodes(&self, selector: &str) -> Result<Vec<Node>> {
        debug!("fetching nodes, selector: {:?}", selector);
        self.list(Api::all(self.client.clone()), selector).await
    }

    #[instrument(skip(self))]
    pub async fn namespaces(&self, selector: &str) -> Result<Vec<Namespace>> {
        debug!("fetching namespaces, selector: {:?}", selector);
        self.list(Api::all(self.client.clone()), selector).await
    }

    /// An empty namespace spans the whole cluster
    fn namespaced<K>(&self, namespace: &str) -> Api<K>
    where
        K: Resource<Scope = NamespaceResourceScope>,
        <K as Resource>::DynamicType: Default,
    {
        if namespace.is_empty() {
            Api::all(self.client.clone())
        } else {
            Api::namespaced(self.client.clone(), namespace)
        }
    }

    async fn list<K>(&self, api: Api<K>, selector: &str) -> Result<Vec<K>>
    where
        K: Clone + DeserializeOwned + Debug,
    {
        let selector = LabelSelector::parse(selector)?;

        let mut params = ListParams::default();
        if !selector.is_empty() {
            params = params.labels(&selector.to_string());
        }

        let list = api.list(&params).await?;
        debug!("fetched {} items", list.items.len());
        Ok(list.items)
    }
}
