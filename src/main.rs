// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kube_lister::config::Config;
use kube_lister::kubernetes::create_client;
use kube_lister::lister::ResourceLister;
use kube_lister::output::{render, OutputFormat};

#[derive(Parser)]
#[command(name = "kube-lister")]
#[command(author, version, long_about = None)]
#[command(about = "List cluster resources filtered by namespace and label selector")]
struct Cli {
    /// Resource kind to list
    #[arg(value_enum)]
    kind: ResourceKind,

    /// Namespace to list from, all namespaces when empty
    #[arg(short, long, default_value = "")]
    namespace: String,

    /// Label selector, e.g. "app=web,tier in (db,cache)"
    #[arg(short = 'l', long, default_value = "")]
    selector: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    output: OutputFormat,

    /// API server URL (overrides KUBE_MASTER)
    #[arg(long)]
    master: Option<String>,

    /// Use in-cluster service account settings (overrides GUESS_KUBE_API_SETTINGS)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    guess_kube_api_settings: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ResourceKind {
    #[value(alias = "po")]
    Pods,
    #[value(alias = "svc")]
    Services,
    #[value(alias = "rc")]
    Replicationcontrollers,
    #[value(alias = "ev")]
    Events,
    #[value(alias = "ep")]
    Endpoints,
    #[value(alias = "no")]
    Nodes,
    #[value(alias = "ns")]
    Namespaces,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the listing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config =
        Config::from_env()?.with_overrides(cli.master.clone(), cli.guess_kube_api_settings);

    let client = create_client(&config).await?;
    let lister = ResourceLister::new(client);
    info!("Listing {:?}", cli.kind);

    let cluster_scoped = matches!(cli.kind, ResourceKind::Nodes | ResourceKind::Namespaces);
    if cluster_scoped && !cli.namespace.is_empty() {
        warn!("{:?} are cluster scoped, ignoring namespace {:?}", cli.kind, cli.namespace);
    }

    let (ns, sel, format) = (cli.namespace.as_str(), cli.selector.as_str(), cli.output);
    let rendered = match cli.kind {
        ResourceKind::Pods => render(&lister.pods(ns, sel).await?, format)?,
        ResourceKind::Services => render(&lister.services(ns, sel).await?, format)?,
        ResourceKind::Replicationcontrollers => {
            render(&lister.replication_controllers(ns, sel).await?, format)?
        }
        ResourceKind::Events => render(&lister.events(ns, sel).await?, format)?,
        ResourceKind::Endpoints => render(&lister.endpoints(ns, sel).await?, format)?,
        ResourceKind::Nodes => render(&lister.nodes(sel).await?, format)?,
        ResourceKind::Namespaces => render(&lister.namespaces(sel).await?, format)?,
    };

    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}
