//! Icon Resolver CLI
//!
//! Usage:
//!   icon-resolver [OPTIONS] <NAME>
//!
//! Options:
//!   -c, --config <FILE>     Configuration file (TOML format)
//!       --catalog <FILE>    Catalog manifest (TOML format)
//!   -s, --size <PX>         Requested pixel size
//!   -v, --variant <ID>      Pin a variant
//!       --no-fallback       Do not substitute the first asset
//!   -l, --list              List every available asset
//!   -h, --help              Print help

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use icon_resolver::catalog::format_listing;
use icon_resolver::logging::init_logging;
use icon_resolver::{
    CachedProvider, CatalogProvider, IconRegistry, IconRequest, IconResolver, ResolverConfig,
    StaticProvider,
};

/// Exit status when the request resolved to no asset
const EXIT_UNRESOLVED: i32 = 2;

#[derive(Parser)]
#[command(name = "icon-resolver")]
#[command(about = "Resolve an icon request against an asset catalog")]
struct Cli {
    /// Icon name
    name: String,

    /// Configuration file (defaults to ./icon-resolver.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog manifest (TOML format)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Requested pixel size
    #[arg(short, long)]
    size: Option<u32>,

    /// Pin a variant
    #[arg(short, long)]
    variant: Option<u32>,

    /// Do not substitute the first asset when the size is unavailable
    #[arg(long)]
    no_fallback: bool,

    /// List every asset available for the name
    #[arg(short, long)]
    list: bool,

    /// Simulated catalog latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => ResolverConfig::from_file(path),
        None => ResolverConfig::discover(std::path::Path::new(".")),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(catalog) = cli.catalog.clone() {
        config = config.with_catalog(catalog);
    }
    if let Some(latency_ms) = cli.latency_ms {
        config = config.with_latency_ms(latency_ms);
    }
    if cli.no_fallback {
        config = config.with_fallback(false);
    }

    init_logging(&config.log_filter);

    let Some(catalog_path) = config.catalog.clone() else {
        eprintln!("Error: no catalog given (use --catalog or set `catalog` in the config file)");
        std::process::exit(1);
    };

    let registry = match IconRegistry::from_file(&catalog_path) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error loading catalog '{}': {}", catalog_path.display(), e);
            std::process::exit(1);
        }
    };

    let provider =
        StaticProvider::new(registry).with_latency(Duration::from_millis(config.latency_ms));
    let provider: Arc<dyn CatalogProvider> = if config.cache {
        Arc::new(CachedProvider::new(provider))
    } else {
        Arc::new(provider)
    };

    let mut request = IconRequest::new(&cli.name).with_fallback(config.fallback);
    if let Some(size) = cli.size {
        request = request.with_size(size);
    }
    if let Some(variant) = cli.variant {
        request = request.with_variant(variant);
    }

    let resolver = IconResolver::new(provider);
    resolver.request(request);
    let resolution = resolver.settled().await;

    if cli.list {
        println!("{}", format_listing(&resolution.available_assets));
        return;
    }

    match resolution.reference() {
        Some(reference) => println!("{}", reference),
        None => {
            println!("<unresolved>");
            std::process::exit(EXIT_UNRESOLVED);
        }
    }
}
