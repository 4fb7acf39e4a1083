use crate::builder::build_router;
use crate::hot_reload::{watch_manifest, LiveRoutes};
use crate::manifest::load_manifest;
use crate::router::Router;
use crate::runtime_config::VersionConfig;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use http::Method;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Command-line interface for versioned route tables
#[derive(Parser)]
#[command(name = "dynamic-version-url")]
#[command(about = "Expand and validate versioned route tables", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Inputs shared by every command
#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// Route manifest (YAML or JSON)
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// Config file with a `version:` section
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Version segment prefix, overriding config and environment
    #[arg(short, long)]
    pub prefix: Option<String>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Build and validate the route table
    Check {
        #[command(flatten)]
        args: ManifestArgs,
    },
    /// Print every registered route as `METHOD pattern -> handler`
    Routes {
        #[command(flatten)]
        args: ManifestArgs,
    },
    /// Match one request against the route table
    Resolve {
        #[command(flatten)]
        args: ManifestArgs,

        /// HTTP method of the request
        #[arg(long, default_value = "GET")]
        method: String,

        /// Request path, e.g. /api/v3/a
        #[arg(long)]
        path: String,
    },
    /// Keep rebuilding the table whenever the manifest changes
    Watch {
        #[command(flatten)]
        args: ManifestArgs,
    },
}

/// Resolve the effective versioning settings: config file (or defaults),
/// then environment, then `--prefix`.
///
/// # Errors
///
/// Fails if the config file cannot be read or parsed.
pub fn load_config(args: &ManifestArgs) -> anyhow::Result<VersionConfig> {
    let config = match &args.config {
        Some(path) => VersionConfig::load(path)?,
        None => VersionConfig::from_env(),
    };
    Ok(config.with_prefix(args.prefix.clone()))
}

/// Load the manifest and build its validated route table.
///
/// Build failures are returned without added context so their message is
/// the diagnostic itself.
///
/// # Errors
///
/// Config, manifest, or build failure.
pub fn build(args: &ManifestArgs) -> anyhow::Result<Router> {
    let config = load_config(args)?;
    let manifest = load_manifest(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?;
    Ok(build_router(&manifest, &config)?)
}

/// Execute a parsed command, writing command output to `out`.
///
/// # Errors
///
/// Any failure of the command, including a rejected route table.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    match cli.command {
        Commands::Check { args } => {
            let router = build(&args)?;
            writeln!(
                out,
                "OK: {} routes, {} patterns",
                router.len(),
                router.all_patterns().len()
            )?;
            Ok(())
        }
        Commands::Routes { args } => {
            build(&args)?.dump_routes(out)?;
            Ok(())
        }
        Commands::Resolve { args, method, path } => {
            let router = build(&args)?;
            let method = Method::from_bytes(method.to_uppercase().as_bytes())
                .with_context(|| format!("Invalid HTTP method '{method}'"))?;
            match router.route(method.clone(), &path) {
                Some(matched) => {
                    writeln!(
                        out,
                        "{} {} -> {} (pattern {})",
                        method,
                        path,
                        matched.handler_name(),
                        matched.pattern
                    )?;
                    for (name, value) in &matched.path_params {
                        writeln!(out, "  {name} = {value}")?;
                    }
                }
                None => writeln!(out, "{method} {path} -> no route")?,
            }
            Ok(())
        }
        Commands::Watch { args } => {
            let config = load_config(&args)?;
            let live = Arc::new(LiveRoutes::load(&args.manifest, config)?);
            writeln!(out, "Watching {} ({} routes)", args.manifest.display(), live.current().len())?;
            out.flush()?;
            let _watcher = watch_manifest(&args.manifest, Arc::clone(&live))?;
            info!(manifest = %args.manifest.display(), "Watching manifest for changes");
            loop {
                std::thread::park();
            }
        }
    }
}

/// Parse process arguments and run the selected command against stdout.
///
/// # Errors
///
/// See [`run`].
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}
