use dynamic_version_url::{cli, logging};

fn main() -> anyhow::Result<()> {
    logging::init_logging_with_config(&logging::LogConfig::from_env())?;
    cli::run_cli()
}
