use clap::Parser;
use rolodex_app::cli::{CliArgs, OutputTarget, RenderOptions, render};
use rolodex_app::persist::{read_record, save_to_file, write_stdout};
use rolodex_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let input = read_record(&args.record).await?;
    let options = RenderOptions::from_args(&args, &config.output);
    let document = render(&input, &options)?;

    match args.output_target() {
        OutputTarget::Stdout => write_stdout(&document).await?,
        OutputTarget::File(path) => save_to_file(&path, &document).await?,
    }

    Ok(())
}
