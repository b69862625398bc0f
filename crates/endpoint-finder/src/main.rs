use clap::Parser;
use endpoint_finder::Cli;
use log::LevelFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_level = match cli.log_level.as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => anyhow::bail!("invalid log level: {}", cli.log_level),
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .filter_module("reqwest", LevelFilter::Warn)
        .filter_module("hyper_util", LevelFilter::Warn)
        .format_timestamp(None)
        .init();

    cli.run().await
}
