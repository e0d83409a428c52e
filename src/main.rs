use clap::Parser;

mod app;
mod cli;
mod config;
mod gateways;
mod interactive;
mod terminal;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli::Args { config, command } = cli::Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(config.as_ref())?;

    // Requests are issued one after another, a single thread suffices.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(cli::run(command, cfg))
}
