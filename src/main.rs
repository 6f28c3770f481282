use clap::Parser;

use rust_passgen::cli::{self, Args, CliCommand};
use rust_passgen::core::Config;
use rust_passgen::{api, logging, utils};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    let mut warnings = utils::load_dotenv();

    let args = Args::parse();
    let (mut config, config_warnings) = Config::load_with_warnings();
    warnings.extend(config_warnings);

    if let Err(e) = logging::init_logging(&config) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!(
        "Running command {} (json={})",
        args.command.as_ref().map_or("interactive", CliCommand::name),
        args.json
    );

    match args.command {
        Some(CliCommand::Generate(opts)) => cli::handlers::handle_generate(&config, &opts, args.json)?,
        Some(CliCommand::Score { password }) => cli::handlers::handle_score(&password, args.json)?,
        Some(CliCommand::Serve { address, port }) => {
            if let Some(address) = address {
                config.web_address = address;
            }
            if let Some(port) = port {
                config.web_port = port;
            }
            log::info!("🔐 Starting password generator API");
            println!("🚀 API server listening on http://{}:{}", config.web_address, config.web_port);
            api::start_server(config).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                e
            })?;
        }
        Some(CliCommand::Interactive) | None => cli::menu::run_interactive(&config)?,
    }

    Ok(())
}
