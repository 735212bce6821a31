use clap::Parser;
use marketbrief::cli::commands::{Cli, Commands};
use marketbrief::config::Config;
use marketbrief::domain::values::market_category::MarketCategory;
use marketbrief::MarketBrief;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marketbrief=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading configuration: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Run { skip_email, output } => {
            if let Some(path) = output {
                config.dashboard_path = path.into();
            }
            let app = MarketBrief::new(&config);
            match app.run_once(chrono::Utc::now(), !skip_email).await {
                Ok(report) => {
                    println!("{}", serde_json::to_string_pretty(&report).unwrap());
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Instruments => {
            for instrument in &config.instruments {
                println!("{instrument}: {}", MarketCategory::for_instrument(instrument));
            }
        }
    }
}
