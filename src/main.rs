use clap::Parser;
use sona_desk::auth::SessionStore;
use sona_desk::cli::{Cli, Commands};
use sona_desk::config::Config;
use sona_desk::rates::SnapshotStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    sona_desk::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Login(args) => args.execute(&config).await?,
        Commands::Logout(args) => args.execute(&config)?,
        Commands::Rates(args) => args.execute(&config).await?,
        Commands::Quote(args) => args.execute(&config).await?,
        Commands::Status => {
            println!("sona-desk status");
            match SessionStore::new(&config.auth.session_path).load() {
                Some(session) => println!("  Operator: {}", session.operator_email),
                None => println!("  Operator: not signed in"),
            }
            let snapshot = SnapshotStore::new(&config.rates.cache_path).load();
            if snapshot.is_empty() {
                println!("  Rates: none cached");
            } else {
                println!("  Rates: gold ₹{}/g, silver ₹{}/g", snapshot.gold_22k, snapshot.silver);
            }
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Shop: {}", config.shop.name);
            println!("  Rate source: {}", config.rates.source_url);
            println!("  Rate marker: {}", config.rates.marker);
            println!("  Default GST: {}%", config.pricing.default_gst_percent);
            println!("  Operators: {}", config.auth.operators.len());
        }
    }

    Ok(())
}
