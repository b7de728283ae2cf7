//! CLI interface for sona-desk
//!
//! Provides subcommands for:
//! - `login` / `logout`: operator session management
//! - `rates`: show or refresh market rates
//! - `quote`: compute an estimate and print the shareable text
//! - `status`: show session and cached rates
//! - `config`: show configuration

mod quote;
mod rates;
mod session;

pub use quote::QuoteArgs;
pub use rates::RatesArgs;
pub use session::{LoginArgs, LogoutArgs};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sona-desk")]
#[command(about = "Counter-side price estimator for a jewellery retail point of sale")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign an operator in
    Login(LoginArgs),
    /// End the current session
    Logout(LogoutArgs),
    /// Show or refresh market rates
    Rates(RatesArgs),
    /// Compute an estimate and print the shareable quote
    Quote(QuoteArgs),
    /// Show current state
    Status,
    /// Show configuration
    Config,
}
