//! Login and logout commands

use crate::auth::{AccessGate, CredentialGate, Session, SessionStore};
use crate::config::Config;
use crate::rates::{RateResolver, SnapshotStore};
use clap::Args;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Operator email
    #[arg(long)]
    pub email: String,

    /// Operator password
    #[arg(long)]
    pub password: String,
}

impl LoginArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut gate = CredentialGate::new(config.auth.operators.clone());

        if let Err(e) = gate.sign_in(&self.email, &self.password) {
            tracing::warn!(email = %self.email, reason = %e, "sign-in rejected");
            anyhow::bail!("{e}");
        }

        let store = SessionStore::new(&config.auth.session_path);
        store.save(&Session {
            operator_email: self.email.clone(),
        })?;
        println!("Signed in as {}", self.email);

        // Opportunistically populate the day's rates; failure just means
        // the operator types them in.
        let snapshots = SnapshotStore::new(&config.rates.cache_path);
        let mut snapshot = snapshots.load();
        let resolver = RateResolver::new(config.rates.clone());
        match resolver.refresh(&mut snapshot).await {
            Ok(()) => {
                snapshots.save(&snapshot)?;
                println!("Rates: gold ₹{}/g, silver ₹{}/g", snapshot.gold_22k, snapshot.silver);
            }
            Err(e) => {
                tracing::warn!(error = %e, "rate fetch failed, previous rates kept");
            }
        }

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct LogoutArgs {}

impl LogoutArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        SessionStore::new(&config.auth.session_path).clear()?;
        println!("Session ended");
        Ok(())
    }
}
