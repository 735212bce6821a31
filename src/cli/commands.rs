use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "marketbrief", about = "Scheduled market news briefing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one full pass: fetch, analyze, render, publish, maybe email
    Run {
        /// Never send the email digest, regardless of the send window
        #[arg(long)]
        skip_email: bool,
        /// Override the dashboard output path
        #[arg(long)]
        output: Option<String>,
    },
    /// List the configured instruments with their dashboard categories
    Instruments,
}
