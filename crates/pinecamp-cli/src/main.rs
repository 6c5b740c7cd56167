mod inquiry;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::inquiry::parse_field;

#[derive(Debug, Parser)]
#[command(name = "pinecamp")]
#[command(about = "Pinecamp booking inquiry command line interface")]
struct Cli {
    /// Directory holding the inquiry log (overrides `PINECAMP_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a booking inquiry and store it if it passes
    Submit {
        /// Visitor name
        #[arg(long, default_value = "")]
        name: String,
        /// Mobile number, with or without hyphens
        #[arg(long, default_value = "")]
        phone: String,
        /// Optional email address
        #[arg(long, default_value = "")]
        email: String,
        /// Consent to collection of personal information
        #[arg(long)]
        privacy: bool,
        /// Additional form field, e.g. `--field checkin=2026-11-01`
        #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// List stored inquiries, oldest first
    List {
        /// Print the stored records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Format a phone number the way the form does while typing
    FormatPhone {
        /// Raw input
        raw: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let mut config = pinecamp_core::load_app_config()?;
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(env = %config.env, data_dir = %config.data_dir.display(), "configuration loaded");

    match cli.command {
        Commands::Submit {
            name,
            phone,
            email,
            privacy,
            fields,
        } => {
            let accepted = inquiry::run_submit(&config, name, phone, email, privacy, fields);
            Ok(if accepted {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::List { json } => {
            inquiry::run_list(&config, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::FormatPhone { raw } => {
            println!("{}", pinecamp_core::format_phone_input(&raw));
            Ok(ExitCode::SUCCESS)
        }
    }
}
