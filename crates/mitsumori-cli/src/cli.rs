//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mitsumori_domain::model::PackageSelection;
use mitsumori_types::OutputFormat;

#[derive(Parser)]
#[command(name = "mitsumori")]
#[command(author = "oikawa")]
#[command(version)]
#[command(about = "Moving-cost estimation for a relocation service")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Tariff master file override
    #[arg(long, global = true)]
    pub tariff: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a moving-cost estimate
    Estimate {
        /// 引越し元の都道府県コード (e.g., "13")
        #[arg(long)]
        from: String,

        /// 引越し先の都道府県コード (e.g., "14")
        #[arg(long)]
        to: String,

        /// Package selection as ID=QTY (e.g., "BOX=10"), repeatable
        #[arg(long = "package", short = 'p', value_parser = parse_package_selection)]
        packages: Vec<PackageSelection>,

        /// Optional service id, repeatable
        #[arg(long = "option", short = 'o')]
        options: Vec<String>,

        /// Customer name to record with the request
        #[arg(long)]
        name: Option<String>,

        /// Customer phone number
        #[arg(long)]
        tel: Option<String>,

        /// Customer email address
        #[arg(long)]
        email: Option<String>,

        /// Current address
        #[arg(long)]
        old_address: Option<String>,

        /// Destination address
        #[arg(long)]
        new_address: Option<String>,

        /// Compute only, do not record the request
        #[arg(long)]
        no_save: bool,
    },

    /// List registered prefectures
    Prefectures,

    /// Show recorded estimate requests
    History {
        /// Show at most this many records
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Export recorded requests to Excel
    Export {
        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the tariff master file path
        #[arg(long)]
        set_tariff: Option<PathBuf>,

        /// Set the estimate store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set the default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,
    },
}

/// Parse "ID=QTY" into a package selection
fn parse_package_selection(value: &str) -> Result<PackageSelection, String> {
    let (package_id, quantity_raw) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got '{}'", value))?;

    if package_id.is_empty() {
        return Err(format!("empty package id in '{}'", value));
    }

    let quantity: u32 = quantity_raw
        .parse()
        .map_err(|_| format!("invalid quantity '{}' in '{}'", quantity_raw, value))?;

    Ok(PackageSelection {
        package_id: package_id.to_string(),
        quantity,
    })
}
