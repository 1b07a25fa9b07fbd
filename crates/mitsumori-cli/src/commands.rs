//! Command handlers

use std::path::PathBuf;

use mitsumori_app::config::Config;
use mitsumori_app::estimate_service::{self, EstimateServiceError};
use mitsumori_app::export::export_to_excel;
use mitsumori_app::repository;
use mitsumori_domain::model::{Customer, EstimateRequest, PackageSelection};
use mitsumori_domain::repository::ReferenceDataRepository;
use mitsumori_types::OutputFormat;

use crate::cli::{Cli, Commands};
use crate::output::{output_history, output_prefectures, output_result};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub fn execute(cli: Cli) -> CommandResult {
    let mut config = Config::load()?;
    if let Some(tariff) = cli.tariff {
        config.tariff_path = Some(tariff);
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Estimate {
            from,
            to,
            packages,
            options,
            name,
            tel,
            email,
            old_address,
            new_address,
            no_save,
        } => cmd_estimate(
            &config,
            output_format,
            EstimateArgs {
                from,
                to,
                packages,
                options,
                name,
                tel,
                email,
                old_address,
                new_address,
                no_save,
            },
        ),
        Commands::Prefectures => cmd_prefectures(&config, output_format),
        Commands::History { limit } => cmd_history(&config, output_format, limit),
        Commands::Export { output } => cmd_export(&config, output),
        Commands::Config {
            show,
            set_tariff,
            set_store_dir,
            set_format,
        } => cmd_config(config, show, set_tariff, set_store_dir, set_format),
    }
}

struct EstimateArgs {
    from: String,
    to: String,
    packages: Vec<PackageSelection>,
    options: Vec<String>,
    name: Option<String>,
    tel: Option<String>,
    email: Option<String>,
    old_address: Option<String>,
    new_address: Option<String>,
    no_save: bool,
}

fn cmd_estimate(config: &Config, output_format: OutputFormat, args: EstimateArgs) -> CommandResult {
    let reference = repository::open_reference_repo(config)?;
    let same_region = repository::same_region_table(&reference);

    let request = EstimateRequest {
        old_prefecture_id: args.from.clone(),
        new_prefecture_id: args.to.clone(),
        packages: args.packages,
        option_services: args.options,
    };

    let save = config.save_requests && !args.no_save;
    if !save {
        let result = estimate_service::price_only(&reference, &same_region, &request)?;
        output_result(output_format, &result)?;
        return Ok(());
    }

    let customer = Customer {
        customer_name: args.name.unwrap_or_default(),
        tel: args.tel.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
        old_prefecture_id: args.from,
        new_prefecture_id: args.to,
        old_address: args.old_address.unwrap_or_default(),
        new_address: args.new_address.unwrap_or_default(),
    };

    let recorder = repository::open_recorder(config)?;
    match estimate_service::price_and_record(&reference, &same_region, &recorder, &customer, &request)
    {
        Ok(outcome) => {
            output_result(output_format, &outcome.result)?;
            if let Some(customer_id) = outcome.customer_id {
                eprintln!("Recorded as request #{}", customer_id);
            }
            Ok(())
        }
        Err(EstimateServiceError::Persistence(e)) => {
            // Priced but not saved - still a failure, but say which kind
            eprintln!("Estimate was computed but could not be recorded");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_prefectures(config: &Config, output_format: OutputFormat) -> CommandResult {
    let reference = repository::open_reference_repo(config)?;
    let prefectures = reference.find_all_prefectures()?;
    output_prefectures(output_format, &prefectures)?;
    Ok(())
}

fn cmd_history(config: &Config, output_format: OutputFormat, limit: Option<usize>) -> CommandResult {
    let recorder = repository::open_recorder(config)?;
    let mut records = recorder.find_all();
    if let Some(limit) = limit {
        records.truncate(limit);
    }
    output_history(output_format, &records)?;
    Ok(())
}

fn cmd_export(config: &Config, output: Option<PathBuf>) -> CommandResult {
    let recorder = repository::open_recorder(config)?;
    let records = recorder.find_all();

    let output_path = output.unwrap_or_else(|| PathBuf::from("mitsumori_report.xlsx"));
    export_to_excel(&records, &output_path)?;
    println!("Exported {} records to {}", records.len(), output_path.display());
    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_tariff: Option<PathBuf>,
    set_store_dir: Option<PathBuf>,
    set_format: Option<OutputFormat>,
) -> CommandResult {
    let mut changed = false;

    if let Some(tariff) = set_tariff {
        config.tariff_path = Some(tariff);
        changed = true;
    }
    if let Some(store_dir) = set_store_dir {
        config.store_dir = Some(store_dir);
        changed = true;
    }
    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
