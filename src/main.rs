use clap::Parser;
use sport_schedule::app::{ProviderData, ScheduleRequest, run_provider_data, run_schedule};
use sport_schedule::cli::{Args, is_config_operation};
use sport_schedule::commands::{
    handle_config_update_command, handle_list_config_command, validate_args,
};
use sport_schedule::config::Config;
use sport_schedule::error::AppError;
use sport_schedule::formatter::ColorPolicy;
use sport_schedule::logging::setup_logging;
use sport_schedule::providers::create_provider;
use std::io::{Write, stdout};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    validate_args(&args)?;

    if is_config_operation(&args) {
        if args.list_config {
            return handle_list_config_command().await;
        }
        handle_config_update_command(&args, &Config::get_config_path()).await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    let mut config = Config::load().await?;
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if let Some(provider) = &args.provider {
        config.provider = provider.parse()?;
    }
    let provider = create_provider(&config)?;

    let mut out = stdout().lock();
    match ProviderData::from_args(&args) {
        Some(data) => run_provider_data(provider.as_ref(), &args.league, &data, &mut out).await?,
        None => {
            let request = ScheduleRequest::from_args(&args, ColorPolicy::from_env());
            run_schedule(provider.as_ref(), &request, &mut out).await?;
        }
    }
    out.flush()?;
    Ok(())
}
