mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use install_deps::{
    can_detect, detect_with_options, install, resolve_with_options, InstallError, InstallOptions,
    InstallProgress,
};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR - {}", e);
            eprintln!("{}", e.fix_suggestion());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), InstallError> {
    can_detect()?;
    let options = cli.host_options();
    let signal = detect_with_options(&options).await;

    if let Commands::Detect { json } = cli.selected_command() {
        if json {
            print_json(&signal)?;
        } else {
            println!("{:#?}", signal);
        }
        return Ok(());
    }

    let plan = resolve_with_options(&signal, &options)?;

    match cli.selected_command() {
        Commands::Plan { json: true } => print_json(&plan)?,
        Commands::Plan { json: false } => {
            println!("Platform: {}", plan.platform);
            for (index, command) in plan.commands().iter().enumerate() {
                println!("{:>3}. {}", index + 1, command.raw_command());
            }
        }
        _ => {
            let options = InstallOptions {
                dry_run: cli.dry_run,
            };
            install(&plan, options, report).await?;
        }
    }
    Ok(())
}

fn report(progress: InstallProgress) {
    match progress {
        InstallProgress::Started { platform } => {
            println!("Installing build dependencies for {}", platform)
        }
        InstallProgress::CheckingPrerequisites => println!("{}", progress.description()),
        InstallProgress::RunningStep {
            index,
            total,
            description,
            command,
        } => println!("[{}/{}] {}\n      {}", index, total, description, command),
        InstallProgress::SkippedStep {
            index,
            total,
            command,
        } => println!("[{}/{}] would run: {}", index, total, command),
        InstallProgress::Completed { .. } => println!("{}", progress.description()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), InstallError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| InstallError::Output {
        message: e.to_string(),
        fix: "Run again without --json to get the plain report.".to_string(),
    })?;
    println!("{}", json);
    Ok(())
}
