//! spacemouse_launch CLI

use clap::{Parser, Subcommand};
use spacemouse_launch::{resolve_spacemouse_launch, spacemouse};
use std::{collections::HashMap, path::PathBuf, process};

#[derive(Parser)]
#[command(name = "spacemouse_launch")]
#[command(about = "Resolve the SpaceMouse publisher launch descriptor", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the descriptor and write the launch record
    Resolve {
        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,

        /// Output file path (default: record.json)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,
    },

    /// List the declared launch arguments
    Args,

    /// Print the spawn command line for the publisher node
    Command {
        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,
    },
}

fn parse_launch_arg(s: &str) -> Result<(String, String), String> {
    match s.split_once(":=") {
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("Invalid launch argument format: {}", s)),
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Resolve { args, output } => resolve_and_write(args, &output),
        Commands::Args => list_args(),
        Commands::Command { args } => print_command(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn resolve_and_write(
    args: Vec<(String, String)>,
    output: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let overrides: HashMap<String, String> = args.into_iter().collect();
    let record = resolve_spacemouse_launch(overrides)?;

    let json = record.to_json()?;
    std::fs::write(output, json)?;

    log::info!("Wrote launch record: {}", output.display());
    log::info!("  {} node(s)", record.node.len());
    Ok(())
}

fn list_args() -> Result<(), Box<dyn std::error::Error>> {
    let description = spacemouse::generate_launch_description()?;
    for arg in description.arguments() {
        let default = arg
            .default
            .as_ref()
            .map(|subs| {
                subs.iter()
                    .map(|s| match s {
                        spacemouse_launch::substitution::Substitution::Text(t) => t.clone(),
                        other => format!("{:?}", other),
                    })
                    .collect::<String>()
            })
            .unwrap_or_else(|| "<required>".to_string());

        println!(
            "{} (default: '{}'): {}",
            arg.name,
            default,
            arg.description.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn print_command(args: Vec<(String, String)>) -> Result<(), Box<dyn std::error::Error>> {
    let overrides: HashMap<String, String> = args.into_iter().collect();
    let record = resolve_spacemouse_launch(overrides)?;

    for node in &record.node {
        println!("{}", node.cmd.join(" "));
    }
    Ok(())
}
