//! Testlane CLI
//!
//! Entry point for the `testlane` command-line tool.

use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use std::process;
use testlane::config::{ConfigMap, ConfigValue, Invocation};
use testlane::ExcludeRules;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "testlane")]
#[command(about = "Project test lane", version)]
struct Cli {
    /// Search paths for test discovery (default: project root)
    #[arg(short, long)]
    path: Vec<PathBuf>,

    /// Glob patterns to exclude from discovery
    #[arg(long)]
    exclude: Vec<String>,

    /// Hook modules to load before the run
    #[arg(long = "hook-module")]
    hook_module: Vec<String>,

    /// Per-test timeout in seconds
    #[arg(long)]
    timeout: Option<i64>,

    /// Stop the run after this many failures
    #[arg(long)]
    fail_limit: Option<i64>,

    /// Output style
    #[arg(long)]
    output: Option<String>,

    /// Capture test stdout/stderr
    #[arg(long)]
    capture_output: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the effective configuration after merging CLI and file sources
    Config {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = cli_params(&cli);

    match cli.command {
        Commands::Config { json } => {
            run_config(params, json);
        }
    }
}

/// Collect the CLI-sourced configuration: only options actually supplied.
fn cli_params(cli: &Cli) -> ConfigMap {
    let mut params = ConfigMap::new();

    if !cli.path.is_empty() {
        params.insert(
            "path".to_string(),
            ConfigValue::List(cli.path.iter().map(|p| p.display().to_string()).collect()),
        );
    }
    if !cli.exclude.is_empty() {
        params.insert("exclude".to_string(), ConfigValue::List(cli.exclude.clone()));
    }
    if !cli.hook_module.is_empty() {
        params.insert(
            "hook_module".to_string(),
            ConfigValue::List(cli.hook_module.clone()),
        );
    }
    if let Some(timeout) = cli.timeout {
        params.insert("timeout".to_string(), ConfigValue::Int(timeout));
    }
    if let Some(fail_limit) = cli.fail_limit {
        params.insert("fail_limit".to_string(), ConfigValue::Int(fail_limit));
    }
    if let Some(ref output) = cli.output {
        params.insert("output".to_string(), ConfigValue::Str(output.clone()));
    }
    if cli.capture_output {
        params.insert("capture_output".to_string(), ConfigValue::Bool(true));
    }

    params
}

fn run_config(params: ConfigMap, json_output: bool) {
    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("Error determining working directory: {}", e);
            process::exit(1);
        }
    };

    let mut invocation = Invocation::new(params);
    if let Err(e) = invocation.apply_config_defaults(&cwd) {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    // A bad exclude glob is a configuration error, caught before any run.
    let excludes: Vec<String> = invocation
        .value("exclude")
        .cloned()
        .map(ConfigValue::into_list)
        .unwrap_or_default();
    if let Err(e) = ExcludeRules::with_patterns(&excludes) {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    if json_output {
        let output = serde_json::json!({
            "config_file": invocation.config_path().map(|p| p.display().to_string()),
            "effective": invocation.effective(),
        });
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        match invocation.config_path() {
            Some(path) => println!("Configuration source: {}", path.display()),
            None => println!("Configuration source: built-in defaults only"),
        }

        let effective = invocation.effective();
        if effective.is_empty() {
            return;
        }
        println!();
        for (key, value) in &effective {
            println!("  {}: {}", key, render(value));
        }
    }
}

fn render(value: &ConfigValue) -> String {
    match value {
        ConfigValue::Bool(b) => b.to_string(),
        ConfigValue::Int(i) => i.to_string(),
        ConfigValue::Str(s) => s.clone(),
        ConfigValue::List(items) => items.join(", "),
    }
}
