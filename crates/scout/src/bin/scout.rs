// ABOUTME: CLI binary for the outreach-scout profile extractor.
// ABOUTME: Extracts a profile from a saved HTML snapshot and prints the record, response, or prompt.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use outreach_scout::{
    build_prompt, load_registry_file, ExtensionRequest, FilePage, ProfileExtractor,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scout")]
#[command(about = "Extract profile fields from a saved profile page")]
struct Args {
    /// Saved HTML snapshot of the page
    #[arg(long = "html")]
    html: PathBuf,

    /// URL the snapshot was taken from
    #[arg(long = "url")]
    url: String,

    /// Output mode: profile (default), message, prompt
    #[arg(short = 'm', long = "mode", default_value = "profile")]
    mode: String,

    /// JSON selector registry to use instead of the builtin one
    #[arg(long = "selectors")]
    selectors: Option<PathBuf>,

    /// Only treat URLs on this host as profile pages (repeatable)
    #[arg(long = "host")]
    hosts: Vec<String>,

    /// Wait before extracting in message mode, in milliseconds
    #[arg(long = "settle-ms", default_value_t = 0)]
    settle_ms: u64,

    /// Log extraction progress to stderr
    #[arg(long = "debug")]
    debug: bool,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Profile,
    Message,
    Prompt,
}

fn parse_mode(mode: &str) -> Option<Mode> {
    match mode.to_lowercase().as_str() {
        "profile" | "json" => Some(Mode::Profile),
        "message" | "response" => Some(Mode::Message),
        "prompt" => Some(Mode::Prompt),
        _ => None,
    }
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(io::stderr)
        .init();
}

/// Runs the selected mode. Returns the text to print and whether it reports a failure.
async fn run(
    args: &Args,
    mode: Mode,
    extractor: &ProfileExtractor,
) -> anyhow::Result<(String, bool)> {
    match mode {
        Mode::Message => {
            let page = FilePage::new(&args.url, &args.html);
            let response = extractor
                .handle_request(&ExtensionRequest::get_profile_data(), &page)
                .await
                .ok_or_else(|| anyhow::anyhow!("request was not answered"))?;
            Ok((serde_json::to_string_pretty(&response)?, response.is_error()))
        }
        Mode::Profile | Mode::Prompt => {
            let html = fs::read_to_string(&args.html)
                .map_err(|e| anyhow::anyhow!("error reading file {:?}: {}", args.html, e))?;
            let record = extractor.extract_html(&html, &args.url)?;
            let missing = record.missing_fields();
            if !missing.is_empty() {
                tracing::info!(fields = ?missing, "fields fell back to placeholders");
            }
            let out = if mode == Mode::Prompt {
                build_prompt(&record)
            } else {
                serde_json::to_string_pretty(&record)?
            };
            Ok((out, false))
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    let Some(mode) = parse_mode(&args.mode) else {
        eprintln!("error: unknown mode {:?} (expected profile, message or prompt)", args.mode);
        return ExitCode::from(1);
    };

    let mut builder = ProfileExtractor::builder()
        .debug(args.debug)
        .settle_delay(Duration::from_millis(args.settle_ms));

    if !args.hosts.is_empty() {
        builder = builder.hosts(&args.hosts);
    }

    if let Some(path) = &args.selectors {
        match load_registry_file(path) {
            Ok(registry) => {
                for invalid in registry.invalid_strategies() {
                    tracing::warn!("{}", invalid);
                }
                builder = builder.registry(registry);
            }
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::from(1);
            }
        }
    }

    let extractor = builder.build();
    let start = Instant::now();

    let (output_str, mut had_error) = match run(&args, mode, &extractor).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {:#}", e);
            (String::new(), true)
        }
    };

    let elapsed = start.elapsed();

    if !output_str.is_empty() {
        if let Some(output_path) = &args.output {
            if let Err(e) = fs::write(output_path, &output_str) {
                eprintln!("error writing to {:?}: {}", output_path, e);
                had_error = true;
            }
        } else {
            println!("{}", output_str);
        }
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    if had_error {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
