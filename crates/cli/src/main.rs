//! Page-cache eviction simulator CLI.
//!
//! This binary provides a single entry point for both simulation modes:
//! 1. **Interactive:** REPL where each line is a page request; commands
//!    switch the policy and show statistics (the default mode).
//! 2. **Trace replay:** Feed a whitespace-separated page-id trace file
//!    through the cache non-interactively and print the final report.

use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::{fs, process};

use pagesim_core::CacheController;
use pagesim_core::config::{Config, Policy, PredictorConfig};
use pagesim_core::controller::RequestOutcome;

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Interactive page-cache eviction simulator",
    long_about = "Simulate a fixed-capacity page cache and compare eviction policies.\n\nPolicies: LRU (default), MRU, LFU, ML_SERVER (remote predictor with LFU fallback).\n\nExamples:\n  pagesim\n  pagesim --policy MRU --capacity 8\n  pagesim run -f traces/workload.txt\n  pagesim --policy ML_SERVER --server http://127.0.0.1:5000/predict-evict"
)]
struct Cli {
    /// Number of page slots in the cache.
    #[arg(long, default_value_t = 4)]
    capacity: usize,

    /// Eviction policy selector (LRU, MRU, LFU, ML_SERVER). Unrecognized
    /// selectors fall back to LRU.
    #[arg(long, default_value = "LRU")]
    policy: String,

    /// Remote predictor endpoint (used with --policy ML_SERVER).
    #[arg(long, default_value = "http://127.0.0.1:5000/predict-evict")]
    server: String,

    /// Predictor request timeout in milliseconds.
    #[arg(long, default_value_t = 3000)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a page-request trace file (whitespace/line-separated ids).
    Run {
        /// Trace file to replay.
        #[arg(short, long)]
        file: String,
    },

    /// Start the interactive request loop (also the default).
    Interactive,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config {
        capacity: cli.capacity,
        policy: Policy::from_selector(&cli.policy),
        predictor: PredictorConfig {
            url: cli.server.clone(),
            timeout_ms: cli.timeout_ms,
        },
    };

    let mut controller = CacheController::new(&config).unwrap_or_else(|e| {
        eprintln!("Error: could not set up predictor client: {e}");
        process::exit(1);
    });

    match cli.command {
        Some(Commands::Run { file }) => cmd_run(&mut controller, &file),
        Some(Commands::Interactive) | None => cmd_interactive(&mut controller),
    }
}

/// Replays a trace file: every whitespace-separated token is one request.
///
/// Prints the log events per request and a final report, then exits.
fn cmd_run(controller: &mut CacheController, path: &str) {
    let trace = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading trace {path}: {e}");
        process::exit(1);
    });

    println!(
        "[*] Trace replay: {path} (capacity {}, policy {})",
        controller.capacity(),
        controller.policy().selector()
    );

    for token in trace.split_whitespace() {
        let outcome = controller.handle_request(token);
        for event in controller.drain_events() {
            println!("  {event}");
        }
        if outcome == RequestOutcome::Rejected {
            println!("  skipped empty request");
        }
    }

    println!();
    print_cache(controller);
    controller.stats().print();
}

/// Runs the interactive request loop until EOF or `:quit`.
fn cmd_interactive(controller: &mut CacheController) {
    println!(
        "pagesim — capacity {}, policy {} (\":help\" for commands)",
        controller.capacity(),
        controller.policy().selector()
    );
    print_cache(controller);

    let stdin = std::io::stdin();
    loop {
        print!("pagesim> ");
        std::io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(command) = input.strip_prefix(':') {
            if !run_command(controller, command) {
                break;
            }
            continue;
        }

        match controller.handle_request(input) {
            RequestOutcome::Rejected => println!("empty page id ignored"),
            RequestOutcome::Dropped => println!("request dropped: another is in flight"),
            _ => {}
        }
        for event in controller.drain_events() {
            println!("{event}");
        }
        print_cache(controller);
        print_stats_line(controller);
    }
}

/// Executes one `:`-prefixed REPL command. Returns `false` to quit.
fn run_command(controller: &mut CacheController, command: &str) -> bool {
    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("policy") => match parts.next() {
            Some(selector) => {
                controller.set_policy(Policy::from_selector(selector));
                for event in controller.drain_events() {
                    println!("{event}");
                }
            }
            None => println!("active policy: {}", controller.policy().selector()),
        },
        Some("stats") => controller.stats().print(),
        Some("help") => {
            println!(":policy [LRU|MRU|LFU|ML_SERVER]  show or switch the eviction policy");
            println!(":stats                           print the statistics report");
            println!(":quit                            exit");
            println!("any other input is a page request");
        }
        Some("quit") | Some("q") => return false,
        _ => println!("unknown command \":{command}\" (\":help\" for commands)"),
    }
    true
}

/// Renders the cache slots, empty slots included.
fn print_cache(controller: &CacheController) {
    let mut line = String::from("cache:");
    for slot in 0..controller.capacity() {
        match controller.contents().get(slot) {
            Some(page) => line.push_str(&format!(" [{page}]")),
            None => line.push_str(" [ ]"),
        }
    }
    println!("{line}");
}

/// Renders the one-line hit/miss summary shown after each request.
fn print_stats_line(controller: &CacheController) {
    let stats = controller.stats();
    println!(
        "hits {} / misses {} — hit rate {:.1}%",
        stats.hits,
        stats.misses,
        stats.hit_rate() * 100.0
    );
}
