use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use sufidx::index::suffix_array::{IndexConfig, SuffixIndex};
use sufidx::output::{self, LcsReport, SearchReport};
use sufidx::utils::{AppConfig, ColorMode};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "sufidx")]
#[command(about = "Prefix search and longest common substrings over suffix indexes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Ignore ASCII case when ordering and matching
    #[arg(short, long, global = true)]
    ignore_case: bool,

    /// When to color output (overrides the config file)
    #[arg(long, global = true, value_enum)]
    color: Option<ColorMode>,

    /// Print results as JSON (search, lcs and stats only)
    #[arg(long, global = true)]
    json: bool,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every suffix of TEXT that starts with PATTERN
    Search {
        /// Text to index
        text: String,
        /// Prefix to look for
        pattern: String,
    },
    /// Find the longest common substring of two texts
    Lcs {
        /// First text
        first: String,
        /// Second text
        second: String,
    },
    /// Show index statistics for a text
    Stats {
        /// Text to index
        text: String,
    },
    /// Read texts and patterns interactively from stdin
    Prompt,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let mut config = AppConfig::load()?;
    if cli.ignore_case {
        config.case_insensitive = true;
    }
    if let Some(color) = cli.color {
        config.color = color;
    }
    debug!(?config, "loaded configuration");

    let index_config = config.index_config();

    match cli.command {
        Some(Commands::Search { text, pattern }) => {
            run_search(&text, &pattern, index_config, config.color, cli.json)?;
        }
        Some(Commands::Lcs { first, second }) => {
            run_lcs(&first, &second, index_config, config.color, cli.json)?;
        }
        Some(Commands::Stats { text }) => {
            let stats = SuffixIndex::with_config(text, index_config).stats();
            let mut out = io::stdout().lock();
            if cli.json {
                output::print_json(&mut out, &stats)?;
            } else {
                output::print_stats(&mut out, &stats)?;
            }
        }
        Some(Commands::Prompt) | None => {
            if cli.json {
                anyhow::bail!("--json is not supported in interactive mode");
            }
            run_prompt(index_config, config.color)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;
    Ok(())
}

fn run_search(
    text: &str,
    pattern: &str,
    config: IndexConfig,
    color: ColorMode,
    json: bool,
) -> Result<()> {
    let index = SuffixIndex::with_config(text, config);
    let matches = index.search(pattern);

    if json {
        let report = SearchReport::collect(pattern, matches);
        output::print_json(&mut io::stdout().lock(), &report)?;
    } else {
        output::print_matches(&mut output::stdout(color), matches, pattern.len())?;
    }

    Ok(())
}

fn run_lcs(
    first: &str,
    second: &str,
    config: IndexConfig,
    color: ColorMode,
    json: bool,
) -> Result<()> {
    let first = SuffixIndex::with_config(first, config.clone());
    let second = SuffixIndex::with_config(second, config);
    let common = &first & &second;

    if json {
        output::print_json(&mut io::stdout().lock(), &LcsReport::new(common))?;
    } else {
        output::print_lcs(&mut output::stdout(color), common)?;
    }

    Ok(())
}

/// Interactive session: one prefix search, then one LCS query
fn run_prompt(config: IndexConfig, color: ColorMode) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut ask = |prompt: &str| -> Result<String> {
        println!("{}", prompt);
        io::stdout().flush()?;
        let line = lines.next().context("Unexpected end of input")?;
        line.context("Failed to read from stdin")
    };

    println!();
    let text = ask("Enter a text:")?;
    let index = SuffixIndex::with_config(text, config.clone());
    let pattern = ask("Enter a prefix to search for:")?;
    output::print_matches(&mut output::stdout(color), index.search(&pattern), pattern.len())?;

    println!();
    let first = SuffixIndex::with_config(ask("Enter a text:")?, config.clone());
    let second = SuffixIndex::with_config(ask("Enter another text:")?, config);
    output::print_lcs(&mut output::stdout(color), &first & &second)?;

    Ok(())
}
