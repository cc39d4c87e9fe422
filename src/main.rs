use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use snowclone::report::render_lines;
use snowclone::search::GoogleCustomSearch;
use snowclone::{run_search, RunConfig, SearchCredentials};

#[derive(Parser)]
#[command(version, about = "Find and rank snowclone instances in web search results")]
struct Cli {
    /// Snowclone pattern (* for wildcard)
    #[arg(short, long)]
    pattern: Option<String>,
    /// Google Custom Search API key (default: $SNOWCLONE_API_KEY)
    #[arg(short, long)]
    key: Option<String>,
    /// Google Custom Search engine id (default: $SNOWCLONE_ENGINE_ID)
    #[arg(short, long)]
    engine: Option<String>,
    /// Allow only alphabetic characters in snowclones (no digits)
    #[arg(short, long, default_value_t = false)]
    alphabetic: bool,
    /// Limit number of calls to the search API (at most 10)
    #[arg(short, long, allow_negative_numbers = true)]
    maxcalls: Option<i64>,
    /// Limit search to a particular website (e.g. twitter.com)
    #[arg(short, long)]
    site: Option<String>,
    /// Log the compiled matcher and each result text
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
    /// Log full search requests and responses
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = RunConfig {
        pattern: cli.pattern.unwrap_or_default(),
        alphabetic_only: cli.alphabetic,
        max_pages: cli.maxcalls,
        site: cli.site,
        verbose: cli.verbose,
        debug: cli.debug,
    };
    init_tracing(cfg.verbose, cfg.debug);
    cfg.validate()?;

    let creds = SearchCredentials::from_env().with_overrides(cli.key, cli.engine);
    creds.validate()?;

    let provider = GoogleCustomSearch::new(creds)?;
    let ranked = run_search(&cfg, &provider).await?;
    for line in render_lines(&ranked) {
        println!("{line}");
    }
    Ok(())
}

fn init_tracing(verbose: bool, debug: bool) {
    let level = if debug {
        "trace"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    // dependency crates stay at info; only our own targets get louder
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("info,snowclone={level},snowclone_match={level}"))
    });
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
