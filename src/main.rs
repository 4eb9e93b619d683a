mod output;
mod parser;
mod renderer;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use output::ResultSet;
use renderer::{Fetcher, RenderOptions};

#[derive(Parser)]
#[command(name = "manisa_outages", about = "Manisa water outage scraper")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Status page to read
    #[arg(long, global = true, default_value = renderer::STATUS_PAGE_URL)]
    url: String,

    /// Where the JSON result set is written
    #[arg(short, long, global = true, default_value = output::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// How to acquire the page
    #[arg(long, global = true, value_enum, default_value_t = Fetcher::Browser)]
    fetcher: Fetcher,

    /// Page load timeout in seconds
    #[arg(long, global = true, default_value_t = renderer::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Wait after the page body appears, in milliseconds
    #[arg(long, global = true, default_value_t = renderer::DEFAULT_SETTLE_MS)]
    settle_ms: u64,

    /// Show the browser window instead of running headless
    #[arg(long, global = true)]
    headful: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the status page, extract outages and write the result set (default)
    Run,
    /// Extract outages from a saved HTML file
    Parse {
        /// Path to the saved page
        file: PathBuf,
    },
    /// Save the acquired HTML without extracting anything
    Fetch {
        /// Destination for the page source
        #[arg(default_value = "page.html")]
        out: PathBuf,
    },
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            timeout: Duration::from_secs(self.timeout),
            settle: Duration::from_millis(self.settle_ms),
            headless: !self.headful,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Commands::Run) {
        Commands::Run => {
            let results = results_from(acquire(&cli).await);
            finish(&cli, &results)?;
        }
        Commands::Parse { file } => {
            let results = results_from(renderer::load_html_file(file));
            finish(&cli, &results)?;
        }
        Commands::Fetch { out } => {
            let html = acquire(&cli).await?;
            std::fs::write(out, &html)?;
            println!("Saved {} bytes to {}", html.len(), out.display());
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

/// One best-effort attempt at getting the page source, with a spinner while waiting.
async fn acquire(cli: &Cli) -> anyhow::Result<String> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.set_message(format!("Loading {}", cli.url));
    pb.enable_steady_tick(Duration::from_millis(120));

    let result = renderer::fetch(cli.fetcher, &cli.url, &cli.render_options()).await;

    pb.finish_and_clear();
    result
}

/// Any acquisition failure becomes an empty result set plus a logged error.
fn results_from(acquired: anyhow::Result<String>) -> ResultSet {
    match acquired {
        Ok(html) => parser::process_page(&html),
        Err(e) => {
            error!("Error: {:#}", e);
            ResultSet::default()
        }
    }
}

fn finish(cli: &Cli, results: &ResultSet) -> anyhow::Result<()> {
    for r in results.data() {
        debug!("{} / {:?}: {} → {}", r.district, r.neighborhoods, r.start, r.end);
    }
    output::write_json(&cli.output, results)?;
    println!("Process completed. {} records parsed.", results.count());
    Ok(())
}

// ── Tests ──
