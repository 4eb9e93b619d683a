use std::future::Future;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chromiumoxide::{Browser, BrowserConfig};
use futures::{Stream, StreamExt};
use tracing::{debug, info, warn};

pub const STATUS_PAGE_URL: &str = "https://www.manisasu.gov.tr/su_kesintileri";

pub const DEFAULT_TIMEOUT_SECS: u64 = 40;
pub const DEFAULT_SETTLE_MS: u64 = 2000;
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// How the status page gets turned into HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Fetcher {
    /// Headless Chromium, waits for client-side rendering
    Browser,
    /// Plain HTTP GET, no JavaScript
    Http,
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub timeout: Duration,
    /// Extra wait after the body appears, for scripts that fill in the sections.
    pub settle: Duration,
    pub headless: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            settle: Duration::from_millis(DEFAULT_SETTLE_MS),
            headless: true,
        }
    }
}

pub async fn fetch(fetcher: Fetcher, url: &str, opts: &RenderOptions) -> Result<String> {
    match fetcher {
        Fetcher::Browser => fetch_rendered_html(url, opts).await,
        Fetcher::Http => fetch_static_html(url, opts).await,
    }
}

/// Render `url` in Chromium and return the resulting DOM as HTML.
///
/// The browser is closed on every path out of this function, including timeouts.
pub async fn fetch_rendered_html(url: &str, opts: &RenderOptions) -> Result<String> {
    let config = browser_config(opts)?;
    let (mut browser, handler) = Browser::launch(config)
        .await
        .context("Failed to launch browser")?;

    let handler_task = tokio::spawn(drive_events(handler));

    let start = Instant::now();
    let result = tokio::time::timeout(opts.timeout, load_page(&browser, url, opts.settle)).await;

    if let Err(e) = browser.close().await {
        warn!("Failed to close browser, killing it: {}", e);
        if let Some(Err(e)) = browser.kill().await {
            warn!("Failed to kill browser: {}", e);
        }
    }
    if !wait_bounded(browser.wait(), SHUTDOWN_GRACE).await {
        warn!("Browser did not exit within {}s", SHUTDOWN_GRACE.as_secs());
    }
    handler_task.abort();

    match result {
        Ok(html) => {
            let html = html?;
            info!(
                "Rendered {} ({} bytes) in {:.1}s",
                url,
                html.len(),
                start.elapsed().as_secs_f64()
            );
            Ok(html)
        }
        Err(_) => anyhow::bail!("Timed out after {}s rendering {}", opts.timeout.as_secs(), url),
    }
}

/// Poll the CDP event stream until it ends. Undecodable messages show up as
/// errors and must not stop the loop, or the browser can no longer be closed.
async fn drive_events<S, E>(mut events: S) -> usize
where
    S: Stream<Item = Result<(), E>> + Unpin,
    E: std::fmt::Display,
{
    let mut errors = 0;
    while let Some(event) = events.next().await {
        if let Err(e) = event {
            errors += 1;
            debug!("Browser event error: {}", e);
        }
    }
    errors
}

/// Await process exit for at most `limit`. Returns false when the limit was hit.
async fn wait_bounded<F, T, E>(exit: F, limit: Duration) -> bool
where
    F: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    match tokio::time::timeout(limit, exit).await {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            debug!("Browser process wait failed: {}", e);
            true
        }
        Err(_) => false,
    }
}

fn browser_config(opts: &RenderOptions) -> Result<BrowserConfig> {
    let mut builder = BrowserConfig::builder()
        .no_sandbox()
        .arg("--disable-dev-shm-usage")
        .arg("--disable-gpu")
        .arg("--blink-settings=imagesEnabled=false")
        .request_timeout(opts.timeout);
    if !opts.headless {
        builder = builder.with_head();
    }
    builder.build().map_err(anyhow::Error::msg)
}

async fn load_page(browser: &Browser, url: &str, settle: Duration) -> Result<String> {
    let page = browser.new_page(url).await.context("Failed to open page")?;
    page.wait_for_navigation().await?;
    page.find_element("body")
        .await
        .context("Page has no body element")?;
    tokio::time::sleep(settle).await;
    let html = page.content().await.context("Failed to read page content")?;
    Ok(html)
}

/// Fetch the page without running its scripts. Outage sections that are
/// injected client-side will be missing.
pub async fn fetch_static_html(url: &str, opts: &RenderOptions) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(opts.timeout)
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to create HTTP client")?;

    let start = Instant::now();
    let response = client
        .get(url)
        .send()
        .await
        .context("HTTP request failed")?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("HTTP {} for {}", status, url);
    }

    let html = response
        .text()
        .await
        .context("Failed to read response body")?;
    info!(
        "Fetched {} ({} bytes) in {:.1}s",
        url,
        html.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(html)
}

/// Read a previously saved page instead of hitting the network.
pub fn load_html_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

// ── Tests ──
