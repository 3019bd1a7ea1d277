use crate::config::CollectorConfig;
use crate::dom::Sel;
use crate::parsers::listing;
use crate::session::{self, Browser};
use crate::store;
use std::error::Error;
use std::time::Duration;

/// Runs the link collector stage: paginate through the catalog, accumulate
/// detail-page URLs, and write them to the configured CSV.
pub async fn run(cfg: &CollectorConfig) -> Result<Vec<String>, Box<dyn Error>> {
    let Some(browser) = session::connect(&cfg.webdriver_url).await else {
        return Err("could not connect to a WebDriver server".into());
    };

    let links = run_with(browser, cfg).await?;
    store::write_links(&cfg.output_path, &links)?;
    ::log::info!("saved {} links to {}", links.len(), cfg.output_path);
    Ok(links)
}

/// Collects with the given browser session, closing it on every exit path
/// including the fatal one.
pub(crate) async fn run_with<B: Browser>(
    browser: B,
    cfg: &CollectorConfig,
) -> Result<Vec<String>, Box<dyn Error>> {
    let result = collect(&browser, cfg).await;
    browser.close().await;
    result
}

async fn collect<B: Browser>(
    browser: &B,
    cfg: &CollectorConfig,
) -> Result<Vec<String>, Box<dyn Error>> {
    browser
        .goto(&cfg.base_url)
        .await
        .map_err(|e| e as Box<dyn Error>)?;

    // Enter the catalog. The control never appearing is fatal for the run;
    // there is no partial-catalog fallback.
    browser
        .wait_and_click(
            Sel::Css(&cfg.catalog_button_selector),
            Duration::from_secs(cfg.catalog_wait_secs),
        )
        .await
        .map_err(|e| format!("catalog entry control did not become clickable: {e}"))?;
    super::settle(cfg.page_settle_ms).await;

    let mut links = Vec::new();
    loop {
        links.extend(current_page_links(browser, cfg).await);

        // A missing, disabled, or unclickable next-page control all end the
        // loop normally (catalog exhausted).
        if !browser.advance(Sel::Css(&cfg.next_button_selector)).await {
            break;
        }
        super::settle(cfg.page_settle_ms).await;
    }

    Ok(links)
}

/// Detail-page URLs of the currently loaded listing page. Best-effort: any
/// failure yields an empty list for this page and the loop moves on to
/// pagination.
async fn current_page_links<B: Browser>(browser: &B, cfg: &CollectorConfig) -> Vec<String> {
    let source = match browser.source().await {
        Ok(source) => source,
        Err(e) => {
            ::log::warn!("failed to read listing page source: {}", e);
            return Vec::new();
        }
    };
    let base = match browser.current_url().await {
        Ok(url) => url,
        Err(e) => {
            ::log::warn!("failed to read current URL: {}", e);
            return Vec::new();
        }
    };

    let found = listing::extract_links(&source, &base, &cfg.listing_link_selector);
    ::log::info!("found {} thesis links on {}", found.len(), base);
    found
}
