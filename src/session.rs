use crate::dom::{DomError, DomPage, LiveDom, Sel};
use fantoccini::{Client, ClientBuilder};
use std::time::Duration;
use url::Url;

/// Navigation operations of a browser session, as the two pipelines use
/// them. The pipelines are generic over this trait so their skip-and-continue
/// and abort paths can be exercised without a WebDriver server.
#[allow(async_fn_in_trait)]
pub trait Browser {
    /// Read-only view of the currently loaded page.
    type Page<'a>: DomPage
    where
        Self: 'a;

    /// Load a URL.
    async fn goto(&self, url: &str) -> Result<(), DomError>;

    /// Bounded wait for an element to appear, then click it.
    async fn wait_and_click(&self, sel: Sel<'_>, timeout: Duration) -> Result<(), DomError>;

    /// Source of the currently loaded page.
    async fn source(&self) -> Result<String, DomError>;

    /// URL of the currently loaded page.
    async fn current_url(&self) -> Result<Url, DomError>;

    /// Click a pagination control if it is present and enabled. Returns
    /// whether the session advanced; a missing, disabled, or unclickable
    /// control is a normal end of pagination, not an error.
    async fn advance(&self, sel: Sel<'_>) -> bool;

    fn page(&self) -> Self::Page<'_>;

    /// Close the session. Best effort: a close failure is logged, never
    /// propagated.
    async fn close(self);
}

/// A live WebDriver session.
pub struct WebSession {
    client: Client,
}

impl WebSession {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Browser for WebSession {
    type Page<'a>
        = LiveDom<'a>
    where
        Self: 'a;

    async fn goto(&self, url: &str) -> Result<(), DomError> {
        self.client.goto(url).await?;
        Ok(())
    }

    async fn wait_and_click(&self, sel: Sel<'_>, timeout: Duration) -> Result<(), DomError> {
        let element = self
            .client
            .wait()
            .at_most(timeout)
            .for_element(sel.locator())
            .await?;
        element.click().await?;
        Ok(())
    }

    async fn source(&self) -> Result<String, DomError> {
        Ok(self.client.source().await?)
    }

    async fn current_url(&self) -> Result<Url, DomError> {
        Ok(self.client.current_url().await?)
    }

    async fn advance(&self, sel: Sel<'_>) -> bool {
        match self.client.find(sel.locator()).await {
            Ok(next) => {
                if !next.is_enabled().await.unwrap_or(false) {
                    ::log::info!("next-page control disabled, catalog exhausted");
                    return false;
                }
                if let Err(e) = next.click().await {
                    ::log::warn!("could not advance to the next page: {}", e);
                    return false;
                }
                true
            }
            Err(e) => {
                ::log::info!("no more listing pages: {}", e);
                false
            }
        }
    }

    fn page(&self) -> LiveDom<'_> {
        LiveDom::new(&self.client)
    }

    async fn close(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("failed to close browser session: {}", e);
        }
    }
}

/// Connects to a WebDriver instance, trying common fallback URLs when the
/// configured one is unreachable.
pub async fn connect(webdriver_url: &str) -> Option<WebSession> {
    match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("connected to WebDriver at {}", webdriver_url);
            return Some(WebSession::new(client));
        }
        Err(e) => {
            ::log::error!("failed to connect to WebDriver at {}: {}", webdriver_url, e);
        }
    }

    let fallback_urls = [
        "http://localhost:9515", // ChromeDriver default
        "http://localhost:4444", // Selenium / geckodriver default
        "http://127.0.0.1:4444", // Try with IP instead of localhost
    ];

    for url in fallback_urls.iter() {
        if *url == webdriver_url {
            continue; // Skip if it's the same as the one we already tried
        }

        ::log::info!("trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("connected to fallback WebDriver at {}", url);
            return Some(WebSession::new(client));
        }
    }

    ::log::error!("failed to connect to any WebDriver server");
    ::log::error!(
        "make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    None
}
