use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the link collector stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Community page of the thesis repository to start from
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// CSS selector for the control that enters the paginated catalog
    #[serde(default = "default_catalog_button_selector")]
    pub catalog_button_selector: String,

    /// CSS selector for the detail-page anchors on a listing page
    #[serde(default = "default_listing_link_selector")]
    pub listing_link_selector: String,

    /// CSS selector for the next-page control of the listing pagination
    #[serde(default = "default_next_button_selector")]
    pub next_button_selector: String,

    /// Bounded wait for the catalog entry control to appear, in seconds
    #[serde(default = "default_catalog_wait_secs")]
    pub catalog_wait_secs: u64,

    /// Fixed delay after a page transition, sized to the site's client-side
    /// rendering latency, in milliseconds
    #[serde(default = "default_page_settle_ms")]
    pub page_settle_ms: u64,

    /// Where to write the collected links
    #[serde(default = "default_links_path")]
    pub output_path: String,
}

/// Configuration for the detail extractor stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Link CSV produced by the collector
    #[serde(default = "default_links_path")]
    pub input_path: String,

    /// Where to write the extracted records
    #[serde(default = "default_details_path")]
    pub output_path: String,

    /// Fixed delay after loading a detail page, in milliseconds
    #[serde(default = "default_detail_settle_ms")]
    pub settle_ms: u64,
}

fn default_base_url() -> String {
    "https://cybertesis.unmsm.edu.pe/community/c7f57711-06e9-4821-8ccb-639c2874b28b".to_string()
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_catalog_button_selector() -> String {
    "#root > div > main > div > div.MuiStack-root.css-1ov46kg > div:nth-child(3) > div > \
     div:nth-child(3) > div > div > a"
        .to_string()
}

fn default_listing_link_selector() -> String {
    "a.MuiTypography-root.MuiTypography-h5.MuiLink-root.MuiLink-underlineNone.css-mr5w6s"
        .to_string()
}

fn default_next_button_selector() -> String {
    "#root > div > main > div > div:nth-child(3) > div:nth-child(2) > \
     div.MuiPaper-root.MuiPaper-elevation.MuiPaper-rounded.MuiPaper-elevation1.MuiCard-root.css-10ltzvv > \
     div.MuiCardActions-root.MuiCardActions-spacing.css-1f01y2s > div > div > \
     div.MuiTablePagination-actions > button:nth-child(2)"
        .to_string()
}

fn default_catalog_wait_secs() -> u64 {
    10
}

fn default_page_settle_ms() -> u64 {
    3000
}

fn default_detail_settle_ms() -> u64 {
    250
}

fn default_links_path() -> String {
    "theses_links.csv".to_string()
}

fn default_details_path() -> String {
    "theses_details.csv".to_string()
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            base_url: default_base_url(),
            webdriver_url: default_webdriver_url(),
            catalog_button_selector: default_catalog_button_selector(),
            listing_link_selector: default_listing_link_selector(),
            next_button_selector: default_next_button_selector(),
            catalog_wait_secs: default_catalog_wait_secs(),
            page_settle_ms: default_page_settle_ms(),
            output_path: default_links_path(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            input_path: default_links_path(),
            output_path: default_details_path(),
            settle_ms: default_detail_settle_ms(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}
