use clap::Parser;
use cybertesis_scraper::config::{CollectorConfig, ExtractorConfig};
use cybertesis_scraper::scrape::{details, links};

mod args;
use args::{Args, Command};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    println!("Note: scraping requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    let result = match args.command {
        Command::Links {
            config,
            base_url,
            output,
            webdriver_url,
        } => {
            let mut cfg = match config {
                Some(path) => match CollectorConfig::from_file(&path) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        ::log::error!("failed to load config {}: {}", path.display(), e);
                        std::process::exit(1);
                    }
                },
                None => CollectorConfig::new(),
            };
            if let Some(url) = base_url {
                cfg.base_url = url;
            }
            if let Some(path) = output {
                cfg.output_path = path;
            }
            if let Some(url) = webdriver_url {
                cfg.webdriver_url = url;
            }
            apply_env_webdriver_override(&mut cfg.webdriver_url);

            ::log::info!("collecting thesis links from {}", cfg.base_url);
            links::run(&cfg).await.map(|links| links.len())
        }
        Command::Details {
            config,
            input,
            output,
            webdriver_url,
        } => {
            let mut cfg = match config {
                Some(path) => match ExtractorConfig::from_file(&path) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        ::log::error!("failed to load config {}: {}", path.display(), e);
                        std::process::exit(1);
                    }
                },
                None => ExtractorConfig::new(),
            };
            if let Some(path) = input {
                cfg.input_path = path;
            }
            if let Some(path) = output {
                cfg.output_path = path;
            }
            if let Some(url) = webdriver_url {
                cfg.webdriver_url = url;
            }
            apply_env_webdriver_override(&mut cfg.webdriver_url);

            ::log::info!("extracting thesis details from {}", cfg.input_path);
            details::run(&cfg).await.map(|records| records.len())
        }
    };

    match result {
        Ok(count) => ::log::info!("done, {} rows written", count),
        Err(e) => {
            ::log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// The WEBDRIVER_URL environment variable takes precedence over config and
/// flags when set and non-empty.
fn apply_env_webdriver_override(webdriver_url: &mut String) {
    if let Ok(url) = std::env::var("WEBDRIVER_URL") {
        if !url.is_empty() {
            *webdriver_url = url;
        }
    }
}
