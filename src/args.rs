use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cybertesis-scraper")]
#[command(about = "Scrapes thesis metadata from the UNMSM Cybertesis repository")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collect detail-page links by paginating through the catalog
    Links {
        /// JSON config file overriding the built-in defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Community page to start from
        #[arg(long)]
        base_url: Option<String>,

        /// Where to write the link CSV
        #[arg(short, long)]
        output: Option<String>,

        /// WebDriver server URL
        #[arg(long)]
        webdriver_url: Option<String>,
    },
    /// Visit each collected link and extract the metadata fields
    Details {
        /// JSON config file overriding the built-in defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Link CSV produced by the `links` stage
        #[arg(short, long)]
        input: Option<String>,

        /// Where to write the record CSV
        #[arg(short, long)]
        output: Option<String>,

        /// WebDriver server URL
        #[arg(long)]
        webdriver_url: Option<String>,
    },
}
