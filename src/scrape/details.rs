use crate::config::ExtractorConfig;
use crate::dom::{DomPage, Sel};
use crate::extract;
use crate::records::ThesisRecord;
use crate::session::{self, Browser};
use crate::store;
use std::error::Error;

// Field selectors for the detail pages. The metadata blocks carry no stable
// ids, so most lookups go label-first: find the h6 with the visible label,
// then take its sibling.
const TITLE: Sel<'static> = Sel::Css("span.MuiCardHeader-title");
const AUTHORS: Sel<'static> = Sel::XPath("//h6[text()='Autor(es)']/following-sibling::div/a");
const PUBLICATION_DATE: Sel<'static> =
    Sel::XPath("//h6[text()='Fecha de publicación']/following-sibling::div");
const ADVISOR: Sel<'static> = Sel::XPath("//h6[text()='Asesor(es)']/following-sibling::div");
const PUBLISHER: Sel<'static> = Sel::XPath("//h6[text()='Editorial']/following-sibling::div");
const SUMMARY: Sel<'static> = Sel::XPath("//h6[text()='Resumen']/following-sibling::div");
const KEYWORDS: Sel<'static> =
    Sel::XPath("//h6[text()='Palabras clave']/following-sibling::div/a");
const IDENTIFIER: Sel<'static> =
    Sel::XPath("//h6[text()='Identificador único']/following-sibling::div/a");
const ACCESS_TYPE: Sel<'static> =
    Sel::XPath("//h6[text()='Tipo de acceso']/following-sibling::div");
const COLLECTION: Sel<'static> =
    Sel::XPath("//h6[text()='Pertenece a la colección']/following-sibling::a");

/// Runs the detail extractor stage: visit every collected link, assemble one
/// record per page, and write the records to the configured CSV.
pub async fn run(cfg: &ExtractorConfig) -> Result<Vec<ThesisRecord>, Box<dyn Error>> {
    let links = store::read_links(&cfg.input_path)?;
    ::log::info!("loaded {} links from {}", links.len(), cfg.input_path);

    let Some(browser) = session::connect(&cfg.webdriver_url).await else {
        return Err("could not connect to a WebDriver server".into());
    };

    let records = run_with(browser, cfg, &links).await;

    store::write_records(&cfg.output_path, &records)?;
    ::log::info!(
        "saved {} of {} records to {}",
        records.len(),
        links.len(),
        cfg.output_path
    );
    Ok(records)
}

/// Extracts a record per link with the given browser session. A failing link
/// drops that record and the run continues; the session is closed at the end
/// unconditionally.
pub(crate) async fn run_with<B: Browser>(
    browser: B,
    cfg: &ExtractorConfig,
    links: &[String],
) -> Vec<ThesisRecord> {
    let mut records = Vec::new();
    for link in links {
        ::log::info!("extracting: {}", link);
        match extract_record(&browser, cfg, link).await {
            Some(record) => records.push(record),
            None => ::log::warn!("dropping record for {}", link),
        }
    }

    browser.close().await;
    records
}

/// Loads one detail page and assembles its record. A navigation failure
/// drops the whole record (logged, not retried).
async fn extract_record<B: Browser>(
    browser: &B,
    cfg: &ExtractorConfig,
    link: &str,
) -> Option<ThesisRecord> {
    if let Err(e) = browser.goto(link).await {
        ::log::error!("failed to load {}: {}", link, e);
        return None;
    }
    super::settle(cfg.settle_ms).await;

    let page = browser.page();
    Some(read_fields(&page, link).await)
}

/// Assembles one record from the loaded page. Every field lookup is
/// independently best-effort; the source link is always carried verbatim.
pub async fn read_fields<D: DomPage>(page: &D, link: &str) -> ThesisRecord {
    ThesisRecord {
        link: link.to_string(),
        title: extract::one(page, TITLE).await,
        authors: extract::many(page, AUTHORS).await.join(", "),
        publication_date: extract::one(page, PUBLICATION_DATE).await,
        advisor: extract::one(page, ADVISOR).await,
        publisher: extract::one(page, PUBLISHER).await,
        summary: extract::one(page, SUMMARY).await,
        keywords: extract::many(page, KEYWORDS).await.join(", "),
        identifier: extract::one_attr(page, IDENTIFIER, "href").await,
        access_type: extract::one(page, ACCESS_TYPE).await,
        collection: extract::one(page, COLLECTION).await,
    }
}
