use scraper::{Html, Selector};
use url::Url;

/// Extracts detail-page URLs from a listing page's source.
///
/// Collects the `href` of every anchor matching `anchor_selector`, in
/// document order, resolved against `base` (the listing page's own URL).
/// Best-effort: an unparsable selector or unresolvable href yields no entry
/// for that element rather than an error, so one bad page never aborts the
/// collection loop.
pub fn extract_links(html: &str, base: &Url, anchor_selector: &str) -> Vec<String> {
    let selector = match Selector::parse(anchor_selector) {
        Ok(selector) => selector,
        Err(e) => {
            ::log::warn!("invalid listing anchor selector {:?}: {}", anchor_selector, e);
            return Vec::new();
        }
    };

    let doc = Html::parse_document(html);
    let links: Vec<String> = doc
        .select(&selector)
        .filter_map(|e| e.value().attr("href"))
        .filter_map(|href| match base.join(href) {
            Ok(resolved) => Some(resolved.to_string()),
            Err(e) => {
                ::log::warn!("skipping unresolvable href {:?}: {}", href, e);
                None
            }
        })
        .collect();

    ::log::debug!("listing parser found {} links", links.len());
    links
}
