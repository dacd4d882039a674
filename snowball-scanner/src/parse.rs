// HTML extraction for listing and profile pages

use crate::error::{Result, ScanError};
use crate::result::{Candidate, ParseGap, RelationsPage};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

const LISTING_ITEM: &str = "li.ff-grid-box.ff-list";
const LISTING_NAME: &str = "div.ff-name";
const HISTORY_PANEL: &str = "div.ff-dating-history.ff-panel";
const PARTNER_BOX: &str = "div.ff-grid-box";
const PARTNER_NAME: &str = "h4";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScanError::Parse(format!("selector {}: {}", css, e)))
}

/// Extract up to `limit` candidates from a "celebrities starting with" listing.
///
/// Only the first `limit` list items are looked at; an item without an anchor
/// or a name still uses up its slot.
pub fn parse_listing(html: &str, page_url: &Url, limit: usize) -> Result<Vec<Candidate>> {
    let document = Html::parse_document(html);
    let item_selector = selector(LISTING_ITEM)?;
    let name_selector = selector(LISTING_NAME)?;
    let anchor_selector = selector("a")?;

    let mut candidates = Vec::new();
    for item in document.select(&item_selector).take(limit) {
        if let Some(candidate) = anchored_candidate(item, &anchor_selector, &name_selector, page_url) {
            candidates.push(candidate);
        }
    }

    Ok(candidates)
}

/// Extract the partners listed in the dating history panel of a profile page.
pub fn parse_relations(html: &str, page_url: &Url) -> Result<RelationsPage> {
    let document = Html::parse_document(html);
    let panel_selector = selector(HISTORY_PANEL)?;
    let box_selector = selector(PARTNER_BOX)?;
    let name_selector = selector(PARTNER_NAME)?;
    let anchor_selector = selector("a")?;

    let Some(panel) = document.select(&panel_selector).next() else {
        return Ok(RelationsPage::Gap(ParseGap::SectionMissing));
    };

    let boxes: Vec<ElementRef> = panel.select(&box_selector).collect();
    if boxes.is_empty() {
        return Ok(RelationsPage::Gap(ParseGap::NoEntries));
    }

    let candidates = boxes
        .into_iter()
        .filter_map(|b| anchored_candidate(b, &anchor_selector, &name_selector, page_url))
        .collect();

    Ok(RelationsPage::Entries(candidates))
}

/// Name and link from the first anchor below `element`, if both are present.
fn anchored_candidate(
    element: ElementRef,
    anchor_selector: &Selector,
    name_selector: &Selector,
    page_url: &Url,
) -> Option<Candidate> {
    let anchor = element.select(anchor_selector).next()?;
    let name_tag = anchor.select(name_selector).next()?;

    let name = name_tag
        .text()
        .map(str::trim)
        .collect::<String>()
        .to_lowercase();
    if name.is_empty() {
        return None;
    }

    let href = anchor.value().attr("href")?;
    let link = resolve_link(page_url, href)?;
    debug!("Found candidate: {} -> {}", name, link);

    Some(Candidate::new(name, link))
}

fn resolve_link(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') || href.starts_with("javascript:") {
        return None;
    }

    let mut url = base.join(href).ok()?;
    url.set_fragment(None);
    Some(url.to_string())
}
