use engine_logging::engine_debug;
use imdb_search_core::{MovieRecord, Score};
use scraper::{ElementRef, Html, Selector};

pub trait Extractor: Send + Sync {
    /// Returns the records found in `html`, in document order. Never fails;
    /// anything unrecognised is skipped.
    fn extract(&self, html: &str) -> Vec<MovieRecord>;
}

/// Extractor for the "advanced" layout of the title search results:
/// - each result is a `div.lister-item.mode-advanced`
/// - title and link come from the first `h3 a`
/// - the score comes from `span.metascore`, if present.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdvancedListExtractor;

struct ItemSelectors {
    heading: Selector,
    anchor: Selector,
    score: Selector,
}

impl Extractor for AdvancedListExtractor {
    fn extract(&self, html: &str) -> Vec<MovieRecord> {
        let (Ok(item_sel), Ok(heading), Ok(anchor), Ok(score)) = (
            Selector::parse("div.lister-item.mode-advanced"),
            Selector::parse("h3"),
            Selector::parse("a"),
            Selector::parse("span.metascore"),
        ) else {
            return Vec::new();
        };
        let selectors = ItemSelectors {
            heading,
            anchor,
            score,
        };
        let doc = Html::parse_document(html);

        let records: Vec<MovieRecord> = doc
            .select(&item_sel)
            .enumerate()
            .filter_map(|(index, item)| {
                let record = extract_item(item, &selectors);
                if record.is_none() {
                    engine_debug!("skipping list item {} without a titled link", index);
                }
                record
            })
            .collect();
        records
    }
}

fn extract_item(item: ElementRef<'_>, selectors: &ItemSelectors) -> Option<MovieRecord> {
    let heading = item.select(&selectors.heading).next()?;
    let anchor = heading.select(&selectors.anchor).next()?;

    let title = anchor.text().collect::<String>().trim().to_string();
    if title.is_empty() {
        return None;
    }
    let href = anchor.value().attr("href")?;

    Some(MovieRecord::from_relative_link(
        title,
        extract_score(item, &selectors.score),
        href,
    ))
}

fn extract_score(item: ElementRef<'_>, score_sel: &Selector) -> Option<Score> {
    let node = item.select(score_sel).next()?;
    node.text().collect::<String>().trim().parse().ok()
}
