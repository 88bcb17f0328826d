//! HTML parser for quote cards
//!
//! The layout is fixed:
//!
//! ```html
//! <div class="quote">
//!   <span class="text">“…”</span>
//!   <small class="author">…</small>
//!   <div class="tags"><a class="tag">…</a> …</div>
//! </div>
//! ```

use crate::table::QuoteRecord;
use scraper::{ElementRef, Html, Selector};

const QUOTE_SELECTOR: &str = ".quote";
const TEXT_SELECTOR: &str = ".text";
const AUTHOR_SELECTOR: &str = ".author";
const TAG_SELECTOR: &str = ".tags .tag";

struct QuoteSelectors {
    quote: Selector,
    text: Selector,
    author: Selector,
    tag: Selector,
}

impl QuoteSelectors {
    fn new() -> Result<Self, String> {
        Ok(Self {
            quote: parse_selector(QUOTE_SELECTOR)?,
            text: parse_selector(TEXT_SELECTOR)?,
            author: parse_selector(AUTHOR_SELECTOR)?,
            tag: parse_selector(TAG_SELECTOR)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, String> {
    Selector::parse(selector).map_err(|e| format!("invalid selector '{}': {}", selector, e))
}

/// Parses a quote page into records
///
/// One record is emitted per `.quote` element. A missing `.text` or `.author`
/// child yields `None` for that field; the record is still emitted. Tags are
/// joined with `,` in document order, and a quote without tags gets an empty
/// string.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
///
/// # Returns
///
/// * `Ok(Vec<QuoteRecord>)` - Records in document order, possibly empty
/// * `Err(String)` - The selectors could not be built
///
/// # Example
///
/// ```
/// use web_extractor::extractor::parse_quotes_page;
///
/// let html = r#"<div class="quote"><span class="text">Hi</span>
///     <div class="tags"><a class="tag">wisdom</a><a class="tag">life</a></div></div>"#;
/// let records = parse_quotes_page(html).unwrap();
/// assert_eq!(records[0].text.as_deref(), Some("Hi"));
/// assert_eq!(records[0].author, None);
/// assert_eq!(records[0].tags, "wisdom,life");
/// ```
pub fn parse_quotes_page(html: &str) -> Result<Vec<QuoteRecord>, String> {
    let selectors = QuoteSelectors::new()?;
    let document = Html::parse_document(html);

    let records = document
        .select(&selectors.quote)
        .map(|quote| extract_record(quote, &selectors))
        .collect();

    Ok(records)
}

fn extract_record(quote: ElementRef<'_>, selectors: &QuoteSelectors) -> QuoteRecord {
    let text = quote.select(&selectors.text).next().map(stripped_text);
    let author = quote.select(&selectors.author).next().map(stripped_text);

    let tags = quote
        .select(&selectors.tag)
        .map(stripped_text)
        .collect::<Vec<_>>()
        .join(",");

    QuoteRecord { text, author, tags }
}

/// Concatenates the element's text nodes, each trimmed, skipping blank ones
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
