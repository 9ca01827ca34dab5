use crate::config::ExtractConfig;
use crate::parsers::text;
use crate::results::ScrapedPage;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Elements whose content is never visible page copy
pub const NOISE_SELECTOR: &str = "script, style, noscript, iframe, .ad, .advertisement";

/// Buttons, button-styled links and submit inputs
pub const CTA_SELECTOR: &str = "button, a.btn, a.button, input[type=\"submit\"]";

struct Selectors {
    noise: Selector,
    title: Selector,
    meta_description: Selector,
    h1: Selector,
    h2: Selector,
    cta: Selector,
    body: Selector,
}

static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    noise: css(NOISE_SELECTOR),
    title: css("title"),
    meta_description: css("meta[name=\"description\"]"),
    h1: css("h1"),
    h2: css("h2"),
    cta: css(CTA_SELECTOR),
    body: css("body"),
});

fn css(selector: &str) -> Selector {
    Selector::parse(selector).expect("built-in selector must parse")
}

/// Extracts page signals using the default truncation limits
pub fn extract(html: &str) -> ScrapedPage {
    extract_with_limits(html, &ExtractConfig::default())
}

/// Extracts page signals from raw markup
///
/// Parsing is error tolerant: broken or missing markup only ever produces empty
/// fields. The returned page has an empty `url`; the caller tags it.
pub fn extract_with_limits(html: &str, limits: &ExtractConfig) -> ScrapedPage {
    let mut doc = Html::parse_document(html);
    let removed = strip_noise(&mut doc);
    ::log::trace!("Removed {} noise elements before extraction", removed);

    let sel = &*SELECTORS;

    let title = first_text(&doc, &sel.title);
    let meta_description = doc
        .select(&sel.meta_description)
        .next()
        .and_then(|e| e.value().attr("content"))
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let h1 = first_text(&doc, &sel.h1);

    let h2_list = doc
        .select(&sel.h2)
        .filter_map(|e| text::non_empty_trimmed(&element_text(e)))
        .take(limits.max_h2)
        .collect::<Vec<_>>();

    let cta_texts = doc
        .select(&sel.cta)
        .filter_map(|e| text::non_empty_trimmed(&cta_label(e)))
        .take(limits.max_ctas)
        .collect::<Vec<_>>();

    let main_text = doc
        .select(&sel.body)
        .next()
        .map(|body| text::collapse_whitespace(&element_text(body)))
        .map(|t| text::truncate_chars(&t, limits.max_main_text_chars))
        .unwrap_or_default();

    ::log::debug!(
        "Extracted title={:?}, {} h2s, {} CTAs, {} chars of body text",
        title,
        h2_list.len(),
        cta_texts.len(),
        main_text.chars().count()
    );

    ScrapedPage {
        url: String::new(),
        title,
        h1,
        h2_list,
        meta_description,
        cta_texts,
        main_text,
    }
}

/// Detaches every noise element from the tree and returns how many matched
fn strip_noise(doc: &mut Html) -> usize {
    let ids = doc
        .select(&SELECTORS.noise)
        .map(|e| e.id())
        .collect::<Vec<_>>();

    for id in &ids {
        if let Some(mut node) = doc.tree.get_mut(*id) {
            node.detach();
        }
    }
    ids.len()
}

/// Text content of the element: descendant text nodes concatenated as-is
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

fn first_text(doc: &Html, selector: &Selector) -> String {
    doc.select(selector)
        .next()
        .map(|e| element_text(e).trim().to_string())
        .unwrap_or_default()
}

/// Submit inputs carry their label in `value`; everything else in its text
fn cta_label(element: ElementRef<'_>) -> String {
    if element.value().name() == "input" {
        element.value().attr("value").unwrap_or_default().to_string()
    } else {
        element_text(element)
    }
}
