// src/services/extractor.rs

//! Product field extraction.
//!
//! Extracts the product name, stock status, price and image URLs from
//! a fetched page using configured CSS selectors.

use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{ExtractedFields, SelectorConfig};
use crate::utils::resolve_url;

/// Extracts product fields from a fetched document.
///
/// Selectors are parsed once at construction; a bad selector string
/// is rejected here, never mid-batch. Each field rule is total and
/// degrades to `None` when its element or attribute is absent.
pub struct FieldExtractor {
    title: Selector,
    stock_status: Selector,
    price: Selector,
    image: Selector,
    image_attrs: Vec<String>,
    any_image: Selector,
    drawing_marker: String,
}

impl FieldExtractor {
    /// Build an extractor from selector configuration.
    pub fn new(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            title: parse_selector(&config.title)?,
            stock_status: parse_selector(&config.stock_status)?,
            price: parse_selector(&config.price)?,
            image: parse_selector(&config.image)?,
            image_attrs: config.image_attrs.clone(),
            any_image: parse_selector("img[src]")?,
            drawing_marker: config.drawing_marker.clone(),
        })
    }

    /// Extract all fields from a document.
    ///
    /// `page_url` is the URL the document was fetched from, used to
    /// resolve relative image sources.
    pub fn extract(&self, html: &str, page_url: &str) -> ExtractedFields {
        let document = Html::parse_document(html);
        let base = Url::parse(page_url).ok();

        ExtractedFields {
            name: select_text(&document, &self.title),
            stock_status: select_text(&document, &self.stock_status),
            price: select_text(&document, &self.price),
            image_url: self.image_url(&document, base.as_ref()),
            drawing_image_url: self.drawing_image_url(&document, base.as_ref()),
        }
    }

    /// Primary product image, preferring lazy-load source attributes
    /// over the plain `src`.
    fn image_url(&self, document: &Html, base: Option<&Url>) -> Option<String> {
        let image = document.select(&self.image).next()?;
        self.image_attrs
            .iter()
            .find_map(|attr| image.value().attr(attr))
            .map(|src| absolutize(base, src))
    }

    /// First image whose source contains the technical drawing marker.
    fn drawing_image_url(&self, document: &Html, base: Option<&Url>) -> Option<String> {
        document
            .select(&self.any_image)
            .filter_map(|image| image.value().attr("src"))
            .find(|src| src.contains(&self.drawing_marker))
            .map(|src| absolutize(base, src))
    }
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// Text of the first element matched by `selector`, whitespace
/// normalized. `None` when nothing matches or the text is empty.
fn select_text(document: &Html, selector: &Selector) -> Option<String> {
    let element = document.select(selector).next()?;
    let text = normalize_whitespace(&element.text().collect::<String>());
    (!text.is_empty()).then_some(text)
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn absolutize(base: Option<&Url>, href: &str) -> String {
    match base {
        Some(base) => resolve_url(base, href),
        None => href.to_string(),
    }
}
