use thiserror::Error;

use crate::domain::html_page::{stripped_text, HtmlPage, ParseError};

use super::{FetchError, PageFetcher};

const HEADING_SELECTOR: &str = "h1, h2, h3, h4";
const PARAGRAPH_SELECTOR: &str = "p";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Fetches the page and reduces it to lowercase text without punctuation.
/// Any failure yields an empty string.
pub async fn extract_page_text(url: &str, fetcher: &dyn PageFetcher) -> String {
    match fetch_page_text(url, fetcher).await {
        Ok(text) => text,
        Err(e) => {
            log::error!("Error fetching {}: {}", url, e);
            String::new()
        }
    }
}

async fn fetch_page_text(url: &str, fetcher: &dyn PageFetcher) -> Result<String, ExtractionError> {
    let page = fetcher.fetch(url).await?;
    Ok(page_text(&page.body)?)
}

/// Heading text, paragraph text and the whole visible text, in that order.
/// Headings and paragraphs therefore appear twice, which weighs them up in
/// keyword ranking.
pub fn page_text(html_content: &str) -> Result<String, ParseError> {
    let page = HtmlPage::parse(html_content);

    let header_text = joined_text(&page, HEADING_SELECTOR)?;
    let description_text = joined_text(&page, PARAGRAPH_SELECTOR)?;
    let main_content_text = page.visible_text(" ");

    let combined_text =
        format!("{} {} {}", header_text, description_text, main_content_text).to_lowercase();

    Ok(strip_punctuation(&combined_text))
}

fn joined_text(page: &HtmlPage, css: &str) -> Result<String, ParseError> {
    Ok(page
        .select(css)?
        .into_iter()
        .map(stripped_text)
        .collect::<Vec<String>>()
        .join(" "))
}

/// Keeps letters, digits, underscores and whitespace. Uppercase letters
/// that survive lowercasing, such as mathematical bold capitals, are
/// dropped too.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| (c.is_alphanumeric() || *c == '_' || c.is_whitespace()) && !c.is_uppercase())
        .collect()
}
