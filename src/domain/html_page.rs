use scraper::{ElementRef, Html, Node, Selector};
use thiserror::Error;

/// Text under these elements is never rendered.
const HIDDEN_TAGS: [&str; 3] = ["script", "style", "template"];

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("invalid selector `{0}`")]
    InvalidSelector(String),
    #[error("missing `{0}` element")]
    MissingElement(String),
    #[error("`{element}` element has no `{attribute}` attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
}

pub struct HtmlPage {
    document: Html,
}

impl HtmlPage {
    pub fn parse(html: &str) -> Self {
        HtmlPage {
            document: Html::parse_document(html),
        }
    }

    /// Elements matching a css selector such as `div.tF2Cxc` or
    /// `h1, h2`, in document order.
    pub fn select(&self, css: &str) -> Result<Vec<ElementRef<'_>>, ParseError> {
        let selector = parse_selector(css)?;
        Ok(self.document.select(&selector).collect())
    }

    /// Every visible text node of the document, trimmed, empty ones
    /// dropped, joined with `separator`.
    pub fn visible_text(&self, separator: &str) -> String {
        visible_strings(self.document.root_element())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<&str>>()
            .join(separator)
    }
}

fn parse_selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::InvalidSelector(format!("{}: {:?}", css, e)))
}

pub fn first_within<'a>(element: ElementRef<'a>, css: &str) -> Result<ElementRef<'a>, ParseError> {
    let selector = parse_selector(css)?;
    element
        .select(&selector)
        .next()
        .ok_or_else(|| ParseError::MissingElement(css.to_string()))
}

/// Link target of an anchor, or of the first anchor inside `element`.
pub fn link_target(element: ElementRef) -> Result<String, ParseError> {
    let anchor = match element.value().name() {
        "a" => element,
        _ => first_within(element, "a")?,
    };

    anchor
        .value()
        .attr("href")
        .map(|href| href.to_string())
        .ok_or(ParseError::MissingAttribute {
            element: "a",
            attribute: "href",
        })
}

/// All text of the element concatenated, then trimmed.
pub fn trimmed_text(element: ElementRef) -> String {
    visible_strings(element).collect::<String>().trim().to_string()
}

/// Each text node trimmed on its own, then concatenated without a
/// separator.
pub fn stripped_text(element: ElementRef) -> String {
    visible_strings(element).map(str::trim).collect()
}

fn visible_strings<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> + 'a {
    element.descendants().filter_map(|node| match node.value() {
        Node::Text(text)
            if !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|e| HIDDEN_TAGS.contains(&e.name()))
            }) =>
        {
            Some(&**text)
        }
        _ => None,
    })
}
