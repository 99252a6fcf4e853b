use std::time::Duration;

use url::Url;

use crate::domain::{
    html_page::{first_within, link_target, trimmed_text, HtmlPage, ParseError},
    search_query::SearchQuery,
    search_result::{ResultSet, SearchResult},
    web_domain::get_registrable_domain,
};

use super::PageFetcher;

pub const PAGE_SIZE: usize = 10;
const RESULT_BLOCK_SELECTOR: &str = "div.tF2Cxc";
const IMAGE_RESULT_MARKER: &str = "imgres";

#[derive(Debug, Clone)]
pub struct CollectorOptions {
    pub base_url: String,
    pub page_delay: Duration,
    pub max_rounds: Option<u32>,
}

impl Default for CollectorOptions {
    fn default() -> Self {
        CollectorOptions {
            base_url: "https://www.google.com/search".to_string(),
            page_delay: Duration::from_secs(2),
            max_rounds: None,
        }
    }
}

#[derive(Debug, PartialEq)]
enum CollectorState {
    Collecting { offset: usize, round: u32 },
    Collected,
}

/// Pages through search results for the query until `target_count`
/// admissible results are found or a page fails to load. Never fails,
/// a failed page just ends collection early.
pub async fn collect_search_results(
    query: &SearchQuery,
    fetcher: &dyn PageFetcher,
    options: &CollectorOptions,
) -> Vec<SearchResult> {
    let mut results = ResultSet::new();
    let mut state = CollectorState::Collecting {
        offset: 0,
        round: 0,
    };

    while let CollectorState::Collecting { offset, round } = state {
        state = collect_round(query, fetcher, options, &mut results, offset, round).await;
    }

    if results.is_empty() {
        log::warn!("No results collected for query: {}", query.keyword);
    } else {
        log::info!(
            "Collected {}/{} results for query: {}",
            results.len(),
            query.target_count,
            query.keyword
        );
    }

    results.into_results()
}

async fn collect_round(
    query: &SearchQuery,
    fetcher: &dyn PageFetcher,
    options: &CollectorOptions,
    results: &mut ResultSet,
    offset: usize,
    round: u32,
) -> CollectorState {
    if results.len() >= query.target_count {
        return CollectorState::Collected;
    }
    if options.max_rounds.is_some_and(|max| round >= max) {
        log::warn!(
            "Stopped after {} pages with {} results for query: {}",
            round,
            results.len(),
            query.keyword
        );
        return CollectorState::Collected;
    }

    // Spacing between pages keeps the search engine from blocking us
    if round > 0 && !options.page_delay.is_zero() {
        tokio::time::sleep(options.page_delay).await;
    }

    let search_url = match build_search_url(&options.base_url, &query.keyword, offset) {
        Ok(url) => url,
        Err(e) => {
            log::error!("Failed to build search url from {}: {:?}", options.base_url, e);
            return CollectorState::Collected;
        }
    };

    match fetcher.fetch(search_url.as_str()).await {
        Ok(page) => {
            admit_results(query, &page.body, results);
            CollectorState::Collecting {
                offset: offset + PAGE_SIZE,
                round: round + 1,
            }
        }
        Err(e) => {
            log::error!("Error fetching {}: {}", search_url, e);
            CollectorState::Collected
        }
    }
}

pub fn build_search_url(base_url: &str, keyword: &str, offset: usize) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        base_url,
        &[
            ("q", keyword.to_string()),
            ("num", PAGE_SIZE.to_string()),
            ("start", offset.to_string()),
        ],
    )
}

fn admit_results(query: &SearchQuery, html_content: &str, results: &mut ResultSet) {
    let page = HtmlPage::parse(html_content);
    let blocks = match page.select(RESULT_BLOCK_SELECTOR) {
        Ok(blocks) => blocks,
        Err(e) => {
            log::error!("Failed to select result blocks: {}", e);
            return;
        }
    };

    log::info!(
        "Found {} result blocks | Query: {}",
        blocks.len(),
        query.keyword
    );

    for block in blocks {
        if results.len() >= query.target_count {
            break;
        }

        let result = match parse_result_block(block) {
            Ok(result) => result,
            Err(e) => {
                log::error!("Error processing a query: {}", e);
                continue;
            }
        };

        if !is_admissible(query, &result.url) {
            continue;
        }

        results.insert(result);
    }
}

fn parse_result_block(block: scraper::ElementRef) -> Result<SearchResult, ParseError> {
    let url = link_target(block)?;
    let title = trimmed_text(first_within(block, "h3")?);

    Ok(SearchResult { url, title })
}

fn is_admissible(query: &SearchQuery, url: &str) -> bool {
    if url.contains(IMAGE_RESULT_MARKER) {
        return false;
    }
    !query.is_unwanted_domain(&get_registrable_domain(url))
}
