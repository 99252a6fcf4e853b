use crate::domain::{
    page_record::PageRecord, search_query::SearchQuery, search_result::SearchResult,
};

use super::{
    collect_search_results, extract_page_text, rank_keywords, CollectorOptions, PageFetcher,
    ResultSink,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct HarvestReport {
    pub keywords: usize,
    pub records: usize,
    pub empty_pages: usize,
}

/// Runs search, extraction and ranking for each query, one request at a
/// time.
pub struct Harvester<'a> {
    fetcher: &'a dyn PageFetcher,
    options: CollectorOptions,
}

impl<'a> Harvester<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, options: CollectorOptions) -> Self {
        Harvester { fetcher, options }
    }

    pub async fn harvest(&self, queries: &[SearchQuery], sink: &mut ResultSink) -> HarvestReport {
        let mut report = HarvestReport::default();

        for query in queries {
            log::info!("Processing keyword: {}", query.keyword);

            let records = self.harvest_keyword(query).await;

            report.keywords += 1;
            report.records += records.len();
            report.empty_pages += records.iter().filter(|r| r.is_empty()).count();

            for record in records.iter() {
                sink.append(record);
            }
        }

        log::info!(
            "Harvested {} pages for {} keywords, {} without text",
            report.records,
            report.keywords,
            report.empty_pages
        );

        report
    }

    pub async fn harvest_keyword(&self, query: &SearchQuery) -> Vec<PageRecord> {
        let search_results = collect_search_results(query, self.fetcher, &self.options).await;

        let mut records = Vec::with_capacity(search_results.len());
        for search_result in search_results {
            records.push(self.harvest_page(search_result).await);
        }

        records
    }

    async fn harvest_page(&self, search_result: SearchResult) -> PageRecord {
        log::info!("URL: {}", search_result.url);
        log::info!("Title: {}", search_result.title);

        let extracted_text = extract_page_text(&search_result.url, self.fetcher).await;
        let keywords = rank_keywords(&extracted_text);

        log::info!("Top Keywords: {:?}", keywords);

        PageRecord {
            url: search_result.url,
            extracted_text,
            keywords,
        }
    }
}
