use anyhow::Context;

use crate::{
    configuration::Settings,
    domain::search_query::SearchQuery,
    services::{HarvestReport, Harvester, ReqwestFetcher, ResultSink},
};

pub struct Application {
    settings: Settings,
    fetcher: ReqwestFetcher,
}

impl Application {
    pub fn build(settings: Settings) -> anyhow::Result<Self> {
        let fetcher =
            ReqwestFetcher::new(&settings.http).context("Failed to build the http client")?;

        Ok(Application { settings, fetcher })
    }

    pub fn search_queries(&self) -> Vec<SearchQuery> {
        let search = &self.settings.search;
        search
            .keywords
            .iter()
            .filter_map(|keyword| {
                match SearchQuery::parse(keyword, search.target_count, &search.unwanted_domains) {
                    Ok(query) => Some(query),
                    Err(e) => {
                        log::error!("Skipping keyword {:?}: {}", keyword, e);
                        None
                    }
                }
            })
            .collect()
    }

    /// Harvests every configured keyword and writes the csv file.
    pub async fn run(self) -> anyhow::Result<HarvestReport> {
        let queries = self.search_queries();
        let harvester = Harvester::new(&self.fetcher, self.settings.search.collector_options());
        let mut sink = ResultSink::new();

        let report = harvester.harvest(&queries, &mut sink).await;

        let output_path = &self.settings.output.path;
        if sink.is_empty() {
            log::warn!("No pages harvested, {} will only hold the header", output_path);
        }
        sink.export(output_path)
            .with_context(|| format!("Failed to save results to {}", output_path))?;
        log::info!("Results saved to {}", output_path);

        Ok(report)
    }
}
