pub mod google_scraper;
pub mod harvester;
pub mod keyword_ranker;
pub mod page_fetcher;
pub mod result_sink;
pub mod stopwords;
pub mod text_extractor;

pub use google_scraper::*;
pub use harvester::*;
pub use keyword_ranker::*;
pub use page_fetcher::*;
pub use result_sink::*;
pub use text_extractor::*;
