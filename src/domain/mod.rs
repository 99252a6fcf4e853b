pub mod html_page;
pub mod page_record;
pub mod search_query;
pub mod search_result;
pub mod web_domain;
