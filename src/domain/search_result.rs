use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
}

/// Results for a single query, unique by url and kept in first-seen order.
#[derive(Debug, Default)]
pub struct ResultSet {
    results: Vec<SearchResult>,
    seen_urls: HashSet<String>,
}

impl ResultSet {
    pub fn new() -> Self {
        ResultSet::default()
    }

    /// Returns false when the url was already present. The stored title is
    /// never overwritten.
    pub fn insert(&mut self, result: SearchResult) -> bool {
        if self.seen_urls.contains(&result.url) {
            return false;
        }
        self.seen_urls.insert(result.url.clone());
        self.results.push(result);
        true
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_results(self) -> Vec<SearchResult> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::{ResultSet, SearchResult};

    fn result(url: &str, title: &str) -> SearchResult {
        SearchResult {
            url: url.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn result_set_keeps_first_seen_order_and_title() {
        let mut set = ResultSet::new();

        assert!(set.insert(result("https://b.com", "B")));
        assert!(set.insert(result("https://a.com", "A")));
        assert!(!set.insert(result("https://b.com", "B again")));

        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(
            set.into_results(),
            vec![result("https://b.com", "B"), result("https://a.com", "A")]
        );
    }
}
