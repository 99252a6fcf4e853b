pub const DEFAULT_TARGET_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub keyword: String,
    pub target_count: usize,
    pub unwanted_domains: Vec<String>,
}

impl SearchQuery {
    pub fn parse(
        keyword: &str,
        target_count: usize,
        unwanted_domains: &[String],
    ) -> Result<SearchQuery, String> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err("Search keyword cannot be empty".to_string());
        }
        if target_count == 0 {
            return Err(format!(
                "Target result count for '{}' must be positive",
                keyword
            ));
        }

        let unwanted_domains = unwanted_domains
            .iter()
            .map(|d| d.trim().to_lowercase())
            .filter(|d| !d.is_empty())
            .collect();

        Ok(SearchQuery {
            keyword: keyword.to_string(),
            target_count,
            unwanted_domains,
        })
    }

    /// True when the domain contains any of the unwanted substrings.
    pub fn is_unwanted_domain(&self, domain: &str) -> bool {
        self.unwanted_domains
            .iter()
            .any(|unwanted| domain.contains(unwanted.as_str()))
    }
}
