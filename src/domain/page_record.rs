use serde::{Deserialize, Serialize};

pub const KEYWORD_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq)]
pub struct PageRecord {
    pub url: String,
    pub extracted_text: String,
    pub keywords: Vec<String>,
}

impl PageRecord {
    pub fn is_empty(&self) -> bool {
        self.extracted_text.is_empty()
    }
}

/// A row of the exported csv file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    #[serde(rename = "Website URL")]
    pub url: String,
    #[serde(rename = "All Text")]
    pub text: String,
    #[serde(rename = "Keywords")]
    pub keywords: String,
}

impl OutputRow {
    pub const HEADER: [&'static str; 3] = ["Website URL", "All Text", "Keywords"];

    pub fn keyword_list(&self) -> Vec<String> {
        match self.keywords.is_empty() {
            true => vec![],
            false => self
                .keywords
                .split(KEYWORD_SEPARATOR)
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

impl From<&PageRecord> for OutputRow {
    fn from(record: &PageRecord) -> Self {
        OutputRow {
            url: record.url.clone(),
            text: record.extracted_text.clone(),
            keywords: record.keywords.join(KEYWORD_SEPARATOR),
        }
    }
}
