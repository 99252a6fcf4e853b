use std::collections::HashMap;

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::stopwords;

pub const MAX_KEYWORDS: usize = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ProcessingError {
    #[error("text contains binary content")]
    BinaryContent,
}

/// The most frequent non-stopword words of the text, at most
/// `MAX_KEYWORDS`. Equal counts keep first-occurrence order.
pub fn rank_keywords(text: &str) -> Vec<String> {
    match try_rank_keywords(text) {
        Ok(keywords) => keywords,
        Err(e) => {
            log::error!("Error processing text: {}", e);
            vec![]
        }
    }
}

pub fn try_rank_keywords(text: &str) -> Result<Vec<String>, ProcessingError> {
    if text.contains('\0') {
        return Err(ProcessingError::BinaryContent);
    }

    let stopwords = stopwords();

    // (word, count) in first-occurrence order
    let mut counts: Vec<(&str, usize)> = vec![];
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for word in text
        .unicode_words()
        .filter(|w| !stopwords.contains(w.to_lowercase().as_str()))
    {
        match positions.get(word) {
            Some(&position) => counts[position].1 += 1,
            None => {
                positions.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // Stable, so ties stay in first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _)| word.to_string())
        .collect())
}
