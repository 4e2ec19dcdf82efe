//! Classifier variants. Each one is selected at construction time and used
//! through `IPromptClassifier`.

pub mod embedding_classifier;
pub mod keyword_classifier;

pub use embedding_classifier::EmbeddingClassifier;
pub use keyword_classifier::KeywordClassifier;

use std::collections::BTreeMap;

use smarttemp_core::Category;

/// First maximum in map order wins; a later category needs a strictly
/// greater score to take over.
pub(crate) fn argmax(scores: &BTreeMap<Category, f64>) -> Option<(Category, f64)> {
    argmax_in(scores, scores.keys().copied())
}

/// Like `argmax`, but ties resolve by position in `order`. Categories
/// missing from `scores` are skipped.
pub(crate) fn argmax_in<I>(scores: &BTreeMap<Category, f64>, order: I) -> Option<(Category, f64)>
where
    I: IntoIterator<Item = Category>,
{
    let mut best: Option<(Category, f64)> = None;
    for category in order {
        let Some(&score) = scores.get(&category) else {
            continue;
        };
        match best {
            Some((_, top)) if !(score > top) => {}
            _ => best = Some((category, score)),
        }
    }
    best
}
