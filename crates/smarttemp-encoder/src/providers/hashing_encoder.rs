//! Offline feature-hashing encoder.
//!
//! Hashes unigrams and adjacent-word bigrams into fixed buckets with
//! sublinear term weighting. Needs no network or model files.

use std::collections::BTreeMap;

use smarttemp_core::errors::{EncoderError, SmartTempResult};
use smarttemp_core::traits::IPromptEncoder;

/// Words too common to say anything about intent.
const STOPWORDS: &[&str] = &[
    "the", "is", "are", "an", "of", "to", "in", "on", "for", "and", "or", "it", "its", "be",
    "as", "at", "by", "this", "that", "with", "was", "were", "am", "me", "my", "some", "any",
];

/// Bigram features count for half a unigram.
const BIGRAM_WEIGHT: f32 = 0.5;

/// Deterministic hashing encoder.
///
/// Identical text always yields the identical vector, and texts sharing
/// vocabulary land close together. Not as semantically rich as a neural
/// encoder, but always available.
#[derive(Debug, Clone)]
pub struct HashingEncoder {
    dimensions: usize,
}

impl HashingEncoder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// FNV-1a bucket index.
    fn bucket(feature: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in feature.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    /// Lowercase content words with a light suffix strip.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.chars().count() >= 2)
            .map(|s| s.to_lowercase())
            .filter(|s| !STOPWORDS.contains(&s.as_str()))
            .map(|s| stem(&s))
            .collect()
    }

    fn feature_vector(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if tokens.is_empty() {
            return vec;
        }

        // Ordered so bucket sums accumulate in the same order on every call.
        let mut counts: BTreeMap<String, f32> = BTreeMap::new();
        for tok in &tokens {
            *counts.entry(tok.clone()).or_default() += 1.0;
        }
        for pair in tokens.windows(2) {
            *counts.entry(format!("{}_{}", pair[0], pair[1])).or_default() += BIGRAM_WEIGHT;
        }

        for (feature, count) in &counts {
            // Sublinear: repeating a word ten times is not ten times the signal.
            let weight = 1.0 + count.ln_1p();
            vec[Self::bucket(feature, self.dimensions)] += weight;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

fn stem(word: &str) -> String {
    let n = word.len();
    if !word.is_ascii() {
        return word.to_string();
    }
    if n > 5 && word.ends_with("ing") {
        return word[..n - 3].to_string();
    }
    if n > 4 && word.ends_with("ed") {
        return word[..n - 2].to_string();
    }
    if n > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return word[..n - 1].to_string();
    }
    word.to_string()
}

impl IPromptEncoder for HashingEncoder {
    fn encode(&self, text: &str) -> SmartTempResult<Vec<f32>> {
        let vec = self.feature_vector(text);
        if vec.len() != self.dimensions {
            return Err(EncoderError::DimensionMismatch {
                expected: self.dimensions,
                actual: vec.len(),
            }
            .into());
        }
        Ok(vec)
    }

    fn encode_batch(&self, texts: &[String]) -> SmartTempResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.feature_vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing"
    }

    fn is_semantic(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn empty_and_stopword_text_is_zero() {
        let e = HashingEncoder::new(64);
        for text in ["", "   ", "the of and", "?!"] {
            let v = e.encode(text).unwrap();
            assert_eq!(v.len(), 64);
            assert!(v.iter().all(|&x| x == 0.0), "{text:?} should encode to zeros");
        }
    }

    #[test]
    fn unit_norm() {
        let v = HashingEncoder::new(384)
            .encode("Write a short story about a robot")
            .unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "norm was {norm}");
    }

    #[test]
    fn deterministic_across_instances() {
        let a = HashingEncoder::new(256).encode("explain how vaccines work").unwrap();
        let b = HashingEncoder::new(256).encode("explain how vaccines work").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn colliding_buckets_sum_identically_every_call() {
        // 3 buckets for ~20 features forces multi-way collisions.
        let text = "compare contrast analyze explain evaluate assess the strengths \
                    weaknesses tradeoffs benefits drawbacks of each approach";
        let bits = |v: Vec<f32>| v.into_iter().map(f32::to_bits).collect::<Vec<_>>();
        let first = bits(HashingEncoder::new(3).encode(text).unwrap());
        for _ in 0..50 {
            assert_eq!(bits(HashingEncoder::new(3).encode(text).unwrap()), first);
        }
    }

    #[test]
    fn hashing_is_not_semantic() {
        assert!(!HashingEncoder::new(8).is_semantic());
    }

    #[test]
    fn stemming_merges_plural_and_gerund() {
        assert_eq!(stem("stories"), "storie");
        assert_eq!(stem("poems"), "poem");
        assert_eq!(stem("learning"), "learn");
        assert_eq!(stem("class"), "class");
        assert_eq!(stem("ing"), "ing");
    }

    #[test]
    fn shared_vocabulary_scores_higher() {
        let e = HashingEncoder::new(512);
        let a = e.encode("write a poem about the ocean").unwrap();
        let b = e.encode("write poems about mountains").unwrap();
        let c = e.encode("population of brazil in 2020").unwrap();
        assert!(dot(&a, &b) > dot(&a, &c));
    }

    #[test]
    fn zero_dimensions_is_coerced_to_one() {
        let e = HashingEncoder::new(0);
        assert_eq!(e.dimensions(), 1);
        assert_eq!(e.encode("anything").unwrap().len(), 1);
    }
}
