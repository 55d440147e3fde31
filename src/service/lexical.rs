// ============================================================
// Layer 5 — Lexical Answering Service
// ============================================================
// The built-in AnsweringService implementation: sentence-level
// keyword-overlap extraction. No learned weights, no network —
// just enough retrieval that the binary answers questions out
// of the box. Anything smarter plugs in behind the same trait.
//
// How it scores:
//   1. Split the context into sentences on . ! ?
//   2. Keep question words longer than 3 chars, plus numeric
//      tokens (so "2" in "Term 2" still counts), lowercased
//   3. Score each sentence by the summed length of matched
//      keywords, normalised by the total keyword weight + 1 —
//      longer matched words count for more, and the +1 keeps
//      the score strictly below 1.0
//   4. Return sentences with a positive score, best first
//
// Reference: Rust Book §8 (Strings, Vectors)

use anyhow::Result;

use crate::domain::answer::Answer;
use crate::domain::traits::AnsweringService;

/// Keyword-overlap extractive answerer.
pub struct LexicalAnswerer {
    /// At most this many candidates are returned per query
    max_candidates: usize,
}

impl LexicalAnswerer {
    /// Stand-in for a real model download. Kept fallible so the
    /// loading path of the session (including its failure arm)
    /// stays honest for any future service that can actually fail.
    pub fn load() -> Result<Self> {
        tracing::info!("Lexical answering service ready");
        Ok(Self { max_candidates: 5 })
    }
}

impl AnsweringService for LexicalAnswerer {
    fn find_answers(&self, question: &str, context: &str) -> Result<Vec<Answer>> {
        let keywords = question_keywords(question);
        if keywords.is_empty() {
            return Ok(Vec::new());
        }

        // The +1 keeps every score strictly inside [0, 1)
        let total_weight: f32 =
            keywords.iter().map(|w| w.len() as f32).sum::<f32>() + 1.0;

        let mut scored: Vec<Answer> = split_sentences(context)
            .into_iter()
            .filter_map(|sentence| {
                let lower = sentence.to_lowercase();
                let matched: f32 = keywords
                    .iter()
                    .filter(|w| lower.contains(w.as_str()))
                    .map(|w| w.len() as f32)
                    .sum();
                if matched > 0.0 {
                    Some(Answer::new(sentence, matched / total_weight))
                } else {
                    None
                }
            })
            .collect();

        // Best match first; ties keep sentence order (stable sort)
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(self.max_candidates);

        tracing::debug!("{} candidate sentence(s) matched", scored.len());
        Ok(scored)
    }
}

/// Question words worth matching: longer than 3 chars, or fully
/// numeric (years, term numbers), lowercased with punctuation
/// trimmed from the edges.
fn question_keywords(question: &str) -> Vec<String> {
    question
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| w.len() > 3 || (!w.is_empty() && w.chars().all(|c| c.is_ascii_digit())))
        .collect()
}

/// Split a passage into trimmed, non-empty sentences.
fn split_sentences(context: &str) -> Vec<String> {
    context
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
