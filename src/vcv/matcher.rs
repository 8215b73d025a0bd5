//! Free text to significance tokens
//!
//! Matchers are deliberately permissive: they produce candidate tokens and
//! leave validation against the controlled set to the classifier.

use super::vocabulary::Vocabulary;

/// Maps description and explanation text to candidate significance tokens
pub trait SignificanceMatcher {
    /// Candidate tokens for the given texts, in the order found
    fn match_terms(&self, description: Option<&str>, explanation: Option<&str>) -> Vec<String>;
}

impl<F> SignificanceMatcher for F
where
    F: Fn(Option<&str>, Option<&str>) -> Vec<String>,
{
    fn match_terms(&self, description: Option<&str>, explanation: Option<&str>) -> Vec<String> {
        self(description, explanation)
    }
}

const CONFLICTING: &str = "conflicting_interpretations";

/// Split levels, outermost first
const SEPARATORS: &[char] = &[';', '/', ','];

/// Phrase matcher driven by the vocabulary's alias table.
///
/// Text is lowercased and tried as a whole against the aliases, then split
/// on `;`, then `/`, then `,`, retrying the aliases on every fragment before
/// splitting it further. Fragments without an alias are snake-cased. Explanation text is only consulted when
/// the description is missing or reports conflicting interpretations, where
/// it lists the underlying classifications, e.g. `Pathogenic(2); Benign(1)`.
#[derive(Debug, Clone, Copy)]
pub struct PhraseMatcher<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> PhraseMatcher<'v> {
    /// Create a matcher over the given vocabulary
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    fn tokens(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        let mut tokens = Vec::new();
        self.push_tokens(&text, SEPARATORS, &mut tokens);
        tokens
    }

    /// Alias lookup first; otherwise split on the next separator level.
    /// Aliases may contain lower-level separators, e.g. `benign/likely benign`
    /// inside a `;`-separated list.
    fn push_tokens(&self, fragment: &str, separators: &[char], tokens: &mut Vec<String>) {
        let fragment = strip_count(fragment);
        if fragment.is_empty() {
            return;
        }
        if let Some(term) = self.vocabulary.alias(fragment) {
            tokens.push(term.to_string());
            return;
        }
        match separators.split_first() {
            Some((&separator, rest)) => {
                for part in fragment.split(separator) {
                    self.push_tokens(part, rest, tokens);
                }
            }
            None => tokens.push(snake_case(fragment)),
        }
    }
}

impl SignificanceMatcher for PhraseMatcher<'_> {
    fn match_terms(&self, description: Option<&str>, explanation: Option<&str>) -> Vec<String> {
        let mut terms = description.map(|d| self.tokens(d)).unwrap_or_default();
        let consult_explanation = description.is_none() || terms.iter().any(|t| t == CONFLICTING);
        if consult_explanation {
            if let Some(explanation) = explanation {
                terms.extend(self.tokens(explanation));
            }
        }
        terms
    }
}

/// Trim whitespace and a trailing submitter count such as `(3)`
fn strip_count(fragment: &str) -> &str {
    let fragment = fragment.trim();
    if let Some(open) = fragment.rfind('(') {
        let inner = &fragment[open + 1..];
        if let Some(digits) = inner.strip_suffix(')') {
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return fragment[..open].trim_end();
            }
        }
    }
    fragment
}

fn snake_case(phrase: &str) -> String {
    phrase.split_whitespace().collect::<Vec<_>>().join("_")
}
