//! Text matching primitives for the in-memory engine.
//!
//! Tokenizes by lowercasing and splitting on non-alphanumeric characters,
//! and implements the auto-fuzziness ladder used for typo tolerance: an
//! edit-distance budget of 0 for terms up to 2 characters, 1 for terms of
//! 3–5 characters, and 2 beyond that.

/// Tokenize text: lowercase, split on non-alphanumeric runs.
///
/// Product names and categories must match verbatim, so no stop words are
/// removed and single-character tokens are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}

/// Edit-distance budget for a query term, tuned to its length.
pub fn auto_fuzziness(term: &str) -> usize {
    match term.chars().count() {
        0..=2 => 0,
        3..=5 => 1,
        _ => 2,
    }
}

/// Returns `true` if `candidate` is within `max_edits` Levenshtein edits
/// of `term`. Both inputs are expected to be lowercased tokens.
pub fn within_edits(term: &str, candidate: &str, max_edits: usize) -> bool {
    if max_edits == 0 {
        return term == candidate;
    }
    let a: Vec<char> = term.chars().collect();
    let b: Vec<char> = candidate.chars().collect();
    if a.len().abs_diff(b.len()) > max_edits {
        return false;
    }

    // Single-row Levenshtein with early exit when the whole row exceeds
    // the budget.
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ca) in a.iter().enumerate() {
        let mut previous = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous + usize::from(ca != cb);
            previous = row[j + 1];
            row[j + 1] = substitution.min(previous + 1).min(row[j] + 1);
            row_min = row_min.min(row[j + 1]);
        }
        if row_min > max_edits {
            return false;
        }
    }
    row[b.len()] <= max_edits
}

/// Returns `true` if a query term matches a document token under the
/// auto-fuzziness ladder.
pub fn fuzzy_eq(term: &str, token: &str) -> bool {
    within_edits(term, token, auto_fuzziness(term))
}
