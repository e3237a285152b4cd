//! Fuzzy filtering of menu options
//!
//! Matches the query as a case-insensitive subsequence of the label, falling
//! back to the description at half score. Results keep the index of the
//! option in the unfiltered list so the renderer can compare against the
//! host's selection.

use crate::option::SelectOption;

/// An option that matched the filter query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Position in the unfiltered option list
    pub index: usize,
    /// Match score (higher is better)
    pub score: i64,
    /// Matched char positions in the label (for highlighting)
    pub match_indices: Vec<usize>,
}

/// Filter options by query, best matches first
///
/// An empty query keeps every option in its original order.
pub fn filter_options(query: &str, options: &[SelectOption]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return (0..options.len())
            .map(|index| FilterMatch {
                index,
                score: 0,
                match_indices: vec![],
            })
            .collect();
    }

    let query_lower = query.to_lowercase();
    let query_chars: Vec<char> = query_lower.chars().collect();

    let mut results: Vec<FilterMatch> = options
        .iter()
        .enumerate()
        .filter_map(|(index, option)| {
            let (score, match_indices) = fuzzy_match(&query_chars, &option.label);
            if score > 0 {
                return Some(FilterMatch {
                    index,
                    score,
                    match_indices,
                });
            }

            let description = option.description.as_deref()?;
            let (sub_score, _) = fuzzy_match(&query_chars, description);
            (sub_score > 0).then(|| FilterMatch {
                index,
                score: (sub_score / 2).max(1),
                match_indices: vec![],
            })
        })
        .collect();

    // stable: equal scores keep option order
    results.sort_by(|a, b| b.score.cmp(&a.score));

    results
}

/// Score `target` against a lowercased query
///
/// Returns `(0, [])` unless every query char appears in order.
fn fuzzy_match(query_chars: &[char], target: &str) -> (i64, Vec<usize>) {
    if query_chars.is_empty() {
        return (0, vec![]);
    }

    let original: Vec<char> = target.chars().collect();
    // lowercasing can expand a char (e.g. 'İ'), so keep where each came from
    let (target_chars, origin): (Vec<char>, Vec<usize>) = original
        .iter()
        .enumerate()
        .flat_map(|(idx, c)| c.to_lowercase().map(move |lower| (lower, idx)))
        .unzip();

    let mut score: i64 = 0;
    let mut indices: Vec<usize> = Vec::new();
    let mut query_idx = 0;
    let mut prev_match_idx: Option<usize> = None;

    for (target_idx, target_char) in target_chars.iter().enumerate() {
        if query_idx >= query_chars.len() {
            break;
        }
        if *target_char != query_chars[query_idx] {
            continue;
        }

        let original_idx = origin[target_idx];
        if indices.last() != Some(&original_idx) {
            indices.push(original_idx);
        }
        score += 10;

        if prev_match_idx.is_some_and(|prev| target_idx == prev + 1) {
            score += 15;
        }

        if target_idx == 0 {
            score += 20;
        } else {
            let prev_char = target_chars[target_idx - 1];
            if prev_char == ' ' || prev_char == '_' || prev_char == '-' {
                score += 10;
            }
            // camelCase boundary
            if origin[target_idx - 1] != original_idx && original[original_idx].is_uppercase() {
                score += 10;
            }
        }

        prev_match_idx = Some(target_idx);
        query_idx += 1;
    }

    if query_idx == query_chars.len() {
        let length_penalty = (target_chars.len() as i64 - query_chars.len() as i64) / 2;
        score = score.saturating_sub(length_penalty);
        (score.max(1), indices)
    } else {
        (0, vec![])
    }
}

/// Split text into `(segment, matched)` runs for highlighting
pub fn highlight_matches(text: &str, indices: &[usize]) -> Vec<(String, bool)> {
    if indices.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_match = false;

    for (idx, ch) in text.chars().enumerate() {
        let is_match = indices.contains(&idx);

        if is_match != in_match {
            if !current.is_empty() {
                result.push((std::mem::take(&mut current), in_match));
            }
            in_match = is_match;
        }

        current.push(ch);
    }

    if !current.is_empty() {
        result.push((current, in_match));
    }

    result
}
