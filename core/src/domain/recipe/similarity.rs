//! Token-set fuzzy similarity.
//!
//! Both texts are split on whitespace into sorted, de-duplicated token sets.
//! Tokens are compared verbatim, so callers normalise case beforehand.

use std::collections::BTreeSet;

/// Similarity between two texts as an integer in `[0, 100]`, insensitive to
/// token order and duplication.
///
/// Returns `100` as soon as the two sets share a token and one of them is a
/// subset of the other. Otherwise the best of three Indel ratios is taken:
/// the two set differences against each other, and the shared tokens against
/// each side's full set.
pub fn token_set_ratio(left: &str, right: &str) -> u8 {
    let left_tokens: BTreeSet<&str> = left.split_whitespace().collect();
    let right_tokens: BTreeSet<&str> = right.split_whitespace().collect();

    if left_tokens.is_empty() || right_tokens.is_empty() {
        return 0;
    }

    let intersection: Vec<&str> = left_tokens.intersection(&right_tokens).copied().collect();
    let left_only: Vec<&str> = left_tokens.difference(&right_tokens).copied().collect();
    let right_only: Vec<&str> = right_tokens.difference(&left_tokens).copied().collect();

    if !intersection.is_empty() && (left_only.is_empty() || right_only.is_empty()) {
        return 100;
    }

    let left_diff = left_only.join(" ");
    let right_diff = right_only.join(" ");

    let sect_len = char_len(&intersection.join(" "));
    let left_diff_len = char_len(&left_diff);
    let right_diff_len = char_len(&right_diff);

    // one space joins the shared tokens to the differing ones
    let separator = usize::from(sect_len != 0);
    let sect_left_len = sect_len + separator + left_diff_len;
    let sect_right_len = sect_len + separator + right_diff_len;

    let diff_ratio = normalized_ratio(
        indel_distance(&left_diff, &right_diff),
        sect_left_len + sect_right_len,
    );

    if sect_len == 0 {
        return to_score(diff_ratio);
    }

    // "sect" vs "sect + diff" only differs by the appended characters
    let sect_left_ratio = normalized_ratio(separator + left_diff_len, sect_len + sect_left_len);
    let sect_right_ratio = normalized_ratio(separator + right_diff_len, sect_len + sect_right_len);

    to_score(diff_ratio.max(sect_left_ratio).max(sect_right_ratio))
}

/// Insertions plus deletions needed to turn `left` into `right`.
pub fn indel_distance(left: &str, right: &str) -> usize {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();

    left.len() + right.len() - 2 * longest_common_subsequence(&left, &right)
}

fn longest_common_subsequence(left: &[char], right: &[char]) -> usize {
    if left.is_empty() || right.is_empty() {
        return 0;
    }

    let mut previous = vec![0usize; right.len() + 1];
    let mut current = vec![0usize; right.len() + 1];

    for &l in left {
        for (j, &r) in right.iter().enumerate() {
            current[j + 1] = if l == r {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[right.len()]
}

fn normalized_ratio(distance: usize, total_len: usize) -> f64 {
    if total_len == 0 {
        return 100.0;
    }
    100.0 * (1.0 - distance as f64 / total_len as f64)
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn to_score(ratio: f64) -> u8 {
    ratio.round().clamp(0.0, 100.0) as u8
}
