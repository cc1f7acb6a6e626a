//! Answer accuracy scoring.
//!
//! Uses the sequence-similarity ratio (Ratcliff/Obershelp, the algorithm
//! behind Python's `difflib.SequenceMatcher.ratio()`): `2 * M / T`, where M
//! is the total length of matching blocks found by recursively taking the
//! longest common substring, and T is the sum of both string lengths. An
//! earlier positional-comparison variant gave materially different scores
//! for shifted text and was dropped.

/// Percentage match between the correct answer and the user's answer,
/// case-insensitive, in `[0.0, 100.0]`. Two empty strings count as a
/// perfect match.
pub fn calculate_accuracy(correct_answer: &str, user_input: &str) -> f64 {
    sequence_ratio(&correct_answer.to_lowercase(), &user_input.to_lowercase()) * 100.0
}

/// Similarity ratio in `[0.0, 1.0]` over the raw character sequences.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Total length of matching blocks: the longest common substring, plus
/// whatever matches recursively to its left and right.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let (start_a, start_b, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..start_a], &b[..start_b])
        + matching_chars(&a[start_a + len..], &b[start_b + len..])
}

/// Longest common contiguous block of `a` and `b` as
/// `(start_in_a, start_in_b, length)`. Ties resolve to the earliest start in
/// `a`, then in `b`, matching difflib's `find_longest_match`.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        let mut row = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                row[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = row;
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_100() {
        assert_eq!(calculate_accuracy("kot", "kot"), 100.0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(calculate_accuracy("Kot", "kOT"), 100.0);
    }

    #[test]
    fn test_no_common_block_is_0() {
        // "kot" vs "pies" share no character: 2*0/7.
        assert_eq!(calculate_accuracy("kot", "pies"), 0.0);
    }

    #[test]
    fn test_shifted_text_scores_on_common_blocks() {
        // Longest block "bcd" (3 chars), nothing left over: 2*3/8 = 0.75.
        assert_eq!(calculate_accuracy("abcd", "bcde"), 75.0);
    }

    #[test]
    fn test_recursive_matching_outside_longest_block() {
        // "abcxdef" vs "abcydef": "abc" is one block, "def" matches to its
        // right: 2*6/14.
        let score = calculate_accuracy("abcxdef", "abcydef");
        assert!((score - 2.0 * 6.0 / 14.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_match_strictly_between_bounds() {
        let score = calculate_accuracy("kot", "kos");
        assert!(score > 0.0 && score < 100.0);
        // difflib: matching "ko", 2*2/6.
        assert!((score - 2.0 * 2.0 / 6.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_both_empty_is_100() {
        assert_eq!(calculate_accuracy("", ""), 100.0);
    }

    #[test]
    fn test_one_empty_is_0() {
        assert_eq!(calculate_accuracy("kot", ""), 0.0);
        assert_eq!(calculate_accuracy("", "kot"), 0.0);
    }

    #[test]
    fn test_multibyte_input() {
        assert_eq!(calculate_accuracy("żółw", "żółw"), 100.0);
        let score = calculate_accuracy("żółw", "żólw");
        assert!(score > 0.0 && score < 100.0);
    }

    #[test]
    fn test_longest_common_block_prefers_earliest() {
        let a: Vec<char> = "abab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        assert_eq!(longest_common_block(&a, &b), (0, 0, 2));
    }

    #[test]
    fn test_ratio_symmetry_of_matched_length() {
        // M is the same either way, so the ratio is symmetric.
        assert_eq!(
            sequence_ratio("window", "widow"),
            sequence_ratio("widow", "window")
        );
    }
}
