//! Direct edit-distance computation between two strings.
//!
//! The correction engine never computes a distance matrix; this exists to
//! check its answers and to compare against in benchmarks. It uses the
//! space-optimized iterative DP (three rows) over `char`s.

use smallvec::SmallVec;

/// Compute Levenshtein distance with adjacent transpositions.
///
/// Swapping two neighbouring characters counts as one edit (optimal string
/// alignment distance). This is the metric the correction engine bounds at
/// one.
///
/// # Example
///
/// ```rust
/// use autocorrect::distance::transposition_distance;
///
/// assert_eq!(transposition_distance("ab", "ba"), 1);
/// assert_eq!(transposition_distance("act", "cat"), 1);
/// ```
pub fn transposition_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut two_ago = vec![0; n + 1];
    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1)
                .min(curr_row[j - 1] + 1)
                .min(prev_row[j - 1] + cost);

            if i > 1
                && j > 1
                && source_chars[i - 1] == target_chars[j - 2]
                && source_chars[i - 2] == target_chars[j - 1]
            {
                curr_row[j] = curr_row[j].min(two_ago[j - 2] + 1);
            }
        }

        std::mem::swap(&mut two_ago, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}
