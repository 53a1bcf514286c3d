//! Levenshtein edit distance.
//!
//! Distances are computed over Unicode scalar values (`char`s), not bytes, so
//! a single accented letter counts as one edit.  Comparison is case-sensitive;
//! callers lowercase both sides before asking.

/// Minimum number of single-character insertions, deletions or substitutions
/// needed to turn `a` into `b`.
///
/// Uses the full `(n + 1) x (m + 1)` dynamic-programming table where cell
/// `[i][j]` holds the distance between the first `i` chars of `b` and the
/// first `j` chars of `a`.
///
/// # Example
/// ```rust
/// use lalbot::spell::levenshtein;
///
/// assert_eq!(levenshtein("sofware", "software"), 1);
/// assert_eq!(levenshtein("", "web"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        table[0][j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            table[i][j] = if b[i - 1] == a[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j - 1]
                    .min(table[i][j - 1])
                    .min(table[i - 1][j])
            };
        }
    }

    table[n][m]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
