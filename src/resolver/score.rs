//! Fuzzy similarity scoring.
//!
//! Scores a query against a candidate with an infix Damerau-Levenshtein
//! distance: the minimum number of single-character insertions, deletions,
//! substitutions, and adjacent transpositions needed to turn the query into
//! *any substring* of the candidate. Leading and trailing candidate
//! characters are skipped for free, so where the match sits inside the
//! candidate does not affect the score.
//!
//! The distance is normalized by query length into [0, 1]:
//! 0.0 is an exact (sub)match, 1.0 is no similarity. Plain integer DP over
//! chars, no randomness, so identical inputs always produce identical
//! scores.

/// Score `query` against `candidate`. Both are compared as-is; callers
/// normalize case beforehand. Lower is better.
pub fn infix_damerau_score(query: &str, candidate: &str) -> f64 {
    let q: Vec<char> = query.chars().collect();
    let c: Vec<char> = candidate.chars().collect();

    // Empty query is guarded upstream; treat it as a trivial match so the
    // function stays total.
    if q.is_empty() {
        return 0.0;
    }
    if c.is_empty() {
        return 1.0;
    }

    let n = c.len();

    // dp[i][j] = cheapest edit of q[..i] into a substring of c ending at j.
    // Row 0 is all zeros: the matched substring may start anywhere.
    // Rolling three rows; the i-2 row is needed for transpositions.
    let mut prev2: Vec<usize> = vec![0; n + 1];
    let mut prev: Vec<usize> = vec![0; n + 1];

    for i in 1..=q.len() {
        let mut curr = vec![0usize; n + 1];
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(q[i - 1] != c[j - 1]);
            let mut d = (prev[j] + 1) // drop q[i-1]
                .min(curr[j - 1] + 1) // insert c[j-1]
                .min(prev[j - 1] + cost); // substitute / match
            if i > 1 && j > 1 && q[i - 1] == c[j - 2] && q[i - 2] == c[j - 1] {
                d = d.min(prev2[j - 2] + 1); // transpose
            }
            curr[j] = d;
        }
        prev2 = std::mem::replace(&mut prev, curr);
    }

    // The matched substring may end anywhere (j = 0 covers the empty one)
    let dist = prev.iter().copied().min().unwrap_or(q.len());

    (dist as f64 / q.len() as f64).min(1.0)
}
