//! Approximate query resolution.
//!
//! Matches a free-text query against the directory's key set and picks the
//! closest key under a similarity threshold. Stateless per call: the
//! candidate list is supplied fresh by the caller each time, so the lookup
//! always reflects the directory at call time.

pub mod score;

use serde::Serialize;

pub use score::infix_damerau_score;

/// Default similarity cutoff; candidates scoring above it are discarded.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Best match for a query. `score` is in [0, 1], lower is better.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub key: String,
    pub score: f64,
}

/// Resolve `query` to the closest candidate.
///
/// The query is trimmed and lowercased; candidates are compared
/// case-insensitively as whole strings, in the order given. Returns `None`
/// when nothing scores at or under `threshold` -- a normal outcome, not an
/// error. Ties on score go to the candidate listed first.
///
/// Empty-after-trim queries are the caller's responsibility to guard; they
/// would trivially match the first candidate.
pub fn resolve(query: &str, candidates: &[String], threshold: f64) -> Option<MatchResult> {
    let normalized = query.trim().to_lowercase();

    let mut best: Option<MatchResult> = None;
    for key in candidates {
        let score = infix_damerau_score(&normalized, &key.to_lowercase());
        if score > threshold {
            continue;
        }
        // Strict improvement only: on a tie the earlier candidate stays
        let improves = match &best {
            Some(b) => score < b.score,
            None => true,
        };
        if improves {
            best = Some(MatchResult {
                key: key.clone(),
                score,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_space_for_underscore() {
        let keys = candidates(&["wealth_tech", "lending", "bav"]);
        let result = resolve("wealth tech", &keys, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(result.key, "wealth_tech");
        assert!(result.score <= DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_resolve_exact_key() {
        let keys = candidates(&["wealth_tech", "lending", "bav"]);
        let result = resolve("lending", &keys, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(result.key, "lending");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_resolve_trims_and_lowercases() {
        let keys = candidates(&["lending"]);
        let result = resolve("  LENDING  ", &keys, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(result.key, "lending");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_resolve_typo() {
        let keys = candidates(&["wealth_tech", "lending", "gig_economy"]);
        let result = resolve("gig econmy", &keys, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(result.key, "gig_economy");
    }

    #[test]
    fn test_resolve_no_match() {
        let keys = candidates(&["wealth_tech", "lending", "bav"]);
        assert!(resolve("xyz_not_a_real_domain", &keys, DEFAULT_THRESHOLD).is_none());
    }

    #[test]
    fn test_resolve_empty_candidates() {
        assert!(resolve("lending", &[], DEFAULT_THRESHOLD).is_none());
    }

    #[test]
    fn test_resolve_threshold_is_inclusive() {
        // "abcd" vs "abce": distance 1 over 4 chars = 0.25 exactly
        let keys = candidates(&["abce"]);
        assert!(resolve("abcd", &keys, 0.25).is_some());
        assert!(resolve("abcd", &keys, 0.24).is_none());
    }

    #[test]
    fn test_resolve_tie_break_prefers_first_listed() {
        // "abd" and "abe" are both one substitution from "abc"
        let keys = candidates(&["abd", "abe"]);
        for _ in 0..20 {
            let result = resolve("abc", &keys, DEFAULT_THRESHOLD).unwrap();
            assert_eq!(result.key, "abd");
        }
        // Reversing the input order flips the winner
        let keys = candidates(&["abe", "abd"]);
        for _ in 0..20 {
            let result = resolve("abc", &keys, DEFAULT_THRESHOLD).unwrap();
            assert_eq!(result.key, "abe");
        }
    }

    #[test]
    fn test_resolve_deterministic() {
        let keys = candidates(&["wealth_tech", "lending", "bav", "vkyc", "gig_economy"]);
        let first = resolve("welth tech", &keys, DEFAULT_THRESHOLD);
        for _ in 0..20 {
            assert_eq!(resolve("welth tech", &keys, DEFAULT_THRESHOLD), first);
        }
    }

    #[test]
    fn test_resolve_picks_lowest_score() {
        // "ckyc" survives the cutoff at 0.25 but "vkyc" is exact; the lower
        // score must win even though it is listed later
        let keys = candidates(&["ckyc", "vkyc"]);
        let result = resolve("vkyc", &keys, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(result.key, "vkyc");
        assert_eq!(result.score, 0.0);
    }
}
