//! Reply formatting.
//!
//! Pure presentation: turns a resolved directory key and its expert value
//! into the Slack message text. Display rules are static tables, kept out
//! of the resolver on purpose.

/// Domains rendered fully uppercase instead of title case.
const ALL_CAPS_DOMAINS: &[&str] = &["bav", "vkyc", "ckyc", "poc"];

/// Per-domain punchlines, with a generic fallback for unlisted keys.
const PUNCHLINES: &[(&str, &str)] = &[
    ("wealth_tech", "He knows it all about Wealth Tech! \u{1f4bc}\u{2728}"),
    ("vkyc", "He can handle VKYC in his sleep \u{1f634}\u{2705}"),
    (
        "e_sign",
        "The eSign guru \u{2014} eSigning deals faster than you can blink! \u{1f58b}\u{fe0f}\u{26a1}",
    ),
    (
        "lending",
        "Lending expert who\u{2019}s got your back (and your loan)! \u{1f4b8}\u{1f91d}",
    ),
    (
        "bank_statement_analysis",
        "Reads bank statements like bedtime stories \u{1f4d6}\u{1f4b0}",
    ),
    (
        "gig_economy",
        "Master of the gig hustle and flow \u{1f3a4}\u{1f4bc}",
    ),
    (
        "bav",
        "Verifying accounts faster than a bank teller! \u{1f3e6}\u{26a1}",
    ),
    ("ckyc", "CKYC champ with the Midas touch \u{2728}\u{1f6e0}\u{fe0f}"),
    (
        "poc",
        "Proof of Concept? He\u{2019}s the proof you need! \u{2714}\u{fe0f}\u{1f50d}",
    ),
];

const FALLBACK_PUNCHLINE: &str = "A Subject Matter Expert you can always count on! \u{1f680}";

/// Render a directory key for display: `wealth_tech` -> `Wealth Tech`,
/// acronym domains fully uppercase.
pub fn prettify_domain(domain: &str) -> String {
    if ALL_CAPS_DOMAINS.contains(&domain.to_lowercase().as_str()) {
        return domain.to_uppercase();
    }
    domain
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn punchline(domain: &str) -> &'static str {
    PUNCHLINES
        .iter()
        .find(|(key, _)| *key == domain)
        .map(|(_, line)| *line)
        .unwrap_or(FALLBACK_PUNCHLINE)
}

/// Full Slack reply for a resolved expert.
pub fn build_reply(domain_key: &str, expert: &str) -> String {
    format!(
        ":sparkles: *Subject Matter Expert for* _{}_ :rocket:\n\n\
         *{}*\n\n\
         _{}_\n\n\
         Need help? Just ping them! :speech_balloon:",
        prettify_domain(domain_key),
        expert,
        punchline(domain_key)
    )
}

/// Reply when nothing in the directory matched the query.
pub fn build_no_match_reply(query: &str) -> String {
    format!(
        "\u{1f615} Hmm, I couldn't find a Subject Matter Expert for *{}*. \
         Try another domain or check spelling.",
        query.trim().to_lowercase()
    )
}

/// Prompt shown when the slash command arrives with no text.
pub const EMPTY_QUERY_PROMPT: &str = "Please provide a domain name.";

/// Generic message for internal failures (unreadable directory, etc.).
/// Never exposes the underlying cause.
pub const INTERNAL_ERROR_REPLY: &str =
    "Something went wrong looking that up. Please try again later.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prettify_title_cases_underscores() {
        assert_eq!(prettify_domain("wealth_tech"), "Wealth Tech");
        assert_eq!(prettify_domain("bank_statement_analysis"), "Bank Statement Analysis");
        assert_eq!(prettify_domain("lending"), "Lending");
    }

    #[test]
    fn test_prettify_acronyms_all_caps() {
        assert_eq!(prettify_domain("bav"), "BAV");
        assert_eq!(prettify_domain("vkyc"), "VKYC");
        assert_eq!(prettify_domain("ckyc"), "CKYC");
        assert_eq!(prettify_domain("poc"), "POC");
    }

    #[test]
    fn test_punchline_fallback() {
        assert_eq!(punchline("some_new_domain"), FALLBACK_PUNCHLINE);
        assert_ne!(punchline("lending"), FALLBACK_PUNCHLINE);
    }

    #[test]
    fn test_build_reply_contains_parts() {
        let reply = build_reply("wealth_tech", "Priya Sharma");
        assert!(reply.contains("Wealth Tech"));
        assert!(reply.contains("Priya Sharma"));
        assert!(reply.contains("Subject Matter Expert"));
    }

    #[test]
    fn test_no_match_reply_echoes_normalized_query() {
        let reply = build_no_match_reply("  Quantum Ledgers  ");
        assert!(reply.contains("*quantum ledgers*"));
    }
}
