//! Ordered regex intent router.
//!
//! Classifies free text into one brand intent. Rules are evaluated in
//! declaration order and the first match wins, so narrow intents must be
//! declared ahead of broad ones.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Intent name returned when no rule matches.
pub const FALLBACK_INTENT: &str = "fallback";

// =============================================================================
// Rule table
// =============================================================================

/// Brand routing rules, most specific first.
const BRAND_RULES: &[(&str, &str)] = &[
    (
        "company_name",
        r"\b(what('?s)?\s*(your|the)\s*company\s*name|who\s*are\s*you|selerna\s*group)\b",
    ),
    (
        "established",
        r"\b(when|what\s*year)\s*(were\s*you\s*)?(founded|established|start(ed)?)\b",
    ),
    (
        "blueprint",
        r"\b(blueprint|discovery\s*scan|opportunity\s*architecture|transformation\s*pathway|stage\s*[123])\b",
    ),
    (
        "cta",
        r"\b(CTA|chief\s*transformation\s*architect|fractional\s*chief|transformation\s*architect)\b",
    ),
    (
        "services",
        r"\b(services?|offer|what\s*do\s*you\s*do|how\s*you\s*help|capabilit(y|ies))\b",
    ),
    (
        "why_us",
        r"\b(why\s*(choose|selerna)|what\s*makes.*different|differentiator|value)\b",
    ),
    ("about_steve", r"\b(steve\s+sellars|who\s*is\s*steve|founder)\b"),
    ("testimonials", r"\b(testimonial|what\s*clients\s*say|reviews?)\b"),
    (
        "client_journey",
        r"\b(client\s*journey|week\s*1|month\s*3|month\s*6|\bjourney\b)\b",
    ),
    (
        "industries",
        r"\b(healthcare|telecom|maritime|automation|industry|industries)\b",
    ),
    ("contact", r"\b(contact|email|phone|reach|call\s+you)\b"),
    (
        "book",
        r"\b(book|schedule|discovery\s*call|consult|talk\s*to\s*(you|steve)|meet)\b",
    ),
    ("socials", r"\b(instagram|linkedin|twitter|x)\b"),
    ("availability", r"\b(availability|limited|waitlist|slots?)\b"),
    ("pricing", r"\b(price|pricing|cost|rates?)\b"),
];

static BRAND_ROUTER: LazyLock<IntentRouter> = LazyLock::new(|| {
    IntentRouter::from_patterns(BRAND_RULES).expect("Invalid brand intent regex")
});

// =============================================================================
// IntentRule / IntentRouter
// =============================================================================

/// A named, compiled, case-insensitive pattern.
#[derive(Debug, Clone)]
pub struct IntentRule {
    pub name: &'static str,
    pub pattern: Regex,
}

impl IntentRule {
    /// Compile a rule. Patterns are matched case-insensitively anywhere in
    /// the text.
    pub fn new(name: &'static str, pattern: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { name, pattern })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// First-match-wins router over an ordered rule list.
#[derive(Debug, Clone)]
pub struct IntentRouter {
    rules: Vec<IntentRule>,
}

impl IntentRouter {
    /// Build a router from rules in precedence order.
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    /// Compile `(name, pattern)` pairs, preserving their order.
    pub fn from_patterns(patterns: &[(&'static str, &str)]) -> Result<Self, regex::Error> {
        let rules = patterns
            .iter()
            .map(|(name, pattern)| IntentRule::new(name, pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules))
    }

    /// The process-wide Selerna brand router.
    pub fn brand() -> &'static IntentRouter {
        &BRAND_ROUTER
    }

    /// Classify `text` into an intent name.
    ///
    /// Returns the name of the first rule that matches, or
    /// [`FALLBACK_INTENT`]. Never fails.
    pub fn classify(&self, text: &str) -> &'static str {
        let normalized = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.name)
            .unwrap_or(FALLBACK_INTENT)
    }

    /// Rule names in precedence order.
    pub fn intent_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> &'static IntentRouter {
        IntentRouter::brand()
    }

    #[test]
    fn test_brand_router_rule_order() {
        let names: Vec<_> = router().intent_names().collect();
        assert_eq!(
            names,
            vec![
                "company_name",
                "established",
                "blueprint",
                "cta",
                "services",
                "why_us",
                "about_steve",
                "testimonials",
                "client_journey",
                "industries",
                "contact",
                "book",
                "socials",
                "availability",
                "pricing",
            ]
        );
    }

    #[test]
    fn test_classify_each_intent() {
        let cases = [
            ("What's your company name?", "company_name"),
            ("who are you", "company_name"),
            ("When were you founded?", "established"),
            ("what year started", "established"),
            ("Tell me about the Discovery Scan", "blueprint"),
            ("what happens in stage 2", "blueprint"),
            ("What is a fractional chief?", "cta"),
            ("Explain the CTA role", "cta"),
            ("What services do you offer?", "services"),
            ("why choose you", "why_us"),
            ("what makes you different", "why_us"),
            ("Who is Steve?", "about_steve"),
            ("Tell me about the founder", "about_steve"),
            ("Any reviews?", "testimonials"),
            ("What does the client journey look like?", "client_journey"),
            ("Do you work in healthcare?", "industries"),
            ("How do I contact you", "contact"),
            ("can I book a session", "book"),
            ("I'd like to meet", "book"),
            ("Are you on instagram", "socials"),
            ("Is there a waitlist?", "availability"),
            ("How much does it cost?", "pricing"),
        ];
        for (text, expected) in cases {
            assert_eq!(router().classify(text), expected, "text: {:?}", text);
        }
    }

    #[test]
    fn test_narrow_rule_beats_broad_rule() {
        // Matches both company_name and services; declaration order decides.
        let text = "What services does Selerna Group offer?";
        assert_eq!(router().classify(text), "company_name");
    }

    #[test]
    fn test_earlier_rule_wins_over_later() {
        // "blueprint" (rule 3) and "pricing" (rule 15) both match.
        assert_eq!(router().classify("blueprint pricing"), "blueprint");
        // "email" (contact) precedes "schedule" (book).
        assert_eq!(router().classify("email me to schedule"), "contact");
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(router().classify("SELERNA GROUP"), "company_name");
        assert_eq!(router().classify("PrIcInG"), "pricing");
        assert_eq!(router().classify("what is the cta"), "cta");
    }

    #[test]
    fn test_word_boundaries_are_respected() {
        // "x" only matches as a standalone word.
        assert_eq!(router().classify("xylophone"), FALLBACK_INTENT);
        assert_eq!(router().classify("are you on x"), "socials");
        // "offering" does not contain the word "offer".
        assert_eq!(router().classify("offering"), FALLBACK_INTENT);
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        assert_eq!(router().classify("hello there"), FALLBACK_INTENT);
        assert_eq!(router().classify("¿qué tal?"), FALLBACK_INTENT);
    }

    #[test]
    fn test_empty_text_falls_back() {
        assert_eq!(router().classify(""), FALLBACK_INTENT);
        assert_eq!(router().classify("   \t\n"), FALLBACK_INTENT);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let text = "Can I talk to Steve about pricing?";
        let first = router().classify(text);
        for _ in 0..10 {
            assert_eq!(router().classify(text), first);
        }
        assert_eq!(first, "book");
    }

    #[test]
    fn test_custom_router_preserves_order() {
        let router =
            IntentRouter::from_patterns(&[("narrow", r"\bred apple\b"), ("broad", r"\bapple\b")])
                .unwrap();
        assert_eq!(router.classify("a red apple"), "narrow");
        assert_eq!(router.classify("an apple"), "broad");
        assert_eq!(router.len(), 2);

        let reversed =
            IntentRouter::from_patterns(&[("broad", r"\bapple\b"), ("narrow", r"\bred apple\b")])
                .unwrap();
        assert_eq!(reversed.classify("a red apple"), "broad");
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let result = IntentRouter::from_patterns(&[("bad", r"(unclosed")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_router_always_falls_back() {
        let router = IntentRouter::new(Vec::new());
        assert!(router.is_empty());
        assert_eq!(router.classify("pricing"), FALLBACK_INTENT);
    }
}
