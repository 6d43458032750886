//! Canned reply table and intent → reply resolution.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::router::FALLBACK_INTENT;

const EXPLORE: &str = "Explore Our Blueprint";
const BOOK: &str = "Book Your Discovery Call";

/// A scripted brand reply for one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedEntry {
    pub intent: &'static str,
    pub reply: &'static str,
    pub quick_replies: &'static [&'static str],
}

/// Reply text and quick replies, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReply {
    pub text: String,
    pub quick_replies: Vec<String>,
}

impl From<&CannedEntry> for ResolvedReply {
    fn from(entry: &CannedEntry) -> Self {
        Self {
            text: entry.reply.to_string(),
            quick_replies: entry.quick_replies.iter().map(|q| q.to_string()).collect(),
        }
    }
}

const FALLBACK_ENTRY: CannedEntry = CannedEntry {
    intent: FALLBACK_INTENT,
    reply: "I can help with the Blueprint, the CTA, or mapping quick wins—what’s the challenge you’re trying to solve first?",
    quick_replies: &[EXPLORE, BOOK],
};

const BRAND_ENTRIES: &[CannedEntry] = &[
    CannedEntry {
        intent: "company_name",
        reply: "We’re Selerna Group—helping leaders turn AI confusion into clear, practical execution; what outcome are you hoping AI can drive first?",
        quick_replies: &[EXPLORE, BOOK],
    },
    CannedEntry {
        intent: "established",
        reply: "We were founded in 2023 to bridge strategy and adoption with people-first execution; are you exploring AI for efficiency, growth, or both?",
        quick_replies: &[EXPLORE, BOOK],
    },
    CannedEntry {
        intent: "blueprint",
        reply: "Our AI Strategy Blueprint moves from Discovery Scan to Opportunity Architecture to a clear Transformation Pathway—would a quick example of those stages help?",
        quick_replies: &[BOOK, EXPLORE],
    },
    CannedEntry {
        intent: "cta",
        reply: "The Fractional Chief Transformation Architect aligns AI, data, operations, and people across the C-suite to turn strategy into measurable execution—should I outline how this works alongside your current leaders?",
        quick_replies: &[BOOK],
    },
    CannedEntry {
        intent: "services",
        reply: "We integrate AI strategy with workflow design, data governance, and change management so teams adopt faster and value shows up sooner—where do you feel the biggest bottleneck today?",
        quick_replies: &[EXPLORE, BOOK],
    },
    CannedEntry {
        intent: "why_us",
        reply: "We pair proprietary frameworks with execution-first roadmaps and people-centered change so transformation is practical and measurable—would you like the two or three moves we’d assess first?",
        quick_replies: &[EXPLORE],
    },
    CannedEntry {
        intent: "about_steve",
        reply: "Steve Sellars created the CTA role and the Blueprint; with 30+ years across telecom, healthcare, maritime, and automation he turns complexity into human-centered results—want a 1-minute background or jump to next steps?",
        quick_replies: &[BOOK],
    },
    CannedEntry {
        intent: "testimonials",
        reply: "Leaders highlight our clarity over hype and the shift from slides to execution—shall I share common outcomes teams report in the first 60–90 days?",
        quick_replies: &[EXPLORE],
    },
    CannedEntry {
        intent: "client_journey",
        reply: "Week 1 alignment, Week 4 working blueprint, Month 3 workflow gains, Month 6+ operating advantage—do you want to map what Weeks 1–4 could look like for you?",
        quick_replies: &[BOOK],
    },
    CannedEntry {
        intent: "industries",
        reply: "We bring deep experience across healthcare, telecom, maritime, and automation and apply proven patterns to growth-stage and mid-market teams—what industry are you in so I can tailor examples?",
        quick_replies: &[BOOK],
    },
    CannedEntry {
        intent: "contact",
        reply: "You can reach us at 407-955-9455 or contact@selernagroup.com—would you prefer I set up a quick Discovery Call?",
        quick_replies: &[BOOK],
    },
    CannedEntry {
        intent: "book",
        reply: "Great—let’s schedule a Discovery Call and zero in on your highest-value moves; does this week or next work better?",
        quick_replies: &[BOOK],
    },
    CannedEntry {
        intent: "socials",
        reply: "We share practical insights on Instagram, LinkedIn, and X—would links be helpful or should we focus on your use case?",
        quick_replies: &[EXPLORE],
    },
    CannedEntry {
        intent: "availability",
        reply: "We keep 1:1 engagements limited to protect quality; if your timing’s tight we can prioritize your Discovery Call—what window are you targeting?",
        quick_replies: &[BOOK],
    },
    CannedEntry {
        intent: "pricing",
        reply: "We tailor scope to outcomes and team readiness—shall we start with a short assessment to size effort before we talk numbers?",
        quick_replies: &[BOOK],
    },
];

static BRAND_RESOLVER: LazyLock<ResponseResolver> =
    LazyLock::new(|| ResponseResolver::new(BRAND_ENTRIES, FALLBACK_ENTRY));

/// Looks up canned replies by intent name, substituting the fallback entry
/// for unknown names.
#[derive(Debug, Clone)]
pub struct ResponseResolver {
    entries: HashMap<&'static str, CannedEntry>,
    fallback: CannedEntry,
}

impl ResponseResolver {
    /// Build a resolver. The fallback entry is held separately so it always
    /// exists, even if `entries` also carries a `fallback` key.
    pub fn new(entries: &[CannedEntry], fallback: CannedEntry) -> Self {
        let entries = entries
            .iter()
            .map(|entry| (entry.intent, entry.clone()))
            .collect();
        Self { entries, fallback }
    }

    /// The process-wide Selerna brand table.
    pub fn brand() -> &'static ResponseResolver {
        &BRAND_RESOLVER
    }

    /// Resolve an intent name to a reply and quick replies.
    pub fn resolve(&self, intent: &str) -> ResolvedReply {
        self.entry(intent).into()
    }

    /// The entry for `intent`, or the fallback entry.
    pub fn entry(&self, intent: &str) -> &CannedEntry {
        if intent == FALLBACK_INTENT {
            return &self.fallback;
        }
        self.entries.get(intent).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &CannedEntry {
        &self.fallback
    }

    pub fn contains(&self, intent: &str) -> bool {
        intent == FALLBACK_INTENT || self.entries.contains_key(intent)
    }
}
