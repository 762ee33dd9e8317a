//! Static quick-win recommendation table.

use once_cell::sync::Lazy;

use crate::types::Recommendation;

static QUICK_WINS: Lazy<[Recommendation; 5]> = Lazy::new(|| {
    [
        Recommendation {
            action: "Create a Wikidata entity record".to_string(),
            impact: "High".to_string(),
            effort: "Low".to_string(),
            details: "AI assistants resolve brands through knowledge graphs; \
                      a Wikidata item with official links anchors the brand as \
                      a recognized entity."
                .to_string(),
        },
        Recommendation {
            action: "Claim and complete the Google Business Profile".to_string(),
            impact: "High".to_string(),
            effort: "Low".to_string(),
            details: "A verified listing with categories, hours, and photos \
                      feeds the local-knowledge sources assistants cite for \
                      'near me' and brand queries."
                .to_string(),
        },
        Recommendation {
            action: "Add schema.org markup to key pages".to_string(),
            impact: "Medium".to_string(),
            effort: "Medium".to_string(),
            details: "Organization, Product, and FAQ markup gives crawlers an \
                      unambiguous machine-readable description of what the \
                      brand offers."
                .to_string(),
        },
        Recommendation {
            action: "Publish comparison content".to_string(),
            impact: "High".to_string(),
            effort: "Medium".to_string(),
            details: "'X vs Y' and 'best tools for' pages are what assistants \
                      retrieve when users ask for alternatives; owning the \
                      comparison keeps the brand in the answer."
                .to_string(),
        },
        Recommendation {
            action: "Refresh content older than twelve months".to_string(),
            impact: "Medium".to_string(),
            effort: "Medium".to_string(),
            details: "Assistants prefer recently updated sources; revising \
                      dates, statistics, and examples on core pages restores \
                      the freshness signal."
                .to_string(),
        },
    ]
});

/// The five pre-authored quick wins, identical across calls.
pub fn quick_wins() -> &'static [Recommendation] {
    QUICK_WINS.as_slice()
}
