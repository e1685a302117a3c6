//! Jobs-to-be-done templates per business profile.
//!
//! Each template is a "When / I want / so I can" statement broken into its
//! components plus the keyword set used for overlap scoring.

use mirror_core::BusinessProfileType;

/// A static JTBD template. `situation` starts with "when", `motivation`
/// with "i want", `expected_outcome` with "so i can" — all lowercase, as
/// they are matched against lowercased trigger text.
#[derive(Debug, Clone, Copy)]
pub struct JtbdTemplate {
    pub id: &'static str,
    pub situation: &'static str,
    pub motivation: &'static str,
    pub expected_outcome: &'static str,
    pub keywords: &'static [&'static str],
}

impl JtbdTemplate {
    /// Render the full "When X, I want Y, so I can Z" statement.
    #[must_use]
    pub fn full_statement(&self) -> String {
        format!(
            "{}, {}, {}",
            self.situation, self.motivation, self.expected_outcome
        )
    }
}

/// Templates for one profile. Total over the enum.
#[must_use]
pub fn jtbd_templates(profile: BusinessProfileType) -> &'static [JtbdTemplate] {
    match profile {
        BusinessProfileType::LocalServiceB2c => &[
            JtbdTemplate {
                id: "local-b2c-emergency",
                situation: "when something breaks at home and i need help fast",
                motivation: "i want a trusted local pro who can come out today",
                expected_outcome: "so i can stop worrying and get back to normal",
                keywords: &["home", "broken", "emergency", "local", "trusted", "today"],
            },
            JtbdTemplate {
                id: "local-b2c-compare-quotes",
                situation: "when i'm comparing quotes from local providers",
                motivation: "i want honest pricing and real reviews",
                expected_outcome: "so i can hire without getting ripped off",
                keywords: &["quotes", "pricing", "reviews", "compare", "hire", "local"],
            },
        ],
        BusinessProfileType::LocalServiceB2b => &[
            JtbdTemplate {
                id: "local-b2b-reliable-vendor",
                situation: "when our current vendor keeps missing scheduled visits",
                motivation: "i want a commercial provider that shows up on contract",
                expected_outcome: "so i can stop fielding complaints from the office",
                keywords: &["vendor", "commercial", "contract", "scheduled", "office", "reliable"],
            },
            JtbdTemplate {
                id: "local-b2b-consolidate-invoices",
                situation: "when invoices from multiple service vendors pile up",
                motivation: "i want one account with consolidated billing",
                expected_outcome: "so i can close the books without chasing paperwork",
                keywords: &["invoices", "billing", "vendors", "consolidated", "account", "paperwork"],
            },
        ],
        BusinessProfileType::RegionalRetailB2c => &[
            JtbdTemplate {
                id: "retail-stock-visibility",
                situation: "when customers ask whether an item is in stock at my store",
                motivation: "i want live inventory visible across locations",
                expected_outcome: "so i can send shoppers to the right store the first time",
                keywords: &["stock", "inventory", "store", "locations", "shoppers", "customers"],
            },
            JtbdTemplate {
                id: "retail-repeat-shoppers",
                situation: "when foot traffic dips between seasons",
                motivation: "i want a loyalty program that brings shoppers back",
                expected_outcome: "so i can smooth out revenue across the year",
                keywords: &["foot traffic", "loyalty", "shoppers", "seasonal", "revenue", "repeat"],
            },
        ],
        BusinessProfileType::NationalSaasB2b => &[
            JtbdTemplate {
                id: "saas-consolidate-tools",
                situation: "when my team is juggling too many disconnected tools",
                motivation: "i want one platform that covers the whole workflow",
                expected_outcome: "so i can stop paying for overlapping subscriptions",
                keywords: &["team", "tools", "platform", "workflow", "subscriptions", "juggling"],
            },
            JtbdTemplate {
                id: "saas-prove-roi",
                situation: "when leadership asks what our software spend returns",
                motivation: "i want reporting that ties usage to outcomes",
                expected_outcome: "so i can defend the renewal without guesswork",
                keywords: &["leadership", "reporting", "roi", "renewal", "spend", "outcomes"],
            },
        ],
        BusinessProfileType::NationalEcommerceB2c => &[
            JtbdTemplate {
                id: "ecom-cart-abandonment",
                situation: "when shoppers abandon carts at checkout",
                motivation: "i want to recover those orders automatically",
                expected_outcome: "so i can grow revenue without more ad spend",
                keywords: &["cart", "checkout", "abandon", "orders", "revenue", "recover"],
            },
            JtbdTemplate {
                id: "ecom-shipping-complaints",
                situation: "when shipping delays trigger support tickets",
                motivation: "i want proactive tracking updates for customers",
                expected_outcome: "so i can keep reviews from tanking",
                keywords: &["shipping", "delays", "tracking", "customers", "reviews", "tickets"],
            },
        ],
        BusinessProfileType::GlobalSaasB2b => &[
            JtbdTemplate {
                id: "global-saas-compliance",
                situation: "when enterprise deals stall on security review",
                motivation: "i want compliance evidence ready before procurement asks",
                expected_outcome: "so i can close international deals faster",
                keywords: &["enterprise", "security", "compliance", "procurement", "deals", "international"],
            },
            JtbdTemplate {
                id: "global-saas-scale",
                situation: "when usage spikes across regions overnight",
                motivation: "i want infrastructure that scales without pages",
                expected_outcome: "so i can keep the sla green in every time zone",
                keywords: &["usage", "regions", "infrastructure", "scale", "sla", "uptime"],
            },
        ],
        BusinessProfileType::GlobalEcommerceB2c => &[
            JtbdTemplate {
                id: "global-ecom-customs",
                situation: "when international orders get stuck in customs",
                motivation: "i want duties and paperwork handled upfront",
                expected_outcome: "so i can promise delivery dates i can keep",
                keywords: &["international", "customs", "duties", "orders", "delivery", "paperwork"],
            },
            JtbdTemplate {
                id: "global-ecom-localized",
                situation: "when shoppers abroad bounce off an english-only checkout",
                motivation: "i want localized pricing and language per market",
                expected_outcome: "so i can convert traffic i already pay for",
                keywords: &["localized", "pricing", "checkout", "market", "convert", "shoppers"],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_has_templates_with_components() {
        for profile in BusinessProfileType::ALL {
            let templates = jtbd_templates(profile);
            assert!(!templates.is_empty(), "{profile}: no templates");
            for t in templates {
                assert!(t.situation.starts_with("when "), "{}: bad situation", t.id);
                assert!(t.motivation.starts_with("i want "), "{}: bad motivation", t.id);
                assert!(
                    t.expected_outcome.starts_with("so i can "),
                    "{}: bad outcome",
                    t.id
                );
                assert!(t.keywords.len() >= 4, "{}: too few keywords", t.id);
            }
        }
    }

    #[test]
    fn template_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for profile in BusinessProfileType::ALL {
            for t in jtbd_templates(profile) {
                assert!(seen.insert(t.id), "duplicate template id: {}", t.id);
            }
        }
    }

    #[test]
    fn full_statement_joins_components() {
        let t = &jtbd_templates(BusinessProfileType::NationalSaasB2b)[0];
        let statement = t.full_statement();
        assert!(statement.contains("juggling too many disconnected tools"));
        assert!(statement.contains("so i can stop paying"));
    }
}
