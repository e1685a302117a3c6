//! Business-profile detection from UVP and brand text.
//!
//! Scans the combined free-text corpus against the scope, customer-type,
//! offering-type, and industry tables, then resolves the profile through an
//! ordered rule list. Absent fields contribute no text; an empty corpus
//! falls through every default branch to `local-service-b2c` at 0.5
//! confidence.

use mirror_core::{
    BrandData, BusinessProfileAnalysis, BusinessProfileType, CustomerType, OfferingType, Scope,
    UvpData,
};
use mirror_patterns::{customer, industry, offering, scope as scope_tables};
use regex::Regex;

use crate::keywords::KeywordSet;

/// Compiled profile detector. Build once, reuse across calls.
pub struct ProfileDetector {
    local: KeywordSet,
    regional: KeywordSet,
    national: KeywordSet,
    global: KeywordSet,
    b2b: KeywordSet,
    b2c: KeywordSet,
    saas: KeywordSet,
    service: KeywordSet,
    product: KeywordSet,
    industry_rules: Vec<(industry::IndustryRule, Vec<Regex>)>,
}

impl ProfileDetector {
    #[must_use]
    pub fn new() -> Self {
        let industry_rules = industry::INDUSTRY_RULES
            .iter()
            .map(|rule| {
                let regexes = rule
                    .keywords
                    .iter()
                    .map(|kw| {
                        Regex::new(&format!(r"\b{}\b", regex::escape(kw)))
                            .expect("valid industry keyword regex")
                    })
                    .collect();
                (*rule, regexes)
            })
            .collect();

        Self {
            local: KeywordSet::compile(scope_tables::LOCAL_INDICATORS),
            regional: KeywordSet::compile(scope_tables::REGIONAL_INDICATORS),
            national: KeywordSet::compile(scope_tables::NATIONAL_INDICATORS),
            global: KeywordSet::compile(scope_tables::GLOBAL_INDICATORS),
            b2b: KeywordSet::compile(customer::B2B_INDICATORS),
            b2c: KeywordSet::compile(customer::B2C_INDICATORS),
            saas: KeywordSet::compile(offering::SAAS_INDICATORS),
            service: KeywordSet::compile(offering::SERVICE_INDICATORS),
            product: KeywordSet::compile(offering::PRODUCT_INDICATORS),
            industry_rules,
        }
    }

    /// Detect the business profile for a UVP (plus optional brand metadata).
    ///
    /// Never fails: missing fields simply shrink the corpus and push the
    /// result toward the default branches.
    #[must_use]
    pub fn detect(&self, uvp: &UvpData, brand: Option<&BrandData>) -> BusinessProfileAnalysis {
        let corpus = uvp.corpus(brand);
        let mut signals: Vec<String> = Vec::new();
        let mut signal_count = 0usize;

        let scope = self.resolve_scope(uvp, &corpus, &mut signals, &mut signal_count);
        let customer_type = self.resolve_customer(uvp, &corpus, &mut signals, &mut signal_count);
        let offering_type = self.resolve_offering(&corpus, &mut signals, &mut signal_count);
        let industry_override = self.industry_override(&corpus, &mut signals, &mut signal_count);

        let (profile_type, rule) =
            resolve_profile(scope, customer_type, offering_type, industry_override);
        signals.push(format!("resolved via rule '{rule}'"));

        let confidence = confidence_for(signal_count);
        tracing::debug!(
            profile = %profile_type,
            %scope,
            customer = %customer_type,
            offering = %offering_type,
            signal_count,
            confidence,
            "detected business profile"
        );

        BusinessProfileAnalysis {
            profile_type,
            confidence,
            scope,
            customer_type,
            offering_type,
            signals,
        }
    }

    fn resolve_scope(
        &self,
        uvp: &UvpData,
        corpus: &str,
        signals: &mut Vec<String>,
        signal_count: &mut usize,
    ) -> Scope {
        // An explicit declaration always wins over keyword counting.
        if let Some(explicit) = uvp.market_geography.as_ref().and_then(|g| g.scope) {
            signals.push(format!("explicit market geography scope: {explicit}"));
            *signal_count += 3;
            return explicit;
        }

        let local = self.local.matches(corpus);
        let regional = self.regional.matches(corpus);
        let national = self.national.matches(corpus);
        let global = self.global.matches(corpus);
        *signal_count += local.len() + regional.len() + national.len() + global.len();

        // One strong international token is definitionally global and must
        // not be outvoted by national volume.
        if !global.is_empty() && global.len() >= national.len() {
            signals.push(format!("global scope from indicators: {global:?}"));
            return Scope::Global;
        }

        let tiers = [
            (Scope::Local, local),
            (Scope::Regional, regional),
            (Scope::National, national),
            (Scope::Global, global),
        ];
        let top = tiers.iter().map(|(_, m)| m.len()).max().unwrap_or(0);
        if top == 0 {
            signals.push("no scope indicators; defaulting to local".to_string());
            return Scope::Local;
        }

        // The tier with the most indicators wins outright; a shared top
        // count is ambiguous and falls back to local.
        let mut winner: Option<(Scope, &Vec<&'static str>)> = None;
        let mut leaders = 0usize;
        for (scope, matched) in &tiers {
            if matched.len() == top {
                leaders += 1;
                winner = Some((*scope, matched));
            }
        }
        match winner {
            Some((scope, matched)) if leaders == 1 => {
                signals.push(format!("{scope} scope from indicators: {matched:?}"));
                scope
            }
            _ => {
                signals.push(format!(
                    "scope tie at {top} indicator(s); defaulting to local"
                ));
                Scope::Local
            }
        }
    }

    fn resolve_customer(
        &self,
        uvp: &UvpData,
        corpus: &str,
        signals: &mut Vec<String>,
        signal_count: &mut usize,
    ) -> CustomerType {
        let b2b_matches = self.b2b.matches(corpus);
        let b2c_matches = self.b2c.matches(corpus);
        let mut b2b_score = b2b_matches.len();
        let mut b2c_score = b2c_matches.len();
        *signal_count += b2b_score + b2c_score;

        if let Some(target) = uvp.target_customer.as_deref() {
            let target = target.to_lowercase();
            if customer::B2B_EXPLICIT.iter().any(|m| target.contains(m)) {
                b2b_score += customer::EXPLICIT_BIAS;
                *signal_count += 1;
                signals.push("target customer explicitly names businesses".to_string());
            }
            if customer::B2C_EXPLICIT.iter().any(|m| target.contains(m)) {
                b2c_score += customer::EXPLICIT_BIAS;
                *signal_count += 1;
                signals.push("target customer explicitly names consumers".to_string());
            }
        }

        let customer = if b2b_score > b2c_score + 2 {
            CustomerType::B2b
        } else if b2c_score > b2b_score + 2 {
            CustomerType::B2c
        } else if b2b_score > 0 && b2c_score > 0 {
            CustomerType::B2b2c
        } else {
            CustomerType::B2c
        };

        signals.push(format!(
            "customer type {customer} (b2b {b2b_score} vs b2c {b2c_score}; \
             b2b {b2b_matches:?}, b2c {b2c_matches:?})"
        ));
        customer
    }

    fn resolve_offering(
        &self,
        corpus: &str,
        signals: &mut Vec<String>,
        signal_count: &mut usize,
    ) -> OfferingType {
        let saas = self.saas.matches(corpus);
        let service = self.service.matches(corpus);
        let product = self.product.matches(corpus);
        *signal_count += saas.len() + service.len() + product.len();

        let mut best = (OfferingType::Service, service.len());
        if saas.len() > best.1 {
            best = (OfferingType::Saas, saas.len());
        }
        if product.len() > best.1 {
            best = (OfferingType::Product, product.len());
        }

        signals.push(format!(
            "offering type {} (saas {}, service {}, product {})",
            best.0,
            saas.len(),
            service.len(),
            product.len()
        ));
        best.0
    }

    fn industry_override(
        &self,
        corpus: &str,
        signals: &mut Vec<String>,
        signal_count: &mut usize,
    ) -> Option<BusinessProfileType> {
        let mut best: Option<(BusinessProfileType, usize)> = None;
        for (rule, regexes) in &self.industry_rules {
            let hits = regexes.iter().filter(|re| re.is_match(corpus)).count();
            if hits >= rule.min_hits && best.is_none_or(|(_, b)| hits > b) {
                best = Some((rule.profile, hits));
            }
        }

        if let Some((profile, hits)) = best {
            *signal_count += hits;
            signals.push(format!(
                "industry override: {hits} keyword hit(s) for {profile}"
            ));
            return Some(profile);
        }
        None
    }
}

impl Default for ProfileDetector {
    fn default() -> Self {
        Self::new()
    }
}

struct ResolutionContext {
    scope: Scope,
    customer: CustomerType,
    offering: OfferingType,
    industry_override: Option<BusinessProfileType>,
}

struct ResolutionRule {
    name: &'static str,
    apply: fn(&ResolutionContext) -> Option<BusinessProfileType>,
}

/// Ordered resolution rules. Evaluated top to bottom; the first rule that
/// returns a profile wins, which keeps precedence visible and testable.
const RESOLUTION_RULES: &[ResolutionRule] = &[
    ResolutionRule {
        name: "industry-override",
        apply: |ctx| ctx.industry_override,
    },
    ResolutionRule {
        name: "global-saas-b2b",
        apply: |ctx| {
            (ctx.scope == Scope::Global
                && ctx.offering == OfferingType::Saas
                && ctx.customer == CustomerType::B2b)
                .then_some(BusinessProfileType::GlobalSaasB2b)
        },
    },
    ResolutionRule {
        name: "global-b2b",
        apply: |ctx| {
            (ctx.scope == Scope::Global && ctx.customer == CustomerType::B2b)
                .then_some(BusinessProfileType::GlobalSaasB2b)
        },
    },
    ResolutionRule {
        name: "global-consumer",
        apply: |ctx| {
            (ctx.scope == Scope::Global).then_some(BusinessProfileType::GlobalEcommerceB2c)
        },
    },
    ResolutionRule {
        name: "saas-b2b-non-global",
        apply: |ctx| {
            (ctx.offering == OfferingType::Saas && ctx.customer == CustomerType::B2b)
                .then_some(BusinessProfileType::NationalSaasB2b)
        },
    },
    ResolutionRule {
        name: "scope-fallback",
        apply: |ctx| {
            let profile = match (ctx.scope, ctx.customer) {
                (Scope::Local, CustomerType::B2b) => BusinessProfileType::LocalServiceB2b,
                (Scope::Local, _) => BusinessProfileType::LocalServiceB2c,
                (Scope::Regional, CustomerType::B2b) => BusinessProfileType::LocalServiceB2b,
                (Scope::Regional, _) => BusinessProfileType::RegionalRetailB2c,
                (Scope::National, CustomerType::B2b) => BusinessProfileType::NationalSaasB2b,
                (Scope::National, _) => BusinessProfileType::NationalEcommerceB2c,
                (Scope::Global, CustomerType::B2b) => BusinessProfileType::GlobalSaasB2b,
                (Scope::Global, _) => BusinessProfileType::GlobalEcommerceB2c,
            };
            Some(profile)
        },
    },
];

/// Resolve the final profile from the per-axis results. Returns the chosen
/// profile and the name of the rule that decided it.
fn resolve_profile(
    scope: Scope,
    customer: CustomerType,
    offering: OfferingType,
    industry_override: Option<BusinessProfileType>,
) -> (BusinessProfileType, &'static str) {
    let ctx = ResolutionContext {
        scope,
        customer,
        offering,
        industry_override,
    };
    for rule in RESOLUTION_RULES {
        if let Some(profile) = (rule.apply)(&ctx) {
            return (profile, rule.name);
        }
    }
    (BusinessProfileType::LocalServiceB2c, "default")
}

/// Step function mapping collected signal count to confidence.
fn confidence_for(signal_count: usize) -> f32 {
    match signal_count {
        n if n >= 8 => 0.95,
        n if n >= 6 => 0.85,
        n if n >= 4 => 0.75,
        n if n >= 2 => 0.65,
        _ => 0.5,
    }
}

#[cfg(test)]
mod tests {
    use mirror_core::MarketGeography;

    use super::*;

    fn detector() -> ProfileDetector {
        ProfileDetector::new()
    }

    #[test]
    fn empty_input_defaults_to_local_service_b2c() {
        let analysis = detector().detect(&UvpData::default(), None);
        assert_eq!(analysis.profile_type, BusinessProfileType::LocalServiceB2c);
        assert!(analysis.confidence <= 0.5);
        assert_eq!(analysis.scope, Scope::Local);
        assert_eq!(analysis.customer_type, CustomerType::B2c);
        assert_eq!(analysis.offering_type, OfferingType::Service);
    }

    #[test]
    fn single_international_city_forces_global_scope() {
        let uvp = UvpData {
            target_customer: Some("teams in London".to_string()),
            ..UvpData::default()
        };
        let analysis = detector().detect(&uvp, None);
        assert_eq!(analysis.scope, Scope::Global);
    }

    #[test]
    fn explicit_geography_overrides_keyword_detection() {
        // Corpus screams global, explicit declaration says local.
        let uvp = UvpData {
            key_benefit: Some("worldwide international global reach from London".to_string()),
            market_geography: Some(MarketGeography {
                scope: Some(Scope::Local),
                regions: vec![],
            }),
            ..UvpData::default()
        };
        let analysis = detector().detect(&uvp, None);
        assert_eq!(analysis.scope, Scope::Local);
        assert!(analysis
            .signals
            .iter()
            .any(|s| s.contains("explicit market geography")));
    }

    #[test]
    fn national_volume_does_not_dilute_global_signal() {
        // One global token, zero national tokens: global must win.
        let uvp = UvpData {
            industry: Some("gdpr compliance".to_string()),
            ..UvpData::default()
        };
        let analysis = detector().detect(&uvp, None);
        assert_eq!(analysis.scope, Scope::Global);
    }

    #[test]
    fn tied_scope_counts_default_to_local() {
        // One regional and one national indicator: neither tier leads, so
        // scope falls back to local.
        let uvp = UvpData {
            key_benefit: Some("statewide reach and nationwide ambitions".to_string()),
            ..UvpData::default()
        };
        let analysis = detector().detect(&uvp, None);
        assert_eq!(analysis.scope, Scope::Local);
        assert!(analysis.signals.iter().any(|s| s.contains("scope tie")));
    }

    #[test]
    fn saas_for_businesses_resolves_national_saas_b2b() {
        let uvp = UvpData {
            target_customer: Some("small businesses and growing companies".to_string()),
            product_category: Some("saas platform with api integration".to_string()),
            key_benefit: Some(
                "automation and analytics dashboards improve roi for teams".to_string(),
            ),
            ..UvpData::default()
        };
        let analysis = detector().detect(&uvp, None);
        assert_eq!(analysis.profile_type, BusinessProfileType::NationalSaasB2b);
        assert_eq!(analysis.customer_type, CustomerType::B2b);
        assert_eq!(analysis.offering_type, OfferingType::Saas);
    }

    #[test]
    fn industry_override_beats_composition() {
        // Plumbing + roofing hit the local-service industry list twice,
        // which outranks whatever the axes would compose to.
        let uvp = UvpData {
            industry: Some("plumbing and roofing".to_string()),
            product_category: Some("software platform subscription".to_string()),
            ..UvpData::default()
        };
        let analysis = detector().detect(&uvp, None);
        assert_eq!(analysis.profile_type, BusinessProfileType::LocalServiceB2c);
        assert!(analysis
            .signals
            .iter()
            .any(|s| s.contains("industry override")));
    }

    #[test]
    fn single_global_saas_industry_hit_triggers_override() {
        let uvp = UvpData {
            industry: Some("observability".to_string()),
            ..UvpData::default()
        };
        let analysis = detector().detect(&uvp, None);
        assert_eq!(analysis.profile_type, BusinessProfileType::GlobalSaasB2b);
    }

    #[test]
    fn explicit_business_statement_biases_b2b() {
        // One b2b keyword and one b2c keyword tie without the bias; the
        // explicit "business" marker pushes it over the +2 margin.
        let uvp = UvpData {
            target_customer: Some("business teams".to_string()),
            key_benefit: Some("families love it".to_string()),
            ..UvpData::default()
        };
        let analysis = detector().detect(&uvp, None);
        assert_eq!(analysis.customer_type, CustomerType::B2b);
    }

    #[test]
    fn mixed_customer_signals_resolve_b2b2c() {
        let uvp = UvpData {
            key_benefit: Some("companies and consumers both benefit".to_string()),
            ..UvpData::default()
        };
        let analysis = detector().detect(&uvp, None);
        assert_eq!(analysis.customer_type, CustomerType::B2b2c);
    }

    #[test]
    fn confidence_steps_with_signal_count() {
        assert_eq!(confidence_for(0), 0.5);
        assert_eq!(confidence_for(2), 0.65);
        assert_eq!(confidence_for(4), 0.75);
        assert_eq!(confidence_for(6), 0.85);
        assert_eq!(confidence_for(9), 0.95);
    }

    #[test]
    fn resolution_prefers_global_saas_over_scope_fallback() {
        let (profile, rule) = resolve_profile(
            Scope::Global,
            CustomerType::B2b,
            OfferingType::Saas,
            None,
        );
        assert_eq!(profile, BusinessProfileType::GlobalSaasB2b);
        assert_eq!(rule, "global-saas-b2b");
    }

    #[test]
    fn resolution_industry_override_wins() {
        let (profile, rule) = resolve_profile(
            Scope::Global,
            CustomerType::B2b,
            OfferingType::Saas,
            Some(BusinessProfileType::RegionalRetailB2c),
        );
        assert_eq!(profile, BusinessProfileType::RegionalRetailB2c);
        assert_eq!(rule, "industry-override");
    }

    #[test]
    fn signals_record_the_decision_path() {
        let analysis = detector().detect(&UvpData::default(), None);
        assert!(!analysis.signals.is_empty());
        assert!(analysis.signals.iter().any(|s| s.contains("resolved via")));
    }
}
