//! Input records the detectors consume.
//!
//! Every field that feeds text classification is optional: absent fields
//! simply contribute nothing to the combined corpus. No validation happens
//! here by design (see the "always answer" rule in the classifiers).

use serde::{Deserialize, Serialize};

use crate::profile::Scope;

/// Explicit market-geography declaration on a UVP.
///
/// When `scope` is present it overrides keyword-based scope detection
/// unconditionally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketGeography {
    pub scope: Option<Scope>,
    pub regions: Vec<String>,
}

/// Before/after transformation story from a UVP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transformation {
    pub before: Option<String>,
    pub after: Option<String>,
}

/// A unique-value-proposition record, as produced by the UVP wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UvpData {
    pub target_customer: Option<String>,
    pub industry: Option<String>,
    pub key_benefit: Option<String>,
    pub transformation: Option<Transformation>,
    pub differentiators: Vec<String>,
    pub product_name: Option<String>,
    pub product_category: Option<String>,
    pub market_geography: Option<MarketGeography>,
}

/// Loosely-typed brand metadata supplied alongside a UVP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandData {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl UvpData {
    /// Collect every free-text field into one lowercased corpus.
    ///
    /// Field order is stable so signal strings stay reproducible.
    #[must_use]
    pub fn corpus(&self, brand: Option<&BrandData>) -> String {
        fn push<'a>(s: &'a Option<String>, parts: &mut Vec<&'a str>) {
            if let Some(v) = s.as_deref() {
                parts.push(v);
            }
        }

        let mut parts: Vec<&str> = Vec::new();

        push(&self.target_customer, &mut parts);
        push(&self.industry, &mut parts);
        push(&self.key_benefit, &mut parts);
        if let Some(t) = &self.transformation {
            push(&t.before, &mut parts);
            push(&t.after, &mut parts);
        }
        for d in &self.differentiators {
            parts.push(d);
        }
        push(&self.product_name, &mut parts);
        push(&self.product_category, &mut parts);

        if let Some(b) = brand {
            push(&b.name, &mut parts);
            push(&b.industry, &mut parts);
            push(&b.description, &mut parts);
            push(&b.location, &mut parts);
        }

        parts.join(" ").to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_uvp_yields_empty_corpus() {
        let uvp = UvpData::default();
        assert_eq!(uvp.corpus(None), "");
    }

    #[test]
    fn corpus_is_lowercased_and_joined() {
        let uvp = UvpData {
            target_customer: Some("Small Law Firms".to_string()),
            key_benefit: Some("Faster Billing".to_string()),
            ..UvpData::default()
        };
        assert_eq!(uvp.corpus(None), "small law firms faster billing");
    }

    #[test]
    fn corpus_includes_brand_fields() {
        let uvp = UvpData::default();
        let brand = BrandData {
            name: Some("Acme".to_string()),
            location: Some("Austin TX".to_string()),
            ..BrandData::default()
        };
        assert_eq!(uvp.corpus(Some(&brand)), "acme austin tx");
    }

    #[test]
    fn corpus_includes_transformation_and_differentiators() {
        let uvp = UvpData {
            transformation: Some(Transformation {
                before: Some("Manual spreadsheets".to_string()),
                after: Some("Automated reports".to_string()),
            }),
            differentiators: vec!["white glove onboarding".to_string()],
            ..UvpData::default()
        };
        let corpus = uvp.corpus(None);
        assert!(corpus.contains("manual spreadsheets"));
        assert!(corpus.contains("automated reports"));
        assert!(corpus.contains("white glove onboarding"));
    }
}
