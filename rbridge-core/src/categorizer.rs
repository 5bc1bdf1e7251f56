//! Deterministic keyword categorizer.
//!
//! A description is lower-cased and scanned against the taxonomy in
//! declaration order; the first rule with a keyword that occurs anywhere in the
//! description wins. Substring matching is deliberate: "fuel" matches "FUELS".

use crate::taxonomy::{self, Rule, UNKNOWN};

/// Category and subcategory assigned to a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: &'static str,
    /// Empty when nothing under `category` matched.
    pub subcategory: &'static str,
}

fn first_match(rules: &'static [Rule], folded: &str) -> Option<&'static str> {
    rules
        .iter()
        .find(|r| r.keywords.iter().any(|kw| folded.contains(kw)))
        .map(|r| r.label)
}

/// Category label for a description, or `"unknown"`.
pub fn categorize(description: &str) -> &'static str {
    let folded = description.to_lowercase();
    first_match(taxonomy::CATEGORIES, &folded).unwrap_or(UNKNOWN)
}

/// Subcategory label for a description within `category`, or `""`.
pub fn subcategorize(category: &str, description: &str) -> &'static str {
    let Some(rules) = taxonomy::subcategory_rules(category) else {
        return "";
    };
    let folded = description.to_lowercase();
    first_match(rules, &folded).unwrap_or("")
}

/// Category and subcategory in one pass over the folded description.
pub fn classify(description: &str) -> Classification {
    let folded = description.to_lowercase();
    let category = first_match(taxonomy::CATEGORIES, &folded).unwrap_or(UNKNOWN);
    let subcategory = taxonomy::subcategory_rules(category)
        .and_then(|rules| first_match(rules, &folded))
        .unwrap_or("");
    Classification { category, subcategory }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_keyword_any_case() {
        assert_eq!(categorize("swiggy"), "Food");
        assert_eq!(categorize("UPI/SWIGGY/BANGALORE"), "Food");
        assert_eq!(categorize("Paid to SwIgGy Instamart"), "Food");
    }

    #[test]
    fn test_no_keyword_is_unknown() {
        let c = classify("QWZ 00412");
        assert_eq!(c.category, "unknown");
        assert_eq!(c.subcategory, "");
        assert_eq!(subcategorize(categorize("QWZ 00412"), "QWZ 00412"), "");
    }

    #[test]
    fn test_empty_description_is_unknown() {
        assert_eq!(classify(""), Classification { category: "unknown", subcategory: "" });
    }

    #[test]
    fn test_overlap_resolved_by_declaration_order() {
        // "food" (Food) and "uber" (Transportation)
        for _ in 0..3 {
            assert_eq!(categorize("UBER EATS FOOD"), "Food");
        }
        // "rent" is registered under Household before Rent
        assert_eq!(categorize("HOUSE RENT MARCH"), "Household");
        // "fees" is registered under Education before Services
        assert_eq!(categorize("COLLEGE FEES"), "Education");
        // "consultation" is registered under Health before Services
        assert_eq!(categorize("CONSULTATION CHARGES"), "Health");
        // "deposit" is registered under Investment before Rent
        assert_eq!(categorize("SECURITY DEPOSIT"), "Investment");
    }

    #[test]
    fn test_substring_match_inside_words() {
        assert_eq!(categorize("INDIAN OIL FUELS"), "Transportation");
        assert_eq!(categorize("HP PETROL PUMP"), "Transportation");
    }

    #[test]
    fn test_subcategory_scoped_to_category() {
        assert_eq!(classify("UBER TRIP").subcategory, "Taxi");
        assert_eq!(classify("HP PETROL PUMP").subcategory, "Bike");
        assert_eq!(classify("ZOMATO ORDER").subcategory, "Eating out");
        assert_eq!(classify("NETFLIX.COM").category, "Culture");
        assert_eq!(classify("NETFLIX.COM").subcategory, "OTT");
        assert_eq!(classify("SECURITY DEPOSIT").subcategory, "Fixed Deposits");
    }

    #[test]
    fn test_category_without_table_has_empty_subcategory() {
        let c = classify("FLIPKART ORDER");
        assert_eq!(c.category, "Shopping");
        assert_eq!(c.subcategory, "");

        let c = classify("INT.PD:30-06-2024");
        assert_eq!(c.category, "Interests");
        assert_eq!(c.subcategory, "");
    }

    #[test]
    fn test_subcategorize_accepts_any_category() {
        assert_eq!(subcategorize("Trip", "hotel stay goa"), "Stay/Hotel");
        assert_eq!(subcategorize("Tax", "TDS deducted"), "TDS");
        assert_eq!(subcategorize("Shopping", "amazon"), "");
        assert_eq!(subcategorize("unknown", "anything"), "");
    }

    #[test]
    fn test_classify_agrees_with_separate_calls() {
        for desc in ["SWIGGY", "UBER TRIP", "AIRTEL POSTPAID", "QWZ 00412", "LENSKART"] {
            let c = classify(desc);
            assert_eq!(c.category, categorize(desc));
            assert_eq!(c.subcategory, subcategorize(c.category, desc));
        }
    }
}
