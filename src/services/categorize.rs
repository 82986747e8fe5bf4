//! Keyword categorizer for statement descriptions
//!
//! Rules are checked in order and the first keyword found (case-insensitive
//! substring) decides the category. Order matters: "ubereats" must be seen as
//! dining before "uber" claims it for transport, and "amazon prime" as a
//! subscription before "amazon" claims it for shopping.

use crate::models::UNCATEGORIZED;

/// One category and the keywords that select it
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub category: String,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: &str, keywords: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn matches(&self, description: &str) -> bool {
        self.keywords.iter().any(|k| description.contains(k.as_str()))
    }
}

/// Ordered rule table
#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self {
            rules: vec![
                CategoryRule::new(
                    "Groceries",
                    &["tesco", "asda", "sainsbury", "aldi", "lidl", "waitrose", "ocado"],
                ),
                CategoryRule::new(
                    "Dining",
                    &["mcdonald", "deliveroo", "just eat", "ubereats", "starbucks", "costa"],
                ),
                CategoryRule::new(
                    "Subscriptions",
                    &["netflix", "spotify", "amazon prime", "disney", "apple.com", "google"],
                ),
                CategoryRule::new(
                    "Bills/Utilities",
                    &["council tax", "water", "electric", "gas", "internet", "mobile", "rent"],
                ),
                CategoryRule::new(
                    "Transport",
                    &["uber", "tfl", "trainline", "shell", "bp", "petrol"],
                ),
                CategoryRule::new("Shopping", &["amazon", "ebay", "argos", "boots", "ikea"]),
                CategoryRule::new(
                    "Entertainment",
                    &["steam", "playstation", "xbox", "cinema", "pub", "bar"],
                ),
            ],
        }
    }
}

impl Categorizer {
    /// Pick a category for a statement description
    pub fn categorize(&self, description: &str) -> &str {
        let description = description.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&description))
            .map(|rule| rule.category.as_str())
            .unwrap_or(UNCATEGORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_merchants() {
        let categorizer = Categorizer::default();

        assert_eq!(categorizer.categorize("TESCO STORES 2041"), "Groceries");
        assert_eq!(categorizer.categorize("Deliveroo London"), "Dining");
        assert_eq!(categorizer.categorize("NETFLIX.COM"), "Subscriptions");
        assert_eq!(categorizer.categorize("Council Tax DD"), "Bills/Utilities");
        assert_eq!(categorizer.categorize("TfL Travel Charge"), "Transport");
        assert_eq!(categorizer.categorize("ARGOS LTD"), "Shopping");
        assert_eq!(categorizer.categorize("Steam Purchase"), "Entertainment");
    }

    #[test]
    fn test_rule_order_wins() {
        let categorizer = Categorizer::default();

        assert_eq!(categorizer.categorize("UBEREATS ORDER"), "Dining");
        assert_eq!(categorizer.categorize("UBER TRIP"), "Transport");
        assert_eq!(categorizer.categorize("Amazon Prime Membership"), "Subscriptions");
        assert_eq!(categorizer.categorize("AMAZON MARKETPLACE"), "Shopping");
    }

    #[test]
    fn test_unmatched_is_other() {
        let categorizer = Categorizer::default();
        assert_eq!(categorizer.categorize("Salary ACME LTD"), "Other");
    }
}
