// Static mapping from user-facing interest tags to Geoapify category names.
const INTEREST_CATEGORIES: [(&str, &str); 8] = [
    ("history", "historic"),
    ("food", "catering"),
    ("nature", "natural"),
    ("shopping", "commercial"),
    ("beach", "beach"),
    ("culture", "entertainment"),
    ("art", "entertainment.culture"),
    ("museum", "entertainment.museum"),
];

// "general" is a catch-all rather than a table entry.
const GENERAL_CATEGORIES: [&str; 2] = ["tourism", "catering"];

pub struct InterestService;

impl InterestService {
    /// Resolve interest tags to provider categories, in tag order, deduplicated.
    /// Tags with no table entry are dropped; an all-unknown input yields an
    /// empty list and the caller decides how to report that.
    pub fn resolve_categories(interest_tags: &[String]) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();

        for tag in interest_tags {
            let tag = tag.trim().to_lowercase();

            if tag == "general" {
                for category in GENERAL_CATEGORIES {
                    Self::push_unique(&mut categories, category);
                }
                continue;
            }

            if let Some((_, category)) = INTEREST_CATEGORIES
                .iter()
                .find(|(interest, _)| *interest == tag)
            {
                Self::push_unique(&mut categories, category);
            }
        }

        categories
    }

    fn push_unique(categories: &mut Vec<String>, category: &str) {
        if !categories.iter().any(|existing| existing == category) {
            categories.push(category.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_resolution_preserves_tag_order() {
        let categories = InterestService::resolve_categories(&tags(&["history", "food", "nature"]));
        assert_eq!(categories, vec!["historic", "catering", "natural"]);
    }

    #[test]
    fn test_general_fans_out_to_tourism_and_catering() {
        let categories = InterestService::resolve_categories(&tags(&["general"]));
        assert_eq!(categories, vec!["tourism", "catering"]);
    }

    #[test]
    fn test_duplicate_categories_collapse_keeping_first_position() {
        // "food" maps to catering, so general only contributes tourism here.
        let categories = InterestService::resolve_categories(&tags(&["food", "general"]));
        assert_eq!(categories, vec!["catering", "tourism"]);
    }

    #[test]
    fn test_unknown_tags_are_dropped() {
        let categories = InterestService::resolve_categories(&tags(&["skydiving", "history"]));
        assert_eq!(categories, vec!["historic"]);

        let none = InterestService::resolve_categories(&tags(&["skydiving", "spelunking"]));
        assert!(none.is_empty());
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        let categories = InterestService::resolve_categories(&tags(&[" History ", "ART"]));
        assert_eq!(categories, vec!["historic", "entertainment.culture"]);
    }
}
