// Static tag category table.
//
// Each category is a named group of related tags (lowercase, no leading `#`).
// The table is a process-wide constant and the first entry doubles as the
// general "popular" pool that every local generation draws from.

use serde::Serialize;

/// A named, fixed group of related hashtag words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagCategory {
    pub name: &'static str,
    pub tags: &'static [&'static str],
}

impl TagCategory {
    /// True when any tag is a substring of `topic`, or `topic` is a substring of a tag.
    ///
    /// `topic` is expected to be already trimmed and lowercased.
    pub fn matches(&self, topic: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| topic.contains(tag) || tag.contains(topic))
    }
}

/// All categories, in match order. Index 0 is the popular pool.
pub static CATEGORIES: &[TagCategory] = &[
    TagCategory {
        name: "Popular",
        tags: &[
            "love", "instagood", "photooftheday", "fashion", "beautiful", "happy", "cute",
            "like4like", "followme", "picoftheday", "follow", "nature", "travel", "style",
            "photography", "instadaily", "selfie",
        ],
    },
    TagCategory {
        name: "Business",
        tags: &[
            "business", "entrepreneur", "success", "motivation", "marketing", "smallbusiness",
            "startup", "entrepreneurship", "mindset", "hustle", "inspiration", "leadership",
            "goals", "money", "work", "branding",
        ],
    },
    TagCategory {
        name: "Lifestyle",
        tags: &[
            "lifestyle", "life", "healthy", "fitness", "health", "wellness", "motivation",
            "workout", "inspiration", "gym", "fit", "love", "healthylifestyle", "training",
            "nutrition", "weightloss",
        ],
    },
    TagCategory {
        name: "Travel",
        tags: &[
            "travel", "travelgram", "instatravel", "travelphotography", "wanderlust",
            "adventure", "traveling", "nature", "photography", "explore", "vacation", "trip",
            "travelblogger", "tourism", "holiday", "beach",
        ],
    },
    TagCategory {
        name: "Food",
        tags: &[
            "food", "foodporn", "foodie", "instafood", "delicious", "yummy", "foodphotography",
            "homemade", "healthyfood", "dinner", "foodstagram", "foodblogger", "lunch", "tasty",
            "cooking", "restaurant",
        ],
    },
    TagCategory {
        name: "Tech",
        tags: &[
            "technology", "tech", "innovation", "digital", "programming", "coding", "developer",
            "software", "ai", "artificialintelligence", "data", "machinelearning", "computer",
            "blockchain", "iot", "cybersecurity",
        ],
    },
    TagCategory {
        name: "Art",
        tags: &[
            "art", "artist", "drawing", "illustration", "design", "artwork", "sketch",
            "digitalart", "painting", "creative", "artistsoninstagram", "draw", "arte",
            "instaart", "graphicdesign", "contemporaryart",
        ],
    },
];

/// The general-purpose pool appended to every local generation.
pub fn popular() -> &'static TagCategory {
    &CATEGORIES[0]
}

/// First category (in table order) that matches the normalized topic.
///
/// This is first-match, not best-match: short topics can land in a category
/// through an incidental substring ("art" matches Business via "startup").
pub fn relevant_category(topic: &str) -> Option<&'static TagCategory> {
    CATEGORIES.iter().find(|category| category.matches(topic))
}

/// Look up a category by name (case-insensitive).
pub fn find(name: &str) -> Option<&'static TagCategory> {
    CATEGORIES
        .iter()
        .find(|category| category.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_tags_are_lowercase_without_hash() {
        for category in CATEGORIES {
            assert!(!category.tags.is_empty(), "{} has no tags", category.name);
            for tag in category.tags {
                assert!(!tag.starts_with('#'), "{tag} carries a leading #");
                assert_eq!(*tag, tag.to_lowercase());
            }
        }
    }

    #[test]
    fn test_first_match_wins() {
        // "travel" is a literal Popular tag, so Popular is hit before Travel.
        assert_eq!(relevant_category("travel").map(|c| c.name), Some("Popular"));
        assert_eq!(relevant_category("art").map(|c| c.name), Some("Business"));
        assert_eq!(relevant_category("vegan cooking").map(|c| c.name), Some("Food"));
    }

    #[test]
    fn test_topic_substring_of_tag_matches() {
        // "blockch" is not a tag but is contained in "blockchain"
        assert_eq!(relevant_category("blockch").map(|c| c.name), Some("Tech"));
    }

    #[test]
    fn test_no_match() {
        assert!(relevant_category("zzzz qqqq").is_none());
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(find("travel").map(|c| c.tags.len()), Some(16));
        assert!(find("gardening").is_none());
        assert_eq!(popular().name, "Popular");
    }
}
