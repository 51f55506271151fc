use crate::priority::Priority;
use crate::types::{CleaningZone, Recipe, ShoppingListItem};

pub const DEFAULT_SHOPPING_CATEGORY: &str = "other";

/// Criteria for the admin recipe list. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    pub search: String,
    pub category: String,
    pub family_member: String,
    /// Minimum star rating; 0 disables the check.
    pub min_rating: u8,
}

impl RecipeFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.category.is_empty()
            && self.family_member.is_empty()
            && self.min_rating == 0
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty() && !recipe.name.to_lowercase().contains(&search) {
            return false;
        }
        if !self.category.is_empty() && recipe.category != self.category {
            return false;
        }
        if !self.family_member.is_empty() && recipe.family_member != self.family_member {
            return false;
        }
        self.min_rating == 0 || recipe.rating >= f64::from(self.min_rating)
    }

    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Zones whose normalized priority equals `priority`; `None` keeps all.
pub fn filter_zones(zones: &[CleaningZone], priority: Option<Priority>) -> Vec<&CleaningZone> {
    zones
        .iter()
        .filter(|z| priority.map_or(true, |p| z.priority() == p))
        .collect()
}

/// Groups shopping items by category in order of first appearance.
pub fn group_by_category(items: &[ShoppingListItem]) -> Vec<(String, Vec<&ShoppingListItem>)> {
    let mut groups: Vec<(String, Vec<&ShoppingListItem>)> = Vec::new();
    for item in items {
        let category = match item.category.trim() {
            "" => DEFAULT_SHOPPING_CATEGORY,
            c => c,
        };
        match groups.iter_mut().find(|(name, _)| name == category) {
            Some((_, members)) => members.push(item),
            None => groups.push((category.to_string(), vec![item])),
        }
    }
    groups
}

pub fn pending_items(items: &[ShoppingListItem]) -> Vec<&ShoppingListItem> {
    items.iter().filter(|i| !i.purchased).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::RawPriority;

    fn recipe(id: u64, name: &str, category: &str, family_member: &str, rating: f64) -> Recipe {
        let mut recipe: Recipe =
            serde_json::from_value(serde_json::json!({"id": id, "name": name})).unwrap();
        recipe.category = category.to_string();
        recipe.family_member = family_member.to_string();
        recipe.rating = rating;
        recipe
    }

    fn item(id: u64, name: &str, category: &str, purchased: bool) -> ShoppingListItem {
        ShoppingListItem {
            id,
            item: name.to_string(),
            quantity: String::new(),
            category: category.to_string(),
            purchased,
            added_by: String::new(),
        }
    }

    fn zone(id: u64, priority: RawPriority) -> CleaningZone {
        CleaningZone {
            id,
            name: format!("zone {}", id),
            description: String::new(),
            frequency_per_week: 1,
            priority,
        }
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let recipes = vec![recipe(1, "Soup", "lunch", "", 0.0), recipe(2, "Cake", "", "", 5.0)];
        let filter = RecipeFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&recipes).len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let recipes = vec![recipe(1, "Tomato Soup", "", "", 0.0), recipe(2, "Cake", "", "", 0.0)];
        let filter = RecipeFilter {
            search: "soup".to_string(),
            ..Default::default()
        };
        let found: Vec<u64> = filter.apply(&recipes).iter().map(|r| r.id).collect();
        assert_eq!(found, vec![1]);
    }

    #[test]
    fn test_combined_criteria() {
        let recipes = vec![
            recipe(1, "Porridge", "breakfast", "kids", 4.0),
            recipe(2, "Pancakes", "breakfast", "kids", 2.0),
            recipe(3, "Eggs", "breakfast", "adults", 5.0),
            recipe(4, "Stew", "dinner", "kids", 5.0),
        ];
        let filter = RecipeFilter {
            search: String::new(),
            category: "breakfast".to_string(),
            family_member: "kids".to_string(),
            min_rating: 3,
        };
        let found: Vec<u64> = filter.apply(&recipes).iter().map(|r| r.id).collect();
        assert_eq!(found, vec![1]);
    }

    #[test]
    fn test_filter_zones_by_normalized_priority() {
        let zones = vec![
            zone(1, RawPriority::Level(2)),
            zone(2, RawPriority::Tag("high".to_string())),
            zone(3, RawPriority::Missing),
            zone(4, RawPriority::Level(9)),
        ];

        let high: Vec<u64> = filter_zones(&zones, Some(Priority::High)).iter().map(|z| z.id).collect();
        assert_eq!(high, vec![1, 2]);
        let medium: Vec<u64> =
            filter_zones(&zones, Some(Priority::Medium)).iter().map(|z| z.id).collect();
        assert_eq!(medium, vec![3]);
        assert_eq!(filter_zones(&zones, None).len(), 4);
    }

    #[test]
    fn test_group_by_category_first_appearance() {
        let items = vec![
            item(1, "Milk", "dairy", false),
            item(2, "Soap", "", false),
            item(3, "Cheese", "dairy", true),
            item(4, "Bread", "bakery", false),
        ];
        let groups = group_by_category(&items);
        let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["dairy", "other", "bakery"]);
        let dairy: Vec<u64> = groups[0].1.iter().map(|i| i.id).collect();
        assert_eq!(dairy, vec![1, 3]);
    }

    #[test]
    fn test_pending_items() {
        let items = vec![item(1, "Milk", "", true), item(2, "Eggs", "", false)];
        let pending: Vec<u64> = pending_items(&items).iter().map(|i| i.id).collect();
        assert_eq!(pending, vec![2]);
    }
}
