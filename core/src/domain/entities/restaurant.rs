//! Restaurant entity and its image collections.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cg_shared::utils::search::contains_ignore_case;

/// Maximum length of a restaurant name
pub const MAX_NAME_LENGTH: usize = 255;

/// Restaurant listed in the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    /// Relative path of the logo image
    pub logo: Option<String>,
    pub description: String,
    /// Comma separated hashtags
    pub hashtags: String,
    pub working_hours: String,
    pub contact_information: String,
    /// Links keyed by network name
    pub social_media: serde_json::Value,
    pub menu: serde_json::Value,
    pub location_text: String,
    /// Discount granted on every transaction, 0..=100
    pub discount_percentage: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    /// Creates a restaurant with empty descriptive fields
    pub fn new(name: impl Into<String>, discount_percentage: Decimal) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            logo: None,
            description: String::new(),
            hashtags: String::new(),
            working_hours: String::new(),
            contact_information: String::new(),
            social_media: serde_json::json!({}),
            menu: serde_json::json!({}),
            location_text: String::new(),
            discount_percentage,
            created_at: now,
            updated_at: now,
        }
    }

    /// Hashtags split on commas, trimmed, empties dropped
    pub fn hashtag_list(&self) -> Vec<String> {
        self.hashtags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Every lowercase term must appear in the name, hashtags or description
    pub fn matches_search(&self, terms: &[String]) -> bool {
        terms.iter().all(|term| {
            contains_ignore_case(&self.name, term)
                || contains_ignore_case(&self.hashtags, term)
                || contains_ignore_case(&self.description, term)
        })
    }
}

/// Photo in a restaurant's gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantImage {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl RestaurantImage {
    pub fn new(restaurant_id: Uuid, image: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            restaurant_id,
            image: image.into(),
            created_at: Utc::now(),
        }
    }
}

/// Page of a restaurant's menu, shown in `position` order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuImage {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub image: String,
    pub position: u32,
}

/// Restaurant together with its images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub gallery: Vec<RestaurantImage>,
    pub menu_images: Vec<MenuImage>,
}

/// Partial update applied from the admin panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantPatch {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub hashtags: Option<String>,
    pub working_hours: Option<String>,
    pub contact_information: Option<String>,
    pub social_media: Option<serde_json::Value>,
    pub menu: Option<serde_json::Value>,
    pub location_text: Option<String>,
    pub discount_percentage: Option<Decimal>,
}

impl RestaurantPatch {
    /// Writes every present field onto `restaurant`
    pub fn apply(self, restaurant: &mut Restaurant) {
        if let Some(name) = self.name {
            restaurant.name = name;
        }
        if let Some(logo) = self.logo {
            restaurant.logo = Some(logo);
        }
        if let Some(description) = self.description {
            restaurant.description = description;
        }
        if let Some(hashtags) = self.hashtags {
            restaurant.hashtags = hashtags;
        }
        if let Some(working_hours) = self.working_hours {
            restaurant.working_hours = working_hours;
        }
        if let Some(contact_information) = self.contact_information {
            restaurant.contact_information = contact_information;
        }
        if let Some(social_media) = self.social_media {
            restaurant.social_media = social_media;
        }
        if let Some(menu) = self.menu {
            restaurant.menu = menu;
        }
        if let Some(location_text) = self.location_text {
            restaurant.location_text = location_text;
        }
        if let Some(discount_percentage) = self.discount_percentage {
            restaurant.discount_percentage = discount_percentage;
        }
        restaurant.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cg_shared::utils::search::search_terms;

    fn plov_center() -> Restaurant {
        let mut restaurant = Restaurant::new("Plov Center", Decimal::new(1000, 2));
        restaurant.hashtags = "plov, halal ,uzbek".to_string();
        restaurant.description = "Traditional Tashkent cuisine".to_string();
        restaurant
    }

    #[test]
    fn test_hashtag_list() {
        assert_eq!(plov_center().hashtag_list(), vec!["plov", "halal", "uzbek"]);
    }

    #[test]
    fn test_matches_search_requires_every_term() {
        let restaurant = plov_center();

        assert!(restaurant.matches_search(&search_terms("PLOV tashkent")));
        assert!(restaurant.matches_search(&search_terms("halal")));
        assert!(!restaurant.matches_search(&search_terms("plov sushi")));
        assert!(restaurant.matches_search(&[]));
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut restaurant = plov_center();
        let patch = RestaurantPatch {
            discount_percentage: Some(Decimal::new(1500, 2)),
            working_hours: Some("10:00-23:00".to_string()),
            ..Default::default()
        };

        patch.apply(&mut restaurant);

        assert_eq!(restaurant.discount_percentage, Decimal::new(15, 0));
        assert_eq!(restaurant.working_hours, "10:00-23:00");
        assert_eq!(restaurant.name, "Plov Center");
    }
}
