//! Unit tests for the restaurant service

use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::restaurant::{Restaurant, RestaurantImage};
use crate::errors::DomainError;
use crate::repositories::{MockRestaurantRepository, RestaurantRepository};
use crate::services::restaurant::RestaurantService;

async fn seeded() -> (RestaurantService, MockRestaurantRepository) {
    let repository = MockRestaurantRepository::new();

    let mut caravan = Restaurant::new("Caravan", Decimal::new(5, 0));
    caravan.hashtags = "plov, uzbek".to_string();
    caravan.description = "Traditional cuisine".to_string();
    repository.create(caravan).await.unwrap();

    let mut afsona = Restaurant::new("Afsona", Decimal::new(10, 0));
    afsona.hashtags = "uzbek,family".to_string();
    repository.create(afsona).await.unwrap();

    let mut bon = Restaurant::new("Bon Cafe", Decimal::new(15, 0));
    bon.description = "Coffee and desserts".to_string();
    repository.create(bon).await.unwrap();

    (RestaurantService::new(Arc::new(repository.clone())), repository)
}

fn names(restaurants: &[Restaurant]) -> Vec<&str> {
    restaurants.iter().map(|r| r.name.as_str()).collect()
}

#[tokio::test]
async fn test_list_orders_by_name() {
    let (service, _) = seeded().await;

    let all = service.list(None).await.unwrap();

    assert_eq!(names(&all), vec!["Afsona", "Bon Cafe", "Caravan"]);
}

#[tokio::test]
async fn test_search_matches_every_term() {
    let (service, _) = seeded().await;

    assert_eq!(names(&service.list(Some("UZBEK")).await.unwrap()), vec!["Afsona", "Caravan"]);
    assert_eq!(names(&service.list(Some("uzbek, plov")).await.unwrap()), vec!["Caravan"]);
    assert_eq!(names(&service.list(Some("coffee")).await.unwrap()), vec!["Bon Cafe"]);
    assert!(service.list(Some("sushi")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_search_lists_everything() {
    let (service, _) = seeded().await;

    assert_eq!(service.list(Some(" , ")).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_detail_includes_images() {
    let (service, repository) = seeded().await;
    let afsona = service.list(Some("afsona")).await.unwrap().remove(0);
    repository.add_menu_image(afsona.id, "menu/2.jpg", 2).await;
    repository.add_menu_image(afsona.id, "menu/1.jpg", 1).await;
    repository
        .add_gallery_image(RestaurantImage::new(afsona.id, "gallery/hall.jpg"))
        .await
        .unwrap();

    let detail = service.detail(afsona.id).await.unwrap();

    assert_eq!(detail.restaurant.name, "Afsona");
    assert_eq!(detail.gallery.len(), 1);
    let pages: Vec<&str> = detail.menu_images.iter().map(|m| m.image.as_str()).collect();
    assert_eq!(pages, vec!["menu/1.jpg", "menu/2.jpg"]);
}

#[tokio::test]
async fn test_detail_unknown_restaurant() {
    let (service, _) = seeded().await;

    match service.detail(Uuid::new_v4()).await {
        Err(error @ DomainError::NotFound { .. }) => {
            assert_eq!(error.to_string(), "Restaurant not found")
        }
        other => panic!("Expected not found, got {:?}", other),
    }
}
