//! Create, get and list for each entity kind.

use restaurant_reviews::models::{NewCustomer, NewRestaurant, NewReview};
use restaurant_reviews::{CustomerId, RestaurantId, ReviewId, Store};

use crate::for_each_store;

fn restaurant(name: &str, price: i64) -> NewRestaurant {
    NewRestaurant {
        name: name.to_string(),
        price,
    }
}

fn customer(first: &str, last: &str) -> NewCustomer {
    NewCustomer {
        first_name: first.to_string(),
        last_name: last.to_string(),
    }
}

// =============================================================================
// Creation
// =============================================================================

fn created_rows_round_trip<S: Store>(mut store: S) {
    let a = store.insert_restaurant(restaurant("Restaurant A", 3)).unwrap();
    let john = store.insert_customer(customer("John", "Doe")).unwrap();
    let review = store
        .insert_review(NewReview {
            customer_id: john.id,
            restaurant_id: a.id,
            star_rating: 4,
            feedback: "Good".to_string(),
        })
        .unwrap();

    assert_eq!(store.restaurant(a.id).unwrap(), Some(a.clone()));
    assert_eq!(store.customer(john.id).unwrap(), Some(john.clone()));
    assert_eq!(store.review(review.id).unwrap(), Some(review.clone()));
    assert_eq!(review.customer_id, john.id);
    assert_eq!(review.restaurant_id, a.id);
}
for_each_store!(created_rows_round_trip, super::created_rows_round_trip);

fn ids_are_distinct_and_increasing<S: Store>(mut store: S) {
    let ids: Vec<RestaurantId> = ["A", "B", "C"]
        .iter()
        .map(|name| store.insert_restaurant(restaurant(name, 1)).unwrap().id)
        .collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}
for_each_store!(ids_are_distinct_and_increasing, super::ids_are_distinct_and_increasing);

// =============================================================================
// Lookup
// =============================================================================

fn unknown_ids_are_none<S: Store>(store: S) {
    assert_eq!(store.restaurant(RestaurantId(1)).unwrap(), None);
    assert_eq!(store.customer(CustomerId(1)).unwrap(), None);
    assert_eq!(store.review(ReviewId(1)).unwrap(), None);
}
for_each_store!(unknown_ids_are_none, super::unknown_ids_are_none);

fn collections_come_back_in_creation_order<S: Store>(mut store: S) {
    for (name, price) in [("Restaurant A", 3), ("Restaurant B", 2), ("Restaurant C", 4)] {
        store.insert_restaurant(restaurant(name, price)).unwrap();
    }
    for (first, last) in [("John", "Doe"), ("Jane", "Smith")] {
        store.insert_customer(customer(first, last)).unwrap();
    }

    let names: Vec<String> = store
        .restaurants()
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, ["Restaurant A", "Restaurant B", "Restaurant C"]);

    let firsts: Vec<String> = store
        .customers()
        .unwrap()
        .into_iter()
        .map(|c| c.first_name)
        .collect();
    assert_eq!(firsts, ["John", "Jane"]);
}
for_each_store!(
    collections_come_back_in_creation_order,
    super::collections_come_back_in_creation_order
);

fn filtered_review_reads_match_full_scan<S: Store>(mut store: S) {
    let a = store.insert_restaurant(restaurant("Restaurant A", 3)).unwrap();
    let b = store.insert_restaurant(restaurant("Restaurant B", 2)).unwrap();
    let john = store.insert_customer(customer("John", "Doe")).unwrap();
    let jane = store.insert_customer(customer("Jane", "Smith")).unwrap();
    for (who, place) in [(&john, &a), (&jane, &a), (&john, &b), (&john, &a)] {
        store
            .insert_review(NewReview {
                customer_id: who.id,
                restaurant_id: place.id,
                star_rating: 3,
                feedback: "Fine".to_string(),
            })
            .unwrap();
    }

    let all = store.reviews().unwrap();
    let of_a: Vec<_> = all.iter().filter(|r| r.restaurant_id == a.id).cloned().collect();
    let by_john: Vec<_> = all.iter().filter(|r| r.customer_id == john.id).cloned().collect();

    assert_eq!(store.reviews_for_restaurant(a.id).unwrap(), of_a);
    assert_eq!(store.reviews_by_customer(john.id).unwrap(), by_john);
    assert_eq!(of_a.len(), 3);
    assert_eq!(by_john.len(), 3);
}
for_each_store!(
    filtered_review_reads_match_full_scan,
    super::filtered_review_reads_match_full_scan
);
