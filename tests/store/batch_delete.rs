//! Review deletion, single and batched.

use restaurant_reviews::models::{NewCustomer, NewRestaurant, NewReview};
use restaurant_reviews::{Review, ReviewError, ReviewId, Store};

use crate::for_each_store;

fn store_with_reviews<S: Store>(store: &mut S, count: usize) -> Vec<Review> {
    let restaurant = store
        .insert_restaurant(NewRestaurant {
            name: "Restaurant A".to_string(),
            price: 3,
        })
        .unwrap();
    let customer = store
        .insert_customer(NewCustomer {
            first_name: "Bob".to_string(),
            last_name: "Johnson".to_string(),
        })
        .unwrap();
    (0..count)
        .map(|i| {
            store
                .insert_review(NewReview {
                    customer_id: customer.id,
                    restaurant_id: restaurant.id,
                    star_rating: i as i64 + 1,
                    feedback: format!("Visit {i}"),
                })
                .unwrap()
        })
        .collect()
}

fn single_delete_removes_only_that_review<S: Store>(mut store: S) {
    let reviews = store_with_reviews(&mut store, 3);
    store.delete_review(reviews[1].id).unwrap();

    let left: Vec<ReviewId> = store.reviews().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(left, [reviews[0].id, reviews[2].id]);
}
for_each_store!(
    single_delete_removes_only_that_review,
    super::single_delete_removes_only_that_review
);

fn batch_delete_reports_count<S: Store>(mut store: S) {
    let reviews = store_with_reviews(&mut store, 4);
    let ids: Vec<ReviewId> = reviews.iter().take(3).map(|r| r.id).collect();

    assert_eq!(store.delete_reviews(&ids).unwrap(), 3);
    assert_eq!(store.reviews().unwrap(), vec![reviews[3].clone()]);
}
for_each_store!(batch_delete_reports_count, super::batch_delete_reports_count);

fn batch_with_unknown_id_removes_nothing<S: Store>(mut store: S) {
    let reviews = store_with_reviews(&mut store, 2);
    let ids = [reviews[0].id, reviews[1].id, ReviewId(1_000)];

    let err = store.delete_reviews(&ids).unwrap_err();
    assert!(matches!(err, ReviewError::NotFound { id: 1_000, .. }));
    assert_eq!(store.reviews().unwrap(), reviews);
}
for_each_store!(
    batch_with_unknown_id_removes_nothing,
    super::batch_with_unknown_id_removes_nothing
);

fn deleting_twice_is_not_found<S: Store>(mut store: S) {
    let reviews = store_with_reviews(&mut store, 1);
    store.delete_review(reviews[0].id).unwrap();
    let err = store.delete_review(reviews[0].id).unwrap_err();
    assert!(err.is_user_error());
}
for_each_store!(deleting_twice_is_not_found, super::deleting_twice_is_not_found);

fn empty_batch_is_a_no_op<S: Store>(mut store: S) {
    let reviews = store_with_reviews(&mut store, 2);
    assert_eq!(store.delete_reviews(&[]).unwrap(), 0);
    assert_eq!(store.reviews().unwrap(), reviews);
}
for_each_store!(empty_batch_is_a_no_op, super::empty_batch_is_a_no_op);
