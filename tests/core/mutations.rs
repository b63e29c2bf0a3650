//! Add-review and delete-reviews-for-restaurant through `Database`.

use restaurant_reviews::{CustomerId, Database, EntityKind, RestaurantId, ReviewError};

use crate::cast;

#[test]
fn add_review_with_unknown_customer_is_not_found() {
    let db = Database::in_memory();
    let cast = cast(&db);

    let err = db
        .add_review(CustomerId(99), cast.a.id, 4, "Good")
        .unwrap_err();
    assert!(matches!(
        err,
        ReviewError::NotFound {
            kind: EntityKind::Customer,
            id: 99
        }
    ));
    assert!(db.reviews().unwrap().is_empty());
}

#[test]
fn add_review_with_unknown_restaurant_is_not_found() {
    let db = Database::sqlite_in_memory().unwrap();
    let cast = cast(&db);

    let err = db
        .add_review(cast.john.id, RestaurantId(42), 4, "Good")
        .unwrap_err();
    assert!(matches!(
        err,
        ReviewError::NotFound {
            kind: EntityKind::Restaurant,
            id: 42
        }
    ));
    assert!(db.reviews().unwrap().is_empty());
}

#[test]
fn add_review_without_rating_is_validation() {
    let db = Database::in_memory();
    let cast = cast(&db);

    let err = db.add_review(cast.john.id, cast.a.id, None::<i64>, "Good").unwrap_err();
    assert!(matches!(err, ReviewError::Validation(_)));
    assert!(err.is_user_error());
}

#[test]
fn validation_is_reported_before_lookup() {
    let db = Database::in_memory();
    let err = db
        .add_review(CustomerId(1), RestaurantId(1), 3, "")
        .unwrap_err();
    assert!(matches!(err, ReviewError::Validation(_)));
}

#[test]
fn feedback_of_exactly_the_limit_is_accepted() {
    let db = Database::sqlite_in_memory().unwrap();
    let cast = cast(&db);
    let feedback = "y".repeat(restaurant_reviews::MAX_FEEDBACK_LEN);

    let review = db.add_review(cast.bob.id, cast.c.id, 3, &feedback).unwrap();
    assert_eq!(review.feedback.chars().count(), 250);
}

#[test]
fn delete_removes_every_matching_review_and_nothing_else() {
    let db = Database::in_memory();
    let cast = cast(&db);
    db.add_review(cast.john.id, cast.a.id, 4, "Good").unwrap();
    db.add_review(cast.john.id, cast.a.id, 2, "Worse the second time").unwrap();
    let other_restaurant = db.add_review(cast.john.id, cast.b.id, 5, "Excellent").unwrap();
    let other_customer = db.add_review(cast.bob.id, cast.a.id, 2, "Poor").unwrap();

    assert_eq!(
        db.delete_reviews_for_restaurant(cast.john.id, cast.a.id).unwrap(),
        2
    );

    let left = db.reviews().unwrap();
    assert_eq!(left, vec![other_restaurant, other_customer]);
    assert!(left
        .iter()
        .all(|r| !(r.customer_id == cast.john.id && r.restaurant_id == cast.a.id)));
}

#[test]
fn delete_with_no_matches_is_a_no_op() {
    let db = Database::sqlite_in_memory().unwrap();
    let cast = cast(&db);
    db.add_review(cast.jane.id, cast.c.id, 3, "Average").unwrap();

    assert_eq!(db.delete_reviews_for_restaurant(cast.jane.id, cast.a.id).unwrap(), 0);
    assert_eq!(
        db.delete_reviews_for_restaurant(CustomerId(500), RestaurantId(500))
            .unwrap(),
        0
    );
    assert_eq!(db.reviews().unwrap().len(), 1);
}

#[test]
fn links_reappear_after_a_new_review() {
    let db = Database::in_memory();
    let cast = cast(&db);
    db.add_review(cast.bob.id, cast.a.id, 2, "Poor").unwrap();
    db.delete_reviews_for_restaurant(cast.bob.id, cast.a.id).unwrap();
    assert!(!db.customers_of(cast.a.id).unwrap().contains(&cast.bob.id));

    db.add_review(cast.bob.id, cast.a.id, 3, "Better now").unwrap();
    assert!(db.customers_of(cast.a.id).unwrap().contains(&cast.bob.id));
    assert_eq!(
        db.restaurants_for(cast.bob.id).unwrap(),
        vec![cast.a.clone()]
    );
}
