//! The worked examples for each query, on both backends.

use std::collections::BTreeSet;

use restaurant_reviews::{CustomerId, Database, EntityKind, RestaurantId, ReviewError, Store};

use crate::cast;

fn fanciest_is_the_highest_price<S: Store>(db: Database<S>) {
    let cast = cast(&db);
    assert_eq!(db.fanciest().unwrap(), cast.c);
}

fn favorite_is_the_best_rated<S: Store>(db: Database<S>) {
    let cast = cast(&db);
    db.add_review(cast.john.id, cast.a.id, 4, "Good").unwrap();
    db.add_review(cast.john.id, cast.b.id, 5, "Excellent").unwrap();
    assert_eq!(db.favorite_restaurant(cast.john.id).unwrap(), Some(cast.b));
}

fn full_review_text<S: Store>(db: Database<S>) {
    let cast = cast(&db);
    let review = db.add_review(cast.john.id, cast.a.id, 4, "Good").unwrap();
    assert_eq!(
        db.full_review(&review).unwrap(),
        "Review for Restaurant A by John Doe: 4 stars."
    );
}

fn deleting_bobs_only_review<S: Store>(db: Database<S>) {
    let cast = cast(&db);
    db.add_review(cast.john.id, cast.a.id, 4, "Good").unwrap();
    db.add_review(cast.bob.id, cast.a.id, 2, "Poor").unwrap();

    assert_eq!(db.delete_reviews_for_restaurant(cast.bob.id, cast.a.id).unwrap(), 1);
    assert!(db.restaurants_of(cast.bob.id).unwrap().is_empty());
    assert_eq!(db.customers_of(cast.a.id).unwrap(), BTreeSet::from([cast.john.id]));
}

fn overlong_feedback_changes_nothing<S: Store>(db: Database<S>) {
    let cast = cast(&db);
    db.add_review(cast.jane.id, cast.c.id, 3, "Average").unwrap();
    let before = db.reviews().unwrap();

    let feedback = "x".repeat(251);
    let err = db.add_review(cast.jane.id, cast.a.id, 5, &feedback).unwrap_err();
    assert!(matches!(err, ReviewError::Validation(_)));
    assert_eq!(db.reviews().unwrap(), before);
}

fn all_reviews_in_creation_order<S: Store>(db: Database<S>) {
    let cast = cast(&db);
    db.add_review(cast.bob.id, cast.a.id, 2, "Poor").unwrap();
    db.add_review(cast.john.id, cast.a.id, 4, "Good").unwrap();
    db.add_review(cast.jane.id, cast.b.id, 3, "Fine").unwrap();

    assert_eq!(
        db.all_reviews(cast.a.id).unwrap(),
        [
            "Review for Restaurant A by Bob Johnson: 2 stars.",
            "Review for Restaurant A by John Doe: 4 stars.",
        ]
    );
    assert!(db.all_reviews(cast.c.id).unwrap().is_empty());
}

fn no_reviews_means_no_favorite<S: Store>(db: Database<S>) {
    let cast = cast(&db);
    db.add_review(cast.john.id, cast.a.id, 4, "Good").unwrap();
    assert_eq!(db.favorite_restaurant(cast.jane.id).unwrap(), None);
    assert!(db.restaurants_of(cast.jane.id).unwrap().is_empty());
    assert!(db.customers_of(cast.c.id).unwrap().is_empty());
}

fn fanciest_without_restaurants<S: Store>(db: Database<S>) {
    db.create_customer("John", "Doe").unwrap();
    assert!(matches!(db.fanciest(), Err(ReviewError::EmptyDomain(_))));
}

fn fanciest_tie_goes_to_first_created<S: Store>(db: Database<S>) {
    let cast = cast(&db);
    let rival = db.create_restaurant("Restaurant D", 4).unwrap();
    assert_eq!(db.fanciest().unwrap(), cast.c);
    assert_ne!(db.fanciest().unwrap(), rival);
}

fn favorite_tie_goes_to_earliest_review<S: Store>(db: Database<S>) {
    let cast = cast(&db);
    db.add_review(cast.john.id, cast.c.id, 5, "Superb").unwrap();
    db.add_review(cast.john.id, cast.a.id, 5, "Also superb").unwrap();
    db.add_review(cast.john.id, cast.b.id, 1, "Awful").unwrap();
    assert_eq!(db.favorite_restaurant(cast.john.id).unwrap(), Some(cast.c));
}

fn reads_are_repeatable<S: Store>(db: Database<S>) {
    let cast = cast(&db);
    db.add_review(cast.john.id, cast.a.id, 4, "Good").unwrap();
    db.add_review(cast.john.id, cast.b.id, 4, "Also good").unwrap();

    assert_eq!(db.fanciest().unwrap(), db.fanciest().unwrap());
    assert_eq!(
        db.favorite_restaurant(cast.john.id).unwrap(),
        db.favorite_restaurant(cast.john.id).unwrap()
    );
}

fn whitespace_feedback_is_stored_as_given<S: Store>(db: Database<S>) {
    let cast = cast(&db);
    let err = db.add_review(cast.jane.id, cast.a.id, 4, "").unwrap_err();
    assert!(matches!(err, ReviewError::Validation(_)));

    let review = db.add_review(cast.jane.id, cast.a.id, 4, "   ").unwrap();
    assert_eq!(review.feedback, "   ");
    assert_eq!(db.reviews().unwrap(), [review]);
}

fn lookups_by_id<S: Store>(db: Database<S>) {
    let cast = cast(&db);
    assert_eq!(db.restaurant(cast.b.id).unwrap(), cast.b);
    assert_eq!(db.customer(cast.jane.id).unwrap(), cast.jane);

    assert!(matches!(
        db.restaurant(RestaurantId(99)).unwrap_err(),
        ReviewError::NotFound {
            kind: EntityKind::Restaurant,
            id: 99
        }
    ));
    assert!(matches!(
        db.customer(CustomerId(99)).unwrap_err(),
        ReviewError::NotFound {
            kind: EntityKind::Customer,
            id: 99
        }
    ));
}

macro_rules! on_both_backends {
    ($($check:ident),* $(,)?) => {
        mod memory {
            $(
                #[test]
                fn $check() {
                    super::$check(restaurant_reviews::Database::in_memory());
                }
            )*
        }

        mod sqlite {
            $(
                #[test]
                fn $check() {
                    super::$check(restaurant_reviews::Database::sqlite_in_memory().unwrap());
                }
            )*
        }
    };
}

on_both_backends!(
    fanciest_is_the_highest_price,
    favorite_is_the_best_rated,
    full_review_text,
    deleting_bobs_only_review,
    overlong_feedback_changes_nothing,
    all_reviews_in_creation_order,
    no_reviews_means_no_favorite,
    fanciest_without_restaurants,
    fanciest_tie_goes_to_first_created,
    favorite_tie_goes_to_earliest_review,
    reads_are_repeatable,
    whitespace_feedback_is_stored_as_given,
    lookups_by_id,
);
