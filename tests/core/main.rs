//! Integration tests for the association index, queries and mutations,
//! driven through `Database`.

mod mutations;
mod scenarios;

use restaurant_reviews::{Customer, Database, Restaurant, Store};

/// Restaurants A(3), B(2), C(4) and customers John Doe, Jane Smith and
/// Bob Johnson, with no reviews yet.
pub struct Cast {
    pub a: Restaurant,
    pub b: Restaurant,
    pub c: Restaurant,
    pub john: Customer,
    pub jane: Customer,
    pub bob: Customer,
}

pub fn cast<S: Store>(db: &Database<S>) -> Cast {
    Cast {
        a: db.create_restaurant("Restaurant A", 3).unwrap(),
        b: db.create_restaurant("Restaurant B", 2).unwrap(),
        c: db.create_restaurant("Restaurant C", 4).unwrap(),
        john: db.create_customer("John", "Doe").unwrap(),
        jane: db.create_customer("Jane", "Smith").unwrap(),
        bob: db.create_customer("Bob", "Johnson").unwrap(),
    }
}
