//! Sample data loaded at startup: three restaurants, three customers and the
//! four reviews linking them.

use tracing::info;

use crate::database::Database;
use crate::db::Store;
use crate::error::Result;

const RESTAURANTS: &[(&str, i64)] = &[
    ("Restaurant A", 3),
    ("Restaurant B", 2),
    ("Restaurant C", 4),
];

const CUSTOMERS: &[(&str, &str)] = &[("John", "Doe"), ("Jane", "Smith"), ("Bob", "Johnson")];

/// `(customer index, restaurant index, stars, feedback)` into the tables above.
const REVIEWS: &[(usize, usize, i64, &str)] = &[
    (0, 0, 4, "Good"),
    (0, 1, 5, "Excellent"),
    (1, 2, 3, "Average"),
    (2, 0, 2, "Poor"),
];

/// Insert the sample restaurants, customers and reviews.
pub fn seed_sample_data<S: Store>(db: &Database<S>) -> Result<()> {
    let restaurants = RESTAURANTS
        .iter()
        .map(|(name, price)| db.create_restaurant(name, *price))
        .collect::<Result<Vec<_>>>()?;
    let customers = CUSTOMERS
        .iter()
        .map(|(first, last)| db.create_customer(first, last))
        .collect::<Result<Vec<_>>>()?;

    for (customer, restaurant, stars, feedback) in REVIEWS {
        db.add_review(
            customers[*customer].id,
            restaurants[*restaurant].id,
            *stars,
            feedback,
        )?;
    }

    info!(
        restaurants = restaurants.len(),
        customers = customers.len(),
        reviews = REVIEWS.len(),
        "seeded sample data"
    );
    Ok(())
}

/// Seed only when the store holds no restaurants and no customers yet.
/// Returns whether anything was inserted.
pub fn load_or_seed<S: Store>(db: &Database<S>) -> Result<bool> {
    if !db.restaurants()?.is_empty() || !db.customers()?.is_empty() {
        return Ok(false);
    }
    seed_sample_data(db)?;
    Ok(true)
}
