//! Persistence layer. [`Store`] is the interface the rest of the crate talks
//! to; [`MemoryStore`] keeps everything in ordered maps and [`SqliteStore`]
//! keeps it in an in-memory SQLite database, one query per function.

mod connection;
mod customers;
mod memory;
mod restaurants;
mod reviews;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::models::{
    Customer, CustomerId, NewCustomer, NewRestaurant, NewReview, Restaurant, RestaurantId,
    Review, ReviewId,
};

/// Create/get/all/delete access to the three entity collections.
///
/// Every `insert_*` assigns an id that was never handed out before by this
/// store. Collection reads return rows in ascending id order, which is also
/// creation order. Reviews are the only rows that can be deleted.
pub trait Store {
    /// Store a restaurant under a fresh id and return the full row.
    fn insert_restaurant(&mut self, new: NewRestaurant) -> Result<Restaurant>;
    /// Store a customer under a fresh id and return the full row.
    fn insert_customer(&mut self, new: NewCustomer) -> Result<Customer>;
    /// Store a review row as given. Callers are expected to have resolved
    /// both ids beforehand; see [`crate::mutation::add_review`].
    fn insert_review(&mut self, new: NewReview) -> Result<Review>;

    /// Look up one restaurant. `Ok(None)` when the id was never issued.
    fn restaurant(&self, id: RestaurantId) -> Result<Option<Restaurant>>;
    /// Look up one customer. `Ok(None)` when the id was never issued.
    fn customer(&self, id: CustomerId) -> Result<Option<Customer>>;
    /// Look up one review. `Ok(None)` when the id is unknown or deleted.
    fn review(&self, id: ReviewId) -> Result<Option<Review>>;

    /// Every restaurant, in id order.
    fn restaurants(&self) -> Result<Vec<Restaurant>>;
    /// Every customer, in id order.
    fn customers(&self) -> Result<Vec<Customer>>;
    /// Every live review, in id order.
    fn reviews(&self) -> Result<Vec<Review>>;

    /// Remove every listed review or none of them. Fails with `NotFound` on
    /// the first id that does not resolve; repeated ids count once.
    fn delete_reviews(&mut self, ids: &[ReviewId]) -> Result<usize>;

    /// Reviews of one restaurant, in id order. The default scans
    /// [`Store::reviews`]; indexed stores override it.
    fn reviews_for_restaurant(&self, id: RestaurantId) -> Result<Vec<Review>> {
        Ok(self
            .reviews()?
            .into_iter()
            .filter(|review| review.restaurant_id == id)
            .collect())
    }

    /// Reviews written by one customer, in id order.
    fn reviews_by_customer(&self, id: CustomerId) -> Result<Vec<Review>> {
        Ok(self
            .reviews()?
            .into_iter()
            .filter(|review| review.customer_id == id)
            .collect())
    }

    /// Remove a single review; `NotFound` if it is not there.
    fn delete_review(&mut self, id: ReviewId) -> Result<()> {
        self.delete_reviews(&[id]).map(|_| ())
    }
}
