use rusqlite::Connection;

use crate::error::Result;
use crate::models::{
    Customer, CustomerId, NewCustomer, NewRestaurant, NewReview, Restaurant, RestaurantId,
    Review, ReviewId,
};

use super::connection::open_in_memory;
use super::customers::{create_customer, fetch_customer, fetch_customers};
use super::restaurants::{create_restaurant, fetch_restaurant, fetch_restaurants};
use super::reviews::{
    create_review, delete_reviews, fetch_review, fetch_reviews, fetch_reviews_by_customer,
    fetch_reviews_for_restaurant,
};
use super::Store;

/// [`Store`] over a SQLite connection. Each trait method is one of the table
/// helpers in the sibling modules.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Fresh store on a private `:memory:` database.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: open_in_memory()?,
        })
    }
}

impl Store for SqliteStore {
    fn insert_restaurant(&mut self, new: NewRestaurant) -> Result<Restaurant> {
        create_restaurant(&self.conn, new)
    }

    fn insert_customer(&mut self, new: NewCustomer) -> Result<Customer> {
        create_customer(&self.conn, new)
    }

    fn insert_review(&mut self, new: NewReview) -> Result<Review> {
        create_review(&self.conn, new)
    }

    fn restaurant(&self, id: RestaurantId) -> Result<Option<Restaurant>> {
        fetch_restaurant(&self.conn, id)
    }

    fn customer(&self, id: CustomerId) -> Result<Option<Customer>> {
        fetch_customer(&self.conn, id)
    }

    fn review(&self, id: ReviewId) -> Result<Option<Review>> {
        fetch_review(&self.conn, id)
    }

    fn restaurants(&self) -> Result<Vec<Restaurant>> {
        fetch_restaurants(&self.conn)
    }

    fn customers(&self) -> Result<Vec<Customer>> {
        fetch_customers(&self.conn)
    }

    fn reviews(&self) -> Result<Vec<Review>> {
        fetch_reviews(&self.conn)
    }

    fn delete_reviews(&mut self, ids: &[ReviewId]) -> Result<usize> {
        delete_reviews(&mut self.conn, ids)
    }

    fn reviews_for_restaurant(&self, id: RestaurantId) -> Result<Vec<Review>> {
        fetch_reviews_for_restaurant(&self.conn, id)
    }

    fn reviews_by_customer(&self, id: CustomerId) -> Result<Vec<Review>> {
        fetch_reviews_by_customer(&self.conn, id)
    }
}
