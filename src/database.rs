//! [`Database`] owns one store and is the handle callers pass around. Writes
//! run under the write half of a reader/writer lock for their whole
//! check-then-write sequence; reads share the read half, so a query never
//! sees a mutation halfway through.

use std::collections::BTreeSet;

use parking_lot::RwLock;
use tracing::debug;

use crate::association;
use crate::db::{MemoryStore, SqliteStore, Store};
use crate::error::{Result, ReviewError};
use crate::models::{
    Customer, CustomerId, EntityKind, NewCustomer, NewRestaurant, Restaurant, RestaurantId,
    Review,
};
use crate::mutation;
use crate::query;

/// Thread-safe handle over one [`Store`]. All reads and writes go through
/// [`Database::read`] and [`Database::write`].
pub struct Database<S: Store> {
    store: RwLock<S>,
}

impl Database<MemoryStore> {
    /// Empty database on a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl Database<SqliteStore> {
    /// Empty database on a private `:memory:` SQLite connection.
    pub fn sqlite_in_memory() -> Result<Self> {
        Ok(Self::new(SqliteStore::open_in_memory()?))
    }
}

impl<S: Store> Database<S> {
    /// Wrap an existing store, which may already hold rows.
    pub fn new(store: S) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Run `f` with shared access to the store.
    pub fn read<T>(&self, f: impl FnOnce(&S) -> Result<T>) -> Result<T> {
        f(&self.store.read())
    }

    /// Run `f` with exclusive access to the store.
    pub fn write<T>(&self, f: impl FnOnce(&mut S) -> Result<T>) -> Result<T> {
        f(&mut self.store.write())
    }

    /// Add a restaurant and return it with its assigned id.
    pub fn create_restaurant(&self, name: &str, price: i64) -> Result<Restaurant> {
        let restaurant = self.write(|store| {
            store.insert_restaurant(NewRestaurant {
                name: name.to_string(),
                price,
            })
        })?;
        debug!(restaurant = %restaurant.id, name, price, "created restaurant");
        Ok(restaurant)
    }

    /// Add a customer and return it with its assigned id.
    pub fn create_customer(&self, first_name: &str, last_name: &str) -> Result<Customer> {
        let customer = self.write(|store| {
            store.insert_customer(NewCustomer {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            })
        })?;
        debug!(customer = %customer.id, first_name, last_name, "created customer");
        Ok(customer)
    }

    /// Fetch one restaurant, `NotFound` if the id does not resolve.
    pub fn restaurant(&self, id: RestaurantId) -> Result<Restaurant> {
        self.read(|store| store.restaurant(id))?
            .ok_or_else(|| ReviewError::not_found(EntityKind::Restaurant, id.get()))
    }

    /// Fetch one customer, `NotFound` if the id does not resolve.
    pub fn customer(&self, id: CustomerId) -> Result<Customer> {
        self.read(|store| store.customer(id))?
            .ok_or_else(|| ReviewError::not_found(EntityKind::Customer, id.get()))
    }

    /// Every restaurant in creation order.
    pub fn restaurants(&self) -> Result<Vec<Restaurant>> {
        self.read(|store| store.restaurants())
    }

    /// Every customer in creation order.
    pub fn customers(&self) -> Result<Vec<Customer>> {
        self.read(|store| store.customers())
    }

    /// Every review in creation order.
    pub fn reviews(&self) -> Result<Vec<Review>> {
        self.read(|store| store.reviews())
    }

    /// Reviews of one restaurant, oldest first.
    pub fn reviews_for_restaurant(&self, id: RestaurantId) -> Result<Vec<Review>> {
        self.read(|store| store.reviews_for_restaurant(id))
    }

    /// Reviews written by one customer, oldest first.
    pub fn reviews_by_customer(&self, id: CustomerId) -> Result<Vec<Review>> {
        self.read(|store| store.reviews_by_customer(id))
    }

    /// Ids of the customers who reviewed `restaurant_id`. See
    /// [`association::customers_of`].
    pub fn customers_of(&self, restaurant_id: RestaurantId) -> Result<BTreeSet<CustomerId>> {
        self.read(|store| association::customers_of(store, restaurant_id))
    }

    /// Ids of the restaurants `customer_id` reviewed.
    pub fn restaurants_of(&self, customer_id: CustomerId) -> Result<BTreeSet<RestaurantId>> {
        self.read(|store| association::restaurants_of(store, customer_id))
    }

    /// Like [`Database::customers_of`], resolved to full rows.
    pub fn customers_for(&self, restaurant_id: RestaurantId) -> Result<Vec<Customer>> {
        self.read(|store| association::customers_for(store, restaurant_id))
    }

    /// Like [`Database::restaurants_of`], resolved to full rows.
    pub fn restaurants_for(&self, customer_id: CustomerId) -> Result<Vec<Restaurant>> {
        self.read(|store| association::restaurants_for(store, customer_id))
    }

    /// Highest-priced restaurant. See [`query::fanciest`].
    pub fn fanciest(&self) -> Result<Restaurant> {
        self.read(|store| query::fanciest(store))
    }

    /// `Review for {restaurant} by {customer}: {stars} stars.`
    pub fn full_review(&self, review: &Review) -> Result<String> {
        self.read(|store| query::full_review(store, review))
    }

    /// [`Database::full_review`] of every review of `restaurant_id`.
    pub fn all_reviews(&self, restaurant_id: RestaurantId) -> Result<Vec<String>> {
        self.read(|store| query::all_reviews(store, restaurant_id))
    }

    /// Restaurant of `customer_id`'s best-rated review, if they wrote any.
    pub fn favorite_restaurant(&self, customer_id: CustomerId) -> Result<Option<Restaurant>> {
        self.read(|store| query::favorite_restaurant(store, customer_id))
    }

    /// See [`mutation::add_review`]. `rating` accepts a bare integer or an
    /// `Option` so a form can pass through an empty field.
    pub fn add_review(
        &self,
        customer_id: CustomerId,
        restaurant_id: RestaurantId,
        rating: impl Into<Option<i64>>,
        feedback: &str,
    ) -> Result<Review> {
        let rating = rating.into();
        self.write(|store| {
            mutation::add_review(store, customer_id, restaurant_id, rating, feedback)
        })
    }

    /// See [`mutation::delete_reviews_for_restaurant`].
    pub fn delete_reviews_for_restaurant(
        &self,
        customer_id: CustomerId,
        restaurant_id: RestaurantId,
    ) -> Result<usize> {
        self.write(|store| {
            mutation::delete_reviews_for_restaurant(store, customer_id, restaurant_id)
        })
    }
}
