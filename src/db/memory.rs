use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Result, ReviewError};
use crate::models::{
    Customer, CustomerId, EntityKind, NewCustomer, NewRestaurant, NewReview, Restaurant,
    RestaurantId, Review, ReviewId,
};

use super::Store;

/// Store backed by ordered maps. Ids come from per-kind counters that only
/// ever grow, so a deleted review's id is never handed out again.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    restaurants: BTreeMap<RestaurantId, Restaurant>,
    customers: BTreeMap<CustomerId, Customer>,
    reviews: BTreeMap<ReviewId, Review>,
    last_restaurant_id: i64,
    last_customer_id: i64,
    last_review_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn insert_restaurant(&mut self, new: NewRestaurant) -> Result<Restaurant> {
        self.last_restaurant_id += 1;
        let restaurant = new.into_restaurant(RestaurantId(self.last_restaurant_id));
        self.restaurants.insert(restaurant.id, restaurant.clone());
        Ok(restaurant)
    }

    fn insert_customer(&mut self, new: NewCustomer) -> Result<Customer> {
        self.last_customer_id += 1;
        let customer = new.into_customer(CustomerId(self.last_customer_id));
        self.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    fn insert_review(&mut self, new: NewReview) -> Result<Review> {
        self.last_review_id += 1;
        let review = new.into_review(ReviewId(self.last_review_id));
        self.reviews.insert(review.id, review.clone());
        Ok(review)
    }

    fn restaurant(&self, id: RestaurantId) -> Result<Option<Restaurant>> {
        Ok(self.restaurants.get(&id).cloned())
    }

    fn customer(&self, id: CustomerId) -> Result<Option<Customer>> {
        Ok(self.customers.get(&id).cloned())
    }

    fn review(&self, id: ReviewId) -> Result<Option<Review>> {
        Ok(self.reviews.get(&id).cloned())
    }

    fn restaurants(&self) -> Result<Vec<Restaurant>> {
        Ok(self.restaurants.values().cloned().collect())
    }

    fn customers(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.values().cloned().collect())
    }

    fn reviews(&self) -> Result<Vec<Review>> {
        Ok(self.reviews.values().cloned().collect())
    }

    fn delete_reviews(&mut self, ids: &[ReviewId]) -> Result<usize> {
        let unique: BTreeSet<ReviewId> = ids.iter().copied().collect();
        // Check everything before touching the map so a bad id removes nothing.
        if let Some(missing) = unique.iter().find(|id| !self.reviews.contains_key(id)) {
            return Err(ReviewError::not_found(EntityKind::Review, missing.get()));
        }
        for id in &unique {
            self.reviews.remove(id);
        }
        Ok(unique.len())
    }
}
