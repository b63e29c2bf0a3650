//! The customer/restaurant many-to-many view. Nothing here is stored: both
//! directions are projected from the current review rows on every call, so
//! they cannot drift from the reviews they are derived from.

use std::collections::BTreeSet;

use crate::db::Store;
use crate::error::{Result, ReviewError};
use crate::models::{Customer, CustomerId, EntityKind, Restaurant, RestaurantId};

/// Distinct customers with at least one review of `restaurant_id`. Unknown
/// restaurants simply have no reviewers.
pub fn customers_of<S: Store + ?Sized>(
    store: &S,
    restaurant_id: RestaurantId,
) -> Result<BTreeSet<CustomerId>> {
    Ok(store
        .reviews_for_restaurant(restaurant_id)?
        .into_iter()
        .map(|review| review.customer_id)
        .collect())
}

/// Distinct restaurants `customer_id` has reviewed.
pub fn restaurants_of<S: Store + ?Sized>(
    store: &S,
    customer_id: CustomerId,
) -> Result<BTreeSet<RestaurantId>> {
    Ok(store
        .reviews_by_customer(customer_id)?
        .into_iter()
        .map(|review| review.restaurant_id)
        .collect())
}

/// [`customers_of`], resolved to full rows in id order.
pub fn customers_for<S: Store + ?Sized>(
    store: &S,
    restaurant_id: RestaurantId,
) -> Result<Vec<Customer>> {
    customers_of(store, restaurant_id)?
        .into_iter()
        .map(|id| {
            store
                .customer(id)?
                .ok_or_else(|| ReviewError::dangling(EntityKind::Customer, id.get()))
        })
        .collect()
}

/// [`restaurants_of`], resolved to full rows in id order.
pub fn restaurants_for<S: Store + ?Sized>(
    store: &S,
    customer_id: CustomerId,
) -> Result<Vec<Restaurant>> {
    restaurants_of(store, customer_id)?
        .into_iter()
        .map(|id| {
            store
                .restaurant(id)?
                .ok_or_else(|| ReviewError::dangling(EntityKind::Restaurant, id.get()))
        })
        .collect()
}
