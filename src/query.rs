//! Read-only reports over a store.
//!
//! Both aggregate queries break ties by creation order: among equal maxima
//! the restaurant (or review) with the lowest id wins. Stores return rows in
//! id order and the reductions below only replace the current best on a
//! strictly greater value, which is what pins that rule.

use tracing::debug;

use crate::db::Store;
use crate::error::{Result, ReviewError};
use crate::models::{CustomerId, EntityKind, Restaurant, RestaurantId, Review};

/// The restaurant with the highest price tier.
///
/// # Errors
///
/// `EmptyDomain` when the store has no restaurants.
pub fn fanciest<S: Store + ?Sized>(store: &S) -> Result<Restaurant> {
    let fanciest = store
        .restaurants()?
        .into_iter()
        .reduce(|best, next| if next.price > best.price { next } else { best })
        .ok_or(ReviewError::EmptyDomain("restaurants"))?;
    debug!(restaurant = %fanciest.id, price = fanciest.price, "fanciest restaurant");
    Ok(fanciest)
}

/// `"Review for {restaurant} by {customer}: {stars} stars."`
///
/// # Errors
///
/// `Internal` if either reference in the review does not resolve.
pub fn full_review<S: Store + ?Sized>(store: &S, review: &Review) -> Result<String> {
    let restaurant = store
        .restaurant(review.restaurant_id)?
        .ok_or_else(|| ReviewError::dangling(EntityKind::Restaurant, review.restaurant_id.get()))?;
    let customer = store
        .customer(review.customer_id)?
        .ok_or_else(|| ReviewError::dangling(EntityKind::Customer, review.customer_id.get()))?;

    Ok(format!(
        "Review for {} by {}: {} stars.",
        restaurant.name,
        customer.full_name(),
        review.star_rating
    ))
}

/// [`full_review`] for every review of a restaurant, oldest first.
pub fn all_reviews<S: Store + ?Sized>(
    store: &S,
    restaurant_id: RestaurantId,
) -> Result<Vec<String>> {
    if store.restaurant(restaurant_id)?.is_none() {
        return Err(ReviewError::not_found(EntityKind::Restaurant, restaurant_id.get()));
    }

    store
        .reviews_for_restaurant(restaurant_id)?
        .iter()
        .map(|review| full_review(store, review))
        .collect()
}

/// Restaurant of the customer's best-rated review, or `None` when the
/// customer has not reviewed anything yet.
pub fn favorite_restaurant<S: Store + ?Sized>(
    store: &S,
    customer_id: CustomerId,
) -> Result<Option<Restaurant>> {
    if store.customer(customer_id)?.is_none() {
        return Err(ReviewError::not_found(EntityKind::Customer, customer_id.get()));
    }

    let best = store
        .reviews_by_customer(customer_id)?
        .into_iter()
        .reduce(|best, next| {
            if next.star_rating > best.star_rating {
                next
            } else {
                best
            }
        });

    let Some(review) = best else {
        return Ok(None);
    };

    let restaurant = store
        .restaurant(review.restaurant_id)?
        .ok_or_else(|| ReviewError::dangling(EntityKind::Restaurant, review.restaurant_id.get()))?;
    Ok(Some(restaurant))
}
