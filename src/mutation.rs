//! The only code that writes review rows. Each operation validates and
//! resolves everything it needs before its single write, so a failure never
//! leaves the store half-changed.

use tracing::{info, warn};

use crate::db::Store;
use crate::error::{Result, ReviewError};
use crate::models::{
    CustomerId, EntityKind, NewReview, RestaurantId, Review, ReviewId, MAX_FEEDBACK_LEN,
};

/// Check the review fields and return the rating and feedback to store.
pub fn validate_review_fields(rating: Option<i64>, feedback: &str) -> Result<(i64, String)> {
    let Some(rating) = rating else {
        return Err(ReviewError::Validation("star rating is required".to_string()));
    };
    if feedback.is_empty() {
        return Err(ReviewError::Validation("feedback is required".to_string()));
    }
    let length = feedback.chars().count();
    if length > MAX_FEEDBACK_LEN {
        return Err(ReviewError::Validation(format!(
            "feedback is {length} characters, at most {MAX_FEEDBACK_LEN} allowed"
        )));
    }
    Ok((rating, feedback.to_string()))
}

/// Record `customer_id`'s review of `restaurant_id`.
///
/// # Errors
///
/// - `Validation` if the rating is missing or the feedback is empty or longer
///   than [`MAX_FEEDBACK_LEN`] characters.
/// - `NotFound` if either id does not resolve.
pub fn add_review<S: Store + ?Sized>(
    store: &mut S,
    customer_id: CustomerId,
    restaurant_id: RestaurantId,
    rating: Option<i64>,
    feedback: &str,
) -> Result<Review> {
    let (star_rating, feedback) = validate_review_fields(rating, feedback).inspect_err(|err| {
        warn!(customer = %customer_id, restaurant = %restaurant_id, %err, "rejected review");
    })?;

    if store.customer(customer_id)?.is_none() {
        return Err(ReviewError::not_found(EntityKind::Customer, customer_id.get()));
    }
    if store.restaurant(restaurant_id)?.is_none() {
        return Err(ReviewError::not_found(EntityKind::Restaurant, restaurant_id.get()));
    }

    let review = store.insert_review(NewReview {
        customer_id,
        restaurant_id,
        star_rating,
        feedback,
    })?;
    info!(
        review = %review.id,
        customer = %customer_id,
        restaurant = %restaurant_id,
        rating = star_rating,
        "added review"
    );
    Ok(review)
}

/// Remove every review `customer_id` wrote about `restaurant_id` in one
/// batch and return how many went. No matching reviews is not an error.
pub fn delete_reviews_for_restaurant<S: Store + ?Sized>(
    store: &mut S,
    customer_id: CustomerId,
    restaurant_id: RestaurantId,
) -> Result<usize> {
    let doomed: Vec<ReviewId> = store
        .reviews_by_customer(customer_id)?
        .into_iter()
        .filter(|review| review.restaurant_id == restaurant_id)
        .map(|review| review.id)
        .collect();

    if doomed.is_empty() {
        return Ok(0);
    }

    let deleted = store.delete_reviews(&doomed)?;
    info!(
        customer = %customer_id,
        restaurant = %restaurant_id,
        deleted,
        "deleted reviews"
    );
    Ok(deleted)
}
