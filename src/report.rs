//! Plain-text summary of a database, printed by `restaurant-reviews report`.

use std::fmt::Write as _;

use crate::database::Database;
use crate::db::Store;
use crate::error::{Result, ReviewError};

/// Render every restaurant with its reviews and reviewers, every customer
/// with the restaurants they reviewed and their favorite, then the fanciest
/// restaurant.
pub fn render<S: Store>(db: &Database<S>) -> Result<String> {
    let mut out = String::new();
    // Writes into a String cannot fail.

    out.push_str("Restaurants\n");
    for restaurant in db.restaurants()? {
        let _ = writeln!(out, "  {} ({})", restaurant.name, restaurant.price_label());
        let reviews = db.all_reviews(restaurant.id)?;
        if reviews.is_empty() {
            out.push_str("    no reviews yet\n");
        }
        for review in reviews {
            let _ = writeln!(out, "    {review}");
        }
        let customers = db.customers_for(restaurant.id)?;
        if !customers.is_empty() {
            let names: Vec<String> = customers.iter().map(|c| c.full_name()).collect();
            let _ = writeln!(out, "    reviewed by: {}", names.join(", "));
        }
    }

    out.push_str("\nCustomers\n");
    for customer in db.customers()? {
        let _ = writeln!(out, "  {}", customer.full_name());
        let restaurants = db.restaurants_for(customer.id)?;
        let names: Vec<&str> = restaurants.iter().map(|r| r.name.as_str()).collect();
        if names.is_empty() {
            out.push_str("    has not reviewed anything\n");
        } else {
            let _ = writeln!(out, "    reviewed: {}", names.join(", "));
        }
        if let Some(favorite) = db.favorite_restaurant(customer.id)? {
            let _ = writeln!(out, "    favorite: {}", favorite.name);
        }
    }

    out.push('\n');
    match db.fanciest() {
        Ok(restaurant) => {
            let _ = writeln!(
                out,
                "Fanciest restaurant: {} ({})",
                restaurant.name,
                restaurant.price_label()
            );
        }
        Err(ReviewError::EmptyDomain(_)) => out.push_str("Fanciest restaurant: none\n"),
        Err(err) => return Err(err),
    }

    Ok(out)
}
