use std::collections::BTreeSet;

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{Result, ReviewError};
use crate::models::{CustomerId, EntityKind, NewReview, RestaurantId, Review, ReviewId};

const REVIEW_COLUMNS: &str = "id, star_rating, feedback, customer_id, restaurant_id";

fn from_row(row: &Row<'_>) -> rusqlite::Result<Review> {
    Ok(Review {
        id: ReviewId(row.get(0)?),
        star_rating: row.get(1)?,
        feedback: row.get(2)?,
        customer_id: CustomerId(row.get(3)?),
        restaurant_id: RestaurantId(row.get(4)?),
    })
}

/// Run a review `SELECT` with an optional `WHERE` clause bound to one id.
fn query_reviews(conn: &Connection, filter: Option<(&str, i64)>) -> Result<Vec<Review>> {
    let reviews = match filter {
        Some((column, id)) => {
            let sql =
                format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE {column} = ?1 ORDER BY id");
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([id], from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        }
        None => {
            let sql = format!("SELECT {REVIEW_COLUMNS} FROM reviews ORDER BY id");
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([], from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        }
    };
    Ok(reviews)
}

pub(crate) fn fetch_reviews(conn: &Connection) -> Result<Vec<Review>> {
    query_reviews(conn, None)
}

/// Reviews of one restaurant, oldest first. Served by the
/// `reviews_by_restaurant` index.
pub(crate) fn fetch_reviews_for_restaurant(
    conn: &Connection,
    restaurant_id: RestaurantId,
) -> Result<Vec<Review>> {
    query_reviews(conn, Some(("restaurant_id", restaurant_id.get())))
}

pub(crate) fn fetch_reviews_by_customer(
    conn: &Connection,
    customer_id: CustomerId,
) -> Result<Vec<Review>> {
    query_reviews(conn, Some(("customer_id", customer_id.get())))
}

pub(crate) fn fetch_review(conn: &Connection, id: ReviewId) -> Result<Option<Review>> {
    let sql = format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = ?1");
    let review = conn.query_row(&sql, [id.get()], from_row).optional()?;
    Ok(review)
}

pub(crate) fn create_review(conn: &Connection, new: NewReview) -> Result<Review> {
    conn.execute(
        "INSERT INTO reviews (star_rating, feedback, customer_id, restaurant_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            new.star_rating,
            new.feedback,
            new.customer_id.get(),
            new.restaurant_id.get()
        ],
    )?;

    let id = ReviewId(conn.last_insert_rowid());
    Ok(new.into_review(id))
}

/// Delete a batch of reviews inside one transaction. The transaction rolls
/// back when dropped uncommitted, so an unknown id leaves every row in place.
pub(crate) fn delete_reviews(conn: &mut Connection, ids: &[ReviewId]) -> Result<usize> {
    let unique: BTreeSet<ReviewId> = ids.iter().copied().collect();
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare("DELETE FROM reviews WHERE id = ?1")?;
        for id in &unique {
            if stmt.execute([id.get()])? == 0 {
                return Err(ReviewError::not_found(EntityKind::Review, id.get()));
            }
        }
    }
    tx.commit()?;
    Ok(unique.len())
}
