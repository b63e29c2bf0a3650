use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::Result;
use crate::models::{NewRestaurant, Restaurant, RestaurantId};

fn from_row(row: &Row<'_>) -> rusqlite::Result<Restaurant> {
    Ok(Restaurant {
        id: RestaurantId(row.get(0)?),
        name: row.get(1)?,
        price: row.get(2)?,
    })
}

/// Every restaurant in creation order.
pub(crate) fn fetch_restaurants(conn: &Connection) -> Result<Vec<Restaurant>> {
    let mut stmt = conn.prepare("SELECT id, name, price FROM restaurants ORDER BY id")?;

    let restaurants = stmt
        .query_map([], from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(restaurants)
}

pub(crate) fn fetch_restaurant(conn: &Connection, id: RestaurantId) -> Result<Option<Restaurant>> {
    let restaurant = conn
        .query_row(
            "SELECT id, name, price FROM restaurants WHERE id = ?1",
            [id.get()],
            from_row,
        )
        .optional()?;
    Ok(restaurant)
}

/// Insert a new restaurant row and echo it back with its assigned id.
pub(crate) fn create_restaurant(conn: &Connection, new: NewRestaurant) -> Result<Restaurant> {
    conn.execute(
        "INSERT INTO restaurants (name, price) VALUES (?1, ?2)",
        params![new.name, new.price],
    )?;

    let id = RestaurantId(conn.last_insert_rowid());
    Ok(new.into_restaurant(id))
}
