use rusqlite::Connection;
use tracing::debug;

use crate::error::Result;

/// Open a private in-memory SQLite database and create the schema. The data
/// lives exactly as long as the returned connection.
///
/// Foreign keys are switched on so a review can never point at a restaurant
/// or customer row that does not exist, mirroring the checks the memory store
/// relies on the mutation layer for.
pub(crate) fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute("PRAGMA foreign_keys = ON", [])?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS restaurants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price INTEGER NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL
        )",
        [],
    )?;

    // AUTOINCREMENT keeps SQLite from recycling the id of a deleted review.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            star_rating INTEGER NOT NULL,
            feedback TEXT NOT NULL CHECK (length(feedback) <= 250),
            customer_id INTEGER NOT NULL,
            restaurant_id INTEGER NOT NULL,
            FOREIGN KEY(customer_id) REFERENCES customers(id),
            FOREIGN KEY(restaurant_id) REFERENCES restaurants(id)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS reviews_by_restaurant ON reviews(restaurant_id)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS reviews_by_customer ON reviews(customer_id)",
        [],
    )?;

    debug!("opened in-memory sqlite store");
    Ok(conn)
}
