use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::Result;
use crate::models::{Customer, CustomerId, NewCustomer};

fn from_row(row: &Row<'_>) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: CustomerId(row.get(0)?),
        first_name: row.get(1)?,
        last_name: row.get(2)?,
    })
}

pub(crate) fn fetch_customers(conn: &Connection) -> Result<Vec<Customer>> {
    let mut stmt = conn.prepare("SELECT id, first_name, last_name FROM customers ORDER BY id")?;

    let customers = stmt
        .query_map([], from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(customers)
}

pub(crate) fn fetch_customer(conn: &Connection, id: CustomerId) -> Result<Option<Customer>> {
    let customer = conn
        .query_row(
            "SELECT id, first_name, last_name FROM customers WHERE id = ?1",
            [id.get()],
            from_row,
        )
        .optional()?;
    Ok(customer)
}

pub(crate) fn create_customer(conn: &Connection, new: NewCustomer) -> Result<Customer> {
    conn.execute(
        "INSERT INTO customers (first_name, last_name) VALUES (?1, ?2)",
        params![new.first_name, new.last_name],
    )?;

    let id = CustomerId(conn.last_insert_rowid());
    Ok(new.into_customer(id))
}
