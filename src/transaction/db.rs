//! Database queries for storing and retrieving transactions.

use std::str::FromStr;

use rusqlite::{Connection, Row, types::Type};

use crate::{
    Error,
    database_id::TransactionId,
    tag::Tag,
    transaction::core::{Transaction, TransactionDraft, TransactionType},
};

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL,
                amount REAL NOT NULL,
                tag TEXT NOT NULL,
                date TEXT NOT NULL,
                description TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transaction', 0)",
        (),
    )?;

    // Composite index used by the dashboard and goal progress queries.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date_type ON \"transaction\"(date, type);",
        (),
    )?;

    Ok(())
}

/// Insert a validated draft into the database.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    draft: TransactionDraft,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (type, amount, tag, date, description)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, type, amount, tag, date, description",
        )?
        .query_row(
            (
                draft.transaction_type.as_str(),
                draft.amount,
                draft.tag.as_str(),
                draft.date,
                draft.description,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, type, amount, tag, date, description
             FROM \"transaction\" WHERE id = :id",
        )?
        .query_one(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve every transaction, ordered by date then insertion order.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, type, amount, tag, date, description
             FROM \"transaction\" ORDER BY date, id",
        )?
        .query_map((), map_transaction_row)?
        .collect::<Result<Vec<Transaction>, rusqlite::Error>>()
        .map_err(|error| error.into())
}

/// Overwrite the transaction `id` with a validated draft.
///
/// # Errors
/// This function will return a:
/// - [Error::UpdateMissingTransaction] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    draft: TransactionDraft,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection
        .prepare(
            "UPDATE \"transaction\"
             SET type = ?1, amount = ?2, tag = ?3, date = ?4, description = ?5
             WHERE id = ?6
             RETURNING id, type, amount, tag, date, description",
        )?
        .query_row(
            (
                draft.transaction_type.as_str(),
                draft.amount,
                draft.tag.as_str(),
                draft.date,
                draft.description,
                id,
            ),
            map_transaction_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingTransaction,
            error => error.into(),
        })
}

/// Delete the transaction `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingTransaction] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM \"transaction\" WHERE id = :id",
        &[(":id", &id)],
    )?;

    if rows_affected == 0 {
        Err(Error::DeleteMissingTransaction)
    } else {
        Ok(())
    }
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Map a database row to a [Transaction].
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let type_text: String = row.get(1)?;
    let amount = row.get(2)?;
    let tag_text: String = row.get(3)?;
    let date = row.get(4)?;
    let description = row.get(5)?;

    let transaction_type = TransactionType::from_str(&type_text)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(error)))?;
    let tag = Tag::parse(transaction_type, &tag_text)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(error)))?;

    Ok(Transaction {
        id,
        transaction_type,
        amount,
        tag,
        date,
        description,
    })
}
