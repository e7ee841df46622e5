//! Database queries for storing and retrieving savings goals.

use std::str::FromStr;

use rusqlite::{Connection, Row, types::Type};

use crate::{
    Error,
    database_id::GoalId,
    goal::core::{Goal, GoalDraft},
    tag::IncomeTag,
};

/// Create the goal table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_goal_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS goal (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                target_amount REAL NOT NULL,
                tag TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('goal', 0)",
        (),
    )?;

    Ok(())
}

/// Insert a validated draft into the database.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub fn create_goal(draft: GoalDraft, connection: &Connection) -> Result<Goal, Error> {
    let goal = connection
        .prepare(
            "INSERT INTO goal (name, target_amount, tag)
             VALUES (?1, ?2, ?3)
             RETURNING id, name, target_amount, tag",
        )?
        .query_row(
            (draft.name, draft.target_amount, draft.tag.as_str()),
            map_goal_row,
        )?;

    Ok(goal)
}

/// Retrieve a goal from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid goal,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_goal(id: GoalId, connection: &Connection) -> Result<Goal, Error> {
    let goal = connection
        .prepare("SELECT id, name, target_amount, tag FROM goal WHERE id = :id")?
        .query_one(&[(":id", &id)], map_goal_row)?;

    Ok(goal)
}

/// Retrieve every goal in creation order.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub fn get_all_goals(connection: &Connection) -> Result<Vec<Goal>, Error> {
    connection
        .prepare("SELECT id, name, target_amount, tag FROM goal ORDER BY id")?
        .query_map((), map_goal_row)?
        .collect::<Result<Vec<Goal>, rusqlite::Error>>()
        .map_err(|error| error.into())
}

/// Overwrite the goal `id` with a validated draft.
///
/// # Errors
/// This function will return a:
/// - [Error::UpdateMissingGoal] if `id` does not refer to a valid goal,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_goal(id: GoalId, draft: GoalDraft, connection: &Connection) -> Result<Goal, Error> {
    connection
        .prepare(
            "UPDATE goal SET name = ?1, target_amount = ?2, tag = ?3
             WHERE id = ?4
             RETURNING id, name, target_amount, tag",
        )?
        .query_row(
            (draft.name, draft.target_amount, draft.tag.as_str(), id),
            map_goal_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingGoal,
            error => error.into(),
        })
}

/// Delete the goal `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingGoal] if `id` does not refer to a valid goal,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn delete_goal(id: GoalId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM goal WHERE id = :id", &[(":id", &id)])?;

    if rows_affected == 0 {
        Err(Error::DeleteMissingGoal)
    } else {
        Ok(())
    }
}

/// Map a database row to a [Goal].
fn map_goal_row(row: &Row) -> Result<Goal, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;
    let target_amount = row.get(2)?;
    let tag_text: String = row.get(3)?;

    let tag = IncomeTag::from_str(&tag_text)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(error)))?;

    Ok(Goal {
        id,
        name,
        target_amount,
        tag,
    })
}
