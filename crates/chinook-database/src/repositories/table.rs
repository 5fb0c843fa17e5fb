//! Generic single-table repository.
//!
//! Every catalog entity shares the same statement shapes: count-by-key,
//! select-ordered-paged, select-by-key, insert-returning-row,
//! update-by-key, delete-by-key. [`TableRepository`] implements them once;
//! the [`Table`] trait supplies the per-entity configuration (table name,
//! key column, data columns, value binding). Entity-specific queries live
//! as inherent impls on the concrete `TableRepository<E>` types.

use std::marker::PhantomData;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};
use tracing::error;

use chinook_core::error::{AppError, ErrorKind};
use chinook_core::result::AppResult;
use chinook_core::types::mutation::MutationOutcome;
use chinook_core::types::pagination::PageRequest;

/// Typed postgres query handed to the [`Table`] bind hooks.
pub type EntityQuery<'q, O> = QueryAs<'q, Postgres, O, PgArguments>;

/// Per-entity table configuration consumed by [`TableRepository`].
pub trait Table: for<'r> sqlx::FromRow<'r, PgRow> + Send + Sync + Unpin {
    /// Insert payload: all data columns, no key.
    type Create: Send + Sync;

    /// Table name as it appears in SQL.
    const TABLE: &'static str;
    /// Primary key column.
    const KEY_COLUMN: &'static str;
    /// Non-key columns, in the order the bind methods push their values.
    const DATA_COLUMNS: &'static [&'static str];

    /// The surrogate key of this row.
    fn key(&self) -> i32;

    /// Bind the insert payload's values in `DATA_COLUMNS` order.
    fn bind_create<'q, O>(data: &'q Self::Create, query: EntityQuery<'q, O>)
    -> EntityQuery<'q, O>;

    /// Bind this row's non-key values in `DATA_COLUMNS` order.
    fn bind_data<'q, O>(&'q self, query: EntityQuery<'q, O>) -> EntityQuery<'q, O>;
}

/// Statement text generation from [`Table`] configuration.
pub(crate) mod statements {
    use super::Table;

    pub(crate) fn count_by_key<E: Table>() -> String {
        format!(
            "SELECT COUNT(1) FROM {} WHERE {} = $1",
            E::TABLE,
            E::KEY_COLUMN
        )
    }

    pub(crate) fn select_page<E: Table>() -> String {
        format!(
            "SELECT * FROM {} ORDER BY {} ASC LIMIT $1 OFFSET $2",
            E::TABLE,
            E::KEY_COLUMN
        )
    }

    pub(crate) fn select_by_key<E: Table>() -> String {
        format!("SELECT * FROM {} WHERE {} = $1", E::TABLE, E::KEY_COLUMN)
    }

    pub(crate) fn insert_returning<E: Table>() -> String {
        let placeholders = (1..=E::DATA_COLUMNS.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            E::TABLE,
            E::DATA_COLUMNS.join(", "),
            placeholders
        )
    }

    pub(crate) fn update_by_key<E: Table>() -> String {
        let assignments = E::DATA_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{col} = ${}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET {} WHERE {} = ${} RETURNING *",
            E::TABLE,
            assignments,
            E::KEY_COLUMN,
            E::DATA_COLUMNS.len() + 1
        )
    }

    pub(crate) fn delete_by_key<E: Table>() -> String {
        format!("DELETE FROM {} WHERE {} = $1", E::TABLE, E::KEY_COLUMN)
    }
}

/// Postgres takes LIMIT/OFFSET as signed integers; saturate rather than
/// wrap an oversized paging value into a negative one.
fn saturate_to_i64(value: u64) -> i64 {
    value.min(i64::MAX as u64) as i64
}

/// Repository for CRUD and paged query operations on one entity table.
///
/// Holds the shared pool; each operation checks out a connection for
/// exactly one statement, so no connection is ever held across calls or
/// shared between concurrent operations. There is no transaction spanning
/// the existence check and the update statement: a row deleted in between
/// surfaces as a not-found outcome, which is the accepted race.
#[derive(Debug, Clone)]
pub struct TableRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Table> TableRepository<E> {
    /// Create a new repository over the shared pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Whether a row with the given key exists (count-by-key).
    ///
    /// Used internally by [`update`](Self::update); the supervisor never
    /// calls it directly.
    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let sql = statements::count_by_key::<E>();
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to check {} existence", E::TABLE),
                    e,
                )
            })?;
        Ok(count >= 1)
    }

    /// One page of rows, ordered by primary key ascending.
    ///
    /// Paging bounds are validated by the controller layer; the request is
    /// executed as given.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<Vec<E>> {
        let sql = statements::select_page::<E>();
        sqlx::query_as::<_, E>(&sql)
            .bind(saturate_to_i64(page.limit()))
            .bind(saturate_to_i64(page.offset()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to list {}", E::TABLE),
                    e,
                )
            })
    }

    /// Single-row lookup by key. `None` when no row matches.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<E>> {
        let sql = statements::select_by_key::<E>();
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to find {} by id", E::TABLE),
                    e,
                )
            })
    }

    /// Insert a new row; the store assigns the key. Returns the stored
    /// row. Constraint violations (e.g. an invalid foreign key) propagate
    /// unmodified as a database error; this layer performs no translation.
    pub async fn create(&self, data: &E::Create) -> AppResult<E> {
        let sql = statements::insert_returning::<E>();
        E::bind_create(data, sqlx::query_as::<_, E>(&sql))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to insert into {}", E::TABLE),
                    e,
                )
            })
    }

    /// Update all non-key columns of the row with this entity's key.
    ///
    /// The existence check runs first; when it finds nothing, no update
    /// statement is issued. A store fault during the update itself is
    /// logged and downgraded to [`MutationOutcome::Faulted`], while a
    /// fault during the existence check propagates as `Err`.
    pub async fn update(&self, entity: &E) -> AppResult<MutationOutcome> {
        if !self.exists(entity.key()).await? {
            return Ok(MutationOutcome::NotFound);
        }

        let sql = statements::update_by_key::<E>();
        let query = entity
            .bind_data(sqlx::query_as::<_, E>(&sql))
            .bind(entity.key());
        match query.fetch_optional(&self.pool).await {
            Ok(Some(_)) => Ok(MutationOutcome::Applied),
            // Row vanished between the existence check and the statement.
            Ok(None) => Ok(MutationOutcome::NotFound),
            Err(e) => {
                error!("{}", e);
                Ok(MutationOutcome::Faulted(e.to_string()))
            }
        }
    }

    /// Delete the row with the given key. A store fault is logged and
    /// downgraded to [`MutationOutcome::Faulted`].
    pub async fn delete(&self, id: i32) -> AppResult<MutationOutcome> {
        let sql = statements::delete_by_key::<E>();
        match sqlx::query(&sql).bind(id).execute(&self.pool).await {
            Ok(result) if result.rows_affected() >= 1 => Ok(MutationOutcome::Applied),
            Ok(_) => Ok(MutationOutcome::NotFound),
            Err(e) => {
                error!("{}", e);
                Ok(MutationOutcome::Faulted(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{saturate_to_i64, statements};
    use chinook_entity::{Album, Artist};

    #[test]
    fn test_oversized_paging_values_never_go_negative() {
        assert_eq!(saturate_to_i64(0), 0);
        assert_eq!(saturate_to_i64(25), 25);
        assert_eq!(saturate_to_i64(i64::MAX as u64), i64::MAX);
        assert_eq!(saturate_to_i64(u64::MAX), i64::MAX);
    }

    #[test]
    fn test_artist_statements() {
        assert_eq!(
            statements::count_by_key::<Artist>(),
            "SELECT COUNT(1) FROM artists WHERE artist_id = $1"
        );
        assert_eq!(
            statements::select_page::<Artist>(),
            "SELECT * FROM artists ORDER BY artist_id ASC LIMIT $1 OFFSET $2"
        );
        assert_eq!(
            statements::select_by_key::<Artist>(),
            "SELECT * FROM artists WHERE artist_id = $1"
        );
        assert_eq!(
            statements::insert_returning::<Artist>(),
            "INSERT INTO artists (name) VALUES ($1) RETURNING *"
        );
        assert_eq!(
            statements::update_by_key::<Artist>(),
            "UPDATE artists SET name = $1 WHERE artist_id = $2 RETURNING *"
        );
        assert_eq!(
            statements::delete_by_key::<Artist>(),
            "DELETE FROM artists WHERE artist_id = $1"
        );
    }

    #[test]
    fn test_album_statements_cover_all_data_columns() {
        assert_eq!(
            statements::insert_returning::<Album>(),
            "INSERT INTO albums (title, artist_id) VALUES ($1, $2) RETURNING *"
        );
        assert_eq!(
            statements::update_by_key::<Album>(),
            "UPDATE albums SET title = $1, artist_id = $2 WHERE album_id = $3 RETURNING *"
        );
        assert_eq!(
            statements::select_page::<Album>(),
            "SELECT * FROM albums ORDER BY album_id ASC LIMIT $1 OFFSET $2"
        );
    }
}
