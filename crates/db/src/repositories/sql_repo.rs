//! Generic MySQL repository.

use std::marker::PhantomData;

use async_trait::async_trait;
use roomboard_core::types::DbId;

use super::Repository;
use crate::record::Record;
use crate::DbPool;

/// Provides CRUD operations for any [`Record`] over a shared pool.
pub struct SqlRepository<E> {
    pool: DbPool,
    _record: PhantomData<fn() -> E>,
}

impl<E> SqlRepository<E> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

impl<E> Clone for SqlRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<E: Record> SqlRepository<E> {
    fn select_sql(filter: &str) -> String {
        format!("SELECT {} FROM {} {filter}", E::COLUMNS, E::TABLE)
    }

    fn insert_sql() -> String {
        let placeholders = vec!["?"; E::INSERT_COLUMNS.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            E::TABLE,
            E::INSERT_COLUMNS.join(", ")
        )
    }

    fn update_sql() -> String {
        let assignments = E::UPDATE_COLUMNS
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("UPDATE {} SET {assignments} WHERE id = ?", E::TABLE)
    }
}

#[async_trait]
impl<E: Record> Repository<E> for SqlRepository<E> {
    async fn list(&self) -> Result<Vec<E>, sqlx::Error> {
        let query = Self::select_sql("ORDER BY id ASC");
        sqlx::query_as::<_, E>(&query).fetch_all(&self.pool).await
    }

    async fn list_by_parent(&self, parent_id: DbId) -> Result<Vec<E>, sqlx::Error> {
        let Some(column) = E::PARENT_COLUMN else {
            // Top-level resources are never owned by anything.
            return Ok(Vec::new());
        };

        let query = Self::select_sql(&format!("WHERE {column} = ? ORDER BY id ASC"));
        sqlx::query_as::<_, E>(&query)
            .bind(parent_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, sqlx::Error> {
        let query = Self::select_sql("WHERE id = ?");
        sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, input: &E::New) -> Result<DbId, sqlx::Error> {
        let query = Self::insert_sql();
        let result = E::bind_insert(input, sqlx::query(&query))
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id() as DbId)
    }

    async fn update(&self, entity: &E) -> Result<(), sqlx::Error> {
        let query = Self::update_sql();
        let result = entity
            .bind_update(sqlx::query(&query))
            .bind(entity.id())
            .execute(&self.pool)
            .await?;
        tracing::debug!(
            table = E::TABLE,
            id = entity.id(),
            rows = result.rows_affected(),
            "Updated row"
        );
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = ?", E::TABLE);
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;
        tracing::debug!(
            table = E::TABLE,
            id,
            rows = result.rows_affected(),
            "Deleted row"
        );
        Ok(())
    }
}
