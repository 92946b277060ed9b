use sqlx::sqlite::{SqliteArguments, SqlitePool, SqliteRow};
use sqlx::{FromRow, Row, Sqlite};

use crate::database::manager::DatabaseError;
use crate::filter::types::SqlResult;
use crate::filter::{Filter, StudentFilter, StudentOrder};

/// Executes a `Filter` against the pool and maps rows into `T`
pub struct QueryBuilder<T> {
    filter: Filter,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> QueryBuilder<T>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    pub fn new(table_name: &'static str) -> Self {
        Self {
            filter: Filter::new(table_name),
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn filter(mut self, constraints: StudentFilter) -> Self {
        self.filter = self.filter.constraints(constraints);
        self
    }

    pub fn order(mut self, order: StudentOrder) -> Self {
        self.filter = self.filter.order(order);
        self
    }

    pub async fn select_all(self, pool: &SqlitePool) -> Result<Vec<T>, DatabaseError> {
        let sql_result = self.filter.to_sql();
        tracing::debug!("select: {} {:?}", sql_result.query, sql_result.params);
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = q.bind(p);
        }
        let rows = q.fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn count(self, pool: &SqlitePool) -> Result<i64, DatabaseError> {
        let sql_result = self.filter.to_count_sql();
        let row = bind_params(sqlx::query(&sql_result.query), &sql_result)
            .fetch_one(pool)
            .await?;
        let count: i64 = row.try_get("count")?;
        Ok(count)
    }
}

fn bind_params<'q>(
    mut q: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    sql_result: &'q SqlResult,
) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
    for p in sql_result.params.iter() {
        q = q.bind(p);
    }
    q
}
