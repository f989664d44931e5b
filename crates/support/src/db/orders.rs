//! Order repository for database operations.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use shopclerk_core::{OrderId, ProductId, UserId};

use super::RepositoryError;
use crate::models::OrderDetail;

/// Internal row type for joined order queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderDetailRow {
    id: i64,
    user_id: i64,
    product_id: i64,
    quantity: i64,
    order_date: String,
    status: String,
    customer_name: String,
    product_name: String,
}

impl TryFrom<OrderDetailRow> for OrderDetail {
    type Error = RepositoryError;

    fn try_from(row: OrderDetailRow) -> Result<Self, Self::Error> {
        let order_date = row.order_date.parse::<NaiveDate>().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid order date in database: {e}"))
        })?;

        Ok(Self {
            id: OrderId::new(row.id),
            user_id: UserId::new(row.user_id),
            product_id: ProductId::new(row.product_id),
            quantity: row.quantity,
            order_date,
            status: row.status,
            customer_name: row.customer_name,
            product_name: row.product_name,
        })
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an order by ID, joined with the owning user's name and the
    /// product's name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored date is invalid.
    pub async fn get_by_id(&self, id: OrderId) -> Result<Option<OrderDetail>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderDetailRow>(
            r"
            SELECT orders.id, orders.user_id, orders.product_id, orders.quantity,
                   orders.order_date, orders.status,
                   users.name AS customer_name, products.name AS product_name
            FROM orders
            JOIN users ON orders.user_id = users.id
            JOIN products ON orders.product_id = products.id
            WHERE orders.id = ?
            ",
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;

    async fn seeded_pool() -> SqlitePool {
        let pool = crate::db::create_memory_pool().await.expect("in-memory pool");
        schema::init(&pool).await.expect("init schema");
        schema::seed_sample_data(&pool).await.expect("seed");
        pool
    }

    #[tokio::test]
    async fn test_get_by_id_joins_names() {
        let pool = seeded_pool().await;
        let repo = OrderRepository::new(&pool);

        let order = repo
            .get_by_id(OrderId::new(1))
            .await
            .expect("query")
            .expect("order exists");
        assert_eq!(order.status, "shipped");
        assert_eq!(order.customer_name, "John Doe");
        assert_eq!(order.product_name, "Laptop");
        assert_eq!(order.order_date.to_string(), "2023-10-01");
    }

    #[tokio::test]
    async fn test_get_by_id_absent() {
        let pool = seeded_pool().await;
        let repo = OrderRepository::new(&pool);

        assert!(
            repo.get_by_id(OrderId::new(9999))
                .await
                .expect("query")
                .is_none()
        );
    }
}
