//! Schema creation and sample-data seeding.
//!
//! Statements are idempotent (`IF NOT EXISTS` / `INSERT OR IGNORE`) so
//! `migrate` and `seed` can be re-run safely.

use sqlx::SqlitePool;

/// Table-creation statements, in dependency order.
const CREATE_TABLES: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT UNIQUE NOT NULL,
        phone TEXT
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT,
        price TEXT NOT NULL,
        category TEXT
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER,
        product_id INTEGER,
        quantity INTEGER NOT NULL,
        order_date TEXT NOT NULL,
        status TEXT NOT NULL,
        FOREIGN KEY (user_id) REFERENCES users (id),
        FOREIGN KEY (product_id) REFERENCES products (id)
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS faqs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        category TEXT
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS conversations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER,
        message TEXT NOT NULL,
        response TEXT NOT NULL,
        timestamp TEXT NOT NULL,
        sentiment INTEGER,
        FOREIGN KEY (user_id) REFERENCES users (id)
    )
    ",
];

/// Create all tables if they do not exist.
///
/// # Errors
///
/// Returns `sqlx::Error` if any statement fails.
pub async fn init(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in CREATE_TABLES {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Populate the store with a small sample data set.
///
/// # Errors
///
/// Returns `sqlx::Error` if any insert fails.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let users: &[(&str, &str, &str)] = &[
        ("John Doe", "john@example.com", "123-456-7890"),
        ("Jane Smith", "jane@example.com", "098-765-4321"),
    ];
    for (name, email, phone) in users {
        sqlx::query("INSERT OR IGNORE INTO users (name, email, phone) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(phone)
            .execute(pool)
            .await?;
    }

    let products: &[(i64, &str, &str, &str, &str)] = &[
        (1, "Laptop", "High-performance laptop", "999.99", "Electronics"),
        (
            2,
            "Headphones",
            "Noise-cancelling headphones",
            "199.99",
            "Electronics",
        ),
        (3, "Book", "Bestseller novel", "19.99", "Books"),
    ];
    for (id, name, description, price, category) in products {
        sqlx::query(
            "INSERT OR IGNORE INTO products (id, name, description, price, category)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(category)
        .execute(pool)
        .await?;
    }

    let orders: &[(i64, i64, i64, i64, &str, &str)] = &[
        (1, 1, 1, 1, "2023-10-01", "shipped"),
        (2, 2, 2, 2, "2023-10-02", "pending"),
    ];
    for (id, user_id, product_id, quantity, order_date, status) in orders {
        sqlx::query(
            "INSERT OR IGNORE INTO orders (id, user_id, product_id, quantity, order_date, status)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .bind(order_date)
        .bind(status)
        .execute(pool)
        .await?;
    }

    let faqs: &[(i64, &str, &str, &str)] = &[
        (
            1,
            "How do I track my order?",
            "You can track your order using the order number provided in your confirmation email.",
            "orders",
        ),
        (
            2,
            "What is your return policy?",
            "We accept returns within 30 days of purchase for a full refund.",
            "returns",
        ),
        (
            3,
            "How do I reset my password?",
            "Click on \"Forgot Password\" on the login page and follow the instructions.",
            "account",
        ),
    ];
    for (id, question, answer, category) in faqs {
        sqlx::query(
            "INSERT OR IGNORE INTO faqs (id, question, answer, category) VALUES (?, ?, ?, ?)",
        )
        .bind(id)
        .bind(question)
        .bind(answer)
        .bind(category)
        .execute(pool)
        .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_pool() -> SqlitePool {
        crate::db::create_memory_pool().await.expect("in-memory pool")
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let pool = memory_pool().await;
        init(&pool).await.expect("first init");
        init(&pool).await.expect("second init");
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let pool = memory_pool().await;
        init(&pool).await.expect("init");
        seed_sample_data(&pool).await.expect("first seed");
        seed_sample_data(&pool).await.expect("second seed");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM faqs")
            .fetch_one(&pool)
            .await
            .expect("count faqs");
        assert_eq!(count, 3);
    }
}
