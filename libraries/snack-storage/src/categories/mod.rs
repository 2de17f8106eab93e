use snack_core::{
    error::{Result, SnackError},
    types::{Category, CategoryId, CreateCategory, UpdateCategory},
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

fn from_row(row: &SqliteRow) -> Result<Category> {
    Ok(Category {
        id: CategoryId::new(row.try_get::<String, _>("id")?),
        name: row.try_get("name")?,
        color_hex: row.try_get("color_hex")?,
        created_at: row.try_get("created_at")?,
    })
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Category>> {
    let rows = sqlx::query(
        "SELECT id, name, color_hex, created_at
         FROM categories
         ORDER BY name COLLATE NOCASE",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(from_row).collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: &CategoryId) -> Result<Option<Category>> {
    let row = sqlx::query(
        "SELECT id, name, color_hex, created_at
         FROM categories
         WHERE id = ?",
    )
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(from_row).transpose()
}

/// Case-insensitive lookup, trimming surrounding whitespace
///
/// Compared in Rust rather than with `COLLATE NOCASE`, which only folds ASCII.
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Category>> {
    let wanted = name.trim().to_lowercase();
    let all = get_all(pool).await?;

    Ok(all
        .into_iter()
        .find(|cat| cat.name.trim().to_lowercase() == wanted))
}

pub async fn count(pool: &SqlitePool) -> Result<u32> {
    let row = sqlx::query("SELECT COUNT(*) AS total FROM categories")
        .fetch_one(pool)
        .await?;
    let total: i64 = row.try_get("total")?;
    Ok(total as u32)
}

pub async fn create(pool: &SqlitePool, category: CreateCategory) -> Result<Category> {
    let id = CategoryId::generate();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO categories (id, name, color_hex, created_at)
         VALUES (?, ?, ?, ?)",
    )
    .bind(id.as_str())
    .bind(&category.name)
    .bind(&category.color_hex)
    .bind(now)
    .execute(pool)
    .await?;

    tracing::debug!(id = %id, name = %category.name, "category created");

    Ok(Category {
        id,
        name: category.name,
        color_hex: category.color_hex,
        created_at: now,
    })
}

pub async fn update(pool: &SqlitePool, id: &CategoryId, update: UpdateCategory) -> Result<Category> {
    let result = sqlx::query(
        "UPDATE categories
         SET name = ?, color_hex = ?
         WHERE id = ?",
    )
    .bind(&update.name)
    .bind(&update.color_hex)
    .bind(id.as_str())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(SnackError::not_found("Category", id.as_str()));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| SnackError::storage("Failed to retrieve updated category"))
}

pub async fn delete(pool: &SqlitePool, id: &CategoryId) -> Result<()> {
    let result = sqlx::query("DELETE FROM categories WHERE id = ?")
        .bind(id.as_str())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(SnackError::not_found("Category", id.as_str()));
    }

    Ok(())
}
