use snack_core::{
    error::{Result, SnackError},
    types::{AudioRef, CreateSound, Sound, SoundId, UpdateSound},
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SELECT_SOUNDS: &str = "SELECT id, description, asset_name, file_name, file_extension,
            category, sort_order, is_custom, created_at
     FROM sounds";

fn from_row(row: &SqliteRow) -> Result<Sound> {
    let id: String = row.try_get("id")?;
    let asset_name: Option<String> = row.try_get("asset_name")?;
    let file_name: Option<String> = row.try_get("file_name")?;
    let file_extension: Option<String> = row.try_get("file_extension")?;

    // A bundled asset name is looked up before a managed file
    let audio = match (asset_name, file_name) {
        (Some(asset_name), _) => AudioRef::Bundled { asset_name },
        (None, Some(file_name)) => AudioRef::Managed {
            file_name,
            extension: file_extension.unwrap_or_default(),
        },
        (None, None) => {
            return Err(SnackError::storage(format!(
                "Sound {} has no audio reference",
                id
            )))
        }
    };

    let sort_order: i64 = row.try_get("sort_order")?;

    Ok(Sound {
        id: SoundId::new(id),
        description: row.try_get("description")?,
        audio,
        category: row.try_get("category")?,
        order: sort_order as u32,
        is_custom: row.try_get("is_custom")?,
        created_at: row.try_get("created_at")?,
    })
}

fn audio_columns(audio: &AudioRef) -> (Option<&str>, Option<&str>, Option<&str>) {
    match audio {
        AudioRef::Bundled { asset_name } => (Some(asset_name.as_str()), None, None),
        AudioRef::Managed {
            file_name,
            extension,
        } => (None, Some(file_name.as_str()), Some(extension.as_str())),
    }
}

/// All sounds by display order; ties keep insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Sound>> {
    let sql = format!("{} ORDER BY sort_order, created_at, rowid", SELECT_SOUNDS);
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    rows.iter().map(from_row).collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: &SoundId) -> Result<Option<Sound>> {
    let sql = format!("{} WHERE id = ?", SELECT_SOUNDS);
    let row = sqlx::query(&sql)
        .bind(id.as_str())
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

pub async fn get_by_category(pool: &SqlitePool, category: &str) -> Result<Vec<Sound>> {
    let sql = format!(
        "{} WHERE category = ? ORDER BY sort_order, created_at, rowid",
        SELECT_SOUNDS
    );
    let rows = sqlx::query(&sql).bind(category).fetch_all(pool).await?;

    rows.iter().map(from_row).collect()
}

pub async fn count(pool: &SqlitePool) -> Result<u32> {
    let row = sqlx::query("SELECT COUNT(*) AS total FROM sounds")
        .fetch_one(pool)
        .await?;
    let total: i64 = row.try_get("total")?;
    Ok(total as u32)
}

pub async fn create(pool: &SqlitePool, sound: CreateSound) -> Result<Sound> {
    let id = SoundId::generate();
    let now = chrono::Utc::now().timestamp();
    let (asset_name, file_name, file_extension) = audio_columns(&sound.audio);

    sqlx::query(
        "INSERT INTO sounds (id, description, asset_name, file_name, file_extension,
                             category, sort_order, is_custom, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id.as_str())
    .bind(&sound.description)
    .bind(asset_name)
    .bind(file_name)
    .bind(file_extension)
    .bind(&sound.category)
    .bind(i64::from(sound.order))
    .bind(sound.is_custom)
    .bind(now)
    .execute(pool)
    .await?;

    tracing::debug!(id = %id, order = sound.order, "sound created");

    Ok(Sound {
        id,
        description: sound.description,
        audio: sound.audio,
        category: sound.category,
        order: sound.order,
        is_custom: sound.is_custom,
        created_at: now,
    })
}

/// Update description, category and order; the audio columns are never touched
pub async fn update(pool: &SqlitePool, id: &SoundId, update: UpdateSound) -> Result<Sound> {
    let result = sqlx::query(
        "UPDATE sounds
         SET description = ?, category = ?, sort_order = ?
         WHERE id = ?",
    )
    .bind(&update.description)
    .bind(&update.category)
    .bind(i64::from(update.order))
    .bind(id.as_str())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(SnackError::not_found("Sound", id.as_str()));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| SnackError::storage("Failed to retrieve updated sound"))
}

pub async fn delete(pool: &SqlitePool, id: &SoundId) -> Result<()> {
    let result = sqlx::query("DELETE FROM sounds WHERE id = ?")
        .bind(id.as_str())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(SnackError::not_found("Sound", id.as_str()));
    }

    Ok(())
}

/// Write every `(id, order)` pair in a single transaction
///
/// Either all orders land or none do. Unknown ids are skipped.
pub async fn update_orders(pool: &SqlitePool, orders: &[(SoundId, u32)]) -> Result<()> {
    let mut tx = pool.begin().await?;

    for (id, order) in orders {
        sqlx::query("UPDATE sounds SET sort_order = ? WHERE id = ?")
            .bind(i64::from(*order))
            .bind(id.as_str())
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    tracing::debug!(count = orders.len(), "sound orders persisted");

    Ok(())
}
