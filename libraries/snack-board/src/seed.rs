//! First-launch category presets

use snack_core::{
    CreateCategory, Result, StorageContext, CATEGORY_PRESETS, DEFAULT_CATEGORY_COLOR,
    DEFAULT_CATEGORY_NAME,
};

/// Insert the default category and the presets into an empty store
///
/// A non-empty store only gets the default category back if it is missing.
/// Names that already exist are skipped, so running this twice is harmless.
/// Returns the number of categories inserted.
pub async fn seed_categories<S: StorageContext + ?Sized>(storage: &S) -> Result<usize> {
    let wanted: Vec<(&str, &str)> = if storage.count_categories().await? == 0 {
        std::iter::once((DEFAULT_CATEGORY_NAME, DEFAULT_CATEGORY_COLOR))
            .chain(CATEGORY_PRESETS)
            .collect()
    } else {
        vec![(DEFAULT_CATEGORY_NAME, DEFAULT_CATEGORY_COLOR)]
    };

    let mut inserted = 0;
    for (name, color_hex) in wanted {
        if storage.find_category_by_name(name).await?.is_some() {
            continue;
        }

        storage
            .create_category(CreateCategory {
                name: name.to_string(),
                color_hex: color_hex.to_string(),
            })
            .await?;
        inserted += 1;
    }

    if inserted > 0 {
        tracing::info!(inserted, "seeded categories");
    }

    Ok(inserted)
}
