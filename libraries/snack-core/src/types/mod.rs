mod category;
mod ids;
mod sound;

pub use category::{
    is_default_category_name, Category, CreateCategory, UpdateCategory, CATEGORY_PRESETS,
    DEFAULT_CATEGORY_COLOR, DEFAULT_CATEGORY_NAME,
};
pub use ids::{CategoryId, SoundId};
pub use sound::{AudioRef, CreateSound, Sound, UpdateSound};
