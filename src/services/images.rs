use std::collections::HashMap;
use std::path::Path;

use rand::seq::SliceRandom;

/// Assigns display images to recipes from a shared pool
///
/// The pool is shuffled once per invocation, so repeated renders of the same
/// recipe set may show different images each time. Uniqueness holds while the
/// recipe count stays within the pool size; beyond that images repeat
/// cyclically.
pub struct ImageAssigner {
    pool: Vec<String>,
    fallback: String,
}

impl ImageAssigner {
    pub fn new(pool: Vec<String>, fallback: String) -> Self {
        Self { pool, fallback }
    }

    /// Builds the pool from the image files in a directory
    ///
    /// An unreadable directory yields an empty pool; assignment then falls
    /// back to the designated default image rather than failing.
    pub fn from_dir(dir: impl AsRef<Path>, fallback: String) -> Self {
        let dir = dir.as_ref();
        let pool = match std::fs::read_dir(dir) {
            Ok(entries) => {
                let mut files: Vec<String> = entries
                    .filter_map(|entry| entry.ok())
                    .filter_map(|entry| entry.file_name().into_string().ok())
                    .filter(|name| is_image_file(name))
                    .collect();
                files.sort();
                files
            }
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Image pool directory unreadable");
                Vec::new()
            }
        };

        tracing::info!(dir = %dir.display(), pool_size = pool.len(), "Image pool loaded");

        Self::new(pool, fallback)
    }

    /// Maps each recipe id to a display image
    pub fn assign(&self, recipe_ids: &[String]) -> HashMap<String, String> {
        if self.pool.is_empty() {
            return recipe_ids
                .iter()
                .map(|id| (id.clone(), self.fallback.clone()))
                .collect();
        }

        let mut shuffled = self.pool.clone();
        shuffled.shuffle(&mut rand::rng());

        recipe_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), shuffled[i % shuffled.len()].clone()))
            .collect()
    }
}

fn is_image_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".jpg") || lower.ends_with(".jpeg") || lower.ends_with(".png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pool(size: usize) -> Vec<String> {
        (0..size).map(|i| format!("cuisine_{}.jpg", i)).collect()
    }

    fn ids(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("recipe-{}", i)).collect()
    }

    #[test]
    fn test_images_are_distinct_while_pool_covers_recipes() {
        let assigner = ImageAssigner::new(pool(5), "default.jpg".to_string());
        let recipe_ids = ids(5);

        let assigned = assigner.assign(&recipe_ids);

        assert_eq!(assigned.len(), 5);
        let distinct: HashSet<&String> = assigned.values().collect();
        assert_eq!(distinct.len(), 5);
    }

    #[test]
    fn test_images_repeat_with_pool_period_when_exhausted() {
        let assigner = ImageAssigner::new(pool(3), "default.jpg".to_string());
        let recipe_ids = ids(7);

        let assigned = assigner.assign(&recipe_ids);

        for i in 0..4 {
            assert_eq!(
                assigned[&format!("recipe-{}", i)],
                assigned[&format!("recipe-{}", i + 3)]
            );
        }
    }

    #[test]
    fn test_empty_pool_assigns_fallback_to_every_recipe() {
        let assigner = ImageAssigner::new(vec![], "default.jpg".to_string());
        let recipe_ids = ids(3);

        let assigned = assigner.assign(&recipe_ids);

        assert_eq!(assigned.len(), 3);
        assert!(assigned.values().all(|img| img == "default.jpg"));
    }

    #[test]
    fn test_no_recipes_yields_empty_assignment() {
        let assigner = ImageAssigner::new(pool(4), "default.jpg".to_string());
        assert!(assigner.assign(&[]).is_empty());
    }

    #[test]
    fn test_from_dir_keeps_only_image_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["thai.jpg", "mexican.PNG", "italian.jpeg", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let assigner = ImageAssigner::from_dir(dir.path(), "default.jpg".to_string());
        let assigned = assigner.assign(&ids(3));

        let distinct: HashSet<&String> = assigned.values().collect();
        assert_eq!(distinct.len(), 3);
        assert!(!assigned.values().any(|img| img == "notes.txt"));
    }

    #[test]
    fn test_from_dir_missing_directory_falls_back() {
        let assigner =
            ImageAssigner::from_dir("/nonexistent/images", "default.jpg".to_string());
        let assigned = assigner.assign(&ids(2));
        assert!(assigned.values().all(|img| img == "default.jpg"));
    }
}
