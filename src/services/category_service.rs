use crate::error::Result;
use crate::models::category::Category;
use sqlx::PgPool;

/// Reserved first entry of every category listing. Category ids are
/// effectively 1-based; index 0 never names a real category.
pub const NO_CATEGORY_LABEL: &str = "null";

#[derive(Clone)]
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name
             FROM categories
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }
}

/// Placeholder-first list of category display names, in store order.
/// Recomputed on every request that reports categories.
pub fn category_options(categories: &[Category]) -> Vec<String> {
    let mut options = Vec::with_capacity(categories.len() + 1);
    options.push(NO_CATEGORY_LABEL.to_string());
    options.extend(categories.iter().map(|category| category.name.clone()));
    options
}
