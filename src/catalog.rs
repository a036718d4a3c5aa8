use crate::domain::Shoe;
use crate::errors::ServerError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Read-only list of shoes, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    shoes: Vec<Shoe>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Price,
}

impl SortOrder {
    /// Unknown values fall back to `Newest`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("price") => SortOrder::Price,
            _ => SortOrder::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Price => "price",
        }
    }
}

impl Catalog {
    /// Drops shoes whose slug cannot be linked to; duplicate slugs are an error.
    pub fn new(shoes: Vec<Shoe>) -> Result<Self, ServerError> {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(shoes.len());
        for shoe in shoes {
            if !shoe.has_url_safe_slug() {
                tracing::warn!(slug = %shoe.slug, "skipping shoe with unlinkable slug");
                continue;
            }
            if !seen.insert(shoe.slug.clone()) {
                return Err(ServerError::CatalogError(format!(
                    "duplicate slug: {}",
                    shoe.slug
                )));
            }
            kept.push(shoe);
        }
        Ok(Self { shoes: kept })
    }

    /// The file must be a JSON array. Records that do not parse as a shoe
    /// are skipped with a warning instead of failing the whole catalog.
    pub fn from_json_str(json: &str) -> Result<Self, ServerError> {
        let records: Vec<serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| ServerError::CatalogError(format!("Parse failed: {e}")))?;

        let shoes = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Shoe>(record) {
                Ok(shoe) => Some(shoe),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping unreadable catalog record");
                    None
                }
            })
            .collect();
        Self::new(shoes)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ServerError::CatalogError(format!("Failed to read {}: {e}", path.display()))
        })?;
        let catalog = Self::from_json_str(&json)?;

        tracing::info!(path = %path.display(), shoes = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    pub fn find(&self, slug: &str) -> Option<&Shoe> {
        self.shoes.iter().find(|s| s.slug == slug)
    }

    pub fn sorted(&self, order: SortOrder) -> Vec<&Shoe> {
        let mut shoes: Vec<&Shoe> = self.shoes.iter().collect();
        match order {
            SortOrder::Newest => shoes.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
            SortOrder::Price => shoes.sort_by_key(|s| s.price),
        }
        shoes
    }
}
