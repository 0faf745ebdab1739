//! Skill catalog and the importance tier shared by extraction and scoring.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::warn;

/// Name reported for a skill id that is referenced but missing from the catalog.
pub const UNKNOWN_SKILL_NAME: &str = "Unknown";

/// Importance tier of a JD skill requirement. Persisted as `"critical"` / `"optional"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Critical,
    Optional,
}

impl Importance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Critical => "critical",
            Importance::Optional => "optional",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Importance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Importance::Critical),
            "optional" => Ok(Importance::Optional),
            other => Err(format!("unknown importance '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SkillCatalogEntry {
    pub id: i64,
    pub name: String,
}

/// Read-only skill catalog, unique by id and by lower-cased name.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    entries: Vec<SkillCatalogEntry>,
    by_id: HashMap<i64, usize>,
    by_name: HashMap<String, usize>,
}

impl SkillCatalog {
    /// Builds the catalog, ordered by id. Later duplicates (same id or same
    /// lower-cased name) are dropped with a warning.
    pub fn new(mut entries: Vec<SkillCatalogEntry>) -> Self {
        entries.sort_by_key(|e| e.id);

        let mut catalog = SkillCatalog::default();
        for entry in entries {
            let key = entry.name.trim().to_lowercase();
            if catalog.by_id.contains_key(&entry.id) || catalog.by_name.contains_key(&key) {
                warn!("Skipping duplicate catalog entry {} ({})", entry.id, entry.name);
                continue;
            }
            let idx = catalog.entries.len();
            catalog.by_id.insert(entry.id, idx);
            catalog.by_name.insert(key, idx);
            catalog.entries.push(entry);
        }
        catalog
    }

    pub fn entries(&self) -> &[SkillCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&SkillCatalogEntry> {
        self.by_id.get(&id).map(|&idx| &self.entries[idx])
    }

    /// Case-insensitive exact name lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&SkillCatalogEntry> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&idx| &self.entries[idx])
    }

    pub fn name_or_placeholder(&self, id: i64) -> &str {
        self.get(id)
            .map(|e| e.name.as_str())
            .unwrap_or(UNKNOWN_SKILL_NAME)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, name: &str) -> SkillCatalogEntry {
        SkillCatalogEntry {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_importance_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&Importance::Critical).unwrap(),
            r#""critical""#
        );
        let parsed: Importance = serde_json::from_str(r#""optional""#).unwrap();
        assert_eq!(parsed, Importance::Optional);
    }

    #[test]
    fn test_importance_from_str_case_insensitive() {
        assert_eq!("CRITICAL".parse::<Importance>(), Ok(Importance::Critical));
        assert_eq!(" Optional ".parse::<Importance>(), Ok(Importance::Optional));
        assert!("mandatory".parse::<Importance>().is_err());
    }

    #[test]
    fn test_catalog_lookup_by_name_ignores_case() {
        let catalog = SkillCatalog::new(vec![entry(2, "Docker"), entry(1, "Python")]);
        assert_eq!(catalog.find_by_name("python").map(|e| e.id), Some(1));
        assert_eq!(catalog.find_by_name("DOCKER").map(|e| e.id), Some(2));
        assert!(catalog.find_by_name("rust").is_none());
    }

    #[test]
    fn test_catalog_sorted_by_id() {
        let catalog = SkillCatalog::new(vec![entry(3, "Go"), entry(1, "Python")]);
        let ids: Vec<i64> = catalog.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_catalog_drops_duplicates() {
        let catalog = SkillCatalog::new(vec![
            entry(1, "Python"),
            entry(1, "Rust"),
            entry(2, "python"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.name_or_placeholder(1), "Python");
    }

    #[test]
    fn test_unknown_id_gets_placeholder() {
        let catalog = SkillCatalog::new(vec![entry(1, "Python")]);
        assert_eq!(catalog.name_or_placeholder(99), UNKNOWN_SKILL_NAME);
    }
}
