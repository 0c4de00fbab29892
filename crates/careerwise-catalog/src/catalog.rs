//! Catalog construction, validation and the exact-id index.

use std::collections::HashMap;
use std::path::Path;

use careerwise_core::{Error, Result};
use tracing::{debug, info};

use crate::types::{CareerRecord, Category, CautionRecord};

const BUILTIN_CAREERS: &str = include_str!("../data/careers.json");
const BUILTIN_CAUTIONS: &str = include_str!("../data/cautions.json");

pub const CAREERS_FILE: &str = "careers.json";
pub const CAUTIONS_FILE: &str = "cautions.json";

/// Both datasets plus lookup indexes. Immutable once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    careers: Vec<CareerRecord>,
    cautions: Vec<CautionRecord>,
    career_index: HashMap<String, usize>,
    caution_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed records, validating invariants.
    pub fn new(careers: Vec<CareerRecord>, cautions: Vec<CautionRecord>) -> Result<Self> {
        validate_careers(&careers)?;
        validate_cautions(&cautions)?;

        let career_index = careers
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
        let caution_index = cautions
            .iter()
            .enumerate()
            .map(|(i, c)| (c.career_id.clone(), i))
            .collect();

        Ok(Self {
            careers,
            cautions,
            career_index,
            caution_index,
        })
    }

    /// The datasets compiled into the binary.
    pub fn builtin() -> Result<Self> {
        let catalog = Self::from_json(BUILTIN_CAREERS, BUILTIN_CAUTIONS)?;
        info!(
            "Loaded builtin catalog: {} careers, {} cautions",
            catalog.careers.len(),
            catalog.cautions.len()
        );
        Ok(catalog)
    }

    /// Load `careers.json` and `cautions.json` from a directory.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let careers = std::fs::read_to_string(dir.join(CAREERS_FILE))?;
        let cautions = std::fs::read_to_string(dir.join(CAUTIONS_FILE))?;
        let catalog = Self::from_json(&careers, &cautions)?;
        info!(
            "Loaded catalog from {}: {} careers, {} cautions",
            dir.display(),
            catalog.careers.len(),
            catalog.cautions.len()
        );
        Ok(catalog)
    }

    /// Parse both datasets from JSON text.
    pub fn from_json(careers: &str, cautions: &str) -> Result<Self> {
        let careers: Vec<CareerRecord> = serde_json::from_str(careers)?;
        let cautions: Vec<CautionRecord> = serde_json::from_str(cautions)?;
        debug!("Parsed {} careers, {} cautions", careers.len(), cautions.len());
        Self::new(careers, cautions)
    }

    pub fn careers(&self) -> &[CareerRecord] {
        &self.careers
    }

    pub fn cautions(&self) -> &[CautionRecord] {
        &self.cautions
    }

    /// Exact lookup by career id.
    pub fn career_by_id(&self, id: &str) -> Option<&CareerRecord> {
        self.career_index.get(id).map(|&i| &self.careers[i])
    }

    /// Exact lookup by caution career id.
    pub fn caution_by_id(&self, career_id: &str) -> Option<&CautionRecord> {
        self.caution_index.get(career_id).map(|&i| &self.cautions[i])
    }

    /// Distinct categories in store order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for career in &self.careers {
            if !seen.contains(&career.category) {
                seen.push(career.category);
            }
        }
        seen
    }

    pub fn career_names(&self) -> Vec<&str> {
        self.careers.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn caution_names(&self) -> Vec<&str> {
        self.cautions.iter().map(|c| c.career_name.as_str()).collect()
    }
}

fn validate_careers(careers: &[CareerRecord]) -> Result<()> {
    let mut ids = std::collections::HashSet::new();
    for career in careers {
        if !ids.insert(career.id.as_str()) {
            return Err(Error::Catalog(format!("duplicate career id {}", career.id)));
        }
        let s = &career.salary;
        if !(0 < s.entry && s.entry < s.mid && s.mid < s.senior) {
            return Err(Error::Catalog(format!(
                "{}: salary must satisfy 0 < entry < mid < senior (got {}/{}/{})",
                career.id, s.entry, s.mid, s.senior
            )));
        }
        let lists = [
            ("skills", &career.skills),
            ("pros", &career.pros),
            ("cons", &career.cons),
            ("suitableFor", &career.suitable_for),
            ("alternatives", &career.alternatives),
        ];
        for (field, list) in lists {
            if list.is_empty() {
                return Err(Error::Catalog(format!("{}: {} is empty", career.id, field)));
            }
        }
    }
    Ok(())
}

fn validate_cautions(cautions: &[CautionRecord]) -> Result<()> {
    let mut ids = std::collections::HashSet::new();
    for caution in cautions {
        if !ids.insert(caution.career_id.as_str()) {
            return Err(Error::Catalog(format!(
                "duplicate caution id {}",
                caution.career_id
            )));
        }
        let lists = [
            ("marketSaturation.evidence", &caution.market_saturation.evidence),
            ("burnoutRisk.indicators", &caution.burnout_risk.indicators),
            ("competitionLevel.entryBarriers", &caution.competition_level.entry_barriers),
            ("workLifeBalance.sacrifices", &caution.work_life_balance.sacrifices),
            ("requiredSacrifices", &caution.required_sacrifices),
            ("industryChallenges", &caution.industry_challenges),
            ("educationalConcerns", &caution.educational_concerns),
            ("keyWarnings", &caution.key_warnings),
            ("realisticExpectations", &caution.realistic_expectations),
            ("alternatives", &caution.alternatives),
        ];
        for (field, list) in lists {
            if list.is_empty() {
                return Err(Error::Catalog(format!(
                    "{}: {} is empty",
                    caution.career_id, field
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskLevel;

    #[test]
    fn test_builtin_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.careers().len() >= 25);
        assert!(catalog.cautions().len() >= 10);
    }

    #[test]
    fn test_salary_bands_are_ordered() {
        let catalog = Catalog::builtin().unwrap();
        for career in catalog.careers() {
            let s = career.salary;
            assert!(0 < s.entry && s.entry < s.mid && s.mid < s.senior, "{}", career.id);
        }
    }

    #[test]
    fn test_caution_lists_are_meaningful() {
        let catalog = Catalog::builtin().unwrap();
        for caution in catalog.cautions() {
            assert!(caution.market_saturation.description.len() > 20);
            assert!(caution.market_saturation.evidence.iter().all(|e| e.len() > 10));
            assert!(caution.burnout_risk.description.len() > 15);
            assert!(caution.work_life_balance.description.len() > 15);
            assert!(!caution.key_warnings.is_empty());
        }
    }

    #[test]
    fn test_career_by_id() {
        let catalog = Catalog::builtin().unwrap();
        let career = catalog.career_by_id("software-engineer").unwrap();
        assert_eq!(career.name, "Software Engineer");
        assert!(catalog.career_by_id("nonexistent").is_none());
    }

    #[test]
    fn test_caution_by_id() {
        let catalog = Catalog::builtin().unwrap();
        let caution = catalog.caution_by_id("software-engineer").unwrap();
        assert_eq!(caution.career_name, "Software Engineer");
        assert_eq!(caution.overall_risk, RiskLevel::Medium);
        assert!(catalog.caution_by_id("nonexistent-career").is_none());
    }

    #[test]
    fn test_categories_are_distinct() {
        let catalog = Catalog::builtin().unwrap();
        let categories = catalog.categories();
        assert_eq!(categories[0], Category::Technology);
        let mut deduped = categories.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), categories.len());
    }

    #[test]
    fn test_inverted_salary_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let mut careers = catalog.careers().to_vec();
        careers[0].salary.mid = careers[0].salary.senior + 1;
        let err = Catalog::new(careers, catalog.cautions().to_vec()).unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let mut careers = catalog.careers().to_vec();
        careers.push(careers[0].clone());
        assert!(Catalog::new(careers, Vec::new()).is_err());
    }

    #[test]
    fn test_load_dir_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CAREERS_FILE), BUILTIN_CAREERS).unwrap();
        std::fs::write(dir.path().join(CAUTIONS_FILE), "[]").unwrap();

        let catalog = Catalog::load_dir(dir.path()).unwrap();
        assert_eq!(catalog.careers().len(), Catalog::builtin().unwrap().careers().len());
        assert!(catalog.cautions().is_empty());
    }

    #[test]
    fn test_load_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = Catalog::from_json("{not json", "[]").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
