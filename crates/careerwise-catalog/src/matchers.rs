//! Record matchers over the catalog.
//!
//! Every matcher preserves store order and reports absence as `None` or an
//! empty list. Name resolution is two-tier: an exact id/name index first,
//! then a fuzzy stage whose tie-break is "first in store order". Fuzzy
//! results carry the other candidates so callers can surface ambiguity.

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::types::{CareerRecord, CautionRecord, RiskLevel, Stream};

/// Maximum number of records the recommendation matcher returns.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// How a name lookup was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Query equals an id or display name.
    Exact,
    /// A display name occurs inside the query (or vice versa).
    Contained,
    /// Free-text search over name, description, category and skills.
    Search,
}

#[derive(Debug, Clone)]
pub struct CareerMatch<'a> {
    pub record: &'a CareerRecord,
    pub tier: MatchTier,
    /// Names of the other records the fuzzy stage would also accept.
    pub also_matched: Vec<&'a str>,
}

impl CareerMatch<'_> {
    pub fn is_ambiguous(&self) -> bool {
        !self.also_matched.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct CautionMatch<'a> {
    pub record: &'a CautionRecord,
    pub tier: MatchTier,
    pub also_matched: Vec<&'a str>,
}

impl CautionMatch<'_> {
    pub fn is_ambiguous(&self) -> bool {
        !self.also_matched.is_empty()
    }
}

/// Filters extracted from a recommendation request.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub streams: Vec<Stream>,
    pub interests: Vec<String>,
    /// Inclusive entry-salary band in rupees.
    pub budget: Option<(u64, u64)>,
}

/// Projection returned by [`Catalog::top_risks`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSummary {
    pub career_name: String,
    pub overall_risk: RiskLevel,
    pub factors: Vec<String>,
}

impl Catalog {
    /// Records whose category display string equals `category` exactly.
    pub fn careers_by_category(&self, category: &str) -> Vec<&CareerRecord> {
        self.careers()
            .iter()
            .filter(|c| c.category.as_str() == category)
            .collect()
    }

    /// Case-insensitive substring search over name, description, category
    /// and skills. No ranking.
    pub fn search_careers(&self, query: &str) -> Vec<&CareerRecord> {
        let query = query.to_lowercase();
        self.careers()
            .iter()
            .filter(|c| career_mentions(c, &query))
            .collect()
    }

    /// Records whose entry salary lies in `[min, max]`.
    pub fn careers_by_salary_range(&self, min: u64, max: u64) -> Vec<&CareerRecord> {
        self.careers()
            .iter()
            .filter(|c| c.salary.entry >= min && c.salary.entry <= max)
            .collect()
    }

    pub fn careers_by_stream(&self, stream: Stream) -> Vec<&CareerRecord> {
        self.careers()
            .iter()
            .filter(|c| c.education.stream.contains(&stream))
            .collect()
    }

    pub fn cautions_by_risk_level(&self, level: RiskLevel) -> Vec<&CautionRecord> {
        self.cautions()
            .iter()
            .filter(|c| c.overall_risk == level)
            .collect()
    }

    pub fn cautions_by_burnout_level(&self, level: RiskLevel) -> Vec<&CautionRecord> {
        self.cautions()
            .iter()
            .filter(|c| c.burnout_risk.level == level)
            .collect()
    }

    /// Resolve a user-supplied name to a career record.
    pub fn resolve_career(&self, name: &str) -> Option<CareerMatch<'_>> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        if let Some(record) = self.career_by_id(&query).or_else(|| {
            self.careers()
                .iter()
                .find(|c| c.name.to_lowercase() == query)
        }) {
            return Some(CareerMatch {
                record,
                tier: MatchTier::Exact,
                also_matched: Vec::new(),
            });
        }

        let contained: Vec<&CareerRecord> = self
            .careers()
            .iter()
            .filter(|c| query.contains(&c.name.to_lowercase()))
            .collect();
        let (tier, candidates) = if !contained.is_empty() {
            (MatchTier::Contained, contained)
        } else {
            (MatchTier::Search, self.search_careers(&query))
        };

        let (first, rest) = candidates.split_first()?;
        let found = CareerMatch {
            record: *first,
            tier,
            also_matched: rest.iter().copied().map(|c| c.name.as_str()).collect(),
        };
        if found.is_ambiguous() {
            warn!(
                "Ambiguous career query {:?}: picked {} over {:?}",
                query, found.record.name, found.also_matched
            );
        } else {
            debug!("Resolved {:?} to {} ({:?})", query, found.record.name, tier);
        }
        Some(found)
    }

    /// Find the caution record for a name: exact id/name first, then the
    /// bidirectional substring test in caution-store order.
    pub fn find_caution(&self, name: &str) -> Option<CautionMatch<'_>> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        if let Some(record) = self.caution_by_id(&query).or_else(|| {
            self.cautions()
                .iter()
                .find(|c| c.career_name.to_lowercase() == query)
        }) {
            return Some(CautionMatch {
                record,
                tier: MatchTier::Exact,
                also_matched: Vec::new(),
            });
        }

        let candidates: Vec<&CautionRecord> = self
            .cautions()
            .iter()
            .filter(|c| {
                let name = c.career_name.to_lowercase();
                name.contains(&query) || query.contains(&name)
            })
            .collect();

        let (first, rest) = candidates.split_first()?;
        let found = CautionMatch {
            record: *first,
            tier: MatchTier::Contained,
            also_matched: rest.iter().copied().map(|c| c.career_name.as_str()).collect(),
        };
        if found.is_ambiguous() {
            warn!(
                "Ambiguous caution query {:?}: picked {} over {:?}",
                query, found.record.career_name, found.also_matched
            );
        }
        Some(found)
    }

    /// Combined recommendation matcher.
    ///
    /// Filters apply in the order stream, interest, salary. Each filter
    /// narrows the accumulated set only when that set is non-empty;
    /// otherwise it replaces it. An empty result falls back to the first
    /// records in store order.
    pub fn recommend(&self, profile: &Profile) -> Vec<&CareerRecord> {
        let mut acc: Vec<&CareerRecord> = Vec::new();

        for &stream in &profile.streams {
            for career in self.careers_by_stream(stream) {
                if !acc.iter().any(|c| c.id == career.id) {
                    acc.push(career);
                }
            }
        }

        if !profile.interests.is_empty() {
            let hits: Vec<&CareerRecord> = self
                .careers()
                .iter()
                .filter(|c| profile.interests.iter().any(|kw| career_mentions(c, kw)))
                .collect();
            narrow(&mut acc, hits);
        }

        if let Some((min, max)) = profile.budget {
            narrow(&mut acc, self.careers_by_salary_range(min, max));
        }

        if acc.is_empty() {
            debug!("No recommendation filters matched; using store order");
            return self.careers().iter().take(MAX_RECOMMENDATIONS).collect();
        }

        acc.truncate(MAX_RECOMMENDATIONS);
        acc
    }

    /// The `limit` riskiest cautions by overall risk. The sort is stable, so
    /// equal risks keep store order.
    pub fn top_risks(&self, limit: usize) -> Vec<RiskSummary> {
        let mut ranked: Vec<&CautionRecord> = self.cautions().iter().collect();
        ranked.sort_by(|a, b| b.overall_risk.ordinal().cmp(&a.overall_risk.ordinal()));
        ranked
            .into_iter()
            .take(limit)
            .map(|c| RiskSummary {
                career_name: c.career_name.clone(),
                overall_risk: c.overall_risk,
                factors: c.key_warnings.iter().take(3).cloned().collect(),
            })
            .collect()
    }
}

/// `query` must already be lowercase.
fn career_mentions(career: &CareerRecord, query: &str) -> bool {
    career.name.to_lowercase().contains(query)
        || career.description.to_lowercase().contains(query)
        || career.category.as_str().to_lowercase().contains(query)
        || career
            .skills
            .iter()
            .any(|s| s.to_lowercase().contains(query))
}

fn narrow<'a>(acc: &mut Vec<&'a CareerRecord>, hits: Vec<&'a CareerRecord>) {
    if acc.is_empty() {
        *acc = hits;
    } else {
        acc.retain(|c| hits.iter().any(|h| h.id == c.id));
    }
}
