//! Record types for the career and caution datasets.

use serde::{Deserialize, Serialize};

macro_rules! display_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Career category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Healthcare,
    Engineering,
    Business,
    Creative,
    Education,
    Legal,
    Hospitality,
    Sports,
    Government,
    Marketing,
    Finance,
    Design,
    Media,
    Aviation,
}

display_enum!(Category {
    Technology => "Technology",
    Healthcare => "Healthcare",
    Engineering => "Engineering",
    Business => "Business",
    Creative => "Creative",
    Education => "Education",
    Legal => "Legal",
    Hospitality => "Hospitality",
    Sports => "Sports",
    Government => "Government",
    Marketing => "Marketing",
    Finance => "Finance",
    Design => "Design",
    Media => "Media",
    Aviation => "Aviation",
});

impl Category {
    /// Extraction order: the first category whose lowercased name occurs in
    /// a message wins.
    pub const ALL: [Category; 15] = [
        Category::Technology,
        Category::Healthcare,
        Category::Engineering,
        Category::Business,
        Category::Creative,
        Category::Education,
        Category::Legal,
        Category::Hospitality,
        Category::Sports,
        Category::Government,
        Category::Marketing,
        Category::Finance,
        Category::Design,
        Category::Media,
        Category::Aviation,
    ];
}

/// Secondary-education stream tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stream {
    #[serde(rename = "PCM")]
    Pcm,
    #[serde(rename = "PCB")]
    Pcb,
    #[serde(rename = "PCMB")]
    Pcmb,
    Commerce,
    #[serde(rename = "Commerce with Maths")]
    CommerceWithMaths,
    Arts,
    Any,
    #[serde(rename = "All streams")]
    AllStreams,
}

display_enum!(Stream {
    Pcm => "PCM",
    Pcb => "PCB",
    Pcmb => "PCMB",
    Commerce => "Commerce",
    CommerceWithMaths => "Commerce with Maths",
    Arts => "Arts",
    Any => "Any",
    AllStreams => "All streams",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

display_enum!(StressLevel {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

/// Work-life balance rating, shared by both datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Balance {
    Poor,
    Moderate,
    Good,
    Excellent,
}

display_enum!(Balance {
    Poor => "Poor",
    Moderate => "Moderate",
    Good => "Good",
    Excellent => "Excellent",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobOutlook {
    Stable,
    Growing,
    #[serde(rename = "High Demand")]
    HighDemand,
}

display_enum!(JobOutlook {
    Stable => "Stable",
    Growing => "Growing",
    HighDemand => "High Demand",
});

/// Ordinal severity used by every risk field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

display_enum!(RiskLevel {
    Low => "Low",
    Medium => "Medium",
    High => "High",
    VeryHigh => "Very High",
});

impl RiskLevel {
    /// Ranking weight: Very High 4, High 3, Medium 2, Low 1.
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::VeryHigh => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Viability {
    Stable,
    Growing,
    Declining,
    Uncertain,
}

display_enum!(Viability {
    Stable => "Stable",
    Growing => "Growing",
    Declining => "Declining",
    Uncertain => "Uncertain",
});

// ---------------------------------------------------------------
// Career records
// ---------------------------------------------------------------

/// Annual salary in rupees at three seniority levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    pub entry: u64,
    pub mid: u64,
    pub senior: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lifestyle {
    pub work_hours: String,
    pub work_environment: String,
    pub stress_level: StressLevel,
    pub work_life_balance: Balance,
    pub travel_required: bool,
    pub remote_work: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub stream: Vec<Stream>,
    pub degree: String,
    #[serde(default)]
    pub entrance_exams: Vec<String>,
    #[serde(default)]
    pub top_institutions: Vec<String>,
    pub duration: String,
}

/// A career fact record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecord {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub salary: Salary,
    pub lifestyle: Lifestyle,
    pub education: Education,
    pub skills: Vec<String>,
    pub job_outlook: JobOutlook,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub suitable_for: Vec<String>,
    pub alternatives: Vec<String>,
}

// ---------------------------------------------------------------
// Caution records
// ---------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSaturation {
    pub level: RiskLevel,
    pub description: String,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurnoutRisk {
    pub level: RiskLevel,
    pub description: String,
    pub indicators: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplacementRisk {
    pub level: RiskLevel,
    pub description: String,
    pub timeframe: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialRisk {
    pub level: RiskLevel,
    pub description: String,
    pub concerns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub level: RiskLevel,
    pub description: String,
    pub entry_barriers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLifeBalance {
    pub level: Balance,
    pub description: String,
    pub sacrifices: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureViability {
    pub outlook: Viability,
    pub description: String,
    pub influencing_factors: Vec<String>,
}

/// A risk/caution record. Linked to [`CareerRecord`] by name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CautionRecord {
    pub career_id: String,
    pub career_name: String,
    /// Field label used in prose ("Medical", "Nursing", ...); not a [`Category`].
    pub category: String,
    pub overall_risk: RiskLevel,
    pub market_saturation: MarketSaturation,
    pub burnout_risk: BurnoutRisk,
    pub job_displacement_risk: DisplacementRisk,
    pub financial_risks: FinancialRisk,
    pub work_life_balance: WorkLifeBalance,
    pub competition_level: Competition,
    pub future_viability: FutureViability,
    pub required_sacrifices: Vec<String>,
    pub industry_challenges: Vec<String>,
    pub geographic_limitations: Vec<String>,
    pub educational_concerns: Vec<String>,
    pub key_warnings: Vec<String>,
    pub realistic_expectations: Vec<String>,
    pub alternatives: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_use_display_strings_on_the_wire() {
        assert_eq!(serde_json::to_string(&RiskLevel::VeryHigh).unwrap(), "\"Very High\"");
        assert_eq!(serde_json::to_string(&JobOutlook::HighDemand).unwrap(), "\"High Demand\"");
        let stream: Stream = serde_json::from_str("\"Commerce with Maths\"").unwrap();
        assert_eq!(stream, Stream::CommerceWithMaths);
        assert_eq!(Stream::Pcmb.to_string(), "PCMB");
    }

    #[test]
    fn test_unknown_level_rejected() {
        assert!(serde_json::from_str::<RiskLevel>("\"Extreme\"").is_err());
    }

    #[test]
    fn test_risk_ordinal() {
        assert!(RiskLevel::VeryHigh.ordinal() > RiskLevel::High.ordinal());
        assert_eq!(RiskLevel::Low.ordinal(), 1);
    }
}
