//! Report input records and validation.
//!
//! All text arrives already written by the upstream profile generator; the
//! renderer treats it as opaque content. Validation is fail fast: a report
//! that cannot render completely is rejected before any output is built.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical ordering for the five known personality dimensions.
pub const DIMENSION_ORDER: [&str; 5] = ["SOC", "ENG", "ATT", "SEN", "INT"];

/// Free-form analysis written by the profile generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analysis {
    /// One-paragraph personality summary
    #[serde(default)]
    pub summary: String,
    /// Longer narrative description
    #[serde(default)]
    pub detailed_description: String,
    /// Short trait phrases
    #[serde(default)]
    pub traits: Vec<String>,
    /// Light-hearted facts about the pet
    #[serde(default)]
    pub fun_facts: Vec<String>,
}

/// One household compatibility rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityEntry {
    /// What is being rated, e.g. "Families with children"
    pub label: String,
    /// The rating itself, e.g. "Excellent"
    pub value: String,
    /// Optional qualifier shown under the rating
    #[serde(default)]
    pub note: Option<String>,
}

/// Complete input for one rendered report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportData {
    /// The pet's name
    pub pet_name: String,
    /// Headline profile title, e.g. "The Social Butterfly"
    pub profile_title: String,
    /// Short tagline under the title
    #[serde(default)]
    pub profile_tagline: String,

    /// Dimension code to percentage score, 0..=100
    #[serde(default)]
    pub dimensions: BTreeMap<String, u8>,
    /// Optional explanation per dimension code
    #[serde(default)]
    pub dimension_notes: BTreeMap<String, String>,

    /// What the pet is naturally good at
    #[serde(default)]
    pub strengths: Vec<String>,
    /// Behaviors worth keeping an eye on
    #[serde(default)]
    pub watch_points: Vec<String>,
    /// General care tips
    #[serde(default)]
    pub tips: Vec<String>,

    /// Recommended activities, with optional parallel rationales
    #[serde(default)]
    pub activities: Vec<String>,
    /// Rationale per activity; must not outnumber the activities
    #[serde(default)]
    pub activity_why: Vec<String>,
    /// Reward strategies that suit this personality
    #[serde(default)]
    pub rewards: Vec<String>,
    /// Rationale per reward
    #[serde(default)]
    pub reward_why: Vec<String>,
    /// Common handling mistakes to avoid
    #[serde(default)]
    pub mistakes: Vec<String>,
    /// Rationale per mistake
    #[serde(default)]
    pub mistake_why: Vec<String>,

    /// Optional narrative analysis block
    #[serde(default)]
    pub analysis: Option<Analysis>,
    /// Optional household compatibility ratings
    #[serde(default)]
    pub compatibility: Option<Vec<CompatibilityEntry>>,
    /// Optional closing paragraph
    #[serde(default)]
    pub closing_summary: Option<String>,
}

impl ReportData {
    /// Validate the report before rendering.
    ///
    /// Percentages are stored as `u8`, so the range check here guards the
    /// upper bound only; values above 100 would draw bars past the track.
    pub fn validate(&self) -> Result<()> {
        if self.pet_name.trim().is_empty() {
            return Err(Error::InvalidReport("pet_name is empty".to_string()));
        }
        if self.profile_title.trim().is_empty() {
            return Err(Error::InvalidReport("profile_title is empty".to_string()));
        }
        if self.dimensions.is_empty() {
            return Err(Error::InvalidReport("no dimensions provided".to_string()));
        }
        for (code, &pct) in &self.dimensions {
            if pct > 100 {
                return Err(Error::InvalidPercentage {
                    code: code.clone(),
                    value: pct as i64,
                });
            }
        }
        for (name, items, why) in [
            ("activities", &self.activities, &self.activity_why),
            ("rewards", &self.rewards, &self.reward_why),
            ("mistakes", &self.mistakes, &self.mistake_why),
        ] {
            if why.len() > items.len() {
                return Err(Error::InvalidReport(format!(
                    "{} has {} rationale(s) for {} item(s)",
                    name,
                    why.len(),
                    items.len()
                )));
            }
        }
        Ok(())
    }

    /// Dimensions in render order: the five known codes first, in their
    /// canonical order, then any remaining codes lexically.
    pub fn ordered_dimensions(&self) -> Vec<(&str, u8)> {
        let mut ordered: Vec<(&str, u8)> = Vec::with_capacity(self.dimensions.len());
        for code in DIMENSION_ORDER {
            if let Some(&pct) = self.dimensions.get(code) {
                ordered.push((code, pct));
            }
        }
        for (code, &pct) in &self.dimensions {
            if !DIMENSION_ORDER.contains(&code.as_str()) {
                ordered.push((code, pct));
            }
        }
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ReportData {
        ReportData {
            pet_name: "Biscuit".to_string(),
            profile_title: "The Gentle Explorer".to_string(),
            dimensions: BTreeMap::from([("SOC".to_string(), 70u8)]),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_report_validates() {
        assert!(minimal().validate().is_ok());
    }

    #[test]
    fn test_empty_pet_name_rejected() {
        let mut report = minimal();
        report.pet_name = "   ".to_string();
        assert!(matches!(report.validate(), Err(Error::InvalidReport(_))));
    }

    #[test]
    fn test_missing_dimensions_rejected() {
        let mut report = minimal();
        report.dimensions.clear();
        assert!(report.validate().is_err());
    }

    #[test]
    fn test_excess_rationales_rejected() {
        let mut report = minimal();
        report.activities = vec!["Fetch".to_string()];
        report.activity_why = vec!["why 1".to_string(), "why 2".to_string()];
        let err = report.validate().unwrap_err();
        assert!(format!("{}", err).contains("activities"));
    }

    #[test]
    fn test_dimension_order_canonical_then_lexical() {
        let mut report = minimal();
        report.dimensions = BTreeMap::from([
            ("INT".to_string(), 90),
            ("SOC".to_string(), 80),
            ("ENG".to_string(), 40),
            ("CUR".to_string(), 55),
            ("AGI".to_string(), 65),
        ]);
        let order: Vec<&str> = report.ordered_dimensions().iter().map(|&(c, _)| c).collect();
        assert_eq!(order, vec!["SOC", "ENG", "INT", "AGI", "CUR"]);
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let json = r#"{
            "pet_name": "Luna",
            "profile_title": "The Thoughtful Observer",
            "dimensions": {"SOC": 45, "INT": 88}
        }"#;
        let report: ReportData = serde_json::from_str(json).unwrap();
        assert_eq!(report.pet_name, "Luna");
        assert!(report.analysis.is_none());
        assert!(report.validate().is_ok());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_percentage() {
        // 140 does not fit in u8's validated range; serde accepts the u8,
        // validate() rejects anything over 100
        let json = r#"{
            "pet_name": "Rex",
            "profile_title": "T",
            "dimensions": {"ENG": 140}
        }"#;
        let report: ReportData = serde_json::from_str(json).unwrap();
        assert!(matches!(
            report.validate(),
            Err(Error::InvalidPercentage { value: 140, .. })
        ));
    }
}
