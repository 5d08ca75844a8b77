//! Scoring Engine: turns a résumé and a job description into an ATS report.
//!
//! Weighted components (max points):
//! - skill match            60  (`match_percentage × 0.6`)
//! - role keywords          15  (role-title overlap × 0.15)
//! - experience relevance   15  (`min(years, 10) × 1.5`)
//! - formatting compliance  10  (checklist ratio × 10)
//!
//! The engine only holds compiled patterns, so one instance is built at startup
//! and shared across requests.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::scoring::comparator::{match_percentage, matched, missing};
use crate::scoring::experience::{ExperienceLevel, ExperienceScanner};
use crate::scoring::extractor::KeywordExtractor;
use crate::scoring::formatting::FormattingChecker;
use crate::scoring::suggestions::{build_suggestions, Suggestion, SuggestionInputs};
use crate::scoring::vocabulary::{is_role_keyword, SKILL_VOCABULARY};

const SKILL_WEIGHT: f64 = 0.6;
const ROLE_WEIGHT: f64 = 0.15;
const FORMATTING_POINTS: f64 = 10.0;
const MAX_SCORE: f64 = 100.0;
/// Size cap on matched/missing lists in responses.
pub const MAX_LISTED_SKILLS: usize = 20;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_match: f64,
    pub role_keywords: f64,
    pub experience_relevance: f64,
    pub formatting_compliance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub ats_score: f64, // 0 – 100
    pub score_breakdown: ScoreBreakdown,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub match_percentage: f64,
    pub experience_level: ExperienceLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_percentage: f64,
    pub total_jd_skills: usize,
    pub total_resume_skills: usize,
}

#[derive(Debug, Clone)]
pub struct AtsEngine {
    extractor: KeywordExtractor,
    experience: ExperienceScanner,
    formatting: FormattingChecker,
}

impl AtsEngine {
    /// Engine over the built-in skill vocabulary.
    pub fn new() -> Result<Self, EngineError> {
        Self::with_vocabulary(SKILL_VOCABULARY.iter())
    }

    pub fn with_vocabulary<I, S>(vocabulary: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            extractor: KeywordExtractor::new(vocabulary)?,
            experience: ExperienceScanner::new()?,
            formatting: FormattingChecker::new()?,
        })
    }

    pub fn vocabulary_size(&self) -> usize {
        self.extractor.vocabulary_size()
    }

    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.extractor.extract(text)
    }

    /// Full ATS score. Empty inputs degrade to empty lists and zero components.
    pub fn score(&self, resume_text: &str, job_description: &str) -> ScoreReport {
        let resume_keywords = self.extractor.extract(resume_text);
        let jd_keywords = self.extractor.extract(job_description);

        let skill_match = match_percentage(&resume_keywords, &jd_keywords);
        let skill_score = skill_match * SKILL_WEIGHT;
        let role_score = role_match_percentage(&resume_keywords, &jd_keywords) * ROLE_WEIGHT;
        let years = self.experience.years_of_experience(resume_text);
        let experience_score = self.experience.experience_points(resume_text);
        let format_score = self.formatting.check(resume_text).ratio() * FORMATTING_POINTS;

        let total = (skill_score + role_score + experience_score + format_score).min(MAX_SCORE);

        let mut matched_skills = matched(&resume_keywords, &jd_keywords);
        let mut missing_skills = missing(&resume_keywords, &jd_keywords);

        let suggestions = build_suggestions(&SuggestionInputs {
            matched_skills: &matched_skills,
            missing_skills: &missing_skills,
            total_jd_skills: jd_keywords.len(),
            years_of_experience: years,
            resume_text,
        });

        debug!(
            "Scored résumé: {} résumé keywords, {} JD keywords, {} matched, total {:.2}",
            resume_keywords.len(),
            jd_keywords.len(),
            matched_skills.len(),
            total
        );

        matched_skills.truncate(MAX_LISTED_SKILLS);
        missing_skills.truncate(MAX_LISTED_SKILLS);

        ScoreReport {
            ats_score: round2(total),
            score_breakdown: ScoreBreakdown {
                skill_match: round2(skill_score),
                role_keywords: round2(role_score),
                experience_relevance: round2(experience_score),
                formatting_compliance: round2(format_score),
            },
            matched_skills,
            missing_skills,
            suggestions,
            match_percentage: round2(skill_match),
            experience_level: self.experience.experience_level(resume_text),
        }
    }

    /// Keyword comparison only, no scoring.
    pub fn compare(&self, resume_text: &str, job_description: &str) -> ComparisonReport {
        let resume_keywords = self.extractor.extract(resume_text);
        let jd_keywords = self.extractor.extract(job_description);

        let mut matched_skills = matched(&resume_keywords, &jd_keywords);
        let mut missing_skills = missing(&resume_keywords, &jd_keywords);
        let pct = match_percentage(&resume_keywords, &jd_keywords);
        matched_skills.truncate(MAX_LISTED_SKILLS);
        missing_skills.truncate(MAX_LISTED_SKILLS);

        ComparisonReport {
            matched_skills,
            missing_skills,
            match_percentage: round2(pct),
            total_jd_skills: jd_keywords.len(),
            total_resume_skills: resume_keywords.len(),
        }
    }
}

/// Overlap of role-title keywords, as a percentage of the JD's role keywords.
/// 0 when the JD names no roles.
pub fn role_match_percentage(resume_keywords: &[String], jd_keywords: &[String]) -> f64 {
    let roles = |kws: &[String]| -> BTreeSet<String> {
        kws.iter()
            .filter(|k| is_role_keyword(k))
            .map(|k| k.to_lowercase())
            .collect()
    };
    let resume_roles = roles(resume_keywords);
    let jd_roles = roles(jd_keywords);

    if jd_roles.is_empty() {
        return 0.0;
    }
    let shared = jd_roles.intersection(&resume_roles).count();
    shared as f64 / jd_roles.len() as f64 * 100.0
}

/// Two decimals, exact halves to even (3.125 → 3.12).
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
