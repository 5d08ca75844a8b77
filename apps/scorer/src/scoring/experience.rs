use regex::Regex;
use serde::{Deserialize, Serialize};

/// Seniority detected from title words in a résumé.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Executive,
    Senior,
    MidLevel,
    Junior,
    #[default]
    Unknown,
}

/// Checked top-down; the first level whose pattern hits wins.
const LEVEL_PATTERNS: &[(ExperienceLevel, &str)] = &[
    (
        ExperienceLevel::Executive,
        r"\b(cto|cfo|ceo|chief|director|principal)\b",
    ),
    (ExperienceLevel::Senior, r"\b(senior|lead|staff|architect)\b"),
    (ExperienceLevel::MidLevel, r"\b(mid|intermediate|mid-level)\b"),
    (
        ExperienceLevel::Junior,
        r"\b(junior|entry|entry-level|graduate|intern)\b",
    ),
];

/// Years counted towards the experience score.
pub const MAX_COUNTED_YEARS: u64 = 10;
pub const POINTS_PER_YEAR: f64 = 1.5;

#[derive(Debug, Clone)]
pub struct ExperienceScanner {
    years: Regex,
    digit: Regex,
    levels: Vec<(ExperienceLevel, Regex)>,
}

impl ExperienceScanner {
    pub fn new() -> Result<Self, regex::Error> {
        let years = Regex::new(r"(?i)(\d+)\s*(?:years?|yrs?)")?;
        let digit = Regex::new(r"^\d$")?;
        let levels = LEVEL_PATTERNS
            .iter()
            .map(|(level, pattern)| Regex::new(pattern).map(|re| (*level, re)))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self {
            years,
            digit,
            levels,
        })
    }

    /// Largest number written directly before "year(s)"/"yr(s)"; 0 if none.
    /// Any Unicode decimal digits count ("５ years" is 5). Numbers too large
    /// for u64 saturate.
    pub fn years_of_experience(&self, text: &str) -> u64 {
        self.years
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| self.parse_number(m.as_str()))
            .max()
            .unwrap_or(0)
    }

    fn parse_number(&self, digits: &str) -> u64 {
        digits
            .chars()
            .map(|c| self.digit_value(c))
            .try_fold(0u64, |acc, d| acc.checked_mul(10)?.checked_add(d))
            .unwrap_or(u64::MAX)
    }

    /// Value of a decimal digit. Unicode lays every digit set out as a
    /// contiguous 0..9 run, so the offset into the run is the value.
    fn digit_value(&self, c: char) -> u64 {
        if let Some(d) = c.to_digit(10) {
            return u64::from(d);
        }
        let mut buf = [0u8; 4];
        let mut start = u32::from(c);
        while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
            if !self.digit.is_match(prev.encode_utf8(&mut buf)) {
                break;
            }
            start -= 1;
        }
        u64::from((u32::from(c) - start) % 10)
    }

    /// Experience points: `min(years, 10) × 1.5`, so at most 15.
    pub fn experience_points(&self, text: &str) -> f64 {
        self.years_of_experience(text).min(MAX_COUNTED_YEARS) as f64 * POINTS_PER_YEAR
    }

    pub fn experience_level(&self, text: &str) -> ExperienceLevel {
        let lowered = text.to_lowercase();
        self.levels
            .iter()
            .find(|(_, re)| re.is_match(&lowered))
            .map(|(level, _)| *level)
            .unwrap_or_default()
    }
}
