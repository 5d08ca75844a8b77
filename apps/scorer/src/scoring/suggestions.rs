use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub priority: Priority,
    pub category: String,
    pub message: String,
}

impl Suggestion {
    fn new(priority: Priority, category: &str, message: impl Into<String>) -> Self {
        Self {
            priority,
            category: category.to_string(),
            message: message.into(),
        }
    }
}

pub const MAX_SUGGESTIONS: usize = 5;
const MISSING_SKILLS_NAMED: usize = 5;

/// What the rules look at. Skill lists are the full comparator output, not truncated.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionInputs<'a> {
    pub matched_skills: &'a [String],
    pub missing_skills: &'a [String],
    pub total_jd_skills: usize,
    pub years_of_experience: u64,
    pub resume_text: &'a str,
}

/// Runs the rules in their fixed order and keeps the first five.
/// Output order is rule order, not priority order.
pub fn build_suggestions(inputs: &SuggestionInputs<'_>) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let resume_lower = inputs.resume_text.to_lowercase();

    if !inputs.missing_skills.is_empty() {
        let named: Vec<&str> = inputs
            .missing_skills
            .iter()
            .take(MISSING_SKILLS_NAMED)
            .map(String::as_str)
            .collect();
        suggestions.push(Suggestion::new(
            Priority::High,
            "Missing Skills",
            format!("Add missing skills: {} to your resume.", named.join(", ")),
        ));
    }

    suggestions.push(skills_match_suggestion(
        inputs.matched_skills.len(),
        inputs.total_jd_skills,
    ));

    if inputs.years_of_experience == 0 {
        suggestions.push(Suggestion::new(
            Priority::Medium,
            "Experience Clarity",
            "Make sure to clearly mention years of experience in your resume.",
        ));
    }

    if !resume_lower.contains("experience") {
        suggestions.push(Suggestion::new(
            Priority::Medium,
            "Structure",
            "Add a clear \"Experience\" or \"Professional Experience\" section to your resume.",
        ));
    }

    if !resume_lower.contains("education") {
        suggestions.push(Suggestion::new(
            Priority::Medium,
            "Structure",
            "Include an \"Education\" section in your resume.",
        ));
    }

    if !inputs.resume_text.contains('@') && !inputs.resume_text.contains('(') {
        suggestions.push(Suggestion::new(
            Priority::High,
            "Contact Information",
            "Ensure your email address and phone number are clearly listed in your resume.",
        ));
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

fn skills_match_suggestion(matched: usize, total_jd: usize) -> Suggestion {
    if matched == 0 || total_jd == 0 {
        return Suggestion::new(
            Priority::Critical,
            "Skills Gap",
            "Your resume shares very few skills with the job description. Consider gaining or highlighting relevant skills.",
        );
    }

    if (matched as f64 / total_jd as f64) < 0.5 {
        Suggestion::new(
            Priority::High,
            "Skills Match",
            format!(
                "You have {matched} matching skills. Try to highlight more relevant skills from your experience."
            ),
        )
    } else {
        Suggestion::new(
            Priority::Low,
            "Skills Match",
            format!(
                "Good skill alignment! You have {matched} matching skills with the job description."
            ),
        )
    }
}
