//! Grade-level and subject adjustment factors.
//!
//! Multiplicative factors account for cohort and subject difficulty;
//! adjusted scores are re-clamped so the [0,100] invariant survives the
//! above-one factors.

use crate::normalize::clamp_score;

/// School grade bands with distinct engagement baselines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeLevel {
    Elementary,
    Middle,
    High,
}

impl GradeLevel {
    pub fn factor(&self) -> f64 {
        match self {
            GradeLevel::Elementary => 0.8,
            GradeLevel::Middle => 0.95,
            GradeLevel::High => 1.1,
        }
    }
}

/// Subject difficulty factor. Unknown subjects are neutral.
pub fn subject_factor(subject: &str) -> f64 {
    match subject.to_ascii_lowercase().as_str() {
        "mathematics" => 1.1,
        "science" => 1.05,
        "english" => 1.0,
        "history" => 0.95,
        "arts" => 0.9,
        "physical_education" => 0.85,
        _ => 1.0,
    }
}

/// Apply a grade-level factor to a score.
pub fn by_grade_level(score: f64, grade: GradeLevel) -> f64 {
    clamp_score(score * grade.factor())
}

/// Apply a subject factor to a score.
pub fn by_subject(score: f64, subject: &str) -> f64 {
    clamp_score(score * subject_factor(subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_factors() {
        assert_eq!(by_grade_level(80.0, GradeLevel::Elementary), 64.0);
        assert_eq!(by_grade_level(80.0, GradeLevel::Middle), 76.0);
        assert!((by_grade_level(80.0, GradeLevel::High) - 88.0).abs() < 1e-9);
    }

    #[test]
    fn high_factor_cannot_overshoot() {
        assert_eq!(by_grade_level(95.0, GradeLevel::High), 100.0);
        assert_eq!(by_subject(95.0, "Mathematics"), 100.0);
    }

    #[test]
    fn unknown_subject_is_neutral() {
        assert_eq!(by_subject(72.0, "astrobiology"), 72.0);
    }

    #[test]
    fn subject_lookup_is_case_insensitive() {
        assert_eq!(subject_factor("MATHEMATICS"), 1.1);
        assert_eq!(subject_factor("physical_education"), 0.85);
    }
}
