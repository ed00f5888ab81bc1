//! Keyword-driven insights: subject/question-type classification for
//! free-text questions and fixed coaching lines per score kind.
//!
//! This is table lookup over fixed keyword sets, not a learned model.
//! The narration collaborator may append these lines to alerts.

use pulse_core::{AlertDirection, FxHashMap, ScoreAlert, ScoreKind};

/// Course subjects the keyword tables know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    SoftwareTesting,
    ProgrammingFundamentals,
    SystemProgramming,
    DatabaseManagement,
}

impl Subject {
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Subject::SoftwareTesting => {
                &["test", "testing", "bug", "defect", "quality", "verification"]
            }
            Subject::ProgrammingFundamentals => {
                &["program", "code", "variable", "function", "loop", "algorithm"]
            }
            Subject::SystemProgramming => {
                &["process", "thread", "memory", "kernel", "operating", "system"]
            }
            Subject::DatabaseManagement => {
                &["database", "sql", "table", "query", "data", "dbms"]
            }
        }
    }

    const ALL: [Subject; 4] = [
        Subject::SoftwareTesting,
        Subject::ProgrammingFundamentals,
        Subject::SystemProgramming,
        Subject::DatabaseManagement,
    ];
}

/// Broad question intent, keyed off interrogative keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    Definition,
    Implementation,
    Explanation,
    General,
}

/// Classify a question's subject by keyword overlap; ties and no-match
/// default to programming fundamentals.
pub fn detect_subject(question: &str) -> Subject {
    let words: Vec<String> = question
        .to_ascii_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut counts: FxHashMap<Subject, usize> = FxHashMap::default();
    for subject in Subject::ALL {
        let hits = words
            .iter()
            .filter(|w| subject.keywords().contains(&w.as_str()))
            .count();
        counts.insert(subject, hits);
    }

    let mut best = Subject::ProgrammingFundamentals;
    let mut best_hits = 0;
    for subject in Subject::ALL {
        let hits = counts[&subject];
        if hits > best_hits {
            best_hits = hits;
            best = subject;
        }
    }
    best
}

/// Classify the question intent.
pub fn detect_question_type(question: &str) -> QuestionType {
    let lower = question.to_ascii_lowercase();
    let has = |words: &[&str]| lower.split_whitespace().any(|w| words.contains(&w));

    if has(&["what", "define", "explain"]) {
        QuestionType::Definition
    } else if has(&["how", "implement", "create"]) {
        QuestionType::Implementation
    } else if has(&["why", "advantage", "benefit"]) {
        QuestionType::Explanation
    } else {
        QuestionType::General
    }
}

/// Coaching suggestion for a dropping score.
pub fn suggestion(kind: ScoreKind) -> &'static str {
    match kind {
        ScoreKind::Attention => {
            "Try using interactive questioning techniques to regain student attention."
        }
        ScoreKind::Emotion => {
            "Consider incorporating visual aids or hands-on activities to boost engagement."
        }
        ScoreKind::Participation => {
            "Encourage more student participation with group discussions or peer activities."
        }
        ScoreKind::OverallEngagement => {
            "Take a short break or change teaching method to re-energize the class."
        }
        ScoreKind::Comprehension => {
            "Slow down the pace and check for understanding more frequently."
        }
        ScoreKind::TeacherEffectiveness | ScoreKind::Pace => {
            "Consider adjusting your teaching approach to improve student response."
        }
    }
}

/// Encouragement line for a rising score.
pub fn encouragement(kind: ScoreKind) -> &'static str {
    match kind {
        ScoreKind::Attention => "Students are becoming more focused. Keep up the good work!",
        ScoreKind::Emotion => "Excellent! Your teaching methods are working well.",
        ScoreKind::Participation => "Students are participating more actively. Great job!",
        ScoreKind::OverallEngagement => {
            "The class energy is improving. Continue with this approach."
        }
        ScoreKind::Comprehension => {
            "Students are understanding better. Your explanations are effective."
        }
        ScoreKind::TeacherEffectiveness | ScoreKind::Pace => "Keep up the excellent teaching!",
    }
}

/// The coaching line matching an alert's direction.
pub fn coaching_line(alert: &ScoreAlert) -> &'static str {
    match alert.direction {
        AlertDirection::Drop => suggestion(alert.kind),
        AlertDirection::Increase => encouragement(alert.kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_detection_by_overlap() {
        assert_eq!(
            detect_subject("how do I write a SQL query against a table"),
            Subject::DatabaseManagement
        );
        assert_eq!(
            detect_subject("what is a kernel thread in an operating system"),
            Subject::SystemProgramming
        );
    }

    #[test]
    fn no_match_defaults_to_programming() {
        assert_eq!(detect_subject("hello there"), Subject::ProgrammingFundamentals);
    }

    #[test]
    fn question_type_detection() {
        assert_eq!(detect_question_type("what is a loop"), QuestionType::Definition);
        assert_eq!(
            detect_question_type("how do I implement this"),
            QuestionType::Implementation
        );
        assert_eq!(
            detect_question_type("why is this an advantage"),
            QuestionType::Explanation
        );
        assert_eq!(detect_question_type("tell me more"), QuestionType::General);
    }

    #[test]
    fn coaching_line_follows_direction() {
        let drop = ScoreAlert {
            kind: ScoreKind::Comprehension,
            value: 60,
            direction: AlertDirection::Drop,
            change_pct: 15.0,
        };
        assert_eq!(coaching_line(&drop), suggestion(ScoreKind::Comprehension));

        let rise = ScoreAlert {
            direction: AlertDirection::Increase,
            ..drop
        };
        assert_eq!(coaching_line(&rise), encouragement(ScoreKind::Comprehension));
    }
}
