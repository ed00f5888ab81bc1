//! Exam record parsing and class-level aggregates.
//!
//! The exam collaborator exposes flat CSV rows of
//! `student_id,subject,...,percentage` (percentage in column 7). Parsing
//! is lenient: malformed numeric fields read as 0, short or blank rows
//! are skipped. The engine never fails on bad exam data.

use pulse_core::ExamRecord;

/// Column index of the percentage field in an exam row.
const PERCENTAGE_COLUMN: usize = 6;

/// Class-level exam aggregates feeding comprehension and effectiveness.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExamSummary {
    /// Mean percentage across all records.
    pub average_performance: f64,
    /// Share of records at or above the pass threshold, as a percentage.
    pub pass_rate: f64,
    /// Share of records at or above the excellence threshold, as a
    /// percentage.
    pub excellence_rate: f64,
}

/// Parse CSV text (header row first) into exam records.
pub fn parse_rows(csv_text: &str) -> Vec<ExamRecord> {
    csv_text
        .lines()
        .skip(1)
        .filter_map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> Option<ExamRecord> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let fields: Vec<&str> = trimmed.split(',').collect();
    if fields.len() <= PERCENTAGE_COLUMN {
        return None;
    }
    Some(ExamRecord {
        student_id: fields[0].trim().to_string(),
        subject: fields[1].trim().to_string(),
        percentage: fields[PERCENTAGE_COLUMN].trim().parse().unwrap_or(0.0),
    })
}

/// Aggregate records into class-level rates. Empty input yields all
/// zeros rather than dividing by the record count.
pub fn summarize(records: &[ExamRecord], pass_threshold: f64, excellence_threshold: f64) -> ExamSummary {
    if records.is_empty() {
        return ExamSummary::default();
    }
    let count = records.len() as f64;
    let total: f64 = records.iter().map(|r| r.percentage).sum();
    let passed = records
        .iter()
        .filter(|r| r.percentage >= pass_threshold)
        .count() as f64;
    let excellent = records
        .iter()
        .filter(|r| r.percentage >= excellence_threshold)
        .count() as f64;

    ExamSummary {
        average_performance: total / count,
        pass_rate: passed / count * 100.0,
        excellence_rate: excellent / count * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
student_id,subject,term,raw,max,grade,percentage
S001,Mathematics,1,70,100,B,70.0
S002,Mathematics,1,92,100,A+,92.0
S003,Science,1,55,100,C,55.0

S004,English,1,61,100,B,61.0
S005,History,1,not_a_number,100,?,garbage
";

    #[test]
    fn parses_rows_leniently() {
        let records = parse_rows(CSV);
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].student_id, "S001");
        assert_eq!(records[1].percentage, 92.0);
        // Malformed percentage reads as 0, row is kept.
        assert_eq!(records[4].percentage, 0.0);
    }

    #[test]
    fn short_rows_are_skipped() {
        let records = parse_rows("header\nS001,Math\n");
        assert!(records.is_empty());
    }

    #[test]
    fn summarize_rates() {
        let records = parse_rows(CSV);
        let summary = summarize(&records, 60.0, 90.0);
        // 70 + 92 + 55 + 61 + 0 = 278 over 5 records.
        assert!((summary.average_performance - 55.6).abs() < 1e-9);
        // 3 of 5 pass, 1 of 5 excellent.
        assert!((summary.pass_rate - 60.0).abs() < 1e-9);
        assert!((summary.excellence_rate - 20.0).abs() < 1e-9);
    }

    #[test]
    fn empty_records_yield_zero_rates() {
        let summary = summarize(&[], 60.0, 90.0);
        assert_eq!(summary.average_performance, 0.0);
        assert_eq!(summary.pass_rate, 0.0);
        assert_eq!(summary.excellence_rate, 0.0);
    }
}
