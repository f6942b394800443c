use crate::domain::model::{IntentSummary, LoanRecord};
use std::collections::{BTreeMap, HashMap};

/// Lenient numeric parsing for amount and rate fields: trim, drop
/// thousands-separator commas, strip one trailing percent sign. Anything
/// that still fails to parse is absent, not an error.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    // Trim again: "5 %" leaves "5 " behind after the suffix strip.
    let cleaned = cleaned.strip_suffix('%').unwrap_or(&cleaned).trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Mode of the non-empty grades in a group. Ties go to the grade seen
/// first, so counting keeps insertion order on the side.
pub fn most_common_grade<'a, I>(grades: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for grade in grades {
        if grade.is_empty() {
            continue;
        }
        let count = counts.entry(grade).or_insert(0);
        if *count == 0 {
            order.push(grade);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for grade in order {
        let count = counts[grade];
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((grade, count));
        }
    }

    best.map(|(grade, _)| grade.to_string()).unwrap_or_default()
}

fn mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Group records by intent and reduce each group to its summary.
/// Records with a blank intent never reach this point (extract skips
/// them). The BTreeMap keeps the output sorted ascending by intent.
pub fn summarize(records: Vec<LoanRecord>) -> Vec<IntentSummary> {
    let mut groups: BTreeMap<String, Vec<LoanRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.intent.clone()).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(intent, rows)| {
            let most_common_grade = most_common_grade(rows.iter().map(|r| r.grade.as_str()));
            let avg_amount = mean(rows.iter().filter_map(|r| r.amount));
            let avg_interest_rate = mean(rows.iter().filter_map(|r| r.rate));
            IntentSummary {
                intent,
                most_common_grade,
                avg_amount,
                avg_interest_rate,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(intent: &str, grade: &str, amount: Option<f64>, rate: Option<f64>) -> LoanRecord {
        LoanRecord {
            intent: intent.to_string(),
            grade: grade.to_string(),
            amount,
            rate,
        }
    }

    #[test]
    fn test_parse_numeric_plain_values() {
        assert_eq!(parse_numeric("1000"), Some(1000.0));
        assert_eq!(parse_numeric("  42.5  "), Some(42.5));
    }

    #[test]
    fn test_parse_numeric_thousands_separator() {
        assert_eq!(parse_numeric("1,200"), Some(1200.0));
        assert_eq!(parse_numeric("1,200,000.50"), Some(1200000.5));
    }

    #[test]
    fn test_parse_numeric_percent_suffix() {
        assert_eq!(parse_numeric("5.25%"), Some(5.25));
        assert_eq!(parse_numeric("7%"), Some(7.0));
    }

    #[test]
    fn test_parse_numeric_whitespace_before_percent() {
        assert_eq!(parse_numeric("5 %"), Some(5.0));
        assert_eq!(parse_numeric("  5.5 % "), Some(5.5));
        assert_eq!(parse_numeric(" %"), None);
    }

    #[test]
    fn test_parse_numeric_absent() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("%"), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("12a"), None);
    }

    #[test]
    fn test_most_common_grade_simple_mode() {
        let grades = ["A", "B", "A"];
        assert_eq!(most_common_grade(grades), "A");
    }

    #[test]
    fn test_most_common_grade_tie_goes_to_first_seen() {
        let grades = ["B", "A", "A", "B"];
        assert_eq!(most_common_grade(grades), "B");

        let grades = ["C", "A", "C", "A", "B"];
        assert_eq!(most_common_grade(grades), "C");
    }

    #[test]
    fn test_most_common_grade_ignores_empty() {
        let grades = ["", "", "D"];
        assert_eq!(most_common_grade(grades), "D");
        assert_eq!(most_common_grade(["", ""]), "");
        assert_eq!(most_common_grade(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_summarize_computes_means() {
        let records = vec![
            record("education", "A", Some(1000.0), Some(5.0)),
            record("education", "A", Some(2000.0), Some(7.0)),
        ];
        let summaries = summarize(records);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].intent, "education");
        assert_eq!(summaries[0].most_common_grade, "A");
        assert_eq!(summaries[0].avg_amount, 1500.0);
        assert_eq!(summaries[0].avg_interest_rate, 6.0);
    }

    #[test]
    fn test_summarize_defaults_for_empty_groups() {
        let records = vec![record("medical", "", None, None)];
        let summaries = summarize(records);
        assert_eq!(summaries[0].most_common_grade, "");
        assert_eq!(summaries[0].avg_amount, 0.0);
        assert_eq!(summaries[0].avg_interest_rate, 0.0);
    }

    #[test]
    fn test_summarize_absent_values_excluded_from_mean() {
        let records = vec![
            record("venture", "B", Some(500.0), None),
            record("venture", "C", None, Some(10.0)),
            record("venture", "B", Some(1500.0), None),
        ];
        let summaries = summarize(records);
        assert_eq!(summaries[0].avg_amount, 1000.0);
        assert_eq!(summaries[0].avg_interest_rate, 10.0);
    }

    #[test]
    fn test_summarize_sorted_by_intent() {
        let records = vec![
            record("venture", "A", None, None),
            record("education", "B", None, None),
            record("medical", "C", None, None),
        ];
        let intents: Vec<String> = summarize(records).into_iter().map(|s| s.intent).collect();
        assert_eq!(intents, vec!["education", "medical", "venture"]);
    }
}
