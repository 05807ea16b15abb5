use std::io::Read;

use crate::answer::AnswerSet;
use crate::error::Result;

/// Reads headerless CSV rows of `id, answer_1, ..., answer_n`.
///
/// Cells hold option text; an empty cell leaves that question unanswered so the
/// row fails scoring as incomplete instead of being skipped.
pub fn read_bulk<R: Read>(reader: R) -> impl Iterator<Item = Result<(String, AnswerSet)>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_records()
        .map(|record| {
            let record = record?;
            let id = record.get(0).unwrap_or_default().to_string();
            let mut answers = AnswerSet::default();
            for (index, option) in record.iter().skip(1).enumerate() {
                if !option.is_empty() {
                    answers.answer(index, option);
                }
            }
            Ok((id, answers))
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::quiz::quiz;

    #[test]
    fn test_read_bulk() {
        let csv = "s-1, A, B\ns-2,C,,D\n";
        let rows = read_bulk(csv.as_bytes())
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "s-1");
        assert_eq!(rows[0].1.get(0), Some("A"));
        assert_eq!(rows[0].1.get(1), Some("B"));
        assert_eq!(rows[1].1.len(), 2);
        assert!(!rows[1].1.is_answered(1));
        assert_eq!(rows[1].1.get(2), Some("D"));
    }

    #[test]
    fn test_bulk_scoring() {
        let quiz = quiz("stream").unwrap();
        let science = quiz
            .bank
            .questions()
            .iter()
            .map(|q| format!("\"{}\"", q.options[0].text))
            .collect::<Vec<_>>()
            .join(",");
        let csv = format!("alice,{}\nbob,{}\n", science, "\"Accounts or Economics\"");
        let mut rows = read_bulk(csv.as_bytes());

        let (id, answers) = rows.next().unwrap().unwrap();
        assert_eq!(id, "alice");
        let report = quiz.evaluate(&answers).unwrap();
        assert_eq!(report.outcome.winner().map(|c| c.as_str()), Some("Science"));

        let (id, answers) = rows.next().unwrap().unwrap();
        assert_eq!(id, "bob");
        assert!(matches!(
            quiz.evaluate(&answers),
            Err(Error::IncompleteAnswerSet { answered: 1, .. })
        ));
        assert!(rows.next().is_none());
    }
}
