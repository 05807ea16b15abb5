use std::collections::HashSet;
use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Outcome label a quiz resolves to: a stream ("Science") or a career ("Journalist").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub category: Category,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, category: impl Into<Category>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position in the bank
    pub id: u32,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, text: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.text == text)
    }
}

#[derive(Debug, Deserialize)]
struct RawQuestionBank {
    title: String,
    categories: Vec<Category>,
    questions: Vec<Question>,
}

/// Ordered, validated set of questions together with the categories they vote for.
///
/// Categories keep their declaration order; the scorer reports tallies and breaks
/// ties in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawQuestionBank")]
pub struct QuestionBank {
    title: String,
    categories: Vec<Category>,
    questions: Vec<Question>,
}

impl TryFrom<RawQuestionBank> for QuestionBank {
    type Error = Error;

    fn try_from(raw: RawQuestionBank) -> Result<Self> {
        QuestionBank::new(raw.title, raw.categories, raw.questions)
    }
}

impl QuestionBank {
    pub fn new(
        title: impl Into<String>,
        categories: Vec<Category>,
        questions: Vec<Question>,
    ) -> Result<Self> {
        if questions.is_empty() {
            return Err(Error::EmptyBank);
        }
        if categories.is_empty() {
            return Err(Error::NoCategories);
        }

        let mut declared = HashSet::new();
        for category in &categories {
            if !declared.insert(category) {
                return Err(Error::DuplicateCategory(category.to_string()));
            }
        }

        for (position, question) in questions.iter().enumerate() {
            if question.id as usize != position + 1 {
                return Err(Error::QuestionOutOfOrder {
                    position,
                    id: question.id,
                });
            }
            if question.options.len() < 2 {
                return Err(Error::TooFewOptions { id: question.id });
            }
            let mut seen = HashSet::new();
            for option in &question.options {
                if !seen.insert(option.text.as_str()) {
                    return Err(Error::DuplicateOption {
                        id: question.id,
                        option: option.text.clone(),
                    });
                }
                if !declared.contains(&option.category) {
                    return Err(Error::UndeclaredCategory {
                        id: question.id,
                        category: option.category.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            title: title.into(),
            categories,
            questions,
        })
    }

    /// Reads a bank from JSON and validates it.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> usize {
        self.questions.len()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_at(&self, index: usize) -> Result<&Question> {
        self.questions.get(index).ok_or(Error::OutOfRange {
            index,
            size: self.size(),
        })
    }

    /// Category the option with display text `option` votes for.
    pub fn category_for(&self, index: usize, option: &str) -> Result<&Category> {
        self.question_at(index)?
            .option(option)
            .map(|option| &option.category)
            .ok_or_else(|| Error::UnknownOption {
                index,
                option: option.to_string(),
            })
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    pub(crate) fn streams() -> Vec<Category> {
        vec!["Science".into(), "Commerce".into(), "Arts".into()]
    }

    /// Ten questions; option "A" votes Science, "B" Commerce, "C" Arts.
    pub(crate) fn ten_question_bank() -> QuestionBank {
        let questions = (1..=10)
            .map(|id| Question {
                id,
                text: format!("Question {}", id),
                options: vec![
                    AnswerOption::new("A", "Science"),
                    AnswerOption::new("B", "Commerce"),
                    AnswerOption::new("C", "Arts"),
                ],
            })
            .collect();
        QuestionBank::new("Streams", streams(), questions).unwrap()
    }

    #[test]
    fn test_question_at() {
        let bank = ten_question_bank();
        assert_eq!(bank.size(), 10);
        assert_eq!(bank.question_at(0).map(|q| q.id).ok(), Some(1));
        assert_eq!(bank.question_at(9).map(|q| q.id).ok(), Some(10));
        assert!(matches!(
            bank.question_at(10),
            Err(Error::OutOfRange { index: 10, size: 10 })
        ));
    }

    #[test]
    fn test_category_for() {
        let bank = ten_question_bank();
        assert_eq!(bank.category_for(0, "A").unwrap().as_str(), "Science");
        assert_eq!(bank.category_for(9, "C").unwrap().as_str(), "Arts");
        assert!(matches!(
            bank.category_for(3, "D"),
            Err(Error::UnknownOption { index: 3, .. })
        ));
        assert!(matches!(
            bank.category_for(11, "A"),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_empty_bank() {
        assert!(matches!(
            QuestionBank::new("empty", streams(), vec![]),
            Err(Error::EmptyBank)
        ));
    }

    #[test]
    fn test_no_categories() {
        let question = Question {
            id: 1,
            text: "?".into(),
            options: vec![AnswerOption::new("A", "X"), AnswerOption::new("B", "Y")],
        };
        assert!(matches!(
            QuestionBank::new("none", vec![], vec![question]),
            Err(Error::NoCategories)
        ));
    }

    #[test]
    fn test_option_invariants() {
        let single = Question {
            id: 1,
            text: "?".into(),
            options: vec![AnswerOption::new("A", "Science")],
        };
        assert!(matches!(
            QuestionBank::new("single", streams(), vec![single]),
            Err(Error::TooFewOptions { id: 1 })
        ));

        let duplicated = Question {
            id: 1,
            text: "?".into(),
            options: vec![
                AnswerOption::new("A", "Science"),
                AnswerOption::new("A", "Arts"),
            ],
        };
        assert!(matches!(
            QuestionBank::new("duplicated", streams(), vec![duplicated]),
            Err(Error::DuplicateOption { id: 1, .. })
        ));

        let undeclared = Question {
            id: 1,
            text: "?".into(),
            options: vec![
                AnswerOption::new("A", "Science"),
                AnswerOption::new("B", "Vocational"),
            ],
        };
        assert!(matches!(
            QuestionBank::new("undeclared", streams(), vec![undeclared]),
            Err(Error::UndeclaredCategory { id: 1, .. })
        ));
    }

    #[test]
    fn test_question_order() {
        let question = Question {
            id: 2,
            text: "?".into(),
            options: vec![
                AnswerOption::new("A", "Science"),
                AnswerOption::new("B", "Arts"),
            ],
        };
        assert!(matches!(
            QuestionBank::new("order", streams(), vec![question]),
            Err(Error::QuestionOutOfOrder { position: 0, id: 2 })
        ));
    }

    #[test]
    fn test_from_reader() {
        let json = r#"{
            "title": "Mini",
            "categories": ["Science", "Arts"],
            "questions": [
                {"id": 1, "text": "Pick one", "options": [
                    {"text": "Lab", "category": "Science"},
                    {"text": "Studio", "category": "Arts"}
                ]}
            ]
        }"#;
        let bank = QuestionBank::from_reader(json.as_bytes()).unwrap();
        assert_eq!(bank.title(), "Mini");
        assert_eq!(bank.category_for(0, "Studio").unwrap().as_str(), "Arts");
    }

    #[test]
    fn test_from_reader_validates() {
        let json = r#"{
            "title": "Broken",
            "categories": ["Science"],
            "questions": [
                {"id": 1, "text": "Pick one", "options": [
                    {"text": "Lab", "category": "Science"}
                ]}
            ]
        }"#;
        assert!(QuestionBank::from_reader(json.as_bytes()).is_err());
    }
}
