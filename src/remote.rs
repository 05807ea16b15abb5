//! Shapes exchanged with a remote quiz evaluator.
//!
//! The crate carries no HTTP client. Callers fetch banks with
//! [`QuestionBank::from_reader`](crate::QuestionBank::from_reader), post the body built by
//! [`Submission`] and hand the response text to [`report_from_response`].

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::answer::AnswerSet;
use crate::bank::Category;
use crate::error::Result;
use crate::guidance::Guidance;
use crate::quiz::{Alternate, Report};
use crate::score::Outcome;

/// Credentials for the evaluator, passed in explicitly by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[derive(Debug, Serialize)]
struct SubmissionBody<'a> {
    answers: BTreeMap<String, &'a str>,
}

/// An answer set ready to post to the evaluator.
#[derive(Debug)]
pub struct Submission<'a> {
    session: &'a Session,
    answers: &'a AnswerSet,
}

impl<'a> Submission<'a> {
    pub fn new(session: &'a Session, answers: &'a AnswerSet) -> Self {
        Self { session, answers }
    }

    pub fn authorization(&self) -> String {
        self.session.authorization()
    }

    /// `{"answers": {"<index>": "<option>"}}`
    pub fn body(&self) -> Result<String> {
        let body = SubmissionBody {
            answers: self
                .answers
                .iter()
                .map(|answer| (answer.question.to_string(), answer.option.as_str()))
                .collect(),
        };
        Ok(serde_json::to_string(&body)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteAlternate {
    pub career: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Evaluator response. Older endpoints answer with `suggestion`/`reason`, the
/// 12th-grade ones with `primary_suggestion`/`primary_reason` plus alternates, and
/// the free-text recommender with a single `recommendation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteVerdict {
    #[serde(default, alias = "primary_suggestion")]
    pub suggestion: Option<String>,
    #[serde(default, alias = "primary_reason")]
    pub reason: Option<String>,
    #[serde(default)]
    pub alternate_suggestions: Vec<RemoteAlternate>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

impl RemoteVerdict {
    fn into_report(self, quiz: &str) -> Option<Report> {
        let suggestion = match self.suggestion.filter(|s| !s.trim().is_empty()) {
            Some(suggestion) => suggestion,
            None => return recommendation_report(quiz, self.recommendation?),
        };
        let category = Category::new(suggestion.trim());
        let guidance = Guidance {
            heading: category.to_string(),
            body: self.reason.unwrap_or_default(),
            next_step: String::new(),
        };
        let alternates = self
            .alternate_suggestions
            .into_iter()
            .map(|alternate| Alternate {
                category: Category::new(alternate.career),
                count: None,
                note: alternate.reason.filter(|reason| !reason.is_empty()),
            })
            .collect();
        Some(Report {
            quiz: quiz.to_string(),
            outcome: Outcome::Winner { category },
            counts: None,
            guidance,
            alternates,
        })
    }
}

/// Free text names no category, so the outcome stays undetermined and the text
/// becomes the guidance body.
fn recommendation_report(quiz: &str, text: String) -> Option<Report> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(Report {
        quiz: quiz.to_string(),
        outcome: Outcome::Undetermined { tied: Vec::new() },
        counts: None,
        guidance: Guidance {
            heading: "Recommendation".to_string(),
            body: text.to_string(),
            next_step: String::new(),
        },
        alternates: Vec::new(),
    })
}

/// Turns an evaluator response into a report.
///
/// Malformed or empty responses are not errors for the caller: they produce a
/// "could not evaluate" report asking the user to retry.
pub fn report_from_response(quiz: &str, body: &str) -> Report {
    match serde_json::from_str::<RemoteVerdict>(body) {
        Ok(verdict) => verdict.into_report(quiz).unwrap_or_else(|| {
            warn!("evaluator for '{}' returned no suggestion", quiz);
            fallback_report(quiz)
        }),
        Err(e) => {
            warn!("unreadable evaluator response for '{}': {}", quiz, e);
            fallback_report(quiz)
        }
    }
}

fn fallback_report(quiz: &str) -> Report {
    Report {
        quiz: quiz.to_string(),
        outcome: Outcome::Undetermined { tied: Vec::new() },
        counts: None,
        guidance: Guidance::unavailable(),
        alternates: Vec::new(),
    }
}
