use std::io::Read;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::answer::AnswerSet;
use crate::bank::{Category, QuestionBank};
use crate::error::{Error, Result};
use crate::guidance::{Guidance, GuidanceTable};
use crate::score::{Outcome, Scorer, Tally, TieBreak};

const BUNDLED: [(&str, &str); 5] = [
    ("stream", include_str!("../resources/stream.json")),
    ("aptitude", include_str!("../resources/aptitude.json")),
    ("science", include_str!("../resources/science.json")),
    ("commerce", include_str!("../resources/commerce.json")),
    ("arts", include_str!("../resources/arts.json")),
];

/// Quizzes shipped with the crate, in menu order.
pub static QUIZZES: Lazy<Vec<Quiz>> = Lazy::new(|| {
    BUNDLED
        .iter()
        .map(|(name, json)| {
            Quiz::from_reader(json.as_bytes())
                .unwrap_or_else(|e| panic!("bundled quiz '{}' is invalid: {}", name, e))
        })
        .collect()
});

pub fn quiz(name: &str) -> Result<&'static Quiz> {
    QUIZZES
        .iter()
        .find(|quiz| quiz.name == name)
        .ok_or_else(|| Error::UnknownQuiz(name.to_string()))
}

/// A question bank paired with the guidance for its categories.
#[derive(Debug, Clone, Deserialize)]
pub struct Quiz {
    pub name: String,
    pub bank: QuestionBank,
    #[serde(default)]
    pub guidance: GuidanceTable,
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl Quiz {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> Result<Report> {
        let recommendation = Scorer::new(self.tie_break).score(answers, &self.bank)?;
        let guidance = match &recommendation.outcome {
            Outcome::Winner { category } => self.guidance.guidance_for(category),
            Outcome::Undetermined { .. } => self.guidance.guidance_for_undetermined(),
        };
        let alternates = recommendation
            .runners_up()
            .into_iter()
            .map(|c| Alternate {
                category: c.category.clone(),
                count: Some(c.count),
                note: self
                    .guidance
                    .contains(&c.category)
                    .then(|| self.guidance.guidance_for(&c.category).next_step),
            })
            .collect();

        Ok(Report {
            quiz: self.name.clone(),
            outcome: recommendation.outcome,
            counts: Some(recommendation.tally),
            guidance,
            alternates,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternate {
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Display-ready result of a quiz attempt, computed locally or received from a
/// remote evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub quiz: String,
    pub outcome: Outcome,
    /// Absent when the verdict came from a remote evaluator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<Tally>,
    pub guidance: Guidance,
    pub alternates: Vec<Alternate>,
}
