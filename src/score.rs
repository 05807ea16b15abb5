use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::answer::AnswerSet;
use crate::bank::{Category, QuestionBank};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: u32,
}

/// Votes per category for one answer set.
///
/// Every category of the bank is present, in declaration order, including the
/// ones nobody voted for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally {
    counts: Vec<CategoryCount>,
}

impl Tally {
    fn zeroed(categories: &[Category]) -> Self {
        Self {
            counts: categories
                .iter()
                .map(|category| CategoryCount {
                    category: category.clone(),
                    count: 0,
                })
                .collect(),
        }
    }

    fn increment(&mut self, category: &Category) {
        if let Some(entry) = self.counts.iter_mut().find(|c| &c.category == category) {
            entry.count += 1;
        }
    }

    pub fn get(&self, category: &Category) -> Option<u32> {
        self.counts
            .iter()
            .find(|c| &c.category == category)
            .map(|c| c.count)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn max(&self) -> u32 {
        self.counts.iter().map(|c| c.count).max().unwrap_or(0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryCount> {
        self.counts.iter()
    }

    /// Highest count first; equal counts stay in declaration order.
    pub fn ranked(&self) -> Vec<&CategoryCount> {
        let mut ranked = self.counts.iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

/// What to do when several categories share the highest count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// No pick; the result is [`Outcome::Undetermined`].
    #[default]
    Undetermined,
    /// The first tied category in declaration order wins.
    FirstDeclared,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Winner { category: Category },
    Undetermined { tied: Vec<Category> },
}

impl Outcome {
    pub fn winner(&self) -> Option<&Category> {
        match self {
            Outcome::Winner { category } => Some(category),
            Outcome::Undetermined { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub outcome: Outcome,
    pub tally: Tally,
}

impl Recommendation {
    /// Categories other than the winner that received at least one vote, ranked.
    pub fn runners_up(&self) -> Vec<&CategoryCount> {
        let winner = self.outcome.winner();
        self.tally
            .ranked()
            .into_iter()
            .filter(|c| c.count > 0 && Some(&c.category) != winner)
            .collect()
    }
}

/// Tally-and-argmax scoring shared by every quiz.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    tie_break: TieBreak,
}

impl Scorer {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn score(&self, answers: &AnswerSet, bank: &QuestionBank) -> Result<Recommendation> {
        if answers.len() < bank.size() {
            return Err(Error::IncompleteAnswerSet {
                answered: answers.len(),
                required: bank.size(),
            });
        }

        let mut seen = HashSet::new();
        for answer in answers {
            if answer.question >= bank.size() || !seen.insert(answer.question) {
                return Err(Error::InvalidAnswerIndex {
                    index: answer.question,
                });
            }
        }

        let mut tally = Tally::zeroed(bank.categories());
        for answer in answers {
            tally.increment(bank.category_for(answer.question, &answer.option)?);
        }
        debug!("tally for '{}': {:?}", bank.title(), tally);

        let outcome = self.resolve(&tally);
        Ok(Recommendation { outcome, tally })
    }

    fn resolve(&self, tally: &Tally) -> Outcome {
        let max = tally.max();
        let mut leaders = tally
            .iter()
            .filter(|c| c.count == max)
            .map(|c| c.category.clone())
            .collect::<Vec<_>>();

        if leaders.len() == 1 || self.tie_break == TieBreak::FirstDeclared {
            Outcome::Winner {
                category: leaders.swap_remove(0),
            }
        } else {
            Outcome::Undetermined { tied: leaders }
        }
    }
}
