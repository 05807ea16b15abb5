use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// 0-based question index
    pub question: usize,
    pub option: String,
}

impl Answer {
    pub fn new(question: usize, option: impl Into<String>) -> Self {
        Self {
            question,
            option: option.into(),
        }
    }
}

/// Answers of one quiz attempt, in the order they were given.
///
/// Nothing is checked against a bank here; the scorer rejects incomplete sets,
/// duplicate indices and unknown options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: Vec<Answer>,
}

impl From<Vec<Answer>> for AnswerSet {
    fn from(answers: Vec<Answer>) -> Self {
        Self { answers }
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

impl AnswerSet {
    /// Answers the first question that has no answer yet and returns its index.
    pub fn push(&mut self, option: impl Into<String>) -> usize {
        let index = (0..)
            .find(|index| !self.is_answered(*index))
            .unwrap_or_default();
        self.answers.push(Answer::new(index, option));
        index
    }

    /// Sets the answer for `index`, replacing an earlier one.
    pub fn answer(&mut self, index: usize, option: impl Into<String>) {
        let option = option.into();
        match self.answers.iter_mut().find(|answer| answer.question == index) {
            Some(answer) => answer.option = option,
            None => self.answers.push(Answer::new(index, option)),
        }
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.answers.iter().any(|answer| answer.question == index)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.answers
            .iter()
            .find(|answer| answer.question == index)
            .map(|answer| answer.option.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Answer> {
        self.answers.iter()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = &'a Answer;
    type IntoIter = std::slice::Iter<'a, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.answers.iter()
    }
}
