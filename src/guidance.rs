use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bank::Category;

pub const FALLBACK_HEADING: &str = "Explore Further";
const FALLBACK_BODY: &str =
    "We recommend researching this career further to find the best course for you.";
const FALLBACK_NEXT_STEP: &str =
    "Talk to a school counselor or someone working in the field about the courses that lead there.";

pub const UNDETERMINED_HEADING: &str = "Explore All Your Options";
const UNDETERMINED_BODY: &str = "Your answers point equally to more than one path. \
Look into each of the tied options before choosing; all of them suit your interests.";
const UNDETERMINED_NEXT_STEP: &str =
    "Retake the quiz after some reading, or discuss the tied options with a career advisor.";

pub const UNAVAILABLE_HEADING: &str = "Could Not Evaluate";
const UNAVAILABLE_BODY: &str = "We failed to evaluate your quiz this time.";
const UNAVAILABLE_NEXT_STEP: &str = "Please submit the quiz again in a moment.";

/// Display text for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guidance {
    pub heading: String,
    pub body: String,
    pub next_step: String,
}

impl Guidance {
    fn fallback() -> Self {
        Self {
            heading: FALLBACK_HEADING.to_string(),
            body: FALLBACK_BODY.to_string(),
            next_step: FALLBACK_NEXT_STEP.to_string(),
        }
    }

    /// Shown when the evaluator could not be reached or answered nonsense.
    pub fn unavailable() -> Self {
        Self {
            heading: UNAVAILABLE_HEADING.to_string(),
            body: UNAVAILABLE_BODY.to_string(),
            next_step: UNAVAILABLE_NEXT_STEP.to_string(),
        }
    }

    /// Shown when no single category wins.
    pub fn undetermined() -> Self {
        Self {
            heading: UNDETERMINED_HEADING.to_string(),
            body: UNDETERMINED_BODY.to_string(),
            next_step: UNDETERMINED_NEXT_STEP.to_string(),
        }
    }
}

/// Static category → guidance text, read-only once loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuidanceTable {
    entries: HashMap<Category, Guidance>,
}

impl FromIterator<(Category, Guidance)> for GuidanceTable {
    fn from_iter<I: IntoIterator<Item = (Category, Guidance)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl GuidanceTable {
    pub fn contains(&self, category: &Category) -> bool {
        self.entries.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Never fails: categories without an entry get the generic "Explore Further" text.
    pub fn guidance_for(&self, category: &Category) -> Guidance {
        self.entries
            .get(category)
            .cloned()
            .unwrap_or_else(Guidance::fallback)
    }

    pub fn guidance_for_undetermined(&self) -> Guidance {
        Guidance::undetermined()
    }
}
