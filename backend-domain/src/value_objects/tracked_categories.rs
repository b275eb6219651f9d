// Tracked trash categories value object

use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORIES: [&str; 3] = ["PET", "CAN", "GLASS BOTTLE"];

/// Ordered set of uppercase category names the dashboard counts.
///
/// An event belongs to a category when its uppercased type name equals the
/// category exactly. Names outside the set are only counted in totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TrackedCategories(Vec<String>);

impl TrackedCategories {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let upper = name.as_ref().trim().to_uppercase();
            if upper.is_empty() || out.contains(&upper) {
                continue;
            }
            out.push(upper);
        }
        Self(out)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position of the category `trash_name` falls into, if tracked.
    pub fn position_of(&self, trash_name: &str) -> Option<usize> {
        let upper = trash_name.to_uppercase();
        self.0.iter().position(|name| *name == upper)
    }
}

impl Default for TrackedCategories {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}

impl From<Vec<String>> for TrackedCategories {
    fn from(value: Vec<String>) -> Self {
        Self::new(value)
    }
}

impl From<TrackedCategories> for Vec<String> {
    fn from(value: TrackedCategories) -> Self {
        value.0
    }
}
