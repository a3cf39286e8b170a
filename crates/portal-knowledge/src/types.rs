use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A vocabulary term with its explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgeEntry {
    /// Lowercase term, unique across the store.
    pub key: &'static str,
    pub definition: &'static str,
    pub examples: &'static [&'static str],
    pub real_world: &'static str,
}

/// A problem/solution pair used for guided-reasoning prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioEntry {
    pub problem: &'static str,
    pub solution: &'static str,
    pub real_world: &'static str,
}

/// Subject area of a [`FactGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Animals,
    Plants,
    EarthScience,
    PhysicalScience,
    Engineering,
}

impl Subject {
    pub const ALL: [Self; 5] = [
        Self::Animals,
        Self::Plants,
        Self::EarthScience,
        Self::PhysicalScience,
        Self::Engineering,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Animals => "animals",
            Self::Plants => "plants",
            Self::EarthScience => "earth_science",
            Self::PhysicalScience => "physical_science",
            Self::Engineering => "engineering",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|subject| subject.as_str() == s)
            .ok_or_else(|| format!("unknown subject '{s}'"))
    }
}

/// One fact. List-style facts have no label; keyed facts
/// (`forest`, `crust`, `lever`) carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub text: &'static str,
}

/// Named group of facts within a subject, e.g. `animals/habitats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactGroup {
    pub subject: Subject,
    pub name: &'static str,
    pub facts: &'static [Fact],
}
