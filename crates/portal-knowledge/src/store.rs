use std::collections::HashMap;
use std::sync::LazyLock;

use crate::data;
use crate::types::{FactGroup, KnowledgeEntry, ScenarioEntry, Subject};

static BUILTIN: LazyLock<KnowledgeStore> =
    LazyLock::new(|| KnowledgeStore::new(data::VOCABULARY, data::SCENARIOS, data::TOPICS));

/// Read-only view over the static knowledge tables.
#[derive(Debug)]
pub struct KnowledgeStore {
    vocabulary: &'static [KnowledgeEntry],
    scenarios: &'static [ScenarioEntry],
    topics: &'static [FactGroup],
    by_key: HashMap<&'static str, usize>,
}

impl KnowledgeStore {
    fn new(
        vocabulary: &'static [KnowledgeEntry],
        scenarios: &'static [ScenarioEntry],
        topics: &'static [FactGroup],
    ) -> Self {
        let by_key: HashMap<_, _> = vocabulary
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.key, idx))
            .collect();
        debug_assert_eq!(by_key.len(), vocabulary.len(), "duplicate vocabulary key");

        Self {
            vocabulary,
            scenarios,
            topics,
            by_key,
        }
    }

    /// The store compiled into this binary.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Exact, case-sensitive lookup of a vocabulary term.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&KnowledgeEntry> {
        self.by_key.get(key).map(|&idx| &self.vocabulary[idx])
    }

    /// All vocabulary entries in authoring order.
    #[must_use]
    pub const fn entries(&self) -> &[KnowledgeEntry] {
        self.vocabulary
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.vocabulary.iter().map(|entry| entry.key)
    }

    /// All scenarios in authoring order.
    #[must_use]
    pub const fn all_scenarios(&self) -> &[ScenarioEntry] {
        self.scenarios
    }

    #[must_use]
    pub const fn topics(&self) -> &[FactGroup] {
        self.topics
    }

    /// Fact groups for one subject, in authoring order.
    pub fn topic(&self, subject: Subject) -> impl Iterator<Item = &FactGroup> + '_ {
        self.topics.iter().filter(move |group| group.subject == subject)
    }

    /// Vocabulary terms mentioned in free text, ordered by first appearance.
    ///
    /// Matching ignores ASCII case and only counts whole words, so
    /// "Levers" does not mention "lever" but "a LEVER" does.
    #[must_use]
    pub fn mentions(&self, text: &str) -> Vec<&KnowledgeEntry> {
        let haystack = text.to_ascii_lowercase();
        let mut found: Vec<(usize, &KnowledgeEntry)> = self
            .vocabulary
            .iter()
            .filter_map(|entry| first_word_match(&haystack, entry.key).map(|pos| (pos, entry)))
            .collect();
        found.sort_by_key(|(pos, _)| *pos);
        found.into_iter().map(|(_, entry)| entry).collect()
    }
}

fn first_word_match(haystack: &str, needle: &str) -> Option<usize> {
    haystack.match_indices(needle).map(|(pos, _)| pos).find(|&pos| {
        let before = haystack[..pos].chars().next_back();
        let after = haystack[pos + needle.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
