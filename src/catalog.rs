//! Knowledge-check catalog: topic options, filtering and sorting.

use crate::text_utils::{compare_text, contains_ignore_case};
use serde::Deserialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogManifest {
    #[serde(default)]
    pub knowledge_checks: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    #[serde(default)]
    pub topic: String,
    pub file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    TitleAsc,
    TitleDesc,
    TopicAsc,
    TopicDesc,
}

pub const SORT_MODES: [SortMode; 4] = [
    SortMode::TitleAsc,
    SortMode::TitleDesc,
    SortMode::TopicAsc,
    SortMode::TopicDesc,
];

impl SortMode {
    /// `None` for unrecognized values, which callers treat as "keep order".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "title-asc" => Some(SortMode::TitleAsc),
            "title-desc" => Some(SortMode::TitleDesc),
            "topic-asc" => Some(SortMode::TopicAsc),
            "topic-desc" => Some(SortMode::TopicDesc),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SortMode::TitleAsc => "title-asc",
            SortMode::TitleDesc => "title-desc",
            SortMode::TopicAsc => "topic-asc",
            SortMode::TopicDesc => "topic-desc",
        }
    }

    fn compare(self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        match self {
            SortMode::TitleAsc => compare_text(&a.title, &b.title),
            SortMode::TitleDesc => compare_text(&b.title, &a.title),
            SortMode::TopicAsc => {
                compare_text(&a.topic, &b.topic).then_with(|| compare_text(&a.title, &b.title))
            }
            SortMode::TopicDesc => {
                compare_text(&b.topic, &a.topic).then_with(|| compare_text(&b.title, &a.title))
            }
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SortMode::TitleAsc => "Title (A-Z)",
            SortMode::TitleDesc => "Title (Z-A)",
            SortMode::TopicAsc => "Topic (A-Z)",
            SortMode::TopicDesc => "Topic (Z-A)",
        };
        f.write_str(label)
    }
}

/// Distinct topics, alphabetically.
pub fn topic_options(entries: &[CatalogEntry]) -> Vec<String> {
    let mut topics: Vec<String> = entries
        .iter()
        .map(|entry| entry.topic.clone())
        .filter(|topic| !topic.trim().is_empty())
        .collect();
    topics.sort_by(|a, b| compare_text(a, b));
    topics.dedup();
    topics
}

/// Search term on title or topic, AND an exact topic when one is chosen.
pub fn filter_entries(entries: &[CatalogEntry], term: &str, topic: &str) -> Vec<CatalogEntry> {
    let needle = term.trim();
    entries
        .iter()
        .filter(|entry| {
            contains_ignore_case(&entry.title, needle) || contains_ignore_case(&entry.topic, needle)
        })
        .filter(|entry| topic.is_empty() || entry.topic == topic)
        .cloned()
        .collect()
}

/// Stable sort by `mode`; an unrecognized mode string leaves `entries` as is.
pub fn sort_entries(entries: &mut [CatalogEntry], mode: &str) {
    if let Some(mode) = SortMode::parse(mode) {
        entries.sort_by(|a, b| mode.compare(a, b));
    }
}

/// The filter and sort controls plus the derived visible list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    topics: Vec<String>,
    visible: Vec<CatalogEntry>,
    search: String,
    topic: String,
    sort: SortMode,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut catalog = Catalog {
            topics: topic_options(&entries),
            entries,
            ..Catalog::default()
        };
        catalog.refresh();
        catalog
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn visible(&self) -> &[CatalogEntry] {
        &self.visible
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn set_search(&mut self, term: String) {
        self.search = term;
        self.refresh();
    }

    /// Empty string means any topic.
    pub fn set_topic(&mut self, topic: String) {
        self.topic = topic;
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = filter_entries(&self.entries, &self.search, &self.topic);
        sort_entries(&mut self.visible, self.sort.key());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, topic: &str) -> CatalogEntry {
        CatalogEntry {
            title: title.to_string(),
            topic: topic.to_string(),
            file: format!("kc/{}.json", title.to_lowercase().replace(' ', "-")),
        }
    }

    fn sample() -> Vec<CatalogEntry> {
        vec![
            entry("Instance types", "EC2"),
            entry("Buckets", "S3"),
            entry("AMIs", "EC2"),
            entry("Lifecycle rules", "S3"),
        ]
    }

    fn titles(entries: &[CatalogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn topics_are_distinct_and_sorted() {
        let entries = vec![entry("a", "EC2"), entry("b", "S3"), entry("c", "EC2")];
        assert_eq!(topic_options(&entries), vec!["EC2", "S3"]);
    }

    #[test]
    fn search_matches_title_or_topic() {
        let entries = sample();
        assert_eq!(titles(&filter_entries(&entries, "s3", "")), vec!["Buckets", "Lifecycle rules"]);
        assert_eq!(titles(&filter_entries(&entries, "ami", "")), vec!["AMIs"]);
    }

    #[test]
    fn topic_filter_is_exact_and_combines_with_search() {
        let entries = sample();
        assert_eq!(
            titles(&filter_entries(&entries, "", "EC2")),
            vec!["Instance types", "AMIs"]
        );
        assert!(filter_entries(&entries, "bucket", "EC2").is_empty());
        assert!(filter_entries(&entries, "", "ec2").is_empty());
    }

    #[test]
    fn filtering_twice_is_the_same_as_once() {
        let entries = sample();
        let once = filter_entries(&entries, "e", "S3");
        assert_eq!(filter_entries(&once, "e", "S3"), once);
    }

    #[test]
    fn title_sorts_both_directions() {
        let mut entries = sample();
        sort_entries(&mut entries, "title-asc");
        assert_eq!(
            titles(&entries),
            vec!["AMIs", "Buckets", "Instance types", "Lifecycle rules"]
        );
        sort_entries(&mut entries, "title-desc");
        assert_eq!(
            titles(&entries),
            vec!["Lifecycle rules", "Instance types", "Buckets", "AMIs"]
        );
    }

    #[test]
    fn topic_sort_uses_title_as_secondary_key() {
        let mut entries = sample();
        sort_entries(&mut entries, "topic-asc");
        assert_eq!(
            titles(&entries),
            vec!["AMIs", "Instance types", "Buckets", "Lifecycle rules"]
        );
        sort_entries(&mut entries, "topic-desc");
        assert_eq!(
            titles(&entries),
            vec!["Lifecycle rules", "Buckets", "Instance types", "AMIs"]
        );
    }

    #[test]
    fn unknown_sort_mode_keeps_input_order() {
        let mut entries = sample();
        sort_entries(&mut entries, "newest");
        assert_eq!(entries, sample());
    }

    #[test]
    fn catalog_applies_default_sort_and_recomputes() {
        let mut catalog = Catalog::new(sample());
        assert_eq!(catalog.topics(), ["EC2".to_string(), "S3".to_string()]);
        assert_eq!(titles(catalog.visible())[0], "AMIs");

        catalog.set_topic("S3".to_string());
        assert_eq!(catalog.visible().len(), 2);
        catalog.set_search("life".to_string());
        assert_eq!(titles(catalog.visible()), vec!["Lifecycle rules"]);
        catalog.set_search(String::new());
        catalog.set_topic(String::new());
        assert_eq!(catalog.visible().len(), 4);
    }

    #[test]
    fn manifest_uses_knowledge_checks_key() {
        let manifest: CatalogManifest = serde_json::from_str(
            r#"{"knowledgeChecks": [{"title": "T", "topic": "EC2", "file": "kc/t.json"}]}"#,
        )
        .expect("parses");
        assert_eq!(manifest.knowledge_checks.len(), 1);
    }
}
