use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Either a paragraph or an ordered list of points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    List(Vec<String>),
}

impl Content {
    /// Strings, numbers and booleans become text; lists keep their scalar
    /// items. Any other shape is treated as absent.
    fn from_value(value: &Value) -> Option<Content> {
        match value {
            Value::Array(items) => Some(Content::List(
                items.iter().filter_map(scalar_text).collect(),
            )),
            other => scalar_text(other).map(Content::Text),
        }
    }

    fn non_empty(&self) -> Option<Content> {
        match self {
            Content::Text(text) if !text.trim().is_empty() => Some(Content::Text(text.clone())),
            Content::List(items) => {
                let items: Vec<String> = items
                    .iter()
                    .filter(|item| !item.trim().is_empty())
                    .cloned()
                    .collect();
                (!items.is_empty()).then_some(Content::List(items))
            }
            Content::Text(_) => None,
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnMoreLink {
    pub title: String,
    pub url: String,
}

impl LearnMoreLink {
    /// Entries without a string `url` are skipped; a missing title falls
    /// back to the url.
    fn list_from_value(value: Option<Value>) -> Vec<LearnMoreLink> {
        let Some(Value::Array(items)) = value else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| {
                let url = item.get("url")?.as_str()?.trim();
                if url.is_empty() {
                    return None;
                }
                let title = item
                    .get("title")
                    .and_then(Value::as_str)
                    .filter(|title| !title.trim().is_empty())
                    .unwrap_or(url);
                Some(LearnMoreLink {
                    title: title.to_string(),
                    url: url.to_string(),
                })
            })
            .collect()
    }
}

/// Sparse explanation attached to an option. Only present fields render.
///
/// Decoding never fails: a field of an unexpected shape is dropped, and an
/// explanation that is not an object is empty.
#[derive(Debug, Clone, Default)]
pub struct ExplanationEntry {
    pub summary: Option<Content>,
    pub key_points: Option<Content>,
    pub examples: Option<Content>,
    pub additional_info: Option<Content>,
    pub why: Option<Content>,
    pub analogy: Option<Content>,
    pub comparison: Option<Content>,
    pub what_it_does: Option<Content>,
    pub what_it_does_not: Option<Content>,
    pub speed_comparison: Option<Content>,
    pub why_fast: Option<Content>,
    pub key_functions: Option<Content>,
    pub key_features: Option<Content>,
    pub characteristics: Option<Content>,
    pub what_ram_stores: Option<Content>,
    pub implications: Option<Content>,
    pub how_it_works: Option<Content>,
    pub architecture: Option<Content>,
    pub key_distinction: Option<Content>,
    pub confusion: Option<Content>,
    pub identification: Option<Content>,
    pub performance_impact: Option<Content>,
    pub learn_more: Vec<LearnMoreLink>,
    /// Unnamed keys; those ending in `Facts` are topic fact lists.
    pub extra: BTreeMap<String, Value>,
}

impl ExplanationEntry {
    fn from_fields(mut fields: Map<String, Value>) -> Self {
        let mut take = |key: &str| fields.remove(key).as_ref().and_then(Content::from_value);
        let mut entry = ExplanationEntry {
            summary: take("summary"),
            key_points: take("keyPoints"),
            examples: take("examples"),
            additional_info: take("additionalInfo"),
            why: take("why"),
            analogy: take("analogy"),
            comparison: take("comparison"),
            what_it_does: take("whatItDoes"),
            what_it_does_not: take("whatItDoesNot"),
            speed_comparison: take("speedComparison"),
            why_fast: take("whyFast"),
            key_functions: take("keyFunctions"),
            key_features: take("keyFeatures"),
            characteristics: take("characteristics"),
            what_ram_stores: match take("whatRAMStores") {
                Some(content) => Some(content),
                None => take("whatRamStores"),
            },
            implications: take("implications"),
            how_it_works: take("howItWorks"),
            architecture: take("architecture"),
            key_distinction: take("keyDistinction"),
            confusion: take("confusion"),
            identification: take("identification"),
            performance_impact: take("performanceImpact"),
            ..ExplanationEntry::default()
        };
        entry.learn_more = LearnMoreLink::list_from_value(fields.remove("learnMore"));
        entry.extra = fields.into_iter().collect();
        entry
    }
}

impl<'de> Deserialize<'de> for ExplanationEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Object(fields) => ExplanationEntry::from_fields(fields),
            _ => ExplanationEntry::default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockBody {
    Content(Content),
    Links(Vec<LearnMoreLink>),
}

/// One labelled section beneath a selected option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationBlock {
    pub label: String,
    pub body: BlockBody,
}

/// Blocks for every non-empty field, in display order.
pub fn explanation_blocks(entry: &ExplanationEntry) -> Vec<ExplanationBlock> {
    let mut blocks = Vec::new();
    let mut push = |label: &str, field: &Option<Content>| {
        if let Some(content) = field.as_ref().and_then(Content::non_empty) {
            blocks.push(ExplanationBlock {
                label: label.to_string(),
                body: BlockBody::Content(content),
            });
        }
    };

    push("Summary", &entry.summary);
    push("Key Points", &entry.key_points);
    push("Examples", &entry.examples);
    push("Additional Info", &entry.additional_info);
    push("Why", &entry.why);
    push("Analogy", &entry.analogy);
    push("Comparison", &entry.comparison);
    push("What It Does", &entry.what_it_does);
    push("What It Does Not Do", &entry.what_it_does_not);
    push("Speed Comparison", &entry.speed_comparison);
    push("Why It's Fast", &entry.why_fast);
    push("Key Functions", &entry.key_functions);
    push("Key Features", &entry.key_features);
    push("Characteristics", &entry.characteristics);
    push("What RAM Stores", &entry.what_ram_stores);
    push("Implications", &entry.implications);
    push("How It Works", &entry.how_it_works);
    for (key, value) in &entry.extra {
        let Some(topic) = key.strip_suffix("Facts").filter(|t| !t.is_empty()) else {
            continue;
        };
        let content = Content::from_value(value);
        push(&format!("{} Facts", topic_label(topic)), &content);
    }
    push("Architecture", &entry.architecture);
    push("Key Distinction", &entry.key_distinction);
    push("Common Confusion", &entry.confusion);
    push("How to Identify", &entry.identification);
    push("Performance Impact", &entry.performance_impact);

    let links: Vec<LearnMoreLink> = entry
        .learn_more
        .iter()
        .filter(|link| !link.url.trim().is_empty())
        .cloned()
        .collect();
    if !links.is_empty() {
        blocks.push(ExplanationBlock {
            label: "Learn More".to_string(),
            body: BlockBody::Links(links),
        });
    }
    blocks
}

/// `ec2` -> `EC2`, `lambda` -> `Lambda`.
fn topic_label(topic: &str) -> String {
    if topic.len() <= 3 || topic.chars().any(|ch| ch.is_ascii_digit()) {
        return topic.to_uppercase();
    }
    let mut chars = topic.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
