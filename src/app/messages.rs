use crate::catalog::{CatalogEntry, SortMode};
use crate::config::ViewMode;
use crate::gallery::{ClickOrigin, Direction, ImageEntry};
use crate::quiz::QuizQuestion;
use iced::keyboard::{Key, Modifiers};
use std::path::PathBuf;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleTheme,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    GalleryLoaded {
        images: Vec<ImageEntry>,
        error: Option<String>,
    },
    GallerySearchChanged(String),
    ViewModeSelected(ViewMode),
    ImageLoaded {
        file: String,
        bytes: Option<Vec<u8>>,
    },
    OpenLightbox(usize),
    NavigateLightbox(Direction),
    /// `None` is an explicit close (button or Escape).
    CloseLightbox(Option<ClickOrigin>),
    DownloadCurrent,
    DownloadFinished {
        path: Option<PathBuf>,
        error: Option<String>,
    },
    QuizLoaded {
        questions: Vec<QuizQuestion>,
        error: Option<String>,
    },
    OptionClicked {
        question_id: i64,
        option_id: String,
        multi_select: bool,
    },
    CopyLink(String),
    BackToCatalog,
    CatalogLoaded {
        entries: Vec<CatalogEntry>,
        error: Option<String>,
    },
    CatalogSearchChanged(String),
    CatalogTopicSelected(TopicChoice),
    CatalogSortSelected(SortMode),
    OpenKnowledgeCheck(usize),
}

/// Entry in the topic picker; `Any` clears the topic filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicChoice {
    Any,
    Topic(String),
}

impl TopicChoice {
    pub fn from_filter(topic: &str) -> Self {
        if topic.is_empty() {
            TopicChoice::Any
        } else {
            TopicChoice::Topic(topic.to_string())
        }
    }

    pub fn into_filter(self) -> String {
        match self {
            TopicChoice::Any => String::new(),
            TopicChoice::Topic(topic) => topic,
        }
    }
}

impl std::fmt::Display for TopicChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopicChoice::Any => f.write_str("All topics"),
            TopicChoice::Topic(topic) => f.write_str(topic),
        }
    }
}
