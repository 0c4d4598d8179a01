use crate::config::ViewMode;
use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Layout and copy shared by the pages.
pub(crate) const THUMBNAIL_HEIGHT_PX: f32 = 160.0;
pub(crate) const LIST_THUMBNAIL_HEIGHT_PX: f32 = 64.0;
pub(crate) const CARD_SPACING_PX: f32 = 12.0;
pub(crate) const PAGE_PADDING_PX: u16 = 16;
pub(crate) const HEADING_FONT_SIZE_PX: f32 = 24.0;
pub(crate) const CAPTION_FONT_SIZE_PX: f32 = 13.0;
pub(crate) const GALLERY_LOAD_ERROR: &str = "Failed to load gallery. Please try again later.";
pub(crate) const QUIZ_LOAD_ERROR: &str =
    "Error loading questions. Please check that the knowledge check file exists.";
pub(crate) const CATALOG_LOAD_ERROR: &str =
    "Failed to load knowledge checks. Please try again later.";
pub(crate) const IMAGE_MISSING_LABEL: &str = "Image not found";
pub(crate) static GALLERY_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("gallery-scroll"));
pub(crate) static QUIZ_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("quiz-scroll"));
pub(crate) const VIEW_MODES: [ViewMode; 2] = [ViewMode::Grid, ViewMode::List];
