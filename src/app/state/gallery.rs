use super::LoadPhase;
use crate::config::ViewMode;
use crate::gallery::{FolderSelection, Gallery};
use iced::widget::image::Handle;
use std::collections::HashMap;

/// Per-image fetch state, keyed by image path.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Ready(Handle),
    Missing,
}

/// Gallery page model.
pub struct GalleryState {
    pub(in crate::app) selection: FolderSelection,
    pub(in crate::app) phase: LoadPhase,
    pub(in crate::app) gallery: Gallery,
    pub(in crate::app) view_mode: ViewMode,
    pub(in crate::app) slots: HashMap<String, ImageSlot>,
    pub(in crate::app) status: Option<String>,
}

impl GalleryState {
    pub(in crate::app) fn new(selection: FolderSelection, view_mode: ViewMode) -> Self {
        Self {
            selection,
            phase: LoadPhase::Loading,
            gallery: Gallery::default(),
            view_mode,
            slots: HashMap::new(),
            status: None,
        }
    }

    pub(in crate::app) fn slot(&self, file: &str) -> &ImageSlot {
        self.slots.get(file).unwrap_or(&ImageSlot::Loading)
    }
}
