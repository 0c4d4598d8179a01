use super::super::state::{App, ImageSlot, LoadPhase};
use super::Effect;
use crate::config::ViewMode;
use crate::gallery::{ClickOrigin, Direction, Gallery, ImageEntry, download_file_name};
use iced::widget::image::Handle;
use std::collections::hash_map::Entry;
use std::path::PathBuf;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_gallery_loaded(
        &mut self,
        images: Vec<ImageEntry>,
        error: Option<String>,
        effects: &mut Vec<Effect>,
    ) {
        let root = self.content_root.clone();
        let Some(state) = self.gallery_mut() else {
            return;
        };
        if let Some(error) = error {
            warn!(folder = %state.selection, "Gallery failed to load: {error}");
            state.phase = LoadPhase::Failed;
            return;
        }

        info!(
            folder = %state.selection,
            count = images.len(),
            "Gallery manifest loaded"
        );
        for image in &images {
            if let Entry::Vacant(slot) = state.slots.entry(image.file.clone()) {
                slot.insert(ImageSlot::Loading);
                effects.push(Effect::LoadImage {
                    file: image.file.clone(),
                    location: root.resolve(&image.file),
                });
            }
        }
        state.gallery = Gallery::new(images);
        state.phase = LoadPhase::Ready;
    }

    pub(super) fn handle_image_loaded(&mut self, file: String, bytes: Option<Vec<u8>>) {
        let Some(state) = self.gallery_mut() else {
            return;
        };
        let Some(slot) = state.slots.get_mut(&file) else {
            debug!(file = %file, "Dropping image for a gallery that is no longer shown");
            return;
        };
        *slot = match bytes {
            Some(bytes) => ImageSlot::Ready(Handle::from_bytes(bytes)),
            None => ImageSlot::Missing,
        };
    }

    pub(super) fn handle_gallery_search_changed(&mut self, term: String) {
        if let Some(state) = self.gallery_mut() {
            state.gallery.filter_images(&term);
            debug!(
                term = %term,
                visible = state.gallery.filtered().len(),
                "Filtered gallery"
            );
        }
    }

    pub(super) fn handle_view_mode_selected(&mut self, mode: ViewMode) {
        if let Some(state) = self.gallery_mut() {
            state.view_mode = mode;
        }
    }

    pub(super) fn handle_open_lightbox(&mut self, index: usize) {
        if let Some(state) = self.gallery_mut() {
            if state.gallery.open(index) {
                state.status = None;
            } else {
                warn!(index, "Ignoring lightbox request outside the visible images");
            }
        }
    }

    pub(super) fn handle_navigate_lightbox(&mut self, direction: Direction) {
        if let Some(state) = self.gallery_mut() {
            if state.gallery.navigate(direction).is_some() {
                state.status = None;
            }
        }
    }

    pub(super) fn handle_close_lightbox(&mut self, origin: Option<ClickOrigin>) {
        if let Some(state) = self.gallery_mut() {
            if state.gallery.close(origin) {
                state.status = None;
            }
        }
    }

    pub(super) fn handle_download_current(&mut self, effects: &mut Vec<Effect>) {
        let dir = self.download_dir();
        let root = self.content_root.clone();
        let Some(state) = self.gallery_mut() else {
            return;
        };
        let Some(current) = state.gallery.current() else {
            return;
        };
        let file_name = download_file_name(&current.file).to_string();
        effects.push(Effect::DownloadImage {
            location: root.resolve(&current.file),
            dir,
            file_name,
        });
        state.status = Some("Downloading...".to_string());
    }

    pub(super) fn handle_download_finished(
        &mut self,
        path: Option<PathBuf>,
        error: Option<String>,
    ) {
        let Some(state) = self.gallery_mut() else {
            return;
        };
        state.status = match (path, error) {
            (_, Some(error)) => {
                warn!("Image download failed: {error}");
                Some(format!("Download failed: {error}"))
            }
            (Some(path), None) => Some(format!("Saved to {}", path.display())),
            (None, None) => None,
        };
    }
}
