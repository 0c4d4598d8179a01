//! Image gallery model: manifest decoding, filtering and lightbox navigation.
//!
//! Nothing in here touches widgets; the app layer owns a [`Gallery`] and
//! renders from it.

use crate::text_utils::contains_ignore_case;
use serde::Deserialize;

/// Sentinel folder id selecting every note that carries images.
pub const ALL_FOLDERS: &str = "all";

#[derive(Debug, Clone, Deserialize)]
pub struct NotesManifest {
    #[serde(default)]
    pub notes: Vec<NoteEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteEntry {
    pub folder: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub has_images: bool,
    #[serde(default)]
    pub images: Vec<NoteImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteImage {
    pub name: String,
    pub file: String,
}

/// One image as the gallery shows it. `folder` is the owning note's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub name: String,
    pub file: String,
    pub folder: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderSelection {
    All,
    Folder(String),
}

impl FolderSelection {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => FolderSelection::All,
            Some(id) if id == ALL_FOLDERS => FolderSelection::All,
            Some(id) => FolderSelection::Folder(id.to_string()),
        }
    }
}

impl std::fmt::Display for FolderSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FolderSelection::All => f.write_str(ALL_FOLDERS),
            FolderSelection::Folder(id) => f.write_str(id),
        }
    }
}

/// Flatten the notes manifest into gallery entries.
///
/// `All` takes every note flagged `hasImages`; a folder id takes the images of
/// the first note with that folder. Unknown ids produce an empty gallery.
pub fn build_image_list(manifest: &NotesManifest, selection: &FolderSelection) -> Vec<ImageEntry> {
    match selection {
        FolderSelection::All => manifest
            .notes
            .iter()
            .filter(|note| note.has_images)
            .flat_map(entries_for_note)
            .collect(),
        FolderSelection::Folder(id) => manifest
            .notes
            .iter()
            .find(|note| &note.folder == id)
            .map(|note| entries_for_note(note).collect())
            .unwrap_or_default(),
    }
}

fn entries_for_note(note: &NoteEntry) -> impl Iterator<Item = ImageEntry> + '_ {
    note.images.iter().map(move |image| ImageEntry {
        name: image.name.clone(),
        file: join_path(&note.folder, &image.file),
        folder: note.title.clone(),
    })
}

fn join_path(folder: &str, file: &str) -> String {
    let folder = folder.trim_end_matches('/');
    if folder.is_empty() {
        file.to_string()
    } else {
        format!("{folder}/{}", file.trim_start_matches('/'))
    }
}

/// Last path segment of an image path, used as the download name.
pub fn download_file_name(file: &str) -> &str {
    file.rsplit('/').next().unwrap_or(file)
}

/// Which part of the lightbox a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    Backdrop,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Full and filtered image lists plus lightbox position.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    all: Vec<ImageEntry>,
    filtered: Vec<ImageEntry>,
    term: String,
    lightbox: Option<usize>,
}

impl Gallery {
    pub fn new(images: Vec<ImageEntry>) -> Self {
        Self {
            filtered: images.clone(),
            all: images,
            term: String::new(),
            lightbox: None,
        }
    }

    pub fn all(&self) -> &[ImageEntry] {
        &self.all
    }

    pub fn filtered(&self) -> &[ImageEntry] {
        &self.filtered
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Re-derive the visible list from the full list. Closes the lightbox,
    /// since its index refers to the previous list.
    pub fn filter_images(&mut self, term: &str) {
        self.term = term.to_string();
        let needle = term.trim();
        self.filtered = self
            .all
            .iter()
            .filter(|image| {
                contains_ignore_case(&image.name, needle)
                    || contains_ignore_case(&image.folder, needle)
            })
            .cloned()
            .collect();
        self.lightbox = None;
    }

    #[cfg(test)]
    pub fn lightbox_index(&self) -> Option<usize> {
        self.lightbox
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }

    pub fn current(&self) -> Option<&ImageEntry> {
        self.lightbox.and_then(|idx| self.filtered.get(idx))
    }

    /// Returns false when `index` is out of range.
    pub fn open(&mut self, index: usize) -> bool {
        if index < self.filtered.len() {
            self.lightbox = Some(index);
            true
        } else {
            false
        }
    }

    /// Move within the filtered list, wrapping at both ends.
    pub fn navigate(&mut self, direction: Direction) -> Option<usize> {
        let current = self.lightbox?;
        let len = self.filtered.len() as isize;
        if len == 0 {
            return None;
        }
        let next = (current as isize + direction.step()).rem_euclid(len) as usize;
        self.lightbox = Some(next);
        Some(next)
    }

    /// Close on an explicit request (`None`) or a backdrop click; clicks on
    /// the image or its chrome keep the lightbox open. Returns whether it closed.
    pub fn close(&mut self, origin: Option<ClickOrigin>) -> bool {
        match origin {
            None | Some(ClickOrigin::Backdrop) => self.lightbox.take().is_some(),
            Some(ClickOrigin::Content) => false,
        }
    }

    /// 1-based "i of N" counter for the open image.
    pub fn counter_label(&self) -> Option<String> {
        self.lightbox
            .map(|idx| format!("{} of {}", idx + 1, self.filtered.len()))
    }
}
