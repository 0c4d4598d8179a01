use crate::gallery::FolderSelection;
use crate::manifest::Location;
use std::path::PathBuf;

mod catalog;
mod core;
mod gallery;
mod quiz;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Effect {
    LoadGallery {
        location: Location,
        selection: FolderSelection,
    },
    LoadImage {
        file: String,
        location: Location,
    },
    LoadQuiz {
        location: Location,
    },
    LoadCatalog {
        location: Location,
    },
    DownloadImage {
        location: Location,
        dir: PathBuf,
        file_name: String,
    },
    CopyToClipboard(String),
}
