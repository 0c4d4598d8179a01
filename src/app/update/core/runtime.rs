use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::catalog::CatalogManifest;
use crate::gallery::{NotesManifest, build_image_list};
use crate::image_loader::{load_image, save_download};
use crate::manifest::fetch_json;
use crate::quiz::QuestionManifest;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::window;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::LoadGallery {
                location,
                selection,
            } => {
                info!(%location, %selection, "Loading gallery manifest");
                Task::perform(
                    async move {
                        match fetch_json::<NotesManifest>(&location).await {
                            Ok(manifest) => Message::GalleryLoaded {
                                images: build_image_list(&manifest, &selection),
                                error: None,
                            },
                            Err(err) => Message::GalleryLoaded {
                                images: Vec::new(),
                                error: Some(err.to_string()),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::LoadImage { file, location } => Task::perform(
                async move {
                    let bytes = match load_image(location).await {
                        Ok(bytes) => Some(bytes),
                        Err(err) => {
                            warn!(file = %file, "Gallery image unavailable: {err:#}");
                            None
                        }
                    };
                    Message::ImageLoaded { file, bytes }
                },
                |message| message,
            ),
            Effect::LoadQuiz { location } => {
                info!(%location, "Loading knowledge check");
                Task::perform(
                    async move {
                        match fetch_json::<QuestionManifest>(&location).await {
                            Ok(manifest) => Message::QuizLoaded {
                                questions: manifest.questions,
                                error: None,
                            },
                            Err(err) => Message::QuizLoaded {
                                questions: Vec::new(),
                                error: Some(err.to_string()),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::LoadCatalog { location } => {
                info!(%location, "Loading knowledge check catalog");
                Task::perform(
                    async move {
                        match fetch_json::<CatalogManifest>(&location).await {
                            Ok(manifest) => Message::CatalogLoaded {
                                entries: manifest.knowledge_checks,
                                error: None,
                            },
                            Err(err) => Message::CatalogLoaded {
                                entries: Vec::new(),
                                error: Some(err.to_string()),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::DownloadImage {
                location,
                dir,
                file_name,
            } => Task::perform(
                async move {
                    match save_download(location, dir, file_name).await {
                        Ok(path) => Message::DownloadFinished {
                            path: Some(path),
                            error: None,
                        },
                        Err(err) => Message::DownloadFinished {
                            path: None,
                            error: Some(format!("{err:#}")),
                        },
                    }
                },
                |message| message,
            ),
            Effect::CopyToClipboard(contents) => {
                debug!(contents = %contents, "Copying link to clipboard");
                iced::clipboard::write(contents)
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
