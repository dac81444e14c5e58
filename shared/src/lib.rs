// lib.rs - shared core of the barcode origin scanner

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod capabilities;
pub mod classifier;
pub mod event;
pub mod i18n;
pub mod model;
pub mod registry;

use serde::{Deserialize, Serialize};

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use classifier::{classify, classify_payload, Barcode, BarcodeError, ScanPayload, ScanResult};
pub use crux_core::App as CruxApp;
pub use event::Event;
pub use i18n::{Language, StringKey, TextDirection};
pub use model::{Model, PermissionState, View};
pub use registry::Classification;

use capabilities::ScannerSettings;

/// Characters of a payload that identify the country of origin.
pub const PREFIX_LEN: usize = 3;
/// Voice used for spoken results. Urdu results are never spoken.
pub const SPEECH_LANGUAGE_TAG: &str = "en-US";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultCard {
    pub title: String,
    pub message: String,
    pub classification: Classification,
    pub color: String,
}

impl From<&ScanResult> for ResultCard {
    fn from(r: &ScanResult) -> Self {
        Self {
            title: r.title.clone(),
            message: r.message.clone(),
            classification: r.classification,
            color: r.color().to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Screen {
    /// Permission not yet known; the shell shows an empty container.
    Loading,
    PermissionRequired {
        message: String,
        grant_button: String,
        open_settings: bool,
    },
    Home {
        welcome: String,
        scan_button: String,
        made_by: String,
        result: Option<ResultCard>,
    },
    Scanning {
        hint: String,
        settings: ScannerSettings,
        accepting_scans: bool,
        /// Present only while a scan is locked in.
        scan_again: Option<String>,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub screen: Screen,
    pub language: Language,
    pub direction: TextDirection,
    pub switch_language: String,
}

pub mod app {
    use tracing::{debug, info, warn};

    use super::*;
    use crate::capabilities::{
        CameraError, CameraResult, CapabilityError, PermissionStatus, Utterance,
    };
    use crate::i18n::strings_for;

    #[derive(Default)]
    pub struct App;

    impl App {
        fn permission_status(result: CameraResult) -> Result<PermissionStatus, CapabilityError> {
            Ok(result?.permission_status())
        }

        fn permission_denied(error: &CapabilityError) -> PermissionState {
            PermissionState::Denied {
                permanently: matches!(
                    error,
                    CapabilityError::Camera(CameraError::PermissionDeniedPermanently)
                ),
            }
        }

        fn speak_result(result: &ScanResult, model: &mut Model, caps: &Capabilities) {
            let utterance = Utterance::new(result.spoken_text(), SPEECH_LANGUAGE_TAG);
            model.last_utterance = Some(utterance.id);
            caps.speech.speak(utterance);
        }
    }

    impl crux_core::App for App {
        type Event = Event;
        type Model = Model;
        type ViewModel = ViewModel;
        type Capabilities = Capabilities;

        fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
            debug!(
                event = event.name(),
                user = event.is_user_initiated(),
                "handling event"
            );

            match event {
                Event::Noop => {}

                Event::AppStarted => {
                    // Already granted: re-check without leaving the current screen.
                    if model.camera_permission.is_granted() {
                        caps.camera.check_permission(Event::CameraPermissionChecked);
                        return;
                    }
                    model.camera_permission = PermissionState::Checking;
                    caps.camera.check_permission(Event::CameraPermissionChecked);
                    caps.render.render();
                }

                Event::CameraPermissionChecked(result) => {
                    match Self::permission_status(result) {
                        Ok(status) if status.can_request() => {
                            // Ask straight away instead of waiting for a tap.
                            model.camera_permission = PermissionState::from_status(status);
                            self.update(Event::CameraPermissionRequested, model, caps);
                            return;
                        }
                        Ok(status) => {
                            model.camera_permission = PermissionState::from_status(status);
                        }
                        Err(e) => {
                            warn!(error = %e, "camera permission check failed");
                            model.camera_permission = Self::permission_denied(&e);
                        }
                    }
                    caps.render.render();
                }

                Event::CameraPermissionRequested => {
                    match model.camera_permission {
                        PermissionState::Requesting | PermissionState::Granted => {
                            debug!(state = ?model.camera_permission, "permission request skipped");
                            return;
                        }
                        _ => {}
                    }
                    model.camera_permission = PermissionState::Requesting;
                    caps.camera.request_permission(Event::CameraPermissionResult);
                    caps.render.render();
                }

                Event::CameraPermissionResult(result) => {
                    model.camera_permission = match Self::permission_status(result) {
                        Ok(status) => PermissionState::from_status(status),
                        Err(e) => {
                            warn!(error = %e, "camera permission request failed");
                            Self::permission_denied(&e)
                        }
                    };
                    info!(state = ?model.camera_permission, "camera permission resolved");
                    caps.render.render();
                }

                Event::StartScan => {
                    if !model.start_scan() {
                        warn!(
                            view = ?model.view,
                            permission = ?model.camera_permission,
                            "start scan ignored"
                        );
                        return;
                    }
                    caps.render.render();
                }

                Event::BarcodeScanned { payload } => {
                    let language = model.language;
                    let Some(result) = model.accept_scan(&payload).cloned() else {
                        debug!(
                            view = ?model.view,
                            locked = model.scan_locked,
                            "scan dropped"
                        );
                        return;
                    };

                    if language == Language::English {
                        Self::speak_result(&result, model, caps);
                    }
                    caps.render.render();
                }

                Event::Rescan => {
                    if !model.rescan() {
                        warn!(view = ?model.view, "rescan outside scanner ignored");
                        return;
                    }
                    caps.render.render();
                }

                Event::CancelScan => {
                    if model.cancel_scan() {
                        caps.render.render();
                    }
                }

                Event::ToggleLanguage => {
                    model.toggle_language();
                    info!(language = %model.language, "language switched");
                    caps.render.render();
                }
            }
        }

        fn view(&self, model: &Model) -> ViewModel {
            let t = strings_for(model.language);

            let screen = match model.camera_permission {
                state if state.is_pending() => Screen::Loading,

                PermissionState::Granted => match model.view {
                    View::Home => Screen::Home {
                        welcome: t.welcome.into(),
                        scan_button: t.scan_button.into(),
                        made_by: t.made_by.into(),
                        result: model.last_result.as_ref().map(ResultCard::from),
                    },
                    View::Scanning => Screen::Scanning {
                        hint: t.align_barcode.into(),
                        settings: model.scanner.clone(),
                        accepting_scans: model.is_accepting_scans(),
                        scan_again: model.scan_locked.then(|| t.scan_again.to_string()),
                    },
                },

                state => Screen::PermissionRequired {
                    message: t.permission_text.into(),
                    grant_button: t.grant_permission.into(),
                    open_settings: matches!(state, PermissionState::Denied { permanently: true }),
                },
            };

            ViewModel {
                screen,
                language: model.language,
                direction: model.language.direction(),
                switch_language: t.switch_language.into(),
            }
        }
    }
}
