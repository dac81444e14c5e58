use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capabilities::{PermissionStatus, ScannerSettings};
use crate::classifier::{classify_payload, ScanPayload, ScanResult};
use crate::i18n::Language;

#[derive(Default, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Also hosts the result card once a scan has been classified.
    #[default]
    Home,
    Scanning,
}

#[derive(Default, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    #[default]
    Unknown,
    Checking,
    Requesting,
    Granted,
    Denied {
        /// The OS will not prompt again; only the settings app can grant it.
        permanently: bool,
    },
}

impl PermissionState {
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Unknown | Self::Checking)
    }

    #[must_use]
    pub fn from_status(status: PermissionStatus) -> Self {
        if status.is_granted() {
            Self::Granted
        } else {
            Self::Denied {
                permanently: status.should_show_settings_prompt(),
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub view: View,
    /// Set by the first accepted scan; later scans are dropped until the
    /// scanner is re-armed by `StartScan` or `Rescan`.
    pub scan_locked: bool,
    pub language: Language,
    pub last_result: Option<ScanResult>,

    pub camera_permission: PermissionState,
    pub scanner: ScannerSettings,

    pub last_utterance: Option<Uuid>,
}

impl Model {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn can_scan(&self) -> bool {
        self.camera_permission.is_granted()
    }

    #[must_use]
    pub const fn is_accepting_scans(&self) -> bool {
        matches!(self.view, View::Scanning) && !self.scan_locked
    }

    /// Home → Scanning. Returns `false` when the camera is not available.
    pub fn start_scan(&mut self) -> bool {
        if !self.can_scan() || self.view == View::Scanning {
            return false;
        }
        self.view = View::Scanning;
        self.scan_locked = false;
        self.last_result = None;
        true
    }

    /// Classifies `payload` with the active language and returns to Home.
    /// `None` when the scanner is locked or not showing.
    pub fn accept_scan(&mut self, payload: &ScanPayload) -> Option<&ScanResult> {
        if !self.is_accepting_scans() {
            return None;
        }
        self.scan_locked = true;
        let result = classify_payload(payload, self.language);
        self.view = View::Home;
        Some(&*self.last_result.insert(result))
    }

    /// Re-arms the scanner while the scanning surface is showing.
    pub fn rescan(&mut self) -> bool {
        if self.view != View::Scanning {
            return false;
        }
        self.scan_locked = false;
        self.last_result = None;
        true
    }

    pub fn cancel_scan(&mut self) -> bool {
        if self.view != View::Scanning {
            return false;
        }
        self.view = View::Home;
        self.scan_locked = false;
        true
    }

    /// Flips the UI language. An existing result keeps the text it was
    /// classified with.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }
}
