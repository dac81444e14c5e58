use serde::{Deserialize, Serialize};

use crate::capabilities::CameraResult;
use crate::classifier::ScanPayload;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub enum Event {
    #[default]
    Noop,

    AppStarted,

    CameraPermissionChecked(CameraResult),
    /// User tapped "Grant Permission".
    CameraPermissionRequested,
    CameraPermissionResult(CameraResult),

    StartScan,
    BarcodeScanned {
        payload: ScanPayload,
    },
    Rescan,
    CancelScan,

    ToggleLanguage,
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::AppStarted => "app_started",
            Self::CameraPermissionChecked(_) => "camera_permission_checked",
            Self::CameraPermissionRequested => "camera_permission_requested",
            Self::CameraPermissionResult(_) => "camera_permission_result",
            Self::StartScan => "start_scan",
            Self::BarcodeScanned { .. } => "barcode_scanned",
            Self::Rescan => "rescan",
            Self::CancelScan => "cancel_scan",
            Self::ToggleLanguage => "toggle_language",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::CameraPermissionRequested
                | Self::StartScan
                | Self::Rescan
                | Self::CancelScan
                | Self::ToggleLanguage
        )
    }

    /// Shorthand for a textual scan, the common case from the shell.
    #[must_use]
    pub fn scanned(data: impl Into<String>) -> Self {
        Self::BarcodeScanned {
            payload: ScanPayload::text(data),
        }
    }
}
