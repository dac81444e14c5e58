mod camera;
mod speech;

pub use self::camera::{
    Camera, CameraError, CameraFacing, CameraOperation, CameraOutput, CameraResult,
    PermissionStatus, ScannerSettings, Symbology,
};
pub use self::speech::{Speech, SpeechOperation, Utterance};

// Crux's built-in Render capability covers view updates.
pub use crux_core::render::Render;

use crate::app::App;
use crate::event::Event;

#[derive(Debug, thiserror::Error)]
pub enum CapabilityError {
    #[error("Camera error: {0}")]
    Camera(#[from] CameraError),
}

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
    pub camera: Camera<Event>,
    pub speech: Speech<Event>,
}
