use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Camera access for the barcode scanner.
///
/// The scanner surface itself is owned by the shell and declared through the
/// view model; this capability only negotiates permission.
pub struct Camera<E> {
    context: CapabilityContext<CameraOperation, E>,
}

impl<Ev> Capability<Ev> for Camera<Ev> {
    type Operation = CameraOperation;
    type MappedSelf<MappedEv> = Camera<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Camera::new(self.context.map_event(f))
    }
}

impl<E> Camera<E>
where
    E: Send + 'static,
{
    pub fn new(context: CapabilityContext<CameraOperation, E>) -> Self {
        Self { context }
    }

    pub fn check_permission<F>(&self, callback: F)
    where
        F: FnOnce(CameraResult) -> E + Send + 'static,
    {
        self.request(CameraOperation::CheckPermission, callback);
    }

    pub fn request_permission<F>(&self, callback: F)
    where
        F: FnOnce(CameraResult) -> E + Send + 'static,
    {
        self.request(CameraOperation::RequestPermission, callback);
    }

    fn request<F>(&self, operation: CameraOperation, callback: F)
    where
        F: FnOnce(CameraResult) -> E + Send + 'static,
    {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            let result = ctx.request_from_shell(operation).await;
            ctx.update_app(callback(result));
        });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CameraOperation {
    CheckPermission,
    RequestPermission,
}

impl Operation for CameraOperation {
    type Output = CameraResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CameraFacing {
    Front,
    #[default]
    Back,
}

/// Symbologies the shell's scanner is asked to recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbology {
    Ean13,
    Ean8,
    UpcA,
    UpcE,
    Qr,
}

impl Symbology {
    pub const RETAIL: [Symbology; 5] = [
        Self::Ean13,
        Self::Ean8,
        Self::UpcA,
        Self::UpcE,
        Self::Qr,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerSettings {
    pub facing: CameraFacing,
    pub symbologies: Vec<Symbology>,
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            facing: CameraFacing::Back,
            symbologies: Symbology::RETAIL.to_vec(),
        }
    }
}

impl ScannerSettings {
    #[must_use]
    pub fn with_facing(mut self, facing: CameraFacing) -> Self {
        self.facing = facing;
        self
    }

    #[must_use]
    pub fn with_symbologies(mut self, symbologies: impl IntoIterator<Item = Symbology>) -> Self {
        self.symbologies = symbologies.into_iter().collect();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionStatus {
    Granted,
    Denied,
    DeniedPermanently,
    Restricted,
    NotDetermined,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }

    pub fn can_request(&self) -> bool {
        matches!(self, PermissionStatus::NotDetermined | PermissionStatus::Denied)
    }

    pub fn should_show_settings_prompt(&self) -> bool {
        matches!(self, PermissionStatus::DeniedPermanently | PermissionStatus::Restricted)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CameraOutput {
    PermissionStatus(PermissionStatus),
}

impl CameraOutput {
    pub fn permission_status(&self) -> PermissionStatus {
        match self {
            CameraOutput::PermissionStatus(status) => *status,
        }
    }
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum CameraError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("camera permission denied permanently - user must enable in settings")]
    PermissionDeniedPermanently,

    #[error("camera unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("camera not supported on this platform")]
    NotSupported,

    #[error("internal error: {message}")]
    Internal { message: String },
}

pub type CameraResult = Result<CameraOutput, CameraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_settings_defaults() {
        let settings = ScannerSettings::default();
        assert_eq!(settings.facing, CameraFacing::Back);
        assert_eq!(settings.symbologies, Symbology::RETAIL.to_vec());
    }

    #[test]
    fn test_scanner_settings_builder() {
        let settings = ScannerSettings::default()
            .with_facing(CameraFacing::Front)
            .with_symbologies([Symbology::Qr]);
        assert_eq!(settings.facing, CameraFacing::Front);
        assert_eq!(settings.symbologies, vec![Symbology::Qr]);
    }

    #[test]
    fn test_permission_status() {
        assert!(PermissionStatus::Granted.is_granted());
        assert!(!PermissionStatus::Denied.is_granted());

        assert!(PermissionStatus::NotDetermined.can_request());
        assert!(!PermissionStatus::DeniedPermanently.can_request());

        assert!(PermissionStatus::DeniedPermanently.should_show_settings_prompt());
        assert!(!PermissionStatus::Granted.should_show_settings_prompt());
    }

    #[test]
    fn test_symbology_wire_names() {
        let json = serde_json::to_string(&Symbology::RETAIL).expect("serializes");
        assert_eq!(json, r#"["ean13","ean8","upc_a","upc_e","qr"]"#);
    }
}
