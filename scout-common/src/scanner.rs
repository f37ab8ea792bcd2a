//! Barcode scanner state machine
//!
//! The camera/decoder flow is modelled as an explicit phase enum driven by
//! [`ScannerEvent`]s. The browser side (permission check, decoder script,
//! decoder callbacks) lives in the web crate and only reports events here.
//!
//! Every opened overlay gets a [`ScanSession`]. Async completions carry the
//! session they were started for, so a permission result or decoder start
//! that resolves after the overlay was closed (or reopened) is dropped.

use std::fmt;

/// Shortest decoded code accepted as a barcode.
pub const MIN_BARCODE_LEN: usize = 8;

/// Barcode injected by "Use test data" when the camera is unusable.
pub const FALLBACK_BARCODE: &str = "88883716861";

/// Why scanning could not start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannerError {
    /// `navigator.mediaDevices` is missing
    CameraUnsupported,
    /// The user or browser denied camera access
    PermissionDenied,
    /// No video input device
    NoCamera,
    /// The camera exists but could not be opened (usually in use elsewhere)
    CameraBusy,
    /// The camera rejected the requested constraints
    UnsupportedResolution,
    /// The decoder script failed to load
    ScannerUnavailable,
    /// Any other decoder error, with the name or message it reported
    Camera(String),
}

impl fmt::Display for ScannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScannerError::CameraUnsupported => {
                write!(f, "Your browser does not support camera access.")
            }
            ScannerError::PermissionDenied => write!(
                f,
                "Camera access was denied. Click the lock icon in the address bar to allow it."
            ),
            ScannerError::NoCamera => write!(f, "No camera found."),
            ScannerError::CameraBusy => write!(
                f,
                "Could not start the camera. Close other apps that are using it."
            ),
            ScannerError::UnsupportedResolution => write!(
                f,
                "Camera resolution not supported. Try another device."
            ),
            ScannerError::ScannerUnavailable => write!(
                f,
                "Could not load the scanner software. Check your internet connection."
            ),
            ScannerError::Camera(detail) => write!(f, "Camera error: {}", detail),
        }
    }
}

impl ScannerError {
    /// Classify a rejected `getUserMedia` call by its DOM error name.
    pub fn from_permission_check(name: &str) -> Self {
        match name {
            "NotAllowedError" | "PermissionDeniedError" => ScannerError::PermissionDenied,
            "NotFoundError" => ScannerError::NoCamera,
            _ => ScannerError::CameraBusy,
        }
    }

    /// Classify an error reported by the decoder's init callback.
    pub fn from_decoder_init(name: Option<&str>, message: Option<&str>) -> Self {
        let name = name.filter(|n| !n.is_empty());
        let message = message.filter(|m| !m.is_empty());

        if name == Some("NotAllowedError") || message.is_some_and(|m| m.contains("permission")) {
            return ScannerError::PermissionDenied;
        }
        match name {
            Some("NotFoundError") => ScannerError::NoCamera,
            Some("OverconstrainedError") => ScannerError::UnsupportedResolution,
            _ => ScannerError::Camera(name.or(message).unwrap_or("Unknown").to_string()),
        }
    }
}

/// Whether a decoded code is long enough to be a real barcode.
pub fn accepts_barcode(code: &str) -> bool {
    code.chars().count() >= MIN_BARCODE_LEN
}

/// Camera access generally fails outside HTTPS, except on loopback hosts.
pub fn is_insecure_origin(protocol: &str, hostname: &str) -> bool {
    protocol != "https:" && hostname != "localhost" && hostname != "127.0.0.1"
}

/// Phase of the scanner overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScannerPhase {
    /// Overlay closed
    #[default]
    Idle,
    /// Probing camera permission
    RequestingPermission,
    /// Loading and configuring the decoder
    Initializing,
    /// Decoder running, waiting for a code
    Scanning,
    /// Something failed; user can close or use the fallback barcode
    Error(ScannerError),
}

/// Events that drive [`ScannerPhase::transition`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannerEvent {
    /// User opened the scanner
    Open,
    /// Trial camera stream obtained (and already released)
    PermissionGranted,
    /// Trial camera stream refused
    PermissionFailed(ScannerError),
    /// Decoder configured and started
    DecoderStarted,
    /// Decoder script or init failed
    DecoderFailed(ScannerError),
    /// Decoder reported a code
    CodeDetected(String),
    /// Overlay closed (button, Escape, teardown)
    Close,
    /// User chose the fallback barcode
    UseFallback,
}

impl ScannerPhase {
    /// Whether the overlay is shown.
    pub fn is_open(&self) -> bool {
        !matches!(self, ScannerPhase::Idle)
    }

    pub fn error(&self) -> Option<&ScannerError> {
        match self {
            ScannerPhase::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Progress text shown over the viewport while starting up.
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            ScannerPhase::RequestingPermission => Some("Requesting permission..."),
            ScannerPhase::Initializing => Some("Starting camera..."),
            _ => None,
        }
    }

    /// Apply an event and return the new phase.
    /// Events that make no sense in the current phase leave it unchanged.
    pub fn transition(self, event: ScannerEvent) -> ScannerPhase {
        match (self, event) {
            (ScannerPhase::Idle, ScannerEvent::Open) => ScannerPhase::RequestingPermission,
            (ScannerPhase::RequestingPermission, ScannerEvent::PermissionGranted) => {
                ScannerPhase::Initializing
            }
            (ScannerPhase::RequestingPermission, ScannerEvent::PermissionFailed(e)) => {
                ScannerPhase::Error(e)
            }
            (
                ScannerPhase::RequestingPermission | ScannerPhase::Initializing,
                ScannerEvent::DecoderFailed(e),
            ) => ScannerPhase::Error(e),
            (ScannerPhase::Initializing, ScannerEvent::DecoderStarted) => ScannerPhase::Scanning,
            (ScannerPhase::Scanning, ScannerEvent::CodeDetected(code)) if accepts_barcode(&code) => {
                ScannerPhase::Idle
            }
            (_, ScannerEvent::Close) => ScannerPhase::Idle,
            (phase, ScannerEvent::UseFallback) if phase.is_open() => ScannerPhase::Idle,
            (phase, _) => phase,
        }
    }
}

/// Token for one opened scanner overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSession(u64);

/// What to do with a decoder that finished starting for a session that is
/// no longer open. The decoder library is a single shared instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LateDecoder {
    /// Nothing else uses the camera: stop the decoder.
    Stop,
    /// The open session's decoder is running on the same instance: only
    /// detach the late session's detection listener.
    Detach,
}

/// What the browser side has to do after an event was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanEffect {
    /// The open session's decoder is running and must be stopped to
    /// release the camera. Never set for a stale session.
    pub stop_decoder: bool,
    /// Set when `DecoderStarted` arrives for a closed or superseded session.
    /// The caller must dispose of the decoder it just started and leave the
    /// open session's decoder alone.
    pub late_decoder: Option<LateDecoder>,
    /// Barcode to run through the search flow.
    pub search: Option<String>,
}

/// Scanner phase plus session bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scanner {
    phase: ScannerPhase,
    session: u64,
    decoder_running: bool,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ScannerPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    pub fn decoder_running(&self) -> bool {
        self.decoder_running
    }

    /// Session of the open overlay, if any.
    pub fn session(&self) -> Option<ScanSession> {
        self.is_open().then_some(ScanSession(self.session))
    }

    /// Open the overlay. Returns `None` if it is already open.
    pub fn open(&mut self) -> Option<ScanSession> {
        if self.is_open() {
            return None;
        }
        self.session += 1;
        self.decoder_running = false;
        self.phase = std::mem::take(&mut self.phase).transition(ScannerEvent::Open);
        Some(ScanSession(self.session))
    }

    /// Apply an event reported for `session`.
    pub fn apply(&mut self, session: ScanSession, event: ScannerEvent) -> ScanEffect {
        if self.session() != Some(session) {
            // A decoder that came up for a dead session still holds the camera.
            let late_decoder = (event == ScannerEvent::DecoderStarted).then(|| {
                if self.decoder_running {
                    LateDecoder::Detach
                } else {
                    LateDecoder::Stop
                }
            });
            return ScanEffect {
                late_decoder,
                ..ScanEffect::default()
            };
        }

        let search = match &event {
            ScannerEvent::CodeDetected(code) if self.phase == ScannerPhase::Scanning => {
                accepts_barcode(code).then(|| code.clone())
            }
            ScannerEvent::UseFallback => Some(FALLBACK_BARCODE.to_string()),
            _ => None,
        };
        let starts_decoder =
            event == ScannerEvent::DecoderStarted && self.phase == ScannerPhase::Initializing;

        self.phase = std::mem::take(&mut self.phase).transition(event);

        if starts_decoder {
            self.decoder_running = true;
        }
        if !self.is_open() {
            let stop_decoder = std::mem::take(&mut self.decoder_running);
            return ScanEffect {
                stop_decoder,
                search,
                ..ScanEffect::default()
            };
        }
        ScanEffect::default()
    }

    /// Close the overlay from whatever phase it is in.
    pub fn close(&mut self) -> ScanEffect {
        match self.session() {
            Some(session) => self.apply(session, ScannerEvent::Close),
            None => ScanEffect::default(),
        }
    }

    /// Close the overlay and search for [`FALLBACK_BARCODE`].
    pub fn use_fallback(&mut self) -> ScanEffect {
        match self.session() {
            Some(session) => self.apply(session, ScannerEvent::UseFallback),
            None => ScanEffect::default(),
        }
    }
}
