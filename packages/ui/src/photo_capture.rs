//! State machine of the athlete photo control.
//!
//! A photo comes either from the file picker or from a camera capture; both end as a
//! [`FilePart`] handed to the parent form. The camera states remember the file chosen
//! before the camera was opened so that cancelling restores it.
//!
//! Streams are owned by the state and released by value through
//! [`MediaStreamHandle::stop`], so each one is stopped exactly once: on close, on
//! capture, when a file replaces it, or when the control goes away. Camera requests are
//! ticketed; a grant that arrives after its request was abandoned is stopped on arrival.

use api::FilePart;

/// A live camera stream. Stopping consumes it.
pub trait MediaStreamHandle {
    fn stop(self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraFailure {
    PermissionDenied,
    NotFound,
    Unavailable,
    Unsupported,
}

impl CameraFailure {
    /// Classify a `getUserMedia` rejection by its DOM exception name.
    pub fn from_error_name(name: &str) -> Self {
        match name {
            "NotAllowedError" => CameraFailure::PermissionDenied,
            "NotFoundError" => CameraFailure::NotFound,
            _ => CameraFailure::Unavailable,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CameraFailure::PermissionDenied => {
                "Permissão negada. Permita o acesso à câmera nas configurações do navegador."
            }
            CameraFailure::NotFound => "Nenhuma câmera encontrada.",
            CameraFailure::Unavailable => "Não foi possível acessar a câmera.",
            CameraFailure::Unsupported => "Este navegador não suporta acesso à câmera.",
        }
    }
}

#[derive(Debug)]
pub enum CaptureState<S> {
    Idle,
    FileSelected(FilePart),
    CameraRequesting {
        previous: Option<FilePart>,
    },
    CameraStreaming {
        stream: S,
        previous: Option<FilePart>,
    },
    CameraError {
        failure: CameraFailure,
        previous: Option<FilePart>,
    },
}

/// Identifies one camera request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraTicket(u64);

/// What the parent form must be told.
#[derive(Debug, Clone, PartialEq)]
pub enum PhotoChange {
    Selected(FilePart),
    Cleared,
}

#[derive(Debug)]
pub struct PhotoCapture<S: MediaStreamHandle> {
    state: CaptureState<S>,
    next_ticket: u64,
    pending: Option<u64>,
}

impl<S: MediaStreamHandle> Default for PhotoCapture<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MediaStreamHandle> PhotoCapture<S> {
    pub fn new() -> Self {
        Self {
            state: CaptureState::Idle,
            next_ticket: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> &CaptureState<S> {
        &self.state
    }

    /// The file currently chosen, including the one kept while the camera is open.
    pub fn file(&self) -> Option<&FilePart> {
        match &self.state {
            CaptureState::Idle => None,
            CaptureState::FileSelected(file) => Some(file),
            CaptureState::CameraRequesting { previous }
            | CaptureState::CameraStreaming { previous, .. }
            | CaptureState::CameraError { previous, .. } => previous.as_ref(),
        }
    }

    pub fn camera_open(&self) -> bool {
        matches!(
            self.state,
            CaptureState::CameraRequesting { .. }
                | CaptureState::CameraStreaming { .. }
                | CaptureState::CameraError { .. }
        )
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self.state, CaptureState::CameraRequesting { .. })
    }

    pub fn stream(&self) -> Option<&S> {
        match &self.state {
            CaptureState::CameraStreaming { stream, .. } => Some(stream),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<CameraFailure> {
        match self.state {
            CaptureState::CameraError { failure, .. } => Some(failure),
            _ => None,
        }
    }

    /// Leave the current state, releasing its stream. Returns the remembered file.
    fn release(&mut self) -> Option<FilePart> {
        self.pending = None;
        match std::mem::replace(&mut self.state, CaptureState::Idle) {
            CaptureState::Idle => None,
            CaptureState::FileSelected(file) => Some(file),
            CaptureState::CameraRequesting { previous }
            | CaptureState::CameraError { previous, .. } => previous,
            CaptureState::CameraStreaming { stream, previous } => {
                stream.stop();
                previous
            }
        }
    }

    /// A file from the picker. Non-image types are ignored.
    pub fn select_file(&mut self, file: FilePart) -> Option<PhotoChange> {
        if !file.is_image() {
            tracing::debug!(mime = %file.mime, "ignoring non-image file");
            return None;
        }
        self.release();
        self.state = CaptureState::FileSelected(file.clone());
        Some(PhotoChange::Selected(file))
    }

    /// Open the camera dialog, or retry from the error state. Returns the ticket to
    /// resolve the request with, or `None` when the platform has no camera API.
    pub fn open_camera(&mut self, supported: bool) -> Option<CameraTicket> {
        let previous = self.release();
        if !supported {
            self.state = CaptureState::CameraError {
                failure: CameraFailure::Unsupported,
                previous,
            };
            return None;
        }
        self.next_ticket += 1;
        self.pending = Some(self.next_ticket);
        self.state = CaptureState::CameraRequesting { previous };
        Some(CameraTicket(self.next_ticket))
    }

    fn take_pending(&mut self, ticket: CameraTicket) -> bool {
        if self.pending == Some(ticket.0) && self.is_requesting() {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn camera_granted(&mut self, ticket: CameraTicket, stream: S) {
        if !self.take_pending(ticket) {
            tracing::debug!("camera granted after the request was abandoned");
            stream.stop();
            return;
        }
        let previous = self.release();
        self.state = CaptureState::CameraStreaming { stream, previous };
    }

    pub fn camera_failed(&mut self, ticket: CameraTicket, failure: CameraFailure) {
        if !self.take_pending(ticket) {
            return;
        }
        tracing::warn!(?failure, "camera request failed");
        let previous = self.release();
        self.state = CaptureState::CameraError { failure, previous };
    }

    /// Cancel the camera dialog and fall back to the file chosen before it.
    pub fn close_camera(&mut self) {
        if !self.camera_open() {
            return;
        }
        self.state = match self.release() {
            Some(file) => CaptureState::FileSelected(file),
            None => CaptureState::Idle,
        };
    }

    /// A frame was encoded while streaming. Closes the camera and selects the frame.
    pub fn capture(&mut self, frame: FilePart) -> Option<PhotoChange> {
        if self.stream().is_none() {
            return None;
        }
        self.release();
        self.state = CaptureState::FileSelected(frame.clone());
        Some(PhotoChange::Selected(frame))
    }

    pub fn remove_file(&mut self) -> Option<PhotoChange> {
        if !matches!(self.state, CaptureState::FileSelected(_)) {
            return None;
        }
        self.release();
        Some(PhotoChange::Cleared)
    }

    /// Release everything; used when the control unmounts.
    pub fn shutdown(&mut self) {
        self.release();
    }
}

impl<S: MediaStreamHandle> Drop for PhotoCapture<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug)]
    struct FakeStream(Rc<Cell<u32>>);

    impl MediaStreamHandle for FakeStream {
        fn stop(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn jpeg(name: &str) -> FilePart {
        FilePart::new(name, "image/jpeg", vec![0xFF, 0xD8])
    }

    fn counter() -> Rc<Cell<u32>> {
        Rc::new(Cell::new(0))
    }

    #[test]
    fn test_non_image_files_are_ignored() {
        let mut capture = PhotoCapture::<FakeStream>::new();
        let pdf = FilePart::new("laudo.pdf", "application/pdf", vec![1]);
        assert_eq!(capture.select_file(pdf), None);
        assert!(matches!(capture.state(), CaptureState::Idle));

        let change = capture.select_file(jpeg("a.jpeg"));
        assert_eq!(change, Some(PhotoChange::Selected(jpeg("a.jpeg"))));
        assert_eq!(capture.file().map(|f| f.name.as_str()), Some("a.jpeg"));
    }

    #[test]
    fn test_capture_stops_stream_once() {
        let stops = counter();
        let mut capture = PhotoCapture::<FakeStream>::new();
        let ticket = capture.open_camera(true).unwrap();
        assert!(capture.is_requesting());

        capture.camera_granted(ticket, FakeStream(stops.clone()));
        assert!(capture.stream().is_some());

        let change = capture.capture(jpeg("photo-1.jpeg"));
        assert_eq!(change, Some(PhotoChange::Selected(jpeg("photo-1.jpeg"))));
        assert_eq!(stops.get(), 1);
        assert!(!capture.camera_open());

        capture.shutdown();
        drop(capture);
        assert_eq!(stops.get(), 1);
    }

    #[test]
    fn test_close_restores_previous_file() {
        let stops = counter();
        let mut capture = PhotoCapture::<FakeStream>::new();
        capture.select_file(jpeg("antes.jpeg"));
        let ticket = capture.open_camera(true).unwrap();
        capture.camera_granted(ticket, FakeStream(stops.clone()));
        assert_eq!(capture.file().map(|f| f.name.as_str()), Some("antes.jpeg"));

        capture.close_camera();
        assert_eq!(stops.get(), 1);
        assert!(matches!(capture.state(), CaptureState::FileSelected(f) if f.name == "antes.jpeg"));
    }

    #[test]
    fn test_late_grant_is_stopped_immediately() {
        let stops = counter();
        let mut capture = PhotoCapture::<FakeStream>::new();
        let ticket = capture.open_camera(true).unwrap();
        capture.close_camera();

        capture.camera_granted(ticket, FakeStream(stops.clone()));
        assert_eq!(stops.get(), 1);
        assert!(matches!(capture.state(), CaptureState::Idle));
    }

    #[test]
    fn test_stale_ticket_after_retry() {
        let stops = counter();
        let mut capture = PhotoCapture::<FakeStream>::new();
        let first = capture.open_camera(true).unwrap();
        let second = capture.open_camera(true).unwrap();

        capture.camera_granted(first, FakeStream(stops.clone()));
        assert_eq!(stops.get(), 1);
        assert!(capture.is_requesting());

        capture.camera_granted(second, FakeStream(stops.clone()));
        assert!(capture.stream().is_some());
        drop(capture);
        assert_eq!(stops.get(), 2);
    }

    #[test]
    fn test_failures_and_retry() {
        let mut capture = PhotoCapture::<FakeStream>::new();
        assert_eq!(capture.open_camera(false), None);
        assert_eq!(capture.failure(), Some(CameraFailure::Unsupported));

        let ticket = capture.open_camera(true).unwrap();
        capture.camera_failed(ticket, CameraFailure::from_error_name("NotAllowedError"));
        assert_eq!(capture.failure(), Some(CameraFailure::PermissionDenied));
        assert!(capture.camera_open());

        // Retry from the error state issues a fresh request.
        let retry = capture.open_camera(true).unwrap();
        assert_ne!(retry, ticket);
        capture.camera_failed(ticket, CameraFailure::NotFound);
        assert!(capture.is_requesting());

        assert_eq!(
            CameraFailure::from_error_name("NotReadableError").message(),
            "Não foi possível acessar a câmera."
        );
    }

    #[test]
    fn test_selecting_file_releases_stream() {
        let stops = counter();
        let mut capture = PhotoCapture::<FakeStream>::new();
        let ticket = capture.open_camera(true).unwrap();
        capture.camera_granted(ticket, FakeStream(stops.clone()));

        capture.select_file(jpeg("galeria.jpeg"));
        assert_eq!(stops.get(), 1);
        assert_eq!(capture.remove_file(), Some(PhotoChange::Cleared));
        assert_eq!(capture.remove_file(), None);
        assert!(capture.file().is_none());
    }
}
