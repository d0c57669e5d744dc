//! Camera, canvas and file access for the photo control.

use api::FilePart;

use crate::photo_capture::{CameraFailure, MediaStreamHandle};

pub const CAPTURE_MIME: &str = "image/jpeg";
pub const CAPTURE_QUALITY: f64 = 0.85;
const FALLBACK_SIZE: (u32, u32) = (640, 480);

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;

/// An open `getUserMedia` stream.
pub struct CameraStream {
    #[cfg(target_arch = "wasm32")]
    inner: web_sys::MediaStream,
}

impl MediaStreamHandle for CameraStream {
    fn stop(self) {
        #[cfg(target_arch = "wasm32")]
        for track in self.inner.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

/// File name of a capture taken at `epoch_ms`.
pub fn capture_name(epoch_ms: u64) -> String {
    format!("photo-{epoch_ms}.jpeg")
}

/// Frame size: the video's native resolution, else the track settings, else 640x480.
pub fn frame_size(video: (u32, u32), track: Option<(u32, u32)>) -> (u32, u32) {
    if video.0 > 0 && video.1 > 0 {
        return video;
    }
    match track {
        Some((w, h)) if w > 0 && h > 0 => (w, h),
        _ => FALLBACK_SIZE,
    }
}

#[cfg(target_arch = "wasm32")]
fn js_set(target: &js_sys::Object, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(target, &JsValue::from_str(key), value);
}

#[cfg(target_arch = "wasm32")]
fn ideal(value: f64) -> js_sys::Object {
    let obj = js_sys::Object::new();
    js_set(&obj, "ideal", &JsValue::from_f64(value));
    obj
}

#[cfg(target_arch = "wasm32")]
fn media_devices() -> Option<web_sys::MediaDevices> {
    let devices = web_sys::window()?.navigator().media_devices().ok()?;
    let has_gum = js_sys::Reflect::has(&devices, &JsValue::from_str("getUserMedia")).unwrap_or(false);
    has_gum.then_some(devices)
}

/// Whether the platform exposes `navigator.mediaDevices.getUserMedia`.
pub fn camera_supported() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        media_devices().is_some()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Ask for the rear camera at 640x480 (ideal).
pub async fn request_camera() -> Result<CameraStream, CameraFailure> {
    #[cfg(target_arch = "wasm32")]
    {
        let devices = media_devices().ok_or(CameraFailure::Unsupported)?;

        let video = js_sys::Object::new();
        js_set(&video, "facingMode", &JsValue::from_str("environment"));
        js_set(&video, "width", &ideal(640.0));
        js_set(&video, "height", &ideal(480.0));
        let constraints = js_sys::Object::new();
        js_set(&constraints, "video", &video);
        let constraints: web_sys::MediaStreamConstraints = constraints.unchecked_into();

        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|_| CameraFailure::Unavailable)?;
        match JsFuture::from(promise).await {
            Ok(stream) => Ok(CameraStream {
                inner: stream.unchecked_into(),
            }),
            Err(err) => {
                let name = js_sys::Reflect::get(&err, &JsValue::from_str("name"))
                    .ok()
                    .and_then(|n| n.as_string())
                    .unwrap_or_default();
                Err(CameraFailure::from_error_name(&name))
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(CameraFailure::Unsupported)
    }
}

#[cfg(target_arch = "wasm32")]
fn video_element(id: &str) -> Option<web_sys::HtmlVideoElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlVideoElement>()
        .ok()
}

/// Bind the stream to the preview `<video>` and start playback.
pub fn attach_preview(video_id: &str, stream: &CameraStream) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(video) = video_element(video_id) else {
            tracing::warn!(video_id, "preview video element not found");
            return;
        };
        video.set_src_object(Some(&stream.inner));
        let _ = video.play();
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (video_id, stream);
}

/// Resolution reported by the stream's video track, if any.
pub fn track_size(stream: &CameraStream) -> Option<(u32, u32)> {
    #[cfg(target_arch = "wasm32")]
    {
        let track = stream
            .inner
            .get_video_tracks()
            .get(0)
            .dyn_into::<web_sys::MediaStreamTrack>()
            .ok()?;
        let settings = track.get_settings();
        let read = |key: &str| {
            js_sys::Reflect::get(&settings, &JsValue::from_str(key))
                .ok()
                .and_then(|v| v.as_f64())
                .map(|v| v as u32)
        };
        Some((read("width")?, read("height")?))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = stream;
        None
    }
}

#[cfg(target_arch = "wasm32")]
async fn blob_bytes(blob: &web_sys::Blob) -> Option<Vec<u8>> {
    let buffer = JsFuture::from(blob.array_buffer()).await.ok()?;
    Some(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Draw the current preview frame onto a canvas and encode it as JPEG. `track` is the
/// stream's [`track_size`], read before the call so no stream borrow is held across it.
pub async fn capture_frame(video_id: &str, track: Option<(u32, u32)>) -> Option<FilePart> {
    #[cfg(target_arch = "wasm32")]
    {
        let video = video_element(video_id)?;
        let (width, height) = frame_size(
            (video.video_width(), video.video_height()),
            track,
        );

        let canvas = web_sys::window()?
            .document()?
            .create_element("canvas")
            .ok()?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .ok()?;
        canvas.set_width(width);
        canvas.set_height(height);
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .ok()?;
        context
            .draw_image_with_html_video_element(&video, 0.0, 0.0)
            .ok()?;

        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Err(e) = canvas.to_blob_with_type_and_encoder_options(
                &resolve,
                CAPTURE_MIME,
                &JsValue::from_f64(CAPTURE_QUALITY),
            ) {
                tracing::error!("Failed to encode capture: {e:?}");
            }
        });
        let blob = JsFuture::from(promise).await.ok()?;
        let blob = blob.dyn_into::<web_sys::Blob>().ok()?;
        let bytes = blob_bytes(&blob).await?;
        let name = capture_name(js_sys::Date::now() as u64);
        Some(FilePart::new(name, CAPTURE_MIME, bytes))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (video_id, track);
        None
    }
}

/// Read the first file of an `<input type="file">` and reset the input so the same file
/// can be chosen again.
pub async fn read_file_input(input_id: &str) -> Option<FilePart> {
    #[cfg(target_arch = "wasm32")]
    {
        let input = web_sys::window()?
            .document()?
            .get_element_by_id(input_id)?
            .dyn_into::<web_sys::HtmlInputElement>()
            .ok()?;
        let file = input.files()?.get(0);
        input.set_value("");
        let file = file?;
        let bytes = blob_bytes(&file).await?;
        Some(FilePart::new(file.name(), file.type_(), bytes))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = input_id;
        None
    }
}

/// Object URL for previewing `file`. Revoke it with [`revoke_object_url`].
pub fn object_url(file: &FilePart) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(file.bytes.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&file.mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
        web_sys::Url::create_object_url_with_blob(&blob).ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = file;
        None
    }
}

pub fn revoke_object_url(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = url;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_fallbacks() {
        assert_eq!(frame_size((1280, 720), Some((640, 480))), (1280, 720));
        assert_eq!(frame_size((0, 0), Some((800, 600))), (800, 600));
        assert_eq!(frame_size((0, 720), None), (640, 480));
        assert_eq!(frame_size((0, 0), Some((0, 0))), (640, 480));
    }

    #[test]
    fn test_capture_name() {
        assert_eq!(capture_name(1700000000123), "photo-1700000000123.jpeg");
    }
}
