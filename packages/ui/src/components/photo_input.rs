use std::sync::atomic::{AtomicU64, Ordering};

use api::FilePart;
use dioxus::prelude::*;

use super::{Button, ButtonSize, ButtonVariant};
use crate::dom;
use crate::icons::FaImage;
use crate::media::{self, CameraStream};
use crate::photo_capture::{CameraTicket, MediaStreamHandle, PhotoCapture, PhotoChange};
use crate::Icon;

static NEXT_PHOTO_ID: AtomicU64 = AtomicU64::new(0);

/// Athlete photo picker: file upload or camera capture, with a square preview.
#[component]
pub fn PhotoInput(
    on_change: EventHandler<Option<FilePart>>,
    /// Existing photo shown while no file is selected.
    #[props(default)]
    preview_url: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default = "Foto".to_string())] label: String,
    #[props(default)] error: Option<String>,
) -> Element {
    let control_id = use_hook(|| NEXT_PHOTO_ID.fetch_add(1, Ordering::Relaxed));
    let file_input_id = format!("photo-file-{control_id}");
    let video_id = format!("photo-video-{control_id}");

    let mut capture = use_signal(PhotoCapture::<CameraStream>::new);
    let mut object_url = use_signal(|| None::<String>);

    use_drop(move || {
        if let Ok(mut capture) = capture.try_write() {
            capture.shutdown();
        }
        if let Ok(url) = object_url.try_peek() {
            if let Some(url) = url.as_deref() {
                media::revoke_object_url(url);
            }
        }
    });

    let mut apply_change = move |change: PhotoChange| {
        if let Some(old) = object_url.write().take() {
            media::revoke_object_url(&old);
        }
        match change {
            PhotoChange::Selected(file) => {
                object_url.set(media::object_url(&file));
                on_change.call(Some(file));
            }
            PhotoChange::Cleared => on_change.call(None),
        }
    };

    let request_camera = {
        let video_id = video_id.clone();
        move |ticket: CameraTicket| {
            let video_id = video_id.clone();
            // Outlives the control so that a late grant can still be stopped.
            dioxus::core::spawn_forever(async move {
                let result = media::request_camera().await;
                let Ok(mut state) = capture.try_write() else {
                    if let Ok(stream) = result {
                        stream.stop();
                    }
                    return;
                };
                match result {
                    Ok(stream) => {
                        state.camera_granted(ticket, stream);
                        if let Some(stream) = state.stream() {
                            media::attach_preview(&video_id, stream);
                        }
                    }
                    Err(failure) => state.camera_failed(ticket, failure),
                }
            });
        }
    };

    let open_camera = move |_: MouseEvent| {
        if disabled {
            return;
        }
        let ticket = capture.write().open_camera(media::camera_supported());
        if let Some(ticket) = ticket {
            request_camera(ticket);
        }
    };

    let on_file_input = {
        let file_input_id = file_input_id.clone();
        move |_: FormEvent| {
            let file_input_id = file_input_id.clone();
            spawn(async move {
                let Some(file) = media::read_file_input(&file_input_id).await else {
                    return;
                };
                let change = capture.write().select_file(file);
                if let Some(change) = change {
                    apply_change(change);
                }
            });
        }
    };

    let on_capture = {
        let video_id = video_id.clone();
        move |_: MouseEvent| {
            let video_id = video_id.clone();
            let Some(track) = capture.read().stream().map(media::track_size) else {
                return;
            };
            spawn(async move {
                let Some(frame) = media::capture_frame(&video_id, track).await else {
                    tracing::warn!("camera frame could not be encoded");
                    return;
                };
                let change = capture.write().capture(frame);
                if let Some(change) = change {
                    apply_change(change);
                }
            });
        }
    };

    let state = capture.read();
    let has_file = state.file().is_some();
    let camera_open = state.camera_open();
    let requesting = state.is_requesting();
    let streaming = state.stream().is_some();
    let failure = state.failure().map(|f| f.message());
    drop(state);

    let upload_target = file_input_id.clone();
    let display_preview = if has_file {
        object_url()
    } else {
        preview_url.clone()
    };
    let hint = if requesting {
        "Solicitando acesso à câmera…"
    } else if failure.is_some() {
        "Se permitiu o acesso, use o botão abaixo para tentar novamente."
    } else {
        "Ajuste o enquadramento e clique em Capturar."
    };

    rsx! {
        div {
            class: "flex flex-col gap-3",
            if !label.is_empty() {
                span { class: "block text-sm font-medium text-neutral-100", "{label}" }
            }
            div {
                class: "flex flex-col sm:flex-row items-center gap-4 sm:gap-6",
                div {
                    class: "flex-shrink-0 w-full max-w-[200px] aspect-square rounded-xl overflow-hidden bg-neutral-800 border border-neutral-700 flex items-center justify-center",
                    if let Some(src) = display_preview {
                        img { src, alt: "Preview", class: "w-full h-full object-cover" }
                    } else {
                        div {
                            class: "flex flex-col items-center gap-2 p-4 text-center text-neutral-500",
                            Icon { icon: FaImage, width: 48, height: 48 }
                            span { class: "text-xs sm:text-sm text-neutral-400", "Nenhuma foto" }
                        }
                    }
                }
                div {
                    class: "flex flex-wrap justify-center sm:justify-start gap-2 w-full sm:w-auto",
                    input {
                        id: "{file_input_id}",
                        r#type: "file",
                        accept: "image/*",
                        class: "hidden",
                        onchange: on_file_input,
                    }
                    if !disabled {
                        Button {
                            variant: ButtonVariant::Neutral,
                            size: ButtonSize::Sm,
                            onclick: move |_| dom::click(&upload_target),
                            "Enviar foto"
                        }
                        Button { size: ButtonSize::Sm, onclick: open_camera.clone(), "Tirar foto" }
                        if has_file {
                            Button {
                                variant: ButtonVariant::Neutral,
                                size: ButtonSize::Sm,
                                onclick: move |_| {
                                    let change = capture.write().remove_file();
                                    if let Some(change) = change {
                                        apply_change(change);
                                    }
                                },
                                "Remover"
                            }
                        }
                    }
                }
            }
            if let Some(message) = error {
                p { class: "text-sm text-error-500", "{message}" }
            }
        }

        if camera_open {
            div {
                class: "fixed inset-0 z-[110] flex items-center justify-center p-4 bg-black/80 max-sm:p-0 max-sm:items-stretch",
                div {
                    class: "relative w-full max-w-lg rounded-xl bg-neutral-900 border border-neutral-800 shadow-xl overflow-hidden flex flex-col max-sm:max-w-none max-sm:rounded-none max-sm:border-0 max-sm:h-full max-sm:min-h-0",
                    div {
                        class: "px-4 py-3 border-b border-neutral-800",
                        h3 { class: "text-lg font-semibold text-neutral-100", "Tirar foto" }
                        p { class: "text-xs text-neutral-400 mt-1", "{hint}" }
                    }
                    div {
                        class: "relative aspect-video bg-neutral-950 flex items-center justify-center flex-1 min-h-0 sm:flex-initial",
                        video {
                            id: "{video_id}",
                            playsinline: true,
                            muted: true,
                            class: "w-full h-full object-cover",
                        }
                        if requesting {
                            div {
                                class: "absolute inset-0 flex items-center justify-center bg-neutral-950/90",
                                p { class: "text-sm text-neutral-300", "Solicitando acesso à câmera…" }
                            }
                        }
                        if let Some(failure) = failure {
                            div {
                                class: "absolute inset-0 flex items-center justify-center p-4 text-center",
                                p { class: "text-sm text-error-500", "{failure}" }
                            }
                        }
                    }
                    div {
                        class: "flex items-center justify-between gap-3 p-4 border-t border-neutral-800 flex-wrap",
                        div {
                            class: "flex items-center gap-2",
                            if !streaming {
                                Button {
                                    size: ButtonSize::Sm,
                                    disabled: requesting,
                                    onclick: open_camera,
                                    if requesting { "Solicitando acesso…" } else { "Solicitar acesso à câmera" }
                                }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Neutral,
                            size: ButtonSize::Sm,
                            onclick: move |_| capture.write().close_camera(),
                            "Cancelar"
                        }
                        Button {
                            size: ButtonSize::Sm,
                            disabled: !streaming,
                            onclick: on_capture,
                            "Capturar"
                        }
                    }
                }
            }
        }
    }
}
