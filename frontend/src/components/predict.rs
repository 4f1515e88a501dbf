//! Image upload and analysis view.
//!
//! Flow: drop or pick a file (validated locally), preview it, submit it
//! for analysis, render the result. Phase tracking lives in [`flow`];
//! the staged file and its object URL live here.

pub mod flow;

use crate::auth::{self, use_auth};
use crate::components::icons::{AlertTriangle, CheckCircle, Clock, CloudUpload, Photo};
use crate::components::toast::{Notification, Toast};
use cancerguard_shared::validate::{validate_file_count, validate_upload};
use cancerguard_shared::{Prediction, PredictionLabel, format};
use flow::{AnalysisPhase, FlowEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// A validated, not-yet-submitted file plus its preview handle.
#[derive(Clone)]
struct StagedFile {
    file: web_sys::File,
    name: String,
    size: u64,
    mime: String,
    preview_url: String,
}

impl StagedFile {
    fn stage(file: web_sys::File) -> Self {
        let preview_url = web_sys::Url::create_object_url_with_blob(&file).unwrap_or_default();
        Self {
            name: file.name(),
            size: file.size() as u64,
            mime: file.type_(),
            preview_url,
            file,
        }
    }

    /// Release the preview object URL. Must run when the file is
    /// replaced or the flow resets, or the blob leaks for the page life.
    fn release(&self) {
        if !self.preview_url.is_empty() {
            let _ = web_sys::Url::revoke_object_url(&self.preview_url);
        }
    }
}

#[component]
pub fn PredictPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let auth_state = auth_ctx.state;

    let (phase, set_phase) = signal(AnalysisPhase::Empty);
    // `web_sys::File` is not Send; keep the staged file thread-local.
    let (staged, set_staged) = signal_local(Option::<StagedFile>::None);
    let (result, set_result) = signal(Option::<Prediction>::None);
    let (notification, set_notification) = signal(Notification::None);

    // Validate and stage a picked/dropped file list.
    let stage_files = move |files: Option<web_sys::FileList>| {
        if phase.get_untracked().is_busy() {
            return;
        }
        let Some(files) = files else { return };

        if let Err(e) = validate_file_count(files.length() as usize) {
            set_notification.set(Some((e.to_string(), true)));
            return;
        }
        let Some(file) = files.get(0) else { return };

        if let Err(e) = validate_upload(&file.name(), file.size() as u64) {
            // Rejected locally; no request is ever sent.
            set_notification.set(Some((e.to_string(), true)));
            return;
        }

        if let Some(previous) = staged.get_untracked() {
            previous.release();
        }
        set_staged.set(Some(StagedFile::stage(file)));
        set_result.set(None);
        set_phase.update(|p| *p = p.advance(FlowEvent::FileStaged));
    };

    let on_input_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            stage_files(input.files());
            // Allow re-selecting the same file later.
            input.set_value("");
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        stage_files(ev.data_transfer().and_then(|dt| dt.files()));
    };

    let handle_analyze = move |_| {
        if !phase.get_untracked().can_analyze() {
            return;
        }
        let Some(current) = staged.get_untracked() else {
            return;
        };

        set_phase.update(|p| *p = p.advance(FlowEvent::AnalysisStarted));
        spawn_local(async move {
            let api = auth::api_client(&auth_state.get_untracked());
            match api.upload_and_predict(&current.file).await {
                Ok(prediction) => {
                    set_result.set(Some(prediction));
                    set_phase.update(|p| *p = p.advance(FlowEvent::AnalysisSucceeded));
                    set_notification.set(Some(("Analysis completed".to_string(), false)));
                }
                Err(e) => {
                    let msg = auth::handle_api_error(&auth_ctx, &e);
                    set_notification.set(Some((msg, true)));
                    set_phase.update(|p| *p = p.advance(FlowEvent::AnalysisFailed));
                }
            }
        });
    };

    let handle_reset = move |_| {
        if phase.get_untracked().is_busy() {
            return;
        }
        if let Some(current) = staged.get_untracked() {
            current.release();
        }
        set_staged.set(None);
        set_result.set(None);
        set_phase.update(|p| *p = p.advance(FlowEvent::Reset));
    };

    let is_busy = move || phase.get().is_busy();

    view! {
        <div class="max-w-4xl mx-auto space-y-8">
            <Toast notification=notification set_notification=set_notification />

            <div>
                <h1 class="text-3xl font-bold">"AI Breast Cancer Detection"</h1>
                <p class="text-base-content/70">
                    "Upload a medical image for AI-powered analysis with instant confidence scores."
                </p>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"Upload Medical Image"</h2>

                    <Show
                        when=move || staged.with(|s| s.is_some())
                        fallback=move || view! {
                            <label
                                for="image-input"
                                class="border-2 border-dashed border-base-300 hover:border-primary rounded-box p-12 text-center cursor-pointer block"
                                on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
                                on:drop=on_drop
                            >
                                <div class="flex justify-center mb-4 text-base-content/40">
                                    <CloudUpload class="h-12 w-12" />
                                </div>
                                <p class="text-lg font-medium">"Drag & drop an image here"</p>
                                <p class="text-base-content/70 mb-2">"or click to select a file"</p>
                                <p class="text-sm text-base-content/50">
                                    "Supports: JPEG, PNG, BMP, TIFF (max 10MB)"
                                </p>
                            </label>
                        }
                    >
                        <div class="flex flex-col md:flex-row gap-6">
                            <div class="flex-1">
                                <h3 class="font-medium mb-2">"Image Preview"</h3>
                                <div class="border border-base-300 rounded-box overflow-hidden bg-base-200">
                                    <img
                                        src=move || staged.with(|s| {
                                            s.as_ref().map(|f| f.preview_url.clone()).unwrap_or_default()
                                        })
                                        alt="Preview"
                                        class="w-full h-64 object-contain"
                                    />
                                </div>
                            </div>
                            <div class="flex-1 space-y-3">
                                <h3 class="font-medium">"File Information"</h3>
                                <div class="flex items-center gap-2 text-sm text-base-content/70">
                                    <Photo class="h-5 w-5 opacity-50" />
                                    {move || staged.with(|s| {
                                        s.as_ref().map(|f| f.name.clone()).unwrap_or_default()
                                    })}
                                </div>
                                <div class="text-sm text-base-content/70">
                                    "Size: "
                                    {move || staged.with(|s| {
                                        s.as_ref().map(|f| format::megabytes(f.size)).unwrap_or_default()
                                    })}
                                </div>
                                <div class="text-sm text-base-content/70">
                                    "Type: "
                                    {move || staged.with(|s| {
                                        s.as_ref().map(|f| f.mime.clone()).unwrap_or_default()
                                    })}
                                </div>
                                <div class="flex gap-3 pt-4">
                                    <button
                                        on:click=handle_analyze
                                        disabled=move || !phase.get().can_analyze()
                                        class="btn btn-primary"
                                    >
                                        {move || if is_busy() {
                                            view! { <span class="loading loading-spinner"></span> "Analyzing..." }.into_any()
                                        } else {
                                            "Analyze Image".into_any()
                                        }}
                                    </button>
                                    <button
                                        on:click=handle_reset
                                        disabled=is_busy
                                        class="btn btn-ghost"
                                    >
                                        "Reset"
                                    </button>
                                </div>
                            </div>
                        </div>
                    </Show>

                    <input
                        id="image-input"
                        type="file"
                        accept=".jpeg,.jpg,.png,.bmp,.tiff"
                        class="hidden"
                        on:change=on_input_change
                    />
                </div>
            </div>

            <Show when=move || result.get().is_some()>
                {move || {
                    let r = result.get().unwrap();
                    let is_benign = r.prediction == PredictionLabel::Benign;
                    view! {
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body space-y-4">
                                <h2 class="card-title">"Analysis Results"</h2>

                                <div class=if is_benign {
                                    "p-6 rounded-box border-2 border-success bg-success/10"
                                } else {
                                    "p-6 rounded-box border-2 border-error bg-error/10"
                                }>
                                    <div class="flex items-center gap-3">
                                        {if is_benign {
                                            view! { <CheckCircle class="h-8 w-8 text-success" /> }.into_any()
                                        } else {
                                            view! { <AlertTriangle class="h-8 w-8 text-error" /> }.into_any()
                                        }}
                                        <div>
                                            <h3 class="text-2xl font-bold">{r.prediction.as_str()}</h3>
                                            <p class="text-base-content/70">
                                                "Confidence: " {format::percent(r.confidence)}
                                            </p>
                                        </div>
                                    </div>
                                    <Show when=move || !is_benign>
                                        <div class="bg-base-100 p-4 rounded-box border border-error/40 mt-4">
                                            <p class="text-sm">
                                                <strong>"Important: "</strong>
                                                "This is an AI-generated result and should not replace \
                                                 professional medical diagnosis. Please consult a \
                                                 healthcare professional for proper evaluation."
                                            </p>
                                        </div>
                                    </Show>
                                </div>

                                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                    <div class="text-center p-4 bg-base-200 rounded-box">
                                        <div class="text-2xl font-bold text-success">
                                            {format::percent(r.probabilities.benign)}
                                        </div>
                                        <div class="text-sm text-base-content/70">"Benign Probability"</div>
                                    </div>
                                    <div class="text-center p-4 bg-base-200 rounded-box">
                                        <div class="text-2xl font-bold text-error">
                                            {format::percent(r.probabilities.malignant)}
                                        </div>
                                        <div class="text-sm text-base-content/70">"Malignant Probability"</div>
                                    </div>
                                    <div class="text-center p-4 bg-base-200 rounded-box">
                                        <div class="flex items-center justify-center gap-1 text-2xl font-bold">
                                            <Clock class="h-5 w-5 opacity-50" />
                                            {format::seconds(r.processing_time)}
                                        </div>
                                        <div class="text-sm text-base-content/70">"Processing Time"</div>
                                    </div>
                                </div>

                                <div class="text-sm text-base-content/50">
                                    "Analyzed " {r.image_filename.clone()} " on "
                                    {r.created_at.format("%Y-%m-%d %H:%M UTC").to_string()}
                                </div>
                            </div>
                        </div>
                    }
                }}
            </Show>

            <div class="alert alert-warning">
                <AlertTriangle class="h-6 w-6" />
                <div>
                    <h3 class="font-medium">"Medical Disclaimer"</h3>
                    <p class="text-sm">
                        "This tool assists healthcare professionals and is not a substitute for \
                         professional medical advice, diagnosis, or treatment."
                    </p>
                </div>
            </div>
        </div>
    }
}
