use khmer_menu::content::BACKGROUND_VIDEO;
use khmer_menu::video::{MediaElement, PlayTrigger, VideoAutoplay};
use khmer_menu::MenuError;
use leptos::html::Video;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlVideoElement, VisibilityState};

struct DomVideo {
    el: HtmlVideoElement,
    controller: StoredValue<VideoAutoplay>,
}

impl MediaElement for DomVideo {
    fn is_paused(&self) -> bool {
        self.el.paused()
    }

    fn play(&self) -> Result<(), MenuError> {
        let promise = self
            .el
            .play()
            .map_err(|e| MenuError::Playback(js_error_text(&e)))?;

        // Autoplay refusals usually arrive as a rejected promise.
        let controller = self.controller;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                let reason = js_error_text(&e);
                controller.try_update_value(|c| c.record_rejection(reason));
            }
        });
        Ok(())
    }
}

fn js_error_text(v: &JsValue) -> String {
    v.as_string()
        .or_else(|| v.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{v:?}"))
}

struct VisibilityListener {
    document: Document,
    callback: Closure<dyn FnMut()>,
}

impl VisibilityListener {
    fn attach(on_change: impl Fn(bool) + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let doc = document.clone();
        let callback = Closure::wrap(Box::new(move || {
            on_change(doc.visibility_state() == VisibilityState::Visible);
        }) as Box<dyn FnMut()>);

        document
            .add_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { document, callback })
    }

    fn detach(self) {
        let _ = self.document.remove_event_listener_with_callback(
            "visibilitychange",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Muted, looping background video that keeps retrying autoplay.
#[component]
pub(super) fn BackgroundVideo() -> impl IntoView {
    let video_ref = NodeRef::<Video>::new();
    let controller = StoredValue::new(VideoAutoplay::new());
    let visibility = StoredValue::new_local(None::<VisibilityListener>);

    let retry = move |trigger: PlayTrigger| {
        let Some(el) = video_ref.get_untracked() else {
            return;
        };
        let media = DomVideo { el, controller };
        controller.try_update_value(|c| c.handle(&media, trigger));
    };

    Effect::new(move |_| {
        let Some(el) = video_ref.get() else {
            return;
        };
        el.set_muted(true);
        el.set_loop(true);

        let media = DomVideo { el, controller };
        let first = controller
            .try_update_value(|c| c.initialize(&media))
            .unwrap_or(false);
        if first {
            let listener = VisibilityListener::attach(move |visible| {
                retry(PlayTrigger::VisibilityChange { visible })
            });
            visibility.set_value(listener);
        }
    });

    on_cleanup(move || {
        if let Some(Some(listener)) = visibility.try_update_value(Option::take) {
            listener.detach();
        }
    });

    view! {
        <div class="menu-background-video">
            <video
                node_ref=video_ref
                class="video-element"
                poster=BACKGROUND_VIDEO.poster
                autoplay=true
                muted=true
                playsinline=true
                on:loadedmetadata=move |_| retry(PlayTrigger::LoadedMetadata)
                on:canplay=move |_| retry(PlayTrigger::CanPlay)
            >
                <source src=BACKGROUND_VIDEO.src type=BACKGROUND_VIDEO.mime />
                {BACKGROUND_VIDEO.fallback_text}
            </video>
            <div class="video-overlay"></div>
        </div>
    }
}
