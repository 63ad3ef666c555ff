use khmer_menu::catalog::Category;
use khmer_menu::config::MenuConfig;
use khmer_menu::content::{
    CALLS_TO_ACTION, SECTION_BLURB, SECTION_ID, SECTION_SUBTITLE, SECTION_TITLE,
};
use khmer_menu::switcher::{CategorySwitcher, SwitchEvent, TransitionToken};
use khmer_menu::time::{until, Clock, Duration, Millis};
use khmer_menu::viewport::DeviceClass;
use leptos::ev;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::prelude::*;
use tracing::{debug, warn};

use super::reveal_dom::RevealRegistry;
use super::video::BackgroundVideo;
use crate::ui_model::{category_button_class, item_rows, items_class, section_class, ITEM_CLASS};

/// Reactive handles for one menu section. Everything is `Copy`, so the
/// timer callback can re-enter [`MenuState::drive`] without reference juggling.
#[derive(Clone, Copy)]
struct MenuState {
    clock: Clock,
    switcher: StoredValue<CategorySwitcher>,
    active: RwSignal<Category>,
    displayed: RwSignal<Category>,
    changing: RwSignal<bool>,
    /// Time of the last tick; item entrance classes are derived from it.
    now: RwSignal<Millis>,
    timer: StoredValue<Option<TimeoutHandle>, LocalStorage>,
    reveal: StoredValue<RevealRegistry, LocalStorage>,
}

impl MenuState {
    fn new(config: &MenuConfig) -> Self {
        let clock = Clock::new();
        let switcher = CategorySwitcher::new(config.timing);
        Self {
            clock,
            active: RwSignal::new(switcher.active()),
            displayed: RwSignal::new(switcher.displayed()),
            changing: RwSignal::new(switcher.is_changing()),
            now: RwSignal::new(clock.now_ms()),
            switcher: StoredValue::new(switcher),
            timer: StoredValue::new_local(None),
            reveal: StoredValue::new_local(RevealRegistry::new(config.reveal_ratio)),
        }
    }

    fn select(self, category: Category) {
        let now = self.clock.now_ms();
        let Some(token) = self
            .switcher
            .try_update_value(|s| s.select(category, now))
            .flatten()
        else {
            return;
        };
        self.active.set(category);
        self.changing.set(true);
        self.drive(token);
    }

    /// Applies everything due for `token` and re-arms the single pending
    /// timeout. A callback for a superseded transition does nothing.
    fn drive(self, token: TransitionToken) {
        let now = self.clock.now_ms();
        let Some((events, next)) = self
            .switcher
            .try_update_value(|s| {
                let events = s.tick_if_current(token, now)?;
                Some((events, s.next_deadline()))
            })
            .flatten()
        else {
            return;
        };

        for event in events {
            match event {
                SwitchEvent::Swapped(category) => self.displayed.set(category),
                SwitchEvent::Settled => self.changing.set(false),
                SwitchEvent::RescanDue => self.rescan(),
            }
        }
        self.now.set(now);
        self.schedule(token, next, now);
    }

    fn schedule(self, token: TransitionToken, next: Option<Millis>, now: Millis) {
        self.cancel_timer();
        let Some(at) = next else {
            return;
        };
        match set_timeout_with_handle(move || self.drive(token), until(at, now)) {
            Ok(handle) => self.timer.set_value(Some(handle)),
            Err(e) => warn!("failed to schedule menu transition: {:?}", e),
        }
    }

    fn cancel_timer(self) {
        if let Some(Some(handle)) = self.timer.try_update_value(Option::take) {
            handle.clear();
        }
    }

    fn rescan(self) {
        self.reveal.try_update_value(RevealRegistry::rescan);
    }

    fn item_animated(self, index: usize) -> bool {
        let now = self.now.get();
        self.switcher.with_value(|s| s.item_animated(index, now))
    }
}

fn window_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[component]
pub(super) fn MenuSection(config: MenuConfig) -> impl IntoView {
    let state = MenuState::new(&config);

    let mobile_max_width = config.mobile_max_width;
    let device = RwSignal::new(DeviceClass::classify(window_width(), mobile_max_width));
    let resize = window_event_listener(ev::resize, move |_| {
        let next = DeviceClass::classify(window_width(), mobile_max_width);
        if device.get_untracked() != next {
            debug!("viewport class changed to {:?}", next);
            device.set(next);
        }
    });

    // Pick up this section's animatable elements once they are in the DOM.
    let mount_rescan = set_timeout_with_handle(
        move || state.rescan(),
        Duration::from_millis(config.timing.rescan_delay_ms),
    )
    .ok();

    on_cleanup(move || {
        if let Some(handle) = mount_rescan {
            handle.clear();
        }
        resize.remove();
        state.cancel_timer();
        state.reveal.try_update_value(RevealRegistry::detach_all);
    });

    view! {
        <section id=SECTION_ID class=move || section_class(device.get())>
            <BackgroundVideo />

            <div class="menu-container">
                <div class="section-header text-center">
                    <span class="subtitle animate-on-scroll fade-up">{SECTION_SUBTITLE}</span>
                    <h2 class="animate-on-scroll fade-up delay-200">{SECTION_TITLE}</h2>
                    <p class="animate-on-scroll fade-up delay-300">{SECTION_BLURB}</p>
                </div>

                <div class="menu-categories animate-on-scroll fade-up delay-400">
                    {Category::all()
                        .iter()
                        .map(|&category| {
                            view! {
                                <button
                                    class=move || category_button_class(state.active.get() == category)
                                    aria-label=category.aria_label()
                                    on:click=move |_| state.select(category)
                                >
                                    {category.display_name()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=move || items_class(state.changing.get())>
                    <For
                        each=move || {
                            state.displayed.track();
                            state.switcher.with_value(item_rows)
                        }
                        key=|row| row.key.clone()
                        children=move |row| {
                            let index = row.index;
                            let item = row.item;
                            view! {
                                <div
                                    class=ITEM_CLASS
                                    class:animated=move || state.item_animated(index)
                                    style=row.style
                                >
                                    <div class="menu-item-img">
                                        <img src=item.image_src() alt=item.name loading="lazy" />
                                    </div>
                                    <div class="menu-item-content">
                                        <div class="menu-item-header">
                                            <h3 class="menu-item-name">{item.name}</h3>
                                            <span class="menu-item-price">{item.price}</span>
                                        </div>
                                        <p class="menu-item-description">{item.description}</p>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="menu-cta text-center animate-on-scroll fade-up delay-800">
                    {CALLS_TO_ACTION
                        .iter()
                        .map(|cta| view! { <a href=cta.href class=cta.class>{cta.label}</a> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
