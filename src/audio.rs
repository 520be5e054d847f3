use crate::dom;
use crate::widgets::constants::{AUDIO_VOLUME, BOUNCE_CLASS, BOUNCE_MS, SOUND_PREF_KEY};
use crate::widgets::prefs::{MemoryStore, PreferenceStore};
use crate::widgets::sound::{PendingToggle, SoundToggle, ToggleView};
use crate::widgets::{Anchors, WidgetError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `localStorage`-backed preferences.
pub struct LocalStore {
    storage: web::Storage,
}

impl LocalStore {
    pub fn open(window: &web::Window) -> Option<Self> {
        window
            .local_storage()
            .ok()
            .flatten()
            .map(|storage| Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), WidgetError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| WidgetError::Storage(format!("{:?}", e)))
    }
}

type SharedStore = Rc<RefCell<Box<dyn PreferenceStore>>>;

fn open_store(window: &web::Window) -> SharedStore {
    let store: Box<dyn PreferenceStore> = match LocalStore::open(window) {
        Some(s) => Box::new(s),
        None => {
            log::warn!("[sound] localStorage unavailable; preference kept in memory");
            Box::new(MemoryStore::default())
        }
    };
    Rc::new(RefCell::new(store))
}

#[derive(Clone)]
struct SoundButton {
    button: web::HtmlElement,
    label: web::Element,
}

impl SoundButton {
    fn reflect(&self, view: ToggleView) {
        _ = self.button.set_attribute("aria-pressed", view.aria_pressed());
        self.label.set_text_content(Some(view.label));
    }

    /// Restart the bounce animation, even on rapid repeated clicks.
    fn bounce(&self) {
        let classes = self.button.class_list();
        _ = classes.remove_1(BOUNCE_CLASS);
        // layout read so the re-added class restarts the animation
        _ = self.button.offset_width();
        _ = classes.add_1(BOUNCE_CLASS);

        let button = self.button.clone();
        let clear = Closure::once_into_js(move || {
            _ = button.class_list().remove_1(BOUNCE_CLASS);
        });
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                clear.unchecked_ref(),
                BOUNCE_MS,
            );
        }
    }
}

async fn play(audio: &web::HtmlAudioElement) -> Result<(), WidgetError> {
    let promise = audio
        .play()
        .map_err(|e| WidgetError::Rejected(format!("{:?}", e)))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| WidgetError::Rejected(format!("{:?}", e)))
}

fn settle(
    ui: &SoundButton,
    toggle: &RefCell<SoundToggle>,
    store: &SharedStore,
    pending: PendingToggle,
    outcome: Result<(), WidgetError>,
) {
    let mut store = store.borrow_mut();
    let settled = toggle
        .borrow_mut()
        .settle(pending, outcome, store.as_mut());
    ui.reflect(settled.view());
}

/// Restore the button from the saved preference and, when the audio element
/// exists, wire the click toggle. Playback only ever starts from a click.
pub fn setup_sound_toggle(
    window: &web::Window,
    document: &web::Document,
    anchors: &Anchors,
) -> Result<(), WidgetError> {
    let audio = dom::by_id::<web::HtmlAudioElement>(document, anchors.audio_id);
    if let Ok(a) = &audio {
        a.set_volume(AUDIO_VOLUME);
    }

    let button = dom::by_id::<web::HtmlElement>(document, anchors.sound_toggle_id)?;
    let label = dom::query::<web::Element>(&button, anchors.sound_label_selector)?;
    let ui = SoundButton { button, label };

    let store = open_store(window);
    let toggle = SoundToggle::from_store(store.borrow().as_ref(), SOUND_PREF_KEY);
    ui.reflect(toggle.view());
    let toggle = Rc::new(RefCell::new(toggle));

    let audio = audio?;
    let target = ui.button.clone();
    dom::listen(&target, "click", move |_: web::Event| {
        ui.bounce();

        let Some(pending) = toggle.borrow_mut().begin(audio.paused()) else {
            log::debug!("[sound] toggle still pending; click ignored");
            return;
        };
        ui.reflect(ToggleView::of(pending.target));

        if pending.turning_on() {
            let (audio, ui, toggle, store) =
                (audio.clone(), ui.clone(), toggle.clone(), store.clone());
            spawn_local(async move {
                let outcome = play(&audio).await;
                settle(&ui, &toggle, &store, pending, outcome);
            });
        } else {
            let outcome = audio
                .pause()
                .map_err(|e| WidgetError::Rejected(format!("{:?}", e)));
            settle(&ui, &toggle, &store, pending, outcome);
        }
    });
    log::info!("[sound] toggle wired");
    Ok(())
}
