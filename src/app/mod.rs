//! Browser controller: owns the session, renders screens into the root
//! element and turns clicks into [`Action`]s.
//!
//! A single delegated click listener on the root reads `data-action` from the
//! nearest tagged ancestor, so re-rendering markup never has to rebind
//! handlers. Drawing surfaces live in a separate overlay host that is only
//! touched when writing practice opens, closes or changes card.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, window};

mod action;
mod practice;
pub mod screens;

pub use action::Action;
use practice::Practice;

use crate::config::AppConfig;
use crate::error::{FlashError, Result};
use crate::session::{Mode, PendingAdvance, Session};
use crate::speech::SpeechSynthesisPronouncer;

const STYLE_ID: &str = "kc-style";

struct App {
    screen: HtmlElement,
    overlay_host: HtmlElement,
    session: Session<SpeechSynthesisPronouncer>,
    config: AppConfig,
    practice: Option<Practice>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Mount the app into the page. Calling it again re-renders the existing app.
pub fn start(config: AppConfig) -> Result<()> {
    if APP.with(|cell| cell.borrow().is_some()) {
        log::warn!("app already started; ignoring new config");
        return with_app(|app| app.render());
    }

    let win = window().ok_or(FlashError::NoWindow)?;
    let doc = win.document().ok_or(FlashError::NoDocument)?;
    ensure_style(&doc)?;

    let root: HtmlElement = match doc.get_element_by_id(&config.root_id) {
        Some(el) => el.dyn_into().map_err(JsValue::from)?,
        None => {
            let body = doc.body().ok_or_else(|| FlashError::MissingElement("body".into()))?;
            let el: HtmlElement = doc.create_element("div")?.dyn_into().map_err(JsValue::from)?;
            el.set_id(&config.root_id);
            body.append_child(&el)?;
            el
        }
    };
    root.set_inner_html("");
    let screen = append_div(&doc, &root, "kc-screen-host")?;
    let overlay_host = append_div(&doc, &root, "kc-overlay-host")?;

    let click = Closure::wrap(Box::new(move |evt: web_sys::Event| {
        let Some(action) = evt
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("[data-action]").ok().flatten())
            .filter(|el| !el.has_attribute("disabled"))
            .and_then(|el| el.get_attribute("data-action"))
            .and_then(|attr| attr.parse::<Action>().ok())
        else {
            return;
        };
        if let Err(e) = with_app(|app| app.dispatch(action)) {
            log::warn!("{:?} failed: {}", action, e);
        }
    }) as Box<dyn FnMut(_)>);
    root.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
    click.forget();

    let session = Session::new(
        SpeechSynthesisPronouncer::new(config.speech.clone()),
        config.session.clone(),
    );
    let app = App { screen, overlay_host, session, config, practice: None };
    APP.with(|cell| cell.replace(Some(app)));
    log::info!("flashcards mounted");
    with_app(|app| app.render())
}

fn with_app(f: impl FnOnce(&mut App) -> Result<()>) -> Result<()> {
    APP.with(|cell| match cell.borrow_mut().as_mut() {
        Some(app) => f(app),
        None => Ok(()),
    })
}

impl App {
    fn dispatch(&mut self, action: Action) -> Result<()> {
        let mut rng = rand::thread_rng();
        match action {
            Action::Select(set) => self.session.start_session(set, &mut rng),
            Action::Retry => self.session.retry(&mut rng),
            Action::Flip => self.session.reveal(),
            Action::Answer { correct } => {
                if let Some(pending) = self.session.record_answer(correct) {
                    schedule_advance(pending, self.session.config().advance_delay_ms);
                }
            }
            Action::Exit => self.session.reset_to_menu(),
            Action::ToggleWriting => self.session.toggle_writing(),
            Action::CloseWriting => self.session.close_writing(),
            Action::Audio => self.session.play_audio(),
            Action::ClearAll => {
                if let Some(practice) = &self.practice {
                    practice.clear_all();
                }
            }
        }
        if action.rerenders() { self.render() } else { Ok(()) }
    }

    fn render(&mut self) -> Result<()> {
        self.screen.set_inner_html(&screens::render(&self.session));
        self.sync_practice()
    }

    fn sync_practice(&mut self) -> Result<()> {
        let wants_overlay =
            self.session.is_writing() && matches!(self.session.mode(), Mode::Studying(_));
        if !wants_overlay {
            self.practice = None;
            return Ok(());
        }
        let card = self.session.current().copied();
        match &mut self.practice {
            Some(practice) => practice.show_card(card.as_ref()),
            None => {
                self.practice = Some(Practice::open(
                    &self.overlay_host,
                    self.config.practice_cells,
                    &self.config.stroke,
                    card.as_ref(),
                )?);
            }
        }
        Ok(())
    }
}

/// Redeem `pending` after `delay_ms`. The session ignores it if it went stale.
fn schedule_advance(pending: PendingAdvance, delay_ms: u32) {
    let Some(win) = window() else {
        return;
    };
    let callback = Closure::once_into_js(move || {
        let result = with_app(|app| {
            if app.session.advance(pending) { app.render() } else { Ok(()) }
        });
        if let Err(e) = result {
            log::warn!("advance failed: {}", e);
        }
    });
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    if let Err(e) =
        win.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
    {
        log::warn!("could not schedule advance: {:?}", e);
    }
}

fn ensure_style(doc: &Document) -> Result<()> {
    if doc.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let Some(head) = doc.head() else {
        return Ok(());
    };
    let style = doc.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(screens::STYLE));
    head.append_child(&style)?;
    Ok(())
}

fn append_div(doc: &Document, parent: &HtmlElement, class: &str) -> Result<HtmlElement> {
    let div: HtmlElement = doc.create_element("div")?.dyn_into().map_err(JsValue::from)?;
    div.set_class_name(class);
    parent.append_child(&div)?;
    Ok(div)
}
