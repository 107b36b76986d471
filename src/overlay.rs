//! DOM side of the overlay panels, cursor, cues and loading screen.

use crate::audio::CuePlayer;
use crate::constants::*;
use crate::dom;
use crate::panels;
use room_core::hover::Cursor;
use room_core::{InteractionHost, Panel, PanelHost, SoundCue, UiAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Button clicks recorded by panel listeners, drained by the frame tick.
pub type ActionQueue = Rc<RefCell<Vec<UiAction>>>;

fn wrapper_class(panel: Panel) -> &'static str {
    match panel {
        Panel::Documentation | Panel::Agent => "newspaper",
        Panel::Team => "team-interface",
        Panel::Tokenomics => "tokenomics-interface",
        Panel::Typewriter => "typewriter-paper",
        Panel::Social => "social-mirror",
        Panel::Selection => "papers-selection",
    }
}

pub struct DomHost {
    document: web::Document,
    cues: CuePlayer,
    actions: ActionQueue,
    cursor: Cursor,
}

impl DomHost {
    pub fn new(document: web::Document, actions: ActionQueue) -> Self {
        Self {
            cues: CuePlayer::new(document.clone()),
            document,
            actions,
            cursor: Cursor::Default,
        }
    }

    pub fn take_actions(&self) -> Vec<UiAction> {
        std::mem::take(&mut *self.actions.borrow_mut())
    }

    fn wire_buttons(&self, panel: Panel, root: &web::Element) {
        for el in dom::elements_by_class(root, CLOSE_BUTTON_CLASS) {
            let q = self.actions.clone();
            dom::add_click_listener(&el, move || q.borrow_mut().push(UiAction::Close(panel)));
        }
        let targeted: [(&str, fn(Panel) -> UiAction); 3] = [
            (NAV_LEFT_CLASS, UiAction::Navigate),
            (NAV_RIGHT_CLASS, UiAction::Navigate),
            (CHOICE_CLASS, UiAction::Choose),
        ];
        for (class, action) in targeted {
            for el in dom::elements_by_class(root, class) {
                let Some(target) = el.get_attribute("data-target").and_then(|id| panels::panel_for_id(&id)) else {
                    log::warn!("[overlay] .{} without a known data-target", class);
                    continue;
                };
                let q = self.actions.clone();
                dom::add_click_listener(&el, move || q.borrow_mut().push(action(target)));
            }
        }
    }

    fn loading_screen(&self) -> Option<web::HtmlElement> {
        self.document
            .query_selector(LOADING_SCREEN_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    }
}

impl PanelHost for DomHost {
    fn is_mounted(&self, panel: Panel) -> bool {
        self.document.get_element_by_id(panel.element_id()).is_some()
    }

    fn mount(&mut self, panel: Panel) {
        let Some(body) = self.document.body() else {
            log::error!("[overlay] no <body>");
            return;
        };
        let (Ok(menu), Ok(inner)) = (self.document.create_element("div"), self.document.create_element("div")) else {
            log::error!("[overlay] could not create {}", panel.element_id());
            return;
        };
        menu.set_id(panel.element_id());
        menu.set_class_name(PANEL_VISIBLE_CLASS);
        inner.set_class_name(wrapper_class(panel));
        inner.set_inner_html(&panels::panel_markup(panel));
        _ = menu.append_child(&inner);
        if let Err(e) = body.append_child(&menu) {
            log::error!("[overlay] mount {}: {:?}", panel.element_id(), e);
            return;
        }
        self.wire_buttons(panel, &menu);
    }

    fn unmount(&mut self, panel: Panel) {
        if let Some(el) = self.document.get_element_by_id(panel.element_id()) {
            el.remove();
        }
    }

    fn append_text(&mut self, panel: Panel, text: &str) {
        if panel != Panel::Typewriter {
            return;
        }
        if let Some(el) = self.document.get_element_by_id(TYPEWRITER_BODY_ID) {
            let mut shown = el.text_content().unwrap_or_default();
            shown.push_str(text);
            el.set_text_content(Some(&shown));
        }
    }
}

impl InteractionHost for DomHost {
    fn play_cue(&mut self, cue: SoundCue, volume: f32) {
        self.cues.play(cue, volume);
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        if cursor != self.cursor {
            self.cursor = cursor;
            dom::set_body_cursor(&self.document, cursor.css());
        }
    }

    fn unlock_audio(&mut self) {
        self.cues.unlock();
    }

    fn hide_loading_screen(&mut self) {
        if let Some(el) = self.loading_screen() {
            _ = el.style().set_property("display", "none");
            log::info!("[loading] hidden");
        }
    }

    fn set_loading_text(&mut self, text: &str) {
        if let Some(el) = self.loading_screen() {
            el.set_text_content(Some(text));
        }
    }
}
