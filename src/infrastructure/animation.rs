//! Scroll-triggered entrance transition driven by CSS.

use std::cell::RefCell;
use std::rc::Rc;

use crate::application::entrance::{EntranceTrigger, OneTimeRegistration};
use crate::config::VisualizationConfig;
use crate::domain::logging::{LogComponent, get_logger};
use crate::event_utils::{EventOptions, WindowListener, listen_window};

pub const STYLESHEET_ID: &str = "viz-entrance-styles";
pub const ENTRANCE_CLASS: &str = "viz-entrance";
pub const VISIBLE_CLASS: &str = "viz-entrance--visible";

/// cubic-bezier approximation of a power3 ease-out
const POWER3_OUT: &str = "cubic-bezier(0.215, 0.61, 0.355, 1)";

static ENTRANCE_SUPPORT: OneTimeRegistration = OneTimeRegistration::new();

/// Rules for the hidden and revealed states of the animated container
pub fn entrance_stylesheet(config: &VisualizationConfig) -> String {
    format!(
        ".{entrance} {{ opacity: 0; transform: translateY({offset}px); \
         transition: opacity {duration}ms {easing}, transform {duration}ms {easing}; }}\n\
         .{entrance}.{visible} {{ opacity: 1; transform: translateY(0); }}",
        entrance = ENTRANCE_CLASS,
        visible = VISIBLE_CLASS,
        offset = config.entrance_offset_px,
        duration = config.entrance_duration_ms,
        easing = POWER3_OUT,
    )
}

/// Install the entrance stylesheet once per page. Must run before any
/// container is attached. Returns whether this call installed it.
pub fn register_entrance_support(config: &VisualizationConfig) -> bool {
    ENTRANCE_SUPPORT.run(|| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
            return;
        };
        style.set_id(STYLESHEET_ID);
        style.set_text_content(Some(&entrance_stylesheet(config)));
        if head.append_child(&style).is_err() {
            get_logger().warn(
                LogComponent::Infrastructure("EntranceAnimation"),
                "Could not install entrance stylesheet",
            );
        }
    })
}

fn add_class(element: &web_sys::Element, class: &str) {
    if let Err(e) = element.class_list().add_1(class) {
        get_logger().warn(
            LogComponent::Infrastructure("EntranceAnimation"),
            &format!("Could not add class {}: {:?}", class, e),
        );
    }
}

/// One-shot reveal of `container` once `section` scrolls into view.
///
/// The scroll listener lives only until the trigger fires.
pub struct EntranceAnimation {
    listener: Rc<RefCell<Option<WindowListener>>>,
    trigger: Rc<RefCell<EntranceTrigger>>,
}

impl EntranceAnimation {
    pub fn attach(section: web_sys::Element, container: web_sys::Element, threshold: f64) -> Self {
        let trigger = Rc::new(RefCell::new(EntranceTrigger::new(threshold)));
        let listener: Rc<RefCell<Option<WindowListener>>> = Rc::new(RefCell::new(None));
        add_class(&container, ENTRANCE_CLASS);

        let check = {
            let trigger = Rc::clone(&trigger);
            let listener = Rc::downgrade(&listener);
            Rc::new(move || {
                let viewport_height = web_sys::window()
                    .and_then(|w| w.inner_height().ok())
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                let top = section.get_bounding_client_rect().top();
                if !trigger.borrow_mut().observe(top, viewport_height) {
                    return;
                }

                add_class(&container, VISIBLE_CLASS);
                get_logger().debug(
                    LogComponent::Infrastructure("EntranceAnimation"),
                    "Entrance transition started",
                );

                // Released after the running scroll callback returns
                if let Some(fired) = listener.upgrade().and_then(|cell| cell.borrow_mut().take()) {
                    leptos::spawn_local(async move { drop(fired) });
                }
            })
        };

        // The section may already be on screen when it mounts
        check();

        if !trigger.borrow().has_fired() {
            let on_scroll = Rc::clone(&check);
            *listener.borrow_mut() =
                Some(listen_window(leptos::ev::scroll, &EventOptions::default(), move |_| on_scroll()));
        }

        Self { listener, trigger }
    }

    pub fn has_fired(&self) -> bool {
        self.trigger.borrow().has_fired()
    }

    pub fn is_listening(&self) -> bool {
        self.listener.borrow().is_some()
    }

    pub fn detach(self) {
        self.listener.borrow_mut().take();
    }
}
