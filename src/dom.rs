use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

use crate::nav::SectionSpan;
use crate::reveal::{RevealOutcome, RevealSet};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn scroll_offset() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(nodes) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn section_spans() -> Vec<SectionSpan> {
    query_all("section[id]")
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionSpan::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}

pub fn element_top(id: &str) -> Option<f64> {
    let element = document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(f64::from(element.offset_top()))
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    });
    win.scroll_to_with_scroll_to_options(&options);
}

/// Resets a skill bar to zero width and restores its inline width after `delay_ms`.
pub fn replay_fill(element: &Element, delay_ms: u32) {
    let Ok(bar) = element.clone().dyn_into::<HtmlElement>() else {
        return;
    };

    let _ = bar.class_list().add_1("animated");
    let style = bar.style();
    let width = style.get_property_value("width").unwrap_or_default();
    let _ = style.set_property("width", "0%");

    Timeout::new(delay_ms, move || {
        let _ = bar.style().set_property("width", &width);
    })
    .forget();
}

/// IntersectionObserver that fires `on_reveal` at most once per target and
/// unobserves it afterwards. Disconnects on drop.
pub struct OnceObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl OnceObserver {
    pub fn observe(
        targets: Vec<Element>,
        threshold: f64,
        root_margin: &str,
        mut on_reveal: impl FnMut(&Element) + 'static,
    ) -> Result<Self, JsValue> {
        let mut flags = RevealSet::new(targets.len());
        let observed = targets.clone();

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = observed.iter().position(|element| *element == target) else {
                        continue;
                    };

                    if flags.on_intersection(index, entry.is_intersecting()) == RevealOutcome::Revealed {
                        on_reveal(&target);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for target in &targets {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for OnceObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
