use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::error::RevealError;
use crate::reveal::one_shot::{Intersection, OneShotReveal, RevealState, RevealTarget, Viewport};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct DomViewport {
    observer: IntersectionObserver,
}

impl Viewport for DomViewport {
    type Node = Element;

    fn observe(&self, node: &Element) {
        self.observer.observe(node);
    }

    fn unobserve(&self, node: &Element) {
        self.observer.unobserve(node);
    }
}

impl RevealTarget for Element {
    fn mark_cards(&self, selector: &str, marker: &str) -> usize {
        let cards = match self.query_selector_all(selector) {
            Ok(cards) => cards,
            Err(err) => {
                warn!("Failed to query cards with {}: {:?}", selector, err);
                return 0;
            }
        };

        let mut marked = 0;
        for i in 0..cards.length() {
            let Some(card) = cards.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            match card.class_list().add_1(marker) {
                Ok(()) => marked += 1,
                Err(err) => warn!("Failed to mark card {}: {:?}", i, err),
            }
        }
        marked
    }
}

/// Live one-shot watch on a mounted features section. Dropping it without
/// calling [`SectionWatch::release`] also tears the observer down.
pub struct SectionWatch {
    reveal: Rc<RefCell<OneShotReveal<DomViewport>>>,
    _callback: ObserverCallback,
}

impl SectionWatch {
    /// Starts watching `section`. Without a section there is nothing to
    /// observe and no observer is created.
    pub fn start(section: Option<Element>, config: RevealConfig) -> Result<Option<Self>, RevealError> {
        let Some(section) = section else {
            debug!("Features section has no root node, skipping reveal watch");
            return Ok(None);
        };
        config.validate()?;

        // Filled in once the observer exists; the callback only runs after
        // `observe`, so it never sees the empty slot.
        let slot: Rc<RefCell<Option<Rc<RefCell<OneShotReveal<DomViewport>>>>>> =
            Rc::new(RefCell::new(None));

        let callback = {
            let slot = slot.clone();
            Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                let Some(reveal) = slot.borrow().clone() else {
                    return;
                };
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| Intersection {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                    });
                reveal.borrow_mut().handle(batch);
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| RevealError::ObserverUnavailable(format!("{:?}", err)))?;

        let reveal = Rc::new(RefCell::new(OneShotReveal::new(DomViewport { observer }, config)));
        *slot.borrow_mut() = Some(reveal.clone());
        reveal.borrow_mut().mount(Some(section));

        Ok(Some(Self { reveal, _callback: callback }))
    }

    pub fn state(&self) -> RevealState {
        self.reveal.borrow().state()
    }

    pub fn release(self) {
        drop(self);
    }
}

impl Drop for SectionWatch {
    fn drop(&mut self) {
        let mut reveal = self.reveal.borrow_mut();
        reveal.unmount();
        // No queued notification may reach the callback once it is dropped.
        reveal.viewport().observer.disconnect();
        debug!("Features section watch dropped in state {:?}", reveal.state());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn missing_section_creates_no_watch() {
        let watch = SectionWatch::start(None, RevealConfig::default());
        assert!(matches!(watch, Ok(None)));
    }

    #[test]
    fn missing_section_is_skipped_before_config_checks() {
        let config = RevealConfig { threshold: 2.0, ..RevealConfig::default() };
        assert!(matches!(SectionWatch::start(None, config), Ok(None)));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn section_with_cards() -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document");
        let section = document.create_element("section").expect("section");
        section.set_attribute("style", "height: 400px").expect("style");
        section.set_inner_html(
            r#"<div class="feature-card"></div>
               <div class="feature-card"></div>
               <div class="feature-card"></div>
               <div class="feature-card"></div>
               <div class="features-subtitle"></div>"#,
        );
        let body = document.body().expect("body");
        body.prepend_with_node_1(&section).expect("prepend");
        section
    }

    fn marked_cards(section: &Element) -> u32 {
        section
            .query_selector_all(".feature-card.fade-in")
            .map(|cards| cards.length())
            .unwrap_or(0)
    }

    #[wasm_bindgen_test]
    fn mark_cards_only_touches_cards() {
        let section = section_with_cards();

        assert_eq!(section.mark_cards(".feature-card", "fade-in"), 4);
        assert_eq!(marked_cards(&section), 4);
        assert_eq!(section.query_selector_all(".fade-in").map(|n| n.length()).unwrap_or(0), 4);
        section.remove();
    }

    #[wasm_bindgen_test]
    async fn visible_section_reveals_cards_once() {
        let section = section_with_cards();
        let watch = SectionWatch::start(Some(section.clone()), RevealConfig::default())
            .expect("observer")
            .expect("watch");
        assert_eq!(watch.state(), RevealState::Watching);
        assert_eq!(marked_cards(&section), 0);

        TimeoutFuture::new(200).await;
        assert_eq!(watch.state(), RevealState::Revealed);
        assert_eq!(marked_cards(&section), 4);

        watch.release();
        section.remove();
    }

    #[wasm_bindgen_test]
    async fn released_watch_never_reveals() {
        let section = section_with_cards();
        let watch = SectionWatch::start(Some(section.clone()), RevealConfig::default())
            .expect("observer")
            .expect("watch");
        watch.release();

        TimeoutFuture::new(200).await;
        assert_eq!(marked_cards(&section), 0);
        section.remove();
    }
}
