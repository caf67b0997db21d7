use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Element, ErrorEvent, KeyboardEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::catalog::{
    open_gallery_content, GalleryContent, GalleryView, ProjectId, PLACEHOLDER_TEXT,
};
use crate::chrome::{MobileMenu, ScrollChrome};
use crate::config::{ModalTimings, ViewConfig, CONFIG_ELEMENT_ID, TypingTimings};
use crate::diagnostics::{log_event, LogLevel};
use crate::dom::{self, OnceObserver};
use crate::modal::{ModalId, ModalLayer, Scheduled, Visibility};
use crate::nav::{anchor_target, NavTracker};
use crate::typing::TypingAnimator;

const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];
const REVEAL_SELECTOR: &str = ".project-card, .skill-item, section > div";
const REVEAL_CLASS: &str = "fade-in-up";
const SKILL_BAR_SELECTOR: &str = ".skill-item .skill-fill";
/// Quiet period after the last scroll event before a link-click hold is dropped.
const SCROLL_SETTLE_MS: u32 = 150;

struct Skill {
    name: &'static str,
    level: u8,
}

const SKILLS: [Skill; 6] = [
    Skill { name: "HTML & CSS", level: 90 },
    Skill { name: "JavaScript", level: 85 },
    Skill { name: "PHP", level: 80 },
    Skill { name: "MySQL", level: 80 },
    Skill { name: "UI/UX Design", level: 75 },
    Skill { name: "Git", level: 70 },
];

struct ProjectCard {
    title: &'static str,
    gallery: Option<ProjectId>,
    summary: &'static str,
    tags: &'static [&'static str],
    repository: Option<&'static str>,
}

const PROJECT_CARDS: [ProjectCard; 5] = [
    ProjectCard {
        title: "Water Meter Management System",
        gallery: Some(ProjectId::WaterMeter),
        summary: "Billing, meter reading and consumer portals for a municipal water works office.",
        tags: &["PHP", "MySQL", "Bootstrap"],
        repository: None,
    },
    ProjectCard {
        title: "Audit Portal",
        gallery: Some(ProjectId::AuditPortal),
        summary: "Internal audit tracking with meetings, leaderboards and staff profiles.",
        tags: &["Laravel", "MySQL"],
        repository: None,
    },
    ProjectCard {
        title: "SciLab Reservation System",
        gallery: Some(ProjectId::SciLab),
        summary: "Laboratory room and equipment reservations with professor approval flows.",
        tags: &["PHP", "JavaScript", "MySQL"],
        repository: None,
    },
    ProjectCard {
        title: "PLSPCart – E-Commerce Platform",
        gallery: Some(ProjectId::PlspCart),
        summary: "Campus marketplace with a buyer storefront and an admin dashboard.",
        tags: &["PHP", "Tailwind CSS", "MySQL"],
        repository: None,
    },
    ProjectCard {
        title: "Portfolio Website",
        gallery: None,
        summary: "This site: section tracking, typed hero text and screenshot galleries.",
        tags: &["Rust", "Yew", "WebAssembly"],
        repository: Some("https://github.com/"),
    },
];

fn log_setup_failure(config: &ViewConfig, component: &str, error: &JsValue) {
    log_event(
        config,
        LogLevel::Warn,
        "setup.failed",
        json!({ "component": component, "error": format!("{error:?}") }),
    );
}

/// Self-rescheduling typing loop. `stop` cancels the pending tick.
struct TypingTicker {
    animator: Rc<RefCell<TypingAnimator>>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl TypingTicker {
    fn start(phrases: Vec<String>, timings: TypingTimings, render: impl Fn(String) + 'static) -> Self {
        let ticker = Self {
            animator: Rc::new(RefCell::new(TypingAnimator::new(phrases, timings))),
            pending: Rc::new(RefCell::new(None)),
        };

        if !ticker.animator.borrow().is_idle() {
            schedule_tick(
                ticker.animator.clone(),
                ticker.pending.clone(),
                Rc::new(render),
                0,
            );
        }
        ticker
    }

    fn stop(&self) {
        self.animator.borrow_mut().stop();
        self.pending.borrow_mut().take();
    }
}

fn schedule_tick(
    animator: Rc<RefCell<TypingAnimator>>,
    pending: Rc<RefCell<Option<Timeout>>>,
    render: Rc<dyn Fn(String)>,
    delay_ms: u32,
) {
    let slot = pending.clone();
    let timeout = Timeout::new(delay_ms, move || {
        let next = {
            let mut animator = animator.borrow_mut();
            let next = animator.advance();
            if next.is_some() {
                render(animator.text().to_string());
            }
            next
        };

        if let Some(delay_ms) = next {
            schedule_tick(animator, slot, render, delay_ms);
        }
    });
    *pending.borrow_mut() = Some(timeout);
}

/// Applies modal operations and fires their delayed completions. A newer
/// operation on the same dialog replaces (and so cancels) its pending timer.
#[derive(Clone)]
struct ModalDriver {
    layer: Rc<RefCell<ModalLayer>>,
    pending: Rc<RefCell<HashMap<ModalId, Timeout>>>,
    timings: ModalTimings,
    config: Rc<ViewConfig>,
    rerender: UseForceUpdateHandle,
}

impl ModalDriver {
    fn apply(&self, operation: impl FnOnce(&mut ModalLayer, &ModalTimings) -> Option<Scheduled>) {
        let scheduled = {
            let mut layer = self.layer.borrow_mut();
            operation(&mut *layer, &self.timings)
        };
        self.rerender.force_update();

        let Some(scheduled) = scheduled else {
            return;
        };
        log_event(
            &self.config,
            LogLevel::Debug,
            "modal.transition",
            json!({ "modal": scheduled.modal.as_str(), "step": format!("{:?}", scheduled.step) }),
        );

        let driver = self.clone();
        let timeout = Timeout::new(scheduled.delay_ms, move || {
            let _fired = driver.pending.borrow_mut().remove(&scheduled.modal);
            let applied = driver.layer.borrow_mut().complete(scheduled);
            if applied {
                driver.rerender.force_update();
            }
        });
        self.pending.borrow_mut().insert(scheduled.modal, timeout);
    }

    fn open_gallery(&self, view: GalleryView) {
        if view.is_placeholder() {
            log_event(
                &self.config,
                LogLevel::Debug,
                "gallery.placeholder",
                json!({ "title": view.title }),
            );
        }
        self.apply(move |layer, timings| layer.open_gallery(view, timings));
    }
}

fn event_hits(event: &MouseEvent, node: &NodeRef) -> bool {
    match (event.target(), node.get()) {
        (Some(target), Some(node)) => JsValue::from(target) == JsValue::from(node),
        _ => false,
    }
}

fn click_lands_on_link(event: &MouseEvent) -> bool {
    event
        .target_dyn_into::<Element>()
        .and_then(|element| element.closest("a").ok().flatten())
        .is_some()
}

#[derive(Properties, PartialEq)]
struct SectionLinkProps {
    href: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
    on_navigate: Callback<String>,
}

#[function_component(SectionLink)]
fn section_link(props: &SectionLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(target) = anchor_target(&href) {
                event.prevent_default();
                on_navigate.emit(target.to_string());
            }
        })
    };

    html! {
        <a class={props.class.clone()} href={props.href.clone()} onclick={onclick}>
            {props.label.clone()}
        </a>
    }
}

fn gallery_body(view: &GalleryView) -> Html {
    match view.content {
        GalleryContent::Placeholder => html! {
            <div class="gallery-placeholder">
                <div class="gallery-placeholder-mark" aria-hidden="true">{"◆"}</div>
                <p>{PLACEHOLDER_TEXT}</p>
            </div>
        },
        GalleryContent::Entry(entry) => html! {
            <div>
                if let Some(notice) = entry.notice {
                    <div class="gallery-notice"><p>{notice}</p></div>
                }
                { for entry.groups.iter().map(|group| html! {
                    <div class="gallery-group" key={group.label}>
                        <h3 class="gallery-group-label">{group.label}</h3>
                        <div class="gallery-grid">
                            { for group.images.iter().map(|image| html! {
                                <div class="img-card">
                                    <img src={image.src} alt={image.alt} loading="lazy" />
                                </div>
                            }) }
                        </div>
                    </div>
                }) }
            </div>
        },
    }
}

fn overlay_classes(visibility: Visibility) -> Classes {
    classes!(
        "modal-overlay",
        if visibility.is_displayed() { "flex" } else { "hidden" }
    )
}

fn content_classes(visibility: Visibility) -> Classes {
    classes!(
        "modal-content",
        "transform",
        if visibility.is_expanded() { "scale-100" } else { "scale-95" }
    )
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<ViewConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let rerender = use_force_update();
    let nav = use_mut_ref(NavTracker::default);
    let chrome = use_state_eq(ScrollChrome::default);
    let menu = use_state_eq(MobileMenu::default);
    let typed = use_state_eq(String::new);
    let layer = use_mut_ref(ModalLayer::default);
    let pending = use_mut_ref(HashMap::<ModalId, Timeout>::new);
    let contact_overlay = use_node_ref();
    let gallery_overlay = use_node_ref();

    let modals = ModalDriver {
        layer: layer.clone(),
        pending: pending.clone(),
        timings: config.modal,
        config: config.clone(),
        rerender: rerender.clone(),
    };

    {
        let config = config.clone();
        let nav = nav.clone();
        let chrome = chrome.clone();
        let rerender = rerender.clone();
        use_effect_with((), move |_| {
            let sync = Rc::new(move |settled: bool| {
                let offset = dom::scroll_offset();
                chrome.set(ScrollChrome::at_offset(offset, &config));
                let sections = dom::section_spans();
                let marker_offset = config.nav_probe_offset_px;
                let changed = if settled {
                    nav.borrow_mut().settle(&sections, offset, marker_offset)
                } else {
                    nav.borrow_mut().on_scroll(&sections, offset, marker_offset)
                };
                if changed {
                    rerender.force_update();
                }
            });
            sync(false);

            let settle_timer = Rc::new(RefCell::new(None::<Timeout>));
            let listener = {
                let settle_timer = settle_timer.clone();
                window().map(|win| {
                    EventListener::new(&win, "scroll", move |_| {
                        sync(false);
                        let sync = sync.clone();
                        // Replacing the previous timeout cancels it.
                        *settle_timer.borrow_mut() =
                            Some(Timeout::new(SCROLL_SETTLE_MS, move || sync(true)));
                    })
                })
            };
            move || {
                drop(listener);
                settle_timer.borrow_mut().take();
            }
        });
    }

    {
        let config = config.clone();
        let typed = typed.clone();
        use_effect_with((), move |_| {
            if config.phrases.is_empty() {
                log_event(&config, LogLevel::Debug, "typing.disabled", json!({}));
            }
            let ticker = TypingTicker::start(config.phrases.clone(), config.typing, move |text| {
                typed.set(text)
            });
            move || ticker.stop()
        });
    }

    {
        let modals = modals.clone();
        use_effect_with((), move |_| {
            let pending = modals.pending.clone();
            let listener = dom::document().map(|doc| {
                EventListener::new(&doc, "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|event| event.key() == "Escape");
                    if is_escape {
                        modals.apply(|layer, timings| layer.on_escape(timings));
                    }
                })
            });
            move || {
                drop(listener);
                pending.borrow_mut().clear();
            }
        });
    }

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            let reveal = OnceObserver::observe(
                dom::query_all(REVEAL_SELECTOR),
                config.reveal_threshold,
                &config.reveal_root_margin(),
                |element| {
                    let _ = element.class_list().add_1(REVEAL_CLASS);
                },
            )
            .map_err(|error| log_setup_failure(&config, "reveal", &error))
            .ok();

            let fill_delay_ms = config.skill_fill_delay_ms;
            let skills = OnceObserver::observe(
                dom::query_all(SKILL_BAR_SELECTOR),
                0.0,
                "0px",
                move |element| dom::replay_fill(element, fill_delay_ms),
            )
            .map_err(|error| log_setup_failure(&config, "skill_bars", &error))
            .ok();

            move || {
                drop(reveal);
                drop(skills);
            }
        });
    }

    let on_navigate = {
        let config = config.clone();
        let nav = nav.clone();
        let menu = menu.clone();
        let rerender = rerender.clone();
        Callback::from(move |target_id: String| {
            menu.set(menu.closed());

            let Some(top) = dom::element_top(&target_id) else {
                log_event(
                    &config,
                    LogLevel::Debug,
                    "nav.unknown_target",
                    json!({ "target": target_id }),
                );
                return;
            };

            let destination = nav
                .borrow_mut()
                .on_link_click(&target_id, top, config.header_offset_px);
            dom::scroll_to(destination);
            rerender.force_update();
        })
    };

    let on_menu_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };

    let on_scroll_top = Callback::from(|_: MouseEvent| dom::scroll_to(0.0));

    let on_contact_submit = {
        let modals = modals.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            modals.apply(|layer, timings| layer.open(ModalId::Contact, timings));
        })
    };

    let on_contact_overlay = {
        let modals = modals.clone();
        let overlay = contact_overlay.clone();
        Callback::from(move |event: MouseEvent| {
            let on_overlay = event_hits(&event, &overlay);
            modals.apply(|layer, timings| layer.on_overlay_click(ModalId::Contact, on_overlay, timings));
        })
    };

    let on_contact_close = {
        let modals = modals.clone();
        Callback::from(move |_: MouseEvent| {
            modals.apply(|layer, timings| layer.close(ModalId::Contact, timings));
        })
    };

    let on_gallery_overlay = {
        let modals = modals.clone();
        let overlay = gallery_overlay.clone();
        Callback::from(move |event: MouseEvent| {
            let on_overlay = event_hits(&event, &overlay);
            modals.apply(|layer, timings| layer.on_overlay_click(ModalId::Gallery, on_overlay, timings));
        })
    };

    let on_gallery_close = {
        let modals = modals.clone();
        Callback::from(move |_: MouseEvent| {
            modals.apply(|layer, timings| layer.close(ModalId::Gallery, timings));
        })
    };

    let layer_state = layer.borrow().clone();
    let contact_visibility = layer_state.controller(ModalId::Contact).visibility();
    let gallery_visibility = layer_state.controller(ModalId::Gallery).visibility();
    let menu_open = menu.is_open();

    html! {
        <>
            <nav id="navbar" class={classes!("navbar", chrome.navbar_scrolled.then_some("scrolled"))}>
                <div class="navbar-inner">
                    <SectionLink class={classes!("brand")} href="#home" label="Portfolio" on_navigate={on_navigate.clone()} />
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|(id, label)| html! {
                            <SectionLink
                                class={classes!("nav-link", nav.borrow().is_active(id).then_some("active"))}
                                href={format!("#{id}")}
                                label={*label}
                                on_navigate={on_navigate.clone()}
                            />
                        }) }
                    </div>
                    <button
                        id="mobile-menu-btn"
                        type="button"
                        aria-label="Toggle navigation"
                        aria-expanded={menu_open.to_string()}
                        onclick={on_menu_toggle}
                    >
                        <svg class={classes!("menu-icon", menu_open.then_some("rotate-90"))} viewBox="0 0 24 24" aria-hidden="true">
                            <path d="M4 6h16M4 12h16M4 18h16" />
                        </svg>
                    </button>
                </div>
                <div id="mobile-menu" class={classes!("mobile-menu", (!menu_open).then_some("hidden"))}>
                    { for NAV_LINKS.iter().map(|(id, label)| html! {
                        <SectionLink
                            class={classes!("mobile-nav-link", nav.borrow().is_active(id).then_some("active"))}
                            href={format!("#{id}")}
                            label={*label}
                            on_navigate={on_navigate.clone()}
                        />
                    }) }
                </div>
            </nav>

            <main>
                <section id="home" class="hero">
                    <div class="hero-copy">
                        <p class="hero-greeting">{"Hello, I build things for the web."}</p>
                        <h1 class="hero-role">
                            {"I'm a "}
                            <span id="typing-text">{(*typed).clone()}</span>
                            <span class="typing-cursor" aria-hidden="true">{"|"}</span>
                        </h1>
                        <div class="hero-actions">
                            <SectionLink class={classes!("button", "primary")} href="#projects" label="View Projects" on_navigate={on_navigate.clone()} />
                            <SectionLink class={classes!("button")} href="#contact" label="Contact Me" on_navigate={on_navigate.clone()} />
                        </div>
                    </div>
                </section>

                <section id="about" class="section-block">
                    <div>
                        <h2>{"About"}</h2>
                        <p>
                            {"I design and build information systems end to end, from database schema to the last hover state. "}
                            {"Most of my work lives in offices and campuses that needed their paperwork turned into software."}
                        </p>
                    </div>
                </section>

                <section id="skills" class="section-block">
                    <div>
                        <h2>{"Skills"}</h2>
                        <ul class="skill-list">
                            { for SKILLS.iter().map(|skill| html! {
                                <li class="skill-item" key={skill.name}>
                                    <div class="skill-label">
                                        <span>{skill.name}</span>
                                        <span class="muted">{format!("{}%", skill.level)}</span>
                                    </div>
                                    <div class="skill-track">
                                        <div class="skill-fill" style={format!("width: {}%;", skill.level)}></div>
                                    </div>
                                </li>
                            }) }
                        </ul>
                    </div>
                </section>

                <section id="projects" class="section-block">
                    <div>
                        <h2>{"Projects"}</h2>
                        <div class="project-grid">
                            { for PROJECT_CARDS.iter().map(|card| {
                                let onclick = {
                                    let modals = modals.clone();
                                    let gallery = card.gallery;
                                    let title = card.title;
                                    Callback::from(move |event: MouseEvent| {
                                        if click_lands_on_link(&event) {
                                            return;
                                        }
                                        let view = match gallery {
                                            Some(id) => GalleryView::for_project(id),
                                            None => open_gallery_content(title),
                                        };
                                        modals.open_gallery(view);
                                    })
                                };

                                html! {
                                    <article class="project-card" key={card.title} onclick={onclick}>
                                        <h3>{card.title}</h3>
                                        <p class="muted">{card.summary}</p>
                                        <ul class="tag-list">
                                            { for card.tags.iter().map(|tag| html! { <li>{*tag}</li> }) }
                                        </ul>
                                        if let Some(repository) = card.repository {
                                            <a class="link" href={repository} target="_blank" rel="noopener noreferrer">
                                                {"Source"}
                                                <span class="sr-only">{" (opens in a new tab)"}</span>
                                            </a>
                                        }
                                    </article>
                                }
                            }) }
                        </div>
                    </div>
                </section>

                <section id="contact" class="section-block">
                    <div>
                        <h2>{"Contact"}</h2>
                        <form id="contact-form" onsubmit={on_contact_submit}>
                            <label for="contact-name">{"Name"}</label>
                            <input id="contact-name" name="name" type="text" required=true />
                            <label for="contact-email">{"Email"}</label>
                            <input id="contact-email" name="email" type="email" required=true />
                            <label for="contact-message">{"Message"}</label>
                            <textarea id="contact-message" name="message" rows="5" required=true />
                            <button class="button primary" type="submit">{"Send Message"}</button>
                        </form>
                    </div>
                </section>
            </main>

            <div
                id="contact-modal"
                ref={contact_overlay}
                class={overlay_classes(contact_visibility)}
                style={contact_visibility.overlay_style()}
                onclick={on_contact_overlay}
                role="dialog"
                aria-modal="true"
                aria-hidden={(!contact_visibility.is_displayed()).to_string()}
            >
                <div class={content_classes(contact_visibility)}>
                    <h2>{"Thank you!"}</h2>
                    <p>{"Your message is on its way. I'll get back to you soon."}</p>
                    <button id="close-modal" class="button primary" type="button" onclick={on_contact_close}>
                        {"Close"}
                    </button>
                </div>
            </div>

            if let Some(view) = layer_state.gallery_view() {
                <div
                    id="card-modal"
                    ref={gallery_overlay}
                    class={overlay_classes(gallery_visibility)}
                    style={gallery_visibility.overlay_style()}
                    onclick={on_gallery_overlay}
                    role="dialog"
                    aria-modal="true"
                    aria-hidden={(!gallery_visibility.is_displayed()).to_string()}
                >
                    <div class={classes!(content_classes(gallery_visibility), "gallery-panel")}>
                        <div class="gallery-header">
                            <h2 id="modal-title">{view.title.clone()}</h2>
                            <button id="modal-close-btn" type="button" aria-label="Close gallery" onclick={on_gallery_close}>
                                {"✕"}
                            </button>
                        </div>
                        <div id="modal-content">{gallery_body(view)}</div>
                    </div>
                </div>
            }

            <button
                id="scroll-top"
                type="button"
                aria-label="Back to top"
                class={classes!(chrome.scroll_top_visible.then_some("show"))}
                onclick={on_scroll_top}
            >
                <svg viewBox="0 0 24 24" aria-hidden="true">
                    <path d="M5 10l7-7m0 0l7 7m-7-7v18" />
                </svg>
            </button>
        </>
    }
}

fn load_config() -> ViewConfig {
    let source = dom::document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
        .unwrap_or_default();

    match ViewConfig::from_json(&source) {
        Ok(config) => config,
        Err(error) => {
            let fallback = ViewConfig::default();
            log_event(
                &fallback,
                LogLevel::Warn,
                "config.invalid",
                json!({ "error": error.to_string() }),
            );
            fallback
        }
    }
}

fn install_error_logger(config: Rc<ViewConfig>) -> Option<EventListener> {
    let win = window()?;
    Some(EventListener::new(&win, "error", move |event| {
        let (message, source, line) = event
            .dyn_ref::<ErrorEvent>()
            .map(|error| (error.message(), error.filename(), error.lineno()))
            .unwrap_or_default();
        log_event(
            &config,
            LogLevel::Error,
            "page.uncaught_error",
            json!({ "message": message, "source": source, "line": line }),
        );
    }))
}

pub fn run() {
    console_error_panic_hook::set_once();

    let config = Rc::new(load_config());
    if let Some(listener) = install_error_logger(config.clone()) {
        listener.forget();
    }

    let root = dom::document().and_then(|doc| doc.get_element_by_id("app"));
    let props = AppProps {
        config: config.clone(),
    };

    match root {
        Some(root) => {
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => {
            log_event(
                &config,
                LogLevel::Error,
                "app.mount_missing",
                json!({ "fallback": "body" }),
            );
            yew::Renderer::<App>::with_props(props).render();
        }
    }
}
