use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "home"),
    ("Services", "services"),
    ("About", "about"),
    ("Contact", "contact"),
];

/// Smooth-scrolls the element with the given id into view.
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No section with id '{}'", id),
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > 50.0
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.clone().map(|window| {
                    let target = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let y = target.scroll_y().unwrap_or(0.0);
                        scrolled.set(is_scrolled(y));
                    }) as Box<dyn FnMut()>);
                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("Failed to watch scroll for header: {:?}", err);
                    }
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Navigating to #{}", id);
            scroll_to_section(id);
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("header", (*scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1.5rem 0;
                        transition: all 0.3s ease;
                    }
                    .header.scrolled {
                        padding: 1rem 0;
                        background: rgba(10, 10, 26, 0.9);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 4px 30px rgba(0, 255, 255, 0.1);
                    }
                    .nav {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-size: 1.6rem;
                        font-weight: 800;
                        text-decoration: none;
                    }
                    .logo-domain {
                        color: #94a3b8;
                        font-size: 1rem;
                    }
                    .nav-menu {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #e2e8f0;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover {
                        color: #00ffff;
                    }
                    .nav-cta {
                        padding: 0.6rem 1.4rem;
                        border-radius: 999px;
                        background: linear-gradient(135deg, #3b82f6, #00ffff);
                        color: #0a0a1a;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .nav-cta:hover {
                        box-shadow: 0 0 20px rgba(0, 255, 255, 0.5);
                    }
                    .hamburger {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .hamburger span {
                        width: 25px;
                        height: 3px;
                        background: #e2e8f0;
                        transition: all 0.3s ease;
                    }
                    .hamburger.active span:nth-child(1) {
                        transform: rotate(45deg) translate(5px, 6px);
                    }
                    .hamburger.active span:nth-child(2) {
                        opacity: 0;
                    }
                    .hamburger.active span:nth-child(3) {
                        transform: rotate(-45deg) translate(5px, -6px);
                    }
                    @media (max-width: 768px) {
                        .hamburger {
                            display: flex;
                        }
                        .nav-menu {
                            position: fixed;
                            top: 70px;
                            left: -100%;
                            width: 100%;
                            flex-direction: column;
                            padding: 2rem 0;
                            background: rgba(10, 10, 26, 0.97);
                            transition: left 0.3s ease;
                        }
                        .nav-menu.active {
                            left: 0;
                        }
                    }
                "#}
            </style>
            <nav class="nav container">
                <a href="#home" class="nav-logo" onclick={go_to("home")}>
                    <span class="logo-text gradient-text">{config::BRAND}</span>
                    <span class="logo-domain">{".io"}</span>
                </a>

                <div class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|(name, id)| html! {
                        <a key={*id} href={format!("#{}", id)} class="nav-link" onclick={go_to(*id)}>
                            {*name}
                        </a>
                    }) }
                    <a href="#contact" class="nav-cta" onclick={go_to("contact")}>
                        {"Get Started"}
                    </a>
                </div>

                <button
                    class={classes!("hamburger", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_solid_past_fifty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(2000.0));
    }

    #[test]
    fn nav_links_point_at_page_sections() {
        let ids: Vec<_> = NAV_LINKS.iter().map(|(_, id)| *id).collect();
        assert_eq!(ids, ["home", "services", "about", "contact"]);
    }
}
