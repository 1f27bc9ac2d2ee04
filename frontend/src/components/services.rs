use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: "⚡",
        title: "Automations",
        description: "Streamline your business processes with intelligent automation solutions that save time and reduce human error.",
        color: "#6366f1",
    },
    Service {
        icon: "🎯",
        title: "Lead Engagement Platforms",
        description: "Convert visitors into customers with sophisticated lead capture and engagement tools powered by AI.",
        color: "#8b5cf6",
    },
    Service {
        icon: "🤖",
        title: "AI Chatbots",
        description: "Deploy intelligent conversational agents that provide 24/7 customer support and drive engagement.",
        color: "#ec4899",
    },
    Service {
        icon: "📞",
        title: "AI Calling Agents",
        description: "Revolutionize customer communication with AI-powered voice agents for sales and support.",
        color: "#f59e0b",
    },
    Service {
        icon: "🔗",
        title: "API Integrations",
        description: "Seamlessly connect your systems and applications with custom API solutions and integrations.",
        color: "#10b981",
    },
    Service {
        icon: "⛓️",
        title: "Blockchain Services",
        description: "Build secure, decentralized solutions with cutting-edge blockchain technology and smart contracts.",
        color: "#06b6d4",
    },
];

/// Section visibility that triggers the fade-in.
const REVEAL_THRESHOLD: f64 = 0.1;

pub fn card_style(index: usize, color: &str) -> String {
    format!("animation-delay: {:.1}s; --service-color: {};", index as f64 * 0.1, color)
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe(element: &Element, on_visible: Callback<()>) -> Result<(IntersectionObserver, EntriesCallback), JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        let intersecting = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if intersecting {
            on_visible.emit(());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut init = IntersectionObserverInit::new();
    init.threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);
    Ok((observer, callback))
}

#[function_component(Services)]
pub fn services() -> Html {
    let visible = use_state(|| false);
    let section_ref = use_node_ref();

    {
        let visible = visible.clone();
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let on_visible = Callback::from(move |_: ()| visible.set(true));
                let observed = section_ref
                    .cast::<Element>()
                    .map(|element| observe(&element, on_visible));
                let observed = match observed {
                    Some(Ok(observed)) => {
                        debug!("Watching services section");
                        Some(observed)
                    }
                    Some(Err(err)) => {
                        warn!("IntersectionObserver unavailable: {:?}", err);
                        None
                    }
                    None => None,
                };

                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let reveal = (*visible).then(|| "fade-in-up");

    html! {
        <section class="services" id="services" ref={section_ref}>
            <style>
                {r#"
                    .services {
                        position: relative;
                        padding: 6rem 0;
                    }
                    .services-header {
                        text-align: center;
                        margin-bottom: 4rem;
                        opacity: 0;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .service-card {
                        padding: 2.5rem 2rem;
                        border-radius: 20px;
                        opacity: 0;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-10px);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3), 0 0 30px var(--service-color);
                    }
                    .service-icon {
                        font-size: 3rem;
                        margin-bottom: 1.5rem;
                    }
                    .service-title {
                        color: #e2e8f0;
                        font-size: 1.4rem;
                        margin-bottom: 1rem;
                    }
                    .service-description {
                        color: #94a3b8;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }
                    .service-btn {
                        padding: 0.6rem 1.4rem;
                        border-radius: 999px;
                        border: 2px solid;
                        background: transparent;
                        cursor: pointer;
                        font-weight: 600;
                    }
                    .fade-in-up {
                        animation: fadeInUp 0.8s ease forwards;
                    }
                "#}
            </style>
            <div class="container">
                <div class={classes!("services-header", reveal)}>
                    <h2 class="section-title">{"Our Services"}</h2>
                    <p class="section-subtitle">
                        {"Comprehensive solutions to accelerate your digital transformation"}
                    </p>
                </div>

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <div
                            key={service.title}
                            class={classes!("service-card", "glass", reveal)}
                            style={card_style(index, service.color)}
                        >
                            <div class="service-icon" style={format!("color: {};", service.color)}>
                                {service.icon}
                            </div>
                            <h3 class="service-title">{service.title}</h3>
                            <p class="service-description">{service.description}</p>
                            <button
                                class="service-btn"
                                style={format!("border-color: {0}; color: {0};", service.color)}
                            >
                                {"Learn More →"}
                            </button>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_are_staggered_by_a_tenth_of_a_second() {
        assert_eq!(card_style(0, "#6366f1"), "animation-delay: 0.0s; --service-color: #6366f1;");
        assert_eq!(card_style(5, "#06b6d4"), "animation-delay: 0.5s; --service-color: #06b6d4;");
    }

    #[test]
    fn six_services_with_distinct_titles() {
        let mut titles: Vec<_> = SERVICES.iter().map(|s| s.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 6);
        assert!(SERVICES.iter().all(|s| s.color.starts_with('#') && s.color.len() == 7));
    }
}
