use yew::prelude::*;

use crate::components::header::scroll_to_section;
use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    let get_started = Callback::from(|_: MouseEvent| scroll_to_section("contact"));
    let view_services = Callback::from(|_: MouseEvent| scroll_to_section("services"));

    html! {
        <section class="hero" id="home">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        position: relative;
                        text-align: center;
                    }
                    .hero-content {
                        width: 100%;
                    }
                    .hero-title {
                        font-size: clamp(3rem, 8vw, 6rem);
                        font-weight: 900;
                        margin: 0;
                        animation: fadeInScale 1s ease 0.2s both;
                    }
                    .hero-domain {
                        color: #94a3b8;
                        letter-spacing: 0.2em;
                        animation: fadeIn 1s ease 0.4s both;
                    }
                    .hero-subtitle {
                        font-size: clamp(1.4rem, 3vw, 2.2rem);
                        color: #e2e8f0;
                        animation: fadeInUp 1s ease 0.6s both;
                    }
                    .hero-description {
                        max-width: 640px;
                        margin: 0 auto 2.5rem;
                        color: #94a3b8;
                        line-height: 1.7;
                        animation: fadeIn 1s ease 0.8s both;
                    }
                    .hero-cta {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                        animation: fadeInScale 0.8s ease 1s both;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        color: #94a3b8;
                        font-size: 0.85rem;
                        animation: fadeIn 1s ease 1.5s both;
                    }
                    .mouse {
                        width: 26px;
                        height: 42px;
                        margin: 0 auto 0.5rem;
                        border: 2px solid #94a3b8;
                        border-radius: 13px;
                        position: relative;
                    }
                    .wheel {
                        width: 4px;
                        height: 8px;
                        background: #00ffff;
                        border-radius: 2px;
                        position: absolute;
                        top: 8px;
                        left: 50%;
                        transform: translateX(-50%);
                        animation: wheel 1.6s ease infinite;
                    }
                    @keyframes wheel {
                        0% { opacity: 1; top: 8px; }
                        100% { opacity: 0; top: 24px; }
                    }
                    @keyframes fadeInScale {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
            <div class="container hero-content">
                <div class="hero-text">
                    <h1 class="hero-title">
                        <span class="gradient-text">{config::BRAND}</span>
                    </h1>
                    <p class="hero-domain">{config::DOMAIN}</p>
                    <h2 class="hero-subtitle">{"AI-Powered Solutions for Modern Business"}</h2>
                    <p class="hero-description">
                        {"Transforming businesses with cutting-edge automation, intelligent chatbots, \
                          calling agents, and blockchain technology"}
                    </p>
                    <div class="hero-cta">
                        <button class="btn btn-primary" onclick={get_started}>{"Get Started"}</button>
                        <button class="btn btn-secondary" onclick={view_services}>{"View Services"}</button>
                    </div>
                </div>

                <div class="scroll-indicator">
                    <div class="mouse">
                        <div class="wheel"></div>
                    </div>
                    <p>{"Scroll to explore"}</p>
                </div>
            </div>
        </section>
    }
}
