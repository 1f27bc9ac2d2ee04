use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;

const SERVICE_LINKS: [(&str, &str); 6] = [
    ("Automations", "#automations"),
    ("Lead Engagement", "#lead-engagement"),
    ("AI Chatbots", "#ai-chatbots"),
    ("AI Calling Agents", "#ai-calling"),
    ("API Integrations", "#api"),
    ("Blockchain Services", "#blockchain"),
];

const COMPANY_LINKS: [(&str, &str); 4] = [
    ("About Us", "#about"),
    ("Portfolio", "#portfolio"),
    ("Careers", "#careers"),
    ("Blog", "#blog"),
];

const SOCIAL_LINKS: [(&str, &str); 3] = [("LinkedIn", "💼"), ("Twitter", "🐦"), ("GitHub", "💻")];

pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::BRAND)
}

fn link_list(links: &[(&'static str, &'static str)]) -> Html {
    html! {
        <ul>
            { for links.iter().map(|(label, href)| html! {
                <li key={*href}><a href={*href}>{*label}</a></li>
            }) }
        </ul>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer" id="about">
            <style>
                {r#"
                    .footer {
                        position: relative;
                        padding: 4rem 0 2rem;
                        border-top: 1px solid rgba(0, 255, 255, 0.1);
                        background: rgba(10, 10, 26, 0.8);
                    }
                    .footer-content {
                        display: grid;
                        grid-template-columns: 1.2fr 2fr;
                        gap: 3rem;
                        margin-bottom: 3rem;
                    }
                    .footer-links {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .footer-column h4 {
                        color: #e2e8f0;
                        margin-bottom: 1rem;
                    }
                    .footer-column ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .footer-column li {
                        margin-bottom: 0.6rem;
                    }
                    .footer a {
                        color: #94a3b8;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .footer a:hover {
                        color: #00ffff;
                    }
                    .social-links {
                        display: flex;
                        gap: 1rem;
                        margin-top: 1rem;
                        font-size: 1.3rem;
                    }
                    .footer-bottom {
                        display: flex;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        gap: 1rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(148, 163, 184, 0.1);
                        color: #64748b;
                        font-size: 0.9rem;
                    }
                    .footer-legal {
                        display: flex;
                        gap: 0.8rem;
                    }
                    @media (max-width: 768px) {
                        .footer-content,
                        .footer-links {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-content">
                    <div class="footer-brand">
                        <h3 class="footer-logo gradient-text">{config::BRAND}</h3>
                        <p class="footer-domain">{config::DOMAIN}</p>
                        <p class="footer-tagline">{"Transforming businesses with AI-powered solutions"}</p>
                    </div>

                    <div class="footer-links">
                        <div class="footer-column">
                            <h4>{"Services"}</h4>
                            { link_list(&SERVICE_LINKS) }
                        </div>
                        <div class="footer-column">
                            <h4>{"Company"}</h4>
                            { link_list(&COMPANY_LINKS) }
                        </div>
                        <div class="footer-column">
                            <h4>{"Connect"}</h4>
                            <ul>
                                <li><a href="#contact">{"Contact"}</a></li>
                                <li><a href="#support">{"Support"}</a></li>
                                <li>
                                    <a href={format!("mailto:{}", config::INFO_EMAIL)}>{config::INFO_EMAIL}</a>
                                </li>
                            </ul>
                            <div class="social-links">
                                { for SOCIAL_LINKS.iter().map(|(label, icon)| html! {
                                    <a key={*label} href="#" aria-label={*label}>{*icon}</a>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{copyright(year)}</p>
                    <div class="footer-legal">
                        <a href="#privacy">{"Privacy Policy"}</a>
                        <span>{"•"}</span>
                        <a href="#terms">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line_carries_year_and_brand() {
        assert_eq!(copyright(2026), "© 2026 NetDevTech. All rights reserved.");
    }
}
