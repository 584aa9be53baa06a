use yew::prelude::*;

use crate::config;
use crate::content::{images, NAV_ITEMS};

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Brand />
                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a key={item.label} href={item.anchor} class="nav-link">{item.label}</a>
                    }) }
                </div>
                <a href="#contact" class="nav-cta">{"Contact us"}</a>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #1f2937;
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 4rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    color: #d1d5db;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .nav-cta {
                    background: #fff;
                    color: #000;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                }
                .nav-cta:hover {
                    background: #f3f4f6;
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

/// Logo plus wordmark, shared by the nav bar and the footer.
#[function_component(Brand)]
pub fn brand() -> Html {
    html! {
        <div class="brand">
            <img src={images::LOGO} alt={format!("{} Logo", config::COMPANY_NAME)} class="brand-logo" />
            <div class="brand-name">{config::COMPANY_NAME}</div>
            <style>
                {r#"
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .brand-logo {
                    height: 3.5rem;
                    width: auto;
                }
                .brand-name {
                    font-size: 1.25rem;
                    font-weight: 700;
                    background: linear-gradient(to right, #22d3ee, #3b82f6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                "#}
            </style>
        </div>
    }
}
