use yew::prelude::*;

use crate::content::{images, TECH_STACK};
use crate::pointer::PointerPosition;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub is_visible: bool,
    pub pointer: PointerPosition,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let background = format!(
        "background-image: linear-gradient(rgba(0, 0, 0, 0.7), rgba(0, 51, 102, 0.8)), url({});",
        images::HERO
    );

    html! {
        <section class="hero">
            <div class="hero-background" style={background}></div>
            <div class="hero-spotlight" style={props.pointer.spotlight_style()}></div>

            <div class={classes!("hero-content", props.is_visible.then(|| "is-visible"))}>
                <h1 class="hero-title">
                    {"Smart Solutions"}
                    <br />
                    <span class="hero-title-accent">{"For Smarter Businesses"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Design Support and Development for Modern Businesses. From Low-code websites to Full-stack Applications"}
                </p>
                <a href="#contact" class="hero-cta">{"Start Your Project"}</a>
            </div>

            <div class="marquee">
                <div class="marquee-track">
                    { for TECH_STACK.iter().map(|tech| html! {
                        <div class="marquee-item">{*tech}</div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    padding-top: 5rem;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    background-repeat: no-repeat;
                }
                .hero-spotlight {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    max-width: 56rem;
                    padding: 0 1rem;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .hero-content.is-visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .hero-title {
                    font-size: 4.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(to right, #fff, #d1d5db);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-title-accent {
                    background: linear-gradient(to right, #22d3ee, #3b82f6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    color: #d1d5db;
                    margin: 0 auto 2rem;
                    max-width: 42rem;
                }
                .hero-cta {
                    display: inline-block;
                    background: #fff;
                    color: #000;
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    font-weight: 600;
                    text-decoration: none;
                }
                .hero-cta:hover {
                    background: #f3f4f6;
                }
                .marquee {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 0;
                    right: 0;
                    overflow: hidden;
                }
                .marquee-track {
                    display: flex;
                    white-space: nowrap;
                    animation: marquee 30s linear infinite;
                }
                .marquee-item {
                    margin: 0 2rem;
                    color: #9ca3af;
                    font-size: 1.125rem;
                    font-weight: 500;
                }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 3rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
