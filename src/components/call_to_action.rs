use yew::prelude::*;

use crate::content::images;

const TAGLINE: &str = "Share your goals with us — and let's create something that makes an impact";

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="cta-section">
            <div class="cta-background" style={format!("background-image: url({});", images::HERO)}></div>
            <div class="cta-content">
                <h2>{"Let's Do Projects Together!"}</h2>
                <p>{TAGLINE}</p>
                <a href="#contact" class="cta-button">{"Contact us"}</a>
            </div>
            <style>
                {r#"
                .cta-section {
                    position: relative;
                    padding: 5rem 1.5rem;
                    background: linear-gradient(to bottom right, #111827, #000);
                }
                .cta-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    opacity: 0.2;
                }
                .cta-content {
                    position: relative;
                    z-index: 10;
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .cta-content h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .cta-content p {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    margin: 0 auto 2rem;
                    max-width: 42rem;
                }
                .cta-button {
                    display: inline-block;
                    background: #fff;
                    color: #000;
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    font-size: 1.125rem;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagline_keeps_the_dash_separated_wording() {
        assert_eq!(
            TAGLINE,
            "Share your goals with us \u{2014} and let's create something that makes an impact"
        );
    }
}
