use yew::prelude::*;

use crate::config;
use crate::content::images;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="about-grid">
                <div>
                    <img src={images::ABOUT} alt={format!("About {}", config::COMPANY_NAME)} class="about-image" />
                </div>
                <div>
                    <h2 class="about-title">
                        {"END-TO-END DIGITAL SOLUTIONS"}
                        <br />
                        {"TRANSFORMING IDEAS"}
                        <br />
                        {"INTO EXCEPTIONAL PRODUCTS"}
                    </h2>
                    <p class="about-text">
                        {"A remarkable product needs a digital presence to match. We partner with you to translate your vision into a powerful online experience that drives growth and establishes your leadership."}
                    </p>
                </div>
            </div>
            <style>
                {r#"
                .about {
                    padding: 5rem 0;
                }
                .about-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .about-image {
                    width: 100%;
                    border-radius: 16px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }
                .about-title {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .about-text {
                    font-size: 1.25rem;
                    color: #d1d5db;
                }
                @media (max-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                    .about-title {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
