use yew::prelude::*;

use crate::components::nav::Brand;
use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <Brand />
                <div class="footer-copyright">
                    {format!("© 2024 {} LLC. All rights reserved.", config::COMPANY_NAME)}
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 1.5rem;
                    border-top: 1px solid #1f2937;
                }
                .footer-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .footer-copyright {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </footer>
    }
}
