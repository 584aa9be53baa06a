use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::contact::mailto;
use crate::content::CONTACT_INFO;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let open_mail = Callback::from(|_: MouseEvent| mailto::open_email_client());

    html! {
        <section id="contact" class="contact">
            <div class="section-heading">
                <h2>{"Get In Touch"}</h2>
                <p>{"Ready to transform your business? Send us a message and we'll get back to you within 24 hours."}</p>
            </div>

            <div class="contact-grid">
                <div class="contact-card">
                    <ContactForm />
                </div>

                <div class="contact-aside">
                    <div class="contact-card">
                        <h3>{"Contact Information"}</h3>
                        <div class="contact-info-list">
                            { for CONTACT_INFO.iter().map(|item| html! {
                                <div key={item.title} class="contact-info-item">
                                    <div class="contact-info-title">{item.title}</div>
                                    {
                                        match item.url {
                                            Some(url) => html! {
                                                <a href={url} target="_blank" rel="noopener noreferrer" class="contact-info-link">
                                                    {item.content}
                                                </a>
                                            },
                                            None => html! {
                                                <div class="contact-info-content">{item.content}</div>
                                            },
                                        }
                                    }
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="contact-card contact-card--compact">
                        <h4>{"Quick Response"}</h4>
                        <p>
                            {"We typically respond to all inquiries within 24 hours. For urgent matters, please call us directly or use the email button."}
                        </p>
                        <button class="mail-button" onclick={open_mail}>{"Email us directly"}</button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact {
                    padding: 5rem 1.5rem;
                }
                .contact-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }
                .contact-aside {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-card {
                    background: #111827;
                    border-radius: 16px;
                    padding: 2rem;
                }
                .contact-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .contact-card--compact {
                    padding: 1.5rem;
                }
                .contact-card--compact h4 {
                    color: #22d3ee;
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                }
                .contact-card--compact p {
                    color: #d1d5db;
                    font-size: 0.875rem;
                    margin-bottom: 1rem;
                }
                .contact-info-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact-info-item {
                    padding: 1rem;
                    border-radius: 8px;
                    background: #1f2937;
                }
                .contact-info-title {
                    font-weight: 600;
                    color: #22d3ee;
                }
                .contact-info-content {
                    color: #d1d5db;
                }
                .contact-info-link {
                    color: #67e8f9;
                    text-decoration: underline;
                }
                .mail-button {
                    background: transparent;
                    color: #22d3ee;
                    border: 1px solid #22d3ee;
                    border-radius: 8px;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .contact-label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #d1d5db;
                    margin-bottom: 0.5rem;
                }
                .contact-input {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    background: #1f2937;
                    border: 1px solid #374151;
                    border-radius: 8px;
                    color: #fff;
                    box-sizing: border-box;
                }
                .contact-input:focus {
                    outline: none;
                    border-color: #06b6d4;
                }
                .contact-textarea {
                    resize: none;
                }
                .contact-submit {
                    width: 100%;
                    background: #06b6d4;
                    color: #fff;
                    font-weight: 600;
                    padding: 1rem 1.5rem;
                    border: none;
                    border-radius: 8px;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .contact-submit:hover {
                    background: #0891b2;
                }
                .contact-submit:disabled {
                    background: #4b5563;
                    cursor: not-allowed;
                }
                .contact-submit-busy {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                }
                .spinner {
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 50%;
                    border-bottom: 2px solid #fff;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                .form-notice {
                    padding: 1rem;
                    border-radius: 8px;
                    text-align: center;
                }
                .form-notice--success {
                    background: rgba(34, 197, 94, 0.2);
                    border: 1px solid rgba(34, 197, 94, 0.5);
                    color: #4ade80;
                }
                .form-notice--error {
                    background: rgba(239, 68, 68, 0.2);
                    border: 1px solid rgba(239, 68, 68, 0.5);
                    color: #f87171;
                }
                @media (max-width: 1024px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                @media (max-width: 768px) {
                    .contact-form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
