use yew::prelude::*;

use crate::content::PROCESS_STEPS;

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="process">
            <div class="section-heading">
                <h2>{"Process & Management"}</h2>
                <p>{"Our process turns vision into results. With clear planning and transparent communication, we manage every step to deliver exactly what your product needs to succeed"}</p>
            </div>

            <div class="process-grid">
                { for PROCESS_STEPS.iter().map(|step| html! {
                    <div key={step.number} class="process-card">
                        <div class="process-image">
                            <img src={step.image} alt={step.title} />
                        </div>
                        <div class="process-body">
                            <div class="process-number">{step.number}</div>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                    </div>
                }) }
            </div>

            <style>
                {r#"
                .process {
                    padding: 5rem 1.5rem;
                    background: #111827;
                }
                .process-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .process-card {
                    background: #1f2937;
                    border-radius: 12px;
                    overflow: hidden;
                    transition: transform 0.3s ease;
                }
                .process-card:hover {
                    transform: scale(1.05);
                }
                .process-image {
                    height: 10rem;
                    background: #374151;
                    overflow: hidden;
                }
                .process-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .process-body {
                    padding: 1.5rem;
                }
                .process-number {
                    color: #22d3ee;
                    font-family: monospace;
                    font-size: 1.125rem;
                    margin-bottom: 1rem;
                }
                .process-body h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                }
                .process-body p {
                    color: #d1d5db;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                @media (max-width: 1024px) {
                    .process-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .process-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
