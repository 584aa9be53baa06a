use yew::prelude::*;

use crate::content::ServiceTab;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub active: ServiceTab,
    pub on_select: Callback<usize>,
}

/// Tab strip over the fixed service list; only the active service's details are shown.
#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let active = props.active.descriptor();

    html! {
        <section id="services" class="services">
            <div class="section-heading">
                <h2>{"Services"}</h2>
                <p>{"Comprehensive solutions for your digital needs"}</p>
            </div>

            <div class="services-body">
                <div class="service-tabs">
                    { for ServiceTab::all().map(|tab| {
                        let index = tab.index();
                        let onclick = {
                            let on_select = props.on_select.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(index))
                        };
                        html! {
                            <button
                                key={index}
                                class={classes!("service-tab", (tab == props.active).then(|| "active"))}
                                onclick={onclick}
                            >
                                {tab.descriptor().title}
                            </button>
                        }
                    }) }
                </div>

                <div class="service-panel">
                    <div>
                        <h3>{active.title}</h3>
                        <p>{active.description}</p>
                    </div>
                    <div class="service-image">
                        <img src={active.image} alt={active.title} />
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .services {
                    padding: 5rem 1.5rem;
                    background: #111827;
                }
                .services-body {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .service-tabs {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .service-tab {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 8px;
                    font-weight: 500;
                    cursor: pointer;
                    background: #1f2937;
                    color: #d1d5db;
                    transition: background 0.3s ease;
                }
                .service-tab:hover {
                    background: #374151;
                }
                .service-tab.active {
                    background: #fff;
                    color: #000;
                }
                .service-panel {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    align-items: center;
                }
                .service-panel h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .service-panel p {
                    color: #d1d5db;
                    font-size: 1.125rem;
                    line-height: 1.6;
                }
                .service-image {
                    background: #374151;
                    border-radius: 12px;
                    overflow: hidden;
                }
                .service-image img {
                    width: 100%;
                    height: 16rem;
                    object-fit: cover;
                }
                @media (max-width: 768px) {
                    .service-panel {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
