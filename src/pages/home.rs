use yew::prelude::*;
use yew_hooks::prelude::*;
use log::{info, warn};

use crate::components::{
    about::About,
    call_to_action::CallToAction,
    contact_section::ContactSection,
    footer::Footer,
    hero::Hero,
    nav::Nav,
    process::Process,
    services::Services,
};
use crate::content::ServiceTab;
use crate::pointer::{PointerListener, PointerPosition};

/// Rules shared by several sections, e.g. the `.section-heading` title block.
const PAGE_STYLES: &str = r#"
html {
    scroll-behavior: smooth;
}
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.landing-page {
    min-height: 100vh;
    background: #000;
    color: #fff;
    overflow-x: hidden;
}
section[id] {
    scroll-margin-top: 4rem;
}
.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}
.section-heading h2 {
    font-size: 2.25rem;
    font-weight: 700;
    margin-bottom: 1rem;
}
.section-heading p {
    color: #9ca3af;
    max-width: 42rem;
    margin: 0 auto;
}
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let is_visible = use_state(|| false);
    let active_service = use_state(ServiceTab::default);
    let pointer = use_state(PointerPosition::default);

    {
        let is_visible = is_visible.clone();
        use_mount(move || {
            info!("Landing page mounted");
            is_visible.set(true);
        });
    }

    // Pointer tracking lives exactly as long as the page.
    {
        let pointer = pointer.clone();
        use_effect_with_deps(
            move |_| {
                let listener = PointerListener::subscribe(move |position| pointer.set(position));
                move || drop(listener)
            },
            (),
        );
    }

    let select_service = {
        let active_service = active_service.clone();
        Callback::from(move |index: usize| match ServiceTab::new(index) {
            Some(tab) => active_service.set(tab),
            None => warn!("Ignoring selection of unknown service tab {}", index),
        })
    };

    html! {
        <div class="landing-page">
            <Nav />
            <Hero is_visible={*is_visible} pointer={*pointer} />
            <About />
            <Services active={*active_service} on_select={select_service} />
            <Process />
            <CallToAction />
            <ContactSection />
            <Footer />
            <style>{PAGE_STYLES}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_styles_carry_the_shared_section_heading() {
        assert!(PAGE_STYLES.contains(".section-heading {"));
        assert!(PAGE_STYLES.contains(".section-heading h2 {"));
        assert!(PAGE_STYLES.contains(".section-heading p {"));
    }
}
