//! Fixed page content. Everything here is read-only and shared by reference.

use crate::config;

pub mod images {
    pub const LOGO: &str = "/images/logo.jpeg";
    pub const HERO: &str = "/images/hero-bg.jpg";
    pub const ABOUT: &str = "/images/about-us.gif";
    pub const ANALYTICS: &str = "/images/analytics.jpeg";
    pub const DESIGN: &str = "/images/design.png";
    pub const DEVELOPMENT: &str = "/images/development.jpg";
    pub const REQUIREMENTS: &str = "/images/requirements.webp";
    pub const SPRINT: &str = "/images/sprint.jpg";
    pub const REPORT: &str = "/images/report.jpeg";
    pub const COMMUNICATION: &str = "/images/communication.jpg";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfoItem {
    pub title: &'static str,
    pub content: &'static str,
    pub url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const SERVICES: [ServiceDescriptor; 3] = [
    ServiceDescriptor {
        title: "Product Strategy",
        description: "Define your vision with process mapping, data architecture, user journeys, and detailed product specifications",
        image: images::ANALYTICS,
    },
    ServiceDescriptor {
        title: "UX/UI Design",
        description: "Create engaging interfaces with user-centered wireframes, prototypes, and pixel-perfect visual designs",
        image: images::DESIGN,
    },
    ServiceDescriptor {
        title: "Full-Stack Development",
        description: "Build scalable applications with modern frameworks, cloud architecture, and performance-optimized code",
        image: images::DEVELOPMENT,
    },
];

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        number: "[01]",
        title: "Define & Align",
        description: "We begin by deeply understanding your goals and requirements, ensuring we're building the right solution from day one",
        image: images::REQUIREMENTS,
    },
    ProcessStep {
        number: "[02]",
        title: "Build & Iterate",
        description: "We develop in focused 2-week sprints, delivering tangible progress and working features for your review every iteration",
        image: images::SPRINT,
    },
    ProcessStep {
        number: "[03]",
        title: "Track & Update",
        description: "Receive clear weekly progress reports showing completed work, current priorities, and upcoming deliverables",
        image: images::REPORT,
    },
    ProcessStep {
        number: "[04]",
        title: "Connect & Collaborate",
        description: "Maintain direct access to our team through regular syncs and instant messaging—ensuring seamless communication throughout",
        image: images::COMMUNICATION,
    },
];

pub const CONTACT_INFO: [ContactInfoItem; 2] = [
    ContactInfoItem {
        title: "Location",
        content: "Dubai, United Arab Emirates",
        url: None,
    },
    ContactInfoItem {
        title: "Email",
        content: config::CONTACT_EMAIL,
        url: None,
    },
];

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "About", anchor: "#about" },
    NavItem { label: "Services", anchor: "#services" },
    NavItem { label: "Process", anchor: "#process" },
    NavItem { label: "Contact", anchor: "#contact" },
];

pub const TECH_STACK: [&str; 10] = [
    "React", "Next.js", "TypeScript", "Node.js", "Python",
    "Webflow", "Figma", "Flutter", "AWS", "MongoDB",
];

/// Index of the service whose details are on display.
///
/// Only in-range indices can be constructed, so `descriptor` never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceTab(usize);

impl ServiceTab {
    pub fn new(index: usize) -> Option<Self> {
        (index < SERVICES.len()).then_some(Self(index))
    }

    pub fn all() -> impl Iterator<Item = ServiceTab> {
        (0..SERVICES.len()).map(ServiceTab)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn descriptor(self) -> &'static ServiceDescriptor {
        &SERVICES[self.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_in_range_tab_maps_to_its_own_descriptor() {
        for i in 0..SERVICES.len() {
            let tab = ServiceTab::new(i).expect("index in range");
            assert_eq!(tab.index(), i);
            assert_eq!(tab.descriptor(), &SERVICES[i]);
        }
    }

    #[test]
    fn out_of_range_tab_is_not_constructible() {
        assert_eq!(ServiceTab::new(3), None);
        assert_eq!(ServiceTab::new(usize::MAX), None);
    }

    #[test]
    fn default_tab_is_product_strategy() {
        assert_eq!(ServiceTab::default().descriptor().title, "Product Strategy");
    }

    #[test]
    fn second_tab_is_ux_ui_design() {
        let tab = ServiceTab::new(1).unwrap();
        let service = tab.descriptor();
        assert_eq!(service.title, "UX/UI Design");
        assert_eq!(service.image, images::DESIGN);
        assert_ne!(service.description, SERVICES[0].description);
    }

    #[test]
    fn tabs_enumerate_in_order() {
        let titles: Vec<_> = ServiceTab::all().map(|t| t.descriptor().title).collect();
        assert_eq!(titles, vec!["Product Strategy", "UX/UI Design", "Full-Stack Development"]);
    }

    #[test]
    fn process_steps_are_numbered_sequentially() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.number, format!("[{:02}]", i + 1));
        }
    }

    #[test]
    fn collaboration_step_copy_is_verbatim() {
        assert_eq!(
            PROCESS_STEPS[3].description,
            "Maintain direct access to our team through regular syncs and instant messaging\u{2014}ensuring seamless communication throughout"
        );
    }

    #[test]
    fn nav_anchors_match_section_ids() {
        for item in NAV_ITEMS {
            assert_eq!(item.anchor, format!("#{}", item.label.to_lowercase()));
        }
    }
}
