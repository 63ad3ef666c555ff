//! Static copy and asset references rendered around the menu grid.

pub const SECTION_ID: &str = "menu";
pub const SECTION_SUBTITLE: &str = "Khmer Culinary Delights";
pub const SECTION_TITLE: &str = "Our Menu";
pub const SECTION_BLURB: &str = "Explore our authentic Cambodian dishes crafted with traditional techniques and the finest local ingredients";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
    pub class: &'static str,
}

pub const CALLS_TO_ACTION: &[CallToAction] = &[
    CallToAction {
        label: "Reserve a Table",
        href: "#reservation",
        class: "btn btn-primary",
    },
    CallToAction {
        label: "View Full Menu",
        href: "/full-menu.pdf",
        class: "btn btn-secondary",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoSource {
    pub src: &'static str,
    pub mime: &'static str,
    pub poster: &'static str,
    pub fallback_text: &'static str,
}

pub const BACKGROUND_VIDEO: VideoSource = VideoSource {
    src: "/video/menu.mp4",
    mime: "video/mp4",
    poster: "/images/menu-poster.jpg",
    fallback_text: "Your browser does not support the video tag.",
};
