// Element ids of the host page regions the binders write into.

pub const ABOUT_LABEL: &str = "cms-about-label";
pub const ABOUT_TITLE: &str = "cms-about-title";
pub const ABOUT_P1: &str = "cms-about-p1";
pub const ABOUT_P2: &str = "cms-about-p2";
pub const ABOUT_STATS: &str = "cms-about-stats";
pub const ABOUT_PHOTO: &str = "cms-about-photo";

pub const GALLERY: &str = "cms-gallery";

pub const MENU_TABS: &str = "cms-menu-tabs";
pub const MENU_INNER: &str = "cms-menu-inner";

pub const FOOTER_TAGLINE: &str = "cms-footer-tagline";
pub const FOOTER_MOTTO: &str = "cms-footer-motto";
pub const FOOTER_HOURS: &str = "cms-footer-hours";
pub const FOOTER_CONTACT: &str = "cms-footer-contact";
pub const FOOTER_SOCIALS: &str = "cms-footer-socials";

pub const INSTAGRAM_HANDLE: &str = "cms-instagram-handle";
pub const INSTAGRAM_GRID: &str = "cms-instagram-grid";

/// Every region, in binding order. Used by the boot check.
pub const ALL: &[&str] = &[
    ABOUT_LABEL,
    ABOUT_TITLE,
    ABOUT_P1,
    ABOUT_P2,
    ABOUT_STATS,
    ABOUT_PHOTO,
    GALLERY,
    MENU_TABS,
    MENU_INNER,
    FOOTER_TAGLINE,
    FOOTER_MOTTO,
    FOOTER_HOURS,
    FOOTER_CONTACT,
    FOOTER_SOCIALS,
    INSTAGRAM_HANDLE,
    INSTAGRAM_GRID,
];
