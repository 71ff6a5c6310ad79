//! Element lookup abstraction.
//!
//! Behaviors never touch a concrete document. They resolve and mutate
//! elements through [`Page`], which the browser host implements over
//! `web-sys` and tests implement with [`crate::memory::MemoryPage`].

/// Selectors the landing page markup is expected to expose.
pub mod selectors {
    pub const NAV_TOGGLE: &str = ".nav-toggle";
    pub const MAIN_NAV: &str = ".main-nav";
    pub const MAIN_NAV_LINKS: &str = ".main-nav a";
    pub const HEADER: &str = ".main-header";

    pub const ACCORDION_BUTTON: &str = ".accordion-read-more-btn";
    pub const ACCORDION_CONTENT: &str = ".accordion-content";
    pub const ACCORDION_LABEL: &str = ".btn-text";
    pub const ACCORDION_CONTAINER: &str = ".single-accordion-container";

    pub const TRACKED_SECTIONS: &str = "section[id]";
    pub const TOC_LINKS: &str = ".toc-link";
    pub const TOC_LINK_CLASS: &str = "toc-link";

    pub const HERO_IMAGES: &str = ".hero-bg-image";

    pub const MODAL_ID: &str = "infoModal";
    pub const MODAL_TITLE: &str = ".modal-title";
    pub const MODAL_BODY: &str = ".modal-body";
    pub const MODAL_CLOSE: &str = ".modal-close";
    pub const MODAL_OVERLAY_CLASS: &str = "modal-overlay";

    pub const SAME_PAGE_ANCHORS: &str = "a[href^=\"#\"]";

    pub const MOBILE_TOC_NAV: &str = ".mobile-toc-nav";
    pub const TOC_TOGGLE: &str = ".toc-toggle-btn";
    pub const TOC_LIST: &str = ".toc-list";
    pub const TOC_LIST_LINKS: &str = "a";

    pub const FOOTER_YEAR_ID: &str = "current-year";
}

/// Marker classes toggled on elements; their visual meaning lives in CSS.
pub mod markers {
    pub const ACTIVE: &str = "active";
    pub const VISIBLE: &str = "visible";
}

pub trait Page {
    type Element: Clone + PartialEq;

    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    fn query_within(&self, parent: &Self::Element, selector: &str) -> Option<Self::Element>;
    fn query_all_within(&self, parent: &Self::Element, selector: &str) -> Vec<Self::Element>;
    fn by_id(&self, id: &str) -> Option<Self::Element>;
    fn body(&self) -> Option<Self::Element>;
    /// Nearest inclusive ancestor of `el` matching `selector`.
    fn closest(&self, el: &Self::Element, selector: &str) -> Option<Self::Element>;

    fn has_class(&self, el: &Self::Element, class: &str) -> bool;
    fn add_class(&self, el: &Self::Element, class: &str);
    fn remove_class(&self, el: &Self::Element, class: &str);
    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&self, el: &Self::Element, class: &str) -> bool;

    fn attribute(&self, el: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&self, el: &Self::Element, name: &str, value: &str);
    fn set_text(&self, el: &Self::Element, text: &str);
    fn set_inner_html(&self, el: &Self::Element, html: &str);

    fn set_style(&self, el: &Self::Element, property: &str, value: &str);
    fn clear_style(&self, el: &Self::Element, property: &str);

    /// Top offset relative to the document.
    fn offset_top(&self, el: &Self::Element) -> f64;
    fn offset_height(&self, el: &Self::Element) -> f64;
    /// Top offset relative to the viewport.
    fn bounding_top(&self, el: &Self::Element) -> f64;

    fn viewport_width(&self) -> f64;
    fn scroll_y(&self) -> f64;
    fn scroll_to_smooth(&self, top: f64);
    fn location_hash(&self) -> String;

    fn open_in_new_context(&self, url: &str);
    fn current_year(&self) -> i32;

    fn set_class(&self, el: &Self::Element, class: &str, present: bool) {
        if present {
            self.add_class(el, class);
        } else {
            self.remove_class(el, class);
        }
    }
}
