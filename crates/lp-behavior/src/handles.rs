//! Element handles resolved once at startup.
//!
//! Every lookup is optional: a missing element disables only the behavior
//! that needs it.

use crate::page::{Page, selectors};
use lp_config::PageConfig;

#[derive(Clone)]
pub struct Handles<E> {
    pub header: Option<E>,
    pub body: Option<E>,

    // Navigation
    pub nav_toggle: Option<E>,
    pub main_nav: Option<E>,
    pub nav_links: Vec<E>,

    // Accordion
    pub accordion_button: Option<E>,
    pub accordion_content: Option<E>,
    pub accordion_label: Option<E>,
    pub accordion_container: Option<E>,

    // Table of contents
    pub sections: Vec<E>,
    pub toc_links: Vec<E>,
    pub mobile_toc_nav: Option<E>,
    pub toc_toggle: Option<E>,
    pub toc_list: Option<E>,
    pub toc_list_links: Vec<E>,

    // Modal
    pub modal: Option<E>,
    pub modal_title: Option<E>,
    pub modal_body: Option<E>,
    pub modal_close: Option<E>,

    // Call to action and forms
    pub cta: Option<E>,
    pub form_buttons: Vec<E>,

    pub anchors: Vec<E>,
    pub hero_images: Vec<E>,
    pub footer_year: Option<E>,
}

impl<E: Clone + PartialEq> Handles<E> {
    pub fn resolve<P>(page: &P, config: &PageConfig) -> Self
    where
        P: Page<Element = E>,
    {
        let accordion_button = page.query(selectors::ACCORDION_BUTTON);
        let accordion_label = accordion_button
            .as_ref()
            .and_then(|btn| page.query_within(btn, selectors::ACCORDION_LABEL));
        let toc_list = page.query(selectors::TOC_LIST);
        let toc_list_links = toc_list
            .as_ref()
            .map(|list| page.query_all_within(list, selectors::TOC_LIST_LINKS))
            .unwrap_or_default();

        Handles {
            header: page.query(selectors::HEADER),
            body: page.body(),

            nav_toggle: page.query(selectors::NAV_TOGGLE),
            main_nav: page.query(selectors::MAIN_NAV),
            nav_links: page.query_all(selectors::MAIN_NAV_LINKS),

            accordion_button,
            accordion_content: page.query(selectors::ACCORDION_CONTENT),
            accordion_label,
            accordion_container: page.query(selectors::ACCORDION_CONTAINER),

            sections: page.query_all(selectors::TRACKED_SECTIONS),
            toc_links: page.query_all(selectors::TOC_LINKS),
            mobile_toc_nav: page.query(selectors::MOBILE_TOC_NAV),
            toc_toggle: page.query(selectors::TOC_TOGGLE),
            toc_list,
            toc_list_links,

            modal: page.by_id(selectors::MODAL_ID),
            modal_title: page.query(selectors::MODAL_TITLE),
            modal_body: page.query(selectors::MODAL_BODY),
            modal_close: page.query(selectors::MODAL_CLOSE),

            cta: page.by_id(&config.cta.button_id),
            form_buttons: config
                .forms
                .button_ids
                .iter()
                .filter_map(|id| page.by_id(id))
                .collect(),

            anchors: page.query_all(selectors::SAME_PAGE_ANCHORS),
            hero_images: page.query_all(selectors::HERO_IMAGES),
            footer_year: page.by_id(selectors::FOOTER_YEAR_ID),
        }
    }
}
