use lp_behavior::memory::{ManualScheduler, MemoryPage, NodeId};
use lp_behavior::page::Page;
use lp_behavior::{Dispatch, Landing, PageConfig, Scheduler, TaskKey};
use lp_config::CtaPolicy;

struct Ids {
    header: NodeId,
    nav_toggle: NodeId,
    main_nav: NodeId,
    nav_link: NodeId,
    toc_toggle: NodeId,
    toc_list: NodeId,
    toc_links: [NodeId; 3],
    accordion_container: NodeId,
    accordion_button: NodeId,
    accordion_label: NodeId,
    accordion_content: NodeId,
    modal: NodeId,
    modal_overlay: NodeId,
    modal_title: NodeId,
    modal_body: NodeId,
    modal_inner: NodeId,
    cta: NodeId,
    hero_button: NodeId,
    footer_year: NodeId,
    hero_images: [NodeId; 3],
    plain: NodeId,
}

fn build_page(width: f64) -> (MemoryPage, Ids) {
    let page = MemoryPage::new(width);

    let header = page.create(None, "header.main-header");
    page.set_geometry(header, 0.0, 80.0);
    let nav_toggle = page.create(Some(header), "button.nav-toggle");
    let main_nav = page.create(Some(header), "nav.main-nav");
    let nav_link = page.create(Some(main_nav), "a[href=\"#safety\"]");

    let hero = page.create(None, "div.hero");
    let hero_images = [
        page.create(Some(hero), "img.hero-bg-image.active"),
        page.create(Some(hero), "img.hero-bg-image"),
        page.create(Some(hero), "img.hero-bg-image"),
    ];
    let hero_button = page.create(Some(hero), "button#openGoogleFormHero");

    let mobile_toc = page.create(None, "nav.mobile-toc-nav");
    let toc_toggle = page.create(Some(mobile_toc), "button.toc-toggle-btn[aria-expanded=\"false\"]");
    let toc_list = page.create(Some(mobile_toc), "ul.toc-list");
    let toc_links = [
        page.create(Some(toc_list), "a.toc-link[href=\"#intro\"]"),
        page.create(Some(toc_list), "a.toc-link[href=\"#safety\"]"),
        page.create(Some(toc_list), "a.toc-link[href=\"#nuclear-power\"]"),
    ];

    let intro = page.create(None, "section#intro");
    page.set_geometry(intro, 0.0, 800.0);
    let plain = page.create(Some(intro), "p");
    let safety = page.create(None, "section#safety");
    page.set_geometry(safety, 800.0, 800.0);
    let power = page.create(None, "section#nuclear-power");
    page.set_geometry(power, 1600.0, 900.0);
    let accordion_container = page.create(Some(power), "div.single-accordion-container");
    page.set_geometry(accordion_container, 1650.0, 400.0);
    let accordion_button = page.create(Some(accordion_container), "button.accordion-read-more-btn");
    let accordion_label = page.create(Some(accordion_button), "span.btn-text");
    page.set_text(&accordion_label, "Read More");
    let accordion_content = page.create(Some(accordion_container), "div.accordion-content");

    let modal = page.create(None, "div#infoModal.modal");
    let modal_overlay = page.create(Some(modal), "div.modal-overlay");
    let modal_box = page.create(Some(modal), "div.modal-content");
    let modal_title = page.create(Some(modal_box), "h2.modal-title");
    let modal_body = page.create(Some(modal_box), "div.modal-body");
    let modal_inner = page.create(Some(modal_body), "p");
    page.create(Some(modal_box), "button.modal-close");

    let cta = page.create(None, "button#openGoogleFormSidebar");
    let footer_year = page.create(None, "span#current-year");

    let ids = Ids {
        header,
        nav_toggle,
        main_nav,
        nav_link,
        toc_toggle,
        toc_list,
        toc_links,
        accordion_container,
        accordion_button,
        accordion_label,
        accordion_content,
        modal,
        modal_overlay,
        modal_title,
        modal_body,
        modal_inner,
        cta,
        hero_button,
        footer_year,
        hero_images,
        plain,
    };
    (page, ids)
}

fn landing_with(width: f64, hash: &str, config: PageConfig) -> (Landing<MemoryPage, ManualScheduler>, Ids) {
    let (page, ids) = build_page(width);
    page.set_hash(hash);
    let mut landing = Landing::new(page, ManualScheduler::default(), config);
    assert!(landing.init().is_empty());
    (landing, ids)
}

fn landing(width: f64) -> (Landing<MemoryPage, ManualScheduler>, Ids) {
    landing_with(width, "", PageConfig::default())
}

fn active_toc_links(landing: &Landing<MemoryPage, ManualScheduler>, ids: &Ids) -> Vec<NodeId> {
    ids.toc_links
        .iter()
        .copied()
        .filter(|link| landing.page().has_class(link, "active"))
        .collect()
}

fn scroll_to(landing: &mut Landing<MemoryPage, ManualScheduler>, y: f64) {
    landing.page().set_scroll_y(y);
    landing.on_scroll();
}

#[test]
fn toc_highlights_last_section_scrolled_past() {
    let (mut landing, ids) = landing(1200.0);
    assert_eq!(active_toc_links(&landing, &ids), vec![ids.toc_links[0]]);

    scroll_to(&mut landing, 699.0);
    assert_eq!(active_toc_links(&landing, &ids), vec![ids.toc_links[0]]);

    scroll_to(&mut landing, 700.0);
    assert_eq!(active_toc_links(&landing, &ids), vec![ids.toc_links[1]]);

    scroll_to(&mut landing, 5_000.0);
    assert_eq!(active_toc_links(&landing, &ids), vec![ids.toc_links[2]]);

    scroll_to(&mut landing, 0.0);
    assert_eq!(active_toc_links(&landing, &ids), vec![ids.toc_links[0]]);
}

#[test]
fn toc_markers_frozen_below_desktop_width() {
    let (mut landing, ids) = landing(992.0);
    assert!(active_toc_links(&landing, &ids).is_empty());

    landing.page().add_class(&ids.toc_links[2], "active");
    for y in [0.0, 750.0, 1_700.0, 300.0] {
        scroll_to(&mut landing, y);
        assert_eq!(active_toc_links(&landing, &ids), vec![ids.toc_links[2]]);
    }
}

#[test]
fn toc_click_scrolls_below_header_on_desktop() {
    let (mut landing, ids) = landing(1200.0);

    let dispatch = landing.on_toc_link_click(&ids.toc_links[1]);
    assert_eq!(dispatch, Dispatch::PREVENT);
    assert_eq!(landing.page().scrolls(), vec![800.0 - 80.0 - 20.0]);
    assert_eq!(active_toc_links(&landing, &ids), vec![ids.toc_links[1]]);
}

#[test]
fn toc_click_keeps_header_gap_when_anchor_handler_also_runs() {
    let (mut landing, ids) = landing(1200.0);

    assert_eq!(landing.on_toc_link_click(&ids.toc_links[1]), Dispatch::PREVENT);
    assert_eq!(landing.on_anchor_click(&ids.toc_links[1]), Dispatch::NONE);
    assert_eq!(landing.page().scrolls(), vec![800.0 - 80.0 - 20.0]);
}

#[test]
fn narrow_toc_link_falls_through_to_anchor_scroll() {
    let (mut landing, ids) = landing(992.0);

    assert_eq!(landing.on_toc_link_click(&ids.toc_links[1]), Dispatch::NONE);
    assert_eq!(landing.on_anchor_click(&ids.toc_links[1]), Dispatch::PREVENT);
    assert_eq!(landing.page().scrolls(), vec![800.0 - 80.0]);
}

#[test]
fn toc_click_uses_default_navigation_on_narrow_viewports() {
    let (mut landing, ids) = landing(992.0);

    assert_eq!(landing.on_toc_link_click(&ids.toc_links[1]), Dispatch::NONE);
    assert!(landing.page().scrolls().is_empty());
}

#[test]
fn accordion_double_toggle_round_trips() {
    let (mut landing, ids) = landing(1200.0);
    let page_state = |landing: &Landing<MemoryPage, ManualScheduler>| {
        (
            landing.page().has_class(&ids.accordion_button, "active"),
            landing.page().has_class(&ids.accordion_content, "active"),
            landing.page().text(ids.accordion_label),
        )
    };
    let initial = page_state(&landing);

    assert_eq!(landing.on_accordion_click(), Dispatch::STOP);
    assert_eq!(
        page_state(&landing),
        (true, true, "Show Less".to_owned())
    );

    landing.on_accordion_click();
    assert_eq!(page_state(&landing), initial);
}

#[test]
fn accordion_expand_scrolls_after_delay() {
    let (mut landing, ids) = landing(1200.0);
    landing.page().set_scroll_y(1000.0);

    landing.on_accordion_click();
    landing.advance(299);
    assert!(landing.page().scrolls().is_empty());

    landing.advance(1);
    // bounding top (650) + scroll (1000) - header (80) - gap (20)
    assert_eq!(landing.page().scrolls(), vec![1550.0]);
    assert!(landing.page().offset_top(&ids.accordion_container) - landing.page().scroll_y() >= 80.0);
}

#[test]
fn accordion_retrigger_replaces_pending_scroll() {
    let (mut landing, _ids) = landing(1200.0);

    landing.on_accordion_click();
    landing.advance(200);
    landing.on_accordion_click();
    assert!(!landing.scheduler().is_pending(TaskKey::AccordionScroll));
    landing.advance(500);
    assert!(landing.page().scrolls().is_empty());

    landing.on_accordion_click();
    landing.advance(200);
    landing.on_accordion_click();
    landing.on_accordion_click();
    landing.advance(1_000);
    assert_eq!(landing.page().scrolls().len(), 1);
}

#[test]
fn accordion_keyboard_activation() {
    let (mut landing, ids) = landing(1200.0);

    assert_eq!(landing.on_accordion_keydown("Tab"), Dispatch::NONE);
    assert!(!landing.is_accordion_expanded());

    assert_eq!(landing.on_accordion_keydown("Enter"), Dispatch::PREVENT);
    assert!(landing.is_accordion_expanded());
    assert_eq!(landing.page().text(ids.accordion_label), "Show Less");

    assert_eq!(landing.on_accordion_keydown(" "), Dispatch::PREVENT);
    assert!(!landing.is_accordion_expanded());
    assert_eq!(landing.page().text(ids.accordion_label), "Read More");
}

#[test]
fn accordion_auto_opens_on_matching_fragment() {
    let (mut landing, ids) = landing_with(1200.0, "#nuclear-power", PageConfig::default());

    landing.advance(499);
    assert!(!landing.is_accordion_expanded());

    landing.advance(1);
    assert!(landing.is_accordion_expanded());
    assert_eq!(landing.page().text(ids.accordion_label), "Show Less");
    assert!(landing.page().scrolls().is_empty());

    landing.advance(100);
    assert_eq!(landing.page().scrolls(), vec![1650.0 - 80.0 - 20.0]);
    let gap = landing.page().offset_top(&ids.accordion_container) - landing.page().scroll_y();
    assert!((gap - 100.0).abs() < f64::EPSILON);
}

#[test]
fn collapse_during_auto_open_cancels_pending_scroll() {
    let (mut landing, ids) = landing_with(1200.0, "#nuclear-power", PageConfig::default());

    landing.advance(500);
    assert!(landing.is_accordion_expanded());
    assert!(landing.scheduler().is_pending(TaskKey::AutoOpenScroll));

    landing.on_document_click(&ids.plain);
    assert!(!landing.is_accordion_expanded());
    assert!(!landing.scheduler().is_pending(TaskKey::AutoOpenScroll));
    assert!(landing.state().auto_open_target.is_none());

    landing.advance(100);
    assert!(landing.page().scrolls().is_empty());
}

#[test]
fn other_fragments_do_not_auto_open() {
    let (mut landing, _ids) = landing_with(1200.0, "#safety", PageConfig::default());
    landing.advance(2_000);
    assert!(!landing.is_accordion_expanded());
    assert!(landing.page().scrolls().is_empty());
}

#[test]
fn outside_click_collapses_accordion() {
    let (mut landing, ids) = landing(1200.0);
    landing.on_accordion_click();

    landing.on_document_click(&ids.accordion_content);
    assert!(landing.is_accordion_expanded());

    landing.on_document_click(&ids.plain);
    assert!(!landing.is_accordion_expanded());
    assert_eq!(landing.page().text(ids.accordion_label), "Read More");
    assert!(!landing.scheduler().is_pending(TaskKey::AccordionScroll));
}

fn open_and_check(landing: &mut Landing<MemoryPage, ManualScheduler>, ids: &Ids) {
    landing.open_modal("Fuel cycle", "<p>Uranium</p>");
    assert!(landing.is_modal_open());
    assert_eq!(landing.page().text(ids.modal_title), "Fuel cycle");
    assert_eq!(landing.page().html(ids.modal_body), "<p>Uranium</p>");
    let body = landing.page().body_id();
    assert_eq!(landing.page().style(body, "overflow").as_deref(), Some("hidden"));
}

fn assert_closed(landing: &Landing<MemoryPage, ManualScheduler>) {
    assert!(!landing.is_modal_open());
    let body = landing.page().body_id();
    assert_eq!(landing.page().style(body, "overflow").as_deref(), Some("auto"));
}

#[test]
fn modal_close_paths_converge() {
    let (mut landing, ids) = landing(1200.0);

    open_and_check(&mut landing, &ids);
    landing.on_modal_close_click();
    assert_closed(&landing);

    open_and_check(&mut landing, &ids);
    landing.on_modal_click(&ids.modal_overlay);
    assert_closed(&landing);

    open_and_check(&mut landing, &ids);
    landing.on_modal_click(&ids.modal);
    assert_closed(&landing);

    open_and_check(&mut landing, &ids);
    landing.on_document_keydown("Escape");
    assert_closed(&landing);
}

#[test]
fn modal_ignores_clicks_inside_content_and_other_keys() {
    let (mut landing, ids) = landing(1200.0);
    open_and_check(&mut landing, &ids);

    landing.on_modal_click(&ids.modal_inner);
    landing.on_document_keydown("Enter");
    assert!(landing.is_modal_open());
}

#[test]
fn escape_without_open_modal_leaves_body_alone() {
    let (mut landing, _ids) = landing(1200.0);
    landing.on_document_keydown("Escape");
    let body = landing.page().body_id();
    assert_eq!(landing.page().style(body, "overflow"), None);
}

#[test]
fn cta_threshold_policy() {
    let (mut landing, ids) = landing(1200.0);
    assert!(!landing.page().has_class(&ids.cta, "visible"));

    scroll_to(&mut landing, 501.0);
    assert!(landing.page().has_class(&ids.cta, "visible"));

    scroll_to(&mut landing, 400.0);
    assert!(!landing.page().has_class(&ids.cta, "visible"));

    scroll_to(&mut landing, 500.0);
    assert!(!landing.is_cta_visible());
}

#[test]
fn cta_threshold_applies_at_startup() {
    let (page, ids) = build_page(1200.0);
    page.set_scroll_y(900.0);
    let mut landing = Landing::new(page, ManualScheduler::default(), PageConfig::default());
    landing.init();
    assert!(landing.page().has_class(&ids.cta, "visible"));
}

fn direction_config() -> PageConfig {
    let mut config = PageConfig::default();
    config.cta.policy = CtaPolicy::Direction { min_delta: 50.0 };
    config
}

#[test]
fn cta_direction_policy_follows_scroll_direction() {
    let (mut landing, ids) = landing_with(700.0, "", direction_config());
    assert!(landing.is_cta_visible());
    assert_eq!(landing.page().style(ids.cta, "opacity"), None);

    scroll_to(&mut landing, 40.0);
    assert!(landing.is_cta_visible());

    scroll_to(&mut landing, 200.0);
    assert!(!landing.is_cta_visible());
    assert_eq!(landing.page().style(ids.cta, "opacity").as_deref(), Some("0"));
    assert_eq!(landing.page().style(ids.cta, "pointer-events").as_deref(), Some("none"));

    scroll_to(&mut landing, 120.0);
    assert!(landing.is_cta_visible());
    assert_eq!(landing.page().style(ids.cta, "opacity").as_deref(), Some("1"));
    assert_eq!(landing.page().style(ids.cta, "transform").as_deref(), Some("translateY(0)"));
}

#[test]
fn cta_direction_policy_ignored_on_desktop() {
    let (mut landing, ids) = landing_with(1200.0, "", direction_config());
    scroll_to(&mut landing, 2_000.0);
    assert!(landing.is_cta_visible());
    assert_eq!(landing.page().style(ids.cta, "opacity"), None);
    assert!(!landing.page().has_class(&ids.cta, "visible"));
}

#[test]
fn cta_layout_follows_breakpoints() {
    let (mut landing, ids) = landing_with(400.0, "", direction_config());
    assert_eq!(landing.page().style(ids.cta, "width").as_deref(), Some("calc(100% - 32px)"));
    assert_eq!(landing.page().style(ids.cta, "left").as_deref(), Some("16px"));

    landing.page().set_viewport_width(800.0);
    landing.on_resize();
    assert_eq!(landing.page().style(ids.cta, "width").as_deref(), Some("auto"));
    assert_eq!(landing.page().style(ids.cta, "right").as_deref(), Some("24px"));
    assert_eq!(landing.page().style(ids.cta, "padding").as_deref(), Some("16px 28px"));

    scroll_to(&mut landing, 300.0);
    assert!(!landing.is_cta_visible());

    landing.page().set_viewport_width(1400.0);
    landing.on_resize();
    assert_eq!(landing.page().style(ids.cta, "width"), None);
    assert_eq!(landing.page().style(ids.cta, "opacity"), None);
    assert!(landing.is_cta_visible());
}

#[test]
fn threshold_policy_never_touches_layout() {
    let (mut landing, ids) = landing(400.0);
    landing.on_resize();
    assert_eq!(landing.page().style(ids.cta, "width"), None);
}

#[test]
fn narrow_nav_toggle_and_link_close() {
    let (mut landing, ids) = landing(500.0);

    landing.on_nav_toggle_click();
    assert!(landing.page().has_class(&ids.main_nav, "active"));
    assert!(landing.page().has_class(&ids.nav_toggle, "active"));

    landing.on_nav_link_click();
    assert!(!landing.page().has_class(&ids.main_nav, "active"));
    assert!(!landing.page().has_class(&ids.nav_toggle, "active"));
}

#[test]
fn nav_link_click_keeps_nav_on_wide_viewports() {
    let (mut landing, ids) = landing(1200.0);
    landing.on_nav_toggle_click();
    landing.on_nav_link_click();
    assert!(landing.page().has_class(&ids.main_nav, "active"));

    landing.on_nav_toggle_click();
    assert!(!landing.is_nav_open());
    assert!(!landing.page().has_class(&ids.nav_toggle, "active"));
}

#[test]
fn outside_click_closes_narrow_nav() {
    let (mut landing, ids) = landing(500.0);
    landing.on_nav_toggle_click();

    landing.on_document_click(&ids.nav_toggle);
    landing.on_document_click(&ids.nav_link);
    assert!(landing.is_nav_open());

    landing.on_document_click(&ids.plain);
    assert!(!landing.is_nav_open());
    assert!(!landing.page().has_class(&ids.nav_toggle, "active"));
}

#[test]
fn outside_click_keeps_nav_on_wide_viewports() {
    let (mut landing, ids) = landing(1200.0);
    landing.on_nav_toggle_click();
    landing.on_document_click(&ids.plain);
    assert!(landing.is_nav_open());
}

#[test]
fn anchor_scrolls_and_closes_menus() {
    let (mut landing, ids) = landing(700.0);
    landing.page().set_scroll_y(100.0);
    landing.on_nav_toggle_click();
    landing.on_toc_toggle_click();
    assert!(landing.is_mobile_toc_open());

    let dispatch = landing.on_anchor_click(&ids.nav_link);
    assert_eq!(dispatch, Dispatch::PREVENT);
    // bounding top (700) + scroll (100) - header (80)
    assert_eq!(landing.page().scrolls(), vec![720.0]);
    assert!(!landing.is_nav_open());
    assert!(!landing.is_mobile_toc_open());
    assert_eq!(
        landing.page().attribute(&ids.toc_toggle, "aria-expanded").as_deref(),
        Some("false")
    );
}

#[test]
fn bare_hash_and_dangling_anchors_are_not_intercepted() {
    let (page, _ids) = build_page(1200.0);
    let bare = page.create(None, "a[href=\"#\"]");
    let dangling = page.create(None, "a[href=\"#nowhere\"]");
    let mut landing = Landing::new(page, ManualScheduler::default(), PageConfig::default());
    landing.init();

    assert_eq!(landing.handles().anchors.len(), 6);
    assert_eq!(landing.on_anchor_click(&bare), Dispatch::NONE);
    assert_eq!(landing.on_anchor_click(&dangling), Dispatch::NONE);
    assert!(landing.page().scrolls().is_empty());
}

#[test]
fn mobile_toc_toggle_and_link_close() {
    let (mut landing, ids) = landing(700.0);

    landing.on_toc_toggle_click();
    assert!(landing.page().has_class(&ids.toc_list, "active"));
    assert_eq!(
        landing.page().attribute(&ids.toc_toggle, "aria-expanded").as_deref(),
        Some("true")
    );

    landing.on_toc_list_link_click();
    assert!(!landing.is_mobile_toc_open());
    assert_eq!(
        landing.page().attribute(&ids.toc_toggle, "aria-expanded").as_deref(),
        Some("false")
    );
}

#[test]
fn mobile_toc_stays_open_on_wider_viewports() {
    let (mut landing, ids) = landing(900.0);
    landing.on_toc_toggle_click();
    landing.on_toc_list_link_click();
    assert!(landing.is_mobile_toc_open());

    landing.on_document_click(&ids.toc_links[0]);
    assert!(landing.is_mobile_toc_open());

    landing.on_document_click(&ids.plain);
    assert!(!landing.is_mobile_toc_open());
}

#[test]
fn form_buttons_open_configured_url() {
    let (mut landing, ids) = landing(1200.0);
    assert_eq!(landing.handles().form_buttons, vec![ids.hero_button, ids.cta]);

    landing.on_form_button_click();
    assert_eq!(
        landing.page().opened_urls(),
        vec!["https://forms.gle/63FyUTMUnLJHX1UZ9".to_owned()]
    );
}

#[test]
fn footer_shows_current_year() {
    let (landing, ids) = landing(1200.0);
    assert_eq!(landing.page().text(ids.footer_year), "2026");
}

#[test]
fn hero_rotates_and_wraps() {
    let (mut landing, ids) = landing(1200.0);
    let active = |landing: &Landing<MemoryPage, ManualScheduler>| {
        ids.hero_images
            .iter()
            .copied()
            .filter(|img| landing.page().has_class(img, "active"))
            .collect::<Vec<_>>()
    };
    assert_eq!(active(&landing), vec![ids.hero_images[0]]);

    landing.advance(5_000);
    assert_eq!(active(&landing), vec![ids.hero_images[1]]);

    landing.advance(10_000);
    assert_eq!(active(&landing), vec![ids.hero_images[0]]);
}

#[test]
fn single_hero_image_arms_no_timer() {
    let page = MemoryPage::new(1200.0);
    page.create(None, "img.hero-bg-image.active");
    let mut landing = Landing::new(page, ManualScheduler::default(), PageConfig::default());
    landing.init();
    assert!(!landing.scheduler().is_pending(TaskKey::HeroRotate));
}

#[test]
fn empty_page_initialises_and_ignores_events() {
    let page = MemoryPage::new(500.0);
    let body = page.body_id();
    let mut landing = Landing::new(page, ManualScheduler::default(), PageConfig::default());

    assert!(landing.init().is_empty());
    landing.on_scroll();
    landing.on_resize();
    assert_eq!(landing.on_nav_toggle_click(), Dispatch::NONE);
    assert_eq!(landing.on_accordion_click(), Dispatch::STOP);
    landing.on_document_click(&body);
    landing.open_modal("t", "b");
    landing.on_document_keydown("Escape");
    assert!(!landing.is_nav_open());
    assert!(!landing.is_accordion_expanded());
    assert!(landing.page().scrolls().is_empty());
}

#[test]
fn failed_step_does_not_stop_the_rest() {
    let page = MemoryPage::new(500.0);
    page.create(None, "button.nav-toggle");
    let year = page.create(None, "span#current-year");
    let cta = page.create(None, "button#openGoogleFormSidebar");
    page.set_scroll_y(800.0);
    let mut landing = Landing::new(page, ManualScheduler::default(), PageConfig::default());

    assert_eq!(landing.init(), vec!["navigation"]);
    assert_eq!(landing.page().text(year), "2026");
    assert!(landing.page().has_class(&cta, "visible"));
    assert_eq!(landing.on_nav_toggle_click(), Dispatch::NONE);
}

#[test]
fn header_height_is_read_live() {
    let (mut landing, ids) = landing(1200.0);
    landing.page().set_geometry(ids.header, 0.0, 120.0);
    landing.on_toc_link_click(&ids.toc_links[2]);
    assert_eq!(landing.page().scrolls(), vec![1600.0 - 120.0 - 20.0]);
}
