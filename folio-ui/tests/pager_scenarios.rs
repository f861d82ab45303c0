//! Pager and page shell scenarios
//!
//! Charity-list pagination as the page drives it: opening the overlay,
//! stepping through pages and resetting on navigation.

use folio_contracts::PageItem;
use folio_model::{OverlayKey, PageControl, ScrollMotion};
use folio_ui::domains::ui::{
    OverlayRegistry, Pager, PagerConfig, PagerMessage, Shell, ShellMessage,
};
use folio_ui::infra::headless::{HeadlessItem, HeadlessPagerHost, strip_text};

fn pager(count: usize, per_page: usize) -> Pager<HeadlessItem, HeadlessPagerHost> {
    Pager::mount(
        HeadlessItem::batch("charity", count, 0.0),
        Some(HeadlessPagerHost::new()),
        PagerConfig {
            per_page,
            ..PagerConfig::default()
        },
    )
    .expect("pager mounts")
}

#[test]
fn twenty_pages_walk_the_window() {
    let mut pager = pager(200, 10);
    let mut strips = Vec::new();
    for page in [1, 2, 3, 4, 10, 17, 18, 19, 20] {
        pager.render_page(page);
        strips.push(pager.host().strip_text());
    }
    assert_eq!(
        strips,
        vec![
            "[1] 2 3 4 … 20 ›".to_string(),
            "‹ 1 [2] 3 4 … 20 ›".to_string(),
            "‹ 1 2 [3] 4 … 20 ›".to_string(),
            "‹ 1 … 3 [4] 5 … 20 ›".to_string(),
            "‹ 1 … 9 [10] 11 … 20 ›".to_string(),
            "‹ 1 … 16 [17] 18 … 20 ›".to_string(),
            "‹ 1 … 17 [18] 19 20 ›".to_string(),
            "‹ 1 … 17 18 [19] 20 ›".to_string(),
            "‹ 1 … 17 18 19 [20]".to_string(),
        ]
    );
}

#[test]
fn every_render_scrolls_back_to_top() {
    let mut pager = pager(35, 10);
    pager.render_page(2);
    pager.next();
    pager.previous();
    pager.reset();
    assert_eq!(pager.host().renders, 4);
    assert_eq!(pager.host().scroll_requests, vec![ScrollMotion::Smooth; 4]);
}

#[test]
fn exactly_one_page_of_items_is_visible() {
    let mut pager = pager(47, 10);
    for page in 1..=pager.total_pages() {
        pager.render_page(page);
        let visible = pager.items().iter().filter(|item| item.is_visible()).count();
        let expected = if page == 5 { 7 } else { 10 };
        assert_eq!(visible, expected, "page {page}");
        assert_eq!(pager.visible_range().len(), expected);
    }
}

#[test]
fn strip_controls_target_neighbouring_pages() {
    let mut pager = pager(60, 10);
    pager.render_page(3);
    let controls = pager.controls();
    assert_eq!(controls.first().and_then(PageControl::click_target), Some(2));
    assert_eq!(controls.last().and_then(PageControl::click_target), Some(4));
    assert_eq!(strip_text(&controls), pager.host().strip_text());
}

#[test]
fn single_page_renders_no_strip() {
    let mut pager = pager(4, 10);
    pager.render_page(1);
    assert!(pager.host().controls.is_empty());
    assert_eq!(pager.total_pages(), 1);
}

#[test]
fn shell_reopens_on_the_first_page() {
    let mut shell = Shell::new(OverlayRegistry::with_overlays([
        OverlayKey::About,
        OverlayKey::Charity,
        OverlayKey::Associations,
        OverlayKey::Association("foodbank".into()),
    ]));
    shell.bind_pager(OverlayKey::Charity, Box::new(pager(95, 10)));

    shell.update(ShellMessage::Open(OverlayKey::Charity));
    shell.update(ShellMessage::Pager(OverlayKey::Charity, PagerMessage::Goto(7)));
    let page = |shell: &Shell| shell.pager(&OverlayKey::Charity).map(|p| p.current_page());
    assert_eq!(page(&shell), Some(7));

    shell.update(ShellMessage::NavClick);
    assert!(!shell.overlays().is_visible(&OverlayKey::Charity));
    assert_eq!(page(&shell), Some(1));

    shell.update(ShellMessage::Open(OverlayKey::Charity));
    shell.update(ShellMessage::Pager(OverlayKey::Charity, PagerMessage::Next));
    shell.update(ShellMessage::Close(OverlayKey::Charity));
    assert_eq!(page(&shell), Some(1));
}
