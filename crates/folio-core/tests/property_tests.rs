//! Property-based tests for the page widgets
//!
//! Uses proptest to verify the filter, lightbox and validation invariants
//! over arbitrary event sequences.

use folio_core::{
    is_valid_email, EventKind, FilterButton, ImageRef, Page, PageEvent, ProjectFilter,
    ProjectItem, SiteConfig, Target,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("all".to_string()),
        Just("web-dev".to_string()),
        Just("design".to_string()),
        Just("photography".to_string()),
        "[a-z]{1,8}",
    ]
}

fn projects_strategy() -> impl Strategy<Value = Vec<ProjectItem>> {
    prop::collection::vec(
        ("[a-zA-Z ]{1,20}", category_strategy()).prop_map(|(title, category)| {
            let image = ImageRef::new(format!("{}.jpg", title.trim()), title.clone());
            ProjectItem::new(title, category, image)
        }),
        0..20,
    )
}

fn buttons_strategy() -> impl Strategy<Value = Vec<FilterButton>> {
    prop::collection::vec(
        category_strategy().prop_map(|c| FilterButton::new(c.clone(), c)),
        1..8,
    )
}

/// User interactions with the lightbox
#[derive(Debug, Clone)]
enum LightboxOp {
    Thumbnail(usize),
    ImageClick,
    OverlayClick,
    CloseClick,
    Key(String),
}

fn lightbox_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<LightboxOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..6usize).prop_map(LightboxOp::Thumbnail),
            1 => Just(LightboxOp::ImageClick),
            1 => Just(LightboxOp::OverlayClick),
            1 => Just(LightboxOp::CloseClick),
            1 => prop_oneof![Just("Escape".to_string()), Just("Enter".to_string()), "[a-z]"]
                .prop_map(LightboxOp::Key),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After filter_projects(c), visible == (c == "all" || category == c)
    #[test]
    fn visibility_matches_category(
        projects in projects_strategy(),
        category in category_strategy()
    ) {
        let mut filter = ProjectFilter::new(vec![], projects.clone());
        filter.filter_projects(&category);

        for (i, project) in projects.iter().enumerate() {
            let expected = category == "all" || project.category == category;
            prop_assert_eq!(filter.is_visible(i), expected);
        }
    }

    /// Any sequence of button clicks leaves exactly the last clicked button active
    #[test]
    fn exactly_one_active_button(
        buttons in buttons_strategy(),
        projects in projects_strategy(),
        clicks in prop::collection::vec(0..8usize, 1..30)
    ) {
        let mut filter = ProjectFilter::new(buttons.clone(), projects);
        let mut last = filter.active_button();

        for click in clicks {
            filter.select(click);
            if click < buttons.len() {
                last = Some(click);
            }
            let active: Vec<usize> = (0..buttons.len()).filter(|&i| filter.is_active(i)).collect();
            prop_assert_eq!(active.len(), 1);
            prop_assert_eq!(filter.active_button(), last);
        }

        let active = filter.active_filter().to_string();
        for tracked in filter.items() {
            prop_assert_eq!(tracked.visible, active == "all" || tracked.item.category == active);
        }
    }

    /// The open flag, scroll lock and escape listener always move together
    #[test]
    fn lightbox_lock_step(ops in lightbox_ops_strategy(40)) {
        let mut page = Page::new(SiteConfig::default().targets).unwrap();

        for op in ops {
            match op {
                LightboxOp::Thumbnail(i) => { page.click(Target::ProjectImage(i)); }
                LightboxOp::ImageClick => { page.click(Target::LightboxImage); }
                LightboxOp::OverlayClick => { page.click(Target::LightboxOverlay); }
                LightboxOp::CloseClick => { page.click(Target::LightboxClose); }
                LightboxOp::Key(key) => { page.dispatch(PageEvent::key(key)); }
            }

            let open = page.lightbox().is_open();
            let listeners = page.listeners().count(EventKind::KeyDown, Target::Document);
            prop_assert_eq!(page.ui().scroll_locked, open);
            prop_assert_eq!(listeners, usize::from(open));
        }
    }

    /// Opening with image X always displays X exactly
    #[test]
    fn lightbox_shows_clicked_image(index in 0..6usize) {
        let mut page = Page::new(SiteConfig::default().targets).unwrap();
        page.click(Target::ProjectImage(index));
        prop_assert_eq!(page.lightbox().image(), &page.targets().projects[index].image);
    }

    /// Strings containing whitespace are never valid emails
    #[test]
    fn whitespace_rejects_email(
        local in "[a-z]{1,8}",
        domain in "[a-z]{1,8}",
        ws in prop_oneof![Just(' '), Just('\t'), Just('\n')]
    ) {
        let email = format!("{local}{ws}x@{domain}.com");
        prop_assert!(!is_valid_email(&email));
    }

    /// Well-shaped addresses are always accepted
    #[test]
    fn simple_addresses_accepted(
        local in "[a-z0-9._+-]{1,12}",
        domain in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,6}"
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&email));
    }
}
