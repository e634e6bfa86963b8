use super::*;

#[test]
fn icon_names_and_sizes_follow_the_requested_size() {
    let icon = app_icon(512);
    assert_eq!(icon.file_name, "app_icon_512.png");
    assert_eq!((icon.width, icon.height), (512, 512));
    assert!(!icon.has_text());

    let hex = app_icon_shatkona(1024);
    assert_eq!(hex.file_name, "app_icon_1024_shatkona.png");
    let Motif::Shatkona { radius, stroke_width, ring, .. } = hex.motif else {
        panic!("expected shatkona motif");
    };
    assert_eq!(radius, 340.0);
    assert_eq!(stroke_width, 44.0);
    assert_eq!(ring.map(|r| r.radius), Some(230.0));
}

#[test]
fn crescent_carve_uses_the_background_color() {
    let icon = app_icon(512);
    let Background::Solid(bg) = icon.background else {
        panic!("icon background should be solid");
    };
    let Motif::Crescent { carve_color, inner_offset_x, center, .. } = icon.motif else {
        panic!("expected crescent motif");
    };
    assert_eq!(carve_color, bg);
    assert_eq!(inner_offset_x, 40.0);
    assert_eq!(center, Point::new(256.0, 256.0));
}

#[test]
fn feature_graphic_places_text_on_the_right_half() {
    let page = feature_graphic();
    assert_eq!(page.file_name, "feature_graphic_1024x500.png");
    assert_eq!(page.texts.len(), 2);
    assert_eq!(page.texts[0].content, APP_NAME);
    assert_eq!(page.texts[0].position, Point::new(552.0, 225.0));
    assert_eq!(page.texts[1].position, Point::new(552.0, 273.0));
    assert!(page.texts.iter().all(|t| t.position.x > 512.0));
    assert_eq!(page.starfield.map(|s| s.count), Some(120));
}

#[test]
fn tablet_pages_are_numbered_from_one() {
    let pages = tablet_screenshots(TABLET_PAGES);
    assert_eq!(pages.len(), 8);
    let names: Vec<_> = pages.iter().map(|p| p.file_name.as_str()).collect();
    assert_eq!(names[0], "tablet_ss_01.png");
    assert_eq!(names[7], "tablet_ss_08.png");
    assert_eq!(tablet_file_name(11), "tablet_ss_12.png");

    for (page, (title, subtitle)) in pages.iter().zip(TABLET_PAGES) {
        assert_eq!((page.width, page.height), (1920, 1080));
        assert_eq!(page.texts[1].content, *title);
        assert_eq!(page.texts[2].content, *subtitle);
        assert_eq!(
            page.texts[2].wrap,
            Some(Wrap {
                max_width_px: 921.0,
                line_step_px: 42.0
            })
        );
    }
}

#[test]
fn tablet_pages_accept_owned_strings() {
    let custom = vec![("A".to_string(), "b c".to_string())];
    let pages = tablet_screenshots(&custom);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].texts[1].content, "A");
}
