use tint_theme::{default_catalog, ColorToken, InterfaceStyle};

#[test]
fn default_catalog_provides_light_and_dark_themes() {
    let catalog = default_catalog();
    assert_eq!(
        catalog.theme_for(InterfaceStyle::Light).interface_style(),
        InterfaceStyle::Light
    );
    assert_eq!(
        catalog.theme_for(InterfaceStyle::Dark).interface_style(),
        InterfaceStyle::Dark
    );
}

#[test]
fn default_palettes_populate_every_required_token() {
    let catalog = default_catalog();
    for style in [InterfaceStyle::Light, InterfaceStyle::Dark] {
        let palette = catalog.theme_for(style).palette().clone();
        for token in &ColorToken::REQUIRED {
            assert!(
                palette.try_color(token).is_ok(),
                "style={style:?} token={token}"
            );
        }
    }
}

#[test]
fn light_and_dark_variants_have_distinct_backgrounds() {
    let catalog = default_catalog();
    let light = catalog.theme_for(InterfaceStyle::Light).palette().clone();
    let dark = catalog.theme_for(InterfaceStyle::Dark).palette().clone();
    assert_ne!(light.background(), dark.background());
    assert_ne!(light.primary_text(), dark.primary_text());
}
