//! Selection + system style -> effective interface style

use crate::style::{InterfaceStyle, ThemeSelection};

/// Resolve the effective interface style. Pure and total: an explicit
/// selection ignores the system style, `FollowSystem` passes it through.
pub fn resolve_interface_style(
    selection: ThemeSelection,
    system_style: InterfaceStyle,
) -> InterfaceStyle {
    match selection {
        ThemeSelection::FollowSystem => system_style,
        ThemeSelection::Light => InterfaceStyle::Light,
        ThemeSelection::Dark => InterfaceStyle::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustive_resolution_table() {
        use InterfaceStyle::{Dark, Light};
        use ThemeSelection::FollowSystem;

        let cases = [
            (FollowSystem, Light, Light),
            (FollowSystem, Dark, Dark),
            (ThemeSelection::Light, Light, Light),
            (ThemeSelection::Light, Dark, Light),
            (ThemeSelection::Dark, Light, Dark),
            (ThemeSelection::Dark, Dark, Dark),
        ];
        for (selection, system, expected) in cases {
            assert_eq!(
                resolve_interface_style(selection, system),
                expected,
                "selection={selection:?} system={system:?}"
            );
        }
    }
}
