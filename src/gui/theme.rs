use crate::settings::ThemeMode;
use eframe::egui;

/// Map the persisted theme mode onto egui visuals.
pub fn visuals_for(mode: ThemeMode) -> egui::Visuals {
    match mode {
        ThemeMode::Light => egui::Visuals::light(),
        ThemeMode::Dark => egui::Visuals::dark(),
    }
}

#[cfg(test)]
mod tests {
    use super::visuals_for;
    use crate::settings::ThemeMode;

    #[test]
    fn mode_switching_is_deterministic() {
        let light = visuals_for(ThemeMode::Light);
        let dark = visuals_for(ThemeMode::Dark);

        assert!(!light.dark_mode);
        assert!(dark.dark_mode);
        assert_ne!(light.window_fill, dark.window_fill);
    }

    #[test]
    fn toggle_round_trips() {
        let mode = ThemeMode::Light;
        assert_eq!(mode.toggled().toggled(), mode);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }
}
