//! UI-only state of the table: overlays, density, theme and the go-to-page
//! input. Nothing here affects which rows are derived.

use serde::Deserialize;
use ustr::Ustr;

use crate::ColumnKey;

/// Row spacing of the table body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    #[default]
    Standard,
    Relaxed,
}

impl Density {
    pub const ALL: [Self; 3] = [Self::Compact, Self::Standard, Self::Relaxed];

    pub fn label(self) -> &'static str {
        match self {
            Self::Compact => "Compact",
            Self::Standard => "Standard",
            Self::Relaxed => "Comfortable",
        }
    }

    /// Body row height in points.
    pub fn row_height(self) -> f32 {
        match self {
            Self::Compact => 28.0,
            Self::Standard => 40.0,
            Self::Relaxed => 52.0,
        }
    }
}

/// The single popover, menu or modal currently open over the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    DensityMenu,
    StatusFilter,
    DateFilter,
    ColumnMenu(ColumnKey),
    RowActions(Ustr),
    ColumnConfig,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    overlay: Overlay,
    density: Density,
    dark_mode: bool,
    go_to_input: String,
}

impl ViewState {
    pub fn new(density: Density, dark_mode: bool) -> Self {
        Self {
            density,
            dark_mode,
            ..Self::default()
        }
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        overlay != Overlay::None && self.overlay == overlay
    }

    /// Opens `overlay`, closing whatever else was open. Toggling the overlay
    /// that is already open closes it.
    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        self.overlay = if self.overlay == overlay {
            Overlay::None
        } else {
            overlay
        };
    }

    pub fn open_overlay(&mut self, overlay: Overlay) {
        self.overlay = overlay;
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    pub fn density(&self) -> Density {
        self.density
    }

    /// Picks a density and closes the density menu.
    pub fn set_density(&mut self, density: Density) {
        self.density = density;
        if self.overlay == Overlay::DensityMenu {
            self.overlay = Overlay::None;
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn go_to_input(&self) -> &str {
        &self.go_to_input
    }

    pub(crate) fn go_to_input_mut(&mut self) -> &mut String {
        &mut self.go_to_input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserField;

    #[test]
    fn only_one_overlay_is_open() {
        let mut view = ViewState::default();
        view.toggle_overlay(Overlay::StatusFilter);
        assert!(view.is_open(Overlay::StatusFilter));

        view.toggle_overlay(Overlay::DateFilter);
        assert!(view.is_open(Overlay::DateFilter));
        assert!(!view.is_open(Overlay::StatusFilter));

        let column = Overlay::ColumnMenu(ColumnKey::Field(UserField::Email));
        view.open_overlay(column);
        assert_eq!(view.overlay(), column);
    }

    #[test]
    fn toggling_open_overlay_closes_it() {
        let mut view = ViewState::default();
        let menu = Overlay::RowActions(Ustr::from("user-3"));
        view.toggle_overlay(menu);
        view.toggle_overlay(menu);
        assert_eq!(view.overlay(), Overlay::None);
        assert!(!view.is_open(Overlay::None));
    }

    #[test]
    fn row_menus_are_per_row() {
        let mut view = ViewState::default();
        view.toggle_overlay(Overlay::RowActions(Ustr::from("user-1")));
        view.toggle_overlay(Overlay::RowActions(Ustr::from("user-2")));
        assert!(view.is_open(Overlay::RowActions(Ustr::from("user-2"))));
        assert!(!view.is_open(Overlay::RowActions(Ustr::from("user-1"))));
    }

    #[test]
    fn picking_density_closes_its_menu() {
        let mut view = ViewState::default();
        view.toggle_overlay(Overlay::DensityMenu);
        view.set_density(Density::Relaxed);
        assert_eq!(view.density(), Density::Relaxed);
        assert_eq!(view.density().label(), "Comfortable");
        assert_eq!(view.overlay(), Overlay::None);
    }

    #[test]
    fn dark_mode_toggles() {
        let mut view = ViewState::new(Density::Compact, true);
        view.toggle_dark_mode();
        assert!(!view.dark_mode());
    }
}
