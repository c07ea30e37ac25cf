//! Shared color constants for the UI.

use egui::Color32;
use roster_business::UserStatus;

/// Accent green used for the active status and selected controls.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(0, 168, 89);

/// Amber for members on vacation.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(245, 158, 11);

/// Rose for members flagged as danger.
pub const COLOR_RED: Color32 = Color32::from_rgb(225, 29, 72);

pub const COLOR_GRAY: Color32 = Color32::from_rgb(102, 112, 133);

/// Dot color of a status tag.
pub fn status_color(status: UserStatus) -> Color32 {
    match status {
        UserStatus::Active => COLOR_GREEN,
        UserStatus::Warning => COLOR_AMBER,
        UserStatus::Danger => COLOR_RED,
        UserStatus::Inactive => COLOR_GRAY,
    }
}
