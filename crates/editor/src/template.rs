//! Default business-card layout.

use crate::state::EditorState;
use cardlayout_core::{LogoPlacement, LogoPreset, Percent, SurfaceSize, TextSpec};

/// Default card size in pixels (a 9:5 business card at 40 px per unit).
pub const DEFAULT_SURFACE: SurfaceSize = SurfaceSize::new(360.0, 200.0);

/// Horizontal center of the right-hand text column, in percent.
const TEXT_COLUMN_X: f32 = 65.5556;

/// The stock card: company name, person, title and contact lines stacked in
/// the right-hand column, leaving the top-left free for the logo.
pub fn business_card_template() -> Vec<TextSpec> {
    vec![
        TextSpec::new("Company Name", Percent::new(TEXT_COLUMN_X, 22.0))
            .size(20)
            .bold(),
        TextSpec::new("Your Name", Percent::new(TEXT_COLUMN_X, 45.0))
            .size(16)
            .bold(),
        TextSpec::new("Job Title", Percent::new(TEXT_COLUMN_X, 58.0))
            .size(12)
            .color("#4b5563"),
        TextSpec::new("+1 555 0100", Percent::new(TEXT_COLUMN_X, 75.0)).size(11),
        TextSpec::new("hello@example.com", Percent::new(TEXT_COLUMN_X, 85.0)).size(11),
    ]
}

/// Editor preloaded with [`business_card_template`] on `surface`.
pub fn business_card(surface: SurfaceSize) -> EditorState {
    EditorState::new(surface)
        .with_logo(LogoPlacement::new(LogoPreset::TopLeft, 80))
        .with_elements(business_card_template())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardlayout_core::FontWeight;

    #[test]
    fn template_is_in_bounds_and_ordered() {
        let state = business_card(DEFAULT_SURFACE);
        assert_eq!(state.elements().len(), 5);
        assert!(state.elements().iter().all(|e| e.position().in_bounds()));
        assert_eq!(state.elements()[0].text, "Company Name");
        assert_eq!(state.elements()[0].font_weight, FontWeight::Bold);

        let ys: Vec<f32> = state.elements().iter().map(|e| e.position().y).collect();
        assert!(ys.windows(2).all(|w| w[0] < w[1]));
    }
}
