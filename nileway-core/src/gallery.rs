//! Gallery layout and lightbox geometry.
//!
//! Photo cards are scattered across the gallery canvas from a fixed table of
//! positions; clicking a card computes a translate+scale transform that
//! centers it over the viewport.

/// Resting position for one scattered card. Percentages are relative to the
/// gallery canvas, width is in viewport-width units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    pub top_pct: f64,
    pub left_pct: f64,
    pub width_vw: f64,
    pub rotation_deg: f64,
}

/// Scatter positions assigned by card index. Cards past the end of the table
/// keep whatever position the stylesheet gives them.
pub const SCATTER_LAYOUTS: [CardLayout; 11] = [
    CardLayout { top_pct: 30.0, left_pct: 38.0, width_vw: 28.0, rotation_deg: 5.0 },
    CardLayout { top_pct: 8.0, left_pct: 18.0, width_vw: 22.0, rotation_deg: -12.0 },
    CardLayout { top_pct: 12.0, left_pct: 60.0, width_vw: 20.0, rotation_deg: 10.0 },
    CardLayout { top_pct: 38.0, left_pct: 8.0, width_vw: 20.0, rotation_deg: 18.0 },
    CardLayout { top_pct: 42.0, left_pct: 72.0, width_vw: 24.0, rotation_deg: -15.0 },
    CardLayout { top_pct: 65.0, left_pct: 12.0, width_vw: 20.0, rotation_deg: -8.0 },
    CardLayout { top_pct: 60.0, left_pct: 45.0, width_vw: 26.0, rotation_deg: 3.0 },
    CardLayout { top_pct: 70.0, left_pct: 70.0, width_vw: 22.0, rotation_deg: 16.0 },
    CardLayout { top_pct: 5.0, left_pct: 42.0, width_vw: 24.0, rotation_deg: -2.0 },
    CardLayout { top_pct: 78.0, left_pct: 25.0, width_vw: 18.0, rotation_deg: 11.0 },
    CardLayout { top_pct: 75.0, left_pct: 58.0, width_vw: 18.0, rotation_deg: -10.0 },
];

/// Cards never grow wider than this at rest.
pub const CARD_MAX_WIDTH_PX: f64 = 350.0;

/// An active card fills this fraction of the limiting viewport axis.
pub const FILL_RATIO: f64 = 0.9;

/// How long the reverse transition runs before the active card's visual
/// state may be cleared.
pub const CLOSE_CLEANUP_MS: u32 = 600;

#[must_use]
pub fn scatter_layout(index: usize) -> Option<CardLayout> {
    SCATTER_LAYOUTS.get(index).copied()
}

impl CardLayout {
    /// The transform a card returns to when the viewer closes.
    #[must_use]
    pub fn resting_transform(&self) -> String {
        format!("rotate({}deg)", self.rotation_deg)
    }

    /// Position and sizing only, no transform. The z-index keeps later
    /// cards stacked above earlier ones, as the table expects.
    #[must_use]
    pub fn placement(&self, z_index: usize) -> String {
        format!(
            "top:{}%;left:{}%;width:{}vw;max-width:{CARD_MAX_WIDTH_PX}px;height:auto;z-index:{z_index}",
            self.top_pct, self.left_pct, self.width_vw,
        )
    }

    /// Full inline style for a scattered card at rest.
    #[must_use]
    pub fn style(&self, z_index: usize) -> String {
        format!(
            "{};transform:{}",
            self.placement(z_index),
            self.resting_transform()
        )
    }
}

/// On-screen geometry of a card, as reported by the DOM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Translate+scale that centers a card over the viewport, rotation removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteredTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl CenteredTransform {
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate(0deg)",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

/// Compute the transform that moves a card's center onto the viewport center
/// and scales it to [`FILL_RATIO`] of the smaller viewport/card ratio.
#[must_use]
pub fn center_transform(rect: CardRect, viewport: Viewport) -> CenteredTransform {
    let scale = (viewport.width / rect.width).min(viewport.height / rect.height) * FILL_RATIO;
    let translate_x = viewport.width / 2.0 - (rect.left + rect.width / 2.0);
    let translate_y = viewport.height / 2.0 - (rect.top + rect.height / 2.0);
    CenteredTransform {
        translate_x,
        translate_y,
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_eleven_cards() {
        assert!(scatter_layout(0).is_some());
        assert!(scatter_layout(10).is_some());
        assert!(scatter_layout(11).is_none());
    }

    #[test]
    fn style_renders_position_and_rotation() {
        let layout = scatter_layout(1).unwrap();
        let style = layout.style(1);
        assert!(style.contains("top:8%"));
        assert!(style.contains("left:18%"));
        assert!(style.contains("width:22vw"));
        assert!(style.contains("max-width:350px"));
        assert!(style.contains("z-index:1"));
        assert!(style.contains("transform:rotate(-12deg)"));
    }

    #[test]
    fn centered_card_stays_centered() {
        // A card already centered in a 1000x800 viewport only scales.
        let rect = CardRect {
            left: 400.0,
            top: 300.0,
            width: 200.0,
            height: 200.0,
        };
        let viewport = Viewport {
            width: 1000.0,
            height: 800.0,
        };
        let t = center_transform(rect, viewport);
        assert!(t.translate_x.abs() < f64::EPSILON);
        assert!(t.translate_y.abs() < f64::EPSILON);
        // Height is the limiting axis: 800/200 * 0.9
        assert!((t.scale - 3.6).abs() < 1e-9);
    }

    #[test]
    fn offset_card_translates_to_center() {
        let rect = CardRect {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 50.0,
        };
        let viewport = Viewport {
            width: 1200.0,
            height: 600.0,
        };
        let t = center_transform(rect, viewport);
        assert!((t.translate_x - 550.0).abs() < 1e-9);
        assert!((t.translate_y - 275.0).abs() < 1e-9);
        // Width ratio 12 vs height ratio 12; either way scale is 10.8
        assert!((t.scale - 10.8).abs() < 1e-9);
        assert_eq!(t.css(), "translate(550px, 275px) scale(10.8) rotate(0deg)");
    }
}
