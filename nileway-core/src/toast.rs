//! Notification toast lifecycle.
//!
//! A toast walks `Mounting -> Shown -> Fading -> Hidden` on a timer chain.
//! Only one toast exists; showing a new one bumps a generation counter so
//! that the previous toast's pending transitions drop themselves instead of
//! clobbering the replacement mid-animation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// Background class applied once the toast is revealed.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "bg-green-500",
            Severity::Error => "bg-red-500",
        }
    }
}

/// Delay between mounting the toast and revealing it, so the reveal
/// transition has a frame to start from.
pub const REVEAL_DELAY_MS: u32 = 100;

/// How long the toast stays fully visible.
pub const DISPLAY_MS: u32 = 3000;

/// Fade-out transition length before the element hides.
pub const FADE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastPhase {
    #[default]
    Hidden,
    /// Text set, element mounted, still transparent.
    Mounting,
    Shown,
    Fading,
}

impl ToastPhase {
    /// The following phase and the delay before entering it. `Hidden` is
    /// terminal; a new `show` starts the cycle over at `Mounting`.
    #[must_use]
    pub const fn next(self) -> Option<(ToastPhase, u32)> {
        match self {
            ToastPhase::Mounting => Some((ToastPhase::Shown, REVEAL_DELAY_MS)),
            ToastPhase::Shown => Some((ToastPhase::Fading, DISPLAY_MS)),
            ToastPhase::Fading => Some((ToastPhase::Hidden, FADE_MS)),
            ToastPhase::Hidden => None,
        }
    }

    /// Whether the severity background is applied in this phase.
    #[must_use]
    pub const fn colored(self) -> bool {
        matches!(self, ToastPhase::Shown | ToastPhase::Fading)
    }

    /// Whether the transparent/offset transition classes are applied.
    #[must_use]
    pub const fn translucent(self) -> bool {
        matches!(self, ToastPhase::Mounting | ToastPhase::Fading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_runs_to_hidden() {
        let mut phase = ToastPhase::Mounting;
        let mut total = 0;
        while let Some((next, delay)) = phase.next() {
            phase = next;
            total += delay;
        }
        assert_eq!(phase, ToastPhase::Hidden);
        assert_eq!(total, REVEAL_DELAY_MS + DISPLAY_MS + FADE_MS);
    }

    #[test]
    fn hidden_is_terminal() {
        assert_eq!(ToastPhase::Hidden.next(), None);
    }

    #[test]
    fn visual_flags_follow_phase() {
        assert!(!ToastPhase::Mounting.colored());
        assert!(ToastPhase::Mounting.translucent());
        assert!(ToastPhase::Shown.colored());
        assert!(!ToastPhase::Shown.translucent());
        assert!(ToastPhase::Fading.colored());
        assert!(ToastPhase::Fading.translucent());
    }

    #[test]
    fn severity_maps_to_background() {
        assert_eq!(Severity::Success.css_class(), "bg-green-500");
        assert_eq!(Severity::Error.css_class(), "bg-red-500");
    }
}
