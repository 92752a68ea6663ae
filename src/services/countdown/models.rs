use serde::{Deserialize, Serialize};

/// Display text for a deadline that has already passed.
pub const FINISHED_LABEL: &str = "پایان یافته";

/// Urgency band for a deadline row based on whole days remaining.
/// Completed records always render in the neutral `Done` band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrgencyTier {
    /// Checked off; days no longer matter.
    Done,
    /// More than 14 days out.
    Remote,
    /// 13-14 days.
    Distant,
    /// 11-12 days.
    Comfortable,
    /// 9-10 days.
    Steady,
    /// 7-8 days.
    Approaching,
    /// 5-6 days.
    Pressing,
    /// 3-4 days.
    Imminent,
    /// 2 days or less, or already due.
    Critical,
}

impl UrgencyTier {
    pub fn for_record(days_remaining: i64, completed: bool) -> Self {
        if completed {
            return Self::Done;
        }
        match days_remaining {
            d if d > 14 => Self::Remote,
            d if d > 12 => Self::Distant,
            d if d > 10 => Self::Comfortable,
            d if d > 8 => Self::Steady,
            d if d > 6 => Self::Approaching,
            d if d > 4 => Self::Pressing,
            d if d > 2 => Self::Imminent,
            _ => Self::Critical,
        }
    }

    /// Band colour, from the calm green end of the ramp down to red.
    pub fn color(self) -> RgbaColor {
        match self {
            Self::Done => RgbaColor::new(128, 128, 128, 255),
            Self::Remote => RgbaColor::new(0, 128, 0, 255),
            Self::Distant => RgbaColor::new(144, 238, 144, 255),
            Self::Comfortable => RgbaColor::new(154, 205, 50, 255),
            Self::Steady => RgbaColor::new(255, 255, 0, 255),
            Self::Approaching => RgbaColor::new(255, 215, 0, 255),
            Self::Pressing => RgbaColor::new(255, 165, 0, 255),
            Self::Imminent => RgbaColor::new(255, 69, 0, 255),
            Self::Critical => RgbaColor::new(255, 0, 0, 255),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        RgbaColor::new(0, 0, 0, 255)
    }
}

/// Remaining-time breakdown for one deadline, recomputed every tick and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    /// Whole seconds until the due instant; negative once passed.
    pub remaining_secs: i64,
    pub expired: bool,
    /// Floor of the remaining duration in days; 0 once expired.
    pub days_remaining: i64,
    /// Share of the start-of-today → due window already elapsed.
    pub progress_percent: u8,
    /// `D:HH:MM:SS`, or the finished marker once expired.
    pub label: String,
}

/// One visible line as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRow {
    pub course: String,
    pub date_label: String,
    pub countdown_label: String,
    pub days_remaining: i64,
    pub expired: bool,
    pub progress_percent: u8,
    pub completed: bool,
    pub tier: UrgencyTier,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(20, UrgencyTier::Remote)]
    #[test_case(15, UrgencyTier::Remote)]
    #[test_case(14, UrgencyTier::Distant)]
    #[test_case(13, UrgencyTier::Distant)]
    #[test_case(12, UrgencyTier::Comfortable)]
    #[test_case(10, UrgencyTier::Steady)]
    #[test_case(8, UrgencyTier::Approaching)]
    #[test_case(6, UrgencyTier::Pressing)]
    #[test_case(4, UrgencyTier::Imminent)]
    #[test_case(3, UrgencyTier::Imminent)]
    #[test_case(2, UrgencyTier::Critical)]
    #[test_case(0, UrgencyTier::Critical)]
    fn tier_bands(days: i64, expected: UrgencyTier) {
        assert_eq!(UrgencyTier::for_record(days, false), expected);
    }

    #[test]
    fn completed_always_wins_the_done_tier() {
        assert_eq!(UrgencyTier::for_record(20, true), UrgencyTier::Done);
        assert_eq!(UrgencyTier::for_record(0, true), UrgencyTier::Done);
    }

    #[test]
    fn tier_colors_span_the_ramp() {
        assert_eq!(UrgencyTier::Remote.color(), RgbaColor::new(0, 128, 0, 255));
        assert_eq!(UrgencyTier::Critical.color(), RgbaColor::new(255, 0, 0, 255));
        assert_eq!(UrgencyTier::Done.color(), RgbaColor::new(128, 128, 128, 255));
    }
}
