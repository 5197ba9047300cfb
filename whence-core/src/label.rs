//! Live-updating date label
//!
//! [`DateLabel`] is the display component over the two formatters. A label is
//! born either live (relative text, refreshed by a ticker subscription) or
//! static (absolute text, no subscription), and may move from live to static
//! exactly once via [`set_absolute`]. The ticker handle lives inside the
//! label, so dropping the label always tears the subscription down.
//!
//! [`set_absolute`]: DateLabel::set_absolute

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::format::{format_absolute, format_relative};
use crate::ticker::{self, TickerHandle};
use crate::types::{FormatOptions, LabelOptions, TimeInput};

/// Placeholder shown when no timestamp was provided at all
pub const PLACEHOLDER: &str = "—";

/// Which formatter a label currently renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelMode {
    /// Relative text, recomputed against the clock
    Live,
    /// Absolute text, computed from the input alone
    Static,
}

/// A date display that keeps itself current
pub struct DateLabel {
    input: Option<TimeInput>,
    mode: LabelMode,
    options: LabelOptions,
    clock: Arc<dyn Clock>,
    refreshes: Arc<AtomicU64>,
    ticker: Option<TickerHandle>,
}

impl DateLabel {
    /// Create a label; `None` input renders as [`PLACEHOLDER`]
    pub fn new(input: Option<TimeInput>, options: LabelOptions, clock: Arc<dyn Clock>) -> Self {
        let mode = if options.show_absolute {
            LabelMode::Static
        } else {
            LabelMode::Live
        };

        let refreshes = Arc::new(AtomicU64::new(0));
        let ticker = match mode {
            LabelMode::Static => None,
            LabelMode::Live if options.update_interval.is_zero() => None,
            LabelMode::Live => {
                let counter = Arc::clone(&refreshes);
                Some(ticker::repeat(options.update_interval, move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }))
            }
        };

        Self {
            input,
            mode,
            options,
            clock,
            refreshes,
            ticker,
        }
    }

    /// Create a label driven by the system clock
    pub fn with_system_clock(input: Option<TimeInput>, options: LabelOptions) -> Self {
        Self::new(input, options, Arc::new(SystemClock))
    }

    /// The text to display right now
    pub fn text(&self) -> String {
        let Some(input) = &self.input else {
            return PLACEHOLDER.to_string();
        };

        match self.mode {
            LabelMode::Live => format_relative(self.clock.now(), input.clone()),
            LabelMode::Static => format_absolute(input.clone(), &self.absolute_options()),
        }
    }

    /// Supplementary absolute text, when the tooltip option is on
    pub fn tooltip(&self) -> Option<String> {
        if !self.options.show_tooltip {
            return None;
        }
        let input = self.input.as_ref()?;
        Some(format_absolute(input.clone(), &self.absolute_options()))
    }

    /// Switch to the absolute form for good, dropping the subscription
    ///
    /// There is no way back to live within this label's lifetime.
    pub fn set_absolute(&mut self) {
        if self.mode == LabelMode::Static {
            return;
        }
        self.mode = LabelMode::Static;
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
        tracing::debug!("label pinned to absolute form");
    }

    /// How many refresh ticks this label has seen
    ///
    /// Hosts that redraw only on change can poll this instead of re-rendering
    /// every frame.
    pub fn refresh_count(&self) -> u64 {
        self.refreshes.load(Ordering::SeqCst)
    }

    /// Whether the label still renders relative text
    pub fn is_live(&self) -> bool {
        self.mode == LabelMode::Live
    }

    fn absolute_options(&self) -> FormatOptions {
        FormatOptions {
            include_time: self.options.include_time,
            short: false,
        }
    }
}

impl std::fmt::Debug for DateLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateLabel")
            .field("input", &self.input)
            .field("mode", &self.mode)
            .field("options", &self.options)
            .field("refreshes", &self.refresh_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use std::time::Duration;

    /// 2023-11-14T22:13:20Z
    const NOW_MS: i64 = 1_700_000_000_000;

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::at_millis(NOW_MS))
    }

    fn no_refresh() -> LabelOptions {
        LabelOptions::default().with_interval(Duration::ZERO)
    }

    #[test]
    fn test_missing_input_shows_placeholder() {
        let label = DateLabel::new(None, no_refresh(), fixed_clock());
        assert_eq!(label.text(), PLACEHOLDER);
        assert_eq!(label.tooltip(), None);
    }

    #[test]
    fn test_live_label_renders_relative_text() {
        let clock = fixed_clock();
        let label = DateLabel::new(
            Some(TimeInput::from(NOW_MS - 7_200_000)),
            no_refresh(),
            clock.clone(),
        );
        assert!(label.is_live());
        assert_eq!(label.text(), "2 hours ago");

        // Text follows the clock on the next read
        clock.advance_millis(3_600_000);
        assert_eq!(label.text(), "3 hours ago");
    }

    #[test]
    fn test_absolute_label_never_subscribes() {
        let label = DateLabel::new(
            Some(TimeInput::from(NOW_MS)),
            LabelOptions::absolute().with_interval(Duration::from_millis(10)),
            fixed_clock(),
        );
        assert!(!label.is_live());
        assert_eq!(label.text(), "Nov 14, 2023, 10:13 PM");

        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(label.refresh_count(), 0);
    }

    #[test]
    fn test_live_label_refreshes_until_pinned() {
        let mut label = DateLabel::new(
            Some(TimeInput::from(NOW_MS)),
            LabelOptions::default().with_interval(Duration::from_millis(10)),
            fixed_clock(),
        );

        std::thread::sleep(Duration::from_millis(120));
        assert!(label.refresh_count() >= 2);

        label.set_absolute();
        assert!(!label.is_live());
        let frozen = label.refresh_count();
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(label.refresh_count(), frozen);

        // Pinning again is a no-op
        label.set_absolute();
    }

    #[test]
    fn test_tooltip_carries_absolute_text() {
        let label = DateLabel::new(
            Some(TimeInput::from(NOW_MS - 7_200_000)),
            no_refresh().with_tooltip(),
            fixed_clock(),
        );
        assert_eq!(label.text(), "2 hours ago");
        assert_eq!(label.tooltip().as_deref(), Some("Nov 14, 2023, 8:13 PM"));
    }

    #[test]
    fn test_invalid_input_renders_empty_not_placeholder() {
        let label = DateLabel::new(
            Some(TimeInput::from("not a timestamp")),
            no_refresh(),
            fixed_clock(),
        );
        assert_eq!(label.text(), "");
    }

    #[test]
    fn test_include_time_flows_into_absolute_form() {
        let mut options = LabelOptions::absolute();
        options.include_time = false;
        let label = DateLabel::new(Some(TimeInput::from(NOW_MS)), options, fixed_clock());
        assert_eq!(label.text(), "Nov 14, 2023");
    }
}
