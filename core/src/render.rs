//! Text rendering of countdown snapshots
//!
//! Keeps the four display slots and the title the way the landing page shows
//! them: two-digit zero padding and a title that flips to the launch
//! announcement once.

use std::fmt;

use launchpad_types::LaunchConfig;

use crate::countdown::CountdownSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownDisplay {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub title: String,
    /// Seconds slot changed on the last render (drives the pulse cue)
    pub seconds_changed: bool,
    launched_title: String,
    launched: bool,
}

impl CountdownDisplay {
    pub fn new(counting_title: impl Into<String>, launched_title: impl Into<String>) -> Self {
        Self {
            days: "00".to_string(),
            hours: "00".to_string(),
            minutes: "00".to_string(),
            seconds: "00".to_string(),
            title: counting_title.into(),
            seconds_changed: false,
            launched_title: launched_title.into(),
            launched: false,
        }
    }

    pub fn from_config(config: &LaunchConfig) -> Self {
        Self::new(config.counting_title.clone(), config.launched_title.clone())
    }

    /// Write a snapshot into the slots.
    pub fn render(&mut self, snapshot: &CountdownSnapshot) {
        let seconds = format!("{:02}", snapshot.seconds);
        self.seconds_changed = seconds != self.seconds;

        self.days = format!("{:02}", snapshot.days);
        self.hours = format!("{:02}", snapshot.hours);
        self.minutes = format!("{:02}", snapshot.minutes);
        self.seconds = seconds;
    }

    /// Swap the title for the launch announcement. Later calls are no-ops.
    pub fn mark_launched(&mut self) {
        if self.launched {
            return;
        }
        self.launched = true;
        self.title = self.launched_title.clone();
    }

    pub fn is_launched(&self) -> bool {
        self.launched
    }
}

impl fmt::Display for CountdownDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}d {}h {}m {}s",
            self.title, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(days: u64, hours: u8, minutes: u8, seconds: u8) -> CountdownSnapshot {
        CountdownSnapshot {
            days,
            hours,
            minutes,
            seconds,
            reached: false,
        }
    }

    #[test]
    fn pads_to_two_digits() {
        let mut display = CountdownDisplay::new("Launching In", "We're Live!");
        display.render(&snap(3, 4, 5, 6));
        assert_eq!(
            (
                display.days.as_str(),
                display.hours.as_str(),
                display.minutes.as_str(),
                display.seconds.as_str()
            ),
            ("03", "04", "05", "06")
        );
        assert_eq!(display.to_string(), "Launching In: 03d 04h 05m 06s");
    }

    #[test]
    fn days_can_exceed_two_digits() {
        let mut display = CountdownDisplay::new("Soon", "Now");
        display.render(&snap(365, 0, 0, 0));
        assert_eq!(display.days, "365");
    }

    #[test]
    fn tracks_seconds_changes() {
        let mut display = CountdownDisplay::new("Soon", "Now");
        display.render(&snap(0, 0, 1, 5));
        assert!(display.seconds_changed);
        display.render(&snap(0, 0, 1, 5));
        assert!(!display.seconds_changed);
        display.render(&snap(0, 0, 1, 4));
        assert!(display.seconds_changed);
    }

    #[test]
    fn launch_title_swaps_once() {
        let mut display = CountdownDisplay::from_config(&LaunchConfig::default());
        assert_eq!(display.title, "Launching In");

        display.render(&CountdownSnapshot::REACHED);
        display.mark_launched();
        assert!(display.is_launched());
        assert_eq!(display.title, "We're Live!");
        assert_eq!(display.to_string(), "We're Live!: 00d 00h 00m 00s");

        display.title = "edited".to_string();
        display.mark_launched();
        assert_eq!(display.title, "edited");
    }
}
