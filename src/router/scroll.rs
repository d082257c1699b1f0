// Scroll seam and the deferred anchor scroll
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;
use web_time::Instant;

pub const CONTACT_ANCHOR: &str = "contact";

/// Something that can be scrolled: the page canvas or a test double.
pub trait Viewport {
    /// Jump to (0, 0).
    fn scroll_to_origin(&mut self);

    /// Smoothly scroll to the element registered under `anchor`.
    ///
    /// Returns `false` when that element is not currently rendered.
    fn scroll_to_anchor(&mut self, anchor: &str) -> bool;
}

impl<T: Viewport + ?Sized> Viewport for Box<T> {
    fn scroll_to_origin(&mut self) {
        (**self).scroll_to_origin()
    }

    fn scroll_to_anchor(&mut self, anchor: &str) -> bool {
        (**self).scroll_to_anchor(anchor)
    }
}

/// Home page sections reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Services,
    Portfolio,
    Contact,
}

impl Section {
    pub const NAVBAR: [Section; 3] = [Section::About, Section::Services, Section::Portfolio];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::Contact => CONTACT_ANCHOR,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Services => "Services",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact Us",
        }
    }
}

/// Delays for the deferred anchor scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollTiming {
    /// Wait before the first lookup, so the target view gets a frame to mount.
    #[serde(with = "millis")]
    pub first_attempt: Duration,
    /// Extra wait before the single retry.
    #[serde(with = "millis")]
    pub retry_delay: Duration,
}

impl Default for ScrollTiming {
    fn default() -> Self {
        Self {
            first_attempt: Duration::from_millis(100),
            retry_delay: Duration::from_millis(400),
        }
    }
}

impl ScrollTiming {
    /// The retry must wait longer than the first attempt. A configuration
    /// that breaks this gets the default ratio back.
    pub fn validated(self) -> Self {
        if self.retry_delay > self.first_attempt {
            return self;
        }
        let retry_delay = (self.first_attempt * 4).max(Duration::from_millis(1));
        warn!(
            first_attempt = ?self.first_attempt,
            retry_delay = ?self.retry_delay,
            "scroll retry delay must exceed the first attempt; using {retry_delay:?}"
        );
        Self {
            first_attempt: self.first_attempt,
            retry_delay,
        }
    }
}

/// A scheduled anchor scroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingScroll {
    pub anchor: &'static str,
    pub due: Instant,
    pub retries_left: u8,
    pub generation: u64,
}

impl PendingScroll {
    pub fn new(anchor: &'static str, now: Instant, timing: ScrollTiming, generation: u64) -> Self {
        Self {
            anchor,
            due: now + timing.first_attempt,
            retries_left: 1,
            generation,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let timing = ScrollTiming::default();
        assert_eq!(timing.first_attempt, Duration::from_millis(100));
        assert_eq!(timing.retry_delay, Duration::from_millis(400));
    }

    #[test]
    fn test_validated_keeps_longer_retry() {
        let timing = ScrollTiming {
            first_attempt: Duration::from_millis(50),
            retry_delay: Duration::from_millis(60),
        };
        assert_eq!(timing.validated(), timing);
        assert_eq!(ScrollTiming::default().validated(), ScrollTiming::default());
    }

    #[test]
    fn test_validated_stretches_short_retry() {
        let timing = ScrollTiming {
            first_attempt: Duration::from_millis(300),
            retry_delay: Duration::from_millis(300),
        }
        .validated();
        assert_eq!(timing.first_attempt, Duration::from_millis(300));
        assert_eq!(timing.retry_delay, Duration::from_millis(1200));

        let zero = ScrollTiming {
            first_attempt: Duration::ZERO,
            retry_delay: Duration::ZERO,
        }
        .validated();
        assert!(zero.retry_delay > zero.first_attempt);
    }

    #[test]
    fn test_timing_serializes_as_millis() {
        let text = toml::to_string(&ScrollTiming::default()).unwrap();
        assert!(text.contains("first_attempt = 100"));
        assert!(text.contains("retry_delay = 400"));
        let parsed: ScrollTiming = toml::from_str(&text).unwrap();
        assert_eq!(parsed, ScrollTiming::default());
    }

    #[test]
    fn test_pending_scroll_due() {
        let now = Instant::now();
        let pending = PendingScroll::new(CONTACT_ANCHOR, now, ScrollTiming::default(), 3);
        assert!(!pending.is_due(now));
        assert!(pending.is_due(now + Duration::from_millis(100)));
        assert_eq!(pending.retries_left, 1);
    }

    #[test]
    fn test_section_anchors() {
        assert_eq!(Section::Contact.anchor(), "contact");
        assert_eq!(Section::Portfolio.anchor(), "portfolio");
    }
}
