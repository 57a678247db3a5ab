use std::time::{Duration, Instant};

/// Hands a URL-like token to whatever opens links on this system.
pub trait UrlOpener: Send {
    fn open(&mut self, target: &str) -> std::io::Result<()>;
}

/// Opener that only records the request in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingUrlOpener;

impl UrlOpener for LoggingUrlOpener {
    fn open(&mut self, target: &str) -> std::io::Result<()> {
        tracing::info!(url = target, "no url opener configured");
        Ok(())
    }
}

#[cfg(feature = "system_opener")]
pub use system_opener::SystemUrlOpener;

#[cfg(feature = "system_opener")]
mod system_opener {
    use super::*;

    /// Wrapper around the [`open`](https://docs.rs/open) crate
    ///
    /// Requires that the feature `system_opener` is enabled
    #[derive(Debug, Default, Clone, Copy)]
    pub struct SystemUrlOpener;

    impl UrlOpener for SystemUrlOpener {
        fn open(&mut self, target: &str) -> std::io::Result<()> {
            open::that(target)
        }
    }
}

/// Delays URL opens so a repeated request does not open the same link twice.
///
/// Nothing runs in the background: the host polls [`OpenScheduler::take_due`].
#[derive(Debug, Clone)]
pub struct OpenScheduler {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl OpenScheduler {
    pub fn new(delay: Duration) -> Self {
        OpenScheduler {
            delay,
            pending: None,
        }
    }

    /// Queue `target` to open once the delay has passed.
    ///
    /// Returns `false` if the same target is already waiting. A different
    /// target replaces the waiting one.
    pub fn schedule(&mut self, target: &str, now: Instant) -> bool {
        if matches!(&self.pending, Some((pending, _)) if pending == target) {
            return false;
        }
        self.pending = Some((target.to_string(), now + self.delay));
        true
    }

    /// The waiting target, if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        let is_due = self.pending.as_ref().is_some_and(|(_, due)| *due <= now);
        if is_due {
            self.pending.take().map(|(target, _)| target)
        } else {
            None
        }
    }

    /// Target waiting to be opened
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_ref().map(|(target, _)| target.as_str())
    }

    /// Forget the waiting target
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl Default for OpenScheduler {
    fn default() -> Self {
        OpenScheduler::new(Duration::from_millis(500))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn opens_only_after_delay() {
        let mut scheduler = OpenScheduler::default();
        let now = Instant::now();

        assert!(scheduler.schedule("https://example.com", now));
        assert_eq!(scheduler.take_due(now + Duration::from_millis(100)), None);
        assert_eq!(
            scheduler.take_due(now + Duration::from_millis(500)),
            Some("https://example.com".into())
        );
        assert_eq!(scheduler.pending(), None);
    }

    #[test]
    fn repeated_request_is_debounced() {
        let mut scheduler = OpenScheduler::default();
        let now = Instant::now();

        assert!(scheduler.schedule("www.example.com", now));
        assert!(!scheduler.schedule("www.example.com", now + Duration::from_millis(10)));
        assert_eq!(
            scheduler.take_due(now + Duration::from_millis(500)),
            Some("www.example.com".into())
        );
        assert_eq!(scheduler.take_due(now + Duration::from_secs(5)), None);
    }

    #[test]
    fn newer_target_replaces_pending() {
        let mut scheduler = OpenScheduler::new(Duration::ZERO);
        let now = Instant::now();

        scheduler.schedule("a://one", now);
        scheduler.schedule("b://two", now);
        assert_eq!(scheduler.take_due(now), Some("b://two".into()));
    }
}
