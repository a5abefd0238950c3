//! Verdict type and its renderings: the legacy `accessible`/`blocking`
//! wire pair and the two-line human-readable log form.

use crate::log::Logger;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use wc_types::BlockingReason;

/// The engine's verdict for one measurement run.
///
/// `accessible` is absent when the run could not be interpreted at all,
/// `Some(true)` when we found no blocking, `Some(false)` when we did.
/// `blocking_reason` is meaningful only when `accessible` is
/// `Some(false)`; it never reaches the wire directly, it only feeds
/// [`Summary::blocking`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub accessible: Option<bool>,
    pub blocking_reason: Option<BlockingReason>,
}

/// The rendered tri-state expected by data consumers: `null` for a run
/// that failed to produce a verdict, `false` for no blocking, a reason
/// string for blocking of that kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Blocking {
    Undetermined,
    NotBlocked,
    Blocked(BlockingReason),
}

impl Summary {
    pub fn undetermined() -> Self {
        Self::default()
    }

    pub fn accessible() -> Self {
        Self {
            accessible: Some(true),
            blocking_reason: None,
        }
    }

    pub fn blocked(reason: BlockingReason) -> Self {
        Self {
            accessible: Some(false),
            blocking_reason: Some(reason),
        }
    }

    /// Render the legacy tri-state.
    ///
    /// `accessible == Some(true)` renders as [`Blocking::NotBlocked`]
    /// (wire `false`), never as `null`: mobile apps flag failed runs by
    /// `blocking` being `null` and successes by it being `false`, so the
    /// distinction must survive even though the abstract model would call
    /// both "no reason". Intentional legacy compatibility; do not
    /// simplify.
    pub fn blocking(&self) -> Blocking {
        if self.accessible == Some(true) {
            return Blocking::NotBlocked;
        }
        match self.blocking_reason {
            Some(reason) => Blocking::Blocked(reason),
            None => Blocking::Undetermined,
        }
    }

    /// Emit the stable two-line log form through the injected logger.
    pub fn log(&self, logger: &dyn Logger) {
        logger.info(&format!("Blocking {}", opt_str(self.blocking_reason)));
        logger.info(&format!("Accessible {}", opt_bool(self.accessible)));
    }
}

fn opt_str(value: Option<BlockingReason>) -> String {
    match value {
        Some(reason) => reason.as_str().to_string(),
        None => "nil".to_string(),
    }
}

fn opt_bool(value: Option<bool>) -> String {
    match value {
        Some(b) => b.to_string(),
        None => "nil".to_string(),
    }
}

impl Serialize for Blocking {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undetermined => serializer.serialize_none(),
            Self::NotBlocked => serializer.serialize_bool(false),
            Self::Blocked(reason) => serializer.serialize_str(reason.as_str()),
        }
    }
}

// The wire carries exactly `accessible` and the rendered `blocking`;
// `blocking_reason` stays internal.
impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_struct("Summary", 2)?;
        out.serialize_field("accessible", &self.accessible)?;
        out.serialize_field("blocking", &self.blocking())?;
        out.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CollectingLogger {
        lines: Mutex<Vec<String>>,
    }

    impl Logger for CollectingLogger {
        fn info(&self, line: &str) {
            self.lines.lock().unwrap().push(line.to_string());
        }
    }

    #[test]
    fn accessible_renders_false_not_null() {
        assert_eq!(Summary::accessible().blocking(), Blocking::NotBlocked);
    }

    #[test]
    fn undetermined_renders_null() {
        assert_eq!(Summary::undetermined().blocking(), Blocking::Undetermined);
    }

    #[test]
    fn blocked_renders_reason() {
        let summary = Summary::blocked(BlockingReason::TcpIp);
        assert_eq!(summary.blocking(), Blocking::Blocked(BlockingReason::TcpIp));
    }

    #[test]
    fn log_lines_are_stable() {
        let logger = CollectingLogger::default();
        Summary::blocked(BlockingReason::HttpDiff).log(&logger);
        let lines = logger.lines.lock().unwrap();
        assert_eq!(lines.as_slice(), ["Blocking http-diff", "Accessible false"]);
    }

    #[test]
    fn log_uses_nil_for_absent() {
        let logger = CollectingLogger::default();
        Summary::undetermined().log(&logger);
        let lines = logger.lines.lock().unwrap();
        assert_eq!(lines.as_slice(), ["Blocking nil", "Accessible nil"]);
    }
}
