use std::sync::Mutex;

use tracing::{debug, info};

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Section headline shown before a chart
    Headline,
    Info,
    /// Advisory replacing a chart that could not be produced
    Error,
}

/// Capability for surfacing messages to the user.
///
/// Renderers never talk to a terminal or UI toolkit directly; they call `report`.
pub trait Reporter: Send + Sync {
    fn report(&self, kind: NoticeKind, message: &str);

    fn show_headline(&self, message: &str) {
        self.report(NoticeKind::Headline, message);
    }

    fn show_info(&self, message: &str) {
        self.report(NoticeKind::Info, message);
    }

    fn show_error(&self, message: &str) {
        self.report(NoticeKind::Error, message);
    }
}

/// Reporter writing to stdout/stderr of the current process
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Headline => {
                info!("{}", message);
                println!();
                println!("{}", message);
                println!("{}", "-".repeat(message.chars().count()));
            }
            NoticeKind::Info => {
                info!("{}", message);
                println!("{}", message);
            }
            NoticeKind::Error => {
                debug!("Displaying advisory to user: {}", message);
                eprintln!("error: {}", message);
            }
        }
    }
}

/// Reporter keeping every notice in memory, in order
#[derive(Debug, Default)]
pub struct MemoryReporter {
    notices: Mutex<Vec<(NoticeKind, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    pub fn messages_of(&self, kind: NoticeKind) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, message)| message)
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages_of(NoticeKind::Error)
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, kind: NoticeKind, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push((kind, message.to_string()));
        }
    }
}
