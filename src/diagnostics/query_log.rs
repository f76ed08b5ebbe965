use bevy::prelude::Resource;
use chrono::Utc;
use crossbeam_channel::Sender;

/// Sink for the one-line summaries the locator writes after every query.
pub trait QueryLog: Send + Sync {
    fn log(&self, line: &str);
}

/// Drops every line.
pub struct Silent;

impl QueryLog for Silent {
    fn log(&self, _line: &str) {}
}

/// Forwards lines to the tracing subscriber.
pub struct Verbose;

impl QueryLog for Verbose {
    fn log(&self, line: &str) {
        tracing::info!(target: "world_locator", "{}", line);
    }
}

/// Sends timestamped lines over a channel, for consumers outside the app.
pub struct ChannelLog {
    sender: Sender<String>,
}

impl ChannelLog {
    pub fn new(sender: Sender<String>) -> Self {
        Self { sender }
    }
}

impl QueryLog for ChannelLog {
    fn log(&self, line: &str) {
        // A dropped receiver just means nobody is listening anymore.
        let _ = self.sender.send(format!("{} - {}", Utc::now().to_rfc3339(), line));
    }
}

/// The query log chosen once at app setup.
#[derive(Resource)]
pub struct LocatorLog(Box<dyn QueryLog>);

impl LocatorLog {
    pub fn new(log: impl QueryLog + 'static) -> Self {
        Self(Box::new(log))
    }

    pub fn from_debug_flag(debug: bool) -> Self {
        if debug {
            Self::new(Verbose)
        } else {
            Self::new(Silent)
        }
    }

    pub fn channel(sender: Sender<String>) -> Self {
        Self::new(ChannelLog::new(sender))
    }
}

impl QueryLog for LocatorLog {
    fn log(&self, line: &str) {
        self.0.log(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_log_prefixes_a_timestamp() {
        let (tx, rx) = crossbeam_channel::unbounded();
        LocatorLog::channel(tx).log("[FindMobile] - Found 0 objects");

        let line = rx.try_recv().unwrap();
        assert!(line.ends_with(" - [FindMobile] - Found 0 objects"));
    }
}
