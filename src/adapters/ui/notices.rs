//! NoticePort for the terminal. Coloured one-liners, mirrored to tracing at debug level.

use crate::domain::Notice;
use crate::ports::NoticePort;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stderr};
use tracing::debug;

pub struct TerminalNotices;

impl NoticePort for TerminalNotices {
    fn notify(&self, notice: Notice) {
        // Already printed below; keep the tracing copy out of the default filter.
        debug!(notice = %notice, problem = notice.is_problem(), "notice");
        let color = if notice.is_problem() {
            Color::Yellow
        } else {
            Color::Green
        };
        let mut err = stderr();
        let _ = err.execute(SetForegroundColor(color));
        let _ = err.execute(Print(format!("{}\r\n", notice)));
        let _ = err.execute(ResetColor);
        let _ = err.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logged_at(level: tracing::Level, notice: Notice) -> String {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || TerminalNotices.notify(notice));
        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn test_notice_not_logged_at_info() {
        assert!(logged_at(tracing::Level::INFO, Notice::UploadFailed).is_empty());
        assert!(
            logged_at(
                tracing::Level::INFO,
                Notice::LocationObtained(Coordinates::new(1.0, 2.0))
            )
            .is_empty()
        );
    }

    #[test]
    fn test_notice_logged_at_debug() {
        let text = logged_at(tracing::Level::DEBUG, Notice::MissingInput);
        assert!(text.contains("problem=true"), "{text}");
    }
}
