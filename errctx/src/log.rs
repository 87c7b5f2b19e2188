//! Emitting records as `tracing` events

use crate::Error;

impl Error {
    /// Emit this record as a single `tracing` event.
    ///
    /// Kinds that map to a server error log at `error`, the rest at `warn`.
    /// The event message is the full chained message.
    pub fn trace(&self) {
        let status = self.status_code();
        let detail = self
            .meta()
            .and_then(|meta| serde_json::to_string(meta).ok())
            .unwrap_or_default();

        if status.is_server_error() {
            tracing::error!(
                kind = %self.kind(),
                code = self.kind().code(),
                status = status.as_u16(),
                detail = %detail,
                "{}",
                self
            );
        } else {
            tracing::warn!(
                kind = %self.kind(),
                code = self.kind().code(),
                status = status.as_u16(),
                detail = %detail,
                "{}",
                self
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{e, Error, Kind, MetaData};
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(err: &Error) -> String {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || err.trace());

        let bytes = out.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_server_error_kinds_log_at_error() {
        let err = e![
            crate::new("refused"),
            "connect db",
            Kind::Transient,
            MetaData::new().with("port", 5432)
        ]
        .unwrap();

        let line = capture(&err);
        assert!(line.contains("ERROR"), "{}", line);
        assert!(!line.contains("WARN"), "{}", line);
        assert!(line.contains("connect db: refused"), "{}", line);
        assert!(line.contains("kind=transient error"), "{}", line);
        assert!(line.contains("code=10"), "{}", line);
        assert!(line.contains("status=503"), "{}", line);
        assert!(line.contains(r#"detail={"port":5432}"#), "{}", line);
    }

    #[test]
    fn test_client_error_kinds_log_at_warn() {
        let err = e![crate::new("bad input"), Kind::Invalid].unwrap();

        let line = capture(&err);
        assert!(line.contains("WARN"), "{}", line);
        assert!(!line.contains("ERROR"), "{}", line);
        assert!(line.contains("code=1"), "{}", line);
        assert!(line.contains("status=400"), "{}", line);
    }
}
