use std::cell::RefCell;
use std::sync::Once;

/// URL of a local port nothing listens on, for connection-refused cases.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    format!("http://127.0.0.1:{port}")
}

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Keeps this crate's log records per thread, so parallel tests don't mix.
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if record.target().starts_with(env!("CARGO_CRATE_NAME")) {
            RECORDS.with(|records| {
                records
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Install the capturing logger and clear this thread's records.
///
/// Only records emitted on the calling thread are seen, which covers handlers
/// driven by a current-thread `#[tokio::test]` runtime.
pub fn capture_logs() {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });

    RECORDS.with(|records| records.borrow_mut().clear());
}

pub fn captured_logs() -> Vec<(log::Level, String)> {
    RECORDS.with(|records| records.borrow().clone())
}
