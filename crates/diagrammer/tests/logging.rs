//! Tests for logging initialization and tracing during requests

use diagrammer::core::logging::{init_logging, LogFormat};
use diagrammer::prelude::*;
use diagrammer::render;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Collects formatted log lines in memory
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("PRETTY").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert!(LogFormat::from_str("yaml").is_err());
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_init_logging_repeated_calls_do_not_panic() {
    // Only the first call can install the global subscriber
    let _ = init_logging(Some("debug"), Some("compact"));
    let _ = init_logging(Some("warn"), Some("json"));
    let _ = init_logging(None, None);
}

#[test]
fn test_requests_with_trace_subscriber() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .set_default();

    let graph = render("Graph", "Line", "(10,20)").unwrap();
    assert!(graph.contains("Line calc at (10,20)"));

    // Log events never land in the diagram text
    let ignored = render("Unknown", "X", "(0,0)").unwrap();
    assert!(ignored.is_empty());
}

#[test]
fn test_lenient_rejections_are_logged_as_warnings() {
    let logs = CapturedLogs::default();
    let _guard = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .set_default();

    let facade = DiagramFacade::new();
    let mut out = Vec::new();
    facade.request("Unknown", "X", "(0,0)", &mut out).unwrap();
    facade.request("Graph", "Pie", "(0,0)", &mut out).unwrap();
    assert!(out.is_empty());

    let captured = logs.contents();
    assert_eq!(captured.matches("Ignoring request").count(), 2);
    assert_eq!(captured.matches("WARN").count(), 2);
    assert!(captured.contains("Unknown element category: Unknown"));
    assert!(captured.contains("Unknown Graph variant: Pie"));

    // Successful requests stay below the warning level
    facade.request("Figure", "CircleColor", "(5,5)", &mut out).unwrap();
    assert_eq!(logs.contents(), captured);
}

#[test]
fn test_strict_rejection_is_logged_and_returned() {
    let logs = CapturedLogs::default();
    let _guard = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .set_default();

    let facade = DiagramFacade::with_config(FacadeConfig::default().with_policy(RequestPolicy::Strict));
    let err = facade.render_request("Graph", "Pie", "(0,0)").unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DiagramError>(),
        Some(DiagramError::UnknownVariant { .. })
    ));
    let captured = logs.contents();
    assert!(captured.contains("Rejecting request"));
    assert!(!captured.contains("Ignoring request"));
}
