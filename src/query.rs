use std::io::Write;

use crate::config::SearchConfig;
use crate::lookup::Lookup;
use crate::search::{Effect, Rendered, SearchWidget};

/// The record was printed
pub const EXIT_OK: i32 = 0;
/// The lookup produced an error message instead of a record
pub const EXIT_NO_RECORD: i32 = 1;
/// Setup or output failed
pub const EXIT_FAILURE: i32 = 2;

/// Look up `query` once and print the record as `field<TAB>value` lines to `out`.
/// Error messages go to `err`. Returns the process exit code.
pub async fn run(
    query: String,
    lookup: &dyn Lookup,
    config: &SearchConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    let mut widget = SearchWidget::new(config);
    // The timer this schedules is pre-empted right away.
    widget.on_query_change(query);
    if let Effect::Lookup(request) = widget.on_search_pressed() {
        let outcome = lookup.fetch(&request.query).await;
        widget.on_lookup_finished(request.seq, outcome);
    }

    match widget.render() {
        Rendered::Table(rows) => {
            for (name, value) in rows {
                if writeln!(out, "{name}\t{value}").is_err() {
                    return EXIT_FAILURE;
                }
            }
            EXIT_OK
        }
        Rendered::Error(message) => {
            let _ = writeln!(err, "{message}");
            EXIT_NO_RECORD
        }
        Rendered::Nothing => EXIT_NO_RECORD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{
        LookupError, LookupFuture, LookupResult, EMPTY_INPUT_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
    };
    use serde_json::json;
    use std::sync::Mutex;

    /// Answers every query with the same outcome and records what was asked.
    struct CannedLookup {
        outcome: Result<LookupResult, LookupError>,
        calls: Mutex<Vec<String>>,
    }

    impl CannedLookup {
        fn new(outcome: Result<LookupResult, LookupError>) -> Self {
            Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl Lookup for CannedLookup {
        fn fetch(&self, query: &str) -> LookupFuture {
            self.calls.lock().unwrap().push(query.to_string());
            let outcome = self.outcome.clone();
            Box::pin(async move { outcome })
        }
    }

    async fn run_with(query: &str, lookup: &CannedLookup) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            query.to_string(),
            lookup,
            &SearchConfig::default(),
            &mut out,
            &mut err,
        )
        .await;
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[tokio::test]
    async fn record_is_printed_as_tab_separated_rows() {
        let record: LookupResult = [
            ("Name".to_string(), json!("Alice")),
            ("Age".to_string(), json!("")),
        ]
        .into_iter()
        .collect();
        let lookup = CannedLookup::new(Ok(record));

        let (code, out, err) = run_with("746", &lookup).await;
        assert_eq!(code, EXIT_OK);
        assert_eq!(out, "Name\tAlice\nAge\t-\n");
        assert_eq!(err, "");
        assert_eq!(*lookup.calls.lock().unwrap(), ["746"]);
    }

    #[tokio::test]
    async fn server_error_goes_to_stderr() {
        let lookup = CannedLookup::new(Err(LookupError::ServerReported("not found".into())));

        let (code, out, err) = run_with("999", &lookup).await;
        assert_eq!(code, EXIT_NO_RECORD);
        assert_eq!(out, "");
        assert_eq!(err, "not found\n");
    }

    #[tokio::test]
    async fn transport_failure_prints_fixed_message() {
        let lookup = CannedLookup::new(Err(LookupError::transport("connection refused")));

        let (code, out, err) = run_with("746", &lookup).await;
        assert_eq!(code, EXIT_NO_RECORD);
        assert_eq!(out, "");
        assert_eq!(err, format!("{TRANSPORT_FAILURE_MESSAGE}\n"));
    }

    #[tokio::test]
    async fn empty_query_reports_missing_input_without_lookup() {
        let lookup = CannedLookup::new(Ok(LookupResult::default()));

        let (code, out, err) = run_with("", &lookup).await;
        assert_eq!(code, EXIT_NO_RECORD);
        assert_eq!(out, "");
        assert_eq!(err, format!("{EMPTY_INPUT_MESSAGE}\n"));
        assert!(lookup.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_output_is_a_failure_exit() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let record: LookupResult = [("Name".to_string(), json!("Alice"))].into_iter().collect();
        let lookup = CannedLookup::new(Ok(record));
        let mut err = Vec::new();

        let code = run(
            "746".to_string(),
            &lookup,
            &SearchConfig::default(),
            &mut Closed,
            &mut err,
        )
        .await;
        assert_eq!(code, EXIT_FAILURE);
    }
}
