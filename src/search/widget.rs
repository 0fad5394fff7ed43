use std::time::Duration;

use super::debounce::{Debouncer, Ticket};
use crate::config::SearchConfig;
use crate::lookup::{LookupError, LookupResult};

/// What the host must do after a widget operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Call [`SearchWidget::on_debounce_elapsed`] with `ticket` once `delay` has passed
    Schedule { ticket: Ticket, delay: Duration },
    /// Issue one request and report back through [`SearchWidget::on_lookup_finished`]
    Lookup(LookupRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub seq: u64,
    pub query: String,
}

/// What the form shows below the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<'a> {
    Nothing,
    Error(&'a str),
    /// `(field, value)` rows in response order, falsy values already replaced by `-`
    Table(Vec<(String, String)>),
}

/// State of the serial number lookup form.
///
/// The widget never performs I/O itself: each operation returns an [`Effect`]
/// that the host turns into a timer or a request, and results come back
/// through [`on_debounce_elapsed`](Self::on_debounce_elapsed) and
/// [`on_lookup_finished`](Self::on_lookup_finished).
#[derive(Debug)]
pub struct SearchWidget {
    query: String,
    result: Option<LookupResult>,
    error: Option<String>,
    debouncer: Debouncer,
    debounce: Duration,
    /// Sequence number of the most recently issued lookup
    last_seq: u64,
    discard_stale: bool,
}

impl SearchWidget {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            query: String::new(),
            result: None,
            error: None,
            debouncer: Debouncer::new(),
            debounce: config.debounce(),
            last_seq: 0,
            discard_stale: config.discard_stale_responses,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn result(&self) -> Option<&LookupResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pending_timer(&self) -> Option<Ticket> {
        self.debouncer.pending()
    }

    /// The input text changed
    pub fn on_query_change(&mut self, text: String) -> Effect {
        self.query = text;

        if self.query.is_empty() {
            self.debouncer.cancel();
            self.result = None;
            self.error = None;
            if self.discard_stale {
                // Nothing issued so far may land on the cleared form.
                self.last_seq += 1;
            }
            return Effect::None;
        }

        let ticket = self.debouncer.schedule();
        tracing::debug!("Scheduled lookup {:?} for '{}'", ticket, self.query);
        Effect::Schedule {
            ticket,
            delay: self.debounce,
        }
    }

    /// A debounce timer elapsed
    pub fn on_debounce_elapsed(&mut self, ticket: Ticket) -> Effect {
        if !self.debouncer.fire(ticket) {
            tracing::debug!("Ignoring superseded timer {:?}", ticket);
            return Effect::None;
        }
        let query = self.query.clone();
        self.perform_lookup(&query)
    }

    /// The search button was pressed (or Enter in the input)
    pub fn on_search_pressed(&mut self) -> Effect {
        if self.debouncer.cancel() {
            tracing::debug!("Manual search pre-empted pending timer");
        }
        let query = self.query.clone();
        self.perform_lookup(&query)
    }

    pub fn perform_lookup(&mut self, query: &str) -> Effect {
        if query.is_empty() {
            self.show_error(LookupError::EmptyInput);
            return Effect::None;
        }

        self.last_seq += 1;
        Effect::Lookup(LookupRequest {
            seq: self.last_seq,
            query: query.to_string(),
        })
    }

    /// A lookup issued with `seq` completed. Returns whether the outcome was applied.
    ///
    /// Completions are applied in arrival order unless stale responses are discarded.
    pub fn on_lookup_finished(
        &mut self,
        seq: u64,
        outcome: Result<LookupResult, LookupError>,
    ) -> bool {
        if self.discard_stale && seq != self.last_seq {
            tracing::debug!("Dropping stale response #{} (latest #{})", seq, self.last_seq);
            return false;
        }

        match outcome {
            Ok(result) => {
                tracing::debug!("Lookup #{} returned {} fields", seq, result.len());
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => self.show_error(e),
        }
        true
    }

    pub fn render(&self) -> Rendered<'_> {
        if let Some(error) = &self.error {
            Rendered::Error(error)
        } else if let Some(result) = &self.result {
            Rendered::Table(result.rows())
        } else {
            Rendered::Nothing
        }
    }

    fn show_error(&mut self, error: LookupError) {
        self.error = Some(error.user_message());
        self.result = None;
    }
}
