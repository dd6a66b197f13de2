//! The search widget: a headless component driven by host events.
//!
//! # Design
//! The widget stores one source collection and the last applied [`Query`].
//! The filtered view is recomputed from those two whenever it is read, so
//! there is no second container that could drift from the first.
//!
//! The fetch is the only asynchronous step and the widget never performs it.
//! [`SearchWidget::mount`] hands the host a [`FetchTicket`]; the host runs the
//! request and reports back through [`SearchWidget::complete_fetch`]. Each
//! mount and unmount bumps a generation counter, and a completion carrying a
//! stale generation is discarded instead of touching state.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::{FetchError, TransportError, ValidationError, FETCH_FAILED_MESSAGE};
use crate::filter::{filter_todos, EmptyQuery, Query};
use crate::form::QueryForm;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Todo;
use crate::view::View;

/// Behavior switches for a widget instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub empty_query: EmptyQuery,
}

/// The read the host must perform for one mount.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub generation: u64,
    pub request: HttpRequest,
}

/// What `complete_fetch` did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The collection was stored; carries the number of records.
    Loaded(usize),
    /// The fetch failed and the fixed error message is now shown.
    Failed,
    /// The result belonged to a torn-down or superseded mount.
    Discarded,
}

#[derive(Debug)]
pub struct SearchWidget {
    client: TodoClient,
    form: QueryForm,
    todos: Vec<Todo>,
    active_query: Option<Query>,
    loading: bool,
    error: Option<String>,
    generation: u64,
    pending: Option<u64>,
}

impl SearchWidget {
    pub fn new(client: TodoClient, options: SearchOptions) -> Self {
        Self {
            client,
            form: QueryForm::new(options.empty_query),
            todos: Vec::new(),
            active_query: None,
            loading: false,
            error: None,
            generation: 0,
            pending: None,
        }
    }

    /// Start the component's lifetime and return the read to perform.
    pub fn mount(&mut self) -> FetchTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        self.todos.clear();
        self.active_query = None;
        self.form.reset();
        self.loading = true;
        self.error = None;
        debug!(generation = self.generation, "widget mounted");
        FetchTicket {
            generation: self.generation,
            request: self.client.build_list_todos(),
        }
    }

    /// End the component's lifetime. Any in-flight fetch is orphaned.
    pub fn unmount(&mut self) {
        if let Some(generation) = self.pending.take() {
            debug!(generation, "unmounted with fetch in flight");
        }
        self.generation += 1;
        self.loading = false;
    }

    pub fn complete_fetch(
        &mut self,
        generation: u64,
        result: Result<HttpResponse, TransportError>,
    ) -> FetchOutcome {
        if self.pending != Some(generation) {
            debug!(generation, current = self.generation, "discarding stale fetch result");
            return FetchOutcome::Discarded;
        }
        self.pending = None;
        self.loading = false;

        let parsed = result
            .map_err(FetchError::from)
            .and_then(|response| self.client.parse_list_todos(response).map_err(FetchError::from));

        match parsed {
            Ok(todos) => {
                debug!(count = todos.len(), "todos loaded");
                let count = todos.len();
                self.todos = todos;
                self.active_query = None;
                FetchOutcome::Loaded(count)
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch todos");
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// Update the form's `query` field.
    pub fn input(&mut self, value: &str) {
        self.form.set_value(value);
    }

    /// Submit the form. On success the filtered view is replaced; on failure
    /// the view is left as it was and the inline error is shown.
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        let query = self.form.submit()?;
        debug!(query = query.as_str(), "search submitted");
        self.active_query = Some(query);
        Ok(())
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn active_query(&self) -> Option<&Query> {
        self.active_query.as_ref()
    }

    /// The filtered view: every record when no query has been applied.
    pub fn visible(&self) -> Vec<&Todo> {
        match &self.active_query {
            Some(query) => filter_todos(&self.todos, query),
            None => self.todos.iter().collect(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &QueryForm {
        &self.form
    }

    pub fn view(&self) -> View<'_> {
        View::new(self)
    }
}
