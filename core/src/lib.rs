//! Headless core of the todo search widget.
//!
//! # Overview
//! Builds the one `HttpRequest` the widget needs and parses the matching
//! `HttpResponse` without touching the network (host-does-IO pattern). On
//! top of that sits a small component: a single-field search form, a pure
//! filter over the fetched collection, and a render tree the host turns into
//! HTML or text.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - `SearchWidget` owns all component state and is mutated only through its
//!   event methods (`mount`, `complete_fetch`, `input`, `submit`, `unmount`).
//! - The filtered view is derived on demand from the source collection and
//!   the last applied `Query`; it is never stored.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod filter;
pub mod form;
pub mod http;
pub mod types;
pub mod view;
pub mod widget;

pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use error::{ApiError, FetchError, TransportError, ValidationError, FETCH_FAILED_MESSAGE};
pub use filter::{filter_todos, EmptyQuery, Query};
pub use form::QueryForm;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::Todo;
pub use view::{ListView, Row, View};
pub use widget::{FetchOutcome, FetchTicket, SearchOptions, SearchWidget};
