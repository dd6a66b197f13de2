//! The host event loop: one widget, one fetch, one line of input per
//! submission.
//!
//! # Design
//! The loop runs on whatever runtime calls it; the binary uses a
//! current-thread runtime so widget state never leaves one thread. The fetch
//! is the only blocking work and runs on the blocking pool. Closing input
//! lets a pending fetch finish before teardown; an interrupt tears the
//! widget down immediately and the late result is dropped.

use std::future::Future;
use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use todo_search_core::{FetchOutcome, SearchWidget, TransportError};

use crate::config::{Config, Format};
use crate::transport;

/// What happened during one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// `None` when the widget was torn down before the fetch resolved.
    pub outcome: Option<FetchOutcome>,
    pub submissions: usize,
    pub blocked: usize,
}

pub async fn run<R, W>(config: &Config, input: R, output: W) -> anyhow::Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    run_until(config, input, output, tokio::signal::ctrl_c()).await
}

/// Like [`run`], but torn down when `interrupt` resolves to `Ok`. An `Err`
/// means no interrupt source is available; the session carries on without
/// one.
pub async fn run_until<R, W, I>(
    config: &Config,
    input: R,
    mut output: W,
    interrupt: I,
) -> anyhow::Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    I: Future<Output = std::io::Result<()>>,
{
    let mut widget = SearchWidget::new(config.client(), config.options());
    let ticket = widget.mount();
    let generation = ticket.generation;
    info!(method = ticket.request.method.as_str(), url = %ticket.request.path, "fetching todos");

    let agent = transport::agent();
    let mut fetch = tokio::task::spawn_blocking(move || transport::execute(&agent, ticket.request));
    let mut fetch_pending = true;
    let mut input_open = true;

    let mut summary = SessionSummary {
        outcome: None,
        submissions: 0,
        blocked: 0,
    };

    render(&widget, config.format, &mut output)?;

    let mut lines = input.lines();
    tokio::pin!(interrupt);
    let mut interrupt_armed = true;

    while fetch_pending || input_open {
        tokio::select! {
            joined = &mut fetch, if fetch_pending => {
                fetch_pending = false;
                let result = joined.unwrap_or_else(|e| Err(TransportError(e.to_string())));
                let outcome = widget.complete_fetch(generation, result);
                info!(?outcome, "fetch completed");
                summary.outcome = Some(outcome);
                render(&widget, config.format, &mut output)?;
            }
            line = lines.next_line(), if input_open => {
                match line? {
                    Some(line) => {
                        widget.input(&line);
                        summary.submissions += 1;
                        if let Err(err) = widget.submit() {
                            debug!(%err, "submission blocked");
                            summary.blocked += 1;
                        }
                        render(&widget, config.format, &mut output)?;
                    }
                    None => {
                        debug!("input closed");
                        input_open = false;
                    }
                }
            }
            signal = &mut interrupt, if interrupt_armed => {
                interrupt_armed = false;
                match signal {
                    Ok(()) => {
                        info!("interrupted");
                        break;
                    }
                    Err(err) => warn!(%err, "interrupt handler unavailable"),
                }
            }
        }
    }

    widget.unmount();
    Ok(summary)
}

fn render<W: Write>(widget: &SearchWidget, format: Format, output: &mut W) -> std::io::Result<()> {
    let view = widget.view();
    match format {
        Format::Text => writeln!(output, "{view}"),
        Format::Html => write!(output, "{}", view.to_html()),
    }?;
    output.flush()
}
