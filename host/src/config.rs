//! Command-line and environment configuration for the host.

use clap::{Parser, ValueEnum};
use todo_search_core::{EmptyQuery, SearchOptions, TodoClient, DEFAULT_BASE_URL};

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-search")]
#[command(about = "Search a remote todo collection by title, user ID, or todo ID", long_about = None)]
pub struct Config {
    /// Base URL serving the collection at `/todos`
    #[arg(long, env = "TODO_SEARCH_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// How a blank query is handled
    #[arg(long, env = "TODO_SEARCH_EMPTY_QUERY", value_enum, default_value_t = EmptyQueryArg::Reject)]
    pub empty_query: EmptyQueryArg,

    /// Output format for rendered views
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmptyQueryArg {
    /// Block the submission with an inline error
    Reject,
    /// Show the whole collection
    ShowAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Html,
}

impl From<EmptyQueryArg> for EmptyQuery {
    fn from(arg: EmptyQueryArg) -> Self {
        match arg {
            EmptyQueryArg::Reject => EmptyQuery::Reject,
            EmptyQueryArg::ShowAll => EmptyQuery::ShowAll,
        }
    }
}

impl Config {
    pub fn client(&self) -> TodoClient {
        TodoClient::new(&self.base_url)
    }

    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            empty_query: self.empty_query.into(),
        }
    }
}
