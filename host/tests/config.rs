use clap::Parser;
use todo_search::{Config, EmptyQueryArg, Format};
use todo_search_core::EmptyQuery;

#[test]
fn defaults_target_public_endpoint_and_reject_blank_queries() {
    let config = Config::try_parse_from(["todo-search"]).unwrap();
    assert_eq!(config.base_url, "https://jsonplaceholder.typicode.com");
    assert_eq!(config.empty_query, EmptyQueryArg::Reject);
    assert_eq!(config.format, Format::Text);
    assert_eq!(config.options().empty_query, EmptyQuery::Reject);
}

#[test]
fn flags_override_defaults() {
    let config = Config::try_parse_from([
        "todo-search",
        "--base-url",
        "http://127.0.0.1:3000/",
        "--empty-query",
        "show-all",
        "--format",
        "html",
    ])
    .unwrap();
    assert_eq!(config.options().empty_query, EmptyQuery::ShowAll);
    assert_eq!(config.format, Format::Html);
    assert_eq!(
        config.client().build_list_todos().path,
        "http://127.0.0.1:3000/todos"
    );
}

#[test]
fn unknown_policy_is_rejected() {
    let result = Config::try_parse_from(["todo-search", "--empty-query", "maybe"]);
    assert!(result.is_err());
}
