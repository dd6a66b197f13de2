//! Executes core-built requests over real HTTP with `ureq`.

use todo_search_core::{HttpMethod, HttpRequest, HttpResponse, TransportError};

/// An agent that hands every status code back as data.
///
/// Status interpretation belongs to `TodoClient::parse_list_todos`, so 4xx
/// and 5xx responses must not turn into transport errors here.
pub fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

pub fn execute(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, TransportError> {
    let mut response = match req.method {
        HttpMethod::Get => {
            let mut builder = agent.get(&req.path);
            for (name, value) in &req.headers {
                builder = builder.header(name, value);
            }
            builder.call()
        }
    }
    .map_err(|e| TransportError(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| TransportError(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
