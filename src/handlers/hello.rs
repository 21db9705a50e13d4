//! # Greeting Handler
//!
//! Echoes the `name` query parameter back inside a fixed greeting template.

use axum::{Json, extract::Query};
use tracing::{debug, instrument};

use crate::models::MessageResponse;
use crate::utils::constant::{DEFAULT_NAME, VERSION_TAG};

/// Builds the greeting for `name`.
///
/// `name` is inserted verbatim; escaping is left to the JSON encoder.
pub fn greeting(name: &str) -> String {
    format!("Hello, {name}! — {VERSION_TAG}")
}

/// Greets the caller.
///
/// GET /api/hello?name=<name>
///
/// The query is read as a list of raw pairs, so no query string can make this
/// extractor reject the request. The first `name` wins. Only a missing `name`
/// falls back to [`DEFAULT_NAME`]; `?name=` greets the empty string.
///
/// # Returns
///
/// - `200 OK` with [`MessageResponse`]
#[instrument(skip_all)]
pub async fn hello(Query(params): Query<Vec<(String, String)>>) -> Json<MessageResponse> {
    let name = params
        .iter()
        .find(|(key, _)| key == "name")
        .map_or(DEFAULT_NAME, |(_, value)| value.as_str());
    debug!(name, "Greeting requested");

    Json(MessageResponse {
        message: greeting(name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> Query<Vec<(String, String)>> {
        Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test_log::test]
    fn greeting_substitutes_name_literally() {
        assert_eq!(
            greeting("\"<Ünïcødé>\""),
            format!("Hello, \"<Ünïcødé>\"! — {VERSION_TAG}")
        );
    }

    #[test_log::test(tokio::test)]
    async fn missing_name_defaults_to_world() {
        let Json(body) = hello(query(&[])).await;
        assert_eq!(body.message, format!("Hello, world! — {VERSION_TAG}"));
    }

    #[test_log::test(tokio::test)]
    async fn empty_name_is_greeted_verbatim() {
        let Json(body) = hello(query(&[("name", "")])).await;
        assert_eq!(body.message, format!("Hello, ! — {VERSION_TAG}"));
    }

    #[test_log::test(tokio::test)]
    async fn first_name_wins_when_repeated() {
        let Json(body) = hello(query(&[("name", "a"), ("name", "b")])).await;
        assert_eq!(body.message, format!("Hello, a! — {VERSION_TAG}"));
    }

    #[test_log::test(tokio::test)]
    async fn other_parameters_are_ignored() {
        let Json(body) = hello(query(&[("name", "Maple"), ("lang", "fr")])).await;
        assert_eq!(body.message, format!("Hello, Maple! — {VERSION_TAG}"));
    }
}
