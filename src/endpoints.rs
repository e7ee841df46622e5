//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g. '/transacoes/{transaction_id}/editar',
//! use [format_endpoint].

/// The marketing landing page.
pub const ROOT: &str = "/";
/// The dashboard with summary cards, charts and goal progress.
pub const DASHBOARD_VIEW: &str = "/painel";
/// The page for displaying a user's transactions.
pub const TRANSACTIONS_VIEW: &str = "/transacoes";
/// The page for creating a new transaction.
pub const NEW_TRANSACTION_VIEW: &str = "/transacoes/nova";
/// The page for editing an existing transaction.
pub const EDIT_TRANSACTION_VIEW: &str = "/transacoes/{transaction_id}/editar";
/// The page for listing all savings goals.
pub const GOALS_VIEW: &str = "/metas";
/// The page for creating a new savings goal.
pub const NEW_GOAL_VIEW: &str = "/metas/nova";
/// The page for editing an existing savings goal.
pub const EDIT_GOAL_VIEW: &str = "/metas/{goal_id}/editar";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/erro";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create a transaction.
pub const TRANSACTIONS_API: &str = "/api/transacoes";
/// The route to update or delete a single transaction.
pub const TRANSACTION: &str = "/api/transacoes/{transaction_id}";
/// The route to create a savings goal.
pub const GOALS_API: &str = "/api/metas";
/// The route to update or delete a single savings goal.
pub const GOAL: &str = "/api/metas/{goal_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a brace-delimited name such as '{goal_id}' in
/// '/metas/{goal_id}/editar'. Endpoint paths are assumed to contain at most
/// one parameter; a path without one is returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => format!(
            "{}{}{}",
            &endpoint_path[..start],
            id,
            &endpoint_path[end + 1..]
        ),
        _ => endpoint_path.to_owned(),
    }
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::NEW_TRANSACTION_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EDIT_TRANSACTION_VIEW);
        assert_endpoint_is_valid_uri(endpoints::GOALS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::NEW_GOAL_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EDIT_GOAL_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);

        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_API);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::GOALS_API);
        assert_endpoint_is_valid_uri(endpoints::GOAL);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/metas/{goal_id}/editar", 7);

        assert_eq!(formatted_path, "/metas/7/editar");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/metas", 7);

        assert_eq!(formatted_path, "/metas");
    }

    #[test]
    fn parameter_at_the_end() {
        let formatted_path = format_endpoint("/api/transacoes/{transaction_id}", 3);

        assert_eq!(formatted_path, "/api/transacoes/3");
    }
}
