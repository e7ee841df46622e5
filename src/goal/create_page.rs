//! The page for creating a new savings goal.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    endpoints,
    goal::form::{GoalFormDefaults, goal_form_fields},
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
    validation::ValidationErrors,
};

/// Render the page for creating a savings goal.
pub async fn get_new_goal_page() -> Response {
    let nav_bar = NavBar::new(endpoints::GOALS_VIEW).into_html();
    let form = new_goal_form_view(&GoalFormDefaults::for_new(), &ValidationErrors::new());

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Adicionar Nova Meta Financeira" }
            (form)
        }
    };

    base("Nova Meta", &[], &content).into_response()
}

/// The creation form, re-rendered with messages when validation fails.
pub(super) fn new_goal_form_view(
    defaults: &GoalFormDefaults<'_>,
    errors: &ValidationErrors,
) -> Markup {
    html! {
        form
            hx-post=(endpoints::GOALS_API)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            (goal_form_fields(defaults, errors))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Adicionar Meta" }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::{
        endpoints,
        test_utils::{
            assert_form_input, assert_form_submit_button, assert_hx_endpoint, assert_valid_html,
            must_get_form, parse_html_document,
        },
    };

    use super::get_new_goal_page;

    #[tokio::test]
    async fn render_page() {
        let response = get_new_goal_page().await;

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::GOALS_API, "hx-post");
        assert_form_input(&form, "name", "text");
        assert_form_input(&form, "target_amount", "number");
        assert_form_submit_button(&form);
    }
}
