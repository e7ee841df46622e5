//! Shared form fields for creating and editing savings goals.

use maud::{Markup, html};

use crate::{
    goal::core::{Goal, GoalFormData},
    html::{FORM_ERROR_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    tag::IncomeTag,
    validation::ValidationErrors,
};

/// The values a goal form is rendered with, kept as raw strings so a rejected
/// submission can be re-rendered exactly as entered.
pub(super) struct GoalFormDefaults<'a> {
    pub name: &'a str,
    pub target_amount: String,
    pub tag: &'a str,
}

impl<'a> GoalFormDefaults<'a> {
    /// Defaults for an empty form.
    pub fn for_new() -> Self {
        Self {
            name: "",
            target_amount: String::new(),
            tag: "",
        }
    }

    /// Defaults echoing a submitted form, e.g. after a validation failure.
    pub fn from_form(form: &'a GoalFormData) -> Self {
        Self {
            name: &form.name,
            target_amount: form.target_amount.clone(),
            tag: &form.tag,
        }
    }

    /// Defaults pre-filled from a stored goal, for the edit form.
    pub fn from_goal(goal: &'a Goal) -> Self {
        Self {
            name: &goal.name,
            target_amount: format!("{:.2}", goal.target_amount),
            tag: goal.tag.as_str(),
        }
    }
}

/// Renders the shared goal form fields with any validation messages inline.
pub(super) fn goal_form_fields(
    defaults: &GoalFormDefaults<'_>,
    errors: &ValidationErrors,
) -> Markup {
    let field_error = |field: &str| {
        html! {
            @if let Some(message) = errors.message_for(field) {
                p class=(FORM_ERROR_STYLE) { (message) }
            }
        }
    };

    html! {
        div
        {
            label
                for="name"
                class=(FORM_LABEL_STYLE)
            {
                "Nome da meta"
            }

            input
                name="name"
                id="name"
                type="text"
                placeholder="Ex: Viagem, Reserva de emergência"
                value=(defaults.name)
                required
                class=(FORM_TEXT_INPUT_STYLE);

            (field_error("name"))
        }

        div
        {
            label
                for="target_amount"
                class=(FORM_LABEL_STYLE)
            {
                "Valor alvo (R$)"
            }

            input
                name="target_amount"
                id="target_amount"
                type="number"
                step="0.01"
                min="0.01"
                placeholder="0.00"
                value=(defaults.target_amount)
                required
                class=(FORM_TEXT_INPUT_STYLE);

            (field_error("target_amount"))
        }

        div
        {
            label
                for="tag"
                class=(FORM_LABEL_STYLE)
            {
                "Categoria de receita"
            }

            select
                name="tag"
                id="tag"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" { "Selecione uma tag" }

                @for tag in IncomeTag::ALL {
                    @if defaults.tag == tag.as_str() {
                        option value=(tag.as_str()) selected { (tag.as_str()) }
                    } @else {
                        option value=(tag.as_str()) { (tag.as_str()) }
                    }
                }
            }

            (field_error("tag"))
        }
    }
}
