//! Defines the core data model and validation boundary for savings goals.

use std::str::FromStr;

use serde::Deserialize;

use crate::{database_id::GoalId, tag::IncomeTag, validation::ValidationErrors};

/// A savings goal: a named target amount funded by one income category.
///
/// The progress towards a goal is never stored. It is recomputed from the
/// income transactions carrying [Goal::tag] every time it is displayed, so it
/// can never drift from the transaction history
/// (see [crate::goal_progress]).
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    /// The ID of the goal.
    pub id: GoalId,
    /// The user-facing name of the goal, e.g. "Viagem".
    pub name: String,
    /// The amount of money to save, always positive.
    pub target_amount: f64,
    /// The income category that funds this goal.
    pub tag: IncomeTag,
}

/// The raw form data for creating or editing a goal.
///
/// Fields are strings, with missing fields deserializing as empty, so the
/// validation boundary can report a per-field message instead of the form
/// extractor rejecting the request wholesale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GoalFormData {
    /// The goal name as entered.
    pub name: String,
    /// The target amount as entered, e.g. "2000".
    pub target_amount: String,
    /// The income tag label as entered.
    pub tag: String,
}

/// A fully validated goal, ready to be written to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalDraft {
    /// The user-facing name of the goal.
    pub name: String,
    /// The amount of money to save, strictly positive.
    pub target_amount: f64,
    /// The income category that funds this goal.
    pub tag: IncomeTag,
}

impl GoalDraft {
    /// Validate raw form data into a draft.
    ///
    /// A zero target amount is rejected here so the aggregation layer never
    /// has to divide by it.
    ///
    /// # Errors
    /// Returns [ValidationErrors] listing every invalid field.
    pub fn parse(form: &GoalFormData) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = form.name.trim();
        if name.is_empty() {
            errors.push("name", "Nome da meta é obrigatório");
        }

        let target_amount = match form.target_amount.trim().parse::<f64>() {
            Ok(target_amount) if target_amount > 0.0 && target_amount.is_finite() => {
                Some(target_amount)
            }
            Ok(_) => {
                errors.push("target_amount", "O valor alvo deve ser positivo");
                None
            }
            Err(_) => {
                errors.push("target_amount", "Valor alvo inválido");
                None
            }
        };

        let tag = match IncomeTag::from_str(form.tag.trim()) {
            Ok(tag) => Some(tag),
            Err(_) => {
                errors.push("tag", "Selecione uma categoria de receita válida");
                None
            }
        };

        match (target_amount, tag) {
            (Some(target_amount), Some(tag)) if errors.is_empty() => Ok(GoalDraft {
                name: name.to_owned(),
                target_amount,
                tag,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GoalDraft, GoalFormData};
    use crate::tag::IncomeTag;

    fn valid_form() -> GoalFormData {
        GoalFormData {
            name: "Viagem".to_owned(),
            target_amount: "2000".to_owned(),
            tag: "Salário".to_owned(),
        }
    }

    #[test]
    fn parse_accepts_a_valid_form() {
        let draft = GoalDraft::parse(&valid_form()).expect("form should be valid");

        assert_eq!(draft.name, "Viagem");
        assert_eq!(draft.target_amount, 2000.0);
        assert_eq!(draft.tag, IncomeTag::Salario);
    }

    #[test]
    fn parse_rejects_empty_name() {
        let form = GoalFormData {
            name: "  ".to_owned(),
            ..valid_form()
        };

        let errors = GoalDraft::parse(&form).expect_err("form should be invalid");

        assert_eq!(
            errors.message_for("name"),
            Some("Nome da meta é obrigatório")
        );
    }

    #[test]
    fn parse_rejects_zero_target_amount() {
        // A zero target would make the progress percentage divide by zero, so
        // it must never make it into the store.
        let form = GoalFormData {
            target_amount: "0".to_owned(),
            ..valid_form()
        };

        let errors = GoalDraft::parse(&form).expect_err("form should be invalid");

        assert_eq!(
            errors.message_for("target_amount"),
            Some("O valor alvo deve ser positivo")
        );
    }

    #[test]
    fn parse_rejects_negative_and_unparseable_target_amounts() {
        let cases = [
            ("-100", "O valor alvo deve ser positivo"),
            ("dois mil", "Valor alvo inválido"),
        ];

        for (target_amount, want_message) in cases {
            let form = GoalFormData {
                target_amount: target_amount.to_owned(),
                ..valid_form()
            };

            let errors = GoalDraft::parse(&form).expect_err("form should be invalid");

            assert_eq!(errors.message_for("target_amount"), Some(want_message));
        }
    }

    #[test]
    fn parse_rejects_expense_tags() {
        // Goals track income categories only.
        let form = GoalFormData {
            tag: "Aluguel".to_owned(),
            ..valid_form()
        };

        let errors = GoalDraft::parse(&form).expect_err("form should be invalid");

        assert_eq!(
            errors.message_for("tag"),
            Some("Selecione uma categoria de receita válida")
        );
    }
}
