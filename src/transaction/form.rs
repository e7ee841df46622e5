//! Shared form fields for creating and editing transactions.

use maud::{Markup, PreEscaped, html};

use crate::{
    html::{
        FORM_ERROR_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement,
    },
    tag::{ExpenseTag, IncomeTag},
    transaction::core::{Transaction, TransactionFormData, TransactionType},
    validation::ValidationErrors,
};

/// The values a transaction form is rendered with.
///
/// These are raw strings so that a rejected submission can be re-rendered
/// exactly as the user entered it.
pub(super) struct TransactionFormDefaults<'a> {
    pub transaction_type: TransactionType,
    pub amount: String,
    pub tag: &'a str,
    pub date: String,
    pub description: &'a str,
}

impl<'a> TransactionFormDefaults<'a> {
    /// Defaults for an empty form: an expense dated today.
    pub fn for_new(today: time::Date) -> Self {
        Self {
            transaction_type: TransactionType::Expense,
            amount: String::new(),
            tag: "",
            date: today.to_string(),
            description: "",
        }
    }

    /// Defaults echoing a submitted form, e.g. after a validation failure.
    pub fn from_form(form: &'a TransactionFormData) -> Self {
        Self {
            transaction_type: form.type_.parse().unwrap_or(TransactionType::Expense),
            amount: form.amount.clone(),
            tag: &form.tag,
            date: form.date.clone(),
            description: &form.description,
        }
    }

    /// Defaults pre-filled from a stored transaction, for the edit form.
    pub fn from_transaction(transaction: &'a Transaction) -> Self {
        Self {
            transaction_type: transaction.transaction_type,
            amount: format!("{:.2}", transaction.amount),
            tag: transaction.tag.as_str(),
            date: transaction.date.to_string(),
            description: &transaction.description,
        }
    }
}

/// Renders the shared transaction form fields with any validation messages
/// inline next to the offending inputs.
pub(super) fn transaction_form_fields(
    defaults: &TransactionFormDefaults<'_>,
    errors: &ValidationErrors,
) -> Markup {
    let is_expense = matches!(defaults.transaction_type, TransactionType::Expense);

    let field_error = |field: &str| {
        html! {
            @if let Some(message) = errors.message_for(field) {
                p class=(FORM_ERROR_STYLE) { (message) }
            }
        }
    };

    html! {
        fieldset class="space-y-2"
        {
            legend class=(FORM_LABEL_STYLE) { "Tipo de transação" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                div class="flex items-center gap-3"
                {
                    input
                        name="type_"
                        id="transaction-type-expense"
                        type="radio"
                        value="expense"
                        checked[is_expense]
                        required
                        class=(FORM_RADIO_INPUT_STYLE);

                    label
                        for="transaction-type-expense"
                        class=(FORM_RADIO_LABEL_STYLE)
                    {
                        "Despesa"
                    }
                }

                div class="flex items-center gap-3"
                {
                    input
                        name="type_"
                        id="transaction-type-income"
                        type="radio"
                        value="income"
                        checked[!is_expense]
                        required
                        class=(FORM_RADIO_INPUT_STYLE);

                    label
                        for="transaction-type-income"
                        class=(FORM_RADIO_LABEL_STYLE)
                    {
                        "Receita"
                    }
                }
            }

            (field_error("type_"))
        }

        div
        {
            label
                for="description"
                class=(FORM_LABEL_STYLE)
            {
                "Descrição"
            }

            input
                name="description"
                id="description"
                type="text"
                placeholder="Ex: Aluguel, Supermercado"
                value=(defaults.description)
                required
                class=(FORM_TEXT_INPUT_STYLE);

            (field_error("description"))
        }

        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Valor (R$)"
            }

            input
                name="amount"
                id="amount"
                type="number"
                step="0.01"
                min="0.01"
                placeholder="0.00"
                value=(defaults.amount)
                required
                class=(FORM_TEXT_INPUT_STYLE);

            (field_error("amount"))
        }

        div
            id="tag-expense-field"
            style=[(!is_expense).then_some("display: none")]
        {
            label
                for="tag-expense"
                class=(FORM_LABEL_STYLE)
            {
                "Categoria"
            }

            select
                name="tag"
                id="tag-expense"
                disabled[!is_expense]
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" { "Selecione uma categoria" }

                @for tag in ExpenseTag::ALL {
                    @if defaults.tag == tag.as_str() {
                        option value=(tag.as_str()) selected { (tag.as_str()) }
                    } @else {
                        option value=(tag.as_str()) { (tag.as_str()) }
                    }
                }
            }
        }

        div
            id="tag-income-field"
            style=[is_expense.then_some("display: none")]
        {
            label
                for="tag-income"
                class=(FORM_LABEL_STYLE)
            {
                "Categoria"
            }

            select
                name="tag"
                id="tag-income"
                disabled[is_expense]
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" { "Selecione uma categoria" }

                @for tag in IncomeTag::ALL {
                    @if defaults.tag == tag.as_str() {
                        option value=(tag.as_str()) selected { (tag.as_str()) }
                    } @else {
                        option value=(tag.as_str()) { (tag.as_str()) }
                    }
                }
            }
        }

        (field_error("tag"))

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Data"
            }

            input
                name="date"
                id="date"
                type="date"
                value=(defaults.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);

            (field_error("date"))
        }
    }
}

/// JavaScript that swaps the visible tag select when the transaction type
/// changes, keeping the hidden select disabled so it is not submitted.
pub(super) fn transaction_form_script() -> HeadElement {
    HeadElement::ScriptSource(PreEscaped(
        r#"document.addEventListener('DOMContentLoaded', function() {
            const wire = (form) => {
                const update = () => {
                    const income = form.querySelector('input[name="type_"][value="income"]');
                    const isIncome = income && income.checked;
                    const incomeField = form.querySelector('#tag-income-field');
                    const expenseField = form.querySelector('#tag-expense-field');
                    if (!incomeField || !expenseField) return;
                    incomeField.style.display = isIncome ? '' : 'none';
                    form.querySelector('#tag-income').disabled = !isIncome;
                    expenseField.style.display = isIncome ? 'none' : '';
                    form.querySelector('#tag-expense').disabled = isIncome;
                };
                form.querySelectorAll('input[name="type_"]').forEach((radio) => {
                    radio.addEventListener('change', update);
                });
                update();
            };
            document.querySelectorAll('form[data-transaction-form]').forEach(wire);
            document.body.addEventListener('htmx:afterSwap', function(event) {
                event.target.querySelectorAll('form[data-transaction-form]').forEach(wire);
            });
        });"#
            .to_owned(),
    ))
}
