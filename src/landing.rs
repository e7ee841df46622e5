//! The marketing landing page.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{endpoints, html::base};

/// Render the landing page.
pub async fn get_landing_page() -> Response {
    landing_view().into_response()
}

fn landing_view() -> Markup {
    let content = html!(
        div class="min-h-screen bg-gradient-to-br from-blue-100 to-green-100
            dark:from-gray-900 dark:to-gray-800"
        {
            header class="container mx-auto px-4 py-8"
            {
                nav class="flex justify-between items-center"
                {
                    h1 class="text-2xl font-bold text-blue-600 dark:text-blue-400"
                    {
                        "FinancePro"
                    }
                }
            }

            main class="container mx-auto px-4 py-16"
            {
                div class="text-center mb-16"
                {
                    h2 class="text-5xl font-bold text-gray-800 dark:text-white mb-4"
                    {
                        "Revolucione sua Gestão Financeira"
                    }

                    p class="text-xl text-gray-600 dark:text-gray-300 mb-8"
                    {
                        "FinancePro: a ferramenta definitiva para transformar suas
                        finanças pessoais e alcançar seus objetivos financeiros"
                    }

                    a
                        href=(endpoints::DASHBOARD_VIEW)
                        class="inline-flex items-center bg-blue-600 hover:bg-blue-700
                            text-white px-8 py-4 rounded-full text-lg font-semibold
                            shadow-lg hover:shadow-xl transition duration-300"
                    {
                        "Comece sua Jornada →"
                    }
                }

                section class="mb-16"
                {
                    h3 class="text-3xl font-bold text-gray-800 dark:text-white mb-6 text-center"
                    {
                        "Recursos Principais"
                    }

                    div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8"
                    {
                        (feature_card(
                            "Controle Total de Gastos",
                            "Acompanhe cada centavo com precisão. Categorize suas
                            despesas e receitas para uma visão clara de para onde
                            seu dinheiro está indo.",
                        ))
                        (feature_card(
                            "Análise Visual Poderosa",
                            "Gráficos intuitivos que transformam números em
                            insights. Entenda seus padrões de gastos e identifique
                            áreas de economia.",
                        ))
                        (feature_card(
                            "Metas Financeiras",
                            "Planeje seu futuro com confiança. Defina metas de
                            economia e acompanhe o progresso de cada uma em tempo
                            real.",
                        ))
                    }
                }

                section class="mb-16"
                {
                    h3 class="text-3xl font-bold text-gray-800 dark:text-white mb-6 text-center"
                    {
                        "Recursos Adicionais"
                    }

                    div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8"
                    {
                        (feature_card(
                            "Relatórios Personalizados",
                            "Visualize o fluxo de caixa, a distribuição por
                            categoria e as transações mais recentes em um único
                            painel.",
                        ))
                        (feature_card(
                            "Seus Dados com Você",
                            "Tudo fica no seu próprio servidor. Nenhuma informação
                            financeira sai da sua máquina.",
                        ))
                        (feature_card(
                            "Simples e Rápido",
                            "Registre uma transação em segundos com formulários
                            diretos e sem distrações.",
                        ))
                    }
                }

                section class="text-center mb-16"
                {
                    h3 class="text-3xl font-bold text-gray-800 dark:text-white mb-6"
                    {
                        "Pronto para Transformar suas Finanças?"
                    }

                    p class="text-xl text-gray-600 dark:text-gray-300 mb-8"
                    {
                        "Comece sua jornada para a liberdade financeira hoje!"
                    }

                    a
                        href=(endpoints::DASHBOARD_VIEW)
                        class="inline-flex items-center bg-green-500 hover:bg-green-600
                            text-white px-8 py-4 rounded-full text-lg font-semibold
                            shadow-lg hover:shadow-xl transition duration-300"
                    {
                        "Experimente →"
                    }
                }
            }

            footer class="bg-gray-800 text-white py-8 mt-16"
            {
                div class="container mx-auto px-4 text-center"
                {
                    p { "© 2024 FinancePro. Todos os direitos reservados." }
                }
            }
        }
    );

    base("Gestão Financeira Pessoal", &[], &content)
}

fn feature_card(title: &str, description: &str) -> Markup {
    html!(
        div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6
            hover:shadow-xl transition duration-300"
        {
            h4 class="text-xl font-semibold text-gray-800 dark:text-white mb-2"
            {
                (title)
            }

            p class="text-gray-600 dark:text-gray-300" { (description) }
        }
    )
}
