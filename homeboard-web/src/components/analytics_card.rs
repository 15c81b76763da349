use shared::analytics::{self, AnalyticsSummary, UserStats};
use shared::models::FetchError;
use yew::prelude::*;
use yew_hooks::{UseAsyncHandle, UseAsyncOptions, use_async_with_options};
use yew_icons::{Icon, IconId};

use crate::api::DashboardClient;
use crate::components::error_notice::ErrorNotice;

/// Directory-wide activity summary: per-user counts and the four
/// most/fewest superlatives.
///
/// Built from the raw remote collections; local todo overrides are not
/// consulted here.
#[function_component(AnalyticsCard)]
pub fn analytics_card() -> Html {
    let summary: UseAsyncHandle<Option<AnalyticsSummary>, FetchError> = use_async_with_options(
        async move {
            let client = DashboardClient::shared();
            let users = client.fetch_users().await?;
            let posts = client.fetch_all_posts().await?;
            let todos = client.fetch_all_todos().await?;
            Ok(analytics::summarize(&users, &posts, &todos))
        },
        UseAsyncOptions::enable_auto(),
    );

    let on_retry = {
        let summary = summary.clone();
        Callback::from(move |_: MouseEvent| {
            summary.run();
        })
    };

    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">
                    <Icon icon_id={IconId::HeroiconsOutlineChartBar} class="w-6 h-6" />
                    {"Analytics"}
                </h2>

                if summary.loading {
                    <div class="flex items-center gap-2">
                        <span class="loading loading-spinner loading-sm"></span>
                        <span class="text-sm">{"Loading analytics..."}</span>
                    </div>
                } else if summary.error.is_some() {
                    <ErrorNotice
                        message="Unable to fetch user data. Please try again."
                        on_retry={on_retry}
                    />
                } else if let Some(outcome) = &summary.data {
                    {
                        match outcome {
                            Some(computed) => render_summary(computed),
                            None => html! {
                                <p class="text-base-content/60">{"No user data to analyze."}</p>
                            },
                        }
                    }
                }
            </div>
        </div>
    }
}

fn render_summary(summary: &AnalyticsSummary) -> Html {
    html! {
        <>
            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-title">{"Total users"}</div>
                    <div class="stat-value text-primary">{ summary.total_users }</div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-2">
                { superlative_tile("Most posts", &summary.most_posts, Metric::Posts) }
                { superlative_tile("Fewest posts", &summary.fewest_posts, Metric::Posts) }
                { superlative_tile("Most completed", &summary.most_completed, Metric::Todos) }
                { superlative_tile("Fewest completed", &summary.fewest_completed, Metric::Todos) }
            </div>

            <div class="overflow-x-auto mt-2">
                <table class="table table-sm">
                    <thead>
                        <tr>
                            <th>{"User"}</th>
                            <th class="text-right">{"Posts"}</th>
                            <th class="text-right">{"Completed todos"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for summary.per_user.iter().map(|stats| html! {
                            <tr key={stats.id}>
                                <td>{ &stats.username }</td>
                                <td class="text-right">{ stats.post_count }</td>
                                <td class="text-right">{ stats.completed_count }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </>
    }
}

#[derive(Clone, Copy)]
enum Metric {
    Posts,
    Todos,
}

fn superlative_tile(label: &'static str, stats: &UserStats, metric: Metric) -> Html {
    let count = match metric {
        Metric::Posts => format!("{} posts", stats.post_count),
        Metric::Todos => format!("{} todos", stats.completed_count),
    };

    html! {
        <div class="bg-base-100 rounded-lg p-4">
            <div class="text-xs font-bold uppercase tracking-widest text-base-content/60">
                { label }
            </div>
            <div class="font-bold text-lg mt-1">{ &stats.username }</div>
            <div class="text-sm text-base-content/70">{ count }</div>
        </div>
    }
}
