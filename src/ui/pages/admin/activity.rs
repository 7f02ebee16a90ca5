use leptos::prelude::*;

use super::use_admin_context;
use super::widgets::{ExportButton, PageHeader, PageInfo, Pagination, SearchInput, SortHeader};
use crate::core::admin::csv::to_csv;
use crate::core::admin::table::{ActivityColumn, SortDirection, TableQuery, format_datetime};
use crate::core::admin::{ActivityCategory, ActivityEntry};
use crate::ui::common::{Badge, BadgeVariant};

/// Chronological log of console actions, newest first
#[component]
pub fn ActivityPage() -> impl IntoView {
    let ctx = use_admin_context();
    let query = RwSignal::new(TableQuery::sorted_by(ActivityColumn::Time, SortDirection::Desc));
    let category = RwSignal::new(None::<ActivityCategory>);
    let page = Memo::new(move |_| {
        let category = category.get();
        ctx.store.with(|s| {
            query.with(|q| {
                q.apply(&s.activity, |e: &ActivityEntry| {
                    category.is_none_or(|c| e.category == c)
                })
            })
        })
    });
    let info = Signal::derive(move || page.with(PageInfo::of));

    // Exports what the filters match, across all pages
    let export = Callback::new(move |_| {
        let category = category.get_untracked();
        ctx.store.with_untracked(|s| {
            let matching = s
                .activity
                .iter()
                .filter(|e| category.is_none_or(|c| e.category == c))
                .cloned()
                .collect::<Vec<_>>();
            to_csv(&matching)
        })
    });

    let chip = move |label: String, value: Option<ActivityCategory>| {
        view! {
            <button
                class="chip"
                class:chip-active=move || category.get() == value
                aria-pressed=move || (category.get() == value).to_string()
                on:click=move |_| {
                    category.set(value);
                    query.update(|q| q.page = 0);
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <PageHeader title="Activity" subtitle="Every change made from this console">
            <ExportButton filename="activity.csv" contents=export/>
        </PageHeader>

        <section class="card">
            <div class="card-header gap-4 flex-wrap">
                <SearchInput query=query placeholder="Search messages or people"/>
                <div class="flex flex-wrap gap-2" role="group" aria-label="Category">
                    {chip("All".to_string(), None)}
                    {ActivityCategory::ALL
                        .into_iter()
                        .map(|c| chip(c.to_string(), Some(c)))
                        .collect_view()}
                </div>
            </div>
            <table class="admin-table">
                <thead>
                    <tr>
                        <SortHeader label="Time" column=ActivityColumn::Time query=query/>
                        <SortHeader label="Actor" column=ActivityColumn::Actor query=query/>
                        <th scope="col">"Category"</th>
                        <th scope="col">"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || page.get().rows
                        key=|e| e.id
                        children=move |entry| view! {
                            <tr>
                                <td class="whitespace-nowrap">{format_datetime(&entry.at)}</td>
                                <td>{entry.actor}</td>
                                <td><Badge variant=BadgeVariant::Info>{entry.category.to_string()}</Badge></td>
                                <td>{entry.message}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
            <Pagination info=info query=query/>
        </section>
    }
}
