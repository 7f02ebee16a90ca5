//! Table building blocks shared by the console pages

use leptos::prelude::*;

use crate::core::admin::table::{PAGE_SIZES, Page, SortDirection, TableQuery};
use crate::ui::download::download_text;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn SearchInput<C>(
    query: RwSignal<TableQuery<C>>,
    #[prop(default = "Search...")]
    placeholder: &'static str,
) -> impl IntoView
where
    C: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <label class="search-input">
            <Icon name=icons::SEARCH class="icon-text"/>
            <input
                type="search"
                class="input-base"
                placeholder=placeholder
                aria-label=placeholder
                prop:value=move || query.with(|q| q.search.clone())
                on:input=move |ev| query.update(|q| q.set_search(event_target_value(&ev)))
            />
        </label>
    }
}

/// Column header that sorts on click
#[component]
pub fn SortHeader<C>(
    label: &'static str,
    column: C,
    query: RwSignal<TableQuery<C>>,
) -> impl IntoView
where
    C: Copy + PartialEq + Send + Sync + 'static,
{
    let direction = move || query.with(|q| q.sort_direction(column));

    view! {
        <th
            scope="col"
            aria-sort=move || match direction() {
                Some(SortDirection::Asc) => "ascending",
                Some(SortDirection::Desc) => "descending",
                None => "none",
            }
        >
            <button class="table-sort" on:click=move |_| query.update(|q| q.toggle_sort(column))>
                {label}
                <span class="table-sort-arrow">{move || direction().map(SortDirection::arrow)}</span>
            </button>
        </th>
    }
}

/// Position of a page within its result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageInfo {
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
    pub first_row: usize,
    pub last_row: usize,
}

impl PageInfo {
    pub fn of<T>(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            page_count: page.page_count,
            total: page.total,
            first_row: page.first_row,
            last_row: page.last_row,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    pub fn summary(&self) -> String {
        if self.total == 0 {
            "No results".to_string()
        } else {
            format!("{}-{} of {}", self.first_row, self.last_row, self.total)
        }
    }
}

#[component]
pub fn Pagination<C>(info: Signal<PageInfo>, query: RwSignal<TableQuery<C>>) -> impl IntoView
where
    C: Copy + PartialEq + Send + Sync + 'static,
{
    let go = move |page: usize| query.update(|q| q.page = page);

    view! {
        <div class="table-pagination">
            <span class="text-sm text-theme-muted">{move || info.get().summary()}</span>
            <div class="flex items-center gap-2">
                <select
                    class="select-base select-sm"
                    aria-label="Rows per page"
                    prop:value=move || query.with(|q| q.page_size.to_string())
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            query.update(|q| q.set_page_size(size));
                        }
                    }
                >
                    {PAGE_SIZES
                        .iter()
                        .map(|size| view! { <option value=size.to_string()>{format!("{size} / page")}</option> })
                        .collect_view()}
                </select>
                <button
                    class="btn-icon"
                    aria-label="Previous page"
                    disabled=move || !info.get().has_prev()
                    on:click=move |_| go(info.get_untracked().page.saturating_sub(1))
                >
                    <Icon name=icons::CHEVRON_LEFT class="icon-standalone"/>
                </button>
                <span class="text-sm">
                    {move || format!("Page {} of {}", info.get().page + 1, info.get().page_count)}
                </span>
                <button
                    class="btn-icon"
                    aria-label="Next page"
                    disabled=move || !info.get().has_next()
                    on:click=move |_| go(info.get_untracked().page + 1)
                >
                    <Icon name=icons::CHEVRON_RIGHT class="icon-standalone"/>
                </button>
            </div>
        </div>
    }
}

/// Downloads whatever `contents` produces at click time
#[component]
pub fn ExportButton(
    #[prop(default = "Export CSV")]
    label: &'static str,
    filename: &'static str,
    #[prop(default = "text/csv")]
    mime: &'static str,
    contents: Callback<(), String>,
) -> impl IntoView {
    view! {
        <button
            class="btn-secondary"
            on:click=move |_| download_text(filename, mime, &contents.run(()))
        >
            <Icon name=icons::DOWNLOAD class="icon-text"/>
            {label}
        </button>
    }
}

/// Header row of a console page
#[component]
pub fn PageHeader(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="admin-page-header">
            <div>
                <h1 class="title-xl">{title}</h1>
                <p class="subtitle">{subtitle}</p>
            </div>
            <div class="flex items-center gap-2">{children.map(|c| c())}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_for_empty_page() {
        assert_eq!(PageInfo::default().summary(), "No results");
    }

    #[test]
    fn test_summary_and_navigation() {
        let info = PageInfo {
            page: 1,
            page_count: 3,
            total: 24,
            first_row: 11,
            last_row: 20,
        };
        assert_eq!(info.summary(), "11-20 of 24");
        assert!(info.has_prev());
        assert!(info.has_next());
    }
}
