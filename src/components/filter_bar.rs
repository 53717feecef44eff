//! 絞り込みバーコンポーネント
//!
//! 検索ボックス・コース・難易度・調理時間の選択と、最近の検索

use leptos::*;

use crate::models::{Course, Difficulty};
use crate::AppContext;

/// 「すべて」を表すセレクト値
const ALL_OPTION: &str = "All";

/// 調理時間の上限候補（0 = 指定なし）
const TIME_OPTIONS: &[(u32, &str)] = &[
    (0, "指定なし"),
    (15, "15分以内"),
    (30, "30分以内"),
    (60, "1時間以内"),
    (120, "2時間以内"),
];

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let filter = ctx.filter;
    let (query_input, set_query_input) = create_signal(filter.get_untracked().query);

    let submit = move || ctx.submit_search(query_input.get_untracked());

    view! {
        <div class="filter-bar">
            <div class="search-box">
                <input type="search" placeholder="料理名・材料・手順で検索"
                    prop:value=move || query_input.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_query_input.set(value.clone());
                        filter.update(|f| f.query = value);
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button on:click=move |_| submit()>"検索"</button>
            </div>

            <div class="filter-selects">
                <select
                    prop:value=move || filter.get().course.map(|c| c.as_str()).unwrap_or(ALL_OPTION).to_string()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.course = Course::from_str(&value));
                    }
                >
                    <option value=ALL_OPTION>"すべてのコース"</option>
                    {Course::ALL.iter().map(|c| view! {
                        <option value=c.as_str()>{c.label()}</option>
                    }).collect_view()}
                </select>

                <select
                    prop:value=move || filter.get().difficulty.map(|d| d.as_str()).unwrap_or(ALL_OPTION).to_string()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.difficulty = Difficulty::from_str(&value));
                    }
                >
                    <option value=ALL_OPTION>"すべての難易度"</option>
                    {Difficulty::ALL.iter().map(|d| view! {
                        <option value=d.as_str()>{d.label()}</option>
                    }).collect_view()}
                </select>

                <select
                    prop:value=move || filter.get().max_minutes.to_string()
                    on:change=move |ev| {
                        let minutes = event_target_value(&ev).parse().unwrap_or(0);
                        filter.update(|f| f.max_minutes = minutes);
                    }
                >
                    {TIME_OPTIONS.iter().map(|(minutes, label)| view! {
                        <option value=minutes.to_string()>{*label}</option>
                    }).collect_view()}
                </select>

                {move || filter.get().is_active().then(|| view! {
                    <button class="clear-filter" on:click=move |_| {
                        set_query_input.set(String::new());
                        filter.set(Default::default());
                    }>"条件をクリア"</button>
                })}
            </div>

            <RecentSearches on_select=move |q: String| {
                set_query_input.set(q.clone());
                ctx.submit_search(q);
            } />
        </div>
    }
}

/// 最近の検索（クリックで再検索）
#[component]
fn RecentSearches<F>(on_select: F) -> impl IntoView
where
    F: Fn(String) + Copy + 'static,
{
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let clear = move |_: web_sys::MouseEvent| {
        ctx.store.with_value(|s| s.clear_recent_searches());
        ctx.set_recent_searches.set(Vec::new());
    };

    view! {
        {move || {
            let searches = ctx.recent_searches.get();
            (!searches.is_empty()).then(|| view! {
                <div class="recent-searches">
                    <span class="recent-label">"最近の検索:"</span>
                    {searches.into_iter().map(|q| {
                        let label = q.clone();
                        view! {
                            <button class="recent-chip" on:click=move |_| on_select(q.clone())>{label}</button>
                        }
                    }).collect_view()}
                    <button class="recent-clear" on:click=clear>"×"</button>
                </div>
            })
        }}
    }
}
