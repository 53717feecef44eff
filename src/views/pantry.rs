//! 冷蔵庫ビュー
//!
//! 手持ちの材料を登録し、作れそうなレシピを一致率の高い順に表示する

use leptos::*;

use crate::components::RecipeCard;
use crate::utils::rank_by_pantry;
use crate::AppContext;

/// 一致率の下限候補
const MIN_MATCH_OPTIONS: &[u8] = &[0, 25, 50, 75, 100];

#[component]
pub fn PantryView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let (new_item, set_new_item) = create_signal(String::new());
    let (min_match, set_min_match) = create_signal(0u8);

    let add_item = move || {
        let item = new_item.get_untracked();
        if !item.trim().is_empty() {
            ctx.add_pantry_item(&item);
            set_new_item.set(String::new());
        }
    };

    let ranked = create_memo(move |_| {
        let pantry = ctx.pantry.get();
        if pantry.is_empty() {
            return Vec::new();
        }
        ctx.catalog.with_value(|recipes| rank_by_pantry(recipes, &pantry, min_match.get()))
    });

    view! {
        <div class="pantry-view">
            <h2>"冷蔵庫の中身"</h2>

            <div class="input-group">
                <input type="text" placeholder="材料を追加（例: eggs）"
                    prop:value=move || new_item.get()
                    on:input=move |ev| set_new_item.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            add_item();
                        }
                    }
                />
                <button on:click=move |_| add_item()>"追加"</button>
            </div>

            <div class="pantry-items">
                {move || ctx.pantry.get().into_iter().map(|item| {
                    let label = item.clone();
                    view! {
                        <span class="pantry-chip">
                            {label}
                            <button class="remove" on:click=move |_| ctx.remove_pantry_item(&item)>"×"</button>
                        </span>
                    }
                }).collect_view()}
                {move || (!ctx.pantry.get().is_empty()).then(|| view! {
                    <button class="clear-pantry" on:click=move |_| ctx.clear_pantry()>"すべて削除"</button>
                })}
            </div>

            <div class="min-match">
                <label>"一致率 "
                    <select
                        prop:value=move || min_match.get().to_string()
                        on:change=move |ev| set_min_match.set(event_target_value(&ev).parse().unwrap_or(0))
                    >
                        {MIN_MATCH_OPTIONS.iter().map(|p| view! {
                            <option value=p.to_string()>{format!("{}%以上", p)}</option>
                        }).collect_view()}
                    </select>
                </label>
            </div>

            {move || {
                let matches = ranked.get();
                if ctx.pantry.get().is_empty() {
                    view! { <p class="empty-state">"材料を追加すると作れるレシピを探します"</p> }.into_view()
                } else if matches.is_empty() {
                    view! { <p class="empty-state">"条件に合うレシピがありません"</p> }.into_view()
                } else {
                    view! {
                        <div class="match-list">
                            {matches.into_iter().map(|m| view! {
                                <div class="match-item">
                                    <RecipeCard recipe=m.recipe match_percentage=m.percentage />
                                    {(!m.missing.is_empty()).then(|| view! {
                                        <p class="missing">"足りない材料: " {m.missing.join(", ")}</p>
                                    })}
                                </div>
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
