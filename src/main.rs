use leptos::*;

mod catalog;
mod components;
mod config;
mod cooking;
mod models;
mod utils;
mod views;

use components::{CookieBanner, FilterBar};
use models::{Recipe, RecipeId, ViewMode};
use utils::log_trace::{self, log_info};
use utils::{RecipeFilter, RecipeStore};
use views::{BrowseView, HistoryView, PantryView, RecipeDetail, SavedView};

// ============================================
// アプリ全体で共有する状態
// ============================================

#[derive(Clone, Copy)]
pub struct AppContext {
    pub catalog: StoredValue<Vec<Recipe>>,
    pub store: StoredValue<RecipeStore>,
    pub view_mode: ReadSignal<ViewMode>,
    pub set_view_mode: WriteSignal<ViewMode>,
    pub saved: ReadSignal<Vec<RecipeId>>,
    pub set_saved: WriteSignal<Vec<RecipeId>>,
    pub pantry: ReadSignal<Vec<String>>,
    pub set_pantry: WriteSignal<Vec<String>>,
    pub recent_searches: ReadSignal<Vec<String>>,
    pub set_recent_searches: WriteSignal<Vec<String>>,
    pub filter: RwSignal<RecipeFilter>,
}

impl AppContext {
    /// レシピ詳細を開き、閲覧履歴に残す
    pub fn open_recipe(&self, id: RecipeId) {
        self.store.with_value(|s| s.add_to_history(id));
        self.set_view_mode.set(ViewMode::Detail(id));
    }

    pub fn toggle_saved(&self, id: RecipeId) {
        let saved = self.store.with_value(|s| {
            let now_saved = s.toggle_saved(id);
            log_info("ui-action", &format!("お気に入り{}: {}", if now_saved { "追加" } else { "解除" }, id));
            s.get_saved_recipes()
        });
        self.set_saved.set(saved);
    }

    /// 検索語を確定し、最近の検索に記録
    pub fn submit_search(&self, query: String) {
        let searches = self.store.with_value(|s| {
            s.add_recent_search(&query);
            s.get_recent_searches()
        });
        self.set_recent_searches.set(searches);
        self.filter.update(|f| f.query = query);
    }

    pub fn add_pantry_item(&self, item: &str) {
        let pantry = self.store.with_value(|s| s.add_pantry_item(item));
        self.set_pantry.set(pantry);
    }

    pub fn remove_pantry_item(&self, item: &str) {
        let pantry = self.store.with_value(|s| s.remove_pantry_item(item));
        self.set_pantry.set(pantry);
    }

    pub fn clear_pantry(&self) {
        self.store.with_value(|s| s.save_pantry(&[]));
        self.set_pantry.set(Vec::new());
    }
}

// ============================================
// メインアプリ（タブ切り替え）
// ============================================

#[component]
fn App() -> impl IntoView {
    let store = RecipeStore::browser();
    let catalog = catalog::load_catalog();

    let (view_mode, set_view_mode) = create_signal(ViewMode::default());
    let (saved, set_saved) = create_signal(store.get_saved_recipes());
    let (pantry, set_pantry) = create_signal(store.get_pantry());
    let (recent_searches, set_recent_searches) = create_signal(store.get_recent_searches());

    let ctx = AppContext {
        catalog: store_value(catalog),
        store: store_value(store),
        view_mode,
        set_view_mode,
        saved,
        set_saved,
        pantry,
        set_pantry,
        recent_searches,
        set_recent_searches,
        filter: create_rw_signal(RecipeFilter::default()),
    };
    provide_context(ctx);

    let tab_class = move |mode: ViewMode| {
        move || if view_mode.get() == mode { "active" } else { "" }
    };

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"レシピファインダー"</h1>
                <nav class="tabs">
                    <button class=tab_class(ViewMode::Browse) on:click=move |_| set_view_mode.set(ViewMode::Browse)>
                        "探す"
                    </button>
                    <button class=tab_class(ViewMode::Pantry) on:click=move |_| set_view_mode.set(ViewMode::Pantry)>
                        "冷蔵庫"
                    </button>
                    <button class=tab_class(ViewMode::Saved) on:click=move |_| set_view_mode.set(ViewMode::Saved)>
                        "お気に入り (" {move || saved.get().len()} ")"
                    </button>
                    <button class=tab_class(ViewMode::History) on:click=move |_| set_view_mode.set(ViewMode::History)>
                        "履歴"
                    </button>
                </nav>
            </header>

            <main class="container">
                {move || match view_mode.get() {
                    ViewMode::Browse => view! {
                        <FilterBar />
                        <BrowseView />
                    }.into_view(),
                    ViewMode::Pantry => view! { <PantryView /> }.into_view(),
                    ViewMode::Saved => view! { <SavedView /> }.into_view(),
                    ViewMode::History => view! { <HistoryView /> }.into_view(),
                    ViewMode::Detail(id) => view! { <RecipeDetail id=id /> }.into_view(),
                }}
            </main>

            <AppFooter />
            <CookieBanner />
        </div>
    }
}

#[component]
fn AppFooter() -> impl IntoView {
    let (copy_success, set_copy_success) = create_signal(false);

    let on_copy_logs = move |_| {
        spawn_local(async move {
            if log_trace::copy_logs_to_clipboard_async().await.is_ok() {
                set_copy_success.set(true);
                // 2秒後にリセット
                gloo::timers::future::TimeoutFuture::new(2000).await;
                set_copy_success.set(false);
            }
        });
    };

    view! {
        <footer class="app-footer">
            <span class="catalog-updated">{catalog::format_catalog_modified_time()}</span>
            <div class="log-actions">
                <button on:click=move |_| log_trace::download_logs()>"ログを保存"</button>
                <button on:click=on_copy_logs>
                    {move || if copy_success.get() { "コピーしました!" } else { "ログをコピー" }}
                </button>
                <button on:click=move |_| log_trace::clear_logs()>"ログを消去"</button>
            </div>
        </footer>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
