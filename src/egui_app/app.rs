/**
 * Todo Application
 *
 * Ties the store, the sync driver and the views together. Each frame:
 * drain finished requests, lay out the views, then apply the actions the
 * views collected and dispatch the resulting requests.
 */

use eframe::egui;
use tokio::runtime::Runtime;

use crate::egui_app::api::TodoApiClient;
use crate::egui_app::config::Config;
use crate::egui_app::state::{ClientError, Dispatch, TodoStore};
use crate::egui_app::sync::SyncDriver;
use crate::egui_app::theme::styles;
use crate::egui_app::types::{TodoAction, UiState};
use crate::egui_app::views;

/// Main application state
pub struct TodoApp {
    store: TodoStore,
    driver: SyncDriver,
    ui_state: UiState,
    user_id: String,
    _runtime: Runtime,
}

impl TodoApp {
    /// Start the background runtime and issue the initial load
    pub fn new(config: Config, ctx: &egui::Context) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("todo-sync")
            .enable_all()
            .build()?;

        styles::apply_global_theme(ctx);
        tracing::info!("Using todo API at {} as {}", config.server_url(), config.user_id());

        let user_id = config.user_id().to_string();
        let repaint = ctx.clone();
        let driver = SyncDriver::new(TodoApiClient::new(config), runtime.handle().clone())
            .with_waker(move || repaint.request_repaint());

        let mut store = TodoStore::new();
        let repaint = ctx.clone();
        store.subscribe_items(move |_| repaint.request_repaint());
        driver.dispatch(store.load());

        Ok(Self {
            store,
            driver,
            ui_state: UiState::new(),
            user_id,
            _runtime: runtime,
        })
    }
}

impl eframe::App for TodoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for error in self.driver.drain(&mut self.store) {
            self.ui_state.show_error(error);
        }

        let mut actions = Vec::new();
        views::render_top_bar(ctx, &self.user_id, self.store.pending_count());
        views::render_error_banner(ctx, &self.ui_state, &mut actions);
        views::render_main_panel(ctx, &self.store, &mut self.ui_state, &mut actions);

        for action in actions {
            if let Some(dispatch) = apply_action(&mut self.store, &mut self.ui_state, action) {
                self.driver.dispatch(dispatch);
            }
        }
    }
}

/// Apply one view action to the store and the view state
///
/// Returns the request to send, if the action produced one. Synchronous
/// failures go to the error banner.
pub fn apply_action(store: &mut TodoStore, ui_state: &mut UiState, action: TodoAction) -> Option<Dispatch> {
    match action {
        TodoAction::Add => match store.add(&ui_state.new_title) {
            Ok(dispatch) => {
                ui_state.new_title.clear();
                Some(dispatch)
            }
            Err(e) => report(ui_state, Err(e)),
        },
        TodoAction::SetFilter(filter) => {
            store.set_filter(filter);
            None
        }
        TodoAction::Toggle(id) => report(ui_state, store.toggle_complete(&id)),
        TodoAction::StartEdit(item) => {
            ui_state.drafts.insert(item.id, item.title);
            None
        }
        TodoAction::CancelEdit(id) => {
            ui_state.drafts.remove(&id);
            None
        }
        TodoAction::SaveEdit(id) => {
            let draft = ui_state.drafts.get(&id)?;
            let Some(current) = store.get(&id) else {
                ui_state.drafts.remove(&id);
                return None;
            };
            let edited = current.with_title(draft.trim());

            // Stay in edit mode when the draft is rejected
            let dispatch = report(ui_state, store.update(edited).map(Some))?;
            ui_state.drafts.remove(&id);
            dispatch
        }
        TodoAction::Delete(id) => {
            ui_state.drafts.remove(&id);
            store.remove(&id)
        }
        TodoAction::DismissError => {
            ui_state.error = None;
            None
        }
    }
}

fn report<T>(ui_state: &mut UiState, result: Result<Option<T>, ClientError>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Rejected locally: {}", e);
            ui_state.show_error(e);
            None
        }
    }
}
