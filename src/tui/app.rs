// TUI application state
//
// App owns the store and the panels. Panels report what they want as
// intents; App turns those into store actions, so the panels never see
// ids, thumbnails or the reducer.

use super::clipboard::{self, CopyFormat};
use super::components::{CreateForm, EditForm, LogsPanel, ProductList, Toast};
use super::input::InputHandler;
use super::modal::{Modal, ModalAction};
use super::traits::{Intent, Interactive};
use crate::catalog::{Action, IdSource, Product, ProductId, SequentialIds, Store, SubscriptionId};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::theme::{Theme, ThemeConfig};
use crossterm::event::{KeyCode, KeyEvent};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Panels that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Create,
    Edit,
    Logs,
}

impl Focus {
    pub fn name(self) -> &'static str {
        match self {
            Focus::List => "List",
            Focus::Create => "Create",
            Focus::Edit => "Edit",
            Focus::Logs => "Logs",
        }
    }
}

/// The last dispatched action, for the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastAction {
    pub kind: &'static str,
    pub target: Option<ProductId>,
}

/// Main application state for the TUI
pub struct App {
    store: Store,
    ids: SequentialIds,

    /// Thumbnail stamped on created and updated products
    thumbnail: String,

    /// Set by the store subscription, cleared once panels have caught up
    dirty: Rc<Cell<bool>>,
    subscription: SubscriptionId,

    pub focus: Focus,
    pub product_list: ProductList,
    pub create_form: CreateForm,
    pub edit_form: EditForm,
    /// None when the logs panel is disabled in config
    pub logs_panel: Option<LogsPanel>,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,

    pub theme: Theme,
    theme_config: ThemeConfig,

    pub last_action: Option<LastAction>,
    pub should_quit: bool,

    /// When the app started (for uptime display)
    start_time: Instant,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,
}

impl App {
    pub fn new(mut store: Store, mut ids: SequentialIds, config: &Config, log_buffer: LogBuffer) -> Self {
        for product in store.state().iter() {
            ids.observe(product.id);
        }

        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let subscription = store.subscribe(move |_| flag.set(true));

        let theme_config = ThemeConfig {
            use_theme_background: config.use_theme_background,
        };
        let theme = Theme::by_name_with_config(&config.theme, &theme_config);

        let mut app = Self {
            store,
            ids,
            thumbnail: config.placeholder_thumbnail.clone(),
            dirty,
            subscription,
            focus: Focus::List,
            product_list: ProductList::new(),
            create_form: CreateForm::new(),
            edit_form: EditForm::new(),
            logs_panel: config
                .features
                .logs_panel
                .then(|| LogsPanel::new(log_buffer)),
            modal: None,
            toast: None,
            theme,
            theme_config,
            last_action: None,
            should_quit: false,
            start_time: Instant::now(),
            input_handler: InputHandler::default(),
        };
        app.sync();
        app
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────
    // Store plumbing
    // ─────────────────────────────────────────────────────────────────────

    /// Bring the panels up to date with the store if anything changed
    pub fn sync(&mut self) {
        if !self.dirty.replace(false) {
            return;
        }
        let state = self.store.state();
        self.product_list.sync(state);
        self.edit_form.sync(state);
    }

    pub fn dispatch(&mut self, action: Action) {
        self.last_action = Some(LastAction {
            kind: action.kind(),
            target: action.target(),
        });
        self.store.dispatch(action);
        self.sync();
    }

    /// Carry out what a panel asked for
    pub fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Create(draft) => {
                let id = self.ids.next_id();
                let product = draft.into_product(id, self.thumbnail.clone());
                tracing::info!(id = id.get(), title = %product.title, "product added");
                self.dispatch(Action::add(product));
                self.product_list.select_id(id);
                self.show_toast(format!("Added product #{}", id));
            }
            Intent::Update(id, draft) => {
                let product = draft.into_product(id, self.thumbnail.clone());
                tracing::info!(id = id.get(), "product updated");
                self.dispatch(Action::update(product));
                self.show_toast(format!("Updated product #{}", id));
            }
            Intent::Delete(id) => {
                tracing::info!(id = id.get(), "product deleted");
                self.dispatch(Action::delete(id));
                self.show_toast(format!("Deleted product #{}", id));
            }
            Intent::Inspect(id) => {
                self.modal = Some(Modal::detail(id));
            }
            Intent::Edit(id) => {
                if self.edit_form.select(id) {
                    self.set_focus(Focus::Edit);
                }
            }
            Intent::Rejected(err) => {
                tracing::warn!(panel = self.focus.name(), "submission rejected: {}", err);
                self.toast = Some(Toast::error(err.to_string()));
            }
        }
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.store.state().get(id)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────

    fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::List, Focus::Create, Focus::Edit];
        if self.logs_panel.is_some() {
            order.push(Focus::Logs);
        }
        order
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if focus == Focus::Logs && self.logs_panel.is_none() {
            return;
        }
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + order.len() - 1) % order.len()];
    }

    fn focused(&self) -> &dyn Interactive {
        match self.focus {
            Focus::List => &self.product_list,
            Focus::Create => &self.create_form,
            Focus::Edit => &self.edit_form,
            Focus::Logs => match &self.logs_panel {
                Some(panel) => panel,
                None => &self.product_list,
            },
        }
    }

    fn focused_mut(&mut self) -> &mut dyn Interactive {
        match self.focus {
            Focus::List => &mut self.product_list,
            Focus::Create => &mut self.create_form,
            Focus::Edit => &mut self.edit_form,
            Focus::Logs => match &mut self.logs_panel {
                Some(panel) => panel,
                None => &mut self.product_list,
            },
        }
    }

    /// Whether the focused panel wants printable characters as text
    pub fn focus_captures_text(&self) -> bool {
        self.focused().captures_text()
    }

    pub fn focus_hint(&self) -> Option<&'static str> {
        self.focused().focus_hint()
    }

    /// Route a key to the focused panel and act on any intent it returns
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> bool {
        match self.focused_mut().handle_key(key) {
            super::traits::Handled::Intent(intent) => {
                self.apply_intent(intent);
                true
            }
            handled => handled.was_handled(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Modal, toast, clipboard
    // ─────────────────────────────────────────────────────────────────────

    pub fn apply_modal_action(&mut self, action: ModalAction) {
        match action {
            ModalAction::None => {}
            ModalAction::Close => self.modal = None,
            ModalAction::CopyReadable => self.copy_from_modal(CopyFormat::Readable),
            ModalAction::CopyJson => self.copy_from_modal(CopyFormat::Json),
        }
    }

    fn copy_from_modal(&mut self, format: CopyFormat) {
        if let Some(id) = self.modal.as_ref().and_then(Modal::product_id) {
            self.copy_product(id, format);
        }
    }

    /// Copy a product to the system clipboard and report the outcome
    pub fn copy_product(&mut self, id: ProductId, format: CopyFormat) {
        let Some(product) = self.product(id) else {
            return;
        };
        match clipboard::copy_product(product, format) {
            Ok(()) => self.show_toast(format!("Copied product #{} ({})", id, format.label())),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.toast = Some(Toast::error("Clipboard unavailable"));
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Periodic housekeeping between frames
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
        self.sync();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────────────────

    /// Switch to the next available theme (runtime only)
    pub fn cycle_theme(&mut self) {
        let themes = Theme::list_available();
        if themes.is_empty() {
            return;
        }
        let next = themes
            .iter()
            .position(|t| t.eq_ignore_ascii_case(&self.theme.name))
            .map(|i| (i + 1) % themes.len())
            .unwrap_or(0);

        self.theme = Theme::by_name_with_config(&themes[next], &self.theme_config);
        tracing::debug!(theme = %self.theme.name, "theme changed");
        self.show_toast(format!("Theme: {}", self.theme.name));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    /// Debounce check for action keys
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Uptime as HH:MM:SS
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductDraft;
    use crate::tui::components::form::{Field, FormError};
    use crossterm::event::KeyModifiers;

    fn app_with(config: Config) -> App {
        App::new(Store::new(), SequentialIds::new(), &config, LogBuffer::new())
    }

    fn app() -> App {
        app_with(Config::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn create_intent_adds_with_fresh_id_and_thumbnail() {
        let mut config = Config::default();
        config.placeholder_thumbnail = "https://img.example/p.png".to_string();
        let mut app = app_with(config);

        app.apply_intent(Intent::Create(ProductDraft::new("Lamp", "Bright", "10")));
        app.apply_intent(Intent::Create(ProductDraft::new("Desk", "Oak", "99")));

        let products = app.store().state().products();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId(1));
        assert_eq!(products[1].id, ProductId(2));
        assert_eq!(products[1].thumbnail, "https://img.example/p.png");
        assert_eq!(app.product_list.selected_id(), Some(ProductId(2)));
        assert_eq!(
            app.last_action,
            Some(LastAction {
                kind: "ADD_PRODUCT",
                target: Some(ProductId(2))
            })
        );
    }

    #[test]
    fn ids_continue_after_seeded_products() {
        let mut store = Store::new();
        store.dispatch(Action::add(
            ProductDraft::new("Seed", "s", "1").into_product(ProductId(7), "t"),
        ));
        let mut app = App::new(store, SequentialIds::new(), &Config::default(), LogBuffer::new());

        app.apply_intent(Intent::Create(ProductDraft::new("New", "n", "2")));
        assert_eq!(app.store().state().products()[1].id, ProductId(8));
    }

    #[test]
    fn update_and_delete_intents() {
        let mut app = app();
        app.apply_intent(Intent::Create(ProductDraft::new("Lamp", "Bright", "10")));

        app.apply_intent(Intent::Update(ProductId(1), ProductDraft::new("Lamp", "Dim", "12")));
        let product = app.product(ProductId(1)).unwrap();
        assert_eq!(product.description, "Dim");
        assert_eq!(product.thumbnail, crate::catalog::DEFAULT_THUMBNAIL);

        app.apply_intent(Intent::Delete(ProductId(1)));
        assert!(app.store().state().is_empty());
        assert_eq!(app.store().revision(), 3);
    }

    #[test]
    fn rejected_submission_dispatches_nothing() {
        let mut app = app();
        app.apply_intent(Intent::Rejected(FormError::Missing(Field::Title)));

        assert_eq!(app.store().revision(), 0);
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("Title is required")
        );
    }

    #[test]
    fn typing_in_create_form_then_submit() {
        let mut app = app();
        app.set_focus(Focus::Create);

        for (text, last) in [("Lamp", false), ("Bright", false), ("5", true)] {
            for c in text.chars() {
                app.dispatch_to_focused(key(KeyCode::Char(c)));
            }
            app.dispatch_to_focused(key(KeyCode::Enter));
            assert_eq!(app.store().state().len(), usize::from(last));
        }
        assert_eq!(app.store().state().products()[0].title, "Lamp");
    }

    #[test]
    fn edit_intent_loads_form_and_focuses_it() {
        let mut app = app();
        app.apply_intent(Intent::Create(ProductDraft::new("Lamp", "Bright", "10")));

        app.set_focus(Focus::List);
        app.dispatch_to_focused(key(KeyCode::Char('e')));

        assert_eq!(app.focus, Focus::Edit);
        assert_eq!(app.edit_form.selected(), Some(ProductId(1)));
        assert!(app.focus_captures_text());
    }

    #[test]
    fn deleting_edited_product_clears_edit_form() {
        let mut app = app();
        app.apply_intent(Intent::Create(ProductDraft::new("Lamp", "Bright", "10")));
        app.apply_intent(Intent::Edit(ProductId(1)));

        app.apply_intent(Intent::Delete(ProductId(1)));
        assert_eq!(app.edit_form.selected(), None);
    }

    #[test]
    fn inspect_opens_detail_modal() {
        let mut app = app();
        app.apply_intent(Intent::Create(ProductDraft::new("Lamp", "Bright", "10")));
        app.dispatch_to_focused(key(KeyCode::Enter));

        assert_eq!(
            app.modal.as_ref().and_then(Modal::product_id),
            Some(ProductId(1))
        );
        app.apply_modal_action(ModalAction::Close);
        assert!(app.modal.is_none());
    }

    #[test]
    fn focus_cycle_skips_disabled_logs_panel() {
        let mut config = Config::default();
        config.features.logs_panel = false;
        let mut app = app_with(config);

        app.focus_prev();
        assert_eq!(app.focus, Focus::Edit);
        app.focus_next();
        assert_eq!(app.focus, Focus::List);

        app.set_focus(Focus::Logs);
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn focus_cycle_includes_logs_when_enabled() {
        let mut app = app();
        app.focus_prev();
        assert_eq!(app.focus, Focus::Logs);
    }
}
