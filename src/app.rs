//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that routes events to children and processes every Action.
//! The data provider is injected at construction; App never mutates
//! item data itself, it only asks the provider to.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, render_count_line, render_help_bar, DeleteDialog, HeaderBanner,
    HomeComponent, InputBar, QuitDialog,
};
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::InputMode;
use crate::store::DataProvider;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

/// Minutes moved per time-picker keypress.
const TIME_STEP_MINUTES: i64 = 5;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App<P: DataProvider> {
    /// The injected data provider; the only owner of item data
    pub store: P,

    /// Input bar focus state (set-based, never toggled)
    pub input_mode: InputMode,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Store revision the cursor was last reconciled against
    seen_revision: u64,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub header: HeaderBanner,
    pub home: HomeComponent,
    pub input_bar: InputBar,
    pub quit_dialog: QuitDialog,
    pub delete_dialog: DeleteDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl<P: DataProvider> App<P> {
    /// Create a new App around an explicitly injected provider.
    pub fn new(store: P) -> App<P> {
        App {
            store,
            input_mode: InputMode::Browse,
            modals: ModalStack::new(),
            should_quit: false,
            seen_revision: 0,
            header: HeaderBanner::new(),
            home: HomeComponent::new(),
            input_bar: InputBar::new(),
            quit_dialog: QuitDialog,
            delete_dialog: DeleteDialog,
        }
    }

    /// Reconcile the list cursor after the provider's sequence changed
    /// underneath it. This is the explicit observation point: the view
    /// re-reads the revision after every mutation it issues.
    fn sync_selection(&mut self) {
        if self.store.revision() != self.seen_revision {
            self.seen_revision = self.store.revision();
            self.home.clamp(self.store.items().len());
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::DeleteConfirm { .. } => self.delete_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::DeleteConfirm { title, .. } => {
                self.delete_dialog.draw_with_title(frame, area, title)?;
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl<P: DataProvider> Component for App<P> {
    fn init(&mut self) -> Result<()> {
        self.seen_revision = self.store.revision();
        self.home.select_first(self.store.items().len());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Ctrl+C always quits, whatever has focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        match self.input_mode {
            InputMode::Browse => self.home.handle_key_event(key),
            InputMode::Editing => self.input_bar.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.modals.is_empty() {
                    None
                } else if self.header.contains(mouse.column, mouse.row) {
                    Some(Action::HeaderDragStart(mouse.column, mouse.row))
                } else {
                    self.home.hit_test(mouse.column, mouse.row)
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.header.is_dragging() => {
                Some(Action::HeaderDragUpdate(mouse.column, mouse.row))
            }
            MouseEventKind::Up(MouseButton::Left) if self.header.is_dragging() => {
                Some(Action::HeaderDragEnd)
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // List Navigation (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => self.home.next(self.store.items().len()),
            Action::PrevItem => self.home.previous(self.store.items().len()),
            Action::FirstItem => self.home.select_first(self.store.items().len()),
            Action::LastItem => self.home.select_last(self.store.items().len()),
            Action::ClickItem { index, toggle } => {
                self.home.select(index, self.store.items().len());
                if toggle {
                    return Ok(Some(Action::ToggleDone));
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Item Mutations
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleDone => {
                let id = self.home.selected_item(self.store.items()).map(|i| i.id);
                if let Some(id) = id {
                    self.store.toggle_is_done(id);
                    self.sync_selection();
                }
            }
            Action::OpenDeleteDialog => {
                let target = self
                    .home
                    .selected_item(self.store.items())
                    .map(|i| (i.id, i.title.clone()));
                if let Some((id, title)) = target {
                    self.modals.push(Modal::DeleteConfirm { id, title });
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Input Bar
            // ─────────────────────────────────────────────────────────────────
            Action::FocusInput => {
                self.input_mode = InputMode::Editing;
            }
            Action::CancelInput => {
                self.input_mode = InputMode::Browse;
            }
            Action::SubmitInput => {
                self.input_bar.submit(&mut self.store);
                self.input_mode = InputMode::Browse;
                self.sync_selection();
            }
            Action::InputChar(c) => self.input_bar.insert_char(c),
            Action::InputBackspace => self.input_bar.backspace(),
            Action::NextInputField => self.input_bar.next_field(),
            Action::TimeUp => self.input_bar.nudge_time(TIME_STEP_MINUTES),
            Action::TimeDown => self.input_bar.nudge_time(-TIME_STEP_MINUTES),
            Action::TimeUpHour => self.input_bar.nudge_time(60),
            Action::TimeDownHour => self.input_bar.nudge_time(-60),

            // ─────────────────────────────────────────────────────────────────
            // Header Gesture (delegate to HeaderBanner)
            // ─────────────────────────────────────────────────────────────────
            Action::HeaderDragStart(_, _)
            | Action::HeaderDragUpdate(_, _)
            | Action::HeaderDragEnd => {
                self.header.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if let Some(modal) = self.modals.top().cloned() {
                    match modal {
                        Modal::QuitConfirm => {
                            self.should_quit = true;
                        }
                        Modal::DeleteConfirm { id, .. } => {
                            self.store.delete_item(id);
                            self.modals.pop();
                            self.sync_selection();
                        }
                    }
                }
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);
        let dimmed = self.input_mode.is_editing();

        let header_date = self.store.formatted_date_for_header();
        self.header.draw_banner(frame, layout.header, &header_date);

        render_count_line(frame, layout.count, self.store.items().len(), dimmed);
        self.home
            .render_list(frame, layout.list, self.store.items(), dimmed);
        self.input_bar.draw_bar(frame, layout.input, dimmed);
        render_help_bar(frame, layout.help, dimmed);

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::count_line;
    use crate::components::item_row::toggle_glyph;
    use crate::model::item::{Item, ItemId};
    use chrono::NaiveTime;

    /// Call-recording fake provider for interaction tests.
    #[derive(Default)]
    struct FakeStore {
        items: Vec<Item>,
        revision: u64,
        next_id: ItemId,
        create_calls: Vec<(String, String)>,
        toggle_calls: Vec<ItemId>,
        delete_calls: Vec<ItemId>,
    }

    impl FakeStore {
        fn with_items(titles: &[(&str, &str)]) -> Self {
            let mut store = FakeStore {
                next_id: 1,
                ..Default::default()
            };
            for (title, date) in titles {
                let item = Item::new(store.next_id, *title, *date);
                store.next_id += 1;
                store.items.push(item);
            }
            store
        }
    }

    impl DataProvider for FakeStore {
        fn items(&self) -> &[Item] {
            &self.items
        }
        fn revision(&self) -> u64 {
            self.revision
        }
        fn create_item(&mut self, title: &str, date: &str) -> Item {
            self.create_calls.push((title.to_string(), date.to_string()));
            let item = Item::new(self.next_id, title, date);
            self.next_id += 1;
            self.items.push(item.clone());
            self.revision += 1;
            item
        }
        fn toggle_is_done(&mut self, id: ItemId) {
            self.toggle_calls.push(id);
            if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
                item.is_done = !item.is_done;
                self.revision += 1;
            }
        }
        fn delete_item(&mut self, id: ItemId) {
            self.delete_calls.push(id);
            self.items.retain(|i| i.id != id);
            self.revision += 1;
        }
        fn formatted_date_for_user_data(&self, time: NaiveTime) -> String {
            time.format("%H:%M").to_string()
        }
        fn formatted_date_for_header(&self) -> String {
            "Jan 01".to_string()
        }
    }

    fn app_with(store: FakeStore) -> App<FakeStore> {
        let mut app = App::new(store);
        app.init().unwrap();
        app
    }

    #[test]
    fn test_focus_gain_is_idempotent() {
        let mut app = app_with(FakeStore::default());
        assert_eq!(app.input_mode, InputMode::Browse);

        app.update(Action::FocusInput).unwrap();
        app.update(Action::FocusInput).unwrap();
        assert_eq!(app.input_mode, InputMode::Editing);

        app.update(Action::SubmitInput).unwrap();
        assert_eq!(app.input_mode, InputMode::Browse);
    }

    #[test]
    fn test_submit_creates_exactly_once_and_clears_draft() {
        let mut app = app_with(FakeStore::default());

        app.update(Action::FocusInput).unwrap();
        for c in "Call Alice".chars() {
            app.update(Action::InputChar(c)).unwrap();
        }
        app.input_bar.time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        app.update(Action::SubmitInput).unwrap();

        assert_eq!(
            app.store.create_calls,
            vec![("Call Alice".to_string(), "14:30".to_string())]
        );
        assert_eq!(app.input_bar.draft, "");
        assert_eq!(app.input_mode, InputMode::Browse);
    }

    #[test]
    fn test_empty_submit_creates_nothing_but_still_resets() {
        let mut app = app_with(FakeStore::default());

        app.update(Action::FocusInput).unwrap();
        app.update(Action::SubmitInput).unwrap();

        assert!(app.store.create_calls.is_empty());
        assert_eq!(app.input_bar.draft, "");
        assert_eq!(app.input_mode, InputMode::Browse);
    }

    #[test]
    fn test_toggle_calls_provider_exactly_once() {
        let mut app = app_with(FakeStore::with_items(&[("Buy milk", "09:00")]));

        app.update(Action::ToggleDone).unwrap();

        assert_eq!(app.store.toggle_calls, vec![1]);
        assert!(app.store.create_calls.is_empty());
        assert!(app.store.delete_calls.is_empty());
        assert!(app.store.items[0].is_done);
    }

    #[test]
    fn test_toggle_with_no_items_issues_no_mutation() {
        let mut app = app_with(FakeStore::default());
        app.update(Action::ToggleDone).unwrap();
        assert!(app.store.toggle_calls.is_empty());
    }

    #[test]
    fn test_delete_confirms_then_deletes_exactly_once() {
        let mut app = app_with(FakeStore::with_items(&[
            ("Buy milk", "09:00"),
            ("Call Alice", "14:30"),
        ]));

        app.update(Action::NextItem).unwrap();
        app.update(Action::OpenDeleteDialog).unwrap();
        assert_eq!(
            app.modals.top(),
            Some(&Modal::DeleteConfirm {
                id: 2,
                title: "Call Alice".to_string(),
            })
        );

        app.update(Action::ConfirmModal).unwrap();

        assert_eq!(app.store.delete_calls, vec![2]);
        assert!(app.modals.is_empty());
        // Rendering reflects the provider's updated sequence
        assert_eq!(app.store.items().len(), 1);
        assert_eq!(app.home.list_state.selected(), Some(0));
    }

    #[test]
    fn test_delete_cancel_keeps_the_item() {
        let mut app = app_with(FakeStore::with_items(&[("Buy milk", "09:00")]));

        app.update(Action::OpenDeleteDialog).unwrap();
        app.update(Action::CloseModal).unwrap();

        assert!(app.store.delete_calls.is_empty());
        assert_eq!(app.store.items().len(), 1);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_selection_clamps_when_last_item_is_deleted() {
        let mut app = app_with(FakeStore::with_items(&[("only", "09:00")]));

        app.update(Action::OpenDeleteDialog).unwrap();
        app.update(Action::ConfirmModal).unwrap();

        assert!(app.store.items().is_empty());
        assert_eq!(app.home.list_state.selected(), None);
    }

    #[test]
    fn test_click_on_toggle_column_selects_then_toggles() {
        let mut app = app_with(FakeStore::with_items(&[
            ("Buy milk", "09:00"),
            ("Call Alice", "14:30"),
        ]));

        let follow_up = app
            .update(Action::ClickItem {
                index: 1,
                toggle: true,
            })
            .unwrap();
        assert_eq!(app.home.list_state.selected(), Some(1));
        assert_eq!(follow_up, Some(Action::ToggleDone));

        app.update(Action::ToggleDone).unwrap();
        assert_eq!(app.store.toggle_calls, vec![2]);
    }

    #[test]
    fn test_header_drag_scenario() {
        let mut app = app_with(FakeStore::default());

        app.update(Action::HeaderDragStart(40, 20)).unwrap();
        app.update(Action::HeaderDragUpdate(70, 10)).unwrap();
        assert!(app.header.is_dragging());
        assert_eq!(app.header.drag.offset, (30, -10));

        app.update(Action::HeaderDragEnd).unwrap();
        assert!(!app.header.is_dragging());
        assert_eq!(app.header.drag.offset, (0, 0));
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = app_with(FakeStore::default());

        app.update(Action::OpenQuitDialog).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        assert!(!app.should_quit);

        app.update(Action::ConfirmModal).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_end_to_end_single_item_screen() {
        let mut app = app_with(FakeStore::with_items(&[("Buy milk", "09:00")]));

        // Count line and row affordance for one undone item
        assert_eq!(count_line(app.store.items().len()), "1 Tasks Today");
        assert_eq!(toggle_glyph(app.store.items()[0].is_done), "○");

        // The cursor starts on it and toggling targets it
        assert_eq!(app.home.list_state.selected(), Some(0));
        app.update(Action::ToggleDone).unwrap();
        assert_eq!(app.store.toggle_calls, vec![1]);
        assert_eq!(toggle_glyph(app.store.items()[0].is_done), "◉");
    }

    #[test]
    fn test_mutations_preserve_provider_order() {
        let mut app = app_with(FakeStore::with_items(&[
            ("a", "08:00"),
            ("b", "09:00"),
            ("c", "10:00"),
        ]));

        app.update(Action::NextItem).unwrap();
        app.update(Action::OpenDeleteDialog).unwrap();
        app.update(Action::ConfirmModal).unwrap();

        let titles: Vec<&str> = app.store.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }
}
