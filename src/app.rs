use crate::domain::{Countdown, FormField, Todo, UiMode};
use std::time::Instant;

/// Transient draft backing the add/edit modal form
#[derive(Debug, Clone)]
pub struct FormState {
    pub title: String,
    pub note: String,
    /// `None` while adding a new item, `Some(index)` while editing
    pub editing: Option<usize>,
    pub field: FormField,
}

impl FormState {
    fn blank() -> Self {
        Self {
            title: String::new(),
            note: String::new(),
            editing: None,
            field: FormField::Title,
        }
    }

    fn for_item(index: usize, todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            note: todo.note.clone(),
            editing: Some(index),
            field: FormField::Title,
        }
    }
}

/// Main application state
pub struct AppState {
    pub todos: Vec<Todo>,
    pub selected: usize,
    pub ui_mode: UiMode,
    /// The draft's existence is the modal's visibility
    pub form: Option<FormState>,
    pub timer: Countdown,
    pub use_emoji: bool,
}

impl AppState {
    pub fn new(session_secs: u32, use_emoji: bool) -> Self {
        Self {
            todos: Vec::new(),
            selected: 0,
            ui_mode: UiMode::Normal,
            form: None,
            timer: Countdown::new(session_secs),
            use_emoji,
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected + 1 < self.todos.len() {
            self.selected += 1;
        }
    }

    /// Open the form for a new item. No side effect on the list or timer.
    pub fn start_add_todo(&mut self) {
        self.form = Some(FormState::blank());
        self.ui_mode = UiMode::Form;
    }

    /// Open the selected item in the form. Opening a to-do always restarts
    /// the focus timer from a full session, discarding any countdown in
    /// progress.
    pub fn start_edit_todo(&mut self, now: Instant) {
        let Some(todo) = self.todos.get(self.selected) else {
            return;
        };
        self.form = Some(FormState::for_item(self.selected, todo));
        self.ui_mode = UiMode::Form;
        self.timer.restart(now);
    }

    /// Delete the selected item, shifting later items down one position.
    /// Timer and form are untouched.
    pub fn delete_todo(&mut self) {
        if self.selected < self.todos.len() {
            self.todos.remove(self.selected);

            // Keep the cursor on a valid row
            if self.todos.is_empty() {
                self.selected = 0;
            } else if self.selected >= self.todos.len() {
                self.selected = self.todos.len() - 1;
            }
        }
    }

    /// Save the draft: replace in place when editing, append when adding.
    /// Closes the form. Empty title and note are accepted as-is.
    pub fn save_todo(&mut self) {
        if let Some(form) = self.form.take() {
            let editing = form.editing;
            let todo = Todo::new(form.title, form.note);
            match editing {
                Some(index) => self.todos[index] = todo,
                None => self.todos.push(todo),
            }
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Close the form and drop the draft without saving. Timer untouched.
    pub fn close_form(&mut self) {
        self.form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Switch the form between title and note
    pub fn form_toggle_field(&mut self) {
        if let Some(form) = &mut self.form {
            form.field = form.field.next();
        }
    }

    /// Add character to the form's active field
    pub fn form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.form {
            match form.field {
                FormField::Title => form.title.push(c),
                FormField::Note => form.note.push(c),
            }
        }
    }

    /// Backspace in the form's active field
    pub fn form_backspace(&mut self) {
        if let Some(form) = &mut self.form {
            match form.field {
                FormField::Title => {
                    form.title.pop();
                }
                FormField::Note => {
                    form.note.pop();
                }
            }
        }
    }

    /// Start or stop the countdown. Starting resumes from the current
    /// remaining value.
    pub fn toggle_timer(&mut self, now: Instant) {
        if self.timer.is_running() {
            self.timer.stop();
        } else {
            self.timer.start(now);
        }
    }

    /// Advance the countdown (called once per event-loop iteration)
    pub fn tick(&mut self, now: Instant) {
        self.timer.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TimerStatus, DEFAULT_SESSION_SECS};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn create_test_app() -> AppState {
        AppState::new(DEFAULT_SESSION_SECS, true)
    }

    fn add_todo(app: &mut AppState, title: &str, note: &str) {
        app.start_add_todo();
        for c in title.chars() {
            app.form_add_char(c);
        }
        app.form_toggle_field();
        for c in note.chars() {
            app.form_add_char(c);
        }
        app.save_todo();
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert!(app.todos.is_empty());
        assert_eq!(app.selected, 0);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.form.is_none());
        assert_eq!(app.timer.status, TimerStatus::Stopped);
        assert_eq!(app.timer.remaining_secs, 1500);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut app = create_test_app();
        add_todo(&mut app, "first", "a");
        add_todo(&mut app, "second", "b");
        add_todo(&mut app, "third", "c");

        assert_eq!(app.todos.len(), 3);
        assert_eq!(app.todos[0].title, "first");
        assert_eq!(app.todos[1].title, "second");
        assert_eq!(app.todos[2].title, "third");
    }

    #[test]
    fn test_add_does_not_touch_timer() {
        let mut app = create_test_app();
        app.start_add_todo();
        assert_eq!(app.timer.status, TimerStatus::Stopped);
        assert_eq!(app.timer.remaining_secs, 1500);
    }

    #[test]
    fn test_save_accepts_empty_title_and_note() {
        let mut app = create_test_app();
        app.start_add_todo();
        app.save_todo();

        assert_eq!(app.todos.len(), 1);
        assert_eq!(app.todos[0], Todo::new("", ""));
        assert!(app.form.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_delete_shifts_later_items_left() {
        let mut app = create_test_app();
        add_todo(&mut app, "a", "");
        add_todo(&mut app, "b", "");
        add_todo(&mut app, "c", "");

        app.selected = 1;
        app.delete_todo();

        assert_eq!(app.todos.len(), 2);
        assert_eq!(app.todos[0].title, "a");
        assert_eq!(app.todos[1].title, "c");
    }

    #[test]
    fn test_delete_last_item_clamps_selection() {
        let mut app = create_test_app();
        add_todo(&mut app, "a", "");
        add_todo(&mut app, "b", "");

        app.selected = 1;
        app.delete_todo();
        assert_eq!(app.selected, 0);

        app.delete_todo();
        assert!(app.todos.is_empty());
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_delete_does_not_touch_timer() {
        let t0 = Instant::now();
        let mut app = create_test_app();
        add_todo(&mut app, "a", "");

        app.timer.start(t0);
        app.delete_todo();
        assert_eq!(app.timer.status, TimerStatus::Started);
        assert_eq!(app.timer.remaining_secs, 1500);
    }

    #[test]
    fn test_edit_then_save_replaces_only_that_index() {
        let t0 = Instant::now();
        let mut app = create_test_app();
        add_todo(&mut app, "a", "old note");
        add_todo(&mut app, "b", "keep");

        app.selected = 0;
        app.start_edit_todo(t0);

        let form = app.form.as_ref().unwrap();
        assert_eq!(form.title, "a");
        assert_eq!(form.note, "old note");
        assert_eq!(form.editing, Some(0));

        app.form_add_char('!');
        app.save_todo();

        assert_eq!(app.todos.len(), 2);
        assert_eq!(app.todos[0], Todo::new("a!", "old note"));
        assert_eq!(app.todos[1], Todo::new("b", "keep"));
    }

    #[test]
    fn test_edit_restarts_timer_unconditionally() {
        let t0 = Instant::now();
        let mut app = create_test_app();
        add_todo(&mut app, "a", "");

        // Run the timer down to 300 remaining
        app.timer.start(t0);
        app.tick(t0 + Duration::from_secs(1200));
        assert_eq!(app.timer.remaining_secs, 300);

        app.start_edit_todo(t0 + Duration::from_secs(1200));
        assert_eq!(app.timer.status, TimerStatus::Started);
        assert_eq!(app.timer.remaining_secs, 1500);
    }

    #[test]
    fn test_cancel_after_edit_leaves_list_unchanged() {
        let t0 = Instant::now();
        let mut app = create_test_app();
        add_todo(&mut app, "a", "note");

        app.start_edit_todo(t0);
        app.form_add_char('X');
        app.close_form();

        assert_eq!(app.todos.len(), 1);
        assert_eq!(app.todos[0], Todo::new("a", "note"));
        assert!(app.form.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_cancel_does_not_touch_timer() {
        let t0 = Instant::now();
        let mut app = create_test_app();
        add_todo(&mut app, "a", "");

        app.start_edit_todo(t0);
        assert_eq!(app.timer.status, TimerStatus::Started);

        app.close_form();
        assert_eq!(app.timer.status, TimerStatus::Started);
        assert_eq!(app.timer.remaining_secs, 1500);
    }

    #[test]
    fn test_edit_on_empty_list_is_a_no_op() {
        let t0 = Instant::now();
        let mut app = create_test_app();
        app.start_edit_todo(t0);

        assert!(app.form.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.timer.status, TimerStatus::Stopped);
    }

    #[test]
    fn test_toggle_timer_resumes_from_current_value() {
        let t0 = Instant::now();
        let mut app = create_test_app();

        app.toggle_timer(t0);
        assert_eq!(app.timer.status, TimerStatus::Started);

        app.tick(t0 + Duration::from_secs(100));
        app.toggle_timer(t0 + Duration::from_secs(100));
        assert_eq!(app.timer.status, TimerStatus::Stopped);
        assert_eq!(app.timer.remaining_secs, 1400);

        app.toggle_timer(t0 + Duration::from_secs(200));
        assert_eq!(app.timer.status, TimerStatus::Started);
        assert_eq!(app.timer.remaining_secs, 1400);
    }

    #[test]
    fn test_form_backspace() {
        let mut app = create_test_app();
        app.start_add_todo();
        app.form_add_char('h');
        app.form_add_char('i');
        app.form_backspace();

        assert_eq!(app.form.as_ref().unwrap().title, "h");

        // Backspace on an empty field is harmless
        app.form_backspace();
        app.form_backspace();
        assert_eq!(app.form.as_ref().unwrap().title, "");
    }

    #[test]
    fn test_selection_bounds() {
        let mut app = create_test_app();
        add_todo(&mut app, "a", "");
        add_todo(&mut app, "b", "");

        app.move_selection_up();
        assert_eq!(app.selected, 0);

        app.move_selection_down();
        assert_eq!(app.selected, 1);

        app.move_selection_down();
        assert_eq!(app.selected, 1);
    }
}
