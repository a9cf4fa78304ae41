use crate::app::AppState;
use crate::domain::Todo;
use crate::ui::styles::{
    border_style, default_style, hint_style, note_style, selected_style, title_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the to-do list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let date = Local::now().format("%a %b %d");
    let title = format!(" To-Dos ({}) ", date);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if app.todos.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " No to-dos yet (press a to add one)",
            hint_style(),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .todos
        .iter()
        .enumerate()
        .map(|(idx, todo)| {
            let line = create_todo_line(todo, app.use_emoji);
            let style = if idx == app.selected {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

/// Create a single line for a to-do
/// Format: [📝] Buy milk — 2 liters
fn create_todo_line(todo: &Todo, use_emoji: bool) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(Span::raw(format!("[{}] ", bullet_glyph(use_emoji))));
    spans.push(Span::raw(todo.title.clone()));

    if !todo.note.is_empty() {
        spans.push(Span::styled(format!("  · {}", todo.note), note_style()));
    }

    Line::from(spans)
}

/// Bullet glyph with ASCII fallback
fn bullet_glyph(use_emoji: bool) -> &'static str {
    if use_emoji {
        "📝"
    } else {
        "*"
    }
}
