use crate::app::AppState;
use crate::domain::FormField;
use crate::ui::{
    layout::create_form_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the modal add/edit form
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.form {
        let form_area = create_form_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, form_area);

        let title_text = if form.editing.is_some() {
            " Edit To-Do "
        } else {
            " Add To-Do "
        };

        let mut lines = Vec::new();

        // Title field
        lines.push(Line::raw(""));
        let title_label = if form.field == FormField::Title {
            "Title: (editing)"
        } else {
            "Title:"
        };
        lines.push(Line::raw(title_label));

        let title_line = Line::from(vec![
            Span::raw("> "),
            Span::styled(&form.title, modal_title_style()),
            if form.field == FormField::Title {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]);
        lines.push(title_line);
        lines.push(Line::raw(""));

        // Note field
        let note_label = if form.field == FormField::Note {
            "Note: (editing)"
        } else {
            "Note:"
        };
        lines.push(Line::raw(note_label));

        let note_line = Line::from(vec![
            Span::raw("> "),
            Span::styled(&form.note, modal_title_style()),
            if form.field == FormField::Note {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]);
        lines.push(note_line);
        lines.push(Line::raw(""));

        // Instructions
        lines.push(Line::raw(
            "Tab to switch fields  ·  Enter to save  ·  Esc to cancel",
        ));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, form_area);
    }
}
