use crate::app::AppState;
use crate::ui::styles::{border_style, hint_style, running_style, stopped_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the focus timer pane: status, M:SS readout, start/stop hint
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let running = app.timer.is_running();

    let readout_style = if running {
        running_style()
    } else {
        stopped_style()
    };

    let hint = if running {
        "[s] stop"
    } else {
        "[s] start"
    };

    let line = Line::from(vec![
        Span::raw(format!(" {} ", timer_glyph(app.use_emoji))),
        Span::styled(app.timer.display(), readout_style),
        Span::raw("   "),
        Span::styled(hint, hint_style()),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Focus Timer ", title_style())),
    );

    f.render_widget(paragraph, area);
}

/// Timer glyph with ASCII fallback
fn timer_glyph(use_emoji: bool) -> &'static str {
    if use_emoji {
        "⏱"
    } else {
        "T"
    }
}
