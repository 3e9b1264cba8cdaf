//! 状态栏：快捷键提示 + 状态消息

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(status) = &app.status {
        let c = colors();
        let color = if status.is_error { c.error } else { c.success };
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(status.text.clone(), Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = &t().hints;

    if app.preview_open() {
        return vec![("Esc", texts.close), ("Ctrl+C", texts.quit)];
    }

    let mut hints = vec![("Tab", texts.switch_focus)];
    match app.focus {
        FocusPanel::SearchBar => {
            hints.push(("Enter", texts.submit));
            hints.push(("Esc", texts.clear));
        }
        FocusPanel::Results => {
            hints.push(("←↑↓→", texts.move_cursor));
            hints.push(("Enter", texts.open));
            hints.push(("m", texts.load_more));
        }
    }
    hints.push(("Alt+t", texts.theme));
    hints.push(("Alt+l", texts.language));
    hints.push((
        if app.focus.is_results() { "q" } else { "Ctrl+C" },
        texts.quit,
    ));
    hints
}
