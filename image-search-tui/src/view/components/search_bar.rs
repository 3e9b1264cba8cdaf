//! 搜索框

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let focused = app.focus.is_search_bar() && !app.preview_open();

    let block = Block::default()
        .title(format!(" {} ", texts.search.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let paragraph = if app.input.is_empty() {
        Paragraph::new(texts.search.placeholder).style(Styles::muted())
    } else {
        Paragraph::new(app.input.as_str()).style(Style::default().fg(colors().fg))
    };

    let inner = block.inner(area);
    frame.render_widget(paragraph.block(block), area);

    if focused && inner.width > 0 {
        let offset = u16::try_from(app.input.width()).unwrap_or(u16::MAX);
        let x = inner.x + offset.min(inner.width - 1);
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}
