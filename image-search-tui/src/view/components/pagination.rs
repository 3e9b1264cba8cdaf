//! 分页提示行

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let vm = app.session.view_model();
    let c = colors();

    let line = if vm.is_loading {
        Line::from(Span::styled(
            texts.common.loading,
            Style::default().fg(c.warning),
        ))
    } else if vm.has_more {
        Line::from(vec![
            Span::styled("m", Styles::hint_key()),
            Span::raw("  "),
            Span::styled(
                format!(
                    "{} ({}/{})",
                    texts.pagination.load_more,
                    vm.results.len(),
                    vm.total_available
                ),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            ),
        ])
    } else if vm.exhausted {
        Line::from(Span::styled(
            format!("{} ({})", texts.pagination.no_more, vm.results.len()),
            Styles::muted(),
        ))
    } else {
        Line::default()
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
