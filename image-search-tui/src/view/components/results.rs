//! 结果网格
//!
//! 每张卡片显示标签和 ID。光标所在卡片在焦点位于网格时高亮。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use image_search_provider::ImageRecord;

use super::truncate_to_width;
use crate::i18n::t;
use crate::model::{App, CARD_HEIGHT, CARD_WIDTH};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let vm = app.session.view_model();
    let focused = app.focus.is_results() && !app.preview_open();

    let title = if vm.has_results {
        format!(" {} ({}/{}) ", texts.results.title, vm.results.len(), vm.total_available)
    } else {
        format!(" {} ", texts.results.title)
    };
    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !vm.has_results {
        let hint = if vm.is_loading {
            texts.common.loading
        } else if vm.query.is_empty() {
            texts.results.prompt
        } else {
            texts.results.no_results
        };
        let paragraph = Paragraph::new(hint)
            .style(Styles::muted())
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, centered_line(inner));
        return;
    }

    let grid = &app.grid;
    let range = grid.visible_range(vm.results.len());
    let start = range.start;
    for index in range {
        let slot = index - start;
        let Some(card_area) = card_rect(inner, slot / grid.columns, slot % grid.columns) else {
            continue;
        };
        let highlighted = focused && index == grid.cursor;
        render_card(frame, card_area, &vm.results[index], highlighted);
    }
}

/// 第 `row` 行第 `col` 列卡片的位置，超出区域时返回 `None`
fn card_rect(inner: Rect, row: usize, col: usize) -> Option<Rect> {
    let x = u16::try_from(col).ok()?.checked_mul(CARD_WIDTH)?;
    let y = u16::try_from(row).ok()?.checked_mul(CARD_HEIGHT)?;
    if x + CARD_WIDTH > inner.width || y + CARD_HEIGHT > inner.height {
        return None;
    }
    Some(Rect::new(inner.x + x, inner.y + y, CARD_WIDTH, CARD_HEIGHT))
}

fn render_card(frame: &mut Frame, area: Rect, image: &ImageRecord, highlighted: bool) {
    let c = colors();
    let border = if highlighted {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Styles::border(false)
    };
    let tags_style = if highlighted {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    let width = usize::from(area.width.saturating_sub(2));
    let lines = vec![
        Line::styled(truncate_to_width(&image.tags, width), tags_style),
        Line::styled(format!("ID {}", image.id), Styles::muted()),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 区域垂直居中的一行
fn centered_line(area: Rect) -> Rect {
    let y = area.y + area.height / 2;
    Rect::new(area.x, y, area.width, area.height.min(1))
}
