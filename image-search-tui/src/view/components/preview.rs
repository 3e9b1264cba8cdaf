//! 预览弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

const PREVIEW_WIDTH: u16 = 80;
const PREVIEW_HEIGHT: u16 = 12;

/// 渲染预览弹窗（如果有选中图片）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(image) = app.session.view_model().selected_image else {
        return;
    };
    let texts = &t().preview;
    let c = colors();

    let area = centered_rect(PREVIEW_WIDTH, PREVIEW_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Style::default().bg(c.bg).fg(c.fg));

    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label}: "), Styles::hint_key()),
            Span::raw(value),
        ])
    };

    let lines = vec![
        field(texts.id, image.id.to_string()),
        field(texts.tags, image.tags.clone()),
        Line::default(),
        field(texts.full_url, image.full_url.clone()),
        field(texts.preview_url, image.preview_url.clone()),
        Line::default(),
        Line::styled(texts.close_hint, Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::test_support::app_with_results;
    use crate::view::layout::test_support::render_to_string;

    #[test]
    fn centered_rect_fits_small_screens() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(centered_rect(80, 12, area), Rect::new(10, 9, 80, 12));
        assert_eq!(centered_rect(80, 12, Rect::new(0, 0, 40, 8)), Rect::new(0, 0, 40, 8));
    }

    #[test]
    fn overlay_shows_image_details() {
        let mut app = app_with_results("flowers", 3, 3);
        assert!(app.session.select_at(1));
        let screen = render_to_string(&app, 100, 30);

        assert!(screen.contains("Preview"));
        assert!(screen.contains("ID: 1"));
        assert!(screen.contains("Tags: tag1, nature"));
        assert!(screen.contains("https://cdn.example/1_1280.jpg"));
        assert!(screen.contains("https://cdn.example/1_640.jpg"));
        assert!(screen.contains("Esc / Enter to close"));
    }

    #[test]
    fn no_overlay_without_selection() {
        let screen = render_to_string(&app_with_results("flowers", 3, 3), 100, 30);
        assert!(!screen.contains("Esc / Enter to close"));
    }
}
