//! 主布局

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::{current_language, t};
use crate::model::App;

use super::components;
use super::theme::colors;

/// 主布局的各个区域
struct MainAreas {
    title: Rect,
    search: Rect,
    results: Rect,
    pagination: Rect,
    status: Rect,
}

fn split(area: Rect) -> MainAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(3), // 搜索框
            Constraint::Min(1),    // 结果网格
            Constraint::Length(1), // 分页提示
            Constraint::Length(1), // 状态栏
        ])
        .split(area);

    MainAreas {
        title: chunks[0],
        search: chunks[1],
        results: chunks[2],
        pagination: chunks[3],
        status: chunks[4],
    }
}

/// 结果网格去掉边框后的区域，用于计算列数和行数
pub fn results_inner_area(area: Rect) -> Rect {
    split(area).results.inner(Margin::new(1, 1))
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let areas = split(frame.area());

    render_title_bar(frame, areas.title);
    components::search_bar::render(app, frame, areas.search);
    components::results::render(app, frame, areas.results);
    components::pagination::render(app, frame, areas.pagination);
    components::statusbar::render(app, frame, areas.status);

    // 弹窗在最上层
    components::preview::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = format!(
        " {} v{} · {}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION"),
        current_language().display_name()
    );
    let bar = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(bar, area);
}
