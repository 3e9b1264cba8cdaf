//! 结果网格更新

use crate::message::ResultsMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: ResultsMessage) {
    let len = app.session.state().results.len();
    match msg {
        ResultsMessage::MoveUp => app.grid.move_up(),
        ResultsMessage::MoveDown => {
            // 最后一行再往下即加载更多
            if !app.grid.move_down(len) && len > 0 {
                load_more(app);
            }
        }
        ResultsMessage::MoveLeft => app.grid.move_left(),
        ResultsMessage::MoveRight => app.grid.move_right(len),
        ResultsMessage::First => app.grid.first(),
        ResultsMessage::Last => app.grid.last(len),
        ResultsMessage::Open => {
            let cursor = app.grid.cursor;
            if app.session.select_at(cursor) {
                log::debug!("Opened preview for result {cursor}");
            }
        }
        ResultsMessage::LoadMore => load_more(app),
    }
}

fn load_more(app: &mut App) {
    if let Some(ticket) = app.session.load_more() {
        app.pending_fetch = Some(ticket);
    }
}
