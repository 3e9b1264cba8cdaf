//! 搜索框更新

use crate::message::SearchMessage;
use crate::model::{App, FocusPanel};

pub fn update(app: &mut App, msg: SearchMessage) {
    match msg {
        SearchMessage::Input(c) => app.input.push(c),
        SearchMessage::Backspace => {
            app.input.pop();
        }
        SearchMessage::Clear => app.input.clear(),
        SearchMessage::Submit => {
            if let Some(ticket) = app.session.submit(&app.input) {
                app.grid.reset();
                app.clear_status();
                app.pending_fetch = Some(ticket);
                app.focus = FocusPanel::Results;
            }
        }
    }
}
