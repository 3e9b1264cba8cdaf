//! 预览弹窗更新

use crate::message::PreviewMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: PreviewMessage) {
    match msg {
        PreviewMessage::Close => app.session.dismiss(),
        PreviewMessage::Escape => {
            app.signal.raise();
            app.session.pump_dismissals();
        }
    }
}
