use image_search_core::{DismissalSignal, FetchTicket, SearchSession};

use super::{FocusPanel, GridState};
use crate::backend::AppConfig;

/// 状态栏消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 搜索框内容
    pub input: String,

    /// 搜索会话
    pub session: SearchSession,

    /// 结果网格
    pub grid: GridState,

    /// 状态栏消息
    pub status: Option<StatusMessage>,

    // === 交给主循环执行的副作用 ===
    /// 待派发的请求
    pub pending_fetch: Option<FetchTicket>,
    /// 语言或主题已改变，需要应用并保存
    pub preferences_changed: bool,

    /// 当前配置
    pub config: AppConfig,

    /// 预览关闭信号（与会话订阅的是同一个）
    pub signal: DismissalSignal,
}

impl App {
    /// 创建应用实例，会话立即订阅 `signal`
    pub fn new(config: AppConfig, signal: DismissalSignal) -> Self {
        let mut session = SearchSession::new();
        session.activate(&signal);

        Self {
            should_quit: false,
            focus: FocusPanel::SearchBar,
            input: String::new(),
            session,
            grid: GridState::default(),
            status: None,
            pending_fetch: None,
            preferences_changed: false,
            config,
            signal,
        }
    }

    /// 预览弹窗是否打开
    pub fn preview_open(&self) -> bool {
        self.session.state().selected_image.is_some()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    /// 设置错误消息
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// 取出待派发的请求
    pub fn take_pending_fetch(&mut self) -> Option<FetchTicket> {
        self.pending_fetch.take()
    }

    /// 取出偏好改变标记
    pub fn take_preferences_changed(&mut self) -> bool {
        std::mem::take(&mut self.preferences_changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_subscribes_session_to_signal() {
        let signal = DismissalSignal::new();
        let app = App::new(AppConfig::default(), signal.clone());
        assert!(app.session.is_active());
        assert_eq!(signal.subscriber_count(), 1);

        drop(app);
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn pending_effects_are_taken_once() {
        let mut app = App::new(AppConfig::default(), DismissalSignal::new());
        app.preferences_changed = true;
        assert!(app.take_preferences_changed());
        assert!(!app.take_preferences_changed());
        assert!(app.take_pending_fetch().is_none());
    }

    #[test]
    fn status_helpers() {
        let mut app = App::new(AppConfig::default(), DismissalSignal::new());
        app.set_error("boom");
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
        app.set_status("ok");
        assert_eq!(app.status.as_ref().map(|s| s.text.as_str()), Some("ok"));
        app.clear_status();
        assert!(app.status.is_none());
    }
}
