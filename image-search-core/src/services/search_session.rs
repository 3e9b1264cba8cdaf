//! 搜索会话：查询、翻页、结果累积与预览选择的状态机

use image_search_provider::ImageSearchProvider;

use crate::dismissal::{DismissalSignal, DismissalSubscription};
use crate::error::FetchFailure;
use crate::services::fetch_page;
use crate::types::{FetchTicket, ImageRecord, SearchPage, SearchState, SessionEvent, ViewModel};

/// 搜索会话
///
/// 唯一持有 [`SearchState`] 的对象。所有修改都经过这里的方法：
///
/// - [`submit`](Self::submit)：提交新查询，清空结果并请求第 1 页
/// - [`load_more`](Self::load_more)：请求下一页，结果追加
/// - [`complete`](Self::complete)：交付请求结果
/// - [`select`](Self::select) / [`dismiss`](Self::dismiss)：打开 / 关闭预览
///
/// 非阻塞驱动（如 TUI）使用 `submit`/`load_more` 返回的 [`FetchTicket`]
/// 自行发起请求，再调用 `complete`；简单调用方可直接使用
/// [`fetch_current_page`](Self::fetch_current_page)。
#[derive(Debug, Default)]
pub struct SearchSession {
    state: SearchState,
    /// 每次提交新查询递增
    generation: u64,
    /// 当前唯一被接受的在途请求
    in_flight: Option<FetchTicket>,
    /// 当前查询最近一次成功交付的页码
    delivered_page: Option<u32>,
    dismissals: Option<DismissalSubscription>,
}

impl SearchSession {
    /// 创建空会话
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前状态（只读）
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// 派生视图
    pub fn view_model(&self) -> ViewModel<'_> {
        ViewModel::derive(&self.state)
    }

    /// 提交查询
    ///
    /// 输入先 trim；为空或与当前查询完全相同（区分大小写）时不做任何事。
    /// 否则清空结果、页码归 1，并返回第 1 页的请求凭据。
    pub fn submit(&mut self, raw_query: &str) -> Option<FetchTicket> {
        let query = raw_query.trim();
        if query.is_empty() {
            log::debug!("Ignoring empty query");
            return None;
        }
        if query == self.state.query {
            log::debug!("Ignoring duplicate query {query:?}");
            return None;
        }

        log::info!("New search: {query:?}");
        self.generation += 1;
        self.state.query = query.to_string();
        self.state.page = 1;
        self.state.results.clear();
        self.state.total_available = 0;
        self.state.selected_image = None;
        self.delivered_page = None;

        Some(self.begin_fetch())
    }

    /// 请求下一页
    ///
    /// 仅当没有请求在途且还有未加载的结果时生效。
    pub fn load_more(&mut self) -> Option<FetchTicket> {
        if !self.view_model().has_more {
            log::debug!(
                "Ignoring load more (loading: {}, {}/{})",
                self.state.is_loading,
                self.state.results.len(),
                self.state.total_available
            );
            return None;
        }

        self.state.page += 1;
        log::debug!("Loading page {} of {:?}", self.state.page, self.state.query);
        Some(self.begin_fetch())
    }

    /// 为当前 `(query, page)` 登记一次请求，置 `is_loading`
    ///
    /// 之前的在途凭据随之失效。只能经由 `submit`/`load_more` 或
    /// `fetch_current_page` 调用，保证加载中不会再发出第二张凭据。
    fn begin_fetch(&mut self) -> FetchTicket {
        let ticket = FetchTicket {
            generation: self.generation,
            query: self.state.query.clone(),
            page: self.state.page,
        };
        self.state.is_loading = true;
        self.in_flight = Some(ticket.clone());
        ticket
    }

    /// `ticket` 是否仍是当前在途请求
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.in_flight.as_ref() == Some(ticket)
    }

    /// 交付请求结果
    ///
    /// 过期凭据的结果直接丢弃，不改变任何状态。
    /// 成功时第 1 页替换结果、后续页追加，并更新总数；失败时记录日志，
    /// 结果和总数保持不变。两种情况最后都会清除 `is_loading`。
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<SearchPage, FetchFailure>,
    ) -> Option<SessionEvent> {
        if !self.is_current(ticket) {
            log::debug!(
                "Discarding stale response for {:?} page {}",
                ticket.query,
                ticket.page
            );
            return None;
        }
        self.in_flight = None;

        let event = match outcome {
            Ok(page) => {
                let first_new_index = self.state.results.len();
                if ticket.page == 1 {
                    self.state.results = page.items;
                } else {
                    self.state.results.extend(page.items);
                }
                self.state.total_available = page.total_count;
                self.delivered_page = Some(ticket.page);
                log::debug!(
                    "Loaded {}/{} results for {:?}",
                    self.state.results.len(),
                    self.state.total_available,
                    ticket.query
                );

                (ticket.page > 1).then_some(SessionEvent::ScrollToAppended { first_new_index })
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("{e}");
                } else {
                    log::error!("{e}");
                }
                None
            }
        };

        self.state.is_loading = false;
        event
    }

    /// 请求当前页并交付结果
    ///
    /// 有待处理的凭据（`submit`/`load_more` 刚登记的）时直接使用它；
    /// 当前页已成功交付过、或查询为空时不发请求。失败的页可以重试。
    pub async fn fetch_current_page(
        &mut self,
        provider: &dyn ImageSearchProvider,
    ) -> Option<SessionEvent> {
        if self.state.query.is_empty() {
            return None;
        }
        let ticket = match self.in_flight.clone() {
            Some(pending) => pending,
            None if self.delivered_page == Some(self.state.page) => {
                log::debug!(
                    "Page {} of {:?} already delivered",
                    self.state.page,
                    self.state.query
                );
                return None;
            }
            None => self.begin_fetch(),
        };
        let outcome = fetch_page(provider, &ticket.query, ticket.page).await;
        self.complete(&ticket, outcome)
    }

    /// 选中一张图片打开预览
    ///
    /// 图片必须属于当前结果，否则返回 `false`。
    pub fn select(&mut self, image: &ImageRecord) -> bool {
        match self.state.results.iter().find(|r| r.id == image.id) {
            Some(found) => {
                self.state.selected_image = Some(found.clone());
                true
            }
            None => {
                log::debug!("Ignoring selection of unknown image {}", image.id);
                false
            }
        }
    }

    /// 按下标选中
    pub fn select_at(&mut self, index: usize) -> bool {
        match self.state.results.get(index) {
            Some(found) => {
                self.state.selected_image = Some(found.clone());
                true
            }
            None => false,
        }
    }

    /// 关闭预览
    pub fn dismiss(&mut self) {
        self.state.selected_image = None;
    }

    /// 订阅关闭信号
    pub fn activate(&mut self, signal: &DismissalSignal) {
        self.dismissals = Some(signal.subscribe());
    }

    /// 释放关闭信号订阅
    pub fn deactivate(&mut self) {
        self.dismissals = None;
    }

    /// 是否持有关闭信号订阅
    pub fn is_active(&self) -> bool {
        self.dismissals.is_some()
    }

    /// 处理积压的关闭信号，有则关闭预览一次
    pub fn pump_dismissals(&mut self) -> bool {
        let received = self
            .dismissals
            .as_mut()
            .map_or(0, DismissalSubscription::drain);
        if received > 0 {
            self.dismiss();
            true
        } else {
            false
        }
    }
}
