//! 结果网格的光标与滚动状态

use std::ops::Range;

/// 卡片宽度（含边框）
pub const CARD_WIDTH: u16 = 30;
/// 卡片高度（含边框）：标签一行 + ID 一行
pub const CARD_HEIGHT: u16 = 4;

/// 网格状态
///
/// 列数与可见行数由结果区尺寸决定，在窗口大小改变时更新。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    /// 光标所在卡片的下标
    pub cursor: usize,
    /// 第一个可见行
    pub scroll_row: usize,
    pub columns: usize,
    pub visible_rows: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            cursor: 0,
            scroll_row: 0,
            columns: 1,
            visible_rows: 1,
        }
    }
}

impl GridState {
    /// 根据结果区内部尺寸重新计算列数和可见行数
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.columns = usize::from((width / CARD_WIDTH).max(1));
        self.visible_rows = usize::from((height / CARD_HEIGHT).max(1));
        self.ensure_visible();
    }

    fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }

    /// 光标是否在最后一行
    pub fn is_last_row(&self, len: usize) -> bool {
        len == 0 || self.row_of(self.cursor) == self.row_of(len - 1)
    }

    pub fn move_up(&mut self) {
        if self.cursor >= self.columns {
            self.cursor -= self.columns;
            self.ensure_visible();
        }
    }

    /// 下移一行，已在最后一行时返回 `false`
    pub fn move_down(&mut self, len: usize) -> bool {
        if self.is_last_row(len) {
            return false;
        }
        self.cursor = (self.cursor + self.columns).min(len - 1);
        self.ensure_visible();
        true
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.ensure_visible();
        }
    }

    pub fn move_right(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
            self.ensure_visible();
        }
    }

    pub fn first(&mut self) {
        self.cursor = 0;
        self.ensure_visible();
    }

    pub fn last(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
        self.ensure_visible();
    }

    /// 跳到指定卡片（越界时停在最后一张）
    pub fn jump_to(&mut self, index: usize, len: usize) {
        self.cursor = index.min(len.saturating_sub(1));
        self.ensure_visible();
    }

    /// 回到初始位置（新查询时）
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.scroll_row = 0;
    }

    /// 调整滚动使光标所在行可见
    pub fn ensure_visible(&mut self) {
        let row = self.row_of(self.cursor);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + self.visible_rows {
            self.scroll_row = row + 1 - self.visible_rows;
        }
    }

    /// 当前可见的卡片下标范围
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = (self.scroll_row * self.columns).min(len);
        let end = ((self.scroll_row + self.visible_rows) * self.columns).min(len);
        start..end
    }
}
