/// Cursor and viewport of the result grid
///
/// `columns` and `visible_rows` are refreshed on every render from the
/// available area; movement methods take the current result count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    cursor: usize,
    columns: usize,
    scroll_row: usize,
    visible_rows: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

impl GridState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            columns: 1,
            scroll_row: 0,
            visible_rows: 1,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.scroll_row = 0;
    }

    /// Update the layout and keep the cursor row on screen
    pub fn set_layout(&mut self, columns: usize, visible_rows: usize, total: usize) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);
        self.clamp(total);
    }

    pub fn clamp(&mut self, total: usize) {
        self.cursor = self.cursor.min(total.saturating_sub(1));
        self.ensure_visible(total);
    }

    pub fn move_left(&mut self, total: usize) {
        self.cursor = self.cursor.saturating_sub(1);
        self.ensure_visible(total);
    }

    pub fn move_right(&mut self, total: usize) {
        if self.cursor + 1 < total {
            self.cursor += 1;
        }
        self.ensure_visible(total);
    }

    pub fn move_up(&mut self, total: usize) {
        self.cursor = self.cursor.saturating_sub(self.columns);
        self.ensure_visible(total);
    }

    /// Move one row down, landing on the last card if the row below is short
    pub fn move_down(&mut self, total: usize) {
        let current_row = self.cursor / self.columns;
        let last_row = total.saturating_sub(1) / self.columns;
        if current_row < last_row {
            self.cursor = (self.cursor + self.columns).min(total.saturating_sub(1));
        }
        self.ensure_visible(total);
    }

    pub fn move_to_first(&mut self, total: usize) {
        self.cursor = 0;
        self.ensure_visible(total);
    }

    pub fn move_to_last(&mut self, total: usize) {
        self.cursor = total.saturating_sub(1);
        self.ensure_visible(total);
    }

    fn ensure_visible(&mut self, total: usize) {
        let row = self.cursor / self.columns;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + self.visible_rows {
            self.scroll_row = row + 1 - self.visible_rows;
        }

        let total_rows = total.div_ceil(self.columns);
        let max_scroll = total_rows.saturating_sub(self.visible_rows);
        self.scroll_row = self.scroll_row.min(max_scroll);
    }
}

#[cfg(test)]
#[path = "grid_state_tests.rs"]
mod grid_state_tests;
