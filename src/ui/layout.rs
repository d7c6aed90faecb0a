//! Layout management and calculations

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Borders};

/// Outer areas of the two-row grid, before borders are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridAreas {
    pub iso_label: Rect,
    pub iso_value: Rect,
    pub unix_label: Rect,
    pub unix_value: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Height of one grid row including its borders
    #[must_use]
    pub fn row_height(borders: bool) -> u16 {
        if borders {
            3
        } else {
            1
        }
    }

    /// Split `area` into a label column of `label_width` and a value column, two rows high
    #[must_use]
    pub fn grid(area: Rect, label_width: u16, borders: bool) -> GridAreas {
        let row_height = Self::row_height(borders);
        let label_column = if borders { label_width.saturating_add(2) } else { label_width };

        let rows = Layout::vertical([
            Constraint::Length(row_height),
            Constraint::Length(row_height),
            Constraint::Min(0),
        ])
        .split(area);

        let columns = |row: Rect| Layout::horizontal([Constraint::Length(label_column), Constraint::Min(0)]).split(row);
        let iso = columns(rows[0]);
        let unix = columns(rows[1]);

        GridAreas {
            iso_label: iso[0],
            iso_value: iso[1],
            unix_label: unix[0],
            unix_value: unix[1],
        }
    }

    /// Block drawn around a grid cell
    #[must_use]
    pub fn cell_block(borders: bool) -> Block<'static> {
        if borders {
            Block::default().borders(Borders::ALL)
        } else {
            Block::default()
        }
    }

    /// Content area of a grid cell
    #[must_use]
    pub fn cell_inner(cell: Rect, borders: bool) -> Rect {
        Self::cell_block(borders).inner(cell)
    }
}
