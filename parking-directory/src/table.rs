use std::cmp::Ordering;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::columns::Field;
use crate::error::DirectoryError;
use crate::filter::InclusionSet;
use crate::types::{Amenity, PassType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Pass(PassType),
    Amenity(Amenity),
}

/// A small icon drawn inside a cell, with the text read out in its tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub label: &'static str,
}

impl Badge {
    pub fn pass(pass: PassType) -> Self {
        Self {
            kind: BadgeKind::Pass(pass),
            label: pass.label(),
        }
    }

    pub fn amenity(amenity: Amenity) -> Self {
        Self {
            kind: BadgeKind::Amenity(amenity),
            label: amenity.label(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub text: String,
    pub badges: Vec<Badge>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            badges: Vec::new(),
        }
    }

    /// Appends `badge` unless the cell already carries it. Returns whether it was added.
    pub fn push_badge(&mut self, badge: Badge) -> bool {
        if self.badges.contains(&badge) {
            return false;
        }
        self.badges.push(badge);
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnState {
    pub header: Cell,
    /// Set by the column registry once the header is matched.
    pub field: Option<Field>,
    pub visible: bool,
    pub orderable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// The static table of lots: header cells, data cells, column visibility and row order.
///
/// Rows are addressed by their position in the source data, which never changes.
/// Sorting only changes `order`, the sequence in which rows are displayed.
#[derive(Debug, Clone)]
pub struct EntityTable {
    columns: Vec<ColumnState>,
    rows: Vec<Vec<Cell>>,
    order: Vec<usize>,
    sorted_by: Option<(usize, SortOrder)>,
    drawn: Vec<usize>,
}

impl EntityTable {
    /// Builds a table from header titles and row texts. Short rows are padded with empty cells.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let columns = headers
            .into_iter()
            .map(|title| ColumnState {
                header: Cell::new(title),
                field: None,
                visible: true,
                orderable: true,
            })
            .collect();
        let rows: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|texts| {
                let mut cells: Vec<Cell> = texts.into_iter().take(width).map(Cell::new).collect();
                cells.resize_with(width, Cell::default);
                cells
            })
            .collect();
        let order: Vec<usize> = (0..rows.len()).collect();

        Self {
            columns,
            drawn: order.clone(),
            order,
            rows,
            sorted_by: None,
        }
    }

    /// Reads a CSV document whose first record is the header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self::new(headers, rows))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let file = File::open(path.as_ref())?;
        let table = Self::from_reader(file)?;
        log::info!(
            "loaded {} lots from {}",
            table.row_count(),
            path.as_ref().display()
        );
        Ok(table)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[ColumnState] {
        &self.columns
    }

    pub fn column(&self, col: usize) -> Option<&ColumnState> {
        self.columns.get(col)
    }

    pub fn header_mut(&mut self, col: usize) -> Option<&mut Cell> {
        self.columns.get_mut(col).map(|column| &mut column.header)
    }

    /// Tags the header cell at `col` with the field it holds.
    pub fn tag_column(&mut self, col: usize, field: Field) {
        if let Some(column) = self.columns.get_mut(col) {
            column.field = Some(field);
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|cells| cells.get_mut(col))
    }

    pub fn set_text(&mut self, row: usize, col: usize, text: impl Into<String>) -> Result<(), DirectoryError> {
        let cell = self
            .cell_mut(row, col)
            .ok_or(DirectoryError::RowOutOfRange(row))?;
        cell.text = text.into();
        Ok(())
    }

    pub fn set_column_visible(&mut self, col: usize, visible: bool) {
        if let Some(column) = self.columns.get_mut(col) {
            column.visible = visible;
        }
    }

    pub fn is_column_visible(&self, col: usize) -> bool {
        self.columns.get(col).is_some_and(|column| column.visible)
    }

    pub fn set_orderable(&mut self, col: usize, orderable: bool) {
        if let Some(column) = self.columns.get_mut(col) {
            column.orderable = orderable;
        }
    }

    pub fn visible_columns(&self) -> Vec<usize> {
        (0..self.columns.len())
            .filter(|col| self.columns[*col].visible)
            .collect()
    }

    /// Reorders the rows by the values in `col`.
    ///
    /// Cells that parse as numbers compare numerically and sort before text cells;
    /// ties keep source order.
    pub fn sort_by(&mut self, col: usize, sort_order: SortOrder) {
        if col >= self.columns.len() {
            return;
        }
        let rows = &self.rows;
        let mut order: Vec<usize> = (0..rows.len()).collect();
        order.sort_by(|a, b| {
            let ordering = compare_cells(&rows[*a][col].text, &rows[*b][col].text);
            match sort_order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
        self.order = order;
        self.sorted_by = Some((col, sort_order));
    }

    pub fn sorted_by(&self) -> Option<(usize, SortOrder)> {
        self.sorted_by
    }

    /// Row indices in display order, regardless of filtering.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Recomputes the displayed rows: the current order restricted to `inclusion`.
    pub fn draw(&mut self, inclusion: &InclusionSet) {
        self.drawn = self
            .order
            .iter()
            .copied()
            .filter(|row| inclusion.contains(*row))
            .collect();
    }

    /// Rows displayed by the last draw, in display order.
    pub fn drawn_rows(&self) -> &[usize] {
        &self.drawn
    }
}

fn compare_cells(a: &str, b: &str) -> Ordering {
    let parse = |text: &str| text.trim().parse::<f64>().ok().filter(|v| !v.is_nan());
    match (parse(a), parse(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> EntityTable {
        EntityTable::new(
            vec!["ID".to_string(), "Distance".to_string()],
            vec![
                vec!["NC1".to_string(), "2.5".to_string()],
                vec!["SC2".to_string(), "".to_string()],
                vec!["M3".to_string(), "0.75".to_string()],
                vec!["NC4".to_string(), "10".to_string()],
            ],
        )
    }

    #[test]
    fn test_from_reader_pads_short_rows() {
        let data = "ID,Address,Hours\nNC1,1 Main St\nNC2,2 Main St,7-6\n";
        let table = EntityTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.cell(0, 2).unwrap().text, "");
        assert_eq!(table.cell(1, 2).unwrap().text, "7-6");
    }

    #[test]
    fn test_sort_numeric_ascending() {
        let mut table = sample_table();
        table.sort_by(1, SortOrder::Ascending);
        // "10" must not sort before "2.5", and the empty cell goes last.
        assert_eq!(table.order(), &[2, 0, 3, 1]);
        assert_eq!(table.sorted_by(), Some((1, SortOrder::Ascending)));
    }

    #[test]
    fn test_sort_descending() {
        let mut table = sample_table();
        table.sort_by(1, SortOrder::Descending);
        assert_eq!(table.order(), &[1, 3, 0, 2]);
    }

    #[test]
    fn test_sort_text_column() {
        let mut table = sample_table();
        table.sort_by(0, SortOrder::Ascending);
        assert_eq!(table.order(), &[2, 0, 3, 1]);
    }

    #[test]
    fn test_draw_respects_order_and_inclusion() {
        let mut table = sample_table();
        table.sort_by(1, SortOrder::Ascending);
        table.draw(&InclusionSet::from(vec![true, true, false, true]));
        assert_eq!(table.drawn_rows(), &[0, 3, 1]);
    }

    #[test]
    fn test_column_visibility() {
        let mut table = sample_table();
        table.set_column_visible(1, false);
        assert!(!table.is_column_visible(1));
        assert_eq!(table.visible_columns(), vec![0]);
        table.set_column_visible(1, true);
        assert_eq!(table.visible_columns(), vec![0, 1]);
    }

    #[test]
    fn test_set_text_out_of_range() {
        let mut table = sample_table();
        assert!(table.set_text(0, 1, "1.25").is_ok());
        assert_eq!(table.cell(0, 1).unwrap().text, "1.25");
        assert!(matches!(
            table.set_text(9, 1, "x"),
            Err(DirectoryError::RowOutOfRange(9))
        ));
    }

    #[test]
    fn test_push_badge_is_idempotent() {
        let mut cell = Cell::new("");
        assert!(cell.push_badge(Badge::pass(PassType::Blue)));
        assert!(!cell.push_badge(Badge::pass(PassType::Blue)));
        assert_eq!(cell.badges.len(), 1);
    }
}
