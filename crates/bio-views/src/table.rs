//! Generic paginated table
//!
//! Renders any record slice under a set of column projections without
//! knowing the record type's semantics. The only state owned here is the
//! current page window; everything else is derived from the inputs on each
//! render, and a page change only re-slices the records already held by the
//! caller.

use bio_core::{display_or, paginate, PageWindow};
use egui::Ui;

/// The display alphabet of one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    /// A clickable navigation to another protein's detail view.
    Link { label: String, protein_id: String },
}

/// How a column derives its cell from a record: a direct field read (the
/// table substitutes "N/A" for an absent value) or a projection whose
/// return value is used verbatim.
pub enum Accessor<T> {
    Field(fn(&T) -> Option<String>),
    Projection(fn(&T) -> CellValue),
}

/// One column: header label plus accessor. Declaration order is render
/// order.
pub struct Column<T> {
    pub header: &'static str,
    pub accessor: Accessor<T>,
}

/// Resolve one cell. The "N/A" fallback applies only to field misses; a
/// projection is responsible for its own fallback.
pub fn resolve_cell<T>(column: &Column<T>, record: &T) -> CellValue {
    match &column.accessor {
        Accessor::Field(read) => CellValue::Text(display_or(read(record))),
        Accessor::Projection(project) => project(record),
    }
}

/// Action bubbled out of a rendered table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    OpenProtein(String),
}

/// Paginated grid over a record slice.
pub struct TableView<T> {
    id: &'static str,
    columns: Vec<Column<T>>,
    row_key: fn(&T, usize) -> String,
    window: PageWindow,
}

impl<T> TableView<T> {
    /// `row_key` must be unique within a page; collisions are a caller
    /// defect (egui will flag the duplicated widget ids).
    pub fn new(id: &'static str, columns: Vec<Column<T>>, row_key: fn(&T, usize) -> String) -> Self {
        debug_assert!(!columns.is_empty());
        Self {
            id,
            columns,
            row_key,
            window: PageWindow::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.window = PageWindow::new(page_size);
        self
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    pub fn ui(&mut self, ui: &mut Ui, records: &[T]) -> Option<TableAction> {
        // Re-clamp against the current record set so a shrunk set can never
        // leave the view on a phantom page.
        let (visible, window) = paginate(records, &self.window);
        self.window = window;
        let start = self.window.start_index(records.len());

        let mut action = None;
        let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.5;

        ui.push_id(self.id, |ui| {
            use egui_extras::{Column as GridColumn, TableBuilder};

            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .min_scrolled_height(0.0)
                .vscroll(false);

            for _ in 0..self.columns.len() {
                builder = builder.column(
                    GridColumn::initial(150.0)
                        .at_least(80.0)
                        .at_most(400.0)
                        .clip(true),
                );
            }

            builder
                .header(20.0, |mut header| {
                    for column in &self.columns {
                        header.col(|ui| {
                            ui.strong(column.header);
                        });
                    }
                })
                .body(|body| {
                    body.rows(text_height, visible.len(), |row_index, mut row| {
                        let record = &visible[row_index];
                        let key = (self.row_key)(record, start + row_index);
                        for column in &self.columns {
                            row.col(|ui| {
                                match resolve_cell(column, record) {
                                    CellValue::Text(text) => {
                                        ui.label(text);
                                    }
                                    CellValue::Link { label, protein_id } => {
                                        let response =
                                            ui.push_id((&key, column.header), |ui| ui.link(label));
                                        if response.inner.clicked() {
                                            action = Some(TableAction::OpenProtein(protein_id));
                                        }
                                    }
                                }
                            });
                        }
                    });
                });
        });

        // The page control is hidden entirely on a single page.
        let total_pages = self.window.total_pages(records.len());
        if total_pages > 1 {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(
                        self.window.has_previous(records.len()),
                        egui::Button::new("Previous"),
                    )
                    .clicked()
                {
                    self.window.current_page -= 1;
                }
                ui.label(format!(
                    "Page {} of {}",
                    self.window.current_page, total_pages
                ));
                if ui
                    .add_enabled(self.window.has_next(records.len()), egui::Button::new("Next"))
                    .clicked()
                {
                    self.window.current_page += 1;
                }
            });
        }

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record {
        id: String,
        name: Option<String>,
    }

    fn columns() -> Vec<Column<Record>> {
        vec![
            Column {
                header: "ID",
                accessor: Accessor::Field(|r: &Record| Some(r.id.clone())),
            },
            Column {
                header: "Name",
                accessor: Accessor::Field(|r: &Record| r.name.clone()),
            },
            Column {
                header: "Custom",
                accessor: Accessor::Projection(|_: &Record| CellValue::Text(String::new())),
            },
        ]
    }

    #[test]
    fn field_miss_renders_the_sentinel() {
        let record = Record {
            id: "P1".into(),
            name: None,
        };
        let cols = columns();
        assert_eq!(
            resolve_cell(&cols[0], &record),
            CellValue::Text("P1".into())
        );
        assert_eq!(
            resolve_cell(&cols[1], &record),
            CellValue::Text("N/A".into())
        );
    }

    #[test]
    fn projection_value_is_never_overridden() {
        // An empty string from a projection stays empty; the fallback only
        // applies to field accessors.
        let record = Record {
            id: "P1".into(),
            name: None,
        };
        let cols = columns();
        assert_eq!(resolve_cell(&cols[2], &record), CellValue::Text(String::new()));
    }
}
