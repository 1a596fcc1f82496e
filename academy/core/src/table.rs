use serde::{Deserialize, Serialize};

use crate::model::Record;

/// Rendered content of one table cell.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub enum Cell {
    Text(String),
    Image { src: String, alt: String },
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }
}

/// A column of a [`DataTable`]: the record field it reads, its header label
/// and an optional renderer replacing the plain field text.
pub struct ColumnDef<T> {
    pub key: &'static str,
    pub header: &'static str,
    pub cell: Option<fn(&T) -> Cell>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header,
            cell: self.cell,
        }
    }
}

impl<T: Record> ColumnDef<T> {
    pub fn new(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            cell: None,
        }
    }

    pub fn with_cell(mut self, cell: fn(&T) -> Cell) -> Self {
        self.cell = Some(cell);
        self
    }

    pub fn render(&self, record: &T) -> Cell {
        match self.cell {
            Some(render) => render(record),
            None => Cell::Text(record.field(self.key).unwrap_or_default()),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct SearchOptions {
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Substring test used by the table search box. An empty needle matches
/// everything.
pub fn matches(haystack: &str, needle: &str, options: SearchOptions) -> bool {
    if needle.is_empty() {
        return true;
    }
    if options.case_sensitive {
        haystack.contains(needle)
    } else {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// One visible row. `id` addresses the record for row actions; `key` is
/// unique per row even when ids repeat, and is what the view keys rows by.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TableRow {
    pub key: String,
    pub id: String,
    pub cells: Vec<Cell>,
}

pub struct DataTable<T> {
    columns: Vec<ColumnDef<T>>,
    search_key: String,
    options: SearchOptions,
}

impl<T> Clone for DataTable<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            search_key: self.search_key.clone(),
            options: self.options,
        }
    }
}

impl<T: Record> DataTable<T> {
    pub fn new(columns: Vec<ColumnDef<T>>, search_key: impl Into<String>) -> Self {
        Self {
            columns,
            search_key: search_key.into(),
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn search_key(&self) -> &str {
        &self.search_key
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.header.to_string()).collect()
    }

    fn is_match(&self, record: &T, query: &str) -> bool {
        match record.field(&self.search_key) {
            Some(value) => matches(&value, query, self.options),
            None => query.is_empty(),
        }
    }

    /// Records whose search field contains `query`, in list order.
    pub fn filter<'a>(&self, records: &'a [T], query: &str) -> Vec<&'a T> {
        records
            .iter()
            .filter(|record| self.is_match(record, query))
            .collect()
    }

    /// Rendered rows for `query`. Row keys combine the list position with
    /// the id.
    pub fn rows(&self, records: &[T], query: &str) -> Vec<TableRow> {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.is_match(record, query))
            .map(|(pos, record)| TableRow {
                key: format!("{pos}:{}", record.id()),
                id: record.id().to_string(),
                cells: self.columns.iter().map(|c| c.render(record)).collect(),
            })
            .collect()
    }
}
