use leptos::prelude::*;
use std::sync::Arc;

/// Horizontal alignment of a column's header and cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn class(&self) -> &'static str {
        match self {
            Align::Left => "table__cell--left",
            Align::Center => "table__cell--center",
            Align::Right => "table__cell--right",
        }
    }
}

/// Row types rendered by [`super::DataTable`]
pub trait TableRow {
    /// Stable identity for keyed iteration
    fn row_key(&self) -> String;

    /// Display value of a column without a custom renderer
    fn field(&self, key: &str) -> String;
}

/// How a cell is produced when the plain field lookup is not enough
pub enum CellRender<T> {
    Text(Arc<dyn Fn(&T) -> String + Send + Sync>),
    View(Arc<dyn Fn(&T) -> AnyView + Send + Sync>),
}

impl<T> Clone for CellRender<T> {
    fn clone(&self) -> Self {
        match self {
            CellRender::Text(f) => CellRender::Text(f.clone()),
            CellRender::View(f) => CellRender::View(f.clone()),
        }
    }
}

/// Describes one table column.
///
/// `key` must resolve through [`TableRow::field`] unless a renderer is set;
/// with a renderer it only identifies the column.
pub struct ColumnDescriptor<T> {
    pub key: &'static str,
    pub header: String,
    pub align: Align,
    /// Numeric columns are always right-aligned
    pub numeric: bool,
    pub width: Option<String>,
    pub class: Option<String>,
    pub render: Option<CellRender<T>>,
}

impl<T> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header.clone(),
            align: self.align,
            numeric: self.numeric,
            width: self.width.clone(),
            class: self.class.clone(),
            render: self.render.clone(),
        }
    }
}

impl<T> ColumnDescriptor<T> {
    pub fn new(key: &'static str, header: impl Into<String>) -> Self {
        Self {
            key,
            header: header.into(),
            align: Align::Left,
            numeric: false,
            width: None,
            class: None,
            render: None,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn render_text(mut self, f: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(CellRender::Text(Arc::new(f)));
        self
    }

    pub fn render_view(mut self, f: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        self.render = Some(CellRender::View(Arc::new(f)));
        self
    }

    /// `numeric` overrides any explicit alignment
    pub fn effective_align(&self) -> Align {
        if self.numeric {
            Align::Right
        } else {
            self.align
        }
    }

    pub fn cell_class(&self) -> String {
        let mut class = format!("table__cell {}", self.effective_align().class());
        if let Some(extra) = &self.class {
            class.push(' ');
            class.push_str(extra);
        }
        class
    }

    pub fn header_class(&self) -> String {
        format!("table__header-cell {}", self.effective_align().class())
    }

    pub fn width_style(&self) -> Option<String> {
        self.width.as_ref().map(|w| format!("width: {};", w))
    }
}

impl<T: TableRow> ColumnDescriptor<T> {
    /// Text value of the cell; view renderers fall back to the field lookup
    pub fn resolve_text(&self, row: &T) -> String {
        match &self.render {
            Some(CellRender::Text(f)) => f(row),
            _ => row.field(self.key),
        }
    }

    pub fn render_cell(&self, row: &T) -> AnyView {
        match &self.render {
            Some(CellRender::View(f)) => f(row),
            _ => self.resolve_text(row).into_any(),
        }
    }
}
