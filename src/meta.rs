//! Source location metadata.
//!
//! Purely diagnostic: never consulted by `step`/`resume`. An `AST` node
//! without a `Meta` renders as `"<unknown>"`.

use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct Meta {
    pub source_line_text: Rc<str>,
    pub file_name: Rc<str>,
    pub line_number: usize,
    pub column_number: usize,
}

impl Meta {
    pub fn new(file_name: &str, line_number: usize, source_line_text: &str, column_number: usize) -> Meta {
        Meta {
            source_line_text: Rc::from(source_line_text),
            file_name: Rc::from(file_name),
            line_number,
            column_number,
        }
    }

    /// `"<file> @ <line-prefix>^<line-suffix>"`, caret spliced in at the
    /// recorded column.
    pub fn short_location(&self) -> String {
        let col = self.column_number.min(self.source_line_text.len());
        let (before, after) = self.source_line_text.split_at(col);
        format!("{:} @ {:}^{:}", self.file_name, before, after)
    }
}

/// Renders `meta`'s location, or the fallback when none was recorded.
pub fn short_location(meta: &Option<Meta>) -> String {
    match meta {
        Some(m) => m.short_location(),
        None => "<unknown>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_at_column() {
        let m = Meta::new("test.isl", 3, "(+ 1 2)", 3);
        assert_eq!(m.short_location(), "test.isl @ (+ ^1 2)");
    }

    #[test]
    fn missing_meta_is_unknown() {
        assert_eq!(short_location(&None), "<unknown>");
    }
}
