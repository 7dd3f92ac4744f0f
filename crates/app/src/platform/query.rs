//! Table query building.

use serde_json::Value;
use smallvec::SmallVec;

use crate::platform::Table;

/// Equality filter on a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: &'static str,
    pub value: Value,
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Into<Value>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }

    /// Whether a row satisfies this filter.
    #[must_use]
    pub fn matches(&self, row: &Value) -> bool {
        row.get(self.column).unwrap_or(&Value::Null) == &self.value
    }

    /// Render as a table API query pair, e.g. `("user_id", "eq.7")`.
    #[must_use]
    pub fn query_pair(&self) -> (String, String) {
        let operand = match &self.value {
            Value::Null => "is.null".to_string(),
            Value::String(value) => format!("eq.{value}"),
            other => format!("eq.{other}"),
        };

        (self.column.to_string(), operand)
    }
}

/// A row selection against one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: Table,
    /// Projected columns; empty selects every column.
    pub columns: SmallVec<[&'static str; 4]>,
    /// Related table embedded with inner-join semantics.
    pub embed: Option<Table>,
    pub filters: Vec<Filter>,
}

impl Select {
    #[must_use]
    pub fn table(table: Table) -> Self {
        Self {
            table,
            columns: SmallVec::new(),
            embed: None,
            filters: Vec::new(),
        }
    }

    #[must_use]
    pub fn columns(mut self, columns: &[&'static str]) -> Self {
        self.columns.extend_from_slice(columns);
        self
    }

    #[must_use]
    pub fn inner_join(mut self, table: Table) -> Self {
        self.embed = Some(table);
        self
    }

    #[must_use]
    pub fn eq(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::eq(column, value));
        self
    }

    /// The `select` query parameter, e.g. `product_id,products!inner(*)`.
    #[must_use]
    pub fn select_param(&self) -> String {
        let mut param = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(",")
        };

        if let Some(embed) = self.embed {
            param.push_str(&format!(",{}!inner(*)", embed.name()));
        }

        param
    }

    /// Full query string pairs: the projection followed by every filter.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.select_param())];

        pairs.extend(self.filters.iter().map(Filter::query_pair));

        pairs
    }
}
