//! SQL rendering.

use super::statement::{Column, Predicate, Projection, Statement, TABLE_NAME};

/// A fragment of SQL with bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFragment {
    /// The SQL text.
    pub sql: String,
    /// Bound parameter values, in placeholder order.
    pub params: Vec<SqlParam>,
}

/// A bound SQL parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// String parameter.
    String(String),
    /// Integer parameter.
    Integer(i64),
}

impl SqlParam {
    /// Creates a string parameter.
    pub fn string(s: impl Into<String>) -> Self {
        SqlParam::String(s.into())
    }

    /// Creates an integer parameter.
    pub fn integer(i: i64) -> Self {
        SqlParam::Integer(i)
    }
}

impl SqlFragment {
    /// Creates a new SQL fragment.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter and returns its placeholder.
    pub fn add_param(&mut self, param: SqlParam, dialect: Dialect) -> String {
        self.params.push(param);
        dialect.placeholder(self.params.len())
    }
}

/// Placeholder syntax of the target engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `?1`, `?2`, ...
    Sqlite,
    /// `$1`, `$2`, ...
    Postgres,
}

impl Dialect {
    /// Returns the placeholder for the 1-based parameter `index`.
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            Dialect::Sqlite => format!("?{}", index),
            Dialect::Postgres => format!("${}", index),
        }
    }
}

/// Renders a statement.
///
/// Identifiers come from [`Column`] and [`TABLE_NAME`] only; every value from
/// a request is bound as a parameter.
pub fn render(statement: &Statement, dialect: Dialect) -> SqlFragment {
    let projection = match statement.projection() {
        Projection::AllColumns => Column::ALL
            .iter()
            .map(Column::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Projection::Count => "COUNT(*)".to_string(),
    };

    let mut fragment = SqlFragment::new(format!("SELECT {} FROM {}", projection, TABLE_NAME));

    let mut conditions = Vec::with_capacity(statement.predicates().len());
    for predicate in statement.predicates() {
        let condition = match predicate {
            Predicate::ContainsIgnoreCase { column, needle } => {
                let placeholder =
                    fragment.add_param(SqlParam::string(format!("%{}%", needle)), dialect);
                format!("lower({}) LIKE {}", column.as_str(), placeholder)
            }
            Predicate::EqualsIgnoreCase { column, value } => {
                let placeholder = fragment.add_param(SqlParam::string(value.as_str()), dialect);
                format!("lower({}) = lower({})", column.as_str(), placeholder)
            }
            Predicate::Equals { column, value } => {
                let placeholder = fragment.add_param(SqlParam::string(value.as_str()), dialect);
                format!("{} = {}", column.as_str(), placeholder)
            }
        };
        conditions.push(condition);
    }

    if !conditions.is_empty() {
        fragment.sql.push_str(" WHERE ");
        fragment.sql.push_str(&conditions.join(" AND "));
    }

    if let Some(order) = statement.order() {
        let column = Column::from(order.column);
        fragment.sql.push_str(&format!(
            " ORDER BY {} {}",
            column.as_str(),
            order.direction.as_sql()
        ));
    }

    if let Some(page) = statement.page() {
        let limit = fragment.add_param(SqlParam::integer(i64::from(page.limit())), dialect);
        // Offsets beyond i64::MAX cannot address a row anyway.
        let offset_value = i64::try_from(page.offset()).unwrap_or(i64::MAX);
        let offset = fragment.add_param(SqlParam::integer(offset_value), dialect);
        fragment
            .sql
            .push_str(&format!(" LIMIT {} OFFSET {}", limit, offset));
    }

    fragment
}
