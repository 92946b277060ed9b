use super::filter_order::FilterOrder;
use super::filter_where::FilterWhere;
use super::types::{SqlResult, StudentFilter, StudentOrder};

/// A filtered, ordered view over one table, rendered to SQL
pub struct Filter {
    table_name: &'static str,
    constraints: StudentFilter,
    order: StudentOrder,
}

impl Filter {
    pub fn new(table_name: &'static str) -> Self {
        Self {
            table_name,
            constraints: StudentFilter::all(),
            order: StudentOrder::default(),
        }
    }

    pub fn constraints(mut self, constraints: StudentFilter) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn order(mut self, order: StudentOrder) -> Self {
        self.order = order;
        self
    }

    pub fn to_sql(&self) -> SqlResult {
        let (where_clause, params) = FilterWhere::generate(&self.constraints);
        let order_clause = FilterOrder::generate(&FilterOrder::infos(self.order));

        let query = [
            "SELECT *".to_string(),
            format!("FROM \"{}\"", self.table_name),
            if where_clause.is_empty() { String::new() } else { format!("WHERE {}", where_clause) },
            order_clause,
        ].into_iter().filter(|s| !s.is_empty()).collect::<Vec<_>>().join(" ");

        SqlResult { query, params }
    }

    pub fn to_count_sql(&self) -> SqlResult {
        let (where_clause, params) = FilterWhere::generate(&self.constraints);
        let query = if where_clause.is_empty() {
            format!("SELECT COUNT(*) as count FROM \"{}\"", self.table_name)
        } else {
            format!("SELECT COUNT(*) as count FROM \"{}\" WHERE {}", self.table_name, where_clause)
        };
        SqlResult { query, params }
    }
}
