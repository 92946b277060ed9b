use super::types::StudentFilter;

/// Columns the free-text search looks into
pub const SEARCH_COLUMNS: [&str; 3] = ["student_name", "college_university", "course_program"];

/// Builds the WHERE clause of a filtered view with positional `?` parameters.
pub struct FilterWhere {
    param_values: Vec<String>,
    conditions: Vec<String>,
}

impl FilterWhere {
    fn new() -> Self {
        Self {
            param_values: vec![],
            conditions: vec![],
        }
    }

    /// Returns the clause body (without `WHERE`) and its parameters in bind order.
    /// An empty clause means the filter does not constrain anything.
    pub fn generate(filter: &StudentFilter) -> (String, Vec<String>) {
        let mut filter_where = Self::new();
        filter_where.build(filter)
    }

    fn build(&mut self, filter: &StudentFilter) -> (String, Vec<String>) {
        if let Some(search) = filter.search() {
            let pattern = format!("%{}%", escape_like(search));
            // SQLite LIKE is case-insensitive for ASCII
            let alternatives: Vec<String> = SEARCH_COLUMNS
                .iter()
                .map(|column| format!("\"{}\" LIKE {} ESCAPE '\\'", column, self.param(pattern.clone())))
                .collect();
            self.conditions.push(format!("({})", alternatives.join(" OR ")));
        }

        if let Some(status) = filter.status() {
            let placeholder = self.param(status.to_string());
            self.conditions.push(format!("\"current_status\" = {}", placeholder));
        }

        (self.conditions.join(" AND "), std::mem::take(&mut self.param_values))
    }

    fn param(&mut self, value: String) -> &'static str {
        self.param_values.push(value);
        "?"
    }
}

/// Escape LIKE wildcards so the search text matches literally
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
