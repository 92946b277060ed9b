use serde::{Deserialize, Serialize};

/// Search/status constraints of a filtered view.
///
/// Both values are trimmed on construction; an empty value means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFilter {
    search: Option<String>,
    status: Option<String>,
}

impl StudentFilter {
    pub fn new(search: Option<&str>, status: Option<&str>) -> Self {
        Self {
            search: normalize(search),
            status: normalize(status),
        }
    }

    /// No constraints at all
    pub fn all() -> Self {
        Self::default()
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search.is_none() && self.status.is_none()
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Row orderings the application needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentOrder {
    /// List view: most recently created first
    #[default]
    Newest,
    /// Export: by surrogate id
    IdAscending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOrderInfo {
    pub column: &'static str,
    pub sort: SortDirection,
}

#[derive(Debug, Clone)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<String>,
}
