use super::types::{FilterOrderInfo, SortDirection, StudentOrder};

pub struct FilterOrder;

impl FilterOrder {
    /// Columns for each ordering; ties on `created_at` fall back to the id
    pub fn infos(order: StudentOrder) -> Vec<FilterOrderInfo> {
        match order {
            StudentOrder::Newest => vec![
                FilterOrderInfo { column: "created_at", sort: SortDirection::Desc },
                FilterOrderInfo { column: "id", sort: SortDirection::Desc },
            ],
            StudentOrder::IdAscending => vec![FilterOrderInfo { column: "id", sort: SortDirection::Asc }],
        }
    }

    pub fn generate(infos: &[FilterOrderInfo]) -> String {
        if infos.is_empty() { return String::new(); }
        let parts: Vec<String> = infos
            .iter()
            .map(|i| format!("\"{}\" {}", i.column, i.sort.to_sql()))
            .collect();
        format!("ORDER BY {}", parts.join(", "))
    }
}
