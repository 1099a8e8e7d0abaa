//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    format_table_or(data, "No results found.")
}

/// Format data as a table, or `empty` when there are no rows
pub fn format_table_or<T: Tabled>(data: &[T], empty: &str) -> String {
    if data.is_empty() {
        return empty.to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct TestRow {
        #[tabled(rename = "REPOSITORY")]
        repo: String,
        #[tabled(rename = "PERMISSION")]
        permission: String,
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<TestRow> = vec![];
        let result = format_table(&items);
        assert_eq!(result, "No results found.");
    }

    #[test]
    fn test_format_table_or_custom_empty_message() {
        let items: Vec<TestRow> = vec![];
        assert_eq!(
            format_table_or(&items, "No accessible repositories found."),
            "No accessible repositories found."
        );
    }

    #[test]
    fn test_format_table_single_row() {
        let items = vec![TestRow {
            repo: "api".to_string(),
            permission: "push".to_string(),
        }];

        let result = format_table(&items);

        assert!(result.contains("REPOSITORY"));
        assert!(result.contains("PERMISSION"));
        assert!(result.contains("api"));
        assert!(result.contains("push"));
    }

    #[test]
    fn test_format_table_keeps_row_order() {
        let items = vec![
            TestRow {
                repo: "api".to_string(),
                permission: "push".to_string(),
            },
            TestRow {
                repo: "web".to_string(),
                permission: "admin".to_string(),
            },
        ];

        let result = format_table(&items);

        let api = result.find("api").unwrap();
        let web = result.find("web").unwrap();
        assert!(api < web);
    }

    #[test]
    fn test_format_table_uses_rounded_style() {
        let items = vec![TestRow {
            repo: "docs".to_string(),
            permission: "pull".to_string(),
        }];

        let result = format_table(&items);

        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
