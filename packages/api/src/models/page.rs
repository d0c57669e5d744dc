use serde::{Deserialize, Serialize};

/// The envelope every list endpoint returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn pagination(&self) -> PaginationData {
        PaginationData {
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

/// Paging descriptor of the latest list response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationData {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl Default for PaginationData {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            limit: 10,
            total_pages: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_envelope() {
        let page: Page<u32> = serde_json::from_str(
            r#"{"data":[1,2,3],"total":23,"page":3,"limit":10,"totalPages":3}"#,
        )
        .unwrap();
        assert_eq!(page.data.len(), 3);
        assert_eq!(
            page.pagination(),
            PaginationData {
                total: 23,
                page: 3,
                limit: 10,
                total_pages: 3
            }
        );
    }

    #[test]
    fn test_default_pagination() {
        let pagination = PaginationData::default();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.total_pages, 0);
    }
}
