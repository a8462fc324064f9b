//! 페이지 단위 목록 응답

use serde::{Deserialize, Serialize};

/// 한 페이지 분량의 목록과 페이지 메타데이터
///
/// ```json
/// {
///   "current_page": 2,
///   "data": [ ... ],
///   "per_page": 50,
///   "total": 120,
///   "last_page": 3,
///   "from": 51,
///   "to": 100
/// }
/// ```
///
/// 현재 페이지에 항목이 없으면 `from`/`to`는 `null`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub current_page: u64,
    pub data: Vec<T>,
    pub per_page: u64,
    pub total: u64,
    pub last_page: u64,
    pub from: Option<u64>,
    pub to: Option<u64>,
}

impl<T> Page<T> {
    /// 조회 결과와 전체 개수로 페이지를 구성합니다.
    ///
    /// `per_page`는 0이 아니어야 합니다.
    pub fn new(data: Vec<T>, current_page: u64, per_page: u64, total: u64) -> Self {
        let last_page = total.div_ceil(per_page).max(1);
        let offset = Self::offset(current_page, per_page);
        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            (Some(offset + 1), Some(offset + data.len() as u64))
        };

        Self {
            current_page,
            data,
            per_page,
            total,
            last_page,
            from,
            to,
        }
    }

    /// 페이지 시작 전에 건너뛸 항목 수
    pub fn offset(current_page: u64, per_page: u64) -> u64 {
        current_page.saturating_sub(1).saturating_mul(per_page)
    }

    /// 항목 타입을 변환합니다. 메타데이터는 그대로 유지됩니다.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            current_page: self.current_page,
            data: self.data.into_iter().map(f).collect(),
            per_page: self.per_page,
            total: self.total,
            last_page: self.last_page,
            from: self.from,
            to: self.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_page_bounds() {
        let page = Page::new(vec![0; 50], 2, 50, 120);

        assert_eq!(page.last_page, 3);
        assert_eq!(page.from, Some(51));
        assert_eq!(page.to, Some(100));
    }

    #[test]
    fn test_partial_last_page() {
        let page = Page::new(vec![0; 20], 3, 50, 120);

        assert_eq!(page.from, Some(101));
        assert_eq!(page.to, Some(120));
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let page: Page<i32> = Page::new(Vec::new(), 1, 50, 0);

        assert_eq!(page.last_page, 1);
        assert_eq!(page.from, None);
        assert_eq!(page.to, None);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Page::<()>::offset(1, 50), 0);
        assert_eq!(Page::<()>::offset(3, 50), 100);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Page::new(vec![1, 2], 1, 50, 2).map(|n| n * 10);

        assert_eq!(page.data, vec![10, 20]);
        assert_eq!(page.total, 2);
        assert_eq!(page.to, Some(2));
    }
}
