use balanced_client::prelude::*;

fn pairs(params: &ListParams) -> Vec<(String, String)> {
    params.to_query()
}

#[test]
fn test_first_integer_is_offset_second_is_limit() {
    let params = ListParams::from((20u32, 5u32));
    assert_eq!(params.offset, Some(20));
    assert_eq!(params.limit, Some(5));
    assert_eq!(
        pairs(&params),
        vec![
            ("offset".to_string(), "20".to_string()),
            ("limit".to_string(), "5".to_string())
        ]
    );
}

#[test]
fn test_default_page_shape_constants() {
    assert_eq!(DEFAULT_OFFSET, 0);
    assert_eq!(DEFAULT_LIMIT, 10);
    assert_eq!(
        ListParams::page(DEFAULT_OFFSET, DEFAULT_LIMIT),
        ListParams::from((0u32, 10u32))
    );
}

#[test]
fn test_filters_are_merged() {
    let params = ListParams::new()
        .with_filters([("status", "succeeded"), ("currency", "USD")])
        .with_filter("status", "failed");
    assert_eq!(params.filters.len(), 2);
    assert_eq!(params.filters.get("status").map(String::as_str), Some("failed"));
}

#[test]
fn test_next_params_walks_pages() {
    let mut meta = PaginationParams {
        limit: 10,
        offset: 0,
        total: 25,
        ..Default::default()
    };
    let mut offsets = vec![meta.offset];
    while let Some(next) = meta.next_params() {
        meta.offset = next.offset.unwrap();
        offsets.push(meta.offset);
    }
    assert_eq!(offsets, vec![0, 10, 20]);
}

#[test]
fn test_pagination_display_is_json() {
    let meta = PaginationParams {
        limit: 10,
        total: 1,
        ..Default::default()
    };
    let shown = meta.to_string();
    assert!(shown.contains("\"limit\":10"));
    assert!(shown.contains("\"total\":1"));
}

#[test]
fn test_next_params_with_zero_limit_stops() {
    let meta = PaginationParams {
        limit: 0,
        offset: 0,
        total: 5,
        next: Some("/cards?limit=0&offset=0".to_string()),
        ..Default::default()
    };
    assert!(meta.next_params().is_none());
}
