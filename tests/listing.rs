use nippo_listing::keywords::KeywordQuery;
use nippo_listing::pagination::{
    PageItem, PaginationConfig, Paginated, compute_page_window,
};
use nippo_listing::query::{ListSelection, PageParams};
use serde_json::json;

#[test]
fn test_list_rendering_flow() {
    // Handler receives ?page=5 for a filter matching 95 rows.
    let params = PageParams {
        page: Some(5),
        rows_per_page: None,
    };
    let request = params.resolve(95);
    let window = compute_page_window(request, &PaginationConfig::default()).unwrap();

    assert_eq!(window.total_pages, 10);
    assert_eq!(window.current_page, 5);

    let selection = ListSelection::from(&window);
    assert_eq!(selection.offset, 40);
    assert_eq!(selection.limit, 10);

    // Repository returns the selected rows; the template gets the pair.
    let rows = vec!["row41".to_string(), "row42".to_string()];
    let paginated = Paginated::new(rows, window);

    let value = serde_json::to_value(&paginated).unwrap();
    assert_eq!(value["items"], json!(["row41", "row42"]));
    assert_eq!(value["window"]["offset"], json!(40));
    assert_eq!(value["window"]["current_page"], json!(5));
    assert_eq!(value["window"]["ellipsis"], json!("..."));
    // All ten pages are contiguous for this shape, no collapsed gap.
    assert_eq!(value["window"]["items"], json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
}

#[test]
fn test_collapsed_gap_serializes_as_null() {
    let params = PageParams {
        page: Some(1),
        rows_per_page: Some(10),
    };
    let window = compute_page_window(params.resolve(300), &PaginationConfig::default()).unwrap();

    assert!(window.items.contains(&PageItem::Ellipsis));
    let value = serde_json::to_value(&window).unwrap();
    assert_eq!(
        value["items"],
        json!([1, 2, 3, 4, null, 27, 28, 29, 30])
    );
}

#[test]
fn test_keyword_filter_flow() {
    // Form submission with full-width separators is stored canonically.
    let query = KeywordQuery::new("進捗\u{3000}報告、、クライアントA").unwrap();
    assert_eq!(query.as_str(), "進捗,報告,クライアントA");

    // Stored filters re-validate unchanged.
    let reloaded = KeywordQuery::new(query.as_str()).unwrap();
    assert_eq!(reloaded, query);

    assert!(KeywordQuery::new(" \u{3000} ,、 ").is_err());
}
