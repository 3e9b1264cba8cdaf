//! Pixabay Provider 集成测试
//!
//! 运行方式:
//! ```bash
//! PIXABAY_API_KEY=xxx TEST_QUERY="yellow flowers" \
//!     cargo test -p image-search-provider --test pixabay_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use std::collections::HashSet;

use common::TestContext;
use image_search_provider::{
    ImageSearchProvider, PixabayProvider, ProviderError, SearchParams,
};

// ============ 基础测试 ============

#[tokio::test]
#[ignore = "integration test: requires PIXABAY_API_KEY"]
async fn test_pixabay_validate_credentials() {
    skip_if_no_credentials!("PIXABAY_API_KEY");

    let ctx = TestContext::pixabay().expect("创建测试上下文失败");
    let valid = require_ok!(
        ctx.provider.validate_credentials().await,
        "validate_credentials 调用失败"
    );
    assert!(valid, "凭证应该有效");

    println!("✓ validate_credentials 测试通过");
}

#[tokio::test]
#[ignore = "integration test: requires network access"]
async fn test_pixabay_rejects_bogus_key() {
    let provider = PixabayProvider::new("definitely-not-a-key".to_string()).expect("创建 provider 失败");
    let valid = require_ok!(
        provider.validate_credentials().await,
        "validate_credentials 调用失败"
    );
    assert!(!valid, "伪造的 key 不应通过校验");

    println!("✓ 无效 key 测试通过");
}

// ============ 搜索测试 ============

#[tokio::test]
#[ignore = "integration test: requires PIXABAY_API_KEY"]
async fn test_pixabay_search_first_page() {
    skip_if_no_credentials!("PIXABAY_API_KEY");

    let ctx = TestContext::pixabay().expect("创建测试上下文失败");
    let page = require_ok!(
        ctx.provider
            .search(&SearchParams::for_page(ctx.query.clone(), 1))
            .await,
        "search 调用失败"
    );

    assert!(!page.items.is_empty(), "结果不应为空");
    assert!(page.items.len() <= 12, "单页不应超过 12 条");
    for image in &page.items {
        assert!(image.preview_url.starts_with("https://"));
        assert!(image.full_url.starts_with("https://"));
    }

    println!(
        "✓ search 测试通过，第 1 页 {} 条，共 {} 条",
        page.items.len(),
        page.total_count
    );
}

#[tokio::test]
#[ignore = "integration test: requires PIXABAY_API_KEY"]
async fn test_pixabay_pages_do_not_overlap() {
    skip_if_no_credentials!("PIXABAY_API_KEY");

    let ctx = TestContext::pixabay().expect("创建测试上下文失败");
    let first = require_ok!(
        ctx.provider
            .search(&SearchParams::for_page(ctx.query.clone(), 1))
            .await
    );
    let second = require_ok!(
        ctx.provider
            .search(&SearchParams::for_page(ctx.query.clone(), 2))
            .await
    );

    let first_ids: HashSet<u64> = first.items.iter().map(|i| i.id).collect();
    assert!(
        second.items.iter().all(|i| !first_ids.contains(&i.id)),
        "第 2 页不应与第 1 页重复"
    );

    println!("✓ 分页测试通过");
}

#[tokio::test]
#[ignore = "integration test: requires PIXABAY_API_KEY"]
async fn test_pixabay_page_out_of_range() {
    skip_if_no_credentials!("PIXABAY_API_KEY");

    let ctx = TestContext::pixabay().expect("创建测试上下文失败");
    let result = ctx
        .provider
        .search(&SearchParams::for_page(ctx.query.clone(), 10_000))
        .await;

    assert!(
        matches!(result, Err(ProviderError::InvalidParameter { .. })),
        "超出范围的页码应返回 InvalidParameter: {result:?}"
    );

    println!("✓ 越界页码测试通过");
}

#[tokio::test]
#[ignore = "integration test: requires PIXABAY_API_KEY"]
async fn test_pixabay_unmatched_query_is_empty() {
    skip_if_no_credentials!("PIXABAY_API_KEY");

    let ctx = TestContext::pixabay().expect("创建测试上下文失败");
    let page = require_ok!(
        ctx.provider
            .search(&SearchParams::for_page("qzxvjkwplmnb", 1))
            .await
    );

    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 0);
    assert!(!page.has_more);

    println!("✓ 空结果测试通过");
}
