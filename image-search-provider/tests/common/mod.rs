//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use image_search_provider::{ImageSearchProvider, ProviderCredentials, create_provider};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文 - 封装 Provider 和测试关键词
pub struct TestContext {
    pub provider: Arc<dyn ImageSearchProvider>,
    pub query: String,
}

impl TestContext {
    /// 创建 Pixabay 测试上下文
    ///
    /// `TEST_QUERY` 未设置时使用 `yellow flowers`。
    pub fn pixabay() -> Option<Self> {
        let api_key = env::var("PIXABAY_API_KEY").ok()?;
        let query = env::var("TEST_QUERY").unwrap_or_else(|_| "yellow flowers".to_string());

        let credentials = ProviderCredentials::Pixabay { api_key };
        let provider = create_provider(credentials).ok()?;

        Some(Self { provider, query })
    }
}
