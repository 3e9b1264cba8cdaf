//! Pixabay API 类型定义

use serde::Deserialize;

/// Pixabay 搜索响应
///
/// 响应中的 `total` 是全部匹配数，不一定都能翻页访问，忽略。
#[derive(Debug, Deserialize)]
pub struct PixabayResponse {
    /// 通过 API 可访问的匹配数
    #[serde(rename = "totalHits")]
    pub total_hits: u32,
    #[serde(default)]
    pub hits: Vec<PixabayHit>,
}

/// Pixabay 单张图片
#[derive(Debug, Deserialize)]
pub struct PixabayHit {
    pub id: u64,
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    #[serde(default)]
    pub tags: String,
}
