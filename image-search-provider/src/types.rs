use serde::{Deserialize, Serialize};

/// Fixed number of records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

// ============ Pagination ============

/// A paginated response wrapper.
///
/// Returned by search operations. Contains the current page of items
/// along with pagination metadata.
///
/// # Type Parameters
///
/// * `T` — The item type (e.g., [`ImageRecord`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Current page number.
    pub page: u32,
    /// Page size used for this request.
    pub page_size: u32,
    /// Total number of items reachable across all pages.
    pub total_count: u32,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response, automatically computing [`has_more`](Self::has_more).
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u32) -> Self {
        let has_more = u64::from(page) * u64::from(page_size) < u64::from(total_count);
        Self {
            items,
            page,
            page_size,
            total_count,
            has_more,
        }
    }
}

/// One page of image search results.
pub type SearchPage = PaginatedResponse<ImageRecord>;

// ============ Provider Types ============

/// Identifies which image search provider implementation to use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Pixabay (<https://pixabay.com/api/docs/>).
    Pixabay,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pixabay => write!(f, "pixabay"),
        }
    }
}

/// Type-safe credential container for the supported providers.
///
/// Pass this to [`create_provider()`](crate::create_provider) to instantiate a provider.
///
/// # Serialization
///
/// ```json
/// { "provider": "pixabay", "credentials": { "api_key": "..." } }
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// Pixabay credentials.
    #[serde(rename = "pixabay")]
    Pixabay {
        /// Pixabay API key.
        api_key: String,
    },
}

impl ProviderCredentials {
    /// Which provider these credentials belong to.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            Self::Pixabay { .. } => ProviderType::Pixabay,
        }
    }
}

// Keys never show up in debug output.
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pixabay { .. } => f
                .debug_struct("Pixabay")
                .field("api_key", &"<redacted>")
                .finish(),
        }
    }
}

// ============ Search Types ============

/// Kind of image to search for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    /// Any kind of image.
    All,
    /// Photographs only.
    #[default]
    Photo,
    /// Illustrations only.
    Illustration,
    /// Vector graphics only.
    Vector,
}

impl ImageType {
    /// Wire value of the `image_type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Photo => "photo",
            Self::Illustration => "illustration",
            Self::Vector => "vector",
        }
    }
}

/// Image orientation filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Any orientation.
    All,
    /// Landscape images.
    #[default]
    Horizontal,
    /// Portrait images.
    Vertical,
}

impl Orientation {
    /// Wire value of the `orientation` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Query parameters for an image search.
///
/// Pages are 1-indexed.
///
/// # Default
///
/// The default is an empty query, `page = 1`, `per_page = 12`, photos in
/// horizontal orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Search term, sent verbatim (URL-encoded) as `q`.
    pub query: String,
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub per_page: u32,
    /// Image kind filter.
    pub image_type: ImageType,
    /// Orientation filter.
    pub orientation: Orientation,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            image_type: ImageType::default(),
            orientation: Orientation::default(),
        }
    }
}

impl SearchParams {
    /// Parameters for `page` of `query` with the default filters and page size.
    pub fn for_page(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
            ..Self::default()
        }
    }

    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `per_page` is clamped to `min_page_size..=max_page_size`
    /// - filters and query are preserved as-is
    #[must_use]
    pub fn validated(&self, min_page_size: u32, max_page_size: u32) -> Self {
        Self {
            query: self.query.clone(),
            page: self.page.max(1),
            per_page: self.per_page.clamp(min_page_size, max_page_size),
            image_type: self.image_type,
            orientation: self.orientation,
        }
    }
}

/// One image returned by a search.
///
/// `id` is unique and stable across pages of the same query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// Provider-assigned image identifier.
    pub id: u64,
    /// Medium-sized image URL, used in result grids.
    pub preview_url: String,
    /// Large image URL, used in the preview overlay.
    pub full_url: String,
    /// Comma separated descriptive tags.
    pub tags: String,
}
