use crate::{
    model::api::{PageDto, PageQuery},
    server::{
        error::validation::ValidationError,
        util::validate::{Validate, Validator},
    },
};

/// Largest page size a listing accepts.
pub const MAX_ENTRIES: u64 = 100;
/// Highest page index a listing accepts; keeps `page * entries` well inside `u64`.
pub const MAX_PAGE: u64 = 1_000_000;

/// One page of domain models plus pagination metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Builds a page, deriving `total_pages` from the total and page size.
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    /// Converts every item with `f` into a paginated DTO.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PageDto<D> {
        PageDto {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

impl Validate for PageQuery {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .range("entries", self.entries, 1, MAX_ENTRIES)
            .range("page", self.page, 0, MAX_PAGE)
            .finish()
    }
}
