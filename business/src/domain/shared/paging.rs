use std::cmp::Ordering;

use crate::domain::errors::RepositoryError;
use crate::domain::repository::Entity;

/// Largest page a caller may request; bigger sizes are clamped.
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Asc => write!(f, "asc"),
            Direction::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            _ => Err(format!("Invalid sort direction: {}", s)),
        }
    }
}

/// Ordering requested by the caller: one entity field and a direction.
///
/// Ties are always broken by identifier ascending, so the resulting order is
/// total and stable across adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: Direction,
}

impl Sort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }

    /// Checks the field against the entity's sortable fields.
    pub fn validate_for<T: Entity>(&self) -> Result<(), RepositoryError> {
        if T::SORTABLE_FIELDS.contains(&self.field.as_str()) {
            Ok(())
        } else {
            Err(RepositoryError::invalid_sort(&self.field))
        }
    }

    /// Sorts `items` in place. Used by adapters that sort outside the store.
    pub fn apply<T: Entity>(&self, items: &mut [T]) -> Result<(), RepositoryError> {
        self.validate_for::<T>()?;
        items.sort_by(|a, b| {
            let ordering = a.compare_by(b, &self.field).unwrap_or(Ordering::Equal);
            let ordering = match self.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            };
            ordering.then_with(|| a.id().cmp(&b.id()))
        });
        Ok(())
    }
}

impl Default for Sort {
    fn default() -> Self {
        Sort::asc("id")
    }
}

impl std::str::FromStr for Sort {
    type Err = String;

    /// Parses `"field"` or `"field,asc"` / `"field,desc"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);
        let field = match parts.next() {
            Some(field) if !field.is_empty() => field,
            _ => return Err(format!("Invalid sort: {}", s)),
        };
        let direction = match parts.next() {
            Some(direction) => direction.parse::<Direction>()?,
            None => Direction::Asc,
        };
        if parts.next().is_some() {
            return Err(format!("Invalid sort: {}", s));
        }
        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Builds a page request, clamping `size` into `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.size.max(1)))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}
