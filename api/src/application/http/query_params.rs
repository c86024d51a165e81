use std::collections::HashMap;
use std::str::FromStr;

use aircook_core::domain::common::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, SortOrder};

/// Filter operator for query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,    // equals (default)
    Like,  // contains
    Ilike, // contains, case-insensitive
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "like" => Ok(FilterOperator::Like),
            "ilike" => Ok(FilterOperator::Ilike),
            _ => Err(()),
        }
    }
}

/// Filter condition for a single field
#[derive(Debug, Clone)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub conditions: Vec<FilterCondition>,
}

impl FilterParams {
    /// Value of an equality filter on `field`.
    pub fn eq(&self, field: &str) -> Option<&str> {
        self.conditions
            .iter()
            .find(|c| c.field == field && c.operator == FilterOperator::Eq)
            .map(|c| c.value.as_str())
    }

    /// Value of a containment filter on `field`.
    pub fn contains(&self, field: &str) -> Option<&str> {
        self.conditions
            .iter()
            .find(|c| {
                c.field == field
                    && matches!(c.operator, FilterOperator::Like | FilterOperator::Ilike)
            })
            .map(|c| c.value.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SortParams {
    pub sorts: Vec<SortOrder>,
}

impl SortParams {
    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }

    /// Parse sort string like "field1,-field2,field3"
    pub fn from_string(s: &str) -> Self {
        let sorts = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| match part.strip_prefix('-') {
                Some(field) => SortOrder::desc(field),
                None => SortOrder::asc(part),
            })
            .collect();

        Self { sorts }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationParams {
    pub offset: u32,
    pub limit: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl PaginationParams {
    pub fn new(offset: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            offset: offset.unwrap_or(0),
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT),
        }
    }
}

/// Combined query parameters (filter, search, sort, pagination)
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub filter: FilterParams,
    pub search: Option<String>,
    pub sort: SortParams,
    pub pagination: PaginationParams,
}

impl QueryParams {
    /// Parse from query string map
    /// Handles formats like:
    /// - filter[field]=value (defaults to eq)
    /// - filter[field][operator]=value
    /// - search=text
    /// - sort=field or sort=-field
    /// - offset=0, limit=20
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut filter = FilterParams::default();
        let mut search = None;
        let mut sort = SortParams::default();
        let mut offset: Option<u32> = None;
        let mut limit: Option<u32> = None;

        for (key, value) in query_map {
            if let Some(filter_key) = key.strip_prefix("filter[") {
                if let Some(end_bracket) = filter_key.find(']') {
                    let field = filter_key[..end_bracket].to_string();
                    let remaining = &filter_key[end_bracket + 1..];

                    if remaining.is_empty() {
                        filter.conditions.push(FilterCondition {
                            field,
                            operator: FilterOperator::Eq,
                            value: value.clone(),
                        });
                    } else if remaining.starts_with('[') && remaining.ends_with(']') {
                        let operator_str = &remaining[1..remaining.len() - 1];
                        if let Ok(operator) = operator_str.parse::<FilterOperator>() {
                            filter.conditions.push(FilterCondition {
                                field,
                                operator,
                                value: value.clone(),
                            });
                        }
                    }
                }
            } else if key == "search" {
                search = Some(value.trim().to_string()).filter(|s| !s.is_empty());
            } else if key == "sort" {
                sort = SortParams::from_string(value);
            } else if key == "offset" {
                offset = value.parse::<u32>().ok();
            } else if key == "limit"
                && let Ok(val) = value.parse::<u32>()
            {
                limit = Some(val);
            }
        }

        // Keep the filter order stable, the map iteration order is not.
        filter
            .conditions
            .sort_by(|a, b| a.field.cmp(&b.field));

        Self {
            filter,
            search,
            sort,
            pagination: PaginationParams::new(offset, limit),
        }
    }

    /// Free text search, either `search=` or `filter[field][ilike]=`.
    pub fn search_on(&self, field: &str) -> Option<String> {
        self.search
            .clone()
            .or_else(|| self.filter.contains(field).map(str::to_string))
    }
}
