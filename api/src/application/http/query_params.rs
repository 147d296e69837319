use std::collections::HashMap;
use std::str::FromStr;

/// Filter operator for query parameters. Only the operators the list
/// endpoints actually consume are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,    // equals (default)
    Gte,   // greater than or equal
    Lte,   // less than or equal
    In,    // in list (comma-separated)
    Ilike, // case-insensitive contains
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "gte" => Ok(FilterOperator::Gte),
            "lte" => Ok(FilterOperator::Lte),
            "in" => Ok(FilterOperator::In),
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
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default)]
pub struct SortParams {
    pub sorts: Vec<SortSpec>,
}

impl SortParams {
    pub fn new() -> Self {
        Self { sorts: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }

    /// Parse a sort string like "name,-created_at"
    pub fn from_string(s: &str) -> Self {
        let mut sorts = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some(stripped) = part.strip_prefix('-') {
                sorts.push(SortSpec {
                    field: stripped.to_string(),
                    direction: SortDirection::Desc,
                });
            } else {
                sorts.push(SortSpec {
                    field: part.to_string(),
                    direction: SortDirection::Asc,
                });
            }
        }
        Self { sorts }
    }

    /// Render back to the "-field,other" form the core filters take.
    pub fn to_sort_string(&self) -> String {
        self.sorts
            .iter()
            .map(|s| {
                if s.direction == SortDirection::Desc {
                    format!("-{}", s.field)
                } else {
                    s.field.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    pub offset: i64,
    pub limit: i64,
}

impl PaginationParams {
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            offset: offset.unwrap_or(0).max(0),
            limit: limit.unwrap_or(20).clamp(1, 100), // Default 20, max 100
        }
    }
}

/// Combined query parameters (filter, sort, pagination)
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub filter: FilterParams,
    pub sort: SortParams,
    pub pagination: PaginationParams,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a query string map. Handles:
    /// - filter[field]=value (defaults to eq)
    /// - filter[field][operator]=value
    /// - sort=field or sort=-field
    /// - offset=0, limit=20
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut filter = FilterParams::new();
        let mut sort = SortParams::new();
        let mut offset: Option<i64> = None;
        let mut limit: Option<i64> = None;

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
            } else if key == "sort" {
                sort = SortParams::from_string(value);
            } else if key == "offset" {
                if let Ok(val) = value.parse::<i64>() {
                    offset = Some(val);
                }
            } else if key == "limit"
                && let Ok(val) = value.parse::<i64>()
            {
                limit = Some(val);
            }
        }

        Self {
            filter,
            sort,
            pagination: PaginationParams::new(offset, limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parse_simple() {
        let mut map = HashMap::new();
        map.insert("filter[name]".to_string(), "tofu".to_string());
        let params = QueryParams::from_query_map(&map);
        assert_eq!(params.filter.conditions.len(), 1);
        assert_eq!(params.filter.conditions[0].field, "name");
        assert_eq!(params.filter.conditions[0].operator, FilterOperator::Eq);
        assert_eq!(params.filter.conditions[0].value, "tofu");
    }

    #[test]
    fn test_filter_parse_with_operator() {
        let mut map = HashMap::new();
        map.insert("filter[title][ilike]".to_string(), "stew".to_string());
        let params = QueryParams::from_query_map(&map);
        assert_eq!(params.filter.conditions.len(), 1);
        assert_eq!(params.filter.conditions[0].field, "title");
        assert_eq!(params.filter.conditions[0].operator, FilterOperator::Ilike);
        assert_eq!(params.filter.conditions[0].value, "stew");
    }

    #[test]
    fn test_unknown_operator_is_dropped() {
        let mut map = HashMap::new();
        map.insert("filter[title][regex]".to_string(), ".*".to_string());
        let params = QueryParams::from_query_map(&map);
        assert!(params.filter.is_empty());
    }

    #[test]
    fn test_sort_parse() {
        let mut map = HashMap::new();
        map.insert("sort".to_string(), "-created_at,title".to_string());
        let params = QueryParams::from_query_map(&map);
        assert_eq!(params.sort.sorts.len(), 2);
        assert_eq!(params.sort.sorts[0].field, "created_at");
        assert_eq!(params.sort.sorts[0].direction, SortDirection::Desc);
        assert_eq!(params.sort.sorts[1].field, "title");
        assert_eq!(params.sort.sorts[1].direction, SortDirection::Asc);
        assert_eq!(params.sort.to_sort_string(), "-created_at,title");
    }

    #[test]
    fn test_pagination_parse_and_clamp() {
        let mut map = HashMap::new();
        map.insert("offset".to_string(), "10".to_string());
        map.insert("limit".to_string(), "500".to_string());
        let params = QueryParams::from_query_map(&map);
        assert_eq!(params.pagination.offset, 10);
        assert_eq!(params.pagination.limit, 100);
    }
}
