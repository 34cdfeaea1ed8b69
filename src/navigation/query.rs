//! Typed query parameters for list and metrics endpoints.
//!
//! `None` fields are left out of the query string.

/// Produces `key=value` pairs appended to a request URL.
pub trait QueryParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

fn push<T: ToString>(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<T>) {
    if let Some(v) = value {
        pairs.push((key, v.to_string()));
    }
}

/// Pagination shared by every list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListQuery {
    pub fn page(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }
}

impl QueryParameters for ListQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "page", &self.page);
        push(&mut pairs, "per_page", &self.per_page);
        pairs
    }
}

/// `GET /v2/droplets` filters.
#[derive(Debug, Clone, Default)]
pub struct DropletsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub tag_name: Option<String>,
    pub name: Option<String>,
}

impl QueryParameters for DropletsQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "page", &self.page);
        push(&mut pairs, "per_page", &self.per_page);
        push(&mut pairs, "tag_name", &self.tag_name);
        push(&mut pairs, "name", &self.name);
        pairs
    }
}

/// Selects droplets by tag for bulk deletes and bulk actions.
#[derive(Debug, Clone)]
pub struct TagSelector {
    pub tag_name: String,
}

impl QueryParameters for TagSelector {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("tag_name", self.tag_name.clone())]
    }
}

/// `GET /v2/domains/{domain}/records` filters.
#[derive(Debug, Clone, Default)]
pub struct RecordsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Fully qualified record name, e.g. `www.example.com`.
    pub name: Option<String>,
    pub type_: Option<String>,
}

impl QueryParameters for RecordsQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "page", &self.page);
        push(&mut pairs, "per_page", &self.per_page);
        push(&mut pairs, "name", &self.name);
        push(&mut pairs, "type", &self.type_);
        pairs
    }
}

/// `GET /v2/images` filters.
#[derive(Debug, Clone, Default)]
pub struct ImagesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// `distribution` or `application`.
    pub type_: Option<String>,
    pub private: Option<bool>,
    pub tag_name: Option<String>,
}

impl QueryParameters for ImagesQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "page", &self.page);
        push(&mut pairs, "per_page", &self.per_page);
        push(&mut pairs, "type", &self.type_);
        push(&mut pairs, "private", &self.private);
        push(&mut pairs, "tag_name", &self.tag_name);
        pairs
    }
}

/// `GET /v2/volumes` filters.
#[derive(Debug, Clone, Default)]
pub struct VolumesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub name: Option<String>,
    pub region: Option<String>,
}

impl QueryParameters for VolumesQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "page", &self.page);
        push(&mut pairs, "per_page", &self.per_page);
        push(&mut pairs, "name", &self.name);
        push(&mut pairs, "region", &self.region);
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct DatabasesQuery {
    pub tag_name: Option<String>,
}

impl QueryParameters for DatabasesQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "tag_name", &self.tag_name);
        pairs
    }
}

/// Droplet metric window. Timestamps are Unix seconds.
#[derive(Debug, Clone)]
pub struct MetricsQuery {
    pub host_id: String,
    pub start: u64,
    pub end: u64,
}

impl QueryParameters for MetricsQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("host_id", self.host_id.clone()),
            ("start", self.start.to_string()),
            ("end", self.end.to_string()),
        ]
    }
}

/// Droplet bandwidth metric window.
#[derive(Debug, Clone)]
pub struct BandwidthQuery {
    pub host_id: String,
    /// `public` or `private`.
    pub interface: String,
    /// `inbound` or `outbound`.
    pub direction: String,
    pub start: u64,
    pub end: u64,
}

impl QueryParameters for BandwidthQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("host_id", self.host_id.clone()),
            ("interface", self.interface.clone()),
            ("direction", self.direction.clone()),
            ("start", self.start.to_string()),
            ("end", self.end.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_unset_fields() {
        let q = DropletsQuery {
            per_page: Some(50),
            tag_name: Some("web".into()),
            ..Default::default()
        };
        assert_eq!(
            q.query_pairs(),
            vec![("per_page", "50".to_string()), ("tag_name", "web".to_string())]
        );
        assert!(ListQuery::default().query_pairs().is_empty());
    }

    #[test]
    fn record_type_uses_wire_name() {
        let q = RecordsQuery {
            type_: Some("A".into()),
            ..Default::default()
        };
        assert_eq!(q.query_pairs(), vec![("type", "A".to_string())]);
    }
}
