//! Data models for DigitalOcean API types.
//!
//! All models use serde for JSON serialization/deserialization. Fields the API
//! may omit are `Option`; list fields default to empty. Wire names that are
//! Rust keywords or not snake_case are renamed (`type` -> `type_`).

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize `null` as the type's default, e.g. `"databases": null` as an empty list.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Page links returned with list responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageLinks {
    pub first: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
}

/// Link to an action started by a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionLink {
    pub id: Option<u64>,
    pub rel: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    pub pages: Option<PageLinks>,
    #[serde(default)]
    pub actions: Vec<ActionLink>,
}

impl Links {
    /// URL of the next page, if there is one.
    pub fn next_page(&self) -> Option<&str> {
        self.pages.as_ref().and_then(|p| p.next.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    pub total: Option<u64>,
}

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub uuid: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub droplet_limit: Option<u32>,
    pub floating_ip_limit: Option<u32>,
    pub volume_limit: Option<u32>,
    pub email: Option<String>,
    pub uuid: Option<String>,
    pub email_verified: Option<bool>,
    pub status: Option<String>,
    pub status_message: Option<String>,
    pub team: Option<Team>,
}

/// Response from GET /v2/account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub account: Account,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshKey {
    pub id: Option<u64>,
    pub fingerprint: Option<String>,
    pub public_key: Option<String>,
    pub name: Option<String>,
}

/// Request body for POST /v2/account/keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshKeyCreateRequest {
    pub name: String,
    pub public_key: String,
}

/// Request body for PUT /v2/account/keys/{id}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshKeyUpdateRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshKeyResponse {
    pub ssh_key: SshKey,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshKeysResponse {
    #[serde(default)]
    pub ssh_keys: Vec<SshKey>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

// ---------------------------------------------------------------------------
// Billing
// ---------------------------------------------------------------------------

/// Response from GET /v2/customers/my/balance. Amounts are decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Balance {
    pub month_to_date_balance: Option<String>,
    pub account_balance: Option<String>,
    pub month_to_date_usage: Option<String>,
    pub generated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoicePreview {
    pub invoice_uuid: Option<String>,
    pub invoice_id: Option<String>,
    pub amount: Option<String>,
    pub invoice_period: Option<String>,
    pub updated_at: Option<String>,
}

/// Response from GET /v2/customers/my/invoices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoicesResponse {
    #[serde(default)]
    pub invoices: Vec<InvoicePreview>,
    pub invoice_preview: Option<InvoicePreview>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub product: Option<String>,
    pub resource_uuid: Option<String>,
    pub resource_id: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub duration: Option<String>,
    pub duration_unit: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub project_name: Option<String>,
    pub category: Option<String>,
}

/// Response from GET /v2/customers/my/invoices/{uuid}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItemsResponse {
    #[serde(default)]
    pub invoice_items: Vec<InvoiceItem>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// An asynchronous operation tracked by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub id: u64,
    /// `in-progress`, `completed` or `errored`.
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub resource_id: Option<u64>,
    pub resource_type: Option<String>,
    pub region_slug: Option<String>,
}

impl Action {
    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some("completed")
    }

    pub fn is_errored(&self) -> bool {
        self.status.as_deref() == Some("errored")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub action: Action,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionsResponse {
    #[serde(default)]
    pub actions: Vec<Action>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

// ---------------------------------------------------------------------------
// Regions, sizes, images
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub slug: String,
    pub name: Option<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub available: Option<bool>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionsResponse {
    #[serde(default)]
    pub regions: Vec<Region>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Size {
    pub slug: String,
    pub memory: Option<u64>,
    pub vcpus: Option<u32>,
    pub disk: Option<u64>,
    pub transfer: Option<f64>,
    pub price_monthly: Option<f64>,
    pub price_hourly: Option<f64>,
    #[serde(default)]
    pub regions: Vec<String>,
    pub available: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizesResponse {
    #[serde(default)]
    pub sizes: Vec<Size>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: Option<u64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub distribution: Option<String>,
    pub slug: Option<String>,
    pub public: Option<bool>,
    #[serde(default)]
    pub regions: Vec<String>,
    pub created_at: Option<String>,
    pub min_disk_size: Option<u64>,
    pub size_gigabytes: Option<f64>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    pub image: Image,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub images: Vec<Image>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

// ---------------------------------------------------------------------------
// Droplets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkV4 {
    pub ip_address: String,
    pub netmask: Option<String>,
    pub gateway: Option<String>,
    /// `public` or `private`.
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkV6 {
    pub ip_address: String,
    pub netmask: Option<u32>,
    pub gateway: Option<String>,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Networks {
    #[serde(default)]
    pub v4: Vec<NetworkV4>,
    #[serde(default)]
    pub v6: Vec<NetworkV6>,
}

impl Networks {
    /// First public IPv4 address, if assigned yet.
    pub fn public_ipv4(&self) -> Option<&str> {
        self.v4
            .iter()
            .find(|n| n.type_ == "public")
            .map(|n| n.ip_address.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Droplet {
    pub id: u64,
    pub name: String,
    pub memory: Option<u64>,
    pub vcpus: Option<u32>,
    pub disk: Option<u64>,
    pub locked: Option<bool>,
    /// `new`, `active`, `off` or `archive`.
    pub status: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub size_slug: Option<String>,
    #[serde(default)]
    pub networks: Networks,
    pub region: Option<Region>,
    pub image: Option<Image>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub volume_ids: Vec<String>,
    pub vpc_uuid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropletResponse {
    pub droplet: Droplet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropletsResponse {
    #[serde(default)]
    pub droplets: Vec<Droplet>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

/// An image given by slug or numeric id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ImageRef {
    Id(u64),
    Slug(String),
}

impl From<&str> for ImageRef {
    fn from(slug: &str) -> Self {
        ImageRef::Slug(slug.to_string())
    }
}

impl From<u64> for ImageRef {
    fn from(id: u64) -> Self {
        ImageRef::Id(id)
    }
}

/// An SSH key given by id or fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SshKeyRef {
    Id(u64),
    Fingerprint(String),
}

/// Request body for POST /v2/droplets.
///
/// Set `name` for a single droplet or `names` for several.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropletCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub size: String,
    pub image: ImageRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<SshKeyRef>,
    #[serde(default)]
    pub backups: bool,
    #[serde(default)]
    pub ipv6: bool,
    #[serde(default)]
    pub monitoring: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_droplet_agent: Option<bool>,
}

impl DropletCreateRequest {
    /// A single droplet with no optional features enabled.
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        size: impl Into<String>,
        image: impl Into<ImageRef>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            names: None,
            region: Some(region.into()),
            size: size.into(),
            image: image.into(),
            ssh_keys: Vec::new(),
            backups: false,
            ipv6: false,
            monitoring: false,
            tags: Vec::new(),
            user_data: None,
            vpc_uuid: None,
            with_droplet_agent: None,
        }
    }
}

/// Response from POST /v2/droplets: one droplet or many, depending on the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DropletCreateResponse {
    Single {
        droplet: Droplet,
        links: Option<Links>,
    },
    Multiple {
        droplets: Vec<Droplet>,
        links: Option<Links>,
    },
}

impl DropletCreateResponse {
    pub fn droplets(&self) -> Vec<&Droplet> {
        match self {
            DropletCreateResponse::Single { droplet, .. } => vec![droplet],
            DropletCreateResponse::Multiple { droplets, .. } => droplets.iter().collect(),
        }
    }

    /// Ids of the create actions started for the new droplets.
    pub fn action_ids(&self) -> Vec<u64> {
        let links = match self {
            DropletCreateResponse::Single { links, .. } => links,
            DropletCreateResponse::Multiple { links, .. } => links,
        };
        links
            .as_ref()
            .map(|l| l.actions.iter().filter_map(|a| a.id).collect())
            .unwrap_or_default()
    }
}

/// Request body for POST /v2/droplets/{id}/actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DropletAction {
    PowerOn,
    PowerOff,
    Shutdown,
    Reboot,
    PowerCycle,
    PasswordReset,
    EnableBackups,
    DisableBackups,
    EnableIpv6,
    Snapshot {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Rename {
        name: String,
    },
    Resize {
        size: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        disk: Option<bool>,
    },
    Rebuild {
        image: ImageRef,
    },
    Restore {
        image: u64,
    },
}

// ---------------------------------------------------------------------------
// Domains
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    pub ttl: Option<u32>,
    pub zone_file: Option<String>,
}

/// Request body for POST /v2/domains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainResponse {
    pub domain: Domain,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainsResponse {
    #[serde(default)]
    pub domains: Vec<Domain>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRecord {
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub type_: String,
    pub name: Option<String>,
    pub data: Option<String>,
    pub priority: Option<u32>,
    pub port: Option<u32>,
    pub ttl: Option<u32>,
    pub weight: Option<u32>,
    pub flags: Option<u32>,
    pub tag: Option<String>,
}

/// Request body for creating or updating a domain record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainRecordRequest {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRecordResponse {
    pub domain_record: DomainRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRecordsResponse {
    #[serde(default)]
    pub domain_records: Vec<DomainRecord>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

// ---------------------------------------------------------------------------
// Firewalls
// ---------------------------------------------------------------------------

/// Sources or destinations of a firewall rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirewallTargets {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub droplet_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_balancer_uids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kubernetes_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundRule {
    /// `tcp`, `udp` or `icmp`.
    pub protocol: String,
    /// Port, range (`8000-9000`) or `all`.
    pub ports: String,
    pub sources: FirewallTargets,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundRule {
    pub protocol: String,
    pub ports: String,
    pub destinations: FirewallTargets,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Firewall {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inbound_rules: Vec<InboundRule>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub outbound_rules: Vec<OutboundRule>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub droplet_ids: Vec<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Request body for creating or replacing a firewall.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FirewallRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inbound_rules: Vec<InboundRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outbound_rules: Vec<OutboundRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub droplet_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirewallResponse {
    pub firewall: Firewall,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirewallsResponse {
    #[serde(default)]
    pub firewalls: Vec<Firewall>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

/// Body for adding droplets to or removing them from a firewall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirewallDropletsRequest {
    pub droplet_ids: Vec<u64>,
}

/// Body for adding tags to or removing them from a firewall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirewallTagsRequest {
    pub tags: Vec<String>,
}

/// Body for adding rules to or removing them from a firewall.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FirewallRulesRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inbound_rules: Vec<InboundRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outbound_rules: Vec<OutboundRule>,
}

// ---------------------------------------------------------------------------
// Kubernetes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesStatus {
    /// e.g. `provisioning`, `running`, `degraded`, `error`.
    pub state: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesNode {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<KubernetesStatus>,
    pub droplet_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesNodePool {
    pub id: Option<String>,
    pub name: String,
    pub size: String,
    pub count: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub auto_scale: Option<bool>,
    pub min_nodes: Option<u32>,
    pub max_nodes: Option<u32>,
    #[serde(default)]
    pub nodes: Vec<KubernetesNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesCluster {
    pub id: Option<String>,
    pub name: String,
    pub region: Option<String>,
    pub version: Option<String>,
    pub cluster_subnet: Option<String>,
    pub service_subnet: Option<String>,
    pub vpc_uuid: Option<String>,
    pub ipv4: Option<String>,
    pub endpoint: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub node_pools: Vec<KubernetesNodePool>,
    pub status: Option<KubernetesStatus>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub auto_upgrade: Option<bool>,
    pub ha: Option<bool>,
}

impl KubernetesCluster {
    pub fn state(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.state.as_deref())
    }
}

/// Node pool definition for cluster and node pool creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodePoolRequest {
    pub name: String,
    pub size: String,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_nodes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_nodes: Option<u32>,
}

/// Request body for POST /v2/kubernetes/clusters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesClusterCreateRequest {
    pub name: String,
    pub region: String,
    /// Version slug, or `latest`.
    pub version: String,
    pub node_pools: Vec<NodePoolRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_upgrade: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ha: Option<bool>,
}

/// Request body for PUT /v2/kubernetes/clusters/{id}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesClusterUpdateRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_upgrade: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ha: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesClusterResponse {
    pub kubernetes_cluster: KubernetesCluster,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesClustersResponse {
    #[serde(default)]
    pub kubernetes_clusters: Vec<KubernetesCluster>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodePoolResponse {
    pub node_pool: KubernetesNodePool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodePoolsResponse {
    #[serde(default)]
    pub node_pools: Vec<KubernetesNodePool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedSlug {
    pub name: Option<String>,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesVersion {
    pub slug: String,
    pub kubernetes_version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesOptions {
    #[serde(default)]
    pub regions: Vec<NamedSlug>,
    #[serde(default)]
    pub versions: Vec<KubernetesVersion>,
    #[serde(default)]
    pub sizes: Vec<NamedSlug>,
}

/// Response from GET /v2/kubernetes/options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesOptionsResponse {
    pub options: KubernetesOptions,
}

// ---------------------------------------------------------------------------
// Databases
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConnection {
    pub uri: Option<String>,
    pub database: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub ssl: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseUser {
    pub name: String,
    /// `primary` or `normal`.
    pub role: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseCluster {
    pub id: Option<String>,
    pub name: String,
    /// `pg`, `mysql`, `redis`, `mongodb`, ...
    pub engine: String,
    pub version: Option<String>,
    pub num_nodes: Option<u32>,
    pub size: Option<String>,
    pub region: Option<String>,
    /// e.g. `creating`, `online`.
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub private_network_uuid: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub db_names: Vec<String>,
    pub connection: Option<DatabaseConnection>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<DatabaseUser>,
}

/// Request body for POST /v2/databases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseClusterCreateRequest {
    pub name: String,
    pub engine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub num_nodes: u32,
    pub size: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_network_uuid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseClusterResponse {
    pub database: DatabaseCluster,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseClustersResponse {
    /// The API sends `null` rather than `[]` when there are no clusters.
    #[serde(default, deserialize_with = "null_as_default")]
    pub databases: Vec<DatabaseCluster>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseCreateRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseResponse {
    pub db: Database,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabasesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub dbs: Vec<Database>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseUserCreateRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseUserResponse {
    pub user: DatabaseUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseUsersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<DatabaseUser>,
}

// ---------------------------------------------------------------------------
// Monitoring
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlackDetails {
    pub channel: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alerts {
    #[serde(default)]
    pub email: Vec<String>,
    #[serde(default)]
    pub slack: Vec<SlackDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertPolicy {
    pub uuid: Option<String>,
    /// e.g. `v1/insights/droplet/cpu`.
    #[serde(rename = "type")]
    pub type_: String,
    pub description: Option<String>,
    /// `GreaterThan` or `LessThan`.
    pub compare: Option<String>,
    pub value: Option<f64>,
    /// `5m`, `10m`, `30m` or `1h`.
    pub window: Option<String>,
    #[serde(default)]
    pub entities: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub alerts: Alerts,
    pub enabled: Option<bool>,
}

/// Request body for creating or replacing an alert policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertPolicyRequest {
    #[serde(rename = "type")]
    pub type_: String,
    pub description: String,
    pub compare: String,
    pub value: f64,
    pub window: String,
    #[serde(default)]
    pub entities: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub alerts: Alerts,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertPolicyResponse {
    pub policy: AlertPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertPoliciesResponse {
    #[serde(default)]
    pub policies: Vec<AlertPolicy>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

/// One series of a metrics response. Each value is `(unix_timestamp, value)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSeries {
    #[serde(default)]
    pub metric: HashMap<String, String>,
    #[serde(default)]
    pub values: Vec<(f64, String)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsData {
    #[serde(rename = "resultType")]
    pub result_type: Option<String>,
    #[serde(default)]
    pub result: Vec<MetricSeries>,
}

/// Response from the droplet metrics endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub status: Option<String>,
    pub data: MetricsData,
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<String>,
    pub owner_uuid: Option<String>,
    pub owner_id: Option<u64>,
    pub name: String,
    pub description: Option<String>,
    pub purpose: Option<String>,
    /// `Development`, `Staging` or `Production`.
    pub environment: Option<String>,
    pub is_default: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Request body for POST /v2/projects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreateRequest {
    pub name: String,
    pub purpose: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

/// Request body for PUT and PATCH on a project. PATCH sends only the set fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub project: Project,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub projects: Vec<Project>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResource {
    /// Uniform resource name, e.g. `do:droplet:13457723`.
    pub urn: String,
    pub assigned_at: Option<String>,
    pub status: Option<String>,
}

/// Body for POST /v2/projects/{id}/resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAssignRequest {
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResourcesResponse {
    #[serde(default)]
    pub resources: Vec<ProjectResource>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedResources {
    pub count: Option<u64>,
    pub last_tagged_uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub resources: Option<TaggedResources>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCreateRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagResponse {
    pub tag: Tag,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagResource {
    pub resource_id: String,
    /// `droplet`, `image`, `volume`, `volume_snapshot` or `database`.
    pub resource_type: String,
}

/// Body for tagging or untagging resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagResourcesRequest {
    pub resources: Vec<TagResource>,
}

// ---------------------------------------------------------------------------
// VPCs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vpc {
    pub id: Option<String>,
    pub urn: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub region: Option<String>,
    pub ip_range: Option<String>,
    pub default: Option<bool>,
    pub created_at: Option<String>,
}

/// Request body for POST /v2/vpcs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VpcCreateRequest {
    pub name: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_range: Option<String>,
}

/// Request body for PUT and PATCH on a VPC.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VpcUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VpcResponse {
    pub vpc: Vpc,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VpcsResponse {
    #[serde(default)]
    pub vpcs: Vec<Vpc>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VpcMember {
    pub urn: String,
    pub name: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VpcMembersResponse {
    #[serde(default)]
    pub members: Vec<VpcMember>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

// ---------------------------------------------------------------------------
// Volumes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
    pub id: Option<String>,
    pub name: String,
    pub region: Option<Region>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub droplet_ids: Vec<u64>,
    pub description: Option<String>,
    pub size_gigabytes: Option<u64>,
    pub created_at: Option<String>,
    pub filesystem_type: Option<String>,
    pub filesystem_label: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Request body for POST /v2/volumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeCreateRequest {
    pub name: String,
    pub size_gigabytes: u64,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filesystem_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filesystem_label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeResponse {
    pub volume: Volume,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub volumes: Vec<Volume>,
    pub links: Option<Links>,
    pub meta: Option<Meta>,
}

/// Request body for POST /v2/volumes/{id}/actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VolumeAction {
    Attach {
        droplet_id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        region: Option<String>,
    },
    Detach {
        droplet_id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        region: Option<String>,
    },
    Resize {
        size_gigabytes: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        region: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_single_droplet_create_response() {
        let body = json!({
            "droplet": {"id": 3164444, "name": "example.com", "status": "new", "networks": {"v4": [], "v6": []}},
            "links": {"actions": [{"id": 7515, "rel": "create", "href": "https://api.digitalocean.com/v2/actions/7515"}]}
        });
        let resp: DropletCreateResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(resp, DropletCreateResponse::Single { .. }));
        assert_eq!(resp.droplets()[0].id, 3164444);
        assert_eq!(resp.action_ids(), vec![7515]);
    }

    #[test]
    fn decodes_multiple_droplet_create_response() {
        let body = json!({
            "droplets": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}],
            "links": {"actions": [{"id": 10}, {"id": 11}]}
        });
        let resp: DropletCreateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.droplets().len(), 2);
        assert_eq!(resp.action_ids(), vec![10, 11]);
    }

    #[test]
    fn droplet_actions_are_internally_tagged() {
        let v = serde_json::to_value(DropletAction::PowerCycle).unwrap();
        assert_eq!(v, json!({"type": "power_cycle"}));

        let v = serde_json::to_value(DropletAction::Resize {
            size: "s-2vcpu-2gb".into(),
            disk: None,
        })
        .unwrap();
        assert_eq!(v, json!({"type": "resize", "size": "s-2vcpu-2gb"}));

        let v = serde_json::to_value(DropletAction::Rebuild {
            image: ImageRef::from("ubuntu-22-04-x64"),
        })
        .unwrap();
        assert_eq!(v, json!({"type": "rebuild", "image": "ubuntu-22-04-x64"}));
    }

    #[test]
    fn create_request_skips_unset_fields() {
        let req = DropletCreateRequest::new("web-1", "nyc3", "s-1vcpu-1gb", 12345u64);
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["image"], json!(12345));
        assert!(v.get("names").is_none());
        assert!(v.get("ssh_keys").is_none());
        assert_eq!(v["backups"], json!(false));
    }

    #[test]
    fn metrics_result_type_is_renamed() {
        let body = json!({
            "status": "success",
            "data": {
                "resultType": "matrix",
                "result": [{"metric": {"host_id": "19201920", "mode": "idle"}, "values": [[1635386880, "122901.18"]]}]
            }
        });
        let resp: MetricsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.data.result_type.as_deref(), Some("matrix"));
        assert_eq!(resp.data.result[0].values[0].1, "122901.18");
    }

    #[test]
    fn null_database_list_is_empty() {
        let resp: DatabaseClustersResponse =
            serde_json::from_value(json!({"databases": null})).unwrap();
        assert!(resp.databases.is_empty());
        let resp: DatabaseClustersResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.databases.is_empty());
    }

    #[test]
    fn next_page_link() {
        let links: Links = serde_json::from_value(json!({
            "pages": {"next": "https://api.digitalocean.com/v2/droplets?page=2&per_page=1"}
        }))
        .unwrap();
        assert_eq!(
            links.next_page(),
            Some("https://api.digitalocean.com/v2/droplets?page=2&per_page=1")
        );
        assert!(Links::default().next_page().is_none());
    }

    #[test]
    fn public_ipv4_picks_public_network() {
        let networks: Networks = serde_json::from_value(json!({
            "v4": [
                {"ip_address": "10.128.192.124", "type": "private"},
                {"ip_address": "192.241.165.154", "type": "public"}
            ]
        }))
        .unwrap();
        assert_eq!(networks.public_ipv4(), Some("192.241.165.154"));
    }
}
