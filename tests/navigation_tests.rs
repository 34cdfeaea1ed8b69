//! Path construction across the navigation tree. No requests are sent.

use digitalocean_sdk::DigitalOceanClient;

fn client() -> DigitalOceanClient {
    DigitalOceanClient::from_token("dop_v1_navigation").unwrap()
}

#[test]
fn account_and_billing() {
    let v2 = client().v2();
    assert_eq!(v2.account().path(), "/v2/account");
    assert_eq!(
        v2.account().keys().by_key_id("3b:16:bf").path(),
        "/v2/account/keys/3b:16:bf"
    );
    let invoice = v2.customers().my().invoices().by_invoice_uuid("inv-1");
    assert_eq!(invoice.path(), "/v2/customers/my/invoices/inv-1");
    assert_eq!(invoice.pdf().path(), "/v2/customers/my/invoices/inv-1/pdf");
    assert_eq!(invoice.csv().path(), "/v2/customers/my/invoices/inv-1/csv");
}

#[test]
fn compute_and_networking() {
    let v2 = client().v2();
    assert_eq!(v2.droplets().actions().path(), "/v2/droplets/actions");
    assert_eq!(v2.actions().by_action_id(36804636).path(), "/v2/actions/36804636");
    assert_eq!(
        v2.volumes().by_volume_id("7724db7c").actions().path(),
        "/v2/volumes/7724db7c/actions"
    );
    assert_eq!(v2.vpcs().by_vpc_id("5a4981aa").members().path(), "/v2/vpcs/5a4981aa/members");
    let firewall = v2.firewalls().by_firewall_id("fb6045f1");
    assert_eq!(firewall.tags().path(), "/v2/firewalls/fb6045f1/tags");
    assert_eq!(firewall.rules().path(), "/v2/firewalls/fb6045f1/rules");
    assert_eq!(
        v2.domains().by_domain_name("example.com").records().by_record_id(3352896).path(),
        "/v2/domains/example.com/records/3352896"
    );
}

#[test]
fn kubernetes_and_databases() {
    let v2 = client().v2();
    let cluster = v2.kubernetes().clusters().by_cluster_id("bd5f5959");
    assert_eq!(cluster.kubeconfig().path(), "/v2/kubernetes/clusters/bd5f5959/kubeconfig");
    assert_eq!(
        cluster.node_pools().by_node_pool_id("cdda885e").path(),
        "/v2/kubernetes/clusters/bd5f5959/node_pools/cdda885e"
    );
    assert_eq!(v2.kubernetes().options().path(), "/v2/kubernetes/options");

    let db = v2.databases().by_database_cluster_uuid("9cc10173");
    assert_eq!(db.dbs().by_database_name("alpha").path(), "/v2/databases/9cc10173/dbs/alpha");
    assert_eq!(db.users().by_username("app").path(), "/v2/databases/9cc10173/users/app");
}

#[test]
fn monitoring_projects_and_catalog() {
    let v2 = client().v2();
    let droplet_metrics = v2.monitoring().metrics().droplet();
    assert_eq!(droplet_metrics.bandwidth().path(), "/v2/monitoring/metrics/droplet/bandwidth");
    assert_eq!(
        droplet_metrics.memory_total().path(),
        "/v2/monitoring/metrics/droplet/memory_total"
    );
    assert_eq!(
        v2.monitoring().alerts().by_alert_uuid("78b3da62").path(),
        "/v2/monitoring/alerts/78b3da62"
    );
    assert_eq!(v2.projects().default_project().path(), "/v2/projects/default");
    assert_eq!(
        v2.projects().by_project_id("4e1bfbc3").resources().path(),
        "/v2/projects/4e1bfbc3/resources"
    );
    assert_eq!(v2.tags().by_tag_id("awesome").resources().path(), "/v2/tags/awesome/resources");
    assert_eq!(v2.images().by_image_id("ubuntu-22-04-x64").path(), "/v2/images/ubuntu-22-04-x64");
    assert_eq!(v2.regions().path(), "/v2/regions");
    assert_eq!(v2.sizes().path(), "/v2/sizes");
}

#[test]
fn builders_are_reusable() {
    let droplets = client().v2().droplets();
    let first = droplets.by_droplet_id(1);
    let second = droplets.by_droplet_id(2);
    assert_eq!(first.path(), "/v2/droplets/1");
    assert_eq!(second.path(), "/v2/droplets/2");
    assert_eq!(droplets.path(), "/v2/droplets");
    assert!(format!("{droplets:?}").contains("/v2/droplets"));
}
