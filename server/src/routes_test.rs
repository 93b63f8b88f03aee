use super::*;

// =============================================================
// bind_addr
// =============================================================

#[test]
fn bind_addr_defaults_to_site_address() {
    let default: SocketAddr = "127.0.0.1:3000".parse().expect("addr");
    assert_eq!(bind_addr(default, None).expect("resolve"), default);
}

#[test]
fn bind_addr_port_override_binds_all_interfaces() {
    let default: SocketAddr = "127.0.0.1:3000".parse().expect("addr");
    let addr = bind_addr(default, Some("8080")).expect("resolve");
    assert_eq!(addr, "0.0.0.0:8080".parse::<SocketAddr>().expect("addr"));
}

#[test]
fn bind_addr_rejects_garbage_port() {
    let default: SocketAddr = "127.0.0.1:3000".parse().expect("addr");
    let err = bind_addr(default, Some("not-a-port")).expect_err("must fail");
    assert!(err.to_string().contains("not-a-port"));
}

// =============================================================
// healthz
// =============================================================

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}
