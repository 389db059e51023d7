//! Tests for core_kernel ports

use std::error::Error;

use core_kernel::{DomainPort, PortError};

#[test]
fn test_port_error_display() {
    assert_eq!(
        PortError::unavailable("user_point").to_string(),
        "Store unavailable: user_point"
    );
    assert_eq!(
        PortError::internal("disk full").to_string(),
        "Internal error: disk full"
    );
}

#[test]
fn test_port_error_has_no_source() {
    assert!(PortError::internal("disk full").source().is_none());
}

#[test]
fn test_port_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PortError>();
}

#[test]
fn test_domain_port_objects_are_shareable() {
    struct Store;
    impl DomainPort for Store {}

    let port: std::sync::Arc<dyn DomainPort> = std::sync::Arc::new(Store);
    let cloned = std::sync::Arc::clone(&port);
    std::thread::spawn(move || drop(cloned)).join().unwrap();
}
