use matgen_domain::{ConfigRequest, Platform, RequestOverrides};
use serde_json::json;

#[test]
fn request_defaults_are_sane() {
    let request = ConfigRequest::default();
    assert_eq!(request.network, "network.xml");
    assert_eq!(request.plans, "plans.xml");
    assert_eq!(request.output, "./output");
}

#[test]
fn empty_overrides_resolve_to_defaults() {
    assert_eq!(RequestOverrides::default().resolve(), ConfigRequest::default());
}

#[test]
fn overrides_keep_first_source_and_fill_gaps() {
    let cli = RequestOverrides { network: Some("net.xml".into()), ..Default::default() };
    let env = RequestOverrides {
        network: Some("env-net.xml".into()),
        plans: Some("env-plans.xml".into()),
        output: None,
    };

    let request = cli.or(env).resolve();
    assert_eq!(request.network, "net.xml");
    assert_eq!(request.plans, "env-plans.xml");
    assert_eq!(request.output, "./output");
}

#[test]
fn empty_strings_are_kept_verbatim() {
    let request =
        RequestOverrides { output: Some(String::new()), ..Default::default() }.resolve();
    assert_eq!(request.output, "");
}

#[test]
fn overrides_deserialize_partially() {
    let raw = json!({ "plans": "/data/plans.xml.gz" });

    let overrides: RequestOverrides = serde_json::from_value(raw).expect("overrides deserialize");
    assert_eq!(overrides.plans.as_deref(), Some("/data/plans.xml.gz"));
    assert!(overrides.network.is_none());
    assert!(overrides.output.is_none());
}

#[test]
fn platform_fills_unknown_for_missing_values() {
    let platform = Platform::from_parts(Some("Linux".into()), None);
    assert_eq!(platform.system, "Linux");
    assert_eq!(platform.release, "unknown");

    let blank = Platform::from_parts(Some("  ".into()), Some(String::new()));
    assert_eq!(blank.system, "unknown");
    assert_eq!(blank.release, "unknown");
}

#[test]
fn platform_displays_system_then_release() {
    let platform = Platform::from_parts(Some("Linux".into()), Some("6.1.0".into()));
    assert_eq!(platform.to_string(), "Linux 6.1.0");
}
