use matgen_domain::constants::{
    CONFIG_FILE_NAME, DEFAULT_NETWORK, DEFAULT_OUTPUT, DEFAULT_PLANS, UNKNOWN,
};

#[test]
fn constants_match_documented_defaults() {
    assert_eq!(CONFIG_FILE_NAME, "config.xml");
    assert_eq!(DEFAULT_NETWORK, "network.xml");
    assert_eq!(DEFAULT_PLANS, "plans.xml");
    assert_eq!(DEFAULT_OUTPUT, "./output");
    assert_eq!(UNKNOWN, "unknown");
}
