use crate::config::BindingConfig;

#[test]
fn deserialize_without_default_value() {
    let config: BindingConfig = serde_json::from_str(r#"{"name":"q"}"#).unwrap();

    assert_eq!(config, BindingConfig::new("q"));
    assert_eq!(config.default_value, "");
}

#[test]
fn deserialize_with_default_value() {
    let config: BindingConfig =
        serde_json::from_str(r#"{"name":"sort","default_value":"created_at"}"#).unwrap();

    assert_eq!(config.name, "sort");
    assert_eq!(config.default_value, "created_at");
}

#[test]
fn deserialize_list_of_bindings() {
    let configs: Vec<BindingConfig> = serde_json::from_str(
        r#"[{"name":"q"},{"name":"page","default_value":"1"}]"#,
    )
    .unwrap();

    assert_eq!(
        configs,
        vec![
            BindingConfig::new("q"),
            BindingConfig::new("page").with_default("1"),
        ]
    );
}

#[test]
fn serialize_includes_default_value() {
    let json = serde_json::to_string(&BindingConfig::new("tab").with_default("notes")).unwrap();

    assert_eq!(json, r#"{"name":"tab","default_value":"notes"}"#);
}
