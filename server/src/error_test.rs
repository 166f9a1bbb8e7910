use super::*;

#[test]
fn http_client_build_message_names_the_cause() {
    let err = StartupError::HttpClientBuild("no TLS backend".into());
    assert_eq!(err.to_string(), "HTTP client build failed: no TLS backend");
}

#[test]
fn leptos_config_message_names_the_cause() {
    let err = StartupError::LeptosConfig("missing site-root".into());
    assert_eq!(err.to_string(), "leptos configuration: missing site-root");
}
