//! Tests for outbound reporting.

use super::*;
use serial_test::serial;

fn sample_option() -> MenuOption {
    MenuOption {
        id: "opt".to_string(),
        title: Some("Option".to_string()),
        description: None,
        icon: None,
        disabled: false,
        applied: false,
        separator: false,
        data: Some(serde_json::json!({"category": "tools"})),
    }
}

// ===== Report shape =====

#[test]
fn endpoints_match_host_paths() {
    assert_eq!(
        Report::OptionSelected {
            option_id: "a".to_string(),
            option_data: sample_option(),
            menu_id: None
        }
        .endpoint(),
        "menuOptionSelected"
    );
    assert_eq!(Report::Back.endpoint(), "menuBack");
    assert_eq!(Report::Closed.endpoint(), "menuClosed");
    assert_eq!(
        Report::ClipboardResult {
            success: true,
            description: String::new()
        }
        .endpoint(),
        "clipboardResult"
    );
}

#[test]
fn option_selected_body_echoes_option_and_menu() {
    let report = Report::OptionSelected {
        option_id: "opt".to_string(),
        option_data: sample_option(),
        menu_id: Some("main".to_string()),
    };
    let body = report.body();
    assert_eq!(body["optionId"], "opt");
    assert_eq!(body["menuId"], "main");
    assert_eq!(body["optionData"]["data"]["category"], "tools");
}

#[test]
fn back_and_closed_bodies_are_empty_objects() {
    assert_eq!(Report::Back.body(), serde_json::json!({}));
    assert_eq!(Report::Closed.body(), serde_json::json!({}));
}

#[test]
fn clipboard_result_body_has_success_flag() {
    let report = Report::ClipboardResult {
        success: false,
        description: "entity coords".to_string(),
    };
    let body = report.body();
    assert_eq!(body["success"], false);
    assert_eq!(body["description"], "entity coords");
}

// ===== JsonLinesLink =====

#[test]
fn json_lines_link_writes_one_record_per_post() {
    let mut buffer = Vec::new();
    {
        let mut link = JsonLinesLink::new("test-resource", &mut buffer);
        link.post("menuBack", &serde_json::json!({})).unwrap();
        link.post("menuClosed", &serde_json::json!({})).unwrap();
    }
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["resource"], "test-resource");
    assert_eq!(first["endpoint"], "menuBack");
    assert!(first["timestamp"].is_string());
}

// ===== Reporter =====

struct FailingLink;
impl HostLink for FailingLink {
    fn post(&mut self, _endpoint: &str, _body: &serde_json::Value) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))
    }
}

#[test]
fn reporter_swallows_transport_failure() {
    let mut reporter = Reporter::new(FailingLink);
    // Must not panic or propagate
    reporter.send(&Report::Back);
    reporter.send(&Report::Closed);
}

#[test]
fn reporter_posts_through_link() {
    let mut buffer = Vec::new();
    {
        let mut reporter = Reporter::new(JsonLinesLink::new("r", &mut buffer));
        reporter.send(&Report::Back);
    }
    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains("menuBack"));
}

// ===== Resource resolution =====

#[test]
#[serial(resource_env)]
fn resource_prefers_explicit_configuration() {
    std::env::set_var(RESOURCE_ENV_VAR, "from-env");
    assert_eq!(resolve_resource(Some("configured")), "configured");
    std::env::remove_var(RESOURCE_ENV_VAR);
}

#[test]
#[serial(resource_env)]
fn resource_falls_back_to_env_then_fixed_default() {
    std::env::set_var(RESOURCE_ENV_VAR, "from-env");
    assert_eq!(resolve_resource(None), "from-env");

    std::env::remove_var(RESOURCE_ENV_VAR);
    assert_eq!(resolve_resource(None), FALLBACK_RESOURCE);
}
