//! Wire-shape tests for the Script Filter envelope
//!
//! These tests parse rendered output back through `serde_json::Value` and
//! assert on key presence and structure, so they pin the exact JSON shape
//! the launcher host consumes rather than string formatting details.

use serde_json::Value;

use rufred::{IconInfo, Item, Response};

fn render(resp: &Response) -> Value {
    serde_json::from_str(&resp.to_json().expect("render failed")).expect("invalid JSON")
}

#[test]
fn empty_response_is_an_empty_object() {
    let value = render(&Response::new());
    let obj = value.as_object().unwrap();
    assert!(obj.is_empty());
}

#[test]
fn matched_invocable_scenario() {
    let mut resp = Response::new();
    resp.add_matched_invocable("ab", "abcdef", "sub1", "icon.png", "auto1", "arg1");
    resp.add_matched_invocable("xyz", "abcdef", "sub1", "icon.png", "auto1", "arg1");

    let value = render(&resp);
    let items = value["items"].as_array().unwrap();
    assert_eq!(items.len(), 1, "only the matching candidate is added");

    let item = &items[0];
    assert_eq!(item["title"], "abcdef");
    assert_eq!(item["subtitle"], "sub1");
    assert_eq!(item["arg"], "arg1");
    assert_eq!(item["autocomplete"], "auto1");
    assert_eq!(item["uid"], "abcdef.sub1");
    assert_eq!(item["type"], "default");
    assert_eq!(item["valid"], true);
}

#[test]
fn variables_only_scenario() {
    let mut resp = Response::new();
    resp.set_variable("env", "prod");

    let value = render(&resp);
    assert_eq!(value["alfredworkflow"]["variables"]["env"], "prod");
    assert!(value.get("items").is_none());
}

#[test]
fn browsable_items_are_not_invocable() {
    let mut resp = Response::new();
    resp.add_matched_browsable("", "docs", "Open documentation", "icon.png", "docs ");

    let value = render(&resp);
    let item = &value["items"][0];
    assert_eq!(item["valid"], false);
    assert_eq!(item["arg"], "");
    assert_eq!(item["uid"], "docs.Open documentation");
}

#[test]
fn empty_tags_are_absent_from_items() {
    let mut resp = Response::new();
    resp.add_item(Item::new("docs"));

    let value = render(&resp);
    let item = value["items"][0].as_object().unwrap();
    assert!(!item.contains_key("uid"));
    assert!(!item.contains_key("type"));
    assert!(!item["icon"].as_object().unwrap().contains_key("type"));
    // Empty display and action fields still serialize
    assert_eq!(item["subtitle"], "");
    assert_eq!(item["arg"], "");
    assert_eq!(item["autocomplete"], "");
    assert_eq!(item["icon"]["path"], "");
}

#[test]
fn explicit_icon_kind_serializes_under_icon_type() {
    let mut resp = Response::new();
    resp.add_item_if_matches(
        "doc",
        Item::new("docs").with_icon(IconInfo::with_kind("filetype", "public.folder")),
    );

    let value = render(&resp);
    assert_eq!(value["items"][0]["icon"]["type"], "filetype");
    assert_eq!(value["items"][0]["icon"]["path"], "public.folder");
}

#[test]
fn wrapper_icons_never_repeat_the_path_as_kind() {
    let mut resp = Response::new();
    resp.add_matched_invocable("", "docs", "sub", "icon.png", "docs", "arg");

    let value = render(&resp);
    let icon = value["items"][0]["icon"].as_object().unwrap();
    assert_eq!(icon["path"], "icon.png");
    assert!(!icon.contains_key("type"));
}

#[test]
fn items_render_in_insertion_order() {
    let mut resp = Response::new();
    for title in ["alpha", "beta", "gamma", "delta"] {
        resp.add_item(Item::new(title));
    }

    let value = render(&resp);
    let titles: Vec<&str> = value["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["alpha", "beta", "gamma", "delta"]);
}

#[test]
fn set_variable_keeps_latest_value_per_key() {
    let mut resp = Response::new();
    resp.set_variable("env", "dev");
    resp.set_variable("env", "prod");
    resp.set_variable("browser", "safari");

    let value = render(&resp);
    let vars = value["alfredworkflow"]["variables"].as_object().unwrap();
    assert_eq!(vars.len(), 2);
    assert_eq!(vars["env"], "prod");
    assert_eq!(vars["browser"], "safari");
}

#[test]
fn variables_and_items_render_together() {
    let mut resp = Response::new();
    resp.set_variable("env", "prod");
    resp.add_matched_browsable("do", "docs", "sub", "icon.png", "docs ");
    resp.add_matched_invocable("do", "docs2", "sub", "icon.png", "docs2 ", "open");

    let value = render(&resp);
    assert_eq!(value["alfredworkflow"]["variables"]["env"], "prod");
    assert_eq!(value["items"].as_array().unwrap().len(), 2);
}
