// Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use mukherji_site::config::Config;
use mukherji_site::head::{DocumentHead, MetaTag};
use mukherji_site::router::route;
use mukherji_site::web::BrowserHead;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn head() -> BrowserHead {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("browser document");
    BrowserHead::new(document)
}

#[wasm_bindgen_test]
fn config_has_no_directory_in_the_browser() {
    assert!(Config::config_path().is_none());
    assert_eq!(Config::load(), Config::default());
}

#[wasm_bindgen_test]
fn title_round_trips_through_document() {
    let mut head = head();
    head.set_title("Tower | Mukherji Architects Milano");
    assert_eq!(head.title(), "Tower | Mukherji Architects Milano");
}

#[wasm_bindgen_test]
fn script_ids_never_duplicate() {
    let mut head = head();
    head.insert_script("faq-structured-data", "{\"a\":1}");
    head.insert_script("faq-structured-data", "{\"a\":2}");
    assert_eq!(head.script("faq-structured-data").as_deref(), Some("{\"a\":2}"));

    head.remove_script("faq-structured-data");
    assert!(head.script("faq-structured-data").is_none());
}

#[wasm_bindgen_test]
fn missing_meta_tag_is_left_alone() {
    let mut head = head();
    head.set_meta(MetaTag::TwitterTitle, "ignored");
    assert!(head.meta(MetaTag::TwitterTitle).is_none());
}

#[wasm_bindgen_test]
fn codec_runs_in_the_browser() {
    assert!(route::decode("/best-fit/research").canonical);
}
