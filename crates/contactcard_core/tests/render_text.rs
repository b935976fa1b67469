use contactcard_core::view::node::SizeConstraint;
use contactcard_core::{
    compose_card, render_to_text, BlankFetcher, ContactRecord, ImageData, ImageFetcher,
};
use std::cell::RefCell;

/// Test fetcher that records every request and serves a fixed frame.
struct RecordingFetcher {
    calls: RefCell<Vec<(String, SizeConstraint)>>,
}

impl RecordingFetcher {
    fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl ImageFetcher for RecordingFetcher {
    fn fetch(&self, url: &str, constraint: SizeConstraint) -> Option<ImageData> {
        self.calls.borrow_mut().push((url.to_string(), constraint));
        Some(ImageData {
            width: 96,
            height: 96,
        })
    }
}

#[test]
fn renders_card_without_optional_fields() {
    let mut contact = ContactRecord::new("Alex", "Lexov", "Addr").expect("valid contact");
    contact.is_favorite = true;

    let text = render_to_text(&compose_card(&contact), &BlankFetcher);
    assert_eq!(text, "AL\nAlex\nLexov★\nPhone: —\nAddress: Addr");
}

#[test]
fn renders_card_with_all_optional_fields() {
    let mut contact = ContactRecord::new("A", "C", "Addr").expect("valid contact");
    contact.surname = Some("B".to_string());
    contact.image_ref = Some("http://x/img.png".to_string());
    contact.phone = Some("123".to_string());
    contact.email = Some("e@x.com".to_string());

    let fetcher = RecordingFetcher::new();
    let text = render_to_text(&compose_card(&contact), &fetcher);
    assert_eq!(
        text,
        "[image 96x96]\nA B\nC\nPhone: +123\nAddress: Addr\nEmail: e@x.com"
    );

    let calls = fetcher.calls.borrow();
    assert_eq!(calls.len(), 1);
    let (url, constraint) = &calls[0];
    assert_eq!(url, "http://x/img.png");
    assert_eq!(constraint.min_edge, 24);
    assert_eq!(constraint.max_edge, 120);
}

#[test]
fn declined_fetch_leaves_avatar_region_blank() {
    let mut contact = ContactRecord::new("Alex", "Lexov", "Addr").expect("valid contact");
    contact.image_ref = Some("http://x/img.png".to_string());

    let text = render_to_text(&compose_card(&contact), &BlankFetcher);
    assert_eq!(text, "Alex\nLexov\nPhone: —\nAddress: Addr");
}
