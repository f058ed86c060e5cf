use ratemymp::{
    pages::MpSearchPage,
    router::SearchKind,
};

use crate::support::{FakeApi, Script, as_api, failure, mp};

#[tokio::test]
async fn given_loose_postal_code_when_searching_then_canonical_code_is_looked_up() {
    let fake = FakeApi::new(Script {
        postal: Ok(Some(mp("42", "John Smith"))),
        ..Script::default()
    });
    let mut page = MpSearchPage::new(as_api(&fake), "k1a0a6", SearchKind::Postal);

    page.run().await;

    assert!(page.has_searched());
    assert_eq!(page.results().len(), 1);
    assert_eq!(page.results()[0].id, "42");
    assert_eq!(fake.calls(), vec!["get_mp_by_postal_code K1A 0A6"]);
}

#[tokio::test]
async fn given_unresolved_postal_code_when_searching_then_results_are_empty() {
    let fake = FakeApi::new(Script::default());
    let mut page = MpSearchPage::new(as_api(&fake), "H2X 1Y4", SearchKind::Postal);

    page.run().await;

    assert!(page.has_searched());
    assert!(page.results().is_empty());
    assert!(page.notices_mut().pending().is_empty());
}

#[tokio::test]
async fn given_malformed_postal_code_when_searching_then_backend_is_not_called() {
    let fake = FakeApi::new(Script {
        postal: Ok(Some(mp("42", "John Smith"))),
        ..Script::default()
    });
    let mut page = MpSearchPage::new(as_api(&fake), "90210", SearchKind::Postal);

    page.run().await;

    assert!(fake.calls().is_empty());
    assert!(page.results().is_empty());
    let notices = page.notices_mut().drain();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].to_string(), "Invalid postal code: Use the format A1A 1A1");
}

#[tokio::test]
async fn given_name_query_when_searching_then_name_search_is_used() {
    let fake = FakeApi::new(Script {
        search: Ok(vec![mp("1", "John Smith"), mp("2", "Jane Smithers")]),
        ..Script::default()
    });
    let mut page = MpSearchPage::new(as_api(&fake), "smith", SearchKind::Name);

    page.run().await;

    assert_eq!(page.results().len(), 2);
    assert_eq!(fake.calls(), vec!["search_mps smith"]);
}

#[tokio::test]
async fn given_backend_failure_when_searching_again_then_previous_results_are_kept() {
    let fake = FakeApi::new(Script {
        search: Ok(vec![mp("1", "John Smith")]),
        ..Script::default()
    });
    let mut page = MpSearchPage::new(as_api(&fake), "smith", SearchKind::Name);
    page.run().await;

    fake.update(|script| script.search = Err(failure("connection refused")));
    page.set_query("jones", SearchKind::Name).await;

    assert_eq!(page.query(), "jones");
    assert_eq!(page.results().len(), 1);
    assert!(!page.is_loading());
    let notices = page.notices_mut().drain();
    assert_eq!(notices[0].to_string(), "Search failed: Please try again");
}
