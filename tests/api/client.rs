use serde_json::json;
use time::macros::date;

use ratemymp::{
    api::{ApiErrorKind, HttpMethod, MotionFilter, ParliamentApi},
    model::{
        BallotChoice, DisclosureType, MotionCategory, MotionStatus, PLACEHOLDER_IMAGE, PartyName,
        PartyVote, UserVote,
    },
};

use crate::support::{ScriptedTransport, client};

fn bill_c15() -> serde_json::Value {
    json!({
        "id": 1,
        "title": "Bill C-15",
        "passed": true,
        "introduced_by_mp_id": 7,
        "introduced_by_party": "Liberal",
        "vote_results_by_party": {
            "Liberal": { "yea": 155, "nay": 0, "abstain": 3 }
        },
        "date": "2024-11-15"
    })
}

#[tokio::test]
async fn given_backend_motion_when_listing_motions_then_record_is_normalized() {
    let transport = ScriptedTransport::new();
    transport.json(HttpMethod::Get, "/motions", 200, json!([bill_c15()]));

    let motions = client(&transport)
        .get_motions(MotionFilter::default())
        .await
        .expect("motions load");

    assert_eq!(motions.len(), 1);
    let motion = &motions[0];
    assert_eq!(motion.id, "1");
    assert_eq!(motion.status, MotionStatus::Passed);
    assert_eq!(
        motion.vote_breakdown,
        vec![PartyVote {
            party: PartyName::Liberal,
            yea: 155,
            nay: 0,
            abstain: 3,
        }]
    );
    assert_eq!(motion.date, date!(2024 - 11 - 15));
    assert_eq!(motion.introduced_by.mp_id, "7");
    assert_eq!(motion.introduced_by.party, Some(PartyName::Liberal));
    assert_eq!((motion.upvotes, motion.downvotes), (0, 0));
    assert_eq!(motion.user_vote, None);
}

#[tokio::test]
async fn given_category_filter_when_listing_motions_then_category_is_sent_as_query() {
    let transport = ScriptedTransport::new();
    transport.json(HttpMethod::Get, "/motions", 200, json!([]));

    client(&transport)
        .get_motions(MotionFilter {
            category: Some(MotionCategory::EnvironmentEnergy),
        })
        .await
        .expect("motions load");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].query,
        vec![("category".to_string(), "environment/energy".to_string())]
    );
}

#[tokio::test]
async fn given_single_vote_strings_when_listing_motions_then_one_count_is_set() {
    let transport = ScriptedTransport::new();
    let mut motion = bill_c15();
    motion["passed"] = json!(false);
    motion["vote_results_by_party"] = json!({
        "NDP": { "vote": "NAY" },
        "Green": { "vote": "paired" },
        "Bloc": { "vote": "abstain" },
        "Rhinoceros": { "vote": "yea" }
    });
    transport.json(HttpMethod::Get, "/motions", 200, json!([motion]));

    let motions = client(&transport)
        .get_motions(MotionFilter::default())
        .await
        .expect("motions load");

    let motion = &motions[0];
    assert_eq!(motion.status, MotionStatus::InProgress);
    assert_eq!(
        motion.vote_breakdown,
        vec![
            PartyVote {
                party: PartyName::Ndp,
                yea: 0,
                nay: 1,
                abstain: 0,
            },
            PartyVote {
                party: PartyName::BlocQuebecois,
                yea: 0,
                nay: 0,
                abstain: 1,
            },
            PartyVote {
                party: PartyName::Green,
                yea: 0,
                nay: 0,
                abstain: 0,
            },
        ]
    );
}

#[tokio::test]
async fn given_motion_without_date_when_listing_then_today_is_used() {
    let transport = ScriptedTransport::new();
    let mut motion = bill_c15();
    motion["date"] = serde_json::Value::Null;
    transport.json(HttpMethod::Get, "/motions", 200, json!([motion]));

    let motions = client(&transport)
        .get_motions(MotionFilter::default())
        .await
        .expect("motions load");
    assert_eq!(motions[0].date, date!(2025 - 01 - 10));
}

#[tokio::test]
async fn given_server_error_when_listing_motions_then_error_carries_body() {
    let transport = ScriptedTransport::new();
    transport.text(HttpMethod::Get, "/motions", 503, "database unavailable");

    let err = client(&transport)
        .get_motions(MotionFilter::default())
        .await
        .expect_err("503 must fail");
    assert_eq!(err.kind, ApiErrorKind::HttpStatus);
    assert_eq!(err.status, Some(503));
    assert_eq!(err.message, "database unavailable");
    assert!(err.is_user_facing());
}

#[tokio::test]
async fn given_motion_missing_title_when_listing_then_invalid_payload_is_returned() {
    let transport = ScriptedTransport::new();
    let mut motion = bill_c15();
    motion["title"] = json!("   ");
    transport.json(HttpMethod::Get, "/motions", 200, json!([motion]));

    let err = client(&transport)
        .get_motions(MotionFilter::default())
        .await
        .expect_err("blank title is rejected");
    assert_eq!(err.kind, ApiErrorKind::InvalidPayload);
    assert!(err.message.contains("title"), "{}", err.message);
    assert_eq!(err.endpoint.as_deref(), Some("/motions"));
}

#[tokio::test]
async fn given_negative_tally_when_listing_then_invalid_payload_is_returned() {
    let transport = ScriptedTransport::new();
    let mut motion = bill_c15();
    motion["vote_results_by_party"] = json!({ "Liberal": { "yea": -4 } });
    transport.json(HttpMethod::Get, "/motions", 200, json!([motion]));

    let err = client(&transport)
        .get_motions(MotionFilter::default())
        .await
        .expect_err("negative count is rejected");
    assert_eq!(err.kind, ApiErrorKind::InvalidPayload);
}

#[tokio::test]
async fn given_unknown_motion_when_fetching_by_id_then_none_is_returned() {
    let transport = ScriptedTransport::new();

    let motion = client(&transport)
        .get_motion_by_id("999")
        .await
        .expect("404 is not an error");
    assert_eq!(motion, None);
    assert_eq!(transport.paths(), vec!["GET /motions/999"]);
}

#[tokio::test]
async fn given_known_motion_when_fetching_by_id_then_record_is_normalized() {
    let transport = ScriptedTransport::new();
    transport.json(HttpMethod::Get, "/motions/1", 200, bill_c15());

    let motion = client(&transport)
        .get_motion_by_id("1")
        .await
        .expect("lookup succeeds")
        .expect("motion present");
    assert_eq!(motion.id, "1");
    assert_eq!(motion.title, "Bill C-15");
    assert_eq!(motion.status, MotionStatus::Passed);
    assert_eq!(
        motion.vote_breakdown,
        vec![PartyVote {
            party: PartyName::Liberal,
            yea: 155,
            nay: 0,
            abstain: 3,
        }]
    );
    assert_eq!(transport.paths(), vec!["GET /motions/1"]);
}

#[tokio::test]
async fn given_server_error_when_fetching_motion_by_id_then_none_is_returned() {
    let transport = ScriptedTransport::new();
    transport.text(HttpMethod::Get, "/motions/1", 500, "internal error");

    let motion = client(&transport)
        .get_motion_by_id("1")
        .await
        .expect("lookup failures read as absence");
    assert_eq!(motion, None);
}

#[tokio::test]
async fn given_mp_directory_when_listing_mps_then_records_are_normalized_without_query() {
    let transport = ScriptedTransport::new();
    transport.json(
        HttpMethod::Get,
        "/mps",
        200,
        json!([
            { "id": 1, "name": "John Smith", "riding": "Toronto Centre", "party": "Liberal" },
            { "id": "2", "name": "Marie Leclerc", "party": "NDP", "photo_url": null }
        ]),
    );

    let mps = client(&transport).get_mps().await.expect("directory loads");
    assert_eq!(mps.len(), 2);
    assert_eq!(mps[0].id, "1");
    assert_eq!(mps[0].party, PartyName::Liberal);
    assert_eq!(mps[0].riding, "Toronto Centre");
    assert_eq!(mps[1].id, "2");
    assert_eq!(mps[1].party, PartyName::Ndp);
    assert_eq!(mps[1].image_url.as_deref(), Some(PLACEHOLDER_IMAGE));

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert!(requests[0].query.is_empty());
    assert_eq!(transport.paths(), vec!["GET /mps"]);
}

#[tokio::test]
async fn given_server_error_when_listing_mps_then_error_carries_body() {
    let transport = ScriptedTransport::new();
    transport.text(HttpMethod::Get, "/mps", 502, "upstream down");

    let err = client(&transport)
        .get_mps()
        .await
        .expect_err("502 must fail");
    assert_eq!(err.kind, ApiErrorKind::HttpStatus);
    assert_eq!(err.status, Some(502));
    assert_eq!(err.message, "upstream down");
}

#[tokio::test]
async fn given_vote_when_cast_then_placeholder_voter_and_backend_vocabulary_are_posted() {
    let transport = ScriptedTransport::new();
    transport.json(HttpMethod::Post, "/motions/3/vote", 200, json!({ "ok": true }));

    client(&transport)
        .vote_on_motion("3", UserVote::Up)
        .await
        .expect("vote accepted");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(
        requests[0].body,
        Some(json!({ "mp_id": 1, "vote": "upvote" }))
    );
}

#[tokio::test]
async fn given_vote_rejected_when_cast_then_error_is_returned() {
    let transport = ScriptedTransport::new();
    transport.text(HttpMethod::Post, "/motions/3/vote", 500, "boom");

    let err = client(&transport)
        .vote_on_motion("3", UserVote::Down)
        .await
        .expect_err("500 must fail");
    assert_eq!(err.kind, ApiErrorKind::HttpStatus);
    assert_eq!(err.message, "failed to vote on motion");
    assert_eq!(err.status, Some(500));
}

#[tokio::test]
async fn given_postal_code_without_mp_when_looked_up_then_no_follow_up_fetch_happens() {
    let transport = ScriptedTransport::new();
    transport.json(
        HttpMethod::Get,
        "/lookup/postal-code/K1A 0A6",
        200,
        json!({ "postal_code": "K1A 0A6", "presumed_riding": "Ottawa Centre", "mp_id": null }),
    );

    let mp = client(&transport)
        .get_mp_by_postal_code("K1A 0A6")
        .await
        .expect("lookup succeeds");
    assert_eq!(mp, None);
    assert_eq!(transport.paths(), vec!["GET /lookup/postal-code/K1A 0A6"]);
}

#[tokio::test]
async fn given_postal_code_with_mp_when_looked_up_then_mp_is_fetched() {
    let transport = ScriptedTransport::new();
    transport.json(
        HttpMethod::Get,
        "/lookup/postal-code/H2X 1Y4",
        200,
        json!({ "postal_code": "H2X 1Y4", "mp_id": 42 }),
    );
    transport.json(
        HttpMethod::Get,
        "/mps/42",
        200,
        json!({ "id": 42, "name": "Marie Leclerc", "riding": "Laurier-Sainte-Marie", "party": "NDP" }),
    );

    let mp = client(&transport)
        .get_mp_by_postal_code("H2X 1Y4")
        .await
        .expect("lookup succeeds")
        .expect("mp resolved");
    assert_eq!(mp.id, "42");
    assert_eq!(mp.party, PartyName::Ndp);
    assert_eq!(
        transport.paths(),
        vec!["GET /lookup/postal-code/H2X 1Y4", "GET /mps/42"]
    );
}

#[tokio::test]
async fn given_sparse_mp_record_when_fetched_then_defaults_are_applied() {
    let transport = ScriptedTransport::new();
    transport.json(
        HttpMethod::Get,
        "/mps/5",
        200,
        json!({
            "id": 5,
            "name": "Sam Taylor",
            "party": "Reform",
            "photo_url": "",
            "attendance_rate": 104.2,
            "party_line_voting_rate": null
        }),
    );

    let mp = client(&transport)
        .get_mp_by_id("5")
        .await
        .expect("lookup succeeds")
        .expect("mp present");
    assert_eq!(mp.party, PartyName::Independent);
    assert_eq!(mp.image_url.as_deref(), Some(PLACEHOLDER_IMAGE));
    assert_eq!(mp.attendance_rate, 100.0);
    assert_eq!(mp.party_line_voting, 0.0);
    assert_eq!(mp.years_in_office, 0);
    assert_eq!(mp.riding, "");
}

#[tokio::test]
async fn given_search_query_when_searching_then_trimmed_query_is_sent_only_when_present() {
    let transport = ScriptedTransport::new();
    transport.json(
        HttpMethod::Get,
        "/mps",
        200,
        json!([{ "id": 1, "name": "John Smith", "party": "Liberal" }]),
    );

    let api = client(&transport);
    let found = api.search_mps("  smith ").await.expect("search succeeds");
    assert_eq!(found.len(), 1);
    api.search_mps("   ").await.expect("search succeeds");

    let requests = transport.requests();
    assert_eq!(
        requests[0].query,
        vec![("search".to_string(), "smith".to_string())]
    );
    assert!(requests[1].query.is_empty());
}

#[tokio::test]
async fn given_failing_history_endpoints_when_profile_data_loads_then_empty_results_are_returned() {
    let transport = ScriptedTransport::new();
    transport.text(HttpMethod::Get, "/mps/9/voting-record", 500, "oops");
    transport.unreachable(HttpMethod::Get, "/mps/9/speeches");
    transport.text(HttpMethod::Get, "/mps/9/spending", 200, "not json");
    transport.json(
        HttpMethod::Get,
        "/mps/9/transparency",
        200,
        json!({ "entries": [{ "registry_type": "gift", "filed_date": "yesterday" }] }),
    );

    let api = client(&transport);
    assert!(api.get_mp_votes("9").await.is_empty());
    assert!(api.get_mp_speeches("9").await.is_empty());
    assert!(api.get_mp_spending("9").await.is_empty());
    assert!(api.get_mp_transparency("9").await.is_empty());
    assert_eq!(api.get_mp_activity("9").await, None);
}

#[tokio::test]
async fn given_voting_record_when_fetched_then_ballots_are_normalized() {
    let transport = ScriptedTransport::new();
    transport.json(
        HttpMethod::Get,
        "/mps/9/voting-record",
        200,
        json!([
            {
                "motion_id": 1,
                "motion_title": "Bill C-15",
                "vote": "Yea",
                "date": "2024-11-15T18:30:00",
                "matched_party_line": true,
                "proposed_by_party": "Liberal",
                "motion_passed": true
            },
            { "id": "v2", "motion_id": 2, "motion_title": "Bill C-21", "vote": "nay" }
        ]),
    );

    let votes = client(&transport).get_mp_votes("9").await;
    assert_eq!(votes.len(), 2);
    assert_eq!(votes[0].id, "1");
    assert_eq!(votes[0].vote, BallotChoice::Yea);
    assert_eq!(votes[0].date, Some(date!(2024 - 11 - 15)));
    assert!(votes[0].matched_party_line);
    assert_eq!(votes[1].id, "v2");
    assert_eq!(votes[1].date, None);
    assert!(!votes[1].motion_passed);
}

#[tokio::test]
async fn given_long_speech_when_fetched_then_excerpt_is_cut_on_a_word_boundary() {
    let transport = ScriptedTransport::new();
    let content = "word ".repeat(80);
    transport.json(
        HttpMethod::Get,
        "/mps/9/speeches",
        200,
        json!([{ "id": 11, "title": "Budget debate", "content": content, "date": "2024-10-01" }]),
    );

    let speeches = client(&transport).get_mp_speeches("9").await;
    assert_eq!(speeches.len(), 1);
    let speech = &speeches[0];
    assert_eq!(speech.mp_id, "9");
    assert_eq!(speech.word_count, 80);
    assert!(speech.excerpt.ends_with("word…"), "{}", speech.excerpt);
    assert!(speech.excerpt.chars().count() <= 201);
}

#[tokio::test]
async fn given_spending_summary_when_fetched_then_shares_follow_the_total() {
    let transport = ScriptedTransport::new();
    transport.json(
        HttpMethod::Get,
        "/mps/9/spending",
        200,
        json!({
            "total_amount": 200000.0,
            "entries": [
                { "category": "Staff", "amount": 150000.0, "fiscal_year": "2024-25" },
                { "amount": 50000.0 }
            ]
        }),
    );
    transport.json(
        HttpMethod::Get,
        "/mps/10/spending",
        200,
        json!({ "total_amount": 0, "entries": [{ "category": "Travel", "amount": 10.0 }] }),
    );

    let api = client(&transport);
    let items = api.get_mp_spending("9").await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].percentage, 75.0);
    assert_eq!(items[0].fiscal_year.as_deref(), Some("2024-25"));
    assert_eq!(items[1].category, "Other");
    assert_eq!(items[1].percentage, 25.0);

    let items = api.get_mp_spending("10").await;
    assert_eq!(items[0].percentage, 0.0);
}

#[tokio::test]
async fn given_transparency_entries_when_fetched_then_unknown_types_are_skipped() {
    let transport = ScriptedTransport::new();
    transport.json(
        HttpMethod::Get,
        "/mps/9/transparency",
        200,
        json!({
            "filings_count": 3,
            "entries": [
                { "details": "Shares in Acme Corp" },
                { "registry_type": "GIFT", "details": "Hockey tickets", "value": "$400", "filed_date": "2024-06-01" },
                { "registry_type": "lobbying", "details": "skipped" }
            ]
        }),
    );

    let items = client(&transport).get_mp_transparency("9").await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].kind, DisclosureType::Stock);
    assert_eq!(items[1].kind, DisclosureType::Gift);
    assert_eq!(items[1].date, Some(date!(2024 - 06 - 01)));
}

#[tokio::test]
async fn given_activity_and_summary_endpoints_when_fetched_then_supplements_are_returned() {
    let transport = ScriptedTransport::new();
    transport.json(
        HttpMethod::Get,
        "/mps/9/parliamentary-activity",
        200,
        json!({ "speeches_count": 12, "motions_sponsored": 3 }),
    );
    transport.json(
        HttpMethod::Get,
        "/motions/1/ai-summary",
        200,
        json!({ "motion_id": 1, "summary": "Creates a relief fund." }),
    );

    let api = client(&transport);
    let activity = api.get_mp_activity("9").await.expect("activity present");
    assert_eq!((activity.speeches_count, activity.motions_sponsored), (12, 3));

    let summary = api
        .get_motion_summary("1")
        .await
        .expect("summary lookup")
        .expect("summary present");
    assert_eq!(summary.summary, "Creates a relief fund.");
    assert_eq!(api.get_motion_summary("2").await.expect("404 is none"), None);
}

#[tokio::test]
async fn given_missing_mp_and_broken_spending_when_fetched_then_absence_is_not_an_error() {
    let transport = ScriptedTransport::new();
    transport.text(HttpMethod::Get, "/mps/42/spending", 500, "internal error");

    let api = client(&transport);
    assert_eq!(api.get_mp_by_id("42").await.expect("404 is not an error"), None);
    assert!(api.get_mp_spending("42").await.is_empty());
}
