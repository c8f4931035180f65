use jobhub_core::{normalize, normalize_all, Posting};
use serde_json::json;

#[test]
fn fields_are_renamed_one_to_one() {
    let record = json!({
        "id": 1,
        "date_posted": "Jan 5",
        "title": "Engineer",
        "company": "Acme",
        "location": "BC",
        "job_url": "https://x/1",
        "city": "Vancouver",
        "job_type": "Full-time"
    });

    assert_eq!(
        normalize(&record),
        Posting {
            id: Some(1),
            date: Some("Jan 5".to_string()),
            position: Some("Engineer".to_string()),
            company: Some("Acme".to_string()),
            location: Some("BC".to_string()),
            link: Some("https://x/1".to_string()),
        }
    );
}

#[test]
fn missing_fields_stay_absent() {
    let posting = normalize(&json!({ "id": 9, "title": "Data Analyst" }));

    assert_eq!(posting.id, Some(9));
    assert_eq!(posting.position.as_deref(), Some("Data Analyst"));
    assert_eq!(posting.date, None);
    assert_eq!(posting.company, None);
    assert_eq!(posting.location, None);
    assert_eq!(posting.link, None);
}

#[test]
fn link_is_not_validated() {
    let posting = normalize(&json!({ "job_url": "not a url" }));
    assert_eq!(posting.link.as_deref(), Some("not a url"));
}

#[test]
fn order_is_preserved() {
    let records: Vec<_> = (0..25)
        .rev()
        .map(|id| json!({ "id": id, "title": format!("Role {id}") }))
        .collect();

    let postings = normalize_all(&records);

    assert_eq!(postings.len(), records.len());
    for (record, posting) in records.iter().zip(&postings) {
        assert_eq!(posting.id, record["id"].as_i64());
        assert_eq!(posting.position.as_deref(), record["title"].as_str());
    }
}

#[test]
fn empty_input_normalizes_to_empty_collection() {
    assert!(normalize_all(&[]).is_empty());
}
