use chrono::NaiveDate;
use dmap_model::{Party, PartyDetail, PrimaryRecord, Region, RegionId};

fn wyoming_gop() -> PrimaryRecord {
    PrimaryRecord {
        region_name: "Wyoming".to_string(),
        date: NaiveDate::from_ymd_opt(2016, 3, 1).unwrap(),
        primary_type: "caucus".to_string(),
        delegates: 29,
        detail: PartyDetail::Republican {
            method: "winner-take-all".to_string(),
        },
    }
}

#[test]
fn record_party_follows_detail_variant() {
    let record = wyoming_gop();
    assert_eq!(record.party(), Party::Republican);
    assert_eq!(record.display_date(), "2016-03-01");
}

#[test]
fn record_serializes_with_party_tag() {
    let json = serde_json::to_value(wyoming_gop()).expect("serialize record");
    assert_eq!(json["detail"]["party"], "republican");
    assert_eq!(json["detail"]["method"], "winner-take-all");
    assert_eq!(json["date"], "2016-03-01");
}

#[test]
fn region_id_deserializes_from_number_or_string() {
    let from_number: Region =
        serde_json::from_str(r#"{"id": 56, "code": "WY", "name": "Wyoming"}"#).unwrap();
    let from_string: Region =
        serde_json::from_str(r#"{"id": "56", "code": "WY", "name": "Wyoming"}"#).unwrap();
    assert_eq!(from_number.id, RegionId::new(56));
    assert_eq!(from_number, from_string);
}
