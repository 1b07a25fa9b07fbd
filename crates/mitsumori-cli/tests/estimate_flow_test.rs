//! End-to-end estimate flow against a fixture tariff file
//!
//! Exercises the same path the `estimate` command takes: open the tariff,
//! build the same-region table, price the request, record it, and read the
//! recorded history back from disk.

use std::path::PathBuf;

use mitsumori_app::estimate_service::{self, EstimateServiceError};
use mitsumori_app::repository;
use mitsumori_domain::model::{Customer, EstimateRequest, PackageSelection};
use mitsumori_types::Error;

const FIXTURE_TARIFF: &str = r#"
[[prefectures]]
prefecture_id = "13"
prefecture_name = "東京都"

[[prefectures]]
prefecture_id = "14"
prefecture_name = "神奈川県"

[[distances]]
prefecture_id_from = "13"
prefecture_id_to = "14"
distance_km = 30.0

[[packages]]
package_id = "BOX"
package_name = "段ボール"
boxes_per_unit = 1

[[packages]]
package_id = "BED"
package_name = "ベッド"
boxes_per_unit = 2

[[truck_tiers]]
truck_name = "2t"
max_boxes = 10
price_yen = 15000

[[truck_tiers]]
truck_name = "4t"
max_boxes = 200
price_yen = 25000

[[optional_services]]
service_id = "1"
service_name = "洗濯機設置"
price_yen = 7500
"#;

fn write_fixture_tariff(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("tariff.toml");
    std::fs::write(&path, FIXTURE_TARIFF).unwrap();
    path
}

fn customer() -> Customer {
    Customer {
        customer_name: "佐藤花子".to_string(),
        tel: "090-1111-2222".to_string(),
        email: "hanako@example.com".to_string(),
        old_prefecture_id: "13".to_string(),
        new_prefecture_id: "13".to_string(),
        old_address: "新宿区1-1".to_string(),
        new_address: "世田谷区2-2".to_string(),
    }
}

#[test]
fn estimate_is_priced_and_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let reference = repository::open_reference_repo_at(write_fixture_tariff(dir.path())).unwrap();
    let same_region = repository::same_region_table(&reference);
    let recorder = repository::open_recorder_at(dir.path().join("store")).unwrap();

    // Tokyo to Tokyo, 3 beds = 6 boxes, one optional service
    let request = EstimateRequest {
        old_prefecture_id: "13".to_string(),
        new_prefecture_id: "13".to_string(),
        packages: vec![PackageSelection {
            package_id: "BED".to_string(),
            quantity: 3,
        }],
        option_services: vec!["1".to_string()],
    };

    let outcome =
        estimate_service::price_and_record(&reference, &same_region, &recorder, &customer(), &request)
            .unwrap();

    assert_eq!(outcome.result.distance_km, 50.0);
    assert_eq!(outcome.result.total_boxes, 6);
    assert_eq!(outcome.result.truck_price_yen, 15000);
    assert_eq!(outcome.result.option_price_yen, 7500);
    assert_eq!(outcome.result.total_price_yen, 22500);

    // The recorded request survives a fresh open of the store
    let customer_id = outcome.customer_id.unwrap();
    let reopened = repository::open_recorder_at(dir.path().join("store")).unwrap();
    let record = reopened.find_by_id(customer_id).unwrap();
    assert_eq!(record.customer.customer_name, "佐藤花子");
    assert_eq!(record.option_services, vec!["1".to_string()]);
    assert_eq!(record.packages, vec![("BED".to_string(), 3)]);
    assert_eq!(record.result.unwrap().total_price_yen, 22500);
}

#[test]
fn missing_distance_row_degrades_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let reference = repository::open_reference_repo_at(write_fixture_tariff(dir.path())).unwrap();
    let same_region = repository::same_region_table(&reference);

    // No row exists for 13-27; pricing still succeeds at the 50 km default
    let request = EstimateRequest {
        old_prefecture_id: "13".to_string(),
        new_prefecture_id: "27".to_string(),
        packages: Vec::new(),
        option_services: Vec::new(),
    };

    let result = estimate_service::price_only(&reference, &same_region, &request).unwrap();
    assert_eq!(result.distance_km, 50.0);
}

#[test]
fn oversized_load_is_rejected_and_not_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let reference = repository::open_reference_repo_at(write_fixture_tariff(dir.path())).unwrap();
    let same_region = repository::same_region_table(&reference);
    let recorder = repository::open_recorder_at(dir.path().join("store")).unwrap();

    let request = EstimateRequest {
        old_prefecture_id: "13".to_string(),
        new_prefecture_id: "14".to_string(),
        packages: vec![PackageSelection {
            package_id: "BOX".to_string(),
            quantity: 201,
        }],
        option_services: Vec::new(),
    };

    let err =
        estimate_service::price_and_record(&reference, &same_region, &recorder, &customer(), &request)
            .unwrap_err();
    assert!(matches!(
        err,
        EstimateServiceError::Pricing(Error::NoCapacityAvailable(201))
    ));
    assert_eq!(recorder.count(), 0);
}
