use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use clinicdesk_core::models::{
    holiday::{ClinicHoliday, HolidayListItem, ModuleType},
    session::ClinicSession,
};
use clinicdesk_db::models::{DbClinicHoliday, DbClinicSession, DbHolidayListing};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn holiday_row(module_type: &str) -> DbClinicHoliday {
    DbClinicHoliday {
        id: 1,
        module_type: module_type.to_string(),
        module_id: 7,
        start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
        description: Some("Renovation".to_string()),
        status: 1,
        created_at: Utc.with_ymd_and_hms(2024, 2, 20, 8, 0, 0).unwrap(),
    }
}

#[rstest]
#[case("doctor", ModuleType::Doctor)]
#[case("clinic", ModuleType::Clinic)]
fn test_holiday_row_conversion(#[case] raw: &str, #[case] expected: ModuleType) {
    let holiday = ClinicHoliday::try_from(holiday_row(raw)).unwrap();

    assert_eq!(holiday.module_type, expected);
    assert_eq!(holiday.module_id, 7);
    assert_eq!(holiday.description.as_deref(), Some("Renovation"));
}

#[test]
fn test_holiday_row_with_unknown_module_fails() {
    assert!(ClinicHoliday::try_from(holiday_row("ward")).is_err());
}

#[test]
fn test_listing_without_resolved_name_uses_empty_name() {
    let row = DbHolidayListing {
        id: 2,
        module_type: "doctor".to_string(),
        module_id: 3,
        name: None,
        start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        description: None,
        status: 1,
        created_at: Utc.with_ymd_and_hms(2024, 2, 20, 8, 0, 0).unwrap(),
    };

    let item = HolidayListItem::try_from(row).unwrap();

    assert_eq!(item.name, "");
    assert_eq!(item.module_type, ModuleType::Doctor);
}

#[test]
fn test_session_row_conversion_keeps_parent() {
    let row = DbClinicSession {
        id: 12,
        clinic_id: 7,
        doctor_id: 3,
        day: "mon".to_string(),
        start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        time_slot: 15,
        parent_id: Some(11),
    };

    let session = ClinicSession::from(row);

    assert_eq!(session.parent_id, Some(11));
    assert_eq!(session.time_slot, 15);
}
