//! Whole-record IJE encoding and decoding.

use vrdr_ije::{
    Binding, CodecOptions, FieldOrder, IJE_LENGTH, IjeError, IjeRecord, catalog, decode, encode,
};
use vrdr_model::{
    CodedValue, DatePart, DeathRecord, EntityAxisEntry, PartialDateTime, RaceCategory,
    RecordAxisEntry, TriState,
};
use vrdr_standards::tables;

/// The coded value a field reads for `ije`.
fn coded(field: &str, ije: &str) -> CodedValue {
    match catalog().get(field).unwrap().binding {
        Binding::Coded { table, .. } | Binding::CodedWithLiteral { table, .. } => {
            table.to_coded(ije).unwrap()
        }
        other => panic!("{field} is a {} field", other.kind()),
    }
}

fn date(year: i32, month: u32, day: u32) -> PartialDateTime {
    PartialDateTime::new(
        TriState::Known(year),
        TriState::Known(month),
        TriState::Known(day),
    )
}

fn populated() -> DeathRecord {
    let mut record = DeathRecord::new();
    let mut death_date = date(2019, 2, 19);
    death_date.decode_part(DatePart::Time, "1648").unwrap();
    record.set_death_date(Some(death_date));
    record.set_death_jurisdiction("MA");
    record.set_certificate_number(Some(1234)).unwrap();
    record.set_state_auxiliary_id("000000000042");

    record.set_given_name("Madelyn");
    record.set_middle_name("Ann");
    record.set_last_name("Patel");
    record.set_suffix("Jr");
    record.set_sex(Some(coded("SEX", "F")));
    record.set_ssn("123456789");
    record.set_age_unit(Some(coded("AGETYPE", "1")));
    record.set_age_value(Some(TriState::Known(45)));
    record.set_birth_date(Some(PartialDateTime::new(
        TriState::Known(1974),
        TriState::Known(7),
        TriState::ExplicitlyUnknown,
    )));
    record.set_birthplace_country("US");
    record.set_birthplace_state("NY");
    record.set_marital_status(Some(coded("MARITAL", "A")));
    record.set_education_level(Some(coded("DEDUC", "3")));
    record.set_race(&[
        (RaceCategory::White, "Y"),
        (RaceCategory::OtherRace, "Y"),
        (RaceCategory::FirstOtherRaceLiteral, "Lumbee"),
    ]);

    record.set_residence_city("Boston");
    record.set_residence_state("MA");
    record.set_residence_country("US");
    record.set_residence_street_name("Main");

    record.set_death_place_type(Some(coded("DPLACE", "7")));
    record.set_death_location_name("Example Hospital");
    record.set_injury_description("Fell from a ladder");
    record.set_transportation_role(Some(
        tables::TRANSPORTATION_ROLE
            .other()
            .unwrap()
            .to_coded()
            .with_text("Bicyclist"),
    ));
    record.set_injury_place(Some(coded("INJPL", "0")));
    record.set_autopsy_performed(Some(coded("AUTOP", "N")));

    record.set_cod_line_a("Acute myocardial infarction");
    record.set_cod_interval_a("minutes");
    record.set_cod_line_b("Coronary artery disease");
    record.set_contributing_conditions("Diabetes");
    record.set_manner_of_death(Some(coded("MANNER", "A")));
    record.set_certified_date(Some(date(2019, 2, 20)));

    record.set_manual_underlying_cause("I21.0");
    record.set_automated_underlying_cause("I21.0");
    record.set_entity_axis(Some(vec![
        EntityAxisEntry::new(1, 1, "I21.0", false),
        EntityAxisEntry::new(2, 1, "I25.1", false),
    ]));
    record.set_record_axis(Some(vec![
        RecordAxisEntry::new(1, "I21.0", false),
        RecordAxisEntry::new(2, "I25.1", false),
    ]));
    record.set_funeral_home_name("Ohlson Funeral Home");
    record
}

// =========================================================================
// Round trip
// =========================================================================

#[test]
fn test_populated_roundtrip() {
    let record = populated();
    let line = encode(&record, &CodecOptions::strict()).unwrap();
    assert_eq!(line.len(), IJE_LENGTH);
    assert_eq!(decode(&line, &CodecOptions::strict()).unwrap(), record);
}

#[test]
fn test_blank_record_roundtrip() {
    let line = encode(&DeathRecord::new(), &CodecOptions::lenient()).unwrap();
    assert_eq!(line.len(), IJE_LENGTH);
    assert!(decode(&line, &CodecOptions::lenient()).unwrap().is_empty());
}

#[test]
fn test_derived_fields_render() {
    let ije = IjeRecord::from_record(&populated(), &CodecOptions::strict()).unwrap();
    assert_eq!(ije.value("MNAME").unwrap(), "A");
    assert_eq!(ije.value("STATEBTH").unwrap(), "New York");
    assert_eq!(ije.value("STATETEXT_R").unwrap(), "Massachusetts");
    assert_eq!(ije.value("MAN_UC").unwrap(), "I210");
    assert_eq!(ije.value("TRANSPRT").unwrap(), "Bicyclist");
    assert_eq!(ije.value("CERTDATE").unwrap(), "02202019");
    assert_eq!(ije.value("TOD").unwrap(), "1648");
    assert_eq!(ije.value("DOB_DY").unwrap(), "99");
    assert_eq!(ije.value("AGE").unwrap(), "045");
}

#[test]
fn test_explicit_literal_survives() {
    let mut record = populated();
    record.set_birthplace_state_name("Nueva York");
    let line = encode(&record, &CodecOptions::strict()).unwrap();
    let back = decode(&line, &CodecOptions::strict()).unwrap();
    assert_eq!(back.birthplace_state_name(), Some("Nueva York"));
}

// =========================================================================
// Identifiers and control fields
// =========================================================================

#[test]
fn test_identifier_prefix() {
    let mut line = String::from("2016NE000115");
    line.push_str(&" ".repeat(IJE_LENGTH - line.len()));
    let record = decode(&line, &CodecOptions::strict()).unwrap();
    assert_eq!(record.identifier().to_string(), "2016NE000115");
    assert_eq!(record.certificate_number(), Some(115));

    let ije = IjeRecord::from_record(&record, &CodecOptions::strict()).unwrap();
    assert!(ije.as_str().starts_with("2016NE000115"));
    assert_eq!(ije.value("STATETEXT_D").unwrap(), "Nebraska");
    assert_eq!(ije.value("VOID").unwrap(), "1");
    assert_eq!(ije.value("ALIAS").unwrap(), "0");
}

#[test]
fn test_control_flags_reset_on_read() {
    let mut ije = IjeRecord::blank();
    ije.set_field("FILENO", "115").unwrap();
    ije.set_field("VOID", "0").unwrap();
    ije.set_field("ALIAS", "1").unwrap();

    let record = ije.to_record(&CodecOptions::strict()).unwrap();
    let back = IjeRecord::from_record(&record, &CodecOptions::strict()).unwrap();
    assert_eq!(back.value("VOID").unwrap(), "1");
    assert_eq!(back.value("ALIAS").unwrap(), "0");
    assert_eq!(back.value("FILENO").unwrap(), "000115");
}

#[test]
fn test_replacement_flag_rejected_in_both_modes() {
    let mut ije = IjeRecord::blank();
    ije.set_field("REPLACE", "1").unwrap();
    for options in [CodecOptions::strict(), CodecOptions::lenient()] {
        let err = ije.to_record(&options).unwrap_err();
        assert!(matches!(err, IjeError::LegacySchema { field: "REPLACE", .. }));
    }
    ije.set_field("REPLACE", "0").unwrap();
    assert!(ije.to_record(&CodecOptions::strict()).is_ok());
}

// =========================================================================
// Validation modes
// =========================================================================

#[test]
fn test_unmapped_value_strict_vs_lenient() {
    let mut record = populated();
    record.set_marital_status(Some(CodedValue::new("X", "urn:example", "Unheard of")));

    let err = encode(&record, &CodecOptions::strict()).unwrap_err();
    assert!(matches!(err, IjeError::Mapping { field: "MARITAL", .. }));

    let line = encode(&record, &CodecOptions::lenient()).unwrap();
    let ije = IjeRecord::parse(&line).unwrap();
    assert_eq!(ije.value("MARITAL").unwrap(), "");
    assert_eq!(ije.value("GNAME").unwrap(), "Madelyn");
}

#[test]
fn test_bad_field_text_strict_vs_lenient() {
    let mut ije = IjeRecord::from_record(&populated(), &CodecOptions::strict()).unwrap();
    ije.set_field("SEX", "Q").unwrap();
    ije.set_field("DOD_MO", "13").unwrap();

    let err = ije.to_record(&CodecOptions::strict()).unwrap_err();
    assert!(matches!(err, IjeError::Mapping { field: "SEX", .. } | IjeError::Range { field: "DOD_MO", .. }));

    let record = ije.to_record(&CodecOptions::lenient()).unwrap();
    assert_eq!(record.sex(), None);
    assert_eq!(record.given_name(), Some("Madelyn"));
    assert_eq!(record.death_date().unwrap().year, TriState::Known(2019));
}

#[test]
fn test_unknown_jurisdiction_strict() {
    let mut record = DeathRecord::new();
    record.set_death_jurisdiction("QQ");
    assert!(matches!(
        encode(&record, &CodecOptions::strict()),
        Err(IjeError::Mapping { field: "DSTATE", .. })
    ));
}

// =========================================================================
// Record access
// =========================================================================

#[test]
fn test_dump_orders() {
    let ije = IjeRecord::from_record(&populated(), &CodecOptions::strict()).unwrap();
    let by_position = ije.dump(FieldOrder::Position);
    assert_eq!(by_position.len(), catalog().len());
    assert_eq!(by_position[0], ("DOD_YR", "2019"));

    let by_priority = ije.dump(FieldOrder::Priority);
    let name_at = |name: &str| by_priority.iter().position(|(n, _)| *n == name).unwrap();
    assert!(name_at("FILENO") < name_at("GNAME"));
    assert!(name_at("GNAME") < name_at("MANNER"));
}

#[test]
fn test_parse_accepts_display_output() {
    let ije = IjeRecord::from_record(&populated(), &CodecOptions::strict()).unwrap();
    let reparsed: IjeRecord = ije.to_string().parse().unwrap();
    assert_eq!(reparsed, ije);
}
