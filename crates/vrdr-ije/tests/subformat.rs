//! TRX and MRE coding responses.

use vrdr_ije::{CodecOptions, IjeRecord, MRE, MreRecord, SUBFORMAT_LENGTH, TRX, TrxRecord};
use vrdr_model::{DeathRecord, PartialDateTime, RaceCategory, TriState};
use vrdr_standards::tables;

fn line_with(fields: &[(usize, &str)]) -> String {
    let mut line = " ".repeat(SUBFORMAT_LENGTH);
    for (offset, text) in fields {
        line.replace_range(*offset..offset + text.len(), text);
    }
    line
}

fn coding_response() -> String {
    line_with(&[
        (0, "2016MA578660"),
        (41, "A"),
        (45, "I210"),
        (50, "I210"),
        (55, "11I210  21I251  "),
        (216, "I210 I251 "),
        (316, "Y"),
        (318, "N"),
    ])
}

fn registered() -> DeathRecord {
    let mut record = DeathRecord::new();
    record.set_death_date(Some(PartialDateTime::new(
        TriState::Known(2016),
        TriState::Known(3),
        TriState::Known(11),
    )));
    record.set_death_jurisdiction("MA");
    record.set_certificate_number(Some(578_660)).unwrap();
    record.set_given_name("Madelyn");
    record.set_last_name("Patel");
    record
}

// =========================================================================
// TRX
// =========================================================================

#[test]
fn test_trx_decode_and_reencode() {
    let trx = TrxRecord::parse(&coding_response()).unwrap();
    let record = trx.to_record(&CodecOptions::strict()).unwrap();

    assert_eq!(record.identifier().to_string(), "2016MA578660");
    assert_eq!(
        record.manner_of_death(),
        tables::MANNER_OF_DEATH.to_coded("A")
    );
    assert_eq!(record.autopsy_performed().unwrap().code(), "Y");
    assert_eq!(record.manual_underlying_cause(), Some("I21.0"));
    assert_eq!(record.entity_axis().unwrap().len(), 2);

    let again = TrxRecord::from_record(&record, &CodecOptions::strict()).unwrap();
    assert_eq!(again, trx);
}

#[test]
fn test_trx_apply_keeps_uncarried_data() {
    let mut record = registered();
    let trx = TrxRecord::parse(&coding_response()).unwrap();
    trx.apply_to(&mut record, &CodecOptions::strict()).unwrap();

    assert_eq!(record.given_name(), Some("Madelyn"));
    assert_eq!(record.death_date().unwrap().day, TriState::Known(11));
    assert_eq!(record.automated_underlying_cause(), Some("I21.0"));
    assert_eq!(record.record_axis().unwrap()[1].code, "I25.1");
}

#[test]
fn test_trx_carried_values_snapshot() {
    let mut record = registered();
    record.set_manner_of_death(tables::MANNER_OF_DEATH.to_coded("A"));
    record.set_autopsy_performed(tables::YES_NO_UNKNOWN.to_coded("Y"));
    record.set_manual_underlying_cause("I21.0");

    let trx = TrxRecord::from_record(&record, &CodecOptions::strict()).unwrap();
    let listing: Vec<String> = TRX
        .carried_fields()
        .filter_map(|name| {
            let value = trx.value(name).unwrap();
            (!value.is_empty()).then(|| format!("{name}={value}"))
        })
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r"
    DOD_YR=2016
    DSTATE=MA
    FILENO=578660
    MANNER=A
    MAN_UC=I210
    AUTOP=Y
    ");
}

#[test]
fn test_trx_merge_into_ije() {
    let mut ije = IjeRecord::from_record(&registered(), &CodecOptions::strict()).unwrap();
    TRX.merge_into(&mut ije, &coding_response()).unwrap();
    assert_eq!(ije.value("GNAME").unwrap(), "Madelyn");
    assert_eq!(ije.value("MANNER").unwrap(), "A");
    assert_eq!(ije.value("DOD_MO").unwrap(), "03");
}

// =========================================================================
// MRE
// =========================================================================

#[test]
fn test_mre_merge() {
    let mut record = registered();
    record.set_race(&[(RaceCategory::White, "Y")]);
    let mre = MreRecord::parse(&line_with(&[
        (0, "2016MA578660"),
        (15, "N"),
        (16, "N"),
        (17, "N"),
        (18, "N"),
        (39, "Y"),
        (294, "100"),
        (342, "100"),
    ]))
    .unwrap();
    mre.apply_to(&mut record, &CodecOptions::strict()).unwrap();

    assert_eq!(record.given_name(), Some("Madelyn"));
    assert_eq!(record.coded_race(), vec!["100".to_string()]);
    assert_eq!(record.hispanic_code(), Some("100"));
    assert_eq!(
        record.ethnicity_mexican(),
        tables::HISPANIC_ORIGIN.to_coded("N")
    );
    assert_eq!(record.race(), vec![(RaceCategory::White, "Y".to_string())]);
}

#[test]
fn test_mre_extract_from_ije() {
    let mut ije = IjeRecord::blank();
    ije.set_field("RACE1E", "100").unwrap();
    ije.set_field("RACE23C", "B99").unwrap();
    ije.set_field("GNAME", "Madelyn").unwrap();
    let mre = MreRecord::from_ije(&ije);
    assert_eq!(mre.value("RACE1E").unwrap(), "100");
    assert_eq!(&mre.as_str()[339..342], "B99");
    assert!(mre.value("GNAME").is_err());
    assert_eq!(MRE.to_ije(mre.as_str()).unwrap().value("RACE23C").unwrap(), "B99");
}
