//! Field independence and value round trips across the whole catalog.

use proptest::prelude::*;
use vrdr_ije::{Binding, CodecOptions, FieldDescriptor, IjeRecord, Justify, catalog};
use vrdr_model::{DatePart, DeathRecord};

/// A decodable sample for a field, exactly `width` characters.
fn sample(field: &FieldDescriptor) -> String {
    let width = field.width;
    let raw = match field.binding {
        Binding::Text(_) => field.name.chars().take(width).collect(),
        Binding::Digits(_) => "578660".to_string(),
        Binding::Coded { table, .. } => table.rows().last().unwrap().ije.to_string(),
        Binding::CodedWithLiteral { .. } => "Bicyclist".to_string(),
        Binding::DatePart { part, .. } => match part {
            DatePart::Year => "2019".to_string(),
            DatePart::Month => "02".to_string(),
            DatePart::Day => "19".to_string(),
            DatePart::Time => "1648".to_string(),
        },
        Binding::FullDate(_) => "02192019".to_string(),
        Binding::Quantity(_) => "045".to_string(),
        Binding::Jurisdiction(_) => "NE".to_string(),
        Binding::Country(_) => "CA".to_string(),
        Binding::PlaceName { .. } => format!("Lit {}", field.name),
        Binding::Initial { .. } => "Q".to_string(),
        Binding::Icd10(_) => "I251".to_string(),
        Binding::EntityAxis(_) => "11I210  21I251  ".to_string(),
        Binding::RecordAxis(_) => "I210 I251 ".to_string(),
        Binding::Race(category) if category.is_literal() => format!("R {}", field.name),
        Binding::Race(_) => "Y".to_string(),
        Binding::Control(reset) => reset.to_string(),
        Binding::Legacy => String::new(),
    };
    let raw: String = raw.chars().take(width).collect();
    match field.justify {
        Justify::Right => format!("{raw:0>width$}"),
        Justify::Left => format!("{raw:<width$}"),
    }
}

#[test]
fn test_samples_roundtrip_alone() {
    let options = CodecOptions::strict();
    for field in catalog().fields() {
        let text = sample(field);
        let mut record = DeathRecord::new();
        field.decode(&text, &mut record, &options).unwrap();
        assert_eq!(field.encode(&record, &options).unwrap(), text, "{}", field.name);
    }
}

#[test]
fn test_fields_do_not_interfere() {
    let options = CodecOptions::strict();
    let fields = catalog().fields();
    for field in fields {
        let text = sample(field);
        let mut record = DeathRecord::new();
        field.decode(&text, &mut record, &options).unwrap();
        for other in fields.iter().filter(|f| f.name != field.name) {
            other.decode(&sample(other), &mut record, &options).unwrap();
        }
        assert_eq!(
            field.encode(&record, &options).unwrap(),
            text,
            "{} changed by later fields",
            field.name
        );
    }
}

#[test]
fn test_every_sample_at_once() {
    let mut ije = IjeRecord::blank();
    for field in catalog().fields() {
        ije.set_field(field.name, &sample(field)).unwrap();
    }
    let record = ije.to_record(&CodecOptions::strict()).unwrap();
    let back = IjeRecord::from_record(&record, &CodecOptions::strict()).unwrap();
    assert_eq!(back, ije);
}

#[test]
fn test_jurisdiction_blocks_survive_roundtrip() {
    let values = [
        ("PLACE1_1", "A"),
        ("PLACE1_6", "Z"),
        ("PLACE8_1", "ABCD1234"),
        ("PLACE8_3", "X9"),
        ("PLACE20", "county override"),
        ("BPLACEC_ST_TER", "NY"),
        ("BPLACEC_CNT", "MX"),
        ("EMERGREG", "Y"),
        ("SPEVENT", "COVID-19 surge"),
        ("CERTL", "M"),
        ("TOI_UNIT", "M"),
    ];
    let mut ije = IjeRecord::blank();
    for (name, value) in values {
        ije.set_field(name, value).unwrap();
    }
    let options = CodecOptions::strict();
    let record = ije.to_record(&options).unwrap();
    assert_eq!(record.jurisdiction_flag(0), Some("A"));
    assert_eq!(record.jurisdiction_flag(5), Some("Z"));
    assert_eq!(record.jurisdiction_code(2), Some("X9"));
    assert_eq!(record.jurisdiction_text(), Some("county override"));
    assert_eq!(record.coded_birthplace_state(), Some("NY"));
    assert_eq!(record.special_event(), Some("COVID-19 surge"));
    assert_eq!(
        record.certifier_type().map(|v| v.code().to_string()),
        Some("455381000124103".to_string())
    );

    let back = IjeRecord::from_record(&record, &options).unwrap();
    for (name, value) in values {
        assert_eq!(back.value(name).unwrap(), value, "{name}");
    }
}

fn text_field() -> impl Strategy<Value = &'static FieldDescriptor> {
    let fields: Vec<_> = catalog()
        .fields()
        .iter()
        .filter(|f| matches!(f.binding, Binding::Text(_)))
        .collect();
    proptest::sample::select(fields)
}

proptest! {
    #[test]
    fn prop_text_fields_roundtrip(field in text_field(), value in "[A-Za-z0-9][A-Za-z0-9 ,.'-]{0,40}") {
        let Binding::Text(slot) = field.binding else { unreachable!() };
        let options = CodecOptions::strict();
        let mut record = DeathRecord::new();
        record.set_text(slot, &value);
        let expected: String = value.chars().take(field.width).collect();
        let expected = expected.trim_end();

        let text = field.encode(&record, &options).unwrap();
        prop_assert_eq!(text.len(), field.width);

        let mut back = DeathRecord::new();
        field.decode(&text, &mut back, &options).unwrap();
        prop_assert_eq!(back.text(slot), Some(expected));
    }

    #[test]
    fn prop_certificate_number_roundtrip(number in 0u32..=999_999) {
        let options = CodecOptions::strict();
        let mut record = DeathRecord::new();
        record.set_certificate_number(Some(number)).unwrap();
        let ije = IjeRecord::from_record(&record, &options).unwrap();
        prop_assert_eq!(ije.field("FILENO").unwrap(), format!("{number:06}"));
        prop_assert_eq!(ije.to_record(&options).unwrap().certificate_number(), Some(number));
    }
}
