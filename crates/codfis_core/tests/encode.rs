use codfis_core::{
    encode, install_directory, EncodeError, Encoder, Gender, PersonalData, PlaceDirectory,
    PlaceRecord,
};
use time::{Date, Month};

fn mario_rossi(gender: Gender, birthplace: &str) -> PersonalData {
    PersonalData::new("Rossi", "Mario", gender, "1980-01-01", birthplace)
}

fn fixture_directory() -> PlaceDirectory {
    PlaceDirectory::new(
        vec![
            PlaceRecord::new("Milano", "F205"),
            PlaceRecord::new("Forlì", "D704"),
        ],
        vec![PlaceRecord::new("Francia", "Z110")],
    )
}

fn install_fixture() {
    install_directory(fixture_directory()).expect("identical tables install idempotently");
}

#[test]
fn encodes_reference_example() {
    install_fixture();
    let code = encode(&mario_rossi(Gender::Male, "Milano")).expect("encode");
    assert_eq!(code, "RSSMRA80A01F205X");
    assert!(code.starts_with("RSSMRA80A01"));
}

#[test]
fn female_day_is_shifted_by_forty() {
    install_fixture();
    let male = encode(&mario_rossi(Gender::Male, "Milano")).expect("encode male");
    let female = encode(&mario_rossi(Gender::Female, "Milano")).expect("encode female");
    assert_eq!(female, "RSSMRA80A41F205B");
    assert_eq!(&male[..9], &female[..9]);
    assert_eq!(&male[9..11], "01");
    assert_eq!(&female[9..11], "41");
    assert_eq!(&male[11..15], &female[11..15]);
}

#[test]
fn accepts_date_values_and_place_codes() {
    let directory = fixture_directory();
    let encoder = Encoder::new(&directory);
    let birthdate = Date::from_calendar_date(1980, Month::January, 1).unwrap();
    let data = PersonalData::new("Rossi", "Mario", Gender::Male, birthdate, "f205");
    assert_eq!(encoder.encode(&data).expect("encode"), "RSSMRA80A01F205X");
}

#[test]
fn birthplace_matching_ignores_accents_and_case() {
    let directory = fixture_directory();
    let encoder = Encoder::new(&directory);
    let accented = encoder
        .encode(&mario_rossi(Gender::Male, "Forlì"))
        .expect("accented");
    let plain = encoder
        .encode(&mario_rossi(Gender::Male, "FORLI"))
        .expect("plain");
    assert_eq!(accented, plain);
    assert_eq!(&accented[11..15], "D704");
}

#[test]
fn falls_back_to_countries() {
    let directory = fixture_directory();
    let code = Encoder::new(&directory)
        .encode(&mario_rossi(Gender::Male, "Francia"))
        .expect("encode");
    assert_eq!(&code[11..15], "Z110");
}

#[test]
fn encoding_is_deterministic() {
    install_fixture();
    let data = PersonalData::new("Verdi", "Giuseppe", Gender::Male, "10/10/1913", "Milano");
    let first = encode(&data).expect("first");
    let second = encode(&data).expect("second");
    assert_eq!(first, second);
    assert_eq!(&first[..11], "VRDGPP13R10");
}

#[test]
fn missing_attributes_are_missing_data() {
    let directory = fixture_directory();
    let encoder = Encoder::new(&directory);

    let mut data = mario_rossi(Gender::Male, "Milano");
    data.surname = String::new();
    let err = encoder.encode(&data).unwrap_err();
    assert_eq!(err, EncodeError::MissingField("surname"));
    assert!(err.is_missing_data());

    let data = PersonalData::new("Rossi", "Mario", Gender::Male, "", "Milano");
    assert_eq!(
        encoder.encode(&data).unwrap_err(),
        EncodeError::MissingField("birthdate")
    );

    let err = encoder
        .encode(&mario_rossi(Gender::Male, "Atlantide"))
        .unwrap_err();
    assert_eq!(err, EncodeError::PlaceNotFound("Atlantide".to_string()));
    assert!(err.is_missing_data());
    assert_eq!(err.to_string(), "no code found for Atlantide");
}

#[test]
fn unparsable_birthdate_is_rejected() {
    let directory = fixture_directory();
    let data = PersonalData::new("Rossi", "Mario", Gender::Male, "1980-02-31", "Milano");
    let err = Encoder::new(&directory).encode(&data).unwrap_err();
    assert_eq!(err, EncodeError::InvalidBirthdate("1980-02-31".to_string()));
    assert!(!err.is_missing_data());
}
