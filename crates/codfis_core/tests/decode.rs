use codfis_core::{
    BirthDate, Decoder, Gender, ParseError, PersonalData, PlaceDirectory, PlaceRecord,
    TaxCodeService,
};
use time::{Date, Month};

fn reference_date() -> Date {
    Date::from_calendar_date(2026, Month::October, 17).unwrap()
}

fn fixture_directory() -> PlaceDirectory {
    PlaceDirectory::new(
        vec![
            PlaceRecord::new("Milano", "F205"),
            PlaceRecord::new("Roma", "H501"),
            PlaceRecord::new("Borgo Vecchio (soppresso)", "A001"),
            PlaceRecord::new("Borgo Nuovo", "A001"),
            PlaceRecord::new("Valle Alta (soppresso)", "A002"),
            PlaceRecord::new("Valle Bassa (soppresso)", "A002"),
        ],
        vec![PlaceRecord::new("Francia", "Z110")],
    )
}

#[test]
fn decodes_reference_example() {
    let directory = fixture_directory();
    let decoded = Decoder::new(&directory)
        .with_reference_date(reference_date())
        .decode("RSSMRA80A01F205X")
        .expect("decode");

    assert_eq!(decoded.code, "RSSMRA80A01F205X");
    assert_eq!(decoded.gender, Gender::Male);
    assert_eq!(
        decoded.birthdate,
        BirthDate {
            year: 1980,
            month: 1,
            day: 1
        }
    );
    assert_eq!(decoded.birthplace, PlaceRecord::new("Milano", "F205"));
    assert_eq!(decoded.raw.surname, "RSS");
    assert_eq!(decoded.raw.name, "MRA");
    assert_eq!(decoded.raw.birthdate, "80A01");
    assert_eq!(decoded.raw.birthplace, "F205");
    assert_eq!(decoded.raw.cin, "X");
    assert_eq!(decoded.omocodes.len(), 8);
    assert_eq!(decoded.omocodes[0], "RSSMRA80A01F205X");
}

#[test]
fn decodes_female_and_lowercase_input() {
    let directory = fixture_directory();
    let decoded = Decoder::new(&directory)
        .with_reference_date(reference_date())
        .decode("rssmra70a41h501w")
        .expect("decode");
    assert_eq!(decoded.code, "RSSMRA70A41H501W");
    assert_eq!(decoded.gender, Gender::Female);
    assert_eq!(decoded.birthdate.day, 1);
    assert_eq!(decoded.birthdate.year, 1970);
    assert_eq!(decoded.birthplace.name, "Roma");
}

#[test]
fn future_years_move_back_one_century() {
    let directory = fixture_directory();
    let decoder = Decoder::new(&directory).with_reference_date(reference_date());

    let recent = decoder.decode("RSSMRA20A01F205J").expect("2020");
    assert_eq!(recent.birthdate.year, 2020);

    let old = decoder.decode("RSSMRA30A01F205L").expect("1930");
    assert_eq!(old.birthdate.year, 1930);
}

#[test]
fn round_trip_recovers_everything_but_names() {
    let directory = fixture_directory();
    let service = TaxCodeService::new(&directory).with_reference_date(reference_date());

    for (gender, birthdate, birthplace, expected_code) in [
        (Gender::Male, "1985-12-10", "Roma", "H501"),
        (Gender::Female, "2001-06-30", "Milano", "F205"),
        (Gender::Female, "1999-02-28", "h501", "H501"),
    ] {
        let data = PersonalData::new("Bianchi", "Giovanna", gender, birthdate, birthplace);
        let code = service.encode(&data).expect("encode");
        let decoded = service.decode(&code).expect("decode");

        let date = data.birthdate.resolve().expect("valid date");
        assert_eq!(decoded.gender, gender);
        assert_eq!(decoded.birthdate.to_date(), Some(date));
        assert_eq!(decoded.birthplace.code, expected_code);
    }
}

#[test]
fn soppresso_records_resolve_to_the_active_name() {
    let directory = fixture_directory();
    let decoder = Decoder::new(&directory).with_reference_date(reference_date());

    let code = format!("RSSMRA80A01A001{}", codfis_core::check_char("RSSMRA80A01A001"));
    let decoded = decoder.decode(&code).expect("decode");
    assert_eq!(decoded.birthplace, PlaceRecord::new("Borgo Nuovo", "A001"));

    let code = format!("RSSMRA80A01A002{}", codfis_core::check_char("RSSMRA80A01A002"));
    let decoded = decoder.decode(&code).expect("decode");
    assert_eq!(decoded.birthplace, PlaceRecord::new("Valle Bassa", "A002"));
}

#[test]
fn codes_of_people_born_abroad_round_trip() {
    let directory = fixture_directory();
    let service = TaxCodeService::new(&directory).with_reference_date(reference_date());

    let data = PersonalData::new("Rossi", "Mario", Gender::Male, "1980-01-01", "Francia");
    let code = service.encode(&data).expect("encode through country fallback");
    assert_eq!(code, "RSSMRA80A01Z110B");

    let decoded = service.decode(&code).expect("country code decodes");
    assert_eq!(decoded.birthplace, PlaceRecord::new("Francia", "Z110"));
    assert_eq!(decoded.gender, Gender::Male);
    assert_eq!(decoded.birthdate.to_date(), data.birthdate.resolve().ok());
}

#[test]
fn unknown_place_codes_are_parse_errors() {
    let directory = fixture_directory();
    let decoder = Decoder::new(&directory).with_reference_date(reference_date());
    let code = format!("RSSMRA80A01Z999{}", codfis_core::check_char("RSSMRA80A01Z999"));
    let err = decoder.decode(&code).expect_err("unknown place must fail");
    assert_eq!(err, ParseError::UnknownPlaceCode("Z999".to_string()));
    assert!(!decoder.is_valid(&code));
}

#[test]
fn malformed_codes_are_parse_errors() {
    let directory = fixture_directory();
    let decoder = Decoder::new(&directory);
    for code in [
        "not-a-real-code",
        "",
        "RSSMRA80A01F205",
        "RSSMRA80A01F205XX",
        "RSSMRA80F01F205X",
        "RSSMRA8AA01F205X",
        "RSSMRA80A01F2A5X",
        "RSSMRA80A01F2059",
    ] {
        let err = decoder.decode(code).expect_err("must fail");
        assert!(matches!(err, ParseError::Malformed(_)), "{code}");
        assert!(!decoder.is_valid(code), "{code}");
    }
}

#[test]
fn check_character_is_not_revalidated() {
    let directory = fixture_directory();
    let decoder = Decoder::new(&directory).with_reference_date(reference_date());
    let decoded = decoder.decode("RSSMRA80A01F205Y").expect("decode");
    assert_eq!(decoded.omocodes[0], "RSSMRA80A01F205X");
    assert!(!codfis_core::verify_check_char("RSSMRA80A01F205Y"));
}

#[test]
fn decoded_result_serializes_to_stable_json() {
    let directory = fixture_directory();
    let decoded = Decoder::new(&directory)
        .with_reference_date(reference_date())
        .decode("RSSMRA80A41F205B")
        .expect("decode");

    let json = serde_json::to_value(&decoded).expect("serialize");
    assert_eq!(json["code"], "RSSMRA80A41F205B");
    assert_eq!(json["gender"], "F");
    assert_eq!(json["birthdate"]["year"], 1980);
    assert_eq!(json["birthdate"]["day"], 1);
    assert_eq!(json["birthplace"]["name"], "Milano");
    assert_eq!(json["birthplace"]["code"], "F205");
    assert_eq!(json["raw"]["birthdate_day"], "41");
    assert_eq!(json["omocodes"].as_array().map(Vec::len), Some(8));
}
