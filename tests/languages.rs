//! Behavior of the built-in languages through the public entry point.

use written_number::{written_number, Language, Options};

fn words(n: u128, language: Language) -> String {
    written_number(n, &Options::new(language)).unwrap()
}

#[test]
fn english_reference_forms() {
    let cases = [
        (0, "zero"),
        (13, "thirteen"),
        (21, "twenty-one"),
        (100, "one hundred"),
        (101, "one hundred and one"),
        (1_000, "one thousand"),
        (1_001, "one thousand and one"),
        (1_234, "one thousand two hundred and thirty-four"),
        (203_000, "two hundred three thousand"),
        (1_000_000, "one million"),
        (
            999_999_999,
            concat!(
                "nine hundred ninety-nine million ",
                "nine hundred ninety-nine thousand ",
                "nine hundred and ninety-nine"
            ),
        ),
    ];
    for (n, expected) in cases {
        assert_eq!(words(n, Language::English), expected, "{n}");
    }
}

#[test]
fn english_without_and() {
    let options = Options::default().with_no_and(true);
    assert_eq!(
        written_number(1_234, &options).unwrap(),
        "one thousand two hundred thirty-four"
    );
}

#[test]
fn indonesian_drops_the_prefix_for_one() {
    assert_eq!(words(0, Language::Indonesian), "nol");
    assert_eq!(words(100, Language::Indonesian), "seratus");
    assert_eq!(words(1_000, Language::Indonesian), "seribu");
    assert_eq!(words(1_100, Language::Indonesian), "seribu seratus");
    assert_eq!(words(2_000, Language::Indonesian), "dua ribu");
    assert_eq!(
        words(123_456, Language::Indonesian),
        "seratus dua puluh tiga ribu empat ratus lima puluh enam"
    );
}

#[test]
fn spanish_irregular_hundreds_and_apocopation() {
    assert_eq!(words(1, Language::Spanish), "uno");
    assert_eq!(words(100, Language::Spanish), "cien");
    assert_eq!(words(101, Language::Spanish), "ciento uno");
    assert_eq!(words(1_100, Language::Spanish), "mil cien");
    assert_eq!(words(21_000, Language::Spanish), "veintiún mil");
    assert_eq!(words(31_000, Language::Spanish), "treinta y un mil");
    assert_eq!(words(121_000, Language::Spanish), "ciento veintiún mil");
    assert_eq!(words(1_000_000, Language::Spanish), "un millón");
}

#[test]
fn spanish_long_scale_counts_millions_up_to_a_million() {
    assert_eq!(words(2_000_000_000, Language::Spanish), "dos mil millones");
    assert_eq!(words(1_000_000_000_000, Language::Spanish), "un billón");
}

#[test]
fn portuguese_inserts_e_before_trailing_content() {
    assert_eq!(words(121, Language::BrazilianPortuguese), "cento e vinte e um");
    assert_eq!(words(1_100, Language::BrazilianPortuguese), "mil e cem");
    assert_eq!(words(2_300, Language::BrazilianPortuguese), "dois mil e trezentos");
    assert_eq!(
        words(2_350, Language::BrazilianPortuguese),
        "dois mil trezentos e cinquenta"
    );
    assert_eq!(words(16, Language::EuropeanPortuguese), "dezasseis");
    assert_eq!(words(1_000_000_000_000, Language::EuropeanPortuguese), "um bilião");
}

#[test]
fn french_cents_takes_plural_only_without_remainder() {
    assert_eq!(words(80, Language::French), "quatre-vingts");
    assert_eq!(words(200, Language::French), "deux cents");
    assert_eq!(words(201, Language::French), "deux cent un");
    assert_eq!(words(2_000, Language::French), "deux mille");
    assert_eq!(
        words(1_999, Language::French),
        "mille neuf cent quatre-vingt-dix-neuf"
    );
}

#[test]
fn russian_thousands_follow_ending_rules() {
    let cases = [
        (1_000, "одна тысяча"),
        (2_000, "две тысячи"),
        (5_000, "пять тысяч"),
        (11_000, "одиннадцать тысяч"),
        (21_000, "двадцать одна тысяча"),
        (22_000, "двадцать две тысячи"),
        (112_000, "сто двенадцать тысяч"),
        (2_000_000, "два миллиона"),
    ];
    for (n, expected) in cases {
        assert_eq!(words(n, Language::Russian), expected, "{n}");
    }
}

#[test]
fn arabic_dual_and_restricted_plural() {
    assert_eq!(words(200, Language::Arabic), "مئتان");
    assert_eq!(words(300, Language::Arabic), "ثلاثة مئات");
    assert_eq!(words(2_000, Language::Arabic), "ألفان");
    assert_eq!(words(3_000, Language::Arabic), "ثلاثة آلاف");
    assert_eq!(words(11_000, Language::Arabic), "أحد عشر ألف");
    assert_eq!(words(101, Language::Arabic), "مائة وواحد");
}

#[test]
fn arabic_joins_every_chunk_with_wa() {
    assert_eq!(words(1_100, Language::Arabic), "ألف ومائة");
    assert_eq!(words(1_101, Language::Arabic), "ألف ومائة وواحد");
    assert_eq!(words(2_100, Language::Arabic), "ألفان ومائة");
    assert_eq!(words(1_000_100, Language::Arabic), "مليون ومائة");
    assert_eq!(
        words(1_234_567, Language::Arabic),
        "مليون ومئتان وثلاثون وأربعة ألف وخمسة مئات وستون وسبعة"
    );
}

#[test]
fn indian_english_uses_exponent_keyed_units() {
    assert_eq!(words(100_000, Language::IndianEnglish), "one lakh");
    assert_eq!(
        words(12_345_678, Language::IndianEnglish),
        "one crore twenty-three lakh forty-five thousand six hundred and seventy-eight"
    );
}

#[test]
fn last_unit_count_wraps_at_one_million() {
    // 999 999 crore is the largest fully written count of the last unit.
    assert_eq!(
        words(9_999_990_000_000, Language::IndianEnglish),
        "nine lakh ninety-nine thousand nine hundred ninety-nine crore"
    );
    // One crore past a million crore.
    assert_eq!(words(10_000_010_000_000, Language::IndianEnglish), "one crore");
}

#[test]
fn alternative_base_swaps_digit_words_only() {
    let apocopated = Options::new(Language::Spanish).with_alternative_base("apocopated");
    assert_eq!(written_number(1, &apocopated).unwrap(), "un");
    assert_eq!(written_number(101, &apocopated).unwrap(), "ciento un");
    assert_eq!(written_number(21_000, &apocopated).unwrap(), "veintiún mil");

    let unknown = Options::new(Language::Spanish).with_alternative_base("nope");
    assert_eq!(written_number(1, &unknown).unwrap(), "uno");
}

#[test]
fn invalid_input_yields_an_empty_string() {
    for language in Language::ALL {
        let options = Options::new(language);
        assert_eq!(written_number(-5, &options).unwrap(), "");
        assert_eq!(written_number(-5.0, &options).unwrap(), "");
        assert_eq!(written_number("-5", &options).unwrap(), "");
        assert_eq!(written_number("five", &options).unwrap(), "");
    }
}

#[test]
fn numeric_strings_and_floats() {
    let options = Options::default();
    assert_eq!(written_number("21", &options).unwrap(), "twenty-one");
    assert_eq!(written_number(20.6, &options).unwrap(), "twenty-one");
    assert_eq!(written_number(String::from("1e3"), &options).unwrap(), "one thousand");
}

#[test]
fn codes_select_languages() {
    let options = Options::from_code("id").unwrap();
    assert_eq!(written_number(0, &options).unwrap(), "nol");
    assert!(Options::from_code("zz").is_err());
}

#[test]
fn concurrent_callers_match_sequential_results() {
    let inputs: Vec<(Language, u128)> = Language::ALL
        .iter()
        .flat_map(|&language| (0..2_000).step_by(37).map(move |n| (language, n)))
        .collect();
    let sequential: Vec<String> = inputs.iter().map(|&(l, n)| words(n, l)).collect();

    let results: Vec<Vec<String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    inputs
                        .iter()
                        .map(|&(l, n)| words(n, l))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for result in results {
        assert_eq!(result, sequential);
    }
}
