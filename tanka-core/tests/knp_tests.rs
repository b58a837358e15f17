use tanka_core::analyzer::knp::{parse_document, surface_text};
use tanka_core::{ConjugationForm, MalformedOutput, PartOfSpeech, PosSubcategory, Sentence};

const SHIROTAMA: &str = include_str!("fixtures/shirotama.knp");

#[test]
fn test_fixture_document() {
    let analyses = parse_document(SHIROTAMA);
    assert_eq!(analyses.len(), 2);

    let phrases = analyses[0].as_ref().unwrap();
    assert_eq!(phrases.len(), 8);
    assert_eq!(
        surface_text(phrases),
        "白玉の歯にしみとおる秋の夜の酒は静かに飲むべかりけり"
    );

    let last = &phrases[7];
    assert_eq!(last.len(), 3);
    assert_eq!(last[2].surface, "けり");
    assert_eq!(last[2].pos, PartOfSpeech::Auxiliary);
    assert!(last[2].conjugation.contains(ConjugationForm::Base));

    let quietly = &phrases[6][0];
    assert_eq!(quietly.pos, PartOfSpeech::Adjective);
    assert!(quietly.conjugation.contains(ConjugationForm::Continuative));
    assert!(!quietly.conjugation.contains(ConjugationForm::Base));

    assert_eq!(phrases[5][1].pos_sub, PosSubcategory::AdverbialParticle);
}

#[test]
fn test_fixture_mora_counts() {
    let analyses = parse_document(SHIROTAMA);
    let phrases = analyses.into_iter().next().unwrap().unwrap();
    let sentence = Sentence::from_tokens("白玉", phrases).unwrap();
    let counts: Vec<u32> = sentence.phrases().iter().map(|p| p.mora_count()).collect();
    assert_eq!(counts, vec![5, 2, 5, 3, 2, 3, 4, 7]);
    assert_eq!(sentence.mora_count(), 31);
}

#[test]
fn test_crlf_and_truncated_output() {
    let document = "* -1D\r\n春 はる 春 名詞 6 時相名詞 10 * 0 * 0 NIL\r\nEOS\r\n* -1D\r\n";
    let analyses = parse_document(document);
    assert_eq!(analyses.len(), 2);
    assert_eq!(analyses[0].as_ref().unwrap()[0][0].reading, "はる");
    assert_eq!(analyses[1], Err(MalformedOutput::Unterminated));
}
