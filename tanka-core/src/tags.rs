//! Closed tag inventories of the Juman/KNP analyzer
//!
//! Every tag the analyzer can attach to a morpheme is represented as a named
//! variant so that the boundary heuristics can match on them exhaustively.
//! Parsing goes through [`FromStr`] on the analyzer's own (Japanese) labels;
//! anything outside the inventory is rejected with [`UnknownTag`].

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A label the analyzer emitted that is not part of the known inventory
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} tag: {label}")]
pub struct UnknownTag {
    /// Which inventory was being parsed
    pub kind: &'static str,
    /// The offending label
    pub label: String,
}

impl UnknownTag {
    fn new(kind: &'static str, label: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
        }
    }
}

/// Primary part-of-speech (品詞)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// 特殊: punctuation, brackets, symbols
    Special,
    /// 動詞
    Verb,
    /// 形容詞
    Adjective,
    /// 判定詞: the copula だ/です
    Copula,
    /// 助動詞
    Auxiliary,
    /// 名詞
    Noun,
    /// 指示詞
    Demonstrative,
    /// 副詞
    Adverb,
    /// 助詞
    Particle,
    /// 接続詞
    Conjunction,
    /// 連体詞
    Adnominal,
    /// 感動詞
    Interjection,
    /// 接頭辞
    Prefix,
    /// 接尾辞
    Suffix,
    /// 未定義語
    Undefined,
}

impl PartOfSpeech {
    /// The analyzer's label for this tag
    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Special => "特殊",
            PartOfSpeech::Verb => "動詞",
            PartOfSpeech::Adjective => "形容詞",
            PartOfSpeech::Copula => "判定詞",
            PartOfSpeech::Auxiliary => "助動詞",
            PartOfSpeech::Noun => "名詞",
            PartOfSpeech::Demonstrative => "指示詞",
            PartOfSpeech::Adverb => "副詞",
            PartOfSpeech::Particle => "助詞",
            PartOfSpeech::Conjunction => "接続詞",
            PartOfSpeech::Adnominal => "連体詞",
            PartOfSpeech::Interjection => "感動詞",
            PartOfSpeech::Prefix => "接頭辞",
            PartOfSpeech::Suffix => "接尾辞",
            PartOfSpeech::Undefined => "未定義語",
        }
    }
}

impl FromStr for PartOfSpeech {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "特殊" => Ok(PartOfSpeech::Special),
            "動詞" => Ok(PartOfSpeech::Verb),
            "形容詞" => Ok(PartOfSpeech::Adjective),
            "判定詞" => Ok(PartOfSpeech::Copula),
            "助動詞" => Ok(PartOfSpeech::Auxiliary),
            "名詞" => Ok(PartOfSpeech::Noun),
            "指示詞" => Ok(PartOfSpeech::Demonstrative),
            "副詞" => Ok(PartOfSpeech::Adverb),
            "助詞" => Ok(PartOfSpeech::Particle),
            "接続詞" => Ok(PartOfSpeech::Conjunction),
            "連体詞" => Ok(PartOfSpeech::Adnominal),
            "感動詞" => Ok(PartOfSpeech::Interjection),
            "接頭辞" => Ok(PartOfSpeech::Prefix),
            "接尾辞" => Ok(PartOfSpeech::Suffix),
            "未定義語" => Ok(PartOfSpeech::Undefined),
            _ => Err(UnknownTag::new("part-of-speech", s)),
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part-of-speech sub-category (細分類)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosSubcategory {
    /// `*`: the word has no sub-category
    None,
    /// 句点
    Period,
    /// 読点
    Comma,
    /// 括弧始
    OpeningBracket,
    /// 括弧終
    ClosingBracket,
    /// 記号
    Symbol,
    /// 空白
    Whitespace,
    /// 普通名詞
    CommonNoun,
    /// サ変名詞
    SahenNoun,
    /// 固有名詞
    ProperNoun,
    /// 地名
    PlaceName,
    /// 人名
    PersonName,
    /// 組織名
    OrganizationName,
    /// 数詞
    Numeral,
    /// 形式名詞
    FormalNoun,
    /// 副詞的名詞
    AdverbialNoun,
    /// 時相名詞
    TemporalNoun,
    /// 名詞形態指示詞
    NominalDemonstrative,
    /// 連体詞形態指示詞
    AdnominalDemonstrative,
    /// 副詞形態指示詞
    AdverbialDemonstrative,
    /// 格助詞
    CaseParticle,
    /// 副助詞
    AdverbialParticle,
    /// 接続助詞
    ConjunctiveParticle,
    /// 終助詞
    SentenceFinalParticle,
    /// 名詞接頭辞
    NounPrefix,
    /// 動詞接頭辞
    VerbPrefix,
    /// イ形容詞接頭辞
    IAdjectivePrefix,
    /// ナ形容詞接頭辞
    NaAdjectivePrefix,
    /// 名詞性述語接尾辞
    PredicativeNounSuffix,
    /// 名詞性名詞接尾辞
    NominalNounSuffix,
    /// 名詞性名詞助数辞
    Counter,
    /// 名詞性特殊接尾辞
    SpecialNounSuffix,
    /// 形容詞性述語接尾辞
    PredicativeAdjectiveSuffix,
    /// 形容詞性名詞接尾辞
    NominalAdjectiveSuffix,
    /// 動詞性接尾辞
    VerbSuffix,
    /// その他 (undefined words)
    Other,
    /// カタカナ (undefined words)
    Katakana,
    /// アルファベット (undefined words)
    Alphabet,
}

impl PosSubcategory {
    /// The analyzer's label for this tag
    pub fn as_str(self) -> &'static str {
        match self {
            PosSubcategory::None => "*",
            PosSubcategory::Period => "句点",
            PosSubcategory::Comma => "読点",
            PosSubcategory::OpeningBracket => "括弧始",
            PosSubcategory::ClosingBracket => "括弧終",
            PosSubcategory::Symbol => "記号",
            PosSubcategory::Whitespace => "空白",
            PosSubcategory::CommonNoun => "普通名詞",
            PosSubcategory::SahenNoun => "サ変名詞",
            PosSubcategory::ProperNoun => "固有名詞",
            PosSubcategory::PlaceName => "地名",
            PosSubcategory::PersonName => "人名",
            PosSubcategory::OrganizationName => "組織名",
            PosSubcategory::Numeral => "数詞",
            PosSubcategory::FormalNoun => "形式名詞",
            PosSubcategory::AdverbialNoun => "副詞的名詞",
            PosSubcategory::TemporalNoun => "時相名詞",
            PosSubcategory::NominalDemonstrative => "名詞形態指示詞",
            PosSubcategory::AdnominalDemonstrative => "連体詞形態指示詞",
            PosSubcategory::AdverbialDemonstrative => "副詞形態指示詞",
            PosSubcategory::CaseParticle => "格助詞",
            PosSubcategory::AdverbialParticle => "副助詞",
            PosSubcategory::ConjunctiveParticle => "接続助詞",
            PosSubcategory::SentenceFinalParticle => "終助詞",
            PosSubcategory::NounPrefix => "名詞接頭辞",
            PosSubcategory::VerbPrefix => "動詞接頭辞",
            PosSubcategory::IAdjectivePrefix => "イ形容詞接頭辞",
            PosSubcategory::NaAdjectivePrefix => "ナ形容詞接頭辞",
            PosSubcategory::PredicativeNounSuffix => "名詞性述語接尾辞",
            PosSubcategory::NominalNounSuffix => "名詞性名詞接尾辞",
            PosSubcategory::Counter => "名詞性名詞助数辞",
            PosSubcategory::SpecialNounSuffix => "名詞性特殊接尾辞",
            PosSubcategory::PredicativeAdjectiveSuffix => "形容詞性述語接尾辞",
            PosSubcategory::NominalAdjectiveSuffix => "形容詞性名詞接尾辞",
            PosSubcategory::VerbSuffix => "動詞性接尾辞",
            PosSubcategory::Other => "その他",
            PosSubcategory::Katakana => "カタカナ",
            PosSubcategory::Alphabet => "アルファベット",
        }
    }
}

impl FromStr for PosSubcategory {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sub = match s {
            "*" => PosSubcategory::None,
            "句点" => PosSubcategory::Period,
            "読点" => PosSubcategory::Comma,
            "括弧始" => PosSubcategory::OpeningBracket,
            "括弧終" => PosSubcategory::ClosingBracket,
            "記号" => PosSubcategory::Symbol,
            "空白" => PosSubcategory::Whitespace,
            "普通名詞" => PosSubcategory::CommonNoun,
            "サ変名詞" => PosSubcategory::SahenNoun,
            "固有名詞" => PosSubcategory::ProperNoun,
            "地名" => PosSubcategory::PlaceName,
            "人名" => PosSubcategory::PersonName,
            "組織名" => PosSubcategory::OrganizationName,
            "数詞" => PosSubcategory::Numeral,
            "形式名詞" => PosSubcategory::FormalNoun,
            "副詞的名詞" => PosSubcategory::AdverbialNoun,
            "時相名詞" => PosSubcategory::TemporalNoun,
            "名詞形態指示詞" => PosSubcategory::NominalDemonstrative,
            "連体詞形態指示詞" => PosSubcategory::AdnominalDemonstrative,
            "副詞形態指示詞" => PosSubcategory::AdverbialDemonstrative,
            "格助詞" => PosSubcategory::CaseParticle,
            "副助詞" => PosSubcategory::AdverbialParticle,
            "接続助詞" => PosSubcategory::ConjunctiveParticle,
            "終助詞" => PosSubcategory::SentenceFinalParticle,
            "名詞接頭辞" => PosSubcategory::NounPrefix,
            "動詞接頭辞" => PosSubcategory::VerbPrefix,
            "イ形容詞接頭辞" => PosSubcategory::IAdjectivePrefix,
            "ナ形容詞接頭辞" => PosSubcategory::NaAdjectivePrefix,
            "名詞性述語接尾辞" => PosSubcategory::PredicativeNounSuffix,
            "名詞性名詞接尾辞" => PosSubcategory::NominalNounSuffix,
            "名詞性名詞助数辞" => PosSubcategory::Counter,
            "名詞性特殊接尾辞" => PosSubcategory::SpecialNounSuffix,
            "形容詞性述語接尾辞" => PosSubcategory::PredicativeAdjectiveSuffix,
            "形容詞性名詞接尾辞" => PosSubcategory::NominalAdjectiveSuffix,
            "動詞性接尾辞" => PosSubcategory::VerbSuffix,
            "その他" => PosSubcategory::Other,
            "カタカナ" => PosSubcategory::Katakana,
            "アルファベット" => PosSubcategory::Alphabet,
            _ => return Err(UnknownTag::new("sub-category", s)),
        };
        Ok(sub)
    }
}

impl fmt::Display for PosSubcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conjugation form (活用形), classified by its grammatical role
///
/// Juman spells the same role many ways depending on the conjugation series
/// (`基本形`, `ダ列基本形`, `デス列基本形`, `文語基本形`, ...). All of them
/// collapse onto one variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConjugationForm {
    /// 語幹
    Stem,
    /// 基本形: the plain dictionary form
    Base,
    /// タ形: plain past
    Past,
    /// 未然形
    Irrealis,
    /// 意志形 / 推量形
    Volitional,
    /// 命令形
    Imperative,
    /// 条件形 / 仮定形
    Conditional,
    /// 連用形 and its テ/タリ/チャ variants
    Continuative,
    /// 連体形
    Attributive,
    /// 已然形
    Realis,
}

impl ConjugationForm {
    const ALL: [ConjugationForm; 10] = [
        ConjugationForm::Stem,
        ConjugationForm::Base,
        ConjugationForm::Past,
        ConjugationForm::Irrealis,
        ConjugationForm::Volitional,
        ConjugationForm::Imperative,
        ConjugationForm::Conditional,
        ConjugationForm::Continuative,
        ConjugationForm::Attributive,
        ConjugationForm::Realis,
    ];

    fn bit(self) -> u16 {
        1 << self as u16
    }

    /// Classifies one analyzer label.
    ///
    /// Suffix checks come first: `タ系推量形` is volitional, not past, while
    /// `ダ列タ形` is past.
    pub fn classify(label: &str) -> Option<Self> {
        let form = if label.ends_with("基本形") {
            ConjugationForm::Base
        } else if label.ends_with("タ形") {
            ConjugationForm::Past
        } else if label.contains("語幹") {
            ConjugationForm::Stem
        } else if label.contains("未然形") {
            ConjugationForm::Irrealis
        } else if label.contains("意志形") || label.contains("推量形") {
            ConjugationForm::Volitional
        } else if label.contains("命令形") {
            ConjugationForm::Imperative
        } else if label.contains("条件形") || label.contains("仮定形") {
            ConjugationForm::Conditional
        } else if label.contains("連用") {
            ConjugationForm::Continuative
        } else if label.contains("連体形") {
            ConjugationForm::Attributive
        } else if label.contains("已然形") {
            ConjugationForm::Realis
        } else {
            return None;
        };
        Some(form)
    }
}

/// The set of conjugation forms applicable to a morpheme
///
/// Empty for words that do not inflect (`*` in analyzer output).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConjugationForms(u16);

impl ConjugationForms {
    /// The empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Parses the conjugation-form field of an analyzer line
    pub fn from_label(label: &str) -> Result<Self, UnknownTag> {
        if label == "*" {
            return Ok(Self::empty());
        }
        ConjugationForm::classify(label)
            .map(|form| Self(form.bit()))
            .ok_or_else(|| UnknownTag::new("conjugation-form", label))
    }

    /// Adds a form to the set
    pub fn insert(&mut self, form: ConjugationForm) {
        self.0 |= form.bit();
    }

    /// Whether the set holds `form`
    pub fn contains(&self, form: ConjugationForm) -> bool {
        self.0 & form.bit() != 0
    }

    /// Whether the set shares any form with `forms`
    pub fn intersects(&self, forms: &[ConjugationForm]) -> bool {
        forms.iter().any(|&form| self.contains(form))
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the forms in declaration order
    pub fn iter(&self) -> impl Iterator<Item = ConjugationForm> + '_ {
        ConjugationForm::ALL
            .into_iter()
            .filter(move |&form| self.contains(form))
    }
}

impl FromIterator<ConjugationForm> for ConjugationForms {
    fn from_iter<I: IntoIterator<Item = ConjugationForm>>(iter: I) -> Self {
        let mut forms = Self::empty();
        for form in iter {
            forms.insert(form);
        }
        forms
    }
}

impl From<ConjugationForm> for ConjugationForms {
    fn from(form: ConjugationForm) -> Self {
        Self(form.bit())
    }
}
