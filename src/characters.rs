//! Static character datasets for the three writing systems.
//!
//! Kana tables follow gojūon order (basic syllables first, then dakuten and
//! handakuten forms). Kanji carry a single common reading plus an English gloss.

use std::fmt;
use std::str::FromStr;

/// One flashcard record. Immutable; identity is its position in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Character {
    pub glyph: &'static str,
    pub romaji: &'static str,
    pub meaning: Option<&'static str>,
}

const fn kana(glyph: &'static str, romaji: &'static str) -> Character {
    Character { glyph, romaji, meaning: None }
}

const fn kanji(glyph: &'static str, romaji: &'static str, meaning: &'static str) -> Character {
    Character { glyph, romaji, meaning: Some(meaning) }
}

pub const HIRAGANA: &[Character] = &[
    kana("あ", "a"), kana("い", "i"), kana("う", "u"), kana("え", "e"), kana("お", "o"),
    kana("か", "ka"), kana("き", "ki"), kana("く", "ku"), kana("け", "ke"), kana("こ", "ko"),
    kana("さ", "sa"), kana("し", "shi"), kana("す", "su"), kana("せ", "se"), kana("そ", "so"),
    kana("た", "ta"), kana("ち", "chi"), kana("つ", "tsu"), kana("て", "te"), kana("と", "to"),
    kana("な", "na"), kana("に", "ni"), kana("ぬ", "nu"), kana("ね", "ne"), kana("の", "no"),
    kana("は", "ha"), kana("ひ", "hi"), kana("ふ", "fu"), kana("へ", "he"), kana("ほ", "ho"),
    kana("ま", "ma"), kana("み", "mi"), kana("む", "mu"), kana("め", "me"), kana("も", "mo"),
    kana("や", "ya"), kana("ゆ", "yu"), kana("よ", "yo"),
    kana("ら", "ra"), kana("り", "ri"), kana("る", "ru"), kana("れ", "re"), kana("ろ", "ro"),
    kana("わ", "wa"), kana("を", "wo"), kana("ん", "n"),
    kana("が", "ga"), kana("ぎ", "gi"), kana("ぐ", "gu"), kana("げ", "ge"), kana("ご", "go"),
    kana("ざ", "za"), kana("じ", "ji"), kana("ず", "zu"), kana("ぜ", "ze"), kana("ぞ", "zo"),
    kana("だ", "da"), kana("ぢ", "di"), kana("づ", "du"), kana("で", "de"), kana("ど", "do"),
    kana("ば", "ba"), kana("び", "bi"), kana("ぶ", "bu"), kana("べ", "be"), kana("ぼ", "bo"),
    kana("ぱ", "pa"), kana("ぴ", "pi"), kana("ぷ", "pu"), kana("ぺ", "pe"), kana("ぽ", "po"),
];

pub const KATAKANA: &[Character] = &[
    kana("ア", "a"), kana("イ", "i"), kana("ウ", "u"), kana("エ", "e"), kana("オ", "o"),
    kana("カ", "ka"), kana("キ", "ki"), kana("ク", "ku"), kana("ケ", "ke"), kana("コ", "ko"),
    kana("サ", "sa"), kana("シ", "shi"), kana("ス", "su"), kana("セ", "se"), kana("ソ", "so"),
    kana("タ", "ta"), kana("チ", "chi"), kana("ツ", "tsu"), kana("テ", "te"), kana("ト", "to"),
    kana("ナ", "na"), kana("ニ", "ni"), kana("ヌ", "nu"), kana("ネ", "ne"), kana("ノ", "no"),
    kana("ハ", "ha"), kana("ヒ", "hi"), kana("フ", "fu"), kana("ヘ", "he"), kana("ホ", "ho"),
    kana("マ", "ma"), kana("ミ", "mi"), kana("ム", "mu"), kana("メ", "me"), kana("モ", "mo"),
    kana("ヤ", "ya"), kana("ユ", "yu"), kana("ヨ", "yo"),
    kana("ラ", "ra"), kana("リ", "ri"), kana("ル", "ru"), kana("レ", "re"), kana("ロ", "ro"),
    kana("ワ", "wa"), kana("ヲ", "wo"), kana("ン", "n"),
    kana("ガ", "ga"), kana("ギ", "gi"), kana("グ", "gu"), kana("ゲ", "ge"), kana("ゴ", "go"),
    kana("ザ", "za"), kana("ジ", "ji"), kana("ズ", "zu"), kana("ゼ", "ze"), kana("ゾ", "zo"),
    kana("ダ", "da"), kana("ヂ", "di"), kana("ヅ", "du"), kana("デ", "de"), kana("ド", "do"),
    kana("バ", "ba"), kana("ビ", "bi"), kana("ブ", "bu"), kana("ベ", "be"), kana("ボ", "bo"),
    kana("パ", "pa"), kana("ピ", "pi"), kana("プ", "pu"), kana("ペ", "pe"), kana("ポ", "po"),
];

pub const KANJI: &[Character] = &[
    kanji("一", "ichi", "one"), kanji("二", "ni", "two"), kanji("三", "san", "three"),
    kanji("四", "yon", "four"), kanji("五", "go", "five"), kanji("六", "roku", "six"),
    kanji("七", "nana", "seven"), kanji("八", "hachi", "eight"), kanji("九", "kyuu", "nine"),
    kanji("十", "juu", "ten"), kanji("百", "hyaku", "hundred"), kanji("千", "sen", "thousand"),
    kanji("万", "man", "ten thousand"), kanji("円", "en", "yen; circle"),
    kanji("日", "nichi", "day; sun"), kanji("月", "tsuki", "moon; month"),
    kanji("火", "hi", "fire"), kanji("水", "mizu", "water"), kanji("木", "ki", "tree"),
    kanji("金", "kane", "gold; money"), kanji("土", "tsuchi", "earth; soil"),
    kanji("山", "yama", "mountain"), kanji("川", "kawa", "river"), kanji("田", "ta", "rice field"),
    kanji("人", "hito", "person"), kanji("口", "kuchi", "mouth"), kanji("目", "me", "eye"),
    kanji("耳", "mimi", "ear"), kanji("手", "te", "hand"), kanji("足", "ashi", "foot; leg"),
    kanji("力", "chikara", "power"), kanji("上", "ue", "up; above"),
    kanji("下", "shita", "down; below"), kanji("中", "naka", "inside; middle"),
    kanji("大", "ookii", "big"), kanji("小", "chiisai", "small"), kanji("本", "hon", "book; origin"),
    kanji("学", "gaku", "study"), kanji("生", "sei", "life; birth"), kanji("先", "saki", "ahead; previous"),
    kanji("年", "toshi", "year"), kanji("時", "toki", "time"), kanji("何", "nani", "what"),
    kanji("女", "onna", "woman"), kanji("男", "otoko", "man"), kanji("子", "ko", "child"),
    kanji("名", "na", "name"), kanji("天", "ten", "heaven; sky"), kanji("気", "ki", "spirit; air"),
    kanji("雨", "ame", "rain"), kanji("花", "hana", "flower"), kanji("空", "sora", "sky"),
    kanji("左", "hidari", "left"), kanji("右", "migi", "right"), kanji("見", "miru", "see"),
    kanji("行", "iku", "go"), kanji("来", "kuru", "come"), kanji("食", "taberu", "eat"),
];

/// Writing system a session draws its deck from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterSet {
    Hiragana,
    Katakana,
    Kanji,
}

impl CharacterSet {
    pub const ALL: [CharacterSet; 3] = [Self::Hiragana, Self::Katakana, Self::Kanji];

    pub fn cards(self) -> &'static [Character] {
        match self {
            Self::Hiragana => HIRAGANA,
            Self::Katakana => KATAKANA,
            Self::Kanji => KANJI,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hiragana => "Hiragana",
            Self::Katakana => "Katakana",
            Self::Kanji => "Kanji",
        }
    }

    /// Lowercase key used in `data-action` attributes.
    pub fn key(self) -> &'static str {
        match self {
            Self::Hiragana => "hiragana",
            Self::Katakana => "katakana",
            Self::Kanji => "kanji",
        }
    }

    /// Glyph shown on the mode selection tile.
    pub fn sample_glyph(self) -> &'static str {
        match self {
            Self::Hiragana => "あ",
            Self::Katakana => "ア",
            Self::Kanji => "漢",
        }
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CharacterSet {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|set| set.key() == s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keys_round_trip_through_from_str() {
        for set in CharacterSet::ALL {
            assert_eq!(set.key().parse::<CharacterSet>(), Ok(set));
        }
        assert!("romaji".parse::<CharacterSet>().is_err());
    }

    #[test]
    fn kana_tables_line_up() {
        assert_eq!(HIRAGANA.len(), KATAKANA.len());
        for (h, k) in HIRAGANA.iter().zip(KATAKANA) {
            assert_eq!(h.romaji, k.romaji, "reading mismatch for {} / {}", h.glyph, k.glyph);
        }
    }
}
