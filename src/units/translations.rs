//! Unit symbol translations
//!
//! Short localized forms of the canonical unit symbols for every supported
//! display language. Keys are matched case-insensitively.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Languages with a unit translation table
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "es", "en", "it", "de", "fr", "pt", "ja", "hi", "zh", "ru", "ko", "ar", "tr", "th", "id",
];

const FALLBACK_LANGUAGE: &str = "en";

// Spanish
const ES: &[(&str, &str)] = &[
    ("cup", "taza"),
    ("cups", "tazas"),
    ("tbsp", "cda"),
    ("tsp", "cdta"),
    ("ml", "ml"),
    ("l", "l"),
    ("g", "g"),
    ("kg", "kg"),
    ("lb", "lb"),
    ("oz", "oz"),
    ("piece", "pieza"),
    ("pieces", "piezas"),
    ("clove", "diente"),
    ("cloves", "dientes"),
    ("unit", "unidad"),
    ("units", "unidades"),
    ("slice", "rodaja"),
    ("slices", "rodajas"),
    ("pinch", "pizca"),
    ("to taste", "al gusto"),
    ("sheet", "hoja"),
    ("sheets", "hojas"),
    ("can", "lata"),
    ("cans", "latas"),
    ("stalk", "tallo"),
    ("stalks", "tallos"),
    ("°C", "°C"),
    ("°F", "°F"),
];

// English
const EN: &[(&str, &str)] = &[
    ("cup", "cup"),
    ("cups", "cups"),
    ("tbsp", "tbsp"),
    ("tsp", "tsp"),
    ("ml", "ml"),
    ("l", "l"),
    ("g", "g"),
    ("kg", "kg"),
    ("lb", "lb"),
    ("oz", "oz"),
    ("piece", "piece"),
    ("pieces", "pieces"),
    ("clove", "clove"),
    ("cloves", "cloves"),
    ("unit", "unit"),
    ("units", "units"),
    ("slice", "slice"),
    ("slices", "slices"),
    ("pinch", "pinch"),
    ("to taste", "to taste"),
    ("sheet", "sheet"),
    ("sheets", "sheets"),
    ("can", "can"),
    ("cans", "cans"),
    ("stalk", "stalk"),
    ("stalks", "stalks"),
    ("°C", "°C"),
    ("°F", "°F"),
];

// Italian
const IT: &[(&str, &str)] = &[
    ("cup", "tazza"),
    ("cups", "tazze"),
    ("tbsp", "cucchiaio"),
    ("tsp", "cucchiaino"),
    ("ml", "ml"),
    ("l", "l"),
    ("g", "g"),
    ("kg", "kg"),
    ("lb", "lb"),
    ("oz", "oz"),
    ("piece", "pezzo"),
    ("pieces", "pezzi"),
    ("clove", "spicchio"),
    ("cloves", "spicchi"),
    ("unit", "unità"),
    ("units", "unità"),
    ("slice", "fetta"),
    ("slices", "fette"),
    ("pinch", "pizzico"),
    ("to taste", "q.b."),
    ("sheet", "foglio"),
    ("sheets", "fogli"),
    ("can", "lattina"),
    ("cans", "lattine"),
    ("stalk", "gambo"),
    ("stalks", "gambi"),
    ("°C", "°C"),
    ("°F", "°F"),
];

// German
const DE: &[(&str, &str)] = &[
    ("cup", "Tasse"),
    ("cups", "Tassen"),
    ("tbsp", "EL"),
    ("tsp", "TL"),
    ("ml", "ml"),
    ("l", "l"),
    ("g", "g"),
    ("kg", "kg"),
    ("lb", "lb"),
    ("oz", "oz"),
    ("piece", "Stück"),
    ("pieces", "Stück"),
    ("clove", "Zehe"),
    ("cloves", "Zehen"),
    ("unit", "Einheit"),
    ("units", "Einheiten"),
    ("slice", "Scheibe"),
    ("slices", "Scheiben"),
    ("pinch", "Prise"),
    ("to taste", "nach Geschmack"),
    ("sheet", "Blatt"),
    ("sheets", "Blätter"),
    ("can", "Dose"),
    ("cans", "Dosen"),
    ("stalk", "Stängel"),
    ("stalks", "Stängel"),
    ("°C", "°C"),
    ("°F", "°F"),
];

// French
const FR: &[(&str, &str)] = &[
    ("cup", "tasse"),
    ("cups", "tasses"),
    ("tbsp", "c. à s."),
    ("tsp", "c. à c."),
    ("ml", "ml"),
    ("l", "l"),
    ("g", "g"),
    ("kg", "kg"),
    ("lb", "lb"),
    ("oz", "oz"),
    ("piece", "pièce"),
    ("pieces", "pièces"),
    ("clove", "gousse"),
    ("cloves", "gousses"),
    ("unit", "unité"),
    ("units", "unités"),
    ("slice", "tranche"),
    ("slices", "tranches"),
    ("pinch", "pincée"),
    ("to taste", "au goût"),
    ("sheet", "feuille"),
    ("sheets", "feuilles"),
    ("can", "boîte"),
    ("cans", "boîtes"),
    ("stalk", "tige"),
    ("stalks", "tiges"),
    ("°C", "°C"),
    ("°F", "°F"),
];

// Portuguese
const PT: &[(&str, &str)] = &[
    ("cup", "xícara"),
    ("cups", "xícaras"),
    ("tbsp", "colher sopa"),
    ("tsp", "colher chá"),
    ("ml", "ml"),
    ("l", "l"),
    ("g", "g"),
    ("kg", "kg"),
    ("lb", "lb"),
    ("oz", "oz"),
    ("piece", "peça"),
    ("pieces", "peças"),
    ("clove", "dente"),
    ("cloves", "dentes"),
    ("unit", "unidade"),
    ("units", "unidades"),
    ("slice", "fatia"),
    ("slices", "fatias"),
    ("pinch", "pitada"),
    ("to taste", "a gosto"),
    ("sheet", "folha"),
    ("sheets", "folhas"),
    ("can", "lata"),
    ("cans", "latas"),
    ("stalk", "talo"),
    ("stalks", "talos"),
    ("°C", "°C"),
    ("°F", "°F"),
];

// Japanese
const JA: &[(&str, &str)] = &[
    ("cup", "カップ"),
    ("cups", "カップ"),
    ("tbsp", "大さじ"),
    ("tsp", "小さじ"),
    ("ml", "ml"),
    ("l", "l"),
    ("g", "g"),
    ("kg", "kg"),
    ("lb", "lb"),
    ("oz", "oz"),
    ("piece", "個"),
    ("pieces", "個"),
    ("clove", "片"),
    ("cloves", "片"),
    ("unit", "個"),
    ("units", "個"),
    ("slice", "枚"),
    ("slices", "枚"),
    ("pinch", "ひとつまみ"),
    ("to taste", "お好みで"),
    ("sheet", "枚"),
    ("sheets", "枚"),
    ("can", "缶"),
    ("cans", "缶"),
    ("stalk", "本"),
    ("stalks", "本"),
    ("°C", "°C"),
    ("°F", "°F"),
];

// Hindi
const HI: &[(&str, &str)] = &[
    ("cup", "कप"),
    ("cups", "कप"),
    ("tbsp", "बड़ा चम्मच"),
    ("tsp", "छोटा चम्मच"),
    ("ml", "मिली"),
    ("l", "लीटर"),
    ("g", "ग्राम"),
    ("kg", "किलो"),
    ("lb", "पौंड"),
    ("oz", "औंस"),
    ("piece", "टुकड़ा"),
    ("pieces", "टुकड़े"),
    ("clove", "कली"),
    ("cloves", "कलियाँ"),
    ("unit", "इकाई"),
    ("units", "इकाइयाँ"),
    ("slice", "स्लाइस"),
    ("slices", "स्लाइस"),
    ("pinch", "चुटकी"),
    ("to taste", "स्वादानुसार"),
    ("sheet", "शीट"),
    ("sheets", "शीट्स"),
    ("can", "डिब्बा"),
    ("cans", "डिब्बे"),
    ("stalk", "डंठल"),
    ("stalks", "डंठल"),
    ("°C", "°C"),
    ("°F", "°F"),
];

// Chinese
const ZH: &[(&str, &str)] = &[
    ("cup", "杯"),
    ("cups", "杯"),
    ("tbsp", "汤匙"),
    ("tsp", "茶匙"),
    ("ml", "毫升"),
    ("l", "升"),
    ("g", "克"),
    ("kg", "千克"),
    ("lb", "磅"),
    ("oz", "盎司"),
    ("piece", "个"),
    ("pieces", "个"),
    ("clove", "瓣"),
    ("cloves", "瓣"),
    ("unit", "个"),
    ("units", "个"),
    ("slice", "片"),
    ("slices", "片"),
    ("pinch", "少许"),
    ("to taste", "适量"),
    ("sheet", "张"),
    ("sheets", "张"),
    ("can", "罐"),
    ("cans", "罐"),
    ("stalk", "根"),
    ("stalks", "根"),
    ("°C", "°C"),
    ("°F", "°F"),
];

// Russian
const RU: &[(&str, &str)] = &[
    ("cup", "чашка"),
    ("cups", "чашки"),
    ("tbsp", "ст.л."),
    ("tsp", "ч.л."),
    ("ml", "мл"),
    ("l", "л"),
    ("g", "г"),
    ("kg", "кг"),
    ("lb", "фунт"),
    ("oz", "унция"),
    ("piece", "шт"),
    ("pieces", "шт"),
    ("clove", "зубчик"),
    ("cloves", "зубчика"),
    ("unit", "единица"),
    ("units", "единицы"),
    ("slice", "ломтик"),
    ("slices", "ломтики"),
    ("pinch", "щепотка"),
    ("to taste", "по вкусу"),
    ("sheet", "лист"),
    ("sheets", "листа"),
    ("can", "банка"),
    ("cans", "банки"),
    ("stalk", "стебель"),
    ("stalks", "стебля"),
    ("°C", "°C"),
    ("°F", "°F"),
];

// Korean
const KO: &[(&str, &str)] = &[
    ("cup", "컵"),
    ("cups", "컵"),
    ("tbsp", "큰술"),
    ("tsp", "작은술"),
    ("ml", "ml"),
    ("l", "l"),
    ("g", "g"),
    ("kg", "kg"),
    ("lb", "파운드"),
    ("oz", "온스"),
    ("piece", "개"),
    ("pieces", "개"),
    ("clove", "쪽"),
    ("cloves", "쪽"),
    ("unit", "개"),
    ("units", "개"),
    ("slice", "조각"),
    ("slices", "조각"),
    ("pinch", "한 꼬집"),
    ("to taste", "기호에 맞게"),
    ("sheet", "장"),
    ("sheets", "장"),
    ("can", "캔"),
    ("cans", "캔"),
    ("stalk", "대"),
    ("stalks", "대"),
    ("°C", "°C"),
    ("°F", "°F"),
];

// Arabic
const AR: &[(&str, &str)] = &[
    ("cup", "كوب"),
    ("cups", "أكواب"),
    ("tbsp", "ملعقة كبيرة"),
    ("tsp", "ملعقة صغيرة"),
    ("ml", "مل"),
    ("l", "لتر"),
    ("g", "جم"),
    ("kg", "كجم"),
    ("lb", "رطل"),
    ("oz", "أونصة"),
    ("piece", "قطعة"),
    ("pieces", "قطع"),
    ("clove", "فص"),
    ("cloves", "فصوص"),
    ("unit", "وحدة"),
    ("units", "وحدات"),
    ("slice", "شريحة"),
    ("slices", "شرائح"),
    ("pinch", "رشة"),
    ("to taste", "حسب الذوق"),
    ("sheet", "ورقة"),
    ("sheets", "أوراق"),
    ("can", "علبة"),
    ("cans", "علب"),
    ("stalk", "ساق"),
    ("stalks", "سيقان"),
    ("°C", "°م"),
    ("°F", "°ف"),
];

// Turkish
const TR: &[(&str, &str)] = &[
    ("cup", "su bardağı"),
    ("cups", "su bardağı"),
    ("tbsp", "yemek kaşığı"),
    ("tsp", "çay kaşığı"),
    ("ml", "ml"),
    ("l", "l"),
    ("g", "g"),
    ("kg", "kg"),
    ("lb", "libre"),
    ("oz", "ons"),
    ("piece", "adet"),
    ("pieces", "adet"),
    ("clove", "diş"),
    ("cloves", "diş"),
    ("unit", "birim"),
    ("units", "birim"),
    ("slice", "dilim"),
    ("slices", "dilim"),
    ("pinch", "tutam"),
    ("to taste", "damak tadına göre"),
    ("sheet", "yaprak"),
    ("sheets", "yaprak"),
    ("can", "kutu"),
    ("cans", "kutu"),
    ("stalk", "sap"),
    ("stalks", "sap"),
    ("°C", "°C"),
    ("°F", "°F"),
];

// Thai
const TH: &[(&str, &str)] = &[
    ("cup", "ถ้วย"),
    ("cups", "ถ้วย"),
    ("tbsp", "ช้อนโต๊ะ"),
    ("tsp", "ช้อนชา"),
    ("ml", "มล."),
    ("l", "ลิตร"),
    ("g", "กรัม"),
    ("kg", "กก."),
    ("lb", "ปอนด์"),
    ("oz", "ออนซ์"),
    ("piece", "ชิ้น"),
    ("pieces", "ชิ้น"),
    ("clove", "กลีบ"),
    ("cloves", "กลีบ"),
    ("unit", "หน่วย"),
    ("units", "หน่วย"),
    ("slice", "แผ่น"),
    ("slices", "แผ่น"),
    ("pinch", "เล็กน้อย"),
    ("to taste", "ตามชอบ"),
    ("sheet", "แผ่น"),
    ("sheets", "แผ่น"),
    ("can", "กระป๋อง"),
    ("cans", "กระป๋อง"),
    ("stalk", "ต้น"),
    ("stalks", "ต้น"),
    ("°C", "°C"),
    ("°F", "°F"),
];

// Indonesian
const ID: &[(&str, &str)] = &[
    ("cup", "cangkir"),
    ("cups", "cangkir"),
    ("tbsp", "sdm"),
    ("tsp", "sdt"),
    ("ml", "ml"),
    ("l", "l"),
    ("g", "g"),
    ("kg", "kg"),
    ("lb", "pon"),
    ("oz", "ons"),
    ("piece", "buah"),
    ("pieces", "buah"),
    ("clove", "siung"),
    ("cloves", "siung"),
    ("unit", "unit"),
    ("units", "unit"),
    ("slice", "iris"),
    ("slices", "iris"),
    ("pinch", "sejumput"),
    ("to taste", "sesuai selera"),
    ("sheet", "lembar"),
    ("sheets", "lembar"),
    ("can", "kaleng"),
    ("cans", "kaleng"),
    ("stalk", "batang"),
    ("stalks", "batang"),
    ("°C", "°C"),
    ("°F", "°F"),
];

static UNIT_TRANSLATIONS: LazyLock<HashMap<&'static str, HashMap<String, &'static str>>> =
    LazyLock::new(|| {
        let tables: [(&'static str, &'static [(&'static str, &'static str)]); 15] = [
            ("es", ES),
            ("en", EN),
            ("it", IT),
            ("de", DE),
            ("fr", FR),
            ("pt", PT),
            ("ja", JA),
            ("hi", HI),
            ("zh", ZH),
            ("ru", RU),
            ("ko", KO),
            ("ar", AR),
            ("tr", TR),
            ("th", TH),
            ("id", ID),
        ];

        tables
            .into_iter()
            .map(|(language, entries)| {
                let table = entries
                    .iter()
                    .map(|(unit, translated)| (unit.to_lowercase(), *translated))
                    .collect();
                (language, table)
            })
            .collect()
    });

/// Reduce a language tag to its lowercase primary subtag ("pt-BR" -> "pt")
pub fn normalize_language(language: &str) -> String {
    let lower = language.trim().to_lowercase();
    match lower.split(['-', '_']).next() {
        Some(primary) => primary.to_string(),
        None => lower,
    }
}

fn translation_table(language: &str) -> Option<&'static HashMap<String, &'static str>> {
    UNIT_TRANSLATIONS.get(normalize_language(language).as_str())
}

/// Look up the translation of a unit in one language, without fallbacks
pub fn lookup_unit_translation(unit: &str, language: &str) -> Option<&'static str> {
    translation_table(language)?
        .get(&unit.trim().to_lowercase())
        .copied()
}

/// Translate a unit symbol for display
///
/// Unsupported languages use the English table. Units missing from the
/// table are returned as given.
pub fn translate_unit(unit: &str, language: &str) -> String {
    let table = match translation_table(language) {
        Some(table) => table,
        None => {
            tracing::debug!(
                "No unit translations for language '{}', using '{}'",
                language,
                FALLBACK_LANGUAGE
            );
            match UNIT_TRANSLATIONS.get(FALLBACK_LANGUAGE) {
                Some(table) => table,
                None => return unit.to_string(),
            }
        }
    };

    match table.get(&unit.trim().to_lowercase()) {
        Some(translated) => (*translated).to_string(),
        None => unit.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_tbsp_spanish() {
        assert_eq!(translate_unit("tbsp", "es"), "cda");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(translate_unit("tbsp", "xx-unknown"), "tbsp");
        assert_eq!(translate_unit("cups", "klingon"), "cups");
    }

    #[test]
    fn test_unknown_unit_passes_through() {
        assert_eq!(translate_unit("handful", "es"), "handful");
        assert_eq!(translate_unit("Handful", "xx"), "Handful");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(translate_unit("TBSP", "de"), "EL");
        assert_eq!(translate_unit("°c", "ar"), "°م");
        assert_eq!(translate_unit("°F", "ar"), "°ف");
    }

    #[test]
    fn test_language_tag_uses_primary_subtag() {
        assert_eq!(translate_unit("cup", "pt-BR"), "xícara");
        assert_eq!(translate_unit("cup", "ES_mx"), "taza");
        assert_eq!(normalize_language(" ZH-Hant "), "zh");
    }

    #[test]
    fn test_lookup_unit_translation_has_no_fallback() {
        assert_eq!(lookup_unit_translation("tsp", "ja"), Some("小さじ"));
        assert_eq!(lookup_unit_translation("tsp", "xx"), None);
        assert_eq!(lookup_unit_translation("handful", "en"), None);
    }

    #[test]
    fn test_every_language_covers_english_keys() {
        assert_eq!(SUPPORTED_LANGUAGES.len(), 15);
        let english = translation_table("en").unwrap();
        for language in SUPPORTED_LANGUAGES {
            let table = translation_table(language).unwrap();
            for key in english.keys() {
                assert!(
                    table.contains_key(key),
                    "language {} missing unit {}",
                    language,
                    key
                );
            }
        }
    }
}
