use serde::Serialize;

/// Target languages for filenames and alt text, in output order.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "th")]
    Thai,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::Chinese,
        Language::Arabic,
        Language::Russian,
        Language::Japanese,
        Language::Korean,
        Language::Thai,
        Language::Vietnamese,
        Language::Indonesian,
        Language::Hindi,
        Language::Spanish,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
            Language::Arabic => "ar",
            Language::Russian => "ru",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Thai => "th",
            Language::Vietnamese => "vi",
            Language::Indonesian => "id",
            Language::Hindi => "hi",
            Language::Spanish => "es",
        }
    }

    /// Lowercase country token used in filenames.
    pub const fn country(self) -> &'static str {
        match self {
            Language::English => "usa",
            Language::Chinese => "china",
            Language::Arabic => "saudi",
            Language::Russian => "russia",
            Language::Japanese => "japan",
            Language::Korean => "korea",
            Language::Thai => "thailand",
            Language::Vietnamese => "vietnam",
            Language::Indonesian => "indonesia",
            Language::Hindi => "india",
            Language::Spanish => "spain",
        }
    }

    /// Country name as written in the language itself.
    pub const fn country_name(self) -> &'static str {
        match self {
            Language::English => "USA",
            Language::Chinese => "中国",
            Language::Arabic => "السعودية",
            Language::Russian => "Россия",
            Language::Japanese => "日本",
            Language::Korean => "한국",
            Language::Thai => "ไทย",
            Language::Vietnamese => "Việt Nam",
            Language::Indonesian => "Indonesia",
            Language::Hindi => "भारत",
            Language::Spanish => "España",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
