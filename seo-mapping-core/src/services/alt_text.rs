use crate::model::language::Language;

const NAME_SLOT: &str = "{product_name}";

fn template(lang: Language) -> &'static str {
    match lang {
        Language::English => {
            "{product_name} - Premium Amusement Ride Equipment by Miying Manufacturer"
        }
        Language::Chinese => "{product_name} - 米盈优质游乐设备制造商",
        Language::Arabic => "{product_name} - معدات ألعاب ترفيهية عالية الجودة من شركة Miying",
        Language::Russian => {
            "{product_name} - Премиальное оборудование для аттракционов от производителя Miying"
        }
        Language::Japanese => "{product_name} - Miyingメーカーのプレミアムアトラクション設備",
        Language::Korean => "{product_name} - Miying 제조사의 프리미엄 놀이기구 장비",
        Language::Thai => "{product_name} - อุปกรณ์เครื่องเล่นคุณภาพสูงจากผู้ผลิต Miying",
        Language::Vietnamese => {
            "{product_name} - Thiết bị trò chơi giải trí cao cấp từ nhà sản xuất Miying"
        }
        Language::Indonesian => {
            "{product_name} - Peralatan Wahana Hiburan Premium dari Produsen Miying"
        }
        Language::Hindi => "{product_name} - Miying निर्माता द्वारा प्रीमियम मनोरंजन सवारी उपकरण",
        Language::Spanish => {
            "{product_name} - Equipamiento de Atracciones Premium del Fabricante Miying"
        }
    }
}

/// Alt text for `lang_code`; unknown codes get the English template.
/// Only the Chinese template carries the Chinese product name.
pub fn build_alt_text(name_en: &str, name_zh: &str, lang_code: &str) -> String {
    let lang = Language::from_code(lang_code).unwrap_or(Language::English);
    let name = match lang {
        Language::Chinese => name_zh,
        _ => name_en,
    };
    template(lang).replacen(NAME_SLOT, name, 1)
}
