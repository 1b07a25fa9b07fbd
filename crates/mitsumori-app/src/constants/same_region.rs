//! Default same-prefecture distances (同一都道府県内の固定距離)
//!
//! One entry per JIS prefecture code "01".."47". The pairwise distance
//! table never holds a row for a prefecture and itself, so these fixed
//! values apply to same-prefecture moves. Tariff files may override
//! individual entries via `[[same_region]]`.

use std::collections::HashMap;
use std::sync::LazyLock;

use mitsumori_domain::model::SameRegionTable;

use crate::repository;

/// Default fallback distance in km per prefecture code
pub static SAME_REGION_DISTANCES: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("01", 560.0); // 北海道
    m.insert("02", 205.0); // 青森県
    m.insert("03", 235.0); // 岩手県
    m.insert("04", 165.0); // 宮城県
    m.insert("05", 205.0); // 秋田県
    m.insert("06", 195.0); // 山形県
    m.insert("07", 225.0); // 福島県
    m.insert("08", 135.0); // 茨城県
    m.insert("09", 125.0); // 栃木県
    m.insert("10", 125.0); // 群馬県
    m.insert("11", 90.0); // 埼玉県
    m.insert("12", 100.0); // 千葉県
    m.insert("13", 50.0); // 東京都
    m.insert("14", 60.0); // 神奈川県
    m.insert("15", 175.0); // 新潟県
    m.insert("16", 90.0); // 富山県
    m.insert("17", 110.0); // 石川県
    m.insert("18", 90.0); // 福井県
    m.insert("19", 80.0); // 山梨県
    m.insert("20", 195.0); // 長野県
    m.insert("21", 135.0); // 岐阜県
    m.insert("22", 135.0); // 静岡県
    m.insert("23", 125.0); // 愛知県
    m.insert("24", 125.0); // 三重県
    m.insert("25", 80.0); // 滋賀県
    m.insert("26", 70.0); // 京都府
    m.insert("27", 60.0); // 大阪府
    m.insert("28", 80.0); // 兵庫県
    m.insert("29", 50.0); // 奈良県
    m.insert("30", 70.0); // 和歌山県
    m.insert("31", 70.0); // 鳥取県
    m.insert("32", 80.0); // 島根県
    m.insert("33", 90.0); // 岡山県
    m.insert("34", 135.0); // 広島県
    m.insert("35", 90.0); // 山口県
    m.insert("36", 60.0); // 徳島県
    m.insert("37", 60.0); // 香川県
    m.insert("38", 80.0); // 愛媛県
    m.insert("39", 90.0); // 高知県
    m.insert("40", 100.0); // 福岡県
    m.insert("41", 70.0); // 佐賀県
    m.insert("42", 100.0); // 長崎県
    m.insert("43", 100.0); // 熊本県
    m.insert("44", 90.0); // 大分県
    m.insert("45", 100.0); // 宮崎県
    m.insert("46", 110.0); // 鹿児島県
    m.insert("47", 165.0); // 沖縄県

    m
});

/// Get the default same-prefecture distance for a code
pub fn get_same_region_distance(prefecture_id: &str) -> Option<f64> {
    SAME_REGION_DISTANCES.get(prefecture_id).copied()
}

/// Build the runtime table: compiled defaults plus tariff overrides
pub fn build_same_region_table(
    overrides: &[repository::SameRegionEntry],
) -> SameRegionTable {
    let mut table = SameRegionTable::default();
    for (code, km) in SAME_REGION_DISTANCES.iter() {
        table.set(code.to_string(), *km);
    }
    for entry in overrides {
        table.set(entry.prefecture_id.clone(), entry.distance_km);
    }
    table
}
