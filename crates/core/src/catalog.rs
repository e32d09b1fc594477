use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ListedProduct, ProductFamily};

/// Price lines per family, as printed on the storefront. Prices are display
/// strings, not amounts; nothing computes with them.
fn family_price_lines(family: ProductFamily) -> (&'static str, Option<&'static str>) {
    match family {
        ProductFamily::S24 => (
            "• S24: 22.990.000₫\n• S24+: 27.990.000₫\n• S24 Ultra: 29.990.000₫",
            Some("Bạn muốn xem chi tiết sản phẩm nào?"),
        ),
        ProductFamily::S25 => (
            "• S25: 24.990.000₫\n• S25+: 29.990.000₫\n• S25 Ultra: 33.990.000₫",
            Some("Đây là dòng flagship mới nhất!"),
        ),
        ProductFamily::ZFold => (
            "• Z Fold5: 41.990.000₫\n• Z Fold6: 43.990.000₫\n• Z Fold7: 44.990.000₫",
            Some("Điện thoại gập cao cấp nhất!"),
        ),
        ProductFamily::ZFlip => (
            "• Z Flip4: 23.990.000₫\n• Z Flip5: 25.990.000₫\n• Z Flip6: 26.990.000₫\n• Z Flip7: 28.990.000₫",
            None,
        ),
    }
}

/// The family price list shown for a price inquiry. The family display name
/// is the only templated piece of any reply.
pub fn family_price_list(family: ProductFamily) -> String {
    let (lines, closing) = family_price_lines(family);
    match closing {
        Some(closing) => format!(
            "{} có các phiên bản:\n{}\n\n{}",
            family.display_name(),
            lines,
            closing
        ),
        None => format!("{} có các phiên bản:\n{}", family.display_name(), lines),
    }
}

pub fn family_menu() -> &'static str {
    "Bạn muốn hỏi giá sản phẩm nào? Chúng tôi có:\n• Galaxy S Series (S24, S25)\n• Galaxy Z Fold (gập dọc)\n• Galaxy Z Flip (gập ngang)\n• Galaxy A Series\n• Phụ kiện"
}

static CARD_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"class="product-card""#).expect("card marker pattern is valid"));
static CARD_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"data-id="([^"]+)""#).expect("card id pattern is valid"));
static CARD_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"class="product-name"[^>]*>\s*([^<]+?)\s*<"#).expect("name pattern is valid")
});
static CARD_PRICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"class="product-price"[^>]*>\s*([^<]+?)\s*<"#).expect("price pattern is valid")
});

/// Scrape `{id, name, price}` triples out of a server-rendered product-card
/// fragment, one card at a time. Cards missing any of the three fields are
/// skipped.
pub fn harvest_products(fragment: &str) -> Vec<ListedProduct> {
    CARD_MARKER
        .split(fragment)
        .skip(1)
        .filter_map(|card| {
            let id = CARD_ID.captures(card)?;
            let name = CARD_NAME.captures(card)?;
            let price = CARD_PRICE.captures(card)?;
            Some(ListedProduct {
                id: id[1].to_string(),
                name: name[1].to_string(),
                price: price[1].to_string(),
            })
        })
        .collect()
}
