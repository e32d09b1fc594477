use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::{family_menu, family_price_list};
use crate::models::{Intent, ProductFamily, Reply};

/// Quick-reply labels attached to the greeting and fallback replies. When
/// activated they are resubmitted as if the user had typed them.
pub const QUICK_REPLIES: &[&str] = &["Giá sản phẩm", "Tư vấn mua hàng", "Bảo hành"];

/// One entry of the classifier. Rules are non-exclusive; the table order is
/// the priority contract and the first matching rule wins.
pub struct Rule {
    pub intent: Intent,
    pub matches: fn(&str) -> bool,
    pub respond: fn(&str) -> Reply,
}

pub static RULES: &[Rule] = &[
    Rule {
        intent: Intent::Greeting,
        matches: is_greeting,
        respond: greeting_reply,
    },
    Rule {
        intent: Intent::PriceInquiry,
        matches: is_price_inquiry,
        respond: price_reply,
    },
    Rule {
        intent: Intent::Recommendation,
        matches: is_recommendation_request,
        respond: recommendation_reply,
    },
    Rule {
        intent: Intent::Comparison,
        matches: is_comparison_request,
        respond: comparison_reply,
    },
    Rule {
        intent: Intent::Warranty,
        matches: is_warranty_question,
        respond: warranty_reply,
    },
    Rule {
        intent: Intent::Logistics,
        matches: is_logistics_question,
        respond: logistics_reply,
    },
    Rule {
        intent: Intent::Contact,
        matches: is_contact_question,
        respond: contact_reply,
    },
    Rule {
        intent: Intent::Unknown,
        matches: always,
        respond: fallback_reply,
    },
];

/// Map one normalized input line to its reply. Total: the last rule matches
/// everything, so every input gets exactly one reply.
pub fn classify(normalized: &str) -> Reply {
    RULES
        .iter()
        .find(|rule| (rule.matches)(normalized))
        .map(|rule| (rule.respond)(normalized))
        .unwrap_or_else(|| fallback_reply(normalized))
}

/// The fixed message the widget emits when a session opens, before any rule
/// has run.
pub fn opening_greeting() -> Reply {
    Reply::with_suggestions(
        Intent::Greeting,
        "Xin chào! 👋 Tôi là trợ lý ảo của SAMSUNG Center. Tôi có thể giúp gì cho bạn?",
        QUICK_REPLIES,
    )
}

static GREETING_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(xin chào|chào|hello|hi|hey)").expect("greeting pattern is valid")
});

fn is_greeting(text: &str) -> bool {
    GREETING_PREFIX.is_match(text)
}

fn is_price_inquiry(text: &str) -> bool {
    contains_any(text, &["giá", "bao nhiêu"])
}

fn is_recommendation_request(text: &str) -> bool {
    contains_any(text, &["tư vấn", "nên mua", "đề xuất"])
}

fn is_comparison_request(text: &str) -> bool {
    contains_any(text, &["so sánh", "khác nhau"])
}

fn is_warranty_question(text: &str) -> bool {
    contains_any(text, &["bảo hành", "đổi trả"])
}

fn is_logistics_question(text: &str) -> bool {
    contains_any(text, &["thanh toán", "giao hàng", "ship"])
}

fn is_contact_question(text: &str) -> bool {
    contains_any(text, &["liên hệ", "hotline", "địa chỉ"])
}

fn always(_: &str) -> bool {
    true
}

fn greeting_reply(_: &str) -> Reply {
    Reply::with_suggestions(
        Intent::Greeting,
        "Xin chào! Tôi có thể giúp bạn tìm sản phẩm Samsung phù hợp. Bạn đang quan tâm đến sản phẩm nào?",
        QUICK_REPLIES,
    )
}

fn price_reply(text: &str) -> Reply {
    let body = match ProductFamily::from_keywords(text) {
        Some(family) => family_price_list(family),
        None => family_menu().to_string(),
    };
    Reply::plain(Intent::PriceInquiry, body)
}

fn recommendation_reply(text: &str) -> Reply {
    let body = if contains_any(text, &["rẻ", "tiết kiệm", "budget"]) {
        "Với ngân sách tiết kiệm, tôi đề xuất:\n\n📱 Galaxy A Series:\n• A05: 3.490.000₫\n• A14: 4.490.000₫\n• A25: 6.290.000₫\n• A35: 8.490.000₫\n\nCác dòng A vẫn đảm bảo chất lượng Samsung với giá phải chăng!"
    } else if contains_any(text, &["cao cấp", "flagship", "tốt nhất"]) {
        "Dòng cao cấp nhất hiện tại:\n\n🌟 Galaxy S25 Ultra: 33.990.000₫\n• Chip Snapdragon 8 Gen 3\n• Camera 200MP\n• Bút S-Pen tích hợp\n• Pin 5000mAh\n\n📱 Galaxy Z Fold7: 44.990.000₫\n• Màn hình gập độc đáo\n• Đa nhiệm tuyệt vời\n• Trải nghiệm tablet/điện thoại 2 trong 1"
    } else if contains_any(text, &["chụp ảnh", "camera"]) {
        "Để chụp ảnh đẹp, tôi đề xuất:\n\n📸 S25 Ultra - Camera 200MP\n📸 S24 Ultra - Camera 200MP\n📸 S23 Ultra - Camera 200MP\n\nCả 3 đều có hệ thống camera xuất sắc với AI xử lý ảnh thông minh!"
    } else {
        "Để tư vấn chính xác, bạn cho tôi biết:\n\n1️⃣ Ngân sách dự kiến?\n2️⃣ Nhu cầu sử dụng chính (chơi game, chụp ảnh, làm việc)?\n3️⃣ Có thích màn hình gập không?"
    };
    Reply::plain(Intent::Recommendation, body)
}

fn comparison_reply(_: &str) -> Reply {
    Reply::plain(
        Intent::Comparison,
        "Bạn muốn so sánh sản phẩm nào?\n\nVí dụ: 'So sánh S24 và S25' hoặc 'Khác nhau giữa Fold và Flip'",
    )
}

fn warranty_reply(_: &str) -> Reply {
    Reply::plain(
        Intent::Warranty,
        "📋 Chính sách bảo hành:\n\n✅ Bảo hành chính hãng 12 tháng\n✅ Đổi trả trong 7 ngày nếu có lỗi\n✅ Hỗ trợ kỹ thuật 24/7\n✅ Bảo hành tận nơi\n\nBạn cần thông tin gì cụ thể hơn?",
    )
}

fn logistics_reply(_: &str) -> Reply {
    Reply::plain(
        Intent::Logistics,
        "💳 Thanh toán & Giao hàng:\n\n✅ COD (Thanh toán khi nhận hàng)\n✅ Chuyển khoản ngân hàng\n✅ Ví điện tử (MoMo, ZaloPay)\n✅ Miễn phí vận chuyển toàn quốc\n✅ Giao hàng trong 2-3 ngày\n\nBạn có thể đặt hàng ngay trên website!",
    )
}

fn contact_reply(_: &str) -> Reply {
    Reply::plain(
        Intent::Contact,
        "📞 Thông tin liên hệ:\n\n• Hotline: 1900-xxxx\n• Email: support@samsumcenter.vn\n• Địa chỉ: [Địa chỉ cửa hàng]\n• Giờ làm việc: 8h-22h hàng ngày\n\nBạn có thể liên hệ bất cứ lúc nào!",
    )
}

fn fallback_reply(_: &str) -> Reply {
    Reply::with_suggestions(
        Intent::Unknown,
        "Xin lỗi, tôi chưa hiểu câu hỏi của bạn. Bạn có thể hỏi tôi về:\n\n💰 Giá sản phẩm\n📱 Tư vấn mua hàng\n🔄 So sánh sản phẩm\n🛡️ Bảo hành\n🚚 Giao hàng & thanh toán\n📞 Liên hệ",
        QUICK_REPLIES,
    )
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
