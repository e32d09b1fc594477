use std::time::Duration;

use samsum_core::{harvest_products, Author, Intent};
use samsum_observability::AppMetrics;
use samsum_widget::{ChatWidget, WidgetConfig};

fn widget() -> ChatWidget {
    ChatWidget::new(
        WidgetConfig {
            typing_delay: Duration::ZERO,
            products: Vec::new(),
        },
        AppMetrics::shared(),
    )
}

#[tokio::test]
async fn full_session_flow() {
    let widget = widget();

    let greeting = widget
        .submit("Xin chào")
        .await
        .expect("widget is open")
        .expect("non-empty input");
    assert_eq!(greeting.intent, Intent::Greeting);
    assert_eq!(
        greeting.suggestions,
        vec!["Giá sản phẩm", "Tư vấn mua hàng", "Bảo hành"]
    );

    let prices = widget
        .submit("giá S24")
        .await
        .expect("widget is open")
        .expect("non-empty input");
    assert_eq!(prices.intent, Intent::PriceInquiry);
    assert!(prices.text.contains("• S24: 22.990.000₫"));
    assert!(prices.text.contains("• S24+: 27.990.000₫"));
    assert!(prices.text.contains("• S24 Ultra: 29.990.000₫"));

    let comparison = widget
        .submit("so sánh S24 và S25")
        .await
        .expect("widget is open")
        .expect("non-empty input");
    assert_eq!(comparison.intent, Intent::Comparison);
    assert!(!comparison.text.contains('₫'));

    // Opening greeting + three user/bot pairs.
    let transcript = widget.transcript();
    assert_eq!(transcript.len(), 7);
    assert!(transcript.windows(2).all(|pair| pair[0].seq < pair[1].seq));
}

#[tokio::test]
async fn fallback_reply_carries_topic_menu() {
    let widget = widget();
    let reply = widget
        .submit("blah blah")
        .await
        .expect("widget is open")
        .expect("non-empty input");
    assert_eq!(reply.intent, Intent::Unknown);
    assert!(reply.text.starts_with("Xin lỗi, tôi chưa hiểu câu hỏi của bạn."));
    assert!(reply.text.contains("🚚 Giao hàng & thanh toán"));
    assert_eq!(reply.suggestions.len(), 3);
}

#[tokio::test]
async fn tapping_a_greeting_suggestion_reenters_the_pipeline() {
    let widget = widget();
    let transcript = widget.transcript();
    let label = transcript[0].suggestions[0].clone();
    assert_eq!(label, "Giá sản phẩm");

    let reply = widget
        .activate_suggestion(&label)
        .await
        .expect("widget is open")
        .expect("label is non-empty");
    // "Giá sản phẩm" names no family, so the generic menu comes back.
    assert_eq!(reply.intent, Intent::PriceInquiry);
    assert!(reply.text.starts_with("Bạn muốn hỏi giá sản phẩm nào?"));

    // The label landed in the transcript exactly as typed input would.
    let transcript = widget.transcript();
    assert_eq!(transcript[1].author, Author::User);
    assert_eq!(transcript[1].text, label);
}

#[tokio::test]
async fn harvested_products_reach_the_widget_unread() {
    let fragment = r#"
        <div class="product-card" data-id="12">
          <span class="product-name">Galaxy Z Flip6</span>
          <span class="product-price">26.990.000₫</span>
        </div>
    "#;
    let widget = ChatWidget::new(
        WidgetConfig {
            typing_delay: Duration::ZERO,
            products: harvest_products(fragment),
        },
        AppMetrics::shared(),
    );

    assert_eq!(widget.products().len(), 1);
    assert_eq!(widget.products()[0].name, "Galaxy Z Flip6");

    // The harvested list never influences classification.
    let reply = widget
        .submit("giá flip")
        .await
        .expect("widget is open")
        .expect("non-empty input");
    assert!(reply.text.contains("• Z Flip6: 26.990.000₫"));
}

#[tokio::test]
async fn metrics_track_the_session() {
    let metrics = AppMetrics::shared();
    let widget = ChatWidget::new(
        WidgetConfig {
            typing_delay: Duration::ZERO,
            products: Vec::new(),
        },
        metrics.clone(),
    );

    widget.submit("").await.expect("widget is open");
    widget.submit("giá s25").await.expect("widget is open");
    widget.submit("???").await.expect("widget is open");

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.messages_total, 2);
    assert_eq!(snapshot.empty_ignored_total, 1);
    assert_eq!(snapshot.fallback_total, 1);
}

#[tokio::test]
async fn reply_serializes_with_line_breaks_intact() {
    let widget = widget();
    let reply = widget
        .submit("bảo hành")
        .await
        .expect("widget is open")
        .expect("non-empty input");

    let json = serde_json::to_value(&reply).expect("reply serializes");
    let text = json["text"].as_str().expect("text is a string");
    assert!(text.contains('\n'));
    assert_eq!(json["intent"], "warranty");
}
